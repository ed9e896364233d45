use crate::error::ParseError;

use super::token::{Assoc, Token};

/// Shunting-yard conversion of an infix token stream to RPN. Parens are
/// matched here and never reach the output.
pub(crate) fn to_postfix(tokens: Vec<Token>) -> Result<Vec<Token>, ParseError> {
    let mut output = Vec::with_capacity(tokens.len());
    let mut stack: Vec<Token> = vec![];

    for token in tokens {
        match token {
            Token::Number(_) => output.push(token),
            Token::Op(op) => {
                let info = op.info().ok_or(ParseError::UnknownOperator(op))?;

                while let Some(Token::Op(top)) = stack.last().copied() {
                    let top_info = top.info().ok_or(ParseError::UnknownOperator(top))?;

                    // Equal precedence only yields for left-associative
                    // operators; right-associative ties stay stacked.
                    if top_info.precedence > info.precedence
                        || (top_info.precedence == info.precedence && info.assoc == Assoc::Left)
                    {
                        stack.pop();
                        output.push(Token::Op(top));
                    } else {
                        break;
                    }
                }
                stack.push(token);
            }
            Token::LParen => stack.push(token),
            Token::RParen => loop {
                match stack.pop() {
                    None => return Err(ParseError::UnbalancedParens),
                    Some(Token::LParen) => break,
                    Some(pending) => output.push(pending),
                }
            },
        }
    }

    while let Some(pending) = stack.pop() {
        if let Token::LParen = pending {
            return Err(ParseError::UnbalancedParens);
        }
        output.push(pending);
    }

    log::debug!("postfix: {output:?}");

    Ok(output)
}

#[cfg(test)]
mod test {
    use super::{
        super::token::{Operator, Token},
        to_postfix,
    };
    use crate::{error::ParseError, syntax::tokenize};

    fn postfix_of(src: &str) -> Result<Vec<Token>, ParseError> {
        to_postfix(tokenize(src).unwrap())
    }

    #[test]
    fn precedence_ordering() {
        let postfix = postfix_of("2+3*4").unwrap();
        let expected = &[
            Token::Number(2.0),
            Token::Number(3.0),
            Token::Number(4.0),
            Token::Op(Operator::Mul),
            Token::Op(Operator::Plus),
        ];

        assert_eq!(postfix, expected);
    }

    #[test]
    fn unary_sign_applies_before_pow() {
        let postfix = postfix_of("-2^2").unwrap();
        let expected = &[
            Token::Number(2.0),
            Token::Op(Operator::UnaryMinus),
            Token::Number(2.0),
            Token::Op(Operator::Pow),
        ];

        assert_eq!(postfix, expected);
    }

    #[test]
    fn percent_binds_to_its_operand() {
        let postfix = postfix_of("200+10%").unwrap();
        let expected = &[
            Token::Number(200.0),
            Token::Number(10.0),
            Token::Op(Operator::Percent),
            Token::Op(Operator::Plus),
        ];

        assert_eq!(postfix, expected);
    }

    #[test]
    fn parens_are_discarded() {
        let postfix = postfix_of("(2+3)*4").unwrap();
        let expected = &[
            Token::Number(2.0),
            Token::Number(3.0),
            Token::Op(Operator::Plus),
            Token::Number(4.0),
            Token::Op(Operator::Mul),
        ];

        assert_eq!(postfix, expected);
    }

    #[test]
    fn unbalanced_parens() {
        assert_eq!(postfix_of("(1+2"), Err(ParseError::UnbalancedParens));
        assert_eq!(postfix_of("1+2)"), Err(ParseError::UnbalancedParens));
    }
}

use std::{iter::Peekable, str::CharIndices};

use crate::error::LexError;

use super::token::{Operator, Token};

pub(crate) struct Lexer<'src> {
    src: &'src str,
    chars: Peekable<CharIndices<'src>>,
    prev: Option<Token>,
}

pub(crate) fn tokenize(src: &str) -> Result<Vec<Token>, LexError> {
    Lexer::new(src).collect()
}

impl<'src> Iterator for Lexer<'src> {
    type Item = Result<Token, LexError>;

    fn next(&mut self) -> Option<Self::Item> {
        let token = match self.chars.next() {
            None => return None,
            Some((_, '(')) => Token::LParen,
            Some((_, ')')) => Token::RParen,
            Some((_, '*')) => Token::Op(Operator::Mul),
            Some((_, '/')) => Token::Op(Operator::Div),
            Some((_, '^')) => Token::Op(Operator::Pow),
            Some((_, '%')) => Token::Op(Operator::Percent),
            Some((_, '+')) => Token::Op(self.sign(Operator::UnaryPlus, Operator::Plus)),
            Some((_, '-')) => Token::Op(self.sign(Operator::UnaryMinus, Operator::Minus)),
            Some((off, c)) => {
                if c.is_whitespace() {
                    return self.next();
                }
                if c.is_ascii_digit() || c == '.' {
                    match self.read_number(off) {
                        Ok(token) => token,
                        Err(e) => return Some(Err(e)),
                    }
                } else {
                    return Some(Err(LexError::UnexpectedChar(c)));
                }
            }
        };

        self.prev = Some(token);
        Some(Ok(token))
    }
}

impl<'src> Lexer<'src> {
    pub fn new(src: &'src str) -> Self {
        Self {
            src,
            chars: src.char_indices().peekable(),
            prev: None,
        }
    }

    /// A sign is unary at the start of the stream, right after another
    /// operator, or right after `(`.
    fn sign(&self, unary: Operator, binary: Operator) -> Operator {
        match self.prev {
            None | Some(Token::Op(_)) | Some(Token::LParen) => unary,
            _ => binary,
        }
    }

    #[inline]
    fn bump(&mut self) {
        let _ = self.chars.next();
    }

    fn slice_until<P>(&mut self, from_off: usize, predicate: P) -> &'src str
    where
        P: Fn(char) -> bool,
    {
        while let Some(&(off, c)) = self.chars.peek() {
            if predicate(c) {
                return &self.src[from_off..off];
            }
            self.bump();
        }
        &self.src[from_off..self.src.len()]
    }

    fn read_number(&mut self, from_off: usize) -> Result<Token, LexError> {
        let s = self.slice_until(from_off, |c| !c.is_ascii_digit() && c != '.');

        if s.bytes().filter(|b| *b == b'.').count() > 1 {
            return Err(LexError::MalformedNumber(s.to_string()));
        }
        s.parse::<f64>()
            .map(Token::Number)
            .map_err(|_| LexError::MalformedNumber(s.to_string()))
    }
}

#[cfg(test)]
mod test {
    use super::{
        super::token::{Operator, Token},
        tokenize,
    };
    use crate::error::LexError;

    #[test]
    fn read_number() {
        let tokens = tokenize("48.5 7 1024 \n9").unwrap();
        let expected = &[
            Token::Number(48.5),
            Token::Number(7.0),
            Token::Number(1024.0),
            Token::Number(9.0),
        ];

        assert_eq!(tokens, expected);
    }

    #[test]
    fn whitespace_is_insignificant() {
        assert_eq!(tokenize("1 + 2").unwrap(), tokenize("1+2").unwrap());
        assert_eq!(tokenize("\t( 3 )\t").unwrap(), tokenize("(3)").unwrap());
    }

    #[test]
    fn classify_signs() {
        let tokens = tokenize("-5+(-3)*-2").unwrap();
        let expected = &[
            Token::Op(Operator::UnaryMinus),
            Token::Number(5.0),
            Token::Op(Operator::Plus),
            Token::LParen,
            Token::Op(Operator::UnaryMinus),
            Token::Number(3.0),
            Token::RParen,
            Token::Op(Operator::Mul),
            Token::Op(Operator::UnaryMinus),
            Token::Number(2.0),
        ];

        assert_eq!(tokens, expected);
    }

    #[test]
    fn sign_after_operator_is_unary() {
        let tokens = tokenize("2--3").unwrap();
        let expected = &[
            Token::Number(2.0),
            Token::Op(Operator::Minus),
            Token::Op(Operator::UnaryMinus),
            Token::Number(3.0),
        ];

        assert_eq!(tokens, expected);
    }

    #[test]
    fn malformed_number() {
        assert_eq!(
            tokenize("1.2.3"),
            Err(LexError::MalformedNumber("1.2.3".into()))
        );
        assert_eq!(tokenize("."), Err(LexError::MalformedNumber(".".into())));
    }

    #[test]
    fn unexpected_char() {
        assert_eq!(tokenize("4 $ 2"), Err(LexError::UnexpectedChar('$')));
        assert_eq!(tokenize("sqrt(4)"), Err(LexError::UnexpectedChar('s')));
    }
}

use crate::{
    error::{EvalError, PResult},
    syntax::{
        to_postfix,
        token::{Operator, Token},
        tokenize,
    },
};

/// Runs the whole pipeline over one expression.
pub(crate) fn eval_str(src: &str) -> PResult<f64> {
    let tokens = tokenize(src)?;
    let postfix = to_postfix(tokens)?;
    let value = evaluate(&postfix)?;

    Ok(value)
}

/// Reduces an RPN token sequence to a single value over an operand stack.
/// Returns the raw f64 even when it is NaN or infinite; classifying those
/// is the caller's concern.
pub(crate) fn evaluate(postfix: &[Token]) -> Result<f64, EvalError> {
    let mut stack: Vec<f64> = vec![];

    for token in postfix {
        match token {
            Token::Number(v) => stack.push(*v),
            Token::Op(op) => {
                let value = match op.info() {
                    Some(info) if info.arity == 1 => {
                        let a = pop(&mut stack)?;
                        match op {
                            Operator::UnaryMinus => -a,
                            Operator::Percent => a / 100.0,
                            _ => a,
                        }
                    }
                    Some(_) => {
                        let b = pop(&mut stack)?;
                        let a = pop(&mut stack)?;
                        apply_binary(*op, a, b)?
                    }
                    None => return Err(EvalError::MalformedExpression),
                };
                stack.push(value);
            }
            // Parens are matched away during conversion.
            Token::LParen | Token::RParen => return Err(EvalError::MalformedExpression),
        }
    }

    match (stack.pop(), stack.pop()) {
        (Some(value), None) => Ok(value),
        _ => Err(EvalError::MalformedExpression),
    }
}

fn pop(stack: &mut Vec<f64>) -> Result<f64, EvalError> {
    stack.pop().ok_or(EvalError::MissingOperand)
}

fn apply_binary(op: Operator, a: f64, b: f64) -> Result<f64, EvalError> {
    let value = match op {
        Operator::Plus => a + b,
        Operator::Minus => a - b,
        Operator::Mul => a * b,
        Operator::Div => {
            if b == 0.0 {
                return Err(EvalError::DivisionByZero);
            }
            a / b
        }
        Operator::Pow => a.powf(b),
        _ => return Err(EvalError::MalformedExpression),
    };

    Ok(value)
}

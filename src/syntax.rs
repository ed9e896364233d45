mod lexer;
mod postfix;
pub(crate) mod token;

pub(crate) use lexer::tokenize;
pub(crate) use postfix::to_postfix;
pub(crate) use token::{Operator, Token};

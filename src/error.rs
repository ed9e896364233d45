use std::fmt;

use crate::syntax::Operator;

#[derive(Debug, PartialEq, Clone)]
pub(crate) enum LexError {
    /// More than one decimal point in a literal, or an unparsable digit run.
    MalformedNumber(String),
    UnexpectedChar(char),
}

#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub(crate) enum ParseError {
    UnbalancedParens,
    /// Operator missing from the metadata table. Unreachable with the
    /// lexer's fixed symbol set, kept so a table edit fails loudly.
    UnknownOperator(Operator),
}

#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub(crate) enum EvalError {
    MissingOperand,
    DivisionByZero,
    MalformedExpression,
}

#[derive(Debug, PartialEq, Clone)]
pub(crate) enum ErrorKind {
    Lex(LexError),
    Parse(ParseError),
    Eval(EvalError),
}

pub(crate) type PResult<T> = Result<T, ErrorKind>;

impl From<LexError> for ErrorKind {
    fn from(e: LexError) -> Self {
        Self::Lex(e)
    }
}

impl From<ParseError> for ErrorKind {
    fn from(e: ParseError) -> Self {
        Self::Parse(e)
    }
}

impl From<EvalError> for ErrorKind {
    fn from(e: EvalError) -> Self {
        Self::Eval(e)
    }
}

impl fmt::Display for LexError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::MalformedNumber(text) => write!(f, "malformed number `{text}`"),
            Self::UnexpectedChar(c) => write!(f, "unexpected character `{c}`"),
        }
    }
}

impl fmt::Display for ParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::UnbalancedParens => write!(f, "unbalanced parentheses"),
            Self::UnknownOperator(op) => write!(f, "unknown operator `{}`", op.symbol()),
        }
    }
}

impl fmt::Display for EvalError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::MissingOperand => write!(f, "operator is missing an operand"),
            Self::DivisionByZero => write!(f, "division by zero"),
            Self::MalformedExpression => write!(f, "malformed expression"),
        }
    }
}

impl fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Lex(e) => write!(f, "{e}"),
            Self::Parse(e) => write!(f, "{e}"),
            Self::Eval(e) => write!(f, "{e}"),
        }
    }
}

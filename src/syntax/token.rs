#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Operator {
    UnaryPlus,
    UnaryMinus,
    Percent,

    Plus,
    Minus,
    Mul,
    Div,
    Pow,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Assoc {
    Left,
    Right,
}

pub(crate) type Precedence = u8;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct OpInfo {
    pub precedence: Precedence,
    pub arity: u8,
    pub assoc: Assoc,
}

/// Fixed precedence/associativity table. Higher precedence binds tighter.
/// Unary sign (5) outranks `^` (4), so `-2^2` groups as `(-2)^2`.
pub(crate) const OPERATOR_TABLE: &[(Operator, OpInfo)] = &[
    (Operator::Percent,    OpInfo { precedence: 6, arity: 1, assoc: Assoc::Right }),
    (Operator::UnaryPlus,  OpInfo { precedence: 5, arity: 1, assoc: Assoc::Right }),
    (Operator::UnaryMinus, OpInfo { precedence: 5, arity: 1, assoc: Assoc::Right }),
    (Operator::Pow,        OpInfo { precedence: 4, arity: 2, assoc: Assoc::Right }),
    (Operator::Mul,        OpInfo { precedence: 3, arity: 2, assoc: Assoc::Left }),
    (Operator::Div,        OpInfo { precedence: 3, arity: 2, assoc: Assoc::Left }),
    (Operator::Plus,       OpInfo { precedence: 2, arity: 2, assoc: Assoc::Left }),
    (Operator::Minus,      OpInfo { precedence: 2, arity: 2, assoc: Assoc::Left }),
];

impl Operator {
    pub fn info(self) -> Option<OpInfo> {
        OPERATOR_TABLE
            .iter()
            .find(|(op, _)| *op == self)
            .map(|(_, info)| *info)
    }

    pub fn symbol(self) -> &'static str {
        match self {
            Self::UnaryPlus => "u+",
            Self::UnaryMinus => "u-",
            Self::Percent => "%",
            Self::Plus => "+",
            Self::Minus => "-",
            Self::Mul => "*",
            Self::Div => "/",
            Self::Pow => "^",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub(crate) enum Token {
    Number(f64),
    Op(Operator),

    LParen,
    RParen,
}

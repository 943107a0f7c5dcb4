use serde::{Deserialize, Serialize};

/// Precedence of `NOT`.
pub const PREC_NOT: u8 = 3;
/// Precedence of comparisons, and of the `IS NULL` / `IN` / `BETWEEN` forms.
pub const PREC_COMPARISON: u8 = 4;
/// Precedence of prefix `-`, `+` and `~`.
pub const PREC_UNARY: u8 = 10;
/// Precedence of anything that never needs wrapping (leaves, calls, parenthesized forms).
pub const PREC_ATOM: u8 = u8::MAX;

/// Binary operators.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum BinaryOperator {
    Or,
    And,
    Eq,
    NotEq,
    Lt,
    LtEq,
    Gt,
    GtEq,
    Like,
    NotLike,
    /// String concatenation (`||`)
    Concat,
    BitOr,
    BitAnd,
    Add,
    Sub,
    Mul,
    Div,
    /// Modulo (%)
    Mod,
}

impl BinaryOperator {
    /// Binding strength; higher binds tighter.
    pub fn precedence(self) -> u8 {
        match self {
            BinaryOperator::Or => 1,
            BinaryOperator::And => 2,
            BinaryOperator::Eq
            | BinaryOperator::NotEq
            | BinaryOperator::Lt
            | BinaryOperator::LtEq
            | BinaryOperator::Gt
            | BinaryOperator::GtEq
            | BinaryOperator::Like
            | BinaryOperator::NotLike => PREC_COMPARISON,
            BinaryOperator::Concat => 5,
            BinaryOperator::BitOr => 6,
            BinaryOperator::BitAnd => 7,
            BinaryOperator::Add | BinaryOperator::Sub => 8,
            BinaryOperator::Mul | BinaryOperator::Div | BinaryOperator::Mod => 9,
        }
    }

    /// `a op (b op c)` means the same as `(a op b) op c`.
    pub fn is_associative(self) -> bool {
        matches!(
            self,
            BinaryOperator::Or
                | BinaryOperator::And
                | BinaryOperator::Concat
                | BinaryOperator::BitOr
                | BinaryOperator::BitAnd
                | BinaryOperator::Add
                | BinaryOperator::Mul
        )
    }

    /// Word operators follow the keyword casing preference.
    pub fn is_keyword(self) -> bool {
        matches!(
            self,
            BinaryOperator::Or | BinaryOperator::And | BinaryOperator::Like | BinaryOperator::NotLike
        )
    }
}

impl std::fmt::Display for BinaryOperator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let token = match self {
            BinaryOperator::Or => "OR",
            BinaryOperator::And => "AND",
            BinaryOperator::Eq => "=",
            BinaryOperator::NotEq => "<>",
            BinaryOperator::Lt => "<",
            BinaryOperator::LtEq => "<=",
            BinaryOperator::Gt => ">",
            BinaryOperator::GtEq => ">=",
            BinaryOperator::Like => "LIKE",
            BinaryOperator::NotLike => "NOT LIKE",
            BinaryOperator::Concat => "||",
            BinaryOperator::BitOr => "|",
            BinaryOperator::BitAnd => "&",
            BinaryOperator::Add => "+",
            BinaryOperator::Sub => "-",
            BinaryOperator::Mul => "*",
            BinaryOperator::Div => "/",
            BinaryOperator::Mod => "%",
        };
        write!(f, "{}", token)
    }
}

/// Prefix operators.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum UnaryOperator {
    Not,
    Minus,
    Plus,
    BitNot,
}

impl UnaryOperator {
    pub fn precedence(self) -> u8 {
        match self {
            UnaryOperator::Not => PREC_NOT,
            UnaryOperator::Minus | UnaryOperator::Plus | UnaryOperator::BitNot => PREC_UNARY,
        }
    }
}

impl std::fmt::Display for UnaryOperator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            UnaryOperator::Not => write!(f, "NOT"),
            UnaryOperator::Minus => write!(f, "-"),
            UnaryOperator::Plus => write!(f, "+"),
            UnaryOperator::BitNot => write!(f, "~"),
        }
    }
}

/// Sort direction for ORDER BY items and index columns.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SortOrder {
    Asc,
    Desc,
}

impl std::fmt::Display for SortOrder {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SortOrder::Asc => write!(f, "ASC"),
            SortOrder::Desc => write!(f, "DESC"),
        }
    }
}

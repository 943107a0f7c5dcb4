use crate::ast::operators::{PREC_ATOM, PREC_COMPARISON};
use crate::ast::{BinaryOperator, Ident, Literal, Query, UnaryOperator};
use serde::{Deserialize, Serialize};

/// A SQL expression.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Expr {
    Identifier(Ident),
    /// Qualified reference: `owner.name` (owner may itself be qualified)
    Property { owner: Box<Expr>, name: Ident },
    /// `*` or `owner.*`
    AllColumns { owner: Option<Box<Expr>> },
    Literal(Literal),
    /// Bind marker kept verbatim (`?`, `$1`, `:name`)
    Placeholder(String),
    Binary {
        left: Box<Expr>,
        op: BinaryOperator,
        right: Box<Expr>,
    },
    Unary { op: UnaryOperator, expr: Box<Expr> },
    IsNull { expr: Box<Expr>, negated: bool },
    InList {
        expr: Box<Expr>,
        list: Vec<Expr>,
        negated: bool,
    },
    InSubquery {
        expr: Box<Expr>,
        query: Box<Query>,
        negated: bool,
    },
    Between {
        expr: Box<Expr>,
        low: Box<Expr>,
        high: Box<Expr>,
        negated: bool,
    },
    /// Function or aggregate call; `COUNT(*)` passes `AllColumns` as its argument
    Function {
        owner: Option<Box<Expr>>,
        name: String,
        args: Vec<Expr>,
        distinct: bool,
    },
    Cast {
        expr: Box<Expr>,
        data_type: DataType,
    },
    Case {
        operand: Option<Box<Expr>>,
        when_then: Vec<(Expr, Expr)>,
        else_result: Option<Box<Expr>>,
    },
    Exists { query: Box<Query>, negated: bool },
    Subquery(Box<Query>),
    /// Row value: `(a, b)`
    Tuple(Vec<Expr>),
    /// Explicit parentheses from the source
    Nested(Box<Expr>),
    /// `DEFAULT` inside VALUES or SET
    Default,
}

impl Expr {
    /// Binding strength of this expression as an operand; see [`BinaryOperator::precedence`].
    pub fn precedence(&self) -> u8 {
        match self {
            Expr::Binary { op, .. } => op.precedence(),
            Expr::Unary { op, .. } => op.precedence(),
            Expr::IsNull { .. }
            | Expr::InList { .. }
            | Expr::InSubquery { .. }
            | Expr::Between { .. } => PREC_COMPARISON,
            _ => PREC_ATOM,
        }
    }

    pub fn is_literal(&self) -> bool {
        matches!(self, Expr::Literal(_))
    }
}

impl From<Literal> for Expr {
    fn from(value: Literal) -> Self {
        Expr::Literal(value)
    }
}

impl From<Ident> for Expr {
    fn from(value: Ident) -> Self {
        Expr::Identifier(value)
    }
}

/// A column or cast type: `VARCHAR(255)`, `DECIMAL(10, 2)`, `TIMESTAMP`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DataType {
    pub name: String,
    #[serde(default)]
    pub args: Vec<u64>,
}

impl DataType {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            args: Vec::new(),
        }
    }

    pub fn with_args(name: impl Into<String>, args: &[u64]) -> Self {
        Self {
            name: name.into(),
            args: args.to_vec(),
        }
    }
}

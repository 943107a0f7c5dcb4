//! Query expressions: SELECT bodies, set operations, table sources.

use crate::ast::{CommentHint, Expr, Ident, SortOrder, ValuesClause};
use serde::{Deserialize, Serialize};

/// A complete query: optional WITH, a body, ORDER BY and LIMIT.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Query {
    #[serde(default)]
    pub with: Option<With>,
    pub body: SetExpr,
    #[serde(default)]
    pub order_by: Vec<OrderByItem>,
    #[serde(default)]
    pub limit: Option<Limit>,
}

impl Query {
    pub fn new(body: SetExpr) -> Self {
        Self {
            with: None,
            body,
            order_by: Vec::new(),
            limit: None,
        }
    }

    pub fn order_by(mut self, items: Vec<OrderByItem>) -> Self {
        self.order_by = items;
        self
    }

    pub fn limit(mut self, row_count: Option<Expr>, offset: Option<Expr>) -> Self {
        self.limit = Some(Limit { row_count, offset });
        self
    }
}

impl From<Select> for Query {
    fn from(select: Select) -> Self {
        Query::new(SetExpr::Select(Box::new(select)))
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct With {
    #[serde(default)]
    pub recursive: bool,
    pub ctes: Vec<Cte>,
}

/// Common table expression: `name (cols) AS (query)`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Cte {
    pub name: Ident,
    #[serde(default)]
    pub columns: Vec<Ident>,
    pub query: Box<Query>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum SetExpr {
    Select(Box<Select>),
    SetOperation {
        left: Box<SetExpr>,
        op: SetOperator,
        all: bool,
        right: Box<SetExpr>,
    },
    Values(Vec<ValuesClause>),
    Query(Box<Query>),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SetOperator {
    Union,
    Intersect,
    Except,
}

impl std::fmt::Display for SetOperator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SetOperator::Union => write!(f, "UNION"),
            SetOperator::Intersect => write!(f, "INTERSECT"),
            SetOperator::Except => write!(f, "EXCEPT"),
        }
    }
}

/// A single SELECT block.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Select {
    #[serde(default)]
    pub hints: Vec<CommentHint>,
    #[serde(default)]
    pub distinct: bool,
    pub projection: Vec<SelectItem>,
    #[serde(default)]
    pub from: Option<TableSource>,
    #[serde(default)]
    pub selection: Option<Expr>,
    #[serde(default)]
    pub group_by: Vec<Expr>,
    #[serde(default)]
    pub having: Option<Expr>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SelectItem {
    pub expr: Expr,
    #[serde(default)]
    pub alias: Option<Ident>,
}

impl From<Expr> for SelectItem {
    fn from(expr: Expr) -> Self {
        Self { expr, alias: None }
    }
}

/// Something that can appear after FROM.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum TableSource {
    Table {
        name: Expr,
        alias: Option<Ident>,
    },
    Subquery {
        query: Box<Query>,
        alias: Option<Ident>,
    },
    Join {
        left: Box<TableSource>,
        kind: JoinKind,
        right: Box<TableSource>,
        constraint: Option<JoinConstraint>,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum JoinKind {
    /// Old-style comma join: `FROM a, b`
    Comma,
    Inner,
    Left,
    Right,
    Full,
    Cross,
}

impl JoinKind {
    pub fn keyword(self) -> &'static str {
        match self {
            JoinKind::Comma => ",",
            JoinKind::Inner => "JOIN",
            JoinKind::Left => "LEFT JOIN",
            JoinKind::Right => "RIGHT JOIN",
            JoinKind::Full => "FULL JOIN",
            JoinKind::Cross => "CROSS JOIN",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum JoinConstraint {
    On(Expr),
    Using(Vec<Ident>),
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OrderByItem {
    pub expr: Expr,
    #[serde(default)]
    pub order: Option<SortOrder>,
}

impl OrderByItem {
    pub fn asc(expr: Expr) -> Self {
        Self {
            expr,
            order: Some(SortOrder::Asc),
        }
    }

    pub fn desc(expr: Expr) -> Self {
        Self {
            expr,
            order: Some(SortOrder::Desc),
        }
    }
}

/// Row limiting clause. Either side may be absent.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Limit {
    #[serde(default)]
    pub row_count: Option<Expr>,
    #[serde(default)]
    pub offset: Option<Expr>,
}

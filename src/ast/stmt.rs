//! Statement nodes.

use crate::ast::{CommentHint, DataType, Expr, Ident, Query, SortOrder, TableSource};
use serde::{Deserialize, Serialize};

/// Top-level SQL statement.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Statement {
    Select(Query),
    Insert(InsertStatement),
    /// REPLACE-style upsert
    Replace(ReplaceStatement),
    Update(UpdateStatement),
    Delete(DeleteStatement),
    CreateTable(CreateTableStatement),
    CreateIndex(CreateIndexStatement),
    CreateDatabase(CreateDatabaseStatement),
    DropTable(DropTableStatement),
    DropIndex(DropIndexStatement),
    Truncate(TruncateStatement),
}

impl Statement {
    /// Short variant name, used in logs.
    pub fn kind(&self) -> &'static str {
        match self {
            Statement::Select(_) => "select",
            Statement::Insert(_) => "insert",
            Statement::Replace(_) => "replace",
            Statement::Update(_) => "update",
            Statement::Delete(_) => "delete",
            Statement::CreateTable(_) => "create_table",
            Statement::CreateIndex(_) => "create_index",
            Statement::CreateDatabase(_) => "create_database",
            Statement::DropTable(_) => "drop_table",
            Statement::DropIndex(_) => "drop_index",
            Statement::Truncate(_) => "truncate",
        }
    }
}

/// One parenthesized row of a VALUES list.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ValuesClause {
    pub values: Vec<Expr>,
}

impl ValuesClause {
    pub fn new(values: Vec<Expr>) -> Self {
        Self { values }
    }
}

/// `column = value` in SET lists.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Assignment {
    pub column: Expr,
    pub value: Expr,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InsertStatement {
    #[serde(default)]
    pub hints: Vec<CommentHint>,
    pub table: Expr,
    #[serde(default)]
    pub columns: Vec<Expr>,
    /// `None` means no VALUES clause; `Some(vec![])` renders `VALUES ()`.
    #[serde(default)]
    pub values: Option<Vec<ValuesClause>>,
    #[serde(default)]
    pub query: Option<Box<Query>>,
    #[serde(default)]
    pub on_conflict: Option<OnConflict>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OnConflict {
    /// Conflict target columns
    #[serde(default)]
    pub target: Vec<Expr>,
    pub action: ConflictAction,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum ConflictAction {
    DoNothing,
    DoUpdate(Vec<Assignment>),
}

/// Insert-or-replace. `columns` is the key-column list: REPLACE-style dialects print it as the
/// column list, MERGE-style dialects as the `KEY (...)` clause.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReplaceStatement {
    pub table: Expr,
    #[serde(default)]
    pub columns: Vec<Expr>,
    /// `None` means no VALUES clause; `Some(vec![])` renders `VALUES ()`.
    #[serde(default)]
    pub values: Option<Vec<ValuesClause>>,
    #[serde(default)]
    pub query: Option<Box<Query>>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UpdateStatement {
    #[serde(default)]
    pub hints: Vec<CommentHint>,
    pub table: TableSource,
    pub assignments: Vec<Assignment>,
    #[serde(default)]
    pub selection: Option<Expr>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DeleteStatement {
    #[serde(default)]
    pub hints: Vec<CommentHint>,
    pub table: TableSource,
    #[serde(default)]
    pub selection: Option<Expr>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CreateTableStatement {
    #[serde(default)]
    pub temporary: bool,
    #[serde(default)]
    pub if_not_exists: bool,
    pub name: Expr,
    pub columns: Vec<ColumnDefinition>,
    #[serde(default)]
    pub constraints: Vec<TableConstraint>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ColumnDefinition {
    pub name: Ident,
    pub data_type: DataType,
    #[serde(default)]
    pub options: Vec<ColumnOption>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum ColumnOption {
    NotNull,
    Null,
    Default(Expr),
    PrimaryKey,
    Unique,
    /// Engine-generated key values (AUTO_INCREMENT, IDENTITY, ...)
    AutoIncrement,
    Comment(String),
    Check(Expr),
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum TableConstraint {
    PrimaryKey {
        name: Option<Ident>,
        columns: Vec<Ident>,
    },
    Unique {
        name: Option<Ident>,
        columns: Vec<Ident>,
    },
    ForeignKey {
        name: Option<Ident>,
        columns: Vec<Ident>,
        foreign_table: Expr,
        referred_columns: Vec<Ident>,
    },
    Check {
        name: Option<Ident>,
        expr: Expr,
    },
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CreateIndexStatement {
    /// Index kind word as written (`UNIQUE`, `SPATIAL`, `FULLTEXT`, ...)
    #[serde(default)]
    pub kind: Option<String>,
    #[serde(default)]
    pub if_not_exists: bool,
    pub name: Expr,
    pub table: Expr,
    pub items: Vec<IndexColumn>,
    /// Access method (`BTREE`, `HASH`, `GIN`, ...)
    #[serde(default)]
    pub using: Option<String>,
}

/// An index key part; may be a plain column or a computed expression.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct IndexColumn {
    pub expr: Expr,
    #[serde(default)]
    pub order: Option<SortOrder>,
}

impl From<Expr> for IndexColumn {
    fn from(expr: Expr) -> Self {
        Self { expr, order: None }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CreateDatabaseStatement {
    #[serde(default)]
    pub if_not_exists: bool,
    pub name: Expr,
    #[serde(default)]
    pub character_set: Option<String>,
    #[serde(default)]
    pub collate: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DropTableStatement {
    #[serde(default)]
    pub if_exists: bool,
    pub names: Vec<Expr>,
    #[serde(default)]
    pub cascade: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DropIndexStatement {
    #[serde(default)]
    pub if_exists: bool,
    pub name: Expr,
    #[serde(default)]
    pub table: Option<Expr>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TruncateStatement {
    pub tables: Vec<Expr>,
}

//! Dialect rendering tests.
//!
//! Organized by dialect; `generic` covers the shared rules every dialect inherits and
//! `properties` the guarantees that hold across all of them.

mod bigquery;
mod duckdb;
mod h2;
mod mysql;
mod oracle;
mod snowflake;
mod sqlite;
mod sqlserver;

use crate::ast::builders::*;
use crate::ast::*;
use crate::dialect::Dialect;
use crate::render::Renderer;
use crate::visitor::Accept;

/// Render with lowercase keywords.
fn lower(node: &impl Accept, dialect: Dialect) -> String {
    let mut out = String::new();
    Renderer::new(&mut out, dialect)
        .uppercase(false)
        .render(node)
        .unwrap();
    out
}

/// `REPLACE INTO t1 (keys) VALUES rows`
fn upsert(keys: &[&str], values: Option<Vec<ValuesClause>>) -> Statement {
    Statement::Replace(ReplaceStatement {
        table: ident("t1"),
        columns: keys.iter().map(|k| ident(k)).collect(),
        values,
        query: None,
    })
}

fn insert_users(on_conflict: Option<OnConflict>) -> Statement {
    Statement::Insert(InsertStatement {
        hints: vec![],
        table: ident("users"),
        columns: vec![ident("id"), ident("name")],
        values: Some(vec![row(vec![int(1), text("a")])]),
        query: None,
        on_conflict,
    })
}

fn create_index(kind: Option<&str>, if_not_exists: bool, using: Option<&str>) -> Statement {
    Statement::CreateIndex(CreateIndexStatement {
        kind: kind.map(str::to_string),
        if_not_exists,
        name: ident("idx_users_email"),
        table: ident("users"),
        items: vec![IndexColumn::from(ident("email"))],
        using: using.map(str::to_string),
    })
}

fn create_database(if_not_exists: bool, charset: Option<&str>, collate: Option<&str>) -> Statement {
    Statement::CreateDatabase(CreateDatabaseStatement {
        if_not_exists,
        name: ident("app"),
        character_set: charset.map(str::to_string),
        collate: collate.map(str::to_string),
    })
}

/// `users (id BIGINT NOT NULL AUTO_INCREMENT, email VARCHAR(255) UNIQUE COMMENT 'login', pk)`
fn create_users_table() -> Statement {
    Statement::CreateTable(CreateTableStatement {
        temporary: false,
        if_not_exists: true,
        name: ident("users"),
        columns: vec![
            ColumnDefinition {
                name: Ident::new("id"),
                data_type: DataType::new("bigint"),
                options: vec![ColumnOption::NotNull, ColumnOption::AutoIncrement],
            },
            ColumnDefinition {
                name: Ident::new("email"),
                data_type: DataType::with_args("varchar", &[255]),
                options: vec![ColumnOption::Unique, ColumnOption::Comment("login".into())],
            },
        ],
        constraints: vec![TableConstraint::PrimaryKey {
            name: Some(Ident::new("pk_users")),
            columns: vec![Ident::new("id")],
        }],
    })
}

/// Expected CREATE TABLE text for [`create_users_table`] given each column's rendered options.
fn users_table_sql(id_options: &str, email_options: &str) -> String {
    format!(
        "CREATE TABLE IF NOT EXISTS users (\n\tid BIGINT{id_options},\n\temail VARCHAR(255){email_options},\n\tCONSTRAINT pk_users PRIMARY KEY (id)\n)"
    )
}

/// Grouped, joined, ordered and paged report query.
fn report_query() -> Query {
    let count = func("COUNT", vec![star()]);
    let select = Select {
        projection: vec![
            SelectItem::from(col("u.id")),
            SelectItem {
                expr: count.clone(),
                alias: Some(Ident::new("n")),
            },
        ],
        from: Some(TableSource::Join {
            left: Box::new(TableSource::Table {
                name: ident("users"),
                alias: Some(Ident::new("u")),
            }),
            kind: JoinKind::Left,
            right: Box::new(TableSource::Table {
                name: ident("orders"),
                alias: Some(Ident::new("o")),
            }),
            constraint: Some(JoinConstraint::On(eq(col("o.user_id"), col("u.id")))),
        }),
        selection: Some(eq(col("u.active"), boolean(true))),
        group_by: vec![col("u.id")],
        having: Some(binary(count, BinaryOperator::Gt, int(1))),
        ..Select::default()
    };
    Query::from(select)
        .order_by(vec![OrderByItem::desc(ident("n"))])
        .limit(Some(int(10)), Some(int(20)))
}

/// [`report_query`] up to (not including) its row-limiting clause, with `active` as rendered.
fn report_sql_head(active: &str) -> String {
    format!(
        "SELECT u.id, COUNT(*) AS n\nFROM users u\n\tLEFT JOIN orders o ON o.user_id = u.id\nWHERE u.active = {active}\nGROUP BY u.id\nHAVING COUNT(*) > 1\nORDER BY n DESC\n"
    )
}

fn drop_index(if_exists: bool) -> Statement {
    Statement::DropIndex(DropIndexStatement {
        if_exists,
        name: ident("idx_users_email"),
        table: Some(ident("users")),
    })
}

fn truncate_two() -> Statement {
    Statement::Truncate(TruncateStatement {
        tables: vec![ident("a"), ident("b")],
    })
}

/// `a || b || c`
fn concat_chain() -> Expr {
    binary(
        binary(col("a"), BinaryOperator::Concat, col("b")),
        BinaryOperator::Concat,
        col("c"),
    )
}

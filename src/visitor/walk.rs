//! Generic rendering rules.
//!
//! Each function renders one node variant the dialect-neutral way and recurses into children
//! through [`Accept`], so dialect overrides apply at every depth. Dialect visitors call these
//! directly when they only need to adjust part of a node.

use super::{Accept, OutputVisitor};
use crate::ast::*;
use crate::error::RenderResult;
use crate::printer::Printer;

// ---------- Shared pieces ----------

/// Leading comment hints, each followed by a space.
pub fn hints<V: OutputVisitor + ?Sized>(
    v: &V,
    p: &mut Printer<'_>,
    hints: &[CommentHint],
) -> RenderResult<()> {
    for hint in hints {
        hint.accept(v, p)?;
        p.print_char(' ')?;
    }
    Ok(())
}

/// SQL string literal text with embedded quotes doubled.
pub fn quote_string(value: &str) -> String {
    format!("'{}'", value.replace('\'', "''"))
}

/// Whether `ident` must be delimited for this dialect.
pub fn needs_quoting<V: OutputVisitor + ?Sized>(v: &V, ident: &Ident) -> bool {
    let name = ident.value.as_str();
    ident.quoted
        || name.is_empty()
        || v.is_reserved(name)
        || name.chars().any(|c| !c.is_alphanumeric() && c != '_')
        || name.chars().next().is_some_and(|c| c.is_numeric())
}

/// `(\n<indent+1>node\n<indent>`; the caller prints the parentheses.
fn indented<V: OutputVisitor + ?Sized, T: Accept + ?Sized>(
    v: &V,
    p: &mut Printer<'_>,
    node: &T,
) -> RenderResult<()> {
    p.inc_indent();
    p.println()?;
    node.accept(v, p)?;
    p.dec_indent();
    p.println()
}

/// ` (cols)` when `columns` is non-empty.
fn column_list<V: OutputVisitor + ?Sized, T: Accept>(
    v: &V,
    p: &mut Printer<'_>,
    columns: &[T],
) -> RenderResult<()> {
    if columns.is_empty() {
        return Ok(());
    }
    p.print_char(' ')?;
    p.print_paren_list(v, columns)
}

/// `VALUES (..), (..)`, or `VALUES ()` for a present but empty row list.
pub fn values_list<V: OutputVisitor + ?Sized>(
    v: &V,
    p: &mut Printer<'_>,
    rows: &[ValuesClause],
) -> RenderResult<()> {
    p.print_ucase("VALUES ")?;
    if rows.is_empty() {
        return p.print_empty_marker();
    }
    p.print_comma_list(v, rows)
}

/// The row source of an insert-like statement: literal rows if present, else the query.
pub fn row_source<V: OutputVisitor + ?Sized>(
    v: &V,
    p: &mut Printer<'_>,
    values: Option<&[ValuesClause]>,
    query: Option<&Query>,
) -> RenderResult<()> {
    if let Some(rows) = values {
        p.println()?;
        values_list(v, p, rows)?;
    } else if let Some(query) = query {
        p.println()?;
        query.accept(v, p)?;
    }
    Ok(())
}

fn if_exists(p: &mut Printer<'_>, set: bool) -> RenderResult<()> {
    if set {
        p.print_ucase("IF EXISTS ")?;
    }
    Ok(())
}

fn if_not_exists(p: &mut Printer<'_>, set: bool) -> RenderResult<()> {
    if set {
        p.print_ucase("IF NOT EXISTS ")?;
    }
    Ok(())
}

// ---------- Statements ----------

pub fn insert<V: OutputVisitor + ?Sized>(
    v: &V,
    p: &mut Printer<'_>,
    x: &InsertStatement,
) -> RenderResult<()> {
    p.print_ucase("INSERT ")?;
    hints(v, p, &x.hints)?;
    p.print_ucase("INTO ")?;
    x.table.accept(v, p)?;
    column_list(v, p, &x.columns)?;
    row_source(v, p, x.values.as_deref(), x.query.as_deref())?;
    if let Some(on_conflict) = &x.on_conflict {
        on_conflict.accept(v, p)?;
    }
    Ok(())
}

pub fn on_conflict<V: OutputVisitor + ?Sized>(
    v: &V,
    p: &mut Printer<'_>,
    x: &OnConflict,
) -> RenderResult<()> {
    p.println()?;
    p.print_ucase("ON CONFLICT")?;
    column_list(v, p, &x.target)?;
    match &x.action {
        ConflictAction::DoNothing => p.print_ucase(" DO NOTHING"),
        ConflictAction::DoUpdate(assignments) => {
            p.print_ucase(" DO UPDATE SET ")?;
            p.print_comma_list(v, assignments)
        }
    }
}

pub fn replace<V: OutputVisitor + ?Sized>(
    v: &V,
    p: &mut Printer<'_>,
    x: &ReplaceStatement,
) -> RenderResult<()> {
    p.print_ucase("REPLACE INTO ")?;
    x.table.accept(v, p)?;
    column_list(v, p, &x.columns)?;
    row_source(v, p, x.values.as_deref(), x.query.as_deref())
}

pub fn update<V: OutputVisitor + ?Sized>(
    v: &V,
    p: &mut Printer<'_>,
    x: &UpdateStatement,
) -> RenderResult<()> {
    p.print_ucase("UPDATE ")?;
    hints(v, p, &x.hints)?;
    x.table.accept(v, p)?;
    p.println()?;
    p.print_ucase("SET ")?;
    p.print_comma_list(v, &x.assignments)?;
    if let Some(selection) = &x.selection {
        p.println()?;
        p.print_ucase("WHERE ")?;
        selection.accept(v, p)?;
    }
    Ok(())
}

pub fn delete<V: OutputVisitor + ?Sized>(
    v: &V,
    p: &mut Printer<'_>,
    x: &DeleteStatement,
) -> RenderResult<()> {
    p.print_ucase("DELETE ")?;
    hints(v, p, &x.hints)?;
    p.print_ucase("FROM ")?;
    x.table.accept(v, p)?;
    if let Some(selection) = &x.selection {
        p.println()?;
        p.print_ucase("WHERE ")?;
        selection.accept(v, p)?;
    }
    Ok(())
}

pub fn assignment<V: OutputVisitor + ?Sized>(
    v: &V,
    p: &mut Printer<'_>,
    x: &Assignment,
) -> RenderResult<()> {
    x.column.accept(v, p)?;
    p.print(" = ")?;
    x.value.accept(v, p)
}

pub fn create_table<V: OutputVisitor + ?Sized>(
    v: &V,
    p: &mut Printer<'_>,
    x: &CreateTableStatement,
) -> RenderResult<()> {
    p.print_ucase("CREATE ")?;
    if x.temporary {
        p.print_ucase("TEMPORARY ")?;
    }
    p.print_ucase("TABLE ")?;
    if_not_exists(p, x.if_not_exists)?;
    x.name.accept(v, p)?;
    p.print(" (")?;

    p.inc_indent();
    let mut first = true;
    for column in &x.columns {
        if !first {
            p.print_char(',')?;
        }
        first = false;
        p.println()?;
        column.accept(v, p)?;
    }
    for constraint in &x.constraints {
        if !first {
            p.print_char(',')?;
        }
        first = false;
        p.println()?;
        constraint.accept(v, p)?;
    }
    p.dec_indent();

    p.println()?;
    p.print_char(')')
}

pub fn column_definition<V: OutputVisitor + ?Sized>(
    v: &V,
    p: &mut Printer<'_>,
    x: &ColumnDefinition,
) -> RenderResult<()> {
    x.name.accept(v, p)?;
    p.print_char(' ')?;
    x.data_type.accept(v, p)?;
    for option in &x.options {
        option.accept(v, p)?;
    }
    Ok(())
}

pub fn column_option<V: OutputVisitor + ?Sized>(
    v: &V,
    p: &mut Printer<'_>,
    x: &ColumnOption,
) -> RenderResult<()> {
    match x {
        ColumnOption::NotNull => p.print_ucase(" NOT NULL"),
        ColumnOption::Null => p.print_ucase(" NULL"),
        ColumnOption::Default(expr) => {
            p.print_ucase(" DEFAULT ")?;
            expr.accept(v, p)
        }
        ColumnOption::PrimaryKey => p.print_ucase(" PRIMARY KEY"),
        ColumnOption::Unique => p.print_ucase(" UNIQUE"),
        ColumnOption::AutoIncrement => p.print_ucase(" AUTO_INCREMENT"),
        ColumnOption::Comment(text) => {
            p.print_ucase(" COMMENT ")?;
            p.print(&quote_string(text))
        }
        ColumnOption::Check(expr) => {
            p.print_ucase(" CHECK (")?;
            expr.accept(v, p)?;
            p.print_char(')')
        }
    }
}

pub fn table_constraint<V: OutputVisitor + ?Sized>(
    v: &V,
    p: &mut Printer<'_>,
    x: &TableConstraint,
) -> RenderResult<()> {
    let name = match x {
        TableConstraint::PrimaryKey { name, .. }
        | TableConstraint::Unique { name, .. }
        | TableConstraint::ForeignKey { name, .. }
        | TableConstraint::Check { name, .. } => name,
    };
    if let Some(name) = name {
        p.print_ucase("CONSTRAINT ")?;
        name.accept(v, p)?;
        p.print_char(' ')?;
    }

    match x {
        TableConstraint::PrimaryKey { columns, .. } => {
            p.print_ucase("PRIMARY KEY ")?;
            p.print_paren_list(v, columns)
        }
        TableConstraint::Unique { columns, .. } => {
            p.print_ucase("UNIQUE ")?;
            p.print_paren_list(v, columns)
        }
        TableConstraint::ForeignKey {
            columns,
            foreign_table,
            referred_columns,
            ..
        } => {
            p.print_ucase("FOREIGN KEY ")?;
            p.print_paren_list(v, columns)?;
            p.print_ucase(" REFERENCES ")?;
            foreign_table.accept(v, p)?;
            column_list(v, p, referred_columns)
        }
        TableConstraint::Check { expr, .. } => {
            p.print_ucase("CHECK (")?;
            expr.accept(v, p)?;
            p.print_char(')')
        }
    }
}

/// Where a dialect accepts the `USING method` clause of CREATE INDEX.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UsingPlacement {
    BeforeColumns,
    AfterColumns,
    Unsupported,
}

/// Per-dialect shape of CREATE INDEX.
#[derive(Debug, Clone, Copy)]
pub struct IndexSyntax {
    /// Index kinds the dialect accepts, matched case-insensitively; `None` accepts any.
    pub kinds: Option<&'static [&'static str]>,
    pub if_not_exists: bool,
    pub using: UsingPlacement,
}

impl IndexSyntax {
    pub const GENERIC: IndexSyntax = IndexSyntax {
        kinds: None,
        if_not_exists: true,
        using: UsingPlacement::AfterColumns,
    };
}

pub fn create_index<V: OutputVisitor + ?Sized>(
    v: &V,
    p: &mut Printer<'_>,
    x: &CreateIndexStatement,
) -> RenderResult<()> {
    create_index_with(v, p, x, IndexSyntax::GENERIC)
}

/// `CREATE [KIND ]INDEX [IF NOT EXISTS ]name ON table (items)`, shaped by `syntax`.
pub fn create_index_with<V: OutputVisitor + ?Sized>(
    v: &V,
    p: &mut Printer<'_>,
    x: &CreateIndexStatement,
    syntax: IndexSyntax,
) -> RenderResult<()> {
    p.print_ucase("CREATE ")?;
    if let Some(kind) = x.kind.as_deref().map(str::trim).filter(|k| !k.is_empty()) {
        let accepted = match syntax.kinds {
            None => Some(kind),
            Some(kinds) => kinds.iter().copied().find(|k| k.eq_ignore_ascii_case(kind)),
        };
        match accepted {
            Some(kind) => {
                p.print_ucase(kind)?;
                p.print_char(' ')?;
            }
            None => tracing::debug!(dialect = v.name(), kind, "dropping unsupported index kind"),
        }
    }
    p.print_ucase("INDEX ")?;
    if x.if_not_exists {
        if syntax.if_not_exists {
            p.print_ucase("IF NOT EXISTS ")?;
        } else {
            tracing::debug!(dialect = v.name(), "dropping IF NOT EXISTS on CREATE INDEX");
        }
    }
    x.name.accept(v, p)?;
    p.print_ucase(" ON ")?;
    x.table.accept(v, p)?;

    let using = x.using.as_deref().filter(|m| !m.is_empty());
    if syntax.using == UsingPlacement::BeforeColumns {
        print_using(p, using)?;
    }
    p.print_char(' ')?;
    p.print_paren_list(v, &x.items)?;
    match syntax.using {
        UsingPlacement::AfterColumns => print_using(p, using)?,
        UsingPlacement::Unsupported if using.is_some() => {
            tracing::debug!(dialect = v.name(), "dropping USING on CREATE INDEX");
        }
        _ => {}
    }
    Ok(())
}

fn print_using(p: &mut Printer<'_>, method: Option<&str>) -> RenderResult<()> {
    if let Some(method) = method {
        p.print_ucase(" USING ")?;
        p.print_ucase(method)?;
    }
    Ok(())
}

pub fn index_column<V: OutputVisitor + ?Sized>(
    v: &V,
    p: &mut Printer<'_>,
    x: &IndexColumn,
) -> RenderResult<()> {
    x.expr.accept(v, p)?;
    if let Some(order) = x.order {
        p.print_char(' ')?;
        p.print_ucase(&order.to_string())?;
    }
    Ok(())
}

pub fn create_database<V: OutputVisitor + ?Sized>(
    v: &V,
    p: &mut Printer<'_>,
    x: &CreateDatabaseStatement,
) -> RenderResult<()> {
    p.print_ucase("CREATE DATABASE ")?;
    if_not_exists(p, x.if_not_exists)?;
    x.name.accept(v, p)?;
    if let Some(charset) = &x.character_set {
        p.print_ucase(" CHARACTER SET ")?;
        p.print(charset)?;
    }
    if let Some(collate) = &x.collate {
        p.print_ucase(" COLLATE ")?;
        p.print(collate)?;
    }
    Ok(())
}

pub fn drop_table<V: OutputVisitor + ?Sized>(
    v: &V,
    p: &mut Printer<'_>,
    x: &DropTableStatement,
) -> RenderResult<()> {
    p.print_ucase("DROP TABLE ")?;
    if_exists(p, x.if_exists)?;
    p.print_comma_list(v, &x.names)?;
    if x.cascade {
        p.print_ucase(" CASCADE")?;
    }
    Ok(())
}

pub fn drop_index<V: OutputVisitor + ?Sized>(
    v: &V,
    p: &mut Printer<'_>,
    x: &DropIndexStatement,
) -> RenderResult<()> {
    p.print_ucase("DROP INDEX ")?;
    if_exists(p, x.if_exists)?;
    x.name.accept(v, p)?;
    if x.table.is_some() {
        tracing::debug!(dialect = v.name(), "dropping ON <table> from DROP INDEX");
    }
    Ok(())
}

/// `DROP INDEX [IF EXISTS ]name[ ON table]` for dialects that scope indexes to a table.
pub fn drop_index_on_table<V: OutputVisitor + ?Sized>(
    v: &V,
    p: &mut Printer<'_>,
    x: &DropIndexStatement,
    with_if_exists: bool,
) -> RenderResult<()> {
    p.print_ucase("DROP INDEX ")?;
    if x.if_exists {
        if with_if_exists {
            p.print_ucase("IF EXISTS ")?;
        } else {
            tracing::debug!(dialect = v.name(), "dropping IF EXISTS on DROP INDEX");
        }
    }
    x.name.accept(v, p)?;
    if let Some(table) = &x.table {
        p.print_ucase(" ON ")?;
        table.accept(v, p)?;
    }
    Ok(())
}

pub fn truncate<V: OutputVisitor + ?Sized>(
    v: &V,
    p: &mut Printer<'_>,
    x: &TruncateStatement,
) -> RenderResult<()> {
    p.print_ucase("TRUNCATE TABLE ")?;
    p.print_comma_list(v, &x.tables)
}

/// One statement per table, joined by `;` and a line break.
pub fn per_table<V, F>(v: &V, p: &mut Printer<'_>, tables: &[Expr], mut each: F) -> RenderResult<()>
where
    V: OutputVisitor + ?Sized,
    F: FnMut(&V, &mut Printer<'_>, &Expr) -> RenderResult<()>,
{
    for (i, table) in tables.iter().enumerate() {
        if i != 0 {
            p.print_char(';')?;
            p.println()?;
        }
        each(v, p, table)?;
    }
    Ok(())
}

// ---------- Queries ----------

pub fn query<V: OutputVisitor + ?Sized>(v: &V, p: &mut Printer<'_>, x: &Query) -> RenderResult<()> {
    if let Some(with) = &x.with {
        p.print_ucase("WITH ")?;
        if with.recursive {
            p.print_ucase("RECURSIVE ")?;
        }
        p.print_comma_list(v, &with.ctes)?;
        p.println()?;
    }
    x.body.accept(v, p)?;
    if !x.order_by.is_empty() {
        p.println()?;
        p.print_ucase("ORDER BY ")?;
        p.print_comma_list(v, &x.order_by)?;
    }
    if let Some(limit) = &x.limit {
        if limit.row_count.is_some() || limit.offset.is_some() {
            p.println()?;
            limit.accept(v, p)?;
        }
    }
    Ok(())
}

pub fn cte<V: OutputVisitor + ?Sized>(v: &V, p: &mut Printer<'_>, x: &Cte) -> RenderResult<()> {
    x.name.accept(v, p)?;
    column_list(v, p, &x.columns)?;
    p.print_ucase(" AS (")?;
    indented(v, p, &*x.query)?;
    p.print_char(')')
}

pub fn select<V: OutputVisitor + ?Sized>(v: &V, p: &mut Printer<'_>, x: &Select) -> RenderResult<()> {
    p.print_ucase("SELECT ")?;
    hints(v, p, &x.hints)?;
    if x.distinct {
        p.print_ucase("DISTINCT ")?;
    }
    p.print_comma_list(v, &x.projection)?;
    if let Some(from) = &x.from {
        p.println()?;
        p.print_ucase("FROM ")?;
        from.accept(v, p)?;
    }
    if let Some(selection) = &x.selection {
        p.println()?;
        p.print_ucase("WHERE ")?;
        selection.accept(v, p)?;
    }
    if !x.group_by.is_empty() {
        p.println()?;
        p.print_ucase("GROUP BY ")?;
        p.print_comma_list(v, &x.group_by)?;
    }
    if let Some(having) = &x.having {
        p.println()?;
        p.print_ucase("HAVING ")?;
        having.accept(v, p)?;
    }
    Ok(())
}

pub fn select_item<V: OutputVisitor + ?Sized>(
    v: &V,
    p: &mut Printer<'_>,
    x: &SelectItem,
) -> RenderResult<()> {
    x.expr.accept(v, p)?;
    if let Some(alias) = &x.alias {
        p.print_ucase(" AS ")?;
        alias.accept(v, p)?;
    }
    Ok(())
}

pub fn set_operation<V: OutputVisitor + ?Sized>(
    v: &V,
    p: &mut Printer<'_>,
    left: &SetExpr,
    op: SetOperator,
    all: bool,
    right: &SetExpr,
) -> RenderResult<()> {
    set_operand(v, p, left, op, false)?;
    p.println()?;
    p.print_ucase(&op.to_string())?;
    if all {
        p.print_ucase(" ALL")?;
    }
    p.println()?;
    set_operand(v, p, right, op, true)
}

/// Whether a nested set operation must be parenthesized under `parent`.
///
/// Only a left operand with the same operator chains bare. A different operator is always
/// wrapped, so INTERSECT's tighter binding never decides the meaning.
pub fn set_operand_needs_parens(child: &SetExpr, parent: SetOperator, right: bool) -> bool {
    match child {
        SetExpr::SetOperation { op, .. } => right || *op != parent,
        _ => false,
    }
}

fn set_operand<V: OutputVisitor + ?Sized>(
    v: &V,
    p: &mut Printer<'_>,
    child: &SetExpr,
    parent: SetOperator,
    right: bool,
) -> RenderResult<()> {
    if set_operand_needs_parens(child, parent, right) {
        p.print_char('(')?;
        indented(v, p, child)?;
        p.print_char(')')
    } else {
        child.accept(v, p)
    }
}

pub fn values<V: OutputVisitor + ?Sized>(
    v: &V,
    p: &mut Printer<'_>,
    rows: &[ValuesClause],
) -> RenderResult<()> {
    values_list(v, p, rows)
}

pub fn values_clause<V: OutputVisitor + ?Sized>(
    v: &V,
    p: &mut Printer<'_>,
    x: &ValuesClause,
) -> RenderResult<()> {
    p.print_paren_list(v, &x.values)
}

pub fn table_source<V: OutputVisitor + ?Sized>(
    v: &V,
    p: &mut Printer<'_>,
    x: &TableSource,
) -> RenderResult<()> {
    match x {
        TableSource::Table { name, alias } => {
            name.accept(v, p)?;
            table_alias(v, p, alias.as_ref())
        }
        TableSource::Subquery { query, alias } => {
            p.print_char('(')?;
            indented(v, p, &**query)?;
            p.print_char(')')?;
            table_alias(v, p, alias.as_ref())
        }
        TableSource::Join {
            left,
            kind,
            right,
            constraint,
        } => {
            left.accept(v, p)?;
            if *kind == JoinKind::Comma {
                p.print(", ")?;
            } else {
                p.inc_indent();
                p.println()?;
                p.dec_indent();
                p.print_ucase(kind.keyword())?;
                p.print_char(' ')?;
            }
            right.accept(v, p)?;
            match constraint {
                Some(JoinConstraint::On(expr)) => {
                    p.print_ucase(" ON ")?;
                    expr.accept(v, p)
                }
                Some(JoinConstraint::Using(columns)) => {
                    p.print_ucase(" USING ")?;
                    p.print_paren_list(v, columns)
                }
                None => Ok(()),
            }
        }
    }
}

fn table_alias<V: OutputVisitor + ?Sized>(
    v: &V,
    p: &mut Printer<'_>,
    alias: Option<&Ident>,
) -> RenderResult<()> {
    if let Some(alias) = alias {
        p.print_char(' ')?;
        alias.accept(v, p)?;
    }
    Ok(())
}

pub fn order_by_item<V: OutputVisitor + ?Sized>(
    v: &V,
    p: &mut Printer<'_>,
    x: &OrderByItem,
) -> RenderResult<()> {
    x.expr.accept(v, p)?;
    if let Some(order) = x.order {
        p.print_char(' ')?;
        p.print_ucase(&order.to_string())?;
    }
    Ok(())
}

pub fn limit<V: OutputVisitor + ?Sized>(v: &V, p: &mut Printer<'_>, x: &Limit) -> RenderResult<()> {
    if let Some(row_count) = &x.row_count {
        p.print_ucase("LIMIT ")?;
        row_count.accept(v, p)?;
        if x.offset.is_some() {
            p.print_char(' ')?;
        }
    }
    if let Some(offset) = &x.offset {
        p.print_ucase("OFFSET ")?;
        offset.accept(v, p)?;
    }
    Ok(())
}

/// `OFFSET m ROWS[ FETCH NEXT n ROWS ONLY]`; a bare row count becomes `OFFSET 0 ROWS`.
pub fn offset_fetch<V: OutputVisitor + ?Sized>(
    v: &V,
    p: &mut Printer<'_>,
    x: &Limit,
) -> RenderResult<()> {
    p.print_ucase("OFFSET ")?;
    match &x.offset {
        Some(offset) => offset.accept(v, p)?,
        None => p.print_char('0')?,
    }
    p.print_ucase(" ROWS")?;
    if let Some(row_count) = &x.row_count {
        p.print_ucase(" FETCH NEXT ")?;
        row_count.accept(v, p)?;
        p.print_ucase(" ROWS ONLY")?;
    }
    Ok(())
}

pub fn comment_hint<V: OutputVisitor + ?Sized>(
    v: &V,
    p: &mut Printer<'_>,
    x: &CommentHint,
) -> RenderResult<()> {
    // Comment delimiters inside the text would close (or, where comments nest, reopen) the hint.
    let mut text = x.text.replace("*/", "* /").replace("/*", "/ *");
    if text.ends_with('/') {
        text.push(' ');
    }
    if text != x.text {
        tracing::debug!(dialect = v.name(), "breaking up comment delimiters inside hint");
    }
    p.print("/*")?;
    p.print(&text)?;
    p.print("*/")
}

// ---------- Expressions ----------

pub fn identifier<V: OutputVisitor + ?Sized>(
    v: &V,
    p: &mut Printer<'_>,
    x: &Ident,
) -> RenderResult<()> {
    if !needs_quoting(v, x) {
        return p.print(&x.value);
    }
    let (open, close) = v.identifier_quotes();
    p.print_char(open)?;
    for c in x.value.chars() {
        if c == close {
            p.print_char(close)?;
        }
        p.print_char(c)?;
    }
    p.print_char(close)
}

pub fn property<V: OutputVisitor + ?Sized>(
    v: &V,
    p: &mut Printer<'_>,
    owner: &Expr,
    name: &Ident,
) -> RenderResult<()> {
    owner.accept(v, p)?;
    p.print_char('.')?;
    name.accept(v, p)
}

pub fn all_columns<V: OutputVisitor + ?Sized>(
    v: &V,
    p: &mut Printer<'_>,
    owner: Option<&Expr>,
) -> RenderResult<()> {
    if let Some(owner) = owner {
        owner.accept(v, p)?;
        p.print_char('.')?;
    }
    p.print_char('*')
}

pub fn literal<V: OutputVisitor + ?Sized>(
    _v: &V,
    p: &mut Printer<'_>,
    x: &Literal,
) -> RenderResult<()> {
    if p.parameterized() && x.is_parameterizable() {
        p.record_parameter(x.clone());
        return p.print_char('?');
    }
    match x {
        Literal::Boolean(true) => p.print_ucase("TRUE"),
        Literal::Boolean(false) => p.print_ucase("FALSE"),
        Literal::Null => p.print_ucase("NULL"),
        Literal::Date(date) => {
            p.print_ucase("DATE ")?;
            p.print(&format!("'{}'", date.format("%Y-%m-%d")))
        }
        Literal::Timestamp(ts) => {
            p.print_ucase("TIMESTAMP ")?;
            p.print(&format!("'{}'", ts.format("%Y-%m-%d %H:%M:%S")))
        }
        Literal::Hex(digits) => {
            p.print_ucase("X")?;
            p.print(&format!("'{}'", digits))
        }
        Literal::Integer(_) | Literal::Number(_) | Literal::String(_) => p.print(&x.to_string()),
    }
}

pub fn placeholder<V: OutputVisitor + ?Sized>(
    _v: &V,
    p: &mut Printer<'_>,
    text: &str,
) -> RenderResult<()> {
    p.print(text)
}

/// Whether `child` must be parenthesized under an operator of precedence `parent_prec`.
///
/// Right operands of equal precedence are wrapped unless both sides are the same associative
/// binary operator.
pub fn needs_parens(child: &Expr, parent_prec: u8, parent_op: Option<BinaryOperator>, right: bool) -> bool {
    let prec = child.precedence();
    if prec != parent_prec {
        return prec < parent_prec;
    }
    if !right {
        return false;
    }
    !matches!(
        (child, parent_op),
        (Expr::Binary { op, .. }, Some(parent)) if *op == parent && parent.is_associative()
    )
}

/// Render an operand, wrapping it in parentheses when precedence requires.
pub fn operand<V: OutputVisitor + ?Sized>(
    v: &V,
    p: &mut Printer<'_>,
    child: &Expr,
    parent_prec: u8,
    parent_op: Option<BinaryOperator>,
    right: bool,
) -> RenderResult<()> {
    if needs_parens(child, parent_prec, parent_op, right) {
        p.print_char('(')?;
        child.accept(v, p)?;
        p.print_char(')')
    } else {
        child.accept(v, p)
    }
}

/// Operator token, in keyword case when it is a word.
pub fn binary_operator(p: &mut Printer<'_>, op: BinaryOperator) -> RenderResult<()> {
    let token = op.to_string();
    if op.is_keyword() {
        p.print_ucase(&token)
    } else {
        p.print(&token)
    }
}

pub fn binary<V: OutputVisitor + ?Sized>(
    v: &V,
    p: &mut Printer<'_>,
    left: &Expr,
    op: BinaryOperator,
    right: &Expr,
) -> RenderResult<()> {
    let prec = op.precedence();
    operand(v, p, left, prec, Some(op), false)?;
    p.print_char(' ')?;
    binary_operator(p, op)?;
    p.print_char(' ')?;
    operand(v, p, right, prec, Some(op), true)
}

fn is_negative_number(expr: &Expr) -> bool {
    match expr {
        Expr::Literal(Literal::Integer(n)) => *n < 0,
        Expr::Literal(Literal::Number(text)) => text.starts_with('-'),
        _ => false,
    }
}

pub fn unary<V: OutputVisitor + ?Sized>(
    v: &V,
    p: &mut Printer<'_>,
    op: UnaryOperator,
    expr: &Expr,
) -> RenderResult<()> {
    if op == UnaryOperator::Not {
        p.print_ucase("NOT ")?;
        return operand(v, p, expr, op.precedence(), None, true);
    }
    p.print(&op.to_string())?;
    // `--` would open a line comment
    if op == UnaryOperator::Minus && is_negative_number(expr) {
        p.print_char('(')?;
        expr.accept(v, p)?;
        return p.print_char(')');
    }
    operand(v, p, expr, op.precedence(), None, true)
}

pub fn is_null<V: OutputVisitor + ?Sized>(
    v: &V,
    p: &mut Printer<'_>,
    expr: &Expr,
    negated: bool,
) -> RenderResult<()> {
    operand(v, p, expr, PREC_COMPARISON, None, true)?;
    if negated {
        p.print_ucase(" IS NOT NULL")
    } else {
        p.print_ucase(" IS NULL")
    }
}

fn in_keyword(p: &mut Printer<'_>, negated: bool) -> RenderResult<()> {
    if negated {
        p.print_ucase(" NOT IN ")
    } else {
        p.print_ucase(" IN ")
    }
}

pub fn in_list<V: OutputVisitor + ?Sized>(
    v: &V,
    p: &mut Printer<'_>,
    expr: &Expr,
    list: &[Expr],
    negated: bool,
) -> RenderResult<()> {
    operand(v, p, expr, PREC_COMPARISON, None, true)?;
    in_keyword(p, negated)?;

    let collapsible = !list.is_empty()
        && list
            .iter()
            .all(|item| matches!(item, Expr::Literal(lit) if lit.is_parameterizable()));
    if p.parameterized() && collapsible {
        for item in list {
            if let Expr::Literal(lit) = item {
                p.record_parameter(lit.clone());
            }
        }
        return p.print("(?)");
    }
    p.print_paren_list(v, list)
}

pub fn in_subquery<V: OutputVisitor + ?Sized>(
    v: &V,
    p: &mut Printer<'_>,
    expr: &Expr,
    query: &Query,
    negated: bool,
) -> RenderResult<()> {
    operand(v, p, expr, PREC_COMPARISON, None, true)?;
    in_keyword(p, negated)?;
    p.print_char('(')?;
    query.accept(v, p)?;
    p.print_char(')')
}

pub fn between<V: OutputVisitor + ?Sized>(
    v: &V,
    p: &mut Printer<'_>,
    expr: &Expr,
    low: &Expr,
    high: &Expr,
    negated: bool,
) -> RenderResult<()> {
    operand(v, p, expr, PREC_COMPARISON, None, true)?;
    if negated {
        p.print_ucase(" NOT BETWEEN ")?;
    } else {
        p.print_ucase(" BETWEEN ")?;
    }
    operand(v, p, low, PREC_COMPARISON, None, true)?;
    p.print_ucase(" AND ")?;
    operand(v, p, high, PREC_COMPARISON, None, true)
}

pub fn function<V: OutputVisitor + ?Sized>(
    v: &V,
    p: &mut Printer<'_>,
    owner: Option<&Expr>,
    name: &str,
    args: &[Expr],
    distinct: bool,
) -> RenderResult<()> {
    if let Some(owner) = owner {
        owner.accept(v, p)?;
        p.print_char('.')?;
    }
    p.print(name)?;
    p.print_char('(')?;
    if distinct {
        p.print_ucase("DISTINCT ")?;
    }
    p.print_comma_list(v, args)?;
    p.print_char(')')
}

pub fn cast<V: OutputVisitor + ?Sized>(
    v: &V,
    p: &mut Printer<'_>,
    expr: &Expr,
    data_type: &DataType,
) -> RenderResult<()> {
    p.print_ucase("CAST(")?;
    expr.accept(v, p)?;
    p.print_ucase(" AS ")?;
    data_type.accept(v, p)?;
    p.print_char(')')
}

pub fn data_type<V: OutputVisitor + ?Sized>(
    _v: &V,
    p: &mut Printer<'_>,
    x: &DataType,
) -> RenderResult<()> {
    p.print_ucase(&x.name)?;
    if !x.args.is_empty() {
        let args: Vec<String> = x.args.iter().map(u64::to_string).collect();
        p.print_char('(')?;
        p.print(&args.join(", "))?;
        p.print_char(')')?;
    }
    Ok(())
}

pub fn case<V: OutputVisitor + ?Sized>(
    v: &V,
    p: &mut Printer<'_>,
    operand: Option<&Expr>,
    when_then: &[(Expr, Expr)],
    else_result: Option<&Expr>,
) -> RenderResult<()> {
    p.print_ucase("CASE")?;
    if let Some(operand) = operand {
        p.print_char(' ')?;
        operand.accept(v, p)?;
    }
    for (condition, result) in when_then {
        p.print_ucase(" WHEN ")?;
        condition.accept(v, p)?;
        p.print_ucase(" THEN ")?;
        result.accept(v, p)?;
    }
    if let Some(else_result) = else_result {
        p.print_ucase(" ELSE ")?;
        else_result.accept(v, p)?;
    }
    p.print_ucase(" END")
}

pub fn exists<V: OutputVisitor + ?Sized>(
    v: &V,
    p: &mut Printer<'_>,
    query: &Query,
    negated: bool,
) -> RenderResult<()> {
    if negated {
        p.print_ucase("NOT ")?;
    }
    p.print_ucase("EXISTS (")?;
    query.accept(v, p)?;
    p.print_char(')')
}

pub fn subquery<V: OutputVisitor + ?Sized>(
    v: &V,
    p: &mut Printer<'_>,
    query: &Query,
) -> RenderResult<()> {
    p.print_char('(')?;
    query.accept(v, p)?;
    p.print_char(')')
}

pub fn tuple<V: OutputVisitor + ?Sized>(
    v: &V,
    p: &mut Printer<'_>,
    items: &[Expr],
) -> RenderResult<()> {
    p.print_paren_list(v, items)
}

pub fn nested<V: OutputVisitor + ?Sized>(
    v: &V,
    p: &mut Printer<'_>,
    expr: &Expr,
) -> RenderResult<()> {
    p.print_char('(')?;
    expr.accept(v, p)?;
    p.print_char(')')
}

pub fn default_value<V: OutputVisitor + ?Sized>(_v: &V, p: &mut Printer<'_>) -> RenderResult<()> {
    p.print_ucase("DEFAULT")
}

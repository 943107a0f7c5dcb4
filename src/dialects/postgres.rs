//! PostgreSQL rules. The free functions are shared with Redshift.

use crate::ast::{ColumnOption, CreateDatabaseStatement, CreateIndexStatement};
use crate::dialect::Dialect;
use crate::error::RenderResult;
use crate::printer::Printer;
use crate::visitor::walk::{self, IndexSyntax, UsingPlacement};
use crate::visitor::{Accept, Continuation, OutputVisitor};

pub const INDEX_SYNTAX: IndexSyntax = IndexSyntax {
    kinds: Some(&["UNIQUE"]),
    if_not_exists: true,
    using: UsingPlacement::BeforeColumns,
};

/// PostgreSQL Visitor.
pub struct PostgresVisitor;

impl OutputVisitor for PostgresVisitor {
    fn dialect(&self) -> Dialect {
        Dialect::Postgres
    }

    fn visit_column_option(&self, p: &mut Printer<'_>, x: &ColumnOption) -> RenderResult<Continuation> {
        column_option(self, p, x, " GENERATED BY DEFAULT AS IDENTITY")
    }

    fn visit_create_index(
        &self,
        p: &mut Printer<'_>,
        x: &CreateIndexStatement,
    ) -> RenderResult<Continuation> {
        walk::create_index_with(self, p, x, INDEX_SYNTAX)?;
        Ok(Continuation::FullyRendered)
    }

    fn visit_create_database(
        &self,
        p: &mut Printer<'_>,
        x: &CreateDatabaseStatement,
    ) -> RenderResult<Continuation> {
        create_database(self, p, x)?;
        Ok(Continuation::FullyRendered)
    }
}

/// Identity columns use `identity`; column comments live in separate COMMENT ON statements.
pub fn column_option<V: OutputVisitor + ?Sized>(
    v: &V,
    p: &mut Printer<'_>,
    x: &ColumnOption,
    identity: &str,
) -> RenderResult<Continuation> {
    match x {
        ColumnOption::AutoIncrement => p.print_ucase(identity)?,
        ColumnOption::Comment(_) => {
            tracing::debug!(dialect = v.name(), "dropping inline column COMMENT");
        }
        _ => return Ok(Continuation::DelegateToDefault),
    }
    Ok(Continuation::FullyRendered)
}

/// `CREATE DATABASE name[ ENCODING 'cs'][ LC_COLLATE 'c']`
pub fn create_database<V: OutputVisitor + ?Sized>(
    v: &V,
    p: &mut Printer<'_>,
    x: &CreateDatabaseStatement,
) -> RenderResult<()> {
    p.print_ucase("CREATE DATABASE ")?;
    if x.if_not_exists {
        tracing::debug!(dialect = v.name(), "dropping IF NOT EXISTS on CREATE DATABASE");
    }
    x.name.accept(v, p)?;
    if let Some(charset) = &x.character_set {
        p.print_ucase(" ENCODING ")?;
        p.print(&walk::quote_string(charset))?;
    }
    if let Some(collate) = &x.collate {
        p.print_ucase(" LC_COLLATE ")?;
        p.print(&walk::quote_string(collate))?;
    }
    Ok(())
}

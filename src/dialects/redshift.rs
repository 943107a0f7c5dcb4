use crate::ast::{ColumnOption, CreateDatabaseStatement, CreateIndexStatement};
use crate::dialect::Dialect;
use crate::dialects::postgres;
use crate::error::RenderResult;
use crate::printer::Printer;
use crate::visitor::walk;
use crate::visitor::{Continuation, OutputVisitor};

/// Redshift Visitor. PostgreSQL rules with Redshift's IDENTITY syntax.
pub struct RedshiftVisitor;

impl OutputVisitor for RedshiftVisitor {
    fn dialect(&self) -> Dialect {
        Dialect::Redshift
    }

    fn visit_column_option(&self, p: &mut Printer<'_>, x: &ColumnOption) -> RenderResult<Continuation> {
        postgres::column_option(self, p, x, " IDENTITY(1, 1)")
    }

    fn visit_create_index(
        &self,
        p: &mut Printer<'_>,
        x: &CreateIndexStatement,
    ) -> RenderResult<Continuation> {
        walk::create_index_with(self, p, x, postgres::INDEX_SYNTAX)?;
        Ok(Continuation::FullyRendered)
    }

    fn visit_create_database(
        &self,
        p: &mut Printer<'_>,
        x: &CreateDatabaseStatement,
    ) -> RenderResult<Continuation> {
        postgres::create_database(self, p, x)?;
        Ok(Continuation::FullyRendered)
    }
}

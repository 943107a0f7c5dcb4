use crate::ast::{ColumnOption, CreateDatabaseStatement};
use crate::dialect::Dialect;
use crate::error::RenderResult;
use crate::printer::Printer;
use crate::visitor::walk;
use crate::visitor::{Accept, Continuation, OutputVisitor};

/// Snowflake Visitor.
pub struct SnowflakeVisitor;

impl OutputVisitor for SnowflakeVisitor {
    fn dialect(&self) -> Dialect {
        Dialect::Snowflake
    }

    fn visit_column_option(&self, p: &mut Printer<'_>, x: &ColumnOption) -> RenderResult<Continuation> {
        if let ColumnOption::AutoIncrement = x {
            p.print_ucase(" AUTOINCREMENT")?;
            return Ok(Continuation::FullyRendered);
        }
        Ok(Continuation::DelegateToDefault)
    }

    fn visit_create_database(
        &self,
        p: &mut Printer<'_>,
        x: &CreateDatabaseStatement,
    ) -> RenderResult<Continuation> {
        p.print_ucase("CREATE DATABASE ")?;
        if x.if_not_exists {
            p.print_ucase("IF NOT EXISTS ")?;
        }
        x.name.accept(self, p)?;
        if x.character_set.is_some() {
            tracing::debug!(dialect = self.name(), "dropping CHARACTER SET on CREATE DATABASE");
        }
        if let Some(collate) = &x.collate {
            p.print_ucase(" DEFAULT_DDL_COLLATION = ")?;
            p.print(&walk::quote_string(collate))?;
        }
        Ok(Continuation::FullyRendered)
    }
}

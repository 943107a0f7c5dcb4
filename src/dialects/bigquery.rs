//! BigQuery rules. Datasets are schemas; column descriptions go through OPTIONS.

use crate::ast::{ColumnOption, CreateDatabaseStatement};
use crate::dialect::Dialect;
use crate::error::RenderResult;
use crate::printer::Printer;
use crate::visitor::walk;
use crate::visitor::{Accept, Continuation, OutputVisitor};

/// BigQuery Visitor.
pub struct BigQueryVisitor;

impl OutputVisitor for BigQueryVisitor {
    fn dialect(&self) -> Dialect {
        Dialect::BigQuery
    }

    fn identifier_quotes(&self) -> (char, char) {
        ('`', '`')
    }

    fn visit_column_option(&self, p: &mut Printer<'_>, x: &ColumnOption) -> RenderResult<Continuation> {
        match x {
            ColumnOption::Comment(text) => {
                p.print_ucase(" OPTIONS")?;
                p.print("(description = ")?;
                p.print(&walk::quote_string(text))?;
                p.print_char(')')?;
            }
            ColumnOption::AutoIncrement => {
                tracing::debug!(dialect = self.name(), "dropping AUTO_INCREMENT");
            }
            _ => return Ok(Continuation::DelegateToDefault),
        }
        Ok(Continuation::FullyRendered)
    }

    fn visit_create_database(
        &self,
        p: &mut Printer<'_>,
        x: &CreateDatabaseStatement,
    ) -> RenderResult<Continuation> {
        p.print_ucase("CREATE SCHEMA ")?;
        if x.if_not_exists {
            p.print_ucase("IF NOT EXISTS ")?;
        }
        x.name.accept(self, p)?;
        if x.character_set.is_some() {
            tracing::debug!(dialect = self.name(), "dropping CHARACTER SET on CREATE SCHEMA");
        }
        if let Some(collate) = &x.collate {
            p.print_ucase(" DEFAULT COLLATE ")?;
            p.print(&walk::quote_string(collate))?;
        }
        Ok(Continuation::FullyRendered)
    }
}

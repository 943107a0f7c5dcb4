//! Oracle rules.

use crate::ast::{ColumnOption, CreateIndexStatement, DropTableStatement, Limit, Literal};
use crate::dialect::Dialect;
use crate::error::RenderResult;
use crate::printer::Printer;
use crate::visitor::walk::{self, IndexSyntax, UsingPlacement};
use crate::visitor::{Accept, Continuation, OutputVisitor};

const INDEX_SYNTAX: IndexSyntax = IndexSyntax {
    kinds: Some(&["UNIQUE", "BITMAP"]),
    if_not_exists: false,
    using: UsingPlacement::Unsupported,
};

/// Oracle Visitor.
pub struct OracleVisitor;

impl OutputVisitor for OracleVisitor {
    fn dialect(&self) -> Dialect {
        Dialect::Oracle
    }

    fn visit_literal(&self, p: &mut Printer<'_>, x: &Literal) -> RenderResult<Continuation> {
        match x {
            Literal::Boolean(b) => {
                p.print_char(if *b { '1' } else { '0' })?;
                Ok(Continuation::FullyRendered)
            }
            _ => Ok(Continuation::DelegateToDefault),
        }
    }

    fn visit_limit(&self, p: &mut Printer<'_>, x: &Limit) -> RenderResult<Continuation> {
        walk::offset_fetch(self, p, x)?;
        Ok(Continuation::FullyRendered)
    }

    fn visit_column_option(&self, p: &mut Printer<'_>, x: &ColumnOption) -> RenderResult<Continuation> {
        match x {
            ColumnOption::AutoIncrement => p.print_ucase(" GENERATED BY DEFAULT AS IDENTITY")?,
            ColumnOption::Comment(_) => {
                tracing::debug!(dialect = self.name(), "dropping inline column COMMENT");
            }
            _ => return Ok(Continuation::DelegateToDefault),
        }
        Ok(Continuation::FullyRendered)
    }

    fn visit_create_index(
        &self,
        p: &mut Printer<'_>,
        x: &CreateIndexStatement,
    ) -> RenderResult<Continuation> {
        walk::create_index_with(self, p, x, INDEX_SYNTAX)?;
        Ok(Continuation::FullyRendered)
    }

    /// One table per statement, and no IF EXISTS.
    fn visit_drop_table(&self, p: &mut Printer<'_>, x: &DropTableStatement) -> RenderResult<Continuation> {
        if x.if_exists {
            tracing::debug!(dialect = self.name(), "dropping IF EXISTS on DROP TABLE");
        }
        walk::per_table(self, p, &x.names, |v, p, table| {
            p.print_ucase("DROP TABLE ")?;
            table.accept(v, p)?;
            if x.cascade {
                p.print_ucase(" CASCADE CONSTRAINTS")?;
            }
            Ok(())
        })?;
        Ok(Continuation::FullyRendered)
    }
}

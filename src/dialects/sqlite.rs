//! SQLite rules.

use crate::ast::{ColumnOption, CreateIndexStatement, TruncateStatement};
use crate::dialect::Dialect;
use crate::error::RenderResult;
use crate::printer::Printer;
use crate::visitor::walk::{self, IndexSyntax, UsingPlacement};
use crate::visitor::{Accept, Continuation, OutputVisitor};

const INDEX_SYNTAX: IndexSyntax = IndexSyntax {
    kinds: Some(&["UNIQUE"]),
    if_not_exists: true,
    using: UsingPlacement::Unsupported,
};

/// SQLite Visitor.
pub struct SqliteVisitor;

impl OutputVisitor for SqliteVisitor {
    fn dialect(&self) -> Dialect {
        Dialect::SQLite
    }

    /// No TRUNCATE; an unqualified DELETE takes the truncate optimization.
    fn visit_truncate(&self, p: &mut Printer<'_>, x: &TruncateStatement) -> RenderResult<Continuation> {
        walk::per_table(self, p, &x.tables, |v, p, table| {
            p.print_ucase("DELETE FROM ")?;
            table.accept(v, p)
        })?;
        Ok(Continuation::FullyRendered)
    }

    fn visit_column_option(&self, p: &mut Printer<'_>, x: &ColumnOption) -> RenderResult<Continuation> {
        match x {
            ColumnOption::AutoIncrement => p.print_ucase(" AUTOINCREMENT")?,
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
}

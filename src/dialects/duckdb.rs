use crate::ast::{ColumnOption, ReplaceStatement};
use crate::dialect::Dialect;
use crate::error::RenderResult;
use crate::printer::Printer;
use crate::visitor::walk;
use crate::visitor::{Accept, Continuation, OutputVisitor};

/// DuckDB Visitor.
pub struct DuckDbVisitor;

impl OutputVisitor for DuckDbVisitor {
    fn dialect(&self) -> Dialect {
        Dialect::DuckDB
    }

    /// `INSERT OR REPLACE INTO t[ (cols)]` followed by the rows or the source query.
    fn visit_replace(&self, p: &mut Printer<'_>, x: &ReplaceStatement) -> RenderResult<Continuation> {
        p.print_ucase("INSERT OR REPLACE INTO ")?;
        x.table.accept(self, p)?;
        if !x.columns.is_empty() {
            p.print_char(' ')?;
            p.print_paren_list(self, &x.columns)?;
        }
        walk::row_source(self, p, x.values.as_deref(), x.query.as_deref())?;
        Ok(Continuation::FullyRendered)
    }

    /// Sequences replace AUTO_INCREMENT, and comments are separate statements.
    fn visit_column_option(&self, _p: &mut Printer<'_>, x: &ColumnOption) -> RenderResult<Continuation> {
        match x {
            ColumnOption::AutoIncrement | ColumnOption::Comment(_) => {
                tracing::debug!(dialect = self.name(), option = ?x, "dropping unsupported column option");
                Ok(Continuation::FullyRendered)
            }
            _ => Ok(Continuation::DelegateToDefault),
        }
    }
}

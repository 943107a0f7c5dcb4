//! SQL Server (T-SQL) rules.

use crate::ast::{
    BinaryOperator, ColumnOption, CreateDatabaseStatement, CreateIndexStatement, DropIndexStatement,
    Expr, Limit, Literal, TruncateStatement,
};
use crate::dialect::Dialect;
use crate::error::RenderResult;
use crate::printer::Printer;
use crate::visitor::walk::{self, IndexSyntax, UsingPlacement};
use crate::visitor::{Accept, Continuation, OutputVisitor};

const INDEX_SYNTAX: IndexSyntax = IndexSyntax {
    kinds: Some(&["UNIQUE", "CLUSTERED", "NONCLUSTERED"]),
    if_not_exists: false,
    using: UsingPlacement::Unsupported,
};

/// SQL Server Visitor.
pub struct SqlServerVisitor;

impl OutputVisitor for SqlServerVisitor {
    fn dialect(&self) -> Dialect {
        Dialect::SqlServer
    }

    fn identifier_quotes(&self) -> (char, char) {
        ('[', ']')
    }

    /// No boolean literals; BIT values instead.
    fn visit_literal(&self, p: &mut Printer<'_>, x: &Literal) -> RenderResult<Continuation> {
        match x {
            Literal::Boolean(b) => {
                p.print_char(if *b { '1' } else { '0' })?;
                Ok(Continuation::FullyRendered)
            }
            _ => Ok(Continuation::DelegateToDefault),
        }
    }

    fn visit_binary(
        &self,
        p: &mut Printer<'_>,
        left: &Expr,
        op: BinaryOperator,
        right: &Expr,
    ) -> RenderResult<Continuation> {
        if op != BinaryOperator::Concat {
            return Ok(Continuation::DelegateToDefault);
        }
        let prec = op.precedence();
        walk::operand(self, p, left, prec, Some(op), false)?;
        p.print(" + ")?;
        walk::operand(self, p, right, prec, Some(op), true)?;
        Ok(Continuation::FullyRendered)
    }

    fn visit_limit(&self, p: &mut Printer<'_>, x: &Limit) -> RenderResult<Continuation> {
        walk::offset_fetch(self, p, x)?;
        Ok(Continuation::FullyRendered)
    }

    fn visit_column_option(&self, p: &mut Printer<'_>, x: &ColumnOption) -> RenderResult<Continuation> {
        match x {
            ColumnOption::AutoIncrement => p.print_ucase(" IDENTITY(1, 1)")?,
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

    fn visit_drop_index(&self, p: &mut Printer<'_>, x: &DropIndexStatement) -> RenderResult<Continuation> {
        walk::drop_index_on_table(self, p, x, true)?;
        Ok(Continuation::FullyRendered)
    }

    /// TRUNCATE TABLE takes exactly one table.
    fn visit_truncate(&self, p: &mut Printer<'_>, x: &TruncateStatement) -> RenderResult<Continuation> {
        walk::per_table(self, p, &x.tables, |v, p, table| {
            p.print_ucase("TRUNCATE TABLE ")?;
            table.accept(v, p)
        })?;
        Ok(Continuation::FullyRendered)
    }

    fn visit_create_database(
        &self,
        p: &mut Printer<'_>,
        x: &CreateDatabaseStatement,
    ) -> RenderResult<Continuation> {
        p.print_ucase("CREATE DATABASE ")?;
        if x.if_not_exists || x.character_set.is_some() {
            tracing::debug!(dialect = self.name(), "dropping IF NOT EXISTS and CHARACTER SET on CREATE DATABASE");
        }
        x.name.accept(self, p)?;
        if let Some(collate) = &x.collate {
            p.print_ucase(" COLLATE ")?;
            p.print(collate)?;
        }
        Ok(Continuation::FullyRendered)
    }
}

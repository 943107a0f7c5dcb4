//! MariaDB rules: MySQL's, except that index statements keep their existence guards.

use crate::ast::{
    BinaryOperator, ColumnOption, CreateIndexStatement, DropIndexStatement, Expr, Limit, Literal,
    OnConflict,
};
use crate::dialect::Dialect;
use crate::dialects::mysql;
use crate::error::RenderResult;
use crate::printer::Printer;
use crate::visitor::walk::{self, IndexSyntax};
use crate::visitor::{Continuation, OutputVisitor};

const INDEX_SYNTAX: IndexSyntax = IndexSyntax {
    if_not_exists: true,
    ..mysql::INDEX_SYNTAX
};

/// MariaDB Visitor.
pub struct MariaDbVisitor;

impl OutputVisitor for MariaDbVisitor {
    fn dialect(&self) -> Dialect {
        Dialect::MariaDB
    }

    fn identifier_quotes(&self) -> (char, char) {
        ('`', '`')
    }

    fn visit_limit(&self, p: &mut Printer<'_>, x: &Limit) -> RenderResult<Continuation> {
        mysql::limit(self, p, x)?;
        Ok(Continuation::FullyRendered)
    }

    fn visit_literal(&self, p: &mut Printer<'_>, x: &Literal) -> RenderResult<Continuation> {
        mysql::literal(p, x)
    }

    fn visit_column_option(&self, p: &mut Printer<'_>, x: &ColumnOption) -> RenderResult<Continuation> {
        mysql::column_option(p, x)
    }

    fn visit_binary(
        &self,
        p: &mut Printer<'_>,
        left: &Expr,
        op: BinaryOperator,
        right: &Expr,
    ) -> RenderResult<Continuation> {
        mysql::binary(self, p, left, op, right)
    }

    fn visit_on_conflict(&self, p: &mut Printer<'_>, x: &OnConflict) -> RenderResult<Continuation> {
        mysql::on_duplicate_key(self, p, x)?;
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
}

//! MySQL rules. The free functions are shared with MariaDB.

use crate::ast::{
    BinaryOperator, ColumnOption, ConflictAction, CreateIndexStatement, DropIndexStatement, Expr, Limit,
    Literal, OnConflict,
};
use crate::dialect::Dialect;
use crate::error::RenderResult;
use crate::printer::Printer;
use crate::visitor::walk::{self, IndexSyntax, UsingPlacement};
use crate::visitor::{Accept, Continuation, OutputVisitor};

/// Row count meaning "no limit" when only an offset is given.
pub const MAX_ROWS: &str = "18446744073709551615";

pub const INDEX_SYNTAX: IndexSyntax = IndexSyntax {
    kinds: Some(&["UNIQUE", "FULLTEXT", "SPATIAL"]),
    if_not_exists: false,
    using: UsingPlacement::AfterColumns,
};

/// MySQL Visitor.
pub struct MysqlVisitor;

impl OutputVisitor for MysqlVisitor {
    fn dialect(&self) -> Dialect {
        Dialect::MySQL
    }

    fn identifier_quotes(&self) -> (char, char) {
        ('`', '`')
    }

    fn visit_limit(&self, p: &mut Printer<'_>, x: &Limit) -> RenderResult<Continuation> {
        limit(self, p, x)?;
        Ok(Continuation::FullyRendered)
    }

    fn visit_literal(&self, p: &mut Printer<'_>, x: &Literal) -> RenderResult<Continuation> {
        literal(p, x)
    }

    fn visit_column_option(&self, p: &mut Printer<'_>, x: &ColumnOption) -> RenderResult<Continuation> {
        column_option(p, x)
    }

    fn visit_binary(
        &self,
        p: &mut Printer<'_>,
        left: &Expr,
        op: BinaryOperator,
        right: &Expr,
    ) -> RenderResult<Continuation> {
        binary(self, p, left, op, right)
    }

    fn visit_on_conflict(&self, p: &mut Printer<'_>, x: &OnConflict) -> RenderResult<Continuation> {
        on_duplicate_key(self, p, x)?;
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
        walk::drop_index_on_table(self, p, x, false)?;
        Ok(Continuation::FullyRendered)
    }
}

/// String literal text. Backslash is an escape character under the default `sql_mode`, so it is
/// doubled along with the quote.
pub fn quote_string(value: &str) -> String {
    walk::quote_string(&value.replace('\\', "\\\\"))
}

pub fn literal(p: &mut Printer<'_>, x: &Literal) -> RenderResult<Continuation> {
    match x {
        Literal::String(value) if !p.parameterized() => {
            p.print(&quote_string(value))?;
            Ok(Continuation::FullyRendered)
        }
        _ => Ok(Continuation::DelegateToDefault),
    }
}

pub fn column_option(p: &mut Printer<'_>, x: &ColumnOption) -> RenderResult<Continuation> {
    match x {
        ColumnOption::Comment(text) => {
            p.print_ucase(" COMMENT ")?;
            p.print(&quote_string(text))?;
            Ok(Continuation::FullyRendered)
        }
        _ => Ok(Continuation::DelegateToDefault),
    }
}

/// `LIMIT [offset, ]count`
pub fn limit<V: OutputVisitor + ?Sized>(v: &V, p: &mut Printer<'_>, x: &Limit) -> RenderResult<()> {
    p.print_ucase("LIMIT ")?;
    if let Some(offset) = &x.offset {
        offset.accept(v, p)?;
        p.print(", ")?;
    }
    match &x.row_count {
        Some(row_count) => row_count.accept(v, p),
        None => p.print(MAX_ROWS),
    }
}

/// `||` has no string meaning here; concatenation chains become one `CONCAT(...)` call.
pub fn binary<V: OutputVisitor + ?Sized>(
    v: &V,
    p: &mut Printer<'_>,
    left: &Expr,
    op: BinaryOperator,
    right: &Expr,
) -> RenderResult<Continuation> {
    if op != BinaryOperator::Concat {
        return Ok(Continuation::DelegateToDefault);
    }
    let mut parts = Vec::new();
    concat_operands(left, &mut parts);
    concat_operands(right, &mut parts);
    p.print_ucase("CONCAT(")?;
    p.print_comma_list(v, &parts)?;
    p.print_char(')')?;
    Ok(Continuation::FullyRendered)
}

fn concat_operands<'e>(expr: &'e Expr, out: &mut Vec<&'e Expr>) {
    match expr {
        Expr::Binary {
            left,
            op: BinaryOperator::Concat,
            right,
        } => {
            concat_operands(left, out);
            concat_operands(right, out);
        }
        other => out.push(other),
    }
}

/// `ON DUPLICATE KEY UPDATE ...`. DO NOTHING becomes a no-op assignment on the first target key.
pub fn on_duplicate_key<V: OutputVisitor + ?Sized>(
    v: &V,
    p: &mut Printer<'_>,
    x: &OnConflict,
) -> RenderResult<()> {
    match &x.action {
        ConflictAction::DoUpdate(assignments) => {
            p.println()?;
            p.print_ucase("ON DUPLICATE KEY UPDATE ")?;
            p.print_comma_list(v, assignments)
        }
        ConflictAction::DoNothing => match x.target.first() {
            Some(key) => {
                p.println()?;
                p.print_ucase("ON DUPLICATE KEY UPDATE ")?;
                key.accept(v, p)?;
                p.print(" = ")?;
                key.accept(v, p)
            }
            None => {
                tracing::debug!(dialect = v.name(), "dropping ON CONFLICT DO NOTHING without a conflict target");
                Ok(())
            }
        },
    }
}

//! Dispatch from AST nodes to visitor rules.

use super::{OutputVisitor, walk};
use crate::ast::*;
use crate::error::RenderResult;
use crate::printer::Printer;

/// A node that can be rendered by an [`OutputVisitor`].
pub trait Accept {
    fn accept<V: OutputVisitor + ?Sized>(&self, v: &V, p: &mut Printer<'_>) -> RenderResult<()>;
}

/// Run the visitor's rule; fall through to the generic rule when it delegates.
macro_rules! dispatch {
    ($v:ident, $p:ident, $node:literal, $visit:ident, $walk:path $(, $arg:expr)*) => {{
        if $v.$visit($p $(, $arg)*)?.descend() {
            tracing::trace!(dialect = $v.name(), node = $node, "delegating to generic rule");
            $walk($v, $p $(, $arg)*)?;
        }
        Ok(())
    }};
}

impl Accept for Statement {
    fn accept<V: OutputVisitor + ?Sized>(&self, v: &V, p: &mut Printer<'_>) -> RenderResult<()> {
        match self {
            Statement::Select(x) => x.accept(v, p),
            Statement::Insert(x) => x.accept(v, p),
            Statement::Replace(x) => x.accept(v, p),
            Statement::Update(x) => x.accept(v, p),
            Statement::Delete(x) => x.accept(v, p),
            Statement::CreateTable(x) => x.accept(v, p),
            Statement::CreateIndex(x) => x.accept(v, p),
            Statement::CreateDatabase(x) => x.accept(v, p),
            Statement::DropTable(x) => x.accept(v, p),
            Statement::DropIndex(x) => x.accept(v, p),
            Statement::Truncate(x) => x.accept(v, p),
        }
    }
}

impl Accept for InsertStatement {
    fn accept<V: OutputVisitor + ?Sized>(&self, v: &V, p: &mut Printer<'_>) -> RenderResult<()> {
        dispatch!(v, p, "insert", visit_insert, walk::insert, self)
    }
}

impl Accept for OnConflict {
    fn accept<V: OutputVisitor + ?Sized>(&self, v: &V, p: &mut Printer<'_>) -> RenderResult<()> {
        dispatch!(v, p, "on_conflict", visit_on_conflict, walk::on_conflict, self)
    }
}

impl Accept for ReplaceStatement {
    fn accept<V: OutputVisitor + ?Sized>(&self, v: &V, p: &mut Printer<'_>) -> RenderResult<()> {
        dispatch!(v, p, "replace", visit_replace, walk::replace, self)
    }
}

impl Accept for UpdateStatement {
    fn accept<V: OutputVisitor + ?Sized>(&self, v: &V, p: &mut Printer<'_>) -> RenderResult<()> {
        dispatch!(v, p, "update", visit_update, walk::update, self)
    }
}

impl Accept for DeleteStatement {
    fn accept<V: OutputVisitor + ?Sized>(&self, v: &V, p: &mut Printer<'_>) -> RenderResult<()> {
        dispatch!(v, p, "delete", visit_delete, walk::delete, self)
    }
}

impl Accept for Assignment {
    fn accept<V: OutputVisitor + ?Sized>(&self, v: &V, p: &mut Printer<'_>) -> RenderResult<()> {
        dispatch!(v, p, "assignment", visit_assignment, walk::assignment, self)
    }
}

impl Accept for CreateTableStatement {
    fn accept<V: OutputVisitor + ?Sized>(&self, v: &V, p: &mut Printer<'_>) -> RenderResult<()> {
        dispatch!(v, p, "create_table", visit_create_table, walk::create_table, self)
    }
}

impl Accept for ColumnDefinition {
    fn accept<V: OutputVisitor + ?Sized>(&self, v: &V, p: &mut Printer<'_>) -> RenderResult<()> {
        dispatch!(v, p, "column_definition", visit_column_definition, walk::column_definition, self)
    }
}

impl Accept for ColumnOption {
    fn accept<V: OutputVisitor + ?Sized>(&self, v: &V, p: &mut Printer<'_>) -> RenderResult<()> {
        dispatch!(v, p, "column_option", visit_column_option, walk::column_option, self)
    }
}

impl Accept for TableConstraint {
    fn accept<V: OutputVisitor + ?Sized>(&self, v: &V, p: &mut Printer<'_>) -> RenderResult<()> {
        dispatch!(v, p, "table_constraint", visit_table_constraint, walk::table_constraint, self)
    }
}

impl Accept for CreateIndexStatement {
    fn accept<V: OutputVisitor + ?Sized>(&self, v: &V, p: &mut Printer<'_>) -> RenderResult<()> {
        dispatch!(v, p, "create_index", visit_create_index, walk::create_index, self)
    }
}

impl Accept for IndexColumn {
    fn accept<V: OutputVisitor + ?Sized>(&self, v: &V, p: &mut Printer<'_>) -> RenderResult<()> {
        dispatch!(v, p, "index_column", visit_index_column, walk::index_column, self)
    }
}

impl Accept for CreateDatabaseStatement {
    fn accept<V: OutputVisitor + ?Sized>(&self, v: &V, p: &mut Printer<'_>) -> RenderResult<()> {
        dispatch!(v, p, "create_database", visit_create_database, walk::create_database, self)
    }
}

impl Accept for DropTableStatement {
    fn accept<V: OutputVisitor + ?Sized>(&self, v: &V, p: &mut Printer<'_>) -> RenderResult<()> {
        dispatch!(v, p, "drop_table", visit_drop_table, walk::drop_table, self)
    }
}

impl Accept for DropIndexStatement {
    fn accept<V: OutputVisitor + ?Sized>(&self, v: &V, p: &mut Printer<'_>) -> RenderResult<()> {
        dispatch!(v, p, "drop_index", visit_drop_index, walk::drop_index, self)
    }
}

impl Accept for TruncateStatement {
    fn accept<V: OutputVisitor + ?Sized>(&self, v: &V, p: &mut Printer<'_>) -> RenderResult<()> {
        dispatch!(v, p, "truncate", visit_truncate, walk::truncate, self)
    }
}

impl Accept for Query {
    fn accept<V: OutputVisitor + ?Sized>(&self, v: &V, p: &mut Printer<'_>) -> RenderResult<()> {
        dispatch!(v, p, "query", visit_query, walk::query, self)
    }
}

impl Accept for Cte {
    fn accept<V: OutputVisitor + ?Sized>(&self, v: &V, p: &mut Printer<'_>) -> RenderResult<()> {
        dispatch!(v, p, "cte", visit_cte, walk::cte, self)
    }
}

impl Accept for SetExpr {
    fn accept<V: OutputVisitor + ?Sized>(&self, v: &V, p: &mut Printer<'_>) -> RenderResult<()> {
        match self {
            SetExpr::Select(select) => select.accept(v, p),
            SetExpr::SetOperation { left, op, all, right } => dispatch!(
                v,
                p,
                "set_operation",
                visit_set_operation,
                walk::set_operation,
                left,
                *op,
                *all,
                right
            ),
            SetExpr::Values(rows) => dispatch!(v, p, "values", visit_values, walk::values, rows),
            SetExpr::Query(query) => {
                dispatch!(v, p, "subquery", visit_subquery, walk::subquery, query)
            }
        }
    }
}

impl Accept for Select {
    fn accept<V: OutputVisitor + ?Sized>(&self, v: &V, p: &mut Printer<'_>) -> RenderResult<()> {
        dispatch!(v, p, "select", visit_select, walk::select, self)
    }
}

impl Accept for SelectItem {
    fn accept<V: OutputVisitor + ?Sized>(&self, v: &V, p: &mut Printer<'_>) -> RenderResult<()> {
        dispatch!(v, p, "select_item", visit_select_item, walk::select_item, self)
    }
}

impl Accept for ValuesClause {
    fn accept<V: OutputVisitor + ?Sized>(&self, v: &V, p: &mut Printer<'_>) -> RenderResult<()> {
        dispatch!(v, p, "values_clause", visit_values_clause, walk::values_clause, self)
    }
}

impl Accept for TableSource {
    fn accept<V: OutputVisitor + ?Sized>(&self, v: &V, p: &mut Printer<'_>) -> RenderResult<()> {
        dispatch!(v, p, "table_source", visit_table_source, walk::table_source, self)
    }
}

impl Accept for OrderByItem {
    fn accept<V: OutputVisitor + ?Sized>(&self, v: &V, p: &mut Printer<'_>) -> RenderResult<()> {
        dispatch!(v, p, "order_by_item", visit_order_by_item, walk::order_by_item, self)
    }
}

impl Accept for Limit {
    fn accept<V: OutputVisitor + ?Sized>(&self, v: &V, p: &mut Printer<'_>) -> RenderResult<()> {
        dispatch!(v, p, "limit", visit_limit, walk::limit, self)
    }
}

impl Accept for CommentHint {
    fn accept<V: OutputVisitor + ?Sized>(&self, v: &V, p: &mut Printer<'_>) -> RenderResult<()> {
        dispatch!(v, p, "comment_hint", visit_comment_hint, walk::comment_hint, self)
    }
}

impl Accept for Ident {
    fn accept<V: OutputVisitor + ?Sized>(&self, v: &V, p: &mut Printer<'_>) -> RenderResult<()> {
        dispatch!(v, p, "identifier", visit_identifier, walk::identifier, self)
    }
}

impl Accept for Literal {
    fn accept<V: OutputVisitor + ?Sized>(&self, v: &V, p: &mut Printer<'_>) -> RenderResult<()> {
        dispatch!(v, p, "literal", visit_literal, walk::literal, self)
    }
}

impl Accept for DataType {
    fn accept<V: OutputVisitor + ?Sized>(&self, v: &V, p: &mut Printer<'_>) -> RenderResult<()> {
        dispatch!(v, p, "data_type", visit_data_type, walk::data_type, self)
    }
}

impl Accept for Expr {
    fn accept<V: OutputVisitor + ?Sized>(&self, v: &V, p: &mut Printer<'_>) -> RenderResult<()> {
        match self {
            Expr::Identifier(ident) => ident.accept(v, p),
            Expr::Property { owner, name } => {
                dispatch!(v, p, "property", visit_property, walk::property, owner, name)
            }
            Expr::AllColumns { owner } => dispatch!(
                v,
                p,
                "all_columns",
                visit_all_columns,
                walk::all_columns,
                owner.as_deref()
            ),
            Expr::Literal(literal) => literal.accept(v, p),
            Expr::Placeholder(text) => {
                dispatch!(v, p, "placeholder", visit_placeholder, walk::placeholder, text)
            }
            Expr::Binary { left, op, right } => {
                dispatch!(v, p, "binary", visit_binary, walk::binary, left, *op, right)
            }
            Expr::Unary { op, expr } => dispatch!(v, p, "unary", visit_unary, walk::unary, *op, expr),
            Expr::IsNull { expr, negated } => {
                dispatch!(v, p, "is_null", visit_is_null, walk::is_null, expr, *negated)
            }
            Expr::InList { expr, list, negated } => {
                dispatch!(v, p, "in_list", visit_in_list, walk::in_list, expr, list, *negated)
            }
            Expr::InSubquery { expr, query, negated } => dispatch!(
                v,
                p,
                "in_subquery",
                visit_in_subquery,
                walk::in_subquery,
                expr,
                query,
                *negated
            ),
            Expr::Between {
                expr,
                low,
                high,
                negated,
            } => dispatch!(v, p, "between", visit_between, walk::between, expr, low, high, *negated),
            Expr::Function {
                owner,
                name,
                args,
                distinct,
            } => dispatch!(
                v,
                p,
                "function",
                visit_function,
                walk::function,
                owner.as_deref(),
                name,
                args,
                *distinct
            ),
            Expr::Cast { expr, data_type } => {
                dispatch!(v, p, "cast", visit_cast, walk::cast, expr, data_type)
            }
            Expr::Case {
                operand,
                when_then,
                else_result,
            } => dispatch!(
                v,
                p,
                "case",
                visit_case,
                walk::case,
                operand.as_deref(),
                when_then,
                else_result.as_deref()
            ),
            Expr::Exists { query, negated } => {
                dispatch!(v, p, "exists", visit_exists, walk::exists, query, *negated)
            }
            Expr::Subquery(query) => dispatch!(v, p, "subquery", visit_subquery, walk::subquery, query),
            Expr::Tuple(items) => dispatch!(v, p, "tuple", visit_tuple, walk::tuple, items),
            Expr::Nested(expr) => dispatch!(v, p, "nested", visit_nested, walk::nested, expr),
            Expr::Default => dispatch!(v, p, "default", visit_default, walk::default_value),
        }
    }
}

impl<T: Accept + ?Sized> Accept for &T {
    fn accept<V: OutputVisitor + ?Sized>(&self, v: &V, p: &mut Printer<'_>) -> RenderResult<()> {
        (**self).accept(v, p)
    }
}

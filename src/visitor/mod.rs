//! Output visitor: one rendering rule per node variant, overridable per dialect.
//!
//! Every `visit_*` method defaults to the generic rule in [`walk`]. A dialect visitor is a unit
//! struct that overrides only the variants whose surface syntax differs, and hands everything else
//! back to the defaults. Overrides that only decorate a node return
//! [`Continuation::DelegateToDefault`]; [`Accept::accept`] then runs the generic rule after them.

mod accept;
pub mod keywords;
pub mod walk;

pub use accept::Accept;

use crate::ast::*;
use crate::dialect::Dialect;
use crate::error::RenderResult;
use crate::printer::Printer;

/// What a rule tells the dispatcher after it has written its output.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Continuation {
    /// The node and all of its children are rendered.
    FullyRendered,
    /// Only node-local decoration (or nothing) was written; run the generic rule next.
    DelegateToDefault,
}

impl Continuation {
    pub fn descend(self) -> bool {
        matches!(self, Continuation::DelegateToDefault)
    }
}

macro_rules! generic {
    ($walk:path, $self:ident, $p:ident $(, $arg:expr)*) => {{
        $walk($self, $p $(, $arg)*)?;
        Ok(Continuation::FullyRendered)
    }};
}

/// Dialect-specific SQL rendering.
///
/// Implementations must stay pure: the same node rendered with the same printer settings yields
/// the same text.
pub trait OutputVisitor {
    fn dialect(&self) -> Dialect;

    fn name(&self) -> &'static str {
        self.dialect().name()
    }

    /// Opening and closing identifier delimiters.
    fn identifier_quotes(&self) -> (char, char) {
        ('"', '"')
    }

    /// Words that must be delimited when used as identifiers.
    fn is_reserved(&self, word: &str) -> bool {
        keywords::is_reserved(word)
    }

    // ---------- Statements ----------

    fn visit_insert(&self, p: &mut Printer<'_>, x: &InsertStatement) -> RenderResult<Continuation> {
        generic!(walk::insert, self, p, x)
    }

    fn visit_on_conflict(&self, p: &mut Printer<'_>, x: &OnConflict) -> RenderResult<Continuation> {
        generic!(walk::on_conflict, self, p, x)
    }

    fn visit_replace(&self, p: &mut Printer<'_>, x: &ReplaceStatement) -> RenderResult<Continuation> {
        generic!(walk::replace, self, p, x)
    }

    fn visit_update(&self, p: &mut Printer<'_>, x: &UpdateStatement) -> RenderResult<Continuation> {
        generic!(walk::update, self, p, x)
    }

    fn visit_delete(&self, p: &mut Printer<'_>, x: &DeleteStatement) -> RenderResult<Continuation> {
        generic!(walk::delete, self, p, x)
    }

    fn visit_assignment(&self, p: &mut Printer<'_>, x: &Assignment) -> RenderResult<Continuation> {
        generic!(walk::assignment, self, p, x)
    }

    fn visit_create_table(
        &self,
        p: &mut Printer<'_>,
        x: &CreateTableStatement,
    ) -> RenderResult<Continuation> {
        generic!(walk::create_table, self, p, x)
    }

    fn visit_column_definition(
        &self,
        p: &mut Printer<'_>,
        x: &ColumnDefinition,
    ) -> RenderResult<Continuation> {
        generic!(walk::column_definition, self, p, x)
    }

    /// Options print their own leading space, so an override may drop one by printing nothing.
    fn visit_column_option(&self, p: &mut Printer<'_>, x: &ColumnOption) -> RenderResult<Continuation> {
        generic!(walk::column_option, self, p, x)
    }

    fn visit_table_constraint(
        &self,
        p: &mut Printer<'_>,
        x: &TableConstraint,
    ) -> RenderResult<Continuation> {
        generic!(walk::table_constraint, self, p, x)
    }

    fn visit_create_index(
        &self,
        p: &mut Printer<'_>,
        x: &CreateIndexStatement,
    ) -> RenderResult<Continuation> {
        generic!(walk::create_index, self, p, x)
    }

    fn visit_index_column(&self, p: &mut Printer<'_>, x: &IndexColumn) -> RenderResult<Continuation> {
        generic!(walk::index_column, self, p, x)
    }

    fn visit_create_database(
        &self,
        p: &mut Printer<'_>,
        x: &CreateDatabaseStatement,
    ) -> RenderResult<Continuation> {
        generic!(walk::create_database, self, p, x)
    }

    fn visit_drop_table(&self, p: &mut Printer<'_>, x: &DropTableStatement) -> RenderResult<Continuation> {
        generic!(walk::drop_table, self, p, x)
    }

    fn visit_drop_index(&self, p: &mut Printer<'_>, x: &DropIndexStatement) -> RenderResult<Continuation> {
        generic!(walk::drop_index, self, p, x)
    }

    fn visit_truncate(&self, p: &mut Printer<'_>, x: &TruncateStatement) -> RenderResult<Continuation> {
        generic!(walk::truncate, self, p, x)
    }

    // ---------- Queries ----------

    fn visit_query(&self, p: &mut Printer<'_>, x: &Query) -> RenderResult<Continuation> {
        generic!(walk::query, self, p, x)
    }

    fn visit_cte(&self, p: &mut Printer<'_>, x: &Cte) -> RenderResult<Continuation> {
        generic!(walk::cte, self, p, x)
    }

    fn visit_select(&self, p: &mut Printer<'_>, x: &Select) -> RenderResult<Continuation> {
        generic!(walk::select, self, p, x)
    }

    fn visit_select_item(&self, p: &mut Printer<'_>, x: &SelectItem) -> RenderResult<Continuation> {
        generic!(walk::select_item, self, p, x)
    }

    fn visit_set_operation(
        &self,
        p: &mut Printer<'_>,
        left: &SetExpr,
        op: SetOperator,
        all: bool,
        right: &SetExpr,
    ) -> RenderResult<Continuation> {
        generic!(walk::set_operation, self, p, left, op, all, right)
    }

    /// A VALUES list used as a query body.
    fn visit_values(&self, p: &mut Printer<'_>, rows: &[ValuesClause]) -> RenderResult<Continuation> {
        generic!(walk::values, self, p, rows)
    }

    fn visit_values_clause(&self, p: &mut Printer<'_>, x: &ValuesClause) -> RenderResult<Continuation> {
        generic!(walk::values_clause, self, p, x)
    }

    fn visit_table_source(&self, p: &mut Printer<'_>, x: &TableSource) -> RenderResult<Continuation> {
        generic!(walk::table_source, self, p, x)
    }

    fn visit_order_by_item(&self, p: &mut Printer<'_>, x: &OrderByItem) -> RenderResult<Continuation> {
        generic!(walk::order_by_item, self, p, x)
    }

    fn visit_limit(&self, p: &mut Printer<'_>, x: &Limit) -> RenderResult<Continuation> {
        generic!(walk::limit, self, p, x)
    }

    fn visit_comment_hint(&self, p: &mut Printer<'_>, x: &CommentHint) -> RenderResult<Continuation> {
        generic!(walk::comment_hint, self, p, x)
    }

    // ---------- Expressions ----------

    fn visit_identifier(&self, p: &mut Printer<'_>, x: &Ident) -> RenderResult<Continuation> {
        generic!(walk::identifier, self, p, x)
    }

    fn visit_property(&self, p: &mut Printer<'_>, owner: &Expr, name: &Ident) -> RenderResult<Continuation> {
        generic!(walk::property, self, p, owner, name)
    }

    fn visit_all_columns(&self, p: &mut Printer<'_>, owner: Option<&Expr>) -> RenderResult<Continuation> {
        generic!(walk::all_columns, self, p, owner)
    }

    fn visit_literal(&self, p: &mut Printer<'_>, x: &Literal) -> RenderResult<Continuation> {
        generic!(walk::literal, self, p, x)
    }

    fn visit_placeholder(&self, p: &mut Printer<'_>, text: &str) -> RenderResult<Continuation> {
        generic!(walk::placeholder, self, p, text)
    }

    fn visit_binary(
        &self,
        p: &mut Printer<'_>,
        left: &Expr,
        op: BinaryOperator,
        right: &Expr,
    ) -> RenderResult<Continuation> {
        generic!(walk::binary, self, p, left, op, right)
    }

    fn visit_unary(&self, p: &mut Printer<'_>, op: UnaryOperator, expr: &Expr) -> RenderResult<Continuation> {
        generic!(walk::unary, self, p, op, expr)
    }

    fn visit_is_null(&self, p: &mut Printer<'_>, expr: &Expr, negated: bool) -> RenderResult<Continuation> {
        generic!(walk::is_null, self, p, expr, negated)
    }

    fn visit_in_list(
        &self,
        p: &mut Printer<'_>,
        expr: &Expr,
        list: &[Expr],
        negated: bool,
    ) -> RenderResult<Continuation> {
        generic!(walk::in_list, self, p, expr, list, negated)
    }

    fn visit_in_subquery(
        &self,
        p: &mut Printer<'_>,
        expr: &Expr,
        query: &Query,
        negated: bool,
    ) -> RenderResult<Continuation> {
        generic!(walk::in_subquery, self, p, expr, query, negated)
    }

    fn visit_between(
        &self,
        p: &mut Printer<'_>,
        expr: &Expr,
        low: &Expr,
        high: &Expr,
        negated: bool,
    ) -> RenderResult<Continuation> {
        generic!(walk::between, self, p, expr, low, high, negated)
    }

    fn visit_function(
        &self,
        p: &mut Printer<'_>,
        owner: Option<&Expr>,
        name: &str,
        args: &[Expr],
        distinct: bool,
    ) -> RenderResult<Continuation> {
        generic!(walk::function, self, p, owner, name, args, distinct)
    }

    fn visit_cast(&self, p: &mut Printer<'_>, expr: &Expr, data_type: &DataType) -> RenderResult<Continuation> {
        generic!(walk::cast, self, p, expr, data_type)
    }

    fn visit_data_type(&self, p: &mut Printer<'_>, x: &DataType) -> RenderResult<Continuation> {
        generic!(walk::data_type, self, p, x)
    }

    fn visit_case(
        &self,
        p: &mut Printer<'_>,
        operand: Option<&Expr>,
        when_then: &[(Expr, Expr)],
        else_result: Option<&Expr>,
    ) -> RenderResult<Continuation> {
        generic!(walk::case, self, p, operand, when_then, else_result)
    }

    fn visit_exists(&self, p: &mut Printer<'_>, query: &Query, negated: bool) -> RenderResult<Continuation> {
        generic!(walk::exists, self, p, query, negated)
    }

    /// Parenthesized query, in expression or query-body position.
    fn visit_subquery(&self, p: &mut Printer<'_>, query: &Query) -> RenderResult<Continuation> {
        generic!(walk::subquery, self, p, query)
    }

    fn visit_tuple(&self, p: &mut Printer<'_>, items: &[Expr]) -> RenderResult<Continuation> {
        generic!(walk::tuple, self, p, items)
    }

    fn visit_nested(&self, p: &mut Printer<'_>, expr: &Expr) -> RenderResult<Continuation> {
        generic!(walk::nested, self, p, expr)
    }

    fn visit_default(&self, p: &mut Printer<'_>) -> RenderResult<Continuation> {
        generic!(walk::default_value, self, p)
    }
}

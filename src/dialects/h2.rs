//! H2 database rules.
//!
//! H2 has no REPLACE statement; its upsert is `MERGE INTO ... KEY (...)`, which matches rows on the
//! key columns (or the primary key when `KEY` is omitted). Databases are schemas.

use crate::ast::{CreateDatabaseStatement, CreateIndexStatement, ReplaceStatement};
use crate::dialect::Dialect;
use crate::error::RenderResult;
use crate::printer::Printer;
use crate::visitor::walk::{self, IndexSyntax, UsingPlacement};
use crate::visitor::{Accept, Continuation, OutputVisitor};

const INDEX_SYNTAX: IndexSyntax = IndexSyntax {
    kinds: Some(&["UNIQUE", "SPATIAL"]),
    if_not_exists: true,
    using: UsingPlacement::Unsupported,
};

/// H2 Visitor.
pub struct H2Visitor;

impl OutputVisitor for H2Visitor {
    fn dialect(&self) -> Dialect {
        Dialect::H2
    }

    /// `MERGE INTO t[ KEY (cols)]` followed by the rows or the source query.
    fn visit_replace(&self, p: &mut Printer<'_>, x: &ReplaceStatement) -> RenderResult<Continuation> {
        p.print_ucase("MERGE INTO ")?;
        x.table.accept(self, p)?;
        if !x.columns.is_empty() {
            p.print_ucase(" KEY ")?;
            p.print_paren_list(self, &x.columns)?;
        }
        walk::row_source(self, p, x.values.as_deref(), x.query.as_deref())?;
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
        if x.character_set.is_some() || x.collate.is_some() {
            tracing::debug!(dialect = self.name(), "dropping character set and collation from CREATE SCHEMA");
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

//! # sqlout: dialect-aware SQL rendering
//!
//! Renders a SQL abstract syntax tree back into text that a specific database accepts.
//! Dialects share one set of generic rules and override only the statement shapes where they
//! diverge: an H2 upsert is `MERGE INTO ... KEY (...)`, a DuckDB one `INSERT OR REPLACE`.
//!
//! ## Quick Example
//!
//! ```
//! use sqlout::prelude::*;
//! use sqlout::ast::builders::*;
//!
//! let upsert = Statement::Replace(ReplaceStatement {
//!     table: ident("t1"),
//!     columns: vec![ident("id")],
//!     values: Some(vec![row(vec![int(1), text("a")])]),
//!     query: None,
//! });
//!
//! assert_eq!(upsert.to_sql_with_dialect(Dialect::H2), "MERGE INTO t1 KEY (id)\nVALUES (1, 'a')");
//! assert_eq!(upsert.to_sql_with_dialect(Dialect::MySQL), "REPLACE INTO t1 (id)\nVALUES (1, 'a')");
//! ```
//!
//! ## Layout
//!
//! | Module | Role |
//! |--------|------|
//! | [`ast`] | closed node set |
//! | [`printer`] | formatting state for one render pass |
//! | [`visitor`] | dispatch protocol and generic rules |
//! | [`dialects`] | per-dialect overrides |
//! | [`render`] | entry points |

pub mod ast;
pub mod config;
pub mod dialect;
pub mod dialects;
pub mod error;
pub mod printer;
pub mod render;
pub mod visitor;

pub use config::RenderConfig;
pub use dialect::Dialect;
pub use error::{RenderError, RenderResult};
pub use render::{Renderer, ToSql, render, render_parameterized, write_sql};

pub mod prelude {
    pub use crate::ast::*;
    pub use crate::config::RenderConfig;
    pub use crate::dialect::Dialect;
    pub use crate::error::*;
    pub use crate::render::{Renderer, ToSql, render, render_parameterized};
    pub use crate::visitor::{Accept, Continuation, OutputVisitor};
}

//! SQL abstract syntax tree.
//!
//! The node set is closed: every renderer matches exhaustively, so a new variant does not compile
//! until the generic rule for it exists.

pub mod builders;
pub mod expr;
pub mod ident;
pub mod operators;
pub mod query;
pub mod stmt;
pub mod values;

pub use expr::*;
pub use ident::*;
pub use operators::*;
pub use query::*;
pub use stmt::*;
pub use values::*;

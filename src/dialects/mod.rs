//! Per-dialect visitors.
//!
//! Each visitor overrides only the node variants whose syntax differs from the generic rules.
//! Rules shared by related engines (MySQL/MariaDB, PostgreSQL/Redshift) are free functions generic
//! over the visitor, so children keep dispatching through the dialect actually rendering.

pub mod bigquery;
pub mod duckdb;
pub mod generic;
pub mod h2;
pub mod mariadb;
pub mod mysql;
pub mod oracle;
pub mod postgres;
pub mod redshift;
pub mod snowflake;
pub mod sqlite;
pub mod sqlserver;

#[cfg(test)]
mod tests;

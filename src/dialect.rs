use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::dialects::{
    bigquery::BigQueryVisitor, duckdb::DuckDbVisitor, generic::GenericVisitor, h2::H2Visitor,
    mariadb::MariaDbVisitor, mysql::MysqlVisitor, oracle::OracleVisitor, postgres::PostgresVisitor,
    redshift::RedshiftVisitor, snowflake::SnowflakeVisitor, sqlite::SqliteVisitor,
    sqlserver::SqlServerVisitor,
};
use crate::error::RenderError;
use crate::visitor::OutputVisitor;

/// Supported SQL Dialects.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase", try_from = "String")]
pub enum Dialect {
    /// Dialect-neutral rendering
    #[default]
    Generic,
    H2,
    Postgres,
    MySQL,
    MariaDB,
    SQLite,
    DuckDB,
    SqlServer,
    Oracle,
    Snowflake,
    BigQuery,
    Redshift,
}

impl Dialect {
    pub fn all() -> &'static [Dialect] {
        &[
            Dialect::Generic,
            Dialect::H2,
            Dialect::Postgres,
            Dialect::MySQL,
            Dialect::MariaDB,
            Dialect::SQLite,
            Dialect::DuckDB,
            Dialect::SqlServer,
            Dialect::Oracle,
            Dialect::Snowflake,
            Dialect::BigQuery,
            Dialect::Redshift,
        ]
    }

    /// Lowercase tag, as accepted by `FromStr` and the config file.
    pub fn name(self) -> &'static str {
        match self {
            Dialect::Generic => "generic",
            Dialect::H2 => "h2",
            Dialect::Postgres => "postgres",
            Dialect::MySQL => "mysql",
            Dialect::MariaDB => "mariadb",
            Dialect::SQLite => "sqlite",
            Dialect::DuckDB => "duckdb",
            Dialect::SqlServer => "sqlserver",
            Dialect::Oracle => "oracle",
            Dialect::Snowflake => "snowflake",
            Dialect::BigQuery => "bigquery",
            Dialect::Redshift => "redshift",
        }
    }

    /// The rule set for this dialect.
    pub fn visitor(self) -> &'static dyn OutputVisitor {
        match self {
            Dialect::Generic => &GenericVisitor,
            Dialect::H2 => &H2Visitor,
            Dialect::Postgres => &PostgresVisitor,
            Dialect::MySQL => &MysqlVisitor,
            Dialect::MariaDB => &MariaDbVisitor,
            Dialect::SQLite => &SqliteVisitor,
            Dialect::DuckDB => &DuckDbVisitor,
            Dialect::SqlServer => &SqlServerVisitor,
            Dialect::Oracle => &OracleVisitor,
            Dialect::Snowflake => &SnowflakeVisitor,
            Dialect::BigQuery => &BigQueryVisitor,
            Dialect::Redshift => &RedshiftVisitor,
        }
    }
}

impl fmt::Display for Dialect {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

impl FromStr for Dialect {
    type Err = RenderError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let dialect = match s.trim().to_lowercase().as_str() {
            "generic" | "ansi" => Dialect::Generic,
            "h2" => Dialect::H2,
            "postgres" | "postgresql" | "pg" => Dialect::Postgres,
            "mysql" => Dialect::MySQL,
            "mariadb" => Dialect::MariaDB,
            "sqlite" | "sqlite3" => Dialect::SQLite,
            "duckdb" => Dialect::DuckDB,
            "sqlserver" | "mssql" | "tsql" => Dialect::SqlServer,
            "oracle" => Dialect::Oracle,
            "snowflake" => Dialect::Snowflake,
            "bigquery" => Dialect::BigQuery,
            "redshift" => Dialect::Redshift,
            _ => return Err(RenderError::UnknownDialect(s.to_string())),
        };
        Ok(dialect)
    }
}

impl TryFrom<String> for Dialect {
    type Error = RenderError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_aliases() {
        assert_eq!("PostgreSQL".parse::<Dialect>().unwrap(), Dialect::Postgres);
        assert_eq!("pg".parse::<Dialect>().unwrap(), Dialect::Postgres);
        assert_eq!("MSSQL".parse::<Dialect>().unwrap(), Dialect::SqlServer);
        assert_eq!(" sqlite3 ".parse::<Dialect>().unwrap(), Dialect::SQLite);
        assert_eq!("ansi".parse::<Dialect>().unwrap(), Dialect::Generic);
    }

    #[test]
    fn test_parse_unknown() {
        let err = "cobol".parse::<Dialect>().unwrap_err();
        assert!(matches!(err, RenderError::UnknownDialect(ref s) if s == "cobol"));
    }

    #[test]
    fn test_name_round_trips() {
        for dialect in Dialect::all() {
            assert_eq!(dialect.name().parse::<Dialect>().unwrap(), *dialect);
            assert_eq!(dialect.to_string(), dialect.name());
        }
    }

    #[test]
    fn test_visitor_reports_its_dialect() {
        for dialect in Dialect::all() {
            assert_eq!(dialect.visitor().dialect(), *dialect);
        }
    }

    #[test]
    fn test_serde_lowercase() {
        assert_eq!(serde_json::to_string(&Dialect::SqlServer).unwrap(), "\"sqlserver\"");
        assert_eq!(serde_json::to_string(&Dialect::MySQL).unwrap(), "\"mysql\"");
        let d: Dialect = serde_json::from_str("\"TSQL\"").unwrap();
        assert_eq!(d, Dialect::SqlServer);
    }
}

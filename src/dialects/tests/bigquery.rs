use super::*;
use crate::render::ToSql;
use pretty_assertions::assert_eq;

#[test]
fn test_bigquery_column_description() {
    assert_eq!(
        create_users_table().to_sql_with_dialect(Dialect::BigQuery),
        users_table_sql(" NOT NULL", " UNIQUE OPTIONS(description = 'login')")
    );
}

#[test]
fn test_bigquery_create_schema() {
    assert_eq!(
        create_database(true, Some("utf8"), Some("und:ci")).to_sql_with_dialect(Dialect::BigQuery),
        "CREATE SCHEMA IF NOT EXISTS app DEFAULT COLLATE 'und:ci'"
    );
}

#[test]
fn test_bigquery_backticks() {
    assert_eq!(col("my-project.ds.t").to_sql_with_dialect(Dialect::BigQuery), "`my-project`.ds.t");
}

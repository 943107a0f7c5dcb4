use super::*;
use crate::render::ToSql;
use pretty_assertions::assert_eq;

#[test]
fn test_snowflake_autoincrement_keeps_comment() {
    assert_eq!(
        create_users_table().to_sql_with_dialect(Dialect::Snowflake),
        users_table_sql(" NOT NULL AUTOINCREMENT", " UNIQUE COMMENT 'login'")
    );
}

#[test]
fn test_snowflake_create_database() {
    assert_eq!(
        create_database(true, Some("utf8"), Some("en-ci")).to_sql_with_dialect(Dialect::Snowflake),
        "CREATE DATABASE IF NOT EXISTS app DEFAULT_DDL_COLLATION = 'en-ci'"
    );
    assert_eq!(
        create_database(false, None, None).to_sql_with_dialect(Dialect::Snowflake),
        "CREATE DATABASE app"
    );
}

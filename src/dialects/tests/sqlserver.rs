use super::*;
use crate::render::ToSql;
use pretty_assertions::assert_eq;

#[test]
fn test_sqlserver_offset_fetch_and_bit_literals() {
    let sql = report_query().to_sql_with_dialect(Dialect::SqlServer);
    assert_eq!(
        sql,
        format!("{}OFFSET 20 ROWS FETCH NEXT 10 ROWS ONLY", report_sql_head("1"))
    );
}

#[test]
fn test_sqlserver_row_count_only() {
    let query = Query::from(select(vec![star()], "users")).limit(Some(int(5)), None);
    assert_eq!(
        query.to_sql_with_dialect(Dialect::SqlServer),
        "SELECT *\nFROM users\nOFFSET 0 ROWS FETCH NEXT 5 ROWS ONLY"
    );
}

#[test]
fn test_sqlserver_brackets() {
    assert_eq!(ident("order").to_sql_with_dialect(Dialect::SqlServer), "[order]");
    assert_eq!(ident("a]b").to_sql_with_dialect(Dialect::SqlServer), "[a]]b]");
    assert_eq!(quoted("Users").to_sql_with_dialect(Dialect::SqlServer), "[Users]");
}

#[test]
fn test_sqlserver_concat_with_plus() {
    assert_eq!(concat_chain().to_sql_with_dialect(Dialect::SqlServer), "a + b + c");
}

#[test]
fn test_sqlserver_identity_column() {
    assert_eq!(
        create_users_table().to_sql_with_dialect(Dialect::SqlServer),
        users_table_sql(" NOT NULL IDENTITY(1, 1)", " UNIQUE")
    );
}

#[test]
fn test_sqlserver_clustered_index() {
    assert_eq!(
        create_index(Some("clustered"), true, Some("btree")).to_sql_with_dialect(Dialect::SqlServer),
        "CREATE CLUSTERED INDEX idx_users_email ON users (email)"
    );
}

#[test]
fn test_sqlserver_drop_index_on_table() {
    assert_eq!(
        drop_index(true).to_sql_with_dialect(Dialect::SqlServer),
        "DROP INDEX IF EXISTS idx_users_email ON users"
    );
}

#[test]
fn test_sqlserver_truncate_per_table() {
    assert_eq!(
        truncate_two().to_sql_with_dialect(Dialect::SqlServer),
        "TRUNCATE TABLE a;\nTRUNCATE TABLE b"
    );
}

#[test]
fn test_sqlserver_create_database() {
    assert_eq!(
        create_database(true, Some("utf8"), Some("Latin1_General_CI_AS"))
            .to_sql_with_dialect(Dialect::SqlServer),
        "CREATE DATABASE app COLLATE Latin1_General_CI_AS"
    );
}

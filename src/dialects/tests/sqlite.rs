use super::*;
use crate::render::ToSql;
use pretty_assertions::assert_eq;

#[test]
fn test_sqlite_truncate_becomes_delete() {
    assert_eq!(
        truncate_two().to_sql_with_dialect(Dialect::SQLite),
        "DELETE FROM a;\nDELETE FROM b"
    );
    assert_eq!(lower(&truncate_two(), Dialect::SQLite), "delete from a;\ndelete from b");
}

#[test]
fn test_sqlite_autoincrement() {
    assert_eq!(
        create_users_table().to_sql_with_dialect(Dialect::SQLite),
        users_table_sql(" NOT NULL AUTOINCREMENT", " UNIQUE")
    );
}

#[test]
fn test_sqlite_create_index() {
    assert_eq!(
        create_index(Some("unique"), true, Some("btree")).to_sql_with_dialect(Dialect::SQLite),
        "CREATE UNIQUE INDEX IF NOT EXISTS idx_users_email ON users (email)"
    );
}

#[test]
fn test_sqlite_drop_index_has_no_table() {
    assert_eq!(
        drop_index(true).to_sql_with_dialect(Dialect::SQLite),
        "DROP INDEX IF EXISTS idx_users_email"
    );
}

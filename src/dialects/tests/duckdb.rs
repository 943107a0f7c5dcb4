use super::*;
use crate::render::ToSql;
use pretty_assertions::assert_eq;

#[test]
fn test_duckdb_insert_or_replace() {
    let stmt = upsert(&["id"], Some(vec![row(vec![int(1), text("a")])]));
    assert_eq!(
        stmt.to_sql_with_dialect(Dialect::DuckDB),
        "INSERT OR REPLACE INTO t1 (id)\nVALUES (1, 'a')"
    );
    assert_eq!(upsert(&[], None).to_sql_with_dialect(Dialect::DuckDB), "INSERT OR REPLACE INTO t1");
}

#[test]
fn test_duckdb_drops_autoincrement_and_comment() {
    assert_eq!(
        create_users_table().to_sql_with_dialect(Dialect::DuckDB),
        users_table_sql(" NOT NULL", " UNIQUE")
    );
}

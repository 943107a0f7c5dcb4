use super::*;
use crate::render::ToSql;
use pretty_assertions::assert_eq;

fn drop_two(if_exists: bool, cascade: bool) -> Statement {
    Statement::DropTable(DropTableStatement {
        if_exists,
        names: vec![ident("a"), ident("b")],
        cascade,
    })
}

#[test]
fn test_oracle_drop_table_per_table() {
    assert_eq!(
        drop_two(true, true).to_sql_with_dialect(Dialect::Oracle),
        "DROP TABLE a CASCADE CONSTRAINTS;\nDROP TABLE b CASCADE CONSTRAINTS"
    );
    assert_eq!(
        drop_two(false, false).to_sql_with_dialect(Dialect::Oracle),
        "DROP TABLE a;\nDROP TABLE b"
    );
    assert_eq!(
        drop_two(true, true).to_sql_with_dialect(Dialect::Generic),
        "DROP TABLE IF EXISTS a, b CASCADE"
    );
}

#[test]
fn test_oracle_bitmap_index() {
    assert_eq!(
        create_index(Some("bitmap"), true, None).to_sql_with_dialect(Dialect::Oracle),
        "CREATE BITMAP INDEX idx_users_email ON users (email)"
    );
}

#[test]
fn test_oracle_offset_fetch() {
    let sql = report_query().to_sql_with_dialect(Dialect::Oracle);
    assert_eq!(
        sql,
        format!("{}OFFSET 20 ROWS FETCH NEXT 10 ROWS ONLY", report_sql_head("1"))
    );
}

#[test]
fn test_oracle_boolean_literals() {
    assert_eq!(boolean(false).to_sql_with_dialect(Dialect::Oracle), "0");
    assert_eq!(null().to_sql_with_dialect(Dialect::Oracle), "NULL");
}

#[test]
fn test_oracle_identity_column() {
    assert_eq!(
        create_users_table().to_sql_with_dialect(Dialect::Oracle),
        users_table_sql(" NOT NULL GENERATED BY DEFAULT AS IDENTITY", " UNIQUE")
    );
}

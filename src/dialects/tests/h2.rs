use super::*;
use crate::render::ToSql;
use pretty_assertions::assert_eq;

#[test]
fn test_h2_merge_into() {
    let stmt = upsert(&["id"], Some(vec![row(vec![int(1), text("a")])]));
    assert_eq!(
        stmt.to_sql_with_dialect(Dialect::H2),
        "MERGE INTO t1 KEY (id)\nVALUES (1, 'a')"
    );
}

#[test]
fn test_h2_merge_multiple_rows_and_keys() {
    let stmt = upsert(
        &["k1", "k2"],
        Some(vec![row(vec![int(1), int(2)]), row(vec![int(3), int(4)])]),
    );
    assert_eq!(
        stmt.to_sql_with_dialect(Dialect::H2),
        "MERGE INTO t1 KEY (k1, k2)\nVALUES (1, 2), (3, 4)"
    );
}

#[test]
fn test_h2_merge_empty_values() {
    let stmt = upsert(&["k1", "k2"], Some(vec![]));
    assert_eq!(
        stmt.to_sql_with_dialect(Dialect::H2),
        "MERGE INTO t1 KEY (k1, k2)\nVALUES ()"
    );
}

#[test]
fn test_h2_merge_without_key() {
    let stmt = upsert(&[], Some(vec![row(vec![int(1)])]));
    assert_eq!(stmt.to_sql_with_dialect(Dialect::H2), "MERGE INTO t1\nVALUES (1)");
    assert_eq!(upsert(&[], None).to_sql_with_dialect(Dialect::H2), "MERGE INTO t1");
}

#[test]
fn test_h2_merge_from_query() {
    let stmt = Statement::Replace(ReplaceStatement {
        table: ident("t1"),
        columns: vec![ident("id")],
        values: None,
        query: Some(Box::new(select(vec![col("id"), col("name")], "staging").into())),
    });
    assert_eq!(
        stmt.to_sql_with_dialect(Dialect::H2),
        "MERGE INTO t1 KEY (id)\nSELECT id, name\nFROM staging"
    );
}

#[test]
fn test_h2_merge_lowercase() {
    let stmt = upsert(&["id"], Some(vec![row(vec![int(1), text("a")])]));
    assert_eq!(lower(&stmt, Dialect::H2), "merge into t1 key (id)\nvalues (1, 'a')");
}

#[test]
fn test_h2_create_schema() {
    assert_eq!(
        create_database(true, None, None).to_sql_with_dialect(Dialect::H2),
        "CREATE SCHEMA IF NOT EXISTS app"
    );
    assert_eq!(
        create_database(false, Some("utf8"), None).to_sql_with_dialect(Dialect::H2),
        "CREATE SCHEMA app"
    );
}

#[test]
fn test_h2_create_schema_qualified_name() {
    let stmt = Statement::CreateDatabase(CreateDatabaseStatement {
        if_not_exists: false,
        name: col("catalog.app"),
        character_set: None,
        collate: None,
    });
    assert_eq!(stmt.to_sql_with_dialect(Dialect::H2), "CREATE SCHEMA catalog.app");
}

#[test]
fn test_h2_create_index_kinds() {
    assert_eq!(
        create_index(Some("spatial"), false, None).to_sql_with_dialect(Dialect::H2),
        "CREATE SPATIAL INDEX idx_users_email ON users (email)"
    );
    assert_eq!(
        create_index(Some("Unique"), true, None).to_sql_with_dialect(Dialect::H2),
        "CREATE UNIQUE INDEX IF NOT EXISTS idx_users_email ON users (email)"
    );
    assert_eq!(
        create_index(Some("FULLTEXT"), false, Some("btree")).to_sql_with_dialect(Dialect::H2),
        "CREATE INDEX idx_users_email ON users (email)"
    );
}

#[test]
fn test_h2_create_index_lowercase() {
    assert_eq!(
        lower(&create_index(None, false, None), Dialect::H2),
        "create index idx_users_email on users (email)"
    );
}

#[test]
fn test_h2_create_index_expression_item() {
    let stmt = Statement::CreateIndex(CreateIndexStatement {
        kind: None,
        if_not_exists: false,
        name: ident("idx_lower_email"),
        table: ident("users"),
        items: vec![
            IndexColumn::from(func("LOWER", vec![col("email")])),
            IndexColumn {
                expr: col("id"),
                order: Some(SortOrder::Desc),
            },
        ],
        using: None,
    });
    assert_eq!(
        stmt.to_sql_with_dialect(Dialect::H2),
        "CREATE INDEX idx_lower_email ON users (LOWER(email), id DESC)"
    );
}

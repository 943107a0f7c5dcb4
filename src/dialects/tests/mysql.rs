//! MySQL and MariaDB.

use super::*;
use crate::render::{ToSql, render_parameterized};
use pretty_assertions::assert_eq;

#[test]
fn test_mysql_limit() {
    let sql = report_query().to_sql_with_dialect(Dialect::MySQL);
    assert_eq!(sql, format!("{}LIMIT 20, 10", report_sql_head("TRUE")));

    let offset_only = Query::from(select(vec![star()], "users")).limit(None, Some(int(5)));
    assert_eq!(
        offset_only.to_sql_with_dialect(Dialect::MySQL),
        "SELECT *\nFROM users\nLIMIT 5, 18446744073709551615"
    );
}

#[test]
fn test_mysql_backticks() {
    assert_eq!(ident("order").to_sql_with_dialect(Dialect::MySQL), "`order`");
    assert_eq!(ident("a`b").to_sql_with_dialect(Dialect::MariaDB), "`a``b`");
    assert_eq!(ident("users").to_sql_with_dialect(Dialect::MySQL), "users");
}

#[test]
fn test_mysql_backslash_in_string() {
    assert_eq!(text("a\\").to_sql_with_dialect(Dialect::MySQL), "'a\\\\'");
    assert_eq!(text("a\\'b").to_sql_with_dialect(Dialect::MariaDB), "'a\\\\''b'");
    assert_eq!(text("it's").to_sql_with_dialect(Dialect::MariaDB), "'it''s'");
    assert_eq!(text("a\\").to_sql(), "'a\\'");

    let (sql, params) = render_parameterized(&eq(col("name"), text("a\\")), Dialect::MySQL).unwrap();
    assert_eq!(sql, "name = ?");
    assert_eq!(params, vec![Literal::String("a\\".into())]);
}

#[test]
fn test_mysql_backslash_in_column_comment() {
    let column = ColumnDefinition {
        name: Ident::new("path"),
        data_type: DataType::new("text"),
        options: vec![ColumnOption::Comment("C:\\tmp".into())],
    };
    assert_eq!(column.to_sql_with_dialect(Dialect::MySQL), "path TEXT COMMENT 'C:\\\\tmp'");
    assert_eq!(column.to_sql(), "path TEXT COMMENT 'C:\\tmp'");
}

#[test]
fn test_mysql_concat() {
    assert_eq!(concat_chain().to_sql(), "a || b || c");
    assert_eq!(concat_chain().to_sql_with_dialect(Dialect::MySQL), "CONCAT(a, b, c)");
    assert_eq!(lower(&concat_chain(), Dialect::MariaDB), "concat(a, b, c)");
}

#[test]
fn test_mysql_other_operators_delegate() {
    let expr = binary(col("a"), BinaryOperator::Add, int(1));
    assert_eq!(expr.to_sql_with_dialect(Dialect::MySQL), "a + 1");
}

#[test]
fn test_mysql_on_duplicate_key() {
    let update = insert_users(Some(OnConflict {
        target: vec![ident("id")],
        action: ConflictAction::DoUpdate(vec![Assignment {
            column: ident("name"),
            value: text("b"),
        }]),
    }));
    assert_eq!(
        update.to_sql_with_dialect(Dialect::MySQL),
        "INSERT INTO users (id, name)\nVALUES (1, 'a')\nON DUPLICATE KEY UPDATE name = 'b'"
    );

    let nothing = insert_users(Some(OnConflict {
        target: vec![ident("id")],
        action: ConflictAction::DoNothing,
    }));
    assert_eq!(
        nothing.to_sql_with_dialect(Dialect::MariaDB),
        "INSERT INTO users (id, name)\nVALUES (1, 'a')\nON DUPLICATE KEY UPDATE id = id"
    );

    let untargeted = insert_users(Some(OnConflict {
        target: vec![],
        action: ConflictAction::DoNothing,
    }));
    assert_eq!(
        untargeted.to_sql_with_dialect(Dialect::MySQL),
        "INSERT INTO users (id, name)\nVALUES (1, 'a')"
    );
}

#[test]
fn test_mysql_replace_is_generic() {
    let stmt = upsert(&["id"], Some(vec![row(vec![int(1), text("a")])]));
    assert_eq!(stmt.to_sql_with_dialect(Dialect::MySQL), "REPLACE INTO t1 (id)\nVALUES (1, 'a')");
}

#[test]
fn test_mysql_create_index() {
    assert_eq!(
        create_index(Some("fulltext"), true, None).to_sql_with_dialect(Dialect::MySQL),
        "CREATE FULLTEXT INDEX idx_users_email ON users (email)"
    );
    assert_eq!(
        create_index(Some("unique"), false, Some("btree")).to_sql_with_dialect(Dialect::MySQL),
        "CREATE UNIQUE INDEX idx_users_email ON users (email) USING BTREE"
    );
}

#[test]
fn test_mariadb_keeps_index_guards() {
    assert_eq!(
        create_index(Some("unique"), true, None).to_sql_with_dialect(Dialect::MariaDB),
        "CREATE UNIQUE INDEX IF NOT EXISTS idx_users_email ON users (email)"
    );
    assert_eq!(
        drop_index(true).to_sql_with_dialect(Dialect::MariaDB),
        "DROP INDEX IF EXISTS idx_users_email ON users"
    );
}

#[test]
fn test_mysql_drop_index_on_table() {
    assert_eq!(
        drop_index(true).to_sql_with_dialect(Dialect::MySQL),
        "DROP INDEX idx_users_email ON users"
    );
}

#[test]
fn test_mysql_create_table_is_generic() {
    assert_eq!(
        create_users_table().to_sql_with_dialect(Dialect::MySQL),
        users_table_sql(" NOT NULL AUTO_INCREMENT", " UNIQUE COMMENT 'login'")
    );
}

use sqlout::ast::builders::*;
use sqlout::prelude::*;
use sqlout::write_sql;

const MERGE_JSON: &str = r#"{
    "Replace": {
        "table": { "Identifier": { "value": "t1" } },
        "columns": [{ "Identifier": { "value": "id" } }],
        "values": [
            { "values": [{ "Literal": { "Integer": 1 } }, { "Literal": { "String": "a" } }] }
        ]
    }
}"#;

#[test]
fn test_statement_from_json() {
    let stmt: Statement = serde_json::from_str(MERGE_JSON).expect("valid statement json");
    assert_eq!(render(&stmt, Dialect::H2).unwrap(), "MERGE INTO t1 KEY (id)\nVALUES (1, 'a')");
    assert_eq!(
        render(&stmt, Dialect::DuckDB).unwrap(),
        "INSERT OR REPLACE INTO t1 (id)\nVALUES (1, 'a')"
    );
}

#[test]
fn test_json_keeps_rendering_stable() {
    let stmt: Statement = serde_json::from_str(MERGE_JSON).unwrap();
    let reparsed: Statement = serde_json::from_str(&serde_json::to_string(&stmt).unwrap()).unwrap();
    for &dialect in Dialect::all() {
        assert_eq!(render(&stmt, dialect).unwrap(), render(&reparsed, dialect).unwrap());
    }
}

#[test]
fn test_renderer_from_config() {
    let config = RenderConfig::from_toml_str("dialect = \"h2\"\nuppercase = false\nindent = \"  \"").unwrap();
    let query = Query::from(Select {
        projection: vec![SelectItem::from(star())],
        from: Some(TableSource::Subquery {
            query: Box::new(select(vec![col("id")], "users").into()),
            alias: Some(Ident::new("t")),
        }),
        ..Select::default()
    });

    let mut sql = String::new();
    Renderer::from_config(&mut sql, &config).render(&query).unwrap();
    assert_eq!(sql, "select *\nfrom (\n  select id\n  from users\n) t");
}

#[test]
fn test_write_sql_parameterized() {
    let config = RenderConfig {
        dialect: Dialect::MySQL,
        parameterized: true,
        ..RenderConfig::default()
    };
    let mut out = Vec::new();
    write_sql(&mut out, &eq(col("name"), text("bob")), &config).unwrap();
    assert_eq!(String::from_utf8(out).unwrap(), "name = ?");
}

#[test]
fn test_unknown_dialect_name() {
    let err = "informix".parse::<Dialect>().unwrap_err();
    assert!(matches!(err, RenderError::UnknownDialect(ref name) if name == "informix"));
}

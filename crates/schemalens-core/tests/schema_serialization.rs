use schemalens_core::{
    Column, ColumnLink, DatabaseSchema, PrimaryKey, Relation, Table, TableRef,
};

fn users_table() -> Table {
    Table {
        schema: "public".to_string(),
        name: "users".to_string(),
        is_view: false,
        columns: vec![Column {
            name: "id".to_string(),
            column_type: "integer".to_string(),
            nullable: false,
            default: None,
            comment: Some("surrogate key".to_string()),
        }],
        primary_key: Some(PrimaryKey {
            name: Some("users_pkey".to_string()),
            columns: vec!["id".to_string()],
        }),
        uniques: Vec::new(),
        indexes: Vec::new(),
        checks: Vec::new(),
        comment: None,
    }
}

#[test]
fn serializes_with_camel_case_field_names() {
    let schema = DatabaseSchema {
        tables: vec![users_table()],
        relations: vec![Relation {
            name: "users_manager_fk".to_string(),
            source: TableRef {
                schema: "public".to_string(),
                table: "users".to_string(),
            },
            target: TableRef {
                schema: "public".to_string(),
                table: "users".to_string(),
            },
            columns: vec![ColumnLink {
                source: "manager_id".to_string(),
                target: "id".to_string(),
            }],
        }],
    };

    let json = serde_json::to_string_pretty(&schema).expect("serialize schema");
    let expected = r#"{
  "tables": [
    {
      "schema": "public",
      "name": "users",
      "isView": false,
      "columns": [
        {
          "name": "id",
          "type": "integer",
          "nullable": false,
          "default": null,
          "comment": "surrogate key"
        }
      ],
      "primaryKey": {
        "name": "users_pkey",
        "columns": [
          "id"
        ]
      },
      "uniques": [],
      "indexes": [],
      "checks": [],
      "comment": null
    }
  ],
  "relations": [
    {
      "name": "users_manager_fk",
      "source": {
        "schema": "public",
        "table": "users"
      },
      "target": {
        "schema": "public",
        "table": "users"
      },
      "columns": [
        {
          "source": "manager_id",
          "target": "id"
        }
      ]
    }
  ]
}"#;
    assert_eq!(json, expected);
}

#[test]
fn deserializes_what_it_serializes() {
    let schema = DatabaseSchema {
        tables: vec![users_table()],
        relations: Vec::new(),
    };
    let json = serde_json::to_string(&schema).expect("serialize schema");
    let decoded: DatabaseSchema = serde_json::from_str(&json).expect("deserialize schema");
    assert_eq!(decoded, schema);
    assert!(decoded.table("public", "users").is_some());
    assert!(decoded.table("audit", "users").is_none());
}

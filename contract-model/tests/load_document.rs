use contractgen_model::{ModelDocument, ModelError, PrimitiveKind, TypeDescriptor};
use tempfile::TempDir;

const SHOP: &str = r#"{
  "roots": ["Shop.Order"],
  "definitions": [
    { "kind": "complex", "name": "Order", "namespace": "Shop",
      "members": [
        { "name": "Id", "type": "integer" },
        { "name": "Lines", "type": { "array": { "ref": "Line" } }, "doc": "Order lines" },
        { "name": "Status", "type": { "ref": "Shop.Status" }, "optional": true },
        { "name": "Tags", "type": { "dictionary": { "key": "string", "value": "string" } } }
      ] },
    { "kind": "complex", "name": "Line", "namespace": "Shop",
      "members": [ { "name": "Order", "type": { "ref": "Shop.Order" }, "nullable": true } ] },
    { "kind": "enum", "name": "Status", "namespace": "Shop",
      "members": [ { "name": "Open", "value": "open" }, { "name": "Closed", "value": 2 } ] }
  ]
}"#;

#[test]
fn test_load_document_from_disk() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("model.json");
    std::fs::write(&path, SHOP).unwrap();

    let document = ModelDocument::load(&path).unwrap();
    assert_eq!(document.roots(), ["Shop.Order".to_string()]);
    assert_eq!(document.definition_count(), 3);

    let loaded = document.into_model().unwrap();
    let order = loaded.names["Shop.Order"];
    assert_eq!(loaded.roots, vec![order]);
    assert_eq!(
        loaded.names.keys().collect::<Vec<_>>(),
        ["Shop.Order", "Shop.Line", "Shop.Status"]
    );

    let TypeDescriptor::Complex(complex) = loaded.model.get(order).unwrap() else {
        panic!("expected complex");
    };
    let names: Vec<_> = complex.members.iter().map(|m| m.name.as_str()).collect();
    assert_eq!(names, ["Id", "Lines", "Status", "Tags"]);
    assert_eq!(
        loaded.model.get(complex.members[0].ty).unwrap(),
        &TypeDescriptor::Primitive(PrimitiveKind::Integer)
    );
    assert_eq!(complex.members[1].doc.as_deref(), Some("Order lines"));
    assert!(complex.members[2].optional);
    assert!(matches!(
        loaded.model.get(complex.members[3].ty).unwrap(),
        TypeDescriptor::Dictionary { .. }
    ));
}

#[test]
fn test_missing_file_reports_path() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("absent.json");
    let err = ModelDocument::load(&path).unwrap_err();
    match err {
        ModelError::Io { path: reported, .. } => assert_eq!(reported, path),
        other => panic!("unexpected error: {other}"),
    }
}

#[test]
fn test_repeated_member_names_are_rejected() {
    let document = ModelDocument::from_json(
        r#"{ "definitions": [
            { "kind": "complex", "name": "Order", "namespace": "Shop",
              "members": [ { "name": "Id", "type": "integer" }, { "name": "Id", "type": "string" } ] }
        ] }"#,
    )
    .unwrap();
    match document.into_model().unwrap_err() {
        ModelError::DuplicateMember { owner, member } => {
            assert_eq!(owner, "Shop.Order");
            assert_eq!(member, "Id");
        }
        other => panic!("unexpected error: {other}"),
    }

    let document = ModelDocument::from_json(
        r#"{ "definitions": [
            { "kind": "enum", "name": "Status",
              "members": [ { "name": "Open" }, { "name": "Open", "value": 2 } ] }
        ] }"#,
    )
    .unwrap();
    assert!(matches!(
        document.into_model().unwrap_err(),
        ModelError::DuplicateMember { .. }
    ));
}

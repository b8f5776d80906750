use std::{path::Path, str::FromStr};

use contractgen_manifest::{
    EnumStyle, Error, FieldCase, GenericStyle, IndentSetting, Layout, Linter, Manifest,
};
use tempfile::TempDir;

#[test]
fn test_minimal_manifest_uses_defaults() {
    let manifest = Manifest::from_str(
        r#"
        [generator]
        model = "model.json"
        "#,
    )
    .unwrap();

    let generator = &manifest.generator;
    assert_eq!(generator.model, Path::new("model.json"));
    assert_eq!(generator.output, Path::new("generated"));
    assert!(generator.roots.is_empty());
    assert_eq!(generator.linter, Linter::Eslint);
    assert_eq!(generator.enums, EnumStyle::Union);
    assert_eq!(generator.generics, GenericStyle::Monomorphize);
    assert_eq!(generator.field_naming, FieldCase::Camel);
    assert_eq!(generator.layout, Layout::PerUnit);
    assert_eq!(generator.indent, IndentSetting::Spaces(4));
}

#[test]
fn test_full_manifest() {
    let manifest = Manifest::from_str(
        r#"
        [generator]
        model = "contracts/model.json"
        output = "web/src/api"
        roots = ["Shop.Order", "Shop.Customer"]
        linter = "tslint"
        enums = "declaration"
        generics = "preserve"
        field_naming = "preserve"
        layout = "single-file"
        file = "contracts"
        indent = "tab"
        "#,
    )
    .unwrap();

    let generator = &manifest.generator;
    assert_eq!(generator.roots, ["Shop.Order", "Shop.Customer"]);
    assert_eq!(generator.linter, Linter::Tslint);
    assert_eq!(generator.enums, EnumStyle::Declaration);
    assert_eq!(generator.generics, GenericStyle::Preserve);
    assert_eq!(generator.field_naming, FieldCase::Preserve);
    assert_eq!(generator.layout, Layout::SingleFile);
    assert_eq!(generator.file.as_deref(), Some("contracts"));
    assert_eq!(generator.indent, IndentSetting::Tab);

    let base = Path::new("/project");
    assert_eq!(
        manifest.model_path(base),
        Path::new("/project/contracts/model.json")
    );
    assert_eq!(manifest.output_dir(base), Path::new("/project/web/src/api"));
}

#[test]
fn test_indent_out_of_range() {
    for indent in ["0", "9", "-2", "\"tabs\""] {
        let src = format!("[generator]\nmodel = \"m.json\"\nindent = {indent}\n");
        let err = Manifest::from_str(&src).unwrap_err();
        assert!(matches!(*err, Error::Parse { .. }), "indent = {indent}");
    }
    let src = "[generator]\nmodel = \"m.json\"\nindent = 2\n";
    assert_eq!(
        Manifest::from_str(src).unwrap().generator.indent,
        IndentSetting::Spaces(2)
    );
}

#[test]
fn test_unknown_keys_and_values_are_parse_errors() {
    let err = Manifest::from_str("[generator]\nmodel = \"m.json\"\ncolour = true\n").unwrap_err();
    assert!(matches!(*err, Error::Parse { .. }));

    let err = Manifest::from_str("[generator]\nmodel = \"m.json\"\nlayout = \"flat\"\n").unwrap_err();
    match *err {
        Error::Parse { span, .. } => assert!(span.is_some()),
        other => panic!("unexpected error: {other}"),
    }

    let err = Manifest::from_str("[generator]\noutput = \"x\"\n").unwrap_err();
    assert!(matches!(*err, Error::Parse { .. }));
}

#[test]
fn test_single_file_requires_file() {
    let src = "[generator]\nmodel = \"m.json\"\nlayout = \"single-file\"\n";
    let err = Manifest::from_str(src).unwrap_err();
    match *err {
        Error::MissingKey { key, span, .. } => {
            assert_eq!(key, "file");
            let span = span.unwrap();
            assert_eq!(&src[span.offset()..span.offset() + span.len()], "layout");
        }
        other => panic!("unexpected error: {other}"),
    }
}

#[test]
fn test_validation_errors() {
    let cases = [
        "[generator]\nmodel = \"\"\n",
        "[generator]\nmodel = \"m.json\"\noutput = \"\"\n",
        "[generator]\nmodel = \"m.json\"\nroots = [\"\"]\n",
        "[generator]\nmodel = \"m.json\"\nroots = [\"A\", \"A\"]\n",
        "[generator]\nmodel = \"m.json\"\nfile = \"dir/types\"\n",
    ];
    for src in cases {
        let err = Manifest::from_str(src).unwrap_err();
        match *err {
            Error::Validation { span, .. } => assert!(span.is_some(), "{src}"),
            other => panic!("unexpected error for {src}: {other}"),
        }
    }
}

#[test]
fn test_from_file() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("contractgen.toml");
    std::fs::write(&path, "[generator]\nmodel = \"model.json\"\n").unwrap();
    let manifest = Manifest::from_file(&path).unwrap();
    assert_eq!(manifest.generator.model, Path::new("model.json"));

    let err = Manifest::from_file(dir.path().join("missing.toml")).unwrap_err();
    assert!(matches!(*err, Error::Io { .. }));
}

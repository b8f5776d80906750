//! TypeScript-specific naming conventions.

use contractgen_codegen::language::NamingConvention;
use contractgen_core::{is_identifier, to_camel_case, to_kebab_case, to_pascal_case};

fn escape_ts_reserved(name: &str) -> String {
    format!("_{}", name)
}

/// TypeScript naming conventions.
pub const TS_NAMING: NamingConvention = NamingConvention {
    // Types use PascalCase
    type_case: to_pascal_case,
    // Files use kebab-case
    file_case: to_kebab_case,
    // Fields use camelCase
    field_case: to_camel_case,
    reserved_words: &[
        // JavaScript reserved words
        "break",
        "case",
        "catch",
        "class",
        "const",
        "continue",
        "debugger",
        "default",
        "delete",
        "do",
        "else",
        "enum",
        "export",
        "extends",
        "false",
        "finally",
        "for",
        "function",
        "if",
        "import",
        "in",
        "instanceof",
        "let",
        "new",
        "null",
        "return",
        "super",
        "switch",
        "this",
        "throw",
        "true",
        "try",
        "typeof",
        "var",
        "void",
        "while",
        "with",
        "yield",
        // TypeScript reserved words
        "any",
        "as",
        "async",
        "await",
        "boolean",
        "constructor",
        "declare",
        "get",
        "implements",
        "interface",
        "module",
        "namespace",
        "never",
        "number",
        "object",
        "package",
        "private",
        "protected",
        "public",
        "readonly",
        "require",
        "set",
        "static",
        "string",
        "symbol",
        "type",
        "undefined",
        "unknown",
        // Global types the generated code refers to
        "Array",
    ],
    escape_reserved: escape_ts_reserved,
};

/// Quote `value` as a double-quoted TypeScript string literal.
pub fn quote_string(value: &str) -> String {
    let mut out = String::with_capacity(value.len() + 2);
    out.push('"');
    for c in value.chars() {
        match c {
            '"' => out.push_str("\\\""),
            '\\' => out.push_str("\\\\"),
            '\n' => out.push_str("\\n"),
            '\r' => out.push_str("\\r"),
            '\t' => out.push_str("\\t"),
            c => out.push(c),
        }
    }
    out.push('"');
    out
}

/// Render a property key, quoting it when it is not a plain identifier.
pub fn property_key(name: &str) -> String {
    if is_identifier(name) {
        name.to_string()
    } else {
        quote_string(name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ts_naming_type() {
        assert_eq!(TS_NAMING.type_name("order_line"), "OrderLine");
        assert_eq!(TS_NAMING.type_name("IEqualityComparer"), "IEqualityComparer");
        assert_eq!(TS_NAMING.type_name("Array"), "_Array");
    }

    #[test]
    fn test_ts_naming_file() {
        assert_eq!(TS_NAMING.file_name("OrderLine"), "order-line");
        assert_eq!(TS_NAMING.file_name("PageOfUser"), "page-of-user");
    }

    #[test]
    fn test_ts_naming_field() {
        assert_eq!(TS_NAMING.field_name("NullableInts"), "nullableInts");
        assert_eq!(TS_NAMING.field_name("ID"), "id");
        assert_eq!(TS_NAMING.field_name("Type"), "type");
    }

    #[test]
    fn test_ts_reserved_words() {
        assert!(TS_NAMING.is_reserved("class"));
        assert!(TS_NAMING.is_reserved("interface"));
        assert!(!TS_NAMING.is_reserved("Order"));
    }

    #[test]
    fn test_quote_string() {
        assert_eq!(quote_string("Open"), "\"Open\"");
        assert_eq!(quote_string("say \"hi\"\\"), "\"say \\\"hi\\\"\\\\\"");
    }

    #[test]
    fn test_property_key() {
        assert_eq!(property_key("orderId"), "orderId");
        assert_eq!(property_key("first-name"), "\"first-name\"");
        assert_eq!(property_key("2fa"), "\"2fa\"");
    }
}

//! Naming conventions for target languages.

/// Language-specific naming conventions.
///
/// Defines how to transform source names into type, file and field names,
/// and how to handle reserved words.
#[derive(Debug, Clone, Copy)]
pub struct NamingConvention {
    /// Transform a source type name into a type name (e.g., "order_line" -> "OrderLine")
    pub type_case: fn(&str) -> String,
    /// Transform a type name into a file stem (e.g., "OrderLine" -> "order-line")
    pub file_case: fn(&str) -> String,
    /// Transform a member name into a field name (e.g., "OrderId" -> "orderId")
    pub field_case: fn(&str) -> String,
    /// List of reserved words in the language
    pub reserved_words: &'static [&'static str],
    /// Escape a reserved word (e.g., "string" -> "_string")
    pub escape_reserved: fn(&str) -> String,
}

impl NamingConvention {
    pub fn is_reserved(&self, name: &str) -> bool {
        self.reserved_words.contains(&name)
    }

    /// Get a safe name, escaping if necessary.
    pub fn safe_name(&self, name: &str) -> String {
        if self.is_reserved(name) {
            (self.escape_reserved)(name)
        } else {
            name.to_string()
        }
    }

    /// Transform and make safe for use as a type name.
    pub fn type_name(&self, name: &str) -> String {
        let transformed = (self.type_case)(name);
        self.safe_name(&transformed)
    }

    /// Transform for use as a file stem. File names never need escaping.
    pub fn file_name(&self, name: &str) -> String {
        (self.file_case)(name)
    }

    /// Transform a member name for use as a field name.
    ///
    /// Property keys may be reserved words in most targets, so no escaping
    /// happens here.
    pub fn field_name(&self, name: &str) -> String {
        (self.field_case)(name)
    }
}

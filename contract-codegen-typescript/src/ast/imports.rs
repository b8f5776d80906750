//! TypeScript import builder.

use contractgen_codegen::builder::{CodeFragment, Renderable};

/// Builder for TypeScript import statements.
#[derive(Debug, Clone)]
pub struct Import {
    from: String,
    named: Vec<String>,
    type_only: bool,
}

impl Import {
    pub fn new(from: impl Into<String>) -> Self {
        Self {
            from: from.into(),
            named: Vec::new(),
            type_only: false,
        }
    }

    /// Import a named export.
    pub fn named(mut self, name: impl Into<String>) -> Self {
        self.named.push(name.into());
        self
    }

    /// Make this a type-only import (`import type { ... }`).
    pub fn type_only(mut self) -> Self {
        self.type_only = true;
        self
    }

    /// Build the import line without a trailing newline.
    pub fn build(&self) -> String {
        if self.named.is_empty() {
            return format!("import \"{}\";", self.from);
        }
        let type_kw = if self.type_only { "type " } else { "" };
        format!(
            "import {}{{ {} }} from \"{}\";",
            type_kw,
            self.named.join(", "),
            self.from
        )
    }
}

impl Renderable for Import {
    fn to_fragments(&self) -> Vec<CodeFragment> {
        vec![CodeFragment::Line(self.build())]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_named_import() {
        let i = Import::new("./utils").named("foo").named("bar").build();
        assert_eq!(i, "import { foo, bar } from \"./utils\";");
    }

    #[test]
    fn test_type_only_import() {
        let i = Import::new("./shop/order")
            .named("Order")
            .type_only()
            .build();
        assert_eq!(i, "import type { Order } from \"./shop/order\";");
    }

    #[test]
    fn test_side_effect_import() {
        let i = Import::new("./polyfill").build();
        assert_eq!(i, "import \"./polyfill\";");
    }
}

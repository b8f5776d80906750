//! Structured layout of one generated TypeScript file.

use contractgen_codegen::builder::{CodeBuilder, CodeFragment, Indent, Renderable};

use crate::ast::Import;

/// A TypeScript file in three sections: header, imports, body.
///
/// Header lines come first with no separation. Imports follow, then one
/// blank line, then body elements separated by blank lines.
///
/// # Example
///
/// ```ignore
/// let text = CodeFile::new()
///     .header("/* eslint-disable */")
///     .import(Import::new("./order").named("Order").type_only())
///     .add(renderer.node(&declaration))
///     .render();
/// ```
#[derive(Debug, Default)]
pub struct CodeFile {
    header: Vec<String>,
    imports: Vec<Import>,
    body: Vec<Vec<CodeFragment>>,
}

impl CodeFile {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a line to the file header.
    pub fn header(mut self, line: impl Into<String>) -> Self {
        self.header.push(line.into());
        self
    }

    pub fn import(mut self, import: Import) -> Self {
        self.imports.push(import);
        self
    }

    pub fn imports(mut self, imports: impl IntoIterator<Item = Import>) -> Self {
        self.imports.extend(imports);
        self
    }

    /// Add a body element (any Renderable).
    #[allow(clippy::should_implement_trait)]
    pub fn add<R: Renderable>(mut self, node: R) -> Self {
        self.body.push(node.to_fragments());
        self
    }

    pub fn add_all<R: Renderable>(mut self, nodes: impl IntoIterator<Item = R>) -> Self {
        for node in nodes {
            self.body.push(node.to_fragments());
        }
        self
    }

    /// Render with the default indentation (4 spaces).
    pub fn render(&self) -> String {
        self.render_with_indent(Indent::default())
    }

    pub fn render_with_indent(&self, indent: Indent) -> String {
        let mut builder = CodeBuilder::new(indent);

        for line in &self.header {
            builder.push_line(line);
        }

        for import in &self.imports {
            builder.emit(import);
        }
        if !self.imports.is_empty() && !self.body.is_empty() {
            builder.push_blank();
        }

        for (i, fragments) in self.body.iter().enumerate() {
            if i > 0 {
                builder.push_blank();
            }
            for fragment in fragments {
                builder.apply_fragment(fragment.clone());
            }
        }

        builder.build()
    }

    pub fn is_empty(&self) -> bool {
        self.header.is_empty() && self.imports.is_empty() && self.body.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Line(&'static str);

    impl Renderable for Line {
        fn to_fragments(&self) -> Vec<CodeFragment> {
            vec![CodeFragment::line(self.0)]
        }
    }

    #[test]
    fn test_empty_file() {
        let file = CodeFile::new();
        assert!(file.is_empty());
        assert_eq!(file.render(), "");
    }

    #[test]
    fn test_header_then_body() {
        let code = CodeFile::new()
            .header("/* eslint-disable */")
            .add(Line("export type A = number;"))
            .render();
        assert_eq!(code, "/* eslint-disable */\nexport type A = number;\n");
    }

    #[test]
    fn test_full_file() {
        let code = CodeFile::new()
            .header("// header")
            .import(Import::new("./b").named("B").type_only())
            .add(Line("export type A = B;"))
            .add(Line("export type C = A;"))
            .render();
        assert_eq!(
            code,
            "// header\n\
             import type { B } from \"./b\";\n\
             \n\
             export type A = B;\n\
             \n\
             export type C = A;\n"
        );
    }
}

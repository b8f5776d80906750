//! Serializes AST nodes to TypeScript source text.
//!
//! Rendering is a pure function of the node tree. It never fails: every node
//! the walker builds has a textual form.

use contractgen_codegen::builder::{CodeBuilder, CodeFragment, Indent, Renderable};

use crate::{
    ast::{Declaration, EnumMember, Field, Literal, TsType},
    naming::{property_key, quote_string},
};

/// Render a type expression with the default indentation.
pub fn render(ty: &TsType) -> String {
    Renderer::default().render_type(ty)
}

/// Renders types and declarations with a fixed indentation.
#[derive(Debug, Clone, Copy, Default)]
pub struct Renderer {
    indent: Indent,
}

impl Renderer {
    pub fn new(indent: Indent) -> Self {
        Self { indent }
    }

    /// Render a type expression.
    ///
    /// Object-like types span several lines, indented relative to column
    /// zero; callers re-indent them as a block.
    pub fn render_type(&self, ty: &TsType) -> String {
        match ty {
            TsType::Keyword(keyword) => keyword.as_str().to_string(),
            TsType::Literal(literal) => render_literal(literal),
            TsType::Constant(text) => text.clone(),
            TsType::Reference { name, .. } => name.clone(),
            TsType::GenericReference { name, args, .. } => {
                let args: Vec<String> = args.iter().map(|a| self.render_type(a)).collect();
                format!("{}<{}>", name, args.join(", "))
            }
            TsType::TypeParam(name) => name.clone(),
            TsType::Array(element) if element.is_simple() => {
                format!("{}[]", self.render_type(element))
            }
            TsType::Array(element) => format!("Array<{}>", self.render_type(element)),
            TsType::Union(members) => {
                let mut flat = Vec::new();
                flatten_union(members, &mut flat);
                let parts: Vec<String> = flat.iter().map(|m| self.render_type(m)).collect();
                parts.join(" | ")
            }
            TsType::Object(fields) => self.render_object(fields),
            TsType::IndexSignature { key, value } => self.render_members(|b| {
                push_lines(
                    b,
                    &format!(
                        "[key: {}]: {};",
                        self.render_type(key),
                        self.render_type(value)
                    ),
                );
            }),
            TsType::MappedType {
                key,
                value,
                optional,
            } => self.render_members(|b| {
                push_lines(
                    b,
                    &format!(
                        "[key in {}]{}: {};",
                        self.render_type(key),
                        if *optional { "?" } else { "" },
                        self.render_type(value)
                    ),
                );
            }),
        }
    }

    /// Render a declaration to text, ending with a newline.
    pub fn render_declaration(&self, declaration: &Declaration) -> String {
        let mut builder = CodeBuilder::new(self.indent);
        builder.emit(&self.node(declaration));
        builder.build()
    }

    /// Wrap a declaration so it can be emitted into a [`CodeBuilder`].
    pub fn node<'a>(&self, declaration: &'a Declaration) -> DeclarationNode<'a> {
        DeclarationNode {
            renderer: *self,
            declaration,
        }
    }

    fn render_object(&self, fields: &[Field]) -> String {
        if fields.is_empty() {
            return "{}".to_string();
        }
        self.render_members(|b| {
            for field in fields {
                if let Some(doc) = &field.doc {
                    b.push_jsdoc(doc);
                }
                push_lines(
                    b,
                    &format!(
                        "{}{}: {};",
                        property_key(&field.name),
                        if field.optional { "?" } else { "" },
                        self.render_type(&field.ty)
                    ),
                );
            }
        })
    }

    fn render_members(&self, body: impl FnOnce(&mut CodeBuilder)) -> String {
        let mut builder = CodeBuilder::new(self.indent);
        builder.push_line("{").push_indent();
        body(&mut builder);
        builder.push_dedent().push_raw("}");
        builder.build()
    }

    fn enum_fragments(&self, name: &str, members: &[EnumMember]) -> Vec<CodeFragment> {
        if members.is_empty() {
            return vec![CodeFragment::line(format!("export enum {} {{}}", name))];
        }
        let body = members
            .iter()
            .map(|member| {
                CodeFragment::line(format!(
                    "{} = {},",
                    property_key(&member.name),
                    render_literal(&member.value)
                ))
            })
            .collect();
        vec![CodeFragment::block(
            format!("export enum {} {{", name),
            body,
            Some("}".to_string()),
        )]
    }
}

/// A declaration paired with the renderer that lays it out.
#[derive(Debug, Clone, Copy)]
pub struct DeclarationNode<'a> {
    renderer: Renderer,
    declaration: &'a Declaration,
}

impl Renderable for DeclarationNode<'_> {
    fn to_fragments(&self) -> Vec<CodeFragment> {
        match self.declaration {
            Declaration::Alias {
                name,
                type_params,
                ty,
            } => {
                let params = if type_params.is_empty() {
                    String::new()
                } else {
                    format!("<{}>", type_params.join(", "))
                };
                let text = format!(
                    "export type {}{} = {};",
                    name,
                    params,
                    self.renderer.render_type(ty)
                );
                text.lines().map(CodeFragment::line).collect()
            }
            Declaration::Enum { name, members } => self.renderer.enum_fragments(name, members),
        }
    }
}

fn render_literal(literal: &Literal) -> String {
    match literal {
        Literal::String(value) => quote_string(value),
        Literal::Number(value) => value.to_string(),
    }
}

fn flatten_union<'a>(members: &'a [TsType], out: &mut Vec<&'a TsType>) {
    for member in members {
        match member {
            TsType::Union(inner) => flatten_union(inner, out),
            other => {
                if !out.contains(&other) {
                    out.push(other);
                }
            }
        }
    }
}

/// Push possibly multi-line text, one builder line per text line.
fn push_lines(builder: &mut CodeBuilder, text: &str) {
    for line in text.lines() {
        builder.push_line(line);
    }
}

//! TypeScript type expressions.

use indexmap::IndexSet;

use crate::UnitId;

/// Built-in keyword types.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Keyword {
    Number,
    String,
    Boolean,
    Null,
    Undefined,
    Unknown,
    Never,
}

impl Keyword {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Number => "number",
            Self::String => "string",
            Self::Boolean => "boolean",
            Self::Null => "null",
            Self::Undefined => "undefined",
            Self::Unknown => "unknown",
            Self::Never => "never",
        }
    }
}

/// A literal type.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Literal {
    String(String),
    Number(i64),
}

/// A field of an object type.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Field {
    pub name: String,
    pub ty: TsType,
    /// Rendered with `?`, the field may be omitted.
    pub optional: bool,
    pub doc: Option<String>,
}

impl Field {
    pub fn new(name: impl Into<String>, ty: TsType) -> Self {
        Self {
            name: name.into(),
            ty,
            optional: false,
            doc: None,
        }
    }

    pub fn optional(mut self) -> Self {
        self.optional = true;
        self
    }

    pub fn doc(mut self, doc: impl Into<String>) -> Self {
        self.doc = Some(doc.into());
        self
    }
}

/// A TypeScript type expression.
///
/// Trees never point back at their parents. Recursive types show up as
/// [`TsType::Reference`] nodes naming another declaration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TsType {
    Keyword(Keyword),
    Literal(Literal),
    /// Raw type text, emitted verbatim.
    Constant(String),
    /// A named declaration.
    Reference { unit: UnitId, name: String },
    /// A generic declaration applied to arguments (`Page<User>`).
    GenericReference {
        unit: UnitId,
        name: String,
        args: Vec<TsType>,
    },
    /// A type parameter of the enclosing declaration.
    TypeParam(String),
    Array(Box<TsType>),
    Union(Vec<TsType>),
    Object(Vec<Field>),
    /// `{ [key: K]: V }`
    IndexSignature { key: Box<TsType>, value: Box<TsType> },
    /// `{ [key in K]?: V }`
    MappedType {
        key: Box<TsType>,
        value: Box<TsType>,
        optional: bool,
    },
}

impl TsType {
    pub fn keyword(keyword: Keyword) -> Self {
        Self::Keyword(keyword)
    }

    pub fn constant(text: impl Into<String>) -> Self {
        Self::Constant(text.into())
    }

    pub fn array(element: TsType) -> Self {
        Self::Array(Box::new(element))
    }

    /// Build a union, flattening nested unions and dropping duplicates.
    ///
    /// A single member is returned as is; no members at all is `never`.
    pub fn union(members: impl IntoIterator<Item = TsType>) -> Self {
        let mut flat: Vec<TsType> = Vec::new();
        for member in members {
            match member {
                Self::Union(inner) => {
                    for m in inner {
                        if !flat.contains(&m) {
                            flat.push(m);
                        }
                    }
                }
                m => {
                    if !flat.contains(&m) {
                        flat.push(m);
                    }
                }
            }
        }
        match flat.len() {
            0 => Self::Keyword(Keyword::Never),
            1 => flat.remove(0),
            _ => Self::Union(flat),
        }
    }

    /// `null | inner`. Applying it twice changes nothing.
    pub fn nullable(inner: TsType) -> Self {
        Self::union([Self::Keyword(Keyword::Null), inner])
    }

    /// Whether an array of this type can be written as `T[]`.
    pub fn is_simple(&self) -> bool {
        matches!(
            self,
            Self::Keyword(_)
                | Self::Literal(_)
                | Self::Reference { .. }
                | Self::GenericReference { .. }
                | Self::TypeParam(_)
        )
    }

    /// Collect every declaration this expression names.
    pub fn collect_references(&self, out: &mut IndexSet<UnitId>) {
        match self {
            Self::Keyword(_) | Self::Literal(_) | Self::Constant(_) | Self::TypeParam(_) => {}
            Self::Reference { unit, .. } => {
                out.insert(*unit);
            }
            Self::GenericReference { unit, args, .. } => {
                out.insert(*unit);
                for arg in args {
                    arg.collect_references(out);
                }
            }
            Self::Array(element) => element.collect_references(out),
            Self::Union(members) => {
                for member in members {
                    member.collect_references(out);
                }
            }
            Self::Object(fields) => {
                for field in fields {
                    field.ty.collect_references(out);
                }
            }
            Self::IndexSignature { key, value } | Self::MappedType { key, value, .. } => {
                key.collect_references(out);
                value.collect_references(out);
            }
        }
    }
}

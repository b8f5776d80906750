//! Type descriptor variants.

use std::{fmt, str::FromStr};

use serde::Deserialize;

use crate::TypeId;

/// Primitive types understood by every target.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PrimitiveKind {
    Integer,
    Float,
    Boolean,
    String,
    Date,
    Binary,
}

impl PrimitiveKind {
    /// Get the canonical name of this primitive.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Integer => "integer",
            Self::Float => "float",
            Self::Boolean => "boolean",
            Self::String => "string",
            Self::Date => "date",
            Self::Binary => "binary",
        }
    }
}

impl fmt::Display for PrimitiveKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for PrimitiveKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "integer" => Ok(Self::Integer),
            "float" => Ok(Self::Float),
            "boolean" => Ok(Self::Boolean),
            "string" => Ok(Self::String),
            "date" => Ok(Self::Date),
            "binary" => Ok(Self::Binary),
            _ => Err(format!(
                "unknown primitive '{}', expected one of integer, float, boolean, string, date, binary",
                s
            )),
        }
    }
}

/// Literal value of an enum member.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Deserialize)]
#[serde(untagged)]
pub enum EnumValue {
    Number(i64),
    String(String),
}

impl From<i64> for EnumValue {
    fn from(value: i64) -> Self {
        Self::Number(value)
    }
}

impl From<&str> for EnumValue {
    fn from(value: &str) -> Self {
        Self::String(value.to_string())
    }
}

impl From<String> for EnumValue {
    fn from(value: String) -> Self {
        Self::String(value)
    }
}

/// A single enum member, in declaration order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EnumMember {
    pub name: String,
    pub value: EnumValue,
}

/// An enumeration with ordered literal members.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EnumType {
    pub name: String,
    pub namespace: Option<String>,
    pub members: Vec<EnumMember>,
}

impl EnumType {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            namespace: None,
            members: Vec::new(),
        }
    }

    pub fn namespace(mut self, namespace: impl Into<String>) -> Self {
        self.namespace = Some(namespace.into());
        self
    }

    /// Add a member with an explicit literal value.
    pub fn member(mut self, name: impl Into<String>, value: impl Into<EnumValue>) -> Self {
        self.members.push(EnumMember {
            name: name.into(),
            value: value.into(),
        });
        self
    }

    /// Add a member whose literal value is its own name.
    pub fn named_member(self, name: impl Into<String>) -> Self {
        let name = name.into();
        let value = EnumValue::String(name.clone());
        self.member(name, value)
    }

    /// Fully-qualified name (`Namespace.Name`).
    pub fn qualified_name(&self) -> String {
        qualify(self.namespace.as_deref(), &self.name)
    }
}

/// A field of a [`ComplexType`].
///
/// `optional` (the field may be omitted) and `nullable` (the field is present
/// but may hold null) are independent.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Member {
    pub name: String,
    pub ty: TypeId,
    pub optional: bool,
    pub nullable: bool,
    pub doc: Option<String>,
}

impl Member {
    pub fn new(name: impl Into<String>, ty: TypeId) -> Self {
        Self {
            name: name.into(),
            ty,
            optional: false,
            nullable: false,
            doc: None,
        }
    }

    pub fn optional(mut self) -> Self {
        self.optional = true;
        self
    }

    pub fn nullable(mut self) -> Self {
        self.nullable = true;
        self
    }

    pub fn doc(mut self, doc: impl Into<String>) -> Self {
        self.doc = Some(doc.into());
        self
    }
}

/// A class, interface or record.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ComplexType {
    pub name: String,
    pub namespace: Option<String>,
    pub type_params: Vec<String>,
    pub members: Vec<Member>,
    pub base: Option<TypeId>,
}

impl ComplexType {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            namespace: None,
            type_params: Vec::new(),
            members: Vec::new(),
            base: None,
        }
    }

    pub fn namespace(mut self, namespace: impl Into<String>) -> Self {
        self.namespace = Some(namespace.into());
        self
    }

    pub fn type_param(mut self, name: impl Into<String>) -> Self {
        self.type_params.push(name.into());
        self
    }

    pub fn member(mut self, member: Member) -> Self {
        self.members.push(member);
        self
    }

    pub fn base(mut self, base: TypeId) -> Self {
        self.base = Some(base);
        self
    }

    pub fn is_generic(&self) -> bool {
        !self.type_params.is_empty()
    }

    /// Fully-qualified name (`Namespace.Name`).
    pub fn qualified_name(&self) -> String {
        qualify(self.namespace.as_deref(), &self.name)
    }
}

/// A normalized, source-agnostic description of one type.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TypeDescriptor {
    Primitive(PrimitiveKind),
    Nullable(TypeId),
    Array(TypeId),
    Dictionary { key: TypeId, value: TypeId },
    Enum(EnumType),
    Complex(ComplexType),
    /// Reference to a type parameter of the enclosing generic class.
    GenericParameter(String),
    GenericInstantiation {
        definition: TypeId,
        arguments: Vec<TypeId>,
    },
}

impl TypeDescriptor {
    /// Short variant name used in diagnostics.
    pub fn kind_name(&self) -> &'static str {
        match self {
            Self::Primitive(_) => "primitive",
            Self::Nullable(_) => "nullable",
            Self::Array(_) => "array",
            Self::Dictionary { .. } => "dictionary",
            Self::Enum(_) => "enum",
            Self::Complex(_) => "complex",
            Self::GenericParameter(_) => "generic parameter",
            Self::GenericInstantiation { .. } => "generic instantiation",
        }
    }

    /// Whether this descriptor becomes its own named declaration.
    pub fn is_named(&self) -> bool {
        matches!(
            self,
            Self::Enum(_) | Self::Complex(_) | Self::GenericInstantiation { .. }
        )
    }
}

fn qualify(namespace: Option<&str>, name: &str) -> String {
    match namespace {
        Some(ns) if !ns.is_empty() => format!("{}.{}", ns, name),
        _ => name.to_string(),
    }
}

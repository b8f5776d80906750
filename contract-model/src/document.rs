//! JSON model document adapter.
//!
//! A model document lists named definitions (classes and enums) whose member
//! types are small type expressions. Loading is two-pass: every definition is
//! reserved in the arena first, then resolved, so definitions may refer to
//! each other in any order and cyclically.

use std::{collections::HashSet, path::Path};

use indexmap::IndexMap;
use serde::Deserialize;

use crate::{
    ComplexType, EnumType, EnumValue, Member, ModelError, PrimitiveKind, Result, TypeDescriptor,
    TypeId, TypeModel,
};

/// Parsed `model.json` document.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct ModelDocument {
    #[serde(default)]
    roots: Vec<String>,
    definitions: Vec<Definition>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
enum Definition {
    Complex(ComplexDefinition),
    Enum(EnumDefinition),
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
struct ComplexDefinition {
    name: String,
    #[serde(default)]
    namespace: Option<String>,
    #[serde(default)]
    type_parameters: Vec<String>,
    #[serde(default)]
    base: Option<TypeExpr>,
    #[serde(default)]
    members: Vec<MemberDefinition>,
}

#[derive(Debug, Clone, Deserialize)]
struct MemberDefinition {
    name: String,
    #[serde(rename = "type")]
    ty: TypeExpr,
    #[serde(default)]
    optional: bool,
    #[serde(default)]
    nullable: bool,
    #[serde(default)]
    doc: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
struct EnumDefinition {
    name: String,
    #[serde(default)]
    namespace: Option<String>,
    #[serde(default)]
    members: Vec<EnumMemberDefinition>,
}

#[derive(Debug, Clone, Deserialize)]
struct EnumMemberDefinition {
    name: String,
    #[serde(default)]
    value: Option<EnumValue>,
}

/// A type expression: a primitive name or a tagged composite.
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
enum TypeExpr {
    Primitive(PrimitiveKind),
    Composite(Composite),
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "lowercase")]
enum Composite {
    Ref(String),
    Nullable(Box<TypeExpr>),
    Array(Box<TypeExpr>),
    Dictionary {
        key: Box<TypeExpr>,
        value: Box<TypeExpr>,
    },
    Param(String),
    Generic {
        definition: String,
        #[serde(default)]
        arguments: Vec<TypeExpr>,
    },
}

impl Definition {
    fn name(&self) -> &str {
        match self {
            Self::Complex(c) => &c.name,
            Self::Enum(e) => &e.name,
        }
    }

    fn namespace(&self) -> Option<&str> {
        match self {
            Self::Complex(c) => c.namespace.as_deref(),
            Self::Enum(e) => e.namespace.as_deref(),
        }
    }

    fn qualified_name(&self) -> String {
        match self.namespace() {
            Some(ns) if !ns.is_empty() => format!("{}.{}", ns, self.name()),
            _ => self.name().to_string(),
        }
    }
}

/// A model built from a document, with its name table and roots.
#[derive(Debug, Clone)]
pub struct LoadedModel {
    pub model: TypeModel,
    /// Roots declared in the document, in order.
    pub roots: Vec<TypeId>,
    /// Qualified name to id, in definition order.
    pub names: IndexMap<String, TypeId>,
}

impl LoadedModel {
    /// Resolve root names to ids.
    ///
    /// An empty list falls back to the document's own roots, and then to
    /// every definition.
    pub fn resolve_roots(&self, names: &[String]) -> Result<Vec<TypeId>> {
        if names.is_empty() {
            if self.roots.is_empty() {
                return Ok(self.names.values().copied().collect());
            }
            return Ok(self.roots.clone());
        }
        names
            .iter()
            .map(|name| {
                self.names
                    .get(name)
                    .copied()
                    .ok_or_else(|| ModelError::UnknownType {
                        name: name.clone(),
                        referrer: "roots".to_string(),
                    })
            })
            .collect()
    }
}

impl ModelDocument {
    pub fn from_json(source: &str) -> Result<Self> {
        Ok(serde_json::from_str(source)?)
    }

    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let source = std::fs::read_to_string(path).map_err(|source| ModelError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_json(&source)
    }

    pub fn roots(&self) -> &[String] {
        &self.roots
    }

    pub fn definition_count(&self) -> usize {
        self.definitions.len()
    }

    /// Build the arena.
    pub fn into_model(self) -> Result<LoadedModel> {
        let mut model = TypeModel::new();
        let mut names = IndexMap::new();

        for definition in &self.definitions {
            let qualified = definition.qualified_name();
            if names.contains_key(&qualified) {
                return Err(ModelError::DuplicateDefinition(qualified));
            }
            names.insert(qualified, model.reserve());
        }

        let mut resolver = Resolver {
            model,
            names: &names,
            instantiations: Vec::new(),
        };

        for definition in self.definitions {
            let qualified = definition.qualified_name();
            let id = names[&qualified];
            let descriptor = resolver.definition(definition, &qualified)?;
            resolver.model.define(id, descriptor)?;
        }

        // Arity can only be checked once every definition is in place.
        for (definition, arguments) in &resolver.instantiations {
            resolver.model.generic_definition(*definition, *arguments)?;
        }

        let roots = self
            .roots
            .iter()
            .map(|root| {
                names
                    .get(root)
                    .copied()
                    .ok_or_else(|| ModelError::UnknownType {
                        name: root.clone(),
                        referrer: "roots".to_string(),
                    })
            })
            .collect::<Result<Vec<_>>>()?;

        Ok(LoadedModel {
            model: resolver.model,
            roots,
            names,
        })
    }
}

struct Resolver<'a> {
    model: TypeModel,
    names: &'a IndexMap<String, TypeId>,
    instantiations: Vec<(TypeId, usize)>,
}

impl Resolver<'_> {
    fn definition(&mut self, definition: Definition, qualified: &str) -> Result<TypeDescriptor> {
        let namespace = definition.namespace().map(str::to_string);
        match definition {
            Definition::Enum(def) => {
                let mut enumeration = EnumType::new(def.name);
                enumeration.namespace = namespace;
                let mut seen = HashSet::new();
                for member in def.members {
                    if !seen.insert(member.name.clone()) {
                        return Err(ModelError::DuplicateMember {
                            owner: qualified.to_string(),
                            member: member.name,
                        });
                    }
                    enumeration = match member.value {
                        Some(value) => enumeration.member(member.name, value),
                        None => enumeration.named_member(member.name),
                    };
                }
                Ok(TypeDescriptor::Enum(enumeration))
            }
            Definition::Complex(def) => {
                let mut complex = ComplexType::new(def.name);
                complex.namespace = namespace;
                complex.type_params = def.type_parameters;
                if let Some(base) = def.base {
                    complex.base = Some(self.expr(base, qualified)?);
                }
                let mut seen = HashSet::new();
                for member in def.members {
                    if !seen.insert(member.name.clone()) {
                        return Err(ModelError::DuplicateMember {
                            owner: qualified.to_string(),
                            member: member.name,
                        });
                    }
                    let mut resolved = Member::new(member.name, self.expr(member.ty, qualified)?);
                    resolved.optional = member.optional;
                    resolved.nullable = member.nullable;
                    resolved.doc = member.doc;
                    complex.members.push(resolved);
                }
                Ok(TypeDescriptor::Complex(complex))
            }
        }
    }

    fn expr(&mut self, expr: TypeExpr, referrer: &str) -> Result<TypeId> {
        let composite = match expr {
            TypeExpr::Primitive(kind) => return Ok(self.model.primitive(kind)),
            TypeExpr::Composite(composite) => composite,
        };
        match composite {
            Composite::Ref(name) => self.lookup(&name, referrer),
            Composite::Nullable(inner) => {
                let inner = self.expr(*inner, referrer)?;
                Ok(self.model.nullable(inner))
            }
            Composite::Array(element) => {
                let element = self.expr(*element, referrer)?;
                Ok(self.model.array(element))
            }
            Composite::Dictionary { key, value } => {
                let key = self.expr(*key, referrer)?;
                let value = self.expr(*value, referrer)?;
                Ok(self.model.dictionary(key, value))
            }
            Composite::Param(name) => Ok(self.model.param(name)),
            Composite::Generic {
                definition,
                arguments,
            } => {
                let definition = self.lookup(&definition, referrer)?;
                let arguments = arguments
                    .into_iter()
                    .map(|arg| self.expr(arg, referrer))
                    .collect::<Result<Vec<_>>>()?;
                self.instantiations.push((definition, arguments.len()));
                Ok(self.model.instantiate(definition, arguments))
            }
        }
    }

    /// Look a name up as written, then relative to the referrer's namespace.
    fn lookup(&self, name: &str, referrer: &str) -> Result<TypeId> {
        if let Some(id) = self.names.get(name) {
            return Ok(*id);
        }
        if let Some((namespace, _)) = referrer.rsplit_once('.') {
            if let Some(id) = self.names.get(&format!("{}.{}", namespace, name)) {
                return Ok(*id);
            }
        }
        Err(ModelError::UnknownType {
            name: name.to_string(),
            referrer: referrer.to_string(),
        })
    }
}

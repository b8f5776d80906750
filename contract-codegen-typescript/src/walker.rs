//! Type walker: turns reachable type descriptors into units.
//!
//! Named types (classes, enums, generic instantiations) become units. They
//! are reserved in the [`UnitRegistry`] the first time they are referenced
//! and queued; their bodies are built later. A member that points back at a
//! type being built therefore finds it reserved and gets a reference node,
//! which is what makes recursive graphs terminate.
//!
//! Everything else (primitives, nullable wrappers, arrays, dictionaries,
//! type parameters) is converted inline where it is used.

use std::collections::{HashMap, HashSet, VecDeque};

use contractgen_core::to_pascal_case;
use contractgen_model::{
    EnumType, EnumValue, Member, ModelError, PrimitiveKind, TypeDescriptor, TypeId, TypeModel,
};
use indexmap::IndexMap;
use tracing::debug;

use crate::{
    ast::{Declaration, EnumMember, Field, Keyword, Literal, TsType},
    config::{EnumMode, FieldNaming, GeneratorConfig, GenericsMode},
    error::{GenerateError, Result},
    hooks::TypeOverride,
    naming::TS_NAMING,
    unit::{Reservation, Unit, UnitHeader, UnitId, UnitRegistry},
};

/// Type parameter name to the argument bound to it.
type Env = HashMap<String, TypeId>;

/// Generic arguments nested deeper than this are treated as runaway
/// polymorphic recursion (`Node<T>` containing `Node<T[]>`).
const MAX_NESTING: usize = 32;

struct Pending {
    unit: UnitId,
    source: TypeId,
}

/// Walks a [`TypeModel`] from a set of roots and produces completed units.
///
/// One walker performs one run and owns the registry it is given.
pub struct Walker<'a> {
    model: &'a TypeModel,
    config: &'a GeneratorConfig,
    hook: Option<&'a dyn TypeOverride>,
    /// Descriptors created by generic substitution. Ids continue after the
    /// model's own ids.
    overlay: Vec<TypeDescriptor>,
    registry: UnitRegistry,
    queue: VecDeque<Pending>,
    /// Type parameters in scope for the unit being built.
    scope: Vec<String>,
    /// Inline conversions in progress, for cycle detection.
    inline: Vec<TypeId>,
}

impl<'a> Walker<'a> {
    pub fn new(model: &'a TypeModel, config: &'a GeneratorConfig, registry: UnitRegistry) -> Self {
        Self {
            model,
            config,
            hook: None,
            overlay: Vec::new(),
            registry,
            queue: VecDeque::new(),
            scope: Vec::new(),
            inline: Vec::new(),
        }
    }

    /// Consult `hook` before converting any descriptor.
    pub fn with_override(mut self, hook: &'a dyn TypeOverride) -> Self {
        self.hook = Some(hook);
        self
    }

    /// Convert everything reachable from `roots`.
    ///
    /// Units come back in first-reserved order: named roots first, in the
    /// order given, then dependencies in breadth-first discovery order.
    pub fn walk(mut self, roots: &[TypeId]) -> Result<Vec<Unit>> {
        for &root in roots {
            self.root(root)?;
        }
        while let Some(pending) = self.queue.pop_front() {
            self.build(pending)?;
        }
        debug!(units = self.registry.len(), "Type walk finished.");
        self.registry.into_units()
    }

    fn root(&mut self, id: TypeId) -> Result<()> {
        let descriptor = self.descriptor(id)?;
        if let Some(hook) = self.hook {
            if hook.override_type(&descriptor).is_some() {
                debug!(root = %self.shallow(id), "Root handled by type override.");
                return Ok(());
            }
        }
        match descriptor {
            TypeDescriptor::Complex(_) | TypeDescriptor::Enum(_) => {
                self.unit_for(id)?;
            }
            // Inline roots only contribute the units they mention.
            _ => {
                self.convert(id)?;
            }
        }
        Ok(())
    }

    fn build(&mut self, Pending { unit, source }: Pending) -> Result<()> {
        let name = self.registry.header(unit).name.clone();
        let declaration = match self.descriptor(source)? {
            TypeDescriptor::Enum(enumeration) => self.enum_declaration(name, &enumeration),
            TypeDescriptor::Complex(complex) => {
                self.scope = complex.type_params.clone();
                let ty = self.object(source, &name)?;
                Declaration::Alias {
                    name,
                    type_params: complex.type_params,
                    ty,
                }
            }
            TypeDescriptor::GenericInstantiation { .. } => {
                self.scope.clear();
                let ty = self.object(source, &name)?;
                Declaration::Alias {
                    name,
                    type_params: Vec::new(),
                    ty,
                }
            }
            other => {
                return Err(GenerateError::unsupported(
                    self.shallow(source),
                    format!("a {} cannot be declared on its own", other.kind_name()),
                ));
            }
        };
        self.scope.clear();

        let references = declaration.references();
        debug!(
            unit = %declaration.name(),
            references = references.len(),
            "Built declaration."
        );
        self.registry.complete(unit, declaration, references)
    }

    // Units

    /// Reserve (or find) the unit for a named descriptor.
    fn unit_for(&mut self, id: TypeId) -> Result<(UnitId, String)> {
        let key = self.identity(id)?;
        let reservation = match self.registry.lookup(&key) {
            Some(existing) => Reservation {
                id: existing,
                fresh: false,
            },
            None => {
                let header = self.header(id)?;
                self.registry.reserve(&key, header)?
            }
        };

        let name = self.registry.header(reservation.id).name.clone();
        if reservation.fresh {
            debug!(%key, %name, "Discovered type.");
            self.queue.push_back(Pending {
                unit: reservation.id,
                source: id,
            });
        }
        Ok((reservation.id, name))
    }

    fn header(&self, id: TypeId) -> Result<UnitHeader> {
        match self.descriptor(id)? {
            TypeDescriptor::Complex(complex) => Ok(UnitHeader {
                name: TS_NAMING.type_name(&complex.name),
                namespace: complex.namespace,
                type_params: complex.type_params,
            }),
            TypeDescriptor::Enum(enumeration) => Ok(UnitHeader {
                name: TS_NAMING.type_name(&enumeration.name),
                namespace: enumeration.namespace,
                type_params: Vec::new(),
            }),
            TypeDescriptor::GenericInstantiation {
                definition,
                arguments,
            } => {
                let complex = self.model.generic_definition(definition, arguments.len())?;
                let name = self.synthesized_name(id, &mut Vec::new())?;
                Ok(UnitHeader {
                    name: TS_NAMING.safe_name(&name),
                    namespace: complex.namespace.clone(),
                    type_params: Vec::new(),
                })
            }
            other => Err(GenerateError::unsupported(
                self.shallow(id),
                format!("a {} is not a named type", other.kind_name()),
            )),
        }
    }

    // Conversion

    fn convert(&mut self, id: TypeId) -> Result<TsType> {
        let descriptor = self.descriptor(id)?;
        if let Some(hook) = self.hook {
            if let Some(ty) = hook.override_type(&descriptor) {
                return Ok(ty);
            }
        }

        if self.inline.contains(&id) {
            return Err(GenerateError::unsupported(
                self.shallow(id),
                "the type expression contains itself",
            ));
        }
        self.inline.push(id);
        let result = self.convert_descriptor(id, descriptor);
        self.inline.pop();
        result
    }

    fn convert_descriptor(&mut self, id: TypeId, descriptor: TypeDescriptor) -> Result<TsType> {
        let ty = match descriptor {
            TypeDescriptor::Primitive(kind) => TsType::keyword(primitive_keyword(kind)),
            TypeDescriptor::Nullable(inner) => TsType::nullable(self.convert(inner)?),
            TypeDescriptor::Array(element) => TsType::array(self.convert(element)?),
            TypeDescriptor::Dictionary { key, value } => self.dictionary(id, key, value)?,
            TypeDescriptor::Enum(_) => self.reference(id)?,
            TypeDescriptor::Complex(complex) if complex.is_generic() => {
                return Err(GenerateError::unsupported(
                    complex.qualified_name(),
                    format!(
                        "generic type used without its {} type argument(s)",
                        complex.type_params.len()
                    ),
                ));
            }
            TypeDescriptor::Complex(_) => self.reference(id)?,
            TypeDescriptor::GenericParameter(name) => {
                if !self.scope.contains(&name) {
                    return Err(GenerateError::unsupported(
                        name,
                        "type parameter is not declared by the enclosing type",
                    ));
                }
                TsType::TypeParam(name)
            }
            TypeDescriptor::GenericInstantiation {
                definition,
                arguments,
            } => self.instantiation(id, definition, &arguments)?,
        };
        Ok(ty)
    }

    fn reference(&mut self, id: TypeId) -> Result<TsType> {
        let (unit, name) = self.unit_for(id)?;
        Ok(TsType::Reference { unit, name })
    }

    fn instantiation(
        &mut self,
        id: TypeId,
        definition: TypeId,
        arguments: &[TypeId],
    ) -> Result<TsType> {
        self.model.generic_definition(definition, arguments.len())?;

        // Open instantiations only occur inside a generic body and must
        // stay generic.
        if self.config.generics == GenericsMode::Preserve
            || self.has_free_params(id, &mut Vec::new())?
        {
            let (unit, name) = self.unit_for(definition)?;
            let args = arguments
                .iter()
                .map(|&arg| self.convert(arg))
                .collect::<Result<Vec<_>>>()?;
            return Ok(TsType::GenericReference { unit, name, args });
        }
        self.reference(id)
    }

    fn dictionary(&mut self, id: TypeId, key: TypeId, value: TypeId) -> Result<TsType> {
        let key_descriptor = self.descriptor(key)?;
        let value = Box::new(self.convert(value)?);
        let key = match key_descriptor {
            TypeDescriptor::Primitive(PrimitiveKind::String | PrimitiveKind::Date) => {
                TsType::keyword(Keyword::String)
            }
            TypeDescriptor::Primitive(PrimitiveKind::Integer | PrimitiveKind::Float) => {
                TsType::keyword(Keyword::Number)
            }
            TypeDescriptor::Enum(_) => {
                return Ok(TsType::MappedType {
                    key: Box::new(self.convert(key)?),
                    value,
                    optional: true,
                });
            }
            other => {
                let label = match &other {
                    TypeDescriptor::Primitive(kind) => kind.as_str(),
                    other => other.kind_name(),
                };
                let identity = self.identity(id).unwrap_or_else(|_| self.shallow(id));
                return Err(GenerateError::unsupported(
                    identity,
                    format!("unsupported dictionary key type '{}'", label),
                ));
            }
        };
        Ok(TsType::IndexSignature {
            key: Box::new(key),
            value,
        })
    }

    /// Object type for a class or a monomorphized instantiation.
    fn object(&mut self, source: TypeId, unit_name: &str) -> Result<TsType> {
        let members = self.collect_members(source, &Env::new(), &mut Vec::new())?;
        let mut seen: HashMap<String, String> = HashMap::new();
        let mut fields = Vec::with_capacity(members.len());

        for member in members.into_values() {
            let field = self.field(member.clone())?;
            if let Some(previous) = seen.insert(field.name.clone(), member.name.clone()) {
                return Err(GenerateError::unsupported(
                    unit_name,
                    format!(
                        "members '{}' and '{}' both map to the field '{}'",
                        previous, member.name, field.name
                    ),
                ));
            }
            fields.push(field);
        }
        Ok(TsType::Object(fields))
    }

    fn field(&mut self, member: Member) -> Result<Field> {
        let mut ty = self.convert(member.ty)?;
        if member.nullable {
            ty = TsType::nullable(ty);
        }
        let name = match self.config.field_naming {
            FieldNaming::CamelCase => TS_NAMING.field_name(&member.name),
            FieldNaming::Preserve => member.name,
        };
        Ok(Field {
            name,
            ty,
            optional: member.optional,
            doc: member.doc,
        })
    }

    fn enum_declaration(&self, name: String, enumeration: &EnumType) -> Declaration {
        match self.config.enums {
            EnumMode::Union => {
                let mut seen = HashMap::new();
                for member in &enumeration.members {
                    let value = literal(&member.value);
                    if let Some(first) = seen.get(&value) {
                        debug!(
                            unit = %name,
                            member = %member.name,
                            same_as = %first,
                            "Enum member shares its value; the union lists it once."
                        );
                    } else {
                        seen.insert(value, member.name.clone());
                    }
                }
                Declaration::Alias {
                    name,
                    type_params: Vec::new(),
                    ty: TsType::union(
                        enumeration
                            .members
                            .iter()
                            .map(|member| TsType::Literal(literal(&member.value))),
                    ),
                }
            }
            EnumMode::Declaration => Declaration::Enum {
                name,
                members: enumeration
                    .members
                    .iter()
                    .map(|member| EnumMember {
                        name: member.name.clone(),
                        value: literal(&member.value),
                    })
                    .collect(),
            },
        }
    }

    // Members and generics

    /// Members of a class, base members first.
    ///
    /// A member redeclared by a derived class replaces the inherited one in
    /// place. Member types come back with generic arguments substituted.
    fn collect_members(
        &mut self,
        id: TypeId,
        env: &Env,
        chain: &mut Vec<TypeId>,
    ) -> Result<IndexMap<String, Member>> {
        if chain.contains(&id) {
            return Err(GenerateError::unsupported(
                self.shallow(id),
                "the inheritance chain loops back on itself",
            ));
        }

        let (complex, env) = match self.descriptor(id)? {
            TypeDescriptor::Complex(complex) => (complex, env.clone()),
            TypeDescriptor::GenericInstantiation {
                definition,
                arguments,
            } => {
                let complex = self
                    .model
                    .generic_definition(definition, arguments.len())?
                    .clone();
                let mut bound = Env::new();
                for (param, arg) in complex.type_params.iter().zip(arguments) {
                    bound.insert(param.clone(), self.substitute(arg, env)?);
                }
                (complex, bound)
            }
            other => {
                return Err(GenerateError::unsupported(
                    self.shallow(id),
                    format!("a base type must be a class, found a {}", other.kind_name()),
                ));
            }
        };

        chain.push(id);
        let mut members = match complex.base {
            Some(base) => self.collect_members(base, &env, chain)?,
            None => IndexMap::new(),
        };
        let mut own = HashSet::new();
        for member in complex.members {
            if !own.insert(member.name.clone()) {
                return Err(GenerateError::unsupported(
                    self.shallow(id),
                    format!("member '{}' is declared more than once", member.name),
                ));
            }
            let ty = self.substitute(member.ty, &env)?;
            members.insert(member.name.clone(), Member { ty, ..member });
        }
        chain.pop();
        Ok(members)
    }

    /// Replace type parameters bound in `env`, creating overlay descriptors
    /// for any wrapper whose contents changed.
    fn substitute(&mut self, id: TypeId, env: &Env) -> Result<TypeId> {
        if env.is_empty() {
            return Ok(id);
        }
        self.substitute_in(id, env, &mut Vec::new())
    }

    fn substitute_in(&mut self, id: TypeId, env: &Env, stack: &mut Vec<TypeId>) -> Result<TypeId> {
        if stack.contains(&id) {
            return Err(GenerateError::unsupported(
                self.shallow(id),
                "the type expression contains itself",
            ));
        }
        stack.push(id);

        let result = match self.descriptor(id)? {
            TypeDescriptor::GenericParameter(name) => env.get(&name).copied().unwrap_or(id),
            TypeDescriptor::Nullable(inner) => {
                let inner_sub = self.substitute_in(inner, env, stack)?;
                if inner_sub == inner {
                    id
                } else {
                    self.intern(TypeDescriptor::Nullable(inner_sub))
                }
            }
            TypeDescriptor::Array(element) => {
                let element_sub = self.substitute_in(element, env, stack)?;
                if element_sub == element {
                    id
                } else {
                    self.intern(TypeDescriptor::Array(element_sub))
                }
            }
            TypeDescriptor::Dictionary { key, value } => {
                let key_sub = self.substitute_in(key, env, stack)?;
                let value_sub = self.substitute_in(value, env, stack)?;
                if key_sub == key && value_sub == value {
                    id
                } else {
                    self.intern(TypeDescriptor::Dictionary {
                        key: key_sub,
                        value: value_sub,
                    })
                }
            }
            TypeDescriptor::GenericInstantiation {
                definition,
                arguments,
            } => {
                let mut substituted = Vec::with_capacity(arguments.len());
                for &arg in &arguments {
                    substituted.push(self.substitute_in(arg, env, stack)?);
                }
                if substituted == arguments {
                    id
                } else {
                    self.intern(TypeDescriptor::GenericInstantiation {
                        definition,
                        arguments: substituted,
                    })
                }
            }
            _ => id,
        };

        stack.pop();
        Ok(result)
    }

    fn has_free_params(&self, id: TypeId, stack: &mut Vec<TypeId>) -> Result<bool> {
        if stack.contains(&id) {
            return Err(GenerateError::CyclicNameResolution {
                identity: self.shallow(id),
            });
        }
        stack.push(id);
        let free = match self.descriptor(id)? {
            TypeDescriptor::GenericParameter(_) => true,
            TypeDescriptor::Nullable(inner) | TypeDescriptor::Array(inner) => {
                self.has_free_params(inner, stack)?
            }
            TypeDescriptor::Dictionary { key, value } => {
                self.has_free_params(key, stack)? || self.has_free_params(value, stack)?
            }
            TypeDescriptor::GenericInstantiation { arguments, .. } => {
                let mut free = false;
                for arg in arguments {
                    free |= self.has_free_params(arg, stack)?;
                }
                free
            }
            _ => false,
        };
        stack.pop();
        Ok(free)
    }

    // Identities and names

    /// Stable identity of a descriptor: qualified name plus generic arity
    /// for named types, structural for everything else.
    fn identity(&self, id: TypeId) -> Result<String> {
        self.identity_in(id, &mut Vec::new())
    }

    fn identity_in(&self, id: TypeId, stack: &mut Vec<TypeId>) -> Result<String> {
        if stack.contains(&id) {
            return Err(GenerateError::CyclicNameResolution {
                identity: self.shallow(id),
            });
        }
        stack.push(id);
        let identity = match self.descriptor(id)? {
            TypeDescriptor::Primitive(kind) => kind.as_str().to_string(),
            TypeDescriptor::Enum(enumeration) => enumeration.qualified_name(),
            TypeDescriptor::Complex(complex) if complex.is_generic() => {
                format!("{}`{}", complex.qualified_name(), complex.type_params.len())
            }
            TypeDescriptor::Complex(complex) => complex.qualified_name(),
            TypeDescriptor::GenericParameter(name) => format!("!{}", name),
            TypeDescriptor::Nullable(inner) => format!("{}?", self.identity_in(inner, stack)?),
            TypeDescriptor::Array(element) => format!("{}[]", self.identity_in(element, stack)?),
            TypeDescriptor::Dictionary { key, value } => format!(
                "Dictionary[{},{}]",
                self.identity_in(key, stack)?,
                self.identity_in(value, stack)?
            ),
            TypeDescriptor::GenericInstantiation {
                definition,
                arguments,
            } => {
                let definition = self.identity_in(definition, stack)?;
                let mut args = Vec::with_capacity(arguments.len());
                for arg in arguments {
                    args.push(self.identity_in(arg, stack)?);
                }
                format!("{}[{}]", definition, args.join(","))
            }
        };
        stack.pop();
        Ok(identity)
    }

    /// Declaration name for a monomorphized instantiation, e.g.
    /// `PageOfUser` or `PairOfNullableIntegerAndStringArray`.
    fn synthesized_name(&self, id: TypeId, stack: &mut Vec<TypeId>) -> Result<String> {
        if stack.contains(&id) {
            return Err(GenerateError::CyclicNameResolution {
                identity: self.shallow(id),
            });
        }
        if stack.len() >= MAX_NESTING {
            return Err(GenerateError::unsupported(
                self.shallow(id),
                "generic arguments nest too deeply to name",
            ));
        }
        stack.push(id);
        let name = match self.descriptor(id)? {
            TypeDescriptor::Primitive(kind) => to_pascal_case(kind.as_str()),
            TypeDescriptor::Enum(enumeration) => to_pascal_case(&enumeration.name),
            TypeDescriptor::Complex(complex) => to_pascal_case(&complex.name),
            TypeDescriptor::GenericParameter(name) => to_pascal_case(&name),
            TypeDescriptor::Nullable(inner) => {
                format!("Nullable{}", self.synthesized_name(inner, stack)?)
            }
            TypeDescriptor::Array(element) => {
                format!("{}Array", self.synthesized_name(element, stack)?)
            }
            TypeDescriptor::Dictionary { key, value } => format!(
                "{}To{}Dictionary",
                self.synthesized_name(key, stack)?,
                self.synthesized_name(value, stack)?
            ),
            TypeDescriptor::GenericInstantiation {
                definition,
                arguments,
            } => {
                let definition = self.synthesized_name(definition, stack)?;
                let mut args = Vec::with_capacity(arguments.len());
                for arg in arguments {
                    args.push(self.synthesized_name(arg, stack)?);
                }
                format!("{}Of{}", definition, args.join("And"))
            }
        };
        stack.pop();
        Ok(name)
    }

    /// Short human-readable label that never recurses.
    fn shallow(&self, id: TypeId) -> String {
        match self.descriptor(id) {
            Ok(TypeDescriptor::Complex(complex)) => complex.qualified_name(),
            Ok(TypeDescriptor::Enum(enumeration)) => enumeration.qualified_name(),
            Ok(TypeDescriptor::GenericInstantiation { definition, .. }) => {
                format!("{}<...>", self.shallow(definition))
            }
            Ok(TypeDescriptor::GenericParameter(name)) => name,
            Ok(other) => format!("{} {}", other.kind_name(), id),
            Err(_) => id.to_string(),
        }
    }

    // Storage

    fn descriptor(&self, id: TypeId) -> Result<TypeDescriptor> {
        let base = self.model.len();
        if id.index() < base {
            return Ok(self.model.get(id)?.clone());
        }
        self.overlay
            .get(id.index() - base)
            .cloned()
            .ok_or_else(|| GenerateError::Model(ModelError::OutOfRange(id)))
    }

    fn intern(&mut self, descriptor: TypeDescriptor) -> TypeId {
        let id = TypeId::new((self.model.len() + self.overlay.len()) as u32);
        self.overlay.push(descriptor);
        id
    }
}

fn primitive_keyword(kind: PrimitiveKind) -> Keyword {
    match kind {
        PrimitiveKind::Integer | PrimitiveKind::Float => Keyword::Number,
        PrimitiveKind::Boolean => Keyword::Boolean,
        // Dates travel as ISO strings, binary payloads as base64.
        PrimitiveKind::String | PrimitiveKind::Date | PrimitiveKind::Binary => Keyword::String,
    }
}

fn literal(value: &EnumValue) -> Literal {
    match value {
        EnumValue::Number(n) => Literal::Number(*n),
        EnumValue::String(s) => Literal::String(s.clone()),
    }
}

#[cfg(test)]
mod tests {
    use contractgen_model::ComplexType;

    use super::*;

    fn pair(model: &mut TypeModel) -> TypeId {
        let a = model.param("A");
        let b = model.param("B");
        model.complex(
            ComplexType::new("Pair")
                .namespace("Common")
                .type_param("A")
                .type_param("B")
                .member(Member::new("First", a))
                .member(Member::new("Second", b)),
        )
    }

    #[test]
    fn test_identities() {
        let mut model = TypeModel::new();
        let pair = pair(&mut model);
        let int = model.primitive(PrimitiveKind::Integer);
        let string = model.primitive(PrimitiveKind::String);
        let maybe_int = model.nullable(int);
        let strings = model.array(string);
        let lookup = model.dictionary(string, maybe_int);
        let inst = model.instantiate(pair, vec![maybe_int, lookup]);

        let config = GeneratorConfig::new();
        let walker = Walker::new(&model, &config, UnitRegistry::new());
        assert_eq!(walker.identity(pair).unwrap(), "Common.Pair`2");
        assert_eq!(walker.identity(strings).unwrap(), "string[]");
        assert_eq!(
            walker.identity(inst).unwrap(),
            "Common.Pair`2[integer?,Dictionary[string,integer?]]"
        );
    }

    #[test]
    fn test_synthesized_names() {
        let mut model = TypeModel::new();
        let pair = pair(&mut model);
        let int = model.primitive(PrimitiveKind::Integer);
        let string = model.primitive(PrimitiveKind::String);
        let maybe_int = model.nullable(int);
        let strings = model.array(string);
        let lookup = model.dictionary(string, int);
        let first = model.instantiate(pair, vec![maybe_int, strings]);
        let second = model.instantiate(pair, vec![lookup, first]);

        let config = GeneratorConfig::new();
        let walker = Walker::new(&model, &config, UnitRegistry::new());
        assert_eq!(
            walker.synthesized_name(first, &mut Vec::new()).unwrap(),
            "PairOfNullableIntegerAndStringArray"
        );
        assert_eq!(
            walker.synthesized_name(second, &mut Vec::new()).unwrap(),
            "PairOfStringToIntegerDictionaryAndPairOfNullableIntegerAndStringArray"
        );

        let header = walker.header(first).unwrap();
        assert_eq!(header.namespace.as_deref(), Some("Common"));
        assert!(header.type_params.is_empty());
    }

    #[test]
    fn test_substitution_reuses_unchanged_descriptors() {
        let mut model = TypeModel::new();
        let int = model.primitive(PrimitiveKind::Integer);
        let t = model.param("T");
        let ints = model.array(int);
        let items = model.array(t);

        let config = GeneratorConfig::new();
        let mut walker = Walker::new(&model, &config, UnitRegistry::new());
        let env = Env::from([("T".to_string(), int)]);

        assert_eq!(walker.substitute(ints, &env).unwrap(), ints);
        let substituted = walker.substitute(items, &env).unwrap();
        assert_ne!(substituted, items);
        assert_eq!(
            walker.descriptor(substituted).unwrap(),
            TypeDescriptor::Array(int)
        );
        assert!(!walker.has_free_params(substituted, &mut Vec::new()).unwrap());
        assert!(walker.has_free_params(items, &mut Vec::new()).unwrap());
    }
}

//! Arena storage for type descriptors.

use std::fmt;

use crate::{ComplexType, EnumType, ModelError, PrimitiveKind, Result, TypeDescriptor};

/// Index of a descriptor inside a [`TypeModel`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct TypeId(u32);

impl TypeId {
    pub fn new(index: u32) -> Self {
        Self(index)
    }

    pub fn index(self) -> usize {
        self.0 as usize
    }
}

impl fmt::Display for TypeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// Arena of type descriptors.
///
/// Slots can be reserved before they are defined, which is how cyclic
/// graphs are built: reserve `A`, build descriptors that point at `A`,
/// then [`define`](Self::define) `A` itself.
///
/// The model is read-only to the generator; a generation run never mutates it.
#[derive(Debug, Clone, Default)]
pub struct TypeModel {
    slots: Vec<Option<TypeDescriptor>>,
}

impl TypeModel {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a descriptor and return its id.
    pub fn add(&mut self, descriptor: TypeDescriptor) -> TypeId {
        let id = self.next_id();
        self.slots.push(Some(descriptor));
        id
    }

    /// Reserve a slot to be filled later with [`define`](Self::define).
    pub fn reserve(&mut self) -> TypeId {
        let id = self.next_id();
        self.slots.push(None);
        id
    }

    /// Fill a reserved slot.
    pub fn define(&mut self, id: TypeId, descriptor: TypeDescriptor) -> Result<()> {
        match self.slots.get_mut(id.index()) {
            None => Err(ModelError::OutOfRange(id)),
            Some(Some(_)) => Err(ModelError::AlreadyDefined(id)),
            Some(slot) => {
                *slot = Some(descriptor);
                Ok(())
            }
        }
    }

    /// Look up a descriptor. Reserved-but-undefined slots are an error.
    pub fn get(&self, id: TypeId) -> Result<&TypeDescriptor> {
        match self.slots.get(id.index()) {
            None => Err(ModelError::OutOfRange(id)),
            Some(None) => Err(ModelError::Unresolved(id)),
            Some(Some(descriptor)) => Ok(descriptor),
        }
    }

    /// Resolve the generic class behind an instantiation and check its arity.
    pub fn generic_definition(&self, definition: TypeId, arguments: usize) -> Result<&ComplexType> {
        match self.get(definition)? {
            TypeDescriptor::Complex(complex) if complex.type_params.len() == arguments => {
                Ok(complex)
            }
            TypeDescriptor::Complex(complex) => Err(ModelError::ArityMismatch {
                name: complex.qualified_name(),
                expected: complex.type_params.len(),
                found: arguments,
            }),
            other => Err(ModelError::NotGeneric {
                id: definition,
                kind: other.kind_name(),
            }),
        }
    }

    pub fn len(&self) -> usize {
        self.slots.len()
    }

    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }

    /// Ids of every defined class and enum, in insertion order.
    pub fn named_types(&self) -> impl Iterator<Item = TypeId> + '_ {
        self.slots.iter().enumerate().filter_map(|(i, slot)| {
            matches!(
                slot,
                Some(TypeDescriptor::Complex(_) | TypeDescriptor::Enum(_))
            )
            .then(|| TypeId::new(i as u32))
        })
    }

    /// Find a class or enum by its fully-qualified name.
    pub fn find(&self, qualified_name: &str) -> Option<TypeId> {
        self.named_types().find(|&id| match self.get(id) {
            Ok(TypeDescriptor::Complex(c)) => c.qualified_name() == qualified_name,
            Ok(TypeDescriptor::Enum(e)) => e.qualified_name() == qualified_name,
            _ => false,
        })
    }

    // Convenience constructors

    pub fn primitive(&mut self, kind: PrimitiveKind) -> TypeId {
        self.add(TypeDescriptor::Primitive(kind))
    }

    pub fn nullable(&mut self, inner: TypeId) -> TypeId {
        self.add(TypeDescriptor::Nullable(inner))
    }

    pub fn array(&mut self, element: TypeId) -> TypeId {
        self.add(TypeDescriptor::Array(element))
    }

    pub fn dictionary(&mut self, key: TypeId, value: TypeId) -> TypeId {
        self.add(TypeDescriptor::Dictionary { key, value })
    }

    pub fn param(&mut self, name: impl Into<String>) -> TypeId {
        self.add(TypeDescriptor::GenericParameter(name.into()))
    }

    pub fn instantiate(&mut self, definition: TypeId, arguments: Vec<TypeId>) -> TypeId {
        self.add(TypeDescriptor::GenericInstantiation {
            definition,
            arguments,
        })
    }

    pub fn complex(&mut self, complex: ComplexType) -> TypeId {
        self.add(TypeDescriptor::Complex(complex))
    }

    pub fn enumeration(&mut self, enumeration: EnumType) -> TypeId {
        self.add(TypeDescriptor::Enum(enumeration))
    }

    fn next_id(&self) -> TypeId {
        TypeId::new(self.slots.len() as u32)
    }
}

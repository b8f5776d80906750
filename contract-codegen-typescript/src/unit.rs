//! Units and the registry that deduplicates them.
//!
//! A unit is one emitted declaration. The registry hands out a [`UnitId`]
//! the first time an identity is seen and returns the same id afterwards,
//! which is what lets the walker stop at a type it has already started.

use std::{collections::HashMap, fmt};

use indexmap::IndexSet;
use tracing::trace;

use crate::{
    ast::Declaration,
    error::{GenerateError, Result},
};

/// Handle to a unit in a [`UnitRegistry`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct UnitId(usize);

impl UnitId {
    pub fn new(index: usize) -> Self {
        Self(index)
    }

    pub fn index(self) -> usize {
        self.0
    }
}

impl fmt::Display for UnitId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unit#{}", self.0)
    }
}

/// What is known about a unit at reservation time.
///
/// This is all a reference node needs; the body comes later.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnitHeader {
    pub name: String,
    pub namespace: Option<String>,
    pub type_params: Vec<String>,
}

/// A completed declaration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Unit {
    pub id: UnitId,
    /// Identity of the source type.
    pub key: String,
    pub name: String,
    pub namespace: Option<String>,
    pub type_params: Vec<String>,
    pub declaration: Declaration,
    /// Other units named by the declaration, in first-use order.
    pub references: IndexSet<UnitId>,
}

/// Outcome of [`UnitRegistry::reserve`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Reservation {
    pub id: UnitId,
    /// `true` when this call created the unit.
    pub fresh: bool,
}

#[derive(Debug)]
struct Slot {
    key: String,
    header: UnitHeader,
    body: Option<(Declaration, IndexSet<UnitId>)>,
}

/// Per-run registry of units, keyed by type identity.
///
/// Not shared between runs; each generation builds its own.
#[derive(Debug, Default)]
pub struct UnitRegistry {
    slots: Vec<Slot>,
    by_key: HashMap<String, UnitId>,
    by_name: HashMap<String, UnitId>,
}

impl UnitRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Reserve a unit for `key`, or return the one already reserved.
    ///
    /// Fails when a different key already owns `header.name`.
    pub fn reserve(&mut self, key: &str, header: UnitHeader) -> Result<Reservation> {
        if let Some(&id) = self.by_key.get(key) {
            return Ok(Reservation { id, fresh: false });
        }
        if let Some(&other) = self.by_name.get(&header.name) {
            return Err(GenerateError::AmbiguousUnitName {
                name: header.name,
                first: self.slots[other.index()].key.clone(),
                second: key.to_string(),
            });
        }

        let id = UnitId::new(self.slots.len());
        trace!(%id, key, name = %header.name, "Reserved unit.");
        self.by_key.insert(key.to_string(), id);
        self.by_name.insert(header.name.clone(), id);
        self.slots.push(Slot {
            key: key.to_string(),
            header,
            body: None,
        });
        Ok(Reservation { id, fresh: true })
    }

    /// Attach the finished declaration to a reserved unit. Only once per unit.
    pub fn complete(
        &mut self,
        id: UnitId,
        declaration: Declaration,
        mut references: IndexSet<UnitId>,
    ) -> Result<()> {
        let slot = &mut self.slots[id.index()];
        if slot.body.is_some() {
            return Err(GenerateError::UnitAlreadyCompleted {
                name: slot.header.name.clone(),
            });
        }
        references.shift_remove(&id);
        trace!(%id, name = %slot.header.name, references = references.len(), "Completed unit.");
        slot.body = Some((declaration, references));
        Ok(())
    }

    pub fn lookup(&self, key: &str) -> Option<UnitId> {
        self.by_key.get(key).copied()
    }

    /// Header of a reserved unit; valid before completion.
    pub fn header(&self, id: UnitId) -> &UnitHeader {
        &self.slots[id.index()].header
    }

    pub fn is_complete(&self, id: UnitId) -> bool {
        self.slots[id.index()].body.is_some()
    }

    pub fn len(&self) -> usize {
        self.slots.len()
    }

    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }

    /// All units in first-reserved order. Every unit must be complete.
    pub fn into_units(self) -> Result<Vec<Unit>> {
        self.slots
            .into_iter()
            .enumerate()
            .map(|(index, slot)| {
                let Some((declaration, references)) = slot.body else {
                    return Err(GenerateError::UnitNotCompleted {
                        name: slot.header.name,
                    });
                };
                Ok(Unit {
                    id: UnitId::new(index),
                    key: slot.key,
                    name: slot.header.name,
                    namespace: slot.header.namespace,
                    type_params: slot.header.type_params,
                    declaration,
                    references,
                })
            })
            .collect()
    }
}

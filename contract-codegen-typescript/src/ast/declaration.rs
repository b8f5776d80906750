//! Top-level declarations.

use indexmap::IndexSet;

use super::{Literal, TsType};
use crate::UnitId;

/// A member of an `enum` declaration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EnumMember {
    pub name: String,
    pub value: Literal,
}

/// A named, exported declaration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Declaration {
    /// `export type Name<T> = ...;`
    Alias {
        name: String,
        type_params: Vec<String>,
        ty: TsType,
    },
    /// `export enum Name { ... }`
    Enum {
        name: String,
        members: Vec<EnumMember>,
    },
}

impl Declaration {
    pub fn name(&self) -> &str {
        match self {
            Self::Alias { name, .. } | Self::Enum { name, .. } => name,
        }
    }

    /// Declarations named by this one, in first-use order.
    pub fn references(&self) -> IndexSet<UnitId> {
        let mut out = IndexSet::new();
        if let Self::Alias { ty, .. } = self {
            ty.collect_references(&mut out);
        }
        out
    }
}

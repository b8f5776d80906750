//! Source-agnostic type model for the contractgen generator.
//!
//! The model is an arena of [`TypeDescriptor`]s addressed by [`TypeId`].
//! Descriptors refer to each other by id, so the graph may be cyclic
//! (a class referencing itself, directly or through a chain).
//!
//! # Architecture
//!
//! ```text
//! host type system → adapter (e.g. model.json) → TypeModel → walker → units
//! ```
//!
//! Building a model by hand:
//!
//! ```
//! use contractgen_model::{ComplexType, Member, PrimitiveKind, TypeModel};
//!
//! let mut model = TypeModel::new();
//! let id = model.primitive(PrimitiveKind::Integer);
//! let leaf = model.complex(ComplexType::new("Leaf").member(Member::new("id", id)));
//! let leaf_or_null = model.nullable(leaf);
//! let items = model.array(leaf_or_null);
//! let root = model.complex(ComplexType::new("Root").member(Member::new("items", items)));
//!
//! assert_eq!(model.get(root).unwrap().kind_name(), "complex");
//! ```

mod descriptor;
mod document;
mod error;
mod model;

pub use descriptor::{
    ComplexType, EnumMember, EnumType, EnumValue, Member, PrimitiveKind, TypeDescriptor,
};
pub use document::{LoadedModel, ModelDocument};
pub use error::{ModelError, Result};
pub use model::{TypeId, TypeModel};

//! TypeScript contract generator for contractgen.
//!
//! Converts a [`TypeModel`](contractgen_model::TypeModel) into TypeScript
//! type declarations. The pipeline has four stages:
//!
//! - the walker traverses the model from the requested roots and turns each
//!   named type into a [`Unit`], reusing units it has already seen so that
//!   recursive types terminate
//! - the [`UnitRegistry`] guarantees one unit per type identity and one
//!   identity per declaration name
//! - the [`Renderer`] turns AST nodes into source text
//! - the planner groups units into files and adds type-only imports
//!
//! # Usage
//!
//! ```ignore
//! use contractgen_codegen_typescript::{Generator, GeneratorConfig, OutputLayout};
//!
//! let loaded = ModelDocument::load("model.json")?.into_model()?;
//! let config = GeneratorConfig::new().layout(OutputLayout::PerNamespace);
//! let generation = Generator::new(config).generate(&loaded.model, &loaded.roots)?;
//! generation.registry().write_all(Path::new("src/contracts"))?;
//! ```

mod code_file;
mod config;
mod error;
mod generator;
mod hooks;
mod naming;
mod planner;
mod render;
mod unit;
mod walker;

pub mod ast;

pub use ast::{Declaration, EnumMember, Field, Import, Keyword, Literal, TsType};
pub use code_file::CodeFile;
pub use config::{
    EnumMode, FieldNaming, GeneratorConfig, GenericsMode, LinterDisableMode, OutputLayout,
};
pub use error::{GenerateError, Result};
pub use generator::{Generation, Generator};
pub use hooks::TypeOverride;
pub use naming::{TS_NAMING, property_key, quote_string};
pub use planner::{PlannedFile, module_path, plan, relative_module};
pub use render::{DeclarationNode, Renderer, render};
pub use unit::{Reservation, Unit, UnitHeader, UnitId, UnitRegistry};
pub use walker::Walker;

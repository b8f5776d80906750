//! Parsing and validation of `contractgen.toml`.
//!
//! ```ignore
//! use contractgen_manifest::Manifest;
//!
//! let manifest = Manifest::from_file("contractgen.toml")?;
//! let model = manifest.model_path(Path::new("."));
//! ```

// Miette's derive macro generates code that triggers these warnings
#![allow(unused_assignments)]

mod error;
mod manifest;

pub use error::{Error, Result, SourceContext};
pub use manifest::{
    EnumStyle, FieldCase, GeneratorSection, GenericStyle, IndentSetting, Layout, Linter,
    MANIFEST_FILE, Manifest, parse_manifest,
};

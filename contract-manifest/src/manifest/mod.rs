//! Manifest types and parsing for contractgen.toml files.

mod generator;
mod parse;
mod validate;

use std::path::{Path, PathBuf};

pub use generator::{
    EnumStyle, FieldCase, GeneratorSection, GenericStyle, IndentSetting, Layout, Linter,
};
pub use parse::parse_manifest;
use serde::Deserialize;

/// Default manifest file name.
pub const MANIFEST_FILE: &str = "contractgen.toml";

/// Root manifest for contractgen.toml
#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Manifest {
    pub generator: GeneratorSection,
}

impl Manifest {
    /// Model document path, relative paths resolved against `manifest_dir`.
    pub fn model_path(&self, manifest_dir: &Path) -> PathBuf {
        manifest_dir.join(&self.generator.model)
    }

    /// Output directory, relative paths resolved against `manifest_dir`.
    pub fn output_dir(&self, manifest_dir: &Path) -> PathBuf {
        manifest_dir.join(&self.generator.output)
    }
}

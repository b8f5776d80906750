//! Core operations.
//!
//! This module contains the business logic for contractgen commands,
//! separated from CLI argument parsing and output rendering.

pub mod check;
pub mod clean;
pub mod generate;

use std::path::Path;

use contractgen_manifest::Manifest;
use contractgen_model::{LoadedModel, ModelDocument, TypeId};
use eyre::{Context, Result};
use tracing::debug;

pub use check::check;
pub use clean::clean;
pub use generate::generate;

/// Directory that relative manifest paths are resolved against.
pub fn manifest_dir(config: &Path) -> &Path {
    config.parent().unwrap_or(Path::new(""))
}

/// The model named by the manifest, with its roots resolved.
#[derive(Debug)]
pub(crate) struct Model {
    pub loaded: LoadedModel,
    pub roots: Vec<TypeId>,
    pub definitions: usize,
}

pub(crate) fn load_model(manifest: &Manifest, manifest_dir: &Path) -> Result<Model> {
    let path = manifest.model_path(manifest_dir);
    let document = ModelDocument::load(&path)
        .wrap_err_with(|| format!("Failed to load model '{}'", path.display()))?;
    let definitions = document.definition_count();

    let loaded = document
        .into_model()
        .wrap_err_with(|| format!("Invalid model document '{}'", path.display()))?;
    let roots = loaded
        .resolve_roots(&manifest.generator.roots)
        .wrap_err("Failed to resolve root types")?;
    debug!(
        model = %path.display(),
        definitions,
        roots = roots.len(),
        "Loaded model document."
    );

    Ok(Model {
        loaded,
        roots,
        definitions,
    })
}

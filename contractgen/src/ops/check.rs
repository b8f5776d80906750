//! Check operation - validate the manifest and model without writing.

use std::path::Path;

use contractgen_codegen_typescript::Generator;
use contractgen_manifest::Manifest;
use eyre::{Context, Result};

use crate::{reports::CheckReport, settings};

/// Execute the check operation.
///
/// Runs the full conversion and planning so every generation error surfaces,
/// but leaves the output directory alone.
pub fn check(manifest: &Manifest, config_path: &Path) -> Result<CheckReport> {
    let model = super::load_model(manifest, super::manifest_dir(config_path))?;
    let generator = Generator::new(settings::generator_config(&manifest.generator));
    let generation = generator
        .generate(&model.loaded.model, &model.roots)
        .wrap_err("Failed to generate declarations")?;

    Ok(CheckReport {
        config_path: config_path.to_path_buf(),
        definitions: model.definitions,
        units: generation
            .units
            .iter()
            .map(|unit| match &unit.namespace {
                Some(namespace) => format!("{}.{}", namespace, unit.name),
                None => unit.name.clone(),
            })
            .collect(),
        files: generation.files.len(),
    })
}

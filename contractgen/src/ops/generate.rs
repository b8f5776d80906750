//! Generate operation - TypeScript declarations from the model.

use std::path::Path;

use contractgen_codegen_typescript::Generator;
use contractgen_manifest::Manifest;
use eyre::{Context, Result};

use crate::{
    reports::{GenerateReport, GenerationResult, PreviewFile, WrittenResult},
    settings,
};

/// Options for the generate operation.
pub struct GenerateOptions<'a> {
    /// Directory the manifest's relative paths are resolved against.
    pub manifest_dir: &'a Path,
    /// Output directory for generated files.
    pub output_dir: &'a Path,
    /// Whether to preview without writing files.
    pub dry_run: bool,
}

/// Execute the generate operation.
///
/// Loads the model, converts it from the configured roots, and writes the
/// planned files (or returns them for preview).
pub fn generate(manifest: &Manifest, opts: GenerateOptions) -> Result<GenerateReport> {
    let model = super::load_model(manifest, opts.manifest_dir)?;
    let generator = Generator::new(settings::generator_config(&manifest.generator));
    let generation = generator
        .generate(&model.loaded.model, &model.roots)
        .wrap_err("Failed to generate declarations")?;

    let result = if opts.dry_run {
        GenerationResult::Preview(
            generation
                .files
                .iter()
                .map(|file| PreviewFile {
                    path: file.path.clone(),
                    content: file.content.clone(),
                })
                .collect(),
        )
    } else {
        let stats = generation
            .registry()
            .write_all(opts.output_dir)
            .wrap_err("Failed to write generated files")?;
        GenerationResult::Written(WrittenResult {
            output_dir: opts.output_dir.to_path_buf(),
            written: stats.written,
            unchanged: stats.unchanged,
            deleted: stats.deleted,
        })
    };

    Ok(GenerateReport {
        model_path: manifest.generator.model.clone(),
        unit_count: generation.units.len(),
        result,
    })
}

#[cfg(test)]
mod tests {
    use std::fs;

    use super::*;
    use crate::ops::fixture::Project;

    fn run(project: &Project, dry_run: bool) -> GenerateReport {
        let output = project.output();
        generate(
            &project.manifest,
            GenerateOptions {
                manifest_dir: project.dir.path(),
                output_dir: &output,
                dry_run,
            },
        )
        .unwrap()
    }

    #[test]
    fn test_generate_writes_per_unit_files() {
        let project = Project::new("");
        let report = run(&project, false);
        assert_eq!(report.unit_count, 3);

        let GenerationResult::Written(written) = report.result else {
            panic!("expected written result");
        };
        assert_eq!(
            written.written,
            ["shop/order.ts", "shop/line.ts", "shop/status.ts"]
        );

        let order = fs::read_to_string(project.output().join("shop/order.ts")).unwrap();
        assert!(order.starts_with("/* eslint-disable */\n"));
        assert!(order.contains("import type { Line } from \"./line\";"));
        assert!(order.contains("    lines: Line[];\n"));

        let report = run(&project, false);
        let GenerationResult::Written(written) = report.result else {
            panic!("expected written result");
        };
        assert!(written.written.is_empty());
        assert_eq!(written.unchanged.len(), 3);
    }

    #[test]
    fn test_dry_run_writes_nothing() {
        let project = Project::new("layout = \"single-file\"\nfile = \"contracts\"\n");
        let report = run(&project, true);

        let GenerationResult::Preview(files) = report.result else {
            panic!("expected preview result");
        };
        assert_eq!(files.len(), 1);
        assert_eq!(files[0].path, "contracts.ts");
        assert!(files[0].content.contains("export type Status = \"open\" | \"closed\";"));
        assert!(!project.output().exists());
    }

    #[test]
    fn test_missing_model_is_reported() {
        let project = Project::new("");
        fs::remove_file(project.dir.path().join("model.json")).unwrap();
        let output = project.output();
        let err = generate(
            &project.manifest,
            GenerateOptions {
                manifest_dir: project.dir.path(),
                output_dir: &output,
                dry_run: false,
            },
        )
        .unwrap_err();
        assert!(err.to_string().starts_with("Failed to load model"));
    }
}

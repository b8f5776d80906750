//! Clean operation - remove generated files.

use std::path::Path;

use contractgen_codegen::generation::FileRegistry;
use eyre::{Context, Result};

use crate::reports::CleanReport;

/// Options for the clean operation.
pub struct CleanOptions<'a> {
    /// Output directory containing generated files.
    pub output_dir: &'a Path,
    /// Whether to preview without deleting.
    pub dry_run: bool,
}

/// Execute the clean operation.
///
/// Only files carrying the generated-content marker are touched.
pub fn clean(opts: CleanOptions) -> Result<CleanReport> {
    let stats = FileRegistry::clean(opts.output_dir, opts.dry_run).wrap_err_with(|| {
        format!(
            "Failed to clean generated files in '{}'",
            opts.output_dir.display()
        )
    })?;

    Ok(CleanReport {
        dry_run: stats.dry_run,
        files: stats
            .files
            .iter()
            .map(|path| {
                path.strip_prefix(opts.output_dir)
                    .unwrap_or(path.as_path())
                    .display()
                    .to_string()
            })
            .collect(),
    })
}

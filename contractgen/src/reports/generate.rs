//! Generate command report data structures.

use std::path::PathBuf;

use super::output::{Output, Report};

/// Report data from code generation.
#[derive(Debug)]
pub struct GenerateReport {
    /// Model document path, as written in the manifest.
    pub model_path: PathBuf,

    /// Number of declarations produced.
    pub unit_count: usize,

    /// Generation result (files written or preview).
    pub result: GenerationResult,
}

/// Result of code generation.
#[derive(Debug)]
pub enum GenerationResult {
    /// Files were written to disk.
    Written(WrittenResult),
    /// Dry-run preview.
    Preview(Vec<PreviewFile>),
}

/// Result when files were written to disk.
#[derive(Debug)]
pub struct WrittenResult {
    pub output_dir: PathBuf,
    /// Files whose content changed.
    pub written: Vec<String>,
    /// Files that already had the planned content.
    pub unchanged: Vec<String>,
    /// Stale generated files that were removed.
    pub deleted: Vec<PathBuf>,
}

/// A file in preview mode.
#[derive(Debug)]
pub struct PreviewFile {
    pub path: String,
    pub content: String,
}

impl Report for GenerateReport {
    fn render(&self, out: &mut dyn Output) {
        match &self.result {
            GenerationResult::Written(written) => self.render_written(out, written),
            GenerationResult::Preview(files) => self.render_preview(out, files),
        }
    }
}

impl GenerateReport {
    fn render_written(&self, out: &mut dyn Output, written: &WrittenResult) {
        out.key_value("Model", &self.model_path.display().to_string());
        out.key_value("Declarations", &self.unit_count.to_string());
        out.key_value("Generated", &written.output_dir.display().to_string());

        if !written.written.is_empty() {
            out.newline();
            out.section("Written");
            for path in &written.written {
                out.added_item(path);
            }
        }

        if !written.deleted.is_empty() {
            out.newline();
            out.section("Deleted");
            for path in &written.deleted {
                let relative = path.strip_prefix(&written.output_dir).unwrap_or(path.as_path());
                out.removed_item(&relative.display().to_string());
            }
        }

        if !written.unchanged.is_empty() {
            out.newline();
            out.preformatted(&format!(
                "{} file{} unchanged",
                written.unchanged.len(),
                plural(written.unchanged.len())
            ));
        }
    }

    fn render_preview(&self, out: &mut dyn Output, files: &[PreviewFile]) {
        for file in files {
            out.divider(&file.path);
            out.preformatted(&file.content);
        }

        out.divider("Summary");
        out.preformatted(&format!(
            "{} declaration{} in {} file{} would be generated",
            self.unit_count,
            plural(self.unit_count),
            files.len(),
            plural(files.len())
        ));
    }
}

pub(super) fn plural(count: usize) -> &'static str {
    if count == 1 { "" } else { "s" }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::reports::output::BufferOutput;

    #[test]
    fn test_render_written() {
        let report = GenerateReport {
            model_path: PathBuf::from("model.json"),
            unit_count: 2,
            result: GenerationResult::Written(WrittenResult {
                output_dir: PathBuf::from("out"),
                written: vec!["shop/order.ts".to_string()],
                unchanged: vec!["shop/line.ts".to_string()],
                deleted: vec![PathBuf::from("out").join("shop").join("old.ts")],
            }),
        };
        let mut out = BufferOutput::default();
        report.render(&mut out);

        let removed = format!("  - {}", PathBuf::from("shop").join("old.ts").display());
        assert_eq!(
            out.lines,
            [
                "Model: model.json",
                "Declarations: 2",
                "Generated: out",
                "",
                "Written:",
                "  + shop/order.ts",
                "",
                "Deleted:",
                removed.as_str(),
                "",
                "1 file unchanged",
            ]
        );
    }

    #[test]
    fn test_render_preview() {
        let report = GenerateReport {
            model_path: PathBuf::from("model.json"),
            unit_count: 1,
            result: GenerationResult::Preview(vec![PreviewFile {
                path: "types.ts".to_string(),
                content: "export type A = {};\n".to_string(),
            }]),
        };
        let mut out = BufferOutput::default();
        report.render(&mut out);
        assert_eq!(out.lines.first().map(String::as_str), Some("── types.ts ──"));
        assert_eq!(
            out.lines.last().map(String::as_str),
            Some("1 declaration in 1 file would be generated")
        );
    }
}

//! Clean command report data structures.

use super::output::{Output, Report};

/// Report data from cleaning generated files.
#[derive(Debug)]
pub struct CleanReport {
    /// Whether this was a dry run.
    pub dry_run: bool,
    /// Generated files, relative to the output directory.
    pub files: Vec<String>,
}

impl Report for CleanReport {
    fn render(&self, out: &mut dyn Output) {
        if self.files.is_empty() {
            out.preformatted("No generated files found.");
            return;
        }

        if self.dry_run {
            out.section("Would delete");
        } else {
            out.section("Deleted");
        }
        for path in &self.files {
            out.removed_item(path);
        }
    }
}

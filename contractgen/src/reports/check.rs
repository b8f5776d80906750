//! Check command report data structures.

use std::path::PathBuf;

use super::{
    generate::plural,
    output::{Output, Report},
};

/// Report data from manifest and model validation.
#[derive(Debug)]
pub struct CheckReport {
    /// Path to the config file.
    pub config_path: PathBuf,
    /// Definitions in the model document.
    pub definitions: usize,
    /// Qualified names of the declarations that would be generated.
    pub units: Vec<String>,
    /// Number of files that would be written.
    pub files: usize,
}

impl Report for CheckReport {
    fn render(&self, out: &mut dyn Output) {
        out.preformatted(&format!("✓ {} is valid", self.config_path.display()));
        out.newline();
        out.preformatted(&format!(
            "{} definition{}, {} declaration{} in {} file{}",
            self.definitions,
            plural(self.definitions),
            self.units.len(),
            plural(self.units.len()),
            self.files,
            plural(self.files)
        ));

        if !self.units.is_empty() {
            out.newline();
            out.section("Declarations");
            for unit in &self.units {
                out.list_item(unit);
            }
        }
    }
}

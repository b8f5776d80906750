use std::path::{Path, PathBuf};

use eyre::{Result, WrapErr};

/// Marker line written at the top of every generated file.
///
/// Only files containing this line are ever deleted by cleanup.
pub const GENERATED_MARKER: &str = "// contractgen: generated content, do not edit";

/// Check whether file content was produced by contractgen.
pub fn is_generated(content: &str) -> bool {
    content.lines().any(|line| line.trim_end() == GENERATED_MARKER)
}

/// Trait for types that represent a generated file
pub trait GeneratedFile {
    /// Get the file path relative to the base directory
    fn path(&self, base: &Path) -> PathBuf;

    /// Render the file content
    fn render(&self) -> String;

    /// Write the file to disk, leaving identical content untouched
    fn write(&self, base: &Path) -> Result<WriteResult> {
        let path = self.path(base);
        let content = self.render();

        if std::fs::read_to_string(&path).is_ok_and(|existing| existing == content) {
            return Ok(WriteResult::Unchanged);
        }

        write_file(&path, &content)?;
        Ok(WriteResult::Written)
    }
}

/// Write `content` to `path`, creating parent directories as needed.
pub fn write_file(path: &Path, content: &str) -> Result<()> {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)
            .wrap_err_with(|| format!("failed to create directory '{}'", parent.display()))?;
    }
    std::fs::write(path, content)
        .wrap_err_with(|| format!("failed to write '{}'", path.display()))?;
    Ok(())
}

/// Result of a write operation
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WriteResult {
    /// File was written
    Written,
    /// File already had the same content
    Unchanged,
}

#[cfg(test)]
mod tests {
    use std::fs;

    use tempfile::TempDir;

    use super::*;

    struct Fixture {
        name: &'static str,
        body: &'static str,
    }

    impl GeneratedFile for Fixture {
        fn path(&self, base: &Path) -> PathBuf {
            base.join(self.name)
        }

        fn render(&self) -> String {
            format!("{}\n{}", GENERATED_MARKER, self.body)
        }
    }

    #[test]
    fn test_write_file_creates_parent_dirs() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("a").join("b").join("c").join("test.ts");

        write_file(&path, "nested").unwrap();

        assert!(path.exists());
        assert_eq!(fs::read_to_string(&path).unwrap(), "nested");
    }

    #[test]
    fn test_write_file_overwrites_existing() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("test.ts");

        write_file(&path, "first").unwrap();
        write_file(&path, "second").unwrap();

        assert_eq!(fs::read_to_string(&path).unwrap(), "second");
    }

    #[test]
    fn test_generated_file_write_then_unchanged() {
        let temp = TempDir::new().unwrap();
        let file = Fixture {
            name: "models/user.ts",
            body: "export type User = {};\n",
        };

        assert_eq!(file.write(temp.path()).unwrap(), WriteResult::Written);
        assert_eq!(file.write(temp.path()).unwrap(), WriteResult::Unchanged);

        let written = fs::read_to_string(temp.path().join("models/user.ts")).unwrap();
        assert!(is_generated(&written));
    }

    #[test]
    fn test_is_generated() {
        assert!(is_generated(&format!(
            "/* eslint-disable */\n{}\nexport type A = {{}};\n",
            GENERATED_MARKER
        )));
        assert!(!is_generated("export type Handwritten = {};\n"));
        assert!(!is_generated("// contractgen: something else"));
    }
}

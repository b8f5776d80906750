//! File registration and stale-file cleanup.
//!
//! The registry collects every planned file of a run, then writes them in
//! one pass. Files under the output directory that carry the generated
//! marker but are no longer planned are deleted first. Files without the
//! marker are never touched.
//!
//! # Example
//!
//! ```ignore
//! let mut registry = FileRegistry::new();
//! registry.register(FileEntry::new("shop/order.ts", rendered));
//! let stats = registry.write_all(&output_dir)?;
//! ```

use std::{
    collections::HashSet,
    path::{Path, PathBuf},
};

use contractgen_core::{GeneratedFile, WriteResult, is_generated};
use eyre::{Result, WrapErr};
use indexmap::IndexMap;
use tracing::{debug, info};
use walkdir::WalkDir;

/// Extension of files considered by cleanup.
const GENERATED_EXTENSION: &str = "ts";

/// A file to be generated.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileEntry {
    /// Relative path from the output directory, `/`-separated.
    pub path: String,
    /// File content.
    pub content: String,
}

impl FileEntry {
    pub fn new(path: impl Into<String>, content: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            content: content.into(),
        }
    }

    /// Get the full path for this entry.
    pub fn full_path(&self, base: &Path) -> PathBuf {
        self.path.split('/').fold(base.to_path_buf(), |acc, segment| acc.join(segment))
    }
}

impl GeneratedFile for FileEntry {
    fn path(&self, base: &Path) -> PathBuf {
        self.full_path(base)
    }

    fn render(&self) -> String {
        self.content.clone()
    }
}

/// Registry for collecting and writing generated files.
///
/// Entries keep registration order. Registering a path twice replaces the
/// earlier content.
#[derive(Debug, Default)]
pub struct FileRegistry {
    entries: IndexMap<String, FileEntry>,
}

impl FileRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a file entry.
    pub fn register(&mut self, entry: FileEntry) {
        if self.entries.contains_key(&entry.path) {
            debug!(path = %entry.path, "Replacing registered file.");
        }
        self.entries.insert(entry.path.clone(), entry);
    }

    pub fn register_all(&mut self, entries: impl IntoIterator<Item = FileEntry>) {
        for entry in entries {
            self.register(entry);
        }
    }

    /// Get all registered entries in registration order.
    pub fn entries(&self) -> impl Iterator<Item = &FileEntry> {
        self.entries.values()
    }

    pub fn get(&self, path: &str) -> Option<&FileEntry> {
        self.entries.get(path)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Write all files to the output directory.
    ///
    /// Stale generated files are deleted before anything is written. Files
    /// whose content is already up to date are left alone.
    pub fn write_all(&self, base: &Path) -> Result<WriteStats> {
        let mut stats = WriteStats::default();
        let planned: HashSet<PathBuf> = self.entries().map(|e| e.full_path(base)).collect();

        for stale in find_generated(base)? {
            if planned.contains(&stale) {
                continue;
            }
            remove_generated(base, &stale)?;
            stats.deleted.push(stale);
        }

        for entry in self.entries() {
            match entry.write(base)? {
                WriteResult::Written => {
                    debug!(path = %entry.path, "Wrote generated file.");
                    stats.written.push(entry.path.clone());
                }
                WriteResult::Unchanged => {
                    stats.unchanged.push(entry.path.clone());
                }
            }
        }

        info!(
            written = stats.written.len(),
            unchanged = stats.unchanged.len(),
            deleted = stats.deleted.len(),
            output = %base.display(),
            "Generated files written."
        );
        Ok(stats)
    }

    /// Delete every generated file under `base`, or only list them when
    /// `dry_run` is set.
    pub fn clean(base: &Path, dry_run: bool) -> Result<CleanStats> {
        let files = find_generated(base)?;
        if !dry_run {
            for file in &files {
                remove_generated(base, file)?;
            }
            info!(deleted = files.len(), output = %base.display(), "Generated files removed.");
        }
        Ok(CleanStats {
            files,
            dry_run,
        })
    }
}

/// Statistics from a write operation.
#[derive(Debug, Default)]
pub struct WriteStats {
    /// Relative paths of files written.
    pub written: Vec<String>,
    /// Relative paths of files that already had the planned content.
    pub unchanged: Vec<String>,
    /// Stale generated files that were deleted.
    pub deleted: Vec<PathBuf>,
}

impl WriteStats {
    /// Total number of planned files.
    pub fn total(&self) -> usize {
        self.written.len() + self.unchanged.len()
    }
}

/// Result of [`FileRegistry::clean`].
#[derive(Debug, Default)]
pub struct CleanStats {
    /// Generated files found (and deleted unless `dry_run`).
    pub files: Vec<PathBuf>,
    pub dry_run: bool,
}

/// Find every generated file below `base`, sorted by path.
///
/// A missing directory has no generated files.
pub fn find_generated(base: &Path) -> Result<Vec<PathBuf>> {
    if !base.exists() {
        return Ok(Vec::new());
    }

    let mut found = Vec::new();
    for entry in WalkDir::new(base).follow_links(false).sort_by_file_name() {
        let entry =
            entry.wrap_err_with(|| format!("failed to scan '{}'", base.display()))?;
        if !entry.file_type().is_file() {
            continue;
        }
        let path = entry.path();
        if path.extension().and_then(|ext| ext.to_str()) != Some(GENERATED_EXTENSION) {
            continue;
        }
        // Non UTF-8 content was not written by us.
        let Ok(content) = std::fs::read_to_string(path) else {
            continue;
        };
        if is_generated(&content) {
            found.push(path.to_path_buf());
        }
    }
    Ok(found)
}

/// Delete a generated file and any directories it leaves empty, up to `base`.
fn remove_generated(base: &Path, path: &Path) -> Result<()> {
    std::fs::remove_file(path)
        .wrap_err_with(|| format!("failed to delete '{}'", path.display()))?;
    debug!(path = %path.display(), "Deleted generated file.");

    let mut dir = path.parent();
    while let Some(current) = dir {
        if current == base || !current.starts_with(base) {
            break;
        }
        let is_empty = std::fs::read_dir(current)
            .wrap_err_with(|| format!("failed to read '{}'", current.display()))?
            .next()
            .is_none();
        if !is_empty {
            break;
        }
        std::fs::remove_dir(current)
            .wrap_err_with(|| format!("failed to remove '{}'", current.display()))?;
        dir = current.parent();
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use std::fs;

    use contractgen_core::GENERATED_MARKER;
    use tempfile::TempDir;

    use super::*;

    fn generated(body: &str) -> String {
        format!("/* eslint-disable */\n{}\n{}", GENERATED_MARKER, body)
    }

    #[test]
    fn test_registry_keeps_order_and_replaces() {
        let mut registry = FileRegistry::new();
        registry.register(FileEntry::new("b.ts", "1"));
        registry.register(FileEntry::new("a.ts", "2"));
        registry.register(FileEntry::new("b.ts", "3"));

        let paths: Vec<_> = registry.entries().map(|e| e.path.as_str()).collect();
        assert_eq!(paths, ["b.ts", "a.ts"]);
        assert_eq!(registry.get("b.ts").unwrap().content, "3");
    }

    #[test]
    fn test_write_all_creates_nested_files() {
        let temp = TempDir::new().unwrap();
        let mut registry = FileRegistry::new();
        registry.register(FileEntry::new("shop/orders/order.ts", generated("A")));

        let stats = registry.write_all(temp.path()).unwrap();

        assert_eq!(stats.written, ["shop/orders/order.ts"]);
        let path = temp.path().join("shop").join("orders").join("order.ts");
        assert_eq!(fs::read_to_string(path).unwrap(), generated("A"));
    }

    #[test]
    fn test_write_all_reports_unchanged() {
        let temp = TempDir::new().unwrap();
        let mut registry = FileRegistry::new();
        registry.register(FileEntry::new("a.ts", generated("A")));

        registry.write_all(temp.path()).unwrap();
        let stats = registry.write_all(temp.path()).unwrap();

        assert!(stats.written.is_empty());
        assert_eq!(stats.unchanged, ["a.ts"]);
        assert!(stats.deleted.is_empty());
        assert_eq!(stats.total(), 1);
    }

    #[test]
    fn test_write_all_deletes_stale_generated_files_only() {
        let temp = TempDir::new().unwrap();
        let stale_dir = temp.path().join("old");
        fs::create_dir_all(&stale_dir).unwrap();
        fs::write(stale_dir.join("gone.ts"), generated("old")).unwrap();
        fs::write(temp.path().join("handwritten.ts"), "export type Mine = {};\n").unwrap();
        fs::write(temp.path().join("notes.md"), GENERATED_MARKER).unwrap();

        let mut registry = FileRegistry::new();
        registry.register(FileEntry::new("a.ts", generated("A")));
        let stats = registry.write_all(temp.path()).unwrap();

        assert_eq!(stats.deleted, [stale_dir.join("gone.ts")]);
        assert!(!stale_dir.exists());
        assert!(temp.path().join("handwritten.ts").exists());
        assert!(temp.path().join("notes.md").exists());
        assert!(temp.path().join("a.ts").exists());
    }

    #[test]
    fn test_clean_dry_run_and_delete() {
        let temp = TempDir::new().unwrap();
        fs::write(temp.path().join("a.ts"), generated("A")).unwrap();
        fs::write(temp.path().join("b.ts"), "export type B = {};\n").unwrap();

        let preview = FileRegistry::clean(temp.path(), true).unwrap();
        assert!(preview.dry_run);
        assert_eq!(preview.files, [temp.path().join("a.ts")]);
        assert!(temp.path().join("a.ts").exists());

        let stats = FileRegistry::clean(temp.path(), false).unwrap();
        assert_eq!(stats.files.len(), 1);
        assert!(!temp.path().join("a.ts").exists());
        assert!(temp.path().join("b.ts").exists());
        assert!(temp.path().exists());
    }

    #[test]
    fn test_find_generated_missing_dir() {
        let temp = TempDir::new().unwrap();
        let found = find_generated(&temp.path().join("nope")).unwrap();
        assert!(found.is_empty());
    }
}

//! Code generation outputs and file management.
//!
//! - [`ImportCollector`] - Import tracking and deduplication
//! - [`FileRegistry`] - Declarative file registration, writing and stale cleanup

mod imports;
mod registry;

pub use imports::ImportCollector;
pub use registry::{CleanStats, FileEntry, FileRegistry, WriteStats, find_generated};

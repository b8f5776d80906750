//! Core utilities and types for the contractgen generator.
//!
//! This crate provides the string and file helpers shared by the
//! rest of the contractgen workspace.

mod file;
mod utils;

// File operations
pub use file::{GENERATED_MARKER, GeneratedFile, WriteResult, is_generated, write_file};
// String utilities
pub use utils::{is_identifier, to_camel_case, to_kebab_case, to_pascal_case};

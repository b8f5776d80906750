//! Shared code generation utilities for the contractgen generator.
//!
//! This crate provides language-agnostic building blocks used by the
//! TypeScript backend (`contractgen-codegen-typescript`).
//!
//! # Module Organization
//!
//! - [`builder`] - Code generation building blocks (CodeBuilder, CodeFragment, etc.)
//! - [`generation`] - Output management (ImportCollector, FileRegistry, etc.)
//! - [`language`] - Language-specific abstractions (NamingConvention)

pub mod builder;
pub mod generation;
pub mod language;

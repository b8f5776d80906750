//! Errors raised while converting a type model into declarations.

use contractgen_model::ModelError;
use miette::Diagnostic;
use thiserror::Error;

/// Result type for generation.
pub type Result<T> = std::result::Result<T, GenerateError>;

/// A fatal generation error. Any of these aborts the whole run.
#[derive(Debug, Error, Diagnostic)]
pub enum GenerateError {
    #[error("cannot express '{identity}' in TypeScript: {reason}")]
    #[diagnostic(code(contractgen::generate::unsupported_type))]
    UnsupportedTypeKind { identity: String, reason: String },

    #[error("'{first}' and '{second}' both resolve to the declaration name '{name}'")]
    #[diagnostic(
        code(contractgen::generate::ambiguous_name),
        help("rename one of the types or move it to a different namespace")
    )]
    AmbiguousUnitName {
        name: String,
        first: String,
        second: String,
    },

    #[error("the name of '{identity}' depends on itself")]
    #[diagnostic(code(contractgen::generate::cyclic_name))]
    CyclicNameResolution { identity: String },

    #[error("declaration '{name}' was completed twice")]
    #[diagnostic(code(contractgen::generate::unit_completed_twice))]
    UnitAlreadyCompleted { name: String },

    #[error("declaration '{name}' was reserved but never completed")]
    #[diagnostic(code(contractgen::generate::unit_incomplete))]
    UnitNotCompleted { name: String },

    #[error(transparent)]
    #[diagnostic(code(contractgen::generate::model))]
    Model(#[from] ModelError),
}

impl GenerateError {
    pub(crate) fn unsupported(identity: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::UnsupportedTypeKind {
            identity: identity.into(),
            reason: reason.into(),
        }
    }
}

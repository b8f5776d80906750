use std::path::PathBuf;

use thiserror::Error;

use crate::TypeId;

/// Result type for type model operations.
pub type Result<T> = std::result::Result<T, ModelError>;

/// Errors raised while building, loading or reading a [`TypeModel`](crate::TypeModel).
#[derive(Debug, Error)]
pub enum ModelError {
    #[error("type {0} was reserved but never defined")]
    Unresolved(TypeId),

    #[error("type {0} does not exist in this model")]
    OutOfRange(TypeId),

    #[error("type {0} is already defined")]
    AlreadyDefined(TypeId),

    #[error("unknown type '{name}' referenced from '{referrer}'")]
    UnknownType { name: String, referrer: String },

    #[error("type '{0}' is defined more than once")]
    DuplicateDefinition(String),

    #[error("'{owner}' declares the member '{member}' more than once")]
    DuplicateMember { owner: String, member: String },

    #[error("generic instantiation of {id} refers to a {kind}, not a generic class")]
    NotGeneric { id: TypeId, kind: &'static str },

    #[error("'{name}' takes {expected} type argument(s) but {found} were supplied")]
    ArityMismatch {
        name: String,
        expected: usize,
        found: usize,
    },

    #[error("failed to parse model document")]
    Json(#[from] serde_json::Error),

    #[error("failed to read '{path}'")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

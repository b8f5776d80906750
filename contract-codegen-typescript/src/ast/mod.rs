//! TypeScript AST: type expressions, declarations and imports.
//!
//! Nodes are plain data. Text is produced by [`Renderer`](crate::Renderer).

mod declaration;
mod imports;
mod types;

pub use declaration::{Declaration, EnumMember};
pub use imports::Import;
pub use types::{Field, Keyword, Literal, TsType};

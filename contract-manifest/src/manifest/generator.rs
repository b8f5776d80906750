//! The `[generator]` section.

use std::{fmt, path::PathBuf};

use serde::{Deserialize, Deserializer, de::Error as _};

/// Settings for one generation run.
#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct GeneratorSection {
    /// JSON model document
    pub model: PathBuf,

    /// Output directory
    #[serde(default = "default_output")]
    pub output: PathBuf,

    /// Qualified names of the root types. Empty means the document's own
    /// roots, or every definition when it has none.
    #[serde(default)]
    pub roots: Vec<String>,

    #[serde(default)]
    pub linter: Linter,

    #[serde(default)]
    pub enums: EnumStyle,

    #[serde(default)]
    pub generics: GenericStyle,

    #[serde(default)]
    pub field_naming: FieldCase,

    #[serde(default)]
    pub layout: Layout,

    /// File stem for the single-file layout
    pub file: Option<String>,

    #[serde(default)]
    pub indent: IndentSetting,
}

fn default_output() -> PathBuf {
    PathBuf::from("generated")
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Linter {
    #[default]
    Eslint,
    Tslint,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EnumStyle {
    #[default]
    Union,
    Declaration,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum GenericStyle {
    #[default]
    Monomorphize,
    Preserve,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FieldCase {
    #[default]
    Camel,
    Preserve,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Layout {
    #[default]
    PerUnit,
    PerNamespace,
    SingleFile,
}

impl Layout {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::PerUnit => "per-unit",
            Self::PerNamespace => "per-namespace",
            Self::SingleFile => "single-file",
        }
    }
}

impl fmt::Display for Layout {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Indentation of generated code: a width in spaces or `"tab"`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IndentSetting {
    Spaces(u8),
    Tab,
}

impl Default for IndentSetting {
    fn default() -> Self {
        Self::Spaces(4)
    }
}

impl<'de> Deserialize<'de> for IndentSetting {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        #[derive(Deserialize)]
        #[serde(untagged)]
        enum Raw {
            Width(i64),
            Name(String),
        }

        match Raw::deserialize(deserializer)? {
            Raw::Width(width) => u8::try_from(width)
                .ok()
                .filter(|width| (1..=8).contains(width))
                .map(Self::Spaces)
                .ok_or_else(|| {
                    D::Error::custom(format!(
                        "indent must be between 1 and 8 spaces, got {}",
                        width
                    ))
                }),
            Raw::Name(name) if name == "tab" => Ok(Self::Tab),
            Raw::Name(name) => Err(D::Error::custom(format!(
                "unknown indent '{}', expected a width or \"tab\"",
                name
            ))),
        }
    }
}

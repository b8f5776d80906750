//! Configuration types for TypeScript generation.

use contractgen_codegen::builder::Indent;

/// Which linter the disable directive at the top of each file targets.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum LinterDisableMode {
    /// `/* eslint-disable */`
    #[default]
    EsLint,
    /// `// tslint:disable`
    TsLint,
}

impl LinterDisableMode {
    /// The directive line written first in every generated file.
    pub fn directive(&self) -> &'static str {
        match self {
            Self::EsLint => "/* eslint-disable */",
            Self::TsLint => "// tslint:disable",
        }
    }
}

/// How enums are declared.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum EnumMode {
    /// `export type Status = "Open" | "Closed";`
    #[default]
    Union,
    /// `export enum Status { Open = "Open", Closed = "Closed" }`
    Declaration,
}

/// How generic instantiations are emitted.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum GenericsMode {
    /// Every closed instantiation gets its own declaration (`PageOfUser`).
    #[default]
    Monomorphize,
    /// The generic definition is declared once (`Page<T>`) and instantiations
    /// become references (`Page<User>`).
    Preserve,
}

/// How member names become field names.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum FieldNaming {
    /// `OrderId` becomes `orderId`.
    #[default]
    CamelCase,
    /// Names are kept as written in the model.
    Preserve,
}

/// How declarations are grouped into files.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub enum OutputLayout {
    /// One file per declaration, under its namespace directory.
    #[default]
    PerUnit,
    /// One file per namespace.
    PerNamespace,
    /// Everything in a single file with the given stem.
    SingleFile(String),
}

/// Configuration for TypeScript generation.
#[derive(Clone, Debug, Default)]
pub struct GeneratorConfig {
    pub(crate) linter: LinterDisableMode,
    pub(crate) enums: EnumMode,
    pub(crate) generics: GenericsMode,
    pub(crate) field_naming: FieldNaming,
    pub(crate) layout: OutputLayout,
    pub(crate) indent: Indent,
}

impl GeneratorConfig {
    /// Create a new GeneratorConfig with default values.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn linter(mut self, value: LinterDisableMode) -> Self {
        self.linter = value;
        self
    }

    pub fn enums(mut self, value: EnumMode) -> Self {
        self.enums = value;
        self
    }

    pub fn generics(mut self, value: GenericsMode) -> Self {
        self.generics = value;
        self
    }

    pub fn field_naming(mut self, value: FieldNaming) -> Self {
        self.field_naming = value;
        self
    }

    pub fn layout(mut self, value: OutputLayout) -> Self {
        self.layout = value;
        self
    }

    pub fn indent(mut self, value: Indent) -> Self {
        self.indent = value;
        self
    }

    pub fn linter_mode(&self) -> LinterDisableMode {
        self.linter
    }

    pub fn output_layout(&self) -> &OutputLayout {
        &self.layout
    }
}

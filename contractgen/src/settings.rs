//! Mapping from `contractgen.toml` settings to the generator configuration.

use contractgen_codegen::builder::Indent;
use contractgen_codegen_typescript::{
    EnumMode, FieldNaming, GeneratorConfig, GenericsMode, LinterDisableMode, OutputLayout,
};
use contractgen_manifest::{
    EnumStyle, FieldCase, GenericStyle, GeneratorSection, IndentSetting, Layout, Linter,
};

/// File stem used when a single-file layout reaches us without one.
const DEFAULT_FILE_STEM: &str = "types";

pub(crate) fn generator_config(section: &GeneratorSection) -> GeneratorConfig {
    GeneratorConfig::new()
        .linter(match section.linter {
            Linter::Eslint => LinterDisableMode::EsLint,
            Linter::Tslint => LinterDisableMode::TsLint,
        })
        .enums(match section.enums {
            EnumStyle::Union => EnumMode::Union,
            EnumStyle::Declaration => EnumMode::Declaration,
        })
        .generics(match section.generics {
            GenericStyle::Monomorphize => GenericsMode::Monomorphize,
            GenericStyle::Preserve => GenericsMode::Preserve,
        })
        .field_naming(match section.field_naming {
            FieldCase::Camel => FieldNaming::CamelCase,
            FieldCase::Preserve => FieldNaming::Preserve,
        })
        .layout(match section.layout {
            Layout::PerUnit => OutputLayout::PerUnit,
            Layout::PerNamespace => OutputLayout::PerNamespace,
            Layout::SingleFile => OutputLayout::SingleFile(
                section
                    .file
                    .clone()
                    .unwrap_or_else(|| DEFAULT_FILE_STEM.to_string()),
            ),
        })
        .indent(match section.indent {
            IndentSetting::Spaces(width) => Indent::Spaces(width),
            IndentSetting::Tab => Indent::Tab,
        })
}

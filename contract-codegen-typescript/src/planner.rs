//! Output planner: groups units into files and wires up imports.

use std::collections::HashMap;

use contractgen_codegen::generation::{FileEntry, ImportCollector};
use contractgen_core::GENERATED_MARKER;
use indexmap::IndexMap;
use tracing::debug;

use crate::{
    ast::Import,
    code_file::CodeFile,
    config::{GeneratorConfig, OutputLayout},
    naming::TS_NAMING,
    render::Renderer,
    unit::{Unit, UnitId},
};

/// Stem used by the per-namespace layout for units without a namespace.
const ROOT_MODULE: &str = "index";

/// A file the run will produce.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlannedFile {
    /// Relative, `/`-separated path including the `.ts` extension.
    pub path: String,
    /// Units declared in this file, in emission order.
    pub units: Vec<UnitId>,
    pub content: String,
}

impl PlannedFile {
    pub fn entry(&self) -> FileEntry {
        FileEntry::new(self.path.clone(), self.content.clone())
    }
}

impl From<PlannedFile> for FileEntry {
    fn from(file: PlannedFile) -> Self {
        FileEntry::new(file.path, file.content)
    }
}

/// Module path (no extension) for a unit under `layout`.
///
/// Namespace segments become kebab-case directories.
///
/// ```
/// use contractgen_codegen_typescript::{OutputLayout, module_path};
///
/// assert_eq!(module_path(&OutputLayout::PerUnit, "OrderLine", Some("Shop.Sales")), "shop/sales/order-line");
/// assert_eq!(module_path(&OutputLayout::PerNamespace, "OrderLine", Some("Shop.Sales")), "shop/sales");
/// assert_eq!(module_path(&OutputLayout::PerNamespace, "Money", None), "index");
/// ```
pub fn module_path(layout: &OutputLayout, name: &str, namespace: Option<&str>) -> String {
    let mut segments: Vec<String> = namespace
        .into_iter()
        .flat_map(|ns| ns.split('.'))
        .filter(|segment| !segment.is_empty())
        .map(|segment| TS_NAMING.file_name(segment))
        .collect();

    match layout {
        OutputLayout::PerUnit => {
            segments.push(TS_NAMING.file_name(name));
            segments.join("/")
        }
        OutputLayout::PerNamespace if segments.is_empty() => ROOT_MODULE.to_string(),
        OutputLayout::PerNamespace => segments.join("/"),
        OutputLayout::SingleFile(stem) => stem.clone(),
    }
}

/// Relative import specifier from one module path to another.
///
/// ```
/// use contractgen_codegen_typescript::relative_module;
///
/// assert_eq!(relative_module("shop/order", "shop/customer"), "./customer");
/// assert_eq!(relative_module("shop/order", "common/money"), "../common/money");
/// assert_eq!(relative_module("index", "shop/order"), "./shop/order");
/// ```
pub fn relative_module(from: &str, to: &str) -> String {
    let from_dirs: Vec<&str> = from.split('/').collect();
    let from_dirs = &from_dirs[..from_dirs.len() - 1];
    let target: Vec<&str> = to.split('/').collect();

    let common = from_dirs
        .iter()
        .zip(&target[..target.len() - 1])
        .take_while(|(a, b)| a == b)
        .count();

    let ups = from_dirs.len() - common;
    let rest = target[common..].join("/");
    if ups == 0 {
        format!("./{}", rest)
    } else {
        format!("{}{}", "../".repeat(ups), rest)
    }
}

/// Group units into files.
///
/// Files appear in the order their first unit was discovered, and units
/// keep discovery order within a file. Each file imports the units it
/// references from other files, type-only, sorted by module.
pub fn plan(units: &[Unit], config: &GeneratorConfig) -> Vec<PlannedFile> {
    let module_of: HashMap<UnitId, String> = units
        .iter()
        .map(|unit| {
            let path = module_path(&config.layout, &unit.name, unit.namespace.as_deref());
            (unit.id, path)
        })
        .collect();
    let by_id: HashMap<UnitId, &Unit> = units.iter().map(|unit| (unit.id, unit)).collect();

    let mut groups: IndexMap<&str, Vec<&Unit>> = IndexMap::new();
    for unit in units {
        if let Some(module) = module_of.get(&unit.id) {
            groups.entry(module.as_str()).or_default().push(unit);
        }
    }

    let renderer = Renderer::new(config.indent);
    groups
        .into_iter()
        .map(|(module, members)| {
            let mut imports = ImportCollector::new();
            for unit in &members {
                for reference in &unit.references {
                    let (Some(target), Some(target_module)) =
                        (by_id.get(reference), module_of.get(reference))
                    else {
                        continue;
                    };
                    if target_module != module {
                        imports.add(&relative_module(module, target_module), &target.name);
                    }
                }
            }
            imports.sort();
            debug!(
                module = %module,
                units = members.len(),
                imports = imports.len(),
                "Planned file."
            );

            let content = CodeFile::new()
                .header(config.linter.directive())
                .header(GENERATED_MARKER)
                .imports(imports.iter().map(|(from, symbols)| {
                    symbols
                        .iter()
                        .fold(Import::new(from).type_only(), |import, symbol| {
                            import.named(symbol)
                        })
                }))
                .add_all(members.iter().map(|unit| renderer.node(&unit.declaration)))
                .render_with_indent(config.indent);

            PlannedFile {
                path: format!("{}.ts", module),
                units: members.iter().map(|unit| unit.id).collect(),
                content,
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use indexmap::IndexSet;

    use super::*;
    use crate::ast::{Declaration, Keyword, TsType};

    fn unit(id: usize, name: &str, namespace: Option<&str>, references: &[usize]) -> Unit {
        Unit {
            id: UnitId::new(id),
            key: name.to_string(),
            name: name.to_string(),
            namespace: namespace.map(str::to_string),
            type_params: Vec::new(),
            declaration: Declaration::Alias {
                name: name.to_string(),
                type_params: Vec::new(),
                ty: TsType::keyword(Keyword::Number),
            },
            references: references.iter().map(|&r| UnitId::new(r)).collect::<IndexSet<_>>(),
        }
    }

    #[test]
    fn test_module_paths() {
        assert_eq!(module_path(&OutputLayout::PerUnit, "Money", None), "money");
        assert_eq!(
            module_path(&OutputLayout::SingleFile("contracts".into()), "Money", Some("A.B")),
            "contracts"
        );
    }

    #[test]
    fn test_relative_module_nested() {
        assert_eq!(relative_module("a/b/c", "a/d"), "../d");
        assert_eq!(relative_module("a/b/c", "a/b/e/f"), "./e/f");
        assert_eq!(relative_module("x", "y"), "./y");
    }

    #[test]
    fn test_plan_per_unit_imports() {
        let units = vec![
            unit(0, "Order", Some("Shop"), &[1, 2]),
            unit(1, "Customer", Some("Shop"), &[]),
            unit(2, "Money", Some("Common"), &[]),
        ];
        let files = plan(&units, &GeneratorConfig::new());

        let paths: Vec<_> = files.iter().map(|f| f.path.as_str()).collect();
        assert_eq!(paths, ["shop/order.ts", "shop/customer.ts", "common/money.ts"]);
        assert_eq!(
            files[0].content,
            "/* eslint-disable */\n\
             // contractgen: generated content, do not edit\n\
             import type { Money } from \"../common/money\";\n\
             import type { Customer } from \"./customer\";\n\
             \n\
             export type Order = number;\n"
        );
    }

    #[test]
    fn test_plan_single_file_has_no_imports() {
        let units = vec![unit(0, "A", None, &[1]), unit(1, "B", Some("X"), &[0])];
        let config = GeneratorConfig::new().layout(OutputLayout::SingleFile("api".into()));
        let files = plan(&units, &config);

        assert_eq!(files.len(), 1);
        assert_eq!(files[0].path, "api.ts");
        assert_eq!(files[0].units, [UnitId::new(0), UnitId::new(1)]);
        assert_eq!(
            files[0].content,
            "/* eslint-disable */\n\
             // contractgen: generated content, do not edit\n\
             export type A = number;\n\
             \n\
             export type B = number;\n"
        );
    }
}

//! Import collection utilities.

use std::collections::BTreeSet;

use indexmap::IndexMap;

/// Tracks imports and deduplicates them.
///
/// Modules keep insertion order and symbols are sorted, so output is
/// deterministic.
///
/// # Example
///
/// ```
/// use contractgen_codegen::generation::ImportCollector;
///
/// let mut imports = ImportCollector::new();
/// imports.add("./shop/order", "Order");
/// imports.add("./shop/order", "OrderLine");
/// imports.add("./shop/customer", "Customer");
///
/// let lines: Vec<String> = imports
///     .iter()
///     .map(|(module, symbols)| {
///         let symbols: Vec<&str> = symbols.iter().map(|s| s.as_str()).collect();
///         format!("import type {{ {} }} from \"{}\";", symbols.join(", "), module)
///     })
///     .collect();
///
/// assert_eq!(lines[0], "import type { Order, OrderLine } from \"./shop/order\";");
/// ```
#[derive(Debug, Clone, Default)]
pub struct ImportCollector {
    /// Module path -> set of symbols (sorted for deterministic output)
    imports: IndexMap<String, BTreeSet<String>>,
}

impl ImportCollector {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a symbol import from a module.
    pub fn add(&mut self, module: &str, symbol: &str) {
        self.imports
            .entry(module.to_string())
            .or_default()
            .insert(symbol.to_string());
    }

    /// Merge another collector into this one.
    pub fn merge(&mut self, other: &ImportCollector) {
        for (module, symbols) in &other.imports {
            let entry = self.imports.entry(module.clone()).or_default();
            entry.extend(symbols.iter().cloned());
        }
    }

    pub fn has_module(&self, module: &str) -> bool {
        self.imports.contains_key(module)
    }

    pub fn has_symbol(&self, module: &str, symbol: &str) -> bool {
        self.imports
            .get(module)
            .is_some_and(|symbols| symbols.contains(symbol))
    }

    /// Iterate over all imports in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &BTreeSet<String>)> {
        self.imports.iter().map(|(k, v)| (k.as_str(), v))
    }

    /// Sort modules by path.
    pub fn sort(&mut self) {
        self.imports.sort_keys();
    }

    pub fn is_empty(&self) -> bool {
        self.imports.is_empty()
    }

    /// Number of modules.
    pub fn len(&self) -> usize {
        self.imports.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_import_collector_basic() {
        let mut imports = ImportCollector::new();
        imports.add("./user", "User");
        imports.add("./user", "User");
        imports.add("./user", "Role");
        imports.add("./order", "Order");

        assert!(imports.has_module("./user"));
        assert!(imports.has_symbol("./user", "Role"));
        assert!(!imports.has_symbol("./user", "Order"));
        assert_eq!(imports.len(), 2);

        let symbols: Vec<_> = imports.iter().next().unwrap().1.iter().collect();
        assert_eq!(symbols, ["Role", "User"]);
    }

    #[test]
    fn test_import_collector_merge_and_sort() {
        let mut a = ImportCollector::new();
        a.add("./b", "B");

        let mut b = ImportCollector::new();
        b.add("./b", "B2");
        b.add("./a", "A");

        a.merge(&b);
        a.sort();

        let modules: Vec<_> = a.iter().map(|(m, _)| m).collect();
        assert_eq!(modules, ["./a", "./b"]);
        assert!(a.has_symbol("./b", "B2"));
    }
}

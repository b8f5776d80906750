//! Checks that serde cannot express on its own.

use std::collections::HashSet;

use miette::SourceSpan;

use super::{Layout, Manifest};
use crate::{Result, error::SourceContext};

/// Validate the manifest after parsing.
pub(crate) fn validate_manifest(manifest: &Manifest, ctx: &SourceContext) -> Result<()> {
    let generator = &manifest.generator;
    let span = |key: &str| find_key_span(ctx.src(), key);

    if generator.model.as_os_str().is_empty() {
        return Err(ctx.validation_error("model path must not be empty", span("model")));
    }
    if generator.output.as_os_str().is_empty() {
        return Err(ctx.validation_error("output directory must not be empty", span("output")));
    }

    let mut seen = HashSet::new();
    for root in &generator.roots {
        if root.trim().is_empty() {
            return Err(ctx.validation_error("root type names must not be empty", span("roots")));
        }
        if !seen.insert(root.as_str()) {
            return Err(ctx.validation_error(
                format!("root '{}' is listed more than once", root),
                find_value_span(ctx.src(), root).or_else(|| span("roots")),
            ));
        }
    }

    match (&generator.layout, &generator.file) {
        (Layout::SingleFile, None) => {
            return Err(ctx.missing_key_error(
                "file",
                "the single-file layout needs a file stem, e.g. file = \"types\"",
                span("layout"),
            ));
        }
        (_, Some(file)) if file.is_empty() || file.contains(['/', '\\']) => {
            return Err(ctx.validation_error(
                "file must be a plain file stem",
                span("file"),
            ));
        }
        _ => {}
    }

    Ok(())
}

/// Find the span of a `key = value` key in the TOML source.
pub(crate) fn find_key_span(src: &str, key: &str) -> Option<SourceSpan> {
    let mut offset = 0;
    for line in src.split_inclusive('\n') {
        let trimmed = line.trim_start();
        let indent = line.len() - trimmed.len();
        if let Some(rest) = trimmed.strip_prefix(key) {
            if rest.trim_start().starts_with('=') {
                return Some(SourceSpan::from((offset + indent, key.len())));
            }
        }
        offset += line.len();
    }
    None
}

/// Find the span of a quoted string value in the TOML source.
pub(crate) fn find_value_span(src: &str, value: &str) -> Option<SourceSpan> {
    // Second occurrence first: duplicates are reported where they repeat.
    let pattern = format!("\"{}\"", value);
    let first = src.find(&pattern)?;
    let start = src[first + pattern.len()..]
        .find(&pattern)
        .map_or(first, |pos| first + pattern.len() + pos);
    Some(SourceSpan::from((start + 1, value.len())))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_find_key_span() {
        let src = "[generator]\nmodel = \"m.json\"\n  layout=\"single-file\"\n";
        let span = find_key_span(src, "model").unwrap();
        assert_eq!(span.offset(), 12);
        assert_eq!(span.len(), 5);

        let span = find_key_span(src, "layout").unwrap();
        assert_eq!(&src[span.offset()..span.offset() + span.len()], "layout");
    }

    #[test]
    fn test_find_key_span_ignores_prefixes_and_values() {
        let src = "[generator]\nmodels_dir = 1\nfile = \"model\"\n";
        assert!(find_key_span(src, "model").is_none());
    }

    #[test]
    fn test_find_value_span_prefers_repeat() {
        let src = "roots = [\"Shop.Order\", \"Shop.Order\"]";
        let span = find_value_span(src, "Shop.Order").unwrap();
        assert_eq!(span.offset(), 24);
        assert_eq!(span.len(), "Shop.Order".len());
    }
}

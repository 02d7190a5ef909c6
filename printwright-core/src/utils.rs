//! Shared utility functions for import naming.

/// Path segment marking a vendored copy of a dependency tree.
const VENDOR_SEGMENT: &str = "/vendor/";

/// Strip everything up to and including the last vendor segment
/// (e.g., "app/vendor/github.com/x/y" -> "github.com/x/y").
pub fn unvendor(path: &str) -> &str {
    match path.rfind(VENDOR_SEGMENT) {
        Some(idx) => &path[idx + VENDOR_SEGMENT.len()..],
        None => path,
    }
}

/// Replace every character that is not a letter, digit or underscore with
/// an underscore (e.g., "example.com/pkg" -> "example_com_pkg").
pub fn sanitize(path: &str) -> String {
    path.chars()
        .map(|c| {
            if c.is_alphanumeric() || c == '_' {
                c
            } else {
                '_'
            }
        })
        .collect()
}

/// Derive a short alias from the last non-empty segment of a path
/// (e.g., "github.com/x/go-fmt" -> "fmt", "example.com/x/" -> "x").
///
/// A path without any identifier characters yields its sanitized form, which
/// is empty only for an empty path.
pub fn default_alias(path: &str) -> String {
    let full = sanitize(unvendor(path));
    match full.rsplit('_').find(|segment| !segment.is_empty()) {
        Some(last) => last.to_string(),
        None => full,
    }
}

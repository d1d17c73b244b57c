//! Native (built-in) type vocabulary.

/// Type names that never take namespace qualification.
pub const NATIVE_TYPE_NAMES: &[&str] = &[
    "array", "bool", "callable", "false", "float", "int", "iterable", "mixed", "never", "null",
    "object", "resource", "static", "string", "true", "void",
];

/// Whether `name` spells a native type.
///
/// Type keywords are case-insensitive in the source language, so `Int` and
/// `ARRAY` match. A leading `?` nullable marker and trailing `[]` array
/// suffixes are ignored, so `?int[]` is native.
#[must_use]
pub fn is_native_type_name(name: &str) -> bool {
    let mut bare = name.strip_prefix('?').unwrap_or(name);
    while let Some(element) = bare.strip_suffix("[]") {
        bare = element;
    }
    NATIVE_TYPE_NAMES
        .iter()
        .any(|native| native.eq_ignore_ascii_case(bare))
}

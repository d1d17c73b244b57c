//! Variables that are implicitly bound in every scope.

/// Superglobal names, without the `$` sigil.
pub const SUPERGLOBALS: &[&str] = &[
    "GLOBALS", "_COOKIE", "_ENV", "_FILES", "_GET", "_POST", "_REQUEST", "_SERVER", "_SESSION",
];

#[must_use]
pub fn is_superglobal(name: &str) -> bool {
    SUPERGLOBALS.contains(&name)
}

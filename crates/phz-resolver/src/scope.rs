//! Variable bindings visible at a point in the traversal.

use phz_common::limits::SCOPE_INITIAL_CAPACITY;
use phz_types::UnionType;
use rustc_hash::FxHashMap;

/// Variable name (no `$` sigil) → bound union type.
///
/// Lookups are exact and case-sensitive. Absence is distinct from a binding
/// to the empty union: use [`Scope::has_variable`] to ask the former.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Scope {
    variables: FxHashMap<String, UnionType>,
}

impl Scope {
    #[must_use]
    pub fn new() -> Self {
        Self {
            variables: FxHashMap::with_capacity_and_hasher(
                SCOPE_INITIAL_CAPACITY,
                Default::default(),
            ),
        }
    }

    #[must_use]
    pub fn has_variable(&self, name: &str) -> bool {
        self.variables.contains_key(name)
    }

    #[must_use]
    pub fn variable(&self, name: &str) -> Option<&UnionType> {
        self.variables.get(name)
    }

    /// Bind (or rebind) `name`.
    pub fn add_variable(&mut self, name: impl Into<String>, union_type: UnionType) {
        self.variables.insert(name.into(), union_type);
    }

    /// Builder form of [`Scope::add_variable`].
    #[must_use]
    pub fn with_variable(mut self, name: impl Into<String>, union_type: UnionType) -> Self {
        self.add_variable(name, union_type);
        self
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.variables.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.variables.is_empty()
    }

    pub fn variable_names(&self) -> impl Iterator<Item = &str> {
        self.variables.keys().map(String::as_str)
    }
}

impl Default for Scope {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
#[path = "tests/scope_tests.rs"]
mod tests;

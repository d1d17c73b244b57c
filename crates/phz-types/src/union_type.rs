//! The union type set model.
//!
//! # Grammar
//!
//! ```text
//! union := atom ( "|" atom )*
//! atom  := "?"? name ( "[]" )*   // whitespace around atoms is trimmed
//! ```
//!
//! A `[]` suffix is the docblock array form; `int[]` is native because `int`
//! is, `\App\User[]` is not.
//!
//! Atoms are kept verbatim; this layer does not check that a non-native atom
//! names a declared class. Empty atoms (`int||string`, a trailing `|`) are
//! dropped, so the empty string parses to the empty union.
//!
//! # Ordering
//!
//! Membership is order-irrelevant: `int|string == string|int`. Rendering is
//! first-seen order so that diagnostics mentioning a type are reproducible
//! and the text can serve as a cache key.

use crate::native::is_native_type_name;
use indexmap::IndexSet;
use rustc_hash::FxBuildHasher;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::convert::Infallible;
use std::fmt;
use std::str::FromStr;

type AtomSet = IndexSet<String, FxBuildHasher>;

/// A set of possible static types. The empty set means "unknown".
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct UnionType {
    types: AtomSet,
}

impl UnionType {
    pub const MIXED: &'static str = "mixed";

    /// The empty union: nothing has been inferred yet.
    #[must_use]
    pub fn empty() -> Self {
        Self::default()
    }

    /// The universal `mixed` type.
    #[must_use]
    pub fn mixed() -> Self {
        Self::from_type_name(Self::MIXED)
    }

    /// A union from one resolved type name.
    ///
    /// A `|` inside the name is a member separator, exactly as in
    /// [`UnionType::from_string`], so the result always renders to text that
    /// parses back to the same set. A blank name yields the empty union.
    #[must_use]
    pub fn from_type_name(name: &str) -> Self {
        Self::from_string(name)
    }

    /// Parse the `|`-delimited textual form.
    #[must_use]
    pub fn from_string(text: &str) -> Self {
        Self::from_types(text.split('|'))
    }

    /// Build from individual atoms, trimming and deduplicating.
    #[must_use]
    pub fn from_types<I, T>(atoms: I) -> Self
    where
        I: IntoIterator<Item = T>,
        T: AsRef<str>,
    {
        let mut types = AtomSet::default();
        for atom in atoms {
            let atom = atom.as_ref().trim();
            if !atom.is_empty() && !types.contains(atom) {
                types.insert(atom.to_string());
            }
        }
        Self { types }
    }

    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.types.is_empty()
    }

    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.types.len()
    }

    /// Atoms in first-seen order.
    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.types.iter().map(String::as_str)
    }

    #[must_use]
    pub fn has_type(&self, atom: &str) -> bool {
        self.types.contains(atom.trim())
    }

    /// Whether every atom of `other` is also in `self`.
    #[must_use]
    pub fn contains(&self, other: &UnionType) -> bool {
        other.types.is_subset(&self.types)
    }

    /// A new union with `atom` added. `atom` is split on `|` like any
    /// other type text.
    #[must_use]
    pub fn with_type(&self, atom: &str) -> Self {
        self.union(&Self::from_string(atom))
    }

    /// A new union holding the atoms of both, `self`'s atoms first.
    #[must_use]
    pub fn union(&self, other: &UnionType) -> Self {
        let mut out = self.clone();
        for atom in &other.types {
            if !out.types.contains(atom) {
                out.types.insert(atom.clone());
            }
        }
        out
    }

    /// True iff the union is non-empty and every atom is a native type.
    #[must_use]
    pub fn is_native_type(&self) -> bool {
        !self.types.is_empty() && self.types.iter().all(|atom| is_native_type_name(atom))
    }

    /// Atoms that name declared (class-like) types.
    pub fn non_native_types(&self) -> impl Iterator<Item = &str> {
        self.iter().filter(|atom| !is_native_type_name(atom))
    }

    /// Whether `null` is a possible value.
    #[must_use]
    pub fn is_nullable(&self) -> bool {
        self.types.iter().any(|atom| includes_null(atom))
    }

    /// A new union that admits `null`.
    ///
    /// Atoms that already include null (`null`, `mixed`, `?T`) are kept as
    /// they are; every other atom gains the `?` marker.
    #[must_use]
    pub fn nullable(&self) -> Self {
        Self::from_types(self.types.iter().map(|atom| {
            if includes_null(atom) {
                atom.clone()
            } else {
                format!("?{atom}")
            }
        }))
    }
}

fn includes_null(atom: &str) -> bool {
    atom.starts_with('?') || atom.eq_ignore_ascii_case("null") || atom.eq_ignore_ascii_case("mixed")
}

impl fmt::Display for UnionType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut first = true;
        for atom in &self.types {
            if !first {
                f.write_str("|")?;
            }
            first = false;
            f.write_str(atom)?;
        }
        Ok(())
    }
}

impl FromStr for UnionType {
    type Err = Infallible;

    fn from_str(text: &str) -> Result<Self, Self::Err> {
        Ok(Self::from_string(text))
    }
}

impl<'a> FromIterator<&'a str> for UnionType {
    fn from_iter<I: IntoIterator<Item = &'a str>>(iter: I) -> Self {
        Self::from_types(iter)
    }
}

impl Serialize for UnionType {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for UnionType {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let text = String::deserialize(deserializer)?;
        Ok(Self::from_string(&text))
    }
}

#[cfg(test)]
#[path = "tests/union_type_tests.rs"]
mod tests;

//! Resolver configuration.

use phz_common::limits::MAX_NAME_CHAIN_DEPTH;
use serde::{Deserialize, Serialize};

/// Options controlling what the resolver reports and how far it walks.
///
/// Unspecified fields take their defaults when loaded from JSON, so a
/// partial configuration such as `{"extra_superglobals": ["config"]}` is
/// valid.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ResolverOptions {
    /// Emit `UndefinedVariable` diagnostics for unbound variables.
    pub report_undefined_variables: bool,
    /// Additional variable names treated as always bound, like the
    /// language's own superglobals. Names are given without the `$` sigil.
    pub extra_superglobals: Vec<String>,
    /// Bound on `children[0]` hops during variable-name extraction.
    pub max_name_chain_depth: usize,
}

impl Default for ResolverOptions {
    fn default() -> Self {
        Self {
            report_undefined_variables: true,
            extra_superglobals: Vec::new(),
            max_name_chain_depth: MAX_NAME_CHAIN_DEPTH,
        }
    }
}

impl ResolverOptions {
    /// Load options from a JSON document.
    pub fn from_json(text: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(text)
    }
}

#[cfg(test)]
#[path = "tests/options_tests.rs"]
mod tests;

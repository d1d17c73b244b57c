//! Compilation-unit descriptions exchanged as JSON.
//!
//! The parser and the declaration collector run outside this workspace. What
//! they know about a unit before resolution starts (its file, namespace,
//! `use` aliases, enclosing class, and bound variables) arrives as a
//! [`UnitDescriptor`] and becomes a [`Context`].

use phz_ast::Node;
use phz_resolver::{AliasMap, Context, Scope};
use phz_types::UnionType;
use rustc_hash::FxHashMap;
use serde::Deserialize;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum UnitError {
    #[error("invalid unit description: {0}")]
    Descriptor(#[source] serde_json::Error),
    #[error("invalid AST JSON: {0}")]
    Ast(#[source] serde_json::Error),
}

/// What is known about a compilation unit before resolution.
///
/// ```json
/// {
///   "file": "src/App/Kernel.php",
///   "namespace": "App",
///   "aliases": { "class": { "Foo": "\\Vendor\\Foo" } },
///   "class": "\\App\\Kernel",
///   "variables": { "this": "\\App\\Kernel", "id": "int|null" }
/// }
/// ```
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct UnitDescriptor {
    pub file: String,
    pub namespace: String,
    pub aliases: AliasMap,
    pub class: Option<String>,
    /// Variable name → union type text.
    pub variables: FxHashMap<String, String>,
}

impl UnitDescriptor {
    pub fn from_json(text: &str) -> Result<Self, UnitError> {
        serde_json::from_str(text).map_err(UnitError::Descriptor)
    }

    /// The context resolution of this unit starts from.
    #[must_use]
    pub fn to_context(&self) -> Context {
        let mut scope = Scope::new();
        for (name, union_text) in &self.variables {
            scope.add_variable(name.as_str(), UnionType::from_string(union_text));
        }

        let context = Context::new(self.file.as_str())
            .with_namespace(&self.namespace)
            .with_aliases(self.aliases.clone())
            .with_scope(scope);
        match &self.class {
            Some(class) => context.with_class(class.as_str()),
            None => context,
        }
    }
}

/// Parse one AST node from the parser's JSON form.
pub fn parse_node(text: &str) -> Result<Node, UnitError> {
    serde_json::from_str(text).map_err(UnitError::Ast)
}

#[cfg(test)]
#[path = "tests/unit_tests.rs"]
mod tests;

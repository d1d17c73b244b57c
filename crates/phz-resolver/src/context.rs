//! Resolution context.
//!
//! A [`Context`] describes where in the source a node sits: the current
//! namespace, the `use` aliases in force, the file and line, the enclosing
//! class, and the variable [`Scope`]. One context flows through the traversal
//! of a compilation unit and is forked with the `with_*` builders when the
//! traversal enters a nested region.
//!
//! Alias maps are populated once per compilation unit and then only read, so
//! they sit behind an `Arc` and forking a context never copies them.

use crate::scope::Scope;
use phz_types::is_native_type_name;
use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};
use std::sync::Arc;

/// Namespace separator.
pub const NAMESPACE_SEPARATOR: char = '\\';

/// The root namespace, represented explicitly.
pub const ROOT_NAMESPACE: &str = "\\";

/// Which `use` table an alias belongs to.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AliasKind {
    /// `use Foo\Bar;`
    Class,
    /// `use function Foo\bar;`
    Function,
    /// `use const Foo\BAR;`
    Constant,
}

/// Alias kind → (short alias → fully-qualified target).
///
/// Deserializes from the natural JSON shape
/// `{"class": {"Foo": "\\Vendor\\Foo"}}`.
pub type AliasMap = FxHashMap<AliasKind, FxHashMap<String, String>>;

#[derive(Clone, Debug)]
pub struct Context {
    namespace: String,
    aliases: Arc<AliasMap>,
    file: Arc<str>,
    line: u32,
    class_fqsen: Option<String>,
    scope: Scope,
}

impl Context {
    /// A context at the top of `file`, in the root namespace, with no aliases
    /// and an empty scope.
    #[must_use]
    pub fn new(file: impl Into<Arc<str>>) -> Self {
        Self {
            namespace: ROOT_NAMESPACE.to_string(),
            aliases: Arc::new(AliasMap::default()),
            file: file.into(),
            line: 0,
            class_fqsen: None,
            scope: Scope::new(),
        }
    }

    // =========================================================================
    // Forking
    // =========================================================================

    /// Fork into `namespace`. The name is normalized to a `\`-rooted form;
    /// an empty name means the root namespace.
    #[must_use]
    pub fn with_namespace(mut self, namespace: &str) -> Self {
        self.namespace = normalize_namespace(namespace);
        self
    }

    /// Replace the alias tables wholesale.
    #[must_use]
    pub fn with_aliases(mut self, aliases: AliasMap) -> Self {
        self.aliases = Arc::new(aliases);
        self
    }

    /// Add one alias while the compilation unit's `use` list is being read.
    #[must_use]
    pub fn with_alias(
        mut self,
        kind: AliasKind,
        alias: impl Into<String>,
        target: impl Into<String>,
    ) -> Self {
        Arc::make_mut(&mut self.aliases)
            .entry(kind)
            .or_default()
            .insert(alias.into(), target.into());
        self
    }

    #[must_use]
    pub fn with_line(mut self, line: u32) -> Self {
        self.line = line;
        self
    }

    /// Fork into the body of the class named `fqsen`.
    #[must_use]
    pub fn with_class(mut self, fqsen: impl Into<String>) -> Self {
        self.class_fqsen = Some(fqsen.into());
        self
    }

    /// Fork with a fresh or prepared scope (function, method, closure entry).
    #[must_use]
    pub fn with_scope(mut self, scope: Scope) -> Self {
        self.scope = scope;
        self
    }

    // =========================================================================
    // Accessors
    // =========================================================================

    #[must_use]
    pub fn namespace(&self) -> &str {
        &self.namespace
    }

    #[must_use]
    pub fn file(&self) -> &str {
        &self.file
    }

    #[must_use]
    pub fn line(&self) -> u32 {
        self.line
    }

    #[must_use]
    pub fn class_fqsen(&self) -> Option<&str> {
        self.class_fqsen.as_deref()
    }

    #[must_use]
    pub fn scope(&self) -> &Scope {
        &self.scope
    }

    /// Mutable scope access for the pass that binds assignments and
    /// parameters.
    pub fn scope_mut(&mut self) -> &mut Scope {
        &mut self.scope
    }

    #[must_use]
    pub fn alias(&self, kind: AliasKind, alias: &str) -> Option<&str> {
        self.aliases
            .get(&kind)
            .and_then(|table| table.get(alias))
            .map(String::as_str)
    }

    #[must_use]
    pub fn has_aliases(&self, kind: AliasKind) -> bool {
        self.aliases.get(&kind).is_some_and(|table| !table.is_empty())
    }

    // =========================================================================
    // Qualification
    // =========================================================================

    /// Qualify a relative name against this context.
    ///
    /// The first matching rule wins:
    /// 1. class names that spell a native type are returned unchanged;
    /// 2. an alias whose key is the whole name yields its target;
    /// 3. an alias whose key is the first `\`-separated segment yields
    ///    `target\rest`;
    /// 4. otherwise the current namespace is prepended.
    ///
    /// Rule 3 looks at the first segment only. It neither recurses into
    /// deeper segments nor re-checks whether the remainder is native.
    #[must_use]
    pub fn qualify(&self, kind: AliasKind, name: &str) -> String {
        if kind == AliasKind::Class && is_native_type_name(name) {
            return name.to_string();
        }

        if let Some(target) = self.alias(kind, name) {
            tracing::trace!(name, target, "exact alias");
            return target.to_string();
        }

        if let Some((head, rest)) = name.split_once(NAMESPACE_SEPARATOR) {
            if let Some(target) = self.alias(kind, head) {
                tracing::trace!(name, head, target, "prefix alias");
                return format!("{target}{NAMESPACE_SEPARATOR}{rest}");
            }
        }

        self.prepend_namespace(name)
    }

    /// `namespace\name`, without doubling the separator in the root
    /// namespace.
    #[must_use]
    pub fn prepend_namespace(&self, name: &str) -> String {
        if self.namespace.ends_with(NAMESPACE_SEPARATOR) {
            format!("{}{name}", self.namespace)
        } else {
            format!("{}{NAMESPACE_SEPARATOR}{name}", self.namespace)
        }
    }
}

fn normalize_namespace(namespace: &str) -> String {
    let trimmed = namespace.trim().trim_matches(NAMESPACE_SEPARATOR);
    if trimmed.is_empty() {
        ROOT_NAMESPACE.to_string()
    } else {
        format!("{NAMESPACE_SEPARATOR}{trimmed}")
    }
}

#[cfg(test)]
#[path = "tests/context_tests.rs"]
mod tests;

//! Class-name bridge.
//!
//! Which child of a node names a class, and whether a candidate name is a
//! class the analyzer knows, are decided by a [`ClassNameStrategy`]. The
//! resolver only sequences the two steps and maps every failure to the empty
//! string, which callers read as "this node does not denote a class".

use crate::context::{AliasKind, Context};
use crate::resolver::Resolver;
use phz_ast::{Node, NodeKind, name_flags};
use rustc_hash::FxHashMap;

/// Node-kind specific class-name extraction and validation.
pub trait ClassNameStrategy {
    /// A candidate fully-qualified class name for `node`, if its kind can
    /// carry one.
    fn extract(&self, context: &Context, node: &Node) -> Option<String>;

    /// The validated (canonical) form of `name`, or `None` to reject it.
    fn validate(&self, context: &Context, name: &str) -> Option<String>;
}

impl Resolver<'_> {
    /// Resolve the class a node refers to, or `""` when there is none.
    #[must_use]
    pub fn class_name(&self, node: &Node, strategy: &dyn ClassNameStrategy) -> String {
        let Some(candidate) = strategy
            .extract(self.context, node)
            .filter(|name| !name.is_empty())
        else {
            return String::new();
        };

        match strategy.validate(self.context, &candidate) {
            Some(valid) => valid,
            None => {
                tracing::trace!(candidate = %candidate, kind = %node.kind, "class name rejected");
                String::new()
            }
        }
    }
}

// =============================================================================
// Known classes
// =============================================================================

/// Case-insensitive set of declared class names.
///
/// Names are stored `\`-rooted; lookups accept either form.
#[derive(Clone, Debug, Default)]
pub struct KnownClasses {
    by_key: FxHashMap<String, String>,
}

impl KnownClasses {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, fqsen: &str) {
        let canonical = rooted(fqsen);
        self.by_key.insert(canonical.to_ascii_lowercase(), canonical);
    }

    /// The declared spelling of `name`.
    #[must_use]
    pub fn canonical(&self, name: &str) -> Option<&str> {
        self.by_key
            .get(&rooted(name).to_ascii_lowercase())
            .map(String::as_str)
    }

    #[must_use]
    pub fn contains(&self, name: &str) -> bool {
        self.canonical(name).is_some()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.by_key.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.by_key.is_empty()
    }
}

impl<S: AsRef<str>> FromIterator<S> for KnownClasses {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        let mut known = Self::new();
        for name in iter {
            known.insert(name.as_ref());
        }
        known
    }
}

fn rooted(name: &str) -> String {
    format!("\\{}", name.trim().trim_start_matches('\\'))
}

// =============================================================================
// Default strategy
// =============================================================================

/// Dispatches on node kind to find the class child, then checks the result
/// against a [`KnownClasses`] set.
#[derive(Clone, Copy, Debug)]
pub struct KindDispatchStrategy<'k> {
    known: &'k KnownClasses,
}

impl<'k> KindDispatchStrategy<'k> {
    #[must_use]
    pub fn new(known: &'k KnownClasses) -> Self {
        Self { known }
    }
}

impl ClassNameStrategy for KindDispatchStrategy<'_> {
    fn extract(&self, context: &Context, node: &Node) -> Option<String> {
        let class_node = match node.kind {
            NodeKind::New | NodeKind::StaticCall | NodeKind::StaticProp | NodeKind::ClassConst => {
                node.child_node(0)?
            }
            NodeKind::InstanceOf => node.child_node(1)?,
            NodeKind::Name => node,
            NodeKind::NameList
            | NodeKind::Type
            | NodeKind::NullableType
            | NodeKind::TypeUnion
            | NodeKind::Var
            | NodeKind::StaticVar
            | NodeKind::MagicConst
            | NodeKind::BinaryOp
            | NodeKind::Call
            | NodeKind::MethodCall
            | NodeKind::Prop
            | NodeKind::PropElem
            | NodeKind::Const
            | NodeKind::Assign
            | NodeKind::Array
            | NodeKind::Unknown => return None,
        };
        class_from_name_node(context, class_node)
    }

    fn validate(&self, _context: &Context, name: &str) -> Option<String> {
        self.known.canonical(name).map(str::to_string)
    }
}

/// `new $cls` and other dynamic class positions have no static name.
fn class_from_name_node(context: &Context, node: &Node) -> Option<String> {
    if node.kind != NodeKind::Name {
        return None;
    }
    let name = node.child_text(0)?;
    if !node.has_flag(name_flags::NAME_NOT_FQ) {
        return Some(name.into_owned());
    }
    match name.to_ascii_lowercase().as_str() {
        "self" | "static" => context.class_fqsen().map(str::to_string),
        // Needs the class hierarchy, which lives outside this crate.
        "parent" => None,
        _ => Some(context.qualify(AliasKind::Class, &name)),
    }
}

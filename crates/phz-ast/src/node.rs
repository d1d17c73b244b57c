//! Node, child, and kind definitions.

use serde::{Deserialize, Serialize};
use std::borrow::Cow;
use std::fmt;

/// The closed vocabulary of node kinds the core distinguishes.
///
/// Kinds the parser emits that the core has no rule for deserialize as
/// [`NodeKind::Unknown`] and are treated opaquely.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum NodeKind {
    /// A class/function/constant name. `children[0]` is the name text.
    Name,
    /// A list of names (`implements A, B`, `catch (A | B $e)`).
    NameList,
    /// A type keyword (`array`, `callable`, ...). The keyword is in `flags`.
    Type,
    /// `?T`. `children[0]` is the inner type.
    NullableType,
    /// `A|B`. Each child is one member type.
    TypeUnion,
    /// `$name`. `children[0]` is the name text or a nested expression.
    Var,
    /// `static $name` inside a function body.
    StaticVar,
    /// `__LINE__`, `__CLASS__`, ...
    MagicConst,
    BinaryOp,
    New,
    StaticCall,
    StaticProp,
    ClassConst,
    InstanceOf,
    Call,
    MethodCall,
    Prop,
    /// One property inside a property declaration. `children[0]` is the name.
    PropElem,
    Const,
    Assign,
    Array,
    #[serde(other)]
    Unknown,
}

impl NodeKind {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Name => "name",
            Self::NameList => "name_list",
            Self::Type => "type",
            Self::NullableType => "nullable_type",
            Self::TypeUnion => "type_union",
            Self::Var => "var",
            Self::StaticVar => "static_var",
            Self::MagicConst => "magic_const",
            Self::BinaryOp => "binary_op",
            Self::New => "new",
            Self::StaticCall => "static_call",
            Self::StaticProp => "static_prop",
            Self::ClassConst => "class_const",
            Self::InstanceOf => "instance_of",
            Self::Call => "call",
            Self::MethodCall => "method_call",
            Self::Prop => "prop",
            Self::PropElem => "prop_elem",
            Self::Const => "const",
            Self::Assign => "assign",
            Self::Array => "array",
            Self::Unknown => "unknown",
        }
    }

    /// Kinds at which a variable-name walk stops.
    #[must_use]
    pub const fn is_variable_like(self) -> bool {
        matches!(self, Self::Var | Self::StaticVar | Self::MagicConst)
    }
}

impl fmt::Display for NodeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One AST node as produced by the parser.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Node {
    pub kind: NodeKind,
    #[serde(default)]
    pub flags: u32,
    #[serde(default)]
    pub line: u32,
    /// Ordered children; `None` marks a syntactically absent child.
    #[serde(default)]
    pub children: Vec<Option<Child>>,
}

/// A child slot value: either a nested node or a scalar leaf.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Child {
    Node(Box<Node>),
    Str(String),
    Int(i64),
    Float(f64),
}

impl Node {
    #[must_use]
    pub fn new(kind: NodeKind, flags: u32, line: u32, children: Vec<Option<Child>>) -> Self {
        Self {
            kind,
            flags,
            line,
            children,
        }
    }

    /// A `Name` node whose only child is `text`.
    #[must_use]
    pub fn name(text: impl Into<String>, flags: u32, line: u32) -> Self {
        Self::new(NodeKind::Name, flags, line, vec![Some(Child::from(text.into()))])
    }

    /// A `Var` node naming `name` (no sigil).
    #[must_use]
    pub fn var(name: impl Into<String>, line: u32) -> Self {
        Self::new(NodeKind::Var, 0, line, vec![Some(Child::from(name.into()))])
    }

    /// A `Var` node whose name position holds another node.
    #[must_use]
    pub fn var_of(inner: Node, line: u32) -> Self {
        Self::new(NodeKind::Var, 0, line, vec![Some(Child::from(inner))])
    }

    /// A `Type` keyword node.
    #[must_use]
    pub fn type_keyword(code: u32, line: u32) -> Self {
        Self::new(NodeKind::Type, code, line, Vec::new())
    }

    #[inline]
    #[must_use]
    pub fn has_flag(&self, flag: u32) -> bool {
        self.flags & flag != 0
    }

    /// Child at `index`, or `None` when out of range or absent.
    #[inline]
    #[must_use]
    pub fn child(&self, index: usize) -> Option<&Child> {
        self.children.get(index).and_then(Option::as_ref)
    }

    #[inline]
    #[must_use]
    pub fn child_node(&self, index: usize) -> Option<&Node> {
        self.child(index).and_then(Child::as_node)
    }

    /// Stringified leaf at `index`; `None` for absent or node children.
    #[must_use]
    pub fn child_text(&self, index: usize) -> Option<Cow<'_, str>> {
        self.child(index).and_then(Child::leaf_text)
    }

    /// Present children, skipping absent slots.
    pub fn present_children(&self) -> impl Iterator<Item = &Child> {
        self.children.iter().flatten()
    }
}

impl Child {
    #[inline]
    #[must_use]
    pub fn as_node(&self) -> Option<&Node> {
        match self {
            Self::Node(node) => Some(node.as_ref()),
            _ => None,
        }
    }

    #[inline]
    #[must_use]
    pub const fn is_node(&self) -> bool {
        matches!(self, Self::Node(_))
    }

    /// The textual value of a leaf. Nodes have none.
    #[must_use]
    pub fn leaf_text(&self) -> Option<Cow<'_, str>> {
        match self {
            Self::Node(_) => None,
            Self::Str(s) => Some(Cow::Borrowed(s)),
            Self::Int(i) => Some(Cow::Owned(i.to_string())),
            Self::Float(f) => Some(Cow::Owned(f.to_string())),
        }
    }
}

impl From<Node> for Child {
    fn from(node: Node) -> Self {
        Self::Node(Box::new(node))
    }
}

impl From<String> for Child {
    fn from(text: String) -> Self {
        Self::Str(text)
    }
}

impl From<&str> for Child {
    fn from(text: &str) -> Self {
        Self::Str(text.to_string())
    }
}

impl From<i64> for Child {
    fn from(value: i64) -> Self {
        Self::Int(value)
    }
}

#[cfg(test)]
#[path = "tests/node_tests.rs"]
mod tests;

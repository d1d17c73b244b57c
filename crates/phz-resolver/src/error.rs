//! Structural failures raised by the resolver.
//!
//! These indicate that the AST handed over does not match the contract the
//! resolver expects. They propagate to the immediate caller and are never
//! downgraded to `mixed` or the empty union. Semantic uncertainty (an unbound
//! variable, a name that is not a class) is not an error; see
//! `phz_common::diagnostics`.

use phz_ast::NodeKind;
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ResolveError {
    /// A type position held a node kind that cannot denote a type.
    #[error("cannot resolve a type from a `{kind}` node on line {line}")]
    UnresolvableTypeNode { kind: NodeKind, line: u32 },

    /// A type-keyword node carried a code outside the keyword vocabulary.
    #[error("unknown type keyword code {flags} on line {line}")]
    UnknownTypeKeyword { flags: u32, line: u32 },

    /// A required child slot was absent or held the wrong shape.
    #[error("`{kind}` node on line {line} has no usable child at index {index}")]
    MissingChild {
        kind: NodeKind,
        index: usize,
        line: u32,
    },

    /// A node of one kind was handed to an operation that expects another.
    #[error("expected a `{expected}` node but found `{found}` on line {line}")]
    UnexpectedNodeKind {
        expected: NodeKind,
        found: NodeKind,
        line: u32,
    },

    /// A variable-name chain went deeper than the configured bound.
    #[error("variable name chain exceeds {depth} nested nodes near line {line}")]
    MalformedNameChain { depth: usize, line: u32 },
}

impl ResolveError {
    /// Source line the failure points at.
    #[must_use]
    pub const fn line(&self) -> u32 {
        match self {
            Self::UnresolvableTypeNode { line, .. }
            | Self::UnknownTypeKeyword { line, .. }
            | Self::MissingChild { line, .. }
            | Self::UnexpectedNodeKind { line, .. }
            | Self::MalformedNameChain { line, .. } => *line,
        }
    }
}

//! Type-position nodes → union types.

use crate::error::ResolveError;
use crate::resolver::Resolver;
use phz_ast::{Child, Node, NodeKind, type_flags};
use phz_types::UnionType;

impl Resolver<'_> {
    /// Resolve whatever sits in a type position.
    ///
    /// A scalar leaf is taken as union-type text (`"int|string"`), which is
    /// how docblock-derived types arrive.
    pub fn union_type_from_type(&mut self, ty: &Child) -> Result<UnionType, ResolveError> {
        match ty {
            Child::Node(node) => self.union_type_from_type_node(node),
            leaf => Ok(UnionType::from_string(&leaf.leaf_text().unwrap_or_default())),
        }
    }

    /// Resolve a type node.
    ///
    /// Only name and type nodes may appear here. Any other kind means the
    /// parser and the resolver disagree about the tree shape, and fails with
    /// [`ResolveError::UnresolvableTypeNode`].
    #[tracing::instrument(level = "trace", skip(self, node), fields(kind = %node.kind, line = node.line))]
    pub fn union_type_from_type_node(&mut self, node: &Node) -> Result<UnionType, ResolveError> {
        match node.kind {
            NodeKind::Name => {
                let name = self.qualified_name(node)?;
                Ok(UnionType::from_type_name(&name))
            }
            NodeKind::Type => type_flags::keyword_name(node.flags)
                .map(UnionType::from_type_name)
                .ok_or(ResolveError::UnknownTypeKeyword {
                    flags: node.flags,
                    line: node.line,
                }),
            NodeKind::NullableType => {
                let inner = node.child(0).ok_or(ResolveError::MissingChild {
                    kind: node.kind,
                    index: 0,
                    line: node.line,
                })?;
                Ok(self.union_type_from_type(inner)?.nullable())
            }
            NodeKind::TypeUnion => {
                let mut union = UnionType::empty();
                for member in node.present_children() {
                    union = union.union(&self.union_type_from_type(member)?);
                }
                Ok(union)
            }
            kind => Err(ResolveError::UnresolvableTypeNode {
                kind,
                line: node.line,
            }),
        }
    }
}

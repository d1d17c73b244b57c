//! Declared-type holder for class properties.

use crate::context::Context;
use crate::error::ResolveError;
use crate::resolver::Resolver;
use phz_ast::{Child, ModifierFlags, Node, NodeKind};
use phz_types::UnionType;
use serde::Serialize;

/// Member visibility, derived from modifier bits.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Visibility {
    #[default]
    Public,
    Protected,
    Private,
}

/// A declared property: its name, the context it was declared in, the raw
/// modifier flags, and a slot for its declared union type.
///
/// The declared type starts unset and is filled in by a later pass.
#[derive(Clone, Debug)]
pub struct Property {
    name: String,
    context: Context,
    flags: u32,
    declared_union_type: Option<UnionType>,
}

impl Property {
    #[must_use]
    pub fn new(name: impl Into<String>, context: Context, flags: u32) -> Self {
        Self {
            name: name.into(),
            context,
            flags,
            declared_union_type: None,
        }
    }

    /// Build from a property-element node. The context is forked to the
    /// node's line; a leading `$` on the name is dropped.
    pub fn from_node(context: &Context, node: &Node) -> Result<Self, ResolveError> {
        if node.kind != NodeKind::PropElem {
            return Err(ResolveError::UnexpectedNodeKind {
                expected: NodeKind::PropElem,
                found: node.kind,
                line: node.line,
            });
        }
        let name = node.child_text(0).ok_or(ResolveError::MissingChild {
            kind: node.kind,
            index: 0,
            line: node.line,
        })?;
        let name = name.strip_prefix('$').unwrap_or(&name);

        Ok(Self::new(
            name,
            context.clone().with_line(node.line),
            node.flags,
        ))
    }

    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    #[must_use]
    pub fn context(&self) -> &Context {
        &self.context
    }

    /// Raw flags as copied from the declaring node.
    #[must_use]
    pub fn flags(&self) -> u32 {
        self.flags
    }

    #[must_use]
    pub fn modifiers(&self) -> ModifierFlags {
        ModifierFlags::from_bits_truncate(self.flags)
    }

    #[must_use]
    pub fn is_static(&self) -> bool {
        self.modifiers().contains(ModifierFlags::STATIC)
    }

    /// Private wins over protected; no visibility bit means public.
    #[must_use]
    pub fn visibility(&self) -> Visibility {
        let modifiers = self.modifiers();
        if modifiers.contains(ModifierFlags::PRIVATE) {
            Visibility::Private
        } else if modifiers.contains(ModifierFlags::PROTECTED) {
            Visibility::Protected
        } else {
            Visibility::Public
        }
    }

    // =========================================================================
    // Declared type
    // =========================================================================

    /// The declared union type, or the empty union when none was set.
    #[must_use]
    pub fn declared_union_type(&self) -> UnionType {
        self.declared_union_type.clone().unwrap_or_default()
    }

    #[must_use]
    pub fn has_declared_union_type(&self) -> bool {
        self.declared_union_type.is_some()
    }

    pub fn set_declared_union_type(&mut self, union_type: UnionType) {
        if let Some(previous) = &self.declared_union_type {
            tracing::trace!(
                property = %self.name,
                previous = %previous,
                replacement = %union_type,
                "declared type overwritten"
            );
        }
        self.declared_union_type = Some(union_type);
    }

    /// Resolve `ty` under this property's context and store it as the
    /// declared type. An absent type leaves the slot untouched.
    pub fn resolve_declared_type(&mut self, ty: Option<&Child>) -> Result<(), ResolveError> {
        let Some(ty) = ty else {
            return Ok(());
        };
        let union_type = Resolver::new(&self.context).union_type_from_type(ty)?;
        self.set_declared_union_type(union_type);
        Ok(())
    }
}

//! Fully-qualified name resolution.

use crate::context::AliasKind;
use crate::error::ResolveError;
use crate::resolver::Resolver;
use phz_ast::{Child, Node, NodeKind, name_flags};

impl Resolver<'_> {
    /// Resolve a class-name position to its fully-qualified form.
    ///
    /// A name position may syntactically hold an expression (`new $cls`);
    /// such nodes resolve to the text of their union type instead.
    #[tracing::instrument(level = "trace", skip(self, node), fields(kind = %node.kind, line = node.line))]
    pub fn qualified_name(&mut self, node: &Node) -> Result<String, ResolveError> {
        if node.kind != NodeKind::Name {
            return Ok(self.union_type_of_node(node)?.to_string());
        }
        self.qualify_name_node(node, AliasKind::Class)
    }

    /// Resolve every name in a name list, keeping source order.
    ///
    /// Anything other than a node (absent, or a scalar leaf) is an empty
    /// list. Absent entries inside the list are skipped; scalar entries are
    /// taken verbatim.
    pub fn qualified_names(&mut self, list: Option<&Child>) -> Result<Vec<String>, ResolveError> {
        let Some(Child::Node(list)) = list else {
            return Ok(Vec::new());
        };
        list.present_children()
            .map(|child| match child {
                Child::Node(node) => self.qualified_name(node),
                leaf => Ok(leaf.leaf_text().unwrap_or_default().into_owned()),
            })
            .collect()
    }

    /// Resolve a function-call name against `use function` aliases.
    pub fn qualified_function_name(&self, node: &Node) -> Result<String, ResolveError> {
        self.qualify_name_node(node, AliasKind::Function)
    }

    /// Resolve a constant name against `use const` aliases.
    pub fn qualified_constant_name(&self, node: &Node) -> Result<String, ResolveError> {
        self.qualify_name_node(node, AliasKind::Constant)
    }

    fn qualify_name_node(&self, node: &Node, kind: AliasKind) -> Result<String, ResolveError> {
        let name = node.child_text(0).ok_or(ResolveError::MissingChild {
            kind: node.kind,
            index: 0,
            line: node.line,
        })?;

        if !node.has_flag(name_flags::NAME_NOT_FQ) {
            return Ok(name.into_owned());
        }

        let qualified = self.context.qualify(kind, &name);
        tracing::trace!(name = %name, qualified = %qualified, ?kind, "qualified");
        Ok(qualified)
    }
}

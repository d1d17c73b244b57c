//! Variable type lookup and variable-name extraction.

use crate::error::ResolveError;
use crate::resolver::Resolver;
use crate::superglobals::is_superglobal;
use phz_ast::{Child, Node, NodeKind};
use phz_common::{Diagnostic, DiagnosticKind};
use phz_types::UnionType;

impl Resolver<'_> {
    /// Union type of a variable reference, looked up in the current scope.
    ///
    /// - `$$name` and `${'a' . 'b'}` are `mixed`; they cannot be analyzed
    ///   statically and the scope is not consulted.
    /// - A name position holding any other node is the empty union.
    /// - An unbound name that is not a superglobal reports
    ///   `UndefinedVariable` and is the empty union. Resolution continues.
    #[tracing::instrument(level = "trace", skip(self, node), fields(line = node.line))]
    pub fn variable_union_type(&mut self, node: &Node) -> UnionType {
        match node.child(0) {
            Some(Child::Node(name_node)) => match name_node.kind {
                NodeKind::Var | NodeKind::BinaryOp => UnionType::mixed(),
                _ => UnionType::empty(),
            },
            Some(leaf) => {
                let name = leaf.leaf_text().unwrap_or_default();
                self.lookup_variable(&name, node.line)
            }
            None => UnionType::empty(),
        }
    }

    fn lookup_variable(&mut self, name: &str, line: u32) -> UnionType {
        if let Some(bound) = self.context.scope().variable(name) {
            return bound.clone();
        }

        if self.is_superglobal(name) {
            tracing::trace!(name, "unbound superglobal");
            return UnionType::empty();
        }

        if self.options.report_undefined_variables {
            let file = self.context.file().to_string();
            self.report(Diagnostic::undefined_variable(file, line, name));
        }
        UnionType::empty()
    }

    /// Whether `name` is implicitly bound everywhere, counting the names
    /// configured in `ResolverOptions::extra_superglobals`.
    #[must_use]
    pub fn is_superglobal(&self, name: &str) -> bool {
        is_superglobal(name) || self.options.extra_superglobals.iter().any(|g| g == name)
    }

    /// Textual name of the variable a node chain refers to.
    ///
    /// Walks `children[0]` until it reaches a variable, static-variable, or
    /// magic-constant node, or a scalar leaf. Names that are not statically
    /// known (absent or computed) come back as the empty string. A chain
    /// deeper than `max_name_chain_depth` fails with
    /// [`ResolveError::MalformedNameChain`].
    pub fn variable_name(&self, expr: &Child) -> Result<String, ResolveError> {
        let mut current = match expr {
            Child::Node(node) => node.as_ref(),
            leaf => return Ok(leaf.leaf_text().unwrap_or_default().into_owned()),
        };

        let mut depth = 0;
        while !current.kind.is_variable_like() {
            depth += 1;
            if depth > self.options.max_name_chain_depth {
                return Err(ResolveError::MalformedNameChain {
                    depth: self.options.max_name_chain_depth,
                    line: current.line,
                });
            }
            match current.child(0) {
                Some(Child::Node(next)) => current = next.as_ref(),
                Some(leaf) => return Ok(leaf.leaf_text().unwrap_or_default().into_owned()),
                None => return Ok(String::new()),
            }
        }

        Ok(match current.child(0) {
            None | Some(Child::Node(_)) => String::new(),
            Some(leaf) => leaf.leaf_text().unwrap_or_default().into_owned(),
        })
    }

    /// [`Resolver::variable_name`], reporting a malformed chain as a
    /// diagnostic and yielding the empty name instead of failing.
    pub fn variable_name_or_empty(&mut self, expr: &Child) -> String {
        match self.variable_name(expr) {
            Ok(name) => name,
            Err(err @ ResolveError::MalformedNameChain { depth, line }) => {
                tracing::warn!(%err, "variable name chain rejected");
                let file = self.context.file().to_string();
                let depth = depth.to_string();
                self.report(Diagnostic::new(
                    DiagnosticKind::MalformedNameChain,
                    file,
                    line,
                    &[&depth],
                ));
                String::new()
            }
            Err(err) => {
                tracing::warn!(%err, "variable name unavailable");
                String::new()
            }
        }
    }
}

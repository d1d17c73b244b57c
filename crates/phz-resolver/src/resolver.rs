//! Resolver state and expression-level dispatch.
//!
//! The operations are split across files by concern:
//! - `resolver_names.rs`: fully-qualified name resolution
//! - `resolver_types.rs`: type-position nodes → union types
//! - `resolver_variables.rs`: variable types and variable names
//! - `class_name.rs`: the class-name strategy bridge

use crate::context::Context;
use crate::error::ResolveError;
use crate::options::ResolverOptions;
use phz_ast::{Child, Node, NodeKind};
use phz_common::{Diagnostic, DiagnosticSink};
use phz_types::UnionType;
use std::sync::LazyLock;

static DEFAULT_OPTIONS: LazyLock<ResolverOptions> = LazyLock::new(ResolverOptions::default);

/// Resolves names and types for nodes under one [`Context`].
///
/// The context is borrowed immutably; resolution never changes it. Every
/// diagnostic produced along the way is collected on the resolver and can be
/// taken or drained into a caller-owned [`DiagnosticSink`].
pub struct Resolver<'a> {
    pub(crate) context: &'a Context,
    pub(crate) options: &'a ResolverOptions,
    diagnostics: Vec<Diagnostic>,
}

impl<'a> Resolver<'a> {
    #[must_use]
    pub fn new(context: &'a Context) -> Self {
        Self::with_options(context, &DEFAULT_OPTIONS)
    }

    #[must_use]
    pub fn with_options(context: &'a Context, options: &'a ResolverOptions) -> Self {
        Self {
            context,
            options,
            diagnostics: Vec::new(),
        }
    }

    #[must_use]
    pub fn context(&self) -> &'a Context {
        self.context
    }

    #[must_use]
    pub fn options(&self) -> &'a ResolverOptions {
        self.options
    }

    // =========================================================================
    // Diagnostics
    // =========================================================================

    #[must_use]
    pub fn diagnostics(&self) -> &[Diagnostic] {
        &self.diagnostics
    }

    pub fn take_diagnostics(&mut self) -> Vec<Diagnostic> {
        std::mem::take(&mut self.diagnostics)
    }

    /// Move collected diagnostics into `sink`, oldest first.
    pub fn drain_diagnostics_into(&mut self, sink: &mut impl DiagnosticSink) {
        for diagnostic in self.diagnostics.drain(..) {
            sink.report(diagnostic);
        }
    }

    pub(crate) fn report(&mut self, diagnostic: Diagnostic) {
        tracing::debug!(
            code = diagnostic.code,
            file = %diagnostic.file,
            line = diagnostic.line,
            message = %diagnostic.message_text,
            "diagnostic"
        );
        self.diagnostics.push(diagnostic);
    }

    // =========================================================================
    // Expression dispatch
    // =========================================================================

    /// Union type of the value at an expression position.
    ///
    /// Scalar leaves map to their literal's native type. Node kinds the core
    /// does not infer (calls, property fetches, operators) yield the empty
    /// union.
    pub fn union_type_of_expression(&mut self, expr: &Child) -> Result<UnionType, ResolveError> {
        match expr {
            Child::Node(node) => self.union_type_of_node(node),
            Child::Str(_) => Ok(UnionType::from_type_name("string")),
            Child::Int(_) => Ok(UnionType::from_type_name("int")),
            Child::Float(_) => Ok(UnionType::from_type_name("float")),
        }
    }

    pub fn union_type_of_node(&mut self, node: &Node) -> Result<UnionType, ResolveError> {
        match node.kind {
            NodeKind::Var => Ok(self.variable_union_type(node)),
            NodeKind::Name => {
                let name = self.qualified_name(node)?;
                Ok(UnionType::from_type_name(&name))
            }
            NodeKind::Type | NodeKind::NullableType | NodeKind::TypeUnion => {
                self.union_type_from_type_node(node)
            }
            _ => Ok(UnionType::empty()),
        }
    }
}

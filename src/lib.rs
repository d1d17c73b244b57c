//! phz: name and type resolution core for a PHP static analyzer.
//!
//! This crate re-exports the workspace crates under one roof and carries the
//! process-level pieces: the tracing subscriber setup and JSON loading of
//! compilation-unit descriptions.
//!
//! ```
//! use phz::{AliasKind, Context, Resolver};
//! use phz::ast::{Node, name_flags::NAME_NOT_FQ};
//!
//! let ctx = Context::new("src/App/Kernel.php")
//!     .with_namespace("\\App")
//!     .with_alias(AliasKind::Class, "Foo", "\\Vendor\\Foo");
//! let mut resolver = Resolver::new(&ctx);
//!
//! let name = resolver.qualified_name(&Node::name("Foo\\Bar", NAME_NOT_FQ, 1));
//! assert_eq!(name.ok().as_deref(), Some("\\Vendor\\Foo\\Bar"));
//! ```

pub use phz_ast as ast;
pub use phz_common as common;
pub use phz_resolver as resolver;
pub use phz_types as types;

pub use phz_common::{Diagnostic, DiagnosticKind, DiagnosticSink};
pub use phz_resolver::{
    AliasKind, ClassNameStrategy, Context, KindDispatchStrategy, KnownClasses, Property,
    ResolveError, Resolver, ResolverOptions, Scope,
};
pub use phz_types::{UnionType, UnionTypeCache};

// Tracing subscriber setup, gated on PHZ_LOG / RUST_LOG
pub mod tracing_config;
pub use tracing_config::{TracingConfig, init_tracing};

// Compilation-unit descriptions loaded from JSON
pub mod unit;
pub use unit::{UnitDescriptor, UnitError};

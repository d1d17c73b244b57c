//! Name and type resolution core.
//!
//! Given an AST node and the [`Context`] it sits in, this crate answers two
//! questions: what fully-qualified name does a name node denote, and what
//! [`UnionType`](phz_types::UnionType) does a type or variable node denote.
//!
//! - [`context`]: namespace, aliases, enclosing class, and the qualification
//!   engine
//! - [`scope`]: variable bindings
//! - [`resolver`]: the [`Resolver`] and its operations, split by concern
//!   across `resolver_*.rs`
//! - [`class_name`]: the pluggable class-name strategy bridge
//! - [`property`]: the declared-type holder
//!
//! Structural problems with the AST are returned as [`ResolveError`]s.
//! Semantic findings (an undeclared variable) are collected as
//! [`Diagnostic`](phz_common::Diagnostic)s and resolution carries on.

pub mod class_name;
pub mod context;
pub mod error;
pub mod options;
pub mod property;
pub mod resolver;
mod resolver_names;
mod resolver_types;
mod resolver_variables;
pub mod scope;
pub mod superglobals;

pub use class_name::{ClassNameStrategy, KindDispatchStrategy, KnownClasses};
pub use context::{AliasKind, AliasMap, Context, NAMESPACE_SEPARATOR, ROOT_NAMESPACE};
pub use error::ResolveError;
pub use options::ResolverOptions;
pub use property::{Property, Visibility};
pub use resolver::Resolver;
pub use scope::Scope;
pub use superglobals::{SUPERGLOBALS, is_superglobal};

//! Union types for the phz resolution core.
//!
//! A [`UnionType`] is the set of static types an expression, property, or
//! variable may hold. Its textual `|`-joined form is the interchange format
//! with the rest of the analyzer and round-trips exactly.
//!
//! - [`native`]: the fixed vocabulary of built-in type names
//! - [`union_type`]: the set model and its textual grammar
//! - [`cache`]: a thread-safe memo of parsed union types

pub mod cache;
pub mod native;
pub mod union_type;

pub use cache::UnionTypeCache;
pub use native::{NATIVE_TYPE_NAMES, is_native_type_name};
pub use union_type::UnionType;

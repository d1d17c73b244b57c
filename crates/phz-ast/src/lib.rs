//! AST node contract for the phz resolution core.
//!
//! The parser lives outside this workspace. What it hands over is a tree of
//! [`Node`]s, each with a closed [`NodeKind`], a kind-dependent `flags`
//! bitfield, a source line, and an ordered list of optional children. A child
//! is either another node or a scalar leaf (string, integer, float).
//!
//! The contract is `serde`-(de)serializable so a parser running in another
//! process can ship trees as JSON.

pub mod flags;
pub mod node;

pub use flags::{ModifierFlags, modifier_flags, name_flags, type_flags};
pub use node::{Child, Node, NodeKind};

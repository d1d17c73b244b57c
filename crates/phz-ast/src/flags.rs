//! Flag values carried on AST nodes.
//!
//! The meaning of `Node::flags` depends on the node's kind. Name nodes use
//! [`name_flags`], type-keyword nodes carry one of the [`type_flags`] codes,
//! and declaration nodes carry [`modifier_flags`] bits.

use bitflags::bitflags;

/// Flags on `NodeKind::Name` nodes.
pub mod name_flags {
    /// The name was written without a leading `\` and must be resolved
    /// against the current namespace and `use` aliases.
    pub const NAME_NOT_FQ: u32 = 1 << 0;
}

/// Type codes on `NodeKind::Type` nodes.
///
/// These are values, not bits: a type-keyword node carries exactly one.
pub mod type_flags {
    pub const TYPE_NULL: u32 = 1;
    pub const TYPE_FALSE: u32 = 2;
    pub const TYPE_TRUE: u32 = 3;
    pub const TYPE_LONG: u32 = 4;
    pub const TYPE_DOUBLE: u32 = 5;
    pub const TYPE_STRING: u32 = 6;
    pub const TYPE_ARRAY: u32 = 7;
    pub const TYPE_OBJECT: u32 = 8;
    pub const TYPE_CALLABLE: u32 = 12;
    pub const TYPE_ITERABLE: u32 = 13;
    pub const TYPE_VOID: u32 = 14;
    pub const TYPE_STATIC: u32 = 15;
    pub const TYPE_MIXED: u32 = 16;
    pub const TYPE_NEVER: u32 = 17;
    pub const TYPE_BOOL: u32 = 18;

    /// Map a type-keyword code to the native type it spells.
    #[must_use]
    pub const fn keyword_name(code: u32) -> Option<&'static str> {
        Some(match code {
            TYPE_NULL => "null",
            TYPE_FALSE => "false",
            TYPE_TRUE => "true",
            TYPE_LONG => "int",
            TYPE_DOUBLE => "float",
            TYPE_STRING => "string",
            TYPE_ARRAY => "array",
            TYPE_OBJECT => "object",
            TYPE_CALLABLE => "callable",
            TYPE_ITERABLE => "iterable",
            TYPE_VOID => "void",
            TYPE_STATIC => "static",
            TYPE_MIXED => "mixed",
            TYPE_NEVER => "never",
            TYPE_BOOL => "bool",
            _ => return None,
        })
    }
}

/// Modifier bits on class-member declaration nodes.
pub mod modifier_flags {
    pub const MODIFIER_PUBLIC: u32 = 1 << 0;
    pub const MODIFIER_PROTECTED: u32 = 1 << 1;
    pub const MODIFIER_PRIVATE: u32 = 1 << 2;
    pub const MODIFIER_STATIC: u32 = 1 << 4;
    pub const MODIFIER_FINAL: u32 = 1 << 5;
    pub const MODIFIER_ABSTRACT: u32 = 1 << 6;
    pub const MODIFIER_READONLY: u32 = 1 << 7;
}

bitflags! {
    /// Typed view over [`modifier_flags`] bits.
    ///
    /// Unknown bits are preserved by the raw `flags` field on the node; this
    /// view only exposes the ones the core understands.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
    pub struct ModifierFlags: u32 {
        const PUBLIC = modifier_flags::MODIFIER_PUBLIC;
        const PROTECTED = modifier_flags::MODIFIER_PROTECTED;
        const PRIVATE = modifier_flags::MODIFIER_PRIVATE;
        const STATIC = modifier_flags::MODIFIER_STATIC;
        const FINAL = modifier_flags::MODIFIER_FINAL;
        const ABSTRACT = modifier_flags::MODIFIER_ABSTRACT;
        const READONLY = modifier_flags::MODIFIER_READONLY;
    }
}

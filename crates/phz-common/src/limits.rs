//! Centralized limits and thresholds for the resolution core.
//!
//! Every bounded walk and pre-sized collection reads its limit from here so
//! that tuning happens in one place.

// =============================================================================
// Walk Depth Limits
// =============================================================================

/// Maximum number of `children[0]` hops taken while extracting a variable
/// name from a node chain.
///
/// Parser output is finite and acyclic, so real chains are short (a handful
/// of wrapper nodes at most). Synthetic or malformed trees that go deeper
/// fail with `MalformedNameChain` instead of walking indefinitely.
///
/// # PHP example
///
/// ```php
/// global $$$$name;   // each `$` adds one wrapper node
/// static $counter;   // static-variable node wraps a plain variable
/// ```
pub const MAX_NAME_CHAIN_DEPTH: usize = 64;

// =============================================================================
// Capacity Limits
// =============================================================================

/// Initial capacity of a shared union-type parse cache.
///
/// Most compilation units mention a few hundred distinct type strings;
/// starting at this size avoids rehashing during the first traversal.
pub const UNION_TYPE_CACHE_CAPACITY: usize = 512;

/// Number of distinct texts a union-type parse cache stores before it stops
/// growing.
pub const UNION_TYPE_CACHE_MAX_ENTRIES: usize = 65_536;

/// Initial capacity of a freshly created variable scope.
pub const SCOPE_INITIAL_CAPACITY: usize = 8;

//! Core constants and type definitions for prefix-radix.

/// Sentinel value for empty/null arena index.
///
/// Used to indicate:
/// - Missing left/right child in a radix node
/// - Empty root in a tree that holds no node
/// - Index space limit of the node arena
pub const EMPTY: u32 = u32::MAX;

/// Key width of an IPv4 prefix tree.
pub const IPV4_BITS: u8 = 32;

/// Key width of an IPv6 prefix tree.
pub const IPV6_BITS: u8 = 128;

/// Default capacity hint of the explicit traversal stacks.
///
/// Traversal stacks never hold more than one pending sibling per tree
/// level, so the IPv4 width covers the common case without regrowth.
pub const DEFAULT_STACK_CAPACITY: usize = 32;

/// Minimum number of slots reserved when a buffer grows.
pub const ARRAY_GROWTH_STEP: usize = 8;

//! Binary radix node.

use crate::constants::EMPTY;

/// Node of a binary radix tree.
///
/// A node at depth `d` stands for the `d`-bit prefix spelled by the edges
/// taken from the root. It may hold a value (the prefix is stored) or only
/// lead to deeper stored prefixes.
///
/// # Memory Layout
/// - `children`: 8 bytes (2 × u32 arena indices)
/// - `value`: `Option<V>`
///
/// # Invariant
/// Outside of a running insert/remove, every node reachable from the root
/// has a value or at least one child.
#[derive(Debug, Clone)]
pub struct Node<V> {
    /// Arena indices of the children.
    ///
    /// `children[0]` follows a 0 bit (left), `children[1]` a 1 bit (right),
    /// `EMPTY` (u32::MAX) if no child exists.
    pub children: [u32; 2],

    /// Value stored for this node's prefix, if any.
    pub value: Option<V>,
}

impl<V> Node<V> {
    /// Create a new empty node.
    #[inline]
    pub const fn new() -> Self {
        Node {
            children: [EMPTY; 2],
            value: None,
        }
    }
}

impl<V> Default for Node<V> {
    fn default() -> Self {
        Self::new()
    }
}

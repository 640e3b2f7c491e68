//! Basic child operations for Node.

use crate::constants::EMPTY;
use crate::trie::Node;

impl<V> Node<V> {
    /// Check if child exists on the given edge.
    ///
    /// # Arguments
    /// * `bit` - `false` for the left (0) edge, `true` for the right (1) edge
    #[inline(always)]
    pub fn has_child(&self, bit: bool) -> bool {
        self.children[bit as usize] != EMPTY
    }

    /// Get child index on the given edge.
    ///
    /// # Returns
    /// Arena index of child, or `EMPTY` (u32::MAX) if no child exists
    #[inline(always)]
    pub fn get_child(&self, bit: bool) -> u32 {
        self.children[bit as usize]
    }

    /// Set child on the given edge.
    #[inline(always)]
    pub fn set_child(&mut self, bit: bool, child_idx: u32) {
        self.children[bit as usize] = child_idx;
    }

    /// Clear child on the given edge.
    #[inline]
    pub fn clear_child(&mut self, bit: bool) {
        self.children[bit as usize] = EMPTY;
    }

    /// Check if node has no child on either edge.
    #[inline(always)]
    pub fn is_leaf(&self) -> bool {
        !self.has_child(false) && !self.has_child(true)
    }

    /// Check if node has neither child nor value.
    ///
    /// Such a node must not stay reachable once an update completes.
    #[inline(always)]
    pub fn is_vacant(&self) -> bool {
        self.is_leaf() && self.value.is_none()
    }
}

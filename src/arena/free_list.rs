//! Free slot tracking for arena reuse.

use crate::stack::Stack;

/// LIFO list of released arena slots.
///
/// The most recently released slot is reused first, which keeps hot
/// slots in cache during remove/insert churn.
#[derive(Debug, Clone, Default)]
pub struct FreeList {
    slots: Stack<u32>,
}

impl FreeList {
    /// Create an empty free list.
    pub fn new() -> Self {
        FreeList {
            slots: Stack::with_capacity(0),
        }
    }

    /// Record `index` as available.
    #[inline]
    pub fn release(&mut self, index: u32) {
        self.slots.push(index);
    }

    /// Take the most recently released slot, if any.
    #[inline]
    pub fn acquire(&mut self) -> Option<u32> {
        self.slots.pop()
    }

    /// Number of released slots waiting for reuse.
    #[inline]
    pub fn len(&self) -> usize {
        self.slots.depth()
    }

    pub fn clear(&mut self) {
        self.slots.clear();
    }
}

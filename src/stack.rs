//! Bounded-growth LIFO stack used by the tree's iterative algorithms.

use alloc::vec::Vec;

use crate::memory;

/// Last-in first-out stack.
///
/// Backs the explicit descent/ascent bookkeeping of the radix tree so that
/// traversal depth never depends on the call stack.
///
/// # Performance
/// - Push: O(1) amortized, growth through [`memory::reserve`]
/// - Pop: O(1)
#[derive(Debug, Clone)]
pub struct Stack<T> {
    items: Vec<T>,
}

impl<T> Stack<T> {
    /// Create an empty stack with room for `capacity` items.
    ///
    /// The hint is not a bound: the stack grows past it when needed.
    pub fn with_capacity(capacity: usize) -> Self {
        Stack {
            items: memory::with_capacity(capacity),
        }
    }

    /// Push an item on top of the stack.
    #[inline]
    pub fn push(&mut self, item: T) {
        memory::push(&mut self.items, item);
    }

    /// Remove and return the top item, or `None` if the stack is empty.
    #[inline]
    pub fn pop(&mut self) -> Option<T> {
        self.items.pop()
    }

    /// Top item without removing it.
    #[inline]
    pub fn peek(&self) -> Option<&T> {
        self.items.last()
    }

    /// Number of items on the stack.
    #[inline]
    pub fn depth(&self) -> usize {
        self.items.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Drop every item, keeping the allocation.
    pub fn clear(&mut self) {
        self.items.clear();
    }
}

impl<T> Default for Stack<T> {
    fn default() -> Self {
        Self::with_capacity(crate::constants::DEFAULT_STACK_CAPACITY)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lifo_order() {
        let mut stack = Stack::with_capacity(2);
        stack.push(1);
        stack.push(2);
        stack.push(3); // grows past the hint

        assert_eq!(stack.depth(), 3);
        assert_eq!(stack.peek(), Some(&3));
        assert_eq!(stack.pop(), Some(3));
        assert_eq!(stack.pop(), Some(2));
        assert_eq!(stack.pop(), Some(1));
        assert_eq!(stack.pop(), None);
        assert!(stack.is_empty());
    }

    #[test]
    fn test_clear() {
        let mut stack: Stack<u8> = Stack::default();
        for i in 0..40 {
            stack.push(i);
        }
        assert_eq!(stack.depth(), 40);
        stack.clear();
        assert_eq!(stack.depth(), 0);
        assert_eq!(stack.peek(), None);
    }
}

//! Arena structure for radix node storage

use alloc::alloc::Layout;
use alloc::vec::Vec;
use core::mem;

use super::FreeList;
use crate::constants::EMPTY;
use crate::memory;

/// Generic arena for storing tree elements.
///
/// Provides contiguous storage with O(1) access by index and slot reuse
/// through a [`FreeList`].
///
/// # Type Parameters
/// * `T` - Element type; `T::default()` is the content of a released slot
///
/// # Memory Layout
/// - Elements stored contiguously in Vec
/// - Index-based access (u32 indices, `EMPTY` is never handed out)
/// - Released slots are reset to `T::default()` and queued for reuse
///
/// # Performance
/// - Allocation: O(1) amortized
/// - Release: O(1)
/// - Access: O(1) by index
#[derive(Debug, Clone)]
pub struct Arena<T> {
    /// Storage for elements.
    ///
    /// Index in this Vec is the arena index used for references.
    elements: Vec<T>,

    /// Slots released since they were last allocated.
    free: FreeList,
}

impl<T: Default> Arena<T> {
    /// Create a new empty arena.
    #[inline]
    pub fn new() -> Self {
        Arena {
            elements: Vec::new(),
            free: FreeList::new(),
        }
    }

    /// Create arena with pre-allocated capacity.
    ///
    /// # Arguments
    /// * `capacity` - Number of elements to pre-allocate
    #[inline]
    pub fn with_capacity(capacity: usize) -> Self {
        Arena {
            elements: memory::with_capacity(capacity),
            free: FreeList::new(),
        }
    }

    /// Store `value` and return its slot index.
    ///
    /// Reuses the most recently released slot when one exists.
    ///
    /// # Performance
    /// O(1) amortized - free list pop or Vec push
    #[inline]
    pub fn alloc(&mut self, value: T) -> u32 {
        if let Some(index) = self.free.acquire() {
            self.elements[index as usize] = value;
            return index;
        }

        let index = self.elements.len();
        if index >= EMPTY as usize {
            // Index space exhausted: same fate as a failed allocation
            memory::fatal(Layout::new::<T>());
        }
        memory::push(&mut self.elements, value);
        index as u32
    }

    /// Release the slot at `index` and return its content.
    ///
    /// The slot is reset to `T::default()` until reallocated. The caller
    /// must drop every reference to `index` held elsewhere.
    ///
    /// # Panics
    /// Panics if index is out of bounds
    #[inline]
    pub fn release(&mut self, index: u32) -> T {
        let value = mem::take(&mut self.elements[index as usize]);
        self.free.release(index);
        value
    }

    /// Drop every element and forget released slots.
    pub fn clear(&mut self) {
        self.elements.clear();
        self.free.clear();
    }
}

impl<T> Arena<T> {
    /// Get element by index.
    ///
    /// # Panics
    /// Panics if index is out of bounds
    #[inline(always)]
    pub fn get(&self, index: u32) -> &T {
        &self.elements[index as usize]
    }

    /// Get mutable element by index.
    ///
    /// # Panics
    /// Panics if index is out of bounds
    #[inline(always)]
    pub fn get_mut(&mut self, index: u32) -> &mut T {
        &mut self.elements[index as usize]
    }

    /// Number of slots ever allocated (live + released).
    #[inline(always)]
    pub fn len(&self) -> usize {
        self.elements.len()
    }

    /// Number of slots currently holding a live element.
    #[inline(always)]
    pub fn live(&self) -> usize {
        self.len() - self.free.len()
    }

    /// Check if arena has no live element.
    #[inline(always)]
    pub fn is_empty(&self) -> bool {
        self.live() == 0
    }
}

impl<T: Default> Default for Arena<T> {
    fn default() -> Self {
        Self::new()
    }
}

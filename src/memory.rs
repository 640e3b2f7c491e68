//! Heap growth with a single non-recoverable failure path.
//!
//! Every buffer in the crate grows through [`reserve`]. Growth is
//! amortized by `Vec::try_reserve`; when the allocator refuses, a fatal
//! diagnostic is logged and the process aborts through
//! `handle_alloc_error`, so callers never see an allocation error.

use alloc::alloc::{handle_alloc_error, Layout};
use alloc::vec::Vec;

use crate::constants::ARRAY_GROWTH_STEP;

/// Ensure room for `additional` more elements in `vec`.
///
/// # Arguments
/// * `vec` - Buffer to grow
/// * `additional` - Number of elements that must fit after `vec.len()`
///
/// # Performance
/// O(1) amortized - no-op while spare capacity remains
#[inline]
pub fn reserve<T>(vec: &mut Vec<T>, additional: usize) {
    if vec.capacity() - vec.len() >= additional {
        return;
    }
    if vec.try_reserve(additional.max(ARRAY_GROWTH_STEP)).is_err() {
        let wanted = vec.len().saturating_add(additional);
        let layout = Layout::array::<T>(wanted).unwrap_or_else(|_| Layout::new::<T>());
        fatal(layout);
    }
}

/// Push `value` onto `vec`, growing through [`reserve`].
#[inline]
pub fn push<T>(vec: &mut Vec<T>, value: T) {
    reserve(vec, 1);
    vec.push(value);
}

/// Insert `value` at `index`, growing through [`reserve`].
///
/// # Panics
/// Panics if `index > vec.len()`; callers check bounds first.
#[inline]
pub fn insert<T>(vec: &mut Vec<T>, index: usize, value: T) {
    reserve(vec, 1);
    vec.insert(index, value);
}

/// Allocate an empty buffer with room for `capacity` elements.
pub fn with_capacity<T>(capacity: usize) -> Vec<T> {
    let mut vec = Vec::new();
    reserve(&mut vec, capacity);
    vec
}

/// Report an allocation failure and abort.
///
/// This is the only exit for out-of-memory conditions; it never returns.
#[cold]
#[inline(never)]
pub fn fatal(layout: Layout) -> ! {
    log::error!(
        "memory allocation failed ({} bytes, align {})",
        layout.size(),
        layout.align()
    );
    handle_alloc_error(layout)
}

//! Enumerator over array elements.

use crate::enumerator::Enumerator;

/// Lazy enumerator over an [`Array`](super::Array), index 0 first.
///
/// Holds a shared borrow of the array, so the array cannot be modified
/// while the enumerator is alive.
///
/// # Example
/// ```rust
/// use prefix_radix::{Array, Enumerator};
///
/// let array = Array::from(vec![1, 2, 3]);
/// let mut e = array.get_enum();
/// let mut sum = 0;
/// while e.has_next() {
///     sum += e.get_next().copied().unwrap_or(0);
/// }
/// assert_eq!(sum, 6);
/// ```
#[derive(Debug, Clone)]
pub struct ArrayEnum<'a, T> {
    elements: &'a [T],

    /// Index of the next element to yield.
    position: usize,
}

impl<'a, T> ArrayEnum<'a, T> {
    pub(crate) fn new(elements: &'a [T]) -> Self {
        ArrayEnum {
            elements,
            position: 0,
        }
    }

    /// Number of elements not yet yielded.
    #[inline]
    pub fn remaining(&self) -> usize {
        self.elements.len() - self.position
    }
}

impl<'a, T> Enumerator for ArrayEnum<'a, T> {
    type Item = &'a T;

    #[inline]
    fn has_next(&mut self) -> bool {
        self.position < self.elements.len()
    }

    #[inline]
    fn get_next(&mut self) -> Option<&'a T> {
        let item = self.elements.get(self.position)?;
        self.position += 1;
        Some(item)
    }
}

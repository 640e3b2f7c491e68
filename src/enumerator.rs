//! Lazy, forward-only traversal shared by arrays and radix trees.
//!
//! An [`Enumerator`] is pulled one element at a time and keeps its own
//! cursor, so a traversal can stop and resume between calls without
//! materializing the full sequence. Any structural mutation of the source
//! container ends the borrow the enumerator holds, so an enumerator can
//! never observe a container that changed under it.

use alloc::boxed::Box;

/// One-pass sequence with explicit look-ahead.
///
/// # Contract
/// - `has_next` may be called any number of times; it does not consume.
/// - `get_next` returns the next element, or `None` once exhausted.
/// - `destroy` releases the cursor state; dropping has the same effect.
pub trait Enumerator {
    /// Element type yielded by the enumerator.
    type Item;

    /// Check whether another element is available.
    fn has_next(&mut self) -> bool;

    /// Return the next element and advance the cursor.
    fn get_next(&mut self) -> Option<Self::Item>;

    /// Release the enumerator.
    fn destroy(self)
    where
        Self: Sized,
    {
    }

    /// Adapt the enumerator into a standard [`Iterator`].
    fn iter(self) -> EnumIter<Self>
    where
        Self: Sized,
    {
        EnumIter { inner: self }
    }
}

/// Trait-object form for callers that mix enumerator sources.
pub type BoxEnumerator<'a, T> = Box<dyn Enumerator<Item = T> + 'a>;

impl<E: Enumerator + ?Sized> Enumerator for Box<E> {
    type Item = E::Item;

    #[inline]
    fn has_next(&mut self) -> bool {
        (**self).has_next()
    }

    #[inline]
    fn get_next(&mut self) -> Option<Self::Item> {
        (**self).get_next()
    }
}

/// [`Iterator`] adapter over an [`Enumerator`].
#[derive(Debug)]
pub struct EnumIter<E> {
    inner: E,
}

impl<E: Enumerator> EnumIter<E> {
    /// Recover the wrapped enumerator.
    pub fn into_inner(self) -> E {
        self.inner
    }
}

impl<E: Enumerator> Iterator for EnumIter<E> {
    type Item = E::Item;

    #[inline]
    fn next(&mut self) -> Option<Self::Item> {
        self.inner.get_next()
    }
}

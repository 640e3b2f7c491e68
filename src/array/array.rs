//! Growable array with optional sorted/unique insertion policy.

use alloc::rc::Rc;
use alloc::vec::Vec;
use core::cmp::Ordering;
use core::fmt;
use core::mem::size_of;
use core::slice;

use super::{ArrayEnum, ArrayOptions};
use crate::error::{Error, Result};
use crate::memory;

/// Three-way comparison used by sorted arrays.
pub type Comparator<T> = Rc<dyn Fn(&T, &T) -> Ordering>;

/// Per-element destroy callback, run on removal, overwrite and drop.
///
/// Any context the callback needs is captured by the closure.
pub type Destructor<T> = Rc<dyn Fn(T)>;

/// Contiguous growable sequence.
///
/// Behaves as a plain vector unless created with [`ArrayOptions::SORTED`],
/// in which case [`Array::add`] keeps the elements in ascending comparator
/// order, and [`ArrayOptions::UNIQUE`] additionally rejects values that
/// compare equal to a stored element.
///
/// # Ordering of ties
/// In a sorted array without `UNIQUE`, a value comparing equal to stored
/// elements is inserted after the last of them. [`Array::sorted_find_index`]
/// reports the first equal element on a hit and the insertion point on a
/// miss.
///
/// # Caller contracts
/// [`Array::set_at`], [`Array::insert_at`], [`Array::append`] and
/// [`Array::add_array`] write positions directly and do not maintain order.
/// Use [`Array::add`] on sorted arrays.
///
/// # Example
/// ```rust
/// use prefix_radix::{Array, ArrayOptions, Error};
///
/// let mut set = Array::<u32>::sorted(ArrayOptions::SORTED | ArrayOptions::UNIQUE);
/// assert_eq!(set.add(30), Ok(0));
/// assert_eq!(set.add(10), Ok(0));
/// assert_eq!(set.add(20), Ok(1));
/// assert_eq!(set.add(20), Err(Error::DuplicateValue { index: 1 }));
/// assert_eq!(set.as_slice(), &[10, 20, 30]);
/// ```
pub struct Array<T> {
    /// Occupied slots; `data.capacity()` is the allocated capacity.
    data: Vec<T>,

    options: ArrayOptions,

    /// Ordering used by `add` and `sorted_find_index`.
    cmp: Option<Comparator<T>>,

    destroy: Option<Destructor<T>>,
}

impl<T> Array<T> {
    /// Create an empty unsorted array.
    pub fn new() -> Self {
        Array {
            data: Vec::new(),
            options: ArrayOptions::NONE,
            cmp: None,
            destroy: None,
        }
    }

    /// Create an empty array ordered by `cmp`.
    ///
    /// `options` decides whether `add` keeps order and rejects duplicates;
    /// without [`ArrayOptions::SORTED`] the comparator is only used by
    /// [`Array::sorted_find_index`].
    pub fn with_comparator<F>(options: ArrayOptions, cmp: F) -> Self
    where
        F: Fn(&T, &T) -> Ordering + 'static,
    {
        Array {
            data: Vec::new(),
            options,
            cmp: Some(Rc::new(cmp)),
            destroy: None,
        }
    }

    /// Create an empty array ordered by `T`'s natural order.
    pub fn sorted(options: ArrayOptions) -> Self
    where
        T: Ord + 'static,
    {
        Self::with_comparator(options, T::cmp)
    }

    /// Create an array of `initial_length` default-valued elements.
    ///
    /// # Arguments
    /// * `initial_length` - Number of slots to populate with `T::default()`
    /// * `options` - Sorted/unique policy
    /// * `cmp` - Comparator, required for sorted behavior
    /// * `destroy` - Callback run on every element leaving the array
    ///
    /// `SORTED` without a comparator degrades to append behavior.
    pub fn create(
        initial_length: usize,
        options: ArrayOptions,
        cmp: Option<Comparator<T>>,
        destroy: Option<Destructor<T>>,
    ) -> Self
    where
        T: Default,
    {
        let mut data = memory::with_capacity(initial_length);
        data.resize_with(initial_length, T::default);
        Array {
            data,
            options,
            cmp,
            destroy,
        }
    }

    /// Install or replace the destroy callback.
    pub fn set_destroy(&mut self, destroy: Option<Destructor<T>>) {
        self.destroy = destroy;
    }

    /// Size in bytes of one element slot.
    #[inline(always)]
    pub const fn element_size(&self) -> usize {
        size_of::<T>()
    }

    #[inline(always)]
    pub fn len(&self) -> usize {
        self.data.len()
    }

    #[inline(always)]
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// Allocated capacity in elements (always `>= len()`).
    #[inline(always)]
    pub fn capacity(&self) -> usize {
        self.data.capacity()
    }

    #[inline(always)]
    pub fn options(&self) -> ArrayOptions {
        self.options
    }

    #[inline(always)]
    pub fn as_slice(&self) -> &[T] {
        &self.data
    }

    #[inline]
    pub fn iter(&self) -> slice::Iter<'_, T> {
        self.data.iter()
    }

    #[inline]
    pub fn get(&self, index: usize) -> Option<&T> {
        self.data.get(index)
    }

    /// Get the element at `index`.
    ///
    /// # Errors
    /// [`Error::IndexOutOfBounds`] if `index >= len()`.
    #[inline]
    pub fn get_at(&self, index: usize) -> Result<&T> {
        self.data.get(index).ok_or(Error::IndexOutOfBounds {
            index,
            len: self.data.len(),
        })
    }

    /// Overwrite the element at `index`, destroying the previous value.
    ///
    /// Must not be used on sorted arrays: the new value is not reordered.
    ///
    /// # Errors
    /// [`Error::IndexOutOfBounds`] if `index >= len()`.
    pub fn set_at(&mut self, index: usize, value: T) -> Result<usize> {
        let len = self.data.len();
        let slot = self
            .data
            .get_mut(index)
            .ok_or(Error::IndexOutOfBounds { index, len })?;
        let old = core::mem::replace(slot, value);
        self.discard(old);
        Ok(index)
    }

    /// Locate `value` with a binary search.
    ///
    /// # Returns
    /// * `(true, i)` - `i` is the first element comparing equal
    /// * `(false, i)` - `i` is where `value` must be inserted to keep order
    ///
    /// Without a comparator the array has no order: the result is always
    /// a miss at `len()`, the append position.
    ///
    /// # Performance
    /// O(log n) comparisons
    pub fn sorted_find_index(&self, value: &T) -> (bool, usize) {
        let Some(cmp) = self.cmp.as_deref() else {
            return (false, self.data.len());
        };
        let index = self
            .data
            .partition_point(|elem| cmp(elem, value) == Ordering::Less);
        let found = self
            .data
            .get(index)
            .is_some_and(|elem| cmp(elem, value) == Ordering::Equal);
        (found, index)
    }

    /// Same search as [`Array::sorted_find_index`], shaped like
    /// `slice::binary_search`: `Ok(index)` on a hit, `Err(insertion)` on a miss.
    pub fn index_of(&self, value: &T) -> core::result::Result<usize, usize> {
        match self.sorted_find_index(value) {
            (true, index) => Ok(index),
            (false, index) => Err(index),
        }
    }

    /// Add a value according to the array's policy.
    ///
    /// - Sorted: inserted at its ordered position, after any equal elements
    /// - Sorted + unique: rejected if an equal element exists
    /// - Otherwise: appended
    ///
    /// # Returns
    /// Index at which the value now lives.
    ///
    /// # Errors
    /// [`Error::DuplicateValue`] with the index of the equal element; the
    /// array is left unchanged and `value` is dropped.
    pub fn add(&mut self, value: T) -> Result<usize> {
        let cmp = match self.cmp.as_deref() {
            Some(cmp) if self.options.is_sorted() => cmp,
            _ => return Ok(self.append(value)),
        };

        let lower = self
            .data
            .partition_point(|elem| cmp(elem, &value) == Ordering::Less);
        let upper = lower
            + self.data[lower..].partition_point(|elem| cmp(elem, &value) != Ordering::Greater);

        if upper > lower && self.options.is_unique() {
            return Err(Error::DuplicateValue { index: lower });
        }

        memory::insert(&mut self.data, upper, value);
        Ok(upper)
    }

    /// Append a value at the logical end.
    ///
    /// # Performance
    /// O(1) amortized
    #[inline]
    pub fn append(&mut self, value: T) -> usize {
        memory::push(&mut self.data, value);
        self.data.len() - 1
    }

    /// Insert a value at `index`, shifting later elements right.
    ///
    /// Ignores the sort policy.
    ///
    /// # Errors
    /// [`Error::IndexOutOfBounds`] if `index > len()`.
    pub fn insert_at(&mut self, index: usize, value: T) -> Result<usize> {
        let len = self.data.len();
        if index > len {
            return Err(Error::IndexOutOfBounds { index, len });
        }
        memory::insert(&mut self.data, index, value);
        Ok(index)
    }

    /// Remove the element at `index`, destroying it.
    ///
    /// # Errors
    /// [`Error::IndexOutOfBounds`] if `index >= len()`.
    pub fn remove_at(&mut self, index: usize) -> Result<()> {
        let len = self.data.len();
        if index >= len {
            return Err(Error::IndexOutOfBounds { index, len });
        }
        let old = self.data.remove(index);
        self.discard(old);
        Ok(())
    }

    /// Truncate to at most `max_length` elements, destroying the tail.
    pub fn trim(&mut self, max_length: usize) {
        if max_length >= self.data.len() {
            return;
        }
        for old in self.data.drain(max_length..) {
            if let Some(destroy) = &self.destroy {
                destroy(old);
            }
        }
    }

    /// Resize to exactly `length`, filling with `T::default()` or
    /// destroying the removed tail.
    pub fn set_length(&mut self, length: usize)
    where
        T: Default,
    {
        if length <= self.data.len() {
            self.trim(length);
        } else {
            let extra = length - self.data.len();
            memory::reserve(&mut self.data, extra);
            self.data.resize_with(length, T::default);
        }
    }

    /// Sort in place with `cmp` (not stable).
    pub fn sort<F>(&mut self, cmp: F)
    where
        F: FnMut(&T, &T) -> Ordering,
    {
        self.data.sort_unstable_by(cmp);
    }

    /// Copy the closed range `[first, last]` into a new array.
    ///
    /// The new array shares the comparator, options and destroy callback.
    ///
    /// # Errors
    /// [`Error::InvalidRange`] if `first > last` or `last >= len()`.
    pub fn sub(&self, first: usize, last: usize) -> Result<Array<T>>
    where
        T: Clone,
    {
        let len = self.data.len();
        if first > last || last >= len {
            return Err(Error::InvalidRange { first, last, len });
        }
        let mut data = memory::with_capacity(last - first + 1);
        data.extend_from_slice(&self.data[first..=last]);
        Ok(self.with_data(data))
    }

    /// Append every element of `other`, in order.
    ///
    /// Ignores the sort policy.
    pub fn add_array(&mut self, other: &Array<T>)
    where
        T: Clone,
    {
        memory::reserve(&mut self.data, other.len());
        self.data.extend_from_slice(&other.data);
    }

    /// Element-wise copy sharing comparator, options and destroy callback.
    pub fn copy(&self) -> Array<T>
    where
        T: Clone,
    {
        let mut data = memory::with_capacity(self.data.len());
        data.extend_from_slice(&self.data);
        self.with_data(data)
    }

    /// Visit every element in index order.
    ///
    /// Stops at the first error returned by `f` and propagates it.
    pub fn for_each<E, F>(&self, mut f: F) -> core::result::Result<(), E>
    where
        F: FnMut(&T) -> core::result::Result<(), E>,
    {
        self.data.iter().try_for_each(|elem| f(elem))
    }

    /// Lazy enumerator over the elements, index 0 first.
    pub fn get_enum(&self) -> ArrayEnum<'_, T> {
        ArrayEnum::new(&self.data)
    }

    fn with_data(&self, data: Vec<T>) -> Array<T> {
        Array {
            data,
            options: self.options,
            cmp: self.cmp.clone(),
            destroy: self.destroy.clone(),
        }
    }

    #[inline]
    fn discard(&self, value: T) {
        if let Some(destroy) = &self.destroy {
            destroy(value);
        }
    }
}

impl<T> Default for Array<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Drop for Array<T> {
    fn drop(&mut self) {
        if let Some(destroy) = self.destroy.take() {
            for value in self.data.drain(..) {
                destroy(value);
            }
        }
    }
}

impl<T: Clone> Clone for Array<T> {
    fn clone(&self) -> Self {
        self.copy()
    }
}

impl<T> From<Vec<T>> for Array<T> {
    fn from(data: Vec<T>) -> Self {
        Array {
            data,
            options: ArrayOptions::NONE,
            cmp: None,
            destroy: None,
        }
    }
}

impl<'a, T> IntoIterator for &'a Array<T> {
    type Item = &'a T;
    type IntoIter = slice::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.data.iter()
    }
}

impl<T: fmt::Debug> fmt::Debug for Array<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Array")
            .field("options", &self.options)
            .field("data", &self.data)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::vec;
    use core::cell::RefCell;

    fn destroy_log(log: &Rc<RefCell<Vec<u32>>>) -> Destructor<u32> {
        let log = Rc::clone(log);
        Rc::new(move |v: u32| log.borrow_mut().push(v))
    }

    #[test]
    fn test_create_zero_filled() {
        let array = Array::<u64>::create(4, ArrayOptions::NONE, None, None);
        assert_eq!(array.len(), 4);
        assert!(array.capacity() >= 4);
        assert_eq!(array.as_slice(), &[0, 0, 0, 0]);
        assert_eq!(array.element_size(), 8);
    }

    #[test]
    fn test_get_set_bounds() {
        let mut array = Array::<u32>::create(2, ArrayOptions::NONE, None, None);
        assert_eq!(array.set_at(1, 7), Ok(1));
        assert_eq!(array.get_at(1), Ok(&7));
        assert_eq!(
            array.get_at(2),
            Err(Error::IndexOutOfBounds { index: 2, len: 2 })
        );
        assert_eq!(
            array.set_at(2, 9),
            Err(Error::IndexOutOfBounds { index: 2, len: 2 })
        );
    }

    #[test]
    fn test_set_at_destroys_old() {
        let log = Rc::new(RefCell::new(Vec::new()));
        let mut array = Array::<u32>::create(1, ArrayOptions::NONE, None, Some(destroy_log(&log)));
        array.set_at(0, 5).unwrap();
        array.set_at(0, 6).unwrap();
        assert_eq!(*log.borrow(), vec![0, 5]);
    }

    #[test]
    fn test_append_insert_remove() {
        let mut array = Array::new();
        assert_eq!(array.append(1), 0);
        assert_eq!(array.append(3), 1);
        assert_eq!(array.insert_at(1, 2), Ok(1));
        assert_eq!(array.insert_at(3, 4), Ok(3));
        assert_eq!(
            array.insert_at(5, 9),
            Err(Error::IndexOutOfBounds { index: 5, len: 4 })
        );
        assert_eq!(array.as_slice(), &[1, 2, 3, 4]);

        assert_eq!(array.remove_at(0), Ok(()));
        assert_eq!(
            array.remove_at(3),
            Err(Error::IndexOutOfBounds { index: 3, len: 3 })
        );
        assert_eq!(array.as_slice(), &[2, 3, 4]);
    }

    #[test]
    fn test_unsorted_add_appends() {
        let mut array = Array::new();
        assert_eq!(array.add(3), Ok(0));
        assert_eq!(array.add(1), Ok(1));
        assert_eq!(array.add(3), Ok(2));
        assert_eq!(array.as_slice(), &[3, 1, 3]);
    }

    #[test]
    fn test_sorted_add() {
        let mut array = Array::<i32>::sorted(ArrayOptions::SORTED);
        for v in [5, 1, 4, 2, 3] {
            array.add(v).unwrap();
        }
        assert_eq!(array.as_slice(), &[1, 2, 3, 4, 5]);
    }

    #[test]
    fn test_sorted_unique_rejects_duplicate() {
        let mut array = Array::<i32>::sorted(ArrayOptions::SORTED | ArrayOptions::UNIQUE);
        array.add(10).unwrap();
        array.add(20).unwrap();
        assert_eq!(array.add(20), Err(Error::DuplicateValue { index: 1 }));
        assert_eq!(array.add(10), Err(Error::DuplicateValue { index: 0 }));
        assert_eq!(array.as_slice(), &[10, 20]);
    }

    #[test]
    fn test_tie_lands_after_equal_elements() {
        // Order on the first field only; second field tags the insertion.
        let mut array =
            Array::<(u8, u8)>::with_comparator(ArrayOptions::SORTED, |a, b| a.0.cmp(&b.0));
        array.add((1, 0)).unwrap();
        array.add((2, 0)).unwrap();
        array.add((1, 1)).unwrap();
        assert_eq!(array.add((1, 2)), Ok(2));
        assert_eq!(array.as_slice(), &[(1, 0), (1, 1), (1, 2), (2, 0)]);

        // Hit reports the first equal element
        assert_eq!(array.sorted_find_index(&(1, 9)), (true, 0));
    }

    #[test]
    fn test_sorted_find_index() {
        let mut array = Array::<u32>::sorted(ArrayOptions::SORTED);
        for v in [10, 20, 30] {
            array.add(v).unwrap();
        }
        assert_eq!(array.sorted_find_index(&20), (true, 1));
        assert_eq!(array.sorted_find_index(&5), (false, 0));
        assert_eq!(array.sorted_find_index(&25), (false, 2));
        assert_eq!(array.sorted_find_index(&35), (false, 3));
        assert_eq!(array.index_of(&30), Ok(2));
        assert_eq!(array.index_of(&31), Err(3));
    }

    #[test]
    fn test_find_without_comparator() {
        let array: Array<u32> = Array::from(vec![3, 1, 2]);
        assert_eq!(array.sorted_find_index(&1), (false, 3));
    }

    #[test]
    fn test_sorted_without_comparator_appends() {
        let mut array = Array::<u32>::create(0, ArrayOptions::SORTED, None, None);
        array.add(2).unwrap();
        array.add(1).unwrap();
        assert_eq!(array.as_slice(), &[2, 1]);
    }

    #[test]
    fn test_remove_and_trim_destroy() {
        let log = Rc::new(RefCell::new(Vec::new()));
        let mut array: Array<u32> = Array::from(vec![1, 2, 3, 4, 5]);
        array.set_destroy(Some(destroy_log(&log)));

        array.remove_at(1).unwrap();
        assert_eq!(*log.borrow(), vec![2]);

        array.trim(10); // no-op
        assert_eq!(array.len(), 4);

        array.trim(2);
        assert_eq!(array.as_slice(), &[1, 3]);
        assert_eq!(*log.borrow(), vec![2, 4, 5]);

        drop(array);
        assert_eq!(*log.borrow(), vec![2, 4, 5, 1, 3]);
    }

    #[test]
    fn test_set_length() {
        let mut array: Array<u8> = Array::from(vec![1, 2]);
        array.set_length(4);
        assert_eq!(array.as_slice(), &[1, 2, 0, 0]);
        assert!(array.capacity() >= 4);
        array.set_length(1);
        assert_eq!(array.as_slice(), &[1]);
    }

    #[test]
    fn test_set_length_grows_empty() {
        let mut array: Array<u32> = Array::new();
        array.set_length(3);
        assert_eq!(array.as_slice(), &[0, 0, 0]);
        array.set_length(3);
        assert_eq!(array.len(), 3);
    }

    #[test]
    fn test_sub() {
        let array: Array<u32> = Array::from(vec![10, 11, 12, 13]);
        let sub = array.sub(1, 2).unwrap();
        assert_eq!(sub.as_slice(), &[11, 12]);

        let single = array.sub(3, 3).unwrap();
        assert_eq!(single.as_slice(), &[13]);

        assert_eq!(
            array.sub(2, 1).unwrap_err(),
            Error::InvalidRange { first: 2, last: 1, len: 4 }
        );
        assert_eq!(
            array.sub(0, 4).unwrap_err(),
            Error::InvalidRange { first: 0, last: 4, len: 4 }
        );
    }

    #[test]
    fn test_sub_keeps_policy() {
        let mut array = Array::<u32>::sorted(ArrayOptions::SORTED | ArrayOptions::UNIQUE);
        for v in [1, 2, 3] {
            array.add(v).unwrap();
        }
        let mut sub = array.sub(0, 1).unwrap();
        assert_eq!(sub.options(), array.options());
        assert_eq!(sub.add(2), Err(Error::DuplicateValue { index: 1 }));
        assert_eq!(sub.add(0), Ok(0));
    }

    #[test]
    fn test_add_array_and_copy() {
        let mut a: Array<u32> = Array::from(vec![1, 2]);
        let b: Array<u32> = Array::from(vec![3, 4]);
        a.add_array(&b);
        assert_eq!(a.as_slice(), &[1, 2, 3, 4]);

        let c = a.copy();
        a.remove_at(0).unwrap();
        assert_eq!(c.as_slice(), &[1, 2, 3, 4]);
        assert_eq!(a.clone().as_slice(), &[2, 3, 4]);
    }

    #[test]
    fn test_sort() {
        let mut array: Array<i32> = Array::from(vec![3, -1, 2, 0]);
        array.sort(|a, b| a.cmp(b));
        assert_eq!(array.as_slice(), &[-1, 0, 2, 3]);
        array.sort(|a, b| b.cmp(a));
        assert_eq!(array.as_slice(), &[3, 2, 0, -1]);
    }

    #[test]
    fn test_for_each_aborts() {
        let array: Array<u32> = Array::from(vec![1, 2, 3, 4]);
        let mut seen = Vec::new();
        let result = array.for_each(|v| {
            seen.push(*v);
            if *v == 2 {
                Err(*v)
            } else {
                Ok(())
            }
        });
        assert_eq!(result, Err(2));
        assert_eq!(seen, vec![1, 2]);

        let mut total = 0;
        assert_eq!(
            array.for_each(|v| {
                total += v;
                Ok::<(), ()>(())
            }),
            Ok(())
        );
        assert_eq!(total, 10);
    }

    #[test]
    fn test_into_iter_ref() {
        let array: Array<u32> = Array::from(vec![1, 2, 3]);
        let doubled: Vec<u32> = (&array).into_iter().map(|v| v * 2).collect();
        assert_eq!(doubled, vec![2, 4, 6]);
        assert_eq!(array.iter().count(), 3);
    }
}

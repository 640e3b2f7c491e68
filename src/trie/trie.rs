//! Fixed-width binary radix tree keyed by bit-string prefixes.

use alloc::boxed::Box;
use core::fmt;
use core::marker::PhantomData;

use crate::arena::Arena;
use crate::constants::EMPTY;
use crate::error::{Error, Result};
use crate::key::RadixKey;
use crate::stack::Stack;
use crate::trie::{Cursor, Iter, Node, RadixEnum};

/// Destroy callback run on every value the tree lets go of.
///
/// Called on overwrite, removal, [`RadixTree::clear`] and drop. Any context
/// the callback needs is captured by the closure.
pub type ValueDestructor<V> = Box<dyn FnMut(V)>;

/// Binary radix tree mapping `key/len` prefixes to values.
///
/// Keys are read most significant bit first inside a window of
/// `max_key_bits` bits: a prefix of length `len` consumes bits
/// `max_key_bits - 1` down to `max_key_bits - len`. Bits of `key` below the
/// prefix are ignored, so `10.0.0.7/8` and `10.0.0.0/8` name the same entry.
///
/// # Key Features
/// - Exact lookup of a stored prefix
/// - Longest-prefix match (LPM) of an address or prefix
/// - Removal of a single prefix or a whole sub-tree, with compaction of
///   ancestors left without value or child
/// - Pre-order traversal, eager ([`RadixTree::for_each`]) or lazy
///   ([`RadixTree::get_enum`], [`RadixTree::iter`])
///
/// # Architecture
/// - One node per bit of prefix, created lazily along the insertion path
/// - Nodes stored in an [`Arena`] and linked by `u32` slot index
/// - Iterative descent and traversal with an explicit [`Stack`], so call
///   stack depth never grows with the key width
///
/// # Performance Characteristics
/// - Insert, lookup, remove: O(len) node visits
/// - Memory: one node per distinct prefix bit, ~16 bytes + value
///
/// # Example
/// ```rust
/// use prefix_radix::RadixTree;
///
/// let mut tree = RadixTree::<u32, &str>::new();
/// tree.add(0x0A00_0000, 8, "ten").unwrap();
/// tree.add(0x0A01_0000, 16, "ten-one").unwrap();
///
/// assert_eq!(tree.get_best(0x0A01_0203, 32), Some(&"ten-one"));
/// assert_eq!(tree.get_best(0x0A02_0203, 32), Some(&"ten"));
/// assert_eq!(tree.get_best(0x0B00_0000, 32), None);
/// assert_eq!(tree.get_exact(0x0A00_0000, 8), Some(&"ten"));
/// ```
pub struct RadixTree<K: RadixKey, V> {
    /// Node storage; every reachable node lives here.
    nodes: Arena<Node<V>>,

    /// Arena index of the root node, `EMPTY` for an empty tree.
    root: u32,

    /// Width of the key window in bits.
    key_bits: u8,

    /// Number of value-bearing nodes.
    len: usize,

    destroy: Option<ValueDestructor<V>>,

    _phantom: PhantomData<K>,
}

impl<K: RadixKey, V> RadixTree<K, V> {
    /// Create an empty tree spanning the full width of `K`.
    ///
    /// # Example
    /// ```rust
    /// use prefix_radix::RadixTree;
    ///
    /// let tree = RadixTree::<u128, u32>::new();
    /// assert_eq!(tree.max_key_bits(), 128);
    /// assert!(tree.is_empty());
    /// ```
    pub fn new() -> Self {
        RadixTree {
            nodes: Arena::new(),
            root: EMPTY,
            key_bits: K::BITS,
            len: 0,
            destroy: None,
            _phantom: PhantomData,
        }
    }

    /// Create an empty full-width tree with room for `capacity` nodes.
    ///
    /// A prefix of length `len` needs up to `len + 1` nodes; prefixes
    /// sharing leading bits share nodes.
    pub fn with_capacity(capacity: usize) -> Self {
        RadixTree {
            nodes: Arena::with_capacity(capacity),
            root: EMPTY,
            key_bits: K::BITS,
            len: 0,
            destroy: None,
            _phantom: PhantomData,
        }
    }

    /// Create an empty tree over the `max_key_bits` low bits of `K`.
    ///
    /// # Arguments
    /// * `max_key_bits` - Window width, at most `K::BITS`
    /// * `destroy` - Callback run on every value the tree lets go of
    ///
    /// # Errors
    /// [`Error::InvalidKeyWidth`] if `max_key_bits > K::BITS`.
    pub fn create(max_key_bits: u8, destroy: Option<ValueDestructor<V>>) -> Result<Self> {
        if max_key_bits > K::BITS {
            return Err(Error::InvalidKeyWidth {
                bits: max_key_bits,
                max: K::BITS,
            });
        }
        Ok(RadixTree {
            nodes: Arena::new(),
            root: EMPTY,
            key_bits: max_key_bits,
            len: 0,
            destroy,
            _phantom: PhantomData,
        })
    }

    /// Install or replace the destroy callback.
    pub fn set_destroy(&mut self, destroy: Option<ValueDestructor<V>>) {
        self.destroy = destroy;
    }

    /// Width of the key window in bits.
    #[inline(always)]
    pub fn max_key_bits(&self) -> u8 {
        self.key_bits
    }

    /// Number of stored prefixes.
    #[inline(always)]
    pub fn len(&self) -> usize {
        self.len
    }

    #[inline(always)]
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Store `value` at `key/key_len`, replacing any previous value.
    ///
    /// Missing intermediate nodes are created on the way down. A replaced
    /// value goes through the destroy callback.
    ///
    /// # Errors
    /// [`Error::InvalidKeyLength`] if `key_len > max_key_bits()`.
    ///
    /// # Performance
    /// O(key_len) - one node visit (and at most one allocation) per bit
    pub fn add(&mut self, key: K, key_len: u8, value: V) -> Result<()> {
        self.check_len(key_len)?;

        if self.root == EMPTY {
            self.root = self.nodes.alloc(Node::new());
        }

        let mut idx = self.root;
        for depth in 0..key_len {
            let bit = key.bit(self.bit_index(depth));
            let child = self.nodes.get(idx).get_child(bit);
            idx = if child == EMPTY {
                let created = self.nodes.alloc(Node::new());
                self.nodes.get_mut(idx).set_child(bit, created);
                created
            } else {
                child
            };
        }

        match self.nodes.get_mut(idx).value.replace(value) {
            Some(old) => self.discard(old),
            None => self.len += 1,
        }
        Ok(())
    }

    /// Value stored exactly at `key/key_len`.
    ///
    /// Returns `None` if the path stops early, the node holds no value, or
    /// `key_len` exceeds the tree width.
    pub fn get_exact(&self, key: K, key_len: u8) -> Option<&V> {
        let idx = self.find_node(key, key_len)?;
        self.nodes.get(idx).value.as_ref()
    }

    /// Mutable access to the value stored exactly at `key/key_len`.
    pub fn get_exact_mut(&mut self, key: K, key_len: u8) -> Option<&mut V> {
        let idx = self.find_node(key, key_len)?;
        self.nodes.get_mut(idx).value.as_mut()
    }

    /// Check whether a value is stored exactly at `key/key_len`.
    #[inline]
    pub fn contains(&self, key: K, key_len: u8) -> bool {
        self.get_exact(key, key_len).is_some()
    }

    /// Longest-prefix match: value of the deepest stored prefix of `key/key_len`.
    ///
    /// The root is checked first (a value stored at length 0 matches
    /// everything), then each node along the path of `key` down to
    /// `key_len` bits. Descent stops at the first missing child.
    ///
    /// Returns `None` if no prefix along the path holds a value, or if
    /// `key_len` exceeds the tree width.
    pub fn get_best(&self, key: K, key_len: u8) -> Option<&V> {
        if key_len > self.key_bits || self.root == EMPTY {
            return None;
        }

        let mut node = self.nodes.get(self.root);
        let mut best = node.value.as_ref();

        for depth in 0..key_len {
            let child = node.get_child(key.bit(self.bit_index(depth)));
            if child == EMPTY {
                break;
            }
            node = self.nodes.get(child);
            if node.value.is_some() {
                best = node.value.as_ref();
            }
        }
        best
    }

    /// Remove the value stored at `key/key_len`.
    ///
    /// # Arguments
    /// * `single` - `true` removes only this prefix; `false` also removes
    ///   every prefix stored below it
    ///
    /// Removed values go through the destroy callback. Nodes left with
    /// neither value nor child are freed, walking back towards the root
    /// until a node that still holds a value or a child is reached.
    ///
    /// # Errors
    /// - [`Error::InvalidKeyLength`] if `key_len > max_key_bits()`
    /// - [`Error::KeyNotFound`] if no value is stored at `key/key_len`
    pub fn remove(&mut self, key: K, key_len: u8, single: bool) -> Result<()> {
        self.check_len(key_len)?;
        let not_found = Error::KeyNotFound { key_len };
        if self.root == EMPTY {
            return Err(not_found);
        }

        // Ancestors of the target with the edge taken out of each
        let mut path: Stack<(u32, bool)> = Stack::with_capacity(key_len as usize);
        let mut idx = self.root;
        for depth in 0..key_len {
            let bit = key.bit(self.bit_index(depth));
            let child = self.nodes.get(idx).get_child(bit);
            if child == EMPTY {
                return Err(not_found);
            }
            path.push((idx, bit));
            idx = child;
        }

        let target = self.nodes.get_mut(idx);
        if target.value.is_none() {
            return Err(not_found);
        }

        let freed = if single {
            if let Some(old) = target.value.take() {
                self.len -= 1;
                self.discard(old);
            }
            if self.nodes.get(idx).is_leaf() {
                self.nodes.release(idx);
                true
            } else {
                false
            }
        } else {
            self.destroy_subtree(idx);
            true
        };

        if freed {
            self.compact(path);
        }
        Ok(())
    }

    /// Pre-order traversal calling `f(key, key_len, &value)` for every
    /// stored prefix.
    ///
    /// Nodes are visited before their children and left (0) before right
    /// (1). The key passed to `f` has every bit below `key_len` cleared, so
    /// `get_exact(key, key_len)` returns the same value.
    ///
    /// # Errors
    /// Stops at the first error returned by `f` and propagates it.
    pub fn for_each<E, F>(&self, mut f: F) -> core::result::Result<(), E>
    where
        F: FnMut(K, u8, &V) -> core::result::Result<(), E>,
    {
        let mut cursor = Cursor::new(self.root, self.key_bits);
        while let Some((key, key_len, value)) = cursor.advance_valued(&self.nodes) {
            f(key, key_len, value)?;
        }
        Ok(())
    }

    /// Lazy enumerator over the stored values, in [`RadixTree::for_each`] order.
    ///
    /// Yields values only. Use [`RadixTree::iter`] or
    /// [`RadixTree::for_each`] when the prefix is needed too.
    pub fn get_enum(&self) -> RadixEnum<'_, K, V> {
        RadixEnum::new(self)
    }

    /// Iterator over `(key, key_len, &value)` in [`RadixTree::for_each`] order.
    pub fn iter(&self) -> Iter<'_, K, V> {
        Iter::new(self)
    }

    /// Count nodes in the tree, the root included.
    ///
    /// # Arguments
    /// * `count_only_valued` - count only value-bearing nodes when `true`
    ///
    /// Recursion depth is bounded by the tree width.
    pub fn num_nodes(&self, count_only_valued: bool) -> usize {
        self.count_from(self.root, count_only_valued)
    }

    /// Number of live nodes, valued or not.
    ///
    /// Equals `num_nodes(false)` without walking the tree.
    #[inline]
    pub fn node_count(&self) -> usize {
        self.nodes.live()
    }

    /// Remove every prefix, running the destroy callback on each value.
    pub fn clear(&mut self) {
        if self.root != EMPTY {
            self.destroy_subtree(self.root);
            self.root = EMPTY;
        }
        debug_assert!(self.nodes.is_empty(), "unreachable nodes left in arena");
        self.nodes.clear();
    }

    #[inline(always)]
    pub(crate) fn nodes(&self) -> &Arena<Node<V>> {
        &self.nodes
    }

    #[inline(always)]
    pub(crate) fn root(&self) -> u32 {
        self.root
    }

    /// Bit of the key tested at `depth`, counted from the least significant bit.
    #[inline(always)]
    fn bit_index(&self, depth: u8) -> u8 {
        self.key_bits - 1 - depth
    }

    #[inline]
    fn check_len(&self, key_len: u8) -> Result<()> {
        if key_len > self.key_bits {
            return Err(Error::InvalidKeyLength {
                key_len,
                max: self.key_bits,
            });
        }
        Ok(())
    }

    /// Arena index of the node at `key/key_len`, if the full path exists.
    fn find_node(&self, key: K, key_len: u8) -> Option<u32> {
        if key_len > self.key_bits || self.root == EMPTY {
            return None;
        }
        let mut idx = self.root;
        for depth in 0..key_len {
            idx = self.nodes.get(idx).get_child(key.bit(self.bit_index(depth)));
            if idx == EMPTY {
                return None;
            }
        }
        Some(idx)
    }

    /// Free the node at `idx` and everything below it.
    ///
    /// The caller unlinks `idx` from its parent.
    fn destroy_subtree(&mut self, idx: u32) {
        let mut pending: Stack<u32> = Stack::with_capacity(self.key_bits as usize);
        pending.push(idx);
        while let Some(idx) = pending.pop() {
            let node = self.nodes.release(idx);
            for child in node.children {
                if child != EMPTY {
                    pending.push(child);
                }
            }
            if let Some(value) = node.value {
                self.len -= 1;
                self.discard(value);
            }
        }
    }

    /// Unlink a freed node from its parent and free vacant ancestors.
    ///
    /// `path` holds `(parent, edge)` pairs from the root down to the parent
    /// of the freed node.
    fn compact(&mut self, mut path: Stack<(u32, bool)>) {
        loop {
            match path.pop() {
                Some((parent, bit)) => {
                    let node = self.nodes.get_mut(parent);
                    node.clear_child(bit);
                    if !node.is_vacant() {
                        break;
                    }
                    self.nodes.release(parent);
                }
                None => {
                    // Last freed node was the root
                    self.root = EMPTY;
                    break;
                }
            }
        }
    }

    fn count_from(&self, idx: u32, count_only_valued: bool) -> usize {
        if idx == EMPTY {
            return 0;
        }
        let node = self.nodes.get(idx);
        let own = if count_only_valued {
            node.value.is_some() as usize
        } else {
            1
        };
        own + self.count_from(node.get_child(false), count_only_valued)
            + self.count_from(node.get_child(true), count_only_valued)
    }

    #[inline]
    fn discard(&mut self, value: V) {
        if let Some(destroy) = self.destroy.as_mut() {
            destroy(value);
        }
    }
}

impl<K: RadixKey, V> Default for RadixTree<K, V> {
    fn default() -> Self {
        Self::new()
    }
}

impl<K: RadixKey, V> Drop for RadixTree<K, V> {
    fn drop(&mut self) {
        if self.destroy.is_some() {
            self.clear();
        }
    }
}

impl<K: RadixKey, V: fmt::Debug> fmt::Debug for RadixTree<K, V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut map = f.debug_map();
        for (key, key_len, value) in self.iter() {
            map.entry(&format_args!("{:?}/{}", key, key_len), value);
        }
        map.finish()
    }
}

//! Pre-order traversal of a radix tree.
//!
//! Every traversal (eager [`RadixTree::for_each`](crate::RadixTree::for_each),
//! lazy [`RadixEnum`] and [`Iter`]) shares the same [`Cursor`], so all of
//! them agree on order: a node before its children, left (0) before
//! right (1).

use crate::arena::Arena;
use crate::constants::EMPTY;
use crate::enumerator::Enumerator;
use crate::key::RadixKey;
use crate::stack::Stack;
use crate::trie::{Node, RadixTree};

/// Explicit-stack pre-order walk over the nodes of a tree.
///
/// Yields every reachable node, valued or not, with the canonical key of
/// its prefix: the bits taken on the way down, all lower bits cleared.
pub(crate) struct Cursor<K: RadixKey> {
    /// Nodes still to visit, with their key and prefix length.
    pending: Stack<(u32, K, u8)>,

    /// Window width of the tree being walked.
    key_bits: u8,
}

impl<K: RadixKey> Cursor<K> {
    pub(crate) fn new(root: u32, key_bits: u8) -> Self {
        // Pre-order keeps at most one pending sibling per level
        let mut pending = Stack::with_capacity(key_bits as usize + 1);
        if root != EMPTY {
            pending.push((root, K::default(), 0));
        }
        Cursor { pending, key_bits }
    }

    /// Visit the next node, returning `(key, key_len, arena index)`.
    pub(crate) fn advance<V>(&mut self, nodes: &Arena<Node<V>>) -> Option<(K, u8, u32)> {
        let (idx, key, key_len) = self.pending.pop()?;
        let node = nodes.get(idx);

        // Right first so that left comes out first
        let right = node.get_child(true);
        if right != EMPTY {
            let bit = self.key_bits - 1 - key_len;
            self.pending.push((right, key.with_bit(bit), key_len + 1));
        }
        let left = node.get_child(false);
        if left != EMPTY {
            self.pending.push((left, key, key_len + 1));
        }

        Some((key, key_len, idx))
    }

    /// Skip to the next node holding a value.
    pub(crate) fn advance_valued<'a, V>(
        &mut self,
        nodes: &'a Arena<Node<V>>,
    ) -> Option<(K, u8, &'a V)> {
        while let Some((key, key_len, idx)) = self.advance(nodes) {
            if let Some(value) = &nodes.get(idx).value {
                return Some((key, key_len, value));
            }
        }
        None
    }
}

/// Lazy enumerator over the values of a [`RadixTree`].
///
/// Holds a shared borrow of the tree: the tree cannot be modified while
/// the enumerator is alive.
///
/// # Example
/// ```rust
/// use prefix_radix::{Enumerator, RadixTree};
///
/// let mut tree = RadixTree::<u8, u32>::new();
/// tree.add(0b1000_0000, 1, 2).unwrap();
/// tree.add(0b0000_0000, 1, 1).unwrap();
///
/// let mut values = tree.get_enum();
/// assert!(values.has_next());
/// assert_eq!(values.get_next(), Some(&1));
/// assert_eq!(values.get_next(), Some(&2));
/// assert!(!values.has_next());
/// ```
pub struct RadixEnum<'a, K: RadixKey, V> {
    nodes: &'a Arena<Node<V>>,
    cursor: Cursor<K>,

    /// Value found by `has_next` and not yet handed out.
    peeked: Option<&'a V>,
}

impl<'a, K: RadixKey, V> RadixEnum<'a, K, V> {
    pub(crate) fn new(tree: &'a RadixTree<K, V>) -> Self {
        RadixEnum {
            nodes: tree.nodes(),
            cursor: Cursor::new(tree.root(), tree.max_key_bits()),
            peeked: None,
        }
    }
}

impl<'a, K: RadixKey, V> Enumerator for RadixEnum<'a, K, V> {
    type Item = &'a V;

    fn has_next(&mut self) -> bool {
        if self.peeked.is_none() {
            self.peeked = self
                .cursor
                .advance_valued(self.nodes)
                .map(|(_, _, value)| value);
        }
        self.peeked.is_some()
    }

    fn get_next(&mut self) -> Option<&'a V> {
        match self.peeked.take() {
            Some(value) => Some(value),
            None => self
                .cursor
                .advance_valued(self.nodes)
                .map(|(_, _, value)| value),
        }
    }
}

/// Iterator over `(key, key_len, &value)` of a [`RadixTree`] in pre-order.
///
/// # Example
/// ```rust
/// use prefix_radix::RadixTree;
///
/// let mut tree = RadixTree::<u32, &str>::new();
/// tree.add(0xC0A8_0000, 16, "lan").unwrap();
/// tree.add(0x0A00_0000, 8, "corp").unwrap();
///
/// let entries: Vec<_> = tree.iter().collect();
/// assert_eq!(entries, vec![(0x0A00_0000, 8, &"corp"), (0xC0A8_0000, 16, &"lan")]);
/// ```
pub struct Iter<'a, K: RadixKey, V> {
    nodes: &'a Arena<Node<V>>,
    cursor: Cursor<K>,
}

impl<'a, K: RadixKey, V> Iter<'a, K, V> {
    pub(crate) fn new(tree: &'a RadixTree<K, V>) -> Self {
        Iter {
            nodes: tree.nodes(),
            cursor: Cursor::new(tree.root(), tree.max_key_bits()),
        }
    }
}

impl<'a, K: RadixKey, V> Iterator for Iter<'a, K, V> {
    type Item = (K, u8, &'a V);

    #[inline]
    fn next(&mut self) -> Option<Self::Item> {
        self.cursor.advance_valued(self.nodes)
    }
}

impl<'a, K: RadixKey, V> IntoIterator for &'a RadixTree<K, V> {
    type Item = (K, u8, &'a V);
    type IntoIter = Iter<'a, K, V>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

//! Binary radix tree: nodes, main API and traversal.

mod basic;
mod iter;
mod node;
#[allow(clippy::module_inception)]
mod trie;

pub(crate) use iter::Cursor;
pub use iter::{Iter, RadixEnum};
pub use node::Node;
pub use trie::{RadixTree, ValueDestructor};

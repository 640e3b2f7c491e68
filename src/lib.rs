//! # prefix-radix
//!
//! Binary radix tree for longest-prefix matching of fixed-width keys,
//! plus the generic dynamic array and lazy enumerator it is built with.
//!
//! ## Features
//! - Exact and longest-prefix lookup of `key/len` prefixes (u8..u128 keys)
//! - Removal of one prefix or a whole sub-tree, with node compaction
//! - Pre-order traversal that rebuilds each stored prefix
//! - Dynamic array with optional sorted/unique insertion and binary search
//! - IPv4/IPv6 prefix parsing for routing-style lookups
//! - no_std compatible (requires alloc)
//!
//! ## Example
//! ```rust
//! use prefix_radix::{Prefix, RadixTree};
//! use core::net::Ipv4Addr;
//!
//! let mut origins = RadixTree::<u32, u32>::new();
//! origins.insert_prefix("193.0.0.0/16".parse().unwrap(), 3333).unwrap();
//! origins.insert_prefix("193.0.14.0/24".parse().unwrap(), 25152).unwrap();
//!
//! assert_eq!(origins.lookup_addr(Ipv4Addr::new(193, 0, 14, 129)), Some(&25152));
//! assert_eq!(origins.lookup_addr(Ipv4Addr::new(193, 0, 1, 1)), Some(&3333));
//!
//! let net: Prefix<u32> = "193.0.14.0/24".parse().unwrap();
//! assert_eq!(origins.get_prefix(&net), Some(&25152));
//! ```

#![no_std]

extern crate alloc;

mod arena;
mod array;
mod constants;
mod enumerator;
mod error;
mod key;
mod memory;
mod net;
mod stack;
mod trie;

pub use array::{Array, ArrayEnum, ArrayOptions, Comparator, Destructor};
pub use constants::{IPV4_BITS, IPV6_BITS};
pub use enumerator::{BoxEnumerator, EnumIter, Enumerator};
pub use error::{Error, Result};
pub use key::RadixKey;
pub use net::Prefix;
pub use stack::Stack;
pub use trie::{Iter, RadixEnum, RadixTree, ValueDestructor};

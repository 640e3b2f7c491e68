//! Index-addressed storage for radix tree nodes.
//!
//! Nodes refer to each other by `u32` slot index instead of owning
//! pointers. Released slots go to a free list and are reused by the next
//! allocation, so a tree that churns through inserts and removals keeps a
//! stable footprint.

#[allow(clippy::module_inception)]
mod arena;
mod free_list;

pub use arena::Arena;
pub use free_list::FreeList;

//! Error type shared by arrays and radix trees.

use thiserror::Error;

/// Recoverable failures reported by array and tree operations.
///
/// Allocation failure is not represented here: it aborts through
/// [`crate::memory::fatal`] and never reaches the caller.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum Error {
    /// Index does not address an existing element.
    #[error("index {index} out of bounds for length {len}")]
    IndexOutOfBounds { index: usize, len: usize },

    /// Closed range `[first, last]` does not fit in the array.
    #[error("range {first}..={last} invalid for length {len}")]
    InvalidRange {
        first: usize,
        last: usize,
        len: usize,
    },

    /// Insertion into a unique array collided with the element at `index`.
    #[error("duplicate value at index {index}")]
    DuplicateValue { index: usize },

    /// No value is stored at the requested key.
    #[error("no value stored for key of length {key_len}")]
    KeyNotFound { key_len: u8 },

    /// Key length exceeds the tree width.
    #[error("key length {key_len} exceeds tree width {max}")]
    InvalidKeyLength { key_len: u8, max: u8 },

    /// Tree width exceeds the number of bits in the key type.
    #[error("tree width {bits} exceeds key type width {max}")]
    InvalidKeyWidth { bits: u8, max: u8 },

    /// Text is not a valid `address/length` prefix.
    #[error("invalid prefix")]
    InvalidPrefix,
}

/// Result alias used throughout the crate.
pub type Result<T> = core::result::Result<T, Error>;

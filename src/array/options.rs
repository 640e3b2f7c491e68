//! Configuration bit-set for dynamic arrays.

use core::fmt;
use core::ops::{BitOr, BitOrAssign};

/// Array behavior flags.
///
/// - `SORTED`: `add` keeps elements in ascending comparator order
/// - `UNIQUE`: `add` rejects values comparing equal to a stored element
///
/// Flags combine with `|`:
/// ```rust
/// use prefix_radix::ArrayOptions;
///
/// let opts = ArrayOptions::SORTED | ArrayOptions::UNIQUE;
/// assert!(opts.is_sorted());
/// assert!(opts.is_unique());
/// ```
#[derive(Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct ArrayOptions(u8);

impl ArrayOptions {
    /// No flag set: plain append-only array.
    pub const NONE: Self = ArrayOptions(0);

    /// Maintain ascending order on every `add`.
    pub const SORTED: Self = ArrayOptions(0x01);

    /// Reject duplicate values on `add`.
    pub const UNIQUE: Self = ArrayOptions(0x02);

    /// Raw flag bits.
    #[inline(always)]
    pub const fn bits(self) -> u8 {
        self.0
    }

    /// Build options from raw bits, ignoring unknown bits.
    #[inline]
    pub const fn from_bits_truncate(bits: u8) -> Self {
        ArrayOptions(bits & (Self::SORTED.0 | Self::UNIQUE.0))
    }

    /// Check that every flag of `other` is set.
    #[inline(always)]
    pub const fn contains(self, other: Self) -> bool {
        self.0 & other.0 == other.0
    }

    #[inline(always)]
    pub const fn is_sorted(self) -> bool {
        self.contains(Self::SORTED)
    }

    #[inline(always)]
    pub const fn is_unique(self) -> bool {
        self.contains(Self::UNIQUE)
    }
}

impl BitOr for ArrayOptions {
    type Output = Self;

    #[inline(always)]
    fn bitor(self, rhs: Self) -> Self {
        ArrayOptions(self.0 | rhs.0)
    }
}

impl BitOrAssign for ArrayOptions {
    #[inline(always)]
    fn bitor_assign(&mut self, rhs: Self) {
        self.0 |= rhs.0;
    }
}

impl fmt::Debug for ArrayOptions {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match (self.is_sorted(), self.is_unique()) {
            (false, false) => f.write_str("NONE"),
            (true, false) => f.write_str("SORTED"),
            (false, true) => f.write_str("UNIQUE"),
            (true, true) => f.write_str("SORTED | UNIQUE"),
        }
    }
}

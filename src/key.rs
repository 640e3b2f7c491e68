//! Trait for radix tree key types (u8 through u128).

use core::fmt::Debug;

/// Trait for unsigned integer keys used in the radix tree.
///
/// A key is read as a bit-string, most significant bit first. A tree of
/// width `w` tests bit `w - 1 - d` at depth `d`, so a prefix of length
/// `len` always occupies the `len` high-order bits of the `w`-bit window
/// whatever the width of the integer type.
///
/// Implemented for u8, u16, u32, u64 and u128.
pub trait RadixKey: Copy + Eq + Ord + Default + Debug + Sized {
    /// Number of bits in the key type.
    ///
    /// - u32: 32 (IPv4)
    /// - u128: 128 (IPv6)
    const BITS: u8;

    /// Test the bit at `index`, counted from the least significant bit.
    ///
    /// # Arguments
    /// * `index` - Bit position (0 = least significant)
    ///
    /// # Performance
    /// O(1) - single shift and mask
    fn bit(self, index: u8) -> bool;

    /// Return a copy of the key with the bit at `index` set.
    ///
    /// Used to rebuild keys while walking down the right edge.
    fn with_bit(self, index: u8) -> Self;

    /// Convert key to u128 for arithmetic operations.
    fn to_u128(self) -> u128;

    /// Convert u128 back to key type, truncating high bits.
    fn from_u128(value: u128) -> Self;

    /// Keep only the `len` most significant bits of a `width`-bit window.
    ///
    /// Bits below the prefix and bits above the window are cleared, which
    /// gives the canonical form of `key/len` for a tree of that width.
    ///
    /// # Examples
    /// ```text
    /// 0b1011_0110u8.mask(3, 8) = 0b1010_0000
    /// 0xC0A8_01FFu32.mask(24, 32) = 0xC0A8_0100
    /// ```
    #[inline]
    fn mask(self, len: u8, width: u8) -> Self {
        debug_assert!(len <= width && width <= Self::BITS, "mask out of bounds");
        if len == 0 {
            return Self::default();
        }
        let keep = (u128::MAX >> (128 - len as u32)) << (width - len) as u32;
        Self::from_u128(self.to_u128() & keep)
    }
}

macro_rules! impl_radix_key {
    ($($t:ty),*) => {
        $(
            impl RadixKey for $t {
                const BITS: u8 = <$t>::BITS as u8;

                #[inline(always)]
                fn bit(self, index: u8) -> bool {
                    debug_assert!(index < <Self as RadixKey>::BITS, "bit index out of bounds");
                    (self >> index) & 1 == 1
                }

                #[inline(always)]
                fn with_bit(self, index: u8) -> Self {
                    debug_assert!(index < <Self as RadixKey>::BITS, "bit index out of bounds");
                    self | (1 << index)
                }

                #[inline(always)]
                fn to_u128(self) -> u128 {
                    self as u128
                }

                #[inline(always)]
                fn from_u128(value: u128) -> Self {
                    value as $t
                }
            }
        )*
    };
}

impl_radix_key!(u8, u16, u32, u64, u128);

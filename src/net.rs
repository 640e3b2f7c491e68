//! IP network prefixes on top of the radix tree.
//!
//! IPv4 prefixes use `u32` keys and IPv6 prefixes use `u128` keys, each
//! over the full width of the key type. Text forms follow the usual
//! `address/length` notation; a bare address is a host prefix.

use core::fmt;
use core::net::{Ipv4Addr, Ipv6Addr};
use core::str::FromStr;

use crate::constants::{IPV4_BITS, IPV6_BITS};
use crate::error::{Error, Result};
use crate::key::RadixKey;
use crate::trie::RadixTree;

/// Canonical `key/len` prefix: every bit below `len` is cleared.
///
/// # Example
/// ```rust
/// use prefix_radix::Prefix;
///
/// let net: Prefix<u32> = "192.168.1.77/24".parse().unwrap();
/// assert_eq!(net.key(), 0xC0A8_0100);
/// assert_eq!(net.len(), 24);
/// assert_eq!(net.to_string(), "192.168.1.0/24");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Prefix<K: RadixKey> {
    key: K,
    len: u8,
}

impl<K: RadixKey> Prefix<K> {
    /// Build the prefix of the `len` high-order bits of `key`.
    ///
    /// # Errors
    /// [`Error::InvalidKeyLength`] if `len > K::BITS`.
    pub fn new(key: K, len: u8) -> Result<Self> {
        if len > K::BITS {
            return Err(Error::InvalidKeyLength {
                key_len: len,
                max: K::BITS,
            });
        }
        Ok(Prefix {
            key: key.mask(len, K::BITS),
            len,
        })
    }

    #[inline(always)]
    pub fn key(&self) -> K {
        self.key
    }

    #[inline(always)]
    #[allow(clippy::len_without_is_empty)]
    pub fn len(&self) -> u8 {
        self.len
    }

    /// Check whether `addr` falls inside this prefix.
    #[inline]
    pub fn contains(&self, addr: K) -> bool {
        addr.mask(self.len, K::BITS) == self.key
    }
}

/// Split `addr/len` into its parts, `len` defaulting to `host_bits`.
fn split_prefix(text: &str, host_bits: u8) -> Result<(&str, u8)> {
    match text.split_once('/') {
        Some((addr, len)) => {
            if len.is_empty() || !len.bytes().all(|b| b.is_ascii_digit()) {
                return Err(Error::InvalidPrefix);
            }
            let len: u8 = len.parse().map_err(|_| Error::InvalidPrefix)?;
            if len > host_bits {
                return Err(Error::InvalidPrefix);
            }
            Ok((addr, len))
        }
        None => Ok((text, host_bits)),
    }
}

impl FromStr for Prefix<u32> {
    type Err = Error;

    fn from_str(text: &str) -> Result<Self> {
        let (addr, len) = split_prefix(text, IPV4_BITS)?;
        let addr: Ipv4Addr = addr.parse().map_err(|_| Error::InvalidPrefix)?;
        Prefix::new(u32::from(addr), len)
    }
}

impl FromStr for Prefix<u128> {
    type Err = Error;

    fn from_str(text: &str) -> Result<Self> {
        let (addr, len) = split_prefix(text, IPV6_BITS)?;
        let addr: Ipv6Addr = addr.parse().map_err(|_| Error::InvalidPrefix)?;
        Prefix::new(u128::from(addr), len)
    }
}

impl fmt::Display for Prefix<u32> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", Ipv4Addr::from(self.key), self.len)
    }
}

impl fmt::Display for Prefix<u128> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", Ipv6Addr::from(self.key), self.len)
    }
}

impl<K: RadixKey, V> RadixTree<K, V> {
    /// Store `value` under `prefix`.
    ///
    /// # Errors
    /// [`Error::InvalidKeyWidth`] if the tree is narrower than `K`: prefixes
    /// are laid out over the full key width.
    pub fn insert_prefix(&mut self, prefix: Prefix<K>, value: V) -> Result<()> {
        self.check_full_width()?;
        self.add(prefix.key, prefix.len, value)
    }

    /// Value stored exactly under `prefix`.
    pub fn get_prefix(&self, prefix: &Prefix<K>) -> Option<&V> {
        self.get_exact(prefix.key, prefix.len)
    }

    /// Remove the value stored under `prefix`, leaving more specific
    /// prefixes in place.
    pub fn remove_prefix(&mut self, prefix: &Prefix<K>) -> Result<()> {
        self.check_full_width()?;
        self.remove(prefix.key, prefix.len, true)
    }

    /// Longest-prefix match of a host address.
    ///
    /// # Example
    /// ```rust
    /// use core::net::Ipv4Addr;
    /// use prefix_radix::RadixTree;
    ///
    /// let mut origins = RadixTree::<u32, u32>::new();
    /// origins.insert_prefix("8.8.8.0/24".parse().unwrap(), 15169).unwrap();
    ///
    /// assert_eq!(origins.lookup_addr(Ipv4Addr::new(8, 8, 8, 8)), Some(&15169));
    /// assert_eq!(origins.lookup_addr(Ipv4Addr::new(8, 8, 4, 4)), None);
    /// ```
    pub fn lookup_addr<A: Into<K>>(&self, addr: A) -> Option<&V> {
        self.get_best(addr.into(), self.max_key_bits())
    }

    fn check_full_width(&self) -> Result<()> {
        if self.max_key_bits() != K::BITS {
            return Err(Error::InvalidKeyWidth {
                bits: self.max_key_bits(),
                max: K::BITS,
            });
        }
        Ok(())
    }
}

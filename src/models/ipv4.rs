//! IPv4 address codec and CIDR block utilities.
//!
//! Addresses are handled as `u32` for all arithmetic and converted to the
//! dotted-quad form only at the edges, via [`parse`] and [`format`].

use crate::error::AggregateError;
use serde::de;
use serde::{Deserialize, Deserializer, Serialize};
use std::net::{Ipv4Addr, Ipv6Addr};
use std::str::FromStr;

/// Maximum length for an IPv4 prefix (32 bits).
pub const MAX_LENGTH: u8 = 32;

/// Parse dotted-quad text into its `u32` form.
///
/// Surrounding whitespace is ignored and leading zeros inside an octet are
/// accepted, so `"010.000.000.001"` parses to the same value as `"10.0.0.1"`.
/// IPv4-mapped IPv6 text (`::ffff:a.b.c.d`) is accepted as its IPv4 address.
///
/// # Examples
/// ```
/// use ip_cidr_aggregate::models::parse;
/// assert_eq!(parse("10.0.0.1").unwrap(), 0x0A000001);
/// assert!(parse("10.0.0").is_err());
/// ```
pub fn parse(text: &str) -> Result<u32, AggregateError> {
    let trimmed = text.trim();
    if let Some(addr) = parse_dotted_quad(trimmed) {
        return Ok(addr);
    }
    Ipv6Addr::from_str(trimmed)
        .ok()
        .and_then(|v6| v6.to_ipv4_mapped())
        .map(u32::from)
        .ok_or_else(|| AggregateError::InvalidAddress(text.to_string()))
}

fn parse_dotted_quad(text: &str) -> Option<u32> {
    let mut octets = [0u8; 4];
    let mut parts = text.split('.');
    for octet in octets.iter_mut() {
        let part = parts.next()?;
        if part.is_empty() || part.len() > 3 || !part.bytes().all(|b| b.is_ascii_digit()) {
            return None;
        }
        // u8 parse rejects 256..=999
        *octet = part.parse().ok()?;
    }
    if parts.next().is_some() {
        return None;
    }
    Some(u32::from(Ipv4Addr::from(octets)))
}

/// Format a `u32` address as canonical dotted-quad text.
pub fn format(addr: u32) -> String {
    Ipv4Addr::from(addr).to_string()
}

/// Network mask for prefix length `len`, e.g. `/24` is `0xFFFFFF00`.
pub fn get_cidr_mask(len: u8) -> Result<u32, AggregateError> {
    if len > MAX_LENGTH {
        return Err(AggregateError::InvalidPrefixLength(len));
    }
    // shifting by 32 overflows, /0 has no network bits
    Ok(u32::MAX
        .checked_shl(u32::from(MAX_LENGTH - len))
        .unwrap_or(0))
}

/// Number of addresses in a block with prefix length `len`.
///
/// # Panics
/// * If `len` is larger than 32
pub fn block_size(len: u8) -> u64 {
    assert!(len <= MAX_LENGTH, "Prefix length /{len} exceeds 32 bits");
    1u64 << (MAX_LENGTH - len)
}

/// True when `addr` has no host bits set for prefix length `len`.
pub fn is_aligned(addr: u32, len: u8) -> bool {
    get_cidr_mask(len).is_ok_and(|mask| addr & !mask == 0)
}

/// Smallest prefix length `addr` is aligned to, based on trailing zeros.
///
/// `0.0.0.0` is aligned to every prefix, so this returns 0 for it.
pub fn lo_mask(addr: u32) -> u8 {
    let trailing_zeros = addr.trailing_zeros() as u8;
    MAX_LENGTH - trailing_zeros
}

/// Power-of-two aligned IPv4 block: base address plus prefix length.
///
/// The base address never has host bits set, so the block always covers
/// exactly `[addr, addr + 2^(32 - mask) - 1]`.
#[derive(Eq, PartialEq, Ord, PartialOrd, Debug, Copy, Clone, Hash)]
pub struct CidrBlock {
    addr: Ipv4Addr,
    mask: u8,
}

impl CidrBlock {
    /// Create a block, checking the prefix length and the alignment of `addr`.
    pub fn new(addr: Ipv4Addr, mask: u8) -> Result<CidrBlock, AggregateError> {
        if mask > MAX_LENGTH {
            return Err(AggregateError::InvalidPrefixLength(mask));
        }
        if !is_aligned(u32::from(addr), mask) {
            return Err(AggregateError::Misaligned { addr, mask });
        }
        Ok(CidrBlock { addr, mask })
    }

    /// Build a block the caller has already proven aligned.
    pub(crate) fn from_aligned(addr: u32, mask: u8) -> CidrBlock {
        debug_assert!(is_aligned(addr, mask), "{addr} not aligned to /{mask}");
        CidrBlock {
            addr: Ipv4Addr::from(addr),
            mask,
        }
    }

    /// Base (network) address.
    pub fn addr(&self) -> Ipv4Addr {
        self.addr
    }

    /// Prefix length.
    pub fn mask(&self) -> u8 {
        self.mask
    }

    /// Number of addresses covered.
    pub fn size(&self) -> u64 {
        block_size(self.mask)
    }

    /// First address as `u32`.
    pub fn start(&self) -> u32 {
        u32::from(self.addr)
    }

    /// Last address as `u32`.
    pub fn end(&self) -> u32 {
        // size >= 1 and the block is aligned, so this stays within u32
        (u64::from(self.start()) + self.size() - 1) as u32
    }
}

impl FromStr for CidrBlock {
    type Err = AggregateError;

    /// Parse `"a.b.c.d/p"`; the address must already be aligned to `p`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (addr, mask) = s
            .trim()
            .split_once('/')
            .ok_or_else(|| AggregateError::InvalidAddress(s.to_string()))?;
        let addr = parse(addr)?;
        let mask: u8 = mask
            .parse()
            .map_err(|_| AggregateError::InvalidAddress(s.to_string()))?;
        CidrBlock::new(Ipv4Addr::from(addr), mask)
    }
}

impl Serialize for CidrBlock {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::ser::Serializer,
    {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for CidrBlock {
    fn deserialize<D>(deserializer: D) -> Result<CidrBlock, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        CidrBlock::from_str(&s).map_err(de::Error::custom)
    }
}

impl std::fmt::Display for CidrBlock {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "{}/{}", self.addr, self.mask)
    }
}

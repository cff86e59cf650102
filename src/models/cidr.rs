//! IPv4 address and CIDR block utilities.
//!
//! Provides [`CidrBlock`] for representing a gateway address with prefix
//! length, along with the containment primitives the range validator is
//! built on.

use serde::de;
use serde::{Deserialize, Deserializer, Serialize};
use std::net::Ipv4Addr;
use std::str::FromStr;
use thiserror::Error;

/// Maximum prefix length for an IPv4 CIDR block (32 bits).
pub const MAX_PREFIX: u8 = 32;

/// Which user-entered address field a parse error refers to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AddressField {
    Gateway,
    Start,
    End,
}

impl std::fmt::Display for AddressField {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self {
            AddressField::Gateway => write!(f, "gateway"),
            AddressField::Start => write!(f, "start"),
            AddressField::End => write!(f, "end"),
        }
    }
}

/// Parse failures for user-entered network fields.
///
/// Malformed input is never coerced into an out-of-range outcome; the
/// caller gets a distinct error naming the offending field.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum NetParseError {
    /// Gateway string is not a valid address/prefix pair.
    #[error("malformed CIDR block {input:?}: {reason}")]
    MalformedCidr { input: String, reason: String },
    /// An address string is not valid dotted-decimal IPv4.
    #[error("malformed {field} address {input:?}")]
    MalformedAddress { field: AddressField, input: String },
}

/// Convert a CIDR prefix length to a subnet mask as u32.
///
/// # Examples
/// ```
/// use deploy_wizard_validation::models::prefix_mask;
/// assert_eq!(prefix_mask(24).unwrap(), 0xFFFFFF00);
/// ```
pub fn prefix_mask(prefix: u8) -> Result<u32, NetParseError> {
    if prefix > MAX_PREFIX {
        Err(NetParseError::MalformedCidr {
            input: format!("/{prefix}"),
            reason: "prefix length is too long".to_string(),
        })
    } else {
        let right_len = MAX_PREFIX - prefix;
        let all_bits = u32::MAX as u64;

        let mask = (all_bits >> right_len) << right_len;

        Ok(mask as u32)
    }
}

/// Parse a dotted-decimal IPv4 address, tagging failures with the field
/// they came from.
pub fn parse_address(field: AddressField, value: &str) -> Result<Ipv4Addr, NetParseError> {
    Ipv4Addr::from_str(value).map_err(|_| NetParseError::MalformedAddress {
        field,
        input: value.to_string(),
    })
}

/// An IPv4 gateway address with prefix length (e.g. "10.0.0.1/24").
#[derive(Eq, Ord, Debug, Copy, Clone, Hash)]
pub struct CidrBlock {
    /// The address as entered (not necessarily the network base).
    pub addr: Ipv4Addr,
    /// The prefix length (0-32).
    pub prefix: u8,
}

impl CidrBlock {
    /// Parse a [`CidrBlock`] from CIDR notation (e.g. "192.168.1.1/24").
    pub fn new(addr_cidr: &str) -> Result<CidrBlock, NetParseError> {
        let trimmed = addr_cidr.trim();
        let malformed = |reason: &str| NetParseError::MalformedCidr {
            input: addr_cidr.to_string(),
            reason: reason.to_string(),
        };

        let parts: Vec<&str> = trimmed.split('/').collect();
        if parts.len() != 2 {
            return Err(malformed("expected address/prefix"));
        }
        let addr: Ipv4Addr = parts[0]
            .parse()
            .map_err(|_| malformed("invalid address"))?;
        let prefix: u8 = parts[1]
            .parse()
            .map_err(|_| malformed("invalid prefix length"))?;
        if prefix > MAX_PREFIX {
            return Err(malformed("prefix length is too long"));
        }
        Ok(CidrBlock { addr, prefix })
    }

    /// The lowest (network base) address of the block.
    pub fn network(&self) -> Ipv4Addr {
        // prefix was range-checked at construction
        let mask = prefix_mask(self.prefix).unwrap_or(u32::MAX);
        Ipv4Addr::from(u32::from(self.addr) & mask)
    }

    /// The highest (broadcast) address of the block.
    pub fn broadcast(&self) -> Ipv4Addr {
        let mask = prefix_mask(self.prefix).unwrap_or(u32::MAX);
        let network_bits = u32::from(self.addr) & mask;
        Ipv4Addr::from(network_bits | !mask)
    }

    /// Whether `addr` lies within the block's inclusive address range.
    pub fn contains(&self, addr: Ipv4Addr) -> bool {
        let bits = u32::from(addr);
        bits >= u32::from(self.network()) && bits <= u32::from(self.broadcast())
    }
}

impl std::fmt::Display for CidrBlock {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "{}/{}", self.addr, self.prefix)
    }
}

impl Serialize for CidrBlock {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::ser::Serializer,
    {
        let cidr = format!("{}/{}", self.addr, self.prefix);
        serializer.serialize_str(&cidr)
    }
}

impl<'de> Deserialize<'de> for CidrBlock {
    fn deserialize<D>(deserializer: D) -> Result<CidrBlock, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        CidrBlock::new(&s).map_err(|e| de::Error::custom(e.to_string()))
    }
}

impl PartialEq for CidrBlock {
    fn eq(&self, other: &CidrBlock) -> bool {
        self.addr == other.addr && self.prefix == other.prefix
    }
}

impl PartialOrd for CidrBlock {
    fn partial_cmp(&self, other: &CidrBlock) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

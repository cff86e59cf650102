//! Domain models for the deployment wizard validation core.
//!
//! This module contains the core data structures used throughout the crate:
//! - [`CidrBlock`] - IPv4 gateway address with prefix length
//! - [`NetParseError`] - parse-failure taxonomy for network fields
//! - [`Catalog`] - the known networks and storage policies steps validate against

mod catalog;
mod cidr;

// Re-export public types
pub use catalog::Catalog;
pub use cidr::{parse_address, prefix_mask, AddressField, CidrBlock, NetParseError, MAX_PREFIX};

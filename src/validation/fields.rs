//! Field-level validators for wizard form values.
//!
//! These mirror the per-field rules the wizard attaches to the "create new
//! network" fields: required, no surrounding whitespace, valid IP or CIDR,
//! and lowercase segment names.

use crate::models::{CidrBlock, NetParseError};
use lazy_static::lazy_static;
use regex::Regex;
use std::net::Ipv4Addr;
use std::str::FromStr;
use thiserror::Error;

lazy_static! {
    // RFC-1123 label: what Kubernetes accepts as a segment/cluster name.
    static ref NAME_RE: Regex =
        Regex::new(r"^[a-z0-9]([a-z0-9-]*[a-z0-9])?$").expect("Invalid Regex?");
}

/// Per-rule validation failures with displayable messages.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FieldError {
    #[error("{0} is required")]
    Required(&'static str),
    #[error("{0} must not start or end with whitespace")]
    WhitespaceOnEnds(&'static str),
    #[error("{0} must be a valid IPv4 address")]
    InvalidIp(&'static str),
    #[error("{0} must be a valid network segment in CIDR notation")]
    InvalidNetworkSegment(&'static str),
    #[error("{0} must consist of lowercase letters, digits and hyphens")]
    InvalidName(&'static str),
}

/// Reject empty values.
pub fn required(name: &'static str, value: &str) -> Result<(), FieldError> {
    if value.is_empty() {
        Err(FieldError::Required(name))
    } else {
        Ok(())
    }
}

/// Reject values with leading or trailing whitespace.
pub fn no_whitespace_on_ends(name: &'static str, value: &str) -> Result<(), FieldError> {
    if value != value.trim() {
        Err(FieldError::WhitespaceOnEnds(name))
    } else {
        Ok(())
    }
}

/// Accept dotted-decimal IPv4 addresses only.
pub fn is_valid_ip(name: &'static str, value: &str) -> Result<(), FieldError> {
    Ipv4Addr::from_str(value)
        .map(|_| ())
        .map_err(|_| FieldError::InvalidIp(name))
}

/// Accept address/prefix CIDR notation only.
pub fn is_valid_network_segment(name: &'static str, value: &str) -> Result<(), FieldError> {
    match CidrBlock::new(value) {
        Ok(_) => Ok(()),
        Err(NetParseError::MalformedCidr { .. }) | Err(NetParseError::MalformedAddress { .. }) => {
            Err(FieldError::InvalidNetworkSegment(name))
        }
    }
}

/// Accept lowercase RFC-1123 labels only (segment and cluster names).
pub fn is_valid_cluster_name(name: &'static str, value: &str) -> Result<(), FieldError> {
    if NAME_RE.is_match(value) {
        Ok(())
    } else {
        Err(FieldError::InvalidName(name))
    }
}

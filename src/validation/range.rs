//! Subnet range validation.
//!
//! Checks that a user-entered start/end address pair lies entirely within
//! the subnet derived from the gateway's CIDR block, and classifies which
//! endpoint violates containment so the caller can surface a targeted
//! message.

use crate::models::{parse_address, AddressField, CidrBlock, NetParseError};

/// Classification of a start/end range against the gateway's subnet.
///
/// The out-of-range variants are expected, user-facing results, not parse
/// failures; malformed input is reported as [`NetParseError`] instead.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RangeOutcome {
    /// Both endpoints lie inside the subnet.
    Valid,
    /// The start address is outside the subnet, the end is inside.
    StartOutOfRange,
    /// The end address is outside the subnet, the start is inside.
    EndOutOfRange,
    /// Both endpoints are outside the subnet.
    BothOutOfRange,
}

impl RangeOutcome {
    /// The displayable message for this outcome, if any.
    pub fn message(&self) -> Option<&'static str> {
        match self {
            RangeOutcome::Valid => None,
            RangeOutcome::StartOutOfRange => {
                Some("The Start IP is out of the provided subnet.")
            }
            RangeOutcome::EndOutOfRange => Some("The End IP is out of the provided subnet."),
            RangeOutcome::BothOutOfRange => {
                Some("The Start and End IP are out of the provided subnet.")
            }
        }
    }

    pub fn is_valid(&self) -> bool {
        matches!(self, RangeOutcome::Valid)
    }
}

/// Validate that `[start, end]` lies within the subnet of `gateway`.
///
/// `gateway` is CIDR notation ("192.168.1.1/24"); `start` and `end` are
/// dotted-decimal addresses. Containment is inclusive of the network base
/// and broadcast addresses. No ordering is required between `start` and
/// `end`.
///
/// # Returns
/// * `Ok(RangeOutcome)` - the containment classification
/// * `Err(NetParseError)` - if any of the three inputs fails to parse
pub fn validate_range(
    gateway: &str,
    start: &str,
    end: &str,
) -> Result<RangeOutcome, NetParseError> {
    let block = CidrBlock::new(gateway)?;
    let start_ip = parse_address(AddressField::Start, start)?;
    let end_ip = parse_address(AddressField::End, end)?;

    // The both-contained case must win before the single-sided checks.
    let outcome = if block.contains(start_ip) && block.contains(end_ip) {
        RangeOutcome::Valid
    } else if block.contains(start_ip) {
        RangeOutcome::EndOutOfRange
    } else if block.contains(end_ip) {
        RangeOutcome::StartOutOfRange
    } else {
        RangeOutcome::BothOutOfRange
    };
    Ok(outcome)
}

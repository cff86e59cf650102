//! Validation primitives shared by the wizard steps.

mod fields;
mod range;

pub use fields::{
    is_valid_cluster_name, is_valid_ip, is_valid_network_segment, no_whitespace_on_ends, required,
    FieldError,
};
pub use range::{validate_range, RangeOutcome};

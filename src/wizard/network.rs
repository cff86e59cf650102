//! Workload network settings step.
//!
//! The user either picks an existing workload network or creates a new
//! segment. Each variant carries its own fixed set of required fields, so
//! the schema never mutates as the selection changes.

use crate::models::Catalog;
use crate::validation::{
    is_valid_cluster_name, is_valid_ip, is_valid_network_segment, no_whitespace_on_ends,
    required, validate_range,
};
use crate::wizard::{StepReport, WORKLOAD_NETWORK_STEP};
use serde::{Deserialize, Serialize};

/// Shown when a chosen workload network is not in the catalog.
pub const NETWORK_NOT_FOUND_MSG: &str =
    "Provided Workload Network is not found, please select again from the drop-down";
/// Shown when a new segment's port group is not in the catalog.
pub const SEGMENT_NOT_FOUND_MSG: &str =
    "Provided Workload Network Segment is not found, please select again from the drop-down";

/// The workload network form, as a tagged variant.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
#[serde(tag = "mode", rename_all = "snake_case")]
pub enum NetworkSelection {
    /// Reuse a workload network that already exists.
    Existing { network_name: String },
    /// Create a new network segment.
    New {
        segment_name: String,
        port_group: String,
        gateway_cidr: String,
        start_address: String,
        end_address: String,
    },
}

impl NetworkSelection {
    /// Validate the selection against the catalog and return the step's
    /// report. Field-level failures are collected first; the subnet range
    /// check only runs once the three network fields parse individually,
    /// matching how the wizard defers the cross-field check.
    pub fn validate(&self, catalog: &Catalog) -> StepReport {
        let mut errors: Vec<String> = vec![];

        match self {
            NetworkSelection::Existing { network_name } => {
                if let Err(e) = required("network name", network_name) {
                    errors.push(e.to_string());
                } else if !catalog.has_workload_network(network_name) {
                    errors.push(NETWORK_NOT_FOUND_MSG.to_string());
                }
            }
            NetworkSelection::New {
                segment_name,
                port_group,
                gateway_cidr,
                start_address,
                end_address,
            } => {
                for check in [
                    required("segment name", segment_name)
                        .and_then(|_| no_whitespace_on_ends("segment name", segment_name))
                        .and_then(|_| is_valid_cluster_name("segment name", segment_name)),
                    required("port group", port_group),
                    required("gateway address", gateway_cidr)
                        .and_then(|_| no_whitespace_on_ends("gateway address", gateway_cidr))
                        .and_then(|_| is_valid_network_segment("gateway address", gateway_cidr)),
                    required("start address", start_address)
                        .and_then(|_| no_whitespace_on_ends("start address", start_address))
                        .and_then(|_| is_valid_ip("start address", start_address)),
                    required("end address", end_address)
                        .and_then(|_| no_whitespace_on_ends("end address", end_address))
                        .and_then(|_| is_valid_ip("end address", end_address)),
                ] {
                    if let Err(e) = check {
                        errors.push(e.to_string());
                    }
                }

                if !port_group.is_empty() && !catalog.has_port_group(port_group) {
                    errors.push(SEGMENT_NOT_FOUND_MSG.to_string());
                }

                // Cross-field check, only once the fields parse on their own.
                if errors.is_empty() {
                    match validate_range(gateway_cidr, start_address, end_address) {
                        Ok(outcome) => {
                            if let Some(msg) = outcome.message() {
                                errors.push(msg.to_string());
                            }
                        }
                        Err(e) => errors.push(e.to_string()),
                    }
                }
            }
        }

        if errors.is_empty() {
            StepReport::valid(WORKLOAD_NETWORK_STEP)
        } else {
            StepReport::invalid(WORKLOAD_NETWORK_STEP, errors)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn catalog() -> Catalog {
        Catalog {
            workload_networks: vec!["wrk-network-1".to_string()],
            port_groups: vec!["vm-network".to_string()],
            storage_policies: vec![],
        }
    }

    fn new_selection() -> NetworkSelection {
        NetworkSelection::New {
            segment_name: "wrk-segment-01".to_string(),
            port_group: "vm-network".to_string(),
            gateway_cidr: "192.168.1.1/24".to_string(),
            start_address: "192.168.1.10".to_string(),
            end_address: "192.168.1.200".to_string(),
        }
    }

    #[test]
    fn test_existing_network_in_catalog() {
        let selection = NetworkSelection::Existing {
            network_name: "wrk-network-1".to_string(),
        };
        assert!(selection.validate(&catalog()).is_valid());
    }

    #[test]
    fn test_existing_network_not_in_catalog() {
        let selection = NetworkSelection::Existing {
            network_name: "wrk-network-9".to_string(),
        };
        let report = selection.validate(&catalog());
        assert!(!report.is_valid());
        assert_eq!(report.errors, vec![NETWORK_NOT_FOUND_MSG.to_string()]);
    }

    #[test]
    fn test_existing_network_name_required() {
        let selection = NetworkSelection::Existing {
            network_name: String::new(),
        };
        let report = selection.validate(&catalog());
        assert_eq!(report.errors, vec!["network name is required".to_string()]);
    }

    #[test]
    fn test_new_network_valid() {
        assert!(new_selection().validate(&catalog()).is_valid());
    }

    #[test]
    fn test_new_network_end_out_of_subnet() {
        let selection = NetworkSelection::New {
            segment_name: "wrk-segment-01".to_string(),
            port_group: "vm-network".to_string(),
            gateway_cidr: "192.168.1.1/24".to_string(),
            start_address: "192.168.1.10".to_string(),
            end_address: "192.168.2.5".to_string(),
        };
        let report = selection.validate(&catalog());
        assert_eq!(
            report.errors,
            vec!["The End IP is out of the provided subnet.".to_string()]
        );
    }

    #[test]
    fn test_new_network_unknown_port_group() {
        let selection = NetworkSelection::New {
            segment_name: "wrk-segment-01".to_string(),
            port_group: "dvs-other".to_string(),
            gateway_cidr: "192.168.1.1/24".to_string(),
            start_address: "192.168.1.10".to_string(),
            end_address: "192.168.1.200".to_string(),
        };
        let report = selection.validate(&catalog());
        assert_eq!(report.errors, vec![SEGMENT_NOT_FOUND_MSG.to_string()]);
    }

    #[test]
    fn test_new_network_field_errors_collected() {
        let selection = NetworkSelection::New {
            segment_name: "Wrk_Segment".to_string(),
            port_group: String::new(),
            gateway_cidr: "192.168.1.1".to_string(),
            start_address: "192.168.1.999".to_string(),
            end_address: " 192.168.1.200".to_string(),
        };
        let report = selection.validate(&catalog());
        assert!(!report.is_valid());
        assert!(report
            .errors
            .contains(&"segment name must consist of lowercase letters, digits and hyphens".to_string()));
        assert!(report.errors.contains(&"port group is required".to_string()));
        assert!(report
            .errors
            .contains(&"gateway address must be a valid network segment in CIDR notation".to_string()));
        assert!(report
            .errors
            .contains(&"start address must be a valid IPv4 address".to_string()));
        assert!(report
            .errors
            .contains(&"end address must not start or end with whitespace".to_string()));
        // the range check never ran, so no subnet message
        assert!(!report.errors.iter().any(|e| e.contains("subnet")));
    }

    #[test]
    fn test_selection_serde_tagging() {
        let selection = NetworkSelection::Existing {
            network_name: "wrk-network-1".to_string(),
        };
        let json = serde_json::to_string(&selection).unwrap();
        assert!(json.contains("\"mode\":\"existing\""));
        let back: NetworkSelection = serde_json::from_str(&json).unwrap();
        assert_eq!(back, selection);
    }
}

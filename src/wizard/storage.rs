//! Storage policy settings step.
//!
//! Three storage policies are chosen for the control plane (master,
//! ephemeral and image); each is required and must exist in the catalog.

use crate::models::Catalog;
use crate::validation::required;
use crate::wizard::{StepReport, STORAGE_POLICY_STEP};
use serde::{Deserialize, Serialize};

pub const MASTER_POLICY_NOT_FOUND_MSG: &str =
    "Provided Master Storage Policy is not found, please select one from drop-down";
pub const EPHEMERAL_POLICY_NOT_FOUND_MSG: &str =
    "Provided Ephemeral Storage Policy is not found, please select one from drop-down";
pub const IMAGE_POLICY_NOT_FOUND_MSG: &str =
    "Provided Image Storage Policy is not found, please select one from drop-down";

/// The storage policy form.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq, Default)]
pub struct StoragePolicySelection {
    pub master: String,
    pub ephemeral: String,
    pub image: String,
}

impl StoragePolicySelection {
    /// Validate all three policies against the catalog. Errors are
    /// collected per field so each mismatch gets its own message.
    pub fn validate(&self, catalog: &Catalog) -> StepReport {
        let mut errors: Vec<String> = vec![];

        let policies = [
            ("master storage policy", &self.master, MASTER_POLICY_NOT_FOUND_MSG),
            (
                "ephemeral storage policy",
                &self.ephemeral,
                EPHEMERAL_POLICY_NOT_FOUND_MSG,
            ),
            ("image storage policy", &self.image, IMAGE_POLICY_NOT_FOUND_MSG),
        ];

        for (name, value, not_found_msg) in policies {
            if let Err(e) = required(name, value) {
                errors.push(e.to_string());
            } else if !catalog.has_storage_policy(value) {
                errors.push(not_found_msg.to_string());
            }
        }

        if errors.is_empty() {
            StepReport::valid(STORAGE_POLICY_STEP)
        } else {
            StepReport::invalid(STORAGE_POLICY_STEP, errors)
        }
    }
}

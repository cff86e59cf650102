//! Wizard steps and shell.

mod network;
mod shell;
mod storage;

pub use network::{NetworkSelection, NETWORK_NOT_FOUND_MSG, SEGMENT_NOT_FOUND_MSG};
pub use shell::{StepReport, WizardShell, STORAGE_POLICY_STEP, WORKLOAD_NETWORK_STEP};
pub use storage::{
    StoragePolicySelection, EPHEMERAL_POLICY_NOT_FOUND_MSG, IMAGE_POLICY_NOT_FOUND_MSG,
    MASTER_POLICY_NOT_FOUND_MSG,
};

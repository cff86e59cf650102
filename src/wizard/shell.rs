//! Wizard shell state.
//!
//! The shell owns the per-step validation results and gates "next step"
//! progression. Steps return a [`StepReport`] to the shell instead of
//! writing flags into shared mutable state.

use itertools::Itertools;
use serde::Serialize;

/// Step name for the workload network settings form.
pub const WORKLOAD_NETWORK_STEP: &str = "workload-network";
/// Step name for the storage policy settings form.
pub const STORAGE_POLICY_STEP: &str = "storage-policy";

/// The typed result a wizard step hands back to the shell.
#[derive(Serialize, Debug, Clone, PartialEq, Eq)]
pub struct StepReport {
    /// Name of the step that produced this report.
    pub step: &'static str,
    /// Displayable error messages; empty when the step is valid.
    pub errors: Vec<String>,
}

impl StepReport {
    pub fn valid(step: &'static str) -> StepReport {
        StepReport {
            step,
            errors: vec![],
        }
    }

    pub fn invalid(step: &'static str, errors: Vec<String>) -> StepReport {
        StepReport { step, errors }
    }

    pub fn is_valid(&self) -> bool {
        self.errors.is_empty()
    }
}

/// Ordered collection of step reports, keyed by step name.
#[derive(Debug, Default)]
pub struct WizardShell {
    reports: Vec<StepReport>,
}

impl WizardShell {
    /// Create a new empty shell.
    pub fn new() -> WizardShell {
        WizardShell { reports: vec![] }
    }

    /// Record a step's report, replacing any earlier report for the same
    /// step. Re-submission happens every time the user edits a field, so
    /// only the latest result counts.
    pub fn submit(&mut self, report: StepReport) {
        if !report.is_valid() {
            log::warn!(
                "Step '{}' failed validation: {}",
                report.step,
                report.errors.iter().join("; ")
            );
        }
        if let Some(existing) = self.reports.iter_mut().find(|r| r.step == report.step) {
            *existing = report;
        } else {
            self.reports.push(report);
        }
    }

    /// Whether the named step has been submitted and is valid.
    pub fn step_valid(&self, step: &str) -> bool {
        self.reports
            .iter()
            .any(|r| r.step == step && r.is_valid())
    }

    /// Whether the wizard can proceed: at least one step submitted and all
    /// submitted steps valid.
    pub fn can_proceed(&self) -> bool {
        !self.reports.is_empty() && self.reports.iter().all(|r| r.is_valid())
    }

    /// Messages of all invalid steps, in submission order.
    pub fn blocking_errors(&self) -> Vec<&str> {
        self.reports
            .iter()
            .flat_map(|r| r.errors.iter().map(String::as_str))
            .collect()
    }

    /// All submitted reports, in submission order.
    pub fn reports(&self) -> &[StepReport] {
        &self.reports
    }
}

//! Terminal report for wizard validation results.

use crate::wizard::WizardShell;
use colored::Colorize;

/// Format a step name as a fixed-width, left-aligned field.
pub fn format_step_name(name: &str, width: usize) -> String {
    if name.len() >= width {
        name.to_string()
    } else {
        format!("{name:<width$}")
    }
}

/// Print a per-step validation report to the terminal.
///
/// Valid steps print a green "ok"; invalid steps print each of their
/// messages in red.
pub fn print_report(shell: &WizardShell) {
    let width = shell
        .reports()
        .iter()
        .map(|r| r.step.len())
        .max()
        .unwrap_or(0)
        + 2;

    for report in shell.reports() {
        if report.is_valid() {
            println!("{} {}", format_step_name(report.step, width), "ok".green());
        } else {
            for (i, msg) in report.errors.iter().enumerate() {
                let label = if i == 0 {
                    format_step_name(report.step, width)
                } else {
                    format_step_name("", width)
                };
                println!("{} {}", label, msg.red());
            }
        }
    }

    if shell.can_proceed() {
        println!("{}", "Configuration is valid, wizard can proceed.".green());
    } else {
        println!(
            "{}",
            format!(
                "Wizard blocked: {} validation error(s).",
                shell.blocking_errors().len()
            )
            .red()
        );
    }
}

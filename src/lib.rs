// cargo watch -x 'fmt' -x 'run'  // 'run -- --some-arg'

pub mod models;
pub mod prefill;
pub mod report;
pub mod validation;
pub mod wizard;

use models::Catalog;
use std::error::Error;
use wizard::WizardShell;

/// Load the uploaded configuration and catalog, validate both wizard steps
/// and return the populated shell.
pub async fn run_wizard_validation(
    prefill_path: &str,
    catalog_path: &str,
) -> Result<WizardShell, Box<dyn Error>> {
    let catalog = Catalog::from_file(catalog_path)?;
    let config = prefill::load_prefill(prefill_path).await?;

    let network = prefill::network_selection_from_prefill(&config, &catalog);
    let storage = prefill::storage_selection_from_prefill(&config);

    let mut shell = WizardShell::new();
    shell.submit(network.validate(&catalog));
    shell.submit(storage.validate(&catalog));

    Ok(shell)
}

use deploy_wizard_validation::report::print_report;
use deploy_wizard_validation::run_wizard_validation;
use log4rs;
use std::error::Error;

#[tokio::main]
async fn main() -> Result<(), Box<dyn Error>> {
    // Do as little as possible in main.rs as it can't contain any tests
    log4rs::init_file("log4rs.yml", Default::default()).expect("Error initializing log4rs");
    log::info!("#Start main()");

    let mut args = std::env::args().skip(1);
    let prefill_path = args.next().unwrap_or_else(|| "uploaded_config.json".to_string());
    let catalog_path = args.next().unwrap_or_else(|| "catalog.json".to_string());

    let shell = run_wizard_validation(&prefill_path, &catalog_path).await?;
    print_report(&shell);

    if !shell.can_proceed() {
        std::process::exit(1);
    }
    Ok(())
}

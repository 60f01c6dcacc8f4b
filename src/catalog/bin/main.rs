use tokio::io::{stdin, stdout, BufReader};
use library_catalog::catalog::controller::Controller;
use library_catalog::catalog::factory::create_catalog_service;
use library_catalog::core::domain::Configuration;
use library_catalog::core::library::LibraryError;
use library_catalog::utils::logs::setup_tracing;

#[tokio::main]
async fn main() -> Result<(), LibraryError> {
    let config = Configuration::from_env();
    setup_tracing(&config);
    tracing::info!(branch_id = config.branch_id.as_str(), "starting library catalog");

    let catalog_service = create_catalog_service(&config).await?;
    let mut controller = Controller::new(catalog_service, BufReader::new(stdin()), stdout());
    controller.run().await
}

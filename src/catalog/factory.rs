use std::sync::Arc;
use crate::catalog::domain::CatalogService;
use crate::catalog::domain::service::CatalogServiceImpl;
use crate::core::domain::Configuration;
use crate::core::library::LibraryResult;
use crate::gateway::factory::create_publisher;
use crate::items::factory::{create_item_repository, seed_items};

// builds a catalog holding the startup seed items; the catalog lives for the process
pub async fn create_catalog_service(config: &Configuration) -> LibraryResult<Arc<dyn CatalogService>> {
    let item_repo = create_item_repository(seed_items()).await?;
    let publisher = create_publisher(config.events_via);
    Ok(Arc::new(CatalogServiceImpl::new(config, item_repo, publisher)))
}

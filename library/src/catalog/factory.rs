use std::sync::Arc;
use std::time::Duration;
use crate::catalog::domain::CatalogService;
use crate::catalog::domain::service::SearchController;
use crate::catalog::gateway::CatalogGateway;
use crate::catalog::gateway::http_catalog_gateway::HttpCatalogGateway;
use crate::core::domain::Configuration;
use crate::core::library::LibraryResult;

pub fn create_catalog_gateway(config: &Configuration) -> LibraryResult<Arc<dyn CatalogGateway>> {
    let gateway = HttpCatalogGateway::new(
        config.api_base_url.as_str(), Duration::from_secs(config.request_timeout_secs))?;
    Ok(Arc::new(gateway))
}

pub fn create_catalog_service(config: &Configuration) -> LibraryResult<Arc<dyn CatalogService>> {
    let gateway = create_catalog_gateway(config)?;
    Ok(Arc::new(SearchController::new(config, gateway)))
}

pub mod http_catalog_gateway;
#[cfg(test)]
pub(crate) mod stub_catalog_gateway;

use async_trait::async_trait;
use crate::books::dto::{VolumeDto, VolumeListDto};
use crate::core::library::LibraryResult;

// CatalogGateway is the HTTP boundary to the external book catalog.
#[async_trait]
pub trait CatalogGateway: Sync + Send {
    // one GET against the search endpoint
    async fn search_volumes(&self, query: &str, max_results: usize, start_index: usize) -> LibraryResult<VolumeListDto>;

    // one GET against the detail endpoint
    async fn get_volume(&self, id: &str) -> LibraryResult<VolumeDto>;
}

use std::sync::Arc;
use crate::core::domain::{Configuration, StorageKind};
use crate::favorites::domain::FavoritesService;
use crate::favorites::domain::service::FavoritesStore;
use crate::favorites::repository::FavoritesRepository;
use crate::favorites::repository::file_favorites_repository::FileFavoritesRepository;
use crate::favorites::repository::memory_favorites_repository::MemoryFavoritesRepository;

pub fn create_favorites_repository(config: &Configuration) -> Box<dyn FavoritesRepository> {
    match config.storage {
        StorageKind::File => {
            Box::new(FileFavoritesRepository::new(&config.storage_dir, config.favorites_key.as_str()))
        }
        StorageKind::Memory => {
            Box::new(MemoryFavoritesRepository::new(config.favorites_key.as_str()))
        }
    }
}

// Builds the single store shared by every consumer of the process.
pub fn create_favorites_service(config: &Configuration) -> Arc<dyn FavoritesService> {
    Arc::new(FavoritesStore::with_image_proxy(
        create_favorites_repository(config), config.image_proxy_url.as_deref()))
}

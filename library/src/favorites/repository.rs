pub mod file_favorites_repository;
pub mod memory_favorites_repository;

use crate::core::library::{LibraryError, LibraryResult};
use crate::core::repository::Repository;
use crate::favorites::domain::model::{FavoriteRecord, FavoritesSet};

// FavoritesRepository stores the whole FavoritesSet as one JSON array under a single key.
pub trait FavoritesRepository: Repository {
    fn key(&self) -> &str;

    // Ok(None) when the slot is empty; Err(StorageLoad) when it holds something unreadable.
    fn load_favorites(&self) -> LibraryResult<Option<FavoritesSet>> {
        let raw = match self.read(self.key()) {
            Ok(Some(raw)) => raw,
            Ok(None) => return Ok(None),
            Err(err) => return Err(LibraryError::storage_load(
                format!("failed to read {} due to {}", self.key(), err).as_str())),
        };
        if raw.trim().is_empty() {
            return Ok(None);
        }
        serde_json::from_str::<Vec<FavoriteRecord>>(&raw)
            .map(|records| Some(FavoritesSet::from(records)))
            .map_err(|err| LibraryError::storage_load(
                format!("corrupt favorites under {} due to {}", self.key(), err).as_str()))
    }

    fn save_favorites(&self, favorites: &FavoritesSet) -> LibraryResult<()> {
        let json = serde_json::to_string(favorites.records())?;
        self.write(self.key(), json.as_str())
    }
}

pub(crate) fn validate_key(key: &str) -> LibraryResult<()> {
    if key.is_empty() || !key.chars().all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_') {
        return Err(LibraryError::validation(
            format!("invalid storage key {:?}", key).as_str(), Some("key".to_string())));
    }
    Ok(())
}

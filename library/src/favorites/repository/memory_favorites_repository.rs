use std::collections::HashMap;
use std::sync::{Mutex, PoisonError};
use crate::core::library::{LibraryError, LibraryResult};
use crate::core::repository::Repository;
use crate::favorites::repository::FavoritesRepository;

// Process-local slots, optionally capped in bytes the way browser local storage is.
#[derive(Debug)]
pub struct MemoryFavoritesRepository {
    slots: Mutex<HashMap<String, String>>,
    key: String,
    quota: Option<usize>,
}

impl MemoryFavoritesRepository {
    pub fn new(key: &str) -> Self {
        Self {
            slots: Mutex::new(HashMap::new()),
            key: key.to_string(),
            quota: None,
        }
    }

    pub fn with_quota(key: &str, quota: usize) -> Self {
        Self {
            quota: Some(quota),
            ..Self::new(key)
        }
    }
}

impl Repository for MemoryFavoritesRepository {
    fn read(&self, key: &str) -> LibraryResult<Option<String>> {
        let slots = self.slots.lock().unwrap_or_else(PoisonError::into_inner);
        Ok(slots.get(key).cloned())
    }

    fn write(&self, key: &str, value: &str) -> LibraryResult<()> {
        if let Some(quota) = self.quota {
            if value.len() > quota {
                return Err(LibraryError::storage_persist(
                    format!("quota exceeded writing {} bytes to {}", value.len(), key).as_str(),
                    Some("QuotaExceeded".to_string())));
            }
        }
        let mut slots = self.slots.lock().unwrap_or_else(PoisonError::into_inner);
        slots.insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn delete(&self, key: &str) -> LibraryResult<()> {
        let mut slots = self.slots.lock().unwrap_or_else(PoisonError::into_inner);
        slots.remove(key);
        Ok(())
    }
}

impl FavoritesRepository for MemoryFavoritesRepository {
    fn key(&self) -> &str {
        self.key.as_str()
    }
}

#[cfg(test)]
mod tests {
    use crate::core::library::LibraryError;
    use crate::core::repository::Repository;
    use crate::favorites::repository::memory_favorites_repository::MemoryFavoritesRepository;

    #[tokio::test]
    async fn test_should_write_read_delete() {
        let repo = MemoryFavoritesRepository::new("favs");
        repo.write("favs", "[]").expect("should write");
        assert_eq!(Some("[]".to_string()), repo.read("favs").expect("should read"));
        repo.delete("favs").expect("should delete");
        assert_eq!(None, repo.read("favs").expect("should read"));
    }

    #[tokio::test]
    async fn test_should_reject_writes_over_quota() {
        let repo = MemoryFavoritesRepository::with_quota("favs", 4);
        assert!(repo.write("favs", "[]").is_ok());
        let err = repo.write("favs", "[1,2,3]").expect_err("should exceed quota");
        assert!(matches!(err, LibraryError::StoragePersist { .. }));
        assert_eq!(Some("[]".to_string()), repo.read("favs").expect("should read"));
    }
}

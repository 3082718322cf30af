use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use crate::core::library::{LibraryError, LibraryResult};
use crate::core::repository::Repository;
use crate::favorites::repository::{validate_key, FavoritesRepository};

// FileFavoritesRepository keeps each key in `<dir>/<key>.json`. Writes go through a temp file
// and a rename so a crash never leaves half a JSON document behind.
#[derive(Debug)]
pub struct FileFavoritesRepository {
    dir: PathBuf,
    key: String,
}

impl FileFavoritesRepository {
    pub fn new(dir: &Path, key: &str) -> Self {
        Self {
            dir: dir.to_path_buf(),
            key: key.to_string(),
        }
    }

    fn path_for(&self, key: &str) -> LibraryResult<PathBuf> {
        validate_key(key)?;
        Ok(self.dir.join(format!("{}.json", key)))
    }
}

impl Repository for FileFavoritesRepository {
    fn read(&self, key: &str) -> LibraryResult<Option<String>> {
        let path = self.path_for(key)?;
        match fs::read_to_string(&path) {
            Ok(raw) => Ok(Some(raw)),
            Err(err) if err.kind() == ErrorKind::NotFound => Ok(None),
            Err(err) => Err(LibraryError::storage_load(
                format!("failed to read {} due to {}", path.display(), err).as_str())),
        }
    }

    fn write(&self, key: &str, value: &str) -> LibraryResult<()> {
        let path = self.path_for(key)?;
        fs::create_dir_all(&self.dir)?;
        let tmp = path.with_extension("json.tmp");
        fs::write(&tmp, value)?;
        fs::rename(&tmp, &path)?;
        tracing::debug!(path = %path.display(), bytes = value.len(), "favorites slot written");
        Ok(())
    }

    fn delete(&self, key: &str) -> LibraryResult<()> {
        let path = self.path_for(key)?;
        match fs::remove_file(&path) {
            Ok(()) => Ok(()),
            Err(err) if err.kind() == ErrorKind::NotFound => Ok(()),
            Err(err) => Err(LibraryError::from(err)),
        }
    }
}

impl FavoritesRepository for FileFavoritesRepository {
    fn key(&self) -> &str {
        self.key.as_str()
    }
}

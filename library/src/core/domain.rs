use std::path::PathBuf;
use serde::{Deserialize, Serialize};

pub const GOOGLE_BOOKS_API: &str = "https://www.googleapis.com/books/v1/volumes";
pub const IMAGE_PROXY: &str = "https://images.weserv.nl/?url=";
pub const FAVORITES_KEY: &str = "moonLibraryFavorites";

// Identifiable defines common traits shared by records keyed by a catalog identifier
pub trait Identifiable: Sync + Send {
    fn id(&self) -> String;
}

// StorageKind selects the backend for the durable favorites slot
#[derive(Debug, PartialEq, Serialize, Deserialize, Clone, Copy)]
pub enum StorageKind {
    File,
    Memory,
}

// Configuration abstracts config options for the library client
#[derive(Debug, PartialEq, Serialize, Deserialize, Clone)]
pub struct Configuration {
    pub profile: String,
    pub api_base_url: String,
    pub max_results: usize,
    pub request_timeout_secs: u64,
    pub image_proxy_url: Option<String>,
    pub storage: StorageKind,
    pub storage_dir: PathBuf,
    pub favorites_key: String,
    pub bind_addr: String,
}

impl Configuration {
    pub fn new(profile: &str) -> Self {
        let storage = if profile == "test" { StorageKind::Memory } else { StorageKind::File };
        Configuration {
            profile: profile.to_string(),
            api_base_url: GOOGLE_BOOKS_API.to_string(),
            max_results: 12,
            request_timeout_secs: 10,
            image_proxy_url: Some(IMAGE_PROXY.to_string()),
            storage,
            storage_dir: PathBuf::from(".moon-library"),
            favorites_key: FAVORITES_KEY.to_string(),
            bind_addr: "127.0.0.1:3000".to_string(),
        }
    }

    // Overrides defaults from MOON_LIBRARY_* environment variables.
    pub fn from_env(profile: &str) -> Self {
        Self::new(profile).with_overrides(|key| std::env::var(key).ok())
    }

    fn with_overrides<F: Fn(&str) -> Option<String>>(mut self, lookup: F) -> Self {
        if let Some(base) = lookup("MOON_LIBRARY_API_BASE") {
            self.api_base_url = base.trim_end_matches('/').to_string();
        }
        if let Some(dir) = lookup("MOON_LIBRARY_STORAGE_DIR") {
            self.storage_dir = PathBuf::from(dir);
        }
        if let Some(secs) = lookup("MOON_LIBRARY_TIMEOUT_SECS").and_then(|s| s.parse().ok()) {
            self.request_timeout_secs = secs;
        }
        if let Some(proxy) = lookup("MOON_LIBRARY_IMAGE_PROXY") {
            self.image_proxy_url = if proxy.is_empty() { None } else { Some(proxy) };
        }
        if let Some(addr) = lookup("MOON_LIBRARY_BIND") {
            self.bind_addr = addr;
        }
        self
    }
}

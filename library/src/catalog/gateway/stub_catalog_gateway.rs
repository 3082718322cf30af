use std::collections::HashMap;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Mutex;
use std::time::Duration;
use async_trait::async_trait;
use serde_json::json;
use crate::books::dto::{VolumeDto, VolumeListDto};
use crate::catalog::domain::model::BOOK_NOT_FOUND;
use crate::catalog::gateway::CatalogGateway;
use crate::core::library::{LibraryError, LibraryResult};

// Canned catalog responses keyed by query, each settling after its own delay.
#[derive(Default)]
pub(crate) struct StubCatalogGateway {
    searches: HashMap<String, (Duration, LibraryResult<VolumeListDto>)>,
    volumes: HashMap<String, VolumeDto>,
    calls: AtomicUsize,
    queries: Mutex<Vec<(String, usize, usize)>>,
}

impl StubCatalogGateway {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    pub(crate) fn with_titles(mut self, query: &str, delay_ms: u64, titles: &[&str]) -> Self {
        let items: Vec<serde_json::Value> = titles.iter().enumerate()
            .map(|(i, t)| json!({ "id": format!("{}-{}", query, i), "volumeInfo": { "title": t } }))
            .collect();
        let list: VolumeListDto = serde_json::from_value(json!({ "totalItems": items.len(), "items": items }))
            .expect("valid stub payload");
        self.searches.insert(query.to_string(), (Duration::from_millis(delay_ms), Ok(list)));
        self
    }

    pub(crate) fn with_error(mut self, query: &str, delay_ms: u64, err: LibraryError) -> Self {
        self.searches.insert(query.to_string(), (Duration::from_millis(delay_ms), Err(err)));
        self
    }

    pub(crate) fn with_volume(mut self, volume: VolumeDto) -> Self {
        let id = volume.id.clone().unwrap_or_default();
        self.volumes.insert(id, volume);
        self
    }

    pub(crate) fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    pub(crate) fn queries(&self) -> Vec<(String, usize, usize)> {
        self.queries.lock().expect("lock queries").clone()
    }
}

#[async_trait]
impl CatalogGateway for StubCatalogGateway {
    async fn search_volumes(&self, query: &str, max_results: usize, start_index: usize) -> LibraryResult<VolumeListDto> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        self.queries.lock().expect("lock queries").push((query.to_string(), max_results, start_index));
        match self.searches.get(query) {
            Some((delay, res)) => {
                tokio::time::sleep(*delay).await;
                res.clone()
            }
            None => Ok(VolumeListDto::default()),
        }
    }

    async fn get_volume(&self, id: &str) -> LibraryResult<VolumeDto> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        self.volumes.get(id).cloned()
            .ok_or_else(|| LibraryError::not_found(BOOK_NOT_FOUND))
    }
}

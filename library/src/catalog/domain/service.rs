use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Arc, Mutex, PoisonError};
use async_trait::async_trait;
use crate::books::domain::model::BookSummary;
use crate::catalog::domain::CatalogService;
use crate::catalog::domain::model::{SearchSnapshot, SearchState, BOOK_NOT_FOUND, EMPTY_QUERY, NO_RESULTS};
use crate::catalog::gateway::CatalogGateway;
use crate::core::domain::Configuration;
use crate::core::library::{LibraryError, LibraryResult};

// SearchController keeps one authoritative SearchState together with the query behind it.
// Every call takes a sequence number and only the holder of the latest number may write.
pub struct SearchController {
    gateway: Arc<dyn CatalogGateway>,
    max_results: usize,
    image_proxy: Option<String>,
    latest: AtomicU64,
    live: Mutex<SearchSnapshot>,
}

impl SearchController {
    pub fn new(config: &Configuration, gateway: Arc<dyn CatalogGateway>) -> Self {
        Self {
            gateway,
            max_results: config.max_results,
            image_proxy: config.image_proxy_url.clone(),
            latest: AtomicU64::new(0),
            live: Mutex::new(SearchSnapshot::default()),
        }
    }

    fn next_sequence(&self) -> u64 {
        self.latest.fetch_add(1, Ordering::SeqCst) + 1
    }

    // Returns false when a newer call has been issued since `seq`.
    fn apply(&self, seq: u64, query: &str, next: SearchState) -> bool {
        let mut live = self.live.lock().unwrap_or_else(PoisonError::into_inner);
        if self.latest.load(Ordering::SeqCst) != seq {
            return false;
        }
        *live = SearchSnapshot::new(query, next);
        true
    }

    fn snapshot(&self, seq: u64) -> SearchSnapshot {
        let live = self.live.lock().unwrap_or_else(PoisonError::into_inner);
        let mut snapshot = live.clone();
        snapshot.superseded = self.latest.load(Ordering::SeqCst) != seq;
        snapshot
    }

    async fn fetch(&self, query: &str) -> SearchState {
        match self.gateway.search_volumes(query, self.max_results, 0).await {
            Ok(list) => {
                let books = list.to_summaries(self.image_proxy.as_deref());
                if books.is_empty() {
                    SearchState::Error(NO_RESULTS.to_string())
                } else {
                    SearchState::Success(books)
                }
            }
            Err(err) => {
                tracing::warn!(error = %err, query, "catalog search failed");
                SearchState::Error(err.message().to_string())
            }
        }
    }
}

#[async_trait]
impl CatalogService for SearchController {
    async fn search(&self, query: &str) -> SearchSnapshot {
        let query = query.trim();
        let seq = self.next_sequence();
        if query.is_empty() {
            self.apply(seq, query, SearchState::Error(EMPTY_QUERY.to_string()));
            return self.snapshot(seq);
        }

        self.apply(seq, query, SearchState::Loading);
        let outcome = self.fetch(query).await;
        let results = outcome.results().len();
        if self.apply(seq, query, outcome) {
            tracing::info!(query, seq, results, "search settled");
        } else {
            tracing::debug!(query, seq, "discarding superseded search");
        }
        self.snapshot(seq)
    }

    async fn find_book_by_id(&self, id: &str) -> LibraryResult<BookSummary> {
        let id = id.trim();
        if id.is_empty() {
            return Err(LibraryError::validation("book id is required", Some("id".to_string())));
        }
        let volume = self.gateway.get_volume(id).await?;
        // the requested id is authoritative, the detail payload may omit its own
        let info = volume.volume_info
            .ok_or_else(|| LibraryError::not_found(BOOK_NOT_FOUND))?;
        Ok(info.to_summary(id, self.image_proxy.as_deref()))
    }

    fn state(&self) -> SearchState {
        self.live.lock().unwrap_or_else(PoisonError::into_inner).state.clone()
    }
}

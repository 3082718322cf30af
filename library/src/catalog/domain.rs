pub mod model;
pub mod service;

use async_trait::async_trait;
use crate::books::domain::model::BookSummary;
use crate::catalog::domain::model::{SearchSnapshot, SearchState};
use crate::core::library::LibraryResult;

#[async_trait]
pub trait CatalogService: Sync + Send {
    // Runs one search and returns the live snapshot once this call settles. A call superseded
    // by a newer one gets the newer call's query and state, flagged as superseded.
    async fn search(&self, query: &str) -> SearchSnapshot;
    async fn find_book_by_id(&self, id: &str) -> LibraryResult<BookSummary>;
    fn state(&self) -> SearchState;
}

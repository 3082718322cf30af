use std::sync::Arc;
use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use crate::books::domain::model::BookSummary;
use crate::catalog::domain::CatalogService;
use crate::core::command::{Command, CommandError};
use crate::favorites::domain::FavoritesService;

// Loads the detail record and reports whether it is already a favorite.
pub struct GetBookCommand {
    catalog_service: Arc<dyn CatalogService>,
    favorites_service: Arc<dyn FavoritesService>,
}

impl GetBookCommand {
    pub fn new(catalog_service: Arc<dyn CatalogService>, favorites_service: Arc<dyn FavoritesService>) -> Self {
        Self {
            catalog_service,
            favorites_service,
        }
    }
}

#[derive(Debug, Deserialize)]
pub struct GetBookCommandRequest {
    pub book_id: String,
}

impl GetBookCommandRequest {
    pub fn new(book_id: String) -> Self {
        Self {
            book_id,
        }
    }
}

#[derive(Debug, Serialize)]
pub struct GetBookCommandResponse {
    pub book: BookSummary,
    pub favorite: bool,
}

impl GetBookCommandResponse {
    pub fn new(book: BookSummary, favorite: bool) -> Self {
        Self {
            book,
            favorite,
        }
    }
}

#[async_trait]
impl Command<GetBookCommandRequest, GetBookCommandResponse> for GetBookCommand {
    async fn execute(&self, req: GetBookCommandRequest) -> Result<GetBookCommandResponse, CommandError> {
        self.catalog_service.find_book_by_id(req.book_id.as_str())
            .await.map_err(CommandError::from).map(|book| {
                let favorite = self.favorites_service.is_favorite(book.id.as_str());
                GetBookCommandResponse::new(book, favorite)
            })
    }
}

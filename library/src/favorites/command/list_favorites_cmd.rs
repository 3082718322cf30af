use std::sync::Arc;
use async_trait::async_trait;
use serde::Serialize;
use crate::core::command::{Command, CommandError};
use crate::favorites::domain::FavoritesService;
use crate::favorites::domain::model::FavoritesSet;

pub struct ListFavoritesCommand {
    favorites_service: Arc<dyn FavoritesService>,
}

impl ListFavoritesCommand {
    pub fn new(favorites_service: Arc<dyn FavoritesService>) -> Self {
        Self {
            favorites_service,
        }
    }
}

#[derive(Debug, Default)]
pub struct ListFavoritesCommandRequest {}

#[derive(Debug, Serialize)]
pub struct ListFavoritesCommandResponse {
    pub count: usize,
    pub favorites: FavoritesSet,
}

impl ListFavoritesCommandResponse {
    pub fn new(favorites: FavoritesSet) -> Self {
        Self {
            count: favorites.len(),
            favorites,
        }
    }
}

#[async_trait]
impl Command<ListFavoritesCommandRequest, ListFavoritesCommandResponse> for ListFavoritesCommand {
    async fn execute(&self, _req: ListFavoritesCommandRequest) -> Result<ListFavoritesCommandResponse, CommandError> {
        Ok(ListFavoritesCommandResponse::new(self.favorites_service.favorites()))
    }
}

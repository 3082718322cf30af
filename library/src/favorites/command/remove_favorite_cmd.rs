use std::sync::Arc;
use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use crate::core::command::{Command, CommandError};
use crate::favorites::domain::FavoritesService;

pub struct RemoveFavoriteCommand {
    favorites_service: Arc<dyn FavoritesService>,
}

impl RemoveFavoriteCommand {
    pub fn new(favorites_service: Arc<dyn FavoritesService>) -> Self {
        Self {
            favorites_service,
        }
    }
}

#[derive(Debug, Deserialize)]
pub struct RemoveFavoriteCommandRequest {
    pub id: String,
}

impl RemoveFavoriteCommandRequest {
    pub fn new(id: &str) -> Self {
        Self {
            id: id.to_string(),
        }
    }
}

#[derive(Debug, Serialize)]
pub struct RemoveFavoriteCommandResponse {
    pub id: String,
    pub removed: bool,
}

#[async_trait]
impl Command<RemoveFavoriteCommandRequest, RemoveFavoriteCommandResponse> for RemoveFavoriteCommand {
    async fn execute(&self, req: RemoveFavoriteCommandRequest) -> Result<RemoveFavoriteCommandResponse, CommandError> {
        let removed = self.favorites_service.remove(req.id.as_str());
        Ok(RemoveFavoriteCommandResponse { id: req.id, removed })
    }
}

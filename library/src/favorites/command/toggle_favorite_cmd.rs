use std::sync::Arc;
use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use crate::books::domain::model::{default_authors, default_image};
use crate::core::command::{Command, CommandError};
use crate::favorites::domain::FavoritesService;
use crate::favorites::domain::model::FavoriteRecord;

pub struct ToggleFavoriteCommand {
    favorites_service: Arc<dyn FavoritesService>,
}

impl ToggleFavoriteCommand {
    pub fn new(favorites_service: Arc<dyn FavoritesService>) -> Self {
        Self {
            favorites_service,
        }
    }
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ToggleFavoriteCommandRequest {
    pub id: String,
    pub title: String,
    #[serde(default)]
    pub authors: Vec<String>,
    #[serde(default)]
    pub image_url: Option<String>,
}

impl ToggleFavoriteCommandRequest {
    pub fn new(record: &FavoriteRecord) -> Self {
        Self {
            id: record.id.to_string(),
            title: record.title.to_string(),
            authors: record.authors.clone(),
            image_url: Some(record.image_url.to_string()),
        }
    }

    pub fn build_record(&self) -> Result<FavoriteRecord, CommandError> {
        let id = self.id.trim();
        if id.is_empty() {
            return Err(CommandError::Validation { message: "favorite id is required".to_string(), reason_code: Some("id".to_string()) });
        }
        let authors: Vec<&str> = self.authors.iter().map(String::as_str).collect();
        let mut record = FavoriteRecord::new(id, self.title.as_str(), &authors, "");
        if record.authors.is_empty() {
            record.authors = default_authors();
        }
        record.image_url = self.image_url.clone().filter(|u| !u.trim().is_empty())
            .unwrap_or_else(default_image);
        Ok(record)
    }
}

#[derive(Debug, Serialize)]
pub struct ToggleFavoriteCommandResponse {
    pub id: String,
    pub favorite: bool,
}

impl ToggleFavoriteCommandResponse {
    pub fn new(id: &str, favorite: bool) -> Self {
        Self {
            id: id.to_string(),
            favorite,
        }
    }
}

#[async_trait]
impl Command<ToggleFavoriteCommandRequest, ToggleFavoriteCommandResponse> for ToggleFavoriteCommand {
    async fn execute(&self, req: ToggleFavoriteCommandRequest) -> Result<ToggleFavoriteCommandResponse, CommandError> {
        let record = req.build_record()?;
        let id = record.id.clone();
        let favorite = self.favorites_service.toggle(record);
        Ok(ToggleFavoriteCommandResponse::new(id.as_str(), favorite))
    }
}

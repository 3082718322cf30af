use std::sync::Arc;
use axum::http::StatusCode;
use crate::catalog::domain::CatalogService;
use crate::core::command::CommandError;
use crate::core::domain::Configuration;
use crate::favorites::domain::FavoritesService;

// AppState hands the single catalog controller and favorites store to every handler.
#[derive(Clone)]
pub struct AppState {
    pub config: Configuration,
    pub catalog: Arc<dyn CatalogService>,
    pub favorites: Arc<dyn FavoritesService>,
}

impl AppState {
    pub fn new(config: Configuration, catalog: Arc<dyn CatalogService>, favorites: Arc<dyn FavoritesService>) -> AppState {
        AppState {
            config,
            catalog,
            favorites,
        }
    }
}

pub type ServerError = (StatusCode, String);

pub fn json_to_server_error(err: serde_json::Error) -> ServerError {
    (StatusCode::BAD_REQUEST, format!("{}", err))
}

impl From<CommandError> for ServerError {
    fn from(err: CommandError) -> Self {
        match err {
            CommandError::Network { .. } => {
                (StatusCode::BAD_GATEWAY, format!("{:?}", err))
            }
            CommandError::NotFound { .. } => {
                (StatusCode::NOT_FOUND, format!("{:?}", err))
            }
            CommandError::Storage { .. } => {
                (StatusCode::INTERNAL_SERVER_ERROR, format!("{:?}", err))
            }
            CommandError::Serialization { .. } => {
                (StatusCode::BAD_GATEWAY, format!("{:?}", err))
            }
            CommandError::Validation { .. } => {
                (StatusCode::BAD_REQUEST, format!("{:?}", err))
            }
            CommandError::Other { .. } => {
                (StatusCode::INTERNAL_SERVER_ERROR, format!("{:?}", err))
            }
        }
    }
}

use std::net::SocketAddr;
use std::sync::Arc;
use axum::{
    routing::{delete, get},
    Router,
};
use crate::catalog::controller::{find_book_by_id, search_books};
use crate::catalog::factory::create_catalog_service;
use crate::core::controller::AppState;
use crate::core::domain::Configuration;
use crate::core::library::{LibraryError, LibraryResult};
use crate::favorites::controller::{list_favorites, remove_favorite, toggle_favorite};
use crate::favorites::domain::{FavoritesEvent, FavoritesService};
use crate::favorites::factory::create_favorites_service;

pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/search", get(search_books))
        .route("/books/:id", get(find_book_by_id))
        .route("/favorites", get(list_favorites).post(toggle_favorite))
        .route("/favorites/:id", delete(remove_favorite))
        .with_state(state)
}

pub fn build_state(config: &Configuration) -> LibraryResult<AppState> {
    let catalog = create_catalog_service(config)?;
    let favorites = create_favorites_service(config);
    log_favorite_changes(favorites.as_ref());
    Ok(AppState::new(config.clone(), catalog, favorites))
}

fn log_favorite_changes(favorites: &dyn FavoritesService) {
    favorites.subscribe(Arc::new(|event: &FavoritesEvent| {
        match &event.warning {
            None => tracing::info!(id = event.key.as_str(), kind = ?event.kind, count = event.data.len(), "favorites changed"),
            Some(warning) => tracing::warn!(id = event.key.as_str(), kind = ?event.kind, warning = %warning, "favorites changed in memory only"),
        }
    }));
}

pub async fn serve(config: Configuration) -> LibraryResult<()> {
    let addr: SocketAddr = config.bind_addr.parse().map_err(|err| LibraryError::validation(
        format!("invalid bind address {} due to {}", config.bind_addr, err).as_str(), Some("bind".to_string())))?;
    let app = router(build_state(&config)?);
    tracing::info!(%addr, profile = config.profile.as_str(), catalog = config.api_base_url.as_str(), "moon library listening");
    axum::Server::bind(&addr)
        .serve(app.into_make_service())
        .await
        .map_err(|err| LibraryError::network(format!("server stopped due to {}", err).as_str(), None, false))
}

use axum::{
    extract::{Path, State},
    response::Json,
};
use serde_json::Value;
use crate::core::command::Command;
use crate::core::controller::{AppState, json_to_server_error, ServerError};
use crate::favorites::command::list_favorites_cmd::{ListFavoritesCommand, ListFavoritesCommandRequest, ListFavoritesCommandResponse};
use crate::favorites::command::remove_favorite_cmd::{RemoveFavoriteCommand, RemoveFavoriteCommandRequest, RemoveFavoriteCommandResponse};
use crate::favorites::command::toggle_favorite_cmd::{ToggleFavoriteCommand, ToggleFavoriteCommandRequest, ToggleFavoriteCommandResponse};

pub async fn list_favorites(
    State(state): State<AppState>) -> Result<Json<ListFavoritesCommandResponse>, ServerError> {
    let res = ListFavoritesCommand::new(state.favorites).execute(ListFavoritesCommandRequest::default()).await?;
    Ok(Json(res))
}

pub async fn toggle_favorite(
    State(state): State<AppState>,
    json: Json<Value>) -> Result<Json<ToggleFavoriteCommandResponse>, ServerError> {
    let req: ToggleFavoriteCommandRequest = serde_json::from_value(json.0).map_err(json_to_server_error)?;
    let res = ToggleFavoriteCommand::new(state.favorites).execute(req).await?;
    Ok(Json(res))
}

pub async fn remove_favorite(
    State(state): State<AppState>,
    Path(id): Path<String>) -> Result<Json<RemoveFavoriteCommandResponse>, ServerError> {
    let req = RemoveFavoriteCommandRequest { id };
    let res = RemoveFavoriteCommand::new(state.favorites).execute(req).await?;
    Ok(Json(res))
}

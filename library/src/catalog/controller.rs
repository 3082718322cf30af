use axum::{
    extract::{Path, Query, State},
    response::Json,
};
use crate::catalog::command::get_book_cmd::{GetBookCommand, GetBookCommandRequest, GetBookCommandResponse};
use crate::catalog::command::search_books_cmd::{SearchBooksCommand, SearchBooksCommandRequest, SearchBooksCommandResponse};
use crate::core::command::Command;
use crate::core::controller::{AppState, ServerError};

pub async fn search_books(
    State(state): State<AppState>,
    Query(req): Query<SearchBooksCommandRequest>) -> Result<Json<SearchBooksCommandResponse>, ServerError> {
    let res = SearchBooksCommand::new(state.catalog).execute(req).await?;
    Ok(Json(res))
}

pub async fn find_book_by_id(
    State(state): State<AppState>,
    Path(book_id): Path<String>) -> Result<Json<GetBookCommandResponse>, ServerError> {
    let req = GetBookCommandRequest { book_id };
    let res = GetBookCommand::new(state.catalog, state.favorites).execute(req).await?;
    Ok(Json(res))
}

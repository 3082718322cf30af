use serde::Serialize;
use crate::books::domain::model::BookSummary;

pub const EMPTY_QUERY: &str = "empty query";
pub const NO_RESULTS: &str = "no results";
pub const SEARCH_FAILED: &str = "Erro ao buscar livros. Tente novamente.";
pub const CONNECTION_FAILED: &str = "Erro ao conectar com a API";
pub const BOOK_NOT_FOUND: &str = "Livro não encontrado.";

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(tag = "status", content = "data", rename_all = "lowercase")]
pub enum SearchState {
    #[default]
    Idle,
    Loading,
    Success(Vec<BookSummary>),
    Error(String),
}

impl SearchState {
    pub fn is_settled(&self) -> bool {
        matches!(self, SearchState::Success(_) | SearchState::Error(_))
    }

    pub fn results(&self) -> &[BookSummary] {
        match self {
            SearchState::Success(books) => books,
            _ => &[],
        }
    }
}

// SearchSnapshot pairs the live state with the query that produced it. `superseded` is set
// when a newer search was issued after the call that returned this snapshot.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct SearchSnapshot {
    pub query: String,
    pub state: SearchState,
    pub superseded: bool,
}

impl SearchSnapshot {
    pub fn new(query: &str, state: SearchState) -> Self {
        Self {
            query: query.to_string(),
            state,
            superseded: false,
        }
    }
}

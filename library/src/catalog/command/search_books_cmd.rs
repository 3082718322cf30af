use std::sync::Arc;
use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use crate::catalog::domain::CatalogService;
use crate::catalog::domain::model::{SearchSnapshot, SearchState};
use crate::core::command::{Command, CommandError};

pub struct SearchBooksCommand {
    catalog_service: Arc<dyn CatalogService>,
}

impl SearchBooksCommand {
    pub fn new(catalog_service: Arc<dyn CatalogService>) -> Self {
        Self {
            catalog_service,
        }
    }
}

#[derive(Debug, Deserialize)]
pub struct SearchBooksCommandRequest {
    #[serde(default)]
    pub q: String,
}

impl SearchBooksCommandRequest {
    pub fn new(q: &str) -> Self {
        Self {
            q: q.to_string(),
        }
    }
}

// `query` is the query that produced `state`, which differs from the request when a newer
// search overtook this one.
#[derive(Debug, Serialize)]
pub struct SearchBooksCommandResponse {
    pub query: String,
    pub state: SearchState,
    pub superseded: bool,
}

impl From<SearchSnapshot> for SearchBooksCommandResponse {
    fn from(other: SearchSnapshot) -> Self {
        Self {
            query: other.query,
            state: other.state,
            superseded: other.superseded,
        }
    }
}

// The tri-state already carries user-facing errors, so the command itself never fails.
#[async_trait]
impl Command<SearchBooksCommandRequest, SearchBooksCommandResponse> for SearchBooksCommand {
    async fn execute(&self, req: SearchBooksCommandRequest) -> Result<SearchBooksCommandResponse, CommandError> {
        let snapshot = self.catalog_service.search(req.q.as_str()).await;
        Ok(SearchBooksCommandResponse::from(snapshot))
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;
    use crate::catalog::command::search_books_cmd::{SearchBooksCommand, SearchBooksCommandRequest};
    use crate::catalog::domain::model::{SearchState, EMPTY_QUERY};
    use crate::catalog::domain::service::SearchController;
    use crate::catalog::gateway::stub_catalog_gateway::StubCatalogGateway;
    use crate::core::command::Command;
    use crate::core::domain::Configuration;

    fn command(stub: StubCatalogGateway) -> SearchBooksCommand {
        SearchBooksCommand::new(Arc::new(SearchController::new(&Configuration::new("test"), Arc::new(stub))))
    }

    #[tokio::test]
    async fn test_should_run_search_books() {
        let cmd = command(StubCatalogGateway::new().with_titles("tolkien", 0, &["The Hobbit"]));
        let res = cmd.execute(SearchBooksCommandRequest::new("tolkien")).await.expect("should search");
        assert_eq!("tolkien", res.query.as_str());
        assert!(!res.superseded);
        assert_eq!("The Hobbit", res.state.results()[0].title.as_str());
    }

    #[tokio::test]
    async fn test_should_return_empty_query_state() {
        let cmd = command(StubCatalogGateway::new());
        let req: SearchBooksCommandRequest = serde_json::from_str("{}").expect("should parse");
        let res = cmd.execute(req).await.expect("should search");
        assert_eq!(SearchState::Error(EMPTY_QUERY.to_string()), res.state);
    }
}

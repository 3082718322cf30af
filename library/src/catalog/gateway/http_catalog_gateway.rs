use std::time::Duration;
use async_trait::async_trait;
use reqwest::{Client, Response};
use serde::de::DeserializeOwned;
use url::Url;
use crate::books::dto::{VolumeDto, VolumeListDto};
use crate::catalog::domain::model::{BOOK_NOT_FOUND, CONNECTION_FAILED, SEARCH_FAILED};
use crate::catalog::gateway::CatalogGateway;
use crate::core::library::{LibraryError, LibraryResult};

#[derive(Debug, Clone)]
pub struct HttpCatalogGateway {
    client: Client,
    base_url: String,
}

impl HttpCatalogGateway {
    pub fn new(base_url: &str, timeout: Duration) -> LibraryResult<Self> {
        let client = Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|err| LibraryError::network(
                format!("failed to create http client due to {}", err).as_str(), None, false))?;
        Ok(Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
        })
    }

    pub(crate) fn search_url(&self, query: &str, max_results: usize, start_index: usize) -> LibraryResult<Url> {
        Url::parse_with_params(self.base_url.as_str(), &[
            ("q", query.to_string()),
            ("maxResults", max_results.to_string()),
            ("startIndex", start_index.to_string()),
        ]).map_err(|err| LibraryError::validation(
            format!("invalid catalog url {} due to {}", self.base_url, err).as_str(), None))
    }

    pub(crate) fn volume_url(&self, id: &str) -> LibraryResult<Url> {
        let mut url = Url::parse(self.base_url.as_str()).map_err(|err| LibraryError::validation(
            format!("invalid catalog url {} due to {}", self.base_url, err).as_str(), None))?;
        url.path_segments_mut()
            .map_err(|_| LibraryError::validation(
                format!("catalog url {} cannot take a path", self.base_url).as_str(), None))?
            .pop_if_empty()
            .push(id);
        Ok(url)
    }

    async fn get_json<T: DeserializeOwned>(&self, url: Url, failure: &str) -> LibraryResult<T> {
        tracing::debug!(url = %url, "catalog request");
        let res = self.client.get(url).send().await.map_err(|err| transport_error(err, failure))?;
        let res = check_status(res, failure)?;
        res.json::<T>().await.map_err(|err| transport_error(err, failure))
    }
}

// Keeps reqwest's own wording in the logs; callers only see the user-facing message.
fn transport_error(err: reqwest::Error, failure: &str) -> LibraryError {
    tracing::warn!(error = %err, timeout = err.is_timeout(), "catalog request failed");
    if err.is_decode() {
        LibraryError::serialization(failure)
    } else {
        LibraryError::network(CONNECTION_FAILED, None, err.is_timeout() || err.is_connect())
    }
}

fn check_status(res: Response, failure: &str) -> LibraryResult<Response> {
    let status = res.status();
    if status.is_success() {
        Ok(res)
    } else {
        tracing::warn!(status = status.as_u16(), "catalog returned an error status");
        Err(LibraryError::from_status(status.as_u16(), failure))
    }
}

#[async_trait]
impl CatalogGateway for HttpCatalogGateway {
    async fn search_volumes(&self, query: &str, max_results: usize, start_index: usize) -> LibraryResult<VolumeListDto> {
        let url = self.search_url(query, max_results, start_index)?;
        self.get_json(url, SEARCH_FAILED).await
    }

    async fn get_volume(&self, id: &str) -> LibraryResult<VolumeDto> {
        let url = self.volume_url(id)?;
        self.get_json(url, BOOK_NOT_FOUND).await
    }
}

#[cfg(test)]
mod tests {
    use std::net::{SocketAddr, TcpListener};
    use std::sync::Arc;
    use std::time::Duration;
    use axum::http::StatusCode;
    use axum::routing::get;
    use axum::Router;
    use lazy_static::lazy_static;
    use crate::catalog::domain::CatalogService;
    use crate::catalog::domain::model::{SearchState, BOOK_NOT_FOUND, CONNECTION_FAILED, SEARCH_FAILED};
    use crate::catalog::domain::service::SearchController;
    use crate::catalog::gateway::CatalogGateway;
    use crate::catalog::gateway::http_catalog_gateway::HttpCatalogGateway;
    use crate::core::domain::{Configuration, GOOGLE_BOOKS_API};
    use crate::core::library::LibraryError;

    lazy_static! {
        static ref SUT_GATEWAY: HttpCatalogGateway = HttpCatalogGateway::new(GOOGLE_BOOKS_API, Duration::from_secs(2))
            .expect("should build gateway");
    }

    // Local catalog that misbehaves in a different way under each prefix.
    fn start_catalog() -> SocketAddr {
        let app = Router::new()
            .route("/failing/volumes", get(|| async { (StatusCode::INTERNAL_SERVER_ERROR, "boom") }))
            .route("/failing/volumes/:id", get(|| async { (StatusCode::NOT_FOUND, "missing") }))
            .route("/garbled/volumes", get(|| async { "not json" }))
            .route("/slow/volumes", get(|| async {
                tokio::time::sleep(Duration::from_secs(5)).await;
                "{}"
            }));
        let listener = TcpListener::bind("127.0.0.1:0").expect("should bind");
        let addr = listener.local_addr().expect("should have addr");
        let server = axum::Server::from_tcp(listener).expect("should serve").serve(app.into_make_service());
        tokio::spawn(server);
        addr
    }

    fn gateway_for(addr: SocketAddr, prefix: &str, timeout: Duration) -> HttpCatalogGateway {
        HttpCatalogGateway::new(format!("http://{}/{}/volumes", addr, prefix).as_str(), timeout)
            .expect("should build gateway")
    }

    #[tokio::test]
    async fn test_should_build_search_url() {
        let url = SUT_GATEWAY.search_url("harry potter & co", 12, 0).expect("should build url");
        assert_eq!("https://www.googleapis.com/books/v1/volumes?q=harry+potter+%26+co&maxResults=12&startIndex=0", url.as_str());
    }

    #[tokio::test]
    async fn test_should_build_volume_url() {
        let url = SUT_GATEWAY.volume_url("zyTCAlFPjgYC").expect("should build url");
        assert_eq!("https://www.googleapis.com/books/v1/volumes/zyTCAlFPjgYC", url.as_str());
        let url = SUT_GATEWAY.volume_url("a/b?c").expect("should build url");
        assert_eq!("https://www.googleapis.com/books/v1/volumes/a%2Fb%3Fc", url.as_str());
    }

    #[tokio::test]
    async fn test_should_trim_trailing_slash() {
        let gateway = HttpCatalogGateway::new("https://example.com/volumes/", Duration::from_secs(1)).expect("should build gateway");
        let url = gateway.volume_url("x").expect("should build url");
        assert_eq!("https://example.com/volumes/x", url.as_str());
    }

    #[tokio::test]
    async fn test_should_surface_connection_failure_as_network_error() {
        // nothing listens on port 9 of the loopback interface
        let gateway = HttpCatalogGateway::new("http://127.0.0.1:9/volumes", Duration::from_secs(2)).expect("should build gateway");
        let err = gateway.search_volumes("dune", 12, 0).await.expect_err("should fail");
        assert!(matches!(err, LibraryError::Network { .. }));
        assert_eq!(CONNECTION_FAILED, err.message());
    }

    #[tokio::test]
    async fn test_should_map_error_status_to_search_failure() {
        let addr = start_catalog();
        let gateway = gateway_for(addr, "failing", Duration::from_secs(2));
        let err = gateway.search_volumes("dune", 12, 0).await.expect_err("should fail");
        assert_eq!(LibraryError::network(SEARCH_FAILED, Some("500".to_string()), true), err);

        let svc = SearchController::new(&Configuration::new("test"), Arc::new(gateway));
        assert_eq!(SearchState::Error(SEARCH_FAILED.to_string()), svc.search("dune").await.state);
    }

    #[tokio::test]
    async fn test_should_map_missing_volume_to_not_found() {
        let gateway = gateway_for(start_catalog(), "failing", Duration::from_secs(2));
        let err = gateway.get_volume("nope").await.expect_err("should fail");
        assert_eq!(LibraryError::not_found(BOOK_NOT_FOUND), err);
    }

    #[tokio::test]
    async fn test_should_map_garbled_payload_to_serialization_error() {
        let gateway = gateway_for(start_catalog(), "garbled", Duration::from_secs(2));
        let err = gateway.search_volumes("dune", 12, 0).await.expect_err("should fail");
        assert_eq!(LibraryError::serialization(SEARCH_FAILED), err);
    }

    #[tokio::test]
    async fn test_should_surface_timeout_as_retryable_network_error() {
        let gateway = gateway_for(start_catalog(), "slow", Duration::from_millis(300));
        let err = gateway.search_volumes("dune", 12, 0).await.expect_err("should time out");
        assert_eq!(LibraryError::network(CONNECTION_FAILED, None, true), err);
        assert!(err.retryable());
    }

    #[tokio::test]
    async fn test_should_reject_invalid_base_url() {
        let gateway = HttpCatalogGateway::new("not a url", Duration::from_secs(1)).expect("should build gateway");
        assert!(matches!(gateway.search_url("q", 12, 0), Err(LibraryError::Validation { .. })));
    }
}

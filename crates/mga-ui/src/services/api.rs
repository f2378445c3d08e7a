//! HTTP client for the catalog endpoint.

use gloo_net::http::Request;
use mga_api_models::{CatalogError, CatalogQuery, GameListResponse, decode_page};

#[derive(Clone, Debug)]
pub(crate) struct CatalogClient {
    endpoint: String,
}

impl CatalogClient {
    pub(crate) fn new(endpoint: impl Into<String>) -> Self {
        Self {
            endpoint: endpoint.into(),
        }
    }

    pub(crate) fn url_for(&self, query: &CatalogQuery) -> String {
        format!("{}?{}", self.endpoint, query.to_query_string())
    }

    /// Single GET for one page. No retries; the caller decides what to log.
    pub(crate) async fn fetch_page(
        &self,
        query: &CatalogQuery,
    ) -> Result<GameListResponse, CatalogError> {
        let response = Request::get(&self.url_for(query))
            .send()
            .await
            .map_err(|err| CatalogError::Network(err.to_string()))?;
        let status = response.status();
        let body = response
            .binary()
            .await
            .map_err(|err| CatalogError::Network(err.to_string()))?;
        decode_page(status, &body)
    }
}

//! Shared HTTP client, error type and catalog fetch for the CLI.

use std::fmt::{self, Display, Formatter};
use std::time::Duration;

use anyhow::anyhow;
use mga_api_models::{CATALOG_PATH, CatalogError, CatalogQuery, GameListResponse, decode_page};
use reqwest::{Client, Url};

/// CLI-level error type to distinguish validation from operational failures.
#[derive(Debug)]
pub(crate) enum CliError {
    Validation(String),
    Failure(anyhow::Error),
}

/// Convenience alias for functions returning a `CliError`.
pub(crate) type CliResult<T> = Result<T, CliError>;

impl CliError {
    pub(crate) fn validation(message: impl Into<String>) -> Self {
        Self::Validation(message.into())
    }

    pub(crate) fn failure(error: impl Into<anyhow::Error>) -> Self {
        Self::Failure(error.into())
    }

    pub(crate) const fn exit_code(&self) -> i32 {
        match self {
            Self::Validation(_) => 2,
            Self::Failure(_) => 3,
        }
    }

    pub(crate) fn display_message(&self) -> String {
        match self {
            Self::Validation(message) => message.clone(),
            Self::Failure(error) => format!("{error:#}"),
        }
    }
}

impl Display for CliError {
    fn fmt(&self, formatter: &mut Formatter<'_>) -> fmt::Result {
        formatter.write_str("cli error")
    }
}

impl std::error::Error for CliError {}

impl From<CatalogError> for CliError {
    fn from(error: CatalogError) -> Self {
        match error {
            CatalogError::Response { status, body } if matches!(status, 400 | 409 | 422) => {
                let detail = body.trim();
                if detail.is_empty() {
                    Self::validation(format!(
                        "catalog endpoint rejected the request (status {status})"
                    ))
                } else {
                    Self::validation(format!(
                        "catalog endpoint rejected the request (status {status}): {detail}"
                    ))
                }
            }
            other => Self::failure(anyhow::Error::new(other).context("failed to load games page")),
        }
    }
}

/// Application context passed to command handlers.
#[derive(Clone)]
pub(crate) struct AppContext {
    pub(crate) client: Client,
    pub(crate) base_url: Url,
}

impl AppContext {
    /// Build an HTTP client with the configured timeout.
    pub(crate) fn new(base_url: Url, timeout_secs: u64) -> CliResult<Self> {
        let client = Client::builder()
            .timeout(Duration::from_secs(timeout_secs))
            .build()
            .map_err(|err| CliError::failure(anyhow!("failed to build HTTP client: {err}")))?;
        Ok(Self { client, base_url })
    }
}

/// Parse the API URL provided to the CLI.
pub(crate) fn parse_url(input: &str) -> Result<Url, String> {
    input
        .parse::<Url>()
        .map_err(|err| format!("invalid URL '{input}': {err}"))
}

/// Full request URL for a catalog query.
pub(crate) fn catalog_url(base_url: &Url, query: &CatalogQuery) -> CliResult<Url> {
    let mut url = base_url
        .join(CATALOG_PATH)
        .map_err(|err| CliError::failure(anyhow!("invalid base URL: {err}")))?;
    url.set_query(Some(&query.to_query_string()));
    Ok(url)
}

/// Fetch one catalog page. A single GET with no retries.
pub(crate) async fn fetch_catalog_page(
    ctx: &AppContext,
    query: &CatalogQuery,
) -> CliResult<GameListResponse> {
    let url = catalog_url(&ctx.base_url, query)?;
    tracing::debug!(%url, page_index = query.page_index, "requesting catalog page");

    let response = ctx
        .client
        .get(url)
        .send()
        .await
        .map_err(|err| CatalogError::Network(err.to_string()))?;
    let status = response.status().as_u16();
    let body = response
        .bytes()
        .await
        .map_err(|err| CatalogError::Network(err.to_string()))?;

    let page = decode_page(status, &body)?;
    tracing::info!(
        status,
        games = page.games.len(),
        total_count = page.pagination.total_count,
        "catalog page received"
    );
    Ok(page)
}

#[cfg(test)]
mod tests {
    use super::*;
    use anyhow::Result;
    use httpmock::prelude::*;
    use mga_api_models::CatalogFilters;
    use serde_json::json;

    fn context_for(server: &MockServer) -> Result<AppContext> {
        AppContext::new(
            server
                .base_url()
                .parse()
                .map_err(|_| anyhow!("valid URL"))?,
            5,
        )
        .map_err(|err| anyhow!(err.display_message()))
    }

    #[test]
    fn rejected_requests_are_validation_errors() {
        let err = CliError::from(CatalogError::Response {
            status: 422,
            body: "bad range\n".into(),
        });
        assert_eq!(err.exit_code(), 2);
        assert_eq!(
            err.display_message(),
            "catalog endpoint rejected the request (status 422): bad range"
        );

        let err = CliError::from(CatalogError::Response {
            status: 500,
            body: String::new(),
        });
        assert_eq!(err.exit_code(), 3);
        assert_eq!(
            err.display_message(),
            "failed to load games page: catalog endpoint returned status 500"
        );
    }

    #[test]
    fn catalog_url_appends_query_to_fixed_path() -> Result<()> {
        let base: Url = "http://archive.test/some/prefix/".parse()?;
        let url = catalog_url(&base, &CatalogQuery::new(CatalogFilters::default(), 1))
            .map_err(|err| anyhow!(err.display_message()))?;
        assert_eq!(url.path(), "/wiki/api/v1/games");
        assert!(url.query().unwrap_or_default().ends_with("start_index=20&amount=20"));
        Ok(())
    }

    #[tokio::test]
    async fn fetch_decodes_successful_page() -> Result<()> {
        let server = MockServer::start_async().await;
        let mock = server.mock(|when, then| {
            when.method(GET)
                .path("/wiki/api/v1/games")
                .query_param("start_index", "0")
                .query_param("amount", "20");
            then.status(200)
                .header("content-type", "application/json")
                .json_body(json!({
                    "games": [],
                    "pagination": { "total_count": 0, "total_pages": 0 }
                }));
        });

        let ctx = context_for(&server)?;
        let page = fetch_catalog_page(&ctx, &CatalogQuery::new(CatalogFilters::default(), 0))
            .await
            .map_err(|err| anyhow!(err.display_message()))?;
        mock.assert();
        assert!(page.is_empty());
        Ok(())
    }

    #[tokio::test]
    async fn malformed_body_is_a_failure() -> Result<()> {
        let server = MockServer::start_async().await;
        server.mock(|when, then| {
            when.method(GET).path("/wiki/api/v1/games");
            then.status(200).body("<html>oops</html>");
        });

        let ctx = context_for(&server)?;
        let result =
            fetch_catalog_page(&ctx, &CatalogQuery::new(CatalogFilters::default(), 0)).await;
        let Err(err) = result else {
            return Err(anyhow!("expected parse failure"));
        };
        assert_eq!(err.exit_code(), 3);
        assert!(err.display_message().contains("could not be decoded"));
        Ok(())
    }
}

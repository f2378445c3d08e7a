//! Failure taxonomy for catalog requests.

use thiserror::Error;

use crate::GameListResponse;

/// Why a catalog page could not be obtained.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CatalogError {
    /// The request never produced a response.
    #[error("catalog request failed: {0}")]
    Network(String),
    /// The endpoint answered with a non-success status.
    #[error("catalog endpoint returned status {status}")]
    Response {
        /// HTTP status code.
        status: u16,
        /// Raw response body, kept for diagnostics.
        body: String,
    },
    /// The body was not a valid catalog page.
    #[error("catalog response could not be decoded: {0}")]
    Parse(String),
}

impl CatalogError {
    /// HTTP status carried by the error, when there was a response.
    #[must_use]
    pub const fn status(&self) -> Option<u16> {
        match self {
            Self::Response { status, .. } => Some(*status),
            Self::Network(_) | Self::Parse(_) => None,
        }
    }
}

/// Turn a raw status/body pair into a catalog page.
///
/// # Errors
///
/// Returns [`CatalogError::Response`] for statuses outside `200..300` and
/// [`CatalogError::Parse`] when the body does not decode.
pub fn decode_page(status: u16, body: &[u8]) -> Result<GameListResponse, CatalogError> {
    if !(200..300).contains(&status) {
        return Err(CatalogError::Response {
            status,
            body: String::from_utf8_lossy(body).into_owned(),
        });
    }
    serde_json::from_slice(body).map_err(|err| CatalogError::Parse(err.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn success_status_decodes_page() {
        let body = br#"{"games":[],"pagination":{"total_count":0,"total_pages":0}}"#;
        let page = decode_page(200, body).expect("empty page decodes");
        assert!(page.is_empty());
        assert_eq!(page.pagination.page_count(), 1);
    }

    #[test]
    fn error_status_keeps_body_for_diagnostics() {
        let err = decode_page(503, b"maintenance").expect_err("503 is a failure");
        assert_eq!(err.status(), Some(503));
        assert_eq!(
            err,
            CatalogError::Response {
                status: 503,
                body: "maintenance".into()
            }
        );
    }

    #[test]
    fn malformed_body_is_a_parse_error() {
        let err = decode_page(200, b"<html>").expect_err("html is not json");
        assert!(matches!(err, CatalogError::Parse(_)));
        assert_eq!(err.status(), None);
        assert!(err.to_string().starts_with("catalog response could not be decoded"));
    }
}

//! Catalog client context for sharing a singleton client instance.
//!
//! # Design
//! - Create exactly one client per app boot.
//! - Contexts compare equal when they share the same client.

use crate::services::api::CatalogClient;
use std::rc::Rc;

/// Shared catalog client context.
#[derive(Clone)]
pub(crate) struct CatalogCtx {
    /// Singleton client instance.
    pub client: Rc<CatalogClient>,
}

impl CatalogCtx {
    /// Create a context for the configured endpoint.
    pub(crate) fn new(endpoint: impl Into<String>) -> Self {
        Self {
            client: Rc::new(CatalogClient::new(endpoint)),
        }
    }
}

impl PartialEq for CatalogCtx {
    fn eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.client, &other.client)
    }
}

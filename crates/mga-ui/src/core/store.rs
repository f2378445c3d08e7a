//! App-wide yewdux store.
//!
//! # Design
//! - Keep the catalog session in one store so event handlers and async fetch
//!   completions share a single source of truth.
//! - Mutate only through [`CatalogSession::apply`].

use crate::features::catalog::state::{CatalogAction, CatalogCommand, CatalogSession};
use yewdux::prelude::Dispatch;
use yewdux::store::Store;

/// Global application store.
#[derive(Clone, Debug, PartialEq, Eq, Store, Default)]
pub struct AppStore {
    /// Catalog browser session.
    pub catalog: CatalogSession,
}

/// Dispatcher for the global store.
#[must_use]
pub fn app_dispatch() -> Dispatch<AppStore> {
    Dispatch::<AppStore>::new()
}

/// Run an action through the catalog reducer and return the resulting command.
pub fn apply_catalog(dispatch: &Dispatch<AppStore>, action: CatalogAction) -> CatalogCommand {
    let mut command = CatalogCommand::None;
    dispatch.reduce_mut(|store| {
        command = store.catalog.apply(action);
    });
    command
}

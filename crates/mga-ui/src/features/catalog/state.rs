//! Catalog session state and the pagination reducer.
//!
//! # Design
//! - All page-state transitions go through [`CatalogSession::apply`].
//! - The reducer never touches the network; it returns a [`CatalogCommand`] for the caller to run.
//! - Each fetch carries a request token and only the latest token's outcome is accepted.
//! - The item cache is replaced wholesale, never patched.

use std::fmt;

use mga_api_models::paging::{self, NavItem};
use mga_api_models::{
    CatalogError, CatalogFilters, CatalogQuery, GameListResponse, GameSummary, PaginationMeta,
};

use crate::core::breakpoints::FALLBACK_WIDTH;

/// Monotonic identifier of an issued fetch.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct RequestToken(u64);

impl fmt::Display for RequestToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// User action that triggered a fetch; selects the failure message.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FetchOrigin {
    /// First load after boot.
    Initial,
    /// "Apply filters" button.
    Filter,
    /// Search button or Enter in the search box.
    Search,
    /// Page number, previous or next link.
    Page,
    /// "Load more" button.
    LoadMore,
}

impl FetchOrigin {
    /// Diagnostic logged when a fetch from this origin fails.
    #[must_use]
    pub const fn failure_message(self) -> &'static str {
        match self {
            Self::Initial => "Failed to fetch games data",
            Self::Filter => "Failed to fetch filtered games data",
            Self::Search => "Failed to search games data",
            Self::Page => "Failed to load games page",
            Self::LoadMore => "Failed to load more games",
        }
    }
}

/// A fetch the caller must perform.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FetchRequest {
    /// Token to echo back in the outcome action.
    pub token: RequestToken,
    /// What triggered the fetch.
    pub origin: FetchOrigin,
    /// Query to send.
    pub query: CatalogQuery,
}

/// Inputs to the reducer.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum CatalogAction {
    /// Initial page load.
    Load {
        /// Control snapshot.
        filters: CatalogFilters,
    },
    /// Filter or search submission; restarts at page 0.
    Submit {
        /// Control snapshot.
        filters: CatalogFilters,
        /// [`FetchOrigin::Filter`] or [`FetchOrigin::Search`].
        origin: FetchOrigin,
    },
    /// Jump to a zero-based page.
    GoToPage {
        /// Target page index.
        page_index: u32,
        /// Control snapshot.
        filters: CatalogFilters,
    },
    /// Fetch the page after the current one.
    LoadMore {
        /// Control snapshot.
        filters: CatalogFilters,
    },
    /// A fetch completed.
    FetchSucceeded {
        /// Token of the request.
        token: RequestToken,
        /// Page index the request asked for.
        page_index: u32,
        /// Decoded page.
        response: GameListResponse,
    },
    /// A fetch failed.
    FetchFailed {
        /// Token of the request.
        token: RequestToken,
        /// What triggered the request.
        origin: FetchOrigin,
        /// Failure detail.
        error: CatalogError,
    },
    /// The viewport width changed.
    Resized {
        /// New width in CSS pixels.
        width: u32,
    },
}

/// Side effect requested by the reducer.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum CatalogCommand {
    /// Perform a fetch.
    Fetch(FetchRequest),
    /// Re-render from the cached items.
    Render,
    /// Nothing to do.
    None,
}

/// Page state for the catalog browser.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CatalogSession {
    /// Zero-based index of the page currently shown.
    pub page_index: u32,
    /// Items of the page currently shown.
    pub items: Vec<GameSummary>,
    /// Totals of the page currently shown.
    pub pagination: PaginationMeta,
    /// Whether any page has been accepted yet.
    pub loaded: bool,
    /// Last non-empty search term sent. Display only; never resent automatically.
    pub last_search_term: Option<String>,
    /// Message for the most recent failed fetch.
    pub last_error: Option<String>,
    /// Viewport width used for truncation.
    pub width: u32,
    /// Bumped on every render so keyed list entries (and their charts) are rebuilt.
    pub render_epoch: u64,
    latest_token: RequestToken,
    pending: Option<RequestToken>,
    empty_result: bool,
}

impl Default for CatalogSession {
    fn default() -> Self {
        Self {
            page_index: 0,
            items: Vec::new(),
            pagination: PaginationMeta::default(),
            loaded: false,
            last_search_term: None,
            last_error: None,
            width: FALLBACK_WIDTH,
            render_epoch: 0,
            latest_token: RequestToken::default(),
            pending: None,
            empty_result: false,
        }
    }
}

impl CatalogSession {
    /// Session sized for the given viewport width.
    #[must_use]
    pub fn with_width(width: u32) -> Self {
        Self {
            width,
            ..Self::default()
        }
    }

    /// Advance the state machine and return the side effect to run.
    pub fn apply(&mut self, action: CatalogAction) -> CatalogCommand {
        match action {
            CatalogAction::Load { filters } => self.issue(filters, 0, FetchOrigin::Initial),
            CatalogAction::Submit { filters, origin } => {
                self.page_index = 0;
                self.items.clear();
                self.empty_result = false;
                self.issue(filters, 0, origin)
            }
            CatalogAction::GoToPage {
                page_index,
                filters,
            } => self.issue(filters, page_index, FetchOrigin::Page),
            CatalogAction::LoadMore { filters } => {
                if self.load_more_visible() {
                    self.issue(filters, self.page_index + 1, FetchOrigin::LoadMore)
                } else {
                    CatalogCommand::None
                }
            }
            CatalogAction::FetchSucceeded {
                token,
                page_index,
                response,
            } => {
                if !self.accepts(token) {
                    return CatalogCommand::None;
                }
                self.pending = None;
                self.last_error = None;
                self.loaded = true;
                self.page_index = page_index;
                self.empty_result = response.games.is_empty();
                self.items = response.games;
                self.pagination = response.pagination;
                self.render()
            }
            CatalogAction::FetchFailed {
                token,
                origin,
                error,
            } => {
                if !self.accepts(token) {
                    return CatalogCommand::None;
                }
                self.pending = None;
                self.last_error = Some(format!("{}: {error}", origin.failure_message()));
                self.render()
            }
            CatalogAction::Resized { width } => {
                self.width = width;
                if self.items.is_empty() {
                    CatalogCommand::None
                } else {
                    self.render()
                }
            }
        }
    }

    /// Whether a fetch is in flight.
    #[must_use]
    pub const fn is_pending(&self) -> bool {
        self.pending.is_some()
    }

    /// Whether the last accepted page had no results.
    ///
    /// Cleared by a new submission; a pending or failed fetch never sets it.
    #[must_use]
    pub const fn is_empty_result(&self) -> bool {
        self.empty_result
    }

    /// Page navigation for the current page; `None` when hidden.
    #[must_use]
    pub fn nav(&self) -> Option<Vec<NavItem>> {
        if self.is_empty_result() {
            return None;
        }
        paging::build_nav(self.page_index + 1, self.pagination.page_count())
    }

    /// Whether the "load more" button is shown.
    #[must_use]
    pub fn load_more_visible(&self) -> bool {
        !self.items.is_empty()
            && paging::load_more_visible(self.page_index + 1, self.pagination.page_count())
    }

    fn issue(
        &mut self,
        filters: CatalogFilters,
        page_index: u32,
        origin: FetchOrigin,
    ) -> CatalogCommand {
        if let Some(term) = filters.search_term() {
            self.last_search_term = Some(term.to_string());
        }
        self.latest_token = RequestToken(self.latest_token.0 + 1);
        self.pending = Some(self.latest_token);
        CatalogCommand::Fetch(FetchRequest {
            token: self.latest_token,
            origin,
            query: CatalogQuery::new(filters, page_index),
        })
    }

    fn accepts(&self, token: RequestToken) -> bool {
        self.pending == Some(token)
    }

    const fn render(&mut self) -> CatalogCommand {
        self.render_epoch += 1;
        CatalogCommand::Render
    }
}

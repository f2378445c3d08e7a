#![forbid(unsafe_code)]
#![deny(
    unused_must_use,
    unreachable_pub,
    clippy::all,
    clippy::pedantic,
    clippy::nursery,
    rustdoc::broken_intra_doc_links,
    rustdoc::bare_urls,
    missing_docs
)]
#![allow(clippy::module_name_repetitions)]
//! Shared HTTP DTOs for the Massive Game Archive catalog API.
//!
//! The browser front end and the CLI both decode catalog pages with these
//! types and build their requests through [`CatalogQuery`], so the parameter
//! ordering and the page arithmetic live in exactly one place.

pub mod error;
pub mod paging;
pub mod query;

pub use error::{CatalogError, decode_page};
pub use query::{CatalogFilters, CatalogQuery, Metric, MetricRange, SortOrder};

use serde::{Deserialize, Serialize};

/// Number of games requested per catalog page.
pub const PAGE_SIZE: u32 = 20;

/// Path of the catalog search endpoint.
pub const CATALOG_PATH: &str = "/wiki/api/v1/games";

/// Path prefix of the per-game detail page; the slug and a trailing `/` follow.
pub const DETAIL_PATH_PREFIX: &str = "/wiki/games/";

/// A single game as returned by the catalog endpoint.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct GameSummary {
    /// Unique identifier used for detail navigation.
    pub slug: String,
    /// Display title.
    pub title: String,
    /// Plain-text teaser shown in list entries.
    pub short_description: String,
    /// Tag names in the order the server reports them.
    pub tags: Vec<String>,
    /// Age-group names in the order the server reports them.
    pub age_groups: Vec<String>,
    /// Difficulty index (0–10).
    pub difficulty_index: u8,
    /// Preparation effort index (0–10). The wire name keeps the API's spelling.
    pub preperation_index: u8,
    /// Physical activity index (0–10).
    pub physical_index: u8,
    /// Duration index (0–10).
    pub duration_index: u8,
    /// Group size index (0–10).
    pub group_size_index: u8,
    /// Number of positive votes.
    pub upvote_count: u64,
    /// Number of negative votes.
    pub downvote_count: u64,
}

impl GameSummary {
    /// Value of a single metric index.
    #[must_use]
    pub const fn metric(&self, metric: Metric) -> u8 {
        match metric {
            Metric::Difficulty => self.difficulty_index,
            Metric::Preparation => self.preperation_index,
            Metric::Physical => self.physical_index,
            Metric::Duration => self.duration_index,
            Metric::GroupSize => self.group_size_index,
        }
    }

    /// All five metric indices in [`Metric::ALL`] order.
    #[must_use]
    pub const fn metrics(&self) -> [u8; 5] {
        [
            self.difficulty_index,
            self.preperation_index,
            self.physical_index,
            self.duration_index,
            self.group_size_index,
        ]
    }

    /// Share of positive votes, rounded half-up to a whole percent.
    ///
    /// Returns `None` when nobody has voted yet.
    #[must_use]
    pub fn positive_percentage(&self) -> Option<u32> {
        let up = u128::from(self.upvote_count);
        let total = up + u128::from(self.downvote_count);
        if total == 0 {
            return None;
        }
        let rounded = (up * 200 + total) / (total * 2);
        u32::try_from(rounded).ok()
    }

    /// Vote summary text, e.g. `80% Positive`.
    #[must_use]
    pub fn vote_label(&self) -> String {
        vote_label(self.positive_percentage())
    }
}

/// Vote summary text for an optional positive percentage.
#[must_use]
pub fn vote_label(percentage: Option<u32>) -> String {
    percentage.map_or_else(
        || "No Votes".to_string(),
        |value| format!("{value}% Positive"),
    )
}

/// Pagination metadata attached to every catalog page.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
pub struct PaginationMeta {
    /// Number of games matching the filters across all pages.
    pub total_count: u64,
    /// Number of pages for the current page size.
    pub total_pages: u32,
}

impl PaginationMeta {
    /// Page count used for navigation; never below one, even for zero matches.
    #[must_use]
    pub fn page_count(&self) -> u32 {
        self.total_pages.max(1)
    }
}

/// One page of catalog results.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Default)]
pub struct GameListResponse {
    /// Games on this page, in server order.
    pub games: Vec<GameSummary>,
    /// Totals for the full result set.
    pub pagination: PaginationMeta,
}

impl GameListResponse {
    /// Whether the page carries no games.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.games.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn game(up: u64, down: u64) -> GameSummary {
        GameSummary {
            slug: "capture-the-flag".into(),
            title: "Capture the Flag".into(),
            short_description: "Two teams, two flags.".into(),
            tags: vec!["outdoor".into()],
            age_groups: vec!["teens".into()],
            difficulty_index: 4,
            preperation_index: 2,
            physical_index: 9,
            duration_index: 6,
            group_size_index: 8,
            upvote_count: up,
            downvote_count: down,
        }
    }

    #[test]
    fn positive_percentage_rounds_and_guards_zero_votes() {
        assert_eq!(game(0, 0).positive_percentage(), None);
        assert_eq!(game(8, 2).positive_percentage(), Some(80));
        assert_eq!(game(5, 5).positive_percentage(), Some(50));
        assert_eq!(game(1, 7).positive_percentage(), Some(13));
        assert_eq!(game(2, 1).positive_percentage(), Some(67));
        assert_eq!(game(0, 3).positive_percentage(), Some(0));
    }

    #[test]
    fn vote_labels_read_percentage_or_no_votes() {
        assert_eq!(game(0, 0).vote_label(), "No Votes");
        assert_eq!(game(8, 2).vote_label(), "80% Positive");
        assert_eq!(game(5, 5).vote_label(), "50% Positive");
        assert_eq!(vote_label(Some(0)), "0% Positive");
    }

    #[test]
    fn metrics_follow_fixed_axis_order() {
        let item = game(1, 1);
        assert_eq!(item.metrics(), [4, 2, 9, 6, 8]);
        assert_eq!(item.metric(Metric::GroupSize), 8);
        assert_eq!(item.metric(Metric::Preparation), 2);
    }

    #[test]
    fn page_count_never_drops_below_one() {
        let empty = PaginationMeta {
            total_count: 0,
            total_pages: 0,
        };
        assert_eq!(empty.page_count(), 1);
        let many = PaginationMeta {
            total_count: 45,
            total_pages: 3,
        };
        assert_eq!(many.page_count(), 3);
    }

    #[test]
    fn list_response_decodes_endpoint_payload() {
        let body = r#"{
            "games": [{
                "slug": "tag",
                "title": "Tag",
                "short_description": "Run.",
                "tags": ["outdoor", "classic"],
                "age_groups": ["kids"],
                "difficulty_index": 1,
                "preperation_index": 0,
                "physical_index": 8,
                "duration_index": 3,
                "group_size_index": 5,
                "upvote_count": 12,
                "downvote_count": 3
            }],
            "pagination": { "total_count": 1, "total_pages": 1 }
        }"#;
        let page: GameListResponse = serde_json::from_str(body).expect("payload should decode");
        assert_eq!(page.games.len(), 1);
        assert_eq!(page.games[0].tags, vec!["outdoor", "classic"]);
        assert_eq!(page.pagination.total_count, 1);
        assert!(!page.is_empty());
    }
}

//! Filter model and query-string encoding for the catalog endpoint.
//!
//! # Design
//! - Parameter order is fixed: tags, age groups, the five range pairs in
//!   [`Metric::ALL`] order, `q`, `sort_by`, `start_index`, `amount`.
//! - Range bounds are always sent, even when they equal the full range.
//! - Empty tag/age selections and an empty search emit no parameter at all.

use serde::{Deserialize, Serialize};
use url::form_urlencoded;

use crate::{CATALOG_PATH, PAGE_SIZE};

/// The five numeric metrics every game is scored on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Metric {
    /// How hard the game is to pick up.
    Difficulty,
    /// How much setup the game needs.
    Preparation,
    /// How physically demanding the game is.
    Physical,
    /// How long a round lasts.
    Duration,
    /// How many players the game suits.
    GroupSize,
}

impl Metric {
    /// Every metric in the fixed axis/parameter order.
    pub const ALL: [Self; 5] = [
        Self::Difficulty,
        Self::Preparation,
        Self::Physical,
        Self::Duration,
        Self::GroupSize,
    ];

    /// Field name used by the endpoint, without the `min_`/`max_` prefix.
    #[must_use]
    pub const fn wire_key(self) -> &'static str {
        match self {
            Self::Difficulty => "difficulty_index",
            Self::Preparation => "preperation_index",
            Self::Physical => "physical_index",
            Self::Duration => "duration_index",
            Self::GroupSize => "group_size_index",
        }
    }

    /// Human-readable axis label.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Difficulty => "Difficulty",
            Self::Preparation => "Preparation",
            Self::Physical => "Physical",
            Self::Duration => "Duration",
            Self::GroupSize => "Group Size",
        }
    }

    /// Position of the metric within [`Metric::ALL`].
    #[must_use]
    pub const fn index(self) -> usize {
        match self {
            Self::Difficulty => 0,
            Self::Preparation => 1,
            Self::Physical => 2,
            Self::Duration => 3,
            Self::GroupSize => 4,
        }
    }
}

/// Closed integer interval within `[1, 10]` with `min <= max`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct MetricRange {
    min: u8,
    max: u8,
}

impl MetricRange {
    /// Lowest selectable bound.
    pub const LOWEST: u8 = 1;
    /// Highest selectable bound.
    pub const HIGHEST: u8 = 10;
    /// The untouched slider range.
    pub const FULL: Self = Self {
        min: Self::LOWEST,
        max: Self::HIGHEST,
    };

    /// Build a range, clamping both bounds into `[1, 10]` and ordering them.
    #[must_use]
    pub fn new(first: u8, second: u8) -> Self {
        let first = first.clamp(Self::LOWEST, Self::HIGHEST);
        let second = second.clamp(Self::LOWEST, Self::HIGHEST);
        Self {
            min: first.min(second),
            max: first.max(second),
        }
    }

    /// Build a range from raw slider handle positions, rounding to the nearest integer.
    #[must_use]
    pub fn from_slider(low: f64, high: f64) -> Self {
        Self::new(
            round_handle(low, Self::LOWEST),
            round_handle(high, Self::HIGHEST),
        )
    }

    /// Lower bound.
    #[must_use]
    pub const fn min(self) -> u8 {
        self.min
    }

    /// Upper bound.
    #[must_use]
    pub const fn max(self) -> u8 {
        self.max
    }

    /// Whether the range still spans the full slider.
    #[must_use]
    pub const fn is_full(self) -> bool {
        self.min == Self::LOWEST && self.max == Self::HIGHEST
    }
}

impl Default for MetricRange {
    fn default() -> Self {
        Self::FULL
    }
}

#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
fn round_handle(value: f64, fallback: u8) -> u8 {
    if !value.is_finite() {
        return fallback;
    }
    value
        .round()
        .clamp(f64::from(MetricRange::LOWEST), f64::from(MetricRange::HIGHEST)) as u8
}

/// Sort options understood by the endpoint.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortOrder {
    /// Search rank, or insertion order without a query.
    #[default]
    Relevance,
    /// Alphabetical by title.
    Title,
    /// Most recently created first.
    Newest,
    /// Most upvoted first.
    Upvotes,
}

impl SortOrder {
    /// Every option in selector order.
    pub const ALL: [Self; 4] = [Self::Relevance, Self::Title, Self::Newest, Self::Upvotes];

    /// Value sent as `sort_by`.
    #[must_use]
    pub const fn as_value(self) -> &'static str {
        match self {
            Self::Relevance => "relevance",
            Self::Title => "title",
            Self::Newest => "newest",
            Self::Upvotes => "upvotes",
        }
    }

    /// Parse a `sort_by` value; unknown values yield `None`.
    #[must_use]
    pub fn from_value(value: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|order| order.as_value() == value)
    }
}

/// Normalised snapshot of every filter control.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CatalogFilters {
    /// Selected tag values.
    pub tags: Vec<String>,
    /// Selected age-group values.
    pub age_groups: Vec<String>,
    /// One range per metric, indexed by [`Metric::index`].
    pub ranges: [MetricRange; 5],
    /// Free-text search, kept verbatim (not trimmed).
    pub search: String,
    /// Raw `sort_by` value; validation is left to the endpoint.
    pub sort_by: String,
}

impl Default for CatalogFilters {
    fn default() -> Self {
        Self {
            tags: Vec::new(),
            age_groups: Vec::new(),
            ranges: [MetricRange::FULL; 5],
            search: String::new(),
            sort_by: SortOrder::default().as_value().to_string(),
        }
    }
}

impl CatalogFilters {
    /// Range selected for a metric.
    #[must_use]
    pub const fn range(&self, metric: Metric) -> MetricRange {
        self.ranges[metric.index()]
    }

    /// Replace the range for a metric.
    pub const fn set_range(&mut self, metric: Metric, range: MetricRange) {
        self.ranges[metric.index()] = range;
    }

    /// Search term to send, if any.
    #[must_use]
    pub fn search_term(&self) -> Option<&str> {
        if self.search.is_empty() {
            None
        } else {
            Some(self.search.as_str())
        }
    }
}

/// Filters plus the zero-based page to request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CatalogQuery {
    /// Filter snapshot taken when the request was issued.
    pub filters: CatalogFilters,
    /// Zero-based page index.
    pub page_index: u32,
}

impl CatalogQuery {
    /// Pair a filter snapshot with a page index.
    #[must_use]
    pub const fn new(filters: CatalogFilters, page_index: u32) -> Self {
        Self {
            filters,
            page_index,
        }
    }

    /// Offset of the first requested item.
    #[must_use]
    pub fn start_index(&self) -> u64 {
        u64::from(self.page_index) * u64::from(PAGE_SIZE)
    }

    /// Ordered key/value parameters for the endpoint.
    #[must_use]
    pub fn to_pairs(&self) -> Vec<(String, String)> {
        let filters = &self.filters;
        let mut pairs = Vec::with_capacity(
            filters.tags.len() + filters.age_groups.len() + Metric::ALL.len() * 2 + 4,
        );
        for tag in &filters.tags {
            pairs.push(("tag_filter".to_string(), tag.clone()));
        }
        for age in &filters.age_groups {
            pairs.push(("age_group_filter".to_string(), age.clone()));
        }
        for metric in Metric::ALL {
            let range = filters.range(metric);
            let key = metric.wire_key();
            pairs.push((format!("min_{key}"), range.min().to_string()));
            pairs.push((format!("max_{key}"), range.max().to_string()));
        }
        if let Some(term) = filters.search_term() {
            pairs.push(("q".to_string(), term.to_string()));
        }
        pairs.push(("sort_by".to_string(), filters.sort_by.clone()));
        pairs.push(("start_index".to_string(), self.start_index().to_string()));
        pairs.push(("amount".to_string(), PAGE_SIZE.to_string()));
        pairs
    }

    /// Form-urlencoded query string (no leading `?`).
    #[must_use]
    pub fn to_query_string(&self) -> String {
        form_urlencoded::Serializer::new(String::new())
            .extend_pairs(self.to_pairs())
            .finish()
    }

    /// Endpoint path including the query string.
    #[must_use]
    pub fn path(&self) -> String {
        format!("{CATALOG_PATH}?{}", self.to_query_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const DEFAULT_RANGES: &str = "min_difficulty_index=1&max_difficulty_index=10\
        &min_preperation_index=1&max_preperation_index=10\
        &min_physical_index=1&max_physical_index=10\
        &min_duration_index=1&max_duration_index=10\
        &min_group_size_index=1&max_group_size_index=10";

    #[test]
    fn default_filters_send_full_ranges_without_optional_params() {
        let query = CatalogQuery::new(CatalogFilters::default(), 2);
        let encoded = query.to_query_string();
        assert_eq!(
            encoded,
            format!("{DEFAULT_RANGES}&sort_by=relevance&start_index=40&amount=20")
        );
        let keys: Vec<String> = query.to_pairs().into_iter().map(|(key, _)| key).collect();
        assert!(!keys.iter().any(|key| key == "tag_filter"));
        assert!(!keys.iter().any(|key| key == "age_group_filter"));
        assert!(!keys.iter().any(|key| key == "q"));
        assert_eq!(keys.iter().filter(|key| key.starts_with("min_")).count(), 5);
        assert_eq!(keys.iter().filter(|key| key.starts_with("max_")).count(), 5);
    }

    #[test]
    fn selections_are_repeated_in_order_before_ranges() {
        let filters = CatalogFilters {
            tags: vec!["outdoor".into(), "team".into()],
            age_groups: vec!["kids".into()],
            ..CatalogFilters::default()
        };
        let pairs = CatalogQuery::new(filters, 0).to_pairs();
        assert_eq!(pairs[0], ("tag_filter".into(), "outdoor".into()));
        assert_eq!(pairs[1], ("tag_filter".into(), "team".into()));
        assert_eq!(pairs[2], ("age_group_filter".into(), "kids".into()));
        assert_eq!(pairs[3].0, "min_difficulty_index");
    }

    #[test]
    fn search_term_is_sent_verbatim_when_present() {
        let filters = CatalogFilters {
            search: " relay race ".into(),
            sort_by: "upvotes".into(),
            ..CatalogFilters::default()
        };
        let mut ranged = filters.clone();
        ranged.set_range(Metric::Physical, MetricRange::new(3, 7));
        let encoded = CatalogQuery::new(ranged, 1).to_query_string();
        assert!(encoded.contains("min_physical_index=3&max_physical_index=7"));
        assert!(encoded.ends_with("&q=+relay+race+&sort_by=upvotes&start_index=20&amount=20"));
    }

    #[test]
    fn query_building_is_deterministic() {
        let filters = CatalogFilters {
            tags: vec!["card game".into()],
            search: "uno".into(),
            ..CatalogFilters::default()
        };
        let first = CatalogQuery::new(filters.clone(), 4);
        let second = CatalogQuery::new(filters, 4);
        assert_eq!(first.to_query_string(), first.to_query_string());
        assert_eq!(first.to_query_string(), second.to_query_string());
        assert!(first.path().starts_with("/wiki/api/v1/games?tag_filter=card+game&"));
    }

    #[test]
    fn metric_range_normalises_bounds() {
        assert_eq!(MetricRange::new(7, 3), MetricRange::new(3, 7));
        assert_eq!(MetricRange::new(0, 42), MetricRange::FULL);
        let rounded = MetricRange::from_slider(2.4, 8.5);
        assert_eq!((rounded.min(), rounded.max()), (2, 9));
        assert_eq!(MetricRange::from_slider(f64::NAN, f64::NAN), MetricRange::FULL);
        assert!(MetricRange::default().is_full());
    }

    #[test]
    fn sort_order_round_trips_known_values_only() {
        assert_eq!(SortOrder::from_value("newest"), Some(SortOrder::Newest));
        assert_eq!(SortOrder::from_value("popular"), None);
        assert_eq!(SortOrder::default().as_value(), "relevance");
    }
}

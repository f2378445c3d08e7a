//! Filter State Reader: snapshots the page's filter controls into [`CatalogFilters`].
//!
//! # Design
//! - Read controls live on every call; nothing is cached between reads.
//! - Keep the DOM behind [`ControlSource`] so the normalisation is testable natively.
//! - A missing slider widget reads as the full range.

use mga_api_models::{CatalogFilters, Metric, MetricRange};

/// Checkbox groups on the filter panel.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CheckboxGroup {
    /// Tag checkboxes.
    Tags,
    /// Age-group checkboxes.
    AgeGroups,
}

impl CheckboxGroup {
    /// CSS selector matching the checked boxes of the group.
    #[must_use]
    pub const fn checked_selector(self) -> &'static str {
        match self {
            Self::Tags => ".tag-filter:checked",
            Self::AgeGroups => ".age-filter:checked",
        }
    }
}

/// Read access to the filter controls.
pub trait ControlSource {
    /// Values of the checked boxes in document order.
    fn checked_values(&self, group: CheckboxGroup) -> Vec<String>;
    /// Raw handle positions of a range slider, or `None` if the widget is absent.
    fn range_values(&self, metric: Metric) -> Option<(f64, f64)>;
    /// Current search box text.
    fn search_text(&self) -> String;
    /// Current sort selector value.
    fn sort_value(&self) -> String;
}

/// Take a normalised snapshot of every filter control.
#[must_use]
pub fn read_filters(source: &impl ControlSource) -> CatalogFilters {
    let mut filters = CatalogFilters {
        tags: source.checked_values(CheckboxGroup::Tags),
        age_groups: source.checked_values(CheckboxGroup::AgeGroups),
        search: source.search_text(),
        sort_by: source.sort_value(),
        ..CatalogFilters::default()
    };
    for metric in Metric::ALL {
        let range = source
            .range_values(metric)
            .map_or(MetricRange::FULL, |(low, high)| {
                MetricRange::from_slider(low, high)
            });
        filters.set_range(metric, range);
    }
    filters
}

/// Options handed to `noUiSlider.create` for every range filter.
#[must_use]
pub fn slider_options() -> serde_json::Value {
    let (low, high) = (MetricRange::LOWEST, MetricRange::HIGHEST);
    serde_json::json!({
        "start": [low, high],
        "connect": true,
        "step": 1,
        "range": { "min": low, "max": high },
    })
}

/// Text shown in a slider's min/max label for a raw handle position.
#[must_use]
pub fn handle_label(raw: f64) -> String {
    MetricRange::from_slider(raw, raw).min().to_string()
}

/// Element ids and classes the page markup must provide.
pub mod dom {
    use mga_api_models::Metric;

    /// Search text input.
    pub const SEARCH_INPUT: &str = "gameSearch";
    /// Sort selector.
    pub const SORT_SELECT: &str = "sortBySelect";
    /// "Apply filters" button.
    pub const APPLY_BUTTON: &str = "applyFilters";
    /// Search button.
    pub const SEARCH_BUTTON: &str = "searchButton";
    /// Results root the browser mounts into.
    pub const BROWSER_ROOT: &str = "games-browser";
    /// Attribute on the results root overriding the endpoint path.
    pub const CATALOG_URL_ATTR: &str = "data-catalog-url";
    /// Results list.
    pub const LIST: &str = "games-list";
    /// Pagination wrapper.
    pub const PAGINATION_CONTAINER: &str = "pagination-container";
    /// "Showing x-y of n" text.
    pub const PAGINATION_INFO: &str = "pagination-info";
    /// Page link list.
    pub const PAGINATION_CONTROLS: &str = "pagination-controls";
    /// "Load more" button.
    pub const LOAD_MORE: &str = "load-more-btn";
    /// Raw markdown container on the detail page.
    pub const MARKDOWN_CONTENT: &str = "markdown-content";
    /// Upvote button on the detail page.
    pub const UPVOTE_BUTTON: &str = "upvote-btn";
    /// Downvote button on the detail page.
    pub const DOWNVOTE_BUTTON: &str = "downvote-btn";

    /// Base id of the slider for a metric; labels append `Min`/`Max`.
    #[must_use]
    pub const fn slider_base(metric: Metric) -> &'static str {
        match metric {
            Metric::Difficulty => "difficulty",
            Metric::Preparation => "preparation",
            Metric::Physical => "physical",
            Metric::Duration => "duration",
            Metric::GroupSize => "groupSize",
        }
    }

    /// Id of the slider element for a metric.
    #[must_use]
    pub fn slider_id(metric: Metric) -> String {
        format!("{}Range", slider_base(metric))
    }

    /// Ids of the min and max value labels for a metric.
    #[must_use]
    pub fn slider_label_ids(metric: Metric) -> (String, String) {
        let base = slider_base(metric);
        (format!("{base}Min"), format!("{base}Max"))
    }
}

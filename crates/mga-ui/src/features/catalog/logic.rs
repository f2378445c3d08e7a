//! Projection of cached catalog items into render-ready list entries.

use mga_api_models::{DETAIL_PATH_PREFIX, GameSummary, vote_label};

use crate::core::breakpoints::for_width;
use crate::core::logic::{VoteTier, truncate_description};

/// Colour family of a badge on a list entry.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum BadgeKind {
    /// Tag badge.
    Tag,
    /// Age-group badge.
    AgeGroup,
}

/// Vote summary block.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct VoteBlock {
    /// Positive vote count.
    pub upvotes: u64,
    /// Negative vote count.
    pub downvotes: u64,
    /// "No Votes" or "{n}% Positive".
    pub label: String,
    /// Badge colour tier.
    pub tier: VoteTier,
}

/// Everything needed to render one list entry.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CatalogEntry {
    /// Game slug, also the list key.
    pub slug: String,
    /// Detail page URL.
    pub href: String,
    /// Display title.
    pub title: String,
    /// Tooltip for the whole entry.
    pub hint: String,
    /// Tag badges followed by age-group badges.
    pub badges: Vec<(BadgeKind, String)>,
    /// Description truncated for the current breakpoint.
    pub description: String,
    /// Vote summary.
    pub votes: VoteBlock,
    /// Five metric indices in axis order.
    pub metrics: [u8; 5],
}

/// Detail page URL for a slug.
#[must_use]
pub fn detail_href(slug: &str) -> String {
    format!("{DETAIL_PATH_PREFIX}{}/", urlencoding::encode(slug))
}

/// Project cached items for the given viewport width.
#[must_use]
pub fn build_entries(items: &[GameSummary], width: u32) -> Vec<CatalogEntry> {
    let budget = for_width(width).description_budget;
    items.iter().map(|item| build_entry(item, budget)).collect()
}

fn build_entry(item: &GameSummary, budget: usize) -> CatalogEntry {
    let percentage = item.positive_percentage();
    let badges = item
        .tags
        .iter()
        .map(|tag| (BadgeKind::Tag, tag.clone()))
        .chain(
            item.age_groups
                .iter()
                .map(|age| (BadgeKind::AgeGroup, age.clone())),
        )
        .collect();
    CatalogEntry {
        slug: item.slug.clone(),
        href: detail_href(&item.slug),
        title: item.title.clone(),
        hint: format!("Click to view details for {}", item.title),
        badges,
        description: truncate_description(&item.short_description, budget),
        votes: VoteBlock {
            upvotes: item.upvote_count,
            downvotes: item.downvote_count,
            label: vote_label(percentage),
            tier: VoteTier::for_percentage(percentage),
        },
        metrics: item.metrics(),
    }
}

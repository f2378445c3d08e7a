//! Pure display helpers extracted from components for non-wasm testing.

use mga_api_models::paging::showing_range;

const ELLIPSIS: &str = "...";

/// Shorten `text` to at most `budget` characters, ellipsis included.
///
/// Text within the budget is returned unchanged.
#[must_use]
pub fn truncate_description(text: &str, budget: usize) -> String {
    if text.chars().count() <= budget {
        return text.to_string();
    }
    let keep = budget.saturating_sub(ELLIPSIS.len());
    let mut out: String = text.chars().take(keep).collect();
    out.push_str(ELLIPSIS);
    out
}

/// Colour tier for the vote badge.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum VoteTier {
    /// More than 75% positive.
    Top,
    /// More than 50% and up to 75% positive.
    Mid,
    /// 50% or less positive.
    Low,
    /// Nobody has voted.
    NoVotes,
}

impl VoteTier {
    /// Classify an optional positive percentage.
    #[must_use]
    pub const fn for_percentage(percentage: Option<u32>) -> Self {
        match percentage {
            None => Self::NoVotes,
            Some(value) if value > 75 => Self::Top,
            Some(value) if value > 50 => Self::Mid,
            Some(_) => Self::Low,
        }
    }
}

/// Summary line shown above the page navigation.
#[must_use]
pub fn showing_label(page_index: u32, total_count: u64) -> Option<String> {
    showing_range(page_index, total_count)
        .map(|(start, end)| format!("Showing {start}-{end} of {total_count} games"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn truncation_keeps_budget_including_ellipsis() {
        let long = "a".repeat(250);
        let short = truncate_description(&long, 190);
        assert_eq!(short.chars().count(), 190);
        assert!(short.ends_with("..."));
        assert_eq!(&short[..187], &long[..187]);

        assert_eq!(truncate_description("Tag, you're it.", 80), "Tag, you're it.");
        let exact = "b".repeat(80);
        assert_eq!(truncate_description(&exact, 80), exact);
    }

    #[test]
    fn truncation_counts_characters_not_bytes() {
        let text = "é".repeat(100);
        let short = truncate_description(&text, 80);
        assert_eq!(short.chars().count(), 80);
        assert!(short.starts_with("ééé"));
    }

    #[test]
    fn vote_tiers_guard_no_votes_first() {
        assert_eq!(VoteTier::for_percentage(None), VoteTier::NoVotes);
        assert_eq!(VoteTier::for_percentage(Some(80)), VoteTier::Top);
        assert_eq!(VoteTier::for_percentage(Some(50)), VoteTier::Low);
        assert_eq!(VoteTier::for_percentage(Some(75)), VoteTier::Mid);
        assert_eq!(VoteTier::for_percentage(Some(76)), VoteTier::Top);
    }

    #[test]
    fn showing_label_formats_range() {
        assert_eq!(
            showing_label(1, 45).as_deref(),
            Some("Showing 21-40 of 45 games")
        );
        assert_eq!(showing_label(0, 0), None);
    }
}

//! Output renderers and formatting helpers for the browse command.

use std::fmt::Write as _;

use anyhow::anyhow;
use clap::ValueEnum;
use mga_api_models::paging::{NavItem, build_nav, showing_range};
use mga_api_models::{GameListResponse, GameSummary, Metric};

use crate::client::{CliError, CliResult};

const TITLE_WIDTH: usize = 32;

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub(crate) enum OutputFormat {
    Table,
    Json,
}

/// Render one catalog page; `page_index` is zero-based.
pub(crate) fn render_page(
    page: &GameListResponse,
    page_index: u32,
    format: OutputFormat,
) -> CliResult<String> {
    match format {
        OutputFormat::Json => serde_json::to_string_pretty(page)
            .map_err(|err| CliError::failure(anyhow!("failed to format JSON: {err}"))),
        OutputFormat::Table => Ok(render_table(page, page_index)),
    }
}

fn render_table(page: &GameListResponse, page_index: u32) -> String {
    if page.is_empty() {
        return "No games match your filters".to_string();
    }

    let mut out = String::new();
    let _ = writeln!(
        out,
        "{:<TITLE_WIDTH$} {:<13} {:>3} {:>3} {:>3} {:>3} {:>3} TAGS",
        "TITLE", "VOTES", "DIF", "PRE", "PHY", "DUR", "GRP"
    );
    for game in &page.games {
        let _ = writeln!(out, "{}", table_row(game));
    }

    if let Some((start, end)) = showing_range(page_index, page.pagination.total_count) {
        let _ = write!(
            out,
            "\nShowing {start}-{end} of {} games",
            page.pagination.total_count
        );
    }
    if let Some(items) = build_nav(page_index + 1, page.pagination.page_count()) {
        let _ = write!(out, "\n{}", format_nav(&items));
    }
    out
}

fn table_row(game: &GameSummary) -> String {
    let votes = game.vote_label();
    let metrics = Metric::ALL.map(|metric| game.metric(metric));
    format!(
        "{:<TITLE_WIDTH$} {:<13} {:>3} {:>3} {:>3} {:>3} {:>3} {}",
        clip(&game.title, TITLE_WIDTH),
        votes,
        metrics[0],
        metrics[1],
        metrics[2],
        metrics[3],
        metrics[4],
        game.tags.join(", ")
    )
}

fn clip(text: &str, width: usize) -> String {
    if text.chars().count() <= width {
        return text.to_string();
    }
    let mut out: String = text.chars().take(width.saturating_sub(1)).collect();
    out.push('…');
    out
}

/// One-line page list, e.g. `« 1 … 8 9 [10] 11 12 … 20 »`.
pub(crate) fn format_nav(items: &[NavItem]) -> String {
    items
        .iter()
        .map(|item| match item {
            NavItem::Prev { .. } => "«".to_string(),
            NavItem::Next { .. } => "»".to_string(),
            NavItem::Ellipsis => "…".to_string(),
            NavItem::Page {
                number,
                active: true,
                ..
            } => format!("[{number}]"),
            NavItem::Page { number, .. } => number.to_string(),
        })
        .collect::<Vec<_>>()
        .join(" ")
}

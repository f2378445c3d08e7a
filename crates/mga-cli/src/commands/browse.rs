use mga_api_models::{CatalogFilters, CatalogQuery, Metric, MetricRange, SortOrder};

use crate::cli::BrowseArgs;
use crate::client::{AppContext, CliResult, fetch_catalog_page};
use crate::output::{OutputFormat, render_page};

/// Translate browse flags into the same query the browser would send.
pub(crate) fn build_query(args: &BrowseArgs) -> CatalogQuery {
    let mut filters = CatalogFilters {
        tags: args.tags.clone(),
        age_groups: args.age_groups.clone(),
        search: args.query.clone().unwrap_or_default(),
        sort_by: SortOrder::from(args.sort).as_value().to_string(),
        ..CatalogFilters::default()
    };
    for metric in Metric::ALL {
        filters.set_range(metric, args.range(metric).unwrap_or(MetricRange::FULL));
    }
    CatalogQuery::new(filters, args.page.saturating_sub(1))
}

pub(crate) async fn handle_browse(
    ctx: &AppContext,
    args: &BrowseArgs,
    format: OutputFormat,
) -> CliResult<String> {
    let query = build_query(args);
    let page = fetch_catalog_page(ctx, &query).await?;
    if args.page > page.pagination.page_count() {
        tracing::warn!(
            requested = args.page,
            total_pages = page.pagination.total_pages,
            "requested page is past the last page"
        );
    }
    render_page(&page, query.page_index, format)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cli::SortArg;
    use anyhow::{Result, anyhow};
    use httpmock::prelude::*;
    use serde_json::json;

    fn context_for(server: &MockServer) -> Result<AppContext> {
        AppContext::new(server.base_url().parse()?, 5).map_err(|err| anyhow!(err.display_message()))
    }

    fn sample_game() -> serde_json::Value {
        json!({
            "slug": "capture-the-flag",
            "title": "Capture the Flag",
            "short_description": "Two teams, two flags.",
            "tags": ["outdoor"],
            "age_groups": ["kids"],
            "difficulty_index": 4,
            "preperation_index": 3,
            "physical_index": 9,
            "duration_index": 6,
            "group_size_index": 8,
            "upvote_count": 3,
            "downvote_count": 1
        })
    }

    #[test]
    fn query_uses_zero_based_page_and_full_default_ranges() {
        let args = BrowseArgs {
            tags: vec!["outdoor".into()],
            difficulty: Some(MetricRange::new(3, 7)),
            query: Some("flag".into()),
            sort: SortArg::Newest,
            page: 3,
            ..BrowseArgs::default()
        };
        let query = build_query(&args);
        assert_eq!(query.page_index, 2);
        assert_eq!(query.start_index(), 40);
        assert_eq!(query.filters.range(Metric::Difficulty), MetricRange::new(3, 7));
        assert!(query.filters.range(Metric::GroupSize).is_full());
        assert_eq!(query.filters.sort_by, "newest");
        assert_eq!(query.filters.search, "flag");
    }

    #[tokio::test]
    async fn browse_sends_filters_and_renders_table() -> Result<()> {
        let server = MockServer::start_async().await;
        let mock = server.mock(|when, then| {
            when.method(GET)
                .path("/wiki/api/v1/games")
                .query_param("tag_filter", "outdoor")
                .query_param("min_physical_index", "6")
                .query_param("max_physical_index", "10")
                .query_param("q", "flag")
                .query_param("sort_by", "upvotes")
                .query_param("start_index", "20")
                .query_param("amount", "20");
            then.status(200)
                .header("content-type", "application/json")
                .json_body(json!({
                    "games": [sample_game()],
                    "pagination": { "total_count": 21, "total_pages": 2 }
                }));
        });

        let ctx = context_for(&server)?;
        let args = BrowseArgs {
            tags: vec!["outdoor".into()],
            physical: Some(MetricRange::new(6, 10)),
            query: Some("flag".into()),
            sort: SortArg::Upvotes,
            page: 2,
            ..BrowseArgs::default()
        };
        let text = handle_browse(&ctx, &args, OutputFormat::Table)
            .await
            .map_err(|err| anyhow!(err.display_message()))?;
        mock.assert();
        assert!(text.contains("Capture the Flag"));
        assert!(text.contains("75% Positive"));
        assert!(text.contains("Showing 21-21 of 21 games"));
        assert!(text.ends_with("« 1 [2] »"));
        Ok(())
    }

    #[tokio::test]
    async fn rejected_query_exits_with_validation_code() -> Result<()> {
        let server = MockServer::start_async().await;
        server.mock(|when, then| {
            when.method(GET).path("/wiki/api/v1/games");
            then.status(422).body("sort_by must be one of relevance, title");
        });

        let ctx = context_for(&server)?;
        let args = BrowseArgs {
            page: 1,
            ..BrowseArgs::default()
        };
        let Err(err) = handle_browse(&ctx, &args, OutputFormat::Json).await else {
            return Err(anyhow!("expected validation error"));
        };
        assert_eq!(err.exit_code(), 2);
        assert!(err.display_message().contains("sort_by must be one of"));
        Ok(())
    }

    #[tokio::test]
    async fn server_error_exits_with_failure_code() -> Result<()> {
        let server = MockServer::start_async().await;
        server.mock(|when, then| {
            when.method(GET).path("/wiki/api/v1/games");
            then.status(500);
        });

        let ctx = context_for(&server)?;
        let args = BrowseArgs {
            page: 1,
            ..BrowseArgs::default()
        };
        let Err(err) = handle_browse(&ctx, &args, OutputFormat::Table).await else {
            return Err(anyhow!("expected failure"));
        };
        assert_eq!(err.exit_code(), 3);
        Ok(())
    }

    #[tokio::test]
    async fn empty_results_render_empty_state() -> Result<()> {
        let server = MockServer::start_async().await;
        server.mock(|when, then| {
            when.method(GET)
                .path("/wiki/api/v1/games")
                .query_param("start_index", "0");
            then.status(200)
                .header("content-type", "application/json")
                .json_body(json!({
                    "games": [],
                    "pagination": { "total_count": 0, "total_pages": 0 }
                }));
        });

        let ctx = context_for(&server)?;
        let args = BrowseArgs {
            page: 1,
            ..BrowseArgs::default()
        };
        let text = handle_browse(&ctx, &args, OutputFormat::Table)
            .await
            .map_err(|err| anyhow!(err.display_message()))?;
        assert_eq!(text, "No games match your filters");
        Ok(())
    }
}

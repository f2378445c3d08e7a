//! Argument parsing, tracing setup and command dispatch.

use clap::{Args, Parser, Subcommand, ValueEnum};
use mga_api_models::{Metric, MetricRange, SortOrder};
use reqwest::Url;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{EnvFilter, fmt};

use crate::client::{AppContext, CliResult, parse_url};
use crate::commands::browse::handle_browse;
use crate::output::OutputFormat;

const DEFAULT_TIMEOUT_SECS: u64 = 10;
const DEFAULT_API_URL: &str = "http://127.0.0.1:8000";
const DEFAULT_LOG_LEVEL: &str = "info";

/// Parses CLI arguments, executes the requested command and returns the
/// process exit code.
pub async fn run() -> i32 {
    let cli = Cli::parse();
    init_tracing();

    match dispatch(cli).await {
        Ok(()) => 0,
        Err(err) => {
            let message = err.display_message();
            tracing::debug!(exit_code = err.exit_code(), error = %message, "command failed");
            eprintln!("error: {message}");
            err.exit_code()
        }
    }
}

fn init_tracing() {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_LEVEL));
    // A subscriber installed by an embedding test harness wins.
    let _ = tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().with_writer(std::io::stderr).with_target(false))
        .try_init();
}

async fn dispatch(cli: Cli) -> CliResult<()> {
    let ctx = AppContext::new(cli.api_url, cli.timeout)?;
    match cli.command {
        Command::Browse(args) => {
            let rendered = handle_browse(&ctx, &args, cli.output).await?;
            println!("{rendered}");
            Ok(())
        }
    }
}

#[derive(Parser)]
#[command(name = "mga", about = "Browse the game wiki catalog from a terminal")]
pub(crate) struct Cli {
    #[arg(
        long,
        global = true,
        env = "MGA_API_URL",
        value_parser = parse_url,
        default_value = DEFAULT_API_URL
    )]
    pub(crate) api_url: Url,
    #[arg(
        long,
        global = true,
        env = "MGA_HTTP_TIMEOUT_SECS",
        default_value_t = DEFAULT_TIMEOUT_SECS
    )]
    pub(crate) timeout: u64,
    #[arg(
        long = "output",
        alias = "format",
        global = true,
        value_enum,
        default_value_t = OutputFormat::Table,
        help = "Select output format for the results page"
    )]
    pub(crate) output: OutputFormat,
    #[command(subcommand)]
    pub(crate) command: Command,
}

#[derive(Subcommand)]
pub(crate) enum Command {
    /// Fetch one page of catalog results.
    Browse(BrowseArgs),
}

#[derive(Args, Debug, Clone, Default)]
pub(crate) struct BrowseArgs {
    /// Tag filter; repeat for several tags.
    #[arg(long = "tag")]
    pub(crate) tags: Vec<String>,
    /// Age-group filter; repeat for several groups.
    #[arg(long = "age-group")]
    pub(crate) age_groups: Vec<String>,
    /// Difficulty range, `N` or `N-M` within 1-10.
    #[arg(long, value_parser = parse_metric_range)]
    pub(crate) difficulty: Option<MetricRange>,
    /// Preparation range, `N` or `N-M` within 1-10.
    #[arg(long, value_parser = parse_metric_range)]
    pub(crate) preparation: Option<MetricRange>,
    /// Physical range, `N` or `N-M` within 1-10.
    #[arg(long, value_parser = parse_metric_range)]
    pub(crate) physical: Option<MetricRange>,
    /// Duration range, `N` or `N-M` within 1-10.
    #[arg(long, value_parser = parse_metric_range)]
    pub(crate) duration: Option<MetricRange>,
    /// Group-size range, `N` or `N-M` within 1-10.
    #[arg(long = "group-size", value_parser = parse_metric_range)]
    pub(crate) group_size: Option<MetricRange>,
    /// Free-text search, sent verbatim.
    #[arg(long, short = 'q')]
    pub(crate) query: Option<String>,
    #[arg(long, value_enum, default_value_t = SortArg::Relevance)]
    pub(crate) sort: SortArg,
    /// One-based page number.
    #[arg(
        long,
        default_value_t = 1,
        value_parser = clap::value_parser!(u32).range(1..)
    )]
    pub(crate) page: u32,
}

impl BrowseArgs {
    /// Range flag supplied for a metric, if any.
    pub(crate) const fn range(&self, metric: Metric) -> Option<MetricRange> {
        match metric {
            Metric::Difficulty => self.difficulty,
            Metric::Preparation => self.preparation,
            Metric::Physical => self.physical,
            Metric::Duration => self.duration,
            Metric::GroupSize => self.group_size,
        }
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, ValueEnum)]
pub(crate) enum SortArg {
    #[default]
    Relevance,
    Title,
    Newest,
    Upvotes,
}

impl From<SortArg> for SortOrder {
    fn from(value: SortArg) -> Self {
        match value {
            SortArg::Relevance => Self::Relevance,
            SortArg::Title => Self::Title,
            SortArg::Newest => Self::Newest,
            SortArg::Upvotes => Self::Upvotes,
        }
    }
}

/// Parse `N` or `N-M` into a range; bounds outside 1-10 are rejected, not clamped.
pub(crate) fn parse_metric_range(input: &str) -> Result<MetricRange, String> {
    let (low, high) = match input.split_once('-') {
        Some((low, high)) => (parse_bound(low, input)?, parse_bound(high, input)?),
        None => {
            let value = parse_bound(input, input)?;
            (value, value)
        }
    };
    if low > high {
        return Err(format!("range '{input}' has its lower bound above its upper bound"));
    }
    Ok(MetricRange::new(low, high))
}

fn parse_bound(raw: &str, input: &str) -> Result<u8, String> {
    let value: u8 = raw
        .trim()
        .parse()
        .map_err(|_| format!("invalid range '{input}': expected N or N-M"))?;
    if (MetricRange::LOWEST..=MetricRange::HIGHEST).contains(&value) {
        Ok(value)
    } else {
        Err(format!(
            "invalid range '{input}': bounds must lie within {}-{}",
            MetricRange::LOWEST,
            MetricRange::HIGHEST
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn metric_ranges_accept_single_values_and_pairs() {
        assert_eq!(parse_metric_range("3-7"), Ok(MetricRange::new(3, 7)));
        assert_eq!(parse_metric_range("5"), Ok(MetricRange::new(5, 5)));
        assert_eq!(parse_metric_range(" 1 - 10 "), Ok(MetricRange::FULL));
    }

    #[test]
    fn metric_ranges_reject_out_of_bounds_and_reversed() {
        assert!(parse_metric_range("0-4").is_err());
        assert!(parse_metric_range("2-11").is_err());
        assert!(parse_metric_range("8-2").is_err());
        assert!(parse_metric_range("easy").is_err());
    }

    #[test]
    fn browse_flags_parse() {
        let cli = Cli::try_parse_from([
            "mga",
            "--output",
            "json",
            "browse",
            "--tag",
            "outdoor",
            "--tag",
            "team",
            "--group-size",
            "4-8",
            "-q",
            "tag",
            "--sort",
            "upvotes",
            "--page",
            "3",
        ]);
        let cli = match cli {
            Ok(cli) => cli,
            Err(err) => panic!("arguments should parse: {err}"),
        };
        assert_eq!(cli.output, OutputFormat::Json);
        let Command::Browse(args) = cli.command;
        assert_eq!(args.tags, vec!["outdoor", "team"]);
        assert_eq!(args.range(Metric::GroupSize), Some(MetricRange::new(4, 8)));
        assert_eq!(args.range(Metric::Difficulty), None);
        assert_eq!(args.query.as_deref(), Some("tag"));
        assert_eq!(SortOrder::from(args.sort), SortOrder::Upvotes);
        assert_eq!(args.page, 3);
    }

    #[test]
    fn page_zero_is_rejected() {
        assert!(Cli::try_parse_from(["mga", "browse", "--page", "0"]).is_err());
    }
}

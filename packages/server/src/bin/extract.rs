//! CLI for running a single content extraction
//!
//! Runs the same pipeline as `POST /api/fetch-content` and prints the result,
//! either as readable text or as the JSON the endpoint would return.

use std::process::ExitCode;
use std::time::Duration;

use anyhow::{Context, Result};
use clap::Parser;
use content_extractor::{
    ExtractionError, ExtractionResult, Extractor, HarvestLimits, HttpFetcher,
};
use server_core::server::FETCH_FAILURE_PREFIX;
use server_core::Config;

#[derive(Parser)]
#[command(name = "extract")]
#[command(about = "Fetch a page and print its extracted summary")]
struct Cli {
    /// Page to fetch
    url: String,

    /// Print the JSON result instead of text
    #[arg(long)]
    json: bool,

    /// Request timeout in seconds (defaults to FETCH_TIMEOUT_SECS or 30)
    #[arg(long)]
    timeout: Option<u64>,

    /// User-Agent header (defaults to FETCH_USER_AGENT or a desktop browser string)
    #[arg(long)]
    user_agent: Option<String>,

    /// Maximum characters of content to print
    #[arg(long, default_value_t = HarvestLimits::default().max_content_chars)]
    max_chars: usize,
}

/// Exit code for an unusable URL argument.
const EXIT_USAGE: u8 = 2;

/// Exit code for fetch and processing failures.
const EXIT_FAILURE: u8 = 1;

/// What the CLI prints for an extraction outcome.
#[derive(Debug, PartialEq, Eq)]
enum Report {
    /// Printed to stdout, exit 0
    Success(String),
    /// Printed to stderr
    Failure { code: u8, message: String },
}

fn render(
    outcome: std::result::Result<ExtractionResult, ExtractionError>,
    json: bool,
) -> Result<Report> {
    let report = match outcome {
        Ok(result) if json => Report::Success(serde_json::to_string_pretty(&result)?),
        Ok(result) => Report::Success(format!("{}\n\n{}", result.title, result.content)),
        Err(e) if e.is_client_error() => Report::Failure {
            code: EXIT_USAGE,
            message: e.to_string(),
        },
        Err(e) => Report::Failure {
            code: EXIT_FAILURE,
            message: format!("{FETCH_FAILURE_PREFIX}{e}"),
        },
    };
    Ok(report)
}

#[tokio::main]
async fn main() -> Result<ExitCode> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "warn".into()),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    let mut config = Config::from_env().context("Failed to load configuration")?;
    if let Some(secs) = cli.timeout {
        config.fetch_timeout = Duration::from_secs(secs);
    }
    if let Some(user_agent) = cli.user_agent {
        config.user_agent = user_agent;
    }

    let fetcher =
        HttpFetcher::with_config(config.fetch_config()).context("Failed to create HTTP fetcher")?;
    let limits = HarvestLimits {
        max_content_chars: cli.max_chars,
        ..HarvestLimits::default()
    };
    let extractor = Extractor::new(fetcher).with_limits(limits);

    match render(extractor.extract(&cli.url).await, cli.json)? {
        Report::Success(text) => {
            println!("{text}");
            Ok(ExitCode::SUCCESS)
        }
        Report::Failure { code, message } => {
            eprintln!("{message}");
            Ok(ExitCode::from(code))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use content_extractor::FetchError;

    fn sleep_result() -> ExtractionResult {
        ExtractionResult {
            title: "Sleep".to_string(),
            content: "Getting consistent sleep matters.".to_string(),
            url: "https://example.com/sleep".to_string(),
        }
    }

    #[test]
    fn test_text_output() {
        let report = render(Ok(sleep_result()), false).unwrap();
        assert_eq!(
            report,
            Report::Success("Sleep\n\nGetting consistent sleep matters.".to_string())
        );
    }

    #[test]
    fn test_json_output_matches_endpoint_shape() {
        let Report::Success(text) = render(Ok(sleep_result()), true).unwrap() else {
            panic!("expected success");
        };
        let json: serde_json::Value = serde_json::from_str(&text).unwrap();
        assert_eq!(json["title"], "Sleep");
        assert_eq!(json["url"], "https://example.com/sleep");
    }

    #[test]
    fn test_blank_url_is_usage_error() {
        let report = render(Err(ExtractionError::UrlRequired), false).unwrap();
        assert_eq!(
            report,
            Report::Failure {
                code: EXIT_USAGE,
                message: "URL is required".to_string(),
            }
        );
    }

    #[test]
    fn test_fetch_failure_uses_endpoint_message() {
        let err = ExtractionError::from(FetchError::status(404, Some("Not Found")));
        let report = render(Err(err), true).unwrap();
        assert_eq!(
            report,
            Report::Failure {
                code: EXIT_FAILURE,
                message: "Failed to fetch content: Failed to fetch: Not Found".to_string(),
            }
        );
    }

    #[test]
    fn test_cli_parses_flags() {
        let cli = Cli::try_parse_from([
            "extract",
            "https://example.com",
            "--json",
            "--timeout",
            "5",
            "--max-chars",
            "200",
        ])
        .unwrap();
        assert!(cli.json);
        assert_eq!(cli.timeout, Some(5));
        assert_eq!(cli.max_chars, 200);
        assert!(cli.user_agent.is_none());
    }
}

// src/cli.rs
// =============================================================================
// This file defines our command-line interface using the `clap` crate.
//
// We use the "derive" API which lets us define the CLI structure using
// Rust structs and attributes (the #[...] things).
// =============================================================================

use clap::{ArgAction, Parser};
use std::time::Duration;

use page_analyzer::config::{AnalyzerConfig, DEFAULT_MAX_CONCURRENT_PROBES};

// This struct represents our entire CLI application
#[derive(Parser, Debug)]
#[command(
    name = "page-analyzer",
    version,
    about = "Fetch a web page and report its HTML version, title, headings, links and login form",
    long_about = "page-analyzer fetches one page, inspects its markup and probes every link under <body>. \
                  The inaccessible link count is a best-effort estimate: only probes that fail within \
                  the collection window are counted."
)]
pub struct Cli {
    /// URL of the page to analyse (e.g., https://example.com)
    pub url: String,

    /// Output the result in JSON format instead of a table
    #[arg(long)]
    pub json: bool,

    /// Timeout for fetching the page itself, in seconds
    #[arg(long, default_value_t = 10)]
    pub fetch_timeout_secs: u64,

    /// How long to collect link probe outcomes, in milliseconds
    #[arg(long, default_value_t = 10)]
    pub window_ms: u64,

    /// Maximum number of link probes in flight at once
    #[arg(long, default_value_t = DEFAULT_MAX_CONCURRENT_PROBES)]
    pub max_concurrency: usize,

    /// Timeout for each individual link probe, in seconds
    #[arg(long, default_value_t = 10)]
    pub probe_timeout_secs: u64,

    /// Resolve relative links against the page URL before probing them
    #[arg(long)]
    pub resolve_relative: bool,

    /// Increase log verbosity (-v = info, -vv = debug)
    #[arg(short, long, action = ArgAction::Count)]
    pub verbose: u8,
}

impl Cli {
    pub fn analyzer_config(&self) -> AnalyzerConfig {
        AnalyzerConfig::default()
            .with_fetch_timeout(Duration::from_secs(self.fetch_timeout_secs))
            .with_collection_window(Duration::from_millis(self.window_ms))
            .with_max_concurrent_probes(self.max_concurrency)
            .with_probe_timeout(Duration::from_secs(self.probe_timeout_secs))
            .with_resolve_relative_links(self.resolve_relative)
    }

    pub fn log_filter(&self) -> &'static str {
        match self.verbose {
            0 => "warn",
            1 => "info",
            _ => "debug",
        }
    }
}

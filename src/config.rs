// src/config.rs
// =============================================================================
// Tunables for one Analyzer.
//
// Every request is time-bounded: the page fetch by fetch_timeout, each
// link probe by probe_timeout.
//
// Defaults reproduce the classic behaviour: a 10 ms collection window for
// link probes and hrefs probed exactly as written in the page. The CLI
// overrides each field through its flags.
// =============================================================================

use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Default budget during which probe outcomes are collected
pub const DEFAULT_COLLECTION_WINDOW: Duration = Duration::from_millis(10);

/// Default cap on in-flight link probes
pub const DEFAULT_MAX_CONCURRENT_PROBES: usize = 50;

/// Default per-probe request timeout
pub const DEFAULT_PROBE_TIMEOUT: Duration = Duration::from_secs(10);

/// Default timeout for fetching the analysed page itself
pub const DEFAULT_FETCH_TIMEOUT: Duration = Duration::from_secs(10);

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AnalyzerConfig {
    /// Upper bound for the page fetch, body included
    #[serde(default = "default_fetch_timeout")]
    pub fetch_timeout: Duration,

    /// How long the checker listens for probe outcomes
    #[serde(default = "default_collection_window")]
    pub collection_window: Duration,

    /// Maximum number of probes with a request in flight at once
    #[serde(default = "default_max_concurrent_probes")]
    pub max_concurrent_probes: usize,

    /// Upper bound for a single probe's GET
    #[serde(default = "default_probe_timeout")]
    pub probe_timeout: Duration,

    /// Resolve relative hrefs against the page URL before probing them
    #[serde(default)]
    pub resolve_relative_links: bool,

    /// User-Agent header sent with every request
    #[serde(default = "default_user_agent")]
    pub user_agent: String,
}

impl Default for AnalyzerConfig {
    fn default() -> Self {
        Self {
            fetch_timeout: default_fetch_timeout(),
            collection_window: default_collection_window(),
            max_concurrent_probes: default_max_concurrent_probes(),
            probe_timeout: default_probe_timeout(),
            resolve_relative_links: false,
            user_agent: default_user_agent(),
        }
    }
}

impl AnalyzerConfig {
    pub fn with_fetch_timeout(mut self, timeout: Duration) -> Self {
        self.fetch_timeout = timeout;
        self
    }

    pub fn with_collection_window(mut self, window: Duration) -> Self {
        self.collection_window = window;
        self
    }

    // A zero cap would deadlock every probe on the semaphore, so clamp to 1
    pub fn with_max_concurrent_probes(mut self, max: usize) -> Self {
        self.max_concurrent_probes = max.max(1);
        self
    }

    pub fn with_probe_timeout(mut self, timeout: Duration) -> Self {
        self.probe_timeout = timeout;
        self
    }

    pub fn with_resolve_relative_links(mut self, resolve: bool) -> Self {
        self.resolve_relative_links = resolve;
        self
    }

    pub fn with_user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.user_agent = user_agent.into();
        self
    }
}

fn default_fetch_timeout() -> Duration {
    DEFAULT_FETCH_TIMEOUT
}

fn default_collection_window() -> Duration {
    DEFAULT_COLLECTION_WINDOW
}

fn default_max_concurrent_probes() -> usize {
    DEFAULT_MAX_CONCURRENT_PROBES
}

fn default_probe_timeout() -> Duration {
    DEFAULT_PROBE_TIMEOUT
}

fn default_user_agent() -> String {
    format!("page-analyzer/{}", env!("CARGO_PKG_VERSION"))
}

// src/checker/http.rs
// =============================================================================
// This module estimates how many links of a page are unreachable.
//
// Key functionality:
// - One probe task per link, each doing a single GET
// - A Semaphore caps how many probes have a request in flight
// - Outcomes are collected only during a short, fixed window
// - Probes still running when the window closes are aborted
//
// The count is a best-effort, lower-bound-biased estimate: a link that is
// slow but eventually answers is neither counted reachable nor unreachable,
// it simply isn't observed in time. The status code is never checked; only
// transport errors make a link inaccessible.
//
// Rust concepts:
// - tokio::spawn via JoinSet: tasks that are aborted when the set is dropped
// - mpsc channels: many probes (producers), one collector (consumer)
// - Arc<Semaphore>: shared concurrency limit
// =============================================================================

use log::debug;
use reqwest::Client;
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::{mpsc, Semaphore};
use tokio::task::JoinSet;
use tokio::time::{timeout_at, Instant};

use crate::config::AnalyzerConfig;

/// Tally of one accessibility check.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CheckReport {
    /// Links handed to the checker
    pub links: usize,
    /// Outcomes received within the collection window
    pub observed: usize,
    /// Observed outcomes that were transport errors
    pub inaccessible: usize,
    /// Tasks still running when collection ended, aborted unfinished
    pub cancelled: usize,
}

#[derive(Debug, Clone)]
pub struct AccessibilityChecker {
    client: Client,
    collection_window: Duration,
    max_concurrent_probes: usize,
    probe_timeout: Duration,
}

impl AccessibilityChecker {
    pub fn new(client: Client, config: &AnalyzerConfig) -> Self {
        Self {
            client,
            collection_window: config.collection_window,
            max_concurrent_probes: config.max_concurrent_probes.max(1),
            probe_timeout: config.probe_timeout,
        }
    }

    // Probes every link and returns how many failed within the window
    //
    // The result is always <= links.len(): each probe reports at most once.
    pub async fn count_inaccessible(&self, links: &[String]) -> usize {
        self.check(links).await.inaccessible
    }

    // Same as count_inaccessible, with the full tally
    pub async fn check(&self, links: &[String]) -> CheckReport {
        // Nothing to wait for
        if links.is_empty() {
            return CheckReport::default();
        }

        // Capacity == number of probes, so a probe's one try_send can never
        // find the channel full; it only fails once the collector is gone.
        let (tx, mut rx) = mpsc::channel::<bool>(links.len());
        let permits = Arc::new(Semaphore::new(self.max_concurrent_probes));
        let mut probes = JoinSet::new();

        for link in links {
            let client = self.client.clone();
            let permits = Arc::clone(&permits);
            let tx = tx.clone();
            let url = link.clone();
            let timeout = self.probe_timeout;

            probes.spawn(async move {
                // The semaphore is never closed, so acquire only fails if the
                // whole set is being torn down
                let Ok(_permit) = permits.acquire_owned().await else {
                    return;
                };
                let reachable = probe(&client, &url, timeout).await;
                let _ = tx.try_send(reachable);
            });
        }

        // Only the probes hold senders now; recv() yields None once all
        // of them have reported
        drop(tx);

        let deadline = Instant::now() + self.collection_window;
        let mut observed = 0;
        let mut inaccessible = 0;

        loop {
            match timeout_at(deadline, rx.recv()).await {
                Ok(Some(reachable)) => {
                    observed += 1;
                    if !reachable {
                        inaccessible += 1;
                    }
                }
                Ok(None) => break,
                Err(_) => {
                    debug!(
                        "Collection window of {:?} elapsed with {} of {} probe(s) reported",
                        self.collection_window,
                        observed,
                        links.len()
                    );
                    break;
                }
            }
        }

        // Cancel whatever is still in flight. Aborted tasks stop at their
        // current .await (dropping the in-flight request), so reaping them
        // doesn't wait on the network.
        probes.abort_all();
        let mut cancelled = 0;
        while let Some(joined) = probes.join_next().await {
            if matches!(joined, Err(ref e) if e.is_cancelled()) {
                cancelled += 1;
            }
        }

        debug!(
            "{} inaccessible out of {} observed ({} link(s) total, {} cancelled)",
            inaccessible,
            observed,
            links.len(),
            cancelled
        );
        CheckReport {
            links: links.len(),
            observed,
            inaccessible,
            cancelled,
        }
    }
}

// Issues one GET; true when a response (any status) came back
async fn probe(client: &Client, url: &str, timeout: Duration) -> bool {
    match client.get(url).timeout(timeout).send().await {
        Ok(_) => true,
        Err(e) => {
            debug!("Probe of {:?} failed: {}", url, e);
            false
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use wiremock::matchers::{method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    fn checker(window: Duration) -> AccessibilityChecker {
        let config = AnalyzerConfig::default()
            .with_collection_window(window)
            .with_probe_timeout(Duration::from_secs(5));
        AccessibilityChecker::new(Client::new(), &config)
    }

    #[tokio::test]
    async fn test_no_links_returns_immediately() {
        let started = std::time::Instant::now();
        let count = checker(Duration::from_secs(30)).count_inaccessible(&[]).await;
        assert_eq!(count, 0);
        assert!(started.elapsed() < Duration::from_secs(1));
    }

    #[tokio::test]
    async fn test_counts_transport_errors_only() {
        let mock_server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/ok"))
            .respond_with(ResponseTemplate::new(200))
            .mount(&mock_server)
            .await;
        Mock::given(method("GET"))
            .and(path("/gone"))
            .respond_with(ResponseTemplate::new(404))
            .mount(&mock_server)
            .await;

        let links = vec![
            format!("{}/ok", mock_server.uri()),
            // A 404 is still a response, so it's reachable
            format!("{}/gone", mock_server.uri()),
            "not a url".to_string(),
            "/relative/path".to_string(),
        ];

        let started = std::time::Instant::now();
        let count = checker(Duration::from_secs(30)).count_inaccessible(&links).await;
        assert_eq!(count, 2);
        // Every probe reported, so the window didn't have to run out
        assert!(started.elapsed() < Duration::from_secs(10));
    }

    #[tokio::test]
    async fn test_count_never_exceeds_link_count() {
        let links: Vec<String> = (0..40).map(|i| format!("broken link {i}")).collect();
        let config = AnalyzerConfig::default()
            .with_collection_window(Duration::from_secs(30))
            .with_max_concurrent_probes(4);
        let checker = AccessibilityChecker::new(Client::new(), &config);

        let count = checker.count_inaccessible(&links).await;
        assert_eq!(count, links.len());
    }

    #[tokio::test]
    async fn test_slow_links_are_abandoned_after_window() {
        let mock_server = MockServer::start().await;

        Mock::given(method("GET"))
            .respond_with(ResponseTemplate::new(200).set_delay(Duration::from_secs(3)))
            .mount(&mock_server)
            .await;

        let links = vec![mock_server.uri(), format!("{}/slow", mock_server.uri())];

        let started = std::time::Instant::now();
        let report = checker(Duration::from_millis(50)).check(&links).await;

        assert_eq!(report.inaccessible, 0);
        assert_eq!(report.observed, 0);
        // Both requests were still waiting on the server and got aborted
        assert_eq!(report.cancelled, 2);
        assert!(started.elapsed() < Duration::from_secs(2));
    }

    #[tokio::test]
    async fn test_nothing_cancelled_when_all_report() {
        let links = vec!["nope".to_string(), "also nope".to_string()];
        let report = checker(Duration::from_secs(30)).check(&links).await;

        assert_eq!(
            report,
            CheckReport {
                links: 2,
                observed: 2,
                inaccessible: 2,
                cancelled: 0,
            }
        );
    }

    #[tokio::test]
    async fn test_duplicates_are_probed_individually() {
        let links = vec!["nope".to_string(), "nope".to_string(), "nope".to_string()];
        let count = checker(Duration::from_secs(30)).count_inaccessible(&links).await;
        assert_eq!(count, 3);
    }
}

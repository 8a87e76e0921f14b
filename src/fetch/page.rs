// src/fetch/page.rs
// =============================================================================
// Fetches the page to analyse.
//
// The body is decoded with the charset from the Content-Type header (reqwest
// does this through encoding_rs), falling back to UTF-8 with replacement
// characters, so a Latin-1 or windows-1252 page decodes like any other.
//
// Rust concepts:
// - async functions: the fetch is network I/O
// - Drop: the response (and its connection) is released when it goes out of
//   scope, on every path including errors
// =============================================================================

use log::{debug, warn};
use reqwest::header::CONTENT_TYPE;
use reqwest::{Client, StatusCode};
use std::time::Duration;

use crate::error::FetchError;

/// A page that answered HTTP 200.
#[derive(Debug, Clone)]
pub struct FetchedPage {
    /// Final URL after redirects
    pub url: String,
    /// Raw Content-Type header, if the server sent one
    pub content_type: Option<String>,
    /// Body decoded to text
    pub body: String,
}

// Wraps a shared reqwest client
//
// Client is cheap to clone (it's an Arc internally), so the Analyzer hands
// the same connection pool to the fetcher and to the link checker.
#[derive(Debug, Clone)]
pub struct PageFetcher {
    client: Client,
    timeout: Duration,
}

impl PageFetcher {
    pub fn new(client: Client, timeout: Duration) -> Self {
        Self { client, timeout }
    }

    // Fetches a web page and returns its decoded body
    //
    // Redirects follow reqwest's default policy. Anything but an exact
    // 200 OK is an error, even other 2xx codes. The timeout covers the
    // whole exchange, body included.
    pub async fn fetch(&self, url: &str) -> Result<FetchedPage, FetchError> {
        if url.trim().is_empty() {
            return Err(FetchError::InvalidRequest);
        }

        debug!("GET {}", url);
        let response = self
            .client
            .get(url)
            .timeout(self.timeout)
            .send()
            .await
            .map_err(|source| {
                warn!("Failed to fetch {}: {}", url, source);
                FetchError::Request { url: url.to_string(), source }
            })?;

        let status = response.status();
        if status != StatusCode::OK {
            warn!("{} answered HTTP {}", url, status);
            return Err(FetchError::Status { url: url.to_string(), status });
        }

        let final_url = response.url().to_string();
        if final_url != url {
            debug!("{} redirected to {}", url, final_url);
        }
        let content_type = response
            .headers()
            .get(CONTENT_TYPE)
            .and_then(|v| v.to_str().ok())
            .map(str::to_string);

        let body = response
            .text()
            .await
            .map_err(|source| FetchError::Request { url: url.to_string(), source })?;

        debug!("Fetched {} bytes of text from {}", body.len(), final_url);
        Ok(FetchedPage { url: final_url, content_type, body })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use wiremock::matchers::{method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    fn fetcher() -> PageFetcher {
        PageFetcher::new(Client::new(), Duration::from_secs(10))
    }

    #[tokio::test]
    async fn test_fetch_returns_body_on_200() {
        let mock_server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/page"))
            .respond_with(ResponseTemplate::new(200).set_body_raw("<p>hi</p>", "text/html"))
            .mount(&mock_server)
            .await;

        let url = format!("{}/page", mock_server.uri());
        let page = fetcher().fetch(&url).await.unwrap();
        assert_eq!(page.body, "<p>hi</p>");
        assert_eq!(page.url, url);
        assert_eq!(page.content_type.as_deref(), Some("text/html"));
    }

    #[tokio::test]
    async fn test_fetch_decodes_latin1_body() {
        let mock_server = MockServer::start().await;

        // "Café" in ISO-8859-1: 0xE9 is not valid UTF-8 on its own
        let mut body = b"<!DOCTYPE html><html><head><title>Caf".to_vec();
        body.push(0xe9);
        body.extend_from_slice(b"</title></head><body></body></html>");

        Mock::given(method("GET"))
            .respond_with(
                ResponseTemplate::new(200).set_body_raw(body, "text/html; charset=iso-8859-1"),
            )
            .mount(&mock_server)
            .await;

        let page = fetcher().fetch(&mock_server.uri()).await.unwrap();
        assert!(page.body.contains("<title>Café</title>"));
    }

    #[tokio::test]
    async fn test_fetch_reports_final_url_after_redirect() {
        let mock_server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/old"))
            .respond_with(ResponseTemplate::new(302).insert_header("location", "/new/home"))
            .mount(&mock_server)
            .await;
        Mock::given(method("GET"))
            .and(path("/new/home"))
            .respond_with(ResponseTemplate::new(200).set_body_string("moved"))
            .mount(&mock_server)
            .await;

        let page = fetcher()
            .fetch(&format!("{}/old", mock_server.uri()))
            .await
            .unwrap();
        assert_eq!(page.url, format!("{}/new/home", mock_server.uri()));
        assert_eq!(page.body, "moved");
    }

    #[tokio::test]
    async fn test_fetch_gives_up_on_stalled_server() {
        let mock_server = MockServer::start().await;

        Mock::given(method("GET"))
            .respond_with(ResponseTemplate::new(200).set_delay(Duration::from_secs(30)))
            .mount(&mock_server)
            .await;

        let fetcher = PageFetcher::new(Client::new(), Duration::from_millis(200));
        let started = std::time::Instant::now();
        let err = fetcher.fetch(&mock_server.uri()).await.unwrap_err();

        assert!(matches!(err, FetchError::Request { ref source, .. } if source.is_timeout()));
        assert!(started.elapsed() < Duration::from_secs(5));
    }

    #[tokio::test]
    async fn test_fetch_rejects_404() {
        let mock_server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/missing"))
            .respond_with(ResponseTemplate::new(404))
            .mount(&mock_server)
            .await;

        let err = fetcher()
            .fetch(&format!("{}/missing", mock_server.uri()))
            .await
            .unwrap_err();
        assert!(matches!(err, FetchError::Status { status, .. } if status == StatusCode::NOT_FOUND));
    }

    #[tokio::test]
    async fn test_fetch_rejects_non_200_success() {
        let mock_server = MockServer::start().await;

        Mock::given(method("GET"))
            .respond_with(ResponseTemplate::new(204))
            .mount(&mock_server)
            .await;

        let err = fetcher().fetch(&mock_server.uri()).await.unwrap_err();
        assert!(matches!(err, FetchError::Status { status, .. } if status == StatusCode::NO_CONTENT));
    }

    #[tokio::test]
    async fn test_fetch_rejects_empty_url() {
        let err = fetcher().fetch("   ").await.unwrap_err();
        assert!(matches!(err, FetchError::InvalidRequest));
    }

    #[tokio::test]
    async fn test_fetch_reports_network_error() {
        let err = fetcher().fetch("not a url").await.unwrap_err();
        assert!(matches!(err, FetchError::Request { .. }));
    }
}

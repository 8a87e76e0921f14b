// src/error.rs
// =============================================================================
// Typed errors for one page analysis.
//
// Only two stages can fail an analysis: fetching the page and interpreting
// its bytes as markup. Link probes never fail the analysis, their errors are
// folded into a count inside the checker.
//
// Rust concepts:
// - thiserror: derive std::error::Error and Display from attributes
// - #[from]: automatic conversion so the ? operator can wrap inner errors
// =============================================================================

use reqwest::StatusCode;
use thiserror::Error;

/// Failure to retrieve the target page.
#[derive(Debug, Error)]
pub enum FetchError {
    /// The request carried no usable URL
    #[error("URL must not be empty")]
    InvalidRequest,

    /// Network-level failure (DNS, connect, TLS, timeout, bad URL...)
    #[error("request to {url} failed: {source}")]
    Request {
        url: String,
        #[source]
        source: reqwest::Error,
    },

    /// A response arrived but its status was not exactly 200
    #[error("{url} answered HTTP {status}")]
    Status { url: String, status: StatusCode },
}

/// Failure to interpret the fetched body as markup.
#[derive(Debug, Error)]
pub enum ParseError {
    /// The response declared a media type that can't hold HTML
    #[error("response is not markup (content-type {0})")]
    NotMarkup(String),
}

/// Everything that can abort an analysis.
#[derive(Debug, Error)]
pub enum AnalyzeError {
    #[error(transparent)]
    Fetch(#[from] FetchError),

    #[error(transparent)]
    Parse(#[from] ParseError),

    /// The HTTP client itself could not be built
    #[error("failed to build HTTP client: {0}")]
    Client(#[source] reqwest::Error),
}

/// Coarse classification an outer layer can map to transport status codes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    InvalidArgument,
    NotFound,
    Internal,
}

impl AnalyzeError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            AnalyzeError::Fetch(FetchError::InvalidRequest) => ErrorKind::InvalidArgument,
            AnalyzeError::Fetch(FetchError::Status { status, .. })
                if matches!(*status, StatusCode::NOT_FOUND | StatusCode::GONE) =>
            {
                ErrorKind::NotFound
            }
            _ => ErrorKind::Internal,
        }
    }
}

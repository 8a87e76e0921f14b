// src/fetch/mod.rs
// =============================================================================
// This module retrieves the page under analysis.
//
// Exactly one GET per analysis, no retries. Only an HTTP 200 counts as
// success; every other status or network failure becomes a FetchError.
// =============================================================================

mod page;

pub use page::{FetchedPage, PageFetcher};

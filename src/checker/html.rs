// src/checker/html.rs
// =============================================================================
// This module extracts links from a parsed page.
//
// Every <a> under <body> counts, in document order, duplicates included.
// An anchor without href contributes "" so that the link count always
// equals the anchor count.
//
// We also use the `url` crate to:
// - Resolve relative hrefs to absolute URLs (only when asked to)
//
// Rust concepts:
// - Iterators: For processing collections
// - Closures: Anonymous functions (|x| ...)
// =============================================================================

use log::debug;
use url::Url;

use crate::document::{selector, ParsedDocument};

// Extracts the href of every anchor below <body>
//
// Example:
//   html = "<body><a href='/docs'>Docs</a><a>no href</a></body>"
//   result = ["/docs", ""]
pub fn extract_body_links(document: &ParsedDocument) -> Vec<String> {
    let links: Vec<String> = document
        .select(&selector("body a"))
        .map(|anchor| anchor.value().attr("href").unwrap_or_default().to_string())
        .collect();

    debug!("Extracted {} link(s) under <body>", links.len());
    links
}

// Turns every href into an absolute URL relative to the analysed page
//
// Hrefs that can't be resolved are kept verbatim so the probe still runs
// (and fails) for them; the returned list is always as long as `links`.
pub fn resolve_links(page_url: &str, links: &[String]) -> Vec<String> {
    let base = match Url::parse(page_url) {
        Ok(url) => url,
        Err(e) => {
            debug!("Not resolving links, invalid base URL {}: {}", page_url, e);
            return links.to_vec();
        }
    };

    links
        .iter()
        .map(|href| resolve_url(&base, href).unwrap_or_else(|| href.clone()))
        .collect()
}

// Resolves a possibly-relative URL to an absolute URL
//
// Examples:
//   base = "https://example.com/page"
//   href = "/docs" -> Some("https://example.com/docs")
//   href = "../other" -> Some("https://example.com/other")
//   href = "https://other.com" -> Some("https://other.com/")
fn resolve_url(base: &Url, href: &str) -> Option<String> {
    match Url::parse(href) {
        Ok(url) => Some(url.to_string()),
        Err(_) => base.join(href).ok().map(|url| url.to_string()),
    }
}

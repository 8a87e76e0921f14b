// src/document/parse.rs
// =============================================================================
// Builds the in-memory tree for one fetched page.
//
// We use the `scraper` crate which:
// - Parses HTML into a DOM (Document Object Model)
// - Supports CSS selectors for finding elements
// - Is built on html5ever, a tolerant parser: invalid HTML never fails
//
// Decoding already happened in the fetcher (by charset, lossy), so the
// only way parsing can fail is a response that isn't markup at all, i.e. one
// whose Content-Type names a non-text media type such as image/png.
//
// scraper's Html is not Send. A ParsedDocument therefore lives inside one
// synchronous extraction step and is dropped before any .await.
// =============================================================================

use log::debug;
use scraper::html::Select;
use scraper::{Html, Selector};

use crate::error::ParseError;

// Rejects responses whose declared media type can't hold markup
//
// A missing header is accepted, as is any text/* type or anything
// mentioning html or xml (application/xhtml+xml, application/xml...).
pub fn ensure_markup(content_type: Option<&str>) -> Result<(), ParseError> {
    let Some(content_type) = content_type else {
        return Ok(());
    };

    let essence = content_type
        .split(';')
        .next()
        .unwrap_or_default()
        .trim()
        .to_ascii_lowercase();

    if essence.is_empty()
        || essence.starts_with("text/")
        || essence.contains("html")
        || essence.contains("xml")
    {
        Ok(())
    } else {
        Err(ParseError::NotMarkup(content_type.to_string()))
    }
}

// Compiles one of our fixed CSS selectors
//
// Every selector this crate uses is a constant known to be valid, so a
// failure here is a programmer error, the same reasoning as unwrap() on a
// constant regex.
pub fn selector(css: &str) -> Selector {
    Selector::parse(css).unwrap_or_else(|e| panic!("invalid built-in selector {css:?}: {e}"))
}

/// Read-only DOM of a fetched page.
pub struct ParsedDocument {
    html: Html,
}

impl ParsedDocument {
    pub fn parse(markup: &str) -> Self {
        let html = Html::parse_document(markup);
        if !html.errors.is_empty() {
            // Tolerated, html5ever has already recovered from them
            debug!("Parsed document with {} markup error(s)", html.errors.len());
        }
        Self { html }
    }

    /// All elements matching `selector`, in document order.
    pub fn select<'a, 'b>(&'a self, selector: &'b Selector) -> Select<'a, 'b> {
        self.html.select(selector)
    }

    /// Serializes the tree back to markup.
    pub fn to_markup(&self) -> String {
        self.html.html()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_markup_media_types_accepted() {
        for content_type in [
            None,
            Some("text/html"),
            Some("text/html; charset=iso-8859-1"),
            Some("TEXT/PLAIN"),
            Some("application/xhtml+xml"),
            Some(""),
        ] {
            assert!(ensure_markup(content_type).is_ok(), "{content_type:?}");
        }
    }

    #[test]
    fn test_binary_media_types_rejected() {
        let err = ensure_markup(Some("image/png")).unwrap_err();
        assert!(matches!(err, ParseError::NotMarkup(ref ct) if ct == "image/png"));
        assert!(ensure_markup(Some("application/octet-stream")).is_err());
    }

    #[test]
    fn test_broken_html_still_parses() {
        let doc = ParsedDocument::parse("<p><b>unclosed<div></p>");
        assert_eq!(doc.select(&selector("b")).count(), 1);
    }

    #[test]
    fn test_attribute_lookup() {
        let doc = ParsedDocument::parse(r#"<a href="/docs" id="x">Docs</a>"#);
        let anchor = doc.select(&selector("a")).next().unwrap();
        assert_eq!(anchor.value().attr("href"), Some("/docs"));
        assert_eq!(anchor.value().attr("rel"), None);
    }

    #[test]
    fn test_to_markup_round_trips_content() {
        let doc = ParsedDocument::parse("<title>Hello</title><p>world</p>");
        let markup = doc.to_markup();
        assert!(markup.contains("<title>Hello</title>"));
        assert!(markup.contains("<p>world</p>"));
    }
}

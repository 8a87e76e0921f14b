// src/document/version.rs
// =============================================================================
// Classifies the markup dialect of a page by doctype signature.
//
// This is a substring heuristic over the raw (unparsed) text. Signatures
// are checked in table order and the first one found wins, so the result
// never depends on hash iteration order.
// =============================================================================

use serde::{Deserialize, Serialize};
use std::fmt;

/// Markup dialect of a document, serialized as its human label.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum HtmlVersion {
    #[serde(rename = "HTML 5")]
    Html5,
    #[serde(rename = "HTML 4.01 Strict")]
    Html401Strict,
    #[serde(rename = "HTML 4.01 Transitional")]
    Html401Transitional,
    #[serde(rename = "HTML 4.01 Frameset")]
    Html401Frameset,
    #[serde(rename = "XHTML 1.0 Strict")]
    Xhtml10Strict,
    #[serde(rename = "XHTML 1.0 Transitional")]
    Xhtml10Transitional,
    #[serde(rename = "XHTML 1.0 Frameset")]
    Xhtml10Frameset,
    #[serde(rename = "XHTML 1.1")]
    Xhtml11,
    #[serde(rename = "UNKNOWN")]
    Unknown,
}

impl HtmlVersion {
    pub fn label(&self) -> &'static str {
        match self {
            HtmlVersion::Html5 => "HTML 5",
            HtmlVersion::Html401Strict => "HTML 4.01 Strict",
            HtmlVersion::Html401Transitional => "HTML 4.01 Transitional",
            HtmlVersion::Html401Frameset => "HTML 4.01 Frameset",
            HtmlVersion::Xhtml10Strict => "XHTML 1.0 Strict",
            HtmlVersion::Xhtml10Transitional => "XHTML 1.0 Transitional",
            HtmlVersion::Xhtml10Frameset => "XHTML 1.0 Frameset",
            HtmlVersion::Xhtml11 => "XHTML 1.1",
            HtmlVersion::Unknown => "UNKNOWN",
        }
    }
}

impl fmt::Display for HtmlVersion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

// `<!DOCTYPE html>` goes first: the closing '>' right after "html" means it
// can't occur inside any of the PUBLIC declarations below.
pub const DOCTYPE_SIGNATURES: &[(HtmlVersion, &str)] = &[
    (HtmlVersion::Html5, "<!DOCTYPE html>"),
    (HtmlVersion::Html401Strict, r#""-//W3C//DTD HTML 4.01//EN""#),
    (HtmlVersion::Html401Transitional, r#""-//W3C//DTD HTML 4.01 Transitional//EN""#),
    (HtmlVersion::Html401Frameset, r#""-//W3C//DTD HTML 4.01 Frameset//EN""#),
    (HtmlVersion::Xhtml10Strict, r#""-//W3C//DTD XHTML 1.0 Strict//EN""#),
    (HtmlVersion::Xhtml10Transitional, r#""-//W3C//DTD XHTML 1.0 Transitional//EN""#),
    (HtmlVersion::Xhtml10Frameset, r#""-//W3C//DTD XHTML 1.0 Frameset//EN""#),
    (HtmlVersion::Xhtml11, r#""-//W3C//DTD XHTML 1.1//EN""#),
];

#[derive(Debug, Clone, Copy)]
pub struct VersionDetector<'a> {
    signatures: &'a [(HtmlVersion, &'a str)],
}

impl Default for VersionDetector<'static> {
    fn default() -> Self {
        Self::new(DOCTYPE_SIGNATURES)
    }
}

impl<'a> VersionDetector<'a> {
    pub fn new(signatures: &'a [(HtmlVersion, &'a str)]) -> Self {
        Self { signatures }
    }

    // Total: always returns a version, Unknown when nothing matches
    pub fn detect(&self, markup: &str) -> HtmlVersion {
        self.signatures
            .iter()
            .find(|(_, signature)| markup.contains(*signature))
            .map(|(version, _)| *version)
            .unwrap_or(HtmlVersion::Unknown)
    }
}

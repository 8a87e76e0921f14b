// src/analyzer/result.rs
// The immutable outcome of one analysis. Fields are private and only
// readable through getters; the Analyzer is the only producer, so the
// type is Serialize-only (no way to build one from outside input).

use serde::Serialize;

use crate::document::{HeadingCounts, HtmlVersion};

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AnalysisResult {
    url: String,
    html_version: HtmlVersion,
    page_title: String,
    heading_counts: HeadingCounts,
    link_count: usize,
    inaccessible_link_count: usize,
    has_login_form: bool,
}

impl AnalysisResult {
    pub(crate) fn new(
        url: String,
        html_version: HtmlVersion,
        page_title: String,
        heading_counts: HeadingCounts,
        link_count: usize,
        inaccessible_link_count: usize,
        has_login_form: bool,
    ) -> Self {
        debug_assert!(inaccessible_link_count <= link_count);
        Self {
            url,
            html_version,
            page_title,
            heading_counts,
            link_count,
            inaccessible_link_count,
            has_login_form,
        }
    }

    pub fn url(&self) -> &str {
        &self.url
    }

    pub fn html_version(&self) -> HtmlVersion {
        self.html_version
    }

    pub fn page_title(&self) -> &str {
        &self.page_title
    }

    pub fn heading_counts(&self) -> HeadingCounts {
        self.heading_counts
    }

    /// Total anchors under body, reachable or not.
    pub fn link_count(&self) -> usize {
        self.link_count
    }

    /// Links observed failing within the collection window. Lower-bound
    /// estimate: probes that hadn't answered in time aren't counted.
    pub fn inaccessible_link_count(&self) -> usize {
        self.inaccessible_link_count
    }

    pub fn has_login_form(&self) -> bool {
        self.has_login_form
    }

    pub fn has_inaccessible_links(&self) -> bool {
        self.inaccessible_link_count > 0
    }
}

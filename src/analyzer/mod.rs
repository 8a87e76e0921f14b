// src/analyzer/mod.rs
// =============================================================================
// This module runs the whole pipeline for one URL.
//
// What happens here:
// 1. Fetch the page (one time-bounded GET, must be HTTP 200), decoding
//    the body by its declared charset
// 2. Check it is markup and parse it into a DOM
// 3. Detect version on the raw text; read title, headings, links and
//    login vocabulary from the DOM
// 4. Probe the extracted links within the collection window, optionally
//    resolving relative ones against the final (post-redirect) URL
// 5. Assemble the AnalysisResult
//
// A fetch or parse failure ends the analysis with no partial result.
// =============================================================================

mod result;

pub use result::AnalysisResult;

use log::{debug, info};
use reqwest::Client;

use crate::checker::{self, AccessibilityChecker};
use crate::config::AnalyzerConfig;
use crate::document::{
    self, HeadingCounts, HtmlVersion, LoginFormDetector, ParsedDocument, VersionDetector,
};
use crate::error::AnalyzeError;
use crate::fetch::PageFetcher;

// Everything read from the document before probing starts
struct Extraction {
    html_version: HtmlVersion,
    page_title: String,
    heading_counts: HeadingCounts,
    links: Vec<String>,
    has_login_form: bool,
}

pub struct Analyzer {
    fetcher: PageFetcher,
    checker: AccessibilityChecker,
    versions: VersionDetector<'static>,
    login_form: LoginFormDetector<'static>,
    resolve_relative_links: bool,
}

impl Analyzer {
    pub fn new(config: AnalyzerConfig) -> Result<Self, AnalyzeError> {
        // One client (one connection pool) for the fetch and every probe
        let client = Client::builder()
            .user_agent(config.user_agent.as_str())
            .build()
            .map_err(AnalyzeError::Client)?;

        Ok(Self {
            fetcher: PageFetcher::new(client.clone(), config.fetch_timeout),
            checker: AccessibilityChecker::new(client, &config),
            versions: VersionDetector::default(),
            login_form: LoginFormDetector::default(),
            resolve_relative_links: config.resolve_relative_links,
        })
    }

    pub async fn analyze(&self, url: &str) -> Result<AnalysisResult, AnalyzeError> {
        info!("Analyzing {}", url);

        let page = self.fetcher.fetch(url).await?;
        document::ensure_markup(page.content_type.as_deref())?;
        let extraction = self.extract(&page.body);

        let probe_targets = if self.resolve_relative_links {
            checker::resolve_links(&page.url, &extraction.links)
        } else {
            extraction.links.clone()
        };
        let inaccessible = self.checker.count_inaccessible(&probe_targets).await;

        let result = AnalysisResult::new(
            url.to_string(),
            extraction.html_version,
            extraction.page_title,
            extraction.heading_counts,
            extraction.links.len(),
            inaccessible,
            extraction.has_login_form,
        );
        info!(
            "Analyzed {}: {} link(s), {} inaccessible",
            url,
            result.link_count(),
            result.inaccessible_link_count()
        );
        Ok(result)
    }

    // Synchronous on purpose: the DOM isn't Send, so it must be gone
    // before the next .await
    fn extract(&self, markup: &str) -> Extraction {
        let html_version = self.versions.detect(markup);
        let document = ParsedDocument::parse(markup);

        let extraction = Extraction {
            html_version,
            page_title: document::page_title(&document),
            heading_counts: document::heading_counts(&document),
            links: checker::extract_body_links(&document),
            has_login_form: self.login_form.detect(&document),
        };
        debug!(
            "Extracted version={} title={:?} headings=[{}]",
            extraction.html_version, extraction.page_title, extraction.heading_counts
        );
        extraction
    }
}

// src/document/mod.rs
// =============================================================================
// This module turns fetched bytes into a queryable document and reads the
// page-level facts out of it.
//
// Submodules:
// - parse: checks the body is markup and builds the scraper DOM
// - version: classifies the doctype by signature matching
// - metadata: title text and heading counts
// - login: login vocabulary heuristic
//
// Version and login detection are substring heuristics, not parsers. They
// sit behind their own detector types so a stricter implementation can
// replace either one without touching the rest of the pipeline.
// =============================================================================

mod login;
mod metadata;
mod parse;
mod version;

pub use login::{LoginFormDetector, LOGIN_VOCABULARY};
pub use metadata::{heading_counts, page_title, HeadingCounts};
pub use parse::{ensure_markup, selector, ParsedDocument};
pub use version::{HtmlVersion, VersionDetector, DOCTYPE_SIGNATURES};

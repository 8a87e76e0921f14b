// src/checker/mod.rs
// =============================================================================
// This module contains all link logic.
//
// Submodules:
// - html: Extracts links from the parsed page
// - http: Probes those links and counts the unreachable ones
//
// This file (mod.rs) is the module root - it ties everything together and
// exports the public API that other parts of our application can use.
// =============================================================================

mod html;
mod http;

// Re-export public items from submodules
// This lets users write `checker::extract_body_links()` instead of
// `checker::html::extract_body_links()`
pub use html::{extract_body_links, resolve_links};
pub use http::{AccessibilityChecker, CheckReport};

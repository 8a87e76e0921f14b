// src/lib.rs
// =============================================================================
// page-analyzer: fetch one web page and describe it.
//
// The single entry point is `Analyzer::analyze(url)`, which yields an
// `AnalysisResult` (HTML version, title, heading counts, link counts and
// login form presence) or a typed `AnalyzeError`. The binary in main.rs is
// a thin CLI around it.
// =============================================================================

pub mod analyzer; // src/analyzer/ - pipeline orchestration and the result type
pub mod checker; // src/checker/ - link extraction and probing
pub mod config; // src/config.rs - analyzer tunables
pub mod document; // src/document/ - parsing and page-level detectors
pub mod error; // src/error.rs - typed failures
pub mod fetch; // src/fetch/ - page retrieval

pub use analyzer::{AnalysisResult, Analyzer};
pub use config::AnalyzerConfig;
pub use error::{AnalyzeError, ErrorKind, FetchError, ParseError};

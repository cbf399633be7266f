//! Output formatting for lint results.

mod json;
mod text;

pub use json::format_json;
pub use text::{format_summary, format_text};

use crate::linter::LintResult;

/// Output format selection
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    /// Rich terminal output with code snippets
    Text,
    /// Machine-readable JSON
    Json,
}

/// Format lint results in the requested format.
///
/// `sources` pairs filenames with their source text for snippet rendering.
pub fn format_results(
    results: &[LintResult],
    sources: &[(String, String)],
    format: OutputFormat,
) -> String {
    match format {
        OutputFormat::Text => format_text(results, sources),
        OutputFormat::Json => format_json(results),
    }
}

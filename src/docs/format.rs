//! Format search results into LLM-readable text.

use crate::client::{SearchResponse, SearchResult};

/// Separator printed after every result.
pub const RESULT_DELIMITER: &str = "----------";

const HEADER: [&str; 7] = [
    "Available Libraries (top matches):\n",
    "Each result includes:",
    "- Library ID: Context7-compatible identifier (format: /org/repo)",
    "- Name: Library or package name",
    "- Description: Short summary",
    "- Code Snippets: Number of available code examples",
    "- Trust Score: Authority indicator\n",
];

/// Format every result, in order, under the legend header.
///
/// No truncation happens here; the caller sees the full result set.
pub fn format_search_results(response: &SearchResponse) -> String {
    let mut lines: Vec<String> = HEADER.iter().map(|s| s.to_string()).collect();

    for result in &response.results {
        lines.push(format_result(result));
        lines.push(RESULT_DELIMITER.to_string());
    }

    lines.join("\n")
}

fn format_result(result: &SearchResult) -> String {
    let mut lines = vec![
        format!("- Title: {}", result.title),
        format!("- Context7-compatible library ID: {}", result.id),
        format!("- Description: {}", result.description),
    ];

    if let Some(snippets) = result.total_snippets.filter(|n| *n >= 0) {
        lines.push(format!("- Code Snippets: {snippets}"));
    }

    if let Some(score) = result.trust_score.filter(|s| s.is_non_negative()) {
        lines.push(format!("- Trust Score: {score}"));
    }

    lines.join("\n")
}

//! Rendering search results into the tagged block consumed downstream.
//!
//! The shape is fixed: an outer `<search_results>` wrapper around one
//! `<item>` block per result, indexed from 1. Field values are embedded
//! verbatim — no escaping — so callers that parse the block back out must
//! ensure names and categories carry no conflicting markup.

use std::fmt::Write as _;

use crate::finder::SearchResult;

/// Render the results as `<item>` blocks without the outer wrapper.
pub fn format_results(results: &[SearchResult]) -> String {
    let mut out = String::new();
    for (i, r) in results.iter().enumerate() {
        if i > 0 {
            out.push('\n');
        }
        // Infallible for String targets.
        let _ = write!(
            out,
            "<item index=\"{index}\">\n\
             <source>{source}</source>\n\
             <restaurant_name>\n{name}\n</restaurant_name>\n\
             <category>\n{category}\n</category>\n\
             </item>",
            index = i + 1,
            source = r.source,
            name = r.name,
            category = r.category,
        );
    }
    out
}

/// Render the results as a complete `<search_results>` block.
pub fn format_results_full(results: &[SearchResult]) -> String {
    format!("\n<search_results>\n{}\n</search_results>", format_results(results))
}

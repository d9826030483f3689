//! JSON output for snippets, for scripting and piping.

use crate::store::Snippet;

pub fn render(snippets: &[Snippet]) -> String {
    serde_json::to_string_pretty(snippets).unwrap_or_else(|_| String::from("[]"))
}

pub fn render_one(snippet: &Snippet) -> String {
    serde_json::to_string_pretty(snippet).unwrap_or_else(|_| String::from("{}"))
}

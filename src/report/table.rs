//! Terminal rendering for snippets.
//!
//! Two views:
//! - a table of id/language/title/category for list and find output
//! - a detail view for a single snippet, including the code body

use crate::store::Snippet;

pub fn render(snippets: &[Snippet]) -> String {
    if snippets.is_empty() {
        return String::from("No snippets found.\n");
    }

    let mut output = String::new();

    output.push_str(&format!(
        "{:<6} {:<14} {:<32} {:<20}\n",
        "ID", "Language", "Title", "Category"
    ));
    output.push_str(&"-".repeat(74));
    output.push('\n');

    for snippet in snippets {
        output.push_str(&format!(
            "{:<6} {:<14} {:<32} {:<20}\n",
            snippet.id,
            truncate(&snippet.language, 14),
            truncate(&snippet.title, 32),
            truncate(&snippet.category, 20)
        ));
    }

    output
}

pub fn detail(snippet: &Snippet) -> String {
    let mut output = String::new();

    output.push_str(&format!("#{} {}\n", snippet.id, snippet.title));
    output.push_str(&format!("language: {}\n", snippet.language));
    output.push_str(&format!("category: {}\n", snippet.category));
    if !snippet.additional_info.is_empty() {
        output.push_str(&format!("info: {}\n", snippet.additional_info));
    }
    output.push('\n');
    output.push_str(&snippet.code);
    if !snippet.code.ends_with('\n') {
        output.push('\n');
    }

    output
}

fn truncate(s: &str, max_len: usize) -> String {
    if s.chars().count() <= max_len {
        s.to_string()
    } else {
        let truncated: String = s.chars().take(max_len - 3).collect();
        format!("{truncated}...")
    }
}

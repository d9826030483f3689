use serde::{Deserialize, Serialize};

/// One stored snippet record, exactly as it sits in the database.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Snippet {
    pub id: i64,
    pub language: String,
    pub title: String,
    pub code: String,
    pub category: String,
    pub additional_info: String,
}

/// Caller-supplied fields for a new snippet. The id is assigned by the store.
#[derive(Debug, Clone)]
pub struct NewSnippet {
    pub language: String,
    pub title: String,
    pub code: String,
    pub category: String,
    pub additional_info: String,
}

/// Partial update for an existing snippet.
///
/// `None` means "leave unchanged". So does `Some("")`: an empty value never
/// overwrites a stored field, which means this interface cannot clear a
/// field to empty. That limitation is deliberate, matching the duplicate
/// and filter semantics callers already rely on.
#[derive(Debug, Clone, Default)]
pub struct SnippetPatch {
    pub language: Option<String>,
    pub title: Option<String>,
    pub code: Option<String>,
    pub category: Option<String>,
    pub additional_info: Option<String>,
}

/// Result of a create attempt.
///
/// A duplicate (language, title, category) triple is a normal outcome,
/// not an error: the store leaves the existing record alone.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CreateOutcome {
    Created,
    Duplicate,
}

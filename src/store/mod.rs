//! SQLite snippet storage.
//!
//! One table, `snippets`: id, language, title, code, category,
//! additional_info. The store owns a single connection for its whole
//! lifetime and every operation is one synchronous statement with an
//! immediate commit.
//!
//! Not safe for concurrent callers: the connection has no internal
//! locking. One logical caller at a time.

pub mod snippet;

use std::path::Path;

use rusqlite::{params, Connection, OptionalExtension, Row, ToSql};

use crate::error::StoreError;
pub use snippet::{CreateOutcome, NewSnippet, Snippet, SnippetPatch};

const SNIPPET_COLUMNS: &str = "id, language, title, code, category, additional_info";

pub struct SnippetStore {
    conn: Connection,
}

impl SnippetStore {
    /// Open (creating if absent) the database file and ensure the schema
    /// exists. Idempotent, safe to call on every startup.
    pub fn open(path: &Path) -> Result<Self, StoreError> {
        let conn = Connection::open(path).map_err(|source| StoreError::Open {
            path: path.to_path_buf(),
            source,
        })?;
        let store = SnippetStore { conn };
        store.init_schema()?;
        Ok(store)
    }

    fn init_schema(&self) -> Result<(), StoreError> {
        // AUTOINCREMENT so ids are never reused after a delete
        self.conn.execute(
            "CREATE TABLE IF NOT EXISTS snippets (
                id INTEGER PRIMARY KEY AUTOINCREMENT,
                language TEXT,
                title TEXT,
                code TEXT,
                category TEXT,
                additional_info TEXT
            )",
            [],
        )?;
        Ok(())
    }

    /// Insert a new snippet unless one with the same (language, title,
    /// category) triple already exists. The duplicate check is exact-match
    /// and application-level; a duplicate is a no-op outcome, not an error.
    pub fn create(&self, snippet: &NewSnippet) -> Result<CreateOutcome, StoreError> {
        if self.exists(&snippet.language, &snippet.title, &snippet.category)? {
            return Ok(CreateOutcome::Duplicate);
        }

        self.conn.execute(
            "INSERT INTO snippets (language, title, code, category, additional_info)
             VALUES (?1, ?2, ?3, ?4, ?5)",
            params![
                snippet.language,
                snippet.title,
                snippet.code,
                snippet.category,
                snippet.additional_info
            ],
        )?;
        Ok(CreateOutcome::Created)
    }

    /// Fetch a snippet by id. `None` for a missing id, never an error.
    pub fn read(&self, id: i64) -> Result<Option<Snippet>, StoreError> {
        let snippet = self
            .conn
            .query_row(
                &format!("SELECT {SNIPPET_COLUMNS} FROM snippets WHERE id = ?1"),
                params![id],
                row_to_snippet,
            )
            .optional()?;
        Ok(snippet)
    }

    /// Apply a partial update to the snippet with the given id.
    ///
    /// Returns `false` (no mutation) if the id is absent. Only patch fields
    /// that are present and non-empty overwrite stored values; a patch with
    /// nothing to apply still counts as success when the record exists.
    /// No duplicate re-check: an update may freely produce a triple that
    /// collides with another record.
    pub fn update(&self, id: i64, patch: &SnippetPatch) -> Result<bool, StoreError> {
        if self.read(id)?.is_none() {
            return Ok(false);
        }

        let fields: [(&str, &Option<String>); 5] = [
            ("language", &patch.language),
            ("title", &patch.title),
            ("code", &patch.code),
            ("category", &patch.category),
            ("additional_info", &patch.additional_info),
        ];

        let mut assignments: Vec<String> = Vec::new();
        let mut values: Vec<&dyn ToSql> = Vec::new();
        for (column, value) in fields {
            if let Some(value) = value {
                if !value.is_empty() {
                    assignments.push(format!("{column} = ?{}", values.len() + 1));
                    values.push(value);
                }
            }
        }

        if assignments.is_empty() {
            return Ok(true);
        }

        values.push(&id);
        let sql = format!(
            "UPDATE snippets SET {} WHERE id = ?{}",
            assignments.join(", "),
            values.len()
        );
        self.conn.execute(&sql, rusqlite::params_from_iter(values))?;
        Ok(true)
    }

    /// Delete by id. Returns whether a row was actually removed.
    pub fn delete(&self, id: i64) -> Result<bool, StoreError> {
        let removed = self
            .conn
            .execute("DELETE FROM snippets WHERE id = ?1", params![id])?;
        Ok(removed > 0)
    }

    /// All snippets in storage order.
    pub fn list(&self) -> Result<Vec<Snippet>, StoreError> {
        self.query_snippets(&format!("SELECT {SNIPPET_COLUMNS} FROM snippets"), [])
    }

    /// Whether any record matches the (language, title, category) triple
    /// exactly. Used by `create` and available to callers that want to
    /// pre-check before prompting for the rest of a snippet.
    pub fn exists(&self, language: &str, title: &str, category: &str) -> Result<bool, StoreError> {
        let count: i64 = self.conn.query_row(
            "SELECT COUNT(*) FROM snippets
             WHERE language = ?1 AND title = ?2 AND category = ?3",
            params![language, title, category],
            |row| row.get(0),
        )?;
        Ok(count > 0)
    }

    /// Distinct non-null languages across all snippets, order unspecified.
    pub fn languages(&self) -> Result<Vec<String>, StoreError> {
        self.distinct_values("language")
    }

    /// Distinct non-null categories across all snippets, order unspecified.
    pub fn categories(&self) -> Result<Vec<String>, StoreError> {
        self.distinct_values("category")
    }

    pub fn find_by_language(&self, language: &str) -> Result<Vec<Snippet>, StoreError> {
        self.query_snippets(
            &format!("SELECT {SNIPPET_COLUMNS} FROM snippets WHERE language = ?1"),
            params![language],
        )
    }

    pub fn find_by_category(&self, category: &str) -> Result<Vec<Snippet>, StoreError> {
        self.query_snippets(
            &format!("SELECT {SNIPPET_COLUMNS} FROM snippets WHERE category = ?1"),
            params![category],
        )
    }

    pub fn find_by_language_and_category(
        &self,
        language: &str,
        category: &str,
    ) -> Result<Vec<Snippet>, StoreError> {
        self.query_snippets(
            &format!("SELECT {SNIPPET_COLUMNS} FROM snippets WHERE language = ?1 AND category = ?2"),
            params![language, category],
        )
    }

    pub fn find_by_title(&self, title: &str) -> Result<Vec<Snippet>, StoreError> {
        self.query_snippets(
            &format!("SELECT {SNIPPET_COLUMNS} FROM snippets WHERE title = ?1"),
            params![title],
        )
    }

    fn query_snippets(
        &self,
        sql: &str,
        params: impl rusqlite::Params,
    ) -> Result<Vec<Snippet>, StoreError> {
        let mut stmt = self.conn.prepare(sql)?;
        let snippets = stmt
            .query_map(params, row_to_snippet)?
            .collect::<Result<Vec<_>, _>>()?;
        Ok(snippets)
    }

    fn distinct_values(&self, column: &str) -> Result<Vec<String>, StoreError> {
        let mut stmt = self.conn.prepare(&format!(
            "SELECT DISTINCT {column} FROM snippets WHERE {column} IS NOT NULL"
        ))?;
        let values = stmt
            .query_map([], |row| row.get(0))?
            .collect::<Result<Vec<String>, _>>()?;
        Ok(values)
    }
}

fn row_to_snippet(row: &Row<'_>) -> rusqlite::Result<Snippet> {
    Ok(Snippet {
        id: row.get(0)?,
        language: row.get(1)?,
        title: row.get(2)?,
        code: row.get(3)?,
        category: row.get(4)?,
        additional_info: row.get(5)?,
    })
}

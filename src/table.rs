//! A parse session: raw text, its resolved dialect, and the cached rows.

use crate::dialect::Dialect;
use crate::tokenize::{tokenize, Row};
use std::sync::OnceLock;

/// Raw delimited text together with the dialect it is read under.
///
/// Rows are tokenized on the first call to [`Table::rows`] and reused for
/// the lifetime of the table. The cache is a [`OnceLock`], so a `Table` can be
/// shared between threads and still tokenizes at most once.
#[derive(Debug)]
pub struct Table {
    text: String,
    dialect: Dialect,
    rows: OnceLock<Vec<Row>>,
}

impl Table {
    /// Create a session over `text` with an already resolved dialect.
    pub fn new(text: impl Into<String>, dialect: Dialect) -> Self {
        Self {
            text: text.into(),
            dialect,
            rows: OnceLock::new(),
        }
    }

    /// The resolved dialect (overrides merged with detected markers).
    #[inline]
    pub fn dialect(&self) -> &Dialect {
        &self.dialect
    }

    /// The raw text this table was built from.
    #[inline]
    pub fn text(&self) -> &str {
        &self.text
    }

    /// All rows, tokenized on first access.
    pub fn rows(&self) -> &[Row] {
        self.rows.get_or_init(|| {
            let rows = tokenize(&self.text, &self.dialect);
            tracing::trace!(rows = rows.len(), dialect = %self.dialect, "tokenized table");
            rows
        })
    }

    /// Returns the number of rows (one per line, so never zero).
    #[inline]
    pub fn num_rows(&self) -> usize {
        self.rows().len()
    }

    /// Returns the largest field count over all rows.
    pub fn max_field_count(&self) -> usize {
        self.rows().iter().map(Vec::len).max().unwrap_or(0)
    }

    /// Consume the table and return its rows.
    pub fn into_rows(self) -> Vec<Row> {
        let Self {
            text,
            dialect,
            mut rows,
        } = self;
        rows.take().unwrap_or_else(|| tokenize(&text, &dialect))
    }
}

impl Clone for Table {
    fn clone(&self) -> Self {
        let rows = OnceLock::new();
        if let Some(cached) = self.rows.get() {
            let _ = rows.set(cached.clone());
        }
        Self {
            text: self.text.clone(),
            dialect: self.dialect,
            rows,
        }
    }
}

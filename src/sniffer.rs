//! Main Sniffer builder and sniff methods.

use std::fs;
use std::path::Path;

use crate::detect::detect;
use crate::dialect::{Dialect, Overrides};
use crate::encoding::decode_text;
use crate::error::Result;
use crate::table::Table;

/// Dialect guesser with optional caller-supplied markers.
///
/// Any marker set on the builder is used as-is; the rest are detected from
/// the text, delimiter first, then enclosure, then escape.
///
/// # Example
///
/// ```no_run
/// use csv_sift::Sniffer;
///
/// let mut sniffer = Sniffer::new();
/// sniffer.delimiter(';');
///
/// let table = sniffer.open("a;'b;c'\n1;2");
/// println!("{}", table.dialect());
/// for row in table.rows() {
///     println!("{row:?}");
/// }
/// ```
#[derive(Debug, Clone, Default)]
pub struct Sniffer {
    overrides: Overrides,
}

impl Sniffer {
    /// Create a new Sniffer that detects every marker.
    pub fn new() -> Self {
        Self::default()
    }

    /// Force a specific delimiter (skip delimiter detection).
    pub fn delimiter(&mut self, delimiter: char) -> &mut Self {
        self.overrides.delimiter = Some(Some(delimiter));
        self
    }

    /// Force the enclosure character, or `None` to disable enclosed spans.
    pub fn enclosure(&mut self, enclosure: Option<char>) -> &mut Self {
        self.overrides.enclosure = Some(enclosure);
        self
    }

    /// Force the escape character, or `None` to disable escaping.
    pub fn escape(&mut self, escape: Option<char>) -> &mut Self {
        self.overrides.escape = Some(escape);
        self
    }

    /// Replace all overrides at once.
    pub fn overrides(&mut self, overrides: Overrides) -> &mut Self {
        self.overrides = overrides;
        self
    }

    /// Resolve the dialect of `text`.
    pub fn sniff(&self, text: &str) -> Dialect {
        detect(text, &self.overrides)
    }

    /// Resolve the dialect of `text` and start a parse session over it.
    pub fn open(&self, text: impl Into<String>) -> Table {
        let text = text.into();
        let dialect = self.sniff(&text);
        tracing::debug!(%dialect, bytes = text.len(), "opened table");
        Table::new(text, dialect)
    }

    /// Decode raw bytes, then start a parse session over the text.
    pub fn open_bytes(&self, data: &[u8]) -> Table {
        let (text, info) = decode_text(data);
        tracing::debug!(encoding = info.encoding, transcoded = info.transcoded, "decoded input");
        self.open(text.into_owned())
    }

    /// Read and decode a file, then start a parse session over it.
    pub fn open_path<P: AsRef<Path>>(&self, path: P) -> Result<Table> {
        let data = fs::read(path.as_ref())?;
        Ok(self.open_bytes(&data))
    }

    /// Read and decode a file and resolve its dialect.
    pub fn sniff_path<P: AsRef<Path>>(&self, path: P) -> Result<Dialect> {
        let data = fs::read(path.as_ref())?;
        let (text, _) = decode_text(&data);
        Ok(self.sniff(&text))
    }
}

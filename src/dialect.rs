use serde::Serialize;
use std::fmt;

/// Delimiters considered during detection, in tie-break order.
pub const DELIMITERS: &[char] = &['\t', ',', ';', ':', '|'];

/// Enclosure (field quote) characters considered during detection.
pub const ENCLOSURES: &[char] = &['\'', '"'];

/// Escape characters considered during detection.
pub const ESCAPES: &[char] = &['\\', '"'];

/// The delimiter, enclosure and escape characters of a delimited text.
///
/// A `None` marker means "not detected" or "not applicable". It is never an
/// error: a dialect without a delimiter tokenizes every line as one field,
/// and one without an enclosure never opens quoted spans.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize)]
pub struct Dialect {
    /// Field delimiter character.
    pub delimiter: Option<char>,
    /// Field enclosure (quote) character.
    pub enclosure: Option<char>,
    /// Escape character for an enclosure inside an enclosed span.
    pub escape: Option<char>,
}

impl Dialect {
    /// Create a new Dialect with the given markers.
    pub const fn new(delimiter: Option<char>, enclosure: Option<char>, escape: Option<char>) -> Self {
        Self {
            delimiter,
            enclosure,
            escape,
        }
    }

    /// Returns true if no marker was resolved at all.
    pub const fn is_empty(&self) -> bool {
        self.delimiter.is_none() && self.enclosure.is_none() && self.escape.is_none()
    }
}

impl fmt::Display for Dialect {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "delimiter={} enclosure={} escape={}",
            Marker(self.delimiter),
            Marker(self.enclosure),
            Marker(self.escape)
        )
    }
}

/// Display adapter for an optional marker character.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Marker(pub Option<char>);

impl fmt::Display for Marker {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.0 {
            None => write!(f, "none"),
            Some(c) => write!(f, "{c:?}"),
        }
    }
}

/// A partial dialect supplied by the caller.
///
/// Each `Some` field is used as-is; each `None` field is detected. A
/// supplied `Some(None)` pins the marker to "absent" and skips detection.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Overrides {
    /// Forced delimiter.
    pub delimiter: Option<Option<char>>,
    /// Forced enclosure.
    pub enclosure: Option<Option<char>>,
    /// Forced escape.
    pub escape: Option<Option<char>>,
}

impl Overrides {
    /// Overrides that leave every marker to detection.
    pub const fn none() -> Self {
        Self {
            delimiter: None,
            enclosure: None,
            escape: None,
        }
    }

    /// Pin every marker to the given dialect, disabling detection.
    pub const fn all(dialect: Dialect) -> Self {
        Self {
            delimiter: Some(dialect.delimiter),
            enclosure: Some(dialect.enclosure),
            escape: Some(dialect.escape),
        }
    }
}

//! Heuristic detection of delimiter, enclosure and escape characters.
//!
//! Every detector is a single linear pass over the text and never fails.
//! A wrong guess is a quality problem the caller fixes with an override.

use crate::dialect::{Dialect, Overrides, DELIMITERS, ENCLOSURES, ESCAPES};

/// Occurrence counts of each candidate delimiter, plus the newline count.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DelimiterCounts {
    /// Count per entry of [`DELIMITERS`], in the same order.
    pub counts: [usize; DELIMITERS.len()],
    /// Number of `\n` characters.
    pub newlines: usize,
}

impl DelimiterCounts {
    /// Count all candidates in the text.
    pub fn new(text: &str) -> Self {
        let data = text.as_bytes();
        let mut counts = [0; DELIMITERS.len()];
        for (count, &delimiter) in counts.iter_mut().zip(DELIMITERS) {
            // Candidates are ASCII, so byte counting is exact on UTF-8.
            *count = bytecount::count(data, delimiter as u8);
        }
        Self {
            counts,
            newlines: bytecount::count(data, b'\n'),
        }
    }

    /// The candidate with the highest count; the earliest one wins ties.
    pub fn winner(&self) -> (char, usize) {
        let mut best = (DELIMITERS[0], self.counts[0]);
        for (&delimiter, &count) in DELIMITERS.iter().zip(&self.counts).skip(1) {
            if count > best.1 {
                best = (delimiter, count);
            }
        }
        best
    }

    /// The winner, if it occurs at least once and at least once per line break.
    pub fn accepted(&self) -> Option<char> {
        let (delimiter, count) = self.winner();
        (count > 0 && count >= self.newlines).then_some(delimiter)
    }
}

/// Detect the field delimiter.
///
/// Returns `None` when no candidate occurs, or when the best candidate occurs
/// less often than there are newlines.
pub fn detect_delimiter(text: &str) -> Option<char> {
    let counts = DelimiterCounts::new(text);
    let delimiter = counts.accepted();
    tracing::debug!(
        counts = ?counts.counts,
        newlines = counts.newlines,
        ?delimiter,
        "delimiter detection"
    );
    delimiter
}

/// Detect the enclosure: the first quote character directly followed by the
/// delimiter.
///
/// Without a delimiter the adjacency requirement is empty and the first quote
/// character anywhere in the text is returned.
pub fn detect_enclosure(text: &str, delimiter: Option<char>) -> Option<char> {
    let enclosure = first_followed_by(text, ENCLOSURES, delimiter);
    tracing::debug!(?delimiter, ?enclosure, "enclosure detection");
    enclosure
}

/// Detect the escape: the first escape candidate directly followed by the
/// enclosure. Always `None` without an enclosure.
pub fn detect_escape(text: &str, enclosure: Option<char>) -> Option<char> {
    let escape = enclosure.and_then(|enclosure| first_followed_by(text, ESCAPES, Some(enclosure)));
    tracing::debug!(?enclosure, ?escape, "escape detection");
    escape
}

/// Resolve a full dialect, detecting whatever the overrides leave open.
///
/// Markers are resolved in delimiter, enclosure, escape order; each detector
/// sees the already resolved (possibly overridden) marker before it.
pub fn detect(text: &str, overrides: &Overrides) -> Dialect {
    let delimiter = overrides
        .delimiter
        .unwrap_or_else(|| detect_delimiter(text));
    let enclosure = overrides
        .enclosure
        .unwrap_or_else(|| detect_enclosure(text, delimiter));
    let escape = overrides
        .escape
        .unwrap_or_else(|| detect_escape(text, enclosure));

    Dialect::new(delimiter, enclosure, escape)
}

/// Find the leftmost position where a candidate is directly followed by
/// `follower`, and return that candidate.
fn first_followed_by(text: &str, candidates: &[char], follower: Option<char>) -> Option<char> {
    let Some(follower) = follower else {
        return text.chars().find(|c| candidates.contains(c));
    };

    let mut prev = None;
    for c in text.chars() {
        if c == follower
            && let Some(p) = prev
            && candidates.contains(&p)
        {
            return Some(p);
        }
        prev = Some(c);
    }
    None
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_no_candidates() {
        assert_eq!(detect_delimiter("hello world\nfoo bar"), None);
        assert_eq!(detect_delimiter(""), None);
    }

    #[test]
    fn test_fewer_delimiters_than_newlines() {
        // One comma, three newlines.
        assert_eq!(detect_delimiter("a,b\nc\nd\ne"), None);
    }

    #[test]
    fn test_delimiter_equal_to_newlines() {
        assert_eq!(detect_delimiter("name\tage\njohn\t30\njane\t25"), Some('\t'));
    }

    #[test]
    fn test_tie_breaks_by_order() {
        assert_eq!(detect_delimiter("a,b;c,d;e"), Some(','));
        assert_eq!(detect_delimiter("a|b:c"), Some(':'));
        assert_eq!(detect_delimiter("a\tb,c"), Some('\t'));
    }

    #[test]
    fn test_counts() {
        let counts = DelimiterCounts::new("a;b;c\n1;2;3|x\n");
        assert_eq!(counts.counts, [0, 0, 4, 0, 1]);
        assert_eq!(counts.newlines, 2);
        assert_eq!(counts.winner(), (';', 4));
        assert_eq!(counts.accepted(), Some(';'));
    }

    #[test]
    fn test_enclosure_before_delimiter() {
        assert_eq!(detect_enclosure(r#"a,"b",c"#, Some(',')), Some('"'));
        assert_eq!(detect_enclosure("'a';'b'", Some(';')), Some('\''));
    }

    #[test]
    fn test_enclosure_leftmost_wins() {
        assert_eq!(detect_enclosure(r#"it's,"x","y""#, Some(',')), Some('"'));
        assert_eq!(detect_enclosure(r#"'a',"b","#, Some(',')), Some('\''));
    }

    #[test]
    fn test_enclosure_needs_adjacency() {
        assert_eq!(detect_enclosure(r#""a" ,b"#, Some(',')), None);
        assert_eq!(detect_enclosure("a,b", Some(',')), None);
    }

    #[test]
    fn test_enclosure_without_delimiter() {
        assert_eq!(detect_enclosure(r#"he said "hi""#, None), Some('"'));
        assert_eq!(detect_enclosure("plain", None), None);
    }

    #[test]
    fn test_escape_detection() {
        assert_eq!(detect_escape(r#""a \"b\"",c"#, Some('"')), Some('\\'));
        assert_eq!(detect_escape(r#""a ""b""",c"#, Some('"')), Some('"'));
        assert_eq!(detect_escape(r#""a","b""#, Some('"')), None);
        assert_eq!(detect_escape(r#"\"x"#, None), None);
    }

    #[test]
    fn test_detect_empty_text() {
        assert!(detect("", &Overrides::none()).is_empty());
    }

    #[test]
    fn test_detect_full() {
        let text = "\"id\",\"name\"\n\"1\",\"a \\\"b\\\"\"";
        let dialect = detect(text, &Overrides::none());
        assert_eq!(dialect, Dialect::new(Some(','), Some('"'), Some('\\')));
    }

    #[test]
    fn test_delimiter_override_drives_enclosure() {
        // Comma wins on its own, but the caller forces a semicolon. The quote
        // sits before the semicolon, never before a comma.
        let text = "a,b,c,'x';y";
        assert_eq!(detect_delimiter(text), Some(','));

        let overrides = Overrides {
            delimiter: Some(Some(';')),
            ..Overrides::none()
        };
        let dialect = detect(text, &overrides);
        assert_eq!(dialect.delimiter, Some(';'));
        assert_eq!(dialect.enclosure, Some('\''));
        assert_eq!(dialect.escape, None);
    }

    #[test]
    fn test_overridden_enclosure_kept() {
        let overrides = Overrides {
            enclosure: Some(Some('\'')),
            ..Overrides::none()
        };
        let dialect = detect(r#"a,"b",c"#, &overrides);
        assert_eq!(dialect.delimiter, Some(','));
        assert_eq!(dialect.enclosure, Some('\''));
    }

    #[test]
    fn test_pinned_absent_marker() {
        let overrides = Overrides {
            enclosure: Some(None),
            ..Overrides::none()
        };
        let dialect = detect(r#"a,"b",c"#, &overrides);
        assert_eq!(dialect.enclosure, None);
        assert_eq!(dialect.escape, None);
    }
}

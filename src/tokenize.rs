//! Line-oriented tokenizing of delimited text under a resolved dialect.

use crate::dialect::Dialect;
use rayon::prelude::*;

/// One tokenized line: its cleaned field values in order.
pub type Row = Vec<String>;

/// Characters removed from both ends of every field.
const TRIMMED: &[char] = &[' ', '\t', '\n', '\r', '\0', '\x0B'];

/// Non-breaking space left at the end of fields by some spreadsheet exports.
const TRAILING_NBSP: char = '\u{a0}';

/// Tokenizer state for the field currently being read.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum State {
    /// Nothing but optional blanks seen since the last delimiter.
    FieldStart,
    /// Reading a bare field, or the remainder after a closed enclosure.
    InField,
    /// Inside an enclosed span; the delimiter does not split.
    InEnclosed,
}

/// Tokenize the whole text into rows, one per `\n`-separated line.
///
/// A `\r` before the `\n` is not removed by the split; it ends up in the last
/// field of its line and is dropped by field cleanup.
pub fn tokenize(text: &str, dialect: &Dialect) -> Vec<Row> {
    let lines: Vec<&str> = text.split('\n').collect();
    lines
        .par_iter()
        .map(|line| tokenize_line(line, dialect))
        .collect()
}

/// Tokenize a single line into cleaned fields.
///
/// Never fails: malformed quoting degrades to a best-effort split, and an
/// enclosed span still open at the end of the line is closed there.
pub fn tokenize_line(line: &str, dialect: &Dialect) -> Row {
    let Dialect {
        delimiter,
        enclosure,
        escape,
    } = *dialect;

    let mut fields = Vec::new();
    let mut field = String::new();
    // Blanks before a possible opening enclosure; dropped if one follows.
    let mut blanks = String::new();
    let mut state = State::FieldStart;
    let mut chars = line.chars().peekable();

    while let Some(c) = chars.next() {
        match state {
            State::FieldStart => {
                if Some(c) == delimiter {
                    field.push_str(&blanks);
                    blanks.clear();
                    fields.push(clean_field(&field).to_string());
                    field.clear();
                } else if c == ' ' || c == '\t' {
                    blanks.push(c);
                } else if Some(c) == enclosure {
                    blanks.clear();
                    state = State::InEnclosed;
                } else {
                    field.push_str(&blanks);
                    blanks.clear();
                    field.push(c);
                    state = State::InField;
                }
            }
            State::InField => {
                if Some(c) == delimiter {
                    fields.push(clean_field(&field).to_string());
                    field.clear();
                    state = State::FieldStart;
                } else {
                    field.push(c);
                }
            }
            State::InEnclosed => {
                let next = chars.peek().copied();
                if let Some(quote) = enclosure
                    && Some(c) == escape
                    && c != quote
                    && next == Some(quote)
                {
                    // Escaped enclosure: keep the enclosure, drop the escape.
                    field.push(quote);
                    chars.next();
                } else if Some(c) == enclosure {
                    if next == Some(c) {
                        field.push(c);
                        chars.next();
                    } else {
                        state = State::InField;
                    }
                } else {
                    field.push(c);
                }
            }
        }
    }

    field.push_str(&blanks);
    fields.push(clean_field(&field).to_string());
    fields
}

/// Trim ASCII whitespace from both ends, then drop one trailing U+00A0
/// (UTF-8 `C2 A0`) if present.
///
/// Interior non-breaking spaces are left alone.
pub fn clean_field(field: &str) -> &str {
    let trimmed = field.trim_matches(TRIMMED);
    trimmed.strip_suffix(TRAILING_NBSP).unwrap_or(trimmed)
}

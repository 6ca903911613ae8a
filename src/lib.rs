//! csv-sift: heuristic CSV dialect guessing and line tokenizing
//!
//! Takes a block of text believed to be delimiter-separated data (a pasted
//! spreadsheet range, a loosely exported file), guesses its delimiter,
//! enclosure and escape characters, and splits it into rows of cleaned
//! fields.
//!
//! # Quick Start
//!
//! ```no_run
//! use csv_sift::Sniffer;
//!
//! let table = Sniffer::new().open("name\tage\njohn\t30\njane\t25");
//!
//! println!("Dialect: {}", table.dialect());
//! for row in table.rows() {
//!     println!("{row:?}");
//! }
//! ```
//!
//! # Two phases
//!
//! Detection and tokenizing are independent pure functions and can be used
//! without a [`Table`] session:
//!
//! ```no_run
//! use csv_sift::{detect, tokenize, Overrides};
//!
//! let text = "a;b\n1;2";
//! let dialect = detect(text, &Overrides::none());
//! let rows = tokenize(text, &dialect);
//! ```
//!
//! # Heuristics
//!
//! 1. Delimiter: the most frequent of TAB `,` `;` `:` `|` (earliest wins
//!    ties), accepted only if it occurs at least as often as `\n`.
//! 2. Enclosure: the first `'` or `"` directly followed by the delimiter.
//! 3. Escape: the first `\` or `"` directly followed by the enclosure.
//!
//! Neither phase ever fails. Guesses that are wrong are corrected by the
//! caller through [`Sniffer`] overrides.

mod detect;
mod dialect;
mod encoding;
mod error;
pub mod normalize;
mod sniffer;
mod table;
mod tokenize;

pub use detect::{detect, detect_delimiter, detect_enclosure, detect_escape, DelimiterCounts};
pub use dialect::{Dialect, Marker, Overrides, DELIMITERS, ENCLOSURES, ESCAPES};
pub use error::{Result, SiftError};
pub use sniffer::Sniffer;
pub use table::Table;
pub use tokenize::{clean_field, tokenize, tokenize_line, Row};

// Re-export for advanced usage
pub use encoding::{decode_text, is_utf8, EncodingInfo};

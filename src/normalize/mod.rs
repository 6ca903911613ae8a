//! Per-language normalizers applied to field values after tokenizing.
//!
//! The stemming algorithms themselves are supplied by the caller through the
//! [`Stem`] trait; this module only selects them by locale and loads
//! stopword lists.

pub mod language;
pub mod stemmer;
pub mod stopwords;

pub use language::{locale_code, Language};
pub use stemmer::{Stem, Stemmer};
pub use stopwords::Stopwords;

use crate::error::{Result, SiftError};
use std::fmt;

/// Languages with a stemming algorithm.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Language {
    Danish,
    Dutch,
    English,
    French,
    German,
    Italian,
    Norwegian,
    Portuguese,
    Romanian,
    Russian,
    Spanish,
    Swedish,
}

/// ISO 639-1 code to language lookup table.
const LANGUAGES: &[(&str, Language)] = &[
    ("da", Language::Danish),
    ("nl", Language::Dutch),
    ("en", Language::English),
    ("fr", Language::French),
    ("de", Language::German),
    ("it", Language::Italian),
    ("no", Language::Norwegian),
    ("pt", Language::Portuguese),
    ("ro", Language::Romanian),
    ("ru", Language::Russian),
    ("es", Language::Spanish),
    ("sv", Language::Swedish),
];

/// The lowercased two-letter language part of a locale (`"en_US"` -> `"en"`).
pub fn locale_code(locale: &str) -> String {
    locale.chars().take(2).collect::<String>().to_lowercase()
}

impl Language {
    /// All supported languages.
    pub fn all() -> impl Iterator<Item = Language> {
        LANGUAGES.iter().map(|&(_, language)| language)
    }

    /// Resolve a locale such as `"de"`, `"de_AT"` or `"EN-gb"`.
    pub fn from_locale(locale: &str) -> Result<Self> {
        let code = locale_code(locale);
        LANGUAGES
            .iter()
            .find(|(c, _)| *c == code)
            .map(|&(_, language)| language)
            .ok_or_else(|| {
                SiftError::UnsupportedLanguage(format!(
                    "No stemmer available for locale \"{locale}\""
                ))
            })
    }

    /// The two-letter ISO 639-1 code.
    pub fn code(&self) -> &'static str {
        LANGUAGES
            .iter()
            .find(|&&(_, language)| language == *self)
            .map_or("", |&(code, _)| code)
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{self:?}")
    }
}

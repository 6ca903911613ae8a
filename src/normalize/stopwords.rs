use super::language::locale_code;
use crate::error::{Result, SiftError};
use foldhash::HashSet;
use regex::{Captures, Regex};
use std::fs;
use std::path::Path;

/// A stopword list and the pattern that strips those words from text.
#[derive(Debug, Clone)]
pub struct Stopwords {
    words: Vec<String>,
    lookup: HashSet<String>,
    /// `None` for an empty list.
    pattern: Option<Regex>,
}

impl Stopwords {
    /// Load `<dir>/<code>.txt` for the locale's two-letter language code.
    ///
    /// One word per line; lines are trimmed and blank ones dropped. A missing
    /// list is reported as [`SiftError::UnsupportedLanguage`].
    pub fn load<P: AsRef<Path>>(dir: P, locale: &str) -> Result<Self> {
        let path = dir.as_ref().join(format!("{}.txt", locale_code(locale)));
        if !path.is_file() {
            return Err(SiftError::UnsupportedLanguage(format!(
                "No stopword list available for locale \"{locale}\""
            )));
        }
        let contents = fs::read_to_string(&path)?;
        let stopwords = Self::from_words(contents.lines())?;
        tracing::debug!(path = %path.display(), words = stopwords.words.len(), "loaded stopwords");
        Ok(stopwords)
    }

    /// Build a list from in-memory words.
    pub fn from_words<I, S>(words: I) -> Result<Self>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let words: Vec<String> = words
            .into_iter()
            .map(|w| w.as_ref().trim().to_string())
            .filter(|w| !w.is_empty())
            .collect();
        let lookup = words.iter().map(|w| w.to_lowercase()).collect();

        let pattern = if words.is_empty() {
            None
        } else {
            let alternation = words
                .iter()
                .map(|w| regex::escape(w))
                .collect::<Vec<_>>()
                .join("|");
            let pattern = Regex::new(&format!(r"(?i)(\W)({alternation})(\W)"))
                .map_err(|e| SiftError::InvalidConfig(format!("stopword pattern: {e}")))?;
            Some(pattern)
        };

        Ok(Self {
            words,
            lookup,
            pattern,
        })
    }

    /// The words in file order.
    pub fn words(&self) -> &[String] {
        &self.words
    }

    /// Case-insensitive membership test.
    pub fn contains(&self, word: &str) -> bool {
        self.lookup.contains(&word.to_lowercase())
    }

    /// Remove stopwords that stand between two non-word characters.
    ///
    /// The surrounding characters are kept and a resulting double space is
    /// collapsed. Passes repeat until nothing matches, so runs of adjacent
    /// stopwords are removed completely. A stopword at the very start or end
    /// of the text has no neighbour on one side and is kept.
    pub fn remove(&self, text: &str) -> String {
        let Some(pattern) = &self.pattern else {
            return text.to_string();
        };

        let mut current = text.to_string();
        loop {
            let next = pattern
                .replace_all(&current, |caps: &Captures| {
                    format!("{}{}", &caps[1], &caps[3]).replace("  ", " ")
                })
                .into_owned();
            if next == current {
                return current;
            }
            current = next;
        }
    }
}

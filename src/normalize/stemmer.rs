use super::language::Language;
use crate::error::Result;

/// A word stemming algorithm.
pub trait Stem: Send + Sync {
    /// Reduce a word to its stem.
    fn stem(&self, word: &str) -> String;
}

impl<F> Stem for F
where
    F: Fn(&str) -> String + Send + Sync,
{
    fn stem(&self, word: &str) -> String {
        self(word)
    }
}

/// A stemming algorithm bound to the language it was selected for.
pub struct Stemmer {
    language: Language,
    algorithm: Box<dyn Stem>,
}

impl Stemmer {
    /// Select the stemmer for `locale`, building it with `factory`.
    ///
    /// Fails with [`crate::SiftError::UnsupportedLanguage`] when the locale's
    /// language has no stemmer; `factory` is not called in that case.
    pub fn for_locale<F, S>(locale: &str, factory: F) -> Result<Self>
    where
        F: FnOnce(Language) -> S,
        S: Stem + 'static,
    {
        let language = Language::from_locale(locale)?;
        Ok(Self {
            language,
            algorithm: Box::new(factory(language)),
        })
    }

    /// The language this stemmer was selected for.
    pub fn language(&self) -> Language {
        self.language
    }

    /// Stem a single word.
    pub fn stem(&self, word: &str) -> String {
        self.algorithm.stem(word)
    }

    /// Stem every whitespace-separated word of a field, joined by single spaces.
    pub fn stem_field(&self, field: &str) -> String {
        field
            .split_whitespace()
            .map(|word| self.stem(word))
            .collect::<Vec<_>>()
            .join(" ")
    }
}

impl std::fmt::Debug for Stemmer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Stemmer")
            .field("language", &self.language)
            .finish_non_exhaustive()
    }
}

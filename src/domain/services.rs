//! Word collection, ordering and matching rules for the lexicon.
//!
//! These are the pure parts of the export pipeline: deduplicating the
//! extracted words, ordering them for output, and normalizing a player's
//! guess so it can be matched against the lexicon.

use std::collections::HashSet;

use unicode_normalization::char::is_combining_mark;
use unicode_normalization::UnicodeNormalization;

use super::models::WordRecord;

/// Collects extracted words, keeping each distinct string once.
///
/// Uniqueness is exact string equality, so `"Cat"` and `"cat"` are two
/// different words. The collector has no ordering of its own; call
/// [`WordCollector::into_sorted`] to get the output order.
///
/// # Examples
///
/// ```
/// use lexique::domain::WordCollector;
///
/// let mut words = WordCollector::new();
/// assert!(words.insert("chat".to_string()));
/// assert!(!words.insert("chat".to_string()));
/// assert!(words.insert("Chat".to_string()));
/// assert_eq!(words.len(), 2);
/// ```
#[derive(Debug, Default)]
pub struct WordCollector {
    words: HashSet<String>,
}

impl WordCollector {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a word. Returns `false` if the exact word was already present.
    pub fn insert(&mut self, word: String) -> bool {
        self.words.insert(word)
    }

    pub fn contains(&self, word: &str) -> bool {
        self.words.contains(word)
    }

    pub fn len(&self) -> usize {
        self.words.len()
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    /// Consumes the collector and returns its words in output order.
    pub fn into_sorted(self) -> Vec<String> {
        sort_case_insensitive(self.words)
    }
}

impl Extend<String> for WordCollector {
    fn extend<I: IntoIterator<Item = String>>(&mut self, iter: I) {
        self.words.extend(iter);
    }
}

/// Orders words by their lowercase form.
///
/// Words that are equal once lowercased are ordered by their exact code
/// points, which puts uppercase variants first.
///
/// # Examples
///
/// ```
/// use lexique::domain::sort_case_insensitive;
///
/// let sorted = sort_case_insensitive(vec![
///     "chien".to_string(),
///     "chat".to_string(),
///     "Abeille".to_string(),
///     "Chat".to_string(),
/// ]);
/// assert_eq!(sorted, vec!["Abeille", "Chat", "chat", "chien"]);
/// ```
pub fn sort_case_insensitive<I>(words: I) -> Vec<String>
where
    I: IntoIterator<Item = String>,
{
    let mut words: Vec<String> = words.into_iter().collect();
    words.sort_by_cached_key(|word| (word.to_lowercase(), word.clone()));
    words
}

/// Wraps each word in a not-yet-found [`WordRecord`], keeping the order.
pub fn build_records(words: Vec<String>) -> Vec<WordRecord> {
    words.into_iter().map(WordRecord::new).collect()
}

/// Normalizes a word for guess matching: lowercase with every combining
/// accent removed, so `"Élève"` and `"eleve"` fold to the same key whether
/// the accents are precomposed or decomposed.
///
/// # Examples
///
/// ```
/// use lexique::domain::fold_word;
///
/// assert_eq!(fold_word("Élève"), "eleve");
/// assert_eq!(fold_word("GARÇON"), "garcon");
/// assert_eq!(fold_word("e\u{301}le\u{300}ve"), "eleve");
/// assert_eq!(fold_word("cœur"), "cœur");
/// ```
pub fn fold_word(word: &str) -> String {
    word.to_lowercase()
        .nfd()
        .filter(|c| !is_combining_mark(*c))
        .nfc()
        .collect()
}

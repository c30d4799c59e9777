//! Word-hunt state over an exported lexicon.
//!
//! A player guesses words; a guess that matches an entry (ignoring case
//! and accents) marks it as found. The lexicon is the same JSON file the
//! exporter writes, so progress survives between sessions. Wrong guesses
//! are only kept for the current session.

use std::fmt;
use std::path::Path;

use tracing::debug;

use crate::domain::{fold_word, LexiqueResult, WordRecord};
use crate::infrastructure::FileRepository;

/// Result of checking one guess.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CheckOutcome {
    /// The guess was empty after trimming.
    Ignored,
    /// No entry matches the guess.
    Unknown,
    /// The matching entry had already been found.
    AlreadyFound(String),
    /// The matching entry is now marked as found.
    Found(String),
}

/// Found and total entry counts.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Progress {
    pub found: usize,
    pub total: usize,
}

impl Progress {
    /// Share of found entries in percent, `None` for an empty lexicon.
    pub fn percentage(&self) -> Option<f64> {
        if self.total == 0 {
            None
        } else {
            Some(self.found as f64 / self.total as f64 * 100.0)
        }
    }
}

impl fmt::Display for Progress {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} / {}", self.found, self.total)?;
        if let Some(percent) = self.percentage() {
            write!(f, " ({:.2}%)", percent)?;
        }
        Ok(())
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct Lexicon {
    entries: Vec<WordRecord>,
    /// Unknown guesses, most recent first, unique ignoring case
    tried: Vec<String>,
}

impl Lexicon {
    pub fn new(entries: Vec<WordRecord>) -> Self {
        Self {
            entries,
            tried: Vec::new(),
        }
    }

    pub fn load(path: &Path) -> LexiqueResult<Self> {
        let entries = FileRepository::load_records(path)?;
        debug!(path = %path.display(), entries = entries.len(), "lexicon loaded");
        Ok(Self::new(entries))
    }

    pub fn save(&self, path: &Path) -> LexiqueResult<()> {
        FileRepository::save_records(&self.entries, path)
    }

    pub fn entries(&self) -> &[WordRecord] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Checks a guess against the lexicon, marking the first matching
    /// entry as found. Unknown guesses are remembered in [`Lexicon::tried_words`].
    ///
    /// # Examples
    ///
    /// ```
    /// use lexique::application::{CheckOutcome, Lexicon};
    /// use lexique::domain::WordRecord;
    ///
    /// let mut lexicon = Lexicon::new(vec![WordRecord::new("élève")]);
    /// assert_eq!(lexicon.check(" ELEVE "), CheckOutcome::Found("élève".to_string()));
    /// assert_eq!(lexicon.check("élève"), CheckOutcome::AlreadyFound("élève".to_string()));
    /// assert_eq!(lexicon.check("maître"), CheckOutcome::Unknown);
    /// ```
    pub fn check(&mut self, guess: &str) -> CheckOutcome {
        let guess = guess.trim();
        if guess.is_empty() {
            return CheckOutcome::Ignored;
        }

        let key = fold_word(guess);
        match self.entries.iter_mut().find(|entry| fold_word(&entry.word) == key) {
            None => {
                let lowered = guess.to_lowercase();
                if !self.tried.iter().any(|tried| tried.to_lowercase() == lowered) {
                    self.tried.insert(0, guess.to_string());
                }
                CheckOutcome::Unknown
            }
            Some(entry) if entry.found => CheckOutcome::AlreadyFound(entry.word.clone()),
            Some(entry) => {
                entry.found = true;
                CheckOutcome::Found(entry.word.clone())
            }
        }
    }

    pub fn progress(&self) -> Progress {
        Progress {
            found: self.entries.iter().filter(|entry| entry.found).count(),
            total: self.entries.len(),
        }
    }

    pub fn found_words(&self) -> impl Iterator<Item = &str> {
        self.entries
            .iter()
            .filter(|entry| entry.found)
            .map(|entry| entry.word.as_str())
    }

    pub fn tried_words(&self) -> &[String] {
        &self.tried
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    fn lexicon(words: &[&str]) -> Lexicon {
        Lexicon::new(words.iter().map(|w| WordRecord::new(*w)).collect())
    }

    #[test]
    fn test_check_empty_guess() {
        let mut lexicon = lexicon(&["chat"]);
        assert_eq!(lexicon.check("   "), CheckOutcome::Ignored);
        assert_eq!(lexicon.progress().found, 0);
    }

    #[test]
    fn test_check_marks_first_match() {
        let mut lexicon = lexicon(&["Chat", "chat", "chien"]);
        assert_eq!(lexicon.check("CHAT"), CheckOutcome::Found("Chat".to_string()));
        assert!(lexicon.entries()[0].found);
        assert!(!lexicon.entries()[1].found);
        assert_eq!(lexicon.check("chat"), CheckOutcome::AlreadyFound("Chat".to_string()));
    }

    #[test]
    fn test_check_ignores_accents() {
        let mut lexicon = lexicon(&["forêt", "garçon"]);
        assert_eq!(lexicon.check("foret"), CheckOutcome::Found("forêt".to_string()));
        assert_eq!(lexicon.check("GARCON"), CheckOutcome::Found("garçon".to_string()));
    }

    #[test]
    fn test_check_unknown() {
        let mut lexicon = lexicon(&["chat"]);
        assert_eq!(lexicon.check("chats"), CheckOutcome::Unknown);
    }

    #[test]
    fn test_unknown_guesses_are_tried_once() {
        let mut lexicon = lexicon(&["chat"]);
        lexicon.check("chats");
        lexicon.check(" Zèbre ");
        lexicon.check("CHATS");
        lexicon.check("chat");
        lexicon.check("");

        assert_eq!(lexicon.tried_words(), ["Zèbre", "chats"]);
    }

    #[test]
    fn test_progress() {
        let mut lexicon = lexicon(&["a", "b", "c", "d"]);
        lexicon.check("b");
        let progress = lexicon.progress();
        assert_eq!(progress, Progress { found: 1, total: 4 });
        assert_eq!(progress.percentage(), Some(25.0));
        assert_eq!(progress.to_string(), "1 / 4 (25.00%)");
        assert_eq!(lexicon.found_words().collect::<Vec<_>>(), vec!["b"]);
    }

    #[test]
    fn test_progress_empty_lexicon() {
        let progress = Lexicon::default().progress();
        assert_eq!(progress.percentage(), None);
        assert_eq!(progress.to_string(), "0 / 0");
    }

    #[test]
    fn test_found_state_persists() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("LexiqueFr.json");

        let mut lexicon = lexicon(&["abeille", "abricot"]);
        lexicon.check("abricot");
        lexicon.save(&path).unwrap();

        let reloaded = Lexicon::load(&path).unwrap();
        assert_eq!(reloaded, lexicon);
        assert_eq!(reloaded.found_words().collect::<Vec<_>>(), vec!["abricot"]);
    }
}

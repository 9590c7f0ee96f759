//! The pool of candidate secret words

use crate::{GameError, Result};
use anyhow::Context;
use rand::Rng;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Words used when no custom list is supplied
pub const DEFAULT_WORDS: &[&str] = &[
    "TABLE",
    "PLASTIC",
    "STEREO",
    "AUTOMOBILE",
    "COUCH",
    "COMPUTER",
    "PIANO",
    "GLASS",
    "TOWEL",
    "MONITOR",
    "WINDOW",
    "GARDEN",
    "BICYCLE",
    "LANTERN",
    "PENCIL",
    "GUITAR",
    "KETTLE",
];

/// A fixed list of candidate words for the session
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WordList {
    words: Vec<String>,
}

impl Default for WordList {
    fn default() -> Self {
        Self {
            words: DEFAULT_WORDS.iter().map(|w| w.to_string()).collect(),
        }
    }
}

impl WordList {
    /// Build a list from raw entries: trimmed, uppercased, blanks dropped.
    ///
    /// Fails on an empty result or on non-alphabetic entries.
    pub fn new<I, S>(entries: I) -> Result<Self>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut words = Vec::new();
        for entry in entries {
            let word = entry.as_ref().trim().to_ascii_uppercase();
            if word.is_empty() {
                continue;
            }
            if !word.chars().all(|c| c.is_ascii_alphabetic()) {
                return Err(GameError::InvalidWord(word).into());
            }
            words.push(word);
        }
        if words.is_empty() {
            return Err(GameError::EmptyWordList.into());
        }
        Ok(Self { words })
    }

    /// Load a list from a file, one word per line. Blank lines and lines
    /// starting with `#` are skipped.
    pub fn from_file(path: &Path) -> Result<Self> {
        let raw = std::fs::read_to_string(path)
            .with_context(|| format!("reading word list {}", path.display()))?;
        Self::new(raw.lines().filter(|l| !l.trim_start().starts_with('#')))
            .with_context(|| format!("parsing word list {}", path.display()))
    }

    /// Pick a word uniformly at random
    pub fn pick<R: Rng>(&self, rng: &mut R) -> &str {
        let index = rng.random_range(0..self.words.len());
        &self.words[index]
    }

    pub fn len(&self) -> usize {
        self.words.len()
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    pub fn words(&self) -> &[String] {
        &self.words
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;
    use std::io::Write;

    #[test]
    fn default_list_is_clean() {
        let list = WordList::default();
        assert!(!list.is_empty());
        for word in list.words() {
            assert!(word.chars().all(|c| c.is_ascii_uppercase()));
        }
    }

    #[test]
    fn entries_are_trimmed_and_uppercased() {
        let list = WordList::new(["  cat ", "", "dog"]).unwrap();
        assert_eq!(list.words(), ["CAT", "DOG"]);
    }

    #[test]
    fn rejects_non_alphabetic_entries() {
        assert!(WordList::new(["C4T"]).is_err());
    }

    #[test]
    fn rejects_empty_list() {
        let err = WordList::new(["  ", ""]).unwrap_err();
        assert!(err.to_string().contains("empty"));
    }

    #[test]
    fn pick_stays_in_bounds() {
        let list = WordList::new(["ONE", "TWO", "THREE"]).unwrap();
        let mut rng = StdRng::seed_from_u64(7);
        for _ in 0..50 {
            let word = list.pick(&mut rng);
            assert!(list.words().iter().any(|w| w == word));
        }
    }

    #[test]
    fn loads_from_file_with_comments() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "# pets").unwrap();
        writeln!(file, "cat").unwrap();
        writeln!(file).unwrap();
        writeln!(file, "parrot").unwrap();
        let list = WordList::from_file(file.path()).unwrap();
        assert_eq!(list.words(), ["CAT", "PARROT"]);
    }
}

//! The secret word and the letters it is made of

use serde::{Deserialize, Serialize};

/// A single letter of the secret word, revealed or hidden
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Letter {
    pub value: char,
    pub show: bool,
}

impl Letter {
    pub fn hidden(value: char) -> Self {
        Self {
            value: value.to_ascii_uppercase(),
            show: false,
        }
    }

    pub fn shown(value: char) -> Self {
        Self {
            value: value.to_ascii_uppercase(),
            show: true,
        }
    }
}

/// The secret word as an ordered sequence of letters with reveal state
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Word {
    letters: Vec<Letter>,
}

impl Word {
    /// Build a word with every letter hidden
    pub fn hidden(word: &str) -> Self {
        Self {
            letters: word.chars().map(Letter::hidden).collect(),
        }
    }

    /// Reveal every occurrence of `letter`, case-insensitive.
    ///
    /// Returns true if at least one letter matched. Repeating an already
    /// revealed letter matches again and changes nothing.
    pub fn reveal(&mut self, letter: char) -> bool {
        let letter = letter.to_ascii_uppercase();
        let mut correct = false;
        for l in &mut self.letters {
            if l.value == letter {
                correct = true;
                l.show = true;
            }
        }
        correct
    }

    /// True iff every letter is revealed
    pub fn is_solved(&self) -> bool {
        self.letters.iter().all(|l| l.show)
    }

    pub fn letters(&self) -> &[Letter] {
        &self.letters
    }

    pub fn len(&self) -> usize {
        self.letters.len()
    }

    pub fn is_empty(&self) -> bool {
        self.letters.is_empty()
    }

    /// The full word, ignoring reveal state
    pub fn answer(&self) -> String {
        self.letters.iter().map(|l| l.value).collect()
    }

    /// The word as the player sees it, hidden letters as underscores
    pub fn masked(&self) -> String {
        self.letters
            .iter()
            .map(|l| if l.show { l.value } else { '_' })
            .collect()
    }
}

/// The letters the player has missed on, in guess order.
///
/// Duplicates are kept: a repeated miss burns another try and shows up again.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Guesses {
    letters: Vec<Letter>,
}

impl Guesses {
    pub fn add(&mut self, letter: char) {
        self.letters.push(Letter::shown(letter));
    }

    pub fn reset(&mut self) {
        self.letters.clear();
    }

    pub fn letters(&self) -> &[Letter] {
        &self.letters
    }

    pub fn len(&self) -> usize {
        self.letters.len()
    }

    pub fn is_empty(&self) -> bool {
        self.letters.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hidden_word_is_masked() {
        let word = Word::hidden("cat");
        assert_eq!(word.answer(), "CAT");
        assert_eq!(word.masked(), "___");
        assert!(!word.is_solved());
    }

    #[test]
    fn reveal_hits_every_occurrence() {
        let mut word = Word::hidden("BANANA");
        assert!(word.reveal('a'));
        assert_eq!(word.masked(), "_A_A_A");
    }

    #[test]
    fn reveal_is_idempotent() {
        let mut word = Word::hidden("CAT");
        assert!(word.reveal('C'));
        let snapshot = word.clone();
        assert!(word.reveal('C'));
        assert_eq!(word, snapshot);
    }

    #[test]
    fn reveal_misses_absent_letter() {
        let mut word = Word::hidden("CAT");
        assert!(!word.reveal('Z'));
        assert_eq!(word.masked(), "___");
    }

    #[test]
    fn solved_after_all_distinct_letters() {
        let mut word = Word::hidden("BANANA");
        for c in ['B', 'A', 'N'] {
            word.reveal(c);
        }
        assert!(word.is_solved());
        assert_eq!(word.masked(), "BANANA");
    }

    #[test]
    fn guesses_keep_duplicates_in_order() {
        let mut guesses = Guesses::default();
        guesses.add('x');
        guesses.add('Y');
        guesses.add('x');
        let shown: String = guesses.letters().iter().map(|l| l.value).collect();
        assert_eq!(shown, "XYX");
    }
}

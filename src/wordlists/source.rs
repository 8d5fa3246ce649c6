//! Secret word sources
//!
//! The game machine draws secret words and validates guesses through the
//! [`WordSource`] trait, so tests and replays can swap in a fixed sequence.

use super::loader::words_from_slice;
use super::{ALLOWED, ANSWERS};
use crate::core::Word;
use rand::Rng;
use rand::rngs::ThreadRng;
use rustc_hash::FxHashSet;
use std::sync::Arc;
use thiserror::Error;

/// Supplies secret words and validates guesses
pub trait WordSource {
    /// Draw a secret word
    fn pick_random_answer(&mut self) -> Word;

    /// Whether `word` may be submitted as a guess
    fn is_valid_guess_word(&self, word: &str) -> bool;
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum WordListError {
    #[error("answer list is empty")]
    NoAnswers,
}

/// Answer and valid-guess lists
///
/// Every answer is also a valid guess.
#[derive(Debug, Clone)]
pub struct WordLists {
    answers: Vec<Word>,
    allowed: FxHashSet<String>,
}

impl WordLists {
    /// Build lists from answer words and extra allowed guesses
    ///
    /// # Errors
    /// Returns `WordListError::NoAnswers` if `answers` is empty.
    pub fn new(
        answers: Vec<Word>,
        allowed: impl IntoIterator<Item = Word>,
    ) -> Result<Self, WordListError> {
        if answers.is_empty() {
            return Err(WordListError::NoAnswers);
        }

        let mut allowed: FxHashSet<String> =
            allowed.into_iter().map(|w| w.text().to_string()).collect();
        allowed.extend(answers.iter().map(|w| w.text().to_string()));

        Ok(Self { answers, allowed })
    }

    /// The lists compiled into the binary
    #[must_use]
    pub fn embedded() -> Self {
        let answers = words_from_slice(ANSWERS);
        let mut allowed: FxHashSet<String> = ALLOWED.iter().map(|&w| w.to_string()).collect();
        allowed.extend(answers.iter().map(|w| w.text().to_string()));
        Self { answers, allowed }
    }

    #[must_use]
    pub fn answers(&self) -> &[Word] {
        &self.answers
    }

    #[must_use]
    pub fn allowed_count(&self) -> usize {
        self.allowed.len()
    }

    /// Case-insensitive membership in the valid-guess list
    #[must_use]
    pub fn is_allowed(&self, word: &str) -> bool {
        self.allowed.contains(&word.trim().to_lowercase())
    }
}

/// Draws answers uniformly at random from shared word lists
#[derive(Debug, Clone)]
pub struct WordBank<R = ThreadRng> {
    lists: Arc<WordLists>,
    rng: R,
}

impl WordBank<ThreadRng> {
    /// Bank over the embedded lists using the thread-local RNG
    #[must_use]
    pub fn embedded() -> Self {
        Self::new(Arc::new(WordLists::embedded()))
    }

    #[must_use]
    pub fn new(lists: Arc<WordLists>) -> Self {
        Self::with_rng(lists, rand::rng())
    }
}

impl<R: Rng> WordBank<R> {
    /// Bank with an explicit RNG (seeded RNGs give reproducible games)
    pub const fn with_rng(lists: Arc<WordLists>, rng: R) -> Self {
        Self { lists, rng }
    }

    #[must_use]
    pub fn lists(&self) -> &WordLists {
        &self.lists
    }
}

impl<R: Rng> WordSource for WordBank<R> {
    fn pick_random_answer(&mut self) -> Word {
        // Non-empty by construction of WordLists
        let index = self.rng.random_range(0..self.lists.answers.len());
        self.lists.answers[index].clone()
    }

    fn is_valid_guess_word(&self, word: &str) -> bool {
        self.lists.is_allowed(word)
    }
}

/// Hands out a fixed list of secrets in order, cycling when exhausted
///
/// Any well-formed 5-letter word is accepted as a guess.
#[derive(Debug, Clone)]
pub struct WordSequence {
    words: Vec<Word>,
    next: usize,
}

impl WordSequence {
    /// # Errors
    /// Returns `WordListError::NoAnswers` if `words` is empty.
    pub fn new(words: Vec<Word>) -> Result<Self, WordListError> {
        if words.is_empty() {
            return Err(WordListError::NoAnswers);
        }
        Ok(Self { words, next: 0 })
    }

    /// Convenience constructor from string slices, skipping invalid entries
    ///
    /// # Errors
    /// Returns `WordListError::NoAnswers` if no entry is a valid word.
    pub fn from_strs(words: &[&str]) -> Result<Self, WordListError> {
        Self::new(words_from_slice(words))
    }
}

impl WordSource for WordSequence {
    fn pick_random_answer(&mut self) -> Word {
        let word = self.words[self.next % self.words.len()].clone();
        self.next += 1;
        word
    }

    fn is_valid_guess_word(&self, word: &str) -> bool {
        Word::new(word).is_ok()
    }
}

//! Guess evaluation
//!
//! Scores a guess against a secret word using Wordle's feedback rules,
//! including proper handling of repeated letters.

use super::tile::{Tile, TileRow, TileState};
use super::word::{WORD_LENGTH, Word, WordError};
use std::fmt;
use thiserror::Error;

/// Which input of [`evaluate`] was invalid
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WordRole {
    Guess,
    Answer,
}

impl fmt::Display for WordRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Guess => write!(f, "guess"),
            Self::Answer => write!(f, "answer"),
        }
    }
}

/// Raised when [`evaluate`] receives something that is not a 5-letter word
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum EvaluationError {
    #[error("{role} must be exactly 5 letters, got {len}")]
    InvalidLength { role: WordRole, len: usize },
    #[error("{role} must contain only letters")]
    InvalidCharacters { role: WordRole },
}

impl EvaluationError {
    fn from_word_error(role: WordRole, err: WordError) -> Self {
        match err {
            WordError::InvalidLength(len) => Self::InvalidLength { role, len },
            WordError::InvalidCharacters => Self::InvalidCharacters { role },
        }
    }
}

/// Feedback for a single guess
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct GuessEvaluation {
    tiles: [Tile; WORD_LENGTH],
    is_correct: bool,
    score: u32,
}

impl GuessEvaluation {
    /// Calculate the feedback when `guess` is played against `answer`
    ///
    /// # Algorithm
    /// 1. First pass: mark exact matches and remove them from the available pool
    /// 2. Second pass: mark present-but-misplaced letters from the remaining pool
    ///
    /// The ordering keeps a repeated guess letter from being credited more
    /// times than the answer contains it.
    ///
    /// # Examples
    /// ```
    /// use wordle_duel::core::{GuessEvaluation, TileState::*, Word};
    ///
    /// let guess = Word::new("hello").unwrap();
    /// let answer = Word::new("world").unwrap();
    /// let eval = GuessEvaluation::calculate(&guess, &answer);
    ///
    /// assert_eq!(eval.states(), [Absent, Absent, Absent, Correct, Present]);
    /// assert_eq!(eval.score(), 15);
    /// ```
    #[must_use]
    pub fn calculate(guess: &Word, answer: &Word) -> Self {
        let mut states = [TileState::Absent; WORD_LENGTH];
        let mut answer_available = answer.char_counts();

        // Allow: Index needed to access guess[i], answer[i], and set states[i]
        #[allow(clippy::needless_range_loop)]
        for i in 0..WORD_LENGTH {
            if guess.char_at(i) == answer.char_at(i) {
                states[i] = TileState::Correct;
                if let Some(count) = answer_available.get_mut(&guess.char_at(i)) {
                    *count = count.saturating_sub(1);
                }
            }
        }

        #[allow(clippy::needless_range_loop)]
        for i in 0..WORD_LENGTH {
            if states[i] == TileState::Correct {
                continue;
            }
            if let Some(count) = answer_available.get_mut(&guess.char_at(i))
                && *count > 0
            {
                states[i] = TileState::Present;
                *count -= 1;
            }
        }

        let tiles = std::array::from_fn(|i| Tile {
            letter: guess.char_at(i),
            state: states[i],
        });

        Self {
            tiles,
            is_correct: guess == answer,
            score: row_score(&states),
        }
    }

    /// Per-position tiles, in guess order
    #[inline]
    #[must_use]
    pub const fn tiles(&self) -> &[Tile; WORD_LENGTH] {
        &self.tiles
    }

    /// Just the tile states, in guess order
    #[must_use]
    pub fn states(&self) -> TileRow {
        self.tiles.map(|tile| tile.state)
    }

    /// True iff the guess equals the answer
    #[inline]
    #[must_use]
    pub const fn is_correct(&self) -> bool {
        self.is_correct
    }

    /// Flat per-tile score (0-50)
    #[inline]
    #[must_use]
    pub const fn score(&self) -> u32 {
        self.score
    }

    /// Number of `Correct` tiles
    #[must_use]
    pub fn count_correct(&self) -> usize {
        self.count(TileState::Correct)
    }

    /// Number of `Present` tiles
    #[must_use]
    pub fn count_present(&self) -> usize {
        self.count(TileState::Present)
    }

    fn count(&self, state: TileState) -> usize {
        self.tiles.iter().filter(|tile| tile.state == state).count()
    }
}

/// Sum of tile points for a row of feedback
#[must_use]
pub fn row_score(row: &TileRow) -> u32 {
    row.iter().map(|state| state.points()).sum()
}

/// Evaluate a raw guess against a raw answer
///
/// Both inputs are normalized (trimmed and lowercased) and validated before
/// any comparison runs.
///
/// # Errors
/// Returns `EvaluationError::InvalidLength` if either input is not exactly 5
/// letters, or `EvaluationError::InvalidCharacters` if it contains anything
/// but ASCII letters.
pub fn evaluate(guess: &str, answer: &str) -> Result<GuessEvaluation, EvaluationError> {
    let guess =
        Word::new(guess).map_err(|e| EvaluationError::from_word_error(WordRole::Guess, e))?;
    let answer =
        Word::new(answer).map_err(|e| EvaluationError::from_word_error(WordRole::Answer, e))?;
    Ok(GuessEvaluation::calculate(&guess, &answer))
}

#[cfg(test)]
mod tests {
    use super::*;
    use TileState::{Absent, Correct, Present};
    use proptest::prelude::*;

    fn states(guess: &str, answer: &str) -> TileRow {
        evaluate(guess, answer).unwrap().states()
    }

    #[test]
    fn hello_vs_world() {
        assert_eq!(
            states("HELLO", "WORLD"),
            [Absent, Absent, Absent, Correct, Present]
        );
    }

    #[test]
    fn exact_matches() {
        let eval = evaluate("WORLD", "world").unwrap();
        assert!(eval.is_correct());
        assert_eq!(eval.states(), [Correct; 5]);
        assert_eq!(eval.score(), 50);
    }

    #[test]
    fn spare_and_stare_both_directions() {
        let expected = [Correct, Absent, Correct, Correct, Correct];
        assert_eq!(states("SPARE", "STARE"), expected);
        assert_eq!(states("STARE", "SPARE"), expected);
    }

    #[test]
    fn anagrams_are_all_present() {
        assert_eq!(states("HEART", "EARTH"), [Present; 5]);
        assert_eq!(states("EARTH", "HEART"), [Present; 5]);
    }

    #[test]
    fn shared_prefix() {
        let expected = [Correct, Correct, Correct, Absent, Absent];
        assert_eq!(states("ABOUT", "ABOVE"), expected);
        assert_eq!(states("ABOVE", "ABOUT"), expected);
    }

    #[test]
    fn repeated_letters_not_over_credited() {
        // ELITE has two E's; EERIE has three
        let eval = evaluate("eerie", "elite").unwrap();
        assert_eq!(eval.states(), [Correct, Absent, Absent, Present, Correct]);
        let credited_e = eval
            .tiles()
            .iter()
            .filter(|t| t.letter == b'e' && t.state != Absent)
            .count();
        assert_eq!(credited_e, 2);
    }

    #[test]
    fn green_takes_priority_over_yellow() {
        // ROBOT vs FLOOR: first O yellow, second O green
        assert_eq!(
            states("robot", "floor"),
            [Present, Present, Absent, Correct, Absent]
        );
    }

    #[test]
    fn score_is_flat_per_tile() {
        let eval = evaluate("hello", "world").unwrap();
        assert_eq!(eval.score(), 15);
        assert_eq!(eval.count_correct(), 1);
        assert_eq!(eval.count_present(), 1);
    }

    #[test]
    fn invalid_lengths_rejected() {
        assert_eq!(
            evaluate("HELL", "WORLD"),
            Err(EvaluationError::InvalidLength {
                role: WordRole::Guess,
                len: 4
            })
        );
        assert_eq!(
            evaluate("HELLO", "WORL"),
            Err(EvaluationError::InvalidLength {
                role: WordRole::Answer,
                len: 4
            })
        );
    }

    #[test]
    fn invalid_characters_rejected() {
        assert_eq!(
            evaluate("he1lo", "world"),
            Err(EvaluationError::InvalidCharacters {
                role: WordRole::Guess
            })
        );
    }

    #[test]
    fn error_message_names_the_input() {
        let err = evaluate("hello", "worlds").unwrap_err();
        assert_eq!(err.to_string(), "answer must be exactly 5 letters, got 6");
    }

    fn shared_letters(guess: &str, answer: &str) -> usize {
        let mut counts = [0usize; 26];
        for b in answer.bytes() {
            counts[usize::from(b - b'a')] += 1;
        }
        let mut shared = 0;
        for b in guess.bytes() {
            let slot = &mut counts[usize::from(b - b'a')];
            if *slot > 0 {
                *slot -= 1;
                shared += 1;
            }
        }
        shared
    }

    proptest! {
        #[test]
        fn credited_tiles_never_exceed_shared_letters(
            guess in "[a-e]{5}",
            answer in "[a-e]{5}",
        ) {
            let eval = evaluate(&guess, &answer).unwrap();
            let credited = eval.count_correct() + eval.count_present();
            prop_assert_eq!(credited, shared_letters(&guess, &answer));
        }

        #[test]
        fn exact_match_iff_all_correct(guess in "[a-c]{5}", answer in "[a-c]{5}") {
            let eval = evaluate(&guess, &answer).unwrap();
            let all_correct = eval.states() == [Correct; 5];
            prop_assert_eq!(eval.is_correct(), guess == answer);
            prop_assert_eq!(eval.is_correct(), all_correct);
        }

        #[test]
        fn evaluation_is_deterministic(guess in "[a-z]{5}", answer in "[a-z]{5}") {
            prop_assert_eq!(evaluate(&guess, &answer), evaluate(&guess, &answer));
        }
    }
}

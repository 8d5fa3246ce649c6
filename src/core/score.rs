//! Scoring policy
//!
//! Flat additive scoring: every tile of a guess is worth a fixed number of
//! points. A turn that ends with an exact match is worth a fixed bonus score;
//! any other turn is worth its single best guess.

use super::evaluation::row_score;
use super::tile::{TileRow, TileState};
use super::word::Word;

/// Points for a letter in the right position
pub const POINTS_CORRECT: u32 = 10;
/// Points for a letter elsewhere in the answer
pub const POINTS_PRESENT: u32 = 5;
/// Points for a letter not in the answer
pub const POINTS_ABSENT: u32 = 0;

/// Turn score awarded for finding the secret word (50 tile points + 50 bonus)
pub const SOLVED_TURN_SCORE: u32 = 100;

/// Whether a row is an exact match
#[must_use]
pub fn is_solved_row(row: &TileRow) -> bool {
    row.iter().all(|&state| state == TileState::Correct)
}

/// Score for a completed turn
///
/// [`SOLVED_TURN_SCORE`] if any row is an exact match, otherwise the best
/// single-row score (not the sum). Zero when no guesses were made.
///
/// # Examples
/// ```
/// use wordle_duel::core::{TileState::*, turn_score};
///
/// let rows = [
///     [Correct, Absent, Absent, Absent, Absent],
///     [Correct, Correct, Present, Absent, Absent],
/// ];
/// assert_eq!(turn_score(&rows), 25);
/// ```
#[must_use]
pub fn turn_score(rows: &[TileRow]) -> u32 {
    if rows.iter().any(is_solved_row) {
        return SOLVED_TURN_SCORE;
    }
    rows.iter().map(row_score).max().unwrap_or(0)
}

/// Guess shown in the round history
///
/// The first exact match, else the last submitted guess. Not the
/// highest-scoring miss.
#[must_use]
pub fn best_guess<'a>(guesses: &'a [Word], rows: &[TileRow]) -> Option<&'a Word> {
    guesses
        .iter()
        .zip(rows)
        .find(|(_, row)| is_solved_row(row))
        .map(|(guess, _)| guess)
        .or_else(|| guesses.last())
}

//! Per-player state

use crate::core::{TileRow, WORD_LENGTH, Word, is_solved_row};
use std::fmt;

/// Seat at the table
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PlayerId {
    Player1,
    Player2,
}

impl PlayerId {
    pub const BOTH: [Self; 2] = [Self::Player1, Self::Player2];

    /// The opposing seat
    #[must_use]
    pub const fn other(self) -> Self {
        match self {
            Self::Player1 => Self::Player2,
            Self::Player2 => Self::Player1,
        }
    }

    pub(crate) const fn index(self) -> usize {
        match self {
            Self::Player1 => 0,
            Self::Player2 => 1,
        }
    }
}

impl fmt::Display for PlayerId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Player1 => write!(f, "Player 1"),
            Self::Player2 => write!(f, "Player 2"),
        }
    }
}

/// Everything the game tracks for one player
///
/// `guesses` and `tile_rows` always have the same length.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PlayerState {
    pub(crate) name: String,
    pub(crate) score: u32,
    pub(crate) current_guess: String,
    pub(crate) guesses: Vec<Word>,
    pub(crate) tile_rows: Vec<TileRow>,
    pub(crate) secret: Option<Word>,
    pub(crate) turn_score: Option<u32>,
    pub(crate) timed_out: bool,
}

impl PlayerState {
    pub(crate) fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Self::default()
        }
    }

    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Cumulative score across completed turns
    #[must_use]
    pub const fn score(&self) -> u32 {
        self.score
    }

    /// Letters typed but not yet submitted (0-5, lowercase)
    #[must_use]
    pub fn current_guess(&self) -> &str {
        &self.current_guess
    }

    #[must_use]
    pub fn guesses(&self) -> &[Word] {
        &self.guesses
    }

    #[must_use]
    pub fn tile_rows(&self) -> &[TileRow] {
        &self.tile_rows
    }

    /// Secret word for the current turn, once assigned
    #[must_use]
    pub const fn secret(&self) -> Option<&Word> {
        self.secret.as_ref()
    }

    /// Score locked in when this round's turn completed
    #[must_use]
    pub const fn turn_score(&self) -> Option<u32> {
        self.turn_score
    }

    /// Turn ended because the countdown ran out
    #[must_use]
    pub const fn timed_out(&self) -> bool {
        self.timed_out
    }

    /// Whether any submitted guess matched the secret
    #[must_use]
    pub fn solved(&self) -> bool {
        self.tile_rows.iter().any(is_solved_row)
    }

    /// Turn is over: solved, out of guesses, or out of time
    #[must_use]
    pub fn is_turn_complete(&self, max_guesses: usize) -> bool {
        self.solved() || self.guesses.len() >= max_guesses || self.timed_out
    }

    pub(crate) fn set_current_guess(&mut self, letters: String) {
        debug_assert!(letters.len() <= WORD_LENGTH);
        self.current_guess = letters;
    }

    pub(crate) fn record_guess(&mut self, guess: Word, row: TileRow) {
        self.guesses.push(guess);
        self.tile_rows.push(row);
        self.current_guess.clear();
    }

    pub(crate) fn finish_turn(&mut self, turn_score: u32) {
        self.turn_score = Some(turn_score);
        self.score += turn_score;
    }

    pub(crate) fn mark_timed_out(&mut self) {
        self.timed_out = true;
    }

    /// Clears per-round buffers, keeping name and cumulative score
    pub(crate) fn reset_round(&mut self, secret: Option<Word>) {
        self.current_guess.clear();
        self.guesses.clear();
        self.tile_rows.clear();
        self.secret = secret;
        self.turn_score = None;
        self.timed_out = false;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::TileState;

    #[test]
    fn other_flips_seats() {
        assert_eq!(PlayerId::Player1.other(), PlayerId::Player2);
        assert_eq!(PlayerId::Player2.other(), PlayerId::Player1);
    }

    #[test]
    fn turn_complete_on_solve() {
        let mut player = PlayerState::new("Ada");
        player.record_guess(Word::new("crane").unwrap(), [TileState::Absent; 5]);
        assert!(!player.is_turn_complete(6));
        player.record_guess(Word::new("slate").unwrap(), [TileState::Correct; 5]);
        assert!(player.is_turn_complete(6));
        assert!(player.solved());
    }

    #[test]
    fn turn_complete_on_guess_limit_or_timeout() {
        let mut player = PlayerState::new("Ada");
        player.record_guess(Word::new("crane").unwrap(), [TileState::Absent; 5]);
        assert!(player.is_turn_complete(1));

        let mut player = PlayerState::new("Ada");
        player.mark_timed_out();
        assert!(player.is_turn_complete(6));
    }

    #[test]
    fn reset_round_keeps_score_and_name() {
        let mut player = PlayerState::new("Ada");
        player.record_guess(Word::new("crane").unwrap(), [TileState::Correct; 5]);
        player.finish_turn(100);
        player.reset_round(None);

        assert_eq!(player.name(), "Ada");
        assert_eq!(player.score(), 100);
        assert!(player.guesses().is_empty());
        assert!(player.tile_rows().is_empty());
        assert_eq!(player.turn_score(), None);
    }
}

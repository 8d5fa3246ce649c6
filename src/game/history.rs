//! Completed-round records

use super::player::{PlayerId, PlayerState};
use crate::core::{Word, best_guess};

/// Outcome of a score comparison
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Winner {
    Player1,
    Player2,
    Tie,
}

impl Winner {
    /// Strict comparison; equal scores are a tie
    #[must_use]
    pub const fn from_scores(player1: u32, player2: u32) -> Self {
        if player1 > player2 {
            Self::Player1
        } else if player2 > player1 {
            Self::Player2
        } else {
            Self::Tie
        }
    }

    /// The winning seat, `None` on a tie
    #[must_use]
    pub const fn player(self) -> Option<PlayerId> {
        match self {
            Self::Player1 => Some(PlayerId::Player1),
            Self::Player2 => Some(PlayerId::Player2),
            Self::Tie => None,
        }
    }
}

/// One player's side of a finished round
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TurnSummary {
    pub secret: Word,
    pub guesses: Vec<Word>,
    pub best_guess: Option<Word>,
    pub score: u32,
    pub solved: bool,
    pub timed_out: bool,
}

impl TurnSummary {
    /// Snapshot a player whose turn has completed
    ///
    /// Returns `None` if the player was never assigned a secret.
    pub(crate) fn capture(player: &PlayerState) -> Option<Self> {
        let secret = player.secret()?.clone();
        Some(Self {
            secret,
            guesses: player.guesses().to_vec(),
            best_guess: best_guess(player.guesses(), player.tile_rows()).cloned(),
            score: player.turn_score().unwrap_or(0),
            solved: player.solved(),
            timed_out: player.timed_out(),
        })
    }
}

/// Immutable record appended when both players finish a round
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RoundRecord {
    pub round: u32,
    pub player1: TurnSummary,
    pub player2: TurnSummary,
    pub winner: Winner,
}

impl RoundRecord {
    #[must_use]
    pub const fn turn(&self, player: PlayerId) -> &TurnSummary {
        match player {
            PlayerId::Player1 => &self.player1,
            PlayerId::Player2 => &self.player2,
        }
    }
}

/// Final totals once the game is complete
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Standings {
    pub player1_score: u32,
    pub player2_score: u32,
    pub winner: Winner,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn strict_comparison() {
        assert_eq!(Winner::from_scores(30, 25), Winner::Player1);
        assert_eq!(Winner::from_scores(25, 30), Winner::Player2);
        assert_eq!(Winner::from_scores(100, 100), Winner::Tie);
        assert_eq!(Winner::from_scores(0, 0), Winner::Tie);
    }

    #[test]
    fn tie_has_no_player() {
        assert_eq!(Winner::Tie.player(), None);
        assert_eq!(Winner::Player2.player(), Some(PlayerId::Player2));
    }
}

//! Read-only game snapshot and derived queries
//!
//! Only [`GameMachine`](super::GameMachine) mutates a `GameState`. Everything a
//! presentation layer needs to decide what to draw is answered here, so UIs
//! and tests share one source of truth.

use super::config::{DEFAULT_MAX_ROUNDS, MAX_GUESSES};
use super::history::{RoundRecord, Standings, Winner};
use super::player::{PlayerId, PlayerState};
use super::timer::TurnId;
use crate::core::{TileState, Word};
use std::collections::BTreeMap;

/// Game lifecycle
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Lifecycle {
    #[default]
    NotStarted,
    Active,
    Complete,
}

/// Modal notification the presentation layer should show
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Dialog {
    /// The player found the secret word
    CorrectGuess { player: PlayerId },
    /// The player ran out of guesses or time; reveal the word
    ///
    /// `answer` is `None` while the other player still has to guess the same
    /// word this round.
    AnswerReveal {
        player: PlayerId,
        answer: Option<Word>,
        timed_out: bool,
    },
}

/// Everything about the game in progress
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameState {
    pub(crate) lifecycle: Lifecycle,
    pub(crate) players: [PlayerState; 2],
    pub(crate) current_player: PlayerId,
    pub(crate) current_round: u32,
    pub(crate) max_rounds: u32,
    pub(crate) max_guesses: usize,
    pub(crate) history: Vec<RoundRecord>,
    pub(crate) dialog: Option<Dialog>,
    pub(crate) time_remaining: Option<u32>,
    pub(crate) turn_id: TurnId,
}

impl Default for GameState {
    fn default() -> Self {
        Self {
            lifecycle: Lifecycle::NotStarted,
            players: [PlayerState::default(), PlayerState::default()],
            current_player: PlayerId::Player1,
            current_round: 1,
            max_rounds: DEFAULT_MAX_ROUNDS,
            max_guesses: MAX_GUESSES,
            history: Vec::new(),
            dialog: None,
            time_remaining: None,
            turn_id: TurnId(0),
        }
    }
}

impl GameState {
    #[must_use]
    pub const fn lifecycle(&self) -> Lifecycle {
        self.lifecycle
    }

    #[must_use]
    pub fn is_active(&self) -> bool {
        self.lifecycle == Lifecycle::Active
    }

    #[must_use]
    pub fn is_complete(&self) -> bool {
        self.lifecycle == Lifecycle::Complete
    }

    #[must_use]
    pub const fn player(&self, id: PlayerId) -> &PlayerState {
        &self.players[id.index()]
    }

    pub(crate) fn player_mut(&mut self, id: PlayerId) -> &mut PlayerState {
        &mut self.players[id.index()]
    }

    /// Seat whose turn it is
    #[must_use]
    pub const fn current_player(&self) -> PlayerId {
        self.current_player
    }

    /// State of the seat whose turn it is
    #[must_use]
    pub const fn acting_player(&self) -> &PlayerState {
        self.player(self.current_player)
    }

    #[must_use]
    pub const fn current_round(&self) -> u32 {
        self.current_round
    }

    #[must_use]
    pub const fn max_rounds(&self) -> u32 {
        self.max_rounds
    }

    #[must_use]
    pub const fn max_guesses(&self) -> usize {
        self.max_guesses
    }

    /// Completed rounds, oldest first
    #[must_use]
    pub fn history(&self) -> &[RoundRecord] {
        &self.history
    }

    #[must_use]
    pub const fn dialog(&self) -> Option<&Dialog> {
        self.dialog.as_ref()
    }

    /// Seconds left in the current turn when a countdown is running
    #[must_use]
    pub const fn time_remaining(&self) -> Option<u32> {
        self.time_remaining
    }

    /// Identity of the current turn, for scheduling countdown ticks
    #[must_use]
    pub const fn turn_id(&self) -> TurnId {
        self.turn_id
    }

    #[must_use]
    pub fn is_turn_complete(&self, id: PlayerId) -> bool {
        self.player(id).is_turn_complete(self.max_guesses)
    }

    /// Whether the acting player may still type and submit guesses
    #[must_use]
    pub fn is_current_turn_open(&self) -> bool {
        self.is_active() && !self.is_turn_complete(self.current_player)
    }

    /// Best known state of each letter the acting player has tried
    ///
    /// Keys are uppercase letters. A letter seen as `Correct` anywhere stays
    /// `Correct`; `Present` beats `Absent`.
    #[must_use]
    pub fn keyboard_states(&self) -> BTreeMap<char, TileState> {
        let player = self.acting_player();
        let mut states = BTreeMap::new();

        for (guess, row) in player.guesses().iter().zip(player.tile_rows()) {
            for (&letter, &state) in guess.chars().iter().zip(row) {
                let key = letter.to_ascii_uppercase() as char;
                states
                    .entry(key)
                    .and_modify(|best: &mut TileState| *best = (*best).max(state))
                    .or_insert(state);
            }
        }

        states
    }

    /// Cumulative totals and overall winner, once the game is complete
    #[must_use]
    pub fn standings(&self) -> Option<Standings> {
        if !self.is_complete() {
            return None;
        }
        let player1_score = self.player(PlayerId::Player1).score();
        let player2_score = self.player(PlayerId::Player2).score();
        Some(Standings {
            player1_score,
            player2_score,
            winner: Winner::from_scores(player1_score, player2_score),
        })
    }
}

//! Change notifications for presentation layers

use super::history::{RoundRecord, Standings};
use super::player::PlayerId;
use super::state::GameState;
use crate::core::GuessEvaluation;

/// Something that just happened to the game
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GameEvent {
    GameStarted,
    GuessSubmitted {
        player: PlayerId,
        evaluation: GuessEvaluation,
    },
    TurnCompleted {
        player: PlayerId,
        solved: bool,
        turn_score: u32,
    },
    TurnHandedOff {
        to: PlayerId,
    },
    RoundCompleted(RoundRecord),
    GameCompleted(Standings),
    TimerTicked {
        remaining: u32,
    },
    TimeExpired {
        player: PlayerId,
    },
    GameReset,
}

/// Receives every event after the state change it describes
pub trait GameObserver {
    fn on_event(&mut self, event: &GameEvent, state: &GameState);
}

impl<F> GameObserver for F
where
    F: FnMut(&GameEvent, &GameState),
{
    fn on_event(&mut self, event: &GameEvent, state: &GameState) {
        self(event, state);
    }
}

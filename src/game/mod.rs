//! Two-player duel: configuration, state, and the machine that drives it

pub mod config;
pub mod events;
pub mod history;
pub mod machine;
pub mod names;
pub mod player;
pub mod state;
pub mod timer;

pub use config::{ConfigError, DEFAULT_MAX_ROUNDS, GameConfig, MAX_GUESSES};
pub use events::{GameEvent, GameObserver};
pub use history::{RoundRecord, Standings, TurnSummary, Winner};
pub use machine::{GameMachine, GuessRejection, NextTurnOutcome, SubmitOutcome};
pub use names::{MAX_NAME_LEN, MIN_NAME_LEN, ValidationError, validate_names};
pub use player::{PlayerId, PlayerState};
pub use state::{Dialog, GameState, Lifecycle};
pub use timer::{TickOutcome, TurnId, Urgency, format_time};

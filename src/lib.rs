//! Wordle Duel
//!
//! Two players take turns guessing five-letter words over a fixed number of
//! rounds. The library holds the evaluator and the turn/round state machine;
//! the TUI and line-based front ends only read state and send inputs.
//!
//! # Quick Start
//!
//! ```rust
//! use wordle_duel::core::evaluate;
//! use wordle_duel::game::{GameConfig, GameMachine, SubmitOutcome};
//! use wordle_duel::wordlists::WordSequence;
//!
//! // Score a single guess
//! let evaluation = evaluate("spare", "stare").unwrap();
//! assert_eq!(evaluation.score(), 40);
//!
//! // Play a turn with a fixed secret
//! let words = WordSequence::from_strs(&["crane", "slate"]).unwrap();
//! let mut game = GameMachine::new(GameConfig::default(), words);
//! game.start_game("Ada", "Grace").unwrap();
//!
//! let outcome = game.submit_guess("crane");
//! assert!(matches!(outcome, SubmitOutcome::Accepted { turn_complete: true, .. }));
//! ```

// Core domain types
pub mod core;

// Turn and round state machine
pub mod game;

// Word lists
pub mod wordlists;

// Command implementations
pub mod commands;

// Terminal output formatting
pub mod output;

// Interactive TUI interface
pub mod interactive;

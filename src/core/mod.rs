//! Core domain types for the word duel
//!
//! This module contains the evaluator and scoring policy. Everything here is
//! pure and deterministic; the game state machine builds on top of it.

mod evaluation;
mod score;
mod tile;
mod word;

pub use evaluation::{EvaluationError, GuessEvaluation, WordRole, evaluate, row_score};
pub use score::{
    POINTS_ABSENT, POINTS_CORRECT, POINTS_PRESENT, SOLVED_TURN_SCORE, best_guess, is_solved_row,
    turn_score,
};
pub use tile::{Tile, TileRow, TileState, row_to_emoji};
pub use word::{WORD_LENGTH, Word, WordError};

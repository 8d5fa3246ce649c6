//! Guess checking command
//!
//! Scores one guess against a known answer without starting a game.

use crate::core::{EvaluationError, GuessEvaluation, evaluate};

/// Result of checking a guess
pub struct CheckResult {
    pub guess: String,
    pub answer: String,
    pub evaluation: GuessEvaluation,
}

/// Evaluate `guess` against `answer`
///
/// # Errors
///
/// Returns an error if either word is not five ASCII letters.
pub fn check_guess(guess: &str, answer: &str) -> Result<CheckResult, EvaluationError> {
    let evaluation = evaluate(guess, answer)?;
    Ok(CheckResult {
        guess: guess.trim().to_lowercase(),
        answer: answer.trim().to_lowercase(),
        evaluation,
    })
}

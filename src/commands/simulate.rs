//! Bot-versus-bot simulation
//!
//! Plays many complete games through the real state machine, in parallel, with
//! bots that only guess answers still consistent with the feedback they have
//! seen. Useful for checking score balance between seats and rule variants.

use crate::core::{GuessEvaluation, TileRow, Word};
use crate::game::{
    GameConfig, GameMachine, PlayerState, Standings, SubmitOutcome, ValidationError, Winner,
};
use crate::wordlists::{WordBank, WordLists};
use indicatif::{ProgressBar, ProgressStyle};
use rand::rngs::StdRng;
use rand::seq::IndexedRandom;
use rand::{Rng, SeedableRng};
use rayon::prelude::*;
use std::collections::BTreeMap;
use std::sync::Arc;
use std::time::{Duration, Instant};
use thiserror::Error;
use tracing::{debug, instrument, warn};

const BOT_NAMES: (&str, &str) = ("Bot One", "Bot Two");

#[derive(Debug, Error)]
pub enum SimulationError {
    #[error("bot names rejected: {0}")]
    Names(#[from] ValidationError),

    #[error("game with seed {seed} stopped before completing")]
    Stalled { seed: u64 },
}

/// Settings for a simulation run
#[derive(Debug, Clone)]
pub struct SimulationConfig {
    pub games: usize,
    pub seed: u64,
    pub game: GameConfig,
}

/// Outcome of one bot game
#[derive(Debug, Clone)]
pub struct BotGame {
    pub standings: Standings,
    /// Guess count of every solved turn
    pub solves: Vec<usize>,
    pub turns: usize,
}

/// Aggregate results of a simulation run
#[derive(Debug)]
pub struct SimulationResult {
    pub games: usize,
    pub player1_wins: usize,
    pub player2_wins: usize,
    pub ties: usize,
    pub average_player1_score: f64,
    pub average_player2_score: f64,
    pub turns: usize,
    pub solved_turns: usize,
    pub solve_distribution: BTreeMap<usize, usize>,
    pub duration: Duration,
    pub games_per_second: f64,
}

impl SimulationResult {
    /// Fraction of turns that ended in a solve
    #[must_use]
    pub fn solve_rate(&self) -> f64 {
        if self.turns == 0 {
            0.0
        } else {
            self.solved_turns as f64 / self.turns as f64
        }
    }
}

/// Run `config.games` bot games in parallel
///
/// Game `i` is seeded with `config.seed + i`, so a run is reproducible
/// regardless of thread scheduling.
///
/// # Errors
///
/// Returns the first game that could not be played to completion.
#[instrument(skip(lists, config), fields(games = config.games, seed = config.seed))]
pub fn run_simulation(
    lists: &Arc<WordLists>,
    config: &SimulationConfig,
) -> Result<SimulationResult, SimulationError> {
    let start = Instant::now();

    let pb = ProgressBar::new(config.games as u64);
    if let Ok(style) = ProgressStyle::default_bar()
        .template("{spinner:.green} [{bar:40.cyan/blue}] {pos}/{len} ({percent}%) | {msg}")
    {
        pb.set_style(style.progress_chars("█▓▒░"));
    }
    pb.set_message("Simulating");

    let games = (0..config.games as u64)
        .into_par_iter()
        .map(|i| {
            let game = play_bot_game(lists, &config.game, config.seed.wrapping_add(i));
            pb.inc(1);
            game
        })
        .collect::<Result<Vec<_>, _>>()?;

    pb.finish_with_message("Complete!");

    Ok(summarize(&games, start.elapsed()))
}

/// Play one full game between two bots
///
/// # Errors
///
/// Returns `SimulationError::Stalled` if a bot runs out of legal guesses.
pub fn play_bot_game(
    lists: &Arc<WordLists>,
    config: &GameConfig,
    seed: u64,
) -> Result<BotGame, SimulationError> {
    let mut rng = StdRng::seed_from_u64(seed);
    let words = WordBank::with_rng(Arc::clone(lists), StdRng::from_rng(&mut rng));
    let config = config.clone().with_turn_time_limit(None);
    let mut game = GameMachine::new(config, words);
    game.start_game(BOT_NAMES.0, BOT_NAMES.1)?;

    let mut solves = Vec::new();
    let mut turns = 0;

    while game.state().is_active() {
        let Some(guess) = bot_guess(game.state().acting_player(), lists.answers(), &mut rng)
        else {
            warn!(seed, "Bot has no guess left");
            return Err(SimulationError::Stalled { seed });
        };

        match game.submit_guess(guess.text()) {
            SubmitOutcome::Accepted {
                turn_complete: true,
                evaluation,
            } => {
                turns += 1;
                if evaluation.is_correct() {
                    solves.push(game.state().acting_player().guesses().len());
                }
                game.next_turn();
            }
            SubmitOutcome::Accepted { .. } => {}
            outcome => {
                warn!(seed, ?outcome, "Bot guess not accepted");
                return Err(SimulationError::Stalled { seed });
            }
        }
    }

    let standings = game
        .state()
        .standings()
        .ok_or(SimulationError::Stalled { seed })?;
    debug!(seed, ?standings, "Bot game finished");

    Ok(BotGame {
        standings,
        solves,
        turns,
    })
}

/// Random answer that would have produced every row the player has seen
fn bot_guess<'a, R: Rng>(
    player: &PlayerState,
    answers: &'a [Word],
    rng: &mut R,
) -> Option<&'a Word> {
    let history: Vec<(&Word, &TileRow)> =
        player.guesses().iter().zip(player.tile_rows()).collect();

    let candidates: Vec<&Word> = answers
        .iter()
        .filter(|candidate| {
            history.iter().all(|&(guess, row)| {
                guess != *candidate && GuessEvaluation::calculate(guess, candidate).states() == *row
            })
        })
        .collect();

    if let Some(&word) = candidates.choose(rng) {
        return Some(word);
    }
    answers.choose(rng)
}

fn summarize(games: &[BotGame], duration: Duration) -> SimulationResult {
    let mut player1_wins = 0;
    let mut player2_wins = 0;
    let mut ties = 0;
    let mut player1_total = 0u64;
    let mut player2_total = 0u64;
    let mut solve_distribution = BTreeMap::new();
    let mut turns = 0;
    let mut solved_turns = 0;

    for game in games {
        match game.standings.winner {
            Winner::Player1 => player1_wins += 1,
            Winner::Player2 => player2_wins += 1,
            Winner::Tie => ties += 1,
        }
        player1_total += u64::from(game.standings.player1_score);
        player2_total += u64::from(game.standings.player2_score);
        turns += game.turns;
        solved_turns += game.solves.len();
        for &guesses in &game.solves {
            *solve_distribution.entry(guesses).or_insert(0) += 1;
        }
    }

    let count = games.len().max(1) as f64;

    SimulationResult {
        games: games.len(),
        player1_wins,
        player2_wins,
        ties,
        average_player1_score: player1_total as f64 / count,
        average_player2_score: player2_total as f64 / count,
        turns,
        solved_turns,
        solve_distribution,
        duration,
        games_per_second: games.len() as f64 / duration.as_secs_f64().max(f64::EPSILON),
    }
}

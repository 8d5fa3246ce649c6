//! The duel state machine
//!
//! `GameMachine` is the only writer of [`GameState`]. Presentation layers call
//! its operations in response to input, read the state back, and may subscribe
//! observers to hear about every change. Operations that make no sense in the
//! current lifecycle are ignored rather than treated as errors.

use super::config::{ConfigError, GameConfig};
use super::events::{GameEvent, GameObserver};
use super::history::{RoundRecord, TurnSummary, Winner};
use super::names::{ValidationError, validate_names};
use super::player::{PlayerId, PlayerState};
use super::state::{Dialog, GameState, Lifecycle};
use super::timer::{TickOutcome, TurnId};
use crate::core::{GuessEvaluation, WORD_LENGTH, Word, WordError, turn_score};
use crate::wordlists::{WordBank, WordSource};
use thiserror::Error;
use tracing::{debug, info, instrument, warn};

/// Why a submitted guess was not evaluated
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GuessRejection {
    #[error("guess must be {len} letters, got {0}", len = WORD_LENGTH)]
    WrongLength(usize),

    #[error("guess may only contain letters a-z")]
    InvalidCharacters,

    #[error("\"{0}\" is not in the word list")]
    NotInWordList(String),
}

/// Result of submitting a guess
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmitOutcome {
    /// Game not active or the turn is already over
    Ignored,
    /// Invalid input; nothing changed
    Rejected(GuessRejection),
    /// The guess was recorded
    Accepted {
        evaluation: GuessEvaluation,
        turn_complete: bool,
    },
}

/// Result of advancing past a completed turn
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NextTurnOutcome {
    /// Game not active or the current turn is still open
    Ignored,
    /// The other player now acts in the same round
    HandedOff { to: PlayerId },
    /// Both players finished; the round was recorded
    RoundCompleted { winner: Winner, game_complete: bool },
}

/// Drives a two-player game
pub struct GameMachine<W: WordSource = WordBank> {
    config: GameConfig,
    words: W,
    state: GameState,
    observers: Vec<Box<dyn GameObserver>>,
    turn_seq: u64,
}

impl GameMachine<WordBank> {
    /// Machine over the embedded word lists
    #[must_use]
    pub fn embedded(config: GameConfig) -> Self {
        Self::new(config, WordBank::embedded())
    }
}

impl<W: WordSource> GameMachine<W> {
    /// Machine over `words` with an already validated `config`
    ///
    /// The `with_*` builders do not check ranges; use [`Self::try_new`] when
    /// the config has not been through [`GameConfig::validate`].
    #[must_use]
    pub fn new(config: GameConfig, words: W) -> Self {
        let state = GameState {
            max_rounds: config.max_rounds,
            max_guesses: config.max_guesses,
            ..GameState::default()
        };
        Self {
            config,
            words,
            state,
            observers: Vec::new(),
            turn_seq: 0,
        }
    }

    /// Validates `config` before building the machine
    ///
    /// # Errors
    /// Returns `ConfigError` when a value is out of range.
    pub fn try_new(config: GameConfig, words: W) -> Result<Self, ConfigError> {
        Ok(Self::new(config.validate()?, words))
    }

    #[must_use]
    pub const fn config(&self) -> &GameConfig {
        &self.config
    }

    #[must_use]
    pub const fn state(&self) -> &GameState {
        &self.state
    }

    #[must_use]
    pub const fn words(&self) -> &W {
        &self.words
    }

    /// Register an observer for every subsequent event
    pub fn subscribe(&mut self, observer: impl GameObserver + 'static) {
        self.observers.push(Box::new(observer));
    }

    /// Starts a new game with validated names
    ///
    /// Any previous game is discarded. Player 1 acts first in round 1.
    ///
    /// # Errors
    /// Returns `ValidationError` if either name breaks the lobby rules; the
    /// state is left untouched.
    #[instrument(skip(self))]
    pub fn start_game(&mut self, name1: &str, name2: &str) -> Result<(), ValidationError> {
        let (name1, name2) = validate_names(name1, name2)?;

        self.state = GameState {
            lifecycle: Lifecycle::Active,
            players: [PlayerState::new(name1), PlayerState::new(name2)],
            max_rounds: self.config.max_rounds,
            max_guesses: self.config.max_guesses,
            ..GameState::default()
        };
        self.begin_round();

        info!(
            max_rounds = self.config.max_rounds,
            shared_secret = self.config.shared_secret,
            "Game started"
        );
        self.emit(&GameEvent::GameStarted);
        Ok(())
    }

    /// Replaces the acting player's typing buffer
    ///
    /// Non-letters are dropped, letters are lowercased and anything past five
    /// letters is cut off.
    pub fn update_current_guess(&mut self, letters: &str) {
        if !self.state.is_current_turn_open() {
            return;
        }
        let letters: String = letters
            .chars()
            .filter(char::is_ascii_alphabetic)
            .map(|c| c.to_ascii_lowercase())
            .take(WORD_LENGTH)
            .collect();
        let player = self.state.current_player;
        self.state.player_mut(player).set_current_guess(letters);
    }

    /// Appends one letter to the typing buffer
    pub fn push_letter(&mut self, letter: char) {
        let mut letters = self.state.acting_player().current_guess().to_string();
        letters.push(letter);
        self.update_current_guess(&letters);
    }

    /// Removes the last typed letter
    pub fn pop_letter(&mut self) {
        let mut letters = self.state.acting_player().current_guess().to_string();
        letters.pop();
        self.update_current_guess(&letters);
    }

    /// Submits the typing buffer as a guess
    pub fn submit_current_guess(&mut self) -> SubmitOutcome {
        let letters = self.state.acting_player().current_guess().to_string();
        self.submit_guess(&letters)
    }

    /// Evaluates `guess` against the acting player's secret and records it
    ///
    /// The turn completes on an exact match or on the last allowed guess.
    #[instrument(skip(self), fields(player = %self.state.current_player))]
    pub fn submit_guess(&mut self, guess: &str) -> SubmitOutcome {
        if !self.state.is_current_turn_open() {
            debug!("Guess ignored, no open turn");
            return SubmitOutcome::Ignored;
        }

        let word = match Word::new(guess) {
            Ok(word) => word,
            Err(WordError::InvalidLength(len)) => {
                return SubmitOutcome::Rejected(GuessRejection::WrongLength(len));
            }
            Err(WordError::InvalidCharacters) => {
                return SubmitOutcome::Rejected(GuessRejection::InvalidCharacters);
            }
        };

        if self.config.require_dictionary_word && !self.words.is_valid_guess_word(word.text()) {
            debug!(guess = word.text(), "Guess not in word list");
            return SubmitOutcome::Rejected(GuessRejection::NotInWordList(word.text().to_string()));
        }

        let player = self.state.current_player;
        let Some(secret) = self.state.player(player).secret().cloned() else {
            warn!("Acting player has no secret");
            return SubmitOutcome::Ignored;
        };

        let evaluation = GuessEvaluation::calculate(&word, &secret);
        debug!(guess = word.text(), score = evaluation.score(), "Guess evaluated");
        self.state
            .player_mut(player)
            .record_guess(word, evaluation.states());
        self.emit(&GameEvent::GuessSubmitted {
            player,
            evaluation: evaluation.clone(),
        });

        let turn_complete = self.state.is_turn_complete(player);
        if turn_complete {
            self.complete_turn(player);
        }

        SubmitOutcome::Accepted {
            evaluation,
            turn_complete,
        }
    }

    /// Advances past a completed turn
    ///
    /// Hands off to the other player if they have not played this round yet,
    /// otherwise records the round and either starts the next one or ends the
    /// game.
    #[instrument(skip(self), fields(round = self.state.current_round))]
    pub fn next_turn(&mut self) -> NextTurnOutcome {
        let current = self.state.current_player;
        if !self.state.is_active() || !self.state.is_turn_complete(current) {
            return NextTurnOutcome::Ignored;
        }

        self.state.dialog = None;
        let other = current.other();

        if self.state.player(other).turn_score().is_none() {
            let secret = if self.config.shared_secret {
                self.state.player(current).secret().cloned()
            } else {
                Some(self.words.pick_random_answer())
            };
            self.state.player_mut(other).reset_round(secret);
            self.state.current_player = other;
            self.begin_turn();

            debug!(to = %other, "Turn handed off");
            self.emit(&GameEvent::TurnHandedOff { to: other });
            return NextTurnOutcome::HandedOff { to: other };
        }

        let (Some(player1), Some(player2)) = (
            TurnSummary::capture(self.state.player(PlayerId::Player1)),
            TurnSummary::capture(self.state.player(PlayerId::Player2)),
        ) else {
            warn!("Round finished without both secrets assigned");
            return NextTurnOutcome::Ignored;
        };

        let winner = Winner::from_scores(player1.score, player2.score);
        let record = RoundRecord {
            round: self.state.current_round,
            player1,
            player2,
            winner,
        };
        info!(?winner, "Round completed");
        self.state.history.push(record.clone());
        self.emit(&GameEvent::RoundCompleted(record));

        if self.state.current_round >= self.state.max_rounds {
            self.state.lifecycle = Lifecycle::Complete;
            self.state.time_remaining = None;
            if let Some(standings) = self.state.standings() {
                info!(?standings, "Game completed");
                self.emit(&GameEvent::GameCompleted(standings));
            }
            return NextTurnOutcome::RoundCompleted {
                winner,
                game_complete: true,
            };
        }

        self.state.current_round += 1;
        self.begin_round();
        NextTurnOutcome::RoundCompleted {
            winner,
            game_complete: false,
        }
    }

    /// Dismisses the current dialog without advancing
    pub fn close_dialog(&mut self) {
        self.state.dialog = None;
    }

    /// One second of countdown for the turn identified by `turn_id`
    ///
    /// Reaching zero completes the turn exactly as running out of guesses
    /// would, keeping whatever was scored so far.
    pub fn tick(&mut self, turn_id: TurnId) -> TickOutcome {
        if turn_id != self.state.turn_id || !self.state.is_current_turn_open() {
            return TickOutcome::Ignored;
        }
        let Some(remaining) = self.state.time_remaining else {
            return TickOutcome::Ignored;
        };

        let remaining = remaining.saturating_sub(1);
        if remaining > 0 {
            self.state.time_remaining = Some(remaining);
            self.emit(&GameEvent::TimerTicked { remaining });
            return TickOutcome::Ticked(remaining);
        }

        let player = self.state.current_player;
        info!(%player, "Turn timed out");
        self.state.time_remaining = Some(0);
        self.state.player_mut(player).mark_timed_out();
        self.emit(&GameEvent::TimeExpired { player });
        self.complete_turn(player);
        TickOutcome::Expired
    }

    /// Discards the game and returns to the lobby
    pub fn reset_game(&mut self) {
        self.state = GameState {
            max_rounds: self.config.max_rounds,
            max_guesses: self.config.max_guesses,
            ..GameState::default()
        };
        info!("Game reset");
        self.emit(&GameEvent::GameReset);
    }

    /// Draws secrets for a fresh round and gives player 1 the first turn
    fn begin_round(&mut self) {
        let secret = self.words.pick_random_answer();
        let second = self.config.shared_secret.then(|| secret.clone());
        debug!(round = self.state.current_round, "Round started");

        self.state
            .player_mut(PlayerId::Player1)
            .reset_round(Some(secret));
        self.state.player_mut(PlayerId::Player2).reset_round(second);
        self.state.current_player = PlayerId::Player1;
        self.state.dialog = None;
        self.begin_turn();
    }

    /// New turn identity and a full countdown
    fn begin_turn(&mut self) {
        self.turn_seq += 1;
        self.state.turn_id = TurnId(self.turn_seq);
        self.state.time_remaining = self.config.turn_time_limit;
    }

    fn complete_turn(&mut self, player: PlayerId) {
        let withhold = self.withholds_answer(player);
        let state = self.state.player_mut(player);
        let score = turn_score(state.tile_rows());
        state.finish_turn(score);
        let solved = state.solved();
        let timed_out = state.timed_out();
        let secret = state.secret().cloned();

        self.state.time_remaining = None;
        self.state.dialog = if solved {
            Some(Dialog::CorrectGuess { player })
        } else {
            secret.map(|secret| Dialog::AnswerReveal {
                player,
                answer: (!withhold).then_some(secret),
                timed_out,
            })
        };

        info!(%player, solved, score, "Turn completed");
        self.emit(&GameEvent::TurnCompleted {
            player,
            solved,
            turn_score: score,
        });
    }

    /// Shared word the other player has not played yet this round
    fn withholds_answer(&self, player: PlayerId) -> bool {
        self.config.shared_secret && self.state.player(player.other()).turn_score().is_none()
    }

    fn emit(&mut self, event: &GameEvent) {
        let state = &self.state;
        for observer in &mut self.observers {
            observer.on_event(event, state);
        }
    }
}

//! Simple interactive CLI mode
//!
//! Line-based two-player game on stdin/stdout, without the TUI.

use crate::game::{
    Dialog, GameMachine, NextTurnOutcome, SubmitOutcome, TickOutcome, TurnId, format_time,
};
use crate::output::{print_guess_row, print_round_record, print_standings};
use crate::wordlists::WordSource;
use colored::Colorize;
use std::io::{self, Write};
use std::time::Instant;

/// Countdown bookkeeping for line-based play
///
/// Input blocks, so elapsed seconds are fed to the machine in one burst
/// whenever the player hits Enter.
struct TurnClock {
    turn_id: TurnId,
    started: Instant,
    ticks_sent: u64,
}

impl TurnClock {
    fn new(turn_id: TurnId) -> Self {
        Self {
            turn_id,
            started: Instant::now(),
            ticks_sent: 0,
        }
    }

    /// Sends one tick per whole elapsed second; true if time ran out
    fn catch_up<W: WordSource>(&mut self, game: &mut GameMachine<W>) -> bool {
        let elapsed = self.started.elapsed().as_secs();
        while self.ticks_sent < elapsed {
            self.ticks_sent += 1;
            match game.tick(self.turn_id) {
                TickOutcome::Expired => return true,
                TickOutcome::Ignored => return false,
                TickOutcome::Ticked(_) => {}
            }
        }
        false
    }
}

/// Run the simple interactive CLI mode
///
/// # Errors
///
/// Returns an error if there's an I/O error reading user input.
pub fn run_simple<W: WordSource>(game: &mut GameMachine<W>) -> io::Result<()> {
    println!("\n╔══════════════════════════════════════════════════════════════╗");
    println!("║                  Wordle Duel - Simple Mode                   ║");
    println!("╚══════════════════════════════════════════════════════════════╝\n");

    println!("Two players take turns guessing their own secret word.");
    println!("Correct letters score 10, misplaced letters 5; a solve scores 100.");
    println!("Commands: 'quit' to exit, 'new' to return to the lobby\n");

    loop {
        if !lobby(game)? {
            return Ok(());
        }

        match play(game)? {
            Flow::Quit => {
                println!("\n👋 Thanks for playing!\n");
                return Ok(());
            }
            Flow::Lobby => {
                game.reset_game();
                continue;
            }
            Flow::Finished => {}
        }

        print_standings(game.state());

        match get_user_input("Play again? (yes/no)")?
            .to_lowercase()
            .as_str()
        {
            "yes" | "y" => {
                game.reset_game();
                println!("\n🔄 Back to the lobby!\n");
            }
            _ => {
                println!("\n👋 Thanks for playing!\n");
                return Ok(());
            }
        }
    }
}

enum Flow {
    Finished,
    Lobby,
    Quit,
}

/// Prompts for names until the game starts; false if the user quit
fn lobby<W: WordSource>(game: &mut GameMachine<W>) -> io::Result<bool> {
    loop {
        let name1 = get_user_input("Player 1 name")?;
        if is_quit(&name1) {
            return Ok(false);
        }
        let name2 = get_user_input("Player 2 name")?;
        if is_quit(&name2) {
            return Ok(false);
        }

        match game.start_game(&name1, &name2) {
            Ok(()) => return Ok(true),
            Err(err) => println!("❌ {err}\n"),
        }
    }
}

fn play<W: WordSource>(game: &mut GameMachine<W>) -> io::Result<Flow> {
    let mut clock: Option<TurnClock> = None;

    while game.state().is_active() {
        let state = game.state();
        let seat = state.current_player();
        let player = state.acting_player();

        if clock.as_ref().map(|c| c.turn_id) != Some(state.turn_id()) {
            clock = Some(TurnClock::new(state.turn_id()));
            println!("{}", "─".repeat(60).cyan());
            println!(
                "Round {}/{}: {} ({seat}) to play, score {}",
                state.current_round(),
                state.max_rounds(),
                player.name().bright_yellow().bold(),
                player.score()
            );
            if let Some(limit) = state.time_remaining() {
                println!("You have {} for this turn.", format_time(limit));
            }
            println!("{}", "─".repeat(60).cyan());
        }

        if state.is_current_turn_open() {
            let prompt = format!(
                "Guess {}/{}",
                player.guesses().len() + 1,
                state.max_guesses()
            );
            let input = get_user_input(&prompt)?;

            match input.to_lowercase().as_str() {
                "quit" | "q" | "exit" => return Ok(Flow::Quit),
                "new" => return Ok(Flow::Lobby),
                _ => {}
            }

            if clock.as_mut().is_some_and(|c| c.catch_up(game)) {
                println!("⏰ Time's up! That guess did not count.");
            } else {
                match game.submit_guess(&input) {
                    SubmitOutcome::Rejected(reason) => println!("❌ {reason}"),
                    SubmitOutcome::Accepted { evaluation, .. } => print_guess_row(&evaluation),
                    SubmitOutcome::Ignored => {}
                }
                if let Some(remaining) = game.state().time_remaining() {
                    println!("   {} left", format_time(remaining));
                }
            }
            continue;
        }

        announce_turn_end(game);
        get_user_input("Press Enter to continue")?;

        match game.next_turn() {
            NextTurnOutcome::HandedOff { to } => {
                let name = game.state().player(to).name();
                println!("\n🔁 Hand over to {}!\n", name.bright_cyan().bold());
            }
            NextTurnOutcome::RoundCompleted { .. } => {
                if let Some(record) = game.state().history().last() {
                    print_round_record(record, game.state());
                }
            }
            NextTurnOutcome::Ignored => {}
        }
    }

    Ok(Flow::Finished)
}

fn announce_turn_end<W: WordSource>(game: &GameMachine<W>) {
    let state = game.state();
    let player = state.acting_player();

    match state.dialog() {
        Some(Dialog::CorrectGuess { .. }) => {
            println!(
                "\n{}",
                format!(
                    "🎉 {} solved it in {}!",
                    player.name(),
                    player.guesses().len()
                )
                .green()
                .bold()
            );
        }
        Some(Dialog::AnswerReveal {
            player: seat,
            answer,
            timed_out,
        }) => {
            let reason = if *timed_out { "Out of time" } else { "Out of guesses" };
            let reveal = answer.as_ref().map_or_else(
                || {
                    format!(
                        "The word stays hidden until {} has played.",
                        state.player(seat.other()).name()
                    )
                },
                |answer| {
                    format!(
                        "The word was {}.",
                        answer.text().to_uppercase().bright_yellow().bold()
                    )
                },
            );
            println!("\n{} {reveal}", format!("❌ {reason}!").red().bold());
        }
        None => {}
    }

    if let Some(score) = player.turn_score() {
        println!("Turn score: {}", score.to_string().bright_cyan().bold());
    }
}

fn is_quit(input: &str) -> bool {
    matches!(input.to_lowercase().as_str(), "quit" | "q" | "exit")
}

/// Get user input with a prompt
fn get_user_input(prompt: &str) -> io::Result<String> {
    print!("{prompt}: ");
    io::stdout().flush()?;

    let mut input = String::new();
    io::stdin().read_line(&mut input)?;

    Ok(input.trim().to_string())
}

//! Display functions for command results

use super::formatters::{colored_row, create_progress_bar};
use crate::commands::{CheckResult, SimulationResult};
use crate::core::{GuessEvaluation, row_to_emoji};
use crate::game::{GameState, PlayerId, RoundRecord, Winner};
use colored::Colorize;

/// Print one evaluated guess as colored tiles with its score
pub fn print_guess_row(evaluation: &GuessEvaluation) {
    println!(
        "   {}  {} pts",
        colored_row(evaluation.tiles()),
        evaluation.score()
    );
}

/// Print the result of checking a guess
pub fn print_check_result(result: &CheckResult) {
    println!("\n{}", "─".repeat(60).cyan());
    println!(
        "Guess {} against {}",
        result.guess.to_uppercase().bright_yellow().bold(),
        result.answer.to_uppercase().bright_yellow().bold()
    );
    println!("{}", "─".repeat(60).cyan());

    println!();
    print_guess_row(&result.evaluation);
    println!("   {}", row_to_emoji(&result.evaluation.states()));
    println!(
        "\n   Correct: {}  Present: {}",
        result.evaluation.count_correct().to_string().green(),
        result.evaluation.count_present().to_string().yellow()
    );

    if result.evaluation.is_correct() {
        println!("\n{}", "✅ Exact match!".green().bold());
    }
}

fn winner_label(winner: Winner, state: &GameState) -> String {
    winner.player().map_or_else(
        || "Tie".to_string(),
        |id| format!("{} wins", state.player(id).name()),
    )
}

/// Print a finished round
pub fn print_round_record(record: &RoundRecord, state: &GameState) {
    println!("\n{}", "═".repeat(60).cyan());
    println!(
        " {} ",
        format!("ROUND {} RESULTS", record.round).bright_cyan().bold()
    );
    println!("{}", "═".repeat(60).cyan());

    for id in PlayerId::BOTH {
        let turn = record.turn(id);
        let best = turn
            .best_guess
            .as_ref()
            .map_or_else(|| "-".to_string(), |w| w.text().to_uppercase());
        let status = if turn.solved {
            format!("solved in {}", turn.guesses.len()).green()
        } else if turn.timed_out {
            "timed out".red()
        } else {
            "missed".red()
        };

        println!(
            "   {:<20} word {}  best {}  {:>3} pts  {}",
            state.player(id).name(),
            turn.secret.text().to_uppercase().bright_yellow(),
            best,
            turn.score,
            status
        );
    }

    println!(
        "\n   {}",
        winner_label(record.winner, state).bright_green().bold()
    );
}

/// Print final totals and the overall winner
pub fn print_standings(state: &GameState) {
    let Some(standings) = state.standings() else {
        return;
    };

    println!("\n{}", "═".repeat(60).cyan());
    println!(" {} ", "FINAL STANDINGS".bright_cyan().bold());
    println!("{}", "═".repeat(60).cyan());

    let top = standings.player1_score.max(standings.player2_score);
    for (id, score) in [
        (PlayerId::Player1, standings.player1_score),
        (PlayerId::Player2, standings.player2_score),
    ] {
        let bar = create_progress_bar(f64::from(score), f64::from(top), 30);
        println!(
            "   {:<20} {} {}",
            state.player(id).name(),
            bar.green(),
            score.to_string().bright_yellow().bold()
        );
    }

    let headline = match standings.winner {
        Winner::Tie => "🤝 It's a tie!".to_string(),
        winner => format!("🏆 {}!", winner_label(winner, state)),
    };
    println!("\n   {}", headline.bright_green().bold());
}

/// Print the result of a bot simulation
pub fn print_simulation_result(result: &SimulationResult) {
    println!("\n{}", "═".repeat(60).cyan());
    println!(" {} ", "SIMULATION RESULTS".bright_cyan().bold());
    println!("{}", "═".repeat(60).cyan());

    println!("\n📊 {}", "Outcomes:".bright_cyan().bold());
    println!("   Games played:     {}", result.games);
    let games = result.games.max(1) as f64;
    for (label, count) in [
        ("Player 1 wins:", result.player1_wins),
        ("Player 2 wins:", result.player2_wins),
        ("Ties:", result.ties),
    ] {
        let pct = count as f64 / games * 100.0;
        println!("   {label:<17} {count:5} ({pct:5.1}%)");
    }
    println!(
        "   Average scores:   {} vs {}",
        format!("{:.1}", result.average_player1_score).bright_yellow(),
        format!("{:.1}", result.average_player2_score).bright_yellow()
    );
    println!(
        "   Solve rate:       {}",
        format!("{:.1}%", result.solve_rate() * 100.0).green()
    );
    println!("   Time taken:       {:.2}s", result.duration.as_secs_f64());
    println!("   Games/second:     {:.1}", result.games_per_second);

    println!("\n📈 {}", "Solved on guess:".bright_cyan().bold());
    let solved = result.solved_turns.max(1) as f64;
    for (&guesses, &count) in &result.solve_distribution {
        let pct = count as f64 / solved * 100.0;
        let bar_width = (pct / 2.5) as usize;
        let bar = format!(
            "{}{}",
            "█".repeat(bar_width).green(),
            "░"
                .repeat(40_usize.saturating_sub(bar_width))
                .bright_black()
        );
        println!("   {guesses}: {bar} {count:5} ({pct:5.1}%)");
    }
}

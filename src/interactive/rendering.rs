//! TUI rendering with ratatui
//!
//! Lobby, board, and results views for the duel.

use super::app::{App, MessageStyle, Screen};
use crate::core::{TileState, WORD_LENGTH};
use crate::game::{Dialog, GameState, PlayerId, Urgency, Winner, format_time};
use crate::wordlists::WordSource;
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Clear, Gauge, List, ListItem, Paragraph, Row, Table},
};
use std::collections::BTreeMap;

const KEYBOARD_ROWS: [&str; 3] = ["QWERTYUIOP", "ASDFGHJKL", "ZXCVBNM"];

/// Main UI rendering function
pub fn ui<W: WordSource>(f: &mut Frame, app: &App<W>) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Header
            Constraint::Min(10),   // Main content
            Constraint::Length(3), // Status bar
        ])
        .split(f.area());

    render_header(f, chunks[0]);

    match app.screen() {
        Screen::Lobby => render_lobby(f, app, chunks[1]),
        Screen::Playing => render_game(f, app, chunks[1]),
        Screen::Results => render_results(f, app, chunks[1]),
    }

    render_status(f, app, chunks[2]);

    if app.screen() == Screen::Playing
        && let Some(dialog) = app.state().dialog()
    {
        render_dialog(f, app.state(), dialog);
    }
}

fn render_header(f: &mut Frame, area: Rect) {
    let header = Paragraph::new("⚔️  WORDLE DUEL - Two Players, Five Letters")
        .style(
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        )
        .alignment(Alignment::Center)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded)
                .style(Style::default().fg(Color::Cyan)),
        );
    f.render_widget(header, area);
}

fn render_lobby<W: WordSource>(f: &mut Frame, app: &App<W>, area: Rect) {
    let area = centered_rect(60, 12, area);
    let mut lines = vec![Line::from("Enter both player names (2-20 characters)"), Line::from("")];

    for (id, name) in PlayerId::BOTH.into_iter().zip(&app.lobby.names) {
        let focused = app.lobby.focus == id;
        let style = if focused {
            Style::default()
                .fg(Color::Yellow)
                .add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(Color::White)
        };
        let cursor = if focused { "▏" } else { "" };
        lines.push(Line::from(vec![
            Span::styled(format!("{id}: "), style),
            Span::styled(format!("{name}{cursor}"), style),
        ]));
    }

    lines.push(Line::from(""));
    if let Some(error) = &app.lobby.error {
        lines.push(Line::styled(
            format!("❌ {error}"),
            Style::default().fg(Color::Red),
        ));
    }

    let form = Paragraph::new(lines).block(
        Block::default()
            .title(" New Game ")
            .borders(Borders::ALL)
            .border_type(BorderType::Double)
            .style(Style::default().fg(Color::Cyan)),
    );
    f.render_widget(form, area);
}

fn render_game<W: WordSource>(f: &mut Frame, app: &App<W>, area: Rect) {
    let main_chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage(50), // Board and keyboard
            Constraint::Percentage(50), // Scores and messages
        ])
        .split(area);

    let left = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(8), Constraint::Length(5)])
        .split(main_chunks[0]);

    let right = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(6), // Scoreboard
            Constraint::Length(3), // Timer
            Constraint::Min(4),    // Messages
        ])
        .split(main_chunks[1]);

    let state = app.state();
    render_board(f, state, left[0]);
    render_keyboard(f, &state.keyboard_states(), left[1]);
    render_scoreboard(f, state, right[0]);
    render_timer(f, state, right[1]);
    render_messages(f, app, right[2]);
}

fn tile_style(state: TileState) -> Style {
    let bg = match state {
        TileState::Correct => Color::Green,
        TileState::Present => Color::Yellow,
        TileState::Absent => Color::DarkGray,
    };
    Style::default()
        .fg(Color::Black)
        .bg(bg)
        .add_modifier(Modifier::BOLD)
}

fn render_board(f: &mut Frame, state: &GameState, area: Rect) {
    let player = state.acting_player();
    let mut lines = Vec::with_capacity(state.max_guesses());

    for (guess, row) in player.guesses().iter().zip(player.tile_rows()) {
        let spans: Vec<Span> = guess
            .chars()
            .iter()
            .zip(row)
            .flat_map(|(&letter, &tile)| {
                [
                    Span::styled(
                        format!(" {} ", letter.to_ascii_uppercase() as char),
                        tile_style(tile),
                    ),
                    Span::raw(" "),
                ]
            })
            .collect();
        lines.push(Line::from(spans));
    }

    if state.is_current_turn_open() {
        let typed: Vec<char> = player.current_guess().to_uppercase().chars().collect();
        let spans: Vec<Span> = (0..WORD_LENGTH)
            .flat_map(|i| {
                let cell = typed.get(i).map_or_else(|| " _ ".to_string(), |c| format!(" {c} "));
                [
                    Span::styled(cell, Style::default().fg(Color::White)),
                    Span::raw(" "),
                ]
            })
            .collect();
        lines.push(Line::from(spans));
    }

    while lines.len() < state.max_guesses() {
        lines.push(Line::styled(
            " · ".repeat(WORD_LENGTH),
            Style::default().fg(Color::DarkGray),
        ));
    }

    let title = format!(
        " {} - guess {}/{} ",
        player.name(),
        player.guesses().len().min(state.max_guesses()),
        state.max_guesses()
    );
    let board = Paragraph::new(lines)
        .alignment(Alignment::Center)
        .block(
            Block::default()
                .title(title)
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded),
        );
    f.render_widget(board, area);
}

fn render_keyboard(f: &mut Frame, keys: &BTreeMap<char, TileState>, area: Rect) {
    let lines: Vec<Line> = KEYBOARD_ROWS
        .iter()
        .map(|row| {
            let spans: Vec<Span> = row
                .chars()
                .map(|c| {
                    let style = keys
                        .get(&c)
                        .map_or_else(|| Style::default().fg(Color::White), |&s| tile_style(s));
                    Span::styled(format!(" {c} "), style)
                })
                .collect();
            Line::from(spans)
        })
        .collect();

    let keyboard = Paragraph::new(lines)
        .alignment(Alignment::Center)
        .block(Block::default().title(" Keyboard ").borders(Borders::ALL));
    f.render_widget(keyboard, area);
}

fn render_scoreboard(f: &mut Frame, state: &GameState, area: Rect) {
    let rows = PlayerId::BOTH.into_iter().map(|id| {
        let player = state.player(id);
        let acting = id == state.current_player();
        let marker = if acting { "▶" } else { " " };
        let style = if acting {
            Style::default()
                .fg(Color::Yellow)
                .add_modifier(Modifier::BOLD)
        } else {
            Style::default()
        };
        let turn = player
            .turn_score()
            .map_or_else(|| "-".to_string(), |s| s.to_string());
        Row::new(vec![
            marker.to_string(),
            player.name().to_string(),
            player.score().to_string(),
            turn,
        ])
        .style(style)
    });

    let table = Table::new(
        rows,
        [
            Constraint::Length(2),
            Constraint::Min(10),
            Constraint::Length(7),
            Constraint::Length(7),
        ],
    )
    .header(
        Row::new(vec!["", "Player", "Score", "Turn"])
            .style(Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD)),
    )
    .block(
        Block::default()
            .title(format!(
                " Round {}/{} ",
                state.current_round(),
                state.max_rounds()
            ))
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded),
    );
    f.render_widget(table, area);
}

fn render_timer(f: &mut Frame, state: &GameState, area: Rect) {
    let block = Block::default().title(" Timer ").borders(Borders::ALL);

    let Some(remaining) = state.time_remaining() else {
        let untimed = Paragraph::new("No time limit")
            .alignment(Alignment::Center)
            .style(Style::default().fg(Color::DarkGray))
            .block(block);
        f.render_widget(untimed, area);
        return;
    };

    let color = match Urgency::from_remaining(remaining) {
        Urgency::Relaxed => Color::Green,
        Urgency::Warning => Color::Yellow,
        Urgency::Critical => Color::Red,
    };
    let gauge = Gauge::default()
        .block(block)
        .gauge_style(Style::default().fg(color))
        // Full bar at one minute or more
        .percent((remaining.min(60) * 100 / 60) as u16)
        .label(format_time(remaining));
    f.render_widget(gauge, area);
}

fn render_messages<W: WordSource>(f: &mut Frame, app: &App<W>, area: Rect) {
    let messages: Vec<ListItem> = app
        .messages
        .iter()
        .rev()
        .map(|msg| {
            let style = match msg.style {
                MessageStyle::Info => Style::default().fg(Color::White),
                MessageStyle::Success => Style::default().fg(Color::Green),
                MessageStyle::Error => Style::default().fg(Color::Red),
            };
            ListItem::new(msg.text.clone()).style(style)
        })
        .collect();

    let messages_list =
        List::new(messages).block(Block::default().title(" Messages ").borders(Borders::ALL));

    f.render_widget(messages_list, area);
}

fn render_dialog(f: &mut Frame, state: &GameState, dialog: &Dialog) {
    let (title, body, color) = match dialog {
        Dialog::CorrectGuess { player } => {
            let p = state.player(*player);
            (
                " 🎉 SOLVED! 🎉 ",
                format!(
                    "{} found the word in {} {}!",
                    p.name(),
                    p.guesses().len(),
                    if p.guesses().len() == 1 { "guess" } else { "guesses" }
                ),
                Color::Green,
            )
        }
        Dialog::AnswerReveal {
            player,
            answer,
            timed_out,
        } => (
            if *timed_out {
                " ⏰ OUT OF TIME "
            } else {
                " OUT OF GUESSES "
            },
            answer.as_ref().map_or_else(
                || {
                    format!(
                        "The word stays hidden until {} has played",
                        state.player(player.other()).name()
                    )
                },
                |answer| {
                    format!(
                        "{}'s word was {}",
                        state.player(*player).name(),
                        answer.text().to_uppercase()
                    )
                },
            ),
            Color::Red,
        ),
    };

    let score = state
        .acting_player()
        .turn_score()
        .map_or_else(String::new, |s| format!("Turn score: {s}"));

    let area = centered_rect(50, 7, f.area());
    let popup = Paragraph::new(vec![
        Line::from(body),
        Line::from(score),
        Line::from(""),
        Line::styled(
            "Press Enter to continue",
            Style::default().fg(Color::DarkGray),
        ),
    ])
    .alignment(Alignment::Center)
    .block(
        Block::default()
            .title(title)
            .borders(Borders::ALL)
            .border_type(BorderType::Double)
            .style(Style::default().fg(color)),
    );

    f.render_widget(Clear, area);
    f.render_widget(popup, area);
}

fn render_results<W: WordSource>(f: &mut Frame, app: &App<W>, area: Rect) {
    let state = app.state();
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(5), Constraint::Min(5)])
        .split(area);

    let name = |id: PlayerId| state.player(id).name();

    let headline = match state.standings() {
        Some(standings) => {
            let winner = match standings.winner {
                Winner::Tie => "🤝 It's a tie!".to_string(),
                Winner::Player1 => format!("🏆 {} wins!", name(PlayerId::Player1)),
                Winner::Player2 => format!("🏆 {} wins!", name(PlayerId::Player2)),
            };
            vec![
                Line::styled(
                    winner,
                    Style::default()
                        .fg(Color::Green)
                        .add_modifier(Modifier::BOLD),
                ),
                Line::from(format!(
                    "{} {}  -  {} {}",
                    name(PlayerId::Player1),
                    standings.player1_score,
                    standings.player2_score,
                    name(PlayerId::Player2)
                )),
            ]
        }
        None => vec![Line::from("No results")],
    };

    let summary = Paragraph::new(headline)
        .alignment(Alignment::Center)
        .block(
            Block::default()
                .title(" Final Standings ")
                .borders(Borders::ALL)
                .border_type(BorderType::Double),
        );
    f.render_widget(summary, chunks[0]);

    let rows = state.history().iter().map(|record| {
        let cell = |id: PlayerId| {
            let turn = record.turn(id);
            let best = turn
                .best_guess
                .as_ref()
                .map_or_else(|| "-".to_string(), |w| w.text().to_uppercase());
            format!(
                "{} ({}) {} pts",
                turn.secret.text().to_uppercase(),
                best,
                turn.score
            )
        };
        let winner = match record.winner {
            Winner::Tie => "Tie".to_string(),
            Winner::Player1 => name(PlayerId::Player1).to_string(),
            Winner::Player2 => name(PlayerId::Player2).to_string(),
        };
        Row::new(vec![
            record.round.to_string(),
            cell(PlayerId::Player1),
            cell(PlayerId::Player2),
            winner,
        ])
    });

    let table = Table::new(
        rows,
        [
            Constraint::Length(6),
            Constraint::Percentage(35),
            Constraint::Percentage(35),
            Constraint::Min(8),
        ],
    )
    .header(
        Row::new(vec![
            "Round".to_string(),
            name(PlayerId::Player1).to_string(),
            name(PlayerId::Player2).to_string(),
            "Winner".to_string(),
        ])
        .style(Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD)),
    )
    .block(
        Block::default()
            .title(" Rounds: word (best guess) score ")
            .borders(Borders::ALL),
    );
    f.render_widget(table, chunks[1]);
}

fn render_status<W: WordSource>(f: &mut Frame, app: &App<W>, area: Rect) {
    let help_text = match app.screen() {
        Screen::Lobby => "Tab: Switch Field | Enter: Next / Start | Esc: Quit",
        Screen::Playing if app.state().is_current_turn_open() => {
            "Type letters | Backspace: Delete | Enter: Submit | Esc twice: Lobby"
        }
        Screen::Playing => "Enter: Continue | Esc: Close Dialog",
        Screen::Results => "n: New Game | q: Quit",
    };

    let help = Paragraph::new(help_text)
        .alignment(Alignment::Center)
        .style(Style::default().fg(Color::DarkGray))
        .block(Block::default().borders(Borders::TOP));
    f.render_widget(help, area);
}

/// Rectangle of `percent_x` width and `height` rows centered in `area`
fn centered_rect(percent_x: u16, height: u16, area: Rect) -> Rect {
    let vertical = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Fill(1),
            Constraint::Length(height),
            Constraint::Fill(1),
        ])
        .split(area);

    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage((100 - percent_x) / 2),
            Constraint::Percentage(percent_x),
            Constraint::Percentage((100 - percent_x) / 2),
        ])
        .split(vertical[1])[1]
}

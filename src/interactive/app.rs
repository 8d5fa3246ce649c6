//! TUI application state and logic

use crate::core::row_to_emoji;
use crate::game::{
    GameEvent, GameMachine, GameState, Lifecycle, MAX_NAME_LEN, NextTurnOutcome, PlayerId,
    SubmitOutcome, TurnId, Winner,
};
use crate::wordlists::{WordBank, WordSource};
use anyhow::Result;
use crossterm::{
    event::{
        self, DisableMouseCapture, EnableMouseCapture, Event, KeyCode, KeyEvent, KeyEventKind,
        KeyModifiers,
    },
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{Terminal, backend::CrosstermBackend};
use std::io;
use std::sync::mpsc::{self, Receiver};
use std::time::{Duration, Instant};
use tracing::debug;

const TICK_INTERVAL: Duration = Duration::from_secs(1);
const MAX_MESSAGES: usize = 6;

/// Which view to draw, derived from the game lifecycle
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Screen {
    Lobby,
    Playing,
    Results,
}

/// Name entry form shown before a game starts
#[derive(Debug, Clone)]
pub struct LobbyForm {
    pub names: [String; 2],
    pub focus: PlayerId,
    pub error: Option<String>,
}

impl Default for LobbyForm {
    fn default() -> Self {
        Self {
            names: [String::new(), String::new()],
            focus: PlayerId::Player1,
            error: None,
        }
    }
}

impl LobbyForm {
    fn focused_mut(&mut self) -> &mut String {
        match self.focus {
            PlayerId::Player1 => &mut self.names[0],
            PlayerId::Player2 => &mut self.names[1],
        }
    }
}

#[derive(Debug, Clone)]
pub struct Message {
    pub text: String,
    pub style: MessageStyle,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MessageStyle {
    Info,
    Success,
    Error,
}

/// One-second countdown schedule bound to a single turn
#[derive(Debug, Clone, Copy)]
struct Countdown {
    turn_id: TurnId,
    next_tick: Instant,
}

impl Countdown {
    fn new(turn_id: TurnId, now: Instant) -> Self {
        Self {
            turn_id,
            next_tick: now + TICK_INTERVAL,
        }
    }
}

/// Application state
pub struct App<W: WordSource = WordBank> {
    pub game: GameMachine<W>,
    pub lobby: LobbyForm,
    pub messages: Vec<Message>,
    pub should_quit: bool,
    /// Esc was pressed once mid-turn; a second Esc abandons the game
    pub confirm_abandon: bool,
    events: Receiver<GameEvent>,
    countdown: Option<Countdown>,
}

impl<W: WordSource> App<W> {
    #[must_use]
    pub fn new(mut game: GameMachine<W>) -> Self {
        let (tx, events) = mpsc::channel();
        game.subscribe(move |event: &GameEvent, _: &GameState| {
            // Receiver lives as long as the app
            let _ = tx.send(event.clone());
        });

        Self {
            game,
            lobby: LobbyForm::default(),
            messages: vec![Message {
                text: "Welcome! Enter both player names to begin.".to_string(),
                style: MessageStyle::Info,
            }],
            should_quit: false,
            confirm_abandon: false,
            events,
            countdown: None,
        }
    }

    #[must_use]
    pub fn state(&self) -> &GameState {
        self.game.state()
    }

    #[must_use]
    pub fn screen(&self) -> Screen {
        match self.state().lifecycle() {
            Lifecycle::NotStarted => Screen::Lobby,
            Lifecycle::Active => Screen::Playing,
            Lifecycle::Complete => Screen::Results,
        }
    }

    pub fn add_message(&mut self, text: &str, style: MessageStyle) {
        self.messages.push(Message {
            text: text.to_string(),
            style,
        });

        if self.messages.len() > MAX_MESSAGES {
            self.messages.remove(0);
        }
    }

    pub fn handle_key(&mut self, key: KeyEvent) {
        if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
            self.should_quit = true;
            return;
        }

        match self.screen() {
            Screen::Lobby => self.handle_lobby_key(key.code),
            Screen::Playing => self.handle_playing_key(key.code),
            Screen::Results => match key.code {
                KeyCode::Char('q') | KeyCode::Esc => self.should_quit = true,
                KeyCode::Char('n') | KeyCode::Enter => self.game.reset_game(),
                _ => {}
            },
        }

        self.drain_events();
    }

    fn handle_lobby_key(&mut self, code: KeyCode) {
        match code {
            KeyCode::Esc => self.should_quit = true,
            KeyCode::Tab | KeyCode::Down | KeyCode::Up => {
                self.lobby.focus = self.lobby.focus.other();
            }
            KeyCode::Backspace => {
                self.lobby.focused_mut().pop();
            }
            KeyCode::Char(c) => {
                let name = self.lobby.focused_mut();
                if name.chars().count() < MAX_NAME_LEN {
                    name.push(c);
                }
            }
            KeyCode::Enter if self.lobby.focus == PlayerId::Player1 => {
                self.lobby.focus = PlayerId::Player2;
            }
            KeyCode::Enter => self.start_game(),
            _ => {}
        }
    }

    fn start_game(&mut self) {
        let [name1, name2] = &self.lobby.names;
        match self.game.start_game(name1, name2) {
            Ok(()) => self.lobby.error = None,
            Err(err) => self.lobby.error = Some(err.to_string()),
        }
    }

    fn handle_playing_key(&mut self, code: KeyCode) {
        if !self.state().is_current_turn_open() {
            self.confirm_abandon = false;
            match code {
                KeyCode::Enter | KeyCode::Char(' ') => self.advance(),
                KeyCode::Esc => self.game.close_dialog(),
                _ => {}
            }
            return;
        }

        if code == KeyCode::Esc {
            if self.confirm_abandon {
                self.confirm_abandon = false;
                self.game.reset_game();
            } else {
                self.confirm_abandon = true;
                self.add_message("Press Esc again to abandon the game.", MessageStyle::Error);
            }
            return;
        }
        self.confirm_abandon = false;

        match code {
            KeyCode::Char(c) if c.is_ascii_alphabetic() => self.game.push_letter(c),
            KeyCode::Backspace => self.game.pop_letter(),
            KeyCode::Enter => self.submit(),
            _ => {}
        }
    }

    fn submit(&mut self) {
        match self.game.submit_current_guess() {
            SubmitOutcome::Rejected(reason) => {
                self.add_message(&reason.to_string(), MessageStyle::Error);
            }
            SubmitOutcome::Accepted { .. } | SubmitOutcome::Ignored => {}
        }
    }

    /// Closes the turn dialog and moves to the next turn or round
    fn advance(&mut self) {
        self.game.close_dialog();
        if let NextTurnOutcome::RoundCompleted {
            game_complete: true,
            ..
        } = self.game.next_turn()
        {
            debug!("Game complete, showing results");
        }
    }

    /// Sends due countdown ticks; returns how long until the next one
    pub fn on_tick(&mut self, now: Instant) -> Duration {
        let state = self.game.state();
        if state.time_remaining().is_none() || !state.is_current_turn_open() {
            self.countdown = None;
            return TICK_INTERVAL;
        }

        let turn_id = state.turn_id();
        let countdown = match self.countdown {
            Some(countdown) if countdown.turn_id == turn_id => countdown,
            _ => Countdown::new(turn_id, now),
        };

        let mut next = countdown;
        if now >= next.next_tick {
            self.game.tick(next.turn_id);
            next.next_tick += TICK_INTERVAL;
        }
        self.countdown = Some(next);
        self.drain_events();

        next.next_tick.saturating_duration_since(now)
    }

    /// Turns pending game events into log lines
    pub fn drain_events(&mut self) {
        while let Ok(event) = self.events.try_recv() {
            self.on_game_event(&event);
        }
    }

    fn name(&self, id: PlayerId) -> String {
        self.state().player(id).name().to_string()
    }

    fn on_game_event(&mut self, event: &GameEvent) {
        match event {
            GameEvent::GameStarted => {
                let first = self.name(PlayerId::Player1);
                self.messages.clear();
                self.add_message(&format!("Game on! {first} goes first."), MessageStyle::Info);
            }
            GameEvent::GuessSubmitted { player, evaluation } => {
                let text = format!(
                    "{}: {} {} (+{})",
                    self.name(*player),
                    evaluation
                        .tiles()
                        .iter()
                        .map(|t| t.display_letter())
                        .collect::<String>(),
                    row_to_emoji(&evaluation.states()),
                    evaluation.score()
                );
                self.add_message(&text, MessageStyle::Info);
            }
            GameEvent::TurnCompleted {
                player,
                solved,
                turn_score,
            } => {
                let (text, style) = if *solved {
                    (
                        format!("{} solved it! {turn_score} points", self.name(*player)),
                        MessageStyle::Success,
                    )
                } else {
                    (
                        format!("{}'s turn is over: {turn_score} points", self.name(*player)),
                        MessageStyle::Error,
                    )
                };
                self.add_message(&text, style);
            }
            GameEvent::TurnHandedOff { to } => {
                // Earlier lines spell out the previous player's guesses
                self.messages.clear();
                let text = format!("{}'s turn. No peeking!", self.name(*to));
                self.add_message(&text, MessageStyle::Info);
            }
            GameEvent::RoundCompleted(record) => {
                let text = match record.winner {
                    Winner::Tie => format!("Round {} is a tie", record.round),
                    Winner::Player1 => {
                        format!("Round {} goes to {}", record.round, self.name(PlayerId::Player1))
                    }
                    Winner::Player2 => {
                        format!("Round {} goes to {}", record.round, self.name(PlayerId::Player2))
                    }
                };
                self.add_message(&text, MessageStyle::Success);
            }
            GameEvent::GameCompleted(_) => {
                self.add_message("Game over! Press 'n' for a new game.", MessageStyle::Success);
            }
            GameEvent::TimeExpired { player } => {
                let text = format!("⏰ Time's up for {}!", self.name(*player));
                self.add_message(&text, MessageStyle::Error);
            }
            GameEvent::TimerTicked { .. } => {}
            GameEvent::GameReset => {
                self.messages.clear();
                self.lobby.error = None;
                self.add_message("Enter both player names to begin.", MessageStyle::Info);
            }
        }
    }
}

/// Run the TUI application
///
/// # Errors
///
/// Returns an error if terminal setup/cleanup fails or if there's an I/O error
/// during rendering or event handling.
pub fn run_tui<W: WordSource>(app: App<W>) -> Result<()> {
    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    // Run app
    let res = run_app(&mut terminal, app);

    // Restore terminal
    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )?;
    terminal.show_cursor()?;

    if let Err(err) = res {
        eprintln!("Error: {err}");
    }

    Ok(())
}

fn run_app<B: ratatui::backend::Backend, W: WordSource>(
    terminal: &mut Terminal<B>,
    mut app: App<W>,
) -> Result<()> {
    loop {
        terminal.draw(|f| super::rendering::ui(f, &app))?;

        let timeout = app.on_tick(Instant::now());

        // Only process key press events (fixes Windows double-input bug)
        if event::poll(timeout)?
            && let Event::Key(key) = event::read()?
            && key.kind == KeyEventKind::Press
        {
            app.handle_key(key);
        }

        if app.should_quit {
            break;
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::GameConfig;
    use crate::wordlists::WordSequence;

    fn app(config: GameConfig) -> App<WordSequence> {
        let words = WordSequence::from_strs(&["crane", "slate"]).unwrap();
        App::new(GameMachine::new(config, words))
    }

    fn press(app: &mut App<WordSequence>, code: KeyCode) {
        app.handle_key(KeyEvent::new(code, KeyModifiers::NONE));
    }

    fn type_text(app: &mut App<WordSequence>, text: &str) {
        for c in text.chars() {
            press(app, KeyCode::Char(c));
        }
    }

    fn start(app: &mut App<WordSequence>) {
        type_text(app, "Ada");
        press(app, KeyCode::Enter);
        type_text(app, "Grace");
        press(app, KeyCode::Enter);
    }

    #[test]
    fn lobby_starts_game() {
        let mut app = app(GameConfig::default());
        assert_eq!(app.screen(), Screen::Lobby);

        start(&mut app);
        assert_eq!(app.screen(), Screen::Playing);
        assert_eq!(app.state().player(PlayerId::Player2).name(), "Grace");
        assert!(app.messages[0].text.contains("Ada goes first"));
    }

    #[test]
    fn lobby_shows_validation_error() {
        let mut app = app(GameConfig::default());
        type_text(&mut app, "Ada");
        press(&mut app, KeyCode::Enter);
        type_text(&mut app, "ada");
        press(&mut app, KeyCode::Enter);

        assert_eq!(app.screen(), Screen::Lobby);
        assert_eq!(
            app.lobby.error.as_deref(),
            Some("player names must be different")
        );
    }

    #[test]
    fn typing_and_submitting_a_guess() {
        let mut app = app(GameConfig::default());
        start(&mut app);

        type_text(&mut app, "slatx");
        press(&mut app, KeyCode::Backspace);
        type_text(&mut app, "e");
        assert_eq!(app.state().acting_player().current_guess(), "slate");

        press(&mut app, KeyCode::Enter);
        assert_eq!(app.state().acting_player().guesses().len(), 1);
        assert!(
            app.messages
                .last()
                .is_some_and(|m| m.text.starts_with("Ada: SLATE"))
        );
    }

    #[test]
    fn rejected_guess_is_reported() {
        let mut app = app(GameConfig::default());
        start(&mut app);

        type_text(&mut app, "abc");
        press(&mut app, KeyCode::Enter);

        let last = app.messages.last().unwrap();
        assert_eq!(last.style, MessageStyle::Error);
        assert!(app.state().acting_player().guesses().is_empty());
    }

    #[test]
    fn enter_on_dialog_hands_off() {
        let mut app = app(GameConfig::default());
        start(&mut app);

        type_text(&mut app, "crane");
        press(&mut app, KeyCode::Enter);
        assert!(app.state().dialog().is_some());

        press(&mut app, KeyCode::Enter);
        assert_eq!(app.state().dialog(), None);
        assert_eq!(app.state().current_player(), PlayerId::Player2);
    }

    #[test]
    fn hand_off_clears_previous_guesses() {
        let mut app = app(GameConfig::default().with_shared_secret(true));
        start(&mut app);

        type_text(&mut app, "slate");
        press(&mut app, KeyCode::Enter);
        type_text(&mut app, "crane");
        press(&mut app, KeyCode::Enter);
        press(&mut app, KeyCode::Enter);

        assert_eq!(app.state().current_player(), PlayerId::Player2);
        assert!(app.messages.iter().all(|m| !m.text.contains("CRANE")));
        assert!(app.messages.iter().all(|m| !m.text.contains("SLATE")));
        assert!(app.messages[0].text.contains("Grace's turn"));
    }

    #[test]
    fn escape_needs_confirming_mid_turn() {
        let mut app = app(GameConfig::default());
        start(&mut app);
        type_text(&mut app, "slate");
        press(&mut app, KeyCode::Enter);

        press(&mut app, KeyCode::Esc);
        assert_eq!(app.screen(), Screen::Playing);
        assert!(app.confirm_abandon);

        type_text(&mut app, "c");
        assert!(!app.confirm_abandon);
        press(&mut app, KeyCode::Esc);
        assert_eq!(app.screen(), Screen::Playing);
        assert_eq!(app.state().acting_player().guesses().len(), 1);

        press(&mut app, KeyCode::Esc);
        assert_eq!(app.screen(), Screen::Lobby);
    }

    #[test]
    fn countdown_ticks_once_per_second() {
        let mut app = app(GameConfig::default().with_turn_time_limit(Some(5)));
        start(&mut app);

        let t0 = Instant::now();
        app.on_tick(t0);
        assert_eq!(app.state().time_remaining(), Some(5));

        app.on_tick(t0 + Duration::from_millis(1500));
        assert_eq!(app.state().time_remaining(), Some(4));

        let wait = app.on_tick(t0 + Duration::from_millis(1600));
        assert_eq!(app.state().time_remaining(), Some(4));
        assert_eq!(wait, Duration::from_millis(400));
    }

    #[test]
    fn results_screen_returns_to_lobby() {
        let mut app = app(GameConfig::default().with_max_rounds(1));
        start(&mut app);
        type_text(&mut app, "crane");
        press(&mut app, KeyCode::Enter);
        press(&mut app, KeyCode::Enter);
        type_text(&mut app, "slate");
        press(&mut app, KeyCode::Enter);
        press(&mut app, KeyCode::Enter);
        assert_eq!(app.screen(), Screen::Results);

        press(&mut app, KeyCode::Char('n'));
        assert_eq!(app.screen(), Screen::Lobby);
    }
}

//! TUI application state and logic

use crate::core::PuzzleSession;
use crate::engine::Accepted;
use crate::engine::ledger::{consumed_positions, remaining_letters};
use crate::game::{FinishSummary, GameError, GameService};
use crate::store::MemoryStore;
use anyhow::Result;
use crossterm::{
    event::{
        self, DisableMouseCapture, EnableMouseCapture, Event, KeyCode, KeyEventKind, KeyModifiers,
    },
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{Terminal, backend::CrosstermBackend};
use std::io;

/// Application state
pub struct App {
    pub service: GameService<MemoryStore>,
    pub player: String,
    pub puzzle_length: usize,
    pub session: PuzzleSession,
    pub input_mode: InputMode,
    pub input_buffer: String,
    pub accepted: Vec<Accepted>,
    pub summary: Option<FinishSummary>,
    pub messages: Vec<Message>,
    pub stats: Statistics,
    pub should_quit: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputMode {
    Playing,
    Finished,
}

#[derive(Debug, Clone)]
pub struct Message {
    pub text: String,
    pub style: MessageStyle,
}

#[derive(Debug, Clone)]
pub enum MessageStyle {
    Info,
    Success,
    Error,
}

#[derive(Debug, Default, Clone)]
pub struct Statistics {
    pub games_played: usize,
    pub best_score: u32,
}

impl App {
    /// Start the first game
    ///
    /// # Errors
    ///
    /// Fails if the player name is rejected or the session cannot be stored.
    pub fn new(
        service: GameService<MemoryStore>,
        player: &str,
        puzzle_length: usize,
    ) -> Result<Self, GameError> {
        let session = service.start_random_session(player, puzzle_length, &mut rand::rng())?;

        let mut app = Self {
            service,
            player: player.to_string(),
            puzzle_length,
            session,
            input_mode: InputMode::Playing,
            input_buffer: String::new(),
            accepted: Vec::new(),
            summary: None,
            messages: Vec::new(),
            stats: Statistics::default(),
            should_quit: false,
        };
        app.add_message(
            "Welcome! Spell words from the letters; each letter can be used once.",
            MessageStyle::Info,
        );
        if !app.service.dictionary().is_available() {
            app.add_message(
                "Dictionary unavailable: every word will be rejected.",
                MessageStyle::Error,
            );
        }
        Ok(app)
    }

    pub fn submit_current(&mut self) {
        let word = std::mem::take(&mut self.input_buffer);
        if word.is_empty() {
            return;
        }

        match self.service.submit_word(self.session.id(), &word) {
            Ok(accepted) => {
                self.add_message(
                    &format!(
                        "{} +{} points",
                        accepted.word.to_uppercase(),
                        accepted.points
                    ),
                    MessageStyle::Success,
                );
                self.accepted.push(accepted);
            }
            Err(GameError::Rejected(rejection)) => {
                self.add_message(
                    &format!("{}: {rejection}", word.to_uppercase()),
                    MessageStyle::Error,
                );
            }
            Err(err) => self.add_message(&err.to_string(), MessageStyle::Error),
        }
        self.refresh_session();
    }

    pub fn finish(&mut self) {
        match self.service.finish_session(self.session.id()) {
            Ok(summary) => {
                self.stats.games_played += 1;
                self.stats.best_score = self.stats.best_score.max(summary.final_score);
                self.add_message(
                    &format!("Game over! Final score: {}", summary.final_score),
                    MessageStyle::Success,
                );
                self.add_message("Press 'n' for new game or 'q' to quit.", MessageStyle::Info);
                self.summary = Some(summary);
                self.input_mode = InputMode::Finished;
                self.input_buffer.clear();
            }
            Err(err) => self.add_message(&err.to_string(), MessageStyle::Error),
        }
        self.refresh_session();
    }

    pub fn new_game(&mut self) {
        match self
            .service
            .start_random_session(&self.player, self.puzzle_length, &mut rand::rng())
        {
            Ok(session) => {
                self.session = session;
                self.accepted.clear();
                self.summary = None;
                self.input_buffer.clear();
                self.messages.clear();
                self.input_mode = InputMode::Playing;
                self.add_message("New puzzle dealt!", MessageStyle::Info);
            }
            Err(err) => self.add_message(&err.to_string(), MessageStyle::Error),
        }
    }

    fn refresh_session(&mut self) {
        match self.service.session(self.session.id()) {
            Ok(session) => self.session = session,
            Err(err) => self.add_message(&err.to_string(), MessageStyle::Error),
        }
    }

    pub fn add_message(&mut self, text: &str, style: MessageStyle) {
        self.messages.push(Message {
            text: text.to_string(),
            style,
        });

        // Keep only last 5 messages
        if self.messages.len() > 5 {
            self.messages.remove(0);
        }
    }

    /// Puzzle letters paired with whether an accepted word has used them
    #[must_use]
    pub fn tiles(&self) -> Vec<(char, bool)> {
        self.session
            .puzzle_letters()
            .zip(consumed_positions(&self.session))
            .collect()
    }

    #[must_use]
    pub fn remaining(&self) -> String {
        remaining_letters(&self.session)
    }
}

/// Run the TUI application
///
/// # Errors
///
/// Returns an error if terminal setup/cleanup fails or if there's an I/O error
/// during rendering or event handling.
pub fn run_tui(app: App) -> Result<()> {
    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

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

fn run_app<B: ratatui::backend::Backend>(terminal: &mut Terminal<B>, mut app: App) -> Result<()> {
    loop {
        terminal.draw(|f| super::rendering::ui(f, &app))?;

        if let Event::Key(key) = event::read()? {
            // Only process key press events (fixes Windows double-input bug)
            if key.kind != KeyEventKind::Press {
                continue;
            }

            if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
                app.should_quit = true;
            }

            match app.input_mode {
                InputMode::Finished => match key.code {
                    KeyCode::Char('q') | KeyCode::Esc => app.should_quit = true,
                    KeyCode::Char('n') => app.new_game(),
                    _ => {}
                },
                InputMode::Playing => match key.code {
                    KeyCode::Esc => app.should_quit = true,
                    KeyCode::Tab => app.finish(),
                    KeyCode::Enter => app.submit_current(),
                    KeyCode::Backspace => {
                        app.input_buffer.pop();
                    }
                    KeyCode::Char(c)
                        if c.is_alphabetic() && !key.modifiers.contains(KeyModifiers::CONTROL) =>
                    {
                        app.input_buffer.extend(c.to_lowercase());
                    }
                    _ => {}
                },
            }
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
    use crate::engine::{Dictionary, Rules};
    use std::sync::Arc;

    fn app() -> App {
        let dictionary = Dictionary::from_words(["pal", "lap", "al"]);
        let service = GameService::new(Arc::new(dictionary), MemoryStore::new(), Rules::default());
        let mut app = App::new(service, "Ada", 14).unwrap();
        // Swap in a known puzzle
        app.session = app.service.start_session("Ada", "palx").unwrap();
        app
    }

    #[test]
    fn accepted_word_dims_tiles() {
        let mut app = app();
        app.input_buffer = "pal".to_string();
        app.submit_current();

        assert_eq!(app.accepted.len(), 1);
        assert_eq!(app.session.score(), 3);
        assert_eq!(
            app.tiles(),
            vec![('p', true), ('a', true), ('l', true), ('x', false)]
        );
        assert_eq!(app.remaining(), "x");
        assert!(app.input_buffer.is_empty());
    }

    #[test]
    fn rejected_word_reports_reason() {
        let mut app = app();
        app.input_buffer = "zzz".to_string();
        app.submit_current();

        assert!(app.accepted.is_empty());
        let last = app.messages.last().unwrap();
        assert!(matches!(last.style, MessageStyle::Error));
        assert!(last.text.contains("Invalid English word."));
    }

    #[test]
    fn finish_then_new_game() {
        let mut app = app();
        app.input_buffer = "al".to_string();
        app.submit_current();
        app.finish();

        assert_eq!(app.input_mode, InputMode::Finished);
        let summary = app.summary.as_ref().unwrap();
        assert_eq!(summary.final_score, 2);
        assert_eq!(summary.remaining, "px");
        assert_eq!(app.stats.best_score, 2);

        app.new_game();
        assert_eq!(app.input_mode, InputMode::Playing);
        assert!(app.accepted.is_empty());
        assert_eq!(app.session.score(), 0);
        assert_eq!(app.session.puzzle().len(), 14);
    }

    #[test]
    fn message_log_is_bounded() {
        let mut app = app();
        for i in 0..10 {
            app.add_message(&format!("msg {i}"), MessageStyle::Info);
        }
        assert_eq!(app.messages.len(), 5);
        assert_eq!(app.messages[4].text, "msg 9");
    }
}

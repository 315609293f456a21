//! TUI application state and logic

use crate::core::Word;
use crate::game::{DailyError, DailyGame, GameState, SessionStore};
use crate::output::formatters::format_distance;
use anyhow::Result;
use chrono::NaiveDate;
use crossterm::{
    event::{self, Event, KeyCode, KeyEventKind, KeyModifiers},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{Terminal, backend::CrosstermBackend};
use std::io;
use std::time::Duration;

/// How often the day is checked while waiting for keys
const TICK: Duration = Duration::from_secs(1);

/// Messages kept on screen
const MAX_MESSAGES: usize = 5;

/// Application state
pub struct App<'a, S: SessionStore> {
    pub game: DailyGame<'a, S>,
    /// The word being edited: the current word with at most one letter replaced
    pub draft: String,
    /// Letter position the next typed letter replaces
    pub cursor: usize,
    pub messages: Vec<Message>,
    pub should_quit: bool,
    clock: Box<dyn Fn() -> NaiveDate + 'a>,
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

impl<'a, S: SessionStore> App<'a, S> {
    /// Wrap a daily game; `clock` tells the current day
    #[must_use]
    pub fn new(game: DailyGame<'a, S>, clock: impl Fn() -> NaiveDate + 'a) -> Self {
        let mut app = Self {
            draft: game.session().current_word().text().to_string(),
            game,
            cursor: 0,
            messages: Vec::new(),
            should_quit: false,
            clock: Box::new(clock),
        };
        app.greet();
        app
    }

    fn greet(&mut self) {
        let puzzle = self.game.session().puzzle();
        let text = format!(
            "Today: {} → {} in {} moves",
            puzzle.start.text().to_uppercase(),
            puzzle.target.text().to_uppercase(),
            puzzle.min_moves
        );
        self.add_message(&text, MessageStyle::Info);
        if self.game.session().is_finished() {
            let share = self.game.session().share_text();
            self.add_message(&share, MessageStyle::Success);
        } else {
            self.add_message(
                "←/→ pick a letter, type to change it, Enter to submit",
                MessageStyle::Info,
            );
        }
    }

    fn word_len(&self) -> usize {
        self.game.session().current_word().len()
    }

    pub fn move_cursor_left(&mut self) {
        self.cursor = self.cursor.checked_sub(1).unwrap_or(self.word_len() - 1);
    }

    pub fn move_cursor_right(&mut self) {
        self.cursor = (self.cursor + 1) % self.word_len();
    }

    /// Replace the letter under the cursor in a fresh copy of the current word
    pub fn set_letter(&mut self, letter: char) {
        if self.game.session().is_finished() {
            self.add_message("Today's chain is done, come back tomorrow!", MessageStyle::Info);
            return;
        }
        if !letter.is_ascii_alphabetic() {
            return;
        }
        if let Some(word) = self
            .game
            .session()
            .current_word()
            .with_letter(self.cursor, letter)
        {
            self.draft = word.text().to_string();
        }
    }

    /// Go back to the current word
    pub fn reset_draft(&mut self) {
        self.draft = self.game.session().current_word().text().to_string();
    }

    /// Positions where the draft differs from the current word
    #[must_use]
    pub fn changed_positions(&self) -> Vec<usize> {
        Word::new(self.draft.as_str())
            .map(|draft| self.game.session().current_word().changed_positions(&draft))
            .unwrap_or_default()
    }

    /// Submit the draft as the next guess
    pub fn submit(&mut self) {
        if self.check_day() {
            return;
        }
        let draft = self.draft.clone();
        match self.game.submit(&draft) {
            Ok(GameState::InProgress) => {
                let distance = self
                    .game
                    .session()
                    .distance_to_target(self.game.session().current_word());
                self.add_message(
                    &format!(
                        "{} is {} away",
                        draft.to_uppercase(),
                        format_distance(distance)
                    ),
                    MessageStyle::Info,
                );
            }
            Ok(GameState::Won) => {
                self.add_message("🎉 Chain complete! 🎉", MessageStyle::Success);
                let share = self.game.session().share_text();
                self.add_message(&share, MessageStyle::Success);
            }
            Ok(GameState::Lost) => {
                self.add_message("Out of moves for today.", MessageStyle::Error);
            }
            Err(DailyError::Guess(e)) => self.add_message(&e.to_string(), MessageStyle::Error),
            Err(e) => self.add_message(&format!("Error: {e}"), MessageStyle::Error),
        }
        self.reset_draft();
    }

    /// Switch to the new day's puzzle after midnight
    ///
    /// Returns `true` if the day changed.
    pub fn check_day(&mut self) -> bool {
        match self.game.rollover((self.clock)()) {
            Ok(false) => false,
            Ok(true) => {
                self.messages.clear();
                self.add_message("A new day, a new chain!", MessageStyle::Success);
                self.greet();
                self.cursor = 0;
                self.reset_draft();
                true
            }
            Err(e) => {
                self.add_message(&format!("Error: {e}"), MessageStyle::Error);
                false
            }
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
}

/// Run the TUI application
///
/// # Errors
///
/// Returns an error if terminal setup/cleanup fails or if there's an I/O error
/// during rendering or event handling.
pub fn run_tui<S: SessionStore>(app: App<'_, S>) -> Result<()> {
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let res = run_app(&mut terminal, app);

    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    res
}

fn run_app<B, S>(terminal: &mut Terminal<B>, mut app: App<'_, S>) -> Result<()>
where
    B: ratatui::backend::Backend,
    S: SessionStore,
{
    loop {
        terminal.draw(|f| super::rendering::ui(f, &app))?;

        if !event::poll(TICK)? {
            app.check_day();
            continue;
        }

        if let Event::Key(key) = event::read()? {
            // Only process key press events (fixes Windows double-input bug)
            if key.kind != KeyEventKind::Press {
                continue;
            }

            match key.code {
                KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                    app.should_quit = true;
                }
                KeyCode::Esc => app.should_quit = true,
                KeyCode::Left => app.move_cursor_left(),
                KeyCode::Right | KeyCode::Tab => app.move_cursor_right(),
                KeyCode::Backspace => app.reset_draft(),
                KeyCode::Enter => app.submit(),
                KeyCode::Char(c) => app.set_letter(c),
                _ => {}
            }
        }

        if app.should_quit {
            break;
        }
    }

    Ok(())
}

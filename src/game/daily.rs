//! The day's game, kept in sync with a [`SessionStore`]
//!
//! Opening the game restores the saved session when it belongs to today, and
//! otherwise selects today's puzzle and starts over. Every accepted guess is
//! saved right away.

use super::{GameSession, GameState, GuessError, SessionStore, StoreError};
use crate::config::GameConfig;
use crate::core::WordGraph;
use crate::puzzle::{DailyPuzzle, SelectionError, select_daily};
use chrono::NaiveDate;
use log::{info, warn};
use std::fmt;
use std::sync::Arc;

/// Error from the daily game
#[derive(Debug)]
pub enum DailyError {
    Selection(SelectionError),
    Guess(GuessError),
    Store(StoreError),
}

impl fmt::Display for DailyError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Selection(e) => write!(f, "{e}"),
            Self::Guess(e) => write!(f, "{e}"),
            Self::Store(e) => write!(f, "{e}"),
        }
    }
}

impl std::error::Error for DailyError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Selection(e) => Some(e),
            Self::Guess(e) => Some(e),
            Self::Store(e) => Some(e),
        }
    }
}

impl From<SelectionError> for DailyError {
    fn from(e: SelectionError) -> Self {
        Self::Selection(e)
    }
}

impl From<GuessError> for DailyError {
    fn from(e: GuessError) -> Self {
        Self::Guess(e)
    }
}

impl From<StoreError> for DailyError {
    fn from(e: StoreError) -> Self {
        Self::Store(e)
    }
}

/// A session for `today`, backed by a store
pub struct DailyGame<'a, S: SessionStore> {
    graph: &'a WordGraph,
    store: S,
    config: GameConfig,
    today: NaiveDate,
    session: GameSession<'a>,
}

impl<'a, S: SessionStore> DailyGame<'a, S> {
    /// Restore today's session from `store`, or start today's puzzle
    ///
    /// An unreadable, corrupt or outdated save is discarded with a warning, as is
    /// a save whose puzzle no longer matches today's selection (another graph or
    /// difficulty band).
    ///
    /// # Errors
    ///
    /// - `DailyError::Selection` if no puzzle can be selected for `today`
    /// - `DailyError::Store` if the new session cannot be saved
    pub fn open(
        graph: &'a WordGraph,
        store: S,
        today: NaiveDate,
        config: GameConfig,
    ) -> Result<Self, DailyError> {
        let puzzle = Arc::new(select_daily(graph, today, &config.selector)?);
        let (session, restored) = match Self::restore(graph, &store, &puzzle, &config) {
            Some(session) => (session, true),
            None => (GameSession::new(graph, puzzle, config.max_guesses), false),
        };

        let mut game = Self {
            graph,
            store,
            config,
            today,
            session,
        };
        if !restored {
            game.save()?;
        }
        Ok(game)
    }

    fn restore(
        graph: &'a WordGraph,
        store: &S,
        puzzle: &Arc<DailyPuzzle>,
        config: &GameConfig,
    ) -> Option<GameSession<'a>> {
        let snapshot = match store.load() {
            Ok(Some(snapshot)) => snapshot,
            Ok(None) => return None,
            Err(e) => {
                warn!("Ignoring saved session: {e}");
                return None;
            }
        };

        if snapshot.last_played != puzzle.date || snapshot.puzzle.date != puzzle.date {
            info!(
                "Saved session is from {}, starting the puzzle of {}",
                snapshot.last_played, puzzle.date
            );
            return None;
        }
        if snapshot.puzzle != **puzzle {
            warn!(
                "Saved puzzle {} differs from today's puzzle {puzzle}, starting over",
                snapshot.puzzle
            );
            return None;
        }

        match GameSession::restore(
            graph,
            Arc::clone(puzzle),
            &snapshot.guesses,
            config.max_guesses,
        ) {
            Ok(session) => {
                info!("Restored session with {} guesses", session.score());
                Some(session)
            }
            Err(e) => {
                warn!("Ignoring saved session: {e}");
                None
            }
        }
    }

    fn start(
        graph: &'a WordGraph,
        today: NaiveDate,
        config: &GameConfig,
    ) -> Result<GameSession<'a>, DailyError> {
        let puzzle = select_daily(graph, today, &config.selector)?;
        Ok(GameSession::new(graph, Arc::new(puzzle), config.max_guesses))
    }

    fn save(&mut self) -> Result<(), DailyError> {
        let snapshot = self.session.snapshot(self.today);
        self.store.save(&snapshot)?;
        Ok(())
    }

    /// Submit a guess and save the session if it was accepted
    ///
    /// # Errors
    ///
    /// - `DailyError::Guess` if the guess is rejected; nothing is saved
    /// - `DailyError::Store` if the accepted guess cannot be saved. The guess
    ///   stays in the in-memory session.
    pub fn submit(&mut self, guess: &str) -> Result<GameState, DailyError> {
        let state = self.session.submit_guess(guess)?;
        self.save()?;
        Ok(state)
    }

    /// Switch to the puzzle of `today` if the day has changed
    ///
    /// Returns `true` when a new session was started.
    ///
    /// # Errors
    ///
    /// Same as [`DailyGame::open`]. On error the current session is kept.
    pub fn rollover(&mut self, today: NaiveDate) -> Result<bool, DailyError> {
        if today == self.today {
            return Ok(false);
        }
        info!("Day changed from {} to {today}", self.today);
        self.session = Self::start(self.graph, today, &self.config)?;
        self.today = today;
        self.save()?;
        Ok(true)
    }

    #[must_use]
    pub const fn session(&self) -> &GameSession<'a> {
        &self.session
    }

    #[must_use]
    pub const fn today(&self) -> NaiveDate {
        self.today
    }

    #[must_use]
    pub const fn config(&self) -> &GameConfig {
        &self.config
    }

    #[must_use]
    pub const fn store(&self) -> &S {
        &self.store
    }
}

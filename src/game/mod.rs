//! Playing a puzzle: the session state machine and its persistence

mod daily;
mod session;
mod store;

pub use daily::{DailyError, DailyGame};
pub use session::{
    ChainEntry, ChainRole, GameSession, GameState, GuessError, InvalidGuess, LetterMark,
    SessionError,
};
pub use store::{
    JsonFileStore, MemoryStore, SAVE_FILE_NAME, SessionSnapshot, SessionStore, StoreError,
};

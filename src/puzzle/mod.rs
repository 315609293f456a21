//! Daily puzzle selection
//!
//! Turns a calendar day into a start/target pair whose shortest path length
//! falls inside a configurable difficulty band.

mod daily;
mod seed;
mod selector;

pub use daily::DailyPuzzle;
pub use seed::{attempt_seed, day_seed, seeded_index, seeded_random};
pub use selector::{
    DifficultyBand, Selection, SelectionError, SelectorConfig, greedy_walk, select, select_daily,
};

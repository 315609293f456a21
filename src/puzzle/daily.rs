//! The puzzle of one calendar day

use crate::core::Word;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Start and target words chosen for a calendar day
///
/// Created once per day by the selector and never modified afterwards.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DailyPuzzle {
    pub date: NaiveDate,
    pub start: Word,
    pub target: Word,
    /// Length of the shortest path from start to target
    pub min_moves: usize,
}

impl DailyPuzzle {
    #[must_use]
    pub const fn new(date: NaiveDate, start: Word, target: Word, min_moves: usize) -> Self {
        Self {
            date,
            start,
            target,
            min_moves,
        }
    }
}

impl fmt::Display for DailyPuzzle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}: {} -> {} ({} moves)",
            self.date, self.start, self.target, self.min_moves
        )
    }
}

//! Command implementations

pub mod calendar;
pub mod distance;
pub mod puzzle;
pub mod simple;

pub use calendar::{CalendarDay, CalendarReport, run_calendar};
pub use distance::{DistanceReport, measure_distance};
pub use puzzle::{PuzzleReport, describe_puzzle};
pub use simple::run_simple;

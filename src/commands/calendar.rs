//! Calendar command
//!
//! Selects the puzzles of a run of consecutive days and gathers statistics,
//! useful to check a word graph and difficulty band before shipping them.

use crate::core::{Word, WordGraph};
use crate::puzzle::{Selection, SelectionError, SelectorConfig, select};
use chrono::NaiveDate;
use indicatif::{ProgressBar, ProgressStyle};
use rayon::prelude::*;
use rustc_hash::FxHashMap;
use std::time::{Duration, Instant};

/// Selection outcome for one day
#[derive(Debug, Clone)]
pub struct CalendarDay {
    pub date: NaiveDate,
    pub outcome: Result<Selection, SelectionError>,
}

/// Outcomes for a run of days, in date order
#[derive(Debug, Clone)]
pub struct CalendarReport {
    pub days: Vec<CalendarDay>,
    pub duration: Duration,
}

impl CalendarReport {
    /// Successful selections
    pub fn selections(&self) -> impl Iterator<Item = &Selection> {
        self.days.iter().filter_map(|day| day.outcome.as_ref().ok())
    }

    #[must_use]
    pub fn failures(&self) -> usize {
        self.days.iter().filter(|day| day.outcome.is_err()).count()
    }

    #[must_use]
    pub fn average_attempts(&self) -> f64 {
        let (count, total) = self
            .selections()
            .fold((0u64, 0u64), |(count, total), s| (count + 1, total + s.attempts));
        if count == 0 {
            0.0
        } else {
            total as f64 / count as f64
        }
    }

    #[must_use]
    pub fn max_attempts(&self) -> u64 {
        self.selections().map(|s| s.attempts).max().unwrap_or(0)
    }

    /// Targets picked on more than one day, most frequent first
    #[must_use]
    pub fn repeated_targets(&self) -> Vec<(Word, usize)> {
        let mut counts: FxHashMap<&Word, usize> = FxHashMap::default();
        for selection in self.selections() {
            *counts.entry(&selection.puzzle.target).or_insert(0) += 1;
        }
        let mut repeated: Vec<(Word, usize)> = counts
            .into_iter()
            .filter(|&(_, n)| n > 1)
            .map(|(word, n)| (word.clone(), n))
            .collect();
        repeated.sort_by(|a, b| b.1.cmp(&a.1).then_with(|| a.0.cmp(&b.0)));
        repeated
    }
}

/// Select the puzzles of `days` consecutive days starting at `first_day`
///
/// Days are processed in parallel; the report keeps them in date order.
#[must_use]
pub fn run_calendar(
    graph: &WordGraph,
    first_day: NaiveDate,
    days: usize,
    config: &SelectorConfig,
    show_progress: bool,
) -> CalendarReport {
    let dates: Vec<NaiveDate> = first_day.iter_days().take(days).collect();

    let pb = if show_progress {
        ProgressBar::new(dates.len() as u64)
    } else {
        ProgressBar::hidden()
    };
    if let Ok(style) = ProgressStyle::with_template(
        "{spinner:.green} [{bar:40.cyan/blue}] {pos}/{len} ({percent}%) | {msg}",
    ) {
        pb.set_style(style.progress_chars("█▓▒░"));
    }
    pb.set_message("Selecting puzzles");

    let start = Instant::now();
    let days: Vec<CalendarDay> = dates
        .par_iter()
        .map(|&date| {
            let outcome = select(graph, date, config);
            pb.inc(1);
            CalendarDay { date, outcome }
        })
        .collect();

    pb.finish_with_message("Complete!");

    CalendarReport {
        days,
        duration: start.elapsed(),
    }
}

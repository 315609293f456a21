//! Puzzle command
//!
//! Shows the puzzle selected for a day and, on request, how to solve it.

use crate::core::{Word, WordGraph, shortest_path};
use crate::puzzle::{Selection, SelectionError, SelectorConfig, select};
use chrono::NaiveDate;

/// The puzzle of a day with one of its ideal paths
#[derive(Debug, Clone)]
pub struct PuzzleReport {
    pub selection: Selection,
    /// One shortest path from start to target
    pub ideal_path: Option<Vec<Word>>,
}

/// Select the puzzle of `date` and compute its ideal path
///
/// # Errors
///
/// Returns `SelectionError` when no puzzle can be selected for the day.
pub fn describe_puzzle(
    graph: &WordGraph,
    date: NaiveDate,
    config: &SelectorConfig,
) -> Result<PuzzleReport, SelectionError> {
    let selection = select(graph, date, config)?;
    let ideal_path = shortest_path(
        graph,
        &selection.puzzle.start,
        &selection.puzzle.target,
    );
    Ok(PuzzleReport {
        selection,
        ideal_path,
    })
}

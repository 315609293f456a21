//! Distance command
//!
//! Measures how far apart two words are in the graph.

use crate::core::{Distance, Word, WordGraph, distance, shortest_path};

/// Distance between two words and one shortest path joining them
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DistanceReport {
    pub from: Word,
    pub to: Word,
    pub distance: Distance,
    pub path: Option<Vec<Word>>,
}

/// Measure the distance from `from` to `to`
///
/// # Errors
///
/// Returns an error if either word is malformed or missing from the graph.
pub fn measure_distance(graph: &WordGraph, from: &str, to: &str) -> Result<DistanceReport, String> {
    let from = known_word(graph, from)?;
    let to = known_word(graph, to)?;

    let distance = distance(graph, &from, &to);
    let path = if distance.is_reachable() {
        shortest_path(graph, &from, &to)
    } else {
        None
    };

    Ok(DistanceReport {
        from,
        to,
        distance,
        path,
    })
}

fn known_word(graph: &WordGraph, text: &str) -> Result<Word, String> {
    let word = Word::new(text).map_err(|e| format!("'{text}': {e}"))?;
    if graph.contains(&word) {
        Ok(word)
    } else {
        Err(format!("'{word}' is not in the word list"))
    }
}

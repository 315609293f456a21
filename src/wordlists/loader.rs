//! Word graph loading
//!
//! A graph file is either a JSON object mapping each word to its neighbours
//! (`.json`) or a plain word list with one word per line (anything else), from
//! which the neighbours are computed.

use super::WORDS;
use crate::core::WordGraph;
use log::info;
use std::collections::BTreeMap;
use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};

/// Error loading a word graph
#[derive(Debug)]
pub enum GraphError {
    /// The graph could not be read, decoded, or contained no words
    DataUnavailable { path: PathBuf, reason: String },
}

impl fmt::Display for GraphError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::DataUnavailable { path, reason } => {
                write!(f, "Word graph {} is unavailable: {reason}", path.display())
            }
        }
    }
}

impl std::error::Error for GraphError {}

/// Graph built from the embedded word list
///
/// # Examples
/// ```
/// use word_chains::wordlists::{WORDS_COUNT, embedded_graph};
///
/// let graph = embedded_graph();
/// assert_eq!(graph.len(), WORDS_COUNT);
/// ```
#[must_use]
pub fn embedded_graph() -> WordGraph {
    WordGraph::from_words(WORDS)
}

/// Parse a JSON adjacency mapping (`{"word": ["neighbour", ...], ...}`)
///
/// # Errors
///
/// Returns the `serde_json` error if the text is not such a mapping.
pub fn graph_from_json(json: &str) -> Result<WordGraph, serde_json::Error> {
    let mapping: BTreeMap<String, Vec<String>> = serde_json::from_str(json)?;
    Ok(WordGraph::from_adjacency(mapping))
}

/// Load a graph from a file
///
/// # Errors
///
/// Returns `GraphError::DataUnavailable` if the file cannot be read or parsed,
/// or if it yields an empty graph.
///
/// # Examples
/// ```no_run
/// use word_chains::wordlists::load_graph;
///
/// let graph = load_graph("data/graph.json").unwrap();
/// println!("Loaded {} words", graph.len());
/// ```
pub fn load_graph<P: AsRef<Path>>(path: P) -> Result<WordGraph, GraphError> {
    let path = path.as_ref();
    let unavailable = |reason: String| GraphError::DataUnavailable {
        path: path.to_path_buf(),
        reason,
    };

    let content = fs::read_to_string(path).map_err(|e| unavailable(e.to_string()))?;

    let is_json = path
        .extension()
        .is_some_and(|ext| ext.eq_ignore_ascii_case("json"));
    let graph = if is_json {
        graph_from_json(&content).map_err(|e| unavailable(e.to_string()))?
    } else {
        WordGraph::from_words(content.lines().map(str::trim).filter(|line| !line.is_empty()))
    };

    if graph.is_empty() {
        return Err(unavailable("no words".to_string()));
    }

    info!(
        "Loaded {} words and {} edges from {}",
        graph.len(),
        graph.edge_count(),
        path.display()
    );
    Ok(graph)
}

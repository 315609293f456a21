//! Core domain types for the word graph
//!
//! Words, the one-letter-edit graph between them, and the breadth-first distance
//! oracle. Everything here is pure and deterministic for a given graph.

mod distance;
mod graph;
mod word;

pub use distance::{Distance, DistanceMap, HEAT_BANDS, HeatBand, distance, shortest_path};
pub use graph::WordGraph;
pub use word::{Word, WordError};

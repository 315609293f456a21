//! Word graph data
//!
//! The default graph is built from a word list compiled into the binary. Other
//! graphs can be loaded from a JSON adjacency mapping or a plain word list.

mod embedded;
pub mod loader;

pub use embedded::{WORDS, WORDS_COUNT};
pub use loader::{GraphError, embedded_graph, graph_from_json, load_graph};

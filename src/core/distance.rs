//! Shortest-path distance oracle
//!
//! Breadth-first search over the word graph. The search always starts from the
//! target so that one pass can label every word with its distance to that target.
//!
//! Stored edges are never trusted blindly: a step is only taken when the two
//! words really differ by one letter, so noisy adjacency data cannot shorten a path.

use super::{Word, WordGraph};
use rustc_hash::FxHashMap;
use std::collections::VecDeque;
use std::fmt;

/// Number of discrete heat bands used to colour words
pub const HEAT_BANDS: u8 = 10;

/// Exact number of moves between two words, or no path at all
///
/// Every finite distance orders before `Unreachable`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Distance {
    Moves(usize),
    Unreachable,
}

impl Distance {
    /// The number of moves, if a path exists
    #[must_use]
    pub const fn moves(self) -> Option<usize> {
        match self {
            Self::Moves(n) => Some(n),
            Self::Unreachable => None,
        }
    }

    #[must_use]
    pub const fn is_reachable(self) -> bool {
        matches!(self, Self::Moves(_))
    }

    /// Heat band for display, clamped to the last band
    #[must_use]
    pub fn heat(self) -> HeatBand {
        HeatBand::from_distance(self)
    }
}

impl fmt::Display for Distance {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Moves(n) => write!(f, "{n}"),
            Self::Unreachable => write!(f, "∞"),
        }
    }
}

/// Display colour band: 0 is the target itself, the last band means "that far or more"
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct HeatBand(u8);

impl HeatBand {
    /// Hottest band (the target word)
    pub const HOTTEST: Self = Self(0);
    /// Coldest band (far away or unreachable)
    pub const COLDEST: Self = Self(HEAT_BANDS - 1);

    #[must_use]
    pub fn from_distance(distance: Distance) -> Self {
        match distance {
            Distance::Moves(n) => Self(n.min(usize::from(Self::COLDEST.0)) as u8),
            Distance::Unreachable => Self::COLDEST,
        }
    }

    /// Band index (0-9)
    #[inline]
    #[must_use]
    pub const fn value(self) -> u8 {
        self.0
    }
}

/// Shortest number of moves from `source` to `target`
///
/// # Examples
/// ```
/// use word_chains::core::{distance, Distance, Word, WordGraph};
///
/// let graph = WordGraph::from_adjacency([
///     ("cat", vec!["bat", "cot"]),
///     ("bat", vec!["cat"]),
///     ("cot", vec!["cat", "cog"]),
///     ("cog", vec!["cot"]),
/// ]);
/// let cat = Word::new("cat").unwrap();
/// let cog = Word::new("cog").unwrap();
/// assert_eq!(distance(&graph, &cat, &cog), Distance::Moves(2));
/// ```
#[must_use]
pub fn distance(graph: &WordGraph, source: &Word, target: &Word) -> Distance {
    let mut search = Search::new(target);
    search.run(graph, Some(source));
    search.distance_of(source)
}

/// One shortest sequence of words from `source` to `target`, both included
///
/// Returns `None` when the target cannot be reached.
#[must_use]
pub fn shortest_path(graph: &WordGraph, source: &Word, target: &Word) -> Option<Vec<Word>> {
    let mut search = Search::new(target);
    search.run(graph, Some(source));
    search.path_from(source)
}

/// Distance to a fixed target for every word that can reach it
///
/// Built with a single search, so heat lookups for a whole chain are O(1) each.
#[derive(Debug, Clone)]
pub struct DistanceMap {
    target: Word,
    search: Search,
}

impl DistanceMap {
    #[must_use]
    pub fn from_target(graph: &WordGraph, target: &Word) -> Self {
        let mut search = Search::new(target);
        search.run(graph, None);
        Self {
            target: target.clone(),
            search,
        }
    }

    #[must_use]
    pub fn target(&self) -> &Word {
        &self.target
    }

    #[must_use]
    pub fn distance(&self, word: &Word) -> Distance {
        self.search.distance_of(word)
    }

    /// Shortest path from `word` to the target
    #[must_use]
    pub fn path_from(&self, word: &Word) -> Option<Vec<Word>> {
        self.search.path_from(word)
    }

    /// Number of words that can reach the target (the target included)
    #[must_use]
    pub fn reachable_count(&self) -> usize {
        self.search.visited.len()
    }
}

/// BFS state: depth of each visited word and the word it was reached from
#[derive(Debug, Clone)]
struct Search {
    origin: Word,
    visited: FxHashMap<Word, (usize, Option<Word>)>,
}

impl Search {
    fn new(origin: &Word) -> Self {
        let mut visited = FxHashMap::default();
        visited.insert(origin.clone(), (0, None));
        Self {
            origin: origin.clone(),
            visited,
        }
    }

    /// Expand the frontier until `stop_at` is dequeued, or until it empties
    fn run(&mut self, graph: &WordGraph, stop_at: Option<&Word>) {
        let mut frontier: VecDeque<(Word, usize)> = VecDeque::new();
        frontier.push_back((self.origin.clone(), 0));

        while let Some((current, depth)) = frontier.pop_front() {
            if stop_at == Some(&current) {
                return;
            }
            for next in graph.neighbors(&current) {
                if !self.visited.contains_key(next) && current.is_one_letter_from(next) {
                    self.visited
                        .insert(next.clone(), (depth + 1, Some(current.clone())));
                    frontier.push_back((next.clone(), depth + 1));
                }
            }
        }
    }

    fn distance_of(&self, word: &Word) -> Distance {
        self.visited
            .get(word)
            .map_or(Distance::Unreachable, |&(depth, _)| Distance::Moves(depth))
    }

    /// Follow predecessor links from `word` back to the search origin
    fn path_from(&self, word: &Word) -> Option<Vec<Word>> {
        let mut path = vec![word.clone()];
        let mut current = word;
        while let Some((_, Some(previous))) = self.visited.get(current) {
            path.push(previous.clone());
            current = previous;
        }
        (current == &self.origin).then_some(path)
    }
}

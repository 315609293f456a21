//! Daily puzzle selection
//!
//! For each attempt of a day, a seeded random start word is picked and a greedy
//! walk wanders away from it until it reaches a word sharing no letter with the
//! start. The walk's last word becomes the target if the true shortest distance
//! between the two lands inside the difficulty band.

use super::DailyPuzzle;
use super::seed::{attempt_seed, day_seed, seeded_index};
use crate::core::{Word, WordGraph, distance};
use chrono::NaiveDate;
use log::{debug, info};
use rustc_hash::FxHashSet;
use std::fmt;

/// Acceptable shortest-path lengths for a daily puzzle: `low <= moves < high`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DifficultyBand {
    pub low: usize,
    pub high: usize,
}

impl DifficultyBand {
    #[must_use]
    pub const fn new(low: usize, high: usize) -> Self {
        Self { low, high }
    }

    #[must_use]
    pub const fn contains(self, moves: usize) -> bool {
        self.low <= moves && moves < self.high
    }

    /// A band is usable when it admits at least one move count of one or more
    #[must_use]
    pub const fn is_valid(self) -> bool {
        self.high > self.low && self.high > 1
    }
}

impl Default for DifficultyBand {
    fn default() -> Self {
        Self::new(5, 6)
    }
}

impl fmt::Display for DifficultyBand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}, {})", self.low, self.high)
    }
}

/// Tuning knobs for puzzle selection
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SelectorConfig {
    pub band: DifficultyBand,
    /// The greedy walk returns its path as-is once it grows past this many steps
    pub max_chain_length: usize,
    /// Attempts before giving up on the day
    pub max_attempts: u64,
}

impl Default for SelectorConfig {
    fn default() -> Self {
        Self {
            band: DifficultyBand::default(),
            max_chain_length: 20,
            max_attempts: 10_000,
        }
    }
}

/// Reasons no daily puzzle could be produced
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SelectionError {
    EmptyGraph,
    InvalidBand(DifficultyBand),
    /// The retry ceiling was reached without a puzzle inside the band
    Exhausted { attempts: u64, band: DifficultyBand },
}

impl fmt::Display for SelectionError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptyGraph => write!(f, "Word graph is empty"),
            Self::InvalidBand(band) => write!(f, "Difficulty band {band} admits no puzzle"),
            Self::Exhausted { attempts, band } => write!(
                f,
                "No puzzle with a shortest path in {band} found after {attempts} attempts"
            ),
        }
    }
}

impl std::error::Error for SelectionError {}

/// A selected puzzle along with how many attempts it took
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Selection {
    pub puzzle: DailyPuzzle,
    pub attempts: u64,
    /// The walk that produced the target (start first)
    pub walk: Vec<Word>,
}

/// Select the puzzle of a calendar day
///
/// Pure function of the graph, the day and the configuration: the same inputs
/// always give the same puzzle.
///
/// # Errors
///
/// Returns `SelectionError` if the graph is empty, the band is unusable, or no
/// puzzle inside the band is found within `config.max_attempts` attempts.
///
/// # Examples
/// ```
/// use chrono::NaiveDate;
/// use word_chains::core::WordGraph;
/// use word_chains::puzzle::{DifficultyBand, SelectorConfig, select_daily};
///
/// let graph = WordGraph::from_words(["aaaa", "baaa", "bbaa", "bbba", "bbbb"]);
/// let config = SelectorConfig {
///     band: DifficultyBand::new(4, 5),
///     ..SelectorConfig::default()
/// };
/// let day = NaiveDate::from_ymd_opt(2024, 3, 7).unwrap();
///
/// let puzzle = select_daily(&graph, day, &config).unwrap();
/// assert_eq!(puzzle.min_moves, 4);
/// assert_eq!(puzzle, select_daily(&graph, day, &config).unwrap());
/// ```
pub fn select_daily(
    graph: &WordGraph,
    date: NaiveDate,
    config: &SelectorConfig,
) -> Result<DailyPuzzle, SelectionError> {
    select(graph, date, config).map(|selection| selection.puzzle)
}

/// Like [`select_daily`], also reporting the attempt count and the walk
///
/// # Errors
///
/// Same as [`select_daily`].
pub fn select(
    graph: &WordGraph,
    date: NaiveDate,
    config: &SelectorConfig,
) -> Result<Selection, SelectionError> {
    if graph.is_empty() {
        return Err(SelectionError::EmptyGraph);
    }
    if !config.band.is_valid() {
        return Err(SelectionError::InvalidBand(config.band));
    }

    let base = day_seed(date);
    let exhausted = SelectionError::Exhausted {
        attempts: config.max_attempts,
        band: config.band,
    };

    for attempt in 0..config.max_attempts {
        let seed = attempt_seed(base, attempt).ok_or_else(|| exhausted.clone())?;
        let Some(start) = seeded_index(seed, graph.len()).map(|i| &graph.words()[i]) else {
            return Err(SelectionError::EmptyGraph);
        };

        let Some(walk) = greedy_walk(graph, start, config.max_chain_length) else {
            debug!("Attempt {attempt}: walk from {start} found no path");
            continue;
        };
        let Some(target) = walk.last() else {
            continue;
        };

        let moves = distance(graph, start, target);
        debug!(
            "Attempt {attempt}: {start} -> {target} in {} steps, shortest {moves}",
            walk.len() - 1
        );

        // A start word is never its own target
        if let Some(min_moves) = moves.moves().filter(|&m| m >= 1 && config.band.contains(m)) {
            let puzzle = DailyPuzzle::new(date, start.clone(), target.clone(), min_moves);
            info!("Selected puzzle {puzzle} after {} attempts", attempt + 1);
            return Ok(Selection {
                puzzle,
                attempts: attempt + 1,
                walk,
            });
        }
    }

    Err(exhausted)
}

/// Walk greedily away from `start` until a word shares no letter with it
///
/// At each step the first unvisited neighbour (in sorted order) is taken. A
/// neighbour with no letter in common with `start` ends the walk immediately.
/// Dead ends are backtracked; if backtracking empties the path the walk fails
/// and `None` is returned. Once the path holds more than `max_chain_length`
/// steps it is returned as it stands.
///
/// # Examples
/// ```
/// use word_chains::core::{Word, WordGraph};
/// use word_chains::puzzle::greedy_walk;
///
/// let graph = WordGraph::from_words(["aaaa", "baaa", "bbaa", "bbba", "bbbb"]);
/// let start = Word::new("aaaa").unwrap();
///
/// let walk = greedy_walk(&graph, &start, 20).unwrap();
/// let texts: Vec<&str> = walk.iter().map(Word::text).collect();
/// assert_eq!(texts, vec!["aaaa", "baaa", "bbaa", "bbba", "bbbb"]);
/// ```
#[must_use]
pub fn greedy_walk(graph: &WordGraph, start: &Word, max_chain_length: usize) -> Option<Vec<Word>> {
    let mut path: Vec<Word> = vec![start.clone()];
    let mut visited: FxHashSet<Word> = FxHashSet::default();
    visited.insert(start.clone());

    while path.len() <= max_chain_length {
        let current = path.last()?;
        let next = graph
            .neighbors(current)
            .iter()
            .find(|&n| !visited.contains(n))
            .cloned();

        match next {
            Some(next) if !next.shares_letter_with(start) => {
                path.push(next);
                return Some(path);
            }
            Some(next) => {
                visited.insert(next.clone());
                path.push(next);
            }
            None => {
                path.pop();
                if path.is_empty() {
                    return None;
                }
            }
        }
    }

    Some(path)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn word(text: &str) -> Word {
        Word::new(text).unwrap()
    }

    fn texts(words: &[Word]) -> Vec<&str> {
        words.iter().map(Word::text).collect()
    }

    fn day(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    /// aaaa - baaa - bbaa - bbba - bbbb
    fn line_graph() -> WordGraph {
        WordGraph::from_words(["aaaa", "baaa", "bbaa", "bbba", "bbbb"])
    }

    fn band_config(low: usize, high: usize) -> SelectorConfig {
        SelectorConfig {
            band: DifficultyBand::new(low, high),
            ..SelectorConfig::default()
        }
    }

    #[test]
    fn band_contains_is_closed_open() {
        let band = DifficultyBand::default();
        assert!(!band.contains(4));
        assert!(band.contains(5));
        assert!(!band.contains(6));
        assert_eq!(band.to_string(), "[5, 6)");
    }

    #[test]
    fn band_validity() {
        assert!(DifficultyBand::new(5, 6).is_valid());
        assert!(DifficultyBand::new(0, 2).is_valid());
        assert!(!DifficultyBand::new(6, 6).is_valid());
        assert!(!DifficultyBand::new(7, 3).is_valid());
        assert!(!DifficultyBand::new(0, 1).is_valid());
    }

    #[test]
    fn walk_stops_at_first_word_without_shared_letters() {
        let walk = greedy_walk(&line_graph(), &word("aaaa"), 20).unwrap();
        assert_eq!(texts(&walk), vec!["aaaa", "baaa", "bbaa", "bbba", "bbbb"]);
    }

    #[test]
    fn walk_fails_when_backtracking_empties_path() {
        // Every word reachable from bbaa shares a letter with it
        assert_eq!(greedy_walk(&line_graph(), &word("bbaa"), 20), None);
        assert_eq!(greedy_walk(&line_graph(), &word("baaa"), 20), None);
    }

    #[test]
    fn walk_fails_for_isolated_word() {
        let graph = WordGraph::from_words(["abcd", "wxyz"]);
        assert_eq!(greedy_walk(&graph, &word("abcd"), 20), None);
    }

    #[test]
    fn walk_returns_path_at_length_cap() {
        let walk = greedy_walk(&line_graph(), &word("aaaa"), 2).unwrap();
        assert_eq!(texts(&walk), vec!["aaaa", "baaa", "bbaa"]);
    }

    #[test]
    fn walk_prefers_sorted_neighbor_order() {
        // cat's neighbours in order: bat, cot; bat is a dead end so the walk backtracks
        let graph = WordGraph::from_adjacency([
            ("cat", vec!["cot", "bat"]),
            ("bat", vec!["cat"]),
            ("cot", vec!["cat", "dot"]),
            ("dot", vec!["cot", "dog"]),
            ("dog", vec!["dot"]),
        ]);
        let walk = greedy_walk(&graph, &word("cat"), 20).unwrap();
        assert_eq!(texts(&walk), vec!["cat", "cot", "dot", "dog"]);
    }

    #[test]
    fn walk_steps_only_follow_graph_edges() {
        let graph = line_graph();
        let walk = greedy_walk(&graph, &word("bbbb"), 20).unwrap();
        assert_eq!(texts(&walk), vec!["bbbb", "bbba", "bbaa", "baaa", "aaaa"]);
        for pair in walk.windows(2) {
            assert!(graph.neighbors(&pair[0]).contains(&pair[1]));
        }
    }

    #[test]
    fn select_finds_puzzle_inside_band() {
        let graph = line_graph();
        let selection = select(&graph, day(2024, 3, 7), &band_config(4, 5)).unwrap();
        let puzzle = &selection.puzzle;

        assert_eq!(puzzle.min_moves, 4);
        assert_eq!(puzzle.date, day(2024, 3, 7));
        assert!(
            (puzzle.start == word("aaaa") && puzzle.target == word("bbbb"))
                || (puzzle.start == word("bbbb") && puzzle.target == word("aaaa"))
        );
        assert!(selection.attempts >= 1);
        assert_eq!(selection.walk.first(), Some(&puzzle.start));
        assert_eq!(selection.walk.last(), Some(&puzzle.target));
    }

    #[test]
    fn select_is_deterministic() {
        let graph = line_graph();
        let config = band_config(4, 5);
        for d in 1..=10 {
            let date = day(2024, 5, d);
            assert_eq!(
                select_daily(&graph, date, &config),
                select_daily(&graph, date, &config)
            );
        }
    }

    #[test]
    fn select_exhausts_when_band_unreachable() {
        let config = SelectorConfig {
            band: DifficultyBand::new(5, 6),
            max_chain_length: 20,
            max_attempts: 50,
        };
        let err = select_daily(&line_graph(), day(2024, 3, 7), &config).unwrap_err();
        assert_eq!(
            err,
            SelectionError::Exhausted {
                attempts: 50,
                band: DifficultyBand::new(5, 6)
            }
        );
    }

    #[test]
    fn select_rejects_empty_graph() {
        let graph = WordGraph::from_words(Vec::<String>::new());
        assert_eq!(
            select_daily(&graph, day(2024, 3, 7), &SelectorConfig::default()),
            Err(SelectionError::EmptyGraph)
        );
    }

    #[test]
    fn select_never_targets_the_start_word() {
        let config = SelectorConfig {
            band: DifficultyBand::new(0, 2),
            max_chain_length: 0,
            max_attempts: 50,
        };
        let err = select_daily(&line_graph(), day(2024, 3, 7), &config).unwrap_err();
        assert!(matches!(err, SelectionError::Exhausted { attempts: 50, .. }));
    }

    #[test]
    fn select_rejects_invalid_band() {
        let err = select_daily(&line_graph(), day(2024, 3, 7), &band_config(3, 3)).unwrap_err();
        assert_eq!(err, SelectionError::InvalidBand(DifficultyBand::new(3, 3)));
    }

    #[test]
    fn selected_puzzles_respect_band_on_embedded_words() {
        let graph = WordGraph::from_words(crate::wordlists::WORDS);
        let config = SelectorConfig::default();
        for d in 1..=5 {
            let puzzle = select_daily(&graph, day(2024, 6, d), &config).unwrap();
            assert!(config.band.contains(puzzle.min_moves));
            assert_eq!(
                distance(&graph, &puzzle.start, &puzzle.target).moves(),
                Some(puzzle.min_moves)
            );
        }
    }
}

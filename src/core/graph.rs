//! Word graph
//!
//! Maps every known word to the words one letter edit away. The graph is built once,
//! then shared read-only by the distance oracle, the puzzle selector and game sessions.

use super::Word;
use log::{debug, warn};
use rustc_hash::{FxHashMap, FxHashSet};

/// Adjacency lookup between words that differ by a single letter
///
/// Keys are kept in sorted order and every neighbour list is sorted and
/// deduplicated, so any walk over the graph enumerates words in lexicographic order.
#[derive(Debug, Clone, Default)]
pub struct WordGraph {
    words: Vec<Word>,
    edges: FxHashMap<Word, Vec<Word>>,
}

impl WordGraph {
    /// Build a graph from a precomputed adjacency mapping (`word -> [words]`)
    ///
    /// Entries that are not valid words are skipped, as are edges that point at
    /// words missing from the key set. Edges are otherwise kept as given: the
    /// distance oracle re-checks that every edge is a one-letter edit.
    ///
    /// # Examples
    /// ```
    /// use word_chains::core::WordGraph;
    ///
    /// let graph = WordGraph::from_adjacency([
    ///     ("cat", vec!["bat", "cot"]),
    ///     ("bat", vec!["cat"]),
    ///     ("cot", vec!["cat", "cog"]),
    ///     ("cog", vec!["cot"]),
    /// ]);
    /// assert_eq!(graph.len(), 4);
    /// assert!(graph.contains_text("cog"));
    /// ```
    pub fn from_adjacency<K, V, I>(mapping: impl IntoIterator<Item = (K, I)>) -> Self
    where
        K: AsRef<str>,
        V: AsRef<str>,
        I: IntoIterator<Item = V>,
    {
        let mut raw: FxHashMap<Word, Vec<String>> = FxHashMap::default();
        for (key, neighbours) in mapping {
            match Word::new(key.as_ref()) {
                Ok(word) => raw
                    .entry(word)
                    .or_default()
                    .extend(neighbours.into_iter().map(|n| n.as_ref().to_string())),
                Err(e) => warn!("Skipping graph key {:?}: {e}", key.as_ref()),
            }
        }

        let keys: FxHashSet<Word> = raw.keys().cloned().collect();
        let mut dropped = 0usize;
        let mut edges: FxHashMap<Word, Vec<Word>> = FxHashMap::default();
        for (word, neighbours) in raw {
            let mut linked: Vec<Word> = neighbours
                .into_iter()
                .filter_map(|text| match Word::new(text) {
                    Ok(n) if keys.contains(&n) && n != word => Some(n),
                    _ => {
                        dropped += 1;
                        None
                    }
                })
                .collect();
            linked.sort();
            linked.dedup();
            edges.insert(word, linked);
        }

        if dropped > 0 {
            debug!("Dropped {dropped} edges to unknown or invalid words");
        }

        Self::from_edges(edges)
    }

    /// Build a graph from a plain word list
    ///
    /// Every pair of same-length words differing at exactly one position is linked.
    /// Invalid entries are skipped.
    ///
    /// # Examples
    /// ```
    /// use word_chains::core::{Word, WordGraph};
    ///
    /// let graph = WordGraph::from_words(["cold", "cord", "card", "ward", "warm"]);
    /// let cord = Word::new("cord").unwrap();
    /// let texts: Vec<&str> = graph.neighbors(&cord).iter().map(Word::text).collect();
    /// assert_eq!(texts, vec!["card", "cold"]);
    /// ```
    pub fn from_words<S: AsRef<str>>(words: impl IntoIterator<Item = S>) -> Self {
        let words: FxHashSet<Word> = words
            .into_iter()
            .filter_map(|text| Word::new(text.as_ref()).ok())
            .collect();

        // Words sharing a wildcard pattern such as "c_ld" are one letter apart
        let mut buckets: FxHashMap<(usize, Vec<u8>), Vec<&Word>> = FxHashMap::default();
        for word in &words {
            for position in 0..word.len() {
                let mut pattern = word.chars().to_vec();
                pattern[position] = b'_';
                buckets.entry((position, pattern)).or_default().push(word);
            }
        }

        let mut edges: FxHashMap<Word, Vec<Word>> =
            words.iter().map(|w| (w.clone(), Vec::new())).collect();
        for bucket in buckets.values() {
            for &a in bucket {
                if let Some(linked) = edges.get_mut(a) {
                    for &b in bucket {
                        if b != a {
                            linked.push(b.clone());
                        }
                    }
                }
            }
        }
        for linked in edges.values_mut() {
            linked.sort();
            linked.dedup();
        }

        Self::from_edges(edges)
    }

    fn from_edges(edges: FxHashMap<Word, Vec<Word>>) -> Self {
        let mut words: Vec<Word> = edges.keys().cloned().collect();
        words.sort();
        Self { words, edges }
    }

    /// All words in the graph, in lexicographic order
    #[must_use]
    pub fn words(&self) -> &[Word] {
        &self.words
    }

    /// Number of words in the graph
    #[must_use]
    pub fn len(&self) -> usize {
        self.words.len()
    }

    /// Check if the graph has no words
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    /// Check if a word is a key of the graph
    #[must_use]
    pub fn contains(&self, word: &Word) -> bool {
        self.edges.contains_key(word)
    }

    /// Check if some text is a known word
    #[must_use]
    pub fn contains_text(&self, text: &str) -> bool {
        Word::new(text).is_ok_and(|word| self.contains(&word))
    }

    /// Neighbours of a word, sorted
    ///
    /// Returns an empty slice for unknown words.
    #[must_use]
    pub fn neighbors(&self, word: &Word) -> &[Word] {
        self.edges.get(word).map_or(&[], Vec::as_slice)
    }

    /// Total number of directed edges
    #[must_use]
    pub fn edge_count(&self) -> usize {
        self.edges.values().map(Vec::len).sum()
    }
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

    #[test]
    fn from_adjacency_sorts_keys_and_neighbors() {
        let graph = WordGraph::from_adjacency([
            ("cot", vec!["cog", "cat", "cat"]),
            ("cat", vec!["cot", "bat"]),
            ("bat", vec!["cat"]),
            ("cog", vec!["cot"]),
        ]);

        assert_eq!(texts(graph.words()), vec!["bat", "cat", "cog", "cot"]);
        assert_eq!(texts(graph.neighbors(&word("cot"))), vec!["cat", "cog"]);
        assert_eq!(texts(graph.neighbors(&word("cat"))), vec!["bat", "cot"]);
        assert_eq!(graph.edge_count(), 6);
    }

    #[test]
    fn from_adjacency_drops_unknown_and_invalid() {
        let graph = WordGraph::from_adjacency([
            ("cat", vec!["bat", "dog", "c4t", "cat"]),
            ("bat", vec!["cat"]),
            ("B@D", vec!["bat"]),
        ]);

        assert_eq!(graph.len(), 2);
        assert_eq!(texts(graph.neighbors(&word("cat"))), vec!["bat"]);
        assert!(!graph.contains_text("dog"));
    }

    #[test]
    fn from_adjacency_keeps_asymmetric_edges() {
        let graph = WordGraph::from_adjacency([("cat", vec!["cot"]), ("cot", vec![])]);

        assert_eq!(texts(graph.neighbors(&word("cat"))), vec!["cot"]);
        assert!(graph.neighbors(&word("cot")).is_empty());
    }

    #[test]
    fn from_words_links_one_letter_edits() {
        let graph = WordGraph::from_words(["cat", "cot", "cog", "dog", "bat", "cats", "zzz"]);

        assert_eq!(texts(graph.neighbors(&word("cat"))), vec!["bat", "cot"]);
        assert_eq!(texts(graph.neighbors(&word("cog"))), vec!["cot", "dog"]);
        assert!(graph.neighbors(&word("cats")).is_empty());
        assert!(graph.neighbors(&word("zzz")).is_empty());
        assert_eq!(graph.len(), 7);
    }

    #[test]
    fn from_words_is_symmetric() {
        let graph = WordGraph::from_words(["cold", "cord", "card", "ward", "warm", "word", "worm"]);

        for a in graph.words() {
            for b in graph.neighbors(a) {
                assert!(a.is_one_letter_from(b));
                assert!(graph.neighbors(b).contains(a), "{b} should link back to {a}");
            }
        }
    }

    #[test]
    fn unknown_word_has_no_neighbors() {
        let graph = WordGraph::from_words(["cat", "cot"]);
        assert!(graph.neighbors(&word("dog")).is_empty());
        assert!(!graph.contains(&word("dog")));
        assert!(!graph.contains_text("not a word"));
    }

    #[test]
    fn empty_graph() {
        let graph = WordGraph::from_words(Vec::<String>::new());
        assert!(graph.is_empty());
        assert_eq!(graph.edge_count(), 0);
    }
}

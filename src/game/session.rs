//! Guess validation state machine
//!
//! A session starts `InProgress` with the start word as its only guess. Each
//! accepted guess is a known word exactly one letter away from the previous one.
//! Reaching the target wins; running out of guesses loses. Both are terminal.

use super::SessionSnapshot;
use crate::core::{Distance, DistanceMap, HeatBand, Word, WordError, WordGraph};
use crate::puzzle::DailyPuzzle;
use chrono::NaiveDate;
use std::fmt;
use std::sync::Arc;

/// Where a session stands
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum GameState {
    InProgress,
    Won,
    Lost,
}

impl GameState {
    #[must_use]
    pub const fn is_finished(self) -> bool {
        !matches!(self, Self::InProgress)
    }
}

impl fmt::Display for GameState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InProgress => write!(f, "in progress"),
            Self::Won => write!(f, "won"),
            Self::Lost => write!(f, "lost"),
        }
    }
}

/// Why a guess was rejected
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InvalidGuess {
    Malformed(WordError),
    UnknownWord(Word),
    NotOneLetterApart { from: Word, to: Word },
}

/// Error returned by [`GameSession::submit_guess`]
///
/// In every case the session is left untouched.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GuessError {
    InvalidGuess(InvalidGuess),
    GameAlreadyFinished(GameState),
}

impl fmt::Display for GuessError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidGuess(InvalidGuess::Malformed(e)) => write!(f, "Invalid guess: {e}"),
            Self::InvalidGuess(InvalidGuess::UnknownWord(word)) => {
                write!(f, "'{word}' is not in the word list")
            }
            Self::InvalidGuess(InvalidGuess::NotOneLetterApart { from, to }) => {
                write!(f, "'{to}' must differ from '{from}' by exactly one letter")
            }
            Self::GameAlreadyFinished(state) => write!(f, "The game is already {state}"),
        }
    }
}

impl std::error::Error for GuessError {}

/// Error restoring a session from persisted data
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SessionError {
    CorruptSnapshot(String),
}

impl fmt::Display for SessionError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::CorruptSnapshot(reason) => write!(f, "Saved session is corrupt: {reason}"),
        }
    }
}

impl std::error::Error for SessionError {}

/// Role of a word in the displayed chain
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChainRole {
    /// An earlier guess (or the start word)
    Played,
    /// The last accepted guess, the one the player edits next
    Current,
    /// The target, shown until it is reached
    Target,
}

/// Display information for one letter of a chain word
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LetterMark {
    pub letter: char,
    /// Same letter as the target at this position
    pub matches_target: bool,
    /// Differs from the previous word of the chain at this position
    pub changed: bool,
}

/// One word of the chain, with its heat
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChainEntry {
    pub word: Word,
    pub role: ChainRole,
    pub distance: Distance,
    pub heat: HeatBand,
    pub letters: Vec<LetterMark>,
}

/// A player's game for one daily puzzle
#[derive(Debug, Clone)]
pub struct GameSession<'a> {
    graph: &'a WordGraph,
    puzzle: Arc<DailyPuzzle>,
    guesses: Vec<Word>,
    state: GameState,
    max_guesses: usize,
    distances: DistanceMap,
}

impl<'a> GameSession<'a> {
    /// Start a fresh session on `puzzle`
    ///
    /// `max_guesses` counts submitted guesses, not the start word; it is at least one.
    ///
    /// # Examples
    /// ```
    /// use std::sync::Arc;
    /// use chrono::NaiveDate;
    /// use word_chains::core::{Word, WordGraph};
    /// use word_chains::game::{GameSession, GameState};
    /// use word_chains::puzzle::DailyPuzzle;
    ///
    /// let graph = WordGraph::from_adjacency([
    ///     ("cat", vec!["bat", "cot"]),
    ///     ("bat", vec!["cat"]),
    ///     ("cot", vec!["cat", "cog"]),
    ///     ("cog", vec!["cot"]),
    /// ]);
    /// let puzzle = DailyPuzzle::new(
    ///     NaiveDate::from_ymd_opt(2024, 3, 7).unwrap(),
    ///     Word::new("cat").unwrap(),
    ///     Word::new("cog").unwrap(),
    ///     2,
    /// );
    /// let mut session = GameSession::new(&graph, Arc::new(puzzle), 10);
    ///
    /// assert_eq!(session.submit_guess("cot"), Ok(GameState::InProgress));
    /// assert_eq!(session.submit_guess("cog"), Ok(GameState::Won));
    /// ```
    #[must_use]
    pub fn new(graph: &'a WordGraph, puzzle: Arc<DailyPuzzle>, max_guesses: usize) -> Self {
        let distances = DistanceMap::from_target(graph, &puzzle.target);
        let state = if puzzle.start == puzzle.target {
            GameState::Won
        } else {
            GameState::InProgress
        };
        Self {
            graph,
            guesses: vec![puzzle.start.clone()],
            puzzle,
            state,
            max_guesses: max_guesses.max(1),
            distances,
        }
    }

    /// Rebuild a session by replaying a saved guess sequence
    ///
    /// Every saved step goes through the same word checks as a live guess. The
    /// guess cap is applied to the replayed result, not along the way, so a day
    /// finished under a different cap keeps its outcome.
    ///
    /// # Errors
    ///
    /// Returns `SessionError::CorruptSnapshot` if the sequence does not begin with
    /// the start word, continues past the target, or contains a step the rules
    /// would reject.
    pub fn restore(
        graph: &'a WordGraph,
        puzzle: Arc<DailyPuzzle>,
        guesses: &[Word],
        max_guesses: usize,
    ) -> Result<Self, SessionError> {
        let Some((first, rest)) = guesses.split_first() else {
            return Err(SessionError::CorruptSnapshot("no guesses".to_string()));
        };
        if *first != puzzle.start {
            return Err(SessionError::CorruptSnapshot(format!(
                "first guess '{first}' is not the start word '{}'",
                puzzle.start
            )));
        }

        let mut session = Self::new(graph, puzzle, max_guesses);
        for guess in rest {
            if session.current_word() == &session.puzzle.target {
                return Err(SessionError::CorruptSnapshot(format!(
                    "guess '{guess}' follows the target"
                )));
            }
            if let Err(e) = session.check_step(guess) {
                let reason = GuessError::InvalidGuess(e).to_string();
                return Err(SessionError::CorruptSnapshot(reason));
            }
            session.guesses.push(guess.clone());
        }
        session.state = session.settled_state();
        Ok(session)
    }

    /// Submit the next word of the chain
    ///
    /// # Errors
    ///
    /// - `GuessError::GameAlreadyFinished` once the game is won or lost
    /// - `GuessError::InvalidGuess` if the text is not a known word exactly one
    ///   letter away from the last guess
    pub fn submit_guess(&mut self, candidate: &str) -> Result<GameState, GuessError> {
        if self.state.is_finished() {
            return Err(GuessError::GameAlreadyFinished(self.state));
        }
        let word = Word::new(candidate)
            .map_err(|e| GuessError::InvalidGuess(InvalidGuess::Malformed(e)))?;
        self.submit_word(word)
    }

    /// Submit an already parsed word
    ///
    /// # Errors
    ///
    /// Same as [`GameSession::submit_guess`].
    pub fn submit_word(&mut self, word: Word) -> Result<GameState, GuessError> {
        if self.state.is_finished() {
            return Err(GuessError::GameAlreadyFinished(self.state));
        }
        self.check_step(&word).map_err(GuessError::InvalidGuess)?;

        self.guesses.push(word);
        self.state = self.settled_state();
        Ok(self.state)
    }

    /// A known word exactly one letter away from the last guess
    fn check_step(&self, word: &Word) -> Result<(), InvalidGuess> {
        if !self.graph.contains(word) {
            return Err(InvalidGuess::UnknownWord(word.clone()));
        }
        let last = self.current_word();
        if !last.is_one_letter_from(word) {
            return Err(InvalidGuess::NotOneLetterApart {
                from: last.clone(),
                to: word.clone(),
            });
        }
        Ok(())
    }

    fn settled_state(&self) -> GameState {
        if *self.current_word() == self.puzzle.target {
            GameState::Won
        } else if self.score() >= self.max_guesses {
            GameState::Lost
        } else {
            GameState::InProgress
        }
    }

    #[must_use]
    pub fn puzzle(&self) -> &DailyPuzzle {
        &self.puzzle
    }

    /// Shared handle on the puzzle
    #[must_use]
    pub fn shared_puzzle(&self) -> Arc<DailyPuzzle> {
        Arc::clone(&self.puzzle)
    }

    /// All accepted words, the start word first
    #[must_use]
    pub fn guesses(&self) -> &[Word] {
        &self.guesses
    }

    /// The last accepted word
    #[must_use]
    pub fn current_word(&self) -> &Word {
        // Never empty: the start word is always present
        &self.guesses[self.guesses.len() - 1]
    }

    #[must_use]
    pub const fn state(&self) -> GameState {
        self.state
    }

    #[must_use]
    pub const fn is_finished(&self) -> bool {
        self.state.is_finished()
    }

    #[must_use]
    pub fn is_won(&self) -> bool {
        self.state == GameState::Won
    }

    /// Number of submitted guesses, i.e. moves made so far
    #[must_use]
    pub fn score(&self) -> usize {
        self.guesses.len() - 1
    }

    #[must_use]
    pub const fn max_guesses(&self) -> usize {
        self.max_guesses
    }

    #[must_use]
    pub fn remaining_guesses(&self) -> usize {
        self.max_guesses.saturating_sub(self.score())
    }

    /// Distance from any word to this puzzle's target
    #[must_use]
    pub fn distance_to_target(&self, word: &Word) -> Distance {
        self.distances.distance(word)
    }

    /// The chain to render: every guess, then the target if it has not been reached
    #[must_use]
    pub fn chain(&self) -> Vec<ChainEntry> {
        let last = self.guesses.len() - 1;
        let mut entries: Vec<ChainEntry> = self
            .guesses
            .iter()
            .enumerate()
            .map(|(i, word)| {
                let role = if i == last {
                    ChainRole::Current
                } else {
                    ChainRole::Played
                };
                let previous = i.checked_sub(1).map(|p| &self.guesses[p]);
                self.entry(word, role, previous)
            })
            .collect();

        if *self.current_word() != self.puzzle.target {
            entries.push(self.entry(&self.puzzle.target, ChainRole::Target, None));
        }
        entries
    }

    fn entry(&self, word: &Word, role: ChainRole, previous: Option<&Word>) -> ChainEntry {
        let target = self.puzzle.target.chars();
        let letters = word
            .chars()
            .iter()
            .enumerate()
            .map(|(i, &letter)| LetterMark {
                letter: char::from(letter),
                matches_target: target.get(i) == Some(&letter),
                changed: previous
                    .and_then(|p| p.chars().get(i))
                    .is_some_and(|&before| before != letter),
            })
            .collect();
        let distance = self.distance_to_target(word);
        ChainEntry {
            word: word.clone(),
            role,
            distance,
            heat: distance.heat(),
            letters,
        }
    }

    /// One shortest path from the start word to the target
    #[must_use]
    pub fn ideal_path(&self) -> Option<Vec<Word>> {
        self.distances.path_from(&self.puzzle.start)
    }

    /// Text a player can share once the game is over
    #[must_use]
    pub fn share_text(&self) -> String {
        match self.state {
            GameState::Won => format!(
                "I completed WordChains in {}/{}!",
                self.score(),
                self.puzzle.min_moves
            ),
            GameState::Lost => format!(
                "WordChains {} got the better of me after {} moves (best: {}).",
                self.puzzle.date,
                self.score(),
                self.puzzle.min_moves
            ),
            GameState::InProgress => format!(
                "Playing WordChains {}: {} moves so far, best is {}.",
                self.puzzle.date,
                self.score(),
                self.puzzle.min_moves
            ),
        }
    }

    /// Data to persist so the session can be restored later the same day
    #[must_use]
    pub fn snapshot(&self, last_played: NaiveDate) -> SessionSnapshot {
        SessionSnapshot {
            last_played,
            puzzle: (*self.puzzle).clone(),
            guesses: self.guesses.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn word(text: &str) -> Word {
        Word::new(text).unwrap()
    }

    fn scenario_graph() -> WordGraph {
        WordGraph::from_adjacency([
            ("cat", vec!["bat", "cot"]),
            ("bat", vec!["cat"]),
            ("cot", vec!["cat", "cog"]),
            ("cog", vec!["cot"]),
        ])
    }

    fn scenario_puzzle() -> Arc<DailyPuzzle> {
        Arc::new(DailyPuzzle::new(
            NaiveDate::from_ymd_opt(2024, 3, 7).unwrap(),
            word("cat"),
            word("cog"),
            2,
        ))
    }

    #[test]
    fn new_session_starts_with_start_word() {
        let graph = scenario_graph();
        let session = GameSession::new(&graph, scenario_puzzle(), 10);

        assert_eq!(session.guesses(), &[word("cat")]);
        assert_eq!(session.state(), GameState::InProgress);
        assert_eq!(session.score(), 0);
        assert_eq!(session.remaining_guesses(), 10);
        assert!(!session.is_finished());
    }

    #[test]
    fn scenario_cat_cot_cog_wins() {
        let graph = scenario_graph();
        let mut session = GameSession::new(&graph, scenario_puzzle(), 10);

        assert_eq!(session.submit_guess("cot"), Ok(GameState::InProgress));
        assert_eq!(session.submit_guess("cog"), Ok(GameState::Won));
        assert_eq!(session.guesses(), &[word("cat"), word("cot"), word("cog")]);
        assert!(session.is_won());
        assert_eq!(session.score(), 2);
    }

    #[test]
    fn unknown_word_is_rejected() {
        let graph = scenario_graph();
        let mut session = GameSession::new(&graph, scenario_puzzle(), 10);

        assert_eq!(
            session.submit_guess("dog"),
            Err(GuessError::InvalidGuess(InvalidGuess::UnknownWord(word("dog"))))
        );
        assert_eq!(session.guesses(), &[word("cat")]);
        assert_eq!(session.state(), GameState::InProgress);
    }

    #[test]
    fn malformed_guess_is_rejected() {
        let graph = scenario_graph();
        let mut session = GameSession::new(&graph, scenario_puzzle(), 10);

        assert!(matches!(
            session.submit_guess("c0t"),
            Err(GuessError::InvalidGuess(InvalidGuess::Malformed(_)))
        ));
        assert_eq!(session.guesses(), &[word("cat")]);
    }

    #[test]
    fn two_letter_change_is_rejected() {
        let graph = WordGraph::from_words(["cat", "cot", "cog", "dog"]);
        let mut session = GameSession::new(&graph, scenario_puzzle(), 10);

        assert_eq!(
            session.submit_guess("cog"),
            Err(GuessError::InvalidGuess(InvalidGuess::NotOneLetterApart {
                from: word("cat"),
                to: word("cog"),
            }))
        );
        assert_eq!(session.score(), 0);
    }

    #[test]
    fn repeating_the_current_word_is_rejected() {
        let graph = scenario_graph();
        let mut session = GameSession::new(&graph, scenario_puzzle(), 10);

        assert!(matches!(
            session.submit_guess("cat"),
            Err(GuessError::InvalidGuess(InvalidGuess::NotOneLetterApart { .. }))
        ));
    }

    #[test]
    fn guessing_back_and_forth_is_allowed() {
        let graph = scenario_graph();
        let mut session = GameSession::new(&graph, scenario_puzzle(), 10);

        assert!(session.submit_guess("bat").is_ok());
        assert!(session.submit_guess("cat").is_ok());
        assert!(session.submit_guess("cot").is_ok());
        assert_eq!(session.score(), 3);
    }

    #[test]
    fn no_guesses_after_win() {
        let graph = scenario_graph();
        let mut session = GameSession::new(&graph, scenario_puzzle(), 10);
        session.submit_guess("cot").unwrap();
        session.submit_guess("cog").unwrap();

        assert_eq!(
            session.submit_guess("cot"),
            Err(GuessError::GameAlreadyFinished(GameState::Won))
        );
        assert_eq!(session.score(), 2);
    }

    #[test]
    fn running_out_of_guesses_loses() {
        let graph = scenario_graph();
        let mut session = GameSession::new(&graph, scenario_puzzle(), 3);

        assert_eq!(session.submit_guess("bat"), Ok(GameState::InProgress));
        assert_eq!(session.submit_guess("cat"), Ok(GameState::InProgress));
        assert_eq!(session.submit_guess("bat"), Ok(GameState::Lost));
        assert_eq!(session.remaining_guesses(), 0);
        assert_eq!(
            session.submit_guess("cat"),
            Err(GuessError::GameAlreadyFinished(GameState::Lost))
        );
    }

    #[test]
    fn winning_on_last_guess_wins() {
        let graph = scenario_graph();
        let mut session = GameSession::new(&graph, scenario_puzzle(), 2);

        assert_eq!(session.submit_guess("cot"), Ok(GameState::InProgress));
        assert_eq!(session.submit_guess("cog"), Ok(GameState::Won));
    }

    #[test]
    fn chain_includes_target_until_reached() {
        let graph = scenario_graph();
        let mut session = GameSession::new(&graph, scenario_puzzle(), 10);

        let chain = session.chain();
        assert_eq!(chain.len(), 2);
        assert_eq!(chain[0].word, word("cat"));
        assert_eq!(chain[0].role, ChainRole::Current);
        assert_eq!(chain[0].distance, Distance::Moves(2));
        assert_eq!(chain[1].word, word("cog"));
        assert_eq!(chain[1].role, ChainRole::Target);
        assert_eq!(chain[1].distance, Distance::Moves(0));

        session.submit_guess("cot").unwrap();
        session.submit_guess("cog").unwrap();
        let chain = session.chain();
        assert_eq!(chain.len(), 3);
        assert_eq!(chain[1].role, ChainRole::Played);
        assert_eq!(chain[2].role, ChainRole::Current);
        assert_eq!(chain[2].heat, HeatBand::HOTTEST);
    }

    #[test]
    fn chain_letter_marks() {
        let graph = scenario_graph();
        let mut session = GameSession::new(&graph, scenario_puzzle(), 10);
        session.submit_guess("cot").unwrap();

        let chain = session.chain();
        let cot = &chain[1];
        let letters: String = cot.letters.iter().map(|m| m.letter).collect();
        assert_eq!(letters, "cot");
        let matches: Vec<bool> = cot.letters.iter().map(|m| m.matches_target).collect();
        assert_eq!(matches, vec![true, true, false]);
        let changed: Vec<bool> = cot.letters.iter().map(|m| m.changed).collect();
        assert_eq!(changed, vec![false, true, false]);

        assert!(chain[0].letters.iter().all(|m| !m.changed));
    }

    #[test]
    fn chain_heat_for_unreachable_word() {
        let graph = WordGraph::from_adjacency([
            ("cat", vec!["cot"]),
            ("cot", vec!["cat"]),
            ("cog", vec![]),
        ]);
        let session = GameSession::new(&graph, scenario_puzzle(), 10);

        let chain = session.chain();
        assert_eq!(chain[0].distance, Distance::Unreachable);
        assert_eq!(chain[0].heat, HeatBand::COLDEST);
        assert_eq!(session.ideal_path(), None);
    }

    #[test]
    fn ideal_path_is_shortest() {
        let graph = scenario_graph();
        let session = GameSession::new(&graph, scenario_puzzle(), 10);
        assert_eq!(
            session.ideal_path(),
            Some(vec![word("cat"), word("cot"), word("cog")])
        );
    }

    #[test]
    fn share_text_reports_score() {
        let graph = scenario_graph();
        let mut session = GameSession::new(&graph, scenario_puzzle(), 10);
        session.submit_guess("bat").unwrap();
        session.submit_guess("cat").unwrap();
        session.submit_guess("cot").unwrap();
        session.submit_guess("cog").unwrap();

        assert_eq!(session.share_text(), "I completed WordChains in 4/2!");
    }

    #[test]
    fn restore_replays_guesses() {
        let graph = scenario_graph();
        let guesses = vec![word("cat"), word("cot")];
        let session = GameSession::restore(&graph, scenario_puzzle(), &guesses, 10).unwrap();

        assert_eq!(session.guesses(), guesses.as_slice());
        assert_eq!(session.state(), GameState::InProgress);
    }

    #[test]
    fn restore_finished_game() {
        let graph = scenario_graph();
        let guesses = vec![word("cat"), word("cot"), word("cog")];
        let session = GameSession::restore(&graph, scenario_puzzle(), &guesses, 10).unwrap();
        assert_eq!(session.state(), GameState::Won);
    }

    #[test]
    fn restore_keeps_outcome_under_a_lower_cap() {
        let graph = scenario_graph();
        let won = vec![word("cat"), word("cot"), word("cat"), word("cot"), word("cog")];
        let session = GameSession::restore(&graph, scenario_puzzle(), &won, 2).unwrap();
        assert_eq!(session.state(), GameState::Won);
        assert_eq!(session.score(), 4);
        assert_eq!(session.remaining_guesses(), 0);

        let wandering = vec![word("cat"), word("bat"), word("cat"), word("cot")];
        let session = GameSession::restore(&graph, scenario_puzzle(), &wandering, 2).unwrap();
        assert_eq!(session.state(), GameState::Lost);
    }

    #[test]
    fn restore_rejects_bad_sequences() {
        let graph = scenario_graph();
        let puzzle = scenario_puzzle();

        assert!(GameSession::restore(&graph, Arc::clone(&puzzle), &[], 10).is_err());
        assert!(GameSession::restore(&graph, Arc::clone(&puzzle), &[word("cot")], 10).is_err());
        assert!(
            GameSession::restore(&graph, Arc::clone(&puzzle), &[word("cat"), word("cog")], 10)
                .is_err()
        );
        assert!(
            GameSession::restore(
                &graph,
                puzzle,
                &[word("cat"), word("cot"), word("cog"), word("cot")],
                10
            )
            .is_err()
        );
    }

    #[test]
    fn snapshot_round_trip() {
        let graph = scenario_graph();
        let mut session = GameSession::new(&graph, scenario_puzzle(), 10);
        session.submit_guess("cot").unwrap();

        let today = NaiveDate::from_ymd_opt(2024, 3, 7).unwrap();
        let snapshot = session.snapshot(today);
        assert_eq!(snapshot.last_played, today);
        assert_eq!(snapshot.guesses, vec![word("cat"), word("cot")]);

        let restored = GameSession::restore(
            &graph,
            Arc::new(snapshot.puzzle.clone()),
            &snapshot.guesses,
            10,
        )
        .unwrap();
        assert_eq!(restored.guesses(), session.guesses());
    }
}

//! Word Chains
//!
//! A daily word ladder: change one letter at a time to turn the day's start word
//! into its target word. Every day gets the same puzzle everywhere, chosen by a
//! seeded walk over the word graph, and every word is coloured by how far it is
//! from the target.
//!
//! # Quick Start
//!
//! ```rust
//! use std::sync::Arc;
//! use chrono::NaiveDate;
//! use word_chains::core::WordGraph;
//! use word_chains::game::{GameSession, GameState};
//! use word_chains::puzzle::{DifficultyBand, SelectorConfig, select_daily};
//!
//! let graph = WordGraph::from_words(["aaaa", "baaa", "bbaa", "bbba", "bbbb"]);
//! let config = SelectorConfig {
//!     band: DifficultyBand::new(4, 5),
//!     ..SelectorConfig::default()
//! };
//! let day = NaiveDate::from_ymd_opt(2024, 3, 7).unwrap();
//!
//! let puzzle = select_daily(&graph, day, &config).unwrap();
//! let mut session = GameSession::new(&graph, Arc::new(puzzle), 25);
//! let next = graph.neighbors(session.current_word())[0].clone();
//! assert_eq!(session.submit_word(next), Ok(GameState::InProgress));
//! ```

// Core domain types
pub mod core;

// Daily puzzle selection
pub mod puzzle;

// Game sessions and persistence
pub mod game;

// Shared configuration
pub mod config;

// Word graph data
pub mod wordlists;

// Command implementations
pub mod commands;

// Terminal output formatting
pub mod output;

// Interactive TUI interface
pub mod interactive;

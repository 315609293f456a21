//! Terminal output formatting
//!
//! Display utilities for CLI results and pretty-printing.

pub mod display;
pub mod formatters;

pub use display::{
    colored_chain_word, print_calendar_report, print_chain, print_distance_report,
    print_game_over, print_puzzle_report,
};

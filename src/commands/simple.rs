//! Simple interactive CLI mode
//!
//! Plays the day's puzzle on plain stdin/stdout, one full word per line.

use crate::game::{DailyError, DailyGame, GameState, SessionStore};
use crate::output::{print_chain, print_game_over};
use chrono::NaiveDate;
use colored::Colorize;
use std::io::{self, Write};

/// Run the day's game in the terminal without the TUI
///
/// `today` is asked for the current day before each guess so that the game
/// moves on to the next puzzle at midnight.
///
/// # Errors
///
/// Returns an error on I/O failure, when the session cannot be saved, or when
/// the puzzle of a new day cannot be selected.
pub fn run_simple<S, F>(game: &mut DailyGame<'_, S>, today: F) -> Result<(), String>
where
    S: SessionStore,
    F: Fn() -> NaiveDate,
{
    println!("\n╔══════════════════════════════════════════════════════════════╗");
    println!("║                  Word Chains - Daily Puzzle                  ║");
    println!("╚══════════════════════════════════════════════════════════════╝\n");

    let puzzle = game.session().puzzle();
    println!(
        "Turn {} into {} changing one letter at a time.",
        puzzle.start.text().to_uppercase().bright_yellow().bold(),
        puzzle.target.text().to_uppercase().bright_yellow().bold()
    );
    println!("Every step must be a real word. The colour shows how close you are.");
    println!("Commands: 'quit' to exit\n");

    print_chain(game.session());
    if game.session().is_finished() {
        print_game_over(game.session());
        return Ok(());
    }

    loop {
        let prompt = format!(
            "Next word ({} left)",
            game.session().remaining_guesses()
        );
        let input = get_user_input(&prompt)?;
        let Some(input) = input else {
            println!("\n👋 See you tomorrow!\n");
            return Ok(());
        };

        match input.to_lowercase().as_str() {
            "" => continue,
            "quit" | "q" | "exit" => {
                println!("\n👋 See you tomorrow!\n");
                return Ok(());
            }
            _ => {}
        }

        if game.rollover(today()).map_err(|e| e.to_string())? {
            println!("\n🔄 A new day has started, here is today's puzzle.");
            print_chain(game.session());
            continue;
        }

        match game.submit(&input) {
            Ok(GameState::InProgress) => print_chain(game.session()),
            Ok(GameState::Won | GameState::Lost) => {
                print_chain(game.session());
                print_game_over(game.session());
                return Ok(());
            }
            Err(DailyError::Guess(e)) => println!("❌ {e}\n"),
            Err(e) => return Err(e.to_string()),
        }
    }
}

/// Get user input with a prompt, `None` at end of input
fn get_user_input(prompt: &str) -> Result<Option<String>, String> {
    print!("{prompt}: ");
    io::stdout().flush().map_err(|e| e.to_string())?;

    let mut input = String::new();
    let read = io::stdin()
        .read_line(&mut input)
        .map_err(|e| e.to_string())?;

    Ok((read > 0).then(|| input.trim().to_string()))
}

//! Display functions for command results

use super::formatters::{format_distance, format_path, heat_meter, heat_rgb};
use crate::commands::{CalendarReport, DistanceReport, PuzzleReport};
use crate::core::Distance;
use crate::game::{ChainEntry, ChainRole, GameSession, GameState};
use colored::Colorize;

/// Render one chain word with its letters on the heat colour
///
/// Letters already matching the target are bold, the letter changed from the
/// previous word is underlined.
#[must_use]
pub fn colored_chain_word(entry: &ChainEntry) -> String {
    let (r, g, b) = heat_rgb(entry.heat);
    entry
        .letters
        .iter()
        .map(|mark| {
            let mut letter = format!(" {} ", mark.letter.to_ascii_uppercase())
                .black()
                .on_truecolor(r, g, b);
            if mark.matches_target {
                letter = letter.bold();
            }
            if mark.changed {
                letter = letter.underline();
            }
            letter.to_string()
        })
        .collect()
}

/// Print the chain of a session, one word per line
pub fn print_chain(session: &GameSession<'_>) {
    println!();
    for entry in session.chain() {
        let label = match entry.role {
            ChainRole::Played => String::new(),
            ChainRole::Current => "← current".bright_white().to_string(),
            ChainRole::Target => "← target".bright_yellow().to_string(),
        };
        println!(
            "  {}  {} {:<12} {label}",
            colored_chain_word(&entry),
            heat_meter(entry.heat, 10).bright_black(),
            format_distance(entry.distance),
        );
    }
    println!();
}

/// Print the end-of-game summary
pub fn print_game_over(session: &GameSession<'_>) {
    let puzzle = session.puzzle();
    println!("\n{}", "═".repeat(60).bright_cyan());
    match session.state() {
        GameState::Won => println!(
            "{}",
            format!(
                "   Chain complete in {} moves (best possible: {})",
                session.score(),
                puzzle.min_moves
            )
            .bright_green()
            .bold()
        ),
        GameState::Lost => println!(
            "{}",
            format!("   Out of moves after {} guesses", session.score())
                .red()
                .bold()
        ),
        GameState::InProgress => {}
    }
    println!("{}", "═".repeat(60).bright_cyan());

    if let Some(path) = session.ideal_path() {
        println!("\n  Ideal path: {}", format_path(&path).bright_white());
    }
    println!("\n  {}\n", session.share_text());
}

/// Print the puzzle of a day
pub fn print_puzzle_report(report: &PuzzleReport, reveal: bool) {
    let puzzle = &report.selection.puzzle;

    println!("\n{}", "─".repeat(60).cyan());
    println!(" {} {}", "PUZZLE OF".bright_cyan().bold(), puzzle.date);
    println!("{}", "─".repeat(60).cyan());

    println!(
        "\n  {} → {}",
        puzzle.start.text().to_uppercase().bright_yellow().bold(),
        puzzle.target.text().to_uppercase().bright_yellow().bold()
    );
    println!("  Shortest chain:   {}", format_distance(Distance::Moves(puzzle.min_moves)));
    println!("  Selection tries:  {}", report.selection.attempts);

    if reveal {
        match &report.ideal_path {
            Some(path) => println!("  Ideal path:       {}", format_path(path)),
            None => println!("  Ideal path:       {}", "none".red()),
        }
        println!("  Greedy walk:      {}", format_path(&report.selection.walk));
    }
    println!();
}

/// Print the distance between two words
pub fn print_distance_report(report: &DistanceReport) {
    println!(
        "\n  {} → {}: {}",
        report.from.text().to_uppercase().bright_yellow(),
        report.to.text().to_uppercase().bright_yellow(),
        format_distance(report.distance).bold()
    );
    if let Some(path) = &report.path {
        println!("  {}", format_path(path));
    }
    println!();
}

/// Print the puzzles of a run of days with summary statistics
pub fn print_calendar_report(report: &CalendarReport) {
    println!("\n{}", "═".repeat(60).cyan());
    println!(" {} ", "PUZZLE CALENDAR".bright_cyan().bold());
    println!("{}", "═".repeat(60).cyan());
    println!();

    for day in &report.days {
        match &day.outcome {
            Ok(selection) => println!(
                "  {}  {:>6} → {:<6} {:>2} moves  ({} tries)",
                day.date,
                selection.puzzle.start.text().to_uppercase(),
                selection.puzzle.target.text().to_uppercase(),
                selection.puzzle.min_moves,
                selection.attempts
            ),
            Err(e) => println!("  {}  {}", day.date, e.to_string().red()),
        }
    }

    println!("\n📊 {}", "Summary:".bright_cyan().bold());
    println!("   Days:             {}", report.days.len());
    println!(
        "   Failures:         {}",
        if report.failures() == 0 {
            "0".green()
        } else {
            report.failures().to_string().red()
        }
    );
    println!("   Average tries:    {:.1}", report.average_attempts());
    println!("   Most tries:       {}", report.max_attempts());
    println!("   Time taken:       {:.2}s", report.duration.as_secs_f64());

    let repeated = report.repeated_targets();
    if !repeated.is_empty() {
        println!("\n   Repeated targets:");
        for (word, count) in repeated.iter().take(10) {
            println!("     {:<8} {count}×", word.text().to_uppercase());
        }
    }
    println!();
}

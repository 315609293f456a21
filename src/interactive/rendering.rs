//! TUI rendering with ratatui
//!
//! The chain is drawn one word per row, each letter on the colour of the word's
//! heat band.

use super::app::{App, MessageStyle};
use crate::core::{Distance, HeatBand};
use crate::game::{ChainEntry, ChainRole, GameState, SessionStore};
use crate::output::formatters::{format_distance, format_path, heat_rgb};
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Gauge, List, ListItem, Paragraph, Wrap},
};

/// Main UI rendering function
pub fn ui<S: SessionStore>(f: &mut Frame, app: &App<'_, S>) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Header
            Constraint::Min(10),   // Main content
            Constraint::Length(3), // Draft
            Constraint::Length(3), // Status bar
        ])
        .split(f.area());

    render_header(f, app, chunks[0]);

    let main_chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(55), Constraint::Percentage(45)])
        .split(chunks[1]);

    render_chain(f, app, main_chunks[0]);
    render_info_panel(f, app, main_chunks[1]);
    render_draft(f, app, chunks[2]);
    render_status(f, app, chunks[3]);
}

fn heat_color(heat: HeatBand) -> Color {
    let (r, g, b) = heat_rgb(heat);
    Color::Rgb(r, g, b)
}

fn render_header<S: SessionStore>(f: &mut Frame, app: &App<'_, S>, area: Rect) {
    let header = Paragraph::new(format!("🔗 WORD CHAINS - {}", app.game.today()))
        .style(
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        )
        .alignment(Alignment::Center)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded)
                .style(Style::default().fg(Color::Cyan)),
        );
    f.render_widget(header, area);
}

fn chain_line(entry: &ChainEntry) -> Line<'static> {
    let background = heat_color(entry.heat);
    let mut spans: Vec<Span> = entry
        .letters
        .iter()
        .map(|mark| {
            let mut style = Style::default().fg(Color::Black).bg(background);
            if mark.matches_target {
                style = style.add_modifier(Modifier::BOLD);
            }
            if mark.changed {
                style = style.add_modifier(Modifier::UNDERLINED);
            }
            Span::styled(format!(" {} ", mark.letter.to_ascii_uppercase()), style)
        })
        .collect();

    spans.push(Span::raw(format!("  {}", format_distance(entry.distance))));
    match entry.role {
        ChainRole::Played => {}
        ChainRole::Current => spans.push(Span::styled(
            "  ← current",
            Style::default().fg(Color::White),
        )),
        ChainRole::Target => spans.push(Span::styled(
            "  ← target",
            Style::default().fg(Color::Yellow),
        )),
    }
    Line::from(spans)
}

fn render_chain<S: SessionStore>(f: &mut Frame, app: &App<'_, S>, area: Rect) {
    let chain = app.game.session().chain();
    let mut lines: Vec<Line> = Vec::with_capacity(chain.len() * 2);
    for entry in &chain {
        if entry.role == ChainRole::Target {
            lines.push(Line::from(Span::styled(
                "   ⋮",
                Style::default().fg(Color::DarkGray),
            )));
        }
        lines.push(chain_line(entry));
    }

    // Keep the latest words visible on long chains
    let visible = usize::from(area.height.saturating_sub(2));
    let scroll = lines.len().saturating_sub(visible);
    let paragraph = Paragraph::new(lines)
        .scroll((u16::try_from(scroll).unwrap_or(u16::MAX), 0))
        .block(
            Block::default()
                .title(" Chain ")
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded),
        );
    f.render_widget(paragraph, area);
}

fn render_info_panel<S: SessionStore>(f: &mut Frame, app: &App<'_, S>, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(9), // Puzzle
            Constraint::Length(3), // Moves gauge
            Constraint::Min(5),    // Messages
        ])
        .split(area);

    render_puzzle(f, app, chunks[0]);
    render_moves(f, app, chunks[1]);
    render_messages(f, app, chunks[2]);
}

fn render_puzzle<S: SessionStore>(f: &mut Frame, app: &App<'_, S>, area: Rect) {
    let session = app.game.session();
    let puzzle = session.puzzle();
    let bold_yellow = Style::default()
        .fg(Color::Yellow)
        .add_modifier(Modifier::BOLD);

    let mut content = vec![
        Line::from(vec![
            Span::raw("Start:  "),
            Span::styled(puzzle.start.text().to_uppercase(), bold_yellow),
        ]),
        Line::from(vec![
            Span::raw("Target: "),
            Span::styled(puzzle.target.text().to_uppercase(), bold_yellow),
        ]),
        Line::from(format!("Best:   {}", format_distance(Distance::Moves(puzzle.min_moves)))),
    ];

    match session.state() {
        GameState::InProgress => {
            let here = session.distance_to_target(session.current_word());
            content.push(Line::from(format!("Now:    {}", format_distance(here))));
        }
        GameState::Won | GameState::Lost => {
            if let Some(path) = session.ideal_path() {
                content.push(Line::from(""));
                content.push(Line::from("Ideal path:"));
                content.push(Line::from(Span::styled(
                    format_path(&path),
                    Style::default().fg(Color::Green),
                )));
            }
        }
    }

    let paragraph = Paragraph::new(content)
        .block(
            Block::default()
                .title(" Puzzle ")
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded),
        )
        .wrap(Wrap { trim: false });
    f.render_widget(paragraph, area);
}

fn render_moves<S: SessionStore>(f: &mut Frame, app: &App<'_, S>, area: Rect) {
    let session = app.game.session();
    let used = session.score();
    let max = session.max_guesses();
    let percent = u16::try_from((used * 100 / max).min(100)).unwrap_or(100);
    let color = match session.state() {
        GameState::Won => Color::Green,
        GameState::Lost => Color::Red,
        GameState::InProgress => Color::Cyan,
    };

    let gauge = Gauge::default()
        .block(
            Block::default()
                .title(" Moves ")
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded),
        )
        .gauge_style(Style::default().fg(color))
        .percent(percent)
        .label(format!("{used}/{max} used"));
    f.render_widget(gauge, area);
}

fn render_messages<S: SessionStore>(f: &mut Frame, app: &App<'_, S>, area: Rect) {
    let messages: Vec<ListItem> = app
        .messages
        .iter()
        .rev()
        .map(|msg| {
            let style = match msg.style {
                MessageStyle::Info => Style::default().fg(Color::White),
                MessageStyle::Success => Style::default().fg(Color::Green),
                MessageStyle::Error => Style::default().fg(Color::Red),
            };
            ListItem::new(msg.text.clone()).style(style)
        })
        .collect();

    let messages_list =
        List::new(messages).block(Block::default().title(" Messages ").borders(Borders::ALL));
    f.render_widget(messages_list, area);
}

fn render_draft<S: SessionStore>(f: &mut Frame, app: &App<'_, S>, area: Rect) {
    let finished = app.game.session().is_finished();
    let changed = app.changed_positions();

    let spans: Vec<Span> = app
        .draft
        .chars()
        .enumerate()
        .map(|(i, letter)| {
            let mut style = Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD);
            if changed.contains(&i) {
                style = style.fg(Color::Cyan);
            }
            if i == app.cursor && !finished {
                style = style.add_modifier(Modifier::REVERSED);
            }
            Span::styled(format!(" {} ", letter.to_ascii_uppercase()), style)
        })
        .collect();

    let title = if finished {
        " Come back tomorrow for a new chain "
    } else {
        " Next word | ←/→ select letter | type to change | Enter to submit "
    };
    let input = Paragraph::new(Line::from(spans)).block(
        Block::default()
            .title(title)
            .borders(Borders::ALL)
            .border_type(BorderType::Double)
            .style(Style::default().fg(if finished { Color::Green } else { Color::Yellow })),
    );
    f.render_widget(input, area);
}

fn render_status<S: SessionStore>(f: &mut Frame, app: &App<'_, S>, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage(34),
            Constraint::Percentage(33),
            Constraint::Percentage(33),
        ])
        .split(area);

    let session = app.game.session();
    let state = Paragraph::new(format!("Game: {}", session.state())).alignment(Alignment::Center);
    f.render_widget(state, chunks[0]);

    let remaining = Paragraph::new(format!("Guesses left: {}", session.remaining_guesses()))
        .alignment(Alignment::Center);
    f.render_widget(remaining, chunks[1]);

    let help = Paragraph::new("Esc: Quit | Backspace: Undo edit")
        .alignment(Alignment::Center)
        .style(Style::default().fg(Color::DarkGray));
    f.render_widget(help, chunks[2]);
}

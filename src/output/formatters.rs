//! Formatting utilities for terminal output

use crate::core::{Distance, HEAT_BANDS, HeatBand, Word};

/// Display colour of each heat band, hottest first
pub const HEAT_COLORS: [(u8, u8, u8); HEAT_BANDS as usize] = [
    (231, 76, 60),
    (235, 112, 52),
    (240, 148, 45),
    (243, 182, 40),
    (214, 200, 62),
    (156, 198, 92),
    (96, 186, 150),
    (72, 158, 200),
    (62, 120, 210),
    (84, 84, 196),
];

/// RGB colour of a heat band
#[must_use]
pub fn heat_rgb(heat: HeatBand) -> (u8, u8, u8) {
    HEAT_COLORS[usize::from(heat.value()).min(HEAT_COLORS.len() - 1)]
}

/// Human-readable distance
#[must_use]
pub fn format_distance(distance: Distance) -> String {
    match distance {
        Distance::Moves(1) => "1 move".to_string(),
        Distance::Moves(n) => format!("{n} moves"),
        Distance::Unreachable => "unreachable".to_string(),
    }
}

/// Words joined by arrows, uppercased
#[must_use]
pub fn format_path(path: &[Word]) -> String {
    path.iter()
        .map(|w| w.text().to_uppercase())
        .collect::<Vec<_>>()
        .join(" → ")
}

/// Bar that fills up as a word gets closer to the target
#[must_use]
pub fn heat_meter(heat: HeatBand, width: usize) -> String {
    let bands = usize::from(HEAT_BANDS);
    let closeness = bands - usize::from(heat.value());
    let filled = (closeness * width / bands).min(width);

    format!("{}{}", "█".repeat(filled), "░".repeat(width - filled))
}

//! Formatting utilities for terminal output

use chrono::{NaiveTime, Timelike};
use colored::Colorize;

use crate::core::{CharInspection, Game, WORD_LENGTH};

const CELL_WIDTH: usize = 5;

/// Format a single inspected letter as a colored cell.
///
/// Valid letters render black on green, misplaced black on yellow, and
/// absent white on black, matching the familiar three-state grid.
#[must_use]
pub fn format_cell(inspection: &CharInspection) -> String {
    let text = format!("  {}  ", inspection.char);

    let cell = if inspection.valid {
        text.black().on_green().bold()
    } else if inspection.misplaced {
        text.black().on_yellow().bold()
    } else {
        text.white().on_black().bold()
    };

    cell.to_string()
}

fn border(left: char, junction: char, right: char) -> String {
    let segment = "━".repeat(CELL_WIDTH);
    let middle = vec![segment; WORD_LENGTH].join(&junction.to_string());
    format!("{left}{middle}{right}")
}

/// Render the game grid: one row per attempt, then one blank row per
/// remaining attempt.
#[must_use]
pub fn format_grid(game: &Game) -> String {
    let empty_cell = " ".repeat(CELL_WIDTH);
    let mut rows: Vec<String> = Vec::with_capacity(game.max_attempts);

    for attempt in &game.attempts {
        let cells: Vec<String> = attempt.chars.iter().map(format_cell).collect();
        rows.push(format!("┃{}┃", cells.join("┃")));
    }

    for _ in 0..game.attempts_left() {
        let cells = vec![empty_cell.clone(); WORD_LENGTH];
        rows.push(format!("┃{}┃", cells.join("┃")));
    }

    let mut lines = Vec::with_capacity(rows.len() * 2 + 1);
    lines.push(border('┏', '┳', '┓'));
    for (i, row) in rows.iter().enumerate() {
        if i > 0 {
            lines.push(border('┣', '╋', '┫'));
        }
        lines.push(row.clone());
    }
    lines.push(border('┗', '┻', '┛'));

    lines.join("\n")
}

/// Time remaining until the next local midnight, formatted `HH:MM:SS`.
#[must_use]
pub fn format_countdown(now: NaiveTime) -> String {
    let remaining = 86_400 - i64::from(now.num_seconds_from_midnight());
    let hours = remaining / 3600;
    let minutes = remaining % 3600 / 60;
    let seconds = remaining % 60;

    format!("{hours:02}:{minutes:02}:{seconds:02}")
}

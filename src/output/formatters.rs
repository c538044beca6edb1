//! Formatting utilities for terminal output

use crate::core::{BOARD_SIDE, Board, Cell};
use crate::solver::WordResult;

/// The face shown for a tile, `Qu` for the q tile
#[must_use]
pub fn tile_label(letter: u8) -> String {
    match letter {
        b'q' => "Qu".to_string(),
        _ => char::from(letter).to_ascii_uppercase().to_string(),
    }
}

/// Board rows with the cells on `path` bracketed
///
/// Each tile takes four columns so `Qu` lines up with single letters.
#[must_use]
pub fn board_rows(board: &Board, path: &[Cell]) -> Vec<String> {
    board
        .letters()
        .chunks(BOARD_SIDE)
        .enumerate()
        .map(|(row, letters)| {
            letters
                .iter()
                .enumerate()
                .map(|(col, &letter)| {
                    let cell = row * BOARD_SIDE + col + 1;
                    let label = tile_label(letter);
                    if path.contains(&cell) {
                        format!("[{label:<2}]")
                    } else {
                        format!(" {label:<2} ")
                    }
                })
                .collect::<String>()
        })
        .collect()
}

/// Lay words out in fixed-width columns, row by row
#[must_use]
pub fn word_columns(words: &[WordResult], columns: usize) -> Vec<String> {
    let width = words.iter().map(|w| w.word.len()).max().unwrap_or(0) + 5;
    words
        .chunks(columns.max(1))
        .map(|chunk| {
            chunk
                .iter()
                .map(|w| format!("{:<width$}", format!("{} ({})", w.word, w.score)))
                .collect::<String>()
                .trim_end()
                .to_string()
        })
        .collect()
}

/// Create a progress bar string
#[must_use]
pub fn create_progress_bar(value: f64, max: f64, width: usize) -> String {
    if max <= 0.0 {
        return "░".repeat(width);
    }
    // Cast is safe: values are clamped to [0, width]
    let filled = ((value / max) * width as f64) as usize;
    let filled = filled.min(width);

    format!("{}{}", "█".repeat(filled), "░".repeat(width - filled))
}

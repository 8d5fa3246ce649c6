//! Formatting utilities for terminal output

use crate::core::{Tile, TileState};
use colored::{ColoredString, Colorize};

/// One tile as a bold uppercase letter on its feedback color
#[must_use]
pub fn colored_tile(tile: Tile) -> ColoredString {
    let letter = format!(" {} ", tile.display_letter()).bold();
    match tile.state {
        TileState::Correct => letter.black().on_green(),
        TileState::Present => letter.black().on_yellow(),
        TileState::Absent => letter.white().on_bright_black(),
    }
}

/// A full guess row of colored tiles
#[must_use]
pub fn colored_row(tiles: &[Tile]) -> String {
    tiles.iter().map(|&tile| colored_tile(tile).to_string()).collect()
}

/// Create a progress bar string
#[must_use]
pub fn create_progress_bar(value: f64, max: f64, width: usize) -> String {
    if max <= 0.0 {
        return "░".repeat(width);
    }
    // Cast is safe: values are clamped to [0, width]
    let filled = ((value / max) * width as f64).max(0.0) as usize;
    let filled = filled.min(width);

    format!("{}{}", "█".repeat(filled), "░".repeat(width - filled))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn progress_bar_empty() {
        let bar = create_progress_bar(0.0, 100.0, 10);
        assert_eq!(bar, "░░░░░░░░░░");
    }

    #[test]
    fn progress_bar_full() {
        let bar = create_progress_bar(100.0, 100.0, 10);
        assert_eq!(bar, "██████████");
    }

    #[test]
    fn progress_bar_half() {
        let bar = create_progress_bar(50.0, 100.0, 10);
        assert_eq!(bar, "█████░░░░░");
    }

    #[test]
    fn progress_bar_zero_max() {
        assert_eq!(create_progress_bar(5.0, 0.0, 4), "░░░░");
    }

    #[test]
    fn colored_row_keeps_letters() {
        colored::control::set_override(false);
        let tiles = [Tile {
            letter: b'a',
            state: TileState::Correct,
        }];
        assert_eq!(colored_row(&tiles), " A ");
    }
}

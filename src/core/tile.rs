//! Per-letter feedback
//!
//! Each position of a guess is classified as one of three tile states:
//! - Correct: right letter in the right position
//! - Present: letter appears elsewhere in the answer
//! - Absent: letter not in the answer (or all copies already credited)

use super::score::{POINTS_ABSENT, POINTS_CORRECT, POINTS_PRESENT};
use super::word::WORD_LENGTH;

/// Result of matching one letter position
///
/// Ordered by strength, so `max()` yields the most informative state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum TileState {
    Absent,
    Present,
    Correct,
}

/// One row of feedback, one state per letter
pub type TileRow = [TileState; WORD_LENGTH];

impl TileState {
    /// Points this tile contributes to a guess score
    #[must_use]
    pub const fn points(self) -> u32 {
        match self {
            Self::Correct => POINTS_CORRECT,
            Self::Present => POINTS_PRESENT,
            Self::Absent => POINTS_ABSENT,
        }
    }

    /// Emoji used when sharing results
    #[must_use]
    pub const fn emoji(self) -> char {
        match self {
            Self::Correct => '🟩',
            Self::Present => '🟨',
            Self::Absent => '⬛',
        }
    }
}

/// A letter paired with its tile state
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Tile {
    pub letter: u8,
    pub state: TileState,
}

impl Tile {
    /// The letter as an uppercase display character
    #[must_use]
    pub const fn display_letter(self) -> char {
        self.letter.to_ascii_uppercase() as char
    }
}

/// Render a row as emoji, e.g. "🟩🟨⬛⬛🟩"
#[must_use]
pub fn row_to_emoji(row: &TileRow) -> String {
    row.iter().map(|state| state.emoji()).collect()
}

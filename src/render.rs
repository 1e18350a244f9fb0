//! Console rendering of boards.
use crate::board::Board;
use crate::cell::Cell;
use itertools::Itertools;

/// Display strings for each [Cell] status.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Glyphs {
    pub empty: &'static str,
    pub obstacle: &'static str,
    pub visited: &'static str,
    pub path: &'static str,
    pub start: &'static str,
    pub finish: &'static str,
}

impl Glyphs {
    /// The classic console look. Visited cells print like empty ones.
    pub const EMOJI: Glyphs = Glyphs {
        empty: " 0   ",
        obstacle: "⛰️   ",
        visited: " 0   ",
        path: "🚗   ",
        start: "🚦   ",
        finish: "🏁   ",
    };

    /// One character per cell, for terminals without emoji support.
    pub const ASCII: Glyphs = Glyphs {
        empty: ".",
        obstacle: "#",
        visited: "o",
        path: "*",
        start: "S",
        finish: "G",
    };

    pub fn glyph(&self, cell: Cell) -> &'static str {
        match cell {
            Cell::Empty => self.empty,
            Cell::Obstacle => self.obstacle,
            Cell::Visited => self.visited,
            Cell::Path => self.path,
            Cell::Start => self.start,
            Cell::Finish => self.finish,
        }
    }
}

impl Default for Glyphs {
    fn default() -> Glyphs {
        Glyphs::EMOJI
    }
}

/// Renders `board` one line per row.
pub fn render(board: &Board, glyphs: &Glyphs) -> String {
    board
        .to_rows()
        .into_iter()
        .map(|row| row.into_iter().map(|cell| glyphs.glyph(cell)).join("") + "\n")
        .collect()
}

//! Pointer handling: press on a piece, release on a target

use chess_core::{square_from_display, Color, Game, Square};

/// Square under a pointer position relative to the board's top-left corner.
pub fn square_at(x: f32, y: f32, square_size: f32) -> Option<Square> {
    if x < 0.0 || y < 0.0 || square_size <= 0.0 {
        return None;
    }
    let file = (x / square_size) as usize;
    let display_row = (y / square_size) as usize;
    square_from_display(file, display_row)
}

/// Press/release selection state
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Selection {
    #[default]
    Idle,
    Armed(Square),
}

/// A move the user dragged, not yet checked against the rules.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CandidateMove {
    pub from: Square,
    pub to: Square,
}

#[derive(Debug, Clone)]
pub struct InputHandler {
    human: Color,
    selection: Selection,
}

impl InputHandler {
    pub fn new(human: Color) -> Self {
        Self {
            human,
            selection: Selection::Idle,
        }
    }

    pub fn selection(&self) -> Selection {
        self.selection
    }

    /// Arm on a press over one of the human's pieces; any other press
    /// leaves the selection as it was.
    pub fn press(&mut self, square: Option<Square>, game: &Game) {
        let Some(square) = square else {
            return;
        };
        if let Some((color, _)) = game.piece_at(square) {
            if color == self.human {
                self.selection = Selection::Armed(square);
            }
        }
    }

    /// Always returns to `Idle`. Yields a candidate only when armed and the
    /// release landed on the board.
    pub fn release(&mut self, square: Option<Square>) -> Option<CandidateMove> {
        let selection = std::mem::take(&mut self.selection);
        match (selection, square) {
            (Selection::Armed(from), Some(to)) => Some(CandidateMove { from, to }),
            _ => None,
        }
    }

    pub fn reset(&mut self) {
        self.selection = Selection::Idle;
    }
}

#[cfg(test)]
#[path = "input_tests.rs"]
mod input_tests;

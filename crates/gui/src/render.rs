//! Position to render frame.
//!
//! The frame is plain data computed from scratch on every view: square
//! fills, piece sprites and the optional result banner. `board.rs` turns it
//! into widgets.

use crate::sprites::SpriteKey;
use crate::styles;
use chess_core::{color_name, File, Game, Outcome, Rank, Square};
use iced::Color;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Cell {
    pub fill: Color,
    pub piece: Option<SpriteKey>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Banner {
    pub text: String,
    pub text_color: Color,
    pub background: Color,
}

impl Banner {
    fn new(text: impl Into<String>, (text_color, background): (Color, Color)) -> Self {
        Self {
            text: text.into(),
            text_color,
            background,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct RenderFrame {
    /// Display rows, top (rank 8) first
    pub rows: [[Cell; 8]; 8],
    pub banner: Option<Banner>,
}

/// Fill of a display cell before any highlighting.
pub fn base_color(row: usize, col: usize) -> Color {
    if (row + col) % 2 == 0 {
        styles::DARK_SQUARE
    } else {
        styles::LIGHT_SQUARE
    }
}

impl RenderFrame {
    pub fn compute(game: &Game) -> Self {
        let checked_king = game
            .is_check()
            .then(|| game.king_square(game.side_to_move()));
        let checkers = game.checkers();

        let rows = std::array::from_fn(|row| {
            std::array::from_fn(|col| {
                let square = Square::new(File::ALL[col], Rank::ALL[7 - row]);

                let fill = if checked_king == Some(square) {
                    styles::CHECK_SQUARE
                } else if checkers.has(square) {
                    styles::ATTACKER_SQUARE
                } else {
                    base_color(row, col)
                };

                let piece = game
                    .piece_at(square)
                    .map(|(color, piece)| SpriteKey::new(color, piece));

                Cell { fill, piece }
            })
        });

        Self {
            rows,
            banner: banner_for(game),
        }
    }
}

/// Result banner, shown only once the game is over.
pub fn banner_for(game: &Game) -> Option<Banner> {
    let outcome = game.outcome()?;
    let banner = match outcome {
        Outcome::Checkmate { winner } => Banner::new(
            format!("Checkmate! {} wins!", color_name(winner)),
            styles::CHECKMATE_BANNER,
        ),
        Outcome::Stalemate | Outcome::InsufficientMaterial | Outcome::SeventyFiveMoves => {
            Banner::new("Draw!", styles::DRAW_BANNER)
        }
        Outcome::FivefoldRepetition if game.is_check() => {
            Banner::new("Check!", styles::CHECK_BANNER)
        }
        Outcome::FivefoldRepetition => Banner::new("Game Over!", styles::GAME_OVER_BANNER),
    };
    Some(banner)
}

#[cfg(test)]
#[path = "render_tests.rs"]
mod render_tests;

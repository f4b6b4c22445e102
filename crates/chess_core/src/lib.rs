//! Rules facade for the play-vs-engine board.
//!
//! All chess rules come from `cozy-chess`. This crate adds the thin layer the
//! GUI and the engine client share: a move-history-aware [`Game`], the
//! game-over predicates `cozy-chess` leaves to callers, and standard UCI
//! notation (castling as a two-square king move).

pub mod error;
pub mod game;
pub mod types;
pub mod uci;

pub use error::ChessError;
pub use game::{legal_moves, Game, Outcome};
pub use types::*;
pub use uci::*;

// Re-export the rules library types that appear in this crate's API
pub use cozy_chess::{BitBoard, Board, Color, File, Move, Piece, Rank, Square};

//! Game record on top of a `cozy-chess` board.
//!
//! `cozy-chess` answers legality and check questions for a single board. A
//! game also needs the move list (for the engine's `position` command) and
//! the hash history (for fivefold repetition), so [`Game`] owns both and is
//! the only way the board gets mutated.

use crate::error::ChessError;
use crate::uci::{move_to_uci, standard_destination};
use cozy_chess::{BitBoard, Board, Color, Move, Piece, Square};

/// Squares of the same shade as a1.
const DARK_SQUARES: BitBoard = BitBoard(0xAA55_AA55_AA55_AA55);

/// Halfmoves without capture or pawn move that end the game outright.
const SEVENTY_FIVE_MOVE_PLIES: u16 = 150;

/// Highest halfmove clock `cozy-chess` stores or accepts in a FEN.
const BOARD_CLOCK_CAP: u16 = 100;

/// Occurrences of one position that end the game outright.
const FIVEFOLD: usize = 5;

/// Every legal move in `board`.
pub fn legal_moves(board: &Board) -> Vec<Move> {
    let mut moves = Vec::new();
    board.generate_moves(|piece_moves| {
        moves.extend(piece_moves);
        false
    });
    moves
}

/// Why a game ended, in the order the checks are made.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    Checkmate { winner: Color },
    InsufficientMaterial,
    Stalemate,
    SeventyFiveMoves,
    FivefoldRepetition,
}

#[derive(Debug, Clone)]
pub struct Game {
    /// FEN the game started from; `None` for the standard start position
    start_fen: Option<String>,
    board: Board,
    /// Moves played so far, in UCI notation
    played: Vec<String>,
    /// Board hash after every ply, starting position included
    hashes: Vec<u64>,
    /// Plies since the last capture or pawn move. Tracked here because the
    /// board's own clock saturates at 100.
    halfmove_clock: u16,
}

impl Default for Game {
    fn default() -> Self {
        Self::new()
    }
}

impl Game {
    pub fn new() -> Self {
        let board = Board::default();
        let hash = board.hash();
        Self {
            start_fen: None,
            board,
            played: Vec::new(),
            hashes: vec![hash],
            halfmove_clock: 0,
        }
    }

    pub fn from_fen(fen: &str) -> Result<Self, ChessError> {
        let invalid = |reason: String| ChessError::InvalidFen {
            fen: fen.to_string(),
            reason,
        };

        let capped = BOARD_CLOCK_CAP.to_string();
        let mut fields: Vec<&str> = fen.split_whitespace().collect();
        let halfmove_clock = match fields.get(4) {
            Some(field) => field
                .parse::<u16>()
                .map_err(|e| invalid(format!("halfmove clock {field:?}: {e}")))?,
            None => 0,
        };

        // The board only needs to know the clock up to its cap
        if halfmove_clock > BOARD_CLOCK_CAP {
            fields[4] = &capped;
        }
        let board =
            Board::from_fen(&fields.join(" "), false).map_err(|e| invalid(format!("{e:?}")))?;

        let hash = board.hash();
        Ok(Self {
            start_fen: Some(fen.to_string()),
            board,
            played: Vec::new(),
            hashes: vec![hash],
            halfmove_clock,
        })
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn side_to_move(&self) -> Color {
        self.board.side_to_move()
    }

    pub fn played_moves(&self) -> &[String] {
        &self.played
    }

    /// Plies since the last capture or pawn move, uncapped.
    pub fn halfmove_clock(&self) -> u16 {
        self.halfmove_clock
    }

    pub fn legal_moves(&self) -> Vec<Move> {
        legal_moves(&self.board)
    }

    /// Legal move going from `from` to `to` as seen on the board.
    ///
    /// Castling is matched by the king's destination square and promotions
    /// resolve to a queen.
    pub fn find_move(&self, from: Square, to: Square) -> Option<Move> {
        self.legal_moves().into_iter().find(|&mv| {
            mv.from == from
                && standard_destination(&self.board, mv) == to
                && matches!(mv.promotion, None | Some(Piece::Queen))
        })
    }

    /// Apply a legal move. The board is left untouched on error.
    pub fn push(&mut self, mv: Move) -> Result<(), ChessError> {
        if !self.board.is_legal(mv) {
            return Err(ChessError::IllegalMove(mv.to_string()));
        }
        // Castling lands on an own rook, so only enemy-occupied targets count
        let resets_clock = self.board.piece_on(mv.from) == Some(Piece::Pawn)
            || self.board.color_on(mv.to) == Some(!self.board.side_to_move());
        self.halfmove_clock = if resets_clock {
            0
        } else {
            self.halfmove_clock.saturating_add(1)
        };

        self.played.push(move_to_uci(&self.board, mv));
        self.board.play_unchecked(mv);
        self.hashes.push(self.board.hash());
        Ok(())
    }

    /// Arguments for a UCI `position` command describing this game.
    pub fn uci_position(&self) -> String {
        let mut s = match &self.start_fen {
            Some(fen) => format!("fen {fen}"),
            None => "startpos".to_string(),
        };
        if !self.played.is_empty() {
            s.push_str(" moves ");
            s.push_str(&self.played.join(" "));
        }
        s
    }

    pub fn piece_at(&self, sq: Square) -> Option<(Color, Piece)> {
        Some((self.board.color_on(sq)?, self.board.piece_on(sq)?))
    }

    pub fn king_square(&self, color: Color) -> Square {
        self.board.king(color)
    }

    pub fn is_check(&self) -> bool {
        !self.board.checkers().is_empty()
    }

    /// Pieces giving check to the side to move.
    pub fn checkers(&self) -> BitBoard {
        self.board.checkers()
    }

    fn has_legal_moves(&self) -> bool {
        !self.legal_moves().is_empty()
    }

    pub fn is_checkmate(&self) -> bool {
        self.is_check() && !self.has_legal_moves()
    }

    pub fn is_stalemate(&self) -> bool {
        !self.is_check() && !self.has_legal_moves()
    }

    pub fn is_insufficient_material(&self) -> bool {
        Color::ALL
            .iter()
            .all(|&color| self.has_insufficient_material(color))
    }

    /// Whether `color` can never deliver mate, whatever the opponent plays.
    pub fn has_insufficient_material(&self, color: Color) -> bool {
        let b = &self.board;
        let ours = b.colors(color);
        let heavy = b.pieces(Piece::Pawn) | b.pieces(Piece::Rook) | b.pieces(Piece::Queen);
        if !(ours & heavy).is_empty() {
            return false;
        }

        if !(ours & b.pieces(Piece::Knight)).is_empty() {
            // A lone knight only mates with the opponent's own pieces in the way
            let theirs = b.colors(!color);
            let blockers = theirs & !b.pieces(Piece::King) & !b.pieces(Piece::Queen);
            return ours.len() <= 2 && blockers.is_empty();
        }

        let bishops = b.pieces(Piece::Bishop);
        if !(ours & bishops).is_empty() {
            let same_shade =
                (bishops & DARK_SQUARES).is_empty() || (bishops & !DARK_SQUARES).is_empty();
            return same_shade
                && b.pieces(Piece::Pawn).is_empty()
                && b.pieces(Piece::Knight).is_empty();
        }

        true
    }

    pub fn is_seventy_five_moves(&self) -> bool {
        self.halfmove_clock >= SEVENTY_FIVE_MOVE_PLIES && self.has_legal_moves()
    }

    pub fn is_fivefold_repetition(&self) -> bool {
        let current = self.board.hash();
        self.hashes.iter().filter(|&&h| h == current).count() >= FIVEFOLD
    }

    /// Terminal status, or `None` while the game goes on.
    pub fn outcome(&self) -> Option<Outcome> {
        if self.is_checkmate() {
            return Some(Outcome::Checkmate {
                winner: !self.side_to_move(),
            });
        }
        if self.is_insufficient_material() {
            return Some(Outcome::InsufficientMaterial);
        }
        if !self.has_legal_moves() {
            return Some(Outcome::Stalemate);
        }
        if self.is_seventy_five_moves() {
            return Some(Outcome::SeventyFiveMoves);
        }
        if self.is_fivefold_repetition() {
            return Some(Outcome::FivefoldRepetition);
        }
        None
    }

    pub fn is_game_over(&self) -> bool {
        self.outcome().is_some()
    }
}

#[cfg(test)]
#[path = "game_tests.rs"]
mod game_tests;

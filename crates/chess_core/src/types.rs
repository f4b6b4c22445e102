//! Coordinate and symbol helpers shared by rendering and input code.

use cozy_chess::{Color, File, Piece, Rank, Square};

/// Square under a display cell. Row 0 is the top of the board (rank 8).
pub fn square_from_display(file: usize, display_row: usize) -> Option<Square> {
    if file >= 8 || display_row >= 8 {
        return None;
    }
    Some(Square::new(File::ALL[file], Rank::ALL[7 - display_row]))
}

/// Display `(row, col)` of a square; inverse of [`square_from_display`].
pub fn display_coords(sq: Square) -> (usize, usize) {
    (7 - sq.rank() as usize, sq.file() as usize)
}

/// FEN-style piece letter: uppercase for White, lowercase for Black.
pub fn piece_symbol(color: Color, piece: Piece) -> char {
    let ch = match piece {
        Piece::Pawn => 'p',
        Piece::Knight => 'n',
        Piece::Bishop => 'b',
        Piece::Rook => 'r',
        Piece::Queen => 'q',
        Piece::King => 'k',
    };
    match color {
        Color::White => ch.to_ascii_uppercase(),
        Color::Black => ch,
    }
}

pub fn color_name(color: Color) -> &'static str {
    match color {
        Color::White => "White",
        Color::Black => "Black",
    }
}

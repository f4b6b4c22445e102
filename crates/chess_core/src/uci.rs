use crate::game::legal_moves;
use cozy_chess::{Board, File, Move, Piece, Square};

/// Destination of `mv` in standard notation.
///
/// `cozy-chess` encodes castling as the king capturing its own rook; UCI and
/// the mouse both expect the king's two-square step instead.
pub fn standard_destination(board: &Board, mv: Move) -> Square {
    let is_castle = board.piece_on(mv.from) == Some(Piece::King)
        && board.color_on(mv.to).is_some()
        && board.color_on(mv.to) == board.color_on(mv.from);
    if !is_castle {
        return mv.to;
    }
    let file = if (mv.to.file() as usize) > (mv.from.file() as usize) {
        File::G
    } else {
        File::C
    };
    Square::new(file, mv.from.rank())
}

pub fn move_to_uci(board: &Board, mv: Move) -> String {
    let mut s = format!("{}{}", mv.from, standard_destination(board, mv));
    if let Some(p) = mv.promotion {
        let ch = match p {
            Piece::Queen => 'q',
            Piece::Rook => 'r',
            Piece::Bishop => 'b',
            Piece::Knight => 'n',
            _ => 'q',
        };
        s.push(ch);
    }
    s
}

pub fn parse_uci_move(board: &Board, txt: &str) -> Option<Move> {
    // Match against legal moves so castling comes back in cozy-chess encoding.
    let txt = txt.trim().to_ascii_lowercase();
    if txt.len() < 4 {
        return None;
    }
    legal_moves(board)
        .into_iter()
        .find(|&mv| move_to_uci(board, mv) == txt)
}

#[cfg(test)]
#[path = "uci_tests.rs"]
mod uci_tests;

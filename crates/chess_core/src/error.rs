use thiserror::Error;

/// Errors raised by the rules facade.
#[derive(Debug, Error)]
pub enum ChessError {
    #[error("invalid FEN {fen:?}: {reason}")]
    InvalidFen { fen: String, reason: String },

    #[error("illegal move {0} in current position")]
    IllegalMove(String),
}

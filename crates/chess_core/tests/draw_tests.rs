//! Draw and game-over detection on top of cozy-chess.
//!
//! - Stalemate
//! - Insufficient material
//! - Outcome priority

use chess_core::{Game, Outcome};

fn game(fen: &str) -> Game {
    Game::from_fen(fen).expect("valid FEN")
}

// =============================================================================
// Stalemate Tests
// =============================================================================

#[test]
fn test_stalemate_king_in_corner() {
    // Black king on a8, White queen on b6, White king on c7
    let g = game("k7/2K5/1Q6/8/8/8/8/8 b - - 0 1");
    assert!(g.legal_moves().is_empty());
    assert!(!g.is_check(), "Stalemate means king is not in check");
    assert_eq!(g.outcome(), Some(Outcome::Stalemate));
}

#[test]
fn test_stalemate_king_and_pawn_endgame() {
    let g = game("6k1/6P1/6K1/8/8/8/8/8 b - - 0 1");
    assert!(g.is_stalemate());
    assert!(g.is_game_over());
}

// =============================================================================
// Insufficient Material Tests
// =============================================================================

#[test]
fn test_insufficient_material_king_vs_king() {
    let g = game("8/8/8/4k3/8/4K3/8/8 w - - 0 1");
    assert!(g.is_insufficient_material());
    assert_eq!(g.outcome(), Some(Outcome::InsufficientMaterial));
}

#[test]
fn test_insufficient_material_single_minor() {
    for fen in [
        "8/8/8/4k3/8/4KB2/8/8 w - - 0 1",
        "8/8/8/4k3/8/4KN2/8/8 w - - 0 1",
        "8/8/4b3/4k3/8/4K3/8/8 w - - 0 1",
        "8/8/4n3/4k3/8/4K3/8/8 w - - 0 1",
    ] {
        assert!(game(fen).is_insufficient_material(), "{fen}");
    }
}

#[test]
fn test_insufficient_material_same_color_bishops() {
    // c1 and f8 are both dark squares
    let g = game("5b2/8/8/4k3/8/4K3/8/2B5 w - - 0 1");
    assert!(g.is_insufficient_material());
}

#[test]
fn test_sufficient_material_opposite_color_bishops() {
    // c1 is dark, c8 is light
    let g = game("2b5/8/8/4k3/8/4K3/8/2B5 w - - 0 1");
    assert!(!g.is_insufficient_material());
}

#[test]
fn test_sufficient_material() {
    for fen in [
        "8/8/8/4k3/8/4K3/4P3/8 w - - 0 1", // pawn
        "8/8/8/4k3/8/4K3/8/4R3 w - - 0 1", // rook
        "8/8/8/4k3/8/4K3/8/4Q3 w - - 0 1", // queen
        "8/8/8/4k3/8/4K3/3NN3/8 w - - 0 1", // two knights
        "8/8/4n3/4k3/8/4KB2/8/8 w - - 0 1", // bishop vs knight
    ] {
        let g = game(fen);
        assert!(!g.is_insufficient_material(), "{fen}");
        assert_eq!(g.outcome(), None, "{fen}");
    }
}

#[test]
fn test_checkmate_wins_over_material_count() {
    // Back-rank mate: the rook side has material, mate is reported first
    let g = game("R5k1/5ppp/8/8/8/8/8/6K1 b - - 0 1");
    assert_eq!(
        g.outcome(),
        Some(Outcome::Checkmate {
            winner: chess_core::Color::White
        })
    );
}

use super::*;
use chess_core::{display_coords, parse_uci_move, Color, Piece};

trait CellAt {
    fn cell(&self, square: Square) -> &Cell;
}

impl CellAt for RenderFrame {
    fn cell(&self, square: Square) -> &Cell {
        let (row, col) = display_coords(square);
        &self.rows[row][col]
    }
}

fn play(game: &mut Game, moves: &[&str]) {
    for txt in moves {
        let mv = parse_uci_move(game.board(), txt).unwrap();
        game.push(mv).unwrap();
    }
}

fn fen(fen: &str) -> Game {
    Game::from_fen(fen).unwrap()
}

#[test]
fn test_base_colors_without_check() {
    let frame = RenderFrame::compute(&Game::new());
    for (row, cells) in frame.rows.iter().enumerate() {
        for (col, cell) in cells.iter().enumerate() {
            assert_eq!(cell.fill, base_color(row, col), "row {row} col {col}");
        }
    }
    assert_eq!(frame.rows[0][0].fill, styles::DARK_SQUARE);
    assert_eq!(frame.rows[0][1].fill, styles::LIGHT_SQUARE);
    assert_eq!(frame.banner, None);
}

#[test]
fn test_rows_are_inverted_ranks() {
    let frame = RenderFrame::compute(&Game::new());
    assert_eq!(display_coords(Square::A8), (0, 0));
    assert_eq!(display_coords(Square::H1), (7, 7));
    assert_eq!(
        frame.rows[0][4].piece,
        Some(SpriteKey::new(Color::Black, Piece::King))
    );
    assert_eq!(
        frame.cell(Square::A1).piece,
        Some(SpriteKey::new(Color::White, Piece::Rook))
    );
    assert_eq!(
        frame.cell(Square::E8).piece,
        Some(SpriteKey::new(Color::Black, Piece::King))
    );
    assert_eq!(frame.cell(Square::E4).piece, None);
}

#[test]
fn test_frame_is_pure() {
    let mut game = Game::new();
    play(&mut game, &["e2e4", "e7e5", "g1f3"]);
    assert_eq!(RenderFrame::compute(&game), RenderFrame::compute(&game));
}

#[test]
fn test_check_highlights_king_and_checker() {
    let game = fen("4k3/8/8/8/8/8/4r3/4K3 w - - 0 1");
    let frame = RenderFrame::compute(&game);

    assert_eq!(frame.cell(Square::E1).fill, styles::CHECK_SQUARE);
    assert_eq!(frame.cell(Square::E2).fill, styles::ATTACKER_SQUARE);

    let highlighted: Vec<&Cell> = frame
        .rows
        .iter()
        .flatten()
        .filter(|c| c.fill == styles::CHECK_SQUARE || c.fill == styles::ATTACKER_SQUARE)
        .collect();
    assert_eq!(highlighted.len(), 2);

    // Legal replies remain, so no banner yet
    assert_eq!(frame.banner, None);
}

#[test]
fn test_double_check_highlights_both_checkers() {
    // Knight on f3 and rook on e8 both check the king on e1
    let game = fen("4r1k1/8/8/8/8/5n2/8/4K3 w - - 0 1");
    let frame = RenderFrame::compute(&game);
    assert_eq!(frame.cell(Square::E1).fill, styles::CHECK_SQUARE);
    assert_eq!(frame.cell(Square::F3).fill, styles::ATTACKER_SQUARE);
    assert_eq!(frame.cell(Square::E8).fill, styles::ATTACKER_SQUARE);
}

#[test]
fn test_checkmate_banner_names_white() {
    let mut game = Game::new();
    play(
        &mut game,
        &["e2e4", "e7e5", "f1c4", "b8c6", "d1h5", "g8f6", "h5f7"],
    );
    let frame = RenderFrame::compute(&game);

    let banner = frame.banner.as_ref().expect("mate shows a banner");
    assert_eq!(banner.text, "Checkmate! White wins!");
    assert_eq!(
        (banner.text_color, banner.background),
        styles::CHECKMATE_BANNER
    );
    assert_eq!(frame.cell(Square::E8).fill, styles::CHECK_SQUARE);
    assert_eq!(frame.cell(Square::F7).fill, styles::ATTACKER_SQUARE);
}

#[test]
fn test_checkmate_banner_names_black() {
    let mut game = Game::new();
    play(&mut game, &["f2f3", "e7e5", "g2g4", "d8h4"]);
    let banner = banner_for(&game).expect("mate shows a banner");
    assert_eq!(banner.text, "Checkmate! Black wins!");
}

#[test]
fn test_stalemate_is_draw_not_check() {
    let game = fen("k7/2K5/1Q6/8/8/8/8/8 b - - 0 1");
    let banner = banner_for(&game).expect("stalemate shows a banner");
    assert_eq!(banner.text, "Draw!");
    assert_eq!((banner.text_color, banner.background), styles::DRAW_BANNER);

    let frame = RenderFrame::compute(&game);
    assert_eq!(frame.cell(Square::A8).fill, base_color(0, 0));
}

#[test]
fn test_insufficient_material_is_draw() {
    let banner = banner_for(&fen("8/8/8/4k3/8/4K3/8/8 w - - 0 1")).unwrap();
    assert_eq!(banner.text, "Draw!");
}

#[test]
fn test_seventy_five_move_rule_is_draw() {
    let mut game = fen("8/8/8/4k3/8/4K3/8/4R3 w - - 148 80");
    play(&mut game, &["e1a1"]);
    assert_eq!(banner_for(&game), None);

    play(&mut game, &["e5d5"]);
    let banner = banner_for(&game).expect("75-move rule ends the game");
    assert_eq!(banner.text, "Draw!");
    assert_eq!((banner.text_color, banner.background), styles::DRAW_BANNER);
}

#[test]
fn test_mate_on_last_quiet_ply_shows_checkmate() {
    let mut game = fen("6k1/5ppp/8/8/8/8/8/R5K1 w - - 149 90");
    play(&mut game, &["a1a8"]);
    let banner = banner_for(&game).expect("mate shows a banner");
    assert_eq!(banner.text, "Checkmate! White wins!");
}

#[test]
fn test_repetition_is_generic_game_over() {
    let mut game = Game::new();
    for _ in 0..4 {
        play(&mut game, &["g1f3", "g8f6", "f3g1", "f6g8"]);
    }
    let banner = banner_for(&game).expect("fivefold ends the game");
    assert_eq!(banner.text, "Game Over!");
    assert_eq!(
        (banner.text_color, banner.background),
        styles::GAME_OVER_BANNER
    );
}

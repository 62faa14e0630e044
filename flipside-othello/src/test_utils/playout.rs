use crate::{Board, Color};
use rand::seq::SliceRandom;
use rand::Rng;

/// Play up to `plies` uniformly random legal moves from the starting position.
/// Returns the reached board and the color to move next. Stops early once the
/// game is over; a color with no move passes without consuming a ply.
pub fn random_playout<R: Rng + ?Sized>(rng: &mut R, plies: usize) -> (Board, Color) {
    let mut board = Board::new();
    let mut turn = Color::Black;

    for _ in 0..plies {
        if !board.has_legal_move(turn) {
            if !board.has_legal_move(!turn) {
                break;
            }
            turn = !turn;
        }

        let children = board.children(turn);
        if let Some(child) = children.choose(rng) {
            board = child.board;
        }
        turn = !turn;
    }

    (board, turn)
}

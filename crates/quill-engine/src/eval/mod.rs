//! Static evaluation: material plus piece-square tables.
//!
//! Scores are in centipawns from White's perspective (positive = White is
//! better), regardless of the side to move.

pub mod material;
pub mod phase;
pub mod pst;

use quill_core::{Board, Color, Game, Square};

use material::piece_value;
use phase::phase;
use pst::pst_value;

/// Evaluate the current position of `game`.
#[inline]
pub fn evaluate(game: &Game) -> i32 {
    evaluate_board(game.board())
}

/// Evaluate a bare piece placement.
///
/// Every occupied square contributes its piece's base value plus its
/// piece-square bonus, added for White and subtracted for Black. The phase
/// that selects the king table is computed once for the whole board.
pub fn evaluate_board(board: &Board) -> i32 {
    let phase = phase(board);
    let mut score = 0;

    for sq in Square::ALL {
        let Some(piece) = board.piece_at(sq) else {
            continue;
        };
        let value = piece_value(piece.role) + pst_value(piece.role, piece.color, sq, phase);
        match piece.color {
            Color::White => score += value,
            Color::Black => score -= value,
        }
    }

    score
}

//! Middlegame/endgame classification used for king scoring.

use quill_core::{Board, Role, Square};

/// Coarse game phase.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    Middlegame,
    Endgame,
}

/// Returns `true` when the position counts as an endgame.
///
/// Counts queens and minor pieces (knights and bishops) of both colors.
/// The position is an endgame when no queens remain, or when exactly two
/// queens remain alongside at most one minor piece.
pub fn is_endgame(board: &Board) -> bool {
    let mut queens = 0u32;
    let mut minors = 0u32;

    for sq in Square::ALL {
        match board.role_at(sq) {
            Some(Role::Queen) => queens += 1,
            Some(Role::Knight | Role::Bishop) => minors += 1,
            _ => {}
        }
    }

    queens == 0 || (queens == 2 && minors <= 1)
}

/// Phase of the position, see [`is_endgame`].
#[inline]
pub fn phase(board: &Board) -> Phase {
    if is_endgame(board) {
        Phase::Endgame
    } else {
        Phase::Middlegame
    }
}

#[cfg(test)]
mod tests {
    use quill_core::Game;

    use super::{Phase, is_endgame, phase};

    fn board_endgame(fen: &str) -> bool {
        is_endgame(Game::from_fen(fen).unwrap().board())
    }

    #[test]
    fn starting_position_is_middlegame() {
        let game = Game::new();
        assert_eq!(phase(game.board()), Phase::Middlegame);
    }

    #[test]
    fn single_queen_is_never_endgame() {
        assert!(!board_endgame("4k3/8/8/8/8/8/8/3QK3 w - - 0 1"));
        assert!(!board_endgame("2b1k3/8/8/8/8/8/8/1N1QK3 w - - 0 1"));
    }

    #[test]
    fn no_queens_is_endgame_regardless_of_minors() {
        assert!(board_endgame("4k3/4p3/8/8/8/8/4P3/4K3 w - - 0 1"));
        assert!(board_endgame("rnb1kbnr/pppppppp/8/8/8/8/PPPPPPPP/RNB1KBNR w KQkq - 0 1"));
    }

    #[test]
    fn two_queens_with_at_most_one_minor() {
        assert!(board_endgame("3qk3/8/8/8/8/8/8/3QK3 w - - 0 1"));
        assert!(board_endgame("3qk3/8/8/8/8/8/8/2NQK3 w - - 0 1"));
    }

    #[test]
    fn two_queens_with_two_minors_is_middlegame() {
        assert!(!board_endgame("2bqk3/8/8/8/8/8/8/2NQK3 w - - 0 1"));
        assert!(!board_endgame("3qk3/8/8/8/8/8/8/1BNQK3 w - - 0 1"));
    }
}

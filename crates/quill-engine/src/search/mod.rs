//! Root move search.

pub mod minimax;

use quill_core::{Color, Game, Move, to_uci};
use tracing::debug;

use minimax::{INFINITY, SearchContext, alpha_beta};

/// Result of a completed root search.
#[derive(Debug, Clone)]
pub struct SearchResult {
    /// Best move at the root.
    pub best_move: Move,
    /// Minimax score of `best_move` in centipawns, White's point of view.
    pub score: i32,
    /// Nodes visited below the root.
    pub nodes: u64,
}

/// Search every legal root move to `depth` plies and return the best one.
///
/// White maximizes and Black minimizes. A root move after which the side
/// to move could claim a draw is scored 0 without searching further. Ties
/// go to the move generated last.
///
/// # Panics
///
/// Panics if the position has no legal moves; callers must check for a
/// finished game first.
pub fn search_root(game: &mut Game, depth: u8) -> SearchResult {
    let maximize = game.side_to_move() == Color::White;
    let moves = game.legal_moves();
    assert!(!moves.is_empty(), "search_root called without legal moves");

    let mut ctx = SearchContext::default();
    let mut best_score = if maximize { -INFINITY } else { INFINITY };
    let mut best_move = moves[0];

    for &m in &moves {
        let value = {
            let mut child = game.play(m);
            if child.can_claim_draw() {
                0
            } else {
                alpha_beta(
                    &mut child,
                    depth.saturating_sub(1),
                    -INFINITY,
                    INFINITY,
                    !maximize,
                    &mut ctx,
                )
            }
        };

        if (maximize && value >= best_score) || (!maximize && value <= best_score) {
            best_score = value;
            best_move = m;
        }
    }

    debug!(
        depth,
        score = best_score,
        nodes = ctx.nodes,
        best = %to_uci(best_move),
        "root search finished"
    );

    SearchResult {
        best_move,
        score: best_score,
        nodes: ctx.nodes,
    }
}

#[cfg(test)]
mod tests {
    use quill_core::Game;

    use super::*;

    const SCHOLARS_MATE_FEN: &str =
        "r1bqkb1r/pppp1ppp/2n2n2/4p2Q/2B1P3/8/PPPP1PPP/RNB1K1NR w KQkq - 4 4";

    #[test]
    fn depth_1_returns_legal_move() {
        let mut game = Game::new();
        let result = search_root(&mut game, 1);
        assert!(game.legal_moves().contains(&result.best_move));
    }

    #[test]
    fn white_finds_mate_in_one() {
        let mut game = Game::from_fen(SCHOLARS_MATE_FEN).unwrap();
        let result = search_root(&mut game, 2);
        assert_eq!(to_uci(result.best_move).to_string(), "h5f7");
        assert_eq!(result.score, INFINITY);
    }

    #[test]
    fn black_finds_mate_in_one() {
        // After 1. f3 e5 2. g4, Qh4 mates.
        let mut game =
            Game::from_fen("rnbqkbnr/pppp1ppp/8/4p3/6P1/5P2/PPPPP2P/RNBQKBNR b KQkq - 0 2")
                .unwrap();
        let result = search_root(&mut game, 1);
        assert_eq!(to_uci(result.best_move).to_string(), "d8h4");
        assert_eq!(result.score, -INFINITY);
    }

    #[test]
    fn lost_position_still_returns_a_move() {
        // White is a queen down; the search still settles on a legal move.
        let mut game = Game::from_fen("k7/8/1q6/8/8/8/8/K7 w - - 0 1").unwrap();
        let result = search_root(&mut game, 2);
        let moves = game.legal_moves();
        assert!(moves.contains(&result.best_move));
    }

    #[test]
    fn ties_favor_later_moves() {
        // Bare kings: every root move reaches a dead draw scored 0.
        let mut game = Game::from_fen("8/8/4k3/8/8/4K3/8/8 w - - 0 1").unwrap();
        let result = search_root(&mut game, 1);
        let moves = game.legal_moves();
        assert_eq!(result.best_move, moves[moves.len() - 1]);
        assert_eq!(result.score, 0);
    }

    #[test]
    fn root_search_restores_position() {
        let mut game = Game::new();
        for uci in ["d2d4", "d7d5", "c2c4", "e7e6"] {
            game.play_uci(uci).unwrap();
        }
        let before = game.fen();
        search_root(&mut game, 3);
        assert_eq!(game.fen(), before);
        assert_eq!(game.ply(), 4);
    }

    #[test]
    #[should_panic(expected = "without legal moves")]
    fn empty_root_panics() {
        let mut game = Game::from_fen("7k/6Q1/5K2/8/8/8/8/8 b - - 0 1").unwrap();
        search_root(&mut game, 1);
    }
}

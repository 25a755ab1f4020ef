//! Fixed-depth minimax with alpha-beta pruning.
//!
//! White is the maximizing side and Black the minimizing side; scores are
//! always from White's point of view, as returned by [`evaluate`].

use quill_core::Game;

use crate::eval::evaluate;

/// Mate sentinel. Lies far outside any score [`evaluate`] can produce.
pub const INFINITY: i32 = 1_000_000_000;

/// Counters collected while a search runs.
#[derive(Debug, Default)]
pub(crate) struct SearchContext {
    pub nodes: u64,
}

/// Score `game` to `depth` plies with alpha-beta bounds `(alpha, beta)`.
///
/// `maximizing` is `true` when the side to move is the maximizing player.
/// A checkmated side scores [`-INFINITY`](INFINITY) when maximizing and
/// `+INFINITY` when minimizing; other finished games score 0.
pub fn minimax(game: &mut Game, depth: u8, alpha: i32, beta: i32, maximizing: bool) -> i32 {
    let mut ctx = SearchContext::default();
    alpha_beta(game, depth, alpha, beta, maximizing, &mut ctx)
}

pub(crate) fn alpha_beta(
    game: &mut Game,
    depth: u8,
    mut alpha: i32,
    mut beta: i32,
    maximizing: bool,
    ctx: &mut SearchContext,
) -> i32 {
    ctx.nodes += 1;

    if game.is_checkmate() {
        return if maximizing { -INFINITY } else { INFINITY };
    }
    if game.is_game_over() {
        return 0;
    }

    if depth == 0 {
        return evaluate(game);
    }

    let moves = game.legal_moves();

    if maximizing {
        let mut best = -INFINITY;
        for &m in &moves {
            let value = {
                let mut child = game.play(m);
                alpha_beta(&mut child, depth - 1, alpha, beta, false, ctx)
            };
            best = best.max(value);
            alpha = alpha.max(best);
            if beta <= alpha {
                return best;
            }
        }
        best
    } else {
        let mut best = INFINITY;
        for &m in &moves {
            let value = {
                let mut child = game.play(m);
                alpha_beta(&mut child, depth - 1, alpha, beta, true, ctx)
            };
            best = best.min(value);
            beta = beta.min(best);
            if beta <= alpha {
                return best;
            }
        }
        best
    }
}

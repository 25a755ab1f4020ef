//! Move selection: opening book, early random moves, then search.

use std::time::Duration;

use quill_core::{Game, UciMove, to_uci};
use rand::SeedableRng;
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use tracing::{debug, info};

use crate::book::{BookError, OpeningBook};
use crate::search::search_root;
use crate::strategy::{Clock, Strategy};

/// Tunable selector settings.
#[derive(Debug, Clone)]
pub struct SelectorConfig {
    /// Fixed search depth in plies.
    pub depth: u8,
    /// Play a random move while the full-move number is below this.
    pub random_before_move: u32,
    /// Consult the opening book.
    pub own_book: bool,
}

impl Default for SelectorConfig {
    fn default() -> Self {
        Self {
            depth: 3,
            random_before_move: 3,
            own_book: true,
        }
    }
}

/// Where a chosen move came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MoveSource {
    Book,
    Random,
    Search,
}

/// A chosen move.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Decision {
    /// The move in UCI notation.
    pub uci: UciMove,
    pub source: MoveSource,
    /// Search score, present only for searched moves.
    pub score: Option<i32>,
}

/// Chooses moves from the book, at random in the first moves, or by
/// minimax search.
#[derive(Debug)]
pub struct MoveSelector {
    book: OpeningBook,
    config: SelectorConfig,
    rng: StdRng,
}

impl MoveSelector {
    /// Build the opening book and seed the RNG from the OS.
    pub fn new(config: SelectorConfig) -> Result<Self, BookError> {
        Ok(Self::with_book(OpeningBook::new()?, config, StdRng::from_entropy()))
    }

    /// Deterministic selector for reproducible games and tests.
    pub fn with_seed(config: SelectorConfig, seed: u64) -> Result<Self, BookError> {
        Ok(Self::with_book(
            OpeningBook::new()?,
            config,
            StdRng::seed_from_u64(seed),
        ))
    }

    pub fn with_book(book: OpeningBook, config: SelectorConfig, rng: StdRng) -> Self {
        Self { book, config, rng }
    }

    pub fn config(&self) -> &SelectorConfig {
        &self.config
    }

    pub fn config_mut(&mut self) -> &mut SelectorConfig {
        &mut self.config
    }

    pub fn book(&self) -> &OpeningBook {
        &self.book
    }

    /// Choose a move for the side to move.
    ///
    /// Order of precedence:
    /// 1. a book continuation for the current piece placement, returned as
    ///    recorded without checking it against the legal moves;
    /// 2. a uniformly random legal move while the full-move number is below
    ///    [`SelectorConfig::random_before_move`];
    /// 3. [`search_root`] at [`SelectorConfig::depth`].
    ///
    /// The clock and ponder inputs are accepted but do not influence the
    /// choice.
    ///
    /// # Panics
    ///
    /// Panics if the side to move has no legal moves and the book has no
    /// entry for the position.
    pub fn select_move(
        &mut self,
        game: &mut Game,
        wtime: Option<Duration>,
        btime: Option<Duration>,
        ponder: bool,
    ) -> Decision {
        debug!(?wtime, ?btime, ponder, fen = %game, "selecting move");

        if self.config.own_book {
            if let Some(uci) = self.book.book_move_with(game.board(), &mut self.rng) {
                info!(%uci, "book move");
                return Decision {
                    uci,
                    source: MoveSource::Book,
                    score: None,
                };
            }
        }

        if game.fullmove_number() < self.config.random_before_move {
            let moves = game.legal_moves();
            let m = *moves
                .choose(&mut self.rng)
                .expect("select_move called without legal moves");
            let uci = to_uci(m);
            info!(%uci, "random opening move");
            return Decision {
                uci,
                source: MoveSource::Random,
                score: None,
            };
        }

        let result = search_root(game, self.config.depth);
        let uci = to_uci(result.best_move);
        info!(%uci, score = result.score, nodes = result.nodes, "searched move");
        Decision {
            uci,
            source: MoveSource::Search,
            score: Some(result.score),
        }
    }
}

impl Strategy for MoveSelector {
    fn name(&self) -> &str {
        "minimax"
    }

    fn select(&mut self, game: &mut Game, clock: &Clock) -> Option<Decision> {
        if game.legal_moves().is_empty() {
            return None;
        }
        Some(self.select_move(game, clock.wtime, clock.btime, clock.ponder))
    }

    fn notify(&mut self, event: &str, args: &[&str]) {
        debug!(event, ?args, "host event");
    }
}

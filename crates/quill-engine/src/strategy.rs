//! The interface the host drives, and a baseline random strategy.

use std::time::Duration;

use quill_core::{Color, Game, to_uci};
use rand::SeedableRng;
use rand::rngs::StdRng;
use rand::seq::SliceRandom;

use crate::select::{Decision, MoveSource};

/// Clock state passed along with a move request.
///
/// Strategies may log it; none of the built-in ones budget time from it.
#[derive(Debug, Clone, Copy, Default)]
pub struct Clock {
    /// White's remaining time.
    pub wtime: Option<Duration>,
    /// Black's remaining time.
    pub btime: Option<Duration>,
    /// White's increment per move.
    pub winc: Option<Duration>,
    /// Black's increment per move.
    pub binc: Option<Duration>,
    /// The request is a ponder search on the opponent's time.
    pub ponder: bool,
}

impl Clock {
    /// Remaining time of `side`.
    pub fn time_left(&self, side: Color) -> Option<Duration> {
        match side {
            Color::White => self.wtime,
            Color::Black => self.btime,
        }
    }

    /// Per-move increment of `side`.
    pub fn increment(&self, side: Color) -> Option<Duration> {
        match side {
            Color::White => self.winc,
            Color::Black => self.binc,
        }
    }
}

/// A move-choosing strategy.
pub trait Strategy {
    /// Name reported to the host.
    fn name(&self) -> &str;

    /// Choose a move for the side to move, or `None` if the game is over.
    ///
    /// `game` is borrowed mutably for make/unmake only and is left as it
    /// was found.
    fn select(&mut self, game: &mut Game, clock: &Clock) -> Option<Decision>;

    /// Host event such as `ucinewgame`, `stop` or `ponderhit`.
    fn notify(&mut self, event: &str, args: &[&str]) {
        let _ = (event, args);
    }
}

/// Plays a uniformly random legal move. Useful as a sparring partner.
#[derive(Debug)]
pub struct RandomMover {
    rng: StdRng,
}

impl RandomMover {
    pub fn new() -> Self {
        Self {
            rng: StdRng::from_entropy(),
        }
    }

    pub fn with_seed(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }
}

impl Default for RandomMover {
    fn default() -> Self {
        Self::new()
    }
}

impl Strategy for RandomMover {
    fn name(&self) -> &str {
        "random"
    }

    fn select(&mut self, game: &mut Game, _clock: &Clock) -> Option<Decision> {
        let moves = game.legal_moves();
        moves.choose(&mut self.rng).map(|&m| Decision {
            uci: to_uci(m),
            source: MoveSource::Random,
            score: None,
        })
    }
}

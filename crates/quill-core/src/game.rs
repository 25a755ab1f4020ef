//! Game state: a position plus the undo stack that produced it.
//!
//! [`Game`] wraps a [`shakmaty::Chess`] position and keeps every prior
//! position on an undo stack. The stack doubles as the repetition history
//! used by the draw queries, so a game replayed move by move knows about
//! threefold and fivefold repetitions.

use std::fmt;
use std::ops::{Deref, DerefMut};
use std::str::FromStr;

use shakmaty::fen::Fen;
use shakmaty::uci::UciMove;
use shakmaty::{
    Board, CastlingMode, Chess, Color, EnPassantMode, Move, MoveList, Piece, Position, Square,
};
use tracing::trace;

use crate::error::GameError;

/// FEN of the standard starting position.
pub const STARTING_FEN: &str = "rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w KQkq - 0 1";

/// A chess game with make/unmake support.
#[derive(Clone, Debug, Default)]
pub struct Game {
    pos: Chess,
    undo: Vec<Chess>,
}

impl Game {
    /// Create a game at the standard starting position.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a game from a FEN string, with an empty history.
    pub fn from_fen(fen: &str) -> Result<Self, GameError> {
        let parsed: Fen = fen.parse().map_err(|e| GameError::InvalidFen {
            fen: fen.to_string(),
            reason: format!("{e}"),
        })?;
        let pos: Chess = parsed
            .into_position(CastlingMode::Standard)
            .map_err(|e| GameError::IllegalPosition {
                fen: fen.to_string(),
                reason: format!("{e}"),
            })?;
        Ok(Self {
            pos,
            undo: Vec::new(),
        })
    }

    /// Serialize the current position as FEN (legal en passant squares only).
    pub fn fen(&self) -> String {
        Fen::from_position(&self.pos, EnPassantMode::Legal).to_string()
    }

    /// The current position.
    #[inline]
    pub fn position(&self) -> &Chess {
        &self.pos
    }

    /// Piece placement of the current position.
    #[inline]
    pub fn board(&self) -> &Board {
        self.pos.board()
    }

    /// The piece on `sq`, if any.
    #[inline]
    pub fn piece_at(&self, sq: Square) -> Option<Piece> {
        self.pos.board().piece_at(sq)
    }

    #[inline]
    pub fn side_to_move(&self) -> Color {
        self.pos.turn()
    }

    #[inline]
    pub fn fullmove_number(&self) -> u32 {
        self.pos.fullmoves().get()
    }

    #[inline]
    pub fn halfmove_clock(&self) -> u32 {
        self.pos.halfmoves()
    }

    /// Number of moves currently on the undo stack.
    #[inline]
    pub fn ply(&self) -> usize {
        self.undo.len()
    }

    /// Legal moves in generation order. The order is stable for a given position.
    #[inline]
    pub fn legal_moves(&self) -> MoveList {
        self.pos.legal_moves()
    }

    pub fn is_checkmate(&self) -> bool {
        self.pos.is_checkmate()
    }

    /// The game has ended without a claim: checkmate, stalemate, insufficient
    /// material, the seventy-five-move rule or fivefold repetition.
    pub fn is_game_over(&self) -> bool {
        self.pos.is_game_over() || self.is_seventyfive_moves() || self.is_fivefold_repetition()
    }

    /// The side to move may claim a draw by the fifty-move rule or by
    /// threefold repetition.
    pub fn can_claim_draw(&self) -> bool {
        self.can_claim_fifty_moves() || self.can_claim_threefold_repetition()
    }

    /// Halfmove clock reached 100 and the game is not already decided.
    pub fn is_fifty_moves(&self) -> bool {
        self.pos.halfmoves() >= 100 && !self.pos.legal_moves().is_empty()
    }

    pub fn is_seventyfive_moves(&self) -> bool {
        self.pos.halfmoves() >= 150 && !self.pos.legal_moves().is_empty()
    }

    /// Fifty-move claim, including a claim announced with a non-zeroing move
    /// that reaches the hundredth halfmove.
    pub fn can_claim_fifty_moves(&self) -> bool {
        if self.is_fifty_moves() {
            return true;
        }
        self.pos.halfmoves() >= 99 && self.pos.legal_moves().iter().any(|m| !m.is_zeroing())
    }

    /// How many times the current position has occurred, this occurrence included.
    pub fn repetitions(&self) -> usize {
        1 + self.undo.iter().filter(|prev| **prev == self.pos).count()
    }

    pub fn is_fivefold_repetition(&self) -> bool {
        self.repetitions() >= 5
    }

    /// Threefold claim: the position already occurred three times, or some
    /// legal move reaches a position that occurred twice before.
    pub fn can_claim_threefold_repetition(&self) -> bool {
        if self.repetitions() >= 3 {
            return true;
        }
        self.pos.legal_moves().iter().any(|&m| {
            let mut next = self.pos.clone();
            next.play_unchecked(m);
            let seen = self
                .undo
                .iter()
                .chain(std::iter::once(&self.pos))
                .filter(|prev| **prev == next)
                .count();
            seen >= 2
        })
    }

    /// Apply a legal move, saving the current position for [`Game::pop`].
    pub fn push(&mut self, m: Move) {
        debug_assert!(self.pos.is_legal(m), "push of illegal move {m:?}");
        self.undo.push(self.pos.clone());
        self.pos.play_unchecked(m);
    }

    /// Undo the most recent move. Returns `false` when there is nothing to undo.
    pub fn pop(&mut self) -> bool {
        match self.undo.pop() {
            Some(prev) => {
                self.pos = prev;
                true
            }
            None => false,
        }
    }

    /// Apply a legal move for the lifetime of the returned guard.
    ///
    /// The move is undone when the guard is dropped, whichever way the
    /// enclosing scope exits.
    pub fn play(&mut self, m: Move) -> MoveGuard<'_> {
        self.push(m);
        let depth = self.undo.len();
        MoveGuard { game: self, depth }
    }

    /// Parse `uci`, check it against the legal moves and apply it.
    pub fn play_uci(&mut self, uci: &str) -> Result<Move, GameError> {
        let parsed: UciMove = uci.parse().map_err(|_| GameError::InvalidMove {
            uci: uci.to_string(),
        })?;
        let m = parsed
            .to_move(&self.pos)
            .map_err(|_| GameError::IllegalMove {
                uci: uci.to_string(),
                fen: self.fen(),
            })?;
        self.push(m);
        trace!(uci, ply = self.undo.len(), "move applied");
        Ok(m)
    }
}

impl FromStr for Game {
    type Err = GameError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_fen(s)
    }
}

impl fmt::Display for Game {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.fen())
    }
}

/// A move applied to a [`Game`], undone on drop.
///
/// Dereferences to the game so the search can recurse through the guard.
pub struct MoveGuard<'a> {
    game: &'a mut Game,
    depth: usize,
}

impl Deref for MoveGuard<'_> {
    type Target = Game;

    fn deref(&self) -> &Game {
        self.game
    }
}

impl DerefMut for MoveGuard<'_> {
    fn deref_mut(&mut self) -> &mut Game {
        self.game
    }
}

impl Drop for MoveGuard<'_> {
    fn drop(&mut self) {
        debug_assert_eq!(
            self.game.undo.len(),
            self.depth,
            "unbalanced push/pop under a move guard"
        );
        self.game.pop();
    }
}

/// Canonical UCI identifier of a move (`e1g1` for castling).
#[inline]
pub fn to_uci(m: Move) -> UciMove {
    m.to_uci(CastlingMode::Standard)
}

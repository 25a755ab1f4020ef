//! Rules layer for quill: game state, make/unmake and draw queries.
//!
//! Board representation and move generation come from [`shakmaty`]; this
//! crate adds the undo stack, repetition history and the scoped
//! [`MoveGuard`] the search relies on.

mod error;
mod game;

pub use error::GameError;
pub use game::{Game, MoveGuard, STARTING_FEN, to_uci};

pub use shakmaty::uci::UciMove;
pub use shakmaty::{Board, Color, Move, MoveList, Piece, Role, Square};

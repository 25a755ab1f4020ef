//! Evaluation, search, opening book and move selection for quill.

pub mod book;
pub mod eval;
pub mod search;
pub mod select;
pub mod strategy;

pub use book::{BookError, OpeningBook, occupancy_equivalent};
pub use eval::evaluate;
pub use eval::phase::{Phase, is_endgame};
pub use search::minimax::{INFINITY, minimax};
pub use search::{SearchResult, search_root};
pub use select::{Decision, MoveSelector, MoveSource, SelectorConfig};
pub use strategy::{Clock, RandomMover, Strategy};

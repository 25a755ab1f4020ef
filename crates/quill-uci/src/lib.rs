//! UCI protocol handling for quill.

pub mod command;
pub mod engine;
pub mod error;

pub use command::{GoParams, StrategyKind, UciOption};
pub use engine::UciEngine;
pub use error::UciError;

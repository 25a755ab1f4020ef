//! Error types for position setup and move replay.

/// Errors raised while building or mutating a [`Game`](crate::Game).
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum GameError {
    /// The FEN string could not be parsed.
    #[error("invalid FEN \"{fen}\": {reason}")]
    InvalidFen {
        /// The FEN string that failed to parse.
        fen: String,
        /// Parser diagnostic.
        reason: String,
    },

    /// The FEN parsed but does not describe a legal chess position.
    #[error("illegal position \"{fen}\": {reason}")]
    IllegalPosition {
        /// The offending FEN string.
        fen: String,
        /// Validation diagnostic.
        reason: String,
    },

    /// A move string is not valid UCI notation.
    #[error("invalid move: {uci}")]
    InvalidMove {
        /// The move string that failed to parse.
        uci: String,
    },

    /// A well-formed UCI move is not legal in the current position.
    #[error("illegal move {uci} in {fen}")]
    IllegalMove {
        /// The rejected move.
        uci: String,
        /// FEN of the position the move was tried in.
        fen: String,
    },
}

#[cfg(test)]
mod tests {
    use super::GameError;

    #[test]
    fn invalid_move_display() {
        let err = GameError::InvalidMove {
            uci: "e9e4".to_string(),
        };
        assert_eq!(format!("{err}"), "invalid move: e9e4");
    }

    #[test]
    fn illegal_move_display_names_position() {
        let err = GameError::IllegalMove {
            uci: "e2e5".to_string(),
            fen: "8/8/8/8/8/8/8/8 w - - 0 1".to_string(),
        };
        assert_eq!(
            format!("{err}"),
            "illegal move e2e5 in 8/8/8/8/8/8/8/8 w - - 0 1"
        );
    }
}

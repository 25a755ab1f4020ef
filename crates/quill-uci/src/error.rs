//! UCI protocol errors.

use quill_core::GameError;

/// Errors that can occur during UCI protocol handling.
#[derive(Debug, thiserror::Error)]
pub enum UciError {
    /// The `position` command is missing `startpos` or `fen` keyword.
    #[error("malformed position command: missing startpos or fen keyword")]
    MalformedPosition,

    /// The `fen` keyword is not followed by six FEN fields.
    #[error("invalid FEN: {fen}")]
    InvalidFen {
        /// The FEN text that was received.
        fen: String,
    },

    /// The position or one of its moves was rejected by the rules layer.
    #[error(transparent)]
    Game(#[from] GameError),

    /// A `go` parameter is missing its value.
    #[error("missing value for go parameter {param}")]
    MissingGoValue {
        /// The parameter name.
        param: String,
    },

    /// A `go` parameter value could not be parsed.
    #[error("invalid value for go parameter {param}: {value}")]
    InvalidGoValue {
        /// The parameter name.
        param: String,
        /// The value that failed to parse.
        value: String,
    },

    /// `setoption` without a `name` clause.
    #[error("malformed setoption command")]
    MalformedOption,

    /// `setoption` names an option the engine does not expose.
    #[error("unknown option: {name}")]
    UnknownOption {
        /// The option name as received.
        name: String,
    },

    /// `setoption` value is missing, unparsable or out of range.
    #[error("invalid value for option {name}: {value}")]
    InvalidOptionValue {
        /// The option name.
        name: String,
        /// The value as received.
        value: String,
    },

    /// An I/O error occurred while talking to the host.
    #[error("I/O error: {source}")]
    Io {
        /// The underlying I/O error.
        #[from]
        source: std::io::Error,
    },
}

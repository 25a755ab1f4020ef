//! UCI command parsing.

use std::time::Duration;

use quill_core::Game;

use crate::error::UciError;

/// Highest depth accepted through `setoption name Depth`.
pub const MAX_DEPTH: u8 = 8;

/// Parameters for the `go` command.
///
/// All fields are optional; a bare `go` uses defaults. Only `depth` changes
/// how a move is chosen. The clock fields and `ponder` are handed to the
/// strategy, which logs them. `movestogo`, `movetime`, `nodes` and
/// `infinite` are accepted so hosts can send them, logged, and otherwise
/// ignored.
#[derive(Debug, Clone, Default)]
pub struct GoParams {
    /// White's remaining time.
    pub wtime: Option<Duration>,
    /// Black's remaining time.
    pub btime: Option<Duration>,
    /// White's increment per move.
    pub winc: Option<Duration>,
    /// Black's increment per move.
    pub binc: Option<Duration>,
    /// Moves until next time control.
    pub movestogo: Option<u32>,
    /// Search to this depth only.
    pub depth: Option<u8>,
    /// Search for exactly this duration.
    pub movetime: Option<Duration>,
    /// Search this many nodes only.
    pub nodes: Option<u64>,
    /// Search until `stop` (no time limit).
    pub infinite: bool,
    /// Search in pondering mode.
    pub ponder: bool,
}

/// Which strategy answers `go`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum StrategyKind {
    #[default]
    Minimax,
    Random,
}

impl StrategyKind {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Minimax => "minimax",
            Self::Random => "random",
        }
    }
}

/// An option set through `setoption`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UciOption {
    /// Fixed search depth, 1 to [`MAX_DEPTH`].
    Depth(u8),
    /// Whether the opening book is consulted.
    OwnBook(bool),
    /// Strategy used for `go`.
    Strategy(StrategyKind),
}

/// A parsed UCI command.
#[derive(Debug)]
pub enum Command {
    /// `uci` -- identify the engine.
    Uci,
    /// `isready` -- synchronization ping.
    IsReady,
    /// `ucinewgame` -- reset engine state.
    UciNewGame,
    /// `position` -- the game built by replaying the given moves.
    Position(Game),
    /// `go` -- choose a move with given parameters.
    Go(GoParams),
    /// `setoption` -- change an engine option.
    SetOption(UciOption),
    /// `ponderhit` -- opponent played the expected move during pondering.
    PonderHit,
    /// `stop` -- halt the current search.
    Stop,
    /// `quit` -- exit the engine.
    Quit,
    /// Unrecognized command (ignored per the UCI protocol).
    Unknown(String),
}

/// Parse a single line of UCI input into a [`Command`].
pub fn parse_command(line: &str) -> Result<Command, UciError> {
    let tokens: Vec<&str> = line.split_whitespace().collect();
    if tokens.is_empty() {
        return Ok(Command::Unknown(String::new()));
    }

    match tokens[0] {
        "uci" => Ok(Command::Uci),
        "isready" => Ok(Command::IsReady),
        "ucinewgame" => Ok(Command::UciNewGame),
        "stop" => Ok(Command::Stop),
        "quit" => Ok(Command::Quit),
        "ponderhit" => Ok(Command::PonderHit),
        "position" => parse_position(&tokens[1..]),
        "go" => parse_go(&tokens[1..]),
        "setoption" => parse_setoption(&tokens[1..]),
        _ => Ok(Command::Unknown(tokens[0].to_string())),
    }
}

/// Parse the `position` command arguments.
///
/// Supports:
/// - `position startpos [moves e2e4 d7d5 ...]`
/// - `position fen <fen-string> [moves e2e4 d7d5 ...]`
///
/// Moves are replayed one by one so the game keeps its repetition history.
fn parse_position(tokens: &[&str]) -> Result<Command, UciError> {
    if tokens.is_empty() {
        return Err(UciError::MalformedPosition);
    }

    let (mut game, rest) = if tokens[0] == "startpos" {
        (Game::new(), &tokens[1..])
    } else if tokens[0] == "fen" {
        // FEN is 6 space-separated fields
        if tokens.len() < 7 {
            return Err(UciError::InvalidFen {
                fen: tokens[1..].join(" "),
            });
        }
        let fen = tokens[1..7].join(" ");
        (Game::from_fen(&fen)?, &tokens[7..])
    } else {
        return Err(UciError::MalformedPosition);
    };

    if !rest.is_empty() && rest[0] == "moves" {
        for uci in &rest[1..] {
            game.play_uci(uci)?;
        }
    }

    Ok(Command::Position(game))
}

/// Parse the `go` command arguments.
///
/// Supports: wtime, btime, winc, binc, movestogo, depth, movetime,
/// nodes, infinite, ponder. Unknown tokens are silently skipped.
fn parse_go(tokens: &[&str]) -> Result<Command, UciError> {
    let mut params = GoParams::default();

    let mut i = 0;
    while i < tokens.len() {
        match tokens[i] {
            "wtime" => {
                params.wtime = Some(parse_millis(tokens.get(i + 1), "wtime")?);
                i += 2;
            }
            "btime" => {
                params.btime = Some(parse_millis(tokens.get(i + 1), "btime")?);
                i += 2;
            }
            "winc" => {
                params.winc = Some(parse_millis(tokens.get(i + 1), "winc")?);
                i += 2;
            }
            "binc" => {
                params.binc = Some(parse_millis(tokens.get(i + 1), "binc")?);
                i += 2;
            }
            "movestogo" => {
                params.movestogo = Some(parse_int(tokens.get(i + 1), "movestogo")?);
                i += 2;
            }
            "depth" => {
                params.depth = Some(parse_int(tokens.get(i + 1), "depth")?);
                i += 2;
            }
            "movetime" => {
                params.movetime = Some(parse_millis(tokens.get(i + 1), "movetime")?);
                i += 2;
            }
            "nodes" => {
                params.nodes = Some(parse_int(tokens.get(i + 1), "nodes")?);
                i += 2;
            }
            "infinite" => {
                params.infinite = true;
                i += 1;
            }
            "ponder" => {
                params.ponder = true;
                i += 1;
            }
            _ => {
                // Unknown token -- skip per UCI convention
                i += 1;
            }
        }
    }

    Ok(Command::Go(params))
}

/// Parse `setoption name <name> [value <value>]`.
///
/// Option names are matched case-insensitively and may span several
/// tokens, as may values.
fn parse_setoption(tokens: &[&str]) -> Result<Command, UciError> {
    if tokens.first() != Some(&"name") {
        return Err(UciError::MalformedOption);
    }
    let rest = &tokens[1..];
    let split = rest.iter().position(|&t| t == "value");
    let (name, value) = match split {
        Some(at) => (rest[..at].join(" "), rest[at + 1..].join(" ")),
        None => (rest.join(" "), String::new()),
    };
    if name.is_empty() {
        return Err(UciError::MalformedOption);
    }

    let invalid = || UciError::InvalidOptionValue {
        name: name.clone(),
        value: value.clone(),
    };

    let option = match name.to_ascii_lowercase().as_str() {
        "depth" => {
            let depth: u8 = value.parse().map_err(|_| invalid())?;
            if !(1..=MAX_DEPTH).contains(&depth) {
                return Err(invalid());
            }
            UciOption::Depth(depth)
        }
        "ownbook" => match value.as_str() {
            "true" => UciOption::OwnBook(true),
            "false" => UciOption::OwnBook(false),
            _ => return Err(invalid()),
        },
        "strategy" => match value.to_ascii_lowercase().as_str() {
            "minimax" => UciOption::Strategy(StrategyKind::Minimax),
            "random" => UciOption::Strategy(StrategyKind::Random),
            _ => return Err(invalid()),
        },
        _ => return Err(UciError::UnknownOption { name: name.clone() }),
    };

    Ok(Command::SetOption(option))
}

/// Parse a millisecond value from a token.
fn parse_millis(token: Option<&&str>, param: &str) -> Result<Duration, UciError> {
    let value = token.ok_or_else(|| UciError::MissingGoValue {
        param: param.to_string(),
    })?;
    let ms: u64 = value.parse().map_err(|_| UciError::InvalidGoValue {
        param: param.to_string(),
        value: value.to_string(),
    })?;
    Ok(Duration::from_millis(ms))
}

/// Parse an integer value from a token.
fn parse_int<T: std::str::FromStr>(token: Option<&&str>, param: &str) -> Result<T, UciError> {
    let value = token.ok_or_else(|| UciError::MissingGoValue {
        param: param.to_string(),
    })?;
    value.parse().map_err(|_| UciError::InvalidGoValue {
        param: param.to_string(),
        value: value.to_string(),
    })
}

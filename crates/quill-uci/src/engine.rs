//! Synchronous UCI engine loop.
//!
//! Every command is handled to completion before the next line is read, so
//! `go` blocks until a move is chosen and `stop` only reaches the strategy
//! as a notification.

use std::io::{self, BufRead, Write};

use tracing::{debug, info, warn};

use quill_core::{Color, Game};
use quill_engine::{Clock, Decision, INFINITY, MoveSelector, MoveSource, RandomMover, Strategy};

use crate::command::{Command, GoParams, MAX_DEPTH, StrategyKind, UciOption, parse_command};
use crate::error::UciError;

/// The UCI engine, holding the current game and the available strategies.
pub struct UciEngine {
    game: Game,
    selector: MoveSelector,
    random: RandomMover,
    active: StrategyKind,
}

impl UciEngine {
    /// Create an engine at the starting position using `selector` for `go`.
    pub fn new(selector: MoveSelector) -> Self {
        Self {
            game: Game::new(),
            selector,
            random: RandomMover::new(),
            active: StrategyKind::Minimax,
        }
    }

    /// The game the next `go` will be answered for.
    pub fn game(&self) -> &Game {
        &self.game
    }

    /// Run the UCI loop on stdin/stdout until `quit` or input closes.
    pub fn run(self) -> Result<(), UciError> {
        let stdin = io::stdin();
        let stdout = io::stdout();
        self.run_with(stdin.lock(), stdout.lock())
    }

    /// Run the UCI loop over arbitrary streams.
    pub fn run_with<R: BufRead, W: Write>(mut self, input: R, mut out: W) -> Result<(), UciError> {
        for line in input.lines() {
            if !self.handle_line(&line?, &mut out)? {
                break;
            }
        }
        info!("quill shutting down");
        Ok(())
    }

    /// Handle one line of input. Returns `false` once `quit` is received.
    ///
    /// Protocol errors are logged and skipped; only I/O errors are
    /// returned.
    pub fn handle_line<W: Write>(&mut self, line: &str, out: &mut W) -> Result<bool, UciError> {
        let trimmed = line.trim();
        if trimmed.is_empty() {
            return Ok(true);
        }
        debug!(cmd = %trimmed, "received UCI command");

        let cmd = match parse_command(trimmed) {
            Ok(cmd) => cmd,
            Err(e) => {
                warn!(error = %e, "UCI parse error");
                return Ok(true);
            }
        };

        match cmd {
            Command::Uci => self.handle_uci(out)?,
            Command::IsReady => writeln!(out, "readyok")?,
            Command::UciNewGame => self.handle_ucinewgame(),
            Command::Position(game) => self.game = game,
            Command::Go(params) => self.handle_go(params, out)?,
            Command::SetOption(option) => self.handle_setoption(option),
            Command::PonderHit => self.strategy().notify("ponderhit", &[]),
            Command::Stop => self.strategy().notify("stop", &[]),
            Command::Quit => {
                self.strategy().notify("quit", &[]);
                return Ok(false);
            }
            Command::Unknown(_) => {}
        }
        out.flush()?;
        Ok(true)
    }

    fn strategy(&mut self) -> &mut dyn Strategy {
        match self.active {
            StrategyKind::Minimax => &mut self.selector,
            StrategyKind::Random => &mut self.random,
        }
    }

    fn handle_uci<W: Write>(&self, out: &mut W) -> Result<(), UciError> {
        let config = self.selector.config();
        writeln!(out, "id name quill")?;
        writeln!(out, "id author the quill developers")?;
        writeln!(
            out,
            "option name Depth type spin default {} min 1 max {MAX_DEPTH}",
            config.depth
        )?;
        writeln!(out, "option name OwnBook type check default {}", config.own_book)?;
        writeln!(
            out,
            "option name Strategy type combo default {} var minimax var random",
            self.active.as_str()
        )?;
        writeln!(out, "uciok")?;
        Ok(())
    }

    fn handle_ucinewgame(&mut self) {
        self.game = Game::new();
        self.strategy().notify("ucinewgame", &[]);
    }

    fn handle_setoption(&mut self, option: UciOption) {
        debug!(?option, "setoption");
        match option {
            UciOption::Depth(depth) => self.selector.config_mut().depth = depth,
            UciOption::OwnBook(enabled) => self.selector.config_mut().own_book = enabled,
            UciOption::Strategy(kind) => self.active = kind,
        }
    }

    fn handle_go<W: Write>(&mut self, params: GoParams, out: &mut W) -> Result<(), UciError> {
        let clock = Clock {
            wtime: params.wtime,
            btime: params.btime,
            winc: params.winc,
            binc: params.binc,
            ponder: params.ponder,
        };
        let side = self.game.side_to_move();
        debug!(
            ?side,
            time_left = ?clock.time_left(side),
            increment = ?clock.increment(side),
            ponder = clock.ponder,
            "go"
        );
        if params.movestogo.is_some()
            || params.movetime.is_some()
            || params.nodes.is_some()
            || params.infinite
        {
            debug!(
                movestogo = ?params.movestogo,
                movetime = ?params.movetime,
                nodes = ?params.nodes,
                infinite = params.infinite,
                "search limits ignored"
            );
        }

        let decision = match self.active {
            StrategyKind::Minimax => {
                let configured = self.selector.config().depth;
                if let Some(requested) = params.depth {
                    let depth = go_depth(requested);
                    if depth != requested {
                        warn!(requested, depth, "go depth out of range, clamped");
                    }
                    self.selector.config_mut().depth = depth;
                }
                let decision = self.selector.select(&mut self.game, &clock);
                self.selector.config_mut().depth = configured;
                decision
            }
            StrategyKind::Random => self.random.select(&mut self.game, &clock),
        };

        match decision {
            Some(decision) => {
                if let Some(info) = info_line(&decision, side) {
                    writeln!(out, "{info}")?;
                }
                info!(bestmove = %decision.uci, source = ?decision.source, "bestmove");
                writeln!(out, "bestmove {}", decision.uci)?;
            }
            None => {
                info!("no legal move");
                writeln!(out, "bestmove 0000")?;
            }
        }
        Ok(())
    }
}

/// Depth used for `go depth N`, held to the range `setoption` accepts.
fn go_depth(requested: u8) -> u8 {
    requested.clamp(1, MAX_DEPTH)
}

/// `info` line for a searched move, score from the side to move's view.
fn info_line(decision: &Decision, side: Color) -> Option<String> {
    if decision.source != MoveSource::Search {
        return None;
    }
    let score = decision.score?;
    let relative = match side {
        Color::White => score,
        Color::Black => -score,
    };
    if relative.abs() >= INFINITY {
        // Mate distance is not tracked; report the side that mates.
        let mate = if relative > 0 { 1 } else { -1 };
        Some(format!("info score mate {mate}"))
    } else {
        Some(format!("info score cp {relative}"))
    }
}

#[cfg(test)]
mod tests {
    use quill_engine::{SelectorConfig, search_root};

    use super::*;

    fn engine() -> UciEngine {
        let selector = MoveSelector::with_seed(SelectorConfig::default(), 21).unwrap();
        UciEngine::new(selector)
    }

    fn send(engine: &mut UciEngine, lines: &[&str]) -> Vec<String> {
        let mut out = Vec::new();
        for line in lines {
            engine.handle_line(line, &mut out).unwrap();
        }
        String::from_utf8(out)
            .unwrap()
            .lines()
            .map(str::to_string)
            .collect()
    }

    fn bestmove(output: &[String]) -> &str {
        output
            .iter()
            .find_map(|line| line.strip_prefix("bestmove "))
            .expect("no bestmove line")
    }

    #[test]
    fn handshake() {
        let mut engine = engine();
        let out = send(&mut engine, &["uci", "isready"]);
        assert_eq!(out[0], "id name quill");
        assert!(out.contains(&"option name Depth type spin default 3 min 1 max 8".to_string()));
        assert!(out.contains(&"option name OwnBook type check default true".to_string()));
        assert!(out.iter().any(|l| l.starts_with("option name Strategy type combo")));
        assert_eq!(out[out.len() - 2], "uciok");
        assert_eq!(out[out.len() - 1], "readyok");
    }

    #[test]
    fn startpos_go_plays_book_move() {
        let mut engine = engine();
        let out = send(&mut engine, &["position startpos", "go wtime 60000 btime 60000"]);
        assert_eq!(bestmove(&out), "e2e4");
    }

    #[test]
    fn mated_side_reports_null_move() {
        let mut engine = engine();
        let out = send(
            &mut engine,
            &["position fen 7k/6Q1/5K2/8/8/8/8/8 b - - 0 1", "go"],
        );
        assert_eq!(bestmove(&out), "0000");
    }

    #[test]
    fn go_depth_overrides_for_one_call() {
        let fen = "r1bqk2r/pppp1ppp/2n2n2/2b1p3/2B1P3/3P1N2/PPP2PPP/RNBQK2R w KQkq - 1 5";
        let mut engine = engine();
        let out = send(&mut engine, &[&format!("position fen {fen}"), "go depth 1"]);

        let mut game = Game::from_fen(fen).unwrap();
        let expected = quill_core::to_uci(search_root(&mut game, 1).best_move);
        assert_eq!(bestmove(&out), expected.to_string());
        assert_eq!(engine.selector.config().depth, 3);
        assert!(out.iter().any(|l| l.starts_with("info score")));
    }

    #[test]
    fn go_depth_is_held_to_option_range() {
        assert_eq!(go_depth(0), 1);
        assert_eq!(go_depth(2), 2);
        assert_eq!(go_depth(MAX_DEPTH), MAX_DEPTH);
        assert_eq!(go_depth(40), MAX_DEPTH);
        assert_eq!(go_depth(u8::MAX), MAX_DEPTH);
    }

    #[test]
    fn go_depth_zero_still_answers() {
        let fen = "r1bqk2r/pppp1ppp/2n2n2/2b1p3/2B1P3/3P1N2/PPP2PPP/RNBQK2R w KQkq - 1 5";
        let mut engine = engine();
        let out = send(&mut engine, &[&format!("position fen {fen}"), "go depth 0"]);

        let mut game = Game::from_fen(fen).unwrap();
        let expected = quill_core::to_uci(search_root(&mut game, 1).best_move);
        assert_eq!(bestmove(&out), expected.to_string());
        assert_eq!(engine.selector.config().depth, 3);
    }

    #[test]
    fn setoption_changes_config_and_strategy() {
        let mut engine = engine();
        send(
            &mut engine,
            &[
                "setoption name Depth value 2",
                "setoption name OwnBook value false",
                "setoption name Strategy value random",
            ],
        );
        assert_eq!(engine.selector.config().depth, 2);
        assert!(!engine.selector.config().own_book);
        assert_eq!(engine.active, StrategyKind::Random);

        let out = send(&mut engine, &["position startpos moves e2e4", "go"]);
        let mut game = engine.game().clone();
        assert!(game.play_uci(bestmove(&out)).is_ok());
    }

    #[test]
    fn position_and_newgame_update_the_game() {
        let mut engine = engine();
        send(&mut engine, &["position startpos moves e2e4 e7e5 g1f3"]);
        assert_eq!(engine.game().ply(), 3);
        send(&mut engine, &["ucinewgame"]);
        assert_eq!(engine.game().ply(), 0);
    }

    #[test]
    fn bad_input_is_skipped() {
        let mut engine = engine();
        let out = send(
            &mut engine,
            &[
                "position startpos moves e2e5",
                "go depth x",
                "setoption name Hash value 16",
                "xyzzy",
                "isready",
            ],
        );
        assert_eq!(out, vec!["readyok".to_string()]);
        assert_eq!(engine.game().ply(), 0);
    }

    #[test]
    fn quit_stops_the_loop() {
        let input: &[u8] = b"isready\nstop\nponderhit\nquit\nisready\n";
        let mut out = Vec::new();
        engine().run_with(input, &mut out).unwrap();
        assert_eq!(String::from_utf8(out).unwrap(), "readyok\n");
    }

    #[test]
    fn info_line_is_relative_to_side_to_move() {
        let decision = Decision {
            uci: "e2e4".parse().unwrap(),
            source: MoveSource::Search,
            score: Some(35),
        };
        assert_eq!(info_line(&decision, Color::White).unwrap(), "info score cp 35");
        assert_eq!(info_line(&decision, Color::Black).unwrap(), "info score cp -35");

        let mate = Decision {
            score: Some(-INFINITY),
            ..decision
        };
        assert_eq!(info_line(&mate, Color::Black).unwrap(), "info score mate 1");

        let book = Decision {
            source: MoveSource::Book,
            score: None,
            ..decision
        };
        assert!(info_line(&book, Color::White).is_none());
    }
}

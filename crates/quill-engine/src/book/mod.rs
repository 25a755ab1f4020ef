//! Opening book built from a fixed repertoire.
//!
//! Each repertoire line is replayed from the starting position. After every
//! move the resulting position is recorded together with the move that
//! follows it in the line. A lookup collects the recorded continuations of
//! every position whose piece placement matches the current board and picks
//! one at random. Side to move, castling rights, en passant and the move
//! counters are not part of the match.

pub mod repertoire;

use quill_core::{Board, Game, GameError, STARTING_FEN, Square, UciMove, to_uci};
use rand::Rng;
use rand::seq::SliceRandom;
use tracing::debug;

use repertoire::{REPERTOIRE, SEED_REPLY};

/// Errors raised while building the book. All of them are data bugs in
/// the repertoire and abort startup.
#[derive(Debug, thiserror::Error)]
pub enum BookError {
    /// A move in a repertoire line could not be replayed.
    #[error("repertoire line {line}: {source}")]
    Game {
        /// Index of the offending line.
        line: usize,
        /// The underlying replay or FEN error.
        #[source]
        source: GameError,
    },

    /// A repertoire line contains no moves.
    #[error("repertoire line {line} is empty")]
    EmptyLine {
        /// Index of the offending line.
        line: usize,
    },
}

/// One recorded position and its continuation.
#[derive(Debug, Clone)]
pub struct BookEntry {
    /// FEN of the position after the recorded move.
    pub fen: String,
    /// Piece placement parsed back from `fen`.
    pub board: Board,
    /// Next move of the line, `None` at the end of the line.
    pub next: Option<UciMove>,
}

impl BookEntry {
    fn from_fen(fen: String, next: Option<UciMove>) -> Result<Self, GameError> {
        let board = Game::from_fen(&fen)?.board().clone();
        Ok(Self { fen, board, next })
    }
}

/// Entries recorded while replaying a single line.
#[derive(Debug, Clone)]
pub struct OpeningLine {
    pub entries: Vec<BookEntry>,
}

/// Immutable index of every opening line.
#[derive(Debug, Clone)]
pub struct OpeningBook {
    lines: Vec<OpeningLine>,
}

impl OpeningBook {
    /// Build the book from the built-in repertoire.
    pub fn new() -> Result<Self, BookError> {
        Self::from_lines(REPERTOIRE)
    }

    /// Build a book from `lines` (UCI moves separated by whitespace) plus
    /// the seeded reply to the starting position.
    pub fn from_lines(lines: &[&str]) -> Result<Self, BookError> {
        let seed_line = lines.len();
        let seed_reply: UciMove = SEED_REPLY.parse().map_err(|_| BookError::Game {
            line: seed_line,
            source: GameError::InvalidMove {
                uci: SEED_REPLY.to_string(),
            },
        })?;

        let mut built = Vec::with_capacity(lines.len() + 1);
        for (index, line) in lines.iter().enumerate() {
            built.push(replay_line(index, line)?);
        }

        let seed = BookEntry::from_fen(STARTING_FEN.to_string(), Some(seed_reply)).map_err(
            |source| BookError::Game {
                line: seed_line,
                source,
            },
        )?;
        built.push(OpeningLine {
            entries: vec![seed],
        });

        let book = Self { lines: built };
        debug!(lines = book.lines.len(), entries = book.len(), "opening book built");
        Ok(book)
    }

    /// Total number of recorded entries across all lines.
    pub fn len(&self) -> usize {
        self.lines.iter().map(|line| line.entries.len()).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn lines(&self) -> &[OpeningLine] {
        &self.lines
    }

    /// Every recorded continuation whose position matches `board`.
    ///
    /// Duplicates are kept, so a move recorded by several lines appears
    /// once per line.
    pub fn candidates(&self, board: &Board) -> Vec<UciMove> {
        self.lines
            .iter()
            .flat_map(|line| &line.entries)
            .filter(|entry| occupancy_equivalent(&entry.board, board))
            .filter_map(|entry| entry.next)
            .collect()
    }

    /// Pick a book move for `board` using `rng`, or `None` when the
    /// position is out of book.
    pub fn book_move_with<R: Rng + ?Sized>(&self, board: &Board, rng: &mut R) -> Option<UciMove> {
        self.candidates(board).choose(rng).copied()
    }

    /// Pick a book move for `board` using the thread-local RNG.
    pub fn book_move(&self, board: &Board) -> Option<UciMove> {
        self.book_move_with(board, &mut rand::thread_rng())
    }
}

/// Same piece (or emptiness) on every square.
pub fn occupancy_equivalent(a: &Board, b: &Board) -> bool {
    Square::ALL.iter().all(|&sq| a.piece_at(sq) == b.piece_at(sq))
}

fn replay_line(index: usize, line: &str) -> Result<OpeningLine, BookError> {
    let wrap = |source| BookError::Game {
        line: index,
        source,
    };

    let mut game = Game::new();
    let mut recorded: Vec<(String, Option<UciMove>)> = Vec::new();

    for uci in line.split_whitespace() {
        let m = game.play_uci(uci).map_err(wrap)?;
        if let Some(previous) = recorded.last_mut() {
            previous.1 = Some(to_uci(m));
        }
        recorded.push((game.fen(), None));
    }

    if recorded.is_empty() {
        return Err(BookError::EmptyLine { line: index });
    }

    let entries = recorded
        .into_iter()
        .map(|(fen, next)| BookEntry::from_fen(fen, next).map_err(wrap))
        .collect::<Result<Vec<_>, _>>()?;

    Ok(OpeningLine { entries })
}

//! End-to-end move selection through the public API.

use std::time::Duration;

use quill_core::{Game, to_uci};
use quill_engine::{
    Clock, MoveSelector, MoveSource, OpeningBook, RandomMover, SelectorConfig, Strategy,
    search_root,
};

#[test]
fn first_move_comes_from_the_book() {
    let mut selector = MoveSelector::with_seed(SelectorConfig::default(), 1).unwrap();
    let mut game = Game::new();
    let decision = selector.select_move(&mut game, None, None, false);
    assert_eq!(decision.uci.to_string(), "e2e4");
    assert_eq!(decision.source, MoveSource::Book);
}

#[test]
fn book_reply_is_legal_and_known() {
    let mut selector = MoveSelector::with_seed(SelectorConfig::default(), 9).unwrap();
    let mut game = Game::new();
    game.play_uci("d2d4").unwrap();

    let decision = selector.select_move(&mut game, None, None, false);
    assert_eq!(decision.source, MoveSource::Book);
    assert!(game.play_uci(&decision.uci.to_string()).is_ok());
}

#[test]
fn later_out_of_book_positions_are_searched() {
    let fen = "r2qkb1r/pp2pppp/2n2n2/3p1b2/3P4/2N2NP1/PP2PP1P/R1BQKB1R w KQkq - 3 6";
    let mut game = Game::from_fen(fen).unwrap();
    assert!(OpeningBook::new().unwrap().candidates(game.board()).is_empty());

    let config = SelectorConfig {
        depth: 2,
        ..SelectorConfig::default()
    };
    let mut selector = MoveSelector::with_seed(config, 4).unwrap();
    let clock = Clock {
        wtime: Some(Duration::from_secs(60)),
        btime: Some(Duration::from_secs(60)),
        ..Clock::default()
    };
    let decision = selector.select(&mut game, &clock).unwrap();
    let expected = search_root(&mut game, 2);

    assert_eq!(decision.source, MoveSource::Search);
    assert_eq!(decision.uci, to_uci(expected.best_move));
    assert_eq!(game.fen(), fen);
}

#[test]
fn self_play_stays_legal() {
    let config = SelectorConfig {
        depth: 1,
        own_book: false,
        ..SelectorConfig::default()
    };
    let mut white = MoveSelector::with_seed(config, 17).unwrap();
    let mut black = RandomMover::with_seed(17);
    let mut game = Game::new();

    for _ in 0..30 {
        let strategy: &mut dyn Strategy = if game.ply() % 2 == 0 {
            &mut white
        } else {
            &mut black
        };
        let Some(decision) = strategy.select(&mut game, &Clock::default()) else {
            break;
        };
        game.play_uci(&decision.uci.to_string())
            .unwrap_or_else(|err| panic!("{} played {}: {err}", strategy.name(), decision.uci));
        if game.is_game_over() {
            break;
        }
    }
    assert!(game.ply() > 0);
}

//! End-to-end games driven through the public facade.

use reversi_engine::{Color, ComputerStrength, Game, GameStatus, Point};
use std::cmp::Ordering;

fn disc_counts(game: &Game) -> (usize, usize) {
    let mut black = 0;
    let mut white = 0;
    for row in game.get_board() {
        for cell in row {
            match cell {
                Color::Black => black += 1,
                Color::White => white += 1,
                Color::Empty => {}
            }
        }
    }
    (black, white)
}

/// Drive `game` to completion with the built-in computer choosing for both
/// sides, checking the status contract at every step. Returns the terminal
/// status.
fn play_to_completion(game: &mut Game) -> GameStatus {
    // A game places at most 60 discs after the opening four.
    for _ in 0..60 {
        let turn = game.get_turn();
        let (black, white) = disc_counts(game);

        let point = game
            .decide()
            .expect("the side to move always has a legal move");
        assert!(
            game.get_can_put_stones().contains(&point),
            "the computer chose {} which is not a legal move",
            point
        );

        let status = game.put(point.x, point.y);
        assert_ne!(status, GameStatus::InvalidMove);

        // Each placement adds exactly one disc to the board.
        let (black_after, white_after) = disc_counts(game);
        assert_eq!(black_after + white_after, black + white + 1);

        match status {
            GameStatus::Ok => assert_ne!(game.get_turn(), turn),
            GameStatus::BlackCantPutStone => {
                assert_eq!(turn, Color::White);
                assert_eq!(game.get_turn(), Color::White);
            }
            GameStatus::WhiteCantPutStone => {
                assert_eq!(turn, Color::Black);
                assert_eq!(game.get_turn(), Color::Black);
            }
            GameStatus::BlackWin | GameStatus::WhiteWin | GameStatus::Draw => {
                assert!(game.is_game_over());
                return status;
            }
            GameStatus::InvalidMove => unreachable!(),
        }
        assert!(!game.is_game_over());
    }
    panic!("game did not terminate within 60 placements");
}

/// The terminal status a finished game should report by disc majority.
fn majority_status(game: &Game) -> GameStatus {
    let (black, white) = disc_counts(game);
    match black.cmp(&white) {
        Ordering::Greater => GameStatus::BlackWin,
        Ordering::Less => GameStatus::WhiteWin,
        Ordering::Equal => GameStatus::Draw,
    }
}

#[test]
fn simple_strategy_game_reaches_a_majority_verdict() {
    let mut game = Game::new(false, ComputerStrength::Simple);
    let status = play_to_completion(&mut game);
    assert_eq!(status, majority_status(&game));
}

#[test]
fn weighted_strategy_game_reaches_a_majority_verdict() {
    let mut game = Game::new(false, ComputerStrength::Weighted);
    let status = play_to_completion(&mut game);
    assert_eq!(status, majority_status(&game));
}

#[test]
fn random_strategy_game_reaches_a_majority_verdict() {
    let mut game = Game::new(false, ComputerStrength::Random);
    let status = play_to_completion(&mut game);
    assert_eq!(status, majority_status(&game));
}

#[test]
fn simple_strategy_games_are_reproducible() {
    let mut first = Game::new(false, ComputerStrength::Simple);
    let mut second = Game::new(false, ComputerStrength::Simple);
    assert_eq!(
        play_to_completion(&mut first),
        play_to_completion(&mut second)
    );
    assert_eq!(first.get_board(), second.get_board());
}

#[test]
fn weighted_strategy_games_are_reproducible() {
    let mut first = Game::new(false, ComputerStrength::Weighted);
    let mut second = Game::new(false, ComputerStrength::Weighted);
    assert_eq!(
        play_to_completion(&mut first),
        play_to_completion(&mut second)
    );
    assert_eq!(first.get_board(), second.get_board());
}

#[test]
fn the_shortest_game_wipes_white_out() {
    // The classic nine-move wipeout: Black finishes 13-0 with the board
    // mostly empty.
    let mut game = Game::new(true, ComputerStrength::Random);
    let line = ["E6", "F4", "E3", "F6", "G5", "D6", "E7", "F5", "C5"];

    for notation in &line[..line.len() - 1] {
        let point: Point = notation.parse().unwrap();
        assert_eq!(
            game.put(point.x, point.y),
            GameStatus::Ok,
            "unexpected status after {}",
            notation
        );
    }

    let last: Point = line[line.len() - 1].parse().unwrap();
    assert_eq!(game.put(last.x, last.y), GameStatus::BlackWin);
    assert!(game.is_game_over());
    assert_eq!(disc_counts(&game), (13, 0));
    assert!(game.get_can_put_stones().is_empty());

    // The finished game accepts no further placements.
    assert_eq!(game.put(0, 0), GameStatus::InvalidMove);
}

#[test]
fn rejected_requests_never_disturb_a_game_in_progress() {
    let mut game = Game::new(true, ComputerStrength::Random);
    assert_eq!(game.put(4, 5), GameStatus::Ok);

    let board = game.get_board();
    let turn = game.get_turn();
    let hints = game.get_can_put_stones();

    // Occupied, captureless and out-of-range requests in turn.
    assert_eq!(game.put(4, 5), GameStatus::InvalidMove);
    assert_eq!(game.put(0, 7), GameStatus::InvalidMove);
    assert_eq!(game.put(8, 3), GameStatus::InvalidMove);
    assert_eq!(game.put(usize::MAX, usize::MAX), GameStatus::InvalidMove);

    assert_eq!(game.get_board(), board);
    assert_eq!(game.get_turn(), turn);
    assert_eq!(game.get_can_put_stones(), hints);

    // The game plays on as if nothing happened.
    assert_eq!(game.put(5, 3), GameStatus::Ok);
}

#[test]
fn hints_match_the_capture_rule_from_the_start() {
    let game = Game::default();
    assert_eq!(game.get_turn(), Color::Black);

    let hints = game.get_can_put_stones();
    assert_eq!(
        hints,
        vec![
            Point::new(3, 2),
            Point::new(2, 3),
            Point::new(5, 4),
            Point::new(4, 5),
        ]
    );
    for point in &hints {
        assert!(game.can_put_stone(point.x, point.y));
    }
    assert!(!game.can_put_stone(0, 0));
    assert!(!game.can_put_stone(3, 3));
}

//! "Perft" performance test: count the number of leaves at a given depth.
//! Exercises the move generator, the executor and the pass rule together.
//! See: http://www.aartbik.com/MISC/reversi.html

use crate::moves::{apply_move, legal_moves};
use crate::{Board, Stone};

pub fn run_perft(depth: u64) -> u64 {
    leaves_below(Board::new(), Stone::Black, depth, false)
}

fn leaves_below(board: Board, to_move: Stone, depth: u64, passed: bool) -> u64 {
    // Leaf node for this depth
    if depth == 0 {
        return 1;
    }

    let all_moves = legal_moves(&board, to_move);
    if all_moves.is_empty() {
        // Both players passed: game is over
        if passed {
            return 1;
        }

        return leaves_below(board, !to_move, depth - 1, true);
    }

    all_moves
        .iter()
        .map(|mv| {
            let mut next = board;
            apply_move(&mut next, to_move, mv);
            leaves_below(next, !to_move, depth - 1, false)
        })
        .sum()
}

#[test]
fn perft_01() {
    assert_eq!(run_perft(1), 4);
}

#[test]
fn perft_02() {
    assert_eq!(run_perft(2), 12);
}

#[test]
fn perft_03() {
    assert_eq!(run_perft(3), 56);
}

#[test]
fn perft_04() {
    assert_eq!(run_perft(4), 244);
}

#[test]
fn perft_05() {
    assert_eq!(run_perft(5), 1396);
}

#[test]
fn perft_06() {
    assert_eq!(run_perft(6), 8200);
}

#[test]
fn perft_07() {
    assert_eq!(run_perft(7), 55092);
}

// Takes a while in debug builds.
#[test]
#[ignore]
fn perft_08() {
    assert_eq!(run_perft(8), 390216);
}

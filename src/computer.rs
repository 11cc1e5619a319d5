//! Computer opponents: move-selection policies over the legal-move list.

use crate::moves::{legal_moves, Move, MoveList};
use crate::{Board, Point, Stone, BOARD_SIZE};
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::SeedableRng;
use tracing::trace;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// How the computer picks its moves. Fixed for the life of a [`Game`].
///
/// [`Game`]: crate::Game
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum ComputerStrength {
    /// A uniformly random legal move.
    Random,
    /// The move capturing the most discs.
    Simple,
    /// Captures plus a positional weight favoring corners.
    Weighted,
}

impl Default for ComputerStrength {
    fn default() -> Self {
        ComputerStrength::Random
    }
}

impl ComputerStrength {
    /// Normalize a free-form label, such as the value of a host UI
    /// selector. Unrecognized labels map to the default strength rather
    /// than failing.
    pub fn from_label(label: &str) -> Self {
        match label.to_ascii_lowercase().as_str() {
            "random" => ComputerStrength::Random,
            "simple" => ComputerStrength::Simple,
            "weighted" => ComputerStrength::Weighted,
            _ => ComputerStrength::default(),
        }
    }
}

/// Positional value of each cell: corners are strong, the cells touching
/// a corner give the corner away.
const CELL_WEIGHTS: [[i32; BOARD_SIZE]; BOARD_SIZE] = [
    [30, -12, 0, -1, -1, 0, -12, 30],
    [-12, -15, -3, -3, -3, -3, -15, -12],
    [0, -3, 0, -1, -1, 0, -3, 0],
    [-1, -3, -1, -1, -1, -1, -3, -1],
    [-1, -3, -1, -1, -1, -1, -3, -1],
    [0, -3, 0, -1, -1, 0, -3, 0],
    [-12, -15, -3, -3, -3, -3, -15, -12],
    [30, -12, 0, -1, -1, 0, -12, 30],
];

/// A computer player: a [`ComputerStrength`] plus its randomness source.
///
/// Holds no game state; it reads a board and names a cell. Feeding the
/// choice back into the game is the caller's job.
#[derive(Debug)]
pub struct Computer {
    strength: ComputerStrength,
    rng: StdRng,
}

impl Computer {
    /// A computer seeded from system entropy.
    pub fn new(strength: ComputerStrength) -> Self {
        Self {
            strength,
            rng: StdRng::from_entropy(),
        }
    }

    /// A computer with a fixed seed, for reproducible games.
    pub fn seeded(strength: ComputerStrength, seed: u64) -> Self {
        Self {
            strength,
            rng: StdRng::seed_from_u64(seed),
        }
    }

    pub fn strength(&self) -> ComputerStrength {
        self.strength
    }

    /// Pick a cell for `stone` to play, or `None` when it has no legal
    /// move.
    ///
    /// `Simple` and `Weighted` break score ties toward the first move in
    /// the generator's scan order, so they are deterministic for a given
    /// board and color.
    pub fn choose(&mut self, board: &Board, stone: Stone) -> Option<Point> {
        let moves = legal_moves(board, stone);
        if moves.is_empty() {
            return None;
        }
        let point = match self.strength {
            ComputerStrength::Random => moves.as_slice().choose(&mut self.rng)?.point,
            ComputerStrength::Simple => best_move(&moves, |mv| mv.captures.len() as i32),
            ComputerStrength::Weighted => best_move(&moves, |mv| {
                mv.captures.len() as i32 + CELL_WEIGHTS[mv.point.y][mv.point.x]
            }),
        };
        trace!(player = %stone, at = %point, strategy = ?self.strength, "move chosen");
        Some(point)
    }
}

/// The target of the highest-scoring move, keeping the earliest on ties.
/// `moves` must be non-empty.
fn best_move(moves: &MoveList, mut score: impl FnMut(&Move) -> i32) -> Point {
    let mut iter = moves.iter();
    let mut best = iter.next().expect("scoring an empty move list");
    let mut best_score = score(best);
    for mv in iter {
        let mv_score = score(mv);
        if mv_score > best_score {
            best = mv;
            best_score = mv_score;
        }
    }
    best.point
}

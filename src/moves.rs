//! The rules layer: which placements are legal and which discs they flip.

use crate::{Board, Point, Stone, BOARD_SIZE};
use itertools::Itertools;
use std::fmt;

/// The eight compass directions a capturing run can extend along.
const DIRECTIONS: [(isize, isize); 8] = [
    (-1, -1),
    (0, -1),
    (1, -1),
    (-1, 0),
    (1, 0),
    (-1, 1),
    (0, 1),
    (1, 1),
];

/// A legal placement: the target cell plus every disc it would capture.
///
/// A move only exists with a non-empty capture set; the generator never
/// yields captureless placements.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Move {
    pub point: Point,
    pub captures: Vec<Point>,
}

/// The legal moves for one color, in the generator's row-major scan order.
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct MoveList(Vec<Move>);

impl MoveList {
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Move> {
        self.0.iter()
    }

    pub fn as_slice(&self) -> &[Move] {
        &self.0
    }

    /// The target cells, in scan order.
    pub fn points(&self) -> impl Iterator<Item = Point> + '_ {
        self.0.iter().map(|mv| mv.point)
    }

    /// Look up the move targeting `point`.
    pub fn find(&self, point: Point) -> Option<&Move> {
        self.0.iter().find(|mv| mv.point == point)
    }

    /// Whether `point` is a legal target.
    pub fn contains(&self, point: Point) -> bool {
        self.find(point).is_some()
    }
}

impl IntoIterator for MoveList {
    type Item = Move;
    type IntoIter = std::vec::IntoIter<Move>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}

impl<'a> IntoIterator for &'a MoveList {
    type Item = &'a Move;
    type IntoIter = std::slice::Iter<'a, Move>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

/// Prints the target cells, like `[D3, C4, F5, E6]`.
impl fmt::Display for MoveList {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}]", self.points().format(", "))
    }
}

/// Every disc captured by `stone` playing at `point`: the union of the
/// bracketed runs in all eight directions. Empty when the placement is
/// illegal for any reason (off the board, occupied, or nothing bracketed).
pub fn captures_for(board: &Board, stone: Stone, point: Point) -> Vec<Point> {
    if !point.in_bounds() || board[point].is_some() {
        return Vec::new();
    }
    let mut captures = Vec::new();
    for &(dx, dy) in &DIRECTIONS {
        run_captures(board, stone, point, dx, dy, &mut captures);
    }
    captures
}

/// Extend `captures` with the opposing run from `origin` along `(dx, dy)`,
/// provided the run ends on one of `stone`'s own discs.
fn run_captures(
    board: &Board,
    stone: Stone,
    origin: Point,
    dx: isize,
    dy: isize,
    captures: &mut Vec<Point>,
) {
    let start = captures.len();
    let mut cursor = origin.offset(dx, dy);
    while let Some(next) = cursor {
        match board[next] {
            // Bracketed: keep every opposing disc walked over so far.
            Some(disc) if disc == stone => return,
            Some(_) => {
                captures.push(next);
                cursor = next.offset(dx, dy);
            }
            // An empty gap breaks the bracket.
            None => break,
        }
    }
    // Hit a gap or the board edge: nothing captured this way.
    captures.truncate(start);
}

/// All legal moves for `stone`, scanning cells top-to-bottom and
/// left-to-right within each row.
pub fn legal_moves(board: &Board, stone: Stone) -> MoveList {
    let moves = (0..BOARD_SIZE)
        .cartesian_product(0..BOARD_SIZE)
        .filter_map(|(y, x)| {
            let point = Point::new(x, y);
            let captures = captures_for(board, stone, point);
            (!captures.is_empty()).then(|| Move { point, captures })
        })
        .collect();
    MoveList(moves)
}

/// Whether `stone` may legally play at `point`. Out-of-range points are
/// simply illegal, never an error.
pub fn can_put(board: &Board, stone: Stone, point: Point) -> bool {
    !captures_for(board, stone, point).is_empty()
}

/// Apply a validated move: place the mover's disc and recolor every
/// captured disc.
///
/// Legality is the caller's contract. `mv` must come from the generator
/// for this same board and color.
pub fn apply_move(board: &mut Board, stone: Stone, mv: &Move) {
    board[mv.point] = Some(stone);
    for &capture in &mv.captures {
        board[capture] = Some(stone);
    }
}

//! Disc storage: an 8x8 grid of optional stones, and nothing rule-shaped.

use crate::utils::format_grid;
use crate::{Color, Point, Stone, BOARD_SIZE, NUM_CELLS};
use derive_more::{Display, Error};
use std::fmt;
use std::ops::{Index, IndexMut};
use std::str::FromStr;

/// Returned when a coordinate pair does not denote a cell on the board.
#[derive(Clone, Copy, Debug, Display, Error, Eq, PartialEq)]
#[display(fmt = "coordinates are outside the board")]
pub struct OutOfRange;

/// The 8x8 playing surface. Cells are stored row-major: `cells[y][x]` is
/// the cell at [`Point`] `(x, y)`.
///
/// This type is pure storage. Legality, capturing and turn order all live
/// in [`crate::moves`] and [`GameState`](crate::GameState).
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub struct Board {
    cells: [[Option<Stone>; BOARD_SIZE]; BOARD_SIZE],
}

impl Board {
    /// A board holding the standard four-disc opening position.
    pub fn new() -> Self {
        let mut board = Self::empty();
        board.cells[3][3] = Some(Stone::White);
        board.cells[3][4] = Some(Stone::Black);
        board.cells[4][3] = Some(Stone::Black);
        board.cells[4][4] = Some(Stone::White);
        board
    }

    /// A board with every cell empty.
    pub fn empty() -> Self {
        Self {
            cells: [[None; BOARD_SIZE]; BOARD_SIZE],
        }
    }

    /// Read the cell at `point`.
    pub fn get(&self, point: Point) -> Result<Option<Stone>, OutOfRange> {
        if point.in_bounds() {
            Ok(self.cells[point.y][point.x])
        } else {
            Err(OutOfRange)
        }
    }

    /// Write the cell at `point`.
    pub fn set(&mut self, point: Point, cell: Option<Stone>) -> Result<(), OutOfRange> {
        if point.in_bounds() {
            self.cells[point.y][point.x] = cell;
            Ok(())
        } else {
            Err(OutOfRange)
        }
    }

    /// Row-major export of the full grid in host-facing [`Color`]s.
    pub fn snapshot(&self) -> [[Color; BOARD_SIZE]; BOARD_SIZE] {
        let mut grid = [[Color::Empty; BOARD_SIZE]; BOARD_SIZE];
        for (y, row) in self.cells.iter().enumerate() {
            for (x, &cell) in row.iter().enumerate() {
                grid[y][x] = cell.into();
            }
        }
        grid
    }

    /// Count the discs of one color.
    pub fn count(&self, stone: Stone) -> usize {
        self.cells
            .iter()
            .flatten()
            .filter(|&&cell| cell == Some(stone))
            .count()
    }

    /// Count the unoccupied cells.
    pub fn count_empty(&self) -> usize {
        self.cells
            .iter()
            .flatten()
            .filter(|cell| cell.is_none())
            .count()
    }
}

impl Default for Board {
    /// Same as [`Board::new`]: the opening position.
    fn default() -> Self {
        Self::new()
    }
}

/// Direct cell access for in-range points.
///
/// Panics when `point` is off the board; the rules layer only indexes with
/// points it has already bounds-checked.
impl Index<Point> for Board {
    type Output = Option<Stone>;

    fn index(&self, point: Point) -> &Self::Output {
        &self.cells[point.y][point.x]
    }
}

impl IndexMut<Point> for Board {
    fn index_mut(&mut self, point: Point) -> &mut Self::Output {
        &mut self.cells[point.y][point.x]
    }
}

/// Prints the grid with file and rank labels: `#` for Black, `O` for
/// White, `.` for empty.
impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        format_grid(
            self.cells.iter().flatten().map(|cell| match cell {
                Some(Stone::Black) => '#',
                Some(Stone::White) => 'O',
                None => '.',
            }),
            f,
        )
    }
}

/// Returned when a string does not encode a full board.
#[derive(Clone, Copy, Debug, Display, Error, Eq, PartialEq)]
pub enum ParseBoardError {
    /// A character other than `#`, `O`, `.` or whitespace.
    #[display(fmt = "unrecognized cell character")]
    UnknownCell,
    /// More or fewer than 64 cells.
    #[display(fmt = "expected exactly 64 cells")]
    WrongCellCount,
}

/// Parses the same cell characters `Display` prints (`#`, `O`, `.`),
/// row-major with whitespace ignored. File and rank labels are not
/// accepted; feed it bare cell rows.
impl FromStr for Board {
    type Err = ParseBoardError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut board = Self::empty();
        let mut count = 0;
        for c in s.chars().filter(|c| !c.is_whitespace()) {
            let cell = match c {
                '#' => Some(Stone::Black),
                'O' => Some(Stone::White),
                '.' => None,
                _ => return Err(ParseBoardError::UnknownCell),
            };
            if count == NUM_CELLS {
                return Err(ParseBoardError::WrongCellCount);
            }
            board.cells[count / BOARD_SIZE][count % BOARD_SIZE] = cell;
            count += 1;
        }
        if count != NUM_CELLS {
            return Err(ParseBoardError::WrongCellCount);
        }
        Ok(board)
    }
}

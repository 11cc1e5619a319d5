//! Board coordinates and the algebraic notation used to print them.

use crate::BOARD_SIZE;
use derive_more::{Display, Error};
use std::fmt::{self, Write};
use std::str::FromStr;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

const FILES: &str = "ABCDEFGH";

/// A cell coordinate. `x` grows rightward, `y` grows downward, and the
/// origin is the top-left corner of the board.
///
/// Construction is unchecked; every rule-level entry point validates the
/// range once before touching the board.
#[derive(Clone, Copy, Debug, Eq, Hash, Ord, PartialEq, PartialOrd)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Point {
    pub x: usize,
    pub y: usize,
}

impl Point {
    pub const fn new(x: usize, y: usize) -> Self {
        Self { x, y }
    }

    /// Whether the point denotes a cell on the 8x8 board.
    #[inline]
    pub const fn in_bounds(self) -> bool {
        self.x < BOARD_SIZE && self.y < BOARD_SIZE
    }

    /// Step one cell along `(dx, dy)`, or `None` when that leaves the
    /// board. Scans built on this can never wrap around an edge.
    #[inline]
    pub fn offset(self, dx: isize, dy: isize) -> Option<Self> {
        let x = self.x.checked_add_signed(dx)?;
        let y = self.y.checked_add_signed(dy)?;
        let stepped = Self { x, y };
        stepped.in_bounds().then_some(stepped)
    }
}

/// Prints algebraic notation ("D3"): file letter for `x`, 1-indexed rank
/// for `y`.
impl fmt::Display for Point {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let file = FILES.chars().nth(self.x).ok_or(fmt::Error)?;
        f.write_char(file)?;
        write!(f, "{}", self.y + 1)
    }
}

/// Returned when a string is not a valid algebraic cell name.
#[derive(Clone, Copy, Debug, Display, Error, Eq, PartialEq)]
#[display(fmt = "invalid point notation")]
pub struct ParsePointError;

/// Parses algebraic notation, case-insensitively: "D3" and "d3" both name
/// the cell at `(3, 2)`.
impl FromStr for Point {
    type Err = ParsePointError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut chars = s.chars();
        let file = chars.next().ok_or(ParsePointError)?.to_ascii_uppercase();
        let x = FILES.find(file).ok_or(ParsePointError)?;
        let rank = chars
            .next()
            .ok_or(ParsePointError)?
            .to_digit(10)
            .ok_or(ParsePointError)? as usize;
        if chars.next().is_some() || rank < 1 || rank > BOARD_SIZE {
            return Err(ParsePointError);
        }
        Ok(Self::new(x, rank - 1))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn offset_stays_on_board() {
        let point = Point::new(3, 2);
        assert_eq!(point.offset(1, 1), Some(Point::new(4, 3)));
        assert_eq!(point.offset(-1, 0), Some(Point::new(2, 2)));
        assert_eq!(point.offset(0, -2), Some(Point::new(3, 0)));
    }

    #[test]
    fn offset_leaves_board() {
        assert_eq!(Point::new(0, 0).offset(-1, 0), None);
        assert_eq!(Point::new(0, 0).offset(0, -1), None);
        assert_eq!(Point::new(7, 7).offset(1, 0), None);
        assert_eq!(Point::new(7, 3).offset(1, 1), None);
    }

    #[test]
    fn point_from_str() {
        assert_eq!("A1".parse(), Ok(Point::new(0, 0)));
        assert_eq!("D3".parse(), Ok(Point::new(3, 2)));
        assert_eq!("d3".parse(), Ok(Point::new(3, 2)));
        assert_eq!("h8".parse(), Ok(Point::new(7, 7)));
    }

    #[test]
    fn point_from_str_rejects_garbage() {
        assert_eq!("".parse::<Point>(), Err(ParsePointError));
        assert_eq!("I1".parse::<Point>(), Err(ParsePointError));
        assert_eq!("A0".parse::<Point>(), Err(ParsePointError));
        assert_eq!("A9".parse::<Point>(), Err(ParsePointError));
        assert_eq!("A12".parse::<Point>(), Err(ParsePointError));
        assert_eq!("3D".parse::<Point>(), Err(ParsePointError));
    }

    #[test]
    fn point_display_round_trips() {
        let point = Point::new(3, 2);
        assert_eq!(point.to_string(), "D3");
        assert_eq!(point.to_string().parse(), Ok(point));
    }
}

//! Disc colors: the two players, and the host-facing cell state.

use std::fmt;
use std::ops::Not;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// One of the two players, identified by disc color.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Stone {
    Black,
    White,
}

impl Default for Stone {
    /// The starting player (Black moves first).
    fn default() -> Self {
        Stone::Black
    }
}

impl Not for Stone {
    type Output = Self;

    /// The opposing color.
    fn not(self) -> Self {
        match self {
            Stone::Black => Stone::White,
            Stone::White => Stone::Black,
        }
    }
}

impl fmt::Display for Stone {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Stone::Black => write!(f, "Black"),
            Stone::White => write!(f, "White"),
        }
    }
}

/// The state of a single cell as hosts see it: a disc color or `Empty`.
///
/// `Empty` never denotes a player; the engine tracks players as [`Stone`]
/// and converts at the boundary.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Color {
    Black,
    White,
    Empty,
}

impl From<Stone> for Color {
    fn from(stone: Stone) -> Self {
        match stone {
            Stone::Black => Color::Black,
            Stone::White => Color::White,
        }
    }
}

impl From<Option<Stone>> for Color {
    fn from(cell: Option<Stone>) -> Self {
        cell.map_or(Color::Empty, Color::from)
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Color::Black => write!(f, "Black"),
            Color::White => write!(f, "White"),
            Color::Empty => write!(f, "Empty"),
        }
    }
}

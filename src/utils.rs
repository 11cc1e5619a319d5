//! Small formatting helpers shared across the crate.

use crate::BOARD_SIZE;
use std::fmt::{self, Formatter};

/// Render an 8x8 grid of cell characters with file letters and rank numbers.
/// `cells` must yield one character per board cell, row by row.
pub(crate) fn format_grid<I>(mut cells: I, f: &mut Formatter<'_>) -> fmt::Result
where
    I: Iterator<Item = char>,
{
    write!(f, "  A B C D E F G H")?;
    for rank in 1..=BOARD_SIZE {
        write!(f, "\n{} ", rank)?;
        for _ in 0..BOARD_SIZE {
            match cells.next() {
                Some(cell) => write!(f, "{} ", cell)?,
                None => return Err(fmt::Error),
            }
        }
    }
    Ok(())
}

//! `reversi-engine` is a host-agnostic Reversi/Othello rule engine.
//!
//! The crate is layered from storage up to the host boundary:
//!
//!  - [`Board`] stores disc occupancy and nothing else.
//!  - [`moves`] is the rules layer: which placements are legal, which discs
//!    they capture, and how a validated move is applied.
//!  - [`GameState`] is the turn state machine: placements, forced passes,
//!    and terminal scoring by disc majority.
//!  - [`Game`] is the facade hosts drive: put a disc, read the board, and
//!    ask the built-in [`Computer`] to choose a move.
//!
//! Every operation is synchronous and the engine never pushes updates;
//! hosts re-read the board after each call that can mutate it.

pub mod moves;
pub mod test_utils;

mod board;
mod computer;
mod game;
mod point;
mod stone;
mod utils;

pub use board::*;
pub use computer::*;
pub use game::*;
pub use moves::{apply_move, can_put, captures_for, legal_moves, Move, MoveList};
pub use point::*;
pub use stone::*;

/// The number of cells on one edge of the board.
pub const BOARD_SIZE: usize = 8;

/// The number of cells on the whole board.
pub const NUM_CELLS: usize = 64;

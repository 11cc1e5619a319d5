//! Game-level logic: the turn state machine and the host-facing facade.

use crate::moves::{apply_move, can_put, captures_for, legal_moves, Move, MoveList};
use crate::{Board, Color, Computer, ComputerStrength, OutOfRange, Point, Stone, BOARD_SIZE};
use derive_more::{Display, Error};
use std::cmp::Ordering;
use std::fmt;
use tracing::{debug, trace};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Why a placement request was rejected. No variant mutates state; every
/// one degrades to [`GameStatus::InvalidMove`] at the facade.
#[derive(Clone, Copy, Debug, Display, Error, Eq, PartialEq)]
pub enum MoveError {
    /// The coordinates do not denote a cell on the board.
    #[display(fmt = "coordinates are outside the board")]
    OutOfRange,
    /// The target cell already holds a disc.
    #[display(fmt = "the target cell is occupied")]
    Occupied,
    /// The placement would capture nothing.
    #[display(fmt = "the placement captures no discs")]
    NoCapture,
    /// The game has already ended.
    #[display(fmt = "the game is over")]
    GameOver,
}

impl From<OutOfRange> for MoveError {
    fn from(_: OutOfRange) -> Self {
        MoveError::OutOfRange
    }
}

/// How a finished game ended.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Outcome {
    /// Strict disc majority for one color.
    Winner(Stone),
    /// Equal disc counts.
    Draw,
}

impl fmt::Display for Outcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Outcome::Winner(stone) => write!(f, "{} wins", stone),
            Outcome::Draw => write!(f, "draw"),
        }
    }
}

/// What a successful placement led to.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Advance {
    /// The opponent has a reply and takes the turn.
    Turn(Stone),
    /// The named color has no legal move and passes; the mover goes again.
    Pass(Stone),
    /// Neither color can move; the game is over.
    Over(Outcome),
}

/// The flat status a host sees after every [`Game::put`]. Emitted, never
/// stored: the facade reports these and keeps its state internal.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum GameStatus {
    /// The move was applied and the opponent is on turn.
    Ok,
    /// The request was rejected; nothing changed.
    InvalidMove,
    BlackWin,
    WhiteWin,
    Draw,
    /// Black has no legal move and passes; White goes again.
    BlackCantPutStone,
    /// White has no legal move and passes; Black goes again.
    WhiteCantPutStone,
}

/// The full state of a game in progress: the board, the side to move, and
/// the outcome once the position is dead.
///
/// State only changes through [`GameState::place`]; a failed placement
/// leaves it untouched.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct GameState {
    board: Board,
    turn: Stone,
    outcome: Option<Outcome>,
}

impl Default for GameState {
    /// The opening position with Black to move.
    fn default() -> Self {
        Self {
            board: Board::new(),
            turn: Stone::Black,
            outcome: None,
        }
    }
}

impl GameState {
    /// Start from an arbitrary position. When neither color has a legal
    /// move the position is already dead and the outcome is scored
    /// immediately.
    pub fn with_position(board: Board, turn: Stone) -> Self {
        let outcome = if legal_moves(&board, turn).is_empty()
            && legal_moves(&board, !turn).is_empty()
        {
            Some(Self::score(&board))
        } else {
            None
        };
        Self {
            board,
            turn,
            outcome,
        }
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    /// The side to move; once the game is over, the side that moved last.
    pub fn turn(&self) -> Stone {
        self.turn
    }

    pub fn outcome(&self) -> Option<Outcome> {
        self.outcome
    }

    pub fn is_over(&self) -> bool {
        self.outcome.is_some()
    }

    /// The legal moves for the side to move.
    pub fn moves(&self) -> MoveList {
        legal_moves(&self.board, self.turn)
    }

    /// Place the mover's disc at `point` and advance the turn machine.
    ///
    /// On success the opponent takes the turn; when the opponent is stuck
    /// they pass and the mover goes again; when both sides are stuck the
    /// game ends on disc majority. Failed placements change nothing.
    pub fn place(&mut self, point: Point) -> Result<Advance, MoveError> {
        if self.is_over() {
            return Err(MoveError::GameOver);
        }
        if self.board.get(point)?.is_some() {
            return Err(MoveError::Occupied);
        }
        let captures = captures_for(&self.board, self.turn, point);
        if captures.is_empty() {
            return Err(MoveError::NoCapture);
        }

        let mover = self.turn;
        let mv = Move { point, captures };
        apply_move(&mut self.board, mover, &mv);
        debug!(player = %mover, at = %point, captured = mv.captures.len(), "disc placed");

        let opponent = !mover;
        if !legal_moves(&self.board, opponent).is_empty() {
            self.turn = opponent;
            return Ok(Advance::Turn(opponent));
        }
        if !legal_moves(&self.board, mover).is_empty() {
            // The opponent is stuck but the mover is not: a forced pass.
            // The turn stays with the mover.
            debug!(player = %opponent, "no legal move, pass");
            return Ok(Advance::Pass(opponent));
        }

        let outcome = Self::score(&self.board);
        self.outcome = Some(outcome);
        debug!(%outcome, "game over");
        Ok(Advance::Over(outcome))
    }

    /// Strict disc-count majority; equal counts draw.
    fn score(board: &Board) -> Outcome {
        let black = board.count(Stone::Black);
        let white = board.count(Stone::White);
        match black.cmp(&white) {
            Ordering::Greater => Outcome::Winner(Stone::Black),
            Ordering::Less => Outcome::Winner(Stone::White),
            Ordering::Equal => Outcome::Draw,
        }
    }
}

impl fmt::Display for GameState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{}", self.board)?;
        match self.outcome {
            Some(outcome) => write!(f, "Game over: {}", outcome),
            None => write!(f, "{} to move", self.turn),
        }
    }
}

/// The host-facing game: a [`GameState`] plus the computer player chosen
/// at construction, reporting every mutation as a [`GameStatus`].
pub struct Game {
    state: GameState,
    computer: Computer,
    human_opponent: bool,
}

impl Game {
    /// A fresh game from the opening position, Black to move.
    ///
    /// `human_opponent` is a host-side turn-taking hint: the engine stores
    /// it untouched and enforces the same rules either way. `strength`
    /// fixes the computer policy for the life of the game.
    pub fn new(human_opponent: bool, strength: ComputerStrength) -> Self {
        Self {
            state: GameState::default(),
            computer: Computer::new(strength),
            human_opponent,
        }
    }

    /// Place a disc for the side to move at `(x, y)`.
    pub fn put(&mut self, x: usize, y: usize) -> GameStatus {
        match self.state.place(Point::new(x, y)) {
            Ok(Advance::Turn(_)) => GameStatus::Ok,
            Ok(Advance::Pass(Stone::Black)) => GameStatus::BlackCantPutStone,
            Ok(Advance::Pass(Stone::White)) => GameStatus::WhiteCantPutStone,
            Ok(Advance::Over(Outcome::Winner(Stone::Black))) => GameStatus::BlackWin,
            Ok(Advance::Over(Outcome::Winner(Stone::White))) => GameStatus::WhiteWin,
            Ok(Advance::Over(Outcome::Draw)) => GameStatus::Draw,
            Err(err) => {
                trace!(x, y, %err, "move rejected");
                GameStatus::InvalidMove
            }
        }
    }

    /// Whether the side to move may place at `(x, y)`.
    pub fn can_put_stone(&self, x: usize, y: usize) -> bool {
        can_put(self.state.board(), self.state.turn(), Point::new(x, y))
    }

    /// Every legal target for the side to move, in generator scan order.
    pub fn get_can_put_stones(&self) -> Vec<Point> {
        self.state.moves().points().collect()
    }

    /// Row-major snapshot of the grid.
    pub fn get_board(&self) -> [[Color; BOARD_SIZE]; BOARD_SIZE] {
        self.state.board().snapshot()
    }

    /// The color to move, never [`Color::Empty`]. After the game ends this
    /// stays on the side that moved last.
    pub fn get_turn(&self) -> Color {
        self.state.turn().into()
    }

    pub fn is_game_over(&self) -> bool {
        self.state.is_over()
    }

    /// Ask the configured computer policy for a move for the side to move.
    /// `None` means that side has no legal move. State is not touched;
    /// feed the point back through [`Game::put`] to play it.
    pub fn decide(&mut self) -> Option<Point> {
        self.computer.choose(self.state.board(), self.state.turn())
    }

    /// Read-only engine-level view of the state.
    pub fn state(&self) -> &GameState {
        &self.state
    }

    /// The host-side hint passed at construction.
    pub fn is_human_opponent(&self) -> bool {
        self.human_opponent
    }
}

impl Default for Game {
    /// A human opponent and the default computer strength.
    fn default() -> Self {
        Self::new(true, ComputerStrength::default())
    }
}

//! Error types for move validation.

use crate::position::Position;

/// Error that can occur when validating or applying a move.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display)]
pub enum MoveError {
    /// The square at the position is already occupied.
    #[display("Square {:?} is already occupied", _0)]
    SquareOccupied(Position),

    /// The coordinates fall outside the 3x3 board.
    #[display("Coordinates ({row}, {col}) are out of bounds")]
    OutOfBounds {
        /// Row index given by the caller.
        row: u8,
        /// Column index given by the caller.
        col: u8,
    },
}

impl std::error::Error for MoveError {}

//! Pure tic-tac-toe game logic with an exhaustive minimax solver.
//!
//! This library computes optimal play for 3x3 tic-tac-toe. It exposes
//! pure board-state queries (current player, legal moves, terminal
//! test, winner, utility) and a decision procedure ([`minimax`]) that
//! returns the game-theoretically optimal move for whichever player
//! is to act, using alpha-beta pruning to bound search cost.
//!
//! # Architecture
//!
//! - **Rules**: pure functions over [`Board`] values covering turn
//!   derivation, legal moves, move application, and terminal scoring
//! - **Search**: recursive max/min value functions with alpha-beta
//!   pruning, driven by the rules at every node
//!
//! Boards are plain values; no operation mutates its input. A front
//! end owns the canonical board, renders it, converts input into
//! positions, and calls [`result`] and [`minimax`] to advance play.
//!
//! # Example
//!
//! ```
//! use strictly_minimax::{initial_state, minimax, result, terminal, utility};
//!
//! let mut board = initial_state();
//! while let Some(pos) = minimax(&board) {
//!     board = result(&board, pos)?;
//! }
//! assert!(terminal(&board));
//! // Perfect play from the empty board is a draw.
//! assert_eq!(utility(&board), 0);
//! # Ok::<(), strictly_minimax::MoveError>(())
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

// Private module declarations
mod error;
mod position;
mod rules;
mod search;
mod types;

// Crate-level exports - errors
pub use error::MoveError;

// Crate-level exports - positions
pub use position::Position;

// Crate-level exports - board state rules
pub use rules::{
    MAX_UTILITY, MIN_UTILITY, actions, check_winner, initial_state, is_full, player, result,
    status, terminal, utility, winner,
};

// Crate-level exports - search
pub use search::minimax;

// Crate-level exports - domain types
pub use types::{Board, GameStatus, Player, Square};

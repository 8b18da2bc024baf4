//! Board state rules for tic-tac-toe.
//!
//! Pure functions over [`Board`] values: turn derivation, legal-move
//! enumeration, move application, and terminal scoring. Rules never
//! call into the search engine; the search engine calls in here at
//! every node.

pub mod draw;
pub mod win;

pub use draw::is_full;
pub use win::check_winner;

use crate::error::MoveError;
use crate::position::Position;
use crate::types::{Board, GameStatus, Player, Square};
use strum::IntoEnumIterator;
use tracing::instrument;

/// Utility of a board won by X, and the maximizer's identity value.
pub const MAX_UTILITY: i8 = 1;

/// Utility of a board won by O, and the minimizer's identity value.
pub const MIN_UTILITY: i8 = -1;

/// Returns the starting state of the game: the all-empty board.
pub fn initial_state() -> Board {
    Board::new()
}

/// Returns the player who has the next turn on a board.
///
/// Whose turn it is is a pure function of board content: X moves
/// first and players alternate, so an even number of occupied squares
/// means X to move and an odd number means O.
pub fn player(board: &Board) -> Player {
    if board.occupied_count() % 2 == 0 {
        Player::X
    } else {
        Player::O
    }
}

/// Returns all legal moves on the board, in ascending row-major order.
///
/// Empty iff the board is fully filled. The fixed order makes the
/// solver's first-improvement tie-break deterministic.
pub fn actions(board: &Board) -> Vec<Position> {
    Position::iter().filter(|pos| board.is_empty(*pos)).collect()
}

/// Returns the board that results from the current player marking
/// `pos`, leaving the input board untouched.
///
/// # Errors
///
/// Returns [`MoveError::SquareOccupied`] if the square is already
/// occupied. A silently-accepted double move would corrupt search
/// correctness, so this surfaces immediately.
#[instrument(skip(board), fields(player = ?player(board)))]
pub fn result(board: &Board, pos: Position) -> Result<Board, MoveError> {
    if !board.is_empty(pos) {
        return Err(MoveError::SquareOccupied(pos));
    }
    let mut next = *board;
    next.set(pos, Square::Occupied(player(board)));
    Ok(next)
}

/// Returns the winner of the game, if there is one.
pub fn winner(board: &Board) -> Option<Player> {
    check_winner(board)
}

/// Returns true if the game is over: someone has won or the board is
/// full.
pub fn terminal(board: &Board) -> bool {
    winner(board).is_some() || is_full(board)
}

/// Returns +1 if X has won the game, -1 if O has won, 0 otherwise.
///
/// Callers should only query utility at terminal boards; a
/// non-terminal board also reports 0, which is meaningless as a game
/// value.
pub fn utility(board: &Board) -> i8 {
    match winner(board) {
        Some(Player::X) => MAX_UTILITY,
        Some(Player::O) => MIN_UTILITY,
        None => 0,
    }
}

/// Returns the game status derived from board content.
pub fn status(board: &Board) -> GameStatus {
    if let Some(winner) = winner(board) {
        GameStatus::Won(winner)
    } else if is_full(board) {
        GameStatus::Draw
    } else {
        GameStatus::InProgress
    }
}

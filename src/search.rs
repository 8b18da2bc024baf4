//! Exhaustive adversarial search for tic-tac-toe.
//!
//! Minimax with alpha-beta pruning. The game tree is small enough (at
//! most 9 plies) to solve to terminal states on every call, so there
//! is no depth limit, no heuristic evaluation, and no state carried
//! between calls.

use crate::position::Position;
use crate::rules::{MAX_UTILITY, MIN_UTILITY, actions, player, result, terminal, utility};
use crate::types::{Board, Player};
use tracing::{debug, instrument};

/// Returns the optimal action for the current player on the board, or
/// `None` if the board is already terminal.
///
/// X maximizes utility and O minimizes it. Among equally optimal
/// moves the first one in ascending row-major order is kept: later
/// ties never overwrite an earlier choice, and alpha-beta cutoffs
/// only skip moves that cannot improve on it.
#[instrument(skip(board), fields(to_move = ?player(board)))]
pub fn minimax(board: &Board) -> Option<Position> {
    if terminal(board) {
        return None;
    }

    let turn = player(board);
    let moves = actions(board);
    let mut alpha = MIN_UTILITY;
    let mut beta = MAX_UTILITY;

    // A non-terminal board has at least one legal move. Seeding the
    // choice with the first keeps minimax total even when every move
    // carries the worst possible value.
    let mut best_move = moves[0];

    match turn {
        Player::X => {
            let mut best = MIN_UTILITY;
            for pos in &moves {
                let candidate = min_value(&apply(board, *pos), alpha, beta);
                alpha = alpha.max(candidate);
                if candidate > best {
                    best = candidate;
                    best_move = *pos;
                }
                if beta <= alpha {
                    break;
                }
            }
            debug!(?best_move, value = best, "maximizer chose move");
        }
        Player::O => {
            let mut best = MAX_UTILITY;
            for pos in &moves {
                let candidate = max_value(&apply(board, *pos), alpha, beta);
                beta = beta.min(candidate);
                if candidate < best {
                    best = candidate;
                    best_move = *pos;
                }
                if beta <= alpha {
                    break;
                }
            }
            debug!(?best_move, value = best, "minimizer chose move");
        }
    }

    Some(best_move)
}

/// Returns the max utility the mover can guarantee from this state.
fn max_value(board: &Board, mut alpha: i8, beta: i8) -> i8 {
    if terminal(board) {
        return utility(board);
    }

    let mut value = MIN_UTILITY;
    for pos in actions(board) {
        value = value.max(min_value(&apply(board, pos), alpha, beta));
        alpha = alpha.max(value);
        // The minimizer above will never allow a line this good.
        if beta <= alpha {
            break;
        }
    }
    value
}

/// Returns the min utility the mover can guarantee from this state.
fn min_value(board: &Board, alpha: i8, mut beta: i8) -> i8 {
    if terminal(board) {
        return utility(board);
    }

    let mut value = MAX_UTILITY;
    for pos in actions(board) {
        value = value.min(max_value(&apply(board, pos), alpha, beta));
        beta = beta.min(value);
        if beta <= alpha {
            break;
        }
    }
    value
}

/// Applies a move the search drew from `actions`, so a rejection is a
/// contract violation rather than a recoverable game condition.
fn apply(board: &Board, pos: Position) -> Board {
    result(board, pos).expect("actions() yields only empty squares")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rules::initial_state;
    use crate::types::Square;

    fn board_from_rows(rows: [[Square; 3]; 3]) -> Board {
        let mut board = Board::new();
        for (r, row) in rows.iter().enumerate() {
            for (c, sq) in row.iter().enumerate() {
                let pos = Position::from_coords(r as u8, c as u8).unwrap();
                board.set(pos, *sq);
            }
        }
        board
    }

    const E: Square = Square::Empty;
    const X: Square = Square::Occupied(Player::X);
    const O: Square = Square::Occupied(Player::O);

    #[test]
    fn test_takes_immediate_win() {
        // X X . / O O . / . . .  with X to move: (0, 2) wins now.
        let board = board_from_rows([[X, X, E], [O, O, E], [E, E, E]]);
        assert_eq!(player(&board), Player::X);
        assert_eq!(minimax(&board), Some(Position::TopRight));
    }

    #[test]
    fn test_blocks_immediate_threat() {
        // X X . / . O . / . . .  with O to move: every non-blocking
        // move loses to (0, 2), so the block is uniquely optimal.
        let board = board_from_rows([[X, X, E], [E, O, E], [E, E, E]]);
        assert_eq!(player(&board), Player::O);
        assert_eq!(minimax(&board), Some(Position::TopRight));
    }

    #[test]
    fn test_terminal_board_has_no_move() {
        let board = board_from_rows([[X, X, X], [O, O, E], [E, E, E]]);
        assert!(terminal(&board));
        assert_eq!(minimax(&board), None);
    }

    #[test]
    fn test_drawn_full_board_has_no_move() {
        let board = board_from_rows([[X, O, X], [O, X, X], [O, X, O]]);
        assert!(terminal(&board));
        assert_eq!(utility(&board), 0);
        assert_eq!(minimax(&board), None);
    }

    #[test]
    fn test_empty_board_move_is_legal() {
        let board = initial_state();
        let pos = minimax(&board).expect("non-terminal board yields a move");
        assert!(actions(&board).contains(&pos));
    }
}

//! Tests for the minimax solver.

use strictly_minimax::{
    Board, Player, Position, actions, initial_state, minimax, player, result, terminal, utility,
};

/// Plays minimax against itself until the game ends, returning the
/// final utility.
fn play_out(mut board: Board) -> i8 {
    while let Some(pos) = minimax(&board) {
        board = result(&board, pos).expect("minimax returns a legal move");
    }
    assert!(terminal(&board));
    utility(&board)
}

#[test]
fn test_empty_board_opens_corner_or_center() {
    let opening = minimax(&initial_state()).expect("empty board is not terminal");
    let corners_and_center = [
        Position::TopLeft,
        Position::TopRight,
        Position::BottomLeft,
        Position::BottomRight,
        Position::Center,
    ];
    assert!(corners_and_center.contains(&opening));
}

#[test]
fn test_self_play_draws() {
    assert_eq!(play_out(initial_state()), 0);
}

#[test]
fn test_self_play_draws_from_every_forced_opening() {
    // Every opening square is a draw under perfect play, so forcing
    // the first move externally must not change the outcome.
    for opening in [
        Position::TopLeft,
        Position::TopCenter,
        Position::Center,
        Position::BottomRight,
    ] {
        let board = result(&initial_state(), opening).expect("opening move");
        assert_eq!(play_out(board), 0, "opening {opening} should draw");
    }
}

#[test]
fn test_punishes_losing_reply() {
    // Against a corner opening only the center reply draws; an edge
    // reply loses, and the solver must convert the win for X.
    let board = result(&initial_state(), Position::TopLeft).expect("corner opening");
    let board = result(&board, Position::MiddleLeft).expect("edge reply");
    assert_eq!(play_out(board), 1);
}

#[test]
fn test_takes_immediate_row_win() {
    // X X . / O O . / . . .  with X to move: completing the top row
    // at (0, 2) is the unique optimal move.
    let board = initial_state();
    let board = result(&board, Position::TopLeft).expect("X (0,0)");
    let board = result(&board, Position::MiddleLeft).expect("O (1,0)");
    let board = result(&board, Position::TopCenter).expect("X (0,1)");
    let board = result(&board, Position::Center).expect("O (1,1)");
    assert_eq!(player(&board), Player::X);
    assert_eq!(minimax(&board), Some(Position::from_coords(0, 2).unwrap()));
}

#[test]
fn test_reply_without_immediate_threat_is_still_optimal() {
    // X . . / . X . / . . O  with O to move: X has no immediate
    // threat, so instead of pinning a golden square we require the
    // chosen reply to match the best achievable value among all
    // replies, each played out under perfect play.
    let board = result(&initial_state(), Position::TopLeft).expect("X (0,0)");
    let board = result(&board, Position::BottomRight).expect("O (2,2)");
    let board = result(&board, Position::Center).expect("X (1,1)");
    assert_eq!(player(&board), Player::O);

    let chosen = minimax(&board).expect("non-terminal board yields a move");
    let outcomes: Vec<i8> = actions(&board)
        .into_iter()
        .map(|pos| play_out(result(&board, pos).expect("legal reply")))
        .collect();
    let best = outcomes.iter().copied().min().expect("replies exist");
    let chosen_outcome = play_out(result(&board, chosen).expect("chosen reply"));
    assert_eq!(chosen_outcome, best);
}

#[test]
fn test_every_two_ply_board_gets_a_legal_move() {
    for first in Position::ALL {
        let after_first = result(&initial_state(), first).expect("first move");
        for second in actions(&after_first) {
            let board = result(&after_first, second).expect("second move");
            let pos = minimax(&board).expect("two-ply board is not terminal");
            assert!(actions(&board).contains(&pos));
        }
    }
}

#[test]
fn test_won_board_has_no_move() {
    let moves = [
        Position::TopLeft,
        Position::MiddleLeft,
        Position::TopCenter,
        Position::Center,
        Position::TopRight,
    ];
    let mut board = initial_state();
    for pos in moves {
        board = result(&board, pos).expect("legal move");
    }
    assert_eq!(utility(&board), 1);
    assert_eq!(minimax(&board), None);
}

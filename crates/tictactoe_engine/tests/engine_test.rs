//! Integration tests for the game engine: history growth, move
//! rejection, time travel, branching, and the move-list view.

use tictactoe_engine::{
    changed_cell, check_winner, Board, Game, Player, Position, Square,
};

/// Plays the given positions in order, alternating X then O.
fn play(positions: &[Position]) -> Game {
    let mut game = Game::new();
    for &pos in positions {
        game.apply_move(pos);
    }
    game
}

#[test]
fn test_accepted_move_changes_exactly_one_cell() {
    let mut game = Game::new();
    game.apply_move(Position::Center);
    game.apply_move(Position::TopLeft);

    let history = game.history();
    assert_eq!(history.len(), 3);

    for n in 1..history.len() {
        let diffs = Position::ALL
            .iter()
            .filter(|&&pos| history[n].get(pos) != history[n - 1].get(pos))
            .count();
        assert_eq!(diffs, 1, "snapshot {n} must differ in exactly one cell");
    }
}

#[test]
fn test_move_after_win_is_silent_noop() {
    // X takes the top row: 0, 1, 2 with O at 3 and 4 in between.
    let game = play(&[
        Position::TopLeft,
        Position::MiddleLeft,
        Position::TopCenter,
        Position::Center,
        Position::TopRight,
    ]);
    assert_eq!(game.status_text(), "Winner: X");

    let before = game.clone();
    let mut game = game;
    game.apply_move(Position::BottomRight);

    assert_eq!(game, before, "state must be unchanged after a won game");
}

#[test]
fn test_winning_cells_reported() {
    let game = play(&[
        Position::TopLeft,
        Position::MiddleLeft,
        Position::TopCenter,
        Position::Center,
        Position::TopRight,
    ]);

    let view = game.view();
    assert_eq!(view.status, "Winner: X");
    assert_eq!(
        view.winning_cells,
        vec![Position::TopLeft, Position::TopCenter, Position::TopRight]
    );
}

#[test]
fn test_mixed_diagonal_is_not_a_win() {
    // Moves at indices 0, 4, 8 alternate X, O, X: no completed line.
    let game = play(&[Position::TopLeft, Position::Center, Position::BottomRight]);

    assert!(game.winner().is_none());
    assert_eq!(game.status_text(), "Next player: O");
}

#[test]
fn test_jump_to_reflects_historical_status() {
    let mut game = play(&[
        Position::TopLeft,
        Position::MiddleLeft,
        Position::TopCenter,
        Position::Center,
        Position::TopRight,
    ]);
    assert_eq!(game.status_text(), "Winner: X");

    // Before the winning move, the game was in progress with X to move.
    game.jump_to(4).unwrap();
    assert_eq!(game.status_text(), "Next player: X");

    // Turn parity: X to move iff the step is even.
    game.jump_to(3).unwrap();
    assert_eq!(game.to_move(), Player::O);
    game.jump_to(0).unwrap();
    assert_eq!(game.to_move(), Player::X);

    // The winner is still there at the final step.
    game.jump_to(5).unwrap();
    assert_eq!(game.status_text(), "Winner: X");
}

#[test]
fn test_branching_truncates_redo_history() {
    let mut game = play(&[
        Position::TopLeft,
        Position::Center,
        Position::TopRight,
        Position::BottomLeft,
    ]);
    assert_eq!(game.history().len(), 5);

    game.jump_to(2).unwrap();
    game.apply_move(Position::BottomRight);

    // Truncated to steps 0..=2, then the new snapshot appended.
    assert_eq!(game.history().len(), 4);
    assert_eq!(game.step(), 3);
    assert_eq!(
        game.current_board().get(Position::BottomRight),
        Square::Occupied(Player::X)
    );
    // The discarded branch is gone.
    assert_eq!(
        game.current_board().get(Position::TopRight),
        Square::Empty
    );
}

#[test]
fn test_toggle_sort_reverses_view_only() {
    let mut game = play(&[Position::Center, Position::TopLeft]);
    let ascending = game.view();

    game.toggle_sort();
    let descending = game.view();

    assert!(!descending.sort_ascending);
    assert_eq!(game.history().len(), 3, "history untouched by sort");
    assert_eq!(game.step(), 2, "pointer untouched by sort");

    let mut reversed = descending.moves.clone();
    reversed.reverse();
    assert_eq!(reversed, ascending.moves, "same labels, reversed order");

    game.toggle_sort();
    assert_eq!(game.view().moves, ascending.moves, "double toggle restores");
}

#[test]
fn test_move_locator_index_five() {
    let before = Board::new();
    let mut after = before.clone();
    after.set(Position::MiddleRight, Square::Occupied(Player::X));

    let pos = changed_cell(&after, Some(&before)).unwrap();
    assert_eq!((pos.column(), pos.row()), (3, 2));
}

#[test]
fn test_win_detector_all_eight_lines() {
    let lines: [[Position; 3]; 8] = [
        [Position::TopLeft, Position::TopCenter, Position::TopRight],
        [Position::MiddleLeft, Position::Center, Position::MiddleRight],
        [
            Position::BottomLeft,
            Position::BottomCenter,
            Position::BottomRight,
        ],
        [Position::TopLeft, Position::MiddleLeft, Position::BottomLeft],
        [Position::TopCenter, Position::Center, Position::BottomCenter],
        [
            Position::TopRight,
            Position::MiddleRight,
            Position::BottomRight,
        ],
        [Position::TopLeft, Position::Center, Position::BottomRight],
        [Position::TopRight, Position::Center, Position::BottomLeft],
    ];

    for line in lines {
        let mut board = Board::new();
        for pos in line {
            board.set(pos, Square::Occupied(Player::O));
        }
        let win = check_winner(&board).expect("completed line must be detected");
        assert_eq!(win.player, Player::O);
        assert_eq!(win.line, line);
    }
}

#[test]
fn test_game_survives_serialization() {
    let game = play(&[Position::Center, Position::TopLeft]);

    let json = serde_json::to_string(&game).unwrap();
    let restored: Game = serde_json::from_str(&json).unwrap();

    assert_eq!(restored, game);
    assert_eq!(restored.view(), game.view());
}

#[test]
fn test_full_scenario_matches_view() {
    let mut game = Game::new();
    game.apply_move(Position::Center); // X #1
    game.apply_move(Position::TopLeft); // O #2
    game.jump_to(1).unwrap();
    game.apply_move(Position::TopRight); // O #2 on the new branch

    let view = game.view();
    assert_eq!(view.step, 2);
    assert_eq!(view.status, "Next player: X");
    assert_eq!(view.moves.len(), 3);
    assert_eq!(view.moves[2].text, "Go to move #2 - O: (3, 1)");
    assert_eq!(view.board.get(Position::TopLeft), Square::Empty);
}

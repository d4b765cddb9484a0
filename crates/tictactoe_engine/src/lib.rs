//! Tic-tac-toe game state engine with move-history time travel.
//!
//! The engine owns a list of immutable board snapshots (one per accepted
//! move, starting from the empty board), a step pointer selecting the
//! snapshot currently displayed, and the sort direction of the move list
//! view. A presentation layer drives it through three commands
//! ([`Game::apply_move`], [`Game::jump_to`], [`Game::toggle_sort`]) and
//! renders from the [`GameView`] read accessor.
//!
//! # Example
//!
//! ```
//! use tictactoe_engine::{Game, Player, Position};
//!
//! let mut game = Game::new();
//! game.apply_move(Position::Center);
//! game.apply_move(Position::TopLeft);
//!
//! assert_eq!(game.to_move(), Player::X);
//! assert_eq!(game.status_text(), "Next player: X");
//!
//! // Time travel: jump back and branch.
//! game.jump_to(1).unwrap();
//! game.apply_move(Position::TopRight); // discards O's TopLeft move
//! assert_eq!(game.history().len(), 3);
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod engine;
pub mod invariants;
mod position;
mod rules;
mod types;

pub use engine::{Game, GameStatus, GameView, HistoryError, MoveLabel};
pub use position::Position;
pub use rules::{changed_cell, check_winner, Win};
pub use types::{Board, Player, Square};

/// Alias for clarity in presentation code.
pub type Mark = Player;

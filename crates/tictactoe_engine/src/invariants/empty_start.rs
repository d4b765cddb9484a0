//! Empty start invariant: the history begins with the empty board.

use super::Invariant;
use crate::engine::Game;
use crate::types::Board;

/// Invariant: `history[0]` is always the all-empty board.
///
/// Time travel and branching rewrite the tail of the history, never the
/// game-start snapshot.
pub struct EmptyStartInvariant;

impl Invariant<Game> for EmptyStartInvariant {
    fn holds(game: &Game) -> bool {
        game.history().first() == Some(&Board::new())
    }

    fn description() -> &'static str {
        "History starts with the all-empty board"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::position::Position;

    #[test]
    fn test_new_game_holds() {
        let game = Game::new();
        assert!(EmptyStartInvariant::holds(&game));
    }

    #[test]
    fn test_holds_after_moves_and_jumps() {
        let mut game = Game::new();
        game.apply_move(Position::Center);
        game.apply_move(Position::TopLeft);
        game.jump_to(0).unwrap();

        assert!(EmptyStartInvariant::holds(&game));
    }
}

//! Single step invariant: consecutive snapshots differ by one placement.

use super::Invariant;
use crate::engine::Game;
use crate::position::Position;
use crate::types::Square;

/// Invariant: each snapshot differs from its predecessor in exactly one
/// cell, and that cell transitions Empty -> Occupied.
///
/// Marks are never moved, replaced, or removed; history only ever records
/// placements.
pub struct SingleStepInvariant;

impl Invariant<Game> for SingleStepInvariant {
    fn holds(game: &Game) -> bool {
        game.history().windows(2).all(|pair| {
            let (prev, next) = (&pair[0], &pair[1]);
            let mut changed = Position::ALL.iter().copied().filter(|&pos| {
                prev.get(pos) != next.get(pos)
            });

            match changed.next() {
                Some(pos) => {
                    changed.next().is_none()
                        && prev.get(pos) == Square::Empty
                        && matches!(next.get(pos), Square::Occupied(_))
                }
                None => false,
            }
        })
    }

    fn description() -> &'static str {
        "Consecutive snapshots differ in exactly one cell, Empty -> Occupied"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_single_snapshot_holds() {
        let game = Game::new();
        assert!(SingleStepInvariant::holds(&game));
    }

    #[test]
    fn test_holds_through_a_game() {
        let mut game = Game::new();
        for pos in [
            Position::Center,
            Position::TopLeft,
            Position::BottomRight,
            Position::TopRight,
        ] {
            game.apply_move(pos);
            assert!(SingleStepInvariant::holds(&game));
        }
    }

    #[test]
    fn test_rejected_move_does_not_break_it() {
        let mut game = Game::new();
        game.apply_move(Position::Center);
        game.apply_move(Position::Center); // ignored, occupied
        assert!(SingleStepInvariant::holds(&game));
        assert_eq!(game.history().len(), 2);
    }
}

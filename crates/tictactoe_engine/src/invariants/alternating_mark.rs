//! Alternating mark invariant: placements alternate X, O, X, O, ...

use super::Invariant;
use crate::engine::Game;
use crate::rules::changed_cell;
use crate::types::{Player, Square};

/// Invariant: the mark placed to produce snapshot n is X iff n is odd.
///
/// X always moves first (snapshot 1), so odd snapshots record X
/// placements and even snapshots record O placements. This is the
/// history-side mirror of the derived turn flag.
pub struct AlternatingMarkInvariant;

impl Invariant<Game> for AlternatingMarkInvariant {
    fn holds(game: &Game) -> bool {
        let history = game.history();

        (1..history.len()).all(|n| {
            let expected = if n % 2 == 1 { Player::X } else { Player::O };
            match changed_cell(&history[n], Some(&history[n - 1])) {
                Some(pos) => history[n].get(pos) == Square::Occupied(expected),
                None => false,
            }
        })
    }

    fn description() -> &'static str {
        "Placements alternate, X on odd snapshots, O on even"
    }
}

//! Move location: which cell changed between two consecutive snapshots.

use crate::position::Position;
use crate::types::Board;

/// Finds the cell that changed between two consecutive history snapshots.
///
/// Scans cells in index order and returns the first position whose square
/// differs between `current` and `previous`. Under the history invariant
/// exactly one cell differs, so this is the cell of the move that produced
/// `current`.
///
/// Returns `None` when `previous` is absent (the synthetic game-start
/// entry has no move to locate) or when no cell differs.
pub fn changed_cell(current: &Board, previous: Option<&Board>) -> Option<Position> {
    let previous = previous?;
    Position::ALL
        .iter()
        .copied()
        .find(|&pos| current.get(pos) != previous.get(pos))
}

//! Board-inspection rules: win detection and move location.
//!
//! Both are pure functions over board snapshots; the engine composes them
//! but they carry no state of their own.

mod locate;
mod win;

pub use locate::changed_cell;
pub use win::{check_winner, Win};

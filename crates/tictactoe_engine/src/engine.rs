//! Game state engine: snapshot history, time travel, and the move-list
//! view.
//!
//! The engine is the single owner of game state. It stores one immutable
//! [`Board`] snapshot per accepted move (plus the empty game-start
//! snapshot), a step pointer selecting the snapshot on display, and the
//! move-list sort direction. Everything else - whose turn it is, the
//! status line, the winning cells, the move labels - is derived.

use crate::invariants;
use crate::position::Position;
use crate::rules::{changed_cell, check_winner, Win};
use crate::types::{Board, Player, Square};
use serde::{Deserialize, Serialize};
use tracing::{debug, instrument};

/// Error returned when a history jump targets a step that does not exist.
///
/// Unlike move rejection, which is a silent no-op, an out-of-range jump
/// is reported to the caller. The pointer is never moved outside the
/// history.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display)]
pub enum HistoryError {
    /// The requested step is not present in the history.
    #[display("Step {step} is out of range (history has {len} steps)")]
    StepOutOfRange {
        /// The requested step.
        step: usize,
        /// Current history length.
        len: usize,
    },
}

impl std::error::Error for HistoryError {}

/// Derived status of the snapshot on display.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameStatus {
    /// No winner on the current snapshot; the given player moves next.
    InProgress(Player),
    /// The current snapshot has a completed line.
    Won(Win),
}

impl std::fmt::Display for GameStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            GameStatus::InProgress(player) => write!(f, "Next player: {player}"),
            GameStatus::Won(win) => write!(f, "Winner: {}", win.player),
        }
    }
}

/// One entry of the move list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MoveLabel {
    /// The history step this entry jumps to.
    pub step: usize,
    /// Display text, e.g. "Go to move #3 - X: (1, 2)".
    pub text: String,
}

/// Read accessor for the presentation layer: everything a renderer needs,
/// derived from the engine in one consistent snapshot.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameView {
    /// The board snapshot on display.
    pub board: Board,
    /// Status line text.
    pub status: String,
    /// Cells of the completed line, empty when there is no winner.
    pub winning_cells: Vec<Position>,
    /// Move labels in display order (reversed when sorting descending).
    pub moves: Vec<MoveLabel>,
    /// Current sort direction of `moves`.
    pub sort_ascending: bool,
    /// The step pointer, for highlighting the active entry.
    pub step: usize,
}

/// Tic-tac-toe game engine with move-history time travel.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Game {
    /// Board snapshots; index 0 is the empty game-start board.
    history: Vec<Board>,
    /// Index into `history` of the snapshot on display.
    step: usize,
    /// Sort direction of the move-list view. Never affects `history`.
    sort_ascending: bool,
}

impl Game {
    /// Creates a new game: empty board, step 0, ascending move list.
    #[instrument]
    pub fn new() -> Self {
        Self {
            history: vec![Board::new()],
            step: 0,
            sort_ascending: true,
        }
    }

    /// Returns the snapshot history, oldest first.
    pub fn history(&self) -> &[Board] {
        &self.history
    }

    /// Returns the step pointer.
    pub fn step(&self) -> usize {
        self.step
    }

    /// Returns the move-list sort direction.
    pub fn sort_ascending(&self) -> bool {
        self.sort_ascending
    }

    /// Returns the snapshot on display.
    pub fn current_board(&self) -> &Board {
        &self.history[self.step]
    }

    /// Returns the player to move at the current step.
    ///
    /// The turn is derived from step parity (X moves on even steps),
    /// never stored, so it is always consistent after a jump.
    pub fn to_move(&self) -> Player {
        if self.step % 2 == 0 {
            Player::X
        } else {
            Player::O
        }
    }

    /// Returns the winning line on the current snapshot, if any.
    pub fn winner(&self) -> Option<Win> {
        check_winner(self.current_board())
    }

    /// Returns the derived status of the current snapshot.
    pub fn status(&self) -> GameStatus {
        match self.winner() {
            Some(win) => GameStatus::Won(win),
            None => GameStatus::InProgress(self.to_move()),
        }
    }

    /// Returns the status line text: "Winner: X" or "Next player: O".
    pub fn status_text(&self) -> String {
        self.status().to_string()
    }

    /// Places the active player's mark at the given position.
    ///
    /// Silently ignored when the current snapshot already has a winner or
    /// the cell is occupied; callers observe rejection only by comparing
    /// state. An accepted move truncates any redo tail beyond the step
    /// pointer (branching discards it), appends the new snapshot, and
    /// advances the pointer to it.
    #[instrument(skip(self), fields(step = self.step, player = %self.to_move()))]
    pub fn apply_move(&mut self, pos: Position) {
        if let Some(win) = self.winner() {
            debug!(winner = %win.player, "move ignored: game already won");
            return;
        }
        if !self.current_board().is_empty(pos) {
            debug!(position = %pos, "move ignored: square occupied");
            return;
        }

        let mut next = self.current_board().clone();
        next.set(pos, Square::Occupied(self.to_move()));

        self.history.truncate(self.step + 1);
        self.history.push(next);
        self.step = self.history.len() - 1;

        invariants::assert_invariants(self);
    }

    /// Moves the step pointer to a snapshot already present in history.
    ///
    /// # Errors
    ///
    /// Returns [`HistoryError::StepOutOfRange`] when `step` exceeds the
    /// last history index. The pointer is left untouched in that case.
    #[instrument(skip(self))]
    pub fn jump_to(&mut self, step: usize) -> Result<(), HistoryError> {
        if step >= self.history.len() {
            return Err(HistoryError::StepOutOfRange {
                step,
                len: self.history.len(),
            });
        }
        self.step = step;
        Ok(())
    }

    /// Flips the move-list sort direction. History and pointer are
    /// untouched; this is purely a view concern.
    #[instrument(skip(self))]
    pub fn toggle_sort(&mut self) {
        self.sort_ascending = !self.sort_ascending;
    }

    /// Produces the move list in ascending step order.
    ///
    /// Entry 0 is the synthetic game-start entry; entry n > 0 names the
    /// mark that was placed to produce snapshot n (X iff n is odd) and
    /// its 1-indexed (column, row) location.
    pub fn move_list(&self) -> Vec<MoveLabel> {
        self.history
            .iter()
            .enumerate()
            .map(|(step, board)| {
                let text = if step == 0 {
                    "Go to game start".to_string()
                } else {
                    let mark = if step % 2 == 1 { Player::X } else { Player::O };
                    let (column, row) = changed_cell(board, Some(&self.history[step - 1]))
                        .map(|pos| (pos.column(), pos.row()))
                        .unwrap_or((0, 0));
                    format!("Go to move #{step} - {mark}: ({column}, {row})")
                };
                MoveLabel { step, text }
            })
            .collect()
    }

    /// Produces the read accessor for the presentation layer.
    ///
    /// The move list comes back in display order: ascending, or reversed
    /// when the sort toggle is descending.
    pub fn view(&self) -> GameView {
        let mut moves = self.move_list();
        if !self.sort_ascending {
            moves.reverse();
        }

        GameView {
            board: self.current_board().clone(),
            status: self.status_text(),
            winning_cells: self
                .winner()
                .map(|win| win.line.to_vec())
                .unwrap_or_default(),
            moves,
            sort_ascending: self.sort_ascending,
            step: self.step,
        }
    }
}

impl Default for Game {
    fn default() -> Self {
        Self::new()
    }
}

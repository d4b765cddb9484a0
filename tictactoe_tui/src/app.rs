//! Application state: the engine plus a cursor into the move list.

use crossterm::event::KeyCode;
use tictactoe_engine::{Game, GameView, Position};
use tracing::{debug, warn};

/// Main application state.
///
/// Holds the game engine and the move-list cursor. The cursor indexes the
/// move list in display order; jumping resolves it to the entry's history
/// step, so it stays correct in either sort direction.
pub struct App {
    game: Game,
    cursor: usize,
}

impl App {
    /// Creates a new application with a fresh game.
    pub fn new() -> Self {
        Self {
            game: Game::new(),
            cursor: 0,
        }
    }

    /// Produces the current read accessor for rendering.
    pub fn view(&self) -> GameView {
        self.game.view()
    }

    /// Returns the move-list cursor, clamped to the list length.
    pub fn cursor(&self) -> usize {
        self.cursor.min(self.game.history().len() - 1)
    }

    /// Dispatches a key press to the matching engine command.
    pub fn handle_key(&mut self, code: KeyCode) {
        match code {
            KeyCode::Char(c @ '1'..='9') => {
                // Cells are numbered 1-9 on screen, row-major.
                let index = c as usize - '1' as usize;
                if let Some(pos) = Position::from_index(index) {
                    debug!(cell = index, "placing mark");
                    self.game.apply_move(pos);
                    self.cursor = self.game.step();
                }
            }
            KeyCode::Char('s') => self.game.toggle_sort(),
            KeyCode::Up => self.cursor = self.cursor().saturating_sub(1),
            KeyCode::Down => {
                let last = self.game.history().len() - 1;
                self.cursor = (self.cursor() + 1).min(last);
            }
            KeyCode::Enter => {
                let step = self.view().moves[self.cursor()].step;
                if let Err(e) = self.game.jump_to(step) {
                    warn!(error = %e, "jump rejected");
                }
            }
            _ => {}
        }
    }
}

impl Default for App {
    fn default() -> Self {
        Self::new()
    }
}

//! Application state and key handling.

use crossterm::event::KeyCode;
use tictactrace::{Game, Position};
use tracing::debug;

use crate::input;

/// Which pane has keyboard focus.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Focus {
    /// The board grid; arrows move the cursor, Enter places a mark.
    Board,
    /// The move list; arrows move the selection, Enter jumps to it.
    Moves,
}

impl Focus {
    fn toggle(self) -> Self {
        match self {
            Focus::Board => Focus::Moves,
            Focus::Moves => Focus::Board,
        }
    }
}

/// Main application state.
pub struct App {
    game: Game,
    cursor: Position,
    focus: Focus,
    /// Step index of the highlighted move-list entry.
    selected: usize,
}

impl App {
    /// Creates a new application.
    pub fn new(newest_first: bool) -> Self {
        let mut game = Game::new();
        if newest_first {
            game.toggle_sort_order();
        }
        Self {
            game,
            cursor: Position::Center,
            focus: Focus::Board,
            selected: 0,
        }
    }

    /// The game session.
    pub fn game(&self) -> &Game {
        &self.game
    }

    /// The board cursor.
    pub fn cursor(&self) -> Position {
        self.cursor
    }

    /// The focused pane.
    pub fn focus(&self) -> Focus {
        self.focus
    }

    /// Step index of the highlighted move-list entry.
    pub fn selected(&self) -> usize {
        self.selected
    }

    /// Handles a key press. Returns `false` when the app should exit.
    pub fn handle_key(&mut self, key: KeyCode) -> bool {
        debug!(?key, focus = ?self.focus, "key pressed");

        match key {
            KeyCode::Char('q') | KeyCode::Esc => return false,
            KeyCode::Char('r') => {
                self.game.restart();
                self.selected = 0;
            }
            KeyCode::Char('s') => self.game.toggle_sort_order(),
            KeyCode::Tab => self.focus = self.focus.toggle(),
            KeyCode::Char(c) if c.is_ascii_digit() => self.place_at_digit(c),
            key => match self.focus {
                Focus::Board => self.handle_board_key(key),
                Focus::Moves => self.handle_moves_key(key),
            },
        }
        true
    }

    fn handle_board_key(&mut self, key: KeyCode) {
        match key {
            KeyCode::Up | KeyCode::Down | KeyCode::Left | KeyCode::Right => {
                self.cursor = input::move_cursor(self.cursor, key);
            }
            KeyCode::Enter | KeyCode::Char(' ') => self.place(self.cursor),
            _ => {}
        }
    }

    fn handle_moves_key(&mut self, key: KeyCode) {
        let last = self.game.history().len() - 1;
        // Up always moves toward the top of the displayed list, whichever
        // way it is sorted.
        let ascending = self.game.ascending();
        match key {
            KeyCode::Up => {
                self.selected = if ascending {
                    self.selected.saturating_sub(1)
                } else {
                    (self.selected + 1).min(last)
                };
            }
            KeyCode::Down => {
                self.selected = if ascending {
                    (self.selected + 1).min(last)
                } else {
                    self.selected.saturating_sub(1)
                };
            }
            KeyCode::Enter => self.game.jump_to(self.selected),
            _ => {}
        }
    }

    /// Places a mark via the 1-9 cell shortcuts.
    fn place_at_digit(&mut self, digit: char) {
        let Some(number) = digit.to_digit(10) else {
            return;
        };
        if let Some(position) = (number as usize)
            .checked_sub(1)
            .and_then(Position::from_index)
        {
            self.cursor = position;
            self.place(position);
        }
    }

    fn place(&mut self, position: Position) {
        self.game.play(position);
        // Keep the move-list selection on the step being displayed; a play
        // may have truncated the history out from under it.
        self.selected = self.game.step();
    }
}

//! Game controller: move history, step pointer, and derived views.

use crate::describe::{MoveDetail, describe};
use crate::invariants::assert_invariants;
use crate::outcome::{Outcome, evaluate};
use crate::position::Position;
use crate::types::{Board, Player};
use serde::{Deserialize, Serialize};
use tracing::{debug, instrument, warn};

/// Why a move was not applied.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display)]
pub enum MoveRejected {
    /// The cell at the position is already occupied.
    #[display("cell {} is already occupied", _0)]
    CellOccupied(Position),
    /// The board at the current step already has an outcome.
    #[display("the game is already over")]
    GameOver,
}

impl std::error::Error for MoveRejected {}

/// A tic-tac-toe session: an append-only history of board snapshots with a
/// browsable step pointer.
///
/// Every accepted move appends a fresh snapshot; earlier snapshots are
/// never touched, so any step can be revisited with [`Game::jump_to`].
/// Playing from a past step discards the snapshots after it first. Whose
/// turn it is falls out of step parity and is never stored.
#[derive(Debug, Clone)]
pub struct Game {
    /// Board snapshots; entry 0 is the empty starting board.
    history: Vec<Board>,
    /// Index of the snapshot currently displayed.
    step: usize,
    /// Presentation order of the move list.
    ascending: bool,
}

impl Game {
    /// Creates a new session with a single empty snapshot.
    pub fn new() -> Self {
        Self {
            history: vec![Board::new()],
            step: 0,
            ascending: true,
        }
    }

    /// Creates a session from raw parts, bypassing move validation.
    ///
    /// Test and verification support; regular construction goes through
    /// [`Game::new`] and [`Game::try_play`].
    pub(crate) fn from_parts(history: Vec<Board>, step: usize) -> Self {
        Self {
            history,
            step,
            ascending: true,
        }
    }

    /// Returns the board at the current step.
    pub fn board(&self) -> &Board {
        &self.history[self.step]
    }

    /// Returns all board snapshots, oldest first.
    pub fn history(&self) -> &[Board] {
        &self.history
    }

    /// Returns the current step.
    pub fn step(&self) -> usize {
        self.step
    }

    /// Returns the move-list sort order.
    pub fn ascending(&self) -> bool {
        self.ascending
    }

    /// Returns the player to move at the current step.
    pub fn to_move(&self) -> Player {
        Player::for_step(self.step)
    }

    /// Evaluates the board at the current step.
    pub fn outcome(&self) -> Outcome {
        evaluate(self.board())
    }

    /// Applies a move at the current step.
    ///
    /// On success the history is truncated to the current step, the new
    /// snapshot is appended, and the step pointer moves to it: playing
    /// from the past overwrites the future. This is the only operation
    /// that changes the history length.
    ///
    /// # Errors
    ///
    /// Returns [`MoveRejected::GameOver`] if the current board already has
    /// an outcome, or [`MoveRejected::CellOccupied`] if the cell is taken.
    /// The session is unchanged in either case.
    #[instrument(skip(self))]
    pub fn try_play(&mut self, position: Position) -> Result<(), MoveRejected> {
        if self.outcome().is_over() {
            return Err(MoveRejected::GameOver);
        }
        if !self.board().is_empty(position) {
            return Err(MoveRejected::CellOccupied(position));
        }

        let player = self.to_move();
        let next = self.board().with(position, player);
        debug!(%player, %position, board = %next, "move applied");

        self.history.truncate(self.step + 1);
        self.history.push(next);
        self.step = self.history.len() - 1;
        assert_invariants(self);
        Ok(())
    }

    /// Move entry point for the presentation layer.
    ///
    /// Invalid moves (occupied cell, finished game) are absorbed as no-ops;
    /// the rejection is logged at debug level rather than surfaced. Callers
    /// that want the reason use [`Game::try_play`].
    pub fn play(&mut self, position: Position) {
        if let Err(rejected) = self.try_play(position) {
            debug!(%rejected, %position, "move ignored");
        }
    }

    /// Repositions the step pointer.
    ///
    /// Out-of-range targets are absorbed as no-ops with a warning; the
    /// presentation layer only ever offers valid indices, so a bad target
    /// is a caller bug, not a reason to panic.
    #[instrument(skip(self))]
    pub fn jump_to(&mut self, step: usize) {
        if step >= self.history.len() {
            warn!(step, history_len = self.history.len(), "jump target out of range");
            return;
        }
        self.step = step;
        assert_invariants(self);
    }

    /// Flips the move-list sort order. Affects presentation only.
    pub fn toggle_sort_order(&mut self) {
        self.ascending = !self.ascending;
    }

    /// Resets the session to a single empty snapshot.
    ///
    /// The sort order is a viewing preference, not game state, and is kept.
    pub fn restart(&mut self) {
        debug!("restarting game");
        self.history = vec![Board::new()];
        self.step = 0;
    }

    /// Recomputes everything the presentation layer renders.
    ///
    /// The move list carries one entry per snapshot: entry 0 is "game
    /// start" with no detail, later entries describe the placement that
    /// produced them. Descending order reports the same list reversed.
    pub fn view(&self) -> GameView {
        let moves: Vec<MoveEntry> = (0..self.history.len())
            .map(|index| MoveEntry {
                step: index,
                detail: if index == 0 {
                    None
                } else {
                    describe(&self.history[index - 1], &self.history[index])
                },
                current: index == self.step,
            })
            .collect();
        let moves = if self.ascending {
            moves
        } else {
            moves.into_iter().rev().collect()
        };

        GameView {
            board: self.board().clone(),
            outcome: self.outcome(),
            moves,
            ascending: self.ascending,
            step: self.step,
            to_move: self.to_move(),
        }
    }
}

impl Default for Game {
    fn default() -> Self {
        Self::new()
    }
}

/// Everything needed to render one frame, derived fresh per query.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameView {
    board: Board,
    outcome: Outcome,
    moves: Vec<MoveEntry>,
    ascending: bool,
    step: usize,
    to_move: Player,
}

impl GameView {
    /// The board at the current step.
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// The outcome of the board at the current step.
    pub fn outcome(&self) -> &Outcome {
        &self.outcome
    }

    /// The move list, in presentation order.
    pub fn moves(&self) -> &[MoveEntry] {
        &self.moves
    }

    /// The move-list sort order.
    pub fn ascending(&self) -> bool {
        self.ascending
    }

    /// The current step.
    pub fn step(&self) -> usize {
        self.step
    }

    /// The player to move at the current step.
    pub fn to_move(&self) -> Player {
        self.to_move
    }
}

/// One entry in the browsable move list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MoveEntry {
    step: usize,
    detail: Option<MoveDetail>,
    current: bool,
}

impl MoveEntry {
    /// The history index this entry jumps to.
    pub fn step(&self) -> usize {
        self.step
    }

    /// The placement that produced this snapshot; `None` for game start.
    pub fn detail(&self) -> Option<MoveDetail> {
        self.detail
    }

    /// Whether this entry is the currently displayed step.
    pub fn current(&self) -> bool {
        self.current
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_game_has_one_empty_snapshot() {
        let game = Game::new();
        assert_eq!(game.history().len(), 1);
        assert_eq!(game.step(), 0);
        assert_eq!(game.to_move(), Player::X);
        assert_eq!(game.outcome(), Outcome::InProgress);
    }

    #[test]
    fn test_play_appends_and_advances() {
        let mut game = Game::new();
        game.play(Position::Center);

        assert_eq!(game.history().len(), 2);
        assert_eq!(game.step(), 1);
        assert_eq!(game.to_move(), Player::O);
        assert!(!game.board().is_empty(Position::Center));
    }

    #[test]
    fn test_occupied_cell_is_rejected() {
        let mut game = Game::new();
        game.play(Position::Center);

        let before = game.clone();
        assert_eq!(
            game.try_play(Position::Center),
            Err(MoveRejected::CellOccupied(Position::Center))
        );
        assert_eq!(game.history(), before.history());
        assert_eq!(game.step(), before.step());
    }

    #[test]
    fn test_toggle_sort_order_touches_nothing_else() {
        let mut game = Game::new();
        game.play(Position::TopLeft);
        game.toggle_sort_order();

        assert!(!game.ascending());
        assert_eq!(game.history().len(), 2);
        assert_eq!(game.step(), 1);
    }

    #[test]
    fn test_restart_keeps_sort_preference() {
        let mut game = Game::new();
        game.play(Position::TopLeft);
        game.toggle_sort_order();
        game.restart();

        assert_eq!(game.history().len(), 1);
        assert_eq!(game.step(), 0);
        assert!(!game.ascending());
    }
}

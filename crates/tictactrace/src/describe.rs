//! Move descriptions derived from successive board snapshots.

use crate::position::Position;
use crate::types::{Board, Player};
use serde::{Deserialize, Serialize};
use strum::IntoEnumIterator;
use tracing::instrument;

/// The placement that produced one snapshot from its predecessor.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct MoveDetail {
    /// The player who placed the mark.
    player: Player,
    /// The cell that changed.
    position: Position,
}

impl MoveDetail {
    /// Creates a new move detail.
    pub fn new(player: Player, position: Position) -> Self {
        Self { player, position }
    }

    /// Returns the player who placed the mark.
    pub fn player(&self) -> Player {
        self.player
    }

    /// Returns the cell that changed.
    pub fn position(&self) -> Position {
        self.position
    }

    /// The 1-indexed row of the placement.
    pub fn row(&self) -> usize {
        self.position.row()
    }

    /// The 1-indexed column of the placement.
    pub fn column(&self) -> usize {
        self.position.column()
    }
}

impl std::fmt::Display for MoveDetail {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} at ({},{})", self.player, self.row(), self.column())
    }
}

/// Describes the single cell that changed between two successive snapshots.
///
/// Callers are expected to pass adjacent history entries, which differ in
/// exactly one cell. The scan runs in index order and stops at the first
/// difference, so a malformed pair that differs in more than one cell still
/// yields a deterministic answer: the lowest-index change. Returns `None`
/// when the snapshots are identical, or when the first difference is not a
/// placement.
#[instrument(skip(previous, current))]
pub fn describe(previous: &Board, current: &Board) -> Option<MoveDetail> {
    let position = Position::iter().find(|&p| previous.get(p) != current.get(p))?;
    let player = current.get(position).player()?;
    Some(MoveDetail::new(player, position))
}

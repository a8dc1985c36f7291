//! Outcome evaluation: wins, draws, and the winning line.

use crate::position::Position;
use crate::types::{Board, Cell, Player};
use serde::{Deserialize, Serialize};
use tracing::instrument;

/// The eight winning lines, in the order they are checked.
pub const LINES: [[Position; 3]; 8] = [
    // Rows
    [Position::TopLeft, Position::TopCenter, Position::TopRight],
    [Position::MiddleLeft, Position::Center, Position::MiddleRight],
    [Position::BottomLeft, Position::BottomCenter, Position::BottomRight],
    // Columns
    [Position::TopLeft, Position::MiddleLeft, Position::BottomLeft],
    [Position::TopCenter, Position::Center, Position::BottomCenter],
    [Position::TopRight, Position::MiddleRight, Position::BottomRight],
    // Diagonals
    [Position::TopLeft, Position::Center, Position::BottomRight],
    [Position::TopRight, Position::Center, Position::BottomLeft],
];

/// Result of evaluating a board snapshot.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Outcome {
    /// No line is complete and at least one cell is empty.
    InProgress,
    /// A player completed a line.
    Won {
        /// The winning player.
        player: Player,
        /// The completed line, in its canonical order.
        line: [Position; 3],
    },
    /// Every cell is occupied and no line is complete.
    Draw,
}

impl Outcome {
    /// Whether the game has ended.
    pub fn is_over(&self) -> bool {
        *self != Outcome::InProgress
    }

    /// Returns the winning player, if any.
    pub fn winner(&self) -> Option<Player> {
        match self {
            Outcome::Won { player, .. } => Some(*player),
            _ => None,
        }
    }

    /// Returns the completed line, if any.
    pub fn winning_line(&self) -> Option<[Position; 3]> {
        match self {
            Outcome::Won { line, .. } => Some(*line),
            _ => None,
        }
    }
}

/// Evaluates a board snapshot.
///
/// Lines are checked in the fixed order of [`LINES`]; the first line whose
/// three cells hold the same mark decides the game and no further lines
/// are checked, so even a malformed board with several complete lines gets
/// a deterministic answer. A full board with a complete line is a win, not
/// a draw.
#[instrument(skip(board))]
pub fn evaluate(board: &Board) -> Outcome {
    for line in LINES {
        let [a, b, c] = line;
        if let Cell::Occupied(player) = board.get(a) {
            if board.get(b) == board.get(a) && board.get(c) == board.get(a) {
                return Outcome::Won { player, line };
            }
        }
    }

    if board.is_full() {
        Outcome::Draw
    } else {
        Outcome::InProgress
    }
}

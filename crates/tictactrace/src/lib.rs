//! Tic-tac-toe game logic with a browsable move history.
//!
//! The engine keeps every board state a game has passed through, so any
//! earlier step can be revisited and even played from, discarding the
//! moves after it.
//!
//! # Architecture
//!
//! - **Outcome evaluation**: [`evaluate`] decides win, draw, or in-progress
//!   from a single board snapshot and reports the completed line.
//! - **Move description**: [`describe`] derives who played where from two
//!   successive snapshots.
//! - **Session control**: [`Game`] owns the snapshot history, the step
//!   pointer, and the move-list sort order, and derives everything a front
//!   end renders via [`Game::view`].
//!
//! # Example
//!
//! ```
//! use tictactrace::{Game, Outcome, Player, Position};
//!
//! let mut game = Game::new();
//! game.play(Position::TopLeft); // X
//! game.play(Position::Center); // O
//! game.play(Position::TopCenter); // X
//! game.play(Position::BottomLeft); // O
//! game.play(Position::TopRight); // X completes the top row
//!
//! assert!(matches!(game.outcome(), Outcome::Won { player: Player::X, .. }));
//!
//! // Browse back to any earlier snapshot without losing the record.
//! game.jump_to(2);
//! assert_eq!(game.to_move(), Player::X);
//! assert_eq!(game.history().len(), 6);
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod describe;
mod game;
mod invariants;
mod kani_support;
mod outcome;
mod position;
mod types;

pub use describe::{MoveDetail, describe};
pub use game::{Game, GameView, MoveEntry, MoveRejected};
pub use invariants::{
    AlternatingMarkInvariant, Invariant, InvariantSet, InvariantViolation, SessionInvariants,
    SnapshotChainInvariant, StepInRangeInvariant, assert_invariants,
};
pub use outcome::{LINES, Outcome, evaluate};
pub use position::Position;
pub use types::{Board, Cell, Player};

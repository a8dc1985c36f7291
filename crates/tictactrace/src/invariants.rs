//! First-class invariants for the game session.
//!
//! Invariants are logical properties that must hold throughout a session.
//! They are testable independently and serve as documentation of system
//! guarantees; mutating transitions re-check them in debug builds.

use crate::game::Game;
use crate::position::Position;
use crate::types::{Cell, Player};
use strum::IntoEnumIterator;

/// A logical property that must hold for a given state.
pub trait Invariant<S> {
    /// Checks if the invariant holds for the given state.
    fn holds(state: &S) -> bool;

    /// Human-readable description of the invariant.
    fn description() -> &'static str;
}

/// Violation of an invariant.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InvariantViolation {
    /// Description of the violated invariant.
    pub description: String,
}

impl InvariantViolation {
    /// Creates a new invariant violation.
    pub fn new(description: impl Into<String>) -> Self {
        Self {
            description: description.into(),
        }
    }
}

/// A set of invariants that can be checked together.
///
/// Enables composition of multiple invariants into a single verification
/// step. Implementations are provided for tuples.
pub trait InvariantSet<S> {
    /// Checks all invariants in the set.
    ///
    /// Returns Ok(()) if all invariants hold, or Err with a list of
    /// violations if any invariant fails.
    fn check_all(state: &S) -> Result<(), Vec<InvariantViolation>>;
}

impl<S, I1, I2> InvariantSet<S> for (I1, I2)
where
    I1: Invariant<S>,
    I2: Invariant<S>,
{
    fn check_all(state: &S) -> Result<(), Vec<InvariantViolation>> {
        let mut violations = Vec::new();

        if !I1::holds(state) {
            violations.push(InvariantViolation::new(I1::description()));
        }
        if !I2::holds(state) {
            violations.push(InvariantViolation::new(I2::description()));
        }

        if violations.is_empty() { Ok(()) } else { Err(violations) }
    }
}

impl<S, I1, I2, I3> InvariantSet<S> for (I1, I2, I3)
where
    I1: Invariant<S>,
    I2: Invariant<S>,
    I3: Invariant<S>,
{
    fn check_all(state: &S) -> Result<(), Vec<InvariantViolation>> {
        let mut violations = Vec::new();

        if !I1::holds(state) {
            violations.push(InvariantViolation::new(I1::description()));
        }
        if !I2::holds(state) {
            violations.push(InvariantViolation::new(I2::description()));
        }
        if !I3::holds(state) {
            violations.push(InvariantViolation::new(I3::description()));
        }

        if violations.is_empty() { Ok(()) } else { Err(violations) }
    }
}

/// Invariant: adjacent history snapshots differ in exactly one cell, and
/// that cell goes from empty to occupied.
pub struct SnapshotChainInvariant;

impl Invariant<Game> for SnapshotChainInvariant {
    fn holds(game: &Game) -> bool {
        game.history().windows(2).all(|pair| {
            let changed: Vec<Position> = Position::iter()
                .filter(|&p| pair[0].get(p) != pair[1].get(p))
                .collect();
            match changed.as_slice() {
                [position] => {
                    pair[0].get(*position) == Cell::Empty
                        && pair[1].get(*position) != Cell::Empty
                }
                _ => false,
            }
        })
    }

    fn description() -> &'static str {
        "Adjacent snapshots differ in exactly one newly occupied cell"
    }
}

/// Invariant: the mark appended by each transition belongs to the
/// step-parity player of the step it was played from.
pub struct AlternatingMarkInvariant;

impl Invariant<Game> for AlternatingMarkInvariant {
    fn holds(game: &Game) -> bool {
        game.history()
            .windows(2)
            .enumerate()
            .all(|(step, pair)| {
                let placed = Position::iter()
                    .find(|&p| pair[0].get(p) != pair[1].get(p))
                    .and_then(|p| pair[1].get(p).player());
                placed == Some(Player::for_step(step))
            })
    }

    fn description() -> &'static str {
        "Each transition places the step-parity player's mark"
    }
}

/// Invariant: the step pointer indexes an existing snapshot.
pub struct StepInRangeInvariant;

impl Invariant<Game> for StepInRangeInvariant {
    fn holds(game: &Game) -> bool {
        game.step() < game.history().len()
    }

    fn description() -> &'static str {
        "Step pointer is within history bounds"
    }
}

/// All session invariants as a composable set.
pub type SessionInvariants = (
    SnapshotChainInvariant,
    AlternatingMarkInvariant,
    StepInRangeInvariant,
);

/// Asserts that all session invariants hold (debug builds only).
pub fn assert_invariants(game: &Game) {
    debug_assert!(
        SnapshotChainInvariant::holds(game),
        "{}",
        SnapshotChainInvariant::description()
    );
    debug_assert!(
        AlternatingMarkInvariant::holds(game),
        "{}",
        AlternatingMarkInvariant::description()
    );
    debug_assert!(
        StepInRangeInvariant::holds(game),
        "{}",
        StepInRangeInvariant::description()
    );
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Board;

    #[test]
    fn test_invariant_set_holds_for_new_game() {
        let game = Game::new();
        assert!(SessionInvariants::check_all(&game).is_ok());
    }

    #[test]
    fn test_invariant_set_holds_after_moves() {
        let mut game = Game::new();
        game.play(Position::TopLeft);
        game.play(Position::Center);
        game.play(Position::TopRight);
        game.jump_to(1);

        assert!(SessionInvariants::check_all(&game).is_ok());
    }

    #[test]
    fn test_double_placement_violates_chain() {
        let start = Board::new();
        let corrupt = start
            .with(Position::TopLeft, Player::X)
            .with(Position::Center, Player::O);
        let game = Game::from_parts(vec![start, corrupt], 1);

        assert!(!SnapshotChainInvariant::holds(&game));
    }

    #[test]
    fn test_wrong_first_mover_violates_alternation() {
        let start = Board::new();
        let corrupt = start.with(Position::TopLeft, Player::O);
        let game = Game::from_parts(vec![start, corrupt], 1);

        assert!(SnapshotChainInvariant::holds(&game));
        assert!(!AlternatingMarkInvariant::holds(&game));
    }

    #[test]
    fn test_dangling_step_violates_range() {
        let game = Game::from_parts(vec![Board::new()], 5);
        assert!(!StepInRangeInvariant::holds(&game));
    }

    #[test]
    fn test_invariant_set_reports_violations() {
        let start = Board::new();
        let corrupt = start.with(Position::TopLeft, Player::O);
        let game = Game::from_parts(vec![start, corrupt], 3);

        let violations = SessionInvariants::check_all(&game).unwrap_err();
        assert_eq!(violations.len(), 2);
    }

    #[test]
    fn test_two_invariants_as_set() {
        let game = Game::new();

        type TwoInvariants = (SnapshotChainInvariant, StepInRangeInvariant);
        assert!(TwoInvariants::check_all(&game).is_ok());
    }
}

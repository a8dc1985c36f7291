//! Kani arbitrary implementations and proof harnesses.
//!
//! These let Kani explore all possible values of the domain types during
//! model checking. Nothing here is compiled into normal builds.

#[cfg(kani)]
use crate::{Board, Cell, Player, Position};

#[cfg(kani)]
impl kani::Arbitrary for Player {
    fn any() -> Self {
        if kani::any() { Player::X } else { Player::O }
    }
}

#[cfg(kani)]
impl kani::Arbitrary for Cell {
    fn any() -> Self {
        if kani::any() {
            Cell::Empty
        } else {
            Cell::Occupied(kani::any())
        }
    }
}

#[cfg(kani)]
impl kani::Arbitrary for Position {
    fn any() -> Self {
        let index: usize = kani::any();
        kani::assume(index < 9);
        match Position::from_index(index) {
            Some(position) => position,
            None => unreachable!(),
        }
    }
}

#[cfg(kani)]
impl kani::Arbitrary for Board {
    fn any() -> Self {
        let cells: [Cell; 9] = kani::any();
        Board::from_cells(cells)
    }
}

#[cfg(kani)]
mod proofs {
    use crate::{Board, Cell, Outcome, describe, evaluate};

    #[kani::proof]
    fn winning_line_cells_carry_the_winners_mark() {
        let board: Board = kani::any();
        if let Outcome::Won { player, line } = evaluate(&board) {
            for position in line {
                kani::assert(
                    board.get(position) == Cell::Occupied(player),
                    "every cell of the reported line holds the winner's mark",
                );
            }
        }
    }

    #[kani::proof]
    fn draw_requires_a_full_board() {
        let board: Board = kani::any();
        if evaluate(&board) == Outcome::Draw {
            kani::assert(board.is_full(), "a draw is only reported on a full board");
        }
    }

    #[kani::proof]
    fn described_coordinates_stay_on_the_grid() {
        let previous: Board = kani::any();
        let current: Board = kani::any();
        if let Some(detail) = describe(&previous, &current) {
            kani::assert(detail.row() >= 1 && detail.row() <= 3, "row is 1-indexed");
            kani::assert(
                detail.column() >= 1 && detail.column() <= 3,
                "column is 1-indexed",
            );
        }
    }
}

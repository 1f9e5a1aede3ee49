//! Jump rules: a peg leaps orthogonally over an adjacent peg into the empty
//! hole directly beyond it, and the jumped peg is removed.

use crate::board::{Board, Cell, Pos};

/// Direction vectors for jumps (exactly two cells along one axis)
const JUMP_DIRECTIONS: [(i32, i32); 4] = [
    (-2, 0), // Up
    (2, 0),  // Down
    (0, -2), // Left
    (0, 2),  // Right
];

/// A legal jump on a specific board
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Jump {
    /// Peg that moves
    pub from: Pos,
    /// Peg that gets captured
    pub over: Pos,
    /// Hole the peg lands in
    pub to: Pos,
}

/// Check whether the peg at `from` may jump to `to`.
///
/// Legal iff `from` holds a piece, `to` is empty, `to` is exactly two cells
/// away along a row or column, and the cell in between holds a piece.
/// Positions outside the grid are simply illegal.
///
/// # Returns
/// The jump, including the captured midpoint, or `None` if illegal.
/// The board is never modified.
pub fn validate(board: &Board, from: Pos, to: Pos) -> Option<Jump> {
    if board.cell(from)? != Cell::Piece || board.cell(to)? != Cell::Empty {
        return None;
    }

    let dr = to.row as i32 - from.row as i32;
    let dc = to.col as i32 - from.col as i32;
    if !JUMP_DIRECTIONS.contains(&(dr, dc)) {
        return None;
    }

    let over = to.offset(-dr.signum(), -dc.signum())?;
    if board.cell(over)? != Cell::Piece {
        return None;
    }

    Some(Jump { from, over, to })
}

/// Apply a validated jump, producing the next board.
///
/// `board` itself is left untouched; the result differs from it in exactly
/// three cells.
pub fn apply(board: &Board, jump: Jump) -> Board {
    debug_assert_eq!(validate(board, jump.from, jump.to), Some(jump));

    let mut next = board.clone();
    next.set(jump.from, Cell::Empty);
    next.set(jump.over, Cell::Empty);
    next.set(jump.to, Cell::Piece);
    next
}

/// All legal jumps for the peg at `from`
pub fn targets_from(board: &Board, from: Pos) -> Vec<Jump> {
    JUMP_DIRECTIONS
        .iter()
        .filter_map(|&(dr, dc)| from.offset(dr, dc))
        .filter_map(|to| validate(board, from, to))
        .collect()
}

/// Whether any peg on the board can still move
pub fn has_any_jump(board: &Board) -> bool {
    board.pieces().any(|pos| !targets_from(board, pos).is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn start() -> Board {
        Board::new(7)
    }

    #[test]
    fn test_opening_jump_into_center() {
        let board = start();
        let jump = validate(&board, Pos::new(1, 3), Pos::new(3, 3));
        assert_eq!(
            jump,
            Some(Jump {
                from: Pos::new(1, 3),
                over: Pos::new(2, 3),
                to: Pos::new(3, 3),
            })
        );
    }

    #[test]
    fn test_all_four_opening_jumps() {
        let board = start();
        for from in [Pos::new(1, 3), Pos::new(5, 3), Pos::new(3, 1), Pos::new(3, 5)] {
            assert!(validate(&board, from, board.center()).is_some(), "{from}");
        }
    }

    #[test]
    fn test_wrong_distances_are_illegal() {
        // Make (3, 3) the only hole and probe it from every distance
        let board = start();
        let center = board.center();
        for from in [
            Pos::new(2, 3), // one away
            Pos::new(0, 3), // three away
            Pos::new(3, 0), // three away
            Pos::new(1, 1), // diagonal
            Pos::new(2, 2), // diagonal
            Pos::new(1, 2), // knight-like
        ] {
            assert_eq!(validate(&board, from, center), None, "{from}");
        }
    }

    #[test]
    fn test_source_must_be_piece() {
        let board = start();
        assert_eq!(validate(&board, Pos::new(0, 0), Pos::new(2, 0)), None);
        assert_eq!(validate(&board, Pos::new(3, 3), Pos::new(1, 3)), None);
    }

    #[test]
    fn test_target_must_be_empty() {
        let board = start();
        assert_eq!(validate(&board, Pos::new(2, 3), Pos::new(4, 3)), None);
        assert_eq!(validate(&board, Pos::new(2, 2), Pos::new(0, 2)), None);
    }

    #[test]
    fn test_midpoint_must_be_piece() {
        let board = Board::from_rows(&[
            "##...##",
            "##...##",
            ".......",
            ".o.....",
            ".......",
            "##...##",
            "##...##",
        ])
        .unwrap();
        assert_eq!(validate(&board, Pos::new(3, 1), Pos::new(3, 3)), None);
    }

    #[test]
    fn test_target_outside_grid_is_illegal() {
        let board = Board::from_rows(&["o.o", "o.o", "..."]).unwrap();
        assert_eq!(validate(&board, Pos::new(0, 2), Pos::new(0, 4)), None);
        assert_eq!(validate(&board, Pos::new(9, 9), Pos::new(0, 1)), None);
    }

    #[test]
    fn test_validate_is_pure() {
        let board = start();
        let before = board.clone();
        let first = validate(&board, Pos::new(3, 5), Pos::new(3, 3));
        let second = validate(&board, Pos::new(3, 5), Pos::new(3, 3));
        assert_eq!(first, second);
        assert_eq!(board, before);
    }

    #[test]
    fn test_apply_moves_three_cells() {
        let board = start();
        let jump = validate(&board, Pos::new(5, 3), Pos::new(3, 3)).unwrap();
        let next = apply(&board, jump);

        assert_eq!(next.get(Pos::new(5, 3)), Cell::Empty);
        assert_eq!(next.get(Pos::new(4, 3)), Cell::Empty);
        assert_eq!(next.get(Pos::new(3, 3)), Cell::Piece);
        assert_eq!(next.piece_count(), board.piece_count() - 1);

        let changed = board.positions().filter(|&p| board.get(p) != next.get(p)).count();
        assert_eq!(changed, 3);
        // Original untouched
        assert_eq!(board, start());
    }

    #[test]
    fn test_targets_from() {
        let board = start();
        let jumps = targets_from(&board, Pos::new(3, 1));
        assert_eq!(jumps.len(), 1);
        assert_eq!(jumps[0].to, Pos::new(3, 3));

        assert!(targets_from(&board, Pos::new(0, 3)).is_empty());
        // Edge pegs must not trip over the grid boundary
        assert!(targets_from(&board, Pos::new(0, 2)).is_empty());
    }

    #[test]
    fn test_has_any_jump() {
        assert!(has_any_jump(&start()));

        let stuck = Board::from_rows(&["o.o", "...", "o.o"]).unwrap();
        assert!(!has_any_jump(&stuck));
    }
}

//! Win condition: a single peg left, standing on the centre hole.

use crate::board::{Board, Cell};

/// Check if the board is solved.
///
/// True iff exactly one peg remains and it sits on [`Board::center`].
/// A lone peg anywhere else is not a win. Computed from scratch on every
/// call; it is a single pass over the grid.
pub fn is_game_over(board: &Board) -> bool {
    board.cell(board.center()) == Some(Cell::Piece) && board.piece_count() == 1
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_start_is_not_over() {
        assert!(!is_game_over(&Board::new(7)));
    }

    #[test]
    fn test_single_center_peg_wins() {
        let board = Board::from_rows(&[
            "##...##",
            "##...##",
            ".......",
            "...o...",
            ".......",
            "##...##",
            "##...##",
        ])
        .unwrap();
        assert!(is_game_over(&board));
    }

    #[test]
    fn test_single_off_center_peg_does_not_win() {
        let board = Board::from_rows(&[
            "##...##",
            "##o..##",
            ".......",
            ".......",
            ".......",
            "##...##",
            "##...##",
        ])
        .unwrap();
        assert_eq!(board.piece_count(), 1);
        assert!(!is_game_over(&board));
    }

    #[test]
    fn test_center_plus_another_peg_does_not_win() {
        let board = Board::from_rows(&[
            "##...##",
            "##...##",
            ".......",
            "...o..o",
            ".......",
            "##...##",
            "##...##",
        ])
        .unwrap();
        assert!(!is_game_over(&board));
    }

    #[test]
    fn test_empty_board_does_not_win() {
        let board = Board::from_rows(&["...", "...", "..."]).unwrap();
        assert!(!is_game_over(&board));
    }
}

//! Board history with time travel
//!
//! Snapshot `0` is the starting board and snapshot `n` is the board after
//! move `n`. A cursor marks the snapshot being viewed. Jumping back only moves
//! the cursor; committing a new board from an earlier step throws away every
//! snapshot after the cursor before appending (no redo of a discarded future).

use crate::board::Board;

/// Entry of the move list shown next to the board
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MoveDescription {
    pub step: usize,
    pub label: String,
}

impl MoveDescription {
    fn for_step(step: usize) -> Self {
        let label = if step == 0 {
            "Go to game start".to_string()
        } else {
            format!("Go to move #{}", step)
        };
        Self { step, label }
    }
}

/// Append-only sequence of board snapshots plus the current-step cursor
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct History {
    snapshots: Vec<Board>,
    current: usize,
}

impl History {
    pub fn new(initial: Board) -> Self {
        Self {
            snapshots: vec![initial],
            current: 0,
        }
    }

    /// Number of snapshots (never zero)
    #[inline]
    pub fn len(&self) -> usize {
        self.snapshots.len()
    }

    /// Always false; kept for API symmetry with `len`
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.snapshots.is_empty()
    }

    #[inline]
    pub fn current_step(&self) -> usize {
        self.current
    }

    #[inline]
    pub fn last_step(&self) -> usize {
        self.snapshots.len() - 1
    }

    /// Board at the cursor
    #[inline]
    pub fn current(&self) -> &Board {
        &self.snapshots[self.current]
    }

    pub fn get(&self, step: usize) -> Option<&Board> {
        self.snapshots.get(step)
    }

    /// Move the cursor to `step`.
    ///
    /// # Panics
    /// If `step` is past the last snapshot. Callers only offer steps from
    /// [`History::descriptions`].
    pub fn jump_to(&mut self, step: usize) {
        assert!(
            step < self.snapshots.len(),
            "step {} out of range (last step is {})",
            step,
            self.last_step()
        );
        self.current = step;
    }

    /// Record the board produced by a move made at the cursor.
    ///
    /// Snapshots after the cursor are dropped first, then `board` becomes
    /// the new last snapshot and the cursor moves onto it. Returns the new
    /// step number.
    pub fn commit(&mut self, board: Board) -> usize {
        self.snapshots.truncate(self.current + 1);
        self.snapshots.push(board);
        self.current = self.snapshots.len() - 1;
        self.current
    }

    /// One entry per snapshot: "Go to game start", "Go to move #1", ...
    pub fn descriptions(&self) -> Vec<MoveDescription> {
        (0..self.snapshots.len())
            .map(MoveDescription::for_step)
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::Pos;
    use crate::rules;

    /// Play the given jumps from the start, committing each one.
    fn play(jumps: &[((u8, u8), (u8, u8))]) -> History {
        let mut history = History::new(Board::new(7));
        for &((fr, fc), (tr, tc)) in jumps {
            let board = history.current();
            let jump = rules::validate(board, Pos::new(fr, fc), Pos::new(tr, tc))
                .expect("scripted jump must be legal");
            let next = rules::apply(board, jump);
            history.commit(next);
        }
        history
    }

    const OPENING: [((u8, u8), (u8, u8)); 4] = [
        ((1, 3), (3, 3)),
        ((2, 1), (2, 3)),
        ((0, 2), (2, 2)),
        ((0, 4), (0, 2)),
    ];

    #[test]
    fn test_new_history() {
        let history = History::new(Board::new(7));
        assert_eq!(history.len(), 1);
        assert!(!history.is_empty());
        assert_eq!(history.current_step(), 0);
        assert_eq!(history.current(), &Board::new(7));
    }

    #[test]
    fn test_commit_advances_cursor() {
        let history = play(&OPENING);
        assert_eq!(history.len(), 5);
        assert_eq!(history.current_step(), 4);
        assert_eq!(history.current().piece_count(), 28);
    }

    #[test]
    fn test_jump_to_keeps_future() {
        let mut history = play(&OPENING);
        history.jump_to(1);
        assert_eq!(history.current_step(), 1);
        assert_eq!(history.len(), 5);
        assert_eq!(history.current().piece_count(), 31);

        history.jump_to(4);
        assert_eq!(history.current().piece_count(), 28);
    }

    #[test]
    fn test_commit_after_rewind_truncates() {
        let mut history = play(&OPENING);
        history.jump_to(2);

        let base = history.current().clone();
        let jump = rules::validate(&base, Pos::new(4, 2), Pos::new(2, 2)).unwrap();
        let next = rules::apply(&base, jump);
        let step = history.commit(next.clone());

        assert_eq!(step, 3);
        assert_eq!(history.len(), 4);
        assert_eq!(history.get(3), Some(&next));
        assert_eq!(history.get(4), None);
    }

    #[test]
    fn test_earlier_snapshots_survive_commits() {
        let history = play(&OPENING);
        assert_eq!(history.get(0), Some(&Board::new(7)));
        for step in 0..history.len() {
            assert_eq!(history.get(step).unwrap().piece_count(), 32 - step);
        }
    }

    #[test]
    #[should_panic(expected = "out of range")]
    fn test_jump_past_end_panics() {
        let mut history = History::new(Board::new(7));
        history.jump_to(1);
    }

    #[test]
    fn test_descriptions() {
        let history = play(&OPENING[..2]);
        let labels: Vec<String> = history.descriptions().into_iter().map(|d| d.label).collect();
        assert_eq!(labels, vec!["Go to game start", "Go to move #1", "Go to move #2"]);
    }
}

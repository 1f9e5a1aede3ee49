//! Board structure: cross topology plus peg occupancy

use super::{Cell, Pos, DEFAULT_SIZE, MAX_GRID_SIZE};

/// One snapshot of a peg solitaire board.
///
/// Boards are treated as values: a move never edits a board that is already
/// part of the game history, it produces a new one (see [`crate::rules::apply`]).
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Board {
    size: usize,
    cells: Vec<Cell>,
}

impl Board {
    /// Build the starting layout for a `size x size` grid.
    ///
    /// The playable area is a plus shape: the row band and the column band
    /// `margin..size - margin`, where `margin = (size - size / 2) / 2` with
    /// truncating division. Every playable cell holds a piece except the
    /// centre `(size / 2, size / 2)`, which starts empty. The rest are walls.
    ///
    /// Truncating keeps both arms the same width on every side: rounding the
    /// margin up only on the lower bound (as float bounds do) would make the
    /// 5, 9, 13... crosses lopsided. Size 7 is identical either way.
    ///
    /// Odd sizes of at least 5 give the canonical cross. Even sizes still
    /// produce a defined (off-centre) layout rather than panicking.
    ///
    /// # Panics
    /// If `size` exceeds [`MAX_GRID_SIZE`], since positions could no longer
    /// address every cell.
    pub fn new(size: usize) -> Self {
        assert!(
            size <= MAX_GRID_SIZE,
            "board size {size} exceeds the {MAX_GRID_SIZE} cell grid limit"
        );
        let half = size / 2;
        let margin = (size - half) / 2;
        let band = margin..size.saturating_sub(margin);

        let mut cells = Vec::with_capacity(size * size);
        for r in 0..size {
            for c in 0..size {
                let cell = if r == half && c == half {
                    Cell::Empty
                } else if band.contains(&r) || band.contains(&c) {
                    Cell::Piece
                } else {
                    Cell::Wall
                };
                cells.push(cell);
            }
        }

        Self { size, cells }
    }

    /// Build a board from rows of `#`, `.` and `o` characters.
    ///
    /// Meant for setting up positions in tests and tools; returns `None` if
    /// the rows do not form a square, contain other characters or exceed
    /// [`MAX_GRID_SIZE`].
    pub fn from_rows(rows: &[&str]) -> Option<Self> {
        let size = rows.len();
        if size > MAX_GRID_SIZE {
            return None;
        }
        let mut cells = Vec::with_capacity(size * size);
        for row in rows {
            if row.chars().count() != size {
                return None;
            }
            for ch in row.chars() {
                cells.push(match ch {
                    '#' => Cell::Wall,
                    '.' => Cell::Empty,
                    'o' => Cell::Piece,
                    _ => return None,
                });
            }
        }
        Some(Self { size, cells })
    }

    #[inline]
    pub fn size(&self) -> usize {
        self.size
    }

    /// Geometric centre, the only square a winning peg may stand on
    #[inline]
    pub fn center(&self) -> Pos {
        let half = (self.size / 2) as u8;
        Pos::new(half, half)
    }

    #[inline]
    pub fn contains(&self, pos: Pos) -> bool {
        (pos.row as usize) < self.size && (pos.col as usize) < self.size
    }

    /// Get cell at position.
    ///
    /// # Panics
    /// If `pos` lies outside the grid. Callers must only pass coordinates in
    /// `0..size`.
    #[inline]
    pub fn get(&self, pos: Pos) -> Cell {
        assert!(
            self.contains(pos),
            "position {pos} outside {0}x{0} board",
            self.size
        );
        self.cells[pos.to_index(self.size)]
    }

    /// Bounds-checked lookup, `None` outside the grid
    #[inline]
    pub fn cell(&self, pos: Pos) -> Option<Cell> {
        if self.contains(pos) {
            Some(self.cells[pos.to_index(self.size)])
        } else {
            None
        }
    }

    #[inline]
    pub fn is_playable(&self, pos: Pos) -> bool {
        self.cell(pos).is_some_and(Cell::is_playable)
    }

    /// Only move application writes cells, and only on a fresh clone.
    #[inline]
    pub(crate) fn set(&mut self, pos: Pos, cell: Cell) {
        let idx = pos.to_index(self.size);
        self.cells[idx] = cell;
    }

    /// Number of pegs left
    pub fn piece_count(&self) -> usize {
        self.cells.iter().filter(|&&c| c == Cell::Piece).count()
    }

    /// All positions in row-major order
    pub fn positions(&self) -> impl Iterator<Item = Pos> + '_ {
        (0..self.cells.len()).map(move |idx| Pos::from_index(idx, self.size))
    }

    /// Positions currently holding a peg
    pub fn pieces(&self) -> impl Iterator<Item = Pos> + '_ {
        self.positions().filter(move |&p| self.get(p) == Cell::Piece)
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new(DEFAULT_SIZE)
    }
}

impl std::fmt::Display for Board {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for row in self.cells.chunks(self.size.max(1)) {
            let line: String = row.iter().map(|c| c.symbol()).collect();
            writeln!(f, "{line}")?;
        }
        Ok(())
    }
}

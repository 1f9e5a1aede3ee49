//! Board representation for peg solitaire

pub mod board;


// Re-exports
pub use board::Board;

/// Board size of the classic English cross
pub const DEFAULT_SIZE: usize = 7;
/// Smallest size that still yields a cross with a jumpable arm
pub const MIN_SIZE: usize = 5;
/// Largest size the GUI can lay out
pub const MAX_SIZE: usize = 25;
/// Largest grid a [`Board`] can hold; rows and columns are `u8`
pub const MAX_GRID_SIZE: usize = u8::MAX as usize + 1;

/// Cell states
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Cell {
    /// Outside the playable cross, never occupied
    Wall,
    Empty,
    Piece,
}

impl Cell {
    /// Whether the cell belongs to the playable cross
    #[inline]
    pub fn is_playable(self) -> bool {
        self != Cell::Wall
    }

    #[inline]
    pub fn symbol(self) -> char {
        match self {
            Cell::Wall => '#',
            Cell::Empty => '.',
            Cell::Piece => 'o',
        }
    }
}

/// Position on the board
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Pos {
    pub row: u8,
    pub col: u8,
}

impl Pos {
    #[inline]
    pub fn new(row: u8, col: u8) -> Self {
        Self { row, col }
    }

    #[inline]
    pub fn to_index(self, size: usize) -> usize {
        self.row as usize * size + self.col as usize
    }

    #[inline]
    pub fn from_index(idx: usize, size: usize) -> Self {
        Self {
            row: (idx / size) as u8,
            col: (idx % size) as u8,
        }
    }

    /// Step by (dr, dc); `None` if the result would leave the u8 range.
    /// Upper bounds are checked by the board, not here.
    #[inline]
    pub fn offset(self, dr: i32, dc: i32) -> Option<Pos> {
        let r = self.row as i32 + dr;
        let c = self.col as i32 + dc;
        if (0..=u8::MAX as i32).contains(&r) && (0..=u8::MAX as i32).contains(&c) {
            Some(Pos::new(r as u8, c as u8))
        } else {
            None
        }
    }
}

impl std::fmt::Display for Pos {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}

//! Game engine: selection state machine, move lifecycle and time travel
//!
//! [`GameState`] owns everything a session needs: the board [`History`] and
//! the current [`Selection`]. It is mutated only through
//! [`GameState::on_cell_activated`] and [`GameState::jump_to`].
//!
//! Bad input is never an error here. Clicking a wall, clicking an empty hole
//! with nothing selected, trying an illegal jump or clicking after the game
//! is won all leave the state untouched; the returned [`Activation`] tells
//! the caller whether anything happened.
//!
//! # Example
//!
//! ```
//! use peg_solitaire::{Activation, GameState, Pos, Selection};
//!
//! let mut game = GameState::new(7);
//!
//! // Pick up the peg two above the centre, then drop it into the centre
//! assert_eq!(game.on_cell_activated(Pos::new(1, 3)), Activation::Selected(Pos::new(1, 3)));
//! assert!(matches!(game.on_cell_activated(Pos::new(3, 3)), Activation::Moved(_)));
//!
//! assert_eq!(game.selection(), Selection::Idle);
//! assert_eq!(game.current_step(), 1);
//! assert_eq!(game.pieces_left(), 31);
//! ```

use tracing::{debug, info, instrument, trace};

use crate::board::{Board, Cell, Pos, DEFAULT_SIZE};
use crate::config::GameConfig;
use crate::history::{History, MoveDescription};
use crate::rules::{self, Jump};

/// Which peg, if any, the player has picked up
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Selection {
    /// Nothing selected
    #[default]
    Idle,
    /// Peg at this position awaits a target
    Selected(Pos),
}

impl Selection {
    #[inline]
    pub fn pos(self) -> Option<Pos> {
        match self {
            Selection::Idle => None,
            Selection::Selected(pos) => Some(pos),
        }
    }
}

/// What a single cell activation did
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Activation {
    /// No state change at all
    Ignored,
    /// A peg was selected (replacing any earlier selection)
    Selected(Pos),
    /// The selected peg was clicked again and released
    Deselected,
    /// A jump was played and recorded as a new history step
    Moved(Jump),
}

impl Activation {
    /// Whether the game state changed
    #[inline]
    pub fn changed(self) -> bool {
        self != Activation::Ignored
    }
}

/// Complete state of one peg solitaire session
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameState {
    history: History,
    selection: Selection,
}

impl GameState {
    /// Start a new game on a `size x size` board
    pub fn new(size: usize) -> Self {
        Self::from_board(Board::new(size))
    }

    /// Start a new game from an arbitrary position
    pub fn from_board(board: Board) -> Self {
        Self {
            history: History::new(board),
            selection: Selection::Idle,
        }
    }

    pub fn from_config(config: &GameConfig) -> Self {
        Self::new(config.size)
    }

    /// Board at the current step
    #[inline]
    pub fn current_board(&self) -> &Board {
        self.history.current()
    }

    #[inline]
    pub fn selection(&self) -> Selection {
        self.selection
    }

    #[inline]
    pub fn history(&self) -> &History {
        &self.history
    }

    #[inline]
    pub fn current_step(&self) -> usize {
        self.history.current_step()
    }

    /// Whether the current board is solved (see [`rules::is_game_over`])
    pub fn is_game_over(&self) -> bool {
        rules::is_game_over(self.current_board())
    }

    /// No peg can move but the puzzle is not solved
    pub fn is_stuck(&self) -> bool {
        !self.is_game_over() && !rules::has_any_jump(self.current_board())
    }

    pub fn pieces_left(&self) -> usize {
        self.current_board().piece_count()
    }

    /// Legal jumps for the selected peg; empty when idle
    pub fn selected_targets(&self) -> Vec<Jump> {
        match self.selection {
            Selection::Idle => Vec::new(),
            Selection::Selected(from) => rules::targets_from(self.current_board(), from),
        }
    }

    /// Move list entries, one per history snapshot
    pub fn move_descriptions(&self) -> Vec<MoveDescription> {
        self.history.descriptions()
    }

    /// Handle a click on the cell at `pos`.
    ///
    /// - Game already won: ignored.
    /// - Peg: selects it, or deselects it if it is the current selection.
    /// - Empty hole with a peg selected: plays the jump if legal, otherwise
    ///   ignored and the selection stays.
    /// - Anything else: ignored.
    ///
    /// # Panics
    /// If `pos` lies outside the board.
    #[instrument(skip(self), fields(step = self.current_step()))]
    pub fn on_cell_activated(&mut self, pos: Pos) -> Activation {
        if self.is_game_over() {
            trace!("game over, activation ignored");
            return Activation::Ignored;
        }

        match (self.current_board().get(pos), self.selection) {
            (Cell::Piece, Selection::Selected(selected)) if selected == pos => {
                debug!("peg deselected");
                self.selection = Selection::Idle;
                Activation::Deselected
            }
            (Cell::Piece, _) => {
                debug!("peg selected");
                self.selection = Selection::Selected(pos);
                Activation::Selected(pos)
            }
            (Cell::Empty, Selection::Selected(from)) => self.try_jump(from, pos),
            (Cell::Empty, Selection::Idle) | (Cell::Wall, _) => {
                trace!("nothing to do");
                Activation::Ignored
            }
        }
    }

    fn try_jump(&mut self, from: Pos, to: Pos) -> Activation {
        let Some(jump) = rules::validate(self.current_board(), from, to) else {
            trace!(%from, "illegal jump, selection kept");
            return Activation::Ignored;
        };

        let next = rules::apply(self.current_board(), jump);
        let step = self.history.commit(next);
        self.selection = Selection::Idle;

        debug!(%from, over = %jump.over, %to, step, pieces = self.pieces_left(), "jump played");
        if self.is_game_over() {
            info!(moves = step, "puzzle solved");
        }

        Activation::Moved(jump)
    }

    /// Show the board at `step` and drop the selection.
    ///
    /// Later steps are kept until a new move is played from here.
    ///
    /// # Panics
    /// If `step` is past the last recorded step.
    pub fn jump_to(&mut self, step: usize) {
        self.history.jump_to(step);
        self.selection = Selection::Idle;
        debug!(step, last = self.history.last_step(), "history jump");
    }
}

impl Default for GameState {
    fn default() -> Self {
        Self::new(DEFAULT_SIZE)
    }
}

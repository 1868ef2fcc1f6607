//! Read-only projections handed to the view layer.

use crate::{Board, Player, Position};
use derive_getters::Getters;
use serde::{Deserialize, Serialize};

/// Status line for the current board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, derive_more::Display)]
pub enum GameStatus {
    /// Game continues; the given player moves next.
    #[display("Next player: {_0}")]
    NextTurn(Player),
    /// The given player completed a line.
    #[display("Winner: {_0}")]
    Winner(Player),
    /// Full board, no line.
    #[display("Draw")]
    Draw,
}

impl GameStatus {
    /// Returns true once no further marks can be placed.
    pub fn is_finished(&self) -> bool {
        !matches!(self, GameStatus::NextTurn(_))
    }
}

/// One row of the move list.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct MoveEntry {
    move_index: usize,
    is_current: bool,
    played: Option<(Position, Player)>,
}

impl MoveEntry {
    pub(crate) fn new(
        move_index: usize,
        is_current: bool,
        played: Option<(Position, Player)>,
    ) -> Self {
        Self {
            move_index,
            is_current,
            played,
        }
    }

    /// History index this entry jumps to.
    pub fn move_index(&self) -> usize {
        self.move_index
    }

    /// Whether this entry is the board being shown.
    pub fn is_current(&self) -> bool {
        self.is_current
    }

    /// The mark that produced this entry; `None` for the game start.
    pub fn played(&self) -> Option<(Position, Player)> {
        self.played
    }

    /// Button text for this entry.
    pub fn label(&self) -> String {
        match self.move_index {
            0 => "Go to game start".to_string(),
            n => format!("Go to move #{n}"),
        }
    }
}

/// Everything the view needs to draw one frame.
#[derive(Debug, Clone, PartialEq, Eq, Getters, Serialize, Deserialize)]
pub struct Snapshot {
    /// Board at the current step.
    board: Board,
    /// Status derived from that board.
    status: GameStatus,
    /// One entry per history board, oldest first.
    moves: Vec<MoveEntry>,
    /// Completed line to highlight, if any.
    winning_line: Option<[Position; 3]>,
}

impl Snapshot {
    pub(crate) fn new(
        board: Board,
        status: GameStatus,
        moves: Vec<MoveEntry>,
        winning_line: Option<[Position; 3]>,
    ) -> Self {
        Self {
            board,
            status,
            moves,
            winning_line,
        }
    }

    /// Index of the entry marked current.
    pub fn current_step(&self) -> usize {
        self.moves
            .iter()
            .position(MoveEntry::is_current)
            .unwrap_or_default()
    }
}

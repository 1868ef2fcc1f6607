//! The rewindable game state value.
//!
//! A [`GameState`] is never mutated in place. Every transition builds a new
//! value, so boards already recorded in the history stay exactly as they were
//! when the move was played.

use crate::error::RewindError;
use crate::invariants::{InvariantSet, InvariantViolation, RewindInvariants};
use crate::rules::{check_winner, is_full};
use crate::snapshot::{GameStatus, MoveEntry, Snapshot};
use crate::{Board, Player, Position, Square};
use serde::{Deserialize, Serialize};
use strum::IntoEnumIterator;
use tracing::{debug, instrument};

/// Coarse game phase of the current board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Phase {
    /// No winner and at least one empty square remains.
    InProgress,
    /// A winner exists or the board is full.
    Finished,
}

/// Why a click left the state unchanged.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, derive_more::Display)]
pub enum IgnoreReason {
    /// The current board already has a winner.
    #[display("Game is already over")]
    GameOver,
    /// The clicked square is already occupied.
    #[display("Square {_0} is already occupied")]
    Occupied(Position),
}

/// Result of a click on a valid square index.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ClickOutcome {
    /// A mark was placed.
    Placed {
        /// Where the mark went.
        position: Position,
        /// Who placed it.
        player: Player,
    },
    /// The click had no legal effect.
    Ignored(IgnoreReason),
}

impl ClickOutcome {
    /// Returns true if a mark was placed.
    pub fn is_placed(&self) -> bool {
        matches!(self, ClickOutcome::Placed { .. })
    }
}

/// Full game state: the history of boards and a cursor into it.
///
/// Deserialized states must satisfy [`RewindInvariants`]; a history that no
/// sequence of transitions could produce is rejected.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "GameStateRecord")]
pub struct GameState {
    /// `history[0]` is the empty board; each later entry adds one mark.
    history: Vec<Board>,
    /// Index of the board currently shown.
    current_step: usize,
}

/// Unchecked serialized form of [`GameState`].
#[derive(Deserialize)]
struct GameStateRecord {
    history: Vec<Board>,
    current_step: usize,
}

impl TryFrom<GameStateRecord> for GameState {
    type Error = InvariantViolation;

    fn try_from(record: GameStateRecord) -> Result<Self, Self::Error> {
        let state = Self {
            history: record.history,
            current_step: record.current_step,
        };
        RewindInvariants::check_all(&state).map_err(|violations| {
            let descriptions = violations
                .iter()
                .map(|v| v.description.as_str())
                .collect::<Vec<_>>()
                .join("; ");
            InvariantViolation::new(descriptions)
        })?;
        Ok(state)
    }
}

impl GameState {
    /// Creates a new game at the empty board.
    #[instrument]
    pub fn new() -> Self {
        Self {
            history: vec![Board::new()],
            current_step: 0,
        }
    }

    /// Builds the state reached by clicking `cells` in order on a new game.
    ///
    /// Ignored clicks are skipped just as they would be interactively.
    #[instrument]
    pub fn replay(cells: &[usize]) -> Result<Self, RewindError> {
        cells
            .iter()
            .try_fold(Self::new(), |state, cell| -> Result<Self, RewindError> {
                Ok(state.click(*cell)?.0)
            })
    }

    /// All recorded boards, oldest first.
    pub fn history(&self) -> &[Board] {
        &self.history
    }

    /// Index of the board currently shown.
    pub fn current_step(&self) -> usize {
        self.current_step
    }

    /// The board currently shown.
    pub fn current_board(&self) -> &Board {
        &self.history[self.current_step]
    }

    /// Player who moves next, derived from the parity of the current step.
    pub fn next_player(&self) -> Player {
        Player::for_step(self.current_step)
    }

    /// Winner on the current board, if any.
    pub fn winner(&self) -> Option<Player> {
        check_winner(self.current_board())
    }

    /// Phase of the current board.
    pub fn phase(&self) -> Phase {
        match self.status() {
            GameStatus::NextTurn(_) => Phase::InProgress,
            GameStatus::Winner(_) | GameStatus::Draw => Phase::Finished,
        }
    }

    /// Status line for the current board.
    pub fn status(&self) -> GameStatus {
        let board = self.current_board();
        if let Some(winner) = check_winner(board) {
            GameStatus::Winner(winner)
        } else if is_full(board) {
            GameStatus::Draw
        } else {
            GameStatus::NextTurn(self.next_player())
        }
    }

    /// The square and player that turned `history[step - 1]` into
    /// `history[step]`. `None` for step 0 or an unknown step.
    pub fn last_move(&self, step: usize) -> Option<(Position, Player)> {
        let before = self.history.get(step.checked_sub(1)?)?;
        let after = self.history.get(step)?;
        Position::iter().find_map(|pos| {
            match (before.get(pos), after.get(pos)) {
                (Square::Empty, Square::Occupied(player)) => Some((pos, player)),
                _ => None,
            }
        })
    }

    /// Clicks the square at `cell`, returning the next state.
    ///
    /// Clicking an occupied square, or any square once the current board has
    /// a winner, returns an unchanged copy together with
    /// [`ClickOutcome::Ignored`]. Otherwise any boards after the current step
    /// are discarded and the new board is appended.
    ///
    /// # Errors
    ///
    /// Returns [`RewindError::InvalidIndex`] if `cell > 8`.
    #[instrument(skip(self), fields(step = self.current_step))]
    pub fn click(&self, cell: usize) -> Result<(Self, ClickOutcome), RewindError> {
        let position = Position::from_index(cell).ok_or(RewindError::InvalidIndex {
            index: cell,
            len: Position::ALL.len(),
        })?;

        let current = *self.current_board();
        if check_winner(&current).is_some() {
            debug!("Click ignored, game over");
            return Ok((self.clone(), ClickOutcome::Ignored(IgnoreReason::GameOver)));
        }
        if !current.is_empty(position) {
            debug!(%position, "Click ignored, square occupied");
            return Ok((
                self.clone(),
                ClickOutcome::Ignored(IgnoreReason::Occupied(position)),
            ));
        }

        let player = self.next_player();
        let mut history = self.history[..=self.current_step].to_vec();
        history.push(current.with(position, Square::Occupied(player)));
        let current_step = history.len() - 1;
        debug!(%position, %player, current_step, "Mark placed");

        Ok((
            Self {
                history,
                current_step,
            },
            ClickOutcome::Placed { position, player },
        ))
    }

    /// Moves the cursor to `step`, keeping the whole history.
    ///
    /// # Errors
    ///
    /// Returns [`RewindError::InvalidIndex`] if `step >= history().len()`.
    #[instrument(skip(self), fields(from = self.current_step))]
    pub fn jump_to(&self, step: usize) -> Result<Self, RewindError> {
        if step >= self.history.len() {
            return Err(RewindError::InvalidIndex {
                index: step,
                len: self.history.len(),
            });
        }
        Ok(Self {
            history: self.history.clone(),
            current_step: step,
        })
    }

    /// Read-only projection for the view layer.
    pub fn snapshot(&self) -> Snapshot {
        let moves = (0..self.history.len())
            .map(|step| MoveEntry::new(step, step == self.current_step, self.last_move(step)))
            .collect();
        Snapshot::new(
            *self.current_board(),
            self.status(),
            moves,
            crate::rules::winning_line(self.current_board()),
        )
    }

    #[cfg(test)]
    pub(crate) fn from_parts(history: Vec<Board>, current_step: usize) -> Self {
        Self {
            history,
            current_step,
        }
    }
}

impl Default for GameState {
    fn default() -> Self {
        Self::new()
    }
}

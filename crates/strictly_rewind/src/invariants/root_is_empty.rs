//! Root invariant: the first history entry is the empty board.

use super::Invariant;
use crate::{Board, GameState};

/// Invariant: `history[0]` exists and is the empty board.
pub struct RootIsEmpty;

impl Invariant<GameState> for RootIsEmpty {
    fn holds(state: &GameState) -> bool {
        state.history().first() == Some(&Board::new())
    }

    fn description() -> &'static str {
        "History starts with the empty board"
    }
}

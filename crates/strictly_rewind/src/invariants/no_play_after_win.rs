//! Terminal invariant: no board follows a won board.

use super::Invariant;
use crate::GameState;
use crate::rules::check_winner;

/// Invariant: only the last history entry may contain a completed line.
pub struct NoPlayAfterWin;

impl Invariant<GameState> for NoPlayAfterWin {
    fn holds(state: &GameState) -> bool {
        let history = state.history();
        history
            .iter()
            .take(history.len().saturating_sub(1))
            .all(|board| check_winner(board).is_none())
    }

    fn description() -> &'static str {
        "No move is recorded after a win"
    }
}

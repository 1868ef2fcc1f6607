//! Cursor invariant: the current step indexes an existing board.

use super::Invariant;
use crate::GameState;

/// Invariant: `current_step < history.len()`.
pub struct CursorInBounds;

impl Invariant<GameState> for CursorInBounds {
    fn holds(state: &GameState) -> bool {
        state.current_step() < state.history().len()
    }

    fn description() -> &'static str {
        "Current step points into history"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Board;

    #[test]
    fn test_jump_keeps_cursor_in_bounds() {
        let state = GameState::replay(&[0, 1, 2]).expect("valid replay");
        for step in 0..state.history().len() {
            let jumped = state.jump_to(step).expect("step in range");
            assert!(CursorInBounds::holds(&jumped));
        }
    }

    #[test]
    fn test_cursor_past_end_violates() {
        let state = GameState::from_parts(vec![Board::new()], 1);
        assert!(!CursorInBounds::holds(&state));
    }
}

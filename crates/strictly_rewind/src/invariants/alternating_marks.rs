//! Alternating marks invariant: X, O, X, O, ...

use super::Invariant;
use crate::{GameState, Player};

/// Invariant: the board at step `k` holds `ceil(k/2)` X marks and
/// `floor(k/2)` O marks.
///
/// Together with [`MonotonicHistory`](super::MonotonicHistory) this pins the
/// mover of step `k` to `Player::for_step(k - 1)`, so the next player can
/// always be derived from the cursor's parity.
pub struct AlternatingMarks;

impl Invariant<GameState> for AlternatingMarks {
    fn holds(state: &GameState) -> bool {
        state.history().iter().enumerate().all(|(step, board)| {
            board.count(Player::X) == step.div_ceil(2) && board.count(Player::O) == step / 2
        })
    }

    fn description() -> &'static str {
        "Players alternate turns starting with X"
    }
}

//! Monotonic history invariant: squares never change once set.

use super::Invariant;
use crate::{GameState, Position, Square};
use strum::IntoEnumIterator;

/// Invariant: each board adds exactly one mark to its predecessor.
///
/// Exactly one square differs between neighbouring entries, and it goes from
/// Empty to Occupied. Nothing is ever overwritten or cleared.
pub struct MonotonicHistory;

impl Invariant<GameState> for MonotonicHistory {
    fn holds(state: &GameState) -> bool {
        state.history().windows(2).all(|pair| {
            let changed: Vec<(Square, Square)> = Position::iter()
                .map(|pos| (pair[0].get(pos), pair[1].get(pos)))
                .filter(|(before, after)| before != after)
                .collect();
            matches!(
                changed.as_slice(),
                [(Square::Empty, Square::Occupied(_))]
            )
        })
    }

    fn description() -> &'static str {
        "Each history entry adds exactly one mark"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Board, Player};

    #[test]
    fn test_replayed_game_holds() {
        let state = GameState::replay(&[4, 0, 8, 2]).expect("valid replay");
        assert!(MonotonicHistory::holds(&state));
    }

    #[test]
    fn test_overwritten_square_violates() {
        let first = Board::new().with(Position::Center, Square::Occupied(Player::X));
        let second = first.with(Position::Center, Square::Occupied(Player::O));
        let state = GameState::from_parts(vec![Board::new(), first, second], 2);
        assert!(!MonotonicHistory::holds(&state));
    }

    #[test]
    fn test_two_marks_in_one_step_violates() {
        let jump = Board::new()
            .with(Position::Center, Square::Occupied(Player::X))
            .with(Position::TopLeft, Square::Occupied(Player::O));
        let state = GameState::from_parts(vec![Board::new(), jump], 1);
        assert!(!MonotonicHistory::holds(&state));
    }

    #[test]
    fn test_repeated_board_violates() {
        let state = GameState::from_parts(vec![Board::new(), Board::new()], 0);
        assert!(!MonotonicHistory::holds(&state));
    }
}

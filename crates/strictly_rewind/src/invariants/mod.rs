//! First-class invariants for the rewindable game state.
//!
//! Invariants are logical properties of a [`GameState`](crate::GameState)
//! that every transition must preserve. They are checked after each
//! transition in debug builds and can be tested independently.

/// A logical property that must hold for a given state.
pub trait Invariant<S> {
    /// Checks if the invariant holds for the given state.
    fn holds(state: &S) -> bool;

    /// Human-readable description of the invariant.
    fn description() -> &'static str;
}

/// Violation of an invariant.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display)]
#[display("Invariant violated: {description}")]
pub struct InvariantViolation {
    /// Description of the violated invariant.
    pub description: String,
}

impl InvariantViolation {
    /// Creates a new invariant violation.
    pub fn new(description: impl Into<String>) -> Self {
        Self {
            description: description.into(),
        }
    }
}

/// A set of invariants that can be checked together.
///
/// Implemented for tuples of up to five invariants.
pub trait InvariantSet<S> {
    /// Checks all invariants in the set.
    ///
    /// Returns Ok(()) if all invariants hold, or Err with every violation.
    fn check_all(state: &S) -> Result<(), Vec<InvariantViolation>>;
}

macro_rules! impl_invariant_set {
    ($($inv:ident),+) => {
        impl<S, $($inv),+> InvariantSet<S> for ($($inv,)+)
        where
            $($inv: Invariant<S>,)+
        {
            fn check_all(state: &S) -> Result<(), Vec<InvariantViolation>> {
                let mut violations = Vec::new();
                $(
                    if !$inv::holds(state) {
                        tracing::warn!(invariant = $inv::description(), "Invariant violated");
                        violations.push(InvariantViolation::new($inv::description()));
                    }
                )+
                if violations.is_empty() {
                    Ok(())
                } else {
                    Err(violations)
                }
            }
        }
    };
}

impl_invariant_set!(I1, I2);
impl_invariant_set!(I1, I2, I3);
impl_invariant_set!(I1, I2, I3, I4);
impl_invariant_set!(I1, I2, I3, I4, I5);

pub mod alternating_marks;
pub mod cursor_in_bounds;
pub mod monotonic_history;
pub mod no_play_after_win;
pub mod root_is_empty;

pub use alternating_marks::AlternatingMarks;
pub use cursor_in_bounds::CursorInBounds;
pub use monotonic_history::MonotonicHistory;
pub use no_play_after_win::NoPlayAfterWin;
pub use root_is_empty::RootIsEmpty;

/// All game-state invariants as a composable set.
pub type RewindInvariants = (
    RootIsEmpty,
    CursorInBounds,
    MonotonicHistory,
    AlternatingMarks,
    NoPlayAfterWin,
);

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Board, GameState, Player, Position, Square};

    #[test]
    fn test_invariant_set_holds_for_new_game() {
        assert!(RewindInvariants::check_all(&GameState::new()).is_ok());
    }

    #[test]
    fn test_invariant_set_holds_after_rewind_and_branch() {
        let state = GameState::replay(&[0, 1, 3, 4])
            .and_then(|s| s.jump_to(2))
            .and_then(|s| s.click(8).map(|(s, _)| s))
            .expect("valid transitions");
        assert!(RewindInvariants::check_all(&state).is_ok());
    }

    #[test]
    fn test_invariant_set_reports_every_violation() {
        let corrupt = Board::new().with(Position::Center, Square::Occupied(Player::O));
        let state = GameState::from_parts(vec![corrupt], 3);

        let violations = RewindInvariants::check_all(&state).unwrap_err();
        let described: Vec<&str> = violations.iter().map(|v| v.description.as_str()).collect();
        assert_eq!(
            described,
            [
                RootIsEmpty::description(),
                CursorInBounds::description(),
                AlternatingMarks::description(),
            ]
        );
    }

    #[test]
    fn test_two_invariants_as_set() {
        type TwoInvariants = (RootIsEmpty, CursorInBounds);
        assert!(TwoInvariants::check_all(&GameState::new()).is_ok());
    }
}

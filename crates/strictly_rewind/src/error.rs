//! Errors raised by game-state transitions.

use derive_more::{Display, Error};

/// Error returned when an intent names an index outside its valid range.
///
/// Clicking a filled square or clicking after the game ends are not errors;
/// those are reported through [`ClickOutcome`](crate::ClickOutcome).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, Error)]
pub enum RewindError {
    /// Index outside `0..len` for the operation.
    #[display("Index {index} is out of range (expected 0..{len})")]
    InvalidIndex {
        /// The rejected index.
        index: usize,
        /// Exclusive upper bound that applied.
        len: usize,
    },
}

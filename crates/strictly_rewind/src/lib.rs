//! Strictly Rewind - tic-tac-toe with a rewindable move history
//!
//! The crate holds the game logic only. A view layer renders
//! [`Snapshot`]s and sends the two intents back to a [`GameStateMachine`].
//!
//! # Architecture
//!
//! - **Rules**: pure win and draw detection over a [`Board`]
//! - **State**: [`GameState`], an immutable history of boards with a cursor
//! - **Machine**: [`GameStateMachine`], which owns the state, applies
//!   `click` / `jump_to`, and notifies [`SnapshotListener`]s
//! - **Invariants**: properties every transition preserves
//!
//! # Example
//!
//! ```
//! use strictly_rewind::{GameStateMachine, GameStatus, Player};
//!
//! # fn example() -> Result<(), strictly_rewind::RewindError> {
//! let mut game = GameStateMachine::new();
//! for cell in [0, 1, 3, 4, 6] {
//!     game.click(cell)?;
//! }
//! assert_eq!(*game.snapshot().status(), GameStatus::Winner(Player::X));
//!
//! game.jump_to(0)?;
//! game.click(4)?;
//! assert_eq!(game.state().history().len(), 2);
//! # Ok(())
//! # }
//! # example().unwrap();
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod error;
mod machine;
mod position;
mod snapshot;
mod state;
mod types;

pub mod invariants;
pub mod rules;

pub use error::RewindError;
pub use invariants::{Invariant, InvariantSet, InvariantViolation, RewindInvariants};
pub use machine::{ChannelListener, GameStateMachine, SnapshotListener, TracingListener};
pub use position::Position;
pub use snapshot::{GameStatus, MoveEntry, Snapshot};
pub use state::{ClickOutcome, GameState, IgnoreReason, Phase};
pub use types::{Board, Player, Square};

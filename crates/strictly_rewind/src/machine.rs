//! The game-state controller and its snapshot listeners.

use crate::error::RewindError;
#[cfg(debug_assertions)]
use crate::invariants::{InvariantSet, RewindInvariants};
use crate::snapshot::Snapshot;
use crate::state::{ClickOutcome, GameState};
use std::sync::mpsc::Sender;
use tracing::{debug, info, instrument};

/// Receives a fresh [`Snapshot`] after every state transition.
pub trait SnapshotListener {
    /// Called once per transition with the new projection.
    fn on_snapshot(&mut self, snapshot: &Snapshot);
}

/// Forwards snapshots over a channel to the view loop.
#[derive(Debug, Clone)]
pub struct ChannelListener {
    tx: Sender<Snapshot>,
}

impl ChannelListener {
    /// Creates a listener that sends on `tx`.
    pub fn new(tx: Sender<Snapshot>) -> Self {
        Self { tx }
    }
}

impl SnapshotListener for ChannelListener {
    fn on_snapshot(&mut self, snapshot: &Snapshot) {
        if self.tx.send(snapshot.clone()).is_err() {
            debug!("Snapshot receiver dropped");
        }
    }
}

/// Logs each snapshot at debug level.
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingListener;

impl SnapshotListener for TracingListener {
    fn on_snapshot(&mut self, snapshot: &Snapshot) {
        debug!(
            status = %snapshot.status(),
            step = snapshot.current_step(),
            history_len = snapshot.moves().len(),
            board = %snapshot.board().display(),
            "Snapshot"
        );
    }
}

/// Owns the game state and applies the two user intents.
///
/// Each transition replaces the [`GameState`] wholesale and then notifies
/// every registered listener. Ignored clicks change nothing and notify no one.
pub struct GameStateMachine {
    state: GameState,
    listeners: Vec<Box<dyn SnapshotListener>>,
}

impl GameStateMachine {
    /// Creates a machine at the start of a new game.
    #[instrument]
    pub fn new() -> Self {
        info!("Starting new game");
        Self {
            state: GameState::new(),
            listeners: Vec::new(),
        }
    }

    /// Registers a listener for future transitions.
    pub fn subscribe(&mut self, listener: impl SnapshotListener + 'static) {
        self.listeners.push(Box::new(listener));
    }

    /// The current state value.
    pub fn state(&self) -> &GameState {
        &self.state
    }

    /// Projection of the current state.
    pub fn snapshot(&self) -> Snapshot {
        self.state.snapshot()
    }

    /// Clicks the square at `cell` (0-8).
    ///
    /// # Errors
    ///
    /// Returns [`RewindError::InvalidIndex`] if `cell > 8`.
    #[instrument(skip(self))]
    pub fn click(&mut self, cell: usize) -> Result<ClickOutcome, RewindError> {
        let (next, outcome) = self.state.click(cell)?;
        if outcome.is_placed() {
            self.replace(next);
        }
        Ok(outcome)
    }

    /// Shows the board at history index `step`.
    ///
    /// # Errors
    ///
    /// Returns [`RewindError::InvalidIndex`] if `step` is not a history index.
    #[instrument(skip(self))]
    pub fn jump_to(&mut self, step: usize) -> Result<(), RewindError> {
        let next = self.state.jump_to(step)?;
        self.replace(next);
        Ok(())
    }

    fn replace(&mut self, next: GameState) {
        #[cfg(debug_assertions)]
        {
            let checked = RewindInvariants::check_all(&next);
            if let Err(violations) = &checked {
                tracing::warn!(?violations, "Transition broke game invariants");
            }
            debug_assert!(checked.is_ok(), "Invariant violations: {checked:?}");
        }
        self.state = next;
        let snapshot = self.state.snapshot();
        debug!(
            step = self.state.current_step(),
            listeners = self.listeners.len(),
            "Notifying listeners"
        );
        for listener in &mut self.listeners {
            listener.on_snapshot(&snapshot);
        }
    }
}

impl Default for GameStateMachine {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for GameStateMachine {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("GameStateMachine")
            .field("state", &self.state)
            .field("listeners", &self.listeners.len())
            .finish()
    }
}

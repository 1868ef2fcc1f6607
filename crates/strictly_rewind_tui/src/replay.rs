//! Headless projection of a scripted session.

use anyhow::{Context, Result};
use std::io::Write;
use strictly_rewind::{ClickOutcome, GameStateMachine, Snapshot, TracingListener};
use tracing::{info, instrument, warn};

/// Clicks `cells` on a new game, optionally jumps to `jump`, and writes the
/// resulting snapshot to `out`.
#[instrument(skip(out))]
pub fn run(cells: &[usize], jump: Option<usize>, json: bool, out: &mut impl Write) -> Result<()> {
    let mut game = GameStateMachine::new();
    game.subscribe(TracingListener);

    for &cell in cells {
        let outcome = game
            .click(cell)
            .with_context(|| format!("Failed to click cell {}", cell))?;
        if let ClickOutcome::Ignored(reason) = outcome {
            warn!(cell, %reason, "Click ignored");
        }
    }

    if let Some(step) = jump {
        game.jump_to(step)
            .with_context(|| format!("Failed to jump to move #{}", step))?;
    }

    let snapshot = game.snapshot();
    info!(status = %snapshot.status(), "Replay finished");
    if json {
        serde_json::to_writer_pretty(&mut *out, &snapshot).context("Failed to encode snapshot")?;
        writeln!(out)?;
    } else {
        write!(out, "{}", render_text(&snapshot))?;
    }
    Ok(())
}

/// Plain-text rendering of a snapshot: board, status, move list.
pub fn render_text(snapshot: &Snapshot) -> String {
    let mut text = format!("{}\n\n{}\n\n", snapshot.board().display(), snapshot.status());
    for entry in snapshot.moves() {
        let marker = if entry.is_current() { ">" } else { " " };
        text.push_str(&format!("{} {}", marker, entry.label()));
        if let Some((pos, player)) = entry.played() {
            text.push_str(&format!(" ({} at {})", player, pos.label()));
        }
        text.push('\n');
    }
    text
}

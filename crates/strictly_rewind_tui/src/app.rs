//! Application state and logic.
//!
//! `App` forwards key presses to the [`GameStateMachine`] as intents and keeps
//! the most recent [`Snapshot`] it received for drawing. It never edits game
//! state on its own.

use crate::input::{digit_position, move_cursor, move_selection};
use crossterm::event::KeyCode;
use std::sync::mpsc::{self, Receiver};
use strictly_rewind::{
    ChannelListener, ClickOutcome, GameStateMachine, Position, Snapshot, TracingListener,
};
use tracing::{debug, error, instrument};

/// Which panel receives navigation keys.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Focus {
    /// Arrow keys move the board cursor.
    Board,
    /// Arrow keys move the move-list selection.
    History,
}

/// What the event loop should do after a key press.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AppAction {
    /// Keep running.
    Continue,
    /// Leave the UI.
    Quit,
}

/// Main application state.
pub struct App {
    machine: GameStateMachine,
    snapshots: Receiver<Snapshot>,
    view: Snapshot,
    cursor: Position,
    focus: Focus,
    selected: usize,
    status_message: String,
    show_help: bool,
}

impl App {
    /// Creates a new application.
    pub fn new(show_help: bool) -> Self {
        let (tx, rx) = mpsc::channel();
        let mut machine = GameStateMachine::new();
        machine.subscribe(ChannelListener::new(tx));
        machine.subscribe(TracingListener);
        let view = machine.snapshot();

        Self {
            machine,
            snapshots: rx,
            view,
            cursor: Position::Center,
            focus: Focus::Board,
            selected: 0,
            status_message: "Player X's turn. Press 1-9 or Enter to play.".to_string(),
            show_help,
        }
    }

    /// The snapshot being shown.
    pub fn view(&self) -> &Snapshot {
        &self.view
    }

    /// Board cursor.
    pub fn cursor(&self) -> Position {
        self.cursor
    }

    /// Focused panel.
    pub fn focus(&self) -> Focus {
        self.focus
    }

    /// Selected row in the move list.
    pub fn selected(&self) -> usize {
        self.selected
    }

    /// Gets the current status message.
    pub fn status_message(&self) -> &str {
        &self.status_message
    }

    /// Whether the key help line is shown.
    pub fn show_help(&self) -> bool {
        self.show_help
    }

    /// Handles one key press.
    #[instrument(skip(self), fields(focus = ?self.focus))]
    pub fn handle_key(&mut self, key: KeyCode) -> AppAction {
        match key {
            KeyCode::Char('q') | KeyCode::Esc => return AppAction::Quit,
            KeyCode::Tab => {
                self.focus = match self.focus {
                    Focus::Board => Focus::History,
                    Focus::History => Focus::Board,
                };
                self.selected = self.view.current_step();
            }
            KeyCode::Char('?') => self.show_help = !self.show_help,
            KeyCode::Char('u') | KeyCode::Backspace => {
                match self.view.current_step().checked_sub(1) {
                    Some(step) => self.jump(step),
                    None => self.status_message = "Already at game start".to_string(),
                }
            }
            KeyCode::Char('r') => {
                let next = self.view.current_step() + 1;
                if next < self.view.moves().len() {
                    self.jump(next);
                } else {
                    self.status_message = "Nothing to redo".to_string();
                }
            }
            KeyCode::Home if self.focus == Focus::Board => self.jump(0),
            KeyCode::Char(c) if c.is_ascii_digit() => {
                if let Some(pos) = digit_position(c) {
                    self.cursor = pos;
                    self.click(pos);
                }
            }
            code => match self.focus {
                Focus::Board => match code {
                    KeyCode::Enter | KeyCode::Char(' ') => self.click(self.cursor),
                    _ => self.cursor = move_cursor(self.cursor, code),
                },
                Focus::History => match code {
                    KeyCode::Enter | KeyCode::Char(' ') => self.jump(self.selected),
                    _ => {
                        self.selected = move_selection(self.selected, self.view.moves().len(), code)
                    }
                },
            },
        }
        AppAction::Continue
    }

    fn click(&mut self, pos: Position) {
        match self.machine.click(pos.to_index()) {
            Ok(ClickOutcome::Placed { position, player }) => {
                debug!(%position, %player, "Click applied");
                self.status_message = format!("{} played {}", player, position.label());
            }
            Ok(ClickOutcome::Ignored(reason)) => {
                self.status_message = reason.to_string();
            }
            Err(e) => {
                error!(error = %e, "Board produced an invalid click");
                self.status_message = format!("Internal error: {}", e);
            }
        }
        self.sync();
    }

    fn jump(&mut self, step: usize) {
        match self.machine.jump_to(step) {
            Ok(()) => {
                self.status_message = match step {
                    0 => "Back to game start".to_string(),
                    n => format!("Showing move #{}", n),
                };
            }
            Err(e) => {
                error!(error = %e, "Move list produced an invalid jump");
                self.status_message = format!("Internal error: {}", e);
            }
        }
        self.sync();
    }

    /// Drains pending snapshots so the view shows the latest one.
    fn sync(&mut self) {
        for snapshot in self.snapshots.try_iter() {
            self.view = snapshot;
        }
        self.selected = self.view.current_step();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use strictly_rewind::{GameStatus, Player, Square};

    fn press(app: &mut App, keys: &[KeyCode]) {
        for key in keys {
            assert_eq!(app.handle_key(*key), AppAction::Continue);
        }
    }

    #[test]
    fn test_digits_place_marks() {
        let mut app = App::new(true);
        press(&mut app, &[KeyCode::Char('5'), KeyCode::Char('1')]);

        assert_eq!(app.view().board().get(Position::Center), Square::Occupied(Player::X));
        assert_eq!(app.view().board().get(Position::TopLeft), Square::Occupied(Player::O));
        assert_eq!(app.status_message(), "O played Top-left");
        assert_eq!(app.cursor(), Position::TopLeft);
    }

    #[test]
    fn test_cursor_and_enter() {
        let mut app = App::new(true);
        press(&mut app, &[KeyCode::Up, KeyCode::Left, KeyCode::Enter]);
        assert_eq!(app.view().board().get(Position::TopLeft), Square::Occupied(Player::X));

        press(&mut app, &[KeyCode::Char(' ')]);
        assert_eq!(app.status_message(), "Square Top-left is already occupied");
        assert_eq!(app.view().moves().len(), 2);
    }

    #[test]
    fn test_undo_redo() {
        let mut app = App::new(true);
        press(&mut app, &[KeyCode::Char('1'), KeyCode::Char('2'), KeyCode::Char('u')]);
        assert_eq!(app.view().current_step(), 1);
        assert_eq!(*app.view().status(), GameStatus::NextTurn(Player::O));

        press(&mut app, &[KeyCode::Char('r')]);
        assert_eq!(app.view().current_step(), 2);
        press(&mut app, &[KeyCode::Char('r')]);
        assert_eq!(app.status_message(), "Nothing to redo");

        press(&mut app, &[KeyCode::Home]);
        assert_eq!(app.view().current_step(), 0);
        press(&mut app, &[KeyCode::Backspace]);
        assert_eq!(app.status_message(), "Already at game start");
    }

    #[test]
    fn test_history_panel_jumps() {
        let mut app = App::new(true);
        press(&mut app, &[KeyCode::Char('1'), KeyCode::Char('2'), KeyCode::Char('3')]);
        press(&mut app, &[KeyCode::Tab]);
        assert_eq!(app.focus(), Focus::History);
        assert_eq!(app.selected(), 3);

        press(&mut app, &[KeyCode::Up, KeyCode::Up, KeyCode::Enter]);
        assert_eq!(app.view().current_step(), 1);
        assert_eq!(app.view().moves().len(), 4);
        assert_eq!(app.status_message(), "Showing move #1");

        press(&mut app, &[KeyCode::Tab, KeyCode::Char('9')]);
        assert_eq!(app.focus(), Focus::Board);
        assert_eq!(app.view().moves().len(), 3);
    }

    #[test]
    fn test_quit_keys() {
        let mut app = App::new(false);
        assert_eq!(app.handle_key(KeyCode::Char('q')), AppAction::Quit);
        assert_eq!(app.handle_key(KeyCode::Esc), AppAction::Quit);
        assert!(!app.show_help());
        press(&mut app, &[KeyCode::Char('?')]);
        assert!(app.show_help());
    }

    #[test]
    fn test_winning_game_ignores_further_clicks() {
        let mut app = App::new(true);
        for c in ['1', '2', '4', '5', '7'] {
            press(&mut app, &[KeyCode::Char(c)]);
        }
        assert_eq!(*app.view().status(), GameStatus::Winner(Player::X));
        press(&mut app, &[KeyCode::Char('9')]);
        assert_eq!(app.status_message(), "Game is already over");
    }
}

//! Application state and key handling.

use crate::config::TuiConfig;
use crate::input::{digit_position, move_cursor, move_selection};
use crossterm::event::KeyCode;
use rewind_tictactoe::{GameSession, MoveOutcome, Position};
use tracing::{debug, instrument, warn};

/// Which pane receives navigation keys.
#[derive(Debug, Clone, Copy, PartialEq, Eq, strum::Display)]
pub enum Focus {
    /// The board.
    Board,
    /// The move list.
    Moves,
}

/// What the event loop should do after a key.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Control {
    /// Keep running.
    Continue,
    /// Leave the UI.
    Quit,
}

/// Main application state.
pub struct App {
    session: GameSession,
    cursor: Position,
    focus: Focus,
    selected: usize,
    message: String,
}

impl App {
    /// Creates a new application.
    #[instrument(skip(config))]
    pub fn new(config: &TuiConfig) -> Self {
        let mut session = GameSession::new();
        if *config.list_reversed() {
            session.toggle_list_order();
        }

        Self {
            session,
            cursor: Position::Center,
            focus: Focus::Board,
            selected: 0,
            message: "Arrows to move, Enter to play.".to_string(),
        }
    }

    /// Gets the game session.
    pub fn session(&self) -> &GameSession {
        &self.session
    }

    /// Gets the board cursor.
    pub fn cursor(&self) -> Position {
        self.cursor
    }

    /// Gets the focused pane.
    pub fn focus(&self) -> Focus {
        self.focus
    }

    /// Gets the selected history step in the move list.
    pub fn selected(&self) -> usize {
        self.selected
    }

    /// Gets the message describing the last action.
    pub fn message(&self) -> &str {
        &self.message
    }

    /// Applies one key press.
    #[instrument(skip(self), fields(focus = %self.focus))]
    pub fn handle_key(&mut self, key: KeyCode) -> Control {
        match key {
            KeyCode::Char('q') | KeyCode::Esc => return Control::Quit,
            KeyCode::Tab => self.switch_focus(),
            KeyCode::Char('s') => {
                self.session.toggle_list_order();
                self.message = if self.session.list_reversed() {
                    "Move list: newest first.".to_string()
                } else {
                    "Move list: oldest first.".to_string()
                };
            }
            code => {
                if let Some(position) = digit_position(code) {
                    self.play(position);
                } else {
                    match self.focus {
                        Focus::Board => self.handle_board_key(code),
                        Focus::Moves => self.handle_moves_key(code),
                    }
                }
            }
        }
        Control::Continue
    }

    fn switch_focus(&mut self) {
        self.focus = match self.focus {
            Focus::Board => {
                self.selected = self.session.step();
                Focus::Moves
            }
            Focus::Moves => Focus::Board,
        };
        debug!(focus = %self.focus, "Focus switched");
    }

    fn handle_board_key(&mut self, key: KeyCode) {
        match key {
            KeyCode::Enter | KeyCode::Char(' ') => self.play(self.cursor),
            code => self.cursor = move_cursor(self.cursor, code),
        }
    }

    fn handle_moves_key(&mut self, key: KeyCode) {
        match key {
            KeyCode::Enter | KeyCode::Char(' ') => self.jump(self.selected),
            code => {
                self.selected = move_selection(
                    self.selected,
                    self.session.history().len(),
                    self.session.list_reversed(),
                    code,
                );
            }
        }
    }

    fn play(&mut self, position: Position) {
        self.cursor = position;
        match self.session.play_move(position.to_index()) {
            MoveOutcome::Played { player, .. } => {
                self.message = format!("{} played {}", player, position.label());
                self.selected = self.session.step();
            }
            MoveOutcome::Ignored(reason) => {
                self.message = reason.to_string();
            }
        }
    }

    fn jump(&mut self, step: usize) {
        match self.session.jump_to(step) {
            Ok(()) => {
                self.message = if step == 0 {
                    "Returned to game start.".to_string()
                } else {
                    format!("Returned to move #{}.", step)
                };
            }
            Err(e) => {
                warn!(error = %e, "Jump rejected");
                self.message = e.to_string();
            }
        }
    }
}

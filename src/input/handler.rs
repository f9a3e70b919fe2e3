use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use crate::game::Heading;

/// Key meaning during normal play
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyAction {
    Turn(Heading),
    TogglePause,
    Restart,
    Quit,
    None,
}

/// Key meaning while typing a name on the game-over screen
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NameAction {
    Push(char),
    Pop,
    Confirm,
    Quit,
    None,
}

pub struct InputHandler;

impl InputHandler {
    pub fn new() -> Self {
        Self
    }

    pub fn handle_key_event(&self, key: KeyEvent) -> KeyAction {
        // Handle Ctrl+C
        if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
            return KeyAction::Quit;
        }

        match key.code {
            // Steering - Arrow keys
            KeyCode::Up => KeyAction::Turn(Heading::Up),
            KeyCode::Down => KeyAction::Turn(Heading::Down),
            KeyCode::Left => KeyAction::Turn(Heading::Left),
            KeyCode::Right => KeyAction::Turn(Heading::Right),

            // Steering - WASD
            KeyCode::Char('w') | KeyCode::Char('W') => KeyAction::Turn(Heading::Up),
            KeyCode::Char('s') | KeyCode::Char('S') => KeyAction::Turn(Heading::Down),
            KeyCode::Char('a') | KeyCode::Char('A') => KeyAction::Turn(Heading::Left),
            KeyCode::Char('d') | KeyCode::Char('D') => KeyAction::Turn(Heading::Right),

            // Controls
            KeyCode::Char(' ') | KeyCode::Char('p') | KeyCode::Char('P') => KeyAction::TogglePause,
            KeyCode::Char('q') | KeyCode::Char('Q') | KeyCode::Esc => KeyAction::Quit,
            KeyCode::Char('r') | KeyCode::Char('R') => KeyAction::Restart,

            _ => KeyAction::None,
        }
    }

    /// Name-entry mode: ordinary characters go into the buffer, so the
    /// gameplay bindings like 'q' and 'p' do not apply here.
    pub fn handle_name_key(&self, key: KeyEvent) -> NameAction {
        if key.modifiers.contains(KeyModifiers::CONTROL) {
            return match key.code {
                KeyCode::Char('c') => NameAction::Quit,
                _ => NameAction::None,
            };
        }

        match key.code {
            KeyCode::Enter => NameAction::Confirm,
            KeyCode::Backspace => NameAction::Pop,
            KeyCode::Esc => NameAction::Quit,
            KeyCode::Char(c) if !c.is_control() => NameAction::Push(c),
            _ => NameAction::None,
        }
    }
}

impl Default for InputHandler {
    fn default() -> Self {
        Self::new()
    }
}

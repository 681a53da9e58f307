//! Key and mouse mapping from terminal events to player actions.

use crate::types::{Difficulty, Direction, InputAction};
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers, MouseButton, MouseEvent, MouseEventKind};

/// Map keyboard input to player actions.
pub fn handle_key_event(key: KeyEvent) -> Option<InputAction> {
    match key.code {
        // Cursor
        KeyCode::Left | KeyCode::Char('h') | KeyCode::Char('H') => {
            Some(InputAction::Cursor(Direction::Left))
        }
        KeyCode::Right | KeyCode::Char('l') | KeyCode::Char('L') => {
            Some(InputAction::Cursor(Direction::Right))
        }
        KeyCode::Up | KeyCode::Char('k') | KeyCode::Char('K') => {
            Some(InputAction::Cursor(Direction::Up))
        }
        KeyCode::Down | KeyCode::Char('j') | KeyCode::Char('J') => {
            Some(InputAction::Cursor(Direction::Down))
        }

        // Cards
        KeyCode::Enter | KeyCode::Char(' ') => Some(InputAction::Reveal),

        // Session
        KeyCode::Char('g') | KeyCode::Char('G') => Some(InputAction::Start),
        KeyCode::Char('r') | KeyCode::Char('R') => Some(InputAction::Restart),
        KeyCode::Char('1') => Some(InputAction::SetDifficulty(Difficulty::Easy)),
        KeyCode::Char('2') => Some(InputAction::SetDifficulty(Difficulty::Hard)),
        KeyCode::Char('t') | KeyCode::Char('T') => Some(InputAction::ToggleDifficulty),

        _ => None,
    }
}

/// Map a left click to a reveal, using `card_at` to hit-test the cell.
pub fn handle_mouse_event(
    mouse: MouseEvent,
    card_at: impl Fn(u16, u16) -> Option<usize>,
) -> Option<InputAction> {
    match mouse.kind {
        MouseEventKind::Down(MouseButton::Left) => {
            card_at(mouse.column, mouse.row).map(InputAction::RevealAt)
        }
        _ => None,
    }
}

/// Check if key should quit the game.
pub fn should_quit(key: KeyEvent) -> bool {
    matches!(key.code, KeyCode::Char('q') | KeyCode::Char('Q') | KeyCode::Esc)
        || (key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL))
}

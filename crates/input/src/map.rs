//! Key bindings.

use crate::types::GameAction;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

/// Map a key event to a game action.
///
/// Arrows are the primary bindings, with WASD and vi-style hjkl mirrors.
pub fn action_for_key(key: KeyEvent) -> Option<GameAction> {
    match key.code {
        KeyCode::Left | KeyCode::Char('h' | 'H') | KeyCode::Char('a' | 'A') => {
            Some(GameAction::MoveLeft)
        }
        KeyCode::Right | KeyCode::Char('l' | 'L') | KeyCode::Char('d' | 'D') => {
            Some(GameAction::MoveRight)
        }
        KeyCode::Down | KeyCode::Char('j' | 'J') | KeyCode::Char('s' | 'S') => {
            Some(GameAction::SoftDrop)
        }
        KeyCode::Up | KeyCode::Char('k' | 'K') | KeyCode::Char('w' | 'W') => {
            Some(GameAction::Rotate)
        }
        KeyCode::Char(' ') => Some(GameAction::HardDrop),
        KeyCode::Char('p' | 'P') => Some(GameAction::Pause),
        KeyCode::Char('r' | 'R') => Some(GameAction::Restart),
        _ => None,
    }
}

/// Whether a key event should quit the program.
pub fn should_quit(key: KeyEvent) -> bool {
    matches!(key.code, KeyCode::Char('q') | KeyCode::Char('Q') | KeyCode::Esc)
        || (key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL))
}

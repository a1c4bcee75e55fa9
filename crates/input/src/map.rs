//! Key mapping from terminal events to command tokens.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

/// Map a key press to the token it stands for.
///
/// Arrow keys become their WASD equivalents; other printable keys pass through
/// as one-character tokens and are judged by the sampler. Keys with no textual
/// form (function keys, Enter, ...) produce nothing.
pub fn key_token(key: KeyEvent) -> Option<String> {
    match key.code {
        KeyCode::Up => Some("w".to_string()),
        KeyCode::Left => Some("a".to_string()),
        KeyCode::Down => Some("s".to_string()),
        KeyCode::Right => Some("d".to_string()),
        KeyCode::Char(c) if !key.modifiers.contains(KeyModifiers::CONTROL) => Some(c.to_string()),
        _ => None,
    }
}

/// Check if key should quit the game.
pub fn should_quit(key: KeyEvent) -> bool {
    matches!(key.code, KeyCode::Char('q') | KeyCode::Char('Q') | KeyCode::Esc)
        || (key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL))
}

//! Maps terminal key events onto the game's logical inputs.

use crate::game::GameInput;
use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

/// Translate one key event. Key releases and repeats map to `Other`.
pub fn map_key(key: KeyEvent) -> GameInput {
    if key.kind != KeyEventKind::Press {
        return GameInput::Other;
    }

    match key.code {
        KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => GameInput::Quit,
        KeyCode::Esc | KeyCode::Char('q') | KeyCode::Char('Q') => GameInput::Quit,
        KeyCode::Enter => GameInput::Start,
        KeyCode::Char(' ') | KeyCode::Up => GameInput::Flap,
        KeyCode::Char('r') | KeyCode::Char('R') => GameInput::Restart,
        _ => GameInput::Other,
    }
}

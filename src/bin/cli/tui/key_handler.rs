use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use doji_lib::drill::Step;

/// Any key moves on; q, Esc and Ctrl-C abandon the session.
pub fn handle_key(key: KeyEvent) -> Step {
    match key.code {
        KeyCode::Char('q') | KeyCode::Esc => Step::Abandon,
        // Raw mode delivers Ctrl-C as a key instead of SIGINT
        KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => Step::Abandon,
        _ => Step::Continue,
    }
}

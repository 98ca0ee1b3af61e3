/// Key-state tracking for the frame driver.
///
/// Terminals without keyboard enhancement never send release events and
/// deliver OS auto-repeat as fresh presses, so a key counts as held while
/// its last press or repeat is younger than `HOLD_WINDOW_MS`.

use std::collections::HashMap;

use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

/// Outlasts the OS key-repeat interval (≥ 15 Hz) regardless of framerate.
pub const HOLD_WINDOW_MS: u64 = 133;

pub const LEFT_KEYS: [KeyCode; 3] = [KeyCode::Left, KeyCode::Char('a'), KeyCode::Char('A')];
pub const RIGHT_KEYS: [KeyCode; 3] = [KeyCode::Right, KeyCode::Char('d'), KeyCode::Char('D')];
pub const FIRE_KEY: KeyCode = KeyCode::Char(' ');

/// Last time (ms on the game clock) each key was pressed or repeated.
#[derive(Clone, Debug, Default)]
pub struct HeldKeys {
    last_seen: HashMap<KeyCode, u64>,
}

impl HeldKeys {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn seen(&mut self, code: KeyCode, now_ms: u64) {
        self.last_seen.insert(code, now_ms);
    }

    pub fn released(&mut self, code: KeyCode) {
        self.last_seen.remove(&code);
    }

    pub fn is_held(&self, code: &KeyCode, now_ms: u64) -> bool {
        self.last_seen
            .get(code)
            .map(|&last| now_ms.saturating_sub(last) <= HOLD_WINDOW_MS)
            .unwrap_or(false)
    }

    pub fn any_held(&self, codes: &[KeyCode], now_ms: u64) -> bool {
        codes.iter().any(|c| self.is_held(c, now_ms))
    }
}

fn is_ctrl_c(ev: &KeyEvent) -> bool {
    ev.code == KeyCode::Char('c') && ev.modifiers.contains(KeyModifiers::CONTROL)
}

/// Q, Esc or Ctrl-C pressed.
pub fn is_quit(ev: &KeyEvent) -> bool {
    ev.kind == KeyEventKind::Press
        && (matches!(ev.code, KeyCode::Char('q') | KeyCode::Char('Q') | KeyCode::Esc)
            || is_ctrl_c(ev))
}

/// Only Enter or a quit key closes the game-over screen; movement and fire
/// keys still held (or auto-repeating) from play are ignored.
pub fn dismisses_game_over(ev: &KeyEvent) -> bool {
    is_quit(ev) || (ev.kind == KeyEventKind::Press && ev.code == KeyCode::Enter)
}

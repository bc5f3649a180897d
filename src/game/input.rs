//! Input dispatch
//!
//! Turns raw terminal events into actions. Anything unrecognised maps to no
//! action, which the engine treats as a skipped turn.

use crossterm::event::{Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

use super::Action;

/// Maps raw input events to actions
pub trait EventHandler {
    type Event;

    fn dispatch(&mut self, event: &Self::Event) -> Option<Action>;
}

/// Arrow keys and vi keys for movement, Esc or `q` to leave
#[derive(Debug, Clone, Copy, Default)]
pub struct KeyboardHandler;

impl KeyboardHandler {
    pub fn new() -> Self {
        Self
    }

    fn action_for_key(key: &KeyEvent) -> Option<Action> {
        if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
            return Some(Action::Escape);
        }

        let (dx, dy) = match key.code {
            KeyCode::Up | KeyCode::Char('k') => (0, -1),
            KeyCode::Down | KeyCode::Char('j') => (0, 1),
            KeyCode::Left | KeyCode::Char('h') => (-1, 0),
            KeyCode::Right | KeyCode::Char('l') => (1, 0),
            KeyCode::Char('y') => (-1, -1),
            KeyCode::Char('u') => (1, -1),
            KeyCode::Char('b') => (-1, 1),
            KeyCode::Char('n') => (1, 1),
            KeyCode::Esc | KeyCode::Char('q') => return Some(Action::Escape),
            _ => return None,
        };
        Some(Action::Movement { dx, dy })
    }
}

impl EventHandler for KeyboardHandler {
    type Event = Event;

    fn dispatch(&mut self, event: &Event) -> Option<Action> {
        match event {
            // Only handle key press events, not releases
            Event::Key(key) if key.kind == KeyEventKind::Press => Self::action_for_key(key),
            _ => None,
        }
    }
}

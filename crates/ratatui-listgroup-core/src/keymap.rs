use crate::input::KeyCode;
use crate::input::KeyEvent;
use crate::input::KeyModifiers;

/// Keyboard gestures understood by list widgets.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ListKeyAction {
    Up,
    Down,
    First,
    Last,
    PageUp,
    PageDown,
    Activate,
    Clear,
}

/// Key bindings for list navigation and activation.
///
/// Defaults follow the rest of the widget family: arrows plus Vim-style `j`/`k`/`g`/`G`,
/// `Enter` or `Space` to activate the focused row and `Esc` to clear a selection.
#[derive(Clone, Debug)]
pub struct ListBindings {
    pub up: Vec<KeyEvent>,
    pub down: Vec<KeyEvent>,
    pub first: Vec<KeyEvent>,
    pub last: Vec<KeyEvent>,
    pub page_up: Vec<KeyEvent>,
    pub page_down: Vec<KeyEvent>,
    pub activate: Vec<KeyEvent>,
    pub clear: Vec<KeyEvent>,
}

impl Default for ListBindings {
    fn default() -> Self {
        Self {
            up: vec![KeyEvent::new(KeyCode::Up), key_char('k')],
            down: vec![KeyEvent::new(KeyCode::Down), key_char('j')],
            first: vec![KeyEvent::new(KeyCode::Home), key_char('g')],
            last: vec![KeyEvent::new(KeyCode::End), key_char('G')],
            page_up: vec![KeyEvent::new(KeyCode::PageUp), key_ctrl('u')],
            page_down: vec![KeyEvent::new(KeyCode::PageDown), key_ctrl('d')],
            activate: vec![KeyEvent::new(KeyCode::Enter), key_char(' ')],
            clear: vec![KeyEvent::new(KeyCode::Esc)],
        }
    }
}

impl ListBindings {
    pub fn action_for(&self, key: &KeyEvent) -> Option<ListKeyAction> {
        let table = [
            (&self.up, ListKeyAction::Up),
            (&self.down, ListKeyAction::Down),
            (&self.first, ListKeyAction::First),
            (&self.last, ListKeyAction::Last),
            (&self.page_up, ListKeyAction::PageUp),
            (&self.page_down, ListKeyAction::PageDown),
            (&self.activate, ListKeyAction::Activate),
            (&self.clear, ListKeyAction::Clear),
        ];
        table
            .into_iter()
            .find(|(keys, _)| keys.iter().any(|p| key_event_matches(p, key)))
            .map(|(_, action)| action)
    }
}

pub fn key_event_matches(pattern: &KeyEvent, event: &KeyEvent) -> bool {
    pattern.code == event.code && modifiers_match(pattern.modifiers, event.modifiers)
}

// Shift is implied by the character itself (`G` vs `g`), so it is not compared for chars.
fn modifiers_match(pattern: KeyModifiers, event: KeyModifiers) -> bool {
    pattern.ctrl == event.ctrl && pattern.alt == event.alt
}

pub fn key_char(c: char) -> KeyEvent {
    KeyEvent::new(KeyCode::Char(c))
}

pub fn key_ctrl(c: char) -> KeyEvent {
    KeyEvent::new(KeyCode::Char(c)).with_modifiers(KeyModifiers::ctrl())
}

//! Conversions from `crossterm` events into [`InputEvent`].
//!
//! Only what list widgets react to survives the conversion: key presses for the codes in
//! [`KeyCode`], button presses and the scroll wheel. Everything else maps to `None`.

use crate::input::InputEvent;
use crate::input::KeyCode;
use crate::input::KeyEvent;
use crate::input::KeyModifiers;
use crate::input::MouseButton;
use crate::input::MouseEvent;
use crate::input::MouseEventKind;
use crossterm::event as ct;

pub fn input_event_from_crossterm(ev: ct::Event) -> Option<InputEvent> {
    match ev {
        ct::Event::Key(key) if key.kind == ct::KeyEventKind::Press => {
            let code = key_code(key.code)?;
            Some(InputEvent::Key(
                KeyEvent::new(code).with_modifiers(modifiers(key.modifiers)),
            ))
        }
        ct::Event::Mouse(m) => {
            let kind = match m.kind {
                ct::MouseEventKind::Down(button) => MouseEventKind::Down(mouse_button(button)),
                ct::MouseEventKind::ScrollUp => MouseEventKind::ScrollUp,
                ct::MouseEventKind::ScrollDown => MouseEventKind::ScrollDown,
                _ => return None,
            };
            Some(InputEvent::Mouse(MouseEvent {
                x: m.column,
                y: m.row,
                kind,
                modifiers: modifiers(m.modifiers),
            }))
        }
        ct::Event::Paste(s) => Some(InputEvent::Paste(s)),
        _ => None,
    }
}

fn key_code(code: ct::KeyCode) -> Option<KeyCode> {
    Some(match code {
        ct::KeyCode::Char(c) => KeyCode::Char(c),
        ct::KeyCode::Enter => KeyCode::Enter,
        ct::KeyCode::Esc => KeyCode::Esc,
        ct::KeyCode::Tab => KeyCode::Tab,
        ct::KeyCode::BackTab => KeyCode::BackTab,
        ct::KeyCode::Up => KeyCode::Up,
        ct::KeyCode::Down => KeyCode::Down,
        ct::KeyCode::Home => KeyCode::Home,
        ct::KeyCode::End => KeyCode::End,
        ct::KeyCode::PageUp => KeyCode::PageUp,
        ct::KeyCode::PageDown => KeyCode::PageDown,
        _ => return None,
    })
}

fn mouse_button(button: ct::MouseButton) -> MouseButton {
    match button {
        ct::MouseButton::Left => MouseButton::Left,
        ct::MouseButton::Right => MouseButton::Right,
        ct::MouseButton::Middle => MouseButton::Middle,
    }
}

fn modifiers(m: ct::KeyModifiers) -> KeyModifiers {
    KeyModifiers {
        shift: m.contains(ct::KeyModifiers::SHIFT),
        ctrl: m.contains(ct::KeyModifiers::CONTROL),
        alt: m.contains(ct::KeyModifiers::ALT),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn mouse(kind: ct::MouseEventKind) -> ct::Event {
        ct::Event::Mouse(ct::MouseEvent {
            kind,
            column: 7,
            row: 2,
            modifiers: ct::KeyModifiers::NONE,
        })
    }

    #[test]
    fn left_click_maps_to_primary_click() {
        let ev = input_event_from_crossterm(mouse(ct::MouseEventKind::Down(ct::MouseButton::Left)));
        assert_eq!(ev, Some(InputEvent::click(7, 2)));
    }

    #[test]
    fn button_release_and_drag_are_dropped() {
        let up = mouse(ct::MouseEventKind::Up(ct::MouseButton::Left));
        let drag = mouse(ct::MouseEventKind::Drag(ct::MouseButton::Left));
        assert_eq!(input_event_from_crossterm(up), None);
        assert_eq!(input_event_from_crossterm(drag), None);
    }

    #[test]
    fn ctrl_d_keeps_modifier() {
        let key = ct::KeyEvent::new(ct::KeyCode::Char('d'), ct::KeyModifiers::CONTROL);
        assert_eq!(
            input_event_from_crossterm(ct::Event::Key(key)),
            Some(InputEvent::Key(
                KeyEvent::new(KeyCode::Char('d')).with_modifiers(KeyModifiers::ctrl())
            ))
        );
    }

    #[test]
    fn key_release_is_ignored() {
        let mut key = ct::KeyEvent::new(ct::KeyCode::Enter, ct::KeyModifiers::NONE);
        key.kind = ct::KeyEventKind::Release;
        assert_eq!(input_event_from_crossterm(ct::Event::Key(key)), None);
    }
}

//! Key mapping from terminal events to session commands.

use crossterm::event::{Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

use crate::types::{Command, InputEvent, SpecialKey};

/// Translate a raw crossterm event into a display-independent [`InputEvent`].
///
/// Key releases and non-key events other than resizes are dropped.
pub fn translate_event(event: Event) -> Option<InputEvent> {
    match event {
        Event::Key(key) if key.kind != KeyEventKind::Release => Some(translate_key(key)),
        Event::Resize(width, height) => Some(InputEvent::Resize { width, height }),
        _ => None,
    }
}

fn translate_key(key: KeyEvent) -> InputEvent {
    match key.code {
        KeyCode::Char('c') | KeyCode::Char('C') if key.modifiers.contains(KeyModifiers::CONTROL) => {
            InputEvent::Special(SpecialKey::Interrupt)
        }
        KeyCode::Char(ch) => InputEvent::Char(ch),
        KeyCode::Esc => InputEvent::Special(SpecialKey::Escape),
        KeyCode::Enter => InputEvent::Special(SpecialKey::Enter),
        _ => InputEvent::Special(SpecialKey::Other),
    }
}

/// Map an input event to a session command.
pub fn command_for(event: &InputEvent) -> Option<Command> {
    match event {
        InputEvent::Char('p') | InputEvent::Char('P') => Some(Command::TogglePause),
        InputEvent::Char(' ') => Some(Command::Step),
        InputEvent::Char('q') | InputEvent::Char('Q') => Some(Command::Quit),
        InputEvent::Special(SpecialKey::Escape) | InputEvent::Special(SpecialKey::Interrupt) => {
            Some(Command::Quit)
        }
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::{KeyCode, KeyEvent, KeyEventState, KeyModifiers};

    fn key(code: KeyCode) -> Event {
        Event::Key(KeyEvent::from(code))
    }

    #[test]
    fn test_char_keys() {
        assert_eq!(translate_event(key(KeyCode::Char('p'))), Some(InputEvent::Char('p')));
        assert_eq!(translate_event(key(KeyCode::Char(' '))), Some(InputEvent::Char(' ')));
        assert_eq!(translate_event(key(KeyCode::Esc)), Some(InputEvent::Special(SpecialKey::Escape)));
        assert_eq!(translate_event(key(KeyCode::Enter)), Some(InputEvent::Special(SpecialKey::Enter)));
        assert_eq!(translate_event(key(KeyCode::F(5))), Some(InputEvent::Special(SpecialKey::Other)));
    }

    #[test]
    fn test_ctrl_c_is_interrupt() {
        let ev = Event::Key(KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL));
        assert_eq!(translate_event(ev), Some(InputEvent::Special(SpecialKey::Interrupt)));
    }

    #[test]
    fn test_release_and_focus_are_dropped() {
        let release = Event::Key(KeyEvent {
            code: KeyCode::Char('q'),
            modifiers: KeyModifiers::NONE,
            kind: KeyEventKind::Release,
            state: KeyEventState::NONE,
        });
        assert_eq!(translate_event(release), None);
        assert_eq!(translate_event(Event::FocusGained), None);
    }

    #[test]
    fn test_resize() {
        assert_eq!(
            translate_event(Event::Resize(120, 40)),
            Some(InputEvent::Resize { width: 120, height: 40 })
        );
    }

    #[test]
    fn test_commands() {
        assert_eq!(command_for(&InputEvent::Char('p')), Some(Command::TogglePause));
        assert_eq!(command_for(&InputEvent::Char('P')), Some(Command::TogglePause));
        assert_eq!(command_for(&InputEvent::Char(' ')), Some(Command::Step));
        assert_eq!(command_for(&InputEvent::Char('x')), None);
        assert_eq!(command_for(&InputEvent::Special(SpecialKey::Enter)), None);
        assert_eq!(command_for(&InputEvent::Resize { width: 1, height: 1 }), None);
    }

    #[test]
    fn test_quit_keys() {
        for event in [
            InputEvent::Char('q'),
            InputEvent::Char('Q'),
            InputEvent::Special(SpecialKey::Escape),
            InputEvent::Special(SpecialKey::Interrupt),
        ] {
            assert_eq!(command_for(&event), Some(Command::Quit), "{:?}", event);
        }
        assert_ne!(command_for(&InputEvent::Char('x')), Some(Command::Quit));
    }
}

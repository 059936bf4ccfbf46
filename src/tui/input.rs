use std::thread;
use std::time::Duration;

use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use log::debug;
use tokio::sync::mpsc::UnboundedSender;

use crate::pass::CharacterClass;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    Generate,
    Copy,
    ToggleVisibility,
    ToggleClass(CharacterClass),
    Slide(isize),
    Digit(char),
    Backspace,
    Quit,
}

/// Map a key press to a widget action.
pub fn action(key: KeyEvent) -> Option<Action> {
    if key.kind != KeyEventKind::Press {
        return None;
    }
    let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);
    let action = match key.code {
        KeyCode::Char('c') if ctrl => Action::Quit,
        KeyCode::Esc | KeyCode::Char('q') => Action::Quit,
        KeyCode::Enter | KeyCode::Char('g') => Action::Generate,
        KeyCode::Char('c') => Action::Copy,
        KeyCode::Char('v') => Action::ToggleVisibility,
        KeyCode::Char('l') => Action::ToggleClass(CharacterClass::Lowercase),
        KeyCode::Char('u') => Action::ToggleClass(CharacterClass::Uppercase),
        KeyCode::Char('n') => Action::ToggleClass(CharacterClass::Digit),
        KeyCode::Char('s') => Action::ToggleClass(CharacterClass::Symbol),
        KeyCode::Left => Action::Slide(-1),
        KeyCode::Right => Action::Slide(1),
        KeyCode::PageDown => Action::Slide(-10),
        KeyCode::PageUp => Action::Slide(10),
        KeyCode::Backspace => Action::Backspace,
        KeyCode::Char(c) if c.is_ascii_digit() => Action::Digit(c),
        _ => return None,
    };
    Some(action)
}

/// Read key events on a plain thread and forward them to the event loop.
/// The thread exits once the receiver is gone.
pub fn spawn_reader(tx: UnboundedSender<KeyEvent>) {
    thread::spawn(move || {
        let timeout = Duration::from_millis(50);
        while !tx.is_closed() {
            match event::poll(timeout) {
                Ok(true) => match event::read() {
                    Ok(Event::Key(key)) => {
                        if tx.send(key).is_err() {
                            break;
                        }
                    }
                    Ok(_) => {}
                    Err(e) => {
                        debug!("key reader stopped: {e}");
                        break;
                    }
                },
                Ok(false) => {}
                Err(e) => {
                    debug!("key reader stopped: {e}");
                    break;
                }
            }
        }
    });
}

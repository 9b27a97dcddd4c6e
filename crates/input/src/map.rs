//! Key mapping from terminal events to engine commands.
//!
//! Arrow keys, vim keys (`hjkl`) and `wasd` all drive the same four
//! commands. Letters match in either case.

use crate::types::Command;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

/// Map keyboard input to an engine command.
pub fn handle_key_event(key: KeyEvent) -> Option<Command> {
    match key.code {
        KeyCode::Left => Some(Command::Left),
        KeyCode::Right => Some(Command::Right),
        KeyCode::Down => Some(Command::SoftDrop),
        KeyCode::Up => Some(Command::Rotate),
        KeyCode::Char(ch) => letter_command(ch),
        _ => None,
    }
}

fn letter_command(ch: char) -> Option<Command> {
    match ch.to_ascii_lowercase() {
        'h' | 'a' => Some(Command::Left),
        'l' | 'd' => Some(Command::Right),
        'j' | 's' => Some(Command::SoftDrop),
        'k' | 'w' => Some(Command::Rotate),
        _ => None,
    }
}

/// Check if key should quit the game.
pub fn should_quit(key: KeyEvent) -> bool {
    match key.code {
        KeyCode::Esc => true,
        KeyCode::Char('q' | 'Q') => true,
        KeyCode::Char('c') => key.modifiers.contains(KeyModifiers::CONTROL),
        _ => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn press(code: KeyCode) -> KeyEvent {
        KeyEvent::from(code)
    }

    #[test]
    fn test_every_layout_maps_the_same_commands() {
        let table = [
            (Command::Left, [KeyCode::Left, KeyCode::Char('h'), KeyCode::Char('A')]),
            (Command::Right, [KeyCode::Right, KeyCode::Char('L'), KeyCode::Char('d')]),
            (Command::SoftDrop, [KeyCode::Down, KeyCode::Char('j'), KeyCode::Char('S')]),
            (Command::Rotate, [KeyCode::Up, KeyCode::Char('K'), KeyCode::Char('w')]),
        ];
        for (command, codes) in table {
            for code in codes {
                assert_eq!(handle_key_event(press(code)), Some(command), "{code:?}");
            }
        }
    }

    #[test]
    fn test_unmapped_keys() {
        assert_eq!(handle_key_event(press(KeyCode::Char(' '))), None);
        assert_eq!(handle_key_event(press(KeyCode::Enter)), None);
        assert_eq!(handle_key_event(press(KeyCode::Char('q'))), None);
    }

    #[test]
    fn test_quit_keys() {
        assert!(should_quit(press(KeyCode::Char('q'))));
        assert!(should_quit(press(KeyCode::Char('Q'))));
        assert!(should_quit(press(KeyCode::Esc)));
        assert!(should_quit(KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL)));
        assert!(!should_quit(press(KeyCode::Char('c'))));
        assert!(!should_quit(press(KeyCode::Left)));
    }
}

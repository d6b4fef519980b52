//! Key mapping from terminal events to game actions and host commands.
//!
//! Letters are matched case-insensitively. Three layouts drive the piece: arrows,
//! vim keys (`h` `j` `k` `l`) and `w` `a` `s` `d`.

use crate::types::GameAction;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

/// What a single key press asks for.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyCommand {
    /// Forward to the engine.
    Action(GameAction),
    /// Start a new session.
    Restart,
    /// Leave the program.
    Quit,
}

/// Classify a key press. Unbound keys yield `None`.
pub fn classify(key: KeyEvent) -> Option<KeyCommand> {
    let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);

    let letter = match key.code {
        KeyCode::Char(c) => Some(c.to_ascii_lowercase()),
        _ => None,
    };

    if ctrl {
        // Only Ctrl+C is bound; other chords are left to the terminal.
        return (letter == Some('c')).then_some(KeyCommand::Quit);
    }

    let action = match (key.code, letter) {
        (KeyCode::Left, _) | (_, Some('h' | 'a')) => GameAction::MoveLeft,
        (KeyCode::Right, _) | (_, Some('l' | 'd')) => GameAction::MoveRight,
        (KeyCode::Down, _) | (_, Some('j' | 's')) => GameAction::SoftDrop,
        (KeyCode::Up, _) | (_, Some('k' | 'w')) => GameAction::Rotate,
        (KeyCode::Esc, _) | (_, Some('q')) => return Some(KeyCommand::Quit),
        (_, Some('r')) => return Some(KeyCommand::Restart),
        _ => return None,
    };
    Some(KeyCommand::Action(action))
}

/// Map a key press to an engine action, if it is one.
pub fn handle_key_event(key: KeyEvent) -> Option<GameAction> {
    match classify(key)? {
        KeyCommand::Action(action) => Some(action),
        _ => None,
    }
}

/// `q`, `Esc`, or `Ctrl+C`.
pub fn should_quit(key: KeyEvent) -> bool {
    classify(key) == Some(KeyCommand::Quit)
}

/// `r`.
pub fn should_restart(key: KeyEvent) -> bool {
    classify(key) == Some(KeyCommand::Restart)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn press(code: KeyCode) -> KeyEvent {
        KeyEvent::from(code)
    }

    fn chord(c: char) -> KeyEvent {
        KeyEvent::new(KeyCode::Char(c), KeyModifiers::CONTROL)
    }

    #[test]
    fn every_layout_reaches_every_action() {
        let table = [
            (GameAction::MoveLeft, [KeyCode::Left, KeyCode::Char('h'), KeyCode::Char('A')]),
            (GameAction::MoveRight, [KeyCode::Right, KeyCode::Char('L'), KeyCode::Char('d')]),
            (GameAction::SoftDrop, [KeyCode::Down, KeyCode::Char('j'), KeyCode::Char('S')]),
            (GameAction::Rotate, [KeyCode::Up, KeyCode::Char('K'), KeyCode::Char('w')]),
        ];
        for (action, codes) in table {
            for code in codes {
                assert_eq!(handle_key_event(press(code)), Some(action), "{code:?}");
            }
        }
    }

    #[test]
    fn host_keys_are_not_actions() {
        for code in [KeyCode::Char('q'), KeyCode::Esc, KeyCode::Char('R'), KeyCode::Char(' ')] {
            assert_eq!(handle_key_event(press(code)), None, "{code:?}");
        }
    }

    #[test]
    fn quit_keys() {
        assert!(should_quit(press(KeyCode::Char('q'))));
        assert!(should_quit(press(KeyCode::Char('Q'))));
        assert!(should_quit(press(KeyCode::Esc)));
        assert!(should_quit(chord('c')));
        assert!(!should_quit(press(KeyCode::Char('c'))));
        assert!(!should_quit(press(KeyCode::Char('x'))));
    }

    #[test]
    fn restart_keys() {
        assert!(should_restart(press(KeyCode::Char('r'))));
        assert!(should_restart(press(KeyCode::Char('R'))));
        assert!(!should_restart(chord('r')));
        assert_eq!(classify(press(KeyCode::Char('r'))), Some(KeyCommand::Restart));
    }

    #[test]
    fn control_chords_do_not_move() {
        for c in ['a', 'd', 's', 'w', 'h', 'q'] {
            assert_eq!(classify(chord(c)), None, "ctrl+{c}");
        }
    }
}

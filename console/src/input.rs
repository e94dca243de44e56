//! Key mapping from terminal events to game commands.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use minecross_core::Direction;

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Command {
    Move(Direction),
    Quit,
}

/// Map a key press to a command, or `None` for keys the game ignores.
pub fn map_key(key: KeyEvent) -> Option<Command> {
    if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
        return Some(Command::Quit);
    }

    match key.code {
        KeyCode::Up | KeyCode::Char('w') | KeyCode::Char('W') => Some(Command::Move(Direction::Up)),
        KeyCode::Down | KeyCode::Char('s') | KeyCode::Char('S') => {
            Some(Command::Move(Direction::Down))
        }
        KeyCode::Left | KeyCode::Char('a') | KeyCode::Char('A') => {
            Some(Command::Move(Direction::Left))
        }
        KeyCode::Right | KeyCode::Char('d') | KeyCode::Char('D') => {
            Some(Command::Move(Direction::Right))
        }

        KeyCode::Char('x')
        | KeyCode::Char('X')
        | KeyCode::Char('q')
        | KeyCode::Char('Q')
        | KeyCode::Esc => Some(Command::Quit),

        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn key(code: KeyCode) -> Option<Command> {
        map_key(KeyEvent::from(code))
    }

    #[test]
    fn arrows_move() {
        assert_eq!(key(KeyCode::Up), Some(Command::Move(Direction::Up)));
        assert_eq!(key(KeyCode::Down), Some(Command::Move(Direction::Down)));
        assert_eq!(key(KeyCode::Left), Some(Command::Move(Direction::Left)));
        assert_eq!(key(KeyCode::Right), Some(Command::Move(Direction::Right)));
    }

    #[test]
    fn wasd_moves() {
        assert_eq!(key(KeyCode::Char('w')), Some(Command::Move(Direction::Up)));
        assert_eq!(key(KeyCode::Char('A')), Some(Command::Move(Direction::Left)));
        assert_eq!(key(KeyCode::Char('s')), Some(Command::Move(Direction::Down)));
        assert_eq!(key(KeyCode::Char('d')), Some(Command::Move(Direction::Right)));
    }

    #[test]
    fn quit_keys() {
        assert_eq!(key(KeyCode::Char('x')), Some(Command::Quit));
        assert_eq!(key(KeyCode::Char('q')), Some(Command::Quit));
        assert_eq!(key(KeyCode::Esc), Some(Command::Quit));
        assert_eq!(
            map_key(KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL)),
            Some(Command::Quit)
        );
    }

    #[test]
    fn other_keys_are_ignored() {
        assert_eq!(key(KeyCode::Char('c')), None);
        assert_eq!(key(KeyCode::Enter), None);
        assert_eq!(key(KeyCode::Char(' ')), None);
    }
}

//! Key bindings.

use crate::games::twenty48::Direction;
use crossterm::event::KeyCode;

/// What a keypress asks for.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    /// Slide the tiles.
    Move(Direction),
    /// Start a new game.
    Restart,
    /// Leave the game.
    Quit,
    /// Unbound key.
    Ignore,
}

/// Maps a key to an action. Arrows, `hjkl` and `wasd` all move.
pub fn action_for(key: KeyCode) -> Action {
    match key {
        KeyCode::Left | KeyCode::Char('h') | KeyCode::Char('a') => Action::Move(Direction::Left),
        KeyCode::Right | KeyCode::Char('l') | KeyCode::Char('d') => Action::Move(Direction::Right),
        KeyCode::Up | KeyCode::Char('k') | KeyCode::Char('w') => Action::Move(Direction::Up),
        KeyCode::Down | KeyCode::Char('j') | KeyCode::Char('s') => Action::Move(Direction::Down),
        KeyCode::Char('r') => Action::Restart,
        KeyCode::Char('q') | KeyCode::Esc => Action::Quit,
        _ => Action::Ignore,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_arrow_and_letter_bindings_agree() {
        assert_eq!(action_for(KeyCode::Left), action_for(KeyCode::Char('h')));
        assert_eq!(action_for(KeyCode::Up), action_for(KeyCode::Char('w')));
        assert_eq!(action_for(KeyCode::Down), Action::Move(Direction::Down));
        assert_eq!(action_for(KeyCode::Char('d')), Action::Move(Direction::Right));
    }

    #[test]
    fn test_control_keys() {
        assert_eq!(action_for(KeyCode::Char('r')), Action::Restart);
        assert_eq!(action_for(KeyCode::Esc), Action::Quit);
        assert_eq!(action_for(KeyCode::Char('x')), Action::Ignore);
        assert_eq!(action_for(KeyCode::Enter), Action::Ignore);
    }
}

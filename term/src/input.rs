use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use sweeper_core::Direction;

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum GameAction {
    Move(Direction),
    Activate,
    ToggleFlag,
    LogCell,
    Quit,
}

/// Maps one key press to a game action. Key releases and unbound keys map to
/// nothing.
pub fn map_key(key: KeyEvent) -> Option<GameAction> {
    use GameAction::*;

    if key.kind == KeyEventKind::Release {
        return None;
    }
    // raw mode swallows the interrupt signal
    if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
        return Some(Quit);
    }

    match key.code {
        KeyCode::Up => Some(Move(Direction::Up)),
        KeyCode::Down => Some(Move(Direction::Down)),
        KeyCode::Left => Some(Move(Direction::Left)),
        KeyCode::Right => Some(Move(Direction::Right)),
        KeyCode::Enter => Some(Activate),
        KeyCode::Char(' ') => Some(ToggleFlag),
        KeyCode::Char('l') => Some(LogCell),
        KeyCode::Esc | KeyCode::Char('q') => Some(Quit),
        _ => None,
    }
}

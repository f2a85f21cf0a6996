//! Key mapping from terminal events to driver actions.

use crate::types::{Direction, LifeAction, WorldAction};
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

/// Direction bound to a key (arrows, WASD, HJKL).
pub fn direction_of(code: KeyCode) -> Option<Direction> {
    match code {
        KeyCode::Left
        | KeyCode::Char('h')
        | KeyCode::Char('H')
        | KeyCode::Char('a')
        | KeyCode::Char('A') => Some(Direction::Left),
        KeyCode::Right
        | KeyCode::Char('l')
        | KeyCode::Char('L')
        | KeyCode::Char('d')
        | KeyCode::Char('D') => Some(Direction::Right),
        KeyCode::Up
        | KeyCode::Char('k')
        | KeyCode::Char('K')
        | KeyCode::Char('w')
        | KeyCode::Char('W') => Some(Direction::Up),
        KeyCode::Down
        | KeyCode::Char('j')
        | KeyCode::Char('J')
        | KeyCode::Char('s')
        | KeyCode::Char('S') => Some(Direction::Down),
        _ => None,
    }
}

/// Map keyboard input to streaming-world actions.
pub fn world_action(key: KeyEvent) -> Option<WorldAction> {
    if let Some(dir) = direction_of(key.code) {
        return Some(WorldAction::Move(dir));
    }
    match key.code {
        KeyCode::Char('r') | KeyCode::Char('R') => Some(WorldAction::Restart),
        KeyCode::Char('p') | KeyCode::Char('P') => Some(WorldAction::Pause),
        _ => None,
    }
}

/// Map keyboard input to bounded-automaton actions.
pub fn life_action(key: KeyEvent) -> Option<LifeAction> {
    if let Some(dir) = direction_of(key.code) {
        return Some(LifeAction::MoveCursor(dir));
    }
    match key.code {
        KeyCode::Char(' ') | KeyCode::Enter => Some(LifeAction::Poke),
        KeyCode::Char('n') | KeyCode::Char('N') => Some(LifeAction::Step),
        KeyCode::Char('p') | KeyCode::Char('P') => Some(LifeAction::Pause),
        KeyCode::Char('r') | KeyCode::Char('R') => Some(LifeAction::Reseed),
        _ => None,
    }
}

/// Check if key should quit the game.
pub fn should_quit(key: KeyEvent) -> bool {
    matches!(key.code, KeyCode::Char('q') | KeyCode::Char('Q') | KeyCode::Esc)
        || (key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL))
}

use macroquad::input::{KeyCode, is_key_pressed};

use crate::game::Direction;

const ARROW_KEYS: [KeyCode; 4] = [KeyCode::Up, KeyCode::Down, KeyCode::Left, KeyCode::Right];

pub fn direction_for_key(key: KeyCode) -> Option<Direction> {
    match key {
        KeyCode::Up => Some(Direction::Up),
        KeyCode::Down => Some(Direction::Down),
        KeyCode::Left => Some(Direction::Left),
        KeyCode::Right => Some(Direction::Right),
        _ => None,
    }
}

/// Arrow keys pressed this frame, as directions.
pub fn pressed_directions() -> impl Iterator<Item = Direction> {
    ARROW_KEYS
        .into_iter()
        .filter(|key| is_key_pressed(*key))
        .filter_map(direction_for_key)
}

pub fn quit_requested() -> bool {
    is_key_pressed(KeyCode::Q)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_arrow_keys_map_to_directions() {
        assert_eq!(direction_for_key(KeyCode::Up), Some(Direction::Up));
        assert_eq!(direction_for_key(KeyCode::Down), Some(Direction::Down));
        assert_eq!(direction_for_key(KeyCode::Left), Some(Direction::Left));
        assert_eq!(direction_for_key(KeyCode::Right), Some(Direction::Right));
    }

    #[test]
    fn test_other_keys_are_ignored() {
        assert_eq!(direction_for_key(KeyCode::W), None);
        assert_eq!(direction_for_key(KeyCode::Space), None);
        assert_eq!(direction_for_key(KeyCode::Enter), None);
    }
}

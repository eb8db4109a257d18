use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

/// Latest-wins keyboard state: every recognized key overwrites the one
/// before it, anything unrecognized is ignored. The recorded direction
/// persists across ticks until overwritten or reset.
pub struct InputCapture {
    last: Option<Direction>,
}

impl InputCapture {
    pub fn new() -> Self {
        InputCapture { last: None }
    }

    pub fn record(&mut self, event: &KeyEvent) {
        if let Some(direction) = map_key(event.code) {
            self.last = Some(direction);
        }
    }

    pub fn last_direction(&self) -> Option<Direction> {
        self.last
    }

    pub fn reset(&mut self) {
        self.last = None;
    }
}

pub fn map_key(code: KeyCode) -> Option<Direction> {
    match code {
        KeyCode::Char('w') | KeyCode::Up => Some(Direction::Up),
        KeyCode::Char('a') | KeyCode::Left => Some(Direction::Left),
        KeyCode::Char('s') | KeyCode::Down => Some(Direction::Down),
        KeyCode::Char('d') | KeyCode::Right => Some(Direction::Right),
        _ => None,
    }
}

pub fn is_ctrl_c(event: &KeyEvent) -> bool {
    matches!(event, KeyEvent { code: KeyCode::Char('c'), modifiers: KeyModifiers::CONTROL })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent { code, modifiers: KeyModifiers::empty() }
    }

    #[test]
    fn arrows_and_wasd_map_to_directions() {
        assert_eq!(map_key(KeyCode::Up), Some(Direction::Up));
        assert_eq!(map_key(KeyCode::Char('a')), Some(Direction::Left));
        assert_eq!(map_key(KeyCode::Down), Some(Direction::Down));
        assert_eq!(map_key(KeyCode::Char('d')), Some(Direction::Right));
    }

    #[test]
    fn unrecognized_keys_leave_the_state_alone() {
        let mut capture = InputCapture::new();
        capture.record(&key(KeyCode::Char('x')));
        assert_eq!(capture.last_direction(), None);

        capture.record(&key(KeyCode::Left));
        capture.record(&key(KeyCode::Enter));
        assert_eq!(capture.last_direction(), Some(Direction::Left));
    }

    #[test]
    fn most_recent_key_wins() {
        let mut capture = InputCapture::new();
        capture.record(&key(KeyCode::Up));
        capture.record(&key(KeyCode::Char('s')));
        assert_eq!(capture.last_direction(), Some(Direction::Down));
    }

    #[test]
    fn reset_clears_the_recorded_direction() {
        let mut capture = InputCapture::new();
        capture.record(&key(KeyCode::Right));
        capture.reset();
        assert_eq!(capture.last_direction(), None);
    }

    #[test]
    fn ctrl_c_is_recognized() {
        let ev = KeyEvent { code: KeyCode::Char('c'), modifiers: KeyModifiers::CONTROL };
        assert!(is_ctrl_c(&ev));
        assert!(!is_ctrl_c(&key(KeyCode::Char('c'))));
    }
}

use super::state::InputState;
use super::types::Key;

/// Keys a frame can react to, reported one at a time by `poll_key`.
///
/// Arrow keys alias to the letter they share a direction with.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub enum GameKey {
    Escape,
    X,
    W,
    S,
    A,
    D,
}

impl GameKey {
    /// Character code: 27 for Escape, otherwise the uppercase letter.
    pub const fn ascii(self) -> u8 {
        match self {
            GameKey::Escape => 27,
            GameKey::X => b'X',
            GameKey::W => b'W',
            GameKey::S => b'S',
            GameKey::A => b'A',
            GameKey::D => b'D',
        }
    }
}

/// Highest priority first. When several listed keys are held, the earliest wins.
pub const KEY_PRECEDENCE: [(Key, GameKey); 10] = [
    (Key::Escape, GameKey::Escape),
    (Key::X, GameKey::X),
    (Key::W, GameKey::W),
    (Key::S, GameKey::S),
    (Key::A, GameKey::A),
    (Key::D, GameKey::D),
    (Key::ArrowUp, GameKey::W),
    (Key::ArrowDown, GameKey::S),
    (Key::ArrowLeft, GameKey::A),
    (Key::ArrowRight, GameKey::D),
];

/// Reports the highest-priority held key, or `None` when none of them is down.
pub fn poll_key(input: &InputState) -> Option<GameKey> {
    KEY_PRECEDENCE
        .iter()
        .find(|(key, _)| input.key_down(*key))
        .map(|(_, game)| *game)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::input::{InputEvent, KeyState};

    fn held(keys: &[Key]) -> InputState {
        let mut s = InputState::default();
        for &key in keys {
            s.apply_event(&InputEvent::Key { key, state: KeyState::Pressed, repeat: false });
        }
        s
    }

    #[test]
    fn nothing_held() {
        assert_eq!(poll_key(&held(&[])), None);
        assert_eq!(poll_key(&held(&[Key::Unknown(62), Key::Unknown(99)])), None);
    }

    #[test]
    fn arrows_alias_letters() {
        assert_eq!(poll_key(&held(&[Key::ArrowUp])), Some(GameKey::W));
        assert_eq!(poll_key(&held(&[Key::ArrowDown])), Some(GameKey::S));
        assert_eq!(poll_key(&held(&[Key::ArrowLeft])), Some(GameKey::A));
        assert_eq!(poll_key(&held(&[Key::ArrowRight])), Some(GameKey::D));
    }

    #[test]
    fn escape_beats_everything() {
        let all: Vec<Key> = KEY_PRECEDENCE.iter().map(|(k, _)| *k).collect();
        assert_eq!(poll_key(&held(&all)), Some(GameKey::Escape));
    }

    #[test]
    fn letters_beat_arrows() {
        assert_eq!(poll_key(&held(&[Key::ArrowUp, Key::D])), Some(GameKey::D));
        assert_eq!(poll_key(&held(&[Key::S, Key::W])), Some(GameKey::W));
        assert_eq!(poll_key(&held(&[Key::A, Key::X])), Some(GameKey::X));
    }

    #[test]
    fn ascii_codes() {
        assert_eq!(GameKey::Escape.ascii(), 27);
        assert_eq!(GameKey::W.ascii(), b'W');
        assert_eq!(GameKey::D.ascii(), 68);
    }
}

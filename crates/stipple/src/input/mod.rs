//! Keyboard input.
//!
//! Public API is platform-agnostic and does not expose winit types.
//! The surface translates platform events into `InputEvent`s and folds them into
//! an `InputState`; `poll_key` reduces that state to the single game key a
//! frame reacts to.

mod keys;
pub(crate) mod platform;
mod state;
mod types;

pub use keys::{poll_key, GameKey, KEY_PRECEDENCE};
pub use state::InputState;
pub use types::{InputEvent, Key, KeyState};

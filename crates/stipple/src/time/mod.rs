//! Time subsystem.
//!
//! - `Clock` answers "seconds since the surface opened"
//! - `FrameClock` measures the clamped delta between presented frames

mod clock;
mod frame_clock;

pub use clock::Clock;
pub use frame_clock::{FrameClock, FrameTime};

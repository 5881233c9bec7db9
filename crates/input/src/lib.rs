//! Frame timing and pointer delta sampling.
//!
//! # Invariants
//! - `FrameClock::tick` never returns a negative delta.
//! - `MouseSampler::sample` never fails; an unavailable pointer reads as
//!   zero motion.

mod clock;
mod mouse;

pub use clock::FrameClock;
pub use mouse::MouseSampler;

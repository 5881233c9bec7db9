//! Renderer-agnostic frame sequencing for the aim trainer.
//!
//! # Invariants
//! - The sequencer only orders device calls; it never mutates scene or
//!   camera state.
//! - Skybox subsets are drawn with depth testing and culling disabled,
//!   before any opaque subset; depth and culling are restored before the
//!   opaque pass.
//! - A failed `begin_frame` skips every draw step but still presents.

mod device;
mod projection;
mod sequencer;
mod trace;

pub use device::{CullMode, RenderDevice, TransformKind};
pub use projection::Projection;
pub use sequencer::FrameSequencer;
pub use trace::{DeviceCall, TraceDevice};

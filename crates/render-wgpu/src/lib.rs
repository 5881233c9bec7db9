//! wgpu implementation of the aim trainer's `RenderDevice`.
//!
//! # Invariants
//! - All frame recording happens between `begin_frame` and `end_frame`;
//!   a failed `begin_frame` leaves no partial frame state behind.
//! - Material and texture bindings are baked into per-subset bind groups
//!   at upload time; the per-draw set_material/set_texture calls carry
//!   the sequencer's ordering but do not rebind GPU state mid-pass.
//! - Depth/cull state maps to one of two pipeline variants: skybox
//!   (depth always passes, no culling) and opaque (depth less, back cull).

mod gpu;
mod shaders;

pub use gpu::{InitError, UploadError, WgpuRenderer};

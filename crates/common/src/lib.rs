//! Shared leaf types for the aim-trainer demo.
//!
//! # Invariants
//! - Handles are plain identifiers; allocation policy belongs to the caller.
//! - The skybox face order is fixed and must match the face-to-texture
//!   mapping used when the skybox was assembled.

mod types;

pub use types::{Color, Material, MeshHandle, SkyboxFace, TextureHandle};

//! Camera, CPU-side geometry, and scene description for the aim trainer.
//!
//! # Invariants
//! - The camera's view matrix is a pure function of its position, yaw,
//!   and pitch; it is only rewritten by `Camera::update`.
//! - Scene data is read-only to the render layer; nothing here touches a
//!   graphics device.
//! - Skybox face `i` carries the texture for `SkyboxFace::ORDER[i]`.

mod camera;
mod geometry;
mod scene;
mod shapes;
mod texture;

pub use camera::Camera;
pub use geometry::{MeshGeometry, SubsetRange, Vertex};
pub use scene::{Scene, SceneMesh, Skybox, SubsetMaterial};
pub use shapes::{skybox_box, target_block};
pub use texture::TextureData;

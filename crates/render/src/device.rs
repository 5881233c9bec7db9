use aimtrainer_common::{Color, Material, MeshHandle, TextureHandle};
use glam::Mat4;
use serde::{Deserialize, Serialize};

/// Which fixed-function transform slot a matrix targets.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum TransformKind {
    World,
    View,
    Projection,
}

/// Face culling state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum CullMode {
    None,
    Back,
}

/// The device/present-target collaborator the frame sequencer drives.
///
/// Implementations decide what the calls mean; the sequencer only
/// guarantees their order. All failures on this surface are frame-local:
/// no method returns an error, and `begin_frame` signals an unusable
/// frame by returning false.
pub trait RenderDevice {
    /// Clear the color and depth buffers.
    fn clear(&mut self, color: Color);

    /// Open the frame's recording context. Returning false makes the
    /// sequencer skip every draw step; present is still issued.
    fn begin_frame(&mut self) -> bool;

    fn set_depth_test(&mut self, enabled: bool);

    fn set_cull_mode(&mut self, mode: CullMode);

    fn set_transform(&mut self, kind: TransformKind, matrix: Mat4);

    fn set_material(&mut self, material: &Material);

    /// Bind a texture for subsequent draws; `None` unbinds.
    fn set_texture(&mut self, texture: Option<TextureHandle>);

    /// Draw one subset of a previously uploaded mesh.
    fn draw_subset(&mut self, mesh: MeshHandle, subset: u32);

    /// Close the frame's recording context.
    fn end_frame(&mut self);

    /// Present the completed frame to the display.
    fn present(&mut self);
}

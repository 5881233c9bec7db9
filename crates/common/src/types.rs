use serde::{Deserialize, Serialize};

/// RGBA color with linear 0..1 channels.
pub type Color = [f32; 4];

/// A handle referencing a mesh uploaded to a render device.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct MeshHandle(pub u64);

/// A handle referencing a texture uploaded to a render device.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct TextureHandle(pub u64);

/// Fixed-function surface material.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Material {
    pub diffuse: Color,
    pub ambient: Color,
}

impl Material {
    /// Build a material the way the demo does for every loaded subset:
    /// the ambient color mirrors the diffuse color, so ambient lighting
    /// keeps surfaces at full brightness.
    pub fn from_diffuse(diffuse: Color) -> Self {
        Self {
            diffuse,
            ambient: diffuse,
        }
    }
}

impl Default for Material {
    fn default() -> Self {
        Self::from_diffuse([0.8, 0.8, 0.8, 1.0])
    }
}

/// One face of the six-sided skybox.
///
/// `ORDER` is both the draw order and the index into the skybox's texture
/// array; changing it would desynchronize faces from their textures.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SkyboxFace {
    PosX,
    NegX,
    PosY,
    NegY,
    PosZ,
    NegZ,
}

impl SkyboxFace {
    /// The fixed face order: +X, -X, +Y, -Y, +Z, -Z.
    pub const ORDER: [SkyboxFace; 6] = [
        SkyboxFace::PosX,
        SkyboxFace::NegX,
        SkyboxFace::PosY,
        SkyboxFace::NegY,
        SkyboxFace::PosZ,
        SkyboxFace::NegZ,
    ];

    /// Position of this face within `ORDER`.
    pub fn index(self) -> usize {
        self as usize
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn material_from_diffuse_mirrors_ambient() {
        let m = Material::from_diffuse([0.9, 0.3, 0.2, 1.0]);
        assert_eq!(m.diffuse, m.ambient);
    }

    #[test]
    fn skybox_face_order_is_stable() {
        for (i, face) in SkyboxFace::ORDER.iter().enumerate() {
            assert_eq!(face.index(), i);
        }
        assert_eq!(SkyboxFace::ORDER[0], SkyboxFace::PosX);
        assert_eq!(SkyboxFace::ORDER[5], SkyboxFace::NegZ);
    }

    #[test]
    fn handles_are_comparable() {
        assert_ne!(MeshHandle(0), MeshHandle(1));
        assert_eq!(TextureHandle(7), TextureHandle(7));
    }
}

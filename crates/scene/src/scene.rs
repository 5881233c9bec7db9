use aimtrainer_common::{Material, MeshHandle, TextureHandle};
use serde::{Deserialize, Serialize};

/// Per-subset binding: one material plus an optional texture.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SubsetMaterial {
    pub material: Material,
    pub texture: Option<TextureHandle>,
}

/// A renderable mesh: an uploaded geometry handle plus the ordered
/// per-subset materials. The render layer draws subset `i` with
/// `subsets[i]` bound.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SceneMesh {
    pub handle: MeshHandle,
    pub subsets: Vec<SubsetMaterial>,
}

/// Six-faced skybox. `faces[i]` is the texture for `SkyboxFace::ORDER[i]`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Skybox {
    pub handle: MeshHandle,
    pub faces: [TextureHandle; 6],
}

/// Everything the frame sequencer consumes: one opaque mesh and one
/// skybox. The sequencer never mutates it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Scene {
    pub mesh: SceneMesh,
    pub skybox: Skybox,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn scene_round_trips_through_json() {
        let scene = Scene {
            mesh: SceneMesh {
                handle: MeshHandle(0),
                subsets: vec![SubsetMaterial {
                    material: Material::default(),
                    texture: Some(TextureHandle(3)),
                }],
            },
            skybox: Skybox {
                handle: MeshHandle(1),
                faces: [10, 11, 12, 13, 14, 15].map(TextureHandle),
            },
        };
        let json = serde_json::to_string(&scene).unwrap();
        let back: Scene = serde_json::from_str(&json).unwrap();
        assert_eq!(scene, back);
    }
}

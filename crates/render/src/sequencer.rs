use crate::device::{CullMode, RenderDevice, TransformKind};
use crate::projection::Projection;
use aimtrainer_common::Color;
use aimtrainer_scene::Scene;
use glam::Mat4;

/// Orders the fixed per-frame passes: clear, skybox (depth and culling
/// off), state restore, transforms, opaque subsets, present.
///
/// The sequence is linear with no branching; the only early exit is a
/// failed `begin_frame`, which falls straight through to present.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FrameSequencer {
    pub clear_color: Color,
    pub projection: Projection,
}

impl Default for FrameSequencer {
    fn default() -> Self {
        Self {
            clear_color: [0.0, 0.0, 0.0, 1.0],
            projection: Projection::default(),
        }
    }
}

impl FrameSequencer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Issue one frame's worth of device calls for `scene` as seen
    /// through `view`. The world transform is never set; the mesh renders
    /// at the origin with identity orientation.
    pub fn render_frame<D: RenderDevice>(&self, device: &mut D, scene: &Scene, view: Mat4) {
        device.clear(self.clear_color);

        if device.begin_frame() {
            // Skybox pass: no depth, no culling, one textured draw per face.
            device.set_depth_test(false);
            device.set_cull_mode(CullMode::None);
            for (face, texture) in scene.skybox.faces.iter().enumerate() {
                device.set_texture(Some(*texture));
                device.draw_subset(scene.skybox.handle, face as u32);
            }

            // Restore state for opaque geometry.
            device.set_depth_test(true);
            device.set_cull_mode(CullMode::Back);

            device.set_transform(TransformKind::Projection, self.projection.matrix());
            device.set_transform(TransformKind::View, view);

            // Opaque pass: one draw per mesh subset, in subset order.
            for (subset, binding) in scene.mesh.subsets.iter().enumerate() {
                device.set_material(&binding.material);
                device.set_texture(binding.texture);
                device.draw_subset(scene.mesh.handle, subset as u32);
            }

            device.end_frame();
        } else {
            tracing::debug!("begin_frame failed, skipping frame");
        }

        device.present();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::trace::{DeviceCall, TraceDevice};
    use aimtrainer_common::{Material, MeshHandle, TextureHandle};
    use aimtrainer_scene::{SceneMesh, Skybox, SubsetMaterial};

    const MESH: MeshHandle = MeshHandle(0);
    const SKYBOX: MeshHandle = MeshHandle(1);

    fn demo_scene() -> Scene {
        Scene {
            mesh: SceneMesh {
                handle: MESH,
                subsets: vec![
                    SubsetMaterial {
                        material: Material::from_diffuse([0.9, 0.3, 0.2, 1.0]),
                        texture: Some(TextureHandle(0)),
                    },
                    SubsetMaterial {
                        material: Material::default(),
                        texture: None,
                    },
                ],
            },
            skybox: Skybox {
                handle: SKYBOX,
                faces: [10, 11, 12, 13, 14, 15].map(TextureHandle),
            },
        }
    }

    fn rendered_trace(fail_begin: bool) -> Vec<DeviceCall> {
        let mut device = TraceDevice::new();
        device.fail_begin = fail_begin;
        FrameSequencer::new().render_frame(&mut device, &demo_scene(), Mat4::IDENTITY);
        device.take_calls()
    }

    fn draw_calls(calls: &[DeviceCall]) -> Vec<(MeshHandle, u32, bool, CullMode)> {
        calls
            .iter()
            .filter_map(|c| match c {
                DeviceCall::DrawSubset {
                    mesh,
                    subset,
                    depth_test,
                    cull,
                } => Some((*mesh, *subset, *depth_test, *cull)),
                _ => None,
            })
            .collect()
    }

    #[test]
    fn skybox_draws_precede_opaque_draws_with_depth_disabled() {
        let calls = rendered_trace(false);
        let draws = draw_calls(&calls);
        assert_eq!(draws.len(), 8);

        let (sky, opaque) = draws.split_at(6);
        for (mesh, _, depth_test, cull) in sky {
            assert_eq!(*mesh, SKYBOX);
            assert!(!depth_test, "skybox drawn with depth test enabled");
            assert_eq!(*cull, CullMode::None);
        }
        for (mesh, _, depth_test, cull) in opaque {
            assert_eq!(*mesh, MESH);
            assert!(depth_test, "opaque subset drawn with depth test disabled");
            assert_eq!(*cull, CullMode::Back);
        }
    }

    #[test]
    fn skybox_faces_bind_textures_in_fixed_order() {
        let calls = rendered_trace(false);
        let mut expected_face = 0u32;
        for window in calls.windows(2) {
            if let [
                DeviceCall::SetTexture {
                    texture: Some(texture),
                },
                DeviceCall::DrawSubset { mesh, subset, .. },
            ] = window
            {
                if *mesh == SKYBOX {
                    assert_eq!(*subset, expected_face);
                    assert_eq!(texture.0, 10 + expected_face as u64);
                    expected_face += 1;
                }
            }
        }
        assert_eq!(expected_face, 6);
    }

    #[test]
    fn clear_is_the_first_call_and_present_the_last() {
        let calls = rendered_trace(false);
        assert!(matches!(calls.first(), Some(DeviceCall::Clear { .. })));
        assert!(matches!(calls.last(), Some(DeviceCall::Present)));
    }

    #[test]
    fn transforms_are_set_between_state_restore_and_opaque_pass() {
        let calls = rendered_trace(false);
        let restore = calls
            .iter()
            .position(|c| matches!(c, DeviceCall::SetDepthTest { enabled: true }))
            .expect("depth test restored");
        let projection = calls
            .iter()
            .position(|c| {
                matches!(
                    c,
                    DeviceCall::SetTransform {
                        kind: TransformKind::Projection,
                        ..
                    }
                )
            })
            .expect("projection set");
        let view = calls
            .iter()
            .position(|c| {
                matches!(
                    c,
                    DeviceCall::SetTransform {
                        kind: TransformKind::View,
                        ..
                    }
                )
            })
            .expect("view set");
        let first_opaque = calls
            .iter()
            .position(|c| matches!(c, DeviceCall::DrawSubset { mesh, .. } if *mesh == MESH))
            .expect("opaque draw");

        assert!(restore < projection);
        assert!(projection < view);
        assert!(view < first_opaque);

        // The world transform is never touched.
        assert!(!calls.iter().any(|c| matches!(
            c,
            DeviceCall::SetTransform {
                kind: TransformKind::World,
                ..
            }
        )));
    }

    #[test]
    fn opaque_subsets_carry_their_materials_and_textures() {
        let calls = rendered_trace(false);
        let scene = demo_scene();
        let mut subset = 0usize;
        for window in calls.windows(3) {
            if let [
                DeviceCall::SetMaterial { material },
                DeviceCall::SetTexture { texture },
                DeviceCall::DrawSubset { mesh, .. },
            ] = window
            {
                if *mesh == MESH {
                    assert_eq!(*material, scene.mesh.subsets[subset].material);
                    assert_eq!(*texture, scene.mesh.subsets[subset].texture);
                    subset += 1;
                }
            }
        }
        assert_eq!(subset, scene.mesh.subsets.len());
    }

    #[test]
    fn failed_begin_frame_skips_draws_but_still_presents() {
        let calls = rendered_trace(true);
        assert!(draw_calls(&calls).is_empty());
        assert!(!calls.iter().any(|c| matches!(c, DeviceCall::EndFrame)));
        assert!(matches!(calls.first(), Some(DeviceCall::Clear { .. })));
        assert!(matches!(calls.last(), Some(DeviceCall::Present)));
    }
}

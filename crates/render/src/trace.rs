use crate::device::{CullMode, RenderDevice, TransformKind};
use aimtrainer_common::{Color, Material, MeshHandle, TextureHandle};
use glam::Mat4;
use serde::Serialize;

/// One recorded device call. Draw records also capture the depth/cull
/// state in effect when the draw was issued, so ordering invariants can
/// be checked directly from the log.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub enum DeviceCall {
    Clear {
        color: Color,
    },
    BeginFrame,
    SetDepthTest {
        enabled: bool,
    },
    SetCullMode {
        mode: CullMode,
    },
    SetTransform {
        kind: TransformKind,
        matrix: Mat4,
    },
    SetMaterial {
        material: Material,
    },
    SetTexture {
        texture: Option<TextureHandle>,
    },
    DrawSubset {
        mesh: MeshHandle,
        subset: u32,
        depth_test: bool,
        cull: CullMode,
    },
    EndFrame,
    Present,
}

/// A `RenderDevice` that records its call stream.
///
/// Stands in for a GPU device in tests and headless runs. Starts with
/// depth testing and back-face culling enabled, matching a freshly
/// initialized device.
#[derive(Debug)]
pub struct TraceDevice {
    calls: Vec<DeviceCall>,
    depth_test: bool,
    cull: CullMode,
    /// When set, `begin_frame` reports failure; useful for exercising
    /// the frame-skip path.
    pub fail_begin: bool,
}

impl Default for TraceDevice {
    fn default() -> Self {
        Self {
            calls: Vec::new(),
            depth_test: true,
            cull: CullMode::Back,
            fail_begin: false,
        }
    }
}

impl TraceDevice {
    pub fn new() -> Self {
        Self::default()
    }

    /// The calls recorded so far.
    pub fn calls(&self) -> &[DeviceCall] {
        &self.calls
    }

    /// Drain the recorded calls.
    pub fn take_calls(&mut self) -> Vec<DeviceCall> {
        std::mem::take(&mut self.calls)
    }
}

impl RenderDevice for TraceDevice {
    fn clear(&mut self, color: Color) {
        self.calls.push(DeviceCall::Clear { color });
    }

    fn begin_frame(&mut self) -> bool {
        self.calls.push(DeviceCall::BeginFrame);
        !self.fail_begin
    }

    fn set_depth_test(&mut self, enabled: bool) {
        self.depth_test = enabled;
        self.calls.push(DeviceCall::SetDepthTest { enabled });
    }

    fn set_cull_mode(&mut self, mode: CullMode) {
        self.cull = mode;
        self.calls.push(DeviceCall::SetCullMode { mode });
    }

    fn set_transform(&mut self, kind: TransformKind, matrix: Mat4) {
        self.calls.push(DeviceCall::SetTransform { kind, matrix });
    }

    fn set_material(&mut self, material: &Material) {
        self.calls.push(DeviceCall::SetMaterial {
            material: *material,
        });
    }

    fn set_texture(&mut self, texture: Option<TextureHandle>) {
        self.calls.push(DeviceCall::SetTexture { texture });
    }

    fn draw_subset(&mut self, mesh: MeshHandle, subset: u32) {
        self.calls.push(DeviceCall::DrawSubset {
            mesh,
            subset,
            depth_test: self.depth_test,
            cull: self.cull,
        });
    }

    fn end_frame(&mut self) {
        self.calls.push(DeviceCall::EndFrame);
    }

    fn present(&mut self) {
        self.calls.push(DeviceCall::Present);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn draws_snapshot_the_current_state() {
        let mut device = TraceDevice::new();
        device.set_depth_test(false);
        device.set_cull_mode(CullMode::None);
        device.draw_subset(MeshHandle(1), 0);
        device.set_depth_test(true);
        device.draw_subset(MeshHandle(0), 0);

        let draws: Vec<_> = device
            .calls()
            .iter()
            .filter_map(|c| match c {
                DeviceCall::DrawSubset {
                    depth_test, cull, ..
                } => Some((*depth_test, *cull)),
                _ => None,
            })
            .collect();
        assert_eq!(draws, vec![(false, CullMode::None), (true, CullMode::None)]);
    }

    #[test]
    fn take_calls_drains_the_log() {
        let mut device = TraceDevice::new();
        device.present();
        assert_eq!(device.take_calls().len(), 1);
        assert!(device.calls().is_empty());
    }

    #[test]
    fn fail_begin_reports_failure_but_records_the_attempt() {
        let mut device = TraceDevice::new();
        device.fail_begin = true;
        assert!(!device.begin_frame());
        assert_eq!(device.calls(), &[DeviceCall::BeginFrame]);
    }
}

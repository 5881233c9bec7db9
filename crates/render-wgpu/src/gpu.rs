use crate::shaders;
use aimtrainer_common::{Color, Material, MeshHandle, TextureHandle};
use aimtrainer_render::{CullMode, RenderDevice, TransformKind};
use aimtrainer_scene::{MeshGeometry, SubsetMaterial, TextureData, Vertex};
use bytemuck::{Pod, Zeroable};
use glam::Mat4;
use std::collections::BTreeMap;
use std::ops::Range;
use wgpu::util::DeviceExt;

#[repr(C)]
#[derive(Copy, Clone, Pod, Zeroable)]
struct Uniforms {
    view_proj: [[f32; 4]; 4],
}

#[repr(C)]
#[derive(Copy, Clone, Pod, Zeroable)]
struct MaterialUniform {
    diffuse: [f32; 4],
    ambient: [f32; 4],
}

impl From<&Material> for MaterialUniform {
    fn from(material: &Material) -> Self {
        Self {
            diffuse: material.diffuse,
            ambient: material.ambient,
        }
    }
}

/// Errors from one-time renderer setup.
#[derive(Debug, thiserror::Error)]
pub enum InitError {
    #[error("failed to create rendering surface: {0}")]
    CreateSurface(#[from] wgpu::CreateSurfaceError),
    #[error("no suitable graphics adapter found")]
    NoAdapter,
    #[error("failed to create graphics device: {0}")]
    RequestDevice(#[from] wgpu::RequestDeviceError),
}

/// Errors from mesh/texture uploads.
#[derive(Debug, thiserror::Error)]
pub enum UploadError {
    #[error("texture dimensions must be non-zero")]
    EmptyTexture,
    #[error("texture pixel data is {actual} bytes, expected {expected}")]
    TexturePixelMismatch { expected: usize, actual: usize },
    #[error("mesh has {subsets} subsets but {materials} materials were supplied")]
    MaterialCountMismatch { subsets: usize, materials: usize },
    #[error("subset {subset} ends at index {end} but the mesh has {index_count} indices")]
    SubsetOutOfRange {
        subset: usize,
        end: u32,
        index_count: u32,
    },
    #[error("texture {0:?} has not been uploaded")]
    UnknownTexture(TextureHandle),
}

/// Which pipeline variant a draw uses. Depth testing selects the
/// variant; culling is bundled with it (skybox: none, opaque: back).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum PipelineKind {
    Skybox,
    Opaque,
}

fn pipeline_kind(depth_test: bool) -> PipelineKind {
    if depth_test {
        PipelineKind::Opaque
    } else {
        PipelineKind::Skybox
    }
}

fn validate_texture(data: &TextureData) -> Result<(), UploadError> {
    if data.width == 0 || data.height == 0 {
        return Err(UploadError::EmptyTexture);
    }
    if data.pixels.len() != data.expected_len() {
        return Err(UploadError::TexturePixelMismatch {
            expected: data.expected_len(),
            actual: data.pixels.len(),
        });
    }
    Ok(())
}

fn validate_mesh(geometry: &MeshGeometry, material_count: usize) -> Result<(), UploadError> {
    if geometry.subset_count() != material_count {
        return Err(UploadError::MaterialCountMismatch {
            subsets: geometry.subset_count(),
            materials: material_count,
        });
    }
    let index_count = geometry.indices.len() as u32;
    for (subset, range) in geometry.subsets.iter().enumerate() {
        if range.end() > index_count {
            return Err(UploadError::SubsetOutOfRange {
                subset,
                end: range.end(),
                index_count,
            });
        }
    }
    Ok(())
}

struct GpuSubset {
    indices: Range<u32>,
    bind_group: wgpu::BindGroup,
}

struct GpuMesh {
    vertex_buffer: wgpu::Buffer,
    index_buffer: wgpu::Buffer,
    subsets: Vec<GpuSubset>,
}

struct FrameState {
    surface_texture: Option<wgpu::SurfaceTexture>,
    // Kept alive for the duration of the pass that renders into it.
    _view: wgpu::TextureView,
    encoder: Option<wgpu::CommandEncoder>,
    pass: Option<wgpu::RenderPass<'static>>,
}

/// wgpu-backed `RenderDevice`.
///
/// Owns the surface, device, and queue; meshes and textures are uploaded
/// under caller-chosen handles before the render loop starts.
pub struct WgpuRenderer {
    device: wgpu::Device,
    queue: wgpu::Queue,
    surface: wgpu::Surface<'static>,
    config: wgpu::SurfaceConfiguration,
    skybox_pipeline: wgpu::RenderPipeline,
    opaque_pipeline: wgpu::RenderPipeline,
    uniform_buffer: wgpu::Buffer,
    uniform_bind_group: wgpu::BindGroup,
    subset_layout: wgpu::BindGroupLayout,
    sampler: wgpu::Sampler,
    white_texture: wgpu::TextureView,
    depth_texture: wgpu::TextureView,
    meshes: BTreeMap<MeshHandle, GpuMesh>,
    textures: BTreeMap<TextureHandle, wgpu::TextureView>,
    clear_color: Color,
    view: Mat4,
    projection: Mat4,
    depth_test: bool,
    frame: Option<FrameState>,
}

impl WgpuRenderer {
    pub fn new(
        target: impl Into<wgpu::SurfaceTarget<'static>>,
        width: u32,
        height: u32,
    ) -> Result<Self, InitError> {
        let instance = wgpu::Instance::new(&wgpu::InstanceDescriptor {
            backends: wgpu::Backends::all(),
            ..Default::default()
        });
        let surface = instance.create_surface(target)?;

        let adapter = pollster::block_on(instance.request_adapter(&wgpu::RequestAdapterOptions {
            power_preference: wgpu::PowerPreference::HighPerformance,
            compatible_surface: Some(&surface),
            force_fallback_adapter: false,
        }))
        .ok_or(InitError::NoAdapter)?;

        let (device, queue) = pollster::block_on(adapter.request_device(
            &wgpu::DeviceDescriptor {
                label: Some("aimtrainer_device"),
                required_features: wgpu::Features::empty(),
                required_limits: wgpu::Limits::default(),
                memory_hints: Default::default(),
            },
            None,
        ))?;

        let surface_caps = surface.get_capabilities(&adapter);
        let surface_format = surface_caps
            .formats
            .iter()
            .find(|f| f.is_srgb())
            .copied()
            .unwrap_or(surface_caps.formats[0]);

        let config = wgpu::SurfaceConfiguration {
            usage: wgpu::TextureUsages::RENDER_ATTACHMENT,
            format: surface_format,
            width: width.max(1),
            height: height.max(1),
            present_mode: wgpu::PresentMode::AutoVsync,
            alpha_mode: surface_caps.alpha_modes[0],
            view_formats: vec![],
            desired_maximum_frame_latency: 2,
        };
        surface.configure(&device, &config);

        let uniform_buffer = device.create_buffer_init(&wgpu::util::BufferInitDescriptor {
            label: Some("uniform_buffer"),
            contents: bytemuck::bytes_of(&Uniforms {
                view_proj: Mat4::IDENTITY.to_cols_array_2d(),
            }),
            usage: wgpu::BufferUsages::UNIFORM | wgpu::BufferUsages::COPY_DST,
        });

        let uniform_layout = device.create_bind_group_layout(&wgpu::BindGroupLayoutDescriptor {
            label: Some("uniform_bind_group_layout"),
            entries: &[wgpu::BindGroupLayoutEntry {
                binding: 0,
                visibility: wgpu::ShaderStages::VERTEX,
                ty: wgpu::BindingType::Buffer {
                    ty: wgpu::BufferBindingType::Uniform,
                    has_dynamic_offset: false,
                    min_binding_size: None,
                },
                count: None,
            }],
        });

        let uniform_bind_group = device.create_bind_group(&wgpu::BindGroupDescriptor {
            label: Some("uniform_bind_group"),
            layout: &uniform_layout,
            entries: &[wgpu::BindGroupEntry {
                binding: 0,
                resource: uniform_buffer.as_entire_binding(),
            }],
        });

        let subset_layout = device.create_bind_group_layout(&wgpu::BindGroupLayoutDescriptor {
            label: Some("subset_bind_group_layout"),
            entries: &[
                wgpu::BindGroupLayoutEntry {
                    binding: 0,
                    visibility: wgpu::ShaderStages::FRAGMENT,
                    ty: wgpu::BindingType::Buffer {
                        ty: wgpu::BufferBindingType::Uniform,
                        has_dynamic_offset: false,
                        min_binding_size: None,
                    },
                    count: None,
                },
                wgpu::BindGroupLayoutEntry {
                    binding: 1,
                    visibility: wgpu::ShaderStages::FRAGMENT,
                    ty: wgpu::BindingType::Texture {
                        sample_type: wgpu::TextureSampleType::Float { filterable: true },
                        view_dimension: wgpu::TextureViewDimension::D2,
                        multisampled: false,
                    },
                    count: None,
                },
                wgpu::BindGroupLayoutEntry {
                    binding: 2,
                    visibility: wgpu::ShaderStages::FRAGMENT,
                    ty: wgpu::BindingType::Sampler(wgpu::SamplerBindingType::Filtering),
                    count: None,
                },
            ],
        });

        let pipeline_layout = device.create_pipeline_layout(&wgpu::PipelineLayoutDescriptor {
            label: Some("pipeline_layout"),
            bind_group_layouts: &[&uniform_layout, &subset_layout],
            push_constant_ranges: &[],
        });

        let vertex_layout = wgpu::VertexBufferLayout {
            array_stride: std::mem::size_of::<Vertex>() as u64,
            step_mode: wgpu::VertexStepMode::Vertex,
            attributes: &wgpu::vertex_attr_array![
                0 => Float32x3,
                1 => Float32x3,
                2 => Float32x2,
            ],
        };

        let opaque_shader = device.create_shader_module(wgpu::ShaderModuleDescriptor {
            label: Some("scene_shader"),
            source: wgpu::ShaderSource::Wgsl(shaders::SCENE_SHADER.into()),
        });

        let opaque_pipeline = device.create_render_pipeline(&wgpu::RenderPipelineDescriptor {
            label: Some("opaque_pipeline"),
            layout: Some(&pipeline_layout),
            vertex: wgpu::VertexState {
                module: &opaque_shader,
                entry_point: Some("vs_main"),
                compilation_options: Default::default(),
                buffers: &[vertex_layout.clone()],
            },
            fragment: Some(wgpu::FragmentState {
                module: &opaque_shader,
                entry_point: Some("fs_main"),
                compilation_options: Default::default(),
                targets: &[Some(wgpu::ColorTargetState {
                    format: surface_format,
                    blend: Some(wgpu::BlendState::REPLACE),
                    write_mask: wgpu::ColorWrites::ALL,
                })],
            }),
            primitive: wgpu::PrimitiveState {
                topology: wgpu::PrimitiveTopology::TriangleList,
                cull_mode: Some(wgpu::Face::Back),
                ..Default::default()
            },
            depth_stencil: Some(wgpu::DepthStencilState {
                format: wgpu::TextureFormat::Depth32Float,
                depth_write_enabled: true,
                depth_compare: wgpu::CompareFunction::Less,
                stencil: Default::default(),
                bias: Default::default(),
            }),
            multisample: Default::default(),
            multiview: None,
            cache: None,
        });

        let skybox_shader = device.create_shader_module(wgpu::ShaderModuleDescriptor {
            label: Some("skybox_shader"),
            source: wgpu::ShaderSource::Wgsl(shaders::SKYBOX_SHADER.into()),
        });

        let skybox_pipeline = device.create_render_pipeline(&wgpu::RenderPipelineDescriptor {
            label: Some("skybox_pipeline"),
            layout: Some(&pipeline_layout),
            vertex: wgpu::VertexState {
                module: &skybox_shader,
                entry_point: Some("vs_sky"),
                compilation_options: Default::default(),
                buffers: &[vertex_layout],
            },
            fragment: Some(wgpu::FragmentState {
                module: &skybox_shader,
                entry_point: Some("fs_sky"),
                compilation_options: Default::default(),
                targets: &[Some(wgpu::ColorTargetState {
                    format: surface_format,
                    blend: Some(wgpu::BlendState::REPLACE),
                    write_mask: wgpu::ColorWrites::ALL,
                })],
            }),
            primitive: wgpu::PrimitiveState {
                topology: wgpu::PrimitiveTopology::TriangleList,
                cull_mode: None,
                ..Default::default()
            },
            depth_stencil: Some(wgpu::DepthStencilState {
                format: wgpu::TextureFormat::Depth32Float,
                depth_write_enabled: false,
                depth_compare: wgpu::CompareFunction::Always,
                stencil: Default::default(),
                bias: Default::default(),
            }),
            multisample: Default::default(),
            multiview: None,
            cache: None,
        });

        let sampler = device.create_sampler(&wgpu::SamplerDescriptor {
            label: Some("color_sampler"),
            address_mode_u: wgpu::AddressMode::Repeat,
            address_mode_v: wgpu::AddressMode::Repeat,
            mag_filter: wgpu::FilterMode::Linear,
            min_filter: wgpu::FilterMode::Linear,
            ..Default::default()
        });

        let white_texture = Self::create_color_texture(
            &device,
            &queue,
            &TextureData::solid(1, 1, [255, 255, 255, 255]),
            "white_texture",
        );

        let depth_texture = Self::create_depth_texture(&device, config.width, config.height);

        tracing::info!(
            backend = adapter.get_info().backend.to_str(),
            "renderer initialized"
        );

        Ok(Self {
            device,
            queue,
            surface,
            config,
            skybox_pipeline,
            opaque_pipeline,
            uniform_buffer,
            uniform_bind_group,
            subset_layout,
            sampler,
            white_texture,
            depth_texture,
            meshes: BTreeMap::new(),
            textures: BTreeMap::new(),
            clear_color: [0.0, 0.0, 0.0, 1.0],
            view: Mat4::IDENTITY,
            projection: Mat4::IDENTITY,
            depth_test: true,
            frame: None,
        })
    }

    /// Upload RGBA8 texture data under the given handle. Re-uploading a
    /// handle replaces its contents.
    pub fn upload_texture(
        &mut self,
        handle: TextureHandle,
        data: &TextureData,
    ) -> Result<(), UploadError> {
        validate_texture(data)?;
        let view = Self::create_color_texture(&self.device, &self.queue, data, "scene_texture");
        self.textures.insert(handle, view);
        Ok(())
    }

    /// Upload geometry and its per-subset materials under the given mesh
    /// handle. Referenced textures must already be uploaded; untextured
    /// subsets sample an all-white placeholder.
    pub fn upload_mesh(
        &mut self,
        handle: MeshHandle,
        geometry: &MeshGeometry,
        materials: &[SubsetMaterial],
    ) -> Result<(), UploadError> {
        validate_mesh(geometry, materials.len())?;

        let vertex_buffer = self
            .device
            .create_buffer_init(&wgpu::util::BufferInitDescriptor {
                label: Some("mesh_vertex_buffer"),
                contents: bytemuck::cast_slice(&geometry.vertices),
                usage: wgpu::BufferUsages::VERTEX,
            });
        let index_buffer = self
            .device
            .create_buffer_init(&wgpu::util::BufferInitDescriptor {
                label: Some("mesh_index_buffer"),
                contents: bytemuck::cast_slice(&geometry.indices),
                usage: wgpu::BufferUsages::INDEX,
            });

        let mut subsets = Vec::with_capacity(materials.len());
        for (range, binding) in geometry.subsets.iter().zip(materials) {
            let texture_view = match binding.texture {
                Some(texture) => self
                    .textures
                    .get(&texture)
                    .ok_or(UploadError::UnknownTexture(texture))?,
                None => &self.white_texture,
            };

            let material_buffer =
                self.device
                    .create_buffer_init(&wgpu::util::BufferInitDescriptor {
                        label: Some("subset_material_buffer"),
                        contents: bytemuck::bytes_of(&MaterialUniform::from(&binding.material)),
                        usage: wgpu::BufferUsages::UNIFORM,
                    });

            let bind_group = self.device.create_bind_group(&wgpu::BindGroupDescriptor {
                label: Some("subset_bind_group"),
                layout: &self.subset_layout,
                entries: &[
                    wgpu::BindGroupEntry {
                        binding: 0,
                        resource: material_buffer.as_entire_binding(),
                    },
                    wgpu::BindGroupEntry {
                        binding: 1,
                        resource: wgpu::BindingResource::TextureView(texture_view),
                    },
                    wgpu::BindGroupEntry {
                        binding: 2,
                        resource: wgpu::BindingResource::Sampler(&self.sampler),
                    },
                ],
            });

            subsets.push(GpuSubset {
                indices: range.first_index..range.end(),
                bind_group,
            });
        }

        self.meshes.insert(
            handle,
            GpuMesh {
                vertex_buffer,
                index_buffer,
                subsets,
            },
        );
        Ok(())
    }

    /// Reconfigure the surface and depth buffer for a new window size.
    /// Must not be called while a frame is open.
    pub fn resize(&mut self, width: u32, height: u32) {
        self.config.width = width.max(1);
        self.config.height = height.max(1);
        self.surface.configure(&self.device, &self.config);
        self.depth_texture =
            Self::create_depth_texture(&self.device, self.config.width, self.config.height);
    }

    fn create_color_texture(
        device: &wgpu::Device,
        queue: &wgpu::Queue,
        data: &TextureData,
        label: &str,
    ) -> wgpu::TextureView {
        let texture = device.create_texture(&wgpu::TextureDescriptor {
            label: Some(label),
            size: wgpu::Extent3d {
                width: data.width,
                height: data.height,
                depth_or_array_layers: 1,
            },
            mip_level_count: 1,
            sample_count: 1,
            dimension: wgpu::TextureDimension::D2,
            format: wgpu::TextureFormat::Rgba8UnormSrgb,
            usage: wgpu::TextureUsages::TEXTURE_BINDING | wgpu::TextureUsages::COPY_DST,
            view_formats: &[],
        });
        queue.write_texture(
            wgpu::TexelCopyTextureInfo {
                texture: &texture,
                mip_level: 0,
                origin: wgpu::Origin3d::ZERO,
                aspect: wgpu::TextureAspect::All,
            },
            &data.pixels,
            wgpu::TexelCopyBufferLayout {
                offset: 0,
                bytes_per_row: Some(data.width * 4),
                rows_per_image: Some(data.height),
            },
            wgpu::Extent3d {
                width: data.width,
                height: data.height,
                depth_or_array_layers: 1,
            },
        );
        texture.create_view(&Default::default())
    }

    fn create_depth_texture(device: &wgpu::Device, width: u32, height: u32) -> wgpu::TextureView {
        let texture = device.create_texture(&wgpu::TextureDescriptor {
            label: Some("depth_texture"),
            size: wgpu::Extent3d {
                width: width.max(1),
                height: height.max(1),
                depth_or_array_layers: 1,
            },
            mip_level_count: 1,
            sample_count: 1,
            dimension: wgpu::TextureDimension::D2,
            format: wgpu::TextureFormat::Depth32Float,
            usage: wgpu::TextureUsages::RENDER_ATTACHMENT,
            view_formats: &[],
        });
        texture.create_view(&Default::default())
    }
}

impl RenderDevice for WgpuRenderer {
    fn clear(&mut self, color: Color) {
        // Applied as the pass load op when the frame opens.
        self.clear_color = color;
    }

    fn begin_frame(&mut self) -> bool {
        let surface_texture = match self.surface.get_current_texture() {
            Ok(texture) => texture,
            Err(wgpu::SurfaceError::Lost | wgpu::SurfaceError::Outdated) => {
                tracing::debug!("surface lost, reconfiguring");
                self.surface.configure(&self.device, &self.config);
                return false;
            }
            Err(e) => {
                tracing::debug!("surface unavailable: {e}");
                return false;
            }
        };

        let view = surface_texture
            .texture
            .create_view(&wgpu::TextureViewDescriptor::default());
        let mut encoder = self
            .device
            .create_command_encoder(&wgpu::CommandEncoderDescriptor {
                label: Some("frame_encoder"),
            });

        let pass = encoder
            .begin_render_pass(&wgpu::RenderPassDescriptor {
                label: Some("frame_pass"),
                color_attachments: &[Some(wgpu::RenderPassColorAttachment {
                    view: &view,
                    resolve_target: None,
                    ops: wgpu::Operations {
                        load: wgpu::LoadOp::Clear(wgpu::Color {
                            r: self.clear_color[0] as f64,
                            g: self.clear_color[1] as f64,
                            b: self.clear_color[2] as f64,
                            a: self.clear_color[3] as f64,
                        }),
                        store: wgpu::StoreOp::Store,
                    },
                })],
                depth_stencil_attachment: Some(wgpu::RenderPassDepthStencilAttachment {
                    view: &self.depth_texture,
                    depth_ops: Some(wgpu::Operations {
                        load: wgpu::LoadOp::Clear(1.0),
                        store: wgpu::StoreOp::Store,
                    }),
                    stencil_ops: None,
                }),
                ..Default::default()
            })
            .forget_lifetime();

        self.frame = Some(FrameState {
            surface_texture: Some(surface_texture),
            _view: view,
            encoder: Some(encoder),
            pass: Some(pass),
        });
        true
    }

    fn set_depth_test(&mut self, enabled: bool) {
        self.depth_test = enabled;
    }

    fn set_cull_mode(&mut self, mode: CullMode) {
        // Culling is bundled with the pipeline variant selected by the
        // depth-test state.
        tracing::trace!(?mode, "cull mode follows the active pipeline variant");
    }

    fn set_transform(&mut self, kind: TransformKind, matrix: Mat4) {
        match kind {
            TransformKind::View => self.view = matrix,
            TransformKind::Projection => self.projection = matrix,
            // The demo never moves the mesh; world stays identity.
            TransformKind::World => {}
        }
    }

    fn set_material(&mut self, material: &Material) {
        // Resolved at upload time into the subset bind group.
        tracing::trace!(?material, "material bound");
    }

    fn set_texture(&mut self, texture: Option<TextureHandle>) {
        // Resolved at upload time into the subset bind group.
        tracing::trace!(?texture, "texture bound");
    }

    fn draw_subset(&mut self, mesh: MeshHandle, subset: u32) {
        let Some(frame) = self.frame.as_mut() else {
            return;
        };
        let Some(pass) = frame.pass.as_mut() else {
            return;
        };
        let Some(gpu_mesh) = self.meshes.get(&mesh) else {
            tracing::warn!(?mesh, "draw_subset on unknown mesh");
            return;
        };
        let Some(gpu_subset) = gpu_mesh.subsets.get(subset as usize) else {
            tracing::warn!(?mesh, subset, "draw_subset out of range");
            return;
        };

        let pipeline = match pipeline_kind(self.depth_test) {
            PipelineKind::Skybox => &self.skybox_pipeline,
            PipelineKind::Opaque => &self.opaque_pipeline,
        };
        pass.set_pipeline(pipeline);
        pass.set_bind_group(0, &self.uniform_bind_group, &[]);
        pass.set_bind_group(1, &gpu_subset.bind_group, &[]);
        pass.set_vertex_buffer(0, gpu_mesh.vertex_buffer.slice(..));
        pass.set_index_buffer(gpu_mesh.index_buffer.slice(..), wgpu::IndexFormat::Uint32);
        pass.draw_indexed(gpu_subset.indices.clone(), 0, 0..1);
    }

    fn end_frame(&mut self) {
        let Some(frame) = self.frame.as_mut() else {
            return;
        };
        // The pass must be closed before the encoder can finish.
        frame.pass.take();
        if let Some(encoder) = frame.encoder.take() {
            let uniforms = Uniforms {
                view_proj: (self.projection * self.view).to_cols_array_2d(),
            };
            self.queue
                .write_buffer(&self.uniform_buffer, 0, bytemuck::bytes_of(&uniforms));
            self.queue.submit(std::iter::once(encoder.finish()));
        }
    }

    fn present(&mut self) {
        if let Some(frame) = self.frame.take() {
            // Close any still-open recording before the surface texture
            // goes away (the skipped-frame path never opens one).
            drop(frame.pass);
            drop(frame.encoder);
            if let Some(texture) = frame.surface_texture {
                texture.present();
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use aimtrainer_scene::{skybox_box, target_block};

    #[test]
    fn depth_test_selects_the_pipeline_variant() {
        assert_eq!(pipeline_kind(false), PipelineKind::Skybox);
        assert_eq!(pipeline_kind(true), PipelineKind::Opaque);
    }

    #[test]
    fn texture_validation_rejects_bad_data() {
        assert!(matches!(
            validate_texture(&TextureData {
                width: 0,
                height: 4,
                pixels: vec![],
            }),
            Err(UploadError::EmptyTexture)
        ));
        assert!(matches!(
            validate_texture(&TextureData {
                width: 2,
                height: 2,
                pixels: vec![0; 15],
            }),
            Err(UploadError::TexturePixelMismatch { expected: 16, .. })
        ));
        assert!(validate_texture(&TextureData::solid(2, 2, [0, 0, 0, 255])).is_ok());
    }

    #[test]
    fn mesh_validation_checks_materials_and_bounds() {
        let skybox = skybox_box(10.0);
        assert!(validate_mesh(&skybox, 6).is_ok());
        assert!(matches!(
            validate_mesh(&skybox, 5),
            Err(UploadError::MaterialCountMismatch {
                subsets: 6,
                materials: 5,
            })
        ));

        let mut broken = target_block(1.0);
        broken.subsets[0].index_count += 1;
        assert!(matches!(
            validate_mesh(&broken, 1),
            Err(UploadError::SubsetOutOfRange { subset: 0, .. })
        ));
    }
}

use aimtrainer_common::{Material, MeshHandle, TextureHandle};
use aimtrainer_input::{FrameClock, MouseSampler};
use aimtrainer_render::FrameSequencer;
use aimtrainer_render_wgpu::WgpuRenderer;
use aimtrainer_scene::{
    Camera, Scene, SceneMesh, Skybox, SubsetMaterial, TextureData, skybox_box, target_block,
};
use anyhow::Result;
use clap::Parser;
use glam::{Vec2, Vec3};
use std::sync::Arc;
use tracing_subscriber::EnvFilter;
use winit::application::ApplicationHandler;
use winit::dpi::PhysicalSize;
use winit::event::WindowEvent;
use winit::event_loop::{ActiveEventLoop, ControlFlow, EventLoop};
use winit::window::{Window, WindowId};

const TARGET_MESH: MeshHandle = MeshHandle(0);
const SKYBOX_MESH: MeshHandle = MeshHandle(1);
const TARGET_TEXTURE: TextureHandle = TextureHandle(0);

#[derive(Parser)]
#[command(name = "aimtrainer-desktop", about = "Aim trainer desktop demo")]
struct Cli {
    /// Enable verbose logging
    #[arg(short, long)]
    verbose: bool,

    /// Mouse sensitivity in radians per pixel
    #[arg(long, default_value = "0.005")]
    sensitivity: f32,
}

/// Per-frame state owned by the render loop; no globals.
struct AppState {
    camera: Camera,
    clock: FrameClock,
    sampler: MouseSampler,
    sequencer: FrameSequencer,
    scene: Option<Scene>,
    cursor: Option<Vec2>,
    sensitivity: f32,
    frames: u32,
    elapsed: f32,
}

impl AppState {
    fn new(sensitivity: f32) -> Self {
        let mut camera = Camera::new();
        camera.look_at(Vec3::new(0.0, 3.0, -5.0), Vec3::ZERO, Vec3::Y);
        Self {
            camera,
            clock: FrameClock::new(),
            sampler: MouseSampler::new(),
            sequencer: FrameSequencer::new(),
            scene: None,
            cursor: None,
            sensitivity,
            frames: 0,
            elapsed: 0.0,
        }
    }
}

/// Build the demo scene: a checkered target block and a gradient skybox.
/// Returns the scene description after uploading everything it references.
fn build_scene(renderer: &mut WgpuRenderer) -> Result<Scene> {
    renderer.upload_texture(
        TARGET_TEXTURE,
        &TextureData::checkerboard(64, 8, [230, 90, 60, 255], [240, 220, 200, 255]),
    )?;

    // One gradient per face; the side faces share a horizon, +Y is open
    // sky and -Y is ground. Order matches SkyboxFace::ORDER.
    let zenith = [88, 140, 230, 255];
    let horizon = [190, 215, 245, 255];
    let ground = [70, 80, 90, 255];
    let face_gradients: [([u8; 4], [u8; 4]); 6] = [
        (zenith, horizon),
        (zenith, horizon),
        (zenith, zenith),
        (ground, ground),
        (zenith, horizon),
        (zenith, horizon),
    ];
    let mut faces = [TextureHandle(0); 6];
    for (i, (top, bottom)) in face_gradients.into_iter().enumerate() {
        let handle = TextureHandle(1 + i as u64);
        renderer.upload_texture(handle, &TextureData::vertical_gradient(64, top, bottom))?;
        faces[i] = handle;
    }

    let target_materials = vec![SubsetMaterial {
        material: Material::from_diffuse([1.0, 1.0, 1.0, 1.0]),
        texture: Some(TARGET_TEXTURE),
    }];
    renderer.upload_mesh(TARGET_MESH, &target_block(2.0), &target_materials)?;

    let skybox_materials: Vec<SubsetMaterial> = faces
        .iter()
        .map(|texture| SubsetMaterial {
            material: Material::from_diffuse([1.0, 1.0, 1.0, 1.0]),
            texture: Some(*texture),
        })
        .collect();
    renderer.upload_mesh(SKYBOX_MESH, &skybox_box(500.0), &skybox_materials)?;

    Ok(Scene {
        mesh: SceneMesh {
            handle: TARGET_MESH,
            subsets: target_materials,
        },
        skybox: Skybox {
            handle: SKYBOX_MESH,
            faces,
        },
    })
}

struct App {
    state: AppState,
    window: Option<Arc<Window>>,
    renderer: Option<WgpuRenderer>,
}

impl App {
    fn new(sensitivity: f32) -> Self {
        Self {
            state: AppState::new(sensitivity),
            window: None,
            renderer: None,
        }
    }
}

impl ApplicationHandler for App {
    fn resumed(&mut self, event_loop: &ActiveEventLoop) {
        if self.window.is_some() {
            return;
        }

        let attrs = Window::default_attributes()
            .with_title("Aim Trainer")
            .with_inner_size(PhysicalSize::new(1024u32, 1024));
        let window = Arc::new(event_loop.create_window(attrs).expect("create window"));
        let size = window.inner_size();

        let mut renderer = match WgpuRenderer::new(window.clone(), size.width, size.height) {
            Ok(renderer) => renderer,
            Err(e) => {
                tracing::error!("renderer setup failed: {e}");
                event_loop.exit();
                return;
            }
        };

        match build_scene(&mut renderer) {
            Ok(scene) => self.state.scene = Some(scene),
            Err(e) => {
                tracing::error!("scene setup failed: {e}");
                event_loop.exit();
                return;
            }
        }

        self.window = Some(window);
        self.renderer = Some(renderer);
    }

    fn window_event(
        &mut self,
        event_loop: &ActiveEventLoop,
        _window_id: WindowId,
        event: WindowEvent,
    ) {
        match event {
            WindowEvent::CloseRequested => {
                event_loop.exit();
            }
            WindowEvent::Resized(new_size) => {
                if let Some(renderer) = &mut self.renderer {
                    renderer.resize(new_size.width, new_size.height);
                }
                // The projection keeps its fixed 1.0 aspect on purpose.
            }
            WindowEvent::CursorMoved { position, .. } => {
                self.state.cursor = Some(Vec2::new(position.x as f32, position.y as f32));
            }
            WindowEvent::RedrawRequested => {
                let dt = self.state.clock.tick();

                let delta = self.state.sampler.sample(self.state.cursor);
                self.state
                    .camera
                    .rotate_right(delta.x * self.state.sensitivity);
                self.state
                    .camera
                    .rotate_down(delta.y * self.state.sensitivity);
                self.state.camera.update();

                if let (Some(renderer), Some(scene)) = (&mut self.renderer, &self.state.scene) {
                    self.state
                        .sequencer
                        .render_frame(renderer, scene, self.state.camera.view());
                }

                self.state.frames += 1;
                self.state.elapsed += dt;
                if self.state.elapsed >= 5.0 {
                    tracing::debug!(
                        fps = self.state.frames as f32 / self.state.elapsed,
                        "frame pacing"
                    );
                    self.state.frames = 0;
                    self.state.elapsed = 0.0;
                }
            }
            _ => {}
        }
    }

    fn about_to_wait(&mut self, _event_loop: &ActiveEventLoop) {
        // Busy-poll loop: render whenever no events are pending.
        if let Some(window) = &self.window {
            window.request_redraw();
        }
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let filter = if cli.verbose { "debug" } else { "info" };
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::new(filter))
        .init();

    tracing::info!("aimtrainer-desktop starting");

    let event_loop = EventLoop::new()?;
    event_loop.set_control_flow(ControlFlow::Poll);

    let mut app = App::new(cli.sensitivity);
    event_loop.run_app(&mut app)?;

    Ok(())
}

use aimtrainer_common::{Material, MeshHandle, SkyboxFace, TextureHandle};
use aimtrainer_input::MouseSampler;
use aimtrainer_render::{DeviceCall, FrameSequencer, TraceDevice};
use aimtrainer_scene::{Camera, Scene, SceneMesh, Skybox, SubsetMaterial, skybox_box, target_block};
use anyhow::Result;
use clap::{Parser, Subcommand};
use glam::{Vec2, Vec3};
use serde::Serialize;
use tracing_subscriber::EnvFilter;

const TARGET_MESH: MeshHandle = MeshHandle(0);
const SKYBOX_MESH: MeshHandle = MeshHandle(1);

#[derive(Parser)]
#[command(name = "aimtrainer-cli", about = "Headless aim trainer tooling")]
struct Cli {
    /// Enable verbose logging
    #[arg(short, long)]
    verbose: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Print a summary of the built-in demo scene
    Info,
    /// Drive the frame sequencer with a synthetic cursor path and dump
    /// the resulting device calls
    Trace {
        /// Number of frames to simulate
        #[arg(long, default_value = "3")]
        frames: u32,
        /// Emit the trace as JSON instead of one line per call
        #[arg(long)]
        json: bool,
        /// Mouse sensitivity in radians per pixel
        #[arg(long, default_value = "0.005")]
        sensitivity: f32,
    },
}

/// The same demo scene the desktop app uploads, minus the pixel data:
/// the trace device never dereferences texture handles.
fn demo_scene() -> Scene {
    Scene {
        mesh: SceneMesh {
            handle: TARGET_MESH,
            subsets: vec![SubsetMaterial {
                material: Material::from_diffuse([1.0, 1.0, 1.0, 1.0]),
                texture: Some(TextureHandle(0)),
            }],
        },
        skybox: Skybox {
            handle: SKYBOX_MESH,
            faces: [1, 2, 3, 4, 5, 6].map(TextureHandle),
        },
    }
}

fn run_info() {
    let scene = demo_scene();
    let target = target_block(2.0);
    let sky = skybox_box(500.0);
    let projection = FrameSequencer::new().projection;

    println!("target mesh: handle {}", scene.mesh.handle.0);
    println!(
        "  {} vertices, {} indices, {} subset(s)",
        target.vertices.len(),
        target.indices.len(),
        target.subset_count()
    );
    println!("skybox mesh: handle {}", scene.skybox.handle.0);
    println!(
        "  {} vertices, {} indices, {} subset(s)",
        sky.vertices.len(),
        sky.indices.len(),
        sky.subset_count()
    );
    for face in SkyboxFace::ORDER {
        println!(
            "  face {:?} -> texture {}",
            face,
            scene.skybox.faces[face.index()].0
        );
    }
    println!(
        "projection: fov_y {:.4} rad, aspect {}, near {}, far {}",
        projection.fov_y, projection.aspect, projection.near, projection.far
    );
}

#[derive(Serialize)]
struct FrameTrace {
    frame: u32,
    yaw: f32,
    pitch: f32,
    calls: Vec<DeviceCall>,
}

/// Simulate `frames` frames of a cursor sweeping right and slightly
/// down, the way a player tracking a target would move.
fn run_trace(frames: u32, json: bool, sensitivity: f32) -> Result<()> {
    tracing::debug!(frames, sensitivity, "simulating cursor sweep");
    let scene = demo_scene();
    let sequencer = FrameSequencer::new();
    let mut camera = Camera::new();
    camera.look_at(Vec3::new(0.0, 3.0, -5.0), Vec3::ZERO, Vec3::Y);
    let mut sampler = MouseSampler::new();
    let mut device = TraceDevice::new();

    let mut traces = Vec::new();
    for frame in 0..frames {
        let cursor = Vec2::new(512.0 + frame as f32 * 12.0, 512.0 + frame as f32 * 3.0);
        let delta = sampler.sample(Some(cursor));
        camera.rotate_right(delta.x * sensitivity);
        camera.rotate_down(delta.y * sensitivity);
        camera.update();

        sequencer.render_frame(&mut device, &scene, camera.view());
        traces.push(FrameTrace {
            frame,
            yaw: camera.yaw(),
            pitch: camera.pitch(),
            calls: device.take_calls(),
        });
    }

    if json {
        println!("{}", serde_json::to_string_pretty(&traces)?);
    } else {
        for trace in &traces {
            println!(
                "frame {} (yaw {:+.5}, pitch {:+.5}):",
                trace.frame, trace.yaw, trace.pitch
            );
            for call in &trace.calls {
                println!("  {call:?}");
            }
        }
    }
    Ok(())
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let filter = if cli.verbose { "debug" } else { "info" };
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::new(filter))
        .init();

    match cli.command {
        Command::Info => run_info(),
        Command::Trace {
            frames,
            json,
            sensitivity,
        } => run_trace(frames, json, sensitivity)?,
    }

    Ok(())
}

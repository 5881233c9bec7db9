/// WGSL shader for opaque, lit, textured mesh subsets.
pub const SCENE_SHADER: &str = r#"
struct Uniforms {
    view_proj: mat4x4<f32>,
};

struct MaterialUniform {
    diffuse: vec4<f32>,
    ambient: vec4<f32>,
};

@group(0) @binding(0)
var<uniform> uniforms: Uniforms;

@group(1) @binding(0)
var<uniform> material: MaterialUniform;
@group(1) @binding(1)
var t_color: texture_2d<f32>;
@group(1) @binding(2)
var s_color: sampler;

struct VertexInput {
    @location(0) position: vec3<f32>,
    @location(1) normal: vec3<f32>,
    @location(2) uv: vec2<f32>,
};

struct VertexOutput {
    @builtin(position) clip_position: vec4<f32>,
    @location(0) world_normal: vec3<f32>,
    @location(1) uv: vec2<f32>,
};

@vertex
fn vs_main(vertex: VertexInput) -> VertexOutput {
    var out: VertexOutput;
    out.clip_position = uniforms.view_proj * vec4<f32>(vertex.position, 1.0);
    out.world_normal = normalize(vertex.normal);
    out.uv = vertex.uv;
    return out;
}

@fragment
fn fs_main(in: VertexOutput) -> @location(0) vec4<f32> {
    let light_dir = normalize(vec3<f32>(0.3, 1.0, 0.5));
    let n = max(dot(in.world_normal, light_dir), 0.0);
    let lighting = material.ambient.rgb * 0.4 + material.diffuse.rgb * n * 0.6;
    let tex = textureSample(t_color, s_color, in.uv);
    return vec4<f32>(tex.rgb * lighting, tex.a * material.diffuse.a);
}
"#;

/// WGSL shader for unlit skybox faces.
pub const SKYBOX_SHADER: &str = r#"
struct Uniforms {
    view_proj: mat4x4<f32>,
};

struct MaterialUniform {
    diffuse: vec4<f32>,
    ambient: vec4<f32>,
};

@group(0) @binding(0)
var<uniform> uniforms: Uniforms;

@group(1) @binding(0)
var<uniform> material: MaterialUniform;
@group(1) @binding(1)
var t_color: texture_2d<f32>;
@group(1) @binding(2)
var s_color: sampler;

struct VertexInput {
    @location(0) position: vec3<f32>,
    @location(1) normal: vec3<f32>,
    @location(2) uv: vec2<f32>,
};

struct VertexOutput {
    @builtin(position) clip_position: vec4<f32>,
    @location(0) uv: vec2<f32>,
};

@vertex
fn vs_sky(vertex: VertexInput) -> VertexOutput {
    var out: VertexOutput;
    out.clip_position = uniforms.view_proj * vec4<f32>(vertex.position, 1.0);
    out.uv = vertex.uv;
    return out;
}

@fragment
fn fs_sky(in: VertexOutput) -> @location(0) vec4<f32> {
    let tex = textureSample(t_color, s_color, in.uv);
    return vec4<f32>(tex.rgb * material.diffuse.rgb, 1.0);
}
"#;

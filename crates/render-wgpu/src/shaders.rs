/// WGSL shader for the Phong-lit cube.
pub const PHONG_SHADER: &str = r#"
struct Uniforms {
    view_proj: mat4x4<f32>,
    model: mat4x4<f32>,
    normal_matrix: mat4x4<f32>,
    view_pos: vec4<f32>,
    material_ambient: vec4<f32>,
    material_diffuse: vec4<f32>,
    // w holds the shininess exponent
    material_specular: vec4<f32>,
    light_position: vec4<f32>,
    light_ambient: vec4<f32>,
    light_diffuse: vec4<f32>,
    light_specular: vec4<f32>,
};

@group(0) @binding(0)
var<uniform> u: Uniforms;

struct VertexInput {
    @location(0) position: vec3<f32>,
    @location(1) normal: vec3<f32>,
};

struct VertexOutput {
    @builtin(position) clip_position: vec4<f32>,
    @location(0) world_pos: vec3<f32>,
    @location(1) normal: vec3<f32>,
};

@vertex
fn vs_main(vertex: VertexInput) -> VertexOutput {
    let world_pos = u.model * vec4<f32>(vertex.position, 1.0);

    var out: VertexOutput;
    out.clip_position = u.view_proj * world_pos;
    out.world_pos = world_pos.xyz;
    out.normal = (u.normal_matrix * vec4<f32>(vertex.normal, 0.0)).xyz;
    return out;
}

@fragment
fn fs_main(in: VertexOutput) -> @location(0) vec4<f32> {
    let ambient = u.light_ambient.rgb * u.material_ambient.rgb;

    let norm = normalize(in.normal);
    let light_dir = normalize(u.light_position.xyz - in.world_pos);
    let diff = max(dot(norm, light_dir), 0.0);
    let diffuse = u.light_diffuse.rgb * (diff * u.material_diffuse.rgb);

    let view_dir = normalize(u.view_pos.xyz - in.world_pos);
    let reflect_dir = reflect(-light_dir, norm);
    let spec = pow(max(dot(view_dir, reflect_dir), 0.0), u.material_specular.w);
    let specular = u.light_specular.rgb * (spec * u.material_specular.rgb);

    return vec4<f32>(ambient + diffuse + specular, 1.0);
}
"#;

/// WGSL shader for the light marker cube.
pub const LIGHT_SHADER: &str = r#"
struct Uniforms {
    view_proj: mat4x4<f32>,
    model: mat4x4<f32>,
    color: vec4<f32>,
};

@group(0) @binding(0)
var<uniform> u: Uniforms;

@vertex
fn vs_light(@location(0) position: vec3<f32>) -> @builtin(position) vec4<f32> {
    return u.view_proj * u.model * vec4<f32>(position, 1.0);
}

@fragment
fn fs_light() -> @location(0) vec4<f32> {
    return u.color;
}
"#;

/// Compile a WGSL module, logging validation errors instead of panicking.
///
/// A module that failed validation is still returned; pipelines built from
/// it are invalid and draw nothing.
pub fn compile(device: &wgpu::Device, label: &str, source: &str) -> wgpu::ShaderModule {
    device.push_error_scope(wgpu::ErrorFilter::Validation);
    let module = device.create_shader_module(wgpu::ShaderModuleDescriptor {
        label: Some(label),
        source: wgpu::ShaderSource::Wgsl(source.into()),
    });
    match pollster::block_on(device.pop_error_scope()) {
        Some(err) => tracing::error!("shader {label} failed to compile: {err}"),
        None => tracing::debug!("compiled shader {label}"),
    }
    module
}

use crate::core::sampler::MorphParticle;
use wgpu::util::DeviceExt;

#[repr(C)]
#[derive(Copy, Clone, Debug, bytemuck::Pod, bytemuck::Zeroable)]
pub(crate) struct PointInstance {
    pub(crate) chaos_pos: [f32; 3],
    pub(crate) target_pos: [f32; 3],
    pub(crate) color: [f32; 4],
    pub(crate) size: f32,
    pub(crate) _pad: f32,
}

impl PointInstance {
    /// A point that ignores the morph: same position in both arrangements.
    pub(crate) fn fixed(pos: [f32; 3], color: [f32; 3], alpha: f32, size: f32) -> Self {
        Self {
            chaos_pos: pos,
            target_pos: pos,
            color: [color[0], color[1], color[2], alpha],
            size,
            _pad: 0.0,
        }
    }
}

impl From<&MorphParticle> for PointInstance {
    fn from(p: &MorphParticle) -> Self {
        Self {
            chaos_pos: p.chaos_pos.to_array(),
            target_pos: p.target_pos.to_array(),
            color: [p.color[0], p.color[1], p.color[2], 1.0],
            size: p.size,
            _pad: 0.0,
        }
    }
}

#[repr(C)]
#[derive(Copy, Clone, bytemuck::Pod, bytemuck::Zeroable)]
pub(crate) struct ParticleUniforms {
    pub(crate) view: [[f32; 4]; 4],
    pub(crate) proj: [[f32; 4]; 4],
    pub(crate) model: [[f32; 4]; 4],
    pub(crate) params: [f32; 4],
}

pub(crate) struct ParticleResources {
    pub(crate) pipeline: wgpu::RenderPipeline,
    pub(crate) uniform_buffer: wgpu::Buffer,
    pub(crate) bind_group: wgpu::BindGroup,
    pub(crate) tree_buffer: wgpu::Buffer,
    pub(crate) tree_count: u32,
    pub(crate) overlay_buffer: wgpu::Buffer,
    pub(crate) overlay_capacity: usize,
}

const INSTANCE_ATTRIBS: [wgpu::VertexAttribute; 4] = wgpu::vertex_attr_array![
    0 => Float32x3,
    1 => Float32x3,
    2 => Float32x4,
    3 => Float32
];

pub(crate) fn create_particle_resources(
    device: &wgpu::Device,
    color_format: wgpu::TextureFormat,
    tree: &[MorphParticle],
    overlay_capacity: usize,
) -> ParticleResources {
    let shader = device.create_shader_module(wgpu::ShaderModuleDescriptor {
        label: Some("particles_shader"),
        source: wgpu::ShaderSource::Wgsl(crate::core::PARTICLES_WGSL.into()),
    });
    let bgl = device.create_bind_group_layout(&wgpu::BindGroupLayoutDescriptor {
        label: Some("particles_bgl"),
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
    let pl = device.create_pipeline_layout(&wgpu::PipelineLayoutDescriptor {
        label: Some("particles_pl"),
        bind_group_layouts: &[&bgl],
        push_constant_ranges: &[],
    });
    // Additive glow; color is premultiplied in the fragment shader.
    let additive = wgpu::BlendComponent {
        src_factor: wgpu::BlendFactor::One,
        dst_factor: wgpu::BlendFactor::One,
        operation: wgpu::BlendOperation::Add,
    };
    let pipeline = device.create_render_pipeline(&wgpu::RenderPipelineDescriptor {
        label: Some("particles_pipeline"),
        layout: Some(&pl),
        vertex: wgpu::VertexState {
            module: &shader,
            entry_point: Some("vs_main"),
            buffers: &[wgpu::VertexBufferLayout {
                array_stride: std::mem::size_of::<PointInstance>() as wgpu::BufferAddress,
                step_mode: wgpu::VertexStepMode::Instance,
                attributes: &INSTANCE_ATTRIBS,
            }],
            compilation_options: wgpu::PipelineCompilationOptions::default(),
        },
        primitive: wgpu::PrimitiveState::default(),
        depth_stencil: None,
        multisample: wgpu::MultisampleState::default(),
        fragment: Some(wgpu::FragmentState {
            module: &shader,
            entry_point: Some("fs_main"),
            targets: &[Some(wgpu::ColorTargetState {
                format: color_format,
                blend: Some(wgpu::BlendState {
                    color: additive,
                    alpha: additive,
                }),
                write_mask: wgpu::ColorWrites::ALL,
            })],
            compilation_options: wgpu::PipelineCompilationOptions::default(),
        }),
        cache: None,
        multiview: None,
    });

    let uniform_buffer = device.create_buffer(&wgpu::BufferDescriptor {
        label: Some("particles_uniforms"),
        size: std::mem::size_of::<ParticleUniforms>() as u64,
        usage: wgpu::BufferUsages::UNIFORM | wgpu::BufferUsages::COPY_DST,
        mapped_at_creation: false,
    });
    let bind_group = device.create_bind_group(&wgpu::BindGroupDescriptor {
        label: Some("particles_bg"),
        layout: &bgl,
        entries: &[wgpu::BindGroupEntry {
            binding: 0,
            resource: uniform_buffer.as_entire_binding(),
        }],
    });

    let tree_instances: Vec<PointInstance> = tree.iter().map(PointInstance::from).collect();
    let tree_buffer = device.create_buffer_init(&wgpu::util::BufferInitDescriptor {
        label: Some("tree_instances"),
        contents: bytemuck::cast_slice(&tree_instances),
        usage: wgpu::BufferUsages::VERTEX,
    });
    let overlay_buffer = device.create_buffer(&wgpu::BufferDescriptor {
        label: Some("overlay_instances"),
        size: (overlay_capacity * std::mem::size_of::<PointInstance>()) as u64,
        usage: wgpu::BufferUsages::VERTEX | wgpu::BufferUsages::COPY_DST,
        mapped_at_creation: false,
    });

    ParticleResources {
        pipeline,
        uniform_buffer,
        bind_group,
        tree_buffer,
        tree_count: tree_instances.len() as u32,
        overlay_buffer,
        overlay_capacity,
    }
}

use crate::camera::Camera;
use crate::constants::{CLEAR_COLOR, FIREWORK_SIZE, PHOTO_MARKER_SIZE};
use crate::core::fireworks::burst_particles;
use crate::core::sampler::MorphParticle;
use crate::core::{SceneFrame, GOLD_LIGHT, MAX_PHOTOS};
use glam::Mat4;
use web_sys as web;

mod particles;
use particles::{create_particle_resources, ParticleResources, ParticleUniforms, PointInstance};

// Photo markers plus a handful of overlapping bursts.
const OVERLAY_CAPACITY: usize = MAX_PHOTOS + 8 * crate::core::FIREWORK_PARTICLES;

pub struct GpuState<'a> {
    surface: wgpu::Surface<'a>,
    device: wgpu::Device,
    queue: wgpu::Queue,
    config: wgpu::SurfaceConfiguration,
    particles: ParticleResources,
    overlay: Vec<PointInstance>,
    width: u32,
    height: u32,
    clear_color: wgpu::Color,
    time_accum: f32,
}

impl<'a> GpuState<'a> {
    pub async fn new(
        canvas: &'a web::HtmlCanvasElement,
        tree: &[MorphParticle],
    ) -> anyhow::Result<Self> {
        let width = canvas.width().max(1);
        let height = canvas.height().max(1);

        let instance = wgpu::Instance::default();
        let surface = instance.create_surface(wgpu::SurfaceTarget::Canvas(canvas.clone()))?;
        let adapter = instance
            .request_adapter(&wgpu::RequestAdapterOptions {
                power_preference: wgpu::PowerPreference::HighPerformance,
                compatible_surface: Some(&surface),
                force_fallback_adapter: false,
            })
            .await
            .ok_or_else(|| anyhow::anyhow!("No WebGPU adapter"))?;
        let (device, queue) = adapter
            .request_device(
                &wgpu::DeviceDescriptor {
                    required_features: wgpu::Features::empty(),
                    // Default limits; older WebGPU impls reject unknown fields
                    required_limits: wgpu::Limits::default(),
                    memory_hints: wgpu::MemoryHints::Performance,
                    label: None,
                },
                None,
            )
            .await
            .map_err(|e| anyhow::anyhow!(format!("request_device error: {:?}", e)))?;
        let caps = surface.get_capabilities(&adapter);
        let format = caps
            .formats
            .iter()
            .copied()
            .find(|f| {
                matches!(
                    f,
                    wgpu::TextureFormat::Bgra8UnormSrgb | wgpu::TextureFormat::Rgba8UnormSrgb
                )
            })
            .or_else(|| caps.formats.first().copied())
            .ok_or_else(|| anyhow::anyhow!("surface reports no formats"))?;
        let alpha_mode = caps
            .alpha_modes
            .first()
            .copied()
            .unwrap_or(wgpu::CompositeAlphaMode::Auto);
        let config = wgpu::SurfaceConfiguration {
            usage: wgpu::TextureUsages::RENDER_ATTACHMENT,
            format,
            width,
            height,
            present_mode: wgpu::PresentMode::Fifo,
            alpha_mode,
            view_formats: vec![],
            desired_maximum_frame_latency: 2,
        };
        surface.configure(&device, &config);

        let particles = create_particle_resources(&device, format, tree, OVERLAY_CAPACITY);
        log::info!("[gpu] ready {}x{} particles={}", width, height, particles.tree_count);

        Ok(Self {
            surface,
            device,
            queue,
            config,
            particles,
            overlay: Vec::with_capacity(OVERLAY_CAPACITY),
            width,
            height,
            clear_color: wgpu::Color {
                r: CLEAR_COLOR[0],
                g: CLEAR_COLOR[1],
                b: CLEAR_COLOR[2],
                a: 1.0,
            },
            time_accum: 0.0,
        })
    }

    pub fn resize_if_needed(&mut self, width: u32, height: u32) {
        if width == 0 || height == 0 {
            return;
        }
        if width != self.width || height != self.height {
            self.width = width;
            self.height = height;
            self.config.width = width;
            self.config.height = height;
            self.surface.configure(&self.device, &self.config);
        }
    }

    pub fn aspect(&self) -> f32 {
        self.width as f32 / self.height.max(1) as f32
    }

    /// Collects photo markers and live firework sparks for this frame.
    fn rebuild_overlay(&mut self, scene: &SceneFrame, now_ms: f64) {
        self.overlay.clear();
        if scene.show_photos {
            for p in &scene.photos {
                let zoomed = scene.zoomed.as_ref().is_some_and(|z| z.id == p.id);
                let alpha = if zoomed { 1.0 } else { 0.8 };
                self.overlay.push(PointInstance::fixed(
                    p.position.to_array(),
                    GOLD_LIGHT,
                    alpha,
                    PHOTO_MARKER_SIZE,
                ));
            }
        }
        for &t in &scene.fireworks {
            for spark in burst_particles(t, now_ms) {
                self.overlay.push(PointInstance::fixed(
                    spark.position.to_array(),
                    spark.color,
                    spark.alpha,
                    FIREWORK_SIZE,
                ));
            }
        }
        self.overlay.truncate(self.particles.overlay_capacity);
    }

    /// Draws one frame. `formed` is the displayed blend toward the tree
    /// (1.0 = tree), already smoothed by the caller.
    pub fn render(
        &mut self,
        dt_sec: f32,
        now_ms: f64,
        formed: f32,
        model: Mat4,
        scene: &SceneFrame,
    ) -> Result<(), wgpu::SurfaceError> {
        self.time_accum += dt_sec.max(0.0);
        self.rebuild_overlay(scene, now_ms);

        let camera = Camera::scene(self.aspect());
        let u = ParticleUniforms {
            view: camera.view_matrix().to_cols_array_2d(),
            proj: camera.projection_matrix().to_cols_array_2d(),
            model: model.to_cols_array_2d(),
            params: [formed.clamp(0.0, 1.0), self.time_accum, 0.0, 0.0],
        };
        self.queue
            .write_buffer(&self.particles.uniform_buffer, 0, bytemuck::bytes_of(&u));
        if !self.overlay.is_empty() {
            self.queue.write_buffer(
                &self.particles.overlay_buffer,
                0,
                bytemuck::cast_slice(&self.overlay),
            );
        }

        let frame = self.surface.get_current_texture()?;
        let view = frame
            .texture
            .create_view(&wgpu::TextureViewDescriptor::default());
        let mut encoder = self
            .device
            .create_command_encoder(&wgpu::CommandEncoderDescriptor {
                label: Some("encoder"),
            });
        {
            let mut rpass = encoder.begin_render_pass(&wgpu::RenderPassDescriptor {
                label: Some("scene_pass"),
                color_attachments: &[Some(wgpu::RenderPassColorAttachment {
                    view: &view,
                    resolve_target: None,
                    ops: wgpu::Operations {
                        load: wgpu::LoadOp::Clear(self.clear_color),
                        store: wgpu::StoreOp::Store,
                    },
                })],
                depth_stencil_attachment: None,
                timestamp_writes: None,
                occlusion_query_set: None,
            });
            rpass.set_pipeline(&self.particles.pipeline);
            rpass.set_bind_group(0, &self.particles.bind_group, &[]);
            rpass.set_vertex_buffer(0, self.particles.tree_buffer.slice(..));
            rpass.draw(0..6, 0..self.particles.tree_count);
            if !self.overlay.is_empty() {
                rpass.set_vertex_buffer(0, self.particles.overlay_buffer.slice(..));
                rpass.draw(0..6, 0..self.overlay.len() as u32);
            }
        }

        self.queue.submit(Some(encoder.finish()));
        frame.present();
        Ok(())
    }
}

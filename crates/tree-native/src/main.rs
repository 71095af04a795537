mod sim;

use std::sync::{Arc, Mutex, PoisonError};
use std::time::Instant;
use wgpu::util::DeviceExt;
use winit::{
    event::*,
    event_loop::EventLoop,
    keyboard::{Key, NamedKey},
    window::WindowBuilder,
};

use glam::Vec2;
use sim::{SharedControls, SimControls, SimPose, SimulatedHand};
use tree_core::{
    hex_to_linear, CaptureSession, Fog, FloatMotion, HandSlot, OrbitCamera, ParticleInstance,
    SceneLighting, SceneUniforms, Session, SessionConfig, BACKGROUND_HEX, PARTICLES_WGSL,
};

const WINDOW_TITLE: &str = "Merry Christmas to ZZN";

struct GpuState<'w> {
    window: &'w winit::window::Window,
    surface: wgpu::Surface<'w>,
    device: wgpu::Device,
    queue: wgpu::Queue,
    config: wgpu::SurfaceConfiguration,
    pipeline: wgpu::RenderPipeline,
    uniform_buffer: wgpu::Buffer,
    quad_vb: wgpu::Buffer,
    instance_vb: wgpu::Buffer,
    bind_group: wgpu::BindGroup,
    clear_color: wgpu::Color,
    session: Session,
    slot: HandSlot,
    camera: OrbitCamera,
    float: FloatMotion,
    fog: Fog,
    start: Instant,
    last_frame: Instant,
}

impl<'w> GpuState<'w> {
    async fn new(
        window: &'w winit::window::Window,
        session: Session,
        slot: HandSlot,
    ) -> anyhow::Result<Self> {
        let size = window.inner_size();
        let instance = wgpu::Instance::default();
        let surface = instance.create_surface(window)?;
        let adapter = instance
            .request_adapter(&wgpu::RequestAdapterOptions {
                power_preference: wgpu::PowerPreference::HighPerformance,
                compatible_surface: Some(&surface),
                force_fallback_adapter: false,
            })
            .await
            .ok_or_else(|| anyhow::anyhow!("No GPU adapter"))?;
        let (device, queue) = adapter
            .request_device(
                &wgpu::DeviceDescriptor {
                    required_features: wgpu::Features::empty(),
                    required_limits: wgpu::Limits::default(),
                    memory_hints: wgpu::MemoryHints::Performance,
                    label: None,
                },
                None,
            )
            .await?;

        let surface_caps = surface.get_capabilities(&adapter);
        // Shader output is linear; let the surface do the sRGB encode.
        let format = surface_caps
            .formats
            .iter()
            .copied()
            .find(|f| f.is_srgb())
            .or_else(|| surface_caps.formats.first().copied())
            .ok_or_else(|| anyhow::anyhow!("Surface reports no formats"))?;
        let config = wgpu::SurfaceConfiguration {
            usage: wgpu::TextureUsages::RENDER_ATTACHMENT,
            format,
            width: size.width.max(1),
            height: size.height.max(1),
            present_mode: wgpu::PresentMode::Fifo,
            alpha_mode: surface_caps.alpha_modes[0],
            desired_maximum_frame_latency: 2,
            view_formats: vec![],
        };
        surface.configure(&device, &config);

        let shader = device.create_shader_module(wgpu::ShaderModuleDescriptor {
            label: Some("particles"),
            source: wgpu::ShaderSource::Wgsl(PARTICLES_WGSL.into()),
        });

        let uniform_buffer = device.create_buffer(&wgpu::BufferDescriptor {
            label: Some("scene_uniforms"),
            size: std::mem::size_of::<SceneUniforms>() as u64,
            usage: wgpu::BufferUsages::UNIFORM | wgpu::BufferUsages::COPY_DST,
            mapped_at_creation: false,
        });
        // Two triangles covering the unit sprite square
        let quad_vertices: [f32; 12] = [
            -1.0, -1.0, 1.0, -1.0, 1.0, 1.0, -1.0, -1.0, 1.0, 1.0, -1.0, 1.0,
        ];
        let quad_vb = device.create_buffer_init(&wgpu::util::BufferInitDescriptor {
            label: Some("quad_vb"),
            contents: bytemuck::cast_slice(&quad_vertices),
            usage: wgpu::BufferUsages::VERTEX,
        });
        let instance_vb = device.create_buffer(&wgpu::BufferDescriptor {
            label: Some("instance_vb"),
            size: (std::mem::size_of::<ParticleInstance>() * session.field().len().max(1)) as u64,
            usage: wgpu::BufferUsages::VERTEX | wgpu::BufferUsages::COPY_DST,
            mapped_at_creation: false,
        });
        let bind_group_layout = device.create_bind_group_layout(&wgpu::BindGroupLayoutDescriptor {
            label: Some("scene_bgl"),
            entries: &[wgpu::BindGroupLayoutEntry {
                binding: 0,
                visibility: wgpu::ShaderStages::VERTEX_FRAGMENT,
                ty: wgpu::BindingType::Buffer {
                    ty: wgpu::BufferBindingType::Uniform,
                    has_dynamic_offset: false,
                    min_binding_size: None,
                },
                count: None,
            }],
        });
        let bind_group = device.create_bind_group(&wgpu::BindGroupDescriptor {
            label: Some("scene_bg"),
            layout: &bind_group_layout,
            entries: &[wgpu::BindGroupEntry {
                binding: 0,
                resource: uniform_buffer.as_entire_binding(),
            }],
        });

        let pipeline_layout = device.create_pipeline_layout(&wgpu::PipelineLayoutDescriptor {
            label: Some("particles_pl"),
            bind_group_layouts: &[&bind_group_layout],
            push_constant_ranges: &[],
        });

        let vertex_buffers = [
            // slot 0: sprite corners
            wgpu::VertexBufferLayout {
                array_stride: (std::mem::size_of::<f32>() * 2) as u64,
                step_mode: wgpu::VertexStepMode::Vertex,
                attributes: &[wgpu::VertexAttribute {
                    format: wgpu::VertexFormat::Float32x2,
                    offset: 0,
                    shader_location: 0,
                }],
            },
            // slot 1: ParticleInstance
            wgpu::VertexBufferLayout {
                array_stride: std::mem::size_of::<ParticleInstance>() as u64,
                step_mode: wgpu::VertexStepMode::Instance,
                attributes: &[
                    wgpu::VertexAttribute {
                        format: wgpu::VertexFormat::Float32x3,
                        offset: 0,
                        shader_location: 1,
                    },
                    wgpu::VertexAttribute {
                        format: wgpu::VertexFormat::Float32,
                        offset: 12,
                        shader_location: 2,
                    },
                    wgpu::VertexAttribute {
                        format: wgpu::VertexFormat::Float32x3,
                        offset: 16,
                        shader_location: 3,
                    },
                    // offset 28 is padding
                    wgpu::VertexAttribute {
                        format: wgpu::VertexFormat::Float32x4,
                        offset: 32,
                        shader_location: 4,
                    },
                ],
            },
        ];
        let pipeline = device.create_render_pipeline(&wgpu::RenderPipelineDescriptor {
            label: Some("particles"),
            layout: Some(&pipeline_layout),
            vertex: wgpu::VertexState {
                module: &shader,
                entry_point: Some("vs_main"),
                buffers: &vertex_buffers,
                compilation_options: wgpu::PipelineCompilationOptions::default(),
            },
            primitive: wgpu::PrimitiveState::default(),
            depth_stencil: None,
            multisample: wgpu::MultisampleState::default(),
            fragment: Some(wgpu::FragmentState {
                module: &shader,
                entry_point: Some("fs_main"),
                targets: &[Some(wgpu::ColorTargetState {
                    format,
                    blend: Some(additive_blend()),
                    write_mask: wgpu::ColorWrites::ALL,
                })],
                compilation_options: wgpu::PipelineCompilationOptions::default(),
            }),
            cache: None,
            multiview: None,
        });

        let background = hex_to_linear(BACKGROUND_HEX);
        let mut camera = OrbitCamera::default();
        camera.set_viewport(config.width, config.height);
        let now = Instant::now();

        Ok(Self {
            window,
            surface,
            device,
            queue,
            config,
            pipeline,
            uniform_buffer,
            quad_vb,
            instance_vb,
            bind_group,
            clear_color: wgpu::Color {
                r: background.x as f64,
                g: background.y as f64,
                b: background.z as f64,
                a: 1.0,
            },
            session,
            slot,
            camera,
            float: FloatMotion::default(),
            fog: Fog::default(),
            start: now,
            last_frame: now,
        })
    }

    fn resize(&mut self, new_size: winit::dpi::PhysicalSize<u32>) {
        if new_size.width == 0 || new_size.height == 0 {
            return;
        }
        self.config.width = new_size.width;
        self.config.height = new_size.height;
        self.surface.configure(&self.device, &self.config);
        self.camera.set_viewport(new_size.width, new_size.height);
    }

    fn render(&mut self) -> Result<(), wgpu::SurfaceError> {
        let now = Instant::now();
        let dt_sec = (now - self.last_frame).as_secs_f32();
        self.last_frame = now;
        let time = (now - self.start).as_secs_f32();

        let frame = self.surface.get_current_texture()?;
        let view = frame
            .texture
            .create_view(&wgpu::TextureViewDescriptor::default());

        let hand = self.slot.latest();
        let instances = self.session.frame(time, hand);
        self.queue
            .write_buffer(&self.instance_vb, 0, bytemuck::cast_slice(instances));
        let instance_count = instances.len() as u32;

        let mode = self.session.mode();
        self.camera.advance(dt_sec, mode);
        let uniforms = SceneUniforms::new(
            &self.camera,
            &self.float,
            &self.fog,
            &SceneLighting::for_mode(mode),
            time,
        );
        self.queue
            .write_buffer(&self.uniform_buffer, 0, bytemuck::bytes_of(&uniforms));

        let mut encoder = self
            .device
            .create_command_encoder(&wgpu::CommandEncoderDescriptor {
                label: Some("encoder"),
            });
        {
            let mut rpass = encoder.begin_render_pass(&wgpu::RenderPassDescriptor {
                label: Some("particles_pass"),
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
            rpass.set_pipeline(&self.pipeline);
            rpass.set_bind_group(0, &self.bind_group, &[]);
            rpass.set_vertex_buffer(0, self.quad_vb.slice(..));
            rpass.set_vertex_buffer(1, self.instance_vb.slice(..));
            rpass.draw(0..6, 0..instance_count);
        }
        self.queue.submit(Some(encoder.finish()));
        frame.present();
        Ok(())
    }
}

fn additive_blend() -> wgpu::BlendState {
    let add = wgpu::BlendComponent {
        src_factor: wgpu::BlendFactor::One,
        dst_factor: wgpu::BlendFactor::One,
        operation: wgpu::BlendOperation::Add,
    };
    wgpu::BlendState {
        color: add,
        alpha: add,
    }
}

/// `--seed <n>` or `--seed=<n>`; anything else is ignored.
fn parse_seed<I: IntoIterator<Item = String>>(args: I) -> anyhow::Result<Option<u64>> {
    let mut args = args.into_iter();
    while let Some(arg) = args.next() {
        let value = if arg == "--seed" {
            args.next()
                .ok_or_else(|| anyhow::anyhow!("--seed needs a value"))?
        } else if let Some(v) = arg.strip_prefix("--seed=") {
            v.to_string()
        } else {
            continue;
        };
        let seed = value
            .parse::<u64>()
            .map_err(|e| anyhow::anyhow!("invalid seed {value:?}: {e}"))?;
        return Ok(Some(seed));
    }
    Ok(None)
}

fn update_controls(controls: &SharedControls, f: impl FnOnce(&mut SimControls)) {
    let mut guard = controls.lock().unwrap_or_else(PoisonError::into_inner);
    f(&mut guard);
}

fn handle_key(controls: &SharedControls, key: &Key) {
    let Key::Character(c) = key else {
        return;
    };
    match c.as_str() {
        "f" | "F" => update_controls(controls, |s| s.pose = SimPose::Fist),
        "o" | "O" => update_controls(controls, |s| s.pose = SimPose::Open),
        "r" | "R" => update_controls(controls, |s| s.pose = SimPose::Relaxed),
        "h" | "H" => update_controls(controls, |s| {
            s.present = !s.present;
            log::info!("[sim] hand {}", if s.present { "shown" } else { "hidden" });
        }),
        _ => {}
    }
}

fn main() -> anyhow::Result<()> {
    env_logger::builder()
        .filter_level(log::LevelFilter::Info)
        .init();

    let seed = parse_seed(std::env::args().skip(1))?;
    let session = Session::new(SessionConfig {
        seed,
        ..SessionConfig::default()
    });

    // Hand producer runs on its own thread and only ever writes the slot
    let controls: SharedControls = Arc::new(Mutex::new(SimControls::default()));
    let slot = HandSlot::new();
    let capture = CaptureSession::start(
        SimulatedHand::new(Arc::clone(&controls)),
        slot.clone(),
        *session.gesture_thresholds(),
    )?;
    log::info!("[native] keys: F fist, O open, R relaxed, H toggle hand, Esc quit");

    let event_loop = EventLoop::new().map_err(|e| anyhow::anyhow!("event loop: {e}"))?;
    let window = WindowBuilder::new()
        .with_title(WINDOW_TITLE)
        .build(&event_loop)
        .map_err(|e| anyhow::anyhow!("window: {e}"))?;

    let mut state = pollster::block_on(GpuState::new(&window, session, slot))?;

    event_loop
        .run(move |event, elwt| match event {
            Event::WindowEvent { event, .. } => match event {
                WindowEvent::Resized(size) => state.resize(size),
                WindowEvent::CloseRequested => elwt.exit(),
                WindowEvent::KeyboardInput {
                    event:
                        KeyEvent {
                            logical_key,
                            state: ElementState::Pressed,
                            repeat: false,
                            ..
                        },
                    ..
                } => {
                    if logical_key == Key::Named(NamedKey::Escape) {
                        elwt.exit();
                    } else {
                        handle_key(&controls, &logical_key);
                    }
                }
                WindowEvent::CursorMoved { position, .. } => {
                    let size = state.window.inner_size();
                    let uv = Vec2::new(
                        position.x as f32 / size.width.max(1) as f32,
                        position.y as f32 / size.height.max(1) as f32,
                    );
                    update_controls(&controls, |s| {
                        s.cursor = uv.clamp(Vec2::ZERO, Vec2::ONE);
                        s.present = true;
                    });
                }
                WindowEvent::CursorLeft { .. } => update_controls(&controls, |s| s.present = false),
                _ => {}
            },
            Event::AboutToWait => match state.render() {
                Ok(_) => state.window.request_redraw(),
                Err(wgpu::SurfaceError::Lost) => state.resize(state.window.inner_size()),
                Err(wgpu::SurfaceError::OutOfMemory) => elwt.exit(),
                Err(e) => log::warn!("[native] frame skipped: {e:?}"),
            },
            _ => {}
        })
        .map_err(|e| anyhow::anyhow!("event loop: {e}"))?;

    capture.stop();
    Ok(())
}

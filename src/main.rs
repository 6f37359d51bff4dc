mod config;
mod error;
mod gui;
mod session;

use clap::Parser;
use config::Args;
use error::{AppError, AppResult};
use gui::{Gui, UiState};
use session::Session;
use std::collections::VecDeque;
use std::sync::Arc;
use std::time::Instant;
use wave_renderer::{ShapeRenderer, Viewport};
use wave_simulation::ScenarioKind;
use winit::{
    application::ApplicationHandler,
    event::{ElementState, KeyEvent, WindowEvent},
    event_loop::{ActiveEventLoop, ControlFlow, EventLoop},
    keyboard::{KeyCode, PhysicalKey},
    window::{Fullscreen, Window, WindowId},
};

struct GpuState {
    surface: wgpu::Surface<'static>,
    device: wgpu::Device,
    queue: wgpu::Queue,
    config: wgpu::SurfaceConfiguration,
    shapes: ShapeRenderer,
    gui: Gui,
    ui_state: UiState,
    session: Session,
    last_frame_time: Instant,
    frame_times: VecDeque<f32>,
}

impl GpuState {
    async fn new(window: Arc<Window>, args: &Args) -> AppResult<Self> {
        let size = window.inner_size();

        let instance = wgpu::Instance::new(&wgpu::InstanceDescriptor {
            backends: wgpu::Backends::PRIMARY,
            ..Default::default()
        });

        let surface = instance.create_surface(window.clone())?;

        let adapter = instance
            .request_adapter(&wgpu::RequestAdapterOptions {
                power_preference: wgpu::PowerPreference::default(),
                compatible_surface: Some(&surface),
                force_fallback_adapter: false,
            })
            .await?;

        log::info!("✓ Using GPU: {}", adapter.get_info().name);

        let (device, queue) = adapter
            .request_device(&wgpu::DeviceDescriptor {
                label: Some("Device"),
                required_features: wgpu::Features::empty(),
                required_limits: wgpu::Limits::default(),
                memory_hints: wgpu::MemoryHints::default(),
                experimental_features: wgpu::ExperimentalFeatures::default(),
                trace: wgpu::Trace::Off,
            })
            .await?;

        let surface_caps = surface.get_capabilities(&adapter);
        let surface_format = surface_caps
            .formats
            .iter()
            .find(|f| f.is_srgb())
            .or_else(|| surface_caps.formats.first())
            .copied()
            .ok_or(AppError::NoSurfaceFormat)?;

        let config = wgpu::SurfaceConfiguration {
            usage: wgpu::TextureUsages::RENDER_ATTACHMENT,
            format: surface_format,
            width: size.width.max(1),
            height: size.height.max(1),
            present_mode: wgpu::PresentMode::AutoVsync,
            alpha_mode: surface_caps.alpha_modes[0],
            view_formats: vec![],
            desired_maximum_frame_latency: 2,
        };
        surface.configure(&device, &config);

        let session = Session::new(args.scenario.into(), args.max_frame_dt);
        log::info!("✓ Simulation initialized");

        let shapes = ShapeRenderer::new(&device, surface_format, args.segments);
        log::info!("✓ Renderer initialized ({} segments per circle)", shapes.circle_segments());

        let gui = Gui::new(&device, surface_format, &window);
        log::info!("✓ GUI initialized");

        Ok(Self {
            surface,
            device,
            queue,
            config,
            shapes,
            gui,
            ui_state: UiState::default(),
            session,
            last_frame_time: Instant::now(),
            frame_times: VecDeque::with_capacity(100),
        })
    }

    fn resize(&mut self, new_size: winit::dpi::PhysicalSize<u32>) {
        if new_size.width > 0 && new_size.height > 0 {
            self.config.width = new_size.width;
            self.config.height = new_size.height;
            self.surface.configure(&self.device, &self.config);
        }
    }

    /// Returns the averaged (fps, frame time in ms)
    fn render(&mut self, window: &Window) -> Result<(f32, f32), wgpu::SurfaceError> {
        let now = Instant::now();
        let elapsed = now - self.last_frame_time;
        self.last_frame_time = now;

        let frame_time = elapsed.as_secs_f32() * 1000.0;
        self.frame_times.push_back(frame_time);
        if self.frame_times.len() > 100 {
            self.frame_times.pop_front();
        }
        let avg_frame_time = self.frame_times.iter().sum::<f32>() / self.frame_times.len() as f32;
        let fps = 1000.0 / avg_frame_time;

        let viewport = Viewport::fit(
            self.config.width as f32,
            self.config.height as f32,
            self.session.demo().scenario().aspect_ratio(),
        );
        let (report, canvas) = self
            .session
            .frame(elapsed.as_secs_f64(), viewport.size());

        self.ui_state.fps = fps;
        self.ui_state.frame_time = avg_frame_time;
        self.ui_state.steps_per_frame = report.steps;
        self.ui_state.paused = self.session.driver().is_paused();

        let output = self.surface.get_current_texture()?;
        let view = output
            .texture
            .create_view(&wgpu::TextureViewDescriptor::default());

        let mut encoder = self
            .device
            .create_command_encoder(&wgpu::CommandEncoderDescriptor {
                label: Some("Render Encoder"),
            });

        self.shapes.render(
            &self.device,
            &self.queue,
            &mut encoder,
            &view,
            &canvas,
            viewport,
        );

        let actions = self.gui.render(
            &self.device,
            &self.queue,
            &mut encoder,
            window,
            &view,
            &self.ui_state,
            self.session.demo(),
        );

        self.queue.submit(std::iter::once(encoder.finish()));
        output.present();

        for action in actions {
            self.session.apply(action);
        }

        Ok((fps, avg_frame_time))
    }
}

struct App {
    args: Args,
    window: Option<Arc<Window>>,
    gpu_state: Option<GpuState>,
    occluded: bool,
    minimized: bool,
    error: Option<AppError>,
}

impl App {
    fn new(args: Args) -> Self {
        Self {
            args,
            window: None,
            gpu_state: None,
            occluded: false,
            minimized: false,
            error: None,
        }
    }

    fn init(&mut self, event_loop: &ActiveEventLoop) -> AppResult<()> {
        let window_attributes = Window::default_attributes()
            .with_title("Wave Demos")
            .with_inner_size(winit::dpi::LogicalSize::new(self.args.width, self.args.height));

        let window = Arc::new(event_loop.create_window(window_attributes)?);
        let gpu_state = pollster::block_on(GpuState::new(window.clone(), &self.args))?;

        self.window = Some(window);
        self.gpu_state = Some(gpu_state);
        Ok(())
    }

    fn update_visibility(&mut self) {
        if let Some(gpu_state) = &mut self.gpu_state {
            gpu_state
                .session
                .set_hidden(self.occluded || self.minimized);
        }
    }

    fn handle_key(&mut self, event_loop: &ActiveEventLoop, key_code: KeyCode) {
        let Some(gpu_state) = &mut self.gpu_state else {
            return;
        };
        let session = &mut gpu_state.session;

        match key_code {
            KeyCode::Escape => event_loop.exit(),
            KeyCode::Space => session.pulse(),
            KeyCode::KeyR => session.reset(),
            KeyCode::KeyP => session.toggle_pause(),
            KeyCode::Digit1 => session.select(ScenarioKind::Refraction),
            KeyCode::Digit2 => session.select(ScenarioKind::Tension),
            KeyCode::Digit3 => session.select(ScenarioKind::Water),
            KeyCode::Digit4 => session.select(ScenarioKind::Orbit),
            KeyCode::F11 => {
                if let Some(window) = &self.window {
                    let fullscreen = match window.fullscreen() {
                        Some(_) => None,
                        None => Some(Fullscreen::Borderless(None)),
                    };
                    window.set_fullscreen(fullscreen);
                }
            }
            _ => {}
        }
    }
}

impl ApplicationHandler for App {
    fn resumed(&mut self, event_loop: &ActiveEventLoop) {
        if self.window.is_some() {
            self.minimized = false;
            self.update_visibility();
        } else {
            if let Err(e) = self.init(event_loop) {
                log::error!("Startup failed: {e}");
                self.error = Some(e);
                event_loop.exit();
            }
        }
    }

    fn suspended(&mut self, _event_loop: &ActiveEventLoop) {
        self.minimized = true;
        self.update_visibility();
    }

    fn window_event(
        &mut self,
        event_loop: &ActiveEventLoop,
        _window_id: WindowId,
        event: WindowEvent,
    ) {
        // Handle GUI events
        if let (Some(gpu_state), Some(window)) = (&mut self.gpu_state, &self.window) {
            if gpu_state.gui.handle_event(window, &event) {
                window.request_redraw();
                return;
            }
        }

        match event {
            WindowEvent::CloseRequested => event_loop.exit(),

            WindowEvent::KeyboardInput {
                event:
                    KeyEvent {
                        physical_key: PhysicalKey::Code(key_code),
                        state: ElementState::Pressed,
                        repeat: false,
                        ..
                    },
                ..
            } => self.handle_key(event_loop, key_code),

            WindowEvent::Resized(physical_size) => {
                self.minimized = physical_size.width == 0 || physical_size.height == 0;
                if let Some(gpu_state) = &mut self.gpu_state {
                    gpu_state.resize(physical_size);
                }
                self.update_visibility();
            }

            WindowEvent::Occluded(occluded) => {
                self.occluded = occluded;
                self.update_visibility();
            }

            WindowEvent::RedrawRequested => {
                if let (Some(window), Some(gpu_state)) = (&self.window, &mut self.gpu_state) {
                    match gpu_state.render(window) {
                        Ok((fps, _frame_time)) => {
                            window.set_title(&format!(
                                "Wave Demos - {} - {:.0} FPS",
                                gpu_state.session.demo().kind().title(),
                                fps
                            ));
                        }
                        Err(wgpu::SurfaceError::Lost | wgpu::SurfaceError::Outdated) => {
                            gpu_state.resize(window.inner_size())
                        }
                        Err(wgpu::SurfaceError::OutOfMemory) => {
                            log::error!("Surface out of memory, exiting");
                            event_loop.exit();
                        }
                        Err(e) => log::warn!("Render error: {e:?}"),
                    }
                }
            }

            _ => {}
        }

        if let Some(window) = &self.window {
            window.request_redraw();
        }
    }
}

fn main() -> Result<(), AppError> {
    // Initialize logger (RUST_LOG=debug for verbose output)
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let args = Args::parse();
    log::info!("Starting wave demos...");

    let event_loop = EventLoop::new()?;
    event_loop.set_control_flow(ControlFlow::Poll);

    let mut app = App::new(args);
    event_loop.run_app(&mut app)?;

    match app.error.take() {
        Some(e) => Err(e),
        None => Ok(()),
    }
}

use egui::Context;
use egui_wgpu::Renderer;
use egui_winit::State;
use wave_physics::{BoundaryPolicy, InputPolicy};
use wave_simulation::{Demo, ScenarioKind, Tunable};
use wgpu::{Device, TextureFormat};
use winit::{event::WindowEvent, window::Window};

/// Frame statistics shown in the diagnostics panel
#[derive(Debug, Clone, Default)]
pub struct UiState {
    pub fps: f32,
    pub frame_time: f32,
    pub steps_per_frame: u32,
    pub paused: bool,
}

/// Something the user asked for during the last UI pass
#[derive(Debug, Clone, PartialEq)]
pub enum UiAction {
    SelectScenario(ScenarioKind),
    SetParameter { key: &'static str, t: f64 },
    /// A slider is being dragged (or was released)
    Hold(bool),
    Pulse,
    Reset,
    TogglePause,
    SetBoundary(BoundaryPolicy),
    SetInput(InputPolicy),
}

pub struct Gui {
    context: Context,
    state: State,
    renderer: Renderer,
}

impl Gui {
    pub fn new(device: &Device, output_color_format: TextureFormat, window: &Window) -> Self {
        let context = Context::default();
        let id = context.viewport_id();

        let state = State::new(
            context.clone(),
            id,
            window,
            Some(window.scale_factor() as f32),
            None,
            Some(device.limits().max_texture_dimension_2d as usize),
        );

        let renderer = Renderer::new(device, output_color_format, None, 1, false);

        Self {
            context,
            state,
            renderer,
        }
    }

    pub fn handle_event(&mut self, window: &Window, event: &WindowEvent) -> bool {
        let response = self.state.on_window_event(window, event);
        response.consumed
    }

    /// Run the UI over the current demo, draw it on top of `view`, and
    /// return the actions to apply before the next frame
    #[allow(clippy::too_many_arguments)]
    pub fn render(
        &mut self,
        device: &Device,
        queue: &wgpu::Queue,
        encoder: &mut wgpu::CommandEncoder,
        window: &Window,
        view: &wgpu::TextureView,
        ui_state: &UiState,
        demo: &Demo,
    ) -> Vec<UiAction> {
        let raw_input = self.state.take_egui_input(window);

        let mut actions = Vec::new();
        let full_output = self.context.run(raw_input, |ctx| {
            Self::ui(ctx, ui_state, demo, &mut actions);
        });

        self.state
            .handle_platform_output(window, full_output.platform_output);

        let clipped_primitives = self
            .context
            .tessellate(full_output.shapes, full_output.pixels_per_point);

        let size = window.inner_size();
        let screen_descriptor = egui_wgpu::ScreenDescriptor {
            size_in_pixels: [size.width, size.height],
            pixels_per_point: window.scale_factor() as f32,
        };

        for (id, image_delta) in &full_output.textures_delta.set {
            self.renderer
                .update_texture(device, queue, *id, image_delta);
        }

        self.renderer.update_buffers(
            device,
            queue,
            encoder,
            &clipped_primitives,
            &screen_descriptor,
        );

        {
            let render_pass = encoder.begin_render_pass(&wgpu::RenderPassDescriptor {
                label: Some("Egui Render Pass"),
                color_attachments: &[Some(wgpu::RenderPassColorAttachment {
                    view,
                    resolve_target: None,
                    ops: wgpu::Operations {
                        load: wgpu::LoadOp::Load,
                        store: wgpu::StoreOp::Store,
                    },
                    depth_slice: None,
                })],
                depth_stencil_attachment: None,
                timestamp_writes: None,
                occlusion_query_set: None,
            });

            self.renderer.render(
                &mut render_pass.forget_lifetime(),
                &clipped_primitives,
                &screen_descriptor,
            );
        }

        for id in &full_output.textures_delta.free {
            self.renderer.free_texture(id);
        }

        actions
    }

    fn ui(ctx: &Context, state: &UiState, demo: &Demo, actions: &mut Vec<UiAction>) {
        let scenario = demo.scenario();
        let kind = demo.kind();

        // Diagnostics Panel (Top Right)
        egui::Window::new("Diagnostics")
            .anchor(egui::Align2::RIGHT_TOP, [-10.0, 10.0])
            .resizable(false)
            .collapsible(true)
            .show(ctx, |ui| {
                ui.label(format!("FPS: {:.1}", state.fps));
                ui.label(format!("Frame Time: {:.2} ms", state.frame_time));
                ui.label(format!("Steps / Frame: {}", state.steps_per_frame));
                if let Some(wave) = scenario.wave() {
                    let dt = scenario.timestep().simulation_dt;
                    ui.separator();
                    ui.label(format!("Energy: {:.4}", wave.energy()));
                    ui.label(format!("Courant: {:.3}", wave.courant_number(dt)));
                }
                if state.paused {
                    ui.separator();
                    ui.label("Paused");
                }
            });

        // Scenario Controls (Top Left)
        egui::Window::new("Scenario")
            .anchor(egui::Align2::LEFT_TOP, [10.0, 10.0])
            .resizable(false)
            .collapsible(true)
            .show(ctx, |ui| {
                let mut selected = kind;
                egui::ComboBox::from_id_salt("scenario")
                    .selected_text(kind.title())
                    .show_ui(ui, |ui| {
                        for option in ScenarioKind::ALL {
                            ui.selectable_value(&mut selected, option, option.title());
                        }
                    });
                if selected != kind {
                    actions.push(UiAction::SelectScenario(selected));
                }
                ui.label(kind.description());

                ui.separator();
                ui.heading("Parameters");
                let mut dragging = false;
                for parameter in scenario.parameters() {
                    let mut t = parameter.normalized();
                    let response = ui.add(
                        egui::Slider::new(&mut t, 0.0..=1.0)
                            .show_value(false)
                            .text(parameter.label()),
                    );
                    if response.changed() {
                        actions.push(UiAction::SetParameter {
                            key: parameter.key,
                            t,
                        });
                    }
                    dragging |= response.dragged();
                }
                actions.push(UiAction::Hold(dragging));

                ui.separator();
                ui.horizontal(|ui| {
                    if let Some(wave) = scenario.wave() {
                        let pulse =
                            ui.add_enabled(!wave.is_pulse_active(), egui::Button::new("Pulse"));
                        if pulse.clicked() {
                            actions.push(UiAction::Pulse);
                        }
                    }
                    if ui.button("Reset").clicked() {
                        actions.push(UiAction::Reset);
                    }
                    let pause_label = if state.paused { "Resume" } else { "Pause" };
                    if ui.button(pause_label).clicked() {
                        actions.push(UiAction::TogglePause);
                    }
                });
            });

        // Wave Ends (Bottom Left)
        if let Some(wave) = scenario.wave() {
            egui::Window::new("Wave Ends")
                .anchor(egui::Align2::LEFT_BOTTOM, [10.0, -10.0])
                .resizable(false)
                .collapsible(true)
                .default_open(false)
                .show(ctx, |ui| {
                    let mut boundary = wave.boundary;
                    egui::ComboBox::from_label("Boundary")
                        .selected_text(boundary.label())
                        .show_ui(ui, |ui| {
                            for option in BoundaryPolicy::ALL {
                                ui.selectable_value(&mut boundary, option, option.label());
                            }
                        });
                    if boundary != wave.boundary {
                        actions.push(UiAction::SetBoundary(boundary));
                    }

                    let mut input = wave.input;
                    egui::ComboBox::from_label("Input")
                        .selected_text(input.label())
                        .show_ui(ui, |ui| {
                            for option in InputPolicy::ALL {
                                ui.selectable_value(&mut input, option, option.label());
                            }
                        });
                    if input != wave.input {
                        actions.push(UiAction::SetInput(input));
                    }
                });
        }
    }
}

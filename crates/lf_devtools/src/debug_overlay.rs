//! egui overlay drawn on top of the game scene.
//!
//! Rendering is split into four phases because `egui_wgpu::Renderer::render()`
//! wants a `RenderPass<'static>` while `begin_render_pass` borrows the
//! encoder:
//!
//!   1. `prepare()` runs the UI closure and tessellates primitives
//!   2. `upload()` pushes texture deltas and buffers through the encoder
//!   3. `paint()` draws into a pass detached with `forget_lifetime()`
//!   4. `cleanup()` frees textures egui dropped this frame
//!
//! UI logic runs only while `visible` is set (F3 toggles it), but event
//! handling stays active regardless so clicks on a shown overlay never leak
//! into the game.

use lf_core::time::TimeState;
use winit::window::Window;

/// Read-only snapshot of the frame the overlay describes.
#[derive(Debug, Clone, Default)]
pub struct OverlayStats {
    pub draw_calls: u32,
    pub texture_binds: u32,
    pub sprite_count: u32,
    /// GPU memory estimate in megabytes
    pub memory_estimate_mb: f32,
    /// Outcome label, e.g. "playing"
    pub outcome_label: String,
    /// Last qualifying landing, "win", "lose", or "none"
    pub landing_label: String,
    pub player_position: (f32, f32),
    pub player_velocity: (f32, f32),
    /// True while the collision-box view (F4) is on
    pub collision_view: bool,
    pub paused: bool,
}

/// Button presses collected from the overlay UI, applied by the main loop.
#[derive(Debug, Clone, Default)]
pub struct OverlayActions {
    pub toggle_pause: bool,
    /// Advance exactly one fixed step while paused
    pub single_step: bool,
}

pub struct DebugOverlay {
    pub egui_ctx: egui::Context,
    pub egui_winit_state: egui_winit::State,
    pub egui_renderer: egui_wgpu::Renderer,
    pub visible: bool,
}

impl DebugOverlay {
    pub fn new(
        device: &wgpu::Device,
        surface_format: wgpu::TextureFormat,
        window: &Window,
    ) -> Self {
        let egui_ctx = egui::Context::default();
        let egui_winit_state = egui_winit::State::new(
            egui_ctx.clone(),
            egui_ctx.viewport_id(),
            window,
            None,
            None,
            None,
        );
        let egui_renderer = egui_wgpu::Renderer::new(device, surface_format, None, 1, false);

        Self {
            egui_ctx,
            egui_winit_state,
            egui_renderer,
            visible: false,
        }
    }

    pub fn handle_window_event(
        &mut self,
        window: &Window,
        event: &winit::event::WindowEvent,
    ) -> bool {
        let response = self.egui_winit_state.on_window_event(window, event);
        response.consumed
    }

    pub fn toggle(&mut self) {
        self.visible = !self.visible;
        log::info!("Debug overlay: {}", if self.visible { "ON" } else { "OFF" });
    }

    pub fn prepare(
        &mut self,
        window: &Window,
        time: &TimeState,
        stats: Option<OverlayStats>,
    ) -> (
        Vec<egui::ClippedPrimitive>,
        egui::TexturesDelta,
        OverlayActions,
    ) {
        let mut actions = OverlayActions::default();
        let raw_input = self.egui_winit_state.take_egui_input(window);
        let full_output = self.egui_ctx.run(raw_input, |ctx| {
            if self.visible {
                egui::Window::new("Debug")
                    .default_pos([10.0, 10.0])
                    .show(ctx, |ui| {
                        ui.label(format!("FPS: {:.1}", time.smoothed_fps));
                        ui.label(format!("Frame time: {:.2} ms", time.smoothed_frame_time_ms));
                        ui.label(format!("Steps this frame: {}", time.steps_this_frame));
                        ui.label(format!("Total steps: {}", time.fixed_step_count));
                        ui.label(format!("Sim time: {:.1} s", time.total_time));
                        ui.label(format!("Alpha: {:.2}", time.interpolation_alpha));
                        if let Some(ref stats) = stats {
                            ui.separator();
                            ui.label(format!("State: {}", stats.outcome_label));
                            ui.label(format!("Landing: {}", stats.landing_label));
                            ui.label(format!(
                                "Player: ({:.2}, {:.2})",
                                stats.player_position.0, stats.player_position.1
                            ));
                            ui.label(format!(
                                "Velocity: ({:.2}, {:.2})",
                                stats.player_velocity.0, stats.player_velocity.1
                            ));

                            ui.separator();
                            ui.label(format!("Draw calls: {}", stats.draw_calls));
                            ui.label(format!("Texture binds: {}", stats.texture_binds));
                            ui.label(format!("Sprites: {}", stats.sprite_count));
                            ui.label(format!("Memory: {:.1} MB", stats.memory_estimate_mb));
                            if stats.collision_view {
                                ui.label("Collision view: ON (F4)");
                            }

                            ui.separator();
                            ui.horizontal(|ui| {
                                let pause_label = if stats.paused { "Resume" } else { "Pause" };
                                if ui.button(pause_label).clicked() {
                                    actions.toggle_pause = true;
                                }
                                if stats.paused && ui.button("Step").clicked() {
                                    actions.single_step = true;
                                }
                            });
                            if stats.paused {
                                ui.label("\u{23f8} PAUSED");
                            }
                        }
                    });
            }
        });

        self.egui_winit_state
            .handle_platform_output(window, full_output.platform_output);

        let primitives = self
            .egui_ctx
            .tessellate(full_output.shapes, full_output.pixels_per_point);

        (primitives, full_output.textures_delta, actions)
    }

    /// Push texture deltas and vertex data to the GPU. Must run before the
    /// egui render pass opens.
    pub fn upload(
        &mut self,
        device: &wgpu::Device,
        queue: &wgpu::Queue,
        encoder: &mut wgpu::CommandEncoder,
        primitives: &[egui::ClippedPrimitive],
        textures_delta: &egui::TexturesDelta,
        screen_descriptor: &egui_wgpu::ScreenDescriptor,
    ) {
        for (id, image_delta) in &textures_delta.set {
            self.egui_renderer
                .update_texture(device, queue, *id, image_delta);
        }

        self.egui_renderer
            .update_buffers(device, queue, encoder, primitives, screen_descriptor);
    }

    /// Draw the prepared primitives into an open render pass.
    pub fn paint(
        &self,
        render_pass: &mut wgpu::RenderPass<'static>,
        primitives: &[egui::ClippedPrimitive],
        screen_descriptor: &egui_wgpu::ScreenDescriptor,
    ) {
        self.egui_renderer
            .render(render_pass, primitives, screen_descriptor);
    }

    /// Release textures egui stopped referencing this frame. Runs after the
    /// pass is submitted.
    pub fn cleanup(&mut self, textures_delta: &egui::TexturesDelta) {
        for id in &textures_delta.free {
            self.egui_renderer.free_texture(id);
        }
    }
}

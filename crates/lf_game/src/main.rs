//! Landfall -- main loop and application entry point.
//!
//! winit owns the event loop through `ApplicationHandler`; each frame runs
//! inside `RedrawRequested` on a **fixed-timestep** clock (see `TimeState`):
//!
//!   1. `begin_frame()` feeds the measured wall-clock delta into the accumulator
//!   2. `while should_step()` drains whole fixed-dt slices through the world
//!   3. Rebuild the sprite mesh when a step or a view toggle changed what is drawn
//!   4. Upload draw data, issue draw calls, composite egui overlay
//!
//! The game ends the first time the player lands on a platform: winning and
//! losing platforms alternate along the row, and the outcome is absorbing.
//! Once it is reached the simulation phase is skipped entirely -- simulated
//! time stops while rendering and frame-level input (quit, overlay toggles)
//! keep running.

mod collision;
mod config;
mod entity;
mod outcome;
#[cfg(test)]
mod playthrough;
mod world;

use std::collections::HashMap;
use std::path::Path;
use std::sync::Arc;

use glam::Vec2;
use wgpu::util::DeviceExt;
use winit::application::ApplicationHandler;
use winit::event::{ElementState, WindowEvent};
use winit::event_loop::{ActiveEventLoop, ControlFlow, EventLoop};
use winit::keyboard::{KeyCode, PhysicalKey};
use winit::window::{Window, WindowId};

use config::{load_config, GameConfig};
use lf_core::animation::Facing;
use lf_core::input::{InputState, Key};
use lf_core::time::TimeState;
use lf_devtools::{DebugOverlay, OverlayStats};
use lf_platform::window::PlatformConfig;
use lf_render::{Camera2D, GpuContext, SpritePipeline, SpriteVertex, Texture};
use outcome::GameOutcome;
use world::{GameWorld, PlayerIntent};

const CONFIG_PATH: &str = "assets/config.json";
const DEBUG_WHITE_ASSET: &str = "__debug_white";
// World-space half extents of the fixed orthographic view.
const CAMERA_HALF_WIDTH: f32 = 5.0;
const CAMERA_HALF_HEIGHT: f32 = 3.75;
const MESSAGE_SIZE: f32 = 1.0;
const FULL_UV: [f32; 4] = [0.0, 0.0, 1.0, 1.0];
const SPRITE_WHITE: [f32; 4] = [1.0, 1.0, 1.0, 1.0];

/// A span of the index stream drawn under one texture binding. Consecutive
/// quads with the same texture merge into one call, so the render pass only
/// rebinds when the texture actually changes.
#[derive(Debug, Clone)]
struct DrawCall {
    texture_key: Arc<str>,
    index_start: u32,
    index_count: u32,
}

struct QuadSpec<'a> {
    texture_key: &'a str,
    center_x: f32,
    center_y: f32,
    width: f32,
    height: f32,
    uv: [f32; 4],
    color: [f32; 4],
}

struct GpuSpriteTexture {
    texture: Texture,
    bind_group: wgpu::BindGroup,
}

/// Everything the running game mutates. Built in `ApplicationHandler::resumed`
/// once a window and GPU surface exist, never before.
///
/// Fields fall into three groups:
///  - **core systems** (time, input, camera) ticked every frame
///  - **game state** (world, config, textures) advanced only by fixed steps
///  - **GPU mesh resources** rebuilt whenever the drawn world changes
struct EngineState {
    window: Arc<Window>,
    gpu: GpuContext,
    time: TimeState,
    input: InputState,
    camera: Camera2D,
    sprite_pipeline: SpritePipeline,
    debug_overlay: DebugOverlay,

    config: GameConfig,
    world: GameWorld,
    show_collision_debug: bool,
    paused: bool,
    single_step_requested: bool,
    textures: HashMap<Arc<str>, GpuSpriteTexture>,

    // Sprite mesh, assembled on the CPU and streamed into these buffers
    // whenever the world changes. Capacities double as needed, never shrink.
    vertex_buffer: wgpu::Buffer,
    index_buffer: wgpu::Buffer,
    camera_buffer: wgpu::Buffer,
    camera_bind_group: wgpu::BindGroup,
    mesh_vertex_capacity: usize,
    mesh_index_capacity: usize,
    draw_calls: Vec<DrawCall>,
    sprite_count: usize,
}

impl EngineState {
    fn new(window: Arc<Window>, config: GameConfig) -> Self {
        let gpu = GpuContext::new(window.clone());
        let time = TimeState::new();
        let input = InputState::new();
        let sprite_pipeline = SpritePipeline::new(&gpu.device, gpu.surface_format);
        let debug_overlay = DebugOverlay::new(&gpu.device, gpu.surface_format, &window);

        let world = GameWorld::new(&config);
        let camera = Camera2D::new(CAMERA_HALF_WIDTH, CAMERA_HALF_HEIGHT);

        let camera_uniform = camera.build_uniform();
        let camera_buffer = gpu
            .device
            .create_buffer_init(&wgpu::util::BufferInitDescriptor {
                label: Some("Camera Uniform Buffer"),
                contents: bytemuck::cast_slice(&[camera_uniform]),
                usage: wgpu::BufferUsages::UNIFORM | wgpu::BufferUsages::COPY_DST,
            });
        let camera_bind_group =
            sprite_pipeline.create_camera_bind_group(&gpu.device, &camera_buffer);
        let vertex_buffer = create_vertex_buffer(&gpu.device, 1);
        let index_buffer = create_index_buffer(&gpu.device, 1);

        // Every texture the game can draw is known up front, so all of them
        // load here and a missing file fails fast instead of mid-game.
        let mut textures = HashMap::new();
        for path in [
            &config.player_sheet,
            &config.platform_win,
            &config.platform_lose,
            &config.message_win,
            &config.message_lose,
        ] {
            if textures.contains_key(path.as_str()) {
                continue;
            }
            let texture = load_texture_asset(&gpu.device, &gpu.queue, &sprite_pipeline, path)
                .unwrap_or_else(|err| panic!("Initial texture load failed: {err}"));
            textures.insert(Arc::from(path.as_str()), texture);
        }

        // Solid white for collision-view boxes, tinted via vertex color.
        let white = Texture::from_rgba8(
            &gpu.device,
            &gpu.queue,
            &[255, 255, 255, 255],
            1,
            1,
            "debug_white",
        );
        let white_bind_group = sprite_pipeline.create_texture_bind_group(&gpu.device, &white);
        textures.insert(
            Arc::from(DEBUG_WHITE_ASSET),
            GpuSpriteTexture {
                texture: white,
                bind_group: white_bind_group,
            },
        );

        let mut state = Self {
            window,
            gpu,
            time,
            input,
            camera,
            sprite_pipeline,
            debug_overlay,
            config,
            world,
            show_collision_debug: false,
            paused: false,
            single_step_requested: false,
            textures,
            vertex_buffer,
            index_buffer,
            camera_buffer,
            camera_bind_group,
            mesh_vertex_capacity: 0,
            mesh_index_capacity: 0,
            draw_calls: Vec::new(),
            sprite_count: 0,
        };

        state.ensure_mesh_capacity(4, 6);
        state.rebuild_world_mesh();
        state
    }

    fn estimate_memory_mb(&self) -> f32 {
        let mut bytes: usize = 0;
        // Uploaded textures, RGBA8 so four bytes per texel.
        for tex in self.textures.values() {
            let (w, h) = tex.texture.size;
            bytes += (w as usize) * (h as usize) * 4;
        }
        // Mesh buffer capacity, counted whether or not it is full.
        bytes += self.mesh_vertex_capacity * std::mem::size_of::<SpriteVertex>();
        bytes += self.mesh_index_capacity * std::mem::size_of::<u32>();
        bytes as f32 / (1024.0 * 1024.0)
    }

    fn rebuild_world_mesh(&mut self) {
        // One CPU-side mesh covers the world and any debug overlays.
        let (vertices, indices, draw_calls) = self.build_mesh();
        self.ensure_mesh_capacity(vertices.len(), indices.len());
        self.sprite_count = vertices.len() / 4;
        self.draw_calls = draw_calls;

        if !vertices.is_empty() {
            self.gpu
                .queue
                .write_buffer(&self.vertex_buffer, 0, bytemuck::cast_slice(&vertices));
        }
        if !indices.is_empty() {
            self.gpu
                .queue
                .write_buffer(&self.index_buffer, 0, bytemuck::cast_slice(&indices));
        }
    }

    fn build_mesh(&self) -> (Vec<SpriteVertex>, Vec<u32>, Vec<DrawCall>) {
        let quad_estimate = 2 * self.world.platforms.len() + 4;
        let mut vertices = Vec::with_capacity(quad_estimate * 4);
        let mut indices = Vec::with_capacity(quad_estimate * 6);
        let mut draw_calls = Vec::with_capacity(16);

        // Draw order is player, then platforms, then the end-game message,
        // so the message always reads on top of the scene.
        let player = &self.world.player;
        let player_uv = player
            .animation
            .as_ref()
            .map(|cycle| cycle.current_uv())
            .unwrap_or(FULL_UV);
        add_quad(
            &mut vertices,
            &mut indices,
            &mut draw_calls,
            QuadSpec {
                texture_key: &player.texture,
                center_x: player.position.x,
                center_y: player.position.y,
                width: player.size.x,
                height: player.size.y,
                uv: player_uv,
                color: SPRITE_WHITE,
            },
        );

        for platform in &self.world.platforms {
            add_quad(
                &mut vertices,
                &mut indices,
                &mut draw_calls,
                QuadSpec {
                    texture_key: &platform.texture,
                    center_x: platform.position.x,
                    center_y: platform.position.y,
                    width: platform.size.x,
                    height: platform.size.y,
                    uv: FULL_UV,
                    color: SPRITE_WHITE,
                },
            );
        }

        let message_texture = match self.world.outcome {
            GameOutcome::Playing => None,
            GameOutcome::Won => Some(self.config.message_win.as_str()),
            GameOutcome::Lost => Some(self.config.message_lose.as_str()),
        };
        if let Some(texture_key) = message_texture {
            add_quad(
                &mut vertices,
                &mut indices,
                &mut draw_calls,
                QuadSpec {
                    texture_key,
                    center_x: 0.0,
                    center_y: 0.0,
                    width: MESSAGE_SIZE,
                    height: MESSAGE_SIZE,
                    uv: FULL_UV,
                    color: SPRITE_WHITE,
                },
            );
        }

        // Collision view renders every body's box as a translucent fill,
        // platforms green and the player red.
        if self.show_collision_debug {
            for platform in &self.world.platforms {
                add_quad(
                    &mut vertices,
                    &mut indices,
                    &mut draw_calls,
                    QuadSpec {
                        texture_key: DEBUG_WHITE_ASSET,
                        center_x: platform.position.x,
                        center_y: platform.position.y,
                        width: platform.size.x,
                        height: platform.size.y,
                        uv: FULL_UV,
                        color: [0.15, 0.9, 0.15, 0.35],
                    },
                );
            }
            add_quad(
                &mut vertices,
                &mut indices,
                &mut draw_calls,
                QuadSpec {
                    texture_key: DEBUG_WHITE_ASSET,
                    center_x: player.position.x,
                    center_y: player.position.y,
                    width: player.size.x,
                    height: player.size.y,
                    uv: FULL_UV,
                    color: [1.0, 0.3, 0.3, 0.35],
                },
            );
        }

        (vertices, indices, draw_calls)
    }

    fn ensure_mesh_capacity(&mut self, vertex_count: usize, index_count: usize) {
        let needed_vertices = vertex_count.max(1);
        if needed_vertices > self.mesh_vertex_capacity {
            self.mesh_vertex_capacity = needed_vertices.next_power_of_two();
            self.vertex_buffer = create_vertex_buffer(&self.gpu.device, self.mesh_vertex_capacity);
        }

        let needed_indices = index_count.max(1);
        if needed_indices > self.mesh_index_capacity {
            self.mesh_index_capacity = needed_indices.next_power_of_two();
            self.index_buffer = create_index_buffer(&self.gpu.device, self.mesh_index_capacity);
        }
    }
}

struct App {
    platform: PlatformConfig,
    game_config: GameConfig,
    state: Option<EngineState>,
}

impl App {
    fn new(game_config: GameConfig) -> Self {
        let platform = PlatformConfig {
            title: game_config.window_title.clone(),
            width: game_config.window_width,
            height: game_config.window_height,
        };
        Self {
            platform,
            game_config,
            state: None,
        }
    }
}

impl ApplicationHandler for App {
    fn resumed(&mut self, event_loop: &ActiveEventLoop) {
        if self.state.is_some() {
            return;
        }
        let window = lf_platform::window::create_window(event_loop, &self.platform);
        log::info!(
            "Window ready: '{}' at {}x{}",
            self.platform.title,
            self.platform.width,
            self.platform.height
        );
        self.state = Some(EngineState::new(window, self.game_config.clone()));
    }

    fn about_to_wait(&mut self, _event_loop: &ActiveEventLoop) {
        if let Some(state) = &self.state {
            state.window.request_redraw();
        }
    }

    fn window_event(
        &mut self,
        event_loop: &ActiveEventLoop,
        _window_id: WindowId,
        event: WindowEvent,
    ) {
        let state = match self.state.as_mut() {
            Some(s) => s,
            None => return,
        };

        let egui_consumed = state
            .debug_overlay
            .handle_window_event(&state.window, &event);

        match event {
            WindowEvent::CloseRequested => {
                log::info!("Window close requested, shutting down.");
                event_loop.exit();
            }

            WindowEvent::Resized(physical_size) => {
                let w = physical_size.width;
                let h = physical_size.height;
                if w > 0 && h > 0 {
                    state.gpu.resize(w, h);
                    log::debug!("Surface resized to {}x{}", w, h);
                }
            }

            WindowEvent::KeyboardInput { event, .. } if !egui_consumed => {
                if let PhysicalKey::Code(key_code) = event.physical_key {
                    if let Some(engine_key) = map_key(key_code) {
                        match event.state {
                            ElementState::Pressed => state.input.key_down(engine_key),
                            ElementState::Released => state.input.key_up(engine_key),
                        }
                    }
                }
            }

            WindowEvent::RedrawRequested => {
                if state.gpu.size.0 == 0 || state.gpu.size.1 == 0 {
                    return;
                }

                // Frame-level controls work in every state, including after
                // the game has ended.
                if state.input.is_just_pressed(Key::Q) || state.input.is_just_pressed(Key::Escape)
                {
                    log::info!("Quit requested, exiting.");
                    event_loop.exit();
                    return;
                }
                let mut world_changed = false;
                if state.input.is_just_pressed(Key::F3) {
                    state.debug_overlay.toggle();
                }
                if state.input.is_just_pressed(Key::F4) {
                    state.show_collision_debug = !state.show_collision_debug;
                    world_changed = true;
                    log::info!(
                        "Collision view: {}",
                        if state.show_collision_debug {
                            "ON"
                        } else {
                            "OFF"
                        }
                    );
                }

                // Fixed-step simulation phase. A terminal outcome freezes
                // simulated time entirely, so nothing here runs after the
                // game ends.
                if !state.world.outcome.is_terminal() {
                    state.time.begin_frame();
                    state
                        .world
                        .set_player_intent(read_player_intent(&state.input));

                    while state.time.should_step() {
                        // Skip simulation when paused (unless single-step requested)
                        if state.paused && !state.single_step_requested {
                            break;
                        }
                        state.single_step_requested = false;
                        state.world.step(state.time.fixed_dt as f32);
                    }
                    state.time.end_frame();

                    if state.time.steps_this_frame > 0 {
                        world_changed = true;
                    }
                    if state.world.resolve_outcome() {
                        world_changed = true;
                    }
                }

                if world_changed {
                    state.rebuild_world_mesh();
                }

                // From here on the frame only reads simulation state.
                let camera_uniform = state.camera.build_uniform();
                state.gpu.queue.write_buffer(
                    &state.camera_buffer,
                    0,
                    bytemuck::cast_slice(&[camera_uniform]),
                );

                let Some((output, view)) = state.gpu.begin_frame() else {
                    return;
                };

                let bind_estimate = count_texture_binds(&state.draw_calls);
                let player = &state.world.player;
                let landing_label = player
                    .last_landing
                    .map(|kind| kind.label())
                    .unwrap_or("none");
                let (egui_primitives, egui_textures_delta, overlay_actions) =
                    state.debug_overlay.prepare(
                        &state.window,
                        &state.time,
                        Some(OverlayStats {
                            draw_calls: state.draw_calls.len() as u32,
                            texture_binds: bind_estimate as u32,
                            sprite_count: state.sprite_count as u32,
                            memory_estimate_mb: state.estimate_memory_mb(),
                            outcome_label: state.world.outcome.label().to_string(),
                            landing_label: landing_label.to_string(),
                            player_position: (player.position.x, player.position.y),
                            player_velocity: (player.velocity.x, player.velocity.y),
                            collision_view: state.show_collision_debug,
                            paused: state.paused,
                        }),
                    );

                // Overlay buttons act on the next frame's simulation phase.
                if overlay_actions.toggle_pause {
                    state.paused = !state.paused;
                    log::info!(
                        "Simulation {}",
                        if state.paused { "paused" } else { "resumed" }
                    );
                }
                if overlay_actions.single_step {
                    state.single_step_requested = true;
                }
                let screen_descriptor = egui_wgpu::ScreenDescriptor {
                    size_in_pixels: [state.gpu.size.0, state.gpu.size.1],
                    pixels_per_point: state.window.scale_factor() as f32,
                };

                let mut encoder =
                    state
                        .gpu
                        .device
                        .create_command_encoder(&wgpu::CommandEncoderDescriptor {
                            label: Some("Frame Encoder"),
                        });

                {
                    let clear_color = wgpu::Color {
                        r: 0.1922,
                        g: 0.549,
                        b: 0.9059,
                        a: 1.0,
                    };
                    let mut bound_texture_key: Option<&Arc<str>> = None;
                    let mut render_pass = encoder.begin_render_pass(&wgpu::RenderPassDescriptor {
                        label: Some("World Render Pass"),
                        color_attachments: &[Some(wgpu::RenderPassColorAttachment {
                            view: &view,
                            resolve_target: None,
                            ops: wgpu::Operations {
                                load: wgpu::LoadOp::Clear(clear_color),
                                store: wgpu::StoreOp::Store,
                            },
                        })],
                        depth_stencil_attachment: None,
                        ..Default::default()
                    });

                    render_pass.set_pipeline(&state.sprite_pipeline.render_pipeline);
                    render_pass.set_bind_group(0, &state.camera_bind_group, &[]);
                    render_pass.set_vertex_buffer(0, state.vertex_buffer.slice(..));
                    render_pass
                        .set_index_buffer(state.index_buffer.slice(..), wgpu::IndexFormat::Uint32);

                    for draw in &state.draw_calls {
                        if let Some(texture) = state.textures.get(&draw.texture_key) {
                            let rebind = match bound_texture_key {
                                Some(last) => **last != *draw.texture_key,
                                None => true,
                            };
                            if rebind {
                                render_pass.set_bind_group(1, &texture.bind_group, &[]);
                                bound_texture_key = Some(&draw.texture_key);
                            }
                            render_pass.draw_indexed(
                                draw.index_start..(draw.index_start + draw.index_count),
                                0,
                                0..1,
                            );
                        }
                    }
                }

                state.debug_overlay.upload(
                    &state.gpu.device,
                    &state.gpu.queue,
                    &mut encoder,
                    &egui_primitives,
                    &egui_textures_delta,
                    &screen_descriptor,
                );

                {
                    let mut egui_pass = encoder
                        .begin_render_pass(&wgpu::RenderPassDescriptor {
                            label: Some("egui Render Pass"),
                            color_attachments: &[Some(wgpu::RenderPassColorAttachment {
                                view: &view,
                                resolve_target: None,
                                ops: wgpu::Operations {
                                    load: wgpu::LoadOp::Load,
                                    store: wgpu::StoreOp::Store,
                                },
                            })],
                            depth_stencil_attachment: None,
                            ..Default::default()
                        })
                        .forget_lifetime();

                    state
                        .debug_overlay
                        .paint(&mut egui_pass, &egui_primitives, &screen_descriptor);
                }

                state.debug_overlay.cleanup(&egui_textures_delta);

                state.gpu.queue.submit(std::iter::once(encoder.finish()));
                output.present();

                // Edge-triggered input (just_pressed / just_released) is
                // consumed by the frame-level handlers above in the same
                // frame it arrives, so it always clears here.
                state.input.end_frame();
            }

            _ => {}
        }
    }
}

fn create_vertex_buffer(device: &wgpu::Device, capacity: usize) -> wgpu::Buffer {
    let size_bytes = (capacity * std::mem::size_of::<SpriteVertex>()).max(1) as u64;
    device.create_buffer(&wgpu::BufferDescriptor {
        label: Some("World Vertex Buffer"),
        size: size_bytes,
        usage: wgpu::BufferUsages::VERTEX | wgpu::BufferUsages::COPY_DST,
        mapped_at_creation: false,
    })
}

fn create_index_buffer(device: &wgpu::Device, capacity: usize) -> wgpu::Buffer {
    let size_bytes = (capacity * std::mem::size_of::<u32>()).max(1) as u64;
    device.create_buffer(&wgpu::BufferDescriptor {
        label: Some("World Index Buffer"),
        size: size_bytes,
        usage: wgpu::BufferUsages::INDEX | wgpu::BufferUsages::COPY_DST,
        mapped_at_creation: false,
    })
}

fn add_quad(
    vertices: &mut Vec<SpriteVertex>,
    indices: &mut Vec<u32>,
    draw_calls: &mut Vec<DrawCall>,
    spec: QuadSpec<'_>,
) {
    let half_w = spec.width * 0.5;
    let half_h = spec.height * 0.5;
    let base_index = vertices.len() as u32;
    let [u0, v0, u1, v1] = spec.uv;

    // v = 0 is the top of the image, so the bottom corners sample v1.
    vertices.push(SpriteVertex {
        position: [spec.center_x - half_w, spec.center_y - half_h],
        tex_coords: [u0, v1],
        color: spec.color,
    });
    vertices.push(SpriteVertex {
        position: [spec.center_x + half_w, spec.center_y - half_h],
        tex_coords: [u1, v1],
        color: spec.color,
    });
    vertices.push(SpriteVertex {
        position: [spec.center_x + half_w, spec.center_y + half_h],
        tex_coords: [u1, v0],
        color: spec.color,
    });
    vertices.push(SpriteVertex {
        position: [spec.center_x - half_w, spec.center_y + half_h],
        tex_coords: [u0, v0],
        color: spec.color,
    });

    let draw_start = indices.len() as u32;
    indices.extend_from_slice(&[
        base_index,
        base_index + 1,
        base_index + 2,
        base_index,
        base_index + 2,
        base_index + 3,
    ]);

    push_draw_call(draw_calls, Arc::from(spec.texture_key), draw_start, 6);
}

/// Record one quad's draw call, folding it into the previous call when the
/// texture matches and the index ranges touch. Quads arrive in draw order, so
/// same-texture runs become a single `draw_indexed`.
fn push_draw_call(
    draw_calls: &mut Vec<DrawCall>,
    texture_key: Arc<str>,
    index_start: u32,
    index_count: u32,
) {
    if let Some(last) = draw_calls.last_mut() {
        let contiguous = last.index_start + last.index_count == index_start;
        if *last.texture_key == *texture_key && contiguous {
            last.index_count += index_count;
            return;
        }
    }
    draw_calls.push(DrawCall {
        texture_key,
        index_start,
        index_count,
    });
}

fn load_texture_asset(
    device: &wgpu::Device,
    queue: &wgpu::Queue,
    pipeline: &SpritePipeline,
    asset_path: &str,
) -> Result<GpuSpriteTexture, String> {
    let bytes = std::fs::read(asset_path)
        .map_err(|e| format!("Failed to read texture '{asset_path}': {e}"))?;
    let texture = Texture::from_bytes(device, queue, &bytes, asset_path)?;
    let bind_group = pipeline.create_texture_bind_group(device, &texture);
    Ok(GpuSpriteTexture {
        texture,
        bind_group,
    })
}

fn count_texture_binds(draw_calls: &[DrawCall]) -> usize {
    let mut binds = 0usize;
    let mut bound: Option<&str> = None;
    for draw in draw_calls {
        let key: &str = &draw.texture_key;
        if bound != Some(key) {
            bound = Some(key);
            binds += 1;
        }
    }
    binds
}

fn map_key(key_code: KeyCode) -> Option<Key> {
    match key_code {
        KeyCode::ArrowLeft => Some(Key::Left),
        KeyCode::ArrowRight => Some(Key::Right),
        KeyCode::ArrowUp => Some(Key::Up),
        KeyCode::ArrowDown => Some(Key::Down),
        KeyCode::KeyQ => Some(Key::Q),
        KeyCode::Escape => Some(Key::Escape),
        KeyCode::F3 => Some(Key::F3),
        KeyCode::F4 => Some(Key::F4),
        _ => None,
    }
}

/// Map held arrow keys to a movement vector, and fresh presses to a facing
/// change. Held keys keep the player moving; facing only turns on a new
/// press, so releasing one of two held keys never flips the character.
fn read_player_intent(input: &InputState) -> PlayerIntent {
    let mut movement = Vec2::ZERO;
    if input.is_held(Key::Left) {
        movement.x -= 1.0;
    }
    if input.is_held(Key::Right) {
        movement.x += 1.0;
    }
    if input.is_held(Key::Up) {
        movement.y += 1.0;
    }
    if input.is_held(Key::Down) {
        movement.y -= 1.0;
    }

    let facing = if input.is_just_pressed(Key::Left) {
        Some(Facing::Left)
    } else if input.is_just_pressed(Key::Right) {
        Some(Facing::Right)
    } else if input.is_just_pressed(Key::Up) {
        Some(Facing::Up)
    } else if input.is_just_pressed(Key::Down) {
        Some(Facing::Down)
    } else {
        None
    };

    PlayerIntent { movement, facing }
}

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    log::info!("Landfall starting...");

    let game_config = load_config(Path::new(CONFIG_PATH))
        .unwrap_or_else(|err| panic!("Failed to load initial config: {err}"));

    let event_loop = EventLoop::new().expect("Failed to create event loop");
    event_loop.set_control_flow(ControlFlow::Poll);

    let mut app = App::new(game_config);
    event_loop.run_app(&mut app).expect("Event loop error");
}

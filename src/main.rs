mod app;

use std::path::Path;
use std::sync::Arc;
use std::time::Instant;

use glam::Vec2;
use glutin::prelude::*;
use glutin::surface::WindowSurface;
use rand::Rng;
use tracing::{debug, error, info, warn};
use tracing_subscriber::filter::EnvFilter;
use winit::application::ApplicationHandler;
use winit::dpi::PhysicalSize;
use winit::event::{ElementState, MouseButton, WindowEvent};
use winit::event_loop::{ActiveEventLoop, EventLoop};
use winit::keyboard::{KeyCode, PhysicalKey};
use winit::window::{Window, WindowId};

use egui_glow::EguiGlow;

use rolling_score::constants::*;
use rolling_score::{ui, LabelConfig, LabelError, ScoreLabel};

/// Initialize logging to stderr, defaulting to `info`.
fn init_logging() {
    let filter = EnvFilter::builder()
        .with_default_directive(tracing::Level::INFO.into())
        .from_env_lossy();

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_writer(std::io::stderr)
        .init();
}

/// Configuration from the JSON file named by the first argument, if any
fn load_config() -> Result<LabelConfig, LabelError> {
    match std::env::args_os().nth(1) {
        Some(path) => {
            info!(path = %Path::new(&path).display(), "loading label config");
            LabelConfig::from_file(Path::new(&path))
        }
        None => Ok(LabelConfig::default()),
    }
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    init_logging();

    let config = load_config()?;
    info!(value = config.value, "starting rolling score demo");

    let event_loop = EventLoop::new()?;
    let mut app = App::new(config);
    event_loop.run_app(&mut app)?;
    Ok(())
}

struct App {
    config: LabelConfig,
    state: Option<AppState>,
}

struct AppState {
    // Window and GL
    window: Window,
    gl_surface: glutin::surface::Surface<WindowSurface>,
    gl_context: glutin::context::PossiblyCurrentContext,
    gl: Arc<glow::Context>,
    egui_glow: EguiGlow,

    label: ScoreLabel,
    initial_value: i64,

    // Cursor in egui points
    mouse_pos: Vec2,

    // Timing
    last_frame_time: Instant,
}

impl App {
    fn new(config: LabelConfig) -> Self {
        Self {
            config,
            state: None,
        }
    }
}

/// Label anchor: horizontally centered near the top, in egui points
fn label_anchor(size: PhysicalSize<u32>, scale_factor: f64) -> Vec2 {
    let width = size.width as f32 / scale_factor as f32;
    Vec2::new(width / 2.0, DEMO_LABEL_TOP)
}

impl ApplicationHandler for App {
    fn resumed(&mut self, event_loop: &ActiveEventLoop) {
        if self.state.is_some() {
            return;
        }

        let app::WindowContext {
            window,
            gl_surface,
            gl_context,
            gl,
            egui_glow,
        } = match app::create_window(event_loop) {
            Ok(ctx) => ctx,
            Err(err) => {
                error!(%err, "failed to create window");
                event_loop.exit();
                return;
            }
        };

        let anchor = label_anchor(window.inner_size(), window.scale_factor());
        let label = match ScoreLabel::new(self.config.clone(), anchor) {
            Ok(label) => label,
            Err(err) => {
                error!(%err, "invalid label config");
                event_loop.exit();
                return;
            }
        };

        self.state = Some(AppState {
            window,
            gl_surface,
            gl_context,
            gl,
            egui_glow,
            label,
            initial_value: self.config.value,
            mouse_pos: anchor,
            last_frame_time: Instant::now(),
        });
    }

    fn window_event(&mut self, event_loop: &ActiveEventLoop, _id: WindowId, event: WindowEvent) {
        let state = match &mut self.state {
            Some(s) => s,
            None => return,
        };

        // Let egui handle the event first
        let egui_consumed = state.egui_glow.on_window_event(&state.window, &event);

        match event {
            WindowEvent::CloseRequested => {
                if let Err(err) = state.label.dispose() {
                    warn!(%err, "dispose failed");
                }
                event_loop.exit();
            }
            WindowEvent::Resized(size) => {
                app::resize_surface(&state.gl_surface, &state.gl_context, size.width, size.height);
                state
                    .label
                    .set_position(label_anchor(size, state.window.scale_factor()));
            }
            WindowEvent::KeyboardInput { event, .. } => {
                if egui_consumed.consumed || event.repeat || event.state != ElementState::Pressed {
                    return;
                }
                if let PhysicalKey::Code(key) = event.physical_key {
                    if key == KeyCode::Escape {
                        event_loop.exit();
                        return;
                    }
                    state.handle_key(key);
                }
            }
            WindowEvent::CursorMoved { position, .. } => {
                let scale = state.window.scale_factor();
                state.mouse_pos = Vec2::new((position.x / scale) as f32, (position.y / scale) as f32);
            }
            WindowEvent::MouseInput { state: btn_state, button, .. } => {
                if !egui_consumed.consumed && btn_state == ElementState::Released {
                    state.handle_click(button);
                }
            }
            WindowEvent::RedrawRequested => {
                state.update_and_render();
                state.window.request_redraw();
            }
            _ => {}
        }
    }

    fn about_to_wait(&mut self, _event_loop: &ActiveEventLoop) {
        if let Some(state) = &self.state {
            state.window.request_redraw();
        }
    }
}

impl AppState {
    fn update_and_render(&mut self) {
        puffin::profile_function!();

        let current_time = Instant::now();
        let raw_dt = (current_time - self.last_frame_time).as_secs_f32();
        self.last_frame_time = current_time;

        // Cap dt so a stalled frame doesn't land every announcement at once
        let dt = raw_dt.min(MAX_ANIMATION_DT);

        if let Err(err) = self.label.update(dt) {
            warn!(%err, "label update failed");
        }
        for event in self.label.drain_events() {
            debug!(?event, "label event");
        }

        let label = &self.label;
        self.egui_glow.run(&self.window, |ctx| {
            ui::draw_score_label(ctx, label);
            ui::draw_announcements(ctx, label);
            ui::draw_help(ctx, label);
        });

        unsafe {
            use glow::HasContext;
            let [r, g, b] = DEMO_BACKGROUND;
            self.gl.clear_color(r, g, b, 1.0);
            self.gl.clear(glow::COLOR_BUFFER_BIT);
        }

        self.egui_glow.paint(&self.window);

        if let Err(err) = self.gl_surface.swap_buffers(&self.gl_context) {
            warn!(%err, "swap buffers failed");
        }
    }

    fn handle_click(&mut self, button: MouseButton) {
        let mut rng = rand::thread_rng();
        let amount = rng.gen_range(1..=DEMO_MAX_CLICK_AMOUNT);
        let result = match button {
            MouseButton::Left => self.label.add_value(amount, self.mouse_pos),
            MouseButton::Right => self.label.add_value(-amount, self.mouse_pos),
            _ => return,
        };
        if let Err(err) = result {
            warn!(%err, "add_value failed");
        }
    }

    fn handle_key(&mut self, key: KeyCode) {
        let result = match key {
            KeyCode::KeyM => self.label.add_multiplier(2.0, self.mouse_pos).map(|_| ()),
            KeyCode::KeyD => self.label.remove_multiplier(2.0),
            KeyCode::KeyR => self.label.set_value(self.initial_value),
            _ => return,
        };
        if let Err(err) = result {
            warn!(%err, ?key, "label operation failed");
        }
    }
}

use std::sync::Arc;
use winit::event_loop::ActiveEventLoop;
use winit::window::{Window, WindowAttributes};

/// Window settings, filled in from the game config at startup.
pub struct PlatformConfig {
    pub title: String,
    pub width: u32,
    pub height: u32,
}

pub fn create_window(event_loop: &ActiveEventLoop, config: &PlatformConfig) -> Arc<Window> {
    let attrs = WindowAttributes::default()
        .with_title(&config.title)
        .with_inner_size(winit::dpi::LogicalSize::new(config.width, config.height));

    let window = event_loop
        .create_window(attrs)
        .expect("Failed to create window");
    log::debug!(
        "Created window '{}' at {}x{}",
        config.title,
        config.width,
        config.height
    );
    Arc::new(window)
}

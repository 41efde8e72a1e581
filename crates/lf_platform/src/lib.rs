//! Window creation over winit.

pub mod window;

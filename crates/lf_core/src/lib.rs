//! Engine-level deterministic state: fixed-timestep clock, keyboard snapshot,
//! and sprite walk-cycle animation. No GPU or OS dependencies.

pub mod animation;
pub mod input;
pub mod time;

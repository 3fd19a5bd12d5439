//! Orbit Trainer - an aim-training mini-game
//!
//! Two targets orbit the viewport center on a shared, randomly drifting
//! polar track. Click the highlighted one as fast as you can, fifty
//! times in a row, against the clock.
//!
//! Core modules:
//! - `sim`: Deterministic simulation (target motion, hit detection, game state)
//! - `render`: Drawing-surface abstraction and frame composition
//! - `hud`: Score and timer text

pub mod hud;
pub mod render;
pub mod sim;

pub use sim::Trainer;

use glam::Vec2;

/// Game configuration constants
pub mod consts {
    /// Simulation tick rate
    pub const TICK_HZ: u32 = 60;
    /// Interval between ticks in milliseconds
    pub const TICK_INTERVAL_MS: f64 = 1000.0 / TICK_HZ as f64;

    /// Viewport fallback when the host reports no size
    pub const DEFAULT_WIDTH: f32 = 800.0;
    pub const DEFAULT_HEIGHT: f32 = 600.0;
}

/// Convert polar (r, theta) to cartesian (x, y)
#[inline]
pub fn polar_to_cartesian(r: f32, theta: f32) -> Vec2 {
    Vec2::new(r * theta.cos(), r * theta.sin())
}

//! Target colors
//!
//! A hit starts a short crossfade: the freshly active target ramps from
//! the passive color to the active one while its twin ramps the exact
//! complement. Disabled windows use flat indicator colors instead.

use serde::{Deserialize, Serialize};

use super::state::{GameState, TargetId, Tuning};

/// 8-bit RGB color
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// CSS color string for canvas fill styles
    pub fn to_css(self) -> String {
        format!("rgb({},{},{})", self.r, self.g, self.b)
    }
}

/// The target currently worth clicking
pub const ACTIVE: Rgb = Rgb::new(0xff, 0x45, 0x00);
/// Its twin
pub const PASSIVE: Rgb = Rgb::new(0x40, 0x40, 0x40);
/// Both targets while idle between runs (aquamarine)
pub const IDLE: Rgb = Rgb::new(127, 255, 212);
/// Both targets during a mid-run cooldown (yellow)
pub const WAITING: Rgb = Rgb::new(255, 255, 0);
/// Playfield clear color (dark green)
pub const BACKGROUND: Rgb = Rgb::new(0, 100, 0);
/// HUD text (yellow)
pub const TEXT: Rgb = Rgb::new(255, 255, 0);

/// Per-channel linear interpolation, rounded to the nearest step
pub fn lerp(from: Rgb, to: Rgb, t: f32) -> Rgb {
    let channel = |a: u8, b: u8| (a as f32 + (b as f32 - a as f32) * t).round() as u8;
    Rgb::new(
        channel(from.r, to.r),
        channel(from.g, to.g),
        channel(from.b, to.b),
    )
}

/// How far through the post-hit crossfade we are at `now`: 0 right at
/// the hit, 1 once `color_transition_ms` has passed
pub fn crossfade_fraction(game: &GameState, tuning: &Tuning, now: f64) -> f32 {
    let since_hit = (now - game.last_hit_time).min(tuning.color_transition_ms);
    (since_hit / tuning.color_transition_ms) as f32
}

/// Color of one target at `now`
pub fn target_color(id: TargetId, game: &GameState, tuning: &Tuning, now: f64) -> Rgb {
    if game.targets_disabled {
        return if game.game_started { WAITING } else { IDLE };
    }
    let t = crossfade_fraction(game, tuning, now);
    if id == game.active_target {
        lerp(PASSIVE, ACTIVE, t)
    } else {
        lerp(ACTIVE, PASSIVE, t)
    }
}

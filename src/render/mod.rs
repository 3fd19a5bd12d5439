//! Drawing surface abstraction and frame composition
//!
//! The simulation knows nothing about the canvas. Hosts hand in
//! something that can clear, fill circles and place text, and
//! `draw_frame` composes the scene in a fixed order: background, HUD
//! text, then both targets.

use glam::Vec2;

use crate::hud;
use crate::sim::color::{self, Rgb};
use crate::sim::{TargetId, Trainer};

/// Minimal 2D drawing capability the game needs from a host.
///
/// Text is centered on its anchor at 24px, matching the canvas adapter.
pub trait Surface {
    /// Fill the whole viewport
    fn clear(&mut self, color: Rgb);
    fn fill_circle(&mut self, center: Vec2, radius: f32, color: Rgb);
    fn draw_text(&mut self, text: &str, center: Vec2, color: Rgb);
}

/// Score line offset above the pivot (pixels)
const SCORE_LINE_OFFSET: f32 = -6.0;
/// Status line offset below the pivot (pixels)
const STATUS_LINE_OFFSET: f32 = 24.0;

/// Draw one frame
pub fn draw_frame<S: Surface>(surface: &mut S, trainer: &Trainer, now: f64) {
    surface.clear(color::BACKGROUND);

    let pivot = trainer.pivot();
    surface.draw_text(
        &hud::score_line(trainer.game(), trainer.tuning()),
        pivot + Vec2::new(0.0, SCORE_LINE_OFFSET),
        color::TEXT,
    );
    surface.draw_text(
        &hud::status_line(trainer.game(), now),
        pivot + Vec2::new(0.0, STATUS_LINE_OFFSET),
        color::TEXT,
    );

    let radius = trainer.tuning().target_radius;
    for id in [TargetId::A, TargetId::B] {
        surface.fill_circle(
            trainer.target_position(id),
            radius,
            trainer.target_color(id, now),
        );
    }
}

//! HUD text composition
//!
//! Pure string builders so layout stays testable without a canvas.

use crate::sim::{GameState, Tuning};

/// Progress line, e.g. `12 / 50`
pub fn score_line(game: &GameState, tuning: &Tuning) -> String {
    format!("{} / {}", game.score, tuning.score_goal)
}

/// Elapsed-time line while a time exists, otherwise the standing prompt
pub fn status_line(game: &GameState, now: f64) -> String {
    let seconds = game.elapsed_secs(now);
    if seconds != 0.0 {
        format!("{seconds:.2}s")
    } else {
        "click the red target".to_string()
    }
}

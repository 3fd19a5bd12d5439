//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - Seeded RNG only
//! - Wall-clock timestamps passed in, never read
//! - No rendering or platform dependencies

pub mod color;
pub mod engine;
pub mod input;
pub mod state;
pub mod tick;

pub use color::{Rgb, target_color};
pub use engine::Trainer;
pub use input::{ClickOutcome, pointer_down};
pub use state::{GameState, SessionPhase, TargetId, TargetPair, Tuning};
pub use tick::tick;

//! Game state and core simulation types
//!
//! Everything needed to reproduce a session deterministically lives here.

use glam::Vec2;
use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::polar_to_cartesian;

use std::f32::consts::{PI, TAU};

/// Fixed gameplay constants, set once at engine construction.
///
/// There is no runtime difficulty scaling; tests swap in variants via
/// struct update syntax on `Tuning::default()`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Tuning {
    /// Closest orbit distance from the pivot (pixels)
    pub min_distance: f32,
    /// Farthest orbit distance from the pivot (pixels)
    pub max_distance: f32,
    /// Angular speed cap (radians per tick)
    pub max_angular_velocity: f32,
    /// Angular speed change per tick while an impulse is active
    pub angular_accel_amount: f32,
    /// Radial speed cap (pixels per tick)
    pub max_radial_velocity: f32,
    /// Radial speed change per tick while an impulse is active
    pub radial_accel_amount: f32,
    /// Click-to-center distance that still counts as a hit (pixels)
    pub target_radius: f32,
    /// Length of the post-hit color crossfade (milliseconds)
    pub color_transition_ms: f64,
    /// Hits required to finish a run
    pub score_goal: u32,
    /// Input lockout after a missed click (milliseconds)
    pub miss_cooldown_ms: f64,
    /// Input lockout after a finished run (milliseconds)
    pub success_cooldown_ms: f64,
    /// Per-tick chance of redrawing each acceleration impulse
    pub accel_resample_chance: f64,
}

impl Default for Tuning {
    fn default() -> Self {
        Self {
            min_distance: 50.0,
            max_distance: 150.0,
            max_angular_velocity: 0.004,
            angular_accel_amount: 0.0001,
            max_radial_velocity: 0.3,
            radial_accel_amount: 0.001,
            target_radius: 20.0,
            color_transition_ms: 100.0,
            score_goal: 50,
            miss_cooldown_ms: 1000.0,
            success_cooldown_ms: 3000.0,
            accel_resample_chance: 0.05,
        }
    }
}

/// Identifies one of the two diametrically opposed targets
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum TargetId {
    A,
    B,
}

impl TargetId {
    /// The other member of the pair
    pub fn other(self) -> Self {
        match self {
            TargetId::A => TargetId::B,
            TargetId::B => TargetId::A,
        }
    }

    /// Angular offset from the pair's base angle
    #[inline]
    pub fn angle_offset(self) -> f32 {
        match self {
            TargetId::A => 0.0,
            TargetId::B => PI,
        }
    }
}

/// Shared kinematic state for both targets.
///
/// Only one angle and one distance are stored; target B is derived at
/// `angle + PI`, so the pair stays diametrically opposed by construction.
/// The angle is unbounded and wraps through the trig functions.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TargetPair {
    /// Base angle in radians
    pub angle: f32,
    /// Orbit distance from the pivot, clamped to the tuning range
    pub distance: f32,
    /// Radians per tick
    pub angular_velocity: f32,
    /// Pixels per tick
    pub radial_velocity: f32,
    /// Active angular impulse direction (-1, 0 or +1)
    pub angular_accel: i8,
    /// Active radial impulse direction (-1, 0 or +1)
    pub radial_accel: i8,
}

impl TargetPair {
    /// Spawn at rest with a random base angle, mid-range distance
    pub fn new<R: Rng>(rng: &mut R) -> Self {
        Self {
            angle: rng.random::<f32>() * TAU,
            distance: 100.0,
            angular_velocity: 0.0,
            radial_velocity: 0.0,
            angular_accel: 0,
            radial_accel: 0,
        }
    }

    /// Absolute angle of one target
    #[inline]
    pub fn target_angle(&self, id: TargetId) -> f32 {
        self.angle + id.angle_offset()
    }

    /// Screen position of one target orbiting `pivot`.
    ///
    /// The renderer and the hit tester both resolve positions through
    /// here; they must never disagree about where a target is.
    pub fn target_position(&self, id: TargetId, pivot: Vec2) -> Vec2 {
        pivot + polar_to_cartesian(self.distance, self.target_angle(id))
    }

    /// Fraction of the allowed distance range currently used
    /// (0 at the minimum, 1 at the maximum)
    pub fn distance_fraction(&self, tuning: &Tuning) -> f32 {
        (self.distance - tuning.min_distance) / (tuning.max_distance - tuning.min_distance)
    }
}

/// Session phase derived from the state booleans
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SessionPhase {
    /// Waiting for the arming click
    Idle,
    /// Clock running, hits score
    Running,
    /// Input ignored until the cooldown expires
    CoolingDown,
}

/// Mutable session state: scoring, cooldowns and run timestamps.
///
/// All timestamps are wall-clock milliseconds from the host; the
/// simulation never reads a clock itself.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GameState {
    /// Which target currently scores when hit
    pub active_target: TargetId,
    /// Input is ignored while set
    pub targets_disabled: bool,
    /// When the disabled window ends
    pub targets_enabled_time: f64,
    /// Last successful hit, drives the color crossfade
    pub last_hit_time: f64,
    /// Hits scored in the current run
    pub score: u32,
    /// True between the arming hit and the goal hit
    pub game_started: bool,
    /// When the arming hit landed
    pub start_time: f64,
    /// When the goal hit landed
    pub end_time: f64,
}

impl GameState {
    pub fn new() -> Self {
        Self {
            active_target: TargetId::A,
            targets_disabled: false,
            targets_enabled_time: 0.0,
            last_hit_time: 0.0,
            score: 0,
            game_started: false,
            start_time: 0.0,
            end_time: 0.0,
        }
    }

    /// Current phase for HUD and logging
    pub fn phase(&self) -> SessionPhase {
        if self.targets_disabled {
            SessionPhase::CoolingDown
        } else if self.game_started {
            SessionPhase::Running
        } else {
            SessionPhase::Idle
        }
    }

    /// Seconds the current run has been going, or the last run took.
    /// Zero when no run was ever armed.
    pub fn elapsed_secs(&self, now: f64) -> f64 {
        if self.game_started {
            (now - self.start_time) / 1000.0
        } else {
            (self.end_time - self.start_time) / 1000.0
        }
    }
}

impl Default for GameState {
    fn default() -> Self {
        Self::new()
    }
}

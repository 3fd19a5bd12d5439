//! Fixed-rate simulation tick
//!
//! Advances the target pair one motion step and releases expired
//! cooldowns. Wall-clock time comes in as an argument; the only other
//! nondeterminism is the caller's RNG.

use rand::Rng;

use super::state::{GameState, TargetId, TargetPair, Tuning};

/// Advance the simulation by one tick at wall-clock time `now` (ms).
///
/// Step order is fixed: cooldown release, impulse resampling, velocity
/// integration, position integration. A given seed therefore replays
/// the same trajectory tick for tick.
pub fn tick<R: Rng>(
    targets: &mut TargetPair,
    game: &mut GameState,
    tuning: &Tuning,
    rng: &mut R,
    now: f64,
) {
    // Release an expired cooldown and pick which target comes back hot.
    if game.targets_disabled && now > game.targets_enabled_time {
        game.targets_disabled = false;
        game.active_target = if rng.random_bool(0.5) {
            TargetId::A
        } else {
            TargetId::B
        };
    }

    if rng.random_bool(tuning.accel_resample_chance) {
        targets.angular_accel = rng.random_range(-1..=1);
    }
    if rng.random_bool(tuning.accel_resample_chance) {
        targets.radial_accel = resample_radial_accel(targets.distance_fraction(tuning), rng);
    }

    targets.angular_velocity = (targets.angular_velocity
        + f32::from(targets.angular_accel) * tuning.angular_accel_amount)
        .clamp(-tuning.max_angular_velocity, tuning.max_angular_velocity);
    targets.radial_velocity = (targets.radial_velocity
        + f32::from(targets.radial_accel) * tuning.radial_accel_amount)
        .clamp(-tuning.max_radial_velocity, tuning.max_radial_velocity);

    targets.distance = (targets.distance + targets.radial_velocity)
        .clamp(tuning.min_distance, tuning.max_distance);
    targets.angle += targets.angular_velocity;
}

/// Redraw the radial impulse, biased back toward the middle of the
/// distance range: the farther out the pair sits the likelier the
/// inward pull, and symmetrically for the outward push. At either
/// extreme the impulse away from the range is impossible.
fn resample_radial_accel<R: Rng>(fraction: f32, rng: &mut R) -> i8 {
    let r = rng.random::<f32>();
    if r < fraction / 2.0 {
        -1
    } else if r > 1.0 - (1.0 - fraction) / 2.0 {
        1
    } else {
        0
    }
}

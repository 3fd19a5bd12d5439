//! Session facade
//!
//! `Trainer` owns the target pair, the session state, the tuning and
//! the RNG, and exposes the two entry points a host drives: `tick` on
//! its timer and `pointer_down` from its click handler.

use glam::Vec2;
use rand::SeedableRng;
use rand_pcg::Pcg32;

use crate::consts;

use super::color::{self, Rgb};
use super::input::{self, ClickOutcome};
use super::state::{GameState, SessionPhase, TargetId, TargetPair, Tuning};
use super::tick;

/// One aim-training session. Everything random derives from the seed.
#[derive(Debug, Clone)]
pub struct Trainer {
    tuning: Tuning,
    targets: TargetPair,
    game: GameState,
    pivot: Vec2,
    rng: Pcg32,
}

impl Trainer {
    /// Start a session with default tuning.
    pub fn new(seed: u64) -> Self {
        Self::with_tuning(seed, Tuning::default())
    }

    /// Start a session with custom constants.
    pub fn with_tuning(seed: u64, tuning: Tuning) -> Self {
        let mut rng = Pcg32::seed_from_u64(seed);
        let targets = TargetPair::new(&mut rng);
        Self {
            tuning,
            targets,
            game: GameState::new(),
            pivot: Vec2::new(consts::DEFAULT_WIDTH / 2.0, consts::DEFAULT_HEIGHT / 2.0),
            rng,
        }
    }

    /// Track the host viewport; the targets orbit its center.
    pub fn resize(&mut self, width: f32, height: f32) {
        self.pivot = Vec2::new(width / 2.0, height / 2.0);
    }

    /// Advance one simulation step at wall-clock time `now` (ms).
    pub fn tick(&mut self, now: f64) {
        tick::tick(
            &mut self.targets,
            &mut self.game,
            &self.tuning,
            &mut self.rng,
            now,
        );
    }

    /// Feed one pointer-down at `(x, y)` in viewport coordinates.
    pub fn pointer_down(&mut self, x: f32, y: f32, now: f64) -> ClickOutcome {
        input::pointer_down(
            &self.targets,
            &mut self.game,
            &self.tuning,
            self.pivot,
            Vec2::new(x, y),
            now,
        )
    }

    /// Where one target sits right now
    pub fn target_position(&self, id: TargetId) -> Vec2 {
        self.targets.target_position(id, self.pivot)
    }

    /// What color one target should be drawn in at `now`
    pub fn target_color(&self, id: TargetId, now: f64) -> Rgb {
        color::target_color(id, &self.game, &self.tuning, now)
    }

    pub fn targets(&self) -> &TargetPair {
        &self.targets
    }

    pub fn game(&self) -> &GameState {
        &self.game
    }

    pub fn tuning(&self) -> &Tuning {
        &self.tuning
    }

    pub fn pivot(&self) -> Vec2 {
        self.pivot
    }

    pub fn phase(&self) -> SessionPhase {
        self.game.phase()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn snapshot(trainer: &Trainer) -> String {
        let targets = serde_json::to_string(trainer.targets()).expect("targets serialize");
        let game = serde_json::to_string(trainer.game()).expect("game serialize");
        format!("{targets}|{game}")
    }

    /// Drive a fixed schedule: tick every 16 ms, click the active target
    /// whenever input is live and the tick index divides by `click_every`.
    fn drive(trainer: &mut Trainer, ticks: u32, click_every: u32) {
        for i in 0..ticks {
            let now = f64::from(i) * 16.0;
            trainer.tick(now);
            if i % click_every == 0 && !trainer.game().targets_disabled {
                let pos = trainer.target_position(trainer.game().active_target);
                trainer.pointer_down(pos.x, pos.y, now);
            }
        }
    }

    #[test]
    fn test_same_seed_same_trajectory() {
        let mut left = Trainer::new(1234);
        let mut right = Trainer::new(1234);

        drive(&mut left, 2_000, 7);
        drive(&mut right, 2_000, 7);

        assert_eq!(snapshot(&left), snapshot(&right));
    }

    #[test]
    fn test_different_seeds_diverge() {
        let mut left = Trainer::new(1);
        let mut right = Trainer::new(2);

        drive(&mut left, 500, 7);
        drive(&mut right, 500, 7);

        assert_ne!(snapshot(&left), snapshot(&right));
    }

    #[test]
    fn test_rendered_position_always_hits() {
        let mut trainer = Trainer::new(99);
        trainer.resize(1024.0, 768.0);

        for i in 0..500 {
            let now = f64::from(i) * 16.0;
            trainer.tick(now);
            if trainer.game().targets_disabled {
                continue;
            }
            let pos = trainer.target_position(trainer.game().active_target);
            let outcome = trainer.pointer_down(pos.x, pos.y, now);
            assert!(
                !matches!(outcome, ClickOutcome::Miss),
                "dead-center click missed at tick {i}: {outcome:?}"
            );
        }
    }

    #[test]
    fn test_full_run_ends_disabled() {
        let mut trainer = Trainer::with_tuning(
            7,
            Tuning {
                score_goal: 3,
                ..Tuning::default()
            },
        );

        let mut finished = None;
        for i in 0..200 {
            let now = f64::from(i) * 16.0;
            trainer.tick(now);
            if trainer.game().targets_disabled {
                continue;
            }
            let pos = trainer.target_position(trainer.game().active_target);
            if let ClickOutcome::Finished { score, elapsed_ms } =
                trainer.pointer_down(pos.x, pos.y, now)
            {
                finished = Some((score, elapsed_ms));
                break;
            }
        }

        let (score, elapsed_ms) = finished.expect("run should finish inside 200 ticks");
        assert_eq!(score, 3);
        assert!(elapsed_ms > 0.0);
        assert!(trainer.game().targets_disabled);
        assert_eq!(trainer.phase(), SessionPhase::CoolingDown);
    }

    #[test]
    fn test_resize_moves_pivot_and_targets() {
        let mut trainer = Trainer::new(3);
        trainer.resize(200.0, 100.0);
        assert_eq!(trainer.pivot(), Vec2::new(100.0, 50.0));

        let a = trainer.target_position(TargetId::A);
        trainer.resize(400.0, 100.0);
        let a_after = trainer.target_position(TargetId::A);
        assert!((a_after - a - Vec2::new(100.0, 0.0)).length() < 1e-3);
    }

    mod proptests {
        use super::*;
        use proptest::prelude::*;

        proptest! {
            /// Property: wherever the motion model has taken the pair, a
            /// click at the rendered active-target center always lands
            #[test]
            fn prop_center_click_always_lands(
                seed in any::<u64>(),
                width in 100.0f32..4000.0,
                height in 100.0f32..4000.0,
                ticks in 1u32..300,
            ) {
                let mut trainer = Trainer::new(seed);
                trainer.resize(width, height);
                for i in 0..ticks {
                    trainer.tick(f64::from(i) * 16.0);
                }

                let pos = trainer.target_position(trainer.game().active_target);
                let outcome = trainer.pointer_down(pos.x, pos.y, f64::from(ticks) * 16.0);
                prop_assert_eq!(outcome, ClickOutcome::Armed);
            }
        }
    }
}

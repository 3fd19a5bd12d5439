//! Click handling
//!
//! Resolves a pointer-down against the active target and applies the
//! arming, scoring and cooldown transitions. The target pair is only
//! read here; motion stays with `tick`.

use glam::Vec2;

use super::state::{GameState, TargetPair, Tuning};

/// What a click did to the session
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ClickOutcome {
    /// Arrived during a cooldown and was dropped
    Ignored,
    /// First hit of an idle session: the clock starts, nothing scores
    Armed,
    /// Mid-run hit
    Hit { score: u32 },
    /// The goal hit, run over
    Finished { score: u32, elapsed_ms: f64 },
    /// Landed outside the active target
    Miss,
}

/// Apply one pointer-down at `pos` (viewport coordinates) at wall-clock
/// time `now` (ms).
///
/// The hit test runs against the same position the renderer draws, and
/// only against the active target; clicking the passive one is a miss.
pub fn pointer_down(
    targets: &TargetPair,
    game: &mut GameState,
    tuning: &Tuning,
    pivot: Vec2,
    pos: Vec2,
    now: f64,
) -> ClickOutcome {
    if game.targets_disabled {
        return ClickOutcome::Ignored;
    }

    let active_pos = targets.target_position(game.active_target, pivot);
    if pos.distance(active_pos) > tuning.target_radius {
        game.targets_disabled = true;
        game.targets_enabled_time = now + tuning.miss_cooldown_ms;
        return ClickOutcome::Miss;
    }

    let outcome = if !game.game_started {
        // The arming hit starts the clock without scoring, so a full run
        // is exactly `score_goal` further hits.
        game.game_started = true;
        game.start_time = now;
        game.score = 0;
        ClickOutcome::Armed
    } else {
        game.score += 1;
        if game.score == tuning.score_goal {
            game.game_started = false;
            game.end_time = now;
            game.targets_disabled = true;
            game.targets_enabled_time = now + tuning.success_cooldown_ms;
            ClickOutcome::Finished {
                score: game.score,
                elapsed_ms: game.end_time - game.start_time,
            }
        } else {
            ClickOutcome::Hit { score: game.score }
        }
    };

    game.active_target = game.active_target.other();
    game.last_hit_time = now;

    outcome
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sim::state::TargetId;

    const PIVOT: Vec2 = Vec2::new(400.0, 300.0);

    fn resting_pair() -> TargetPair {
        TargetPair {
            angle: 0.0,
            distance: 100.0,
            angular_velocity: 0.0,
            radial_velocity: 0.0,
            angular_accel: 0,
            radial_accel: 0,
        }
    }

    fn click_active(
        targets: &TargetPair,
        game: &mut GameState,
        tuning: &Tuning,
        now: f64,
    ) -> ClickOutcome {
        let pos = targets.target_position(game.active_target, PIVOT);
        pointer_down(targets, game, tuning, PIVOT, pos, now)
    }

    #[test]
    fn test_first_hit_arms_without_scoring() {
        let targets = resting_pair();
        let tuning = Tuning::default();
        let mut game = GameState::new();

        let outcome = click_active(&targets, &mut game, &tuning, 5000.0);

        assert_eq!(outcome, ClickOutcome::Armed);
        assert!(game.game_started);
        assert_eq!(game.score, 0);
        assert_eq!(game.start_time, 5000.0);
        assert_eq!(game.last_hit_time, 5000.0);
        assert_eq!(game.active_target, TargetId::B);
        assert!(!game.targets_disabled);
    }

    #[test]
    fn test_arming_skips_goal_check() {
        let targets = resting_pair();
        let tuning = Tuning {
            score_goal: 0,
            ..Tuning::default()
        };
        let mut game = GameState::new();

        // Even with the goal already "met" the arming hit must not finish
        let outcome = click_active(&targets, &mut game, &tuning, 100.0);
        assert_eq!(outcome, ClickOutcome::Armed);
        assert!(game.game_started);
        assert!(!game.targets_disabled);
        assert_eq!(game.end_time, 0.0);
    }

    #[test]
    fn test_hit_tolerance_is_inclusive() {
        let targets = resting_pair();
        let tuning = Tuning::default();
        let mut game = GameState::new();

        // Exactly target_radius away still counts
        let edge = targets.target_position(TargetId::A, PIVOT) + Vec2::new(0.0, tuning.target_radius);
        let outcome = pointer_down(&targets, &mut game, &tuning, PIVOT, edge, 100.0);
        assert_eq!(outcome, ClickOutcome::Armed);
    }

    #[test]
    fn test_full_scoring_sequence() {
        let targets = resting_pair();
        let tuning = Tuning {
            score_goal: 5,
            ..Tuning::default()
        };
        let mut game = GameState::new();

        assert_eq!(click_active(&targets, &mut game, &tuning, 1000.0), ClickOutcome::Armed);
        for i in 1..5 {
            let now = 1000.0 + f64::from(i) * 200.0;
            assert_eq!(
                click_active(&targets, &mut game, &tuning, now),
                ClickOutcome::Hit { score: i }
            );
        }
        let outcome = click_active(&targets, &mut game, &tuning, 2000.0);
        assert_eq!(
            outcome,
            ClickOutcome::Finished {
                score: 5,
                elapsed_ms: 1000.0
            }
        );

        assert_eq!(game.score, 5);
        assert!(!game.game_started);
        assert!(game.targets_disabled);
        assert_eq!(game.end_time, 2000.0);
        assert_eq!(game.targets_enabled_time, 2000.0 + tuning.success_cooldown_ms);
    }

    #[test]
    fn test_hits_alternate_targets() {
        let targets = resting_pair();
        let tuning = Tuning::default();
        let mut game = GameState::new();

        assert_eq!(game.active_target, TargetId::A);
        click_active(&targets, &mut game, &tuning, 100.0);
        assert_eq!(game.active_target, TargetId::B);
        click_active(&targets, &mut game, &tuning, 200.0);
        assert_eq!(game.active_target, TargetId::A);

        // Clicking the now-passive old position misses
        let stale = targets.target_position(TargetId::B, PIVOT);
        let outcome = pointer_down(&targets, &mut game, &tuning, PIVOT, stale, 300.0);
        assert_eq!(outcome, ClickOutcome::Miss);
    }

    #[test]
    fn test_miss_only_locks_input() {
        let targets = resting_pair();
        let tuning = Tuning::default();
        let mut game = GameState::new();
        game.game_started = true;
        game.start_time = 500.0;
        game.score = 5;

        let away = targets.target_position(game.active_target, PIVOT)
            + Vec2::new(tuning.target_radius + 1.0, 0.0);
        let outcome = pointer_down(&targets, &mut game, &tuning, PIVOT, away, 4000.0);

        assert_eq!(outcome, ClickOutcome::Miss);
        assert_eq!(game.score, 5);
        assert!(game.game_started);
        assert_eq!(game.active_target, TargetId::A);
        assert!(game.targets_disabled);
        assert_eq!(game.targets_enabled_time, 4000.0 + tuning.miss_cooldown_ms);
    }

    #[test]
    fn test_miss_before_arming_does_not_start() {
        let targets = resting_pair();
        let tuning = Tuning::default();
        let mut game = GameState::new();

        let outcome = pointer_down(&targets, &mut game, &tuning, PIVOT, PIVOT, 100.0);

        assert_eq!(outcome, ClickOutcome::Miss);
        assert!(!game.game_started);
        assert_eq!(game.start_time, 0.0);
        assert!(game.targets_disabled);
    }

    #[test]
    fn test_disabled_window_swallows_clicks() {
        let targets = resting_pair();
        let tuning = Tuning::default();
        let mut game = GameState::new();
        game.targets_disabled = true;
        game.targets_enabled_time = 9999.0;
        let before = game.clone();

        // Even a dead-center click changes nothing
        let pos = targets.target_position(game.active_target, PIVOT);
        let outcome = pointer_down(&targets, &mut game, &tuning, PIVOT, pos, 100.0);

        assert_eq!(outcome, ClickOutcome::Ignored);
        assert_eq!(game, before);
    }
}

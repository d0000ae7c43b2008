//! Unit tests for fl-behavior.

use std::f64::consts::{FRAC_PI_2, FRAC_PI_4, PI};

use fl_agent::{Agent, ZoneRadii};
use fl_core::{AgentId, AgentRng, Border, Tick, Vec2, angle_diff};
use fl_perception::Perception;

use crate::{BehaviorModel, FlockContext, ZoneModel};

// ── Helpers ───────────────────────────────────────────────────────────────────

const RADII: ZoneRadii = ZoneRadii::new(1.0, 5.0, 10.0);

fn at(x: f64, y: f64, heading: f64) -> Agent {
    Agent::new(Vec2::new(x, y), heading, 1.0, 1.0, RADII)
}

fn wide_view() -> Perception {
    Perception::builder(Border::unbounded()).range(100.0).build().unwrap()
}

fn target_of(model: &impl BehaviorModel, agents: &[Agent], perception: &Perception) -> f64 {
    let ctx = FlockContext::new(Tick(0), 0.1, agents, perception);
    let mut rng = AgentRng::new(7, AgentId(0));
    model.reorient(AgentId(0), &ctx, &mut rng)
}

fn assert_angle(actual: f64, expected: f64) {
    assert!(
        angle_diff(actual, expected).abs() < 1e-9,
        "expected {expected}, got {actual}"
    );
}

// ── Zone classification ───────────────────────────────────────────────────────

#[cfg(test)]
mod zone_tests {
    use super::*;
    use crate::Zone;

    #[test]
    fn outer_bounds_are_inclusive() {
        assert_eq!(Zone::classify(0.0, &RADII), Some(Zone::Repulsion));
        assert_eq!(Zone::classify(1.0, &RADII), Some(Zone::Repulsion));
        assert_eq!(Zone::classify(1.0001, &RADII), Some(Zone::Orientation));
        assert_eq!(Zone::classify(5.0, &RADII), Some(Zone::Orientation));
        assert_eq!(Zone::classify(10.0, &RADII), Some(Zone::Attraction));
        assert_eq!(Zone::classify(10.0001, &RADII), None);
    }

    #[test]
    fn degenerate_radii_skip_empty_zones() {
        let r = ZoneRadii::new(2.0, 2.0, 6.0);
        assert_eq!(Zone::classify(2.0, &r), Some(Zone::Repulsion));
        assert_eq!(Zone::classify(3.0, &r), Some(Zone::Attraction));
    }
}

// ── ZoneModel ─────────────────────────────────────────────────────────────────

#[cfg(test)]
mod zone_model_tests {
    use super::*;
    use crate::{BehaviorError, ZoneSums};

    #[test]
    fn repulsion_dominates_attraction() {
        let agents = vec![at(0.0, 0.0, 0.0), at(0.5, 0.0, 0.0), at(8.0, 0.0, 0.0)];
        let target = target_of(&ZoneModel::deterministic(), &agents, &wide_view());
        assert_angle(target, PI);
    }

    #[test]
    fn no_neighbour_keeps_heading() {
        let agents = vec![at(0.0, 0.0, 0.7), at(50.0, 0.0, 0.0)];
        let target = target_of(&ZoneModel::deterministic(), &agents, &wide_view());
        assert_eq!(target, agents[0].heading());
    }

    #[test]
    fn orientation_only_follows_neighbour_heading() {
        let agents = vec![at(0.0, 0.0, 0.0), at(3.0, 0.0, FRAC_PI_2)];
        let target = target_of(&ZoneModel::deterministic(), &agents, &wide_view());
        assert_angle(target, FRAC_PI_2);
    }

    #[test]
    fn orientation_and_attraction_are_averaged() {
        let agents = vec![at(0.0, 0.0, 0.0), at(3.0, 0.0, FRAC_PI_2), at(8.0, 0.0, PI)];
        let target = target_of(&ZoneModel::deterministic(), &agents, &wide_view());
        assert_angle(target, FRAC_PI_4);
    }

    #[test]
    fn attraction_only_points_to_neighbours() {
        let agents = vec![at(0.0, 0.0, 0.0), at(0.0, -7.0, 0.0)];
        let target = target_of(&ZoneModel::deterministic(), &agents, &wide_view());
        assert_angle(target, -FRAC_PI_2);
    }

    #[test]
    fn cancelling_contributions_keep_heading() {
        let agents = vec![at(0.0, 0.0, 0.3), at(0.0, 7.0, 0.0), at(0.0, -7.0, 0.0)];
        let target = target_of(&ZoneModel::deterministic(), &agents, &wide_view());
        assert_eq!(target, agents[0].heading());
    }

    #[test]
    fn sums_count_each_zone() {
        let agents = vec![
            at(0.0, 0.0, 0.0),
            at(0.5, 0.0, 0.0),
            at(3.0, 0.0, 0.0),
            at(-4.0, 0.0, 0.0),
            at(9.0, 0.0, 0.0),
            at(20.0, 0.0, 0.0),
        ];
        let perception = wide_view();
        let ctx = FlockContext::new(Tick(0), 0.1, &agents, &perception);
        let mut rng = AgentRng::new(1, AgentId(0));
        let sums: ZoneSums = ZoneModel::deterministic().sums(AgentId(0), &ctx, &mut rng);
        assert_eq!((sums.n_repulsion, sums.n_orientation, sums.n_attraction), (1, 2, 1));
    }

    #[test]
    fn perception_hides_neighbours_from_the_rule() {
        // Repulsion neighbour sits behind, inside a rear blind spot.
        let agents = vec![at(0.0, 0.0, 0.0), at(-0.5, 0.0, 0.0), at(0.0, 8.0, 0.0)];
        let perception = Perception::builder(Border::unbounded())
            .blind_spot(-PI, FRAC_PI_2)
            .build()
            .unwrap();
        let target = target_of(&ZoneModel::deterministic(), &agents, &perception);
        assert_angle(target, FRAC_PI_2);
    }

    #[test]
    fn co_located_neighbour_triggers_random_escape() {
        let agents = vec![at(1.0, 1.0, 0.0), at(1.0, 1.0, 2.0)];
        let target = target_of(&ZoneModel::deterministic(), &agents, &wide_view());

        let mut replay = AgentRng::new(7, AgentId(0));
        let escape = -replay.unit_vector();
        assert_angle(target, escape.angle());
    }

    #[test]
    fn periodic_border_repels_across_the_seam() {
        let border = Border::periodic(Vec2::new(20.0, 20.0));
        let agents = vec![at(9.8, 0.0, 0.0), at(-9.8, 0.0, 0.0)];
        let perception = Perception::builder(border).range(5.0).build().unwrap();
        let target = target_of(&ZoneModel::deterministic(), &agents, &perception);
        // The neighbour is 0.4 ahead through the seam, so the agent turns back.
        assert_angle(target, PI);
    }

    #[test]
    fn noise_is_deterministic_per_seed() {
        let agents = vec![at(0.0, 0.0, 0.0), at(3.0, 0.0, 0.0)];
        let model = ZoneModel::new(0.2).unwrap();
        let a = target_of(&model, &agents, &wide_view());
        let b = target_of(&model, &agents, &wide_view());
        assert_eq!(a, b);
        assert_ne!(a, 0.0);
    }

    #[test]
    fn invalid_noise_is_rejected() {
        assert_eq!(ZoneModel::new(-0.1), Err(BehaviorError::InvalidNoise(-0.1)));
        assert!(ZoneModel::new(f64::INFINITY).is_err());
        assert_eq!(ZoneModel::new(0.0).unwrap().noise_sd(), 0.0);
    }
}

// ── NoopBehavior ──────────────────────────────────────────────────────────────

#[cfg(test)]
mod noop_tests {
    use super::*;
    use crate::NoopBehavior;

    #[test]
    fn keeps_current_heading() {
        let agents = vec![at(0.0, 0.0, -1.2), at(0.5, 0.0, 0.0)];
        assert_eq!(target_of(&NoopBehavior, &agents, &wide_view()), agents[0].heading());
    }
}

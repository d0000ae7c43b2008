//! Unit tests for fl-agent.

#[cfg(test)]
mod agent {
    use std::f64::consts::{FRAC_PI_2, PI};

    use fl_core::Vec2;

    use crate::{Agent, Marker, ZoneRadii};

    fn agent(heading: f64, turning_rate: f64) -> Agent {
        Agent::new(Vec2::ZERO, heading, 2.0, turning_rate, ZoneRadii::new(1.0, 5.0, 10.0))
    }

    #[test]
    fn heading_is_normalised_on_construction() {
        let a = agent(3.0 * FRAC_PI_2, 1.0);
        assert!((a.heading() + FRAC_PI_2).abs() < 1e-12);
        assert_eq!(a.marker, Marker::Regular(0));
    }

    #[test]
    fn turn_by_is_rate_limited() {
        let mut a = agent(0.0, 0.5);
        a.turn_by(1.0, 0.1); // max 0.05 rad
        assert!((a.heading() - 0.05).abs() < 1e-12);
        a.turn_by(-1.0, 0.1);
        assert!(a.heading().abs() < 1e-12);
    }

    #[test]
    fn turn_by_wraps_past_pi() {
        let mut a = agent(PI - 0.01, 10.0);
        a.turn_by(0.02, 1.0);
        assert!((a.heading() - (-PI + 0.01)).abs() < 1e-9);
    }

    #[test]
    fn turn_to_uses_shorter_arc() {
        // From 170° to -170°: shortest path is +20°, so a small positive step.
        let mut a = agent(170f64.to_radians(), 0.1);
        a.turn_to(-170f64.to_radians(), 1.0);
        let expected = fl_core::normalize_angle(170f64.to_radians() + 0.1);
        assert!((a.heading() - expected).abs() < 1e-12);
    }

    #[test]
    fn turn_to_reaches_target_within_budget() {
        let mut a = agent(0.0, 10.0);
        a.turn_to(0.3, 0.1);
        assert!((a.heading() - 0.3).abs() < 1e-12);
    }

    #[test]
    fn tick_is_explicit_euler() {
        let mut a = agent(FRAC_PI_2, 1.0);
        a.tick(0.5);
        assert!(a.position.x.abs() < 1e-12);
        assert!((a.position.y - 1.0).abs() < 1e-12);
        assert!((a.velocity().norm() - 2.0).abs() < 1e-12);
    }
}

#[cfg(test)]
mod template {
    use fl_core::SimRng;

    use crate::{AgentTemplate, TraitSpread, ZoneRadii};

    fn base() -> AgentTemplate {
        AgentTemplate::new(3.0, 0.7, ZoneRadii::new(1.0, 6.0, 14.0))
    }

    #[test]
    fn zero_spread_returns_mean() {
        let t = base();
        let mut rng = SimRng::new(1);
        assert_eq!(t.sample(&mut rng), t.mean());
        assert!(!t.spread.is_noisy());
    }

    #[test]
    fn spread_is_deterministic_and_non_negative() {
        let spread = TraitSpread { speed_sd: 5.0, ror_sd: 5.0, ..TraitSpread::default() };
        let t = base().with_spread(spread);
        assert!(t.spread.is_noisy());
        let mut r1 = SimRng::new(11);
        let mut r2 = SimRng::new(11);
        for _ in 0..200 {
            let a = t.sample(&mut r1);
            assert_eq!(a, t.sample(&mut r2));
            assert!(a.speed >= 0.0 && a.radii.ror >= 0.0);
            // Untouched traits keep their mean.
            assert_eq!(a.turning_rate, 0.7);
            assert_eq!(a.radii.roa, 14.0);
        }
    }
}

#[cfg(test)]
mod rngs {
    use fl_core::AgentId;

    use crate::AgentRngs;

    #[test]
    fn push_assigns_sequential_ids() {
        let mut rngs = AgentRngs::new(2, 42);
        assert_eq!(rngs.len(), 2);
        assert_eq!(rngs.push(), AgentId(2));
        assert_eq!(rngs.push(), AgentId(3));
        rngs.truncate(1);
        assert_eq!(rngs.len(), 1);
        assert!(!rngs.is_empty());
    }

    #[test]
    fn pushed_rng_matches_prebuilt() {
        let mut grown = AgentRngs::new(0, 5);
        grown.push();
        grown.push();
        let mut built = AgentRngs::new(2, 5);
        let a: u64 = grown.get_mut(AgentId(1)).random();
        let b: u64 = built.get_mut(AgentId(1)).random();
        assert_eq!(a, b);
    }
}

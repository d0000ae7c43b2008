//! Unit tests for fl-sim.

use std::f64::consts::{FRAC_PI_2, PI};

use fl_agent::{Agent, AgentTemplate, Marker, ZoneRadii};
use fl_behavior::{BehaviorModel, FlockContext, NoopBehavior, ZoneModel};
use fl_core::{AgentId, Border, BorderKind, Tick, Vec2, angle_diff};
use fl_perception::{Perception, PerceptionConfig};
use fl_sweep::SweepConfig;

use crate::{
    FlockConfig, GroupStats, NoopObserver, Population, PopulationConfig, SimBuilder, SimError,
    SimObserver, TickBudget,
};

// ── Helpers ───────────────────────────────────────────────────────────────────

const RADII: ZoneRadii = ZoneRadii::new(1.0, 5.0, 10.0);

fn agent(x: f64, y: f64, heading: f64) -> Agent {
    Agent::new(Vec2::new(x, y), heading, 1.0, 1.0, RADII)
}

fn config(count: usize) -> FlockConfig {
    FlockConfig {
        population: PopulationConfig { count, radii: RADII, ..PopulationConfig::default() },
        ticks: TickBudget::Fixed(10),
        seed: 17,
        ..FlockConfig::default()
    }
}

fn population_of(agents: Vec<Agent>) -> Population {
    let perception = Perception::builder(Border::unbounded()).range(100.0).build().unwrap();
    let mut pop = Population::new(perception, AgentTemplate::new(1.0, 1.0, RADII), 0.0, 3);
    for a in agents {
        pop.push(a);
    }
    pop
}

/// Records everything the loop reports.
#[derive(Default)]
struct Recorder {
    started:   Vec<Tick>,
    roo:       Vec<f64>,
    snapshots: Vec<Tick>,
    levels:    Vec<(Tick, bool)>,
    end:       Option<(Tick, bool)>,
}

impl SimObserver for Recorder {
    fn on_tick_start(&mut self, tick: Tick) {
        self.started.push(tick);
    }

    fn on_tick_end(&mut self, _tick: Tick, population: &Population) {
        self.roo.push(population.roo());
    }

    fn on_snapshot(&mut self, tick: Tick, _population: &Population) {
        self.snapshots.push(tick);
    }

    fn on_level_complete(&mut self, tick: Tick, _population: &Population, rising: bool) {
        self.levels.push((tick, rising));
    }

    fn on_sim_end(&mut self, final_tick: Tick, _population: &Population, swept: bool) {
        self.end = Some((final_tick, swept));
    }
}

// ── Statistics ────────────────────────────────────────────────────────────────

#[cfg(test)]
mod stats_tests {
    use super::*;

    #[test]
    fn empty_population_has_neutral_stats() {
        let s = GroupStats::compute(&[], &Border::unbounded().with_origin(Vec2::new(2.0, 3.0)));
        assert_eq!(s.center, Vec2::new(2.0, 3.0));
        assert_eq!(s.direction, Vec2::ZERO);
        assert_eq!(s.polarization, 0.0);
        assert_eq!(s.momentum, 0.0);
        assert!(s.front_order.is_empty() && s.center_order.is_empty());
    }

    #[test]
    fn aligned_group_is_polarized() {
        let agents = vec![agent(1.0, 0.0, 0.0), agent(-1.0, 0.0, 0.0), agent(0.0, 1.0, 0.0), agent(0.0, -1.0, 0.0)];
        let s = GroupStats::compute(&agents, &Border::unbounded());
        assert!(s.center.norm() < 1e-12);
        assert!((s.polarization - 1.0).abs() < 1e-12);
        assert!(s.momentum < 1e-12);
    }

    #[test]
    fn milling_group_has_momentum() {
        let agents = vec![
            agent(1.0, 0.0, FRAC_PI_2),
            agent(0.0, 1.0, PI),
            agent(-1.0, 0.0, -FRAC_PI_2),
            agent(0.0, -1.0, 0.0),
        ];
        let s = GroupStats::compute(&agents, &Border::unbounded());
        assert!((s.momentum - 1.0).abs() < 1e-9);
        assert!(s.polarization < 1e-9);
    }

    #[test]
    fn ranks_follow_front_and_centre() {
        let agents = vec![agent(3.0, 0.0, 0.0), agent(-1.0, 0.0, 0.0), agent(0.0, 0.0, 0.0)];
        let s = GroupStats::compute(&agents, &Border::unbounded());
        assert_eq!(s.front_order, vec![2, 0, 1]);
        assert_eq!(s.center_order, vec![2, 1, 0]);
    }

    #[test]
    fn centre_uses_torus_displacement() {
        let border = Border::periodic(Vec2::new(100.0, 100.0));
        let agents = vec![agent(10.0, 0.0, 0.0), agent(20.0, 0.0, 0.0)];
        let s = GroupStats::compute(&agents, &border);
        assert!((s.center.x - 15.0).abs() < 1e-12);
    }

    #[test]
    fn final_state_carries_ranks() {
        let pop = population_of(vec![agent(3.0, 0.0, 0.0), agent(-1.0, 0.0, 0.0), agent(0.0, 0.0, 0.0)]);
        let state = pop.final_state();
        assert_eq!(state.len(), 3);
        assert_eq!(state[1].id, 1);
        assert_eq!(state[1].position, Vec2::new(-1.0, 0.0));
        assert_eq!((state[0].front_idx, state[0].center_idx), (2, 2));
        assert_eq!((state[2].front_idx, state[2].center_idx), (1, 0));
    }

    #[test]
    fn quantities_report_population_parameters() {
        let pop = population_of(vec![agent(0.0, 0.0, 0.0)]);
        let q = pop.quantities(true);
        assert_eq!(q.radii, RADII);
        assert_eq!(q.speed, 1.0);
        assert!(q.is_roo_rising);
        assert!((q.polarization - 1.0).abs() < 1e-12);
    }
}

// ── Population ────────────────────────────────────────────────────────────────

#[cfg(test)]
mod population_tests {
    use super::*;
    use crate::MAX_PLACEMENT_ATTEMPTS;

    fn empty_population(view: f64) -> Population {
        let perception = Perception::builder(Border::unbounded()).range(view).build().unwrap();
        Population::new(perception, AgentTemplate::new(1.0, 1.0, RADII), 0.0, 99)
    }

    #[test]
    fn populate_places_agents_near_origin() {
        let mut pop = empty_population(20.0);
        pop.populate(30).unwrap();
        assert_eq!(pop.len(), 30);
        assert_eq!(pop.rngs.len(), 30);
        for a in &pop.agents {
            assert!(a.position.norm() <= RADII.roa);
            assert!(matches!(a.marker, Marker::Regular(i) if i < crate::ACCENT_COUNT));
        }
    }

    #[test]
    fn exhausted_placement_rolls_back() {
        let mut pop = empty_population(1e-9);
        let err = pop.populate(2).unwrap_err();
        assert!(matches!(err, SimError::PlacementExhausted { attempts } if attempts == MAX_PLACEMENT_ATTEMPTS));
        assert!(pop.is_empty());
        assert!(pop.rngs.is_empty());
    }

    #[test]
    fn add_agent_at_uses_mean_traits() {
        let mut pop = empty_population(20.0);
        let id = pop.add_agent_at(Marker::Highlight, Vec2::new(1.0, 2.0), 0.5);
        let a = &pop.agents[id.index()];
        assert_eq!(a.marker, Marker::Highlight);
        assert_eq!(a.position, Vec2::new(1.0, 2.0));
        assert_eq!(a.radii, RADII);
        assert!((a.heading() - 0.5).abs() < 1e-12);
    }

    #[test]
    fn set_roo_preserves_personal_offsets() {
        let mut b = agent(5.0, 0.0, 0.0);
        b.radii.roo = 6.0;
        let mut pop = population_of(vec![agent(0.0, 0.0, 0.0), b]);
        pop.set_roo(7.0);
        assert_eq!(pop.roo(), 7.0);
        assert_eq!(pop.agents[0].radii.roo, 7.0);
        assert_eq!(pop.agents[1].radii.roo, 8.0);
    }

    #[test]
    fn tick_is_two_phase() {
        // Both agents see the other's pre-tick heading, so they swap
        // directions symmetrically.
        let mut pop = population_of(vec![agent(0.0, 0.0, 0.0), agent(3.0, 0.0, FRAC_PI_2)]);
        pop.tick(Tick(0), 0.1, &ZoneModel::deterministic());
        assert!((pop.agents[0].heading() - 0.1).abs() < 1e-12);
        assert!((pop.agents[1].heading() - (FRAC_PI_2 - 0.1)).abs() < 1e-12);
    }

    #[test]
    fn decide_phase_is_order_independent() {
        // Runs under both the sequential and the `parallel` build.  Visiting
        // agents back to front must give the same result as `tick`.
        let flock = || {
            vec![
                agent(0.0, 0.0, 0.0),
                agent(0.0, 0.0, 1.0),
                agent(0.5, 0.2, -2.0),
                agent(3.0, 1.0, FRAC_PI_2),
                agent(-4.0, 2.0, PI - 0.2),
                agent(8.0, -3.0, 0.7),
                agent(1.5, -6.0, -1.1),
            ]
        };
        let model = ZoneModel::new(0.3).unwrap();

        let mut ticked = population_of(flock());
        let mut manual = population_of(flock());

        for t in 0..5 {
            ticked.tick(Tick(t), 0.1, &model);

            let n = manual.len();
            let mut targets = vec![0.0; n];
            {
                // Same pipeline as `population_of`; `manual` stays free for the
                // mutable RNG borrow.
                let perception = Perception::builder(Border::unbounded()).range(100.0).build().unwrap();
                let ctx = FlockContext::new(Tick(t), 0.1, &manual.agents, &perception);
                for i in (0..n).rev() {
                    let id = AgentId(i as u32);
                    targets[i] = model.reorient(id, &ctx, manual.rngs.get_mut(id));
                }
            }
            let border = *manual.border();
            for (a, target) in manual.agents.iter_mut().zip(targets) {
                a.turn_to(target, 0.1);
                a.tick(0.1);
                a.position = border.wrap(a.position);
            }

            assert_eq!(ticked.agents, manual.agents, "diverged at tick {t}");
        }
    }

    #[test]
    fn clip_border_contains_agents() {
        let perception = Perception::builder(Border::clip(Vec2::new(10.0, 10.0))).range(1.0).build().unwrap();
        let mut pop = Population::new(perception, AgentTemplate::new(1.0, 1.0, RADII), 0.0, 0);
        pop.push(agent(4.95, 0.0, 0.0));
        for t in 0..10 {
            pop.tick(Tick(t), 0.1, &NoopBehavior);
        }
        assert_eq!(pop.agents[0].position, Vec2::new(5.0, 0.0));
    }
}

// ── Configuration ─────────────────────────────────────────────────────────────

#[cfg(test)]
mod config_tests {
    use fl_behavior::BehaviorError;
    use fl_perception::PerceptionError;
    use fl_sweep::SweepError;

    use super::*;

    #[test]
    fn default_config_is_valid() {
        FlockConfig::default().validate().unwrap();
        assert_eq!(FlockConfig::default().sim_config().unwrap().total_ticks, 1_000);
    }

    #[test]
    fn too_fast_is_unstable() {
        let mut cfg = config(3);
        cfg.population.speed = 10.0;
        let err = cfg.validate().unwrap_err();
        assert!(matches!(err, SimError::Unstable { ror, .. } if ror == 1.0));
    }

    #[test]
    fn sweep_budget_needs_sweep() {
        let mut cfg = config(3);
        cfg.ticks = TickBudget::FromSweep;
        assert!(matches!(cfg.validate(), Err(SimError::Config(_))));

        cfg.sweep = Some(SweepConfig::parse_range("1:1:4").unwrap());
        assert!(matches!(cfg.validate(), Err(SimError::Sweep(SweepError::MissingStepDuration))));

        cfg.sweep = cfg.sweep.map(|s| s.with_step_duration(2));
        assert_eq!(cfg.total_ticks().unwrap(), 10);
        assert_eq!(cfg.initial_roo(), 1.0);
    }

    #[test]
    fn bad_perception_is_reported() {
        let mut cfg = config(3);
        cfg.perception = PerceptionConfig::default();
        assert!(matches!(cfg.validate(), Err(SimError::Perception(PerceptionError::Empty))));

        cfg.perception = PerceptionConfig {
            blind_spot_bisectors: Some(vec![0.0]),
            ..PerceptionConfig::default()
        };
        assert!(matches!(
            cfg.validate(),
            Err(SimError::Perception(PerceptionError::BlindSpotMismatch { bisectors: 1, openings: 0 }))
        ));
    }

    #[test]
    fn negative_noise_and_spread_are_rejected() {
        let mut cfg = config(3);
        cfg.population.decision_sd = -1.0;
        assert!(matches!(cfg.validate(), Err(SimError::Behavior(BehaviorError::InvalidNoise(_)))));

        let mut cfg = config(3);
        cfg.population.spread.roa_sd = -0.5;
        assert!(matches!(cfg.validate(), Err(SimError::Config(_))));

        let mut cfg = config(3);
        cfg.dt = 0.0;
        assert!(matches!(cfg.validate(), Err(SimError::Config(_))));
    }

    #[test]
    fn periodic_border_needs_extent() {
        let mut cfg = config(3);
        cfg.border.kind = BorderKind::Periodic;
        cfg.border.length = Vec2::new(0.0, 10.0);
        assert!(matches!(cfg.validate(), Err(SimError::Core(_))));
    }
}

// ── Builder and loop ──────────────────────────────────────────────────────────

#[cfg(test)]
mod sim_tests {
    use super::*;

    #[test]
    fn facing_pair_aligns_after_one_tick() {
        let cfg = config(2);
        let mut sim = SimBuilder::from_config(cfg)
            .unwrap()
            .agents(vec![agent(0.0, 0.0, 0.0), agent(3.0, 0.0, PI)])
            .build()
            .unwrap();
        sim.run_ticks(1, &mut NoopObserver).unwrap();

        let a = &sim.population.agents;
        // Each turned towards the other's original heading.
        assert!(angle_diff(PI, a[0].heading()).abs() < PI - 0.05);
        assert!(angle_diff(0.0, a[1].heading()).abs() < PI - 0.05);
        assert!(a[0].position.x > 0.0 && a[1].position.x < 3.0);
    }

    #[test]
    fn agent_count_must_match() {
        let err = SimBuilder::from_config(config(3))
            .unwrap()
            .agents(vec![agent(0.0, 0.0, 0.0)])
            .build()
            .err()
            .unwrap();
        assert!(matches!(err, SimError::AgentCountMismatch { expected: 3, got: 1, .. }));
    }

    #[test]
    fn highlight_is_first_and_at_origin() {
        let mut cfg = config(5);
        cfg.highlight = true;
        let sim = SimBuilder::from_config(cfg).unwrap().build().unwrap();
        assert_eq!(sim.population.len(), 5);
        assert_eq!(sim.population.agents[0].marker, Marker::Highlight);
        assert_eq!(sim.population.agents[0].position, Vec2::ZERO);
        assert!(sim.population.agents[1..].iter().all(|a| a.marker != Marker::Highlight));
    }

    #[test]
    fn run_calls_every_hook() {
        let mut cfg = config(4);
        cfg.ticks = TickBudget::Fixed(5);
        cfg.output_interval_ticks = 2;
        let mut sim = SimBuilder::from_config(cfg).unwrap().build().unwrap();
        let mut rec = Recorder::default();
        sim.run(&mut rec).unwrap();

        assert_eq!(rec.started, (0..5).map(Tick).collect::<Vec<_>>());
        assert_eq!(rec.snapshots, vec![Tick(0), Tick(2), Tick(4)]);
        assert!(rec.levels.is_empty());
        assert_eq!(rec.end, Some((Tick(5), false)));
        assert!(sim.is_finished());
    }

    #[test]
    fn sweep_drives_orientation_radius() {
        let mut cfg = config(6);
        cfg.sweep = Some(SweepConfig::parse_range("1:1:3").unwrap().with_step_duration(2));
        cfg.ticks = TickBudget::FromSweep;
        let mut sim = SimBuilder::from_config(cfg).unwrap().build().unwrap();
        assert!(sim.population.agents.iter().all(|a| a.radii.roo == 1.0));

        let mut rec = Recorder::default();
        sim.run(&mut rec).unwrap();

        assert_eq!(rec.roo, vec![1.0, 1.0, 2.0, 2.0, 1.0, 1.0]);
        assert_eq!(rec.levels, vec![(Tick(1), true), (Tick(3), false), (Tick(5), false)]);
        assert_eq!(rec.end, Some((Tick(6), true)));
        assert!(sim.population.agents.iter().all(|a| a.radii.roo == 1.0));
    }

    #[test]
    fn same_seed_same_run() {
        let mut cfg = config(12);
        cfg.population.decision_sd = 0.1;
        let run = |cfg: FlockConfig| {
            let mut sim = SimBuilder::from_config(cfg).unwrap().build().unwrap();
            sim.run(&mut NoopObserver).unwrap();
            sim.population.final_state()
        };
        assert_eq!(run(cfg.clone()), run(cfg));
    }

    #[test]
    fn custom_perception_overrides_config() {
        let border = Border::periodic(Vec2::new(40.0, 40.0));
        let perception = Perception::builder(border).knn(3).build().unwrap();
        let sim = SimBuilder::new(config(8), NoopBehavior)
            .perception(perception)
            .build()
            .unwrap();
        assert_eq!(sim.population.border().kind, BorderKind::Periodic);
        assert_eq!(sim.population.len(), 8);
    }
}

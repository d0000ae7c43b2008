//! Unit tests for fl-sweep.

#[cfg(test)]
mod incrementor_tests {
    use crate::{Incrementor, SweepError};

    /// Value in effect during each tick, as the simulation loop applies it.
    fn trace(inc: &mut Incrementor, ticks: u64) -> Vec<f64> {
        let mut out = Vec::new();
        let mut current = inc.value();
        for _ in 0..ticks {
            out.push(current);
            current = inc.next();
        }
        out
    }

    #[test]
    fn short_sweep_goes_up_then_down() {
        let mut inc = Incrementor::new(1.0, 1.0, 3.0, 2).unwrap();
        assert_eq!(inc.total_ticks(), 6);
        assert_eq!(trace(&mut inc, 6), vec![1.0, 1.0, 2.0, 2.0, 1.0, 1.0]);
    }

    #[test]
    fn longer_sweep_peaks_below_sup() {
        let mut inc = Incrementor::new(1.0, 1.0, 4.0, 2).unwrap();
        assert_eq!(inc.level_count(), 5);
        assert_eq!(inc.total_ticks(), 10);
        assert_eq!(
            trace(&mut inc, 10),
            vec![1.0, 1.0, 2.0, 2.0, 3.0, 3.0, 2.0, 2.0, 1.0, 1.0]
        );
    }

    #[test]
    fn never_drops_below_inf() {
        let mut inc = Incrementor::new(1.0, 1.0, 3.0, 1).unwrap();
        for _ in 0..20 {
            assert!(inc.next() >= 1.0);
        }
    }

    #[test]
    fn fractional_increment_ends_at_inf() {
        let mut inc = Incrementor::new(0.0, 0.3, 1.0, 1).unwrap();
        assert_eq!(inc.total_ticks(), 7);
        let values = trace(&mut inc, 7);
        assert_eq!(values.first(), Some(&0.0));
        let peak = values.iter().cloned().fold(f64::MIN, f64::max);
        assert!((peak - 0.9).abs() < 1e-9);
        assert!(values.last().is_some_and(|v| v.abs() < 1e-9));
    }

    #[test]
    fn will_change_marks_last_tick_of_level() {
        let mut inc = Incrementor::new(0.0, 1.0, 5.0, 3).unwrap();
        let flags: Vec<bool> = (0..6)
            .map(|_| {
                let f = inc.will_change();
                inc.next();
                f
            })
            .collect();
        assert_eq!(flags, vec![false, false, true, false, false, true]);
    }

    #[test]
    fn direction_flips_at_peak() {
        let mut inc = Incrementor::new(1.0, 1.0, 3.0, 1).unwrap();
        assert!(inc.is_rising());
        inc.next(); // 2.0, flips
        assert!(!inc.is_rising());
        assert_eq!(inc.step(), 1.0);
    }

    #[test]
    fn invalid_parameters_are_rejected() {
        assert_eq!(
            Incrementor::new(3.0, 1.0, 3.0, 1),
            Err(SweepError::InvalidBounds { inf: 3.0, sup: 3.0 })
        );
        assert_eq!(Incrementor::new(0.0, 0.0, 3.0, 1), Err(SweepError::InvalidIncrement(0.0)));
        assert_eq!(Incrementor::new(0.0, -1.0, 3.0, 1), Err(SweepError::InvalidIncrement(-1.0)));
        assert_eq!(Incrementor::new(0.0, 1.0, 3.0, 0), Err(SweepError::ZeroStepDuration));
    }
}

#[cfg(test)]
mod config_tests {
    use crate::{SweepConfig, SweepError};

    #[test]
    fn parses_range() {
        let cfg: SweepConfig = "1:0.5:10".parse().unwrap();
        assert_eq!(cfg.inf_bound, 1.0);
        assert_eq!(cfg.increment, 0.5);
        assert_eq!(cfg.sup_bound, 10.0);
        assert_eq!(cfg.step_duration, None);
    }

    #[test]
    fn rejects_malformed_ranges() {
        assert!(matches!(SweepConfig::parse_range("1:2"), Err(SweepError::Parse(_))));
        assert!(matches!(SweepConfig::parse_range("1:x:3"), Err(SweepError::Parse(_))));
        assert!(matches!(SweepConfig::parse_range("1:2:3:4"), Err(SweepError::Parse(_))));
    }

    #[test]
    fn build_requires_step_duration() {
        let cfg = SweepConfig::parse_range("1:1:3").unwrap();
        assert_eq!(cfg.build(), Err(SweepError::MissingStepDuration));
        let inc = cfg.with_step_duration(4).build().unwrap();
        assert_eq!(inc.value(), 1.0);
        assert_eq!(inc.level_count(), 3);
        assert_eq!(inc.total_ticks(), 12);
    }
}

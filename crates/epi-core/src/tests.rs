//! Unit tests for epi-core primitives.

#[cfg(test)]
mod ids {
    use crate::AgentId;

    #[test]
    fn index_roundtrip() {
        let id = AgentId(42);
        assert_eq!(id.index(), 42);
        assert_eq!(AgentId::try_from(42usize).unwrap(), id);
    }

    #[test]
    fn invalid_sentinel_is_max() {
        assert_eq!(AgentId::INVALID.0, u32::MAX);
        assert_eq!(AgentId::default(), AgentId::INVALID);
    }

    #[test]
    fn display() {
        assert_eq!(AgentId(7).to_string(), "AgentId(7)");
    }
}

#[cfg(test)]
mod time {
    use crate::Day;

    #[test]
    fn day_arithmetic() {
        let d = Day(10);
        assert_eq!(d + 5, Day(15));
        assert_eq!(d.next(), Day(11));
        assert_eq!(Day(15) - Day(10), 5);
    }

    #[test]
    fn previous_stops_at_zero() {
        assert_eq!(Day(3).previous(), Some(Day(2)));
        assert_eq!(Day::ZERO.previous(), None);
    }

    #[test]
    fn display() {
        assert_eq!(Day(4).to_string(), "D4");
    }
}

#[cfg(test)]
mod rng {
    use crate::{AgentId, AgentRng, SimRng};

    #[test]
    fn deterministic_same_seed() {
        let mut r1 = SimRng::new(12345);
        let mut r2 = SimRng::new(12345);
        for _ in 0..100 {
            let a: f64 = r1.random();
            let b: f64 = r2.random();
            assert_eq!(a, b);
        }
    }

    #[test]
    fn different_agents_differ() {
        let mut r0 = AgentRng::new(1, AgentId(0));
        let mut r1 = AgentRng::new(1, AgentId(1));
        let a: u64 = r0.random();
        let b: u64 = r1.random();
        assert_ne!(a, b, "seeds for adjacent agents should diverge");
    }

    #[test]
    fn gen_bool_extremes() {
        let mut rng = SimRng::new(0);
        assert!(!rng.gen_bool(0.0));
        assert!(rng.gen_bool(1.0));
        // Out-of-range probabilities are clamped rather than panicking.
        assert!(rng.gen_bool(1.5));
        assert!(!rng.gen_bool(-0.5));
    }

    #[test]
    fn sample_indices_distinct_and_in_range() {
        let mut rng = SimRng::new(9);
        let mut picked = rng.sample_indices(50, 20);
        assert_eq!(picked.len(), 20);
        assert!(picked.iter().all(|&i| i < 50));
        picked.sort_unstable();
        picked.dedup();
        assert_eq!(picked.len(), 20, "indices must be distinct");
    }

    #[test]
    fn sample_indices_clamps_amount() {
        let mut rng = AgentRng::new(3, AgentId(0));
        let mut all = rng.sample_indices(5, 12);
        all.sort_unstable();
        assert_eq!(all, vec![0, 1, 2, 3, 4]);
        assert!(rng.sample_indices(0, 3).is_empty());
    }

    #[test]
    fn round_probabilistic_integers_are_exact() {
        let mut rng = SimRng::new(1);
        for _ in 0..100 {
            assert_eq!(rng.round_probabilistic(3.0), 3);
            assert_eq!(rng.round_probabilistic(0.0), 0);
        }
    }

    #[test]
    fn round_probabilistic_mean_matches_input() {
        let mut rng = SimRng::new(2024);
        let n = 20_000;
        let total: u64 = (0..n).map(|_| u64::from(rng.round_probabilistic(2.3))).sum();
        let mean = total as f64 / n as f64;
        assert!((mean - 2.3).abs() < 0.02, "mean {mean}");
    }

    #[test]
    fn round_probabilistic_stays_adjacent() {
        let mut rng = SimRng::new(5);
        for _ in 0..1000 {
            let k = rng.round_probabilistic(1.7);
            assert!(k == 1 || k == 2);
        }
    }

    #[test]
    fn round_probabilistic_saturates_huge_inputs() {
        let mut rng = SimRng::new(77);
        assert_eq!(rng.round_probabilistic(1e300), u32::MAX);
        assert_eq!(rng.round_probabilistic(f64::INFINITY), u32::MAX);
        assert_eq!(rng.round_probabilistic(f64::NAN), 0);
        assert_eq!(rng.round_probabilistic(-4.5), 0);
    }
}

#[cfg(test)]
mod params {
    use approx::assert_relative_eq;

    use crate::{DiseaseParams, EpiError, herd_immunity_threshold};

    #[test]
    fn herd_immunity_known_values() {
        assert_relative_eq!(herd_immunity_threshold(2.0).unwrap(), 0.5);
        assert_relative_eq!(herd_immunity_threshold(1.0).unwrap(), 0.0);
        assert_relative_eq!(herd_immunity_threshold(4.0).unwrap(), 0.75);
    }

    #[test]
    fn herd_immunity_below_one_is_negative() {
        assert!(herd_immunity_threshold(0.5).unwrap() < 0.0);
    }

    #[test]
    fn herd_immunity_rejects_non_positive() {
        assert!(herd_immunity_threshold(0.0).is_err());
        assert!(herd_immunity_threshold(-1.0).is_err());
        assert!(herd_immunity_threshold(f64::NAN).is_err());
    }

    #[test]
    fn validate_accepts_typical_values() {
        DiseaseParams::new(1.5, 0.1, 7).validate().unwrap();
        DiseaseParams::new(0.2, 0.0, 1).validate().unwrap();
        DiseaseParams::new(3.0, 1.0, 14).validate().unwrap();
    }

    #[test]
    fn validate_names_offending_field() {
        let cases = [
            (DiseaseParams::new(0.0, 0.1, 7), "R0"),
            (DiseaseParams::new(1.5, 1.1, 7), "ifr"),
            (DiseaseParams::new(1.5, -0.1, 7), "ifr"),
            (DiseaseParams::new(1.5, 0.1, 0), "illness_length"),
        ];
        for (params, field) in cases {
            match params.validate() {
                Err(EpiError::InvalidParameter { name, .. }) => assert_eq!(name, field),
                other => panic!("expected InvalidParameter({field}), got {other:?}"),
            }
        }
    }
}

#[cfg(test)]
mod config {
    use crate::{DiseaseParams, EpiError, NetworkSampling, OutbreakConfig};

    fn params() -> DiseaseParams {
        DiseaseParams::new(2.0, 0.01, 7)
    }

    #[test]
    fn defaults() {
        let cfg = OutbreakConfig::new(params(), 1000);
        assert_eq!(cfg.max_days, 365);
        assert_eq!(cfg.network_size, 0);
        assert!(cfg.is_uniform_mixing());
        assert_eq!(cfg.seed, None);
        assert_eq!(cfg.network_sampling, NetworkSampling::WithReplacement);
        cfg.validate().unwrap();
    }

    #[test]
    fn network_size_upper_bound() {
        OutbreakConfig::new(params(), 10).with_network_size(9).validate().unwrap();
        let err = OutbreakConfig::new(params(), 10).with_network_size(10).validate();
        assert!(matches!(err, Err(EpiError::InvalidParameter { name: "network_size", .. })));
    }

    #[test]
    fn empty_population_rejected() {
        let err = OutbreakConfig::new(params(), 0).validate();
        assert!(matches!(err, Err(EpiError::InvalidParameter { name: "population_size", .. })));
    }

    #[test]
    fn single_agent_needs_uniform_mixing() {
        OutbreakConfig::new(params(), 1).validate().unwrap();
        assert!(OutbreakConfig::new(params(), 1).with_network_size(1).validate().is_err());
    }

    #[test]
    fn zero_horizon_rejected() {
        let err = OutbreakConfig::new(params(), 10).with_max_days(0).validate();
        assert!(matches!(err, Err(EpiError::Config(_))));
    }

    #[test]
    fn disease_params_checked_first() {
        let bad = DiseaseParams::new(-2.0, 0.01, 7);
        let err = OutbreakConfig::new(bad, 10).validate();
        assert!(matches!(err, Err(EpiError::InvalidParameter { name: "R0", .. })));
    }

    #[cfg(feature = "serde")]
    #[test]
    fn loads_from_json_with_defaults() {
        let json = r#"{ "R0": 1.5, "ifr": 0.1, "population_size": 1000 }"#;
        let cfg: OutbreakConfig = serde_json::from_str(json).unwrap();
        assert_eq!(cfg.params.illness_length, 7);
        assert_eq!(cfg.max_days, 365);
        assert_eq!(cfg.network_size, 0);
        assert_eq!(cfg.network_sampling, NetworkSampling::WithReplacement);
    }

    #[cfg(feature = "serde")]
    #[test]
    fn json_loader_reports_parse_and_range_errors() {
        let ok = OutbreakConfig::from_json_str(
            r#"{ "R0": 2.0, "ifr": 0.0, "population_size": 50, "network_size": 4, "network_sampling": "distinct" }"#,
        )
        .unwrap();
        assert_eq!(ok.network_sampling, NetworkSampling::Distinct);

        let garbled = OutbreakConfig::from_json_str("{ R0: 2 }");
        assert!(matches!(garbled, Err(EpiError::Parse(_))));

        let out_of_range = OutbreakConfig::from_json_str(r#"{ "R0": 2.0, "ifr": 1.5, "population_size": 50 }"#);
        assert!(matches!(out_of_range, Err(EpiError::InvalidParameter { name: "ifr", .. })));

        let missing = OutbreakConfig::from_json_file("/nonexistent/outbreak.json");
        assert!(matches!(missing, Err(EpiError::Io(_))));
    }

    #[cfg(feature = "serde")]
    #[test]
    fn raw_parse_defers_range_checks() {
        let json = r#"{ "R0": 2.0, "ifr": 0.0, "population_size": 10, "network_size": 50 }"#;
        let mut cfg = OutbreakConfig::parse_json_str(json).unwrap();
        assert!(cfg.validate().is_err());
        assert!(OutbreakConfig::from_json_str(json).is_err());
        cfg.network_size = 5;
        cfg.validate().unwrap();

        assert!(matches!(OutbreakConfig::parse_json_str("[]"), Err(EpiError::Parse(_))));
        assert!(matches!(OutbreakConfig::read_json_file("/nonexistent/outbreak.json"), Err(EpiError::Io(_))));
    }
}

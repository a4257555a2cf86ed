//! Unit tests for coop-config.

use coop_core::SECONDS_PER_DAY;
use coop_stochastic::{DayCycle, HenSource};

use crate::{Config, ConfigError, IdSource};

// ── Fixtures ──────────────────────────────────────────────────────────────────

const FULL: &str = r#"
simulation:
  duration_days: 7.0
  n_nests: 3
  nest_selection_weights: [1.0, 2.0, 0.5]
  seed: 42

hens:
  id_source: population
  population: 24

time_windows:
  day:     { start: 6.0,  end: 18.0 }
  evening: { start: 18.0, end: 22.0 }
  night:   { start: 22.0, end: 6.0 }

distributions:
  day:
    arrival_rate_per_hour: 6.0
    mixture_prob: 0.8
    gamma:   { shape: 2.0, rate: 0.002 }
    uniform: { min: 30.0, max: 300.0 }
  evening:
    arrival_rate_per_hour: 2.0
    gamma:   { shape: 1.5, rate: 0.004 }
    uniform: { min: 30.0, max: 300.0 }
  night:
    arrival_rate_per_hour: 0.5
    mixture_prob: 1.0
    gamma:   { shape: 3.0, rate: 0.001 }
    uniform: { min: 60.0, max: 600.0 }
"#;

const MINIMAL: &str = r#"
simulation:
  duration_days: 1.0
  n_nests: 2

time_windows:
  allday: { start: 0.0, end: 24.0 }

distributions:
  allday:
    arrival_rate_per_hour: 3.0
    gamma:   { shape: 2.0, rate: 0.002 }
    uniform: { min: 30.0, max: 300.0 }
"#;

// ── Parsing ───────────────────────────────────────────────────────────────────

#[cfg(test)]
mod parsing {
    use super::*;

    #[test]
    fn full_file_parses() {
        let config = Config::from_yaml(FULL).unwrap();
        assert_eq!(config.simulation.duration_days, 7.0);
        assert_eq!(config.simulation.n_nests, 3);
        assert_eq!(config.simulation.seed, 42);
        assert_eq!(
            config.simulation.nest_selection_weights,
            Some(vec![1.0, 2.0, 0.5])
        );
        assert_eq!(config.hens.id_source, IdSource::Population);
        assert_eq!(config.hens.population, 24);
        assert_eq!(config.time_windows.len(), 3);
        assert_eq!(config.time_windows["night"].start, 22.0);
        assert_eq!(config.time_windows["night"].end, 6.0);
        assert_eq!(config.distributions["day"].mixture_prob, 0.8);
        assert_eq!(config.distributions["day"].gamma.shape, 2.0);
        assert_eq!(config.distributions["night"].uniform.max, 600.0);
    }

    #[test]
    fn minimal_file_fills_defaults() {
        let config = Config::from_yaml(MINIMAL).unwrap();
        assert_eq!(config.simulation.seed, 0);
        assert_eq!(config.simulation.nest_selection_weights, None);
        assert_eq!(config.hens.id_source, IdSource::Population);
        assert_eq!(config.hens.population, 100);
        // mixture_prob omitted: stays are gamma-only.
        assert_eq!(config.distributions["allday"].mixture_prob, 1.0);
    }

    #[test]
    fn minted_id_source_parses() {
        let raw = MINIMAL.replace(
            "time_windows:",
            "hens:\n  id_source: minted\n\ntime_windows:",
        );
        let config = Config::from_yaml(&raw).unwrap();
        assert_eq!(config.hens.id_source, IdSource::Minted);
    }

    #[test]
    fn garbage_is_a_yaml_error() {
        let err = Config::from_yaml("simulation: [not, a, mapping]").unwrap_err();
        assert!(matches!(err, ConfigError::Yaml(_)));
    }

    #[test]
    fn missing_file_is_an_io_error() {
        let err = Config::load("/nonexistent/coop.yaml").unwrap_err();
        assert!(matches!(err, ConfigError::Io(_)));
    }
}

// ── Validation ────────────────────────────────────────────────────────────────

#[cfg(test)]
mod validation {
    use super::*;

    #[test]
    fn rejects_nonpositive_duration() {
        let raw = MINIMAL.replace("duration_days: 1.0", "duration_days: 0.0");
        assert!(matches!(
            Config::from_yaml(&raw).unwrap_err(),
            ConfigError::Duration(_)
        ));
        let raw = MINIMAL.replace("duration_days: 1.0", "duration_days: -2.0");
        assert!(matches!(
            Config::from_yaml(&raw).unwrap_err(),
            ConfigError::Duration(_)
        ));
    }

    #[test]
    fn rejects_zero_nests() {
        let raw = MINIMAL.replace("n_nests: 2", "n_nests: 0");
        assert!(matches!(Config::from_yaml(&raw).unwrap_err(), ConfigError::NoNests));
    }

    #[test]
    fn rejects_weight_count_mismatch() {
        let raw = MINIMAL.replace("n_nests: 2", "n_nests: 2\n  nest_selection_weights: [1.0]");
        let err = Config::from_yaml(&raw).unwrap_err();
        assert!(matches!(
            err,
            ConfigError::WeightCountMismatch { expected: 2, got: 1 }
        ));
    }

    #[test]
    fn rejects_zero_population() {
        let raw = MINIMAL.replace(
            "time_windows:",
            "hens:\n  population: 0\n\ntime_windows:",
        );
        assert!(matches!(
            Config::from_yaml(&raw).unwrap_err(),
            ConfigError::EmptyPopulation
        ));
    }

    #[test]
    fn minted_source_ignores_population() {
        let raw = MINIMAL.replace(
            "time_windows:",
            "hens:\n  id_source: minted\n  population: 0\n\ntime_windows:",
        );
        assert!(Config::from_yaml(&raw).is_ok());
    }

    #[test]
    fn rejects_window_without_distribution() {
        let raw = MINIMAL.replace(
            "time_windows:\n  allday: { start: 0.0, end: 24.0 }",
            "time_windows:\n  allday: { start: 0.0, end: 12.0 }\n  pm: { start: 12.0, end: 24.0 }",
        );
        let err = Config::from_yaml(&raw).unwrap_err();
        assert!(matches!(err, ConfigError::MissingDistribution(name) if name == "pm"));
    }

    #[test]
    fn rejects_distribution_without_window() {
        let raw = format!(
            "{FULL}  extra:\n    arrival_rate_per_hour: 1.0\n    gamma:   {{ shape: 2.0, rate: 0.002 }}\n    uniform: {{ min: 30.0, max: 300.0 }}\n"
        );
        let err = Config::from_yaml(&raw).unwrap_err();
        assert!(matches!(err, ConfigError::MissingWindow(name) if name == "extra"));
    }
}

// ── Conversions ───────────────────────────────────────────────────────────────

#[cfg(test)]
mod conversions {
    use super::*;

    #[test]
    fn duration_in_seconds() {
        let config = Config::from_yaml(FULL).unwrap();
        assert_eq!(config.duration_secs(), 7.0 * SECONDS_PER_DAY);
    }

    #[test]
    fn explicit_weights_pass_through() {
        let config = Config::from_yaml(FULL).unwrap();
        assert_eq!(config.nest_weights(), vec![1.0, 2.0, 0.5]);
    }

    #[test]
    fn omitted_weights_become_uniform() {
        let config = Config::from_yaml(MINIMAL).unwrap();
        assert_eq!(config.nest_weights(), vec![1.0, 1.0]);
    }

    #[test]
    fn hen_source_mapping() {
        let config = Config::from_yaml(FULL).unwrap();
        assert_eq!(config.hen_source(), HenSource::Population { count: 24 });

        let raw = MINIMAL.replace(
            "time_windows:",
            "hens:\n  id_source: minted\n\ntime_windows:",
        );
        let config = Config::from_yaml(&raw).unwrap();
        assert_eq!(config.hen_source(), HenSource::Minted);
    }

    #[test]
    fn window_specs_pair_windows_with_distributions() {
        let config = Config::from_yaml(FULL).unwrap();
        let specs = config.window_specs().unwrap();
        // Name order: BTreeMap iteration.
        let names: Vec<&str> = specs.iter().map(|s| s.name.as_str()).collect();
        assert_eq!(names, vec!["day", "evening", "night"]);

        let day = &specs[0];
        assert_eq!(day.start_hour, 6.0);
        assert_eq!(day.end_hour, 18.0);
        assert_eq!(day.arrival_rate_per_hour, 6.0);
        assert_eq!(day.residence.gamma_weight, 0.8);
        assert_eq!(day.residence.gamma_shape, 2.0);
        assert_eq!(day.residence.gamma_rate, 0.002);
        assert_eq!(day.residence.uniform_min_secs, 30.0);
        assert_eq!(day.residence.uniform_max_secs, 300.0);

        // mixture_prob was omitted for evening: gamma-only.
        assert_eq!(specs[1].residence.gamma_weight, 1.0);
    }

    #[test]
    fn window_specs_compile_into_a_day_cycle() {
        let config = Config::from_yaml(FULL).unwrap();
        let specs = config.window_specs().unwrap();
        let cycle = DayCycle::new(&specs).unwrap();
        assert_eq!(cycle.resolve(2.5 * 3_600.0).name, "night");
        assert_eq!(cycle.resolve(12.0 * 3_600.0).name, "day");
    }
}

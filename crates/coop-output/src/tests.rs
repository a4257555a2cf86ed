//! Integration tests for coop-output.

use coop_core::{HenId, NestId};
use coop_metrics::PairKey;
use coop_sim::{Event, Sim, SimBuilder};
use coop_stochastic::{HenSource, ResidenceSpec, WindowSpec};
use tempfile::TempDir;

// ── Helpers ───────────────────────────────────────────────────────────────────

fn tmp() -> TempDir {
    tempfile::tempdir().expect("create temp dir")
}

/// One busy all-day window with bounded uniform stays.
fn one_day_sim(seed: u64) -> Sim {
    let windows = vec![WindowSpec {
        name: "allday".into(),
        start_hour: 0.0,
        end_hour: 24.0,
        arrival_rate_per_hour: 6.0,
        residence: ResidenceSpec {
            gamma_weight: 0.0,
            gamma_shape: 2.0,
            gamma_rate: 0.01,
            uniform_min_secs: 60.0,
            uniform_max_secs: 600.0,
        },
    }];
    SimBuilder::new(86_400.0, seed)
        .windows(windows)
        .nest_weights(vec![1.0, 1.0, 1.0])
        .hen_source(HenSource::Population { count: 12 })
        .build()
        .unwrap()
}

// ── DirWriter ─────────────────────────────────────────────────────────────────

#[cfg(test)]
mod dir_tests {
    use std::collections::BTreeMap;

    use super::*;
    use crate::dir::DirWriter;
    use crate::row::{EventRow, OccupancyRow};
    use crate::writer::OutputWriter;

    #[test]
    fn log_created_up_front_summaries_on_demand() {
        let dir = tmp();
        let mut w = DirWriter::new(dir.path()).unwrap();
        assert!(dir.path().join("simulated_log.csv").exists());
        assert!(!dir.path().join("occupancy_metrics.json").exists());
        assert!(!dir.path().join("co_occurrences.json").exists());

        w.write_occupancy(&[]).unwrap();
        w.write_pairs(&BTreeMap::new()).unwrap();
        assert!(dir.path().join("occupancy_metrics.json").exists());
        assert!(dir.path().join("co_occurrences.json").exists());
    }

    #[test]
    fn log_header_correct() {
        let dir = tmp();
        let mut w = DirWriter::new(dir.path()).unwrap();
        w.finish().unwrap();

        let mut rdr = csv::Reader::from_path(dir.path().join("simulated_log.csv")).unwrap();
        let headers: Vec<_> = rdr.headers().unwrap().iter().map(str::to_owned).collect();
        assert_eq!(headers, ["timestamp", "hen_id", "nest_id", "event_type"]);
    }

    #[test]
    fn event_rows_round_trip() {
        let dir = tmp();
        let mut w = DirWriter::new(dir.path()).unwrap();
        w.write_event(&EventRow::from(&Event::arrival(12.5, HenId(3), NestId(1))))
            .unwrap();
        w.write_event(&EventRow::from(&Event::departure(90.25, HenId(3), NestId(1))))
            .unwrap();
        w.finish().unwrap();

        let mut rdr = csv::Reader::from_path(dir.path().join("simulated_log.csv")).unwrap();
        let rows: Vec<_> = rdr.records().map(|r| r.unwrap()).collect();
        assert_eq!(rows.len(), 2);
        assert_eq!(&rows[0][0], "12.5");
        assert_eq!(&rows[0][1], "3");
        assert_eq!(&rows[0][2], "1");
        assert_eq!(&rows[0][3], "entry");
        assert_eq!(&rows[1][0], "90.25");
        assert_eq!(&rows[1][3], "exit");
    }

    #[test]
    fn occupancy_json_is_keyed_by_nest() {
        let dir = tmp();
        let mut w = DirWriter::new(dir.path()).unwrap();
        let rows = [
            OccupancyRow { nest_id: 0, total_occupancy_time: 120.5, total_single_hen_time: 100.0 },
            OccupancyRow { nest_id: 1, total_occupancy_time: 0.0, total_single_hen_time: 0.0 },
        ];
        w.write_occupancy(&rows).unwrap();

        let raw = std::fs::read_to_string(dir.path().join("occupancy_metrics.json")).unwrap();
        let value: serde_json::Value = serde_json::from_str(&raw).unwrap();
        assert_eq!(value["0"]["nest_id"], 0);
        assert_eq!(value["0"]["total_occupancy_time"], 120.5);
        assert_eq!(value["0"]["total_single_hen_time"], 100.0);
        assert_eq!(value["1"]["total_occupancy_time"], 0.0);
    }

    #[test]
    fn pairs_json_uses_comma_labels() {
        let dir = tmp();
        let mut w = DirWriter::new(dir.path()).unwrap();
        let mut counts = BTreeMap::new();
        counts.insert(PairKey::new(HenId(2), HenId(1)), 3u64);
        counts.insert(PairKey::new(HenId(2), HenId(5)), 1u64);
        w.write_pairs(&counts).unwrap();

        let raw = std::fs::read_to_string(dir.path().join("co_occurrences.json")).unwrap();
        let value: serde_json::Value = serde_json::from_str(&raw).unwrap();
        assert_eq!(value["1,2"], 3);
        assert_eq!(value["2,5"], 1);
    }

    #[test]
    fn finish_idempotent() {
        let dir = tmp();
        let mut w = DirWriter::new(dir.path()).unwrap();
        w.finish().unwrap();
        w.finish().unwrap();
    }
}

// ── Pair labels ───────────────────────────────────────────────────────────────

#[cfg(test)]
mod labels {
    use super::*;
    use crate::row::{pair_label, parse_pair_label};

    #[test]
    fn label_puts_smaller_id_first() {
        assert_eq!(pair_label(&PairKey::new(HenId(9), HenId(4))), "4,9");
    }

    #[test]
    fn parse_accepts_spaces_and_rejects_garbage() {
        assert_eq!(parse_pair_label("4,9"), Some((4, 9)));
        assert_eq!(parse_pair_label(" 4, 9 "), Some((4, 9)));
        assert_eq!(parse_pair_label("49"), None);
        assert_eq!(parse_pair_label("a,b"), None);
        assert_eq!(parse_pair_label("4,9,2"), None);
    }
}

// ── Full run to disk ──────────────────────────────────────────────────────────

#[cfg(test)]
mod run_to_disk {
    use super::*;
    use crate::analysis::load_pair_counts;
    use crate::dir::DirWriter;
    use crate::observer::SimOutputObserver;
    use crate::row::OccupancyRow;
    use crate::writer::OutputWriter;

    /// Run one seeded day and write all three artifacts into `dir`.
    fn run_into(dir: &std::path::Path, seed: u64) -> coop_sim::RunSummary {
        let mut sim = one_day_sim(seed);
        let writer = DirWriter::new(dir).unwrap();
        let mut obs = SimOutputObserver::new(writer);
        let summary = sim.run(&mut obs).unwrap();
        assert!(obs.take_error().is_none(), "no write errors expected");
        assert_eq!(obs.events_written(), summary.arrivals + summary.departures);

        let mut writer = obs.into_writer();
        let rows: Vec<OccupancyRow> =
            sim.occupancy.records().iter().map(OccupancyRow::from).collect();
        writer.write_occupancy(&rows).unwrap();
        writer.write_pairs(sim.pairs.counts()).unwrap();
        writer.finish().unwrap();
        summary
    }

    #[test]
    fn artifacts_match_the_run() {
        let dir = tmp();
        let summary = run_into(dir.path(), 42);

        let mut rdr = csv::Reader::from_path(dir.path().join("simulated_log.csv")).unwrap();
        let rows: Vec<_> = rdr.records().map(|r| r.unwrap()).collect();
        assert_eq!(rows.len() as u64, summary.arrivals + summary.departures);

        // Timestamps in the log never decrease.
        let mut prev = 0.0;
        for row in &rows {
            let t: f64 = row[0].parse().unwrap();
            assert!(t >= prev);
            prev = t;
        }

        let counts = load_pair_counts(&dir.path().join("co_occurrences.json")).unwrap();
        for (&(a, b), &count) in &counts {
            assert!(a < b);
            assert!(count >= 1);
        }
    }

    #[test]
    fn same_seed_writes_identical_bytes() {
        let dir_a = tmp();
        let dir_b = tmp();
        run_into(dir_a.path(), 7);
        run_into(dir_b.path(), 7);

        for name in ["simulated_log.csv", "occupancy_metrics.json", "co_occurrences.json"] {
            let a = std::fs::read(dir_a.path().join(name)).unwrap();
            let b = std::fs::read(dir_b.path().join(name)).unwrap();
            assert_eq!(a, b, "{name} differs between identical runs");
        }
    }
}

// ── Analysis ──────────────────────────────────────────────────────────────────

#[cfg(test)]
mod analysis_tests {
    use super::*;
    use crate::analysis::{companions_of, load_pair_counts, network_degrees, top_pairs, PairCounts};
    use crate::OutputError;

    fn fixture() -> PairCounts {
        let mut counts = PairCounts::new();
        counts.insert((1, 2), 5);
        counts.insert((1, 3), 2);
        counts.insert((2, 3), 5);
        counts.insert((4, 5), 1);
        counts
    }

    #[test]
    fn top_pairs_ranks_by_count_then_ids() {
        let ranked = top_pairs(&fixture(), 3);
        assert_eq!(ranked, vec![((1, 2), 5), ((2, 3), 5), ((1, 3), 2)]);
    }

    #[test]
    fn top_pairs_handles_short_lists() {
        assert_eq!(top_pairs(&fixture(), 100).len(), 4);
        assert!(top_pairs(&PairCounts::new(), 10).is_empty());
    }

    #[test]
    fn companions_are_ranked_and_truncated() {
        assert_eq!(companions_of(&fixture(), 2, 10), vec![(1, 5), (3, 5)]);
        assert_eq!(companions_of(&fixture(), 2, 1), vec![(1, 5)]);
        assert!(companions_of(&fixture(), 9, 10).is_empty());
    }

    #[test]
    fn degrees_filter_weak_ties() {
        let degrees = network_degrees(&fixture(), 2);
        assert_eq!(degrees.get(&1), Some(&2));
        assert_eq!(degrees.get(&2), Some(&2));
        assert_eq!(degrees.get(&3), Some(&2));
        assert_eq!(degrees.get(&4), None);
    }

    #[test]
    fn load_rejects_bad_labels() {
        let dir = tmp();
        let path = dir.path().join("co_occurrences.json");
        std::fs::write(&path, r#"{ "notapair": 3 }"#).unwrap();
        let err = load_pair_counts(&path).unwrap_err();
        assert!(matches!(err, OutputError::PairLabel(label) if label == "notapair"));
    }

    #[test]
    fn load_round_trips_written_pairs() {
        use crate::dir::DirWriter;
        use crate::writer::OutputWriter;
        use std::collections::BTreeMap;

        let dir = tmp();
        let mut w = DirWriter::new(dir.path()).unwrap();
        let mut counts = BTreeMap::new();
        counts.insert(PairKey::new(HenId(1), HenId(2)), 4u64);
        counts.insert(PairKey::new(HenId(10), HenId(3)), 2u64);
        w.write_pairs(&counts).unwrap();

        let loaded = load_pair_counts(&dir.path().join("co_occurrences.json")).unwrap();
        assert_eq!(loaded.get(&(1, 2)), Some(&4));
        assert_eq!(loaded.get(&(3, 10)), Some(&2));
        assert_eq!(loaded.len(), 2);
    }
}

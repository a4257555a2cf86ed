//! Post-run companion analytics over the co-occurrence ledger.
//!
//! Answers the questions a flock keeper actually asks of the data: which
//! hens pair up most, who does a given hen share boxes with, and how
//! connected is the flock once weak ties are filtered out. Works from the
//! `co_occurrences.json` a finished run leaves behind, so analysis never
//! needs the simulation state.

use std::collections::BTreeMap;
use std::fs;
use std::path::Path;

use crate::row::parse_pair_label;
use crate::{OutputError, OutputResult};

/// Pair counts re-loaded from `co_occurrences.json`, keyed `(a, b)` with
/// `a < b`.
pub type PairCounts = BTreeMap<(u32, u32), u64>;

/// Load `co_occurrences.json` back into pair counts.
pub fn load_pair_counts(path: &Path) -> OutputResult<PairCounts> {
    let raw = fs::read_to_string(path)?;
    let labeled: BTreeMap<String, u64> = serde_json::from_str(&raw)?;
    let mut counts = PairCounts::new();
    for (label, count) in labeled {
        let (a, b) =
            parse_pair_label(&label).ok_or_else(|| OutputError::PairLabel(label.clone()))?;
        counts.insert((a.min(b), a.max(b)), count);
    }
    Ok(counts)
}

/// The `n` most frequent pairs, most episodes first. Ties break on the
/// smaller pair ids so rankings are stable.
pub fn top_pairs(counts: &PairCounts, n: usize) -> Vec<((u32, u32), u64)> {
    let mut ranked: Vec<_> = counts.iter().map(|(&pair, &count)| (pair, count)).collect();
    ranked.sort_by(|x, y| y.1.cmp(&x.1).then(x.0.cmp(&y.0)));
    ranked.truncate(n);
    ranked
}

/// Hens that shared a box with `hen`, most episodes first, at most `n`.
pub fn companions_of(counts: &PairCounts, hen: u32, n: usize) -> Vec<(u32, u64)> {
    let mut companions: Vec<(u32, u64)> = counts
        .iter()
        .filter_map(|(&(a, b), &count)| {
            if a == hen {
                Some((b, count))
            } else if b == hen {
                Some((a, count))
            } else {
                None
            }
        })
        .collect();
    companions.sort_by(|x, y| y.1.cmp(&x.1).then(x.0.cmp(&y.0)));
    companions.truncate(n);
    companions
}

/// Per-hen companion degree, counting only pairs with at least
/// `min_episodes` episodes. Hens whose every tie falls under the threshold
/// are absent.
pub fn network_degrees(counts: &PairCounts, min_episodes: u64) -> BTreeMap<u32, usize> {
    let mut degrees: BTreeMap<u32, usize> = BTreeMap::new();
    for (&(a, b), &count) in counts {
        if count >= min_episodes {
            *degrees.entry(a).or_insert(0) += 1;
            *degrees.entry(b).or_insert(0) += 1;
        }
    }
    degrees
}

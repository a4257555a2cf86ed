//! Subcommand definitions and drivers for the `coop` binary.

use std::path::PathBuf;
use std::time::Instant;

use anyhow::{Context, Result};
use clap::{Args, Parser, Subcommand};
use tracing::info;

use coop_config::Config;
use coop_output::analysis;
use coop_output::{DirWriter, OccupancyRow, OutputWriter, SimOutputObserver};
use coop_sim::SimBuilder;

// ── Argument surface ──────────────────────────────────────────────────────────

#[derive(Parser)]
#[command(version, about)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Simulate nest-box visits and write the run artifacts
    Run(RunArgs),
    /// Report companion pairs from a previous run's artifacts
    Analyze(AnalyzeArgs),
}

#[derive(Args, Debug, Clone)]
pub struct RunArgs {
    /// Simulation config file
    #[arg(short, long, default_value = "config/config.yaml")]
    pub config: PathBuf,
    /// Directory the run artifacts are written into (created if missing)
    #[arg(short, long, default_value = "data")]
    pub output_dir: PathBuf,
    /// Override the config's seed for this run
    #[arg(long)]
    pub seed: Option<u64>,
}

#[derive(Args, Debug, Clone)]
pub struct AnalyzeArgs {
    /// Directory a previous `coop run` wrote into
    #[arg(short, long, default_value = "data")]
    pub data_dir: PathBuf,
    /// Report the companions of this one hen instead of the full summary
    #[arg(long)]
    pub hen_id: Option<u32>,
    /// How many pairs (or companions) to list
    #[arg(long, default_value_t = 20)]
    pub top: usize,
    /// Shared episodes needed before a pair counts as a network tie
    #[arg(long, default_value_t = 3)]
    pub min_shared: u64,
}

// ── coop run ──────────────────────────────────────────────────────────────────

pub fn run(args: RunArgs) -> Result<()> {
    // 1. Load and validate the config.
    let config = Config::load(&args.config)
        .with_context(|| format!("loading config {}", args.config.display()))?;
    let seed = args.seed.unwrap_or(config.simulation.seed);
    info!(
        config = %args.config.display(),
        days = config.simulation.duration_days,
        nests = config.simulation.n_nests,
        seed,
        "starting run"
    );

    // 2. Build the sim.
    let mut sim = SimBuilder::new(config.duration_secs(), seed)
        .windows(config.window_specs()?)
        .nest_weights(config.nest_weights())
        .hen_source(config.hen_source())
        .build()?;

    // 3. Run, streaming the event log as it happens.
    let writer = DirWriter::new(&args.output_dir)
        .with_context(|| format!("opening output dir {}", args.output_dir.display()))?;
    let mut obs = SimOutputObserver::new(writer);
    let t0 = Instant::now();
    let summary = sim.run(&mut obs)?;
    let wall = t0.elapsed();
    if let Some(e) = obs.take_error() {
        return Err(e).context("writing the event log");
    }

    // 4. Write the summary artifacts.
    let mut writer = obs.into_writer();
    let rows: Vec<OccupancyRow> =
        sim.occupancy.records().iter().map(OccupancyRow::from).collect();
    writer.write_occupancy(&rows)?;
    writer.write_pairs(sim.pairs.counts())?;
    writer.finish()?;

    info!(
        arrivals = summary.arrivals,
        departures = summary.departures,
        skipped = summary.skipped_arrivals,
        discarded = summary.discarded_events,
        stop = %summary.stop,
        "run finished in {:.3} s (sim clock {})",
        wall.as_secs_f64(),
        sim.clock,
    );
    info!(
        dir = %args.output_dir.display(),
        pairs = sim.pairs.pair_count(),
        "artifacts written"
    );
    Ok(())
}

// ── coop analyze ──────────────────────────────────────────────────────────────

pub fn analyze(args: AnalyzeArgs) -> Result<()> {
    let path = args.data_dir.join("co_occurrences.json");
    let counts = analysis::load_pair_counts(&path)
        .with_context(|| format!("reading {}", path.display()))?;

    if let Some(hen) = args.hen_id {
        print_companions(&counts, hen, args.top);
        return Ok(());
    }

    println!("{}", "=".repeat(80));
    println!("CO-OCCURRENCE ANALYSIS");
    println!("{}", "=".repeat(80));
    println!();
    println!("Unique pairs tracked: {}", counts.len());

    if counts.is_empty() {
        println!("No co-occurrences recorded.");
        return Ok(());
    }

    let total: u64 = counts.values().sum();
    let max = counts.values().copied().max().unwrap_or(0);
    let min = counts.values().copied().min().unwrap_or(0);
    println!("Average co-occurrences per pair: {:.2}", total as f64 / counts.len() as f64);
    println!("Maximum co-occurrences: {max}");
    println!("Minimum co-occurrences: {min}");

    println!();
    println!("{}", "-".repeat(80));
    println!("TOP {} PAIRS THAT MOST FREQUENTLY VISIT NESTS TOGETHER", args.top);
    println!("{}", "-".repeat(80));
    for (rank, ((a, b), count)) in analysis::top_pairs(&counts, args.top).iter().enumerate() {
        println!("{:2}. Hen {a:>4} & Hen {b:>4}: {count:4} co-occurrences", rank + 1);
    }

    println!();
    println!("{}", "-".repeat(80));
    println!(
        "SOCIAL NETWORK: hens with ties of at least {} shared episodes",
        args.min_shared
    );
    println!("{}", "-".repeat(80));
    let degrees = analysis::network_degrees(&counts, args.min_shared);
    if degrees.is_empty() {
        println!(
            "No strong ties found (every pair shares fewer than {} episodes).",
            args.min_shared
        );
        return Ok(());
    }

    println!("Hens with at least one strong tie: {}", degrees.len());
    println!();
    // Most-connected hens first, hen id breaking ties.
    let mut ranked: Vec<(u32, usize)> = degrees.into_iter().collect();
    ranked.sort_by(|a, b| b.1.cmp(&a.1).then(a.0.cmp(&b.0)));
    for (rank, (hen, degree)) in ranked.iter().take(10).enumerate() {
        println!("{:2}. Hen {hen:4}: tied to {degree} other hens", rank + 1);
    }
    println!();
    println!("{}", "=".repeat(80));
    Ok(())
}

fn print_companions(counts: &analysis::PairCounts, hen: u32, top: usize) {
    println!("Companions of Hen {hen}:");
    println!("{}", "-".repeat(60));
    let companions = analysis::companions_of(counts, hen, top);
    if companions.is_empty() {
        println!("Hen {hen} has no recorded co-occurrences.");
        return;
    }
    for (rank, (companion, count)) in companions.iter().enumerate() {
        println!("{:2}. Hen {companion:4}: {count:4} co-occurrences", rank + 1);
    }
}

//! Headless simulation run with periodic statistics

use super::SimOptions;
use anyhow::{bail, Context, Result};
use ember_particles::{FireworksSimulation, FireworksStats};
use serde::Serialize;

pub struct RunArgs {
    pub sim: SimOptions,
    pub report_every: u64,
    pub format: String,
}

/// End-of-run report
#[derive(Debug, Serialize)]
pub struct RunSummary {
    pub frames: u64,
    pub simulated_seconds: f64,
    pub capacity: usize,
    pub alive: usize,
    pub dead: usize,
    pub reseeds: u64,
    pub stats: FireworksStats,
}

pub fn run(args: RunArgs) -> Result<()> {
    if args.format != "text" && args.format != "json" {
        bail!("Unknown format '{}' (expected text or json)", args.format);
    }

    let config = args.sim.to_config()?;
    let mut sim =
        FireworksSimulation::new(&config).context("Failed to create simulation")?;
    let mut driver = args.sim.driver(&config);

    let report_every = args.report_every;
    driver
        .run(&mut sim, args.sim.frames, |sim, clock| -> Result<()> {
            if report_every > 0 && clock.frame_count % report_every == 0 {
                let stats = sim.animator().stats();
                log::info!(
                    "frame {}: {} alive, {} spawned, {} killed, {} burst(s) in flight",
                    clock.frame_count,
                    sim.system().alive_count(),
                    stats.spawned,
                    stats.killed,
                    sim.animator().batches_in_flight()
                );
            }
            Ok(())
        })
        .context("Simulation failed")?;

    let summary = summarize(&sim, driver.clock.frame_count, driver.clock.total_time);
    match args.format.as_str() {
        "json" => println!("{}", serde_json::to_string_pretty(&summary)?),
        _ => print_summary(&summary),
    }
    Ok(())
}

pub fn summarize(sim: &FireworksSimulation, frames: u64, seconds: f64) -> RunSummary {
    let system = sim.system();
    RunSummary {
        frames,
        simulated_seconds: seconds,
        capacity: system.capacity(),
        alive: system.alive_count(),
        dead: system.dead_count(),
        reseeds: sim.reseeds(),
        stats: sim.animator().stats(),
    }
}

fn print_summary(summary: &RunSummary) {
    println!(
        "Simulated {} frame(s), {:.2}s",
        summary.frames, summary.simulated_seconds
    );
    println!(
        "Pool: {} alive, {} dead of {}",
        summary.alive, summary.dead, summary.capacity
    );
    println!(
        "Spawned: {}  Killed: {}  Bursts: {}  Reseeds: {}",
        summary.stats.spawned, summary.stats.killed, summary.stats.batches, summary.reseeds
    );
}

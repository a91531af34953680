//! Thicket Quickstart: seed a world, run it, print population counts.
//!
//! Demonstrates:
//!   1. Loading a SimConfig from TOML (defaults fill the rest)
//!   2. Building a Simulator and stepping it
//!   3. Plugging in a viability check and a snapshot sink
//!   4. Resetting to replay the same run
//!
//! Run with:
//!   cargo run --example quickstart
//!
//! Set `RUST_LOG=debug` to see a line per step.

use thicket_core::{DeathCause, Species};
use thicket_engine::{species_diversity, SimConfig, Simulator, Snapshot};
use tracing_subscriber::EnvFilter;

// ─── Configuration ──────────────────────────────────────────────

const CONFIG: &str = r#"
seed = 2024

[grid]
depth = 40
width = 60

[weather]
regrowth_probability = 0.08
"#;

const STEPS: u64 = 300;
const REPORT_EVERY: u64 = 50;

fn print_row(snapshot: &Snapshot) {
    let mut line = format!(
        "step {:>4} {:<5} {:<7}",
        snapshot.step.0,
        snapshot.phase.to_string(),
        snapshot.two_day_report
    );
    for species in Species::ALL {
        line.push_str(&format!(" {:>8}={:<5}", species.name(), snapshot.population(species)));
    }
    println!("{line}");
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let config = SimConfig::from_toml_str(CONFIG)?;
    let mut sim = Simulator::new(config)?;
    print_row(sim.latest());

    let mut eaten = 0u64;
    let mut starved = 0u64;
    let summary = sim.run_for(STEPS, species_diversity(1), |s: &Snapshot| {
        eaten += u64::from(s.stats.deaths(DeathCause::Eaten));
        starved += u64::from(s.stats.deaths(DeathCause::Starvation));
        if s.step.0 % REPORT_EVERY == 0 {
            print_row(s);
        }
    })?;

    println!();
    println!(
        "ran {} steps (halted early: {}), {} eaten, {} starved",
        summary.steps, summary.halted, eaten, starved
    );
    println!("final population: {}", summary.census);

    // Same seed, same world.
    let replay = sim.reset()?;
    println!("after reset: step {} with {}", replay.step, replay.census);
    Ok(())
}

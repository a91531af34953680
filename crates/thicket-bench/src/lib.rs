//! Benchmark profiles for the Thicket ecosystem simulation.
//!
//! Provides pre-built [`SimConfig`] profiles for benchmarks and examples:
//!
//! - [`reference_config`]: the default 80x120 world (9 600 cells)
//! - [`stress_config`]: 320x320 (~100K cells) with denser seeding
//! - [`warmed_simulator`]: a simulator advanced past its seeding transient

#![forbid(unsafe_code)]
#![deny(rustdoc::broken_intra_doc_links)]

use thicket_engine::{ConfigError, GridConfig, SeedingConfig, SimConfig, Simulator, StepError};

/// The default world at a fixed seed.
pub fn reference_config(seed: u64) -> SimConfig {
    SimConfig {
        seed,
        ..SimConfig::default()
    }
}

/// A large, crowded world.
///
/// Seeding probabilities are doubled so that breeding, feeding and
/// overcrowding paths all stay hot.
pub fn stress_config(seed: u64) -> SimConfig {
    let base = SeedingConfig::default();
    SimConfig {
        seed,
        grid: GridConfig {
            depth: 320,
            width: 320,
        },
        seeding: SeedingConfig {
            eagle: base.eagle * 2.0,
            scorpion: base.scorpion * 2.0,
            snake: base.snake * 2.0,
            mouse: base.mouse * 2.0,
            cricket: base.cricket * 2.0,
            plant: base.plant * 2.0,
        },
        ..SimConfig::default()
    }
}

/// Errors from building a warmed simulator.
#[derive(Debug)]
pub enum WarmupError {
    /// The profile did not validate.
    Config(ConfigError),
    /// A warm-up step failed.
    Step(StepError),
}

impl std::fmt::Display for WarmupError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Config(e) => write!(f, "config: {e}"),
            Self::Step(e) => write!(f, "warm-up step: {e}"),
        }
    }
}

impl std::error::Error for WarmupError {}

/// Build a simulator from `config` and advance it `steps` steps.
pub fn warmed_simulator(config: SimConfig, steps: u64) -> Result<Simulator, WarmupError> {
    let mut sim = Simulator::new(config).map_err(WarmupError::Config)?;
    for _ in 0..steps {
        sim.step().map_err(WarmupError::Step)?;
    }
    Ok(sim)
}

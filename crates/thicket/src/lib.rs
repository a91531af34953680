//! Thicket: a grid-based predator, prey and plant ecosystem simulation.
//!
//! This is the top-level facade crate that re-exports the public API from
//! all Thicket sub-crates. For most users, adding `thicket` as a single
//! dependency is sufficient.
//!
//! # Quick start
//!
//! ```rust
//! use thicket::prelude::*;
//!
//! let config = SimConfig {
//!     seed: 42,
//!     grid: GridConfig { depth: 30, width: 40 },
//!     ..SimConfig::default()
//! };
//! let mut sim = Simulator::new(config).unwrap();
//! let start = sim.latest().census.total();
//! assert!(start > 0);
//!
//! let summary = sim
//!     .run_for(25, species_diversity(1), |s: &Snapshot| {
//!         assert!(s.step.0 >= 1);
//!     })
//!     .unwrap();
//! assert!(summary.steps <= 25);
//! ```
//!
//! # Modules
//!
//! Each module corresponds to a sub-crate. Use them for types not in the prelude:
//!
//! | Module | Sub-crate | Contents |
//! |--------|-----------|----------|
//! | [`types`] | `thicket-core` | Locations, IDs, species table, weather, death causes |
//! | [`space`] | `thicket-space` | Occupancy grid and adjacency queries |
//! | [`agents`] | `thicket-agents` | Agents, habitat, lifecycle rules |
//! | [`engine`] | `thicket-engine` | Simulator, environment, configuration, snapshots |

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

/// Core types and IDs (`thicket-core`).
///
/// Contains [`types::Location`], [`types::Species`] with its capability
/// table, [`types::Weather`], [`types::Phase`] and [`types::DeathCause`].
pub use thicket_core as types;

/// Occupancy grid (`thicket-space`).
///
/// [`space::Grid`] maps each cell to at most one agent and answers the
/// 8-neighbour queries that drive movement and breeding.
pub use thicket_space as space;

/// Agents and lifecycle (`thicket-agents`).
///
/// [`agents::Habitat`] owns the population; [`agents::Habitat::act`] runs
/// one agent through one step.
pub use thicket_agents as agents;

/// The scheduler (`thicket-engine`).
///
/// [`engine::Simulator`] steps the world; [`engine::SimConfig`] configures
/// it and can be loaded from TOML.
pub use thicket_engine as engine;

/// Common imports for typical Thicket usage.
///
/// ```rust
/// use thicket::prelude::*;
/// ```
pub mod prelude {
    // Core types
    pub use thicket_core::{AgentId, DeathCause, Location, Phase, Species, StepId, Weather};

    // Grid
    pub use thicket_space::{Grid, GridError};

    // Agents
    pub use thicket_agents::{Agent, AgentState, Census, Habitat, LifecycleParams};

    // Engine
    pub use thicket_engine::{
        species_diversity, ConfigError, GridConfig, RunSummary, SeedingConfig, SimConfig,
        Simulator, Snapshot, SnapshotSink, StepError, StepStats, Viability, WeatherConfig,
    };
}

//! Scheduler, environment and configuration for Thicket simulations.
//!
//! [`Simulator`] drives the world one step at a time:
//!
//! 1. advance the step counter, day/night phase and weather;
//! 2. after a rainy day followed by a sunny one, regrow plants on empty cells;
//! 3. visit every agent alive at the start of the step, in insertion
//!    order, skipping predators in fog and agents whose activity period
//!    does not match the phase;
//! 4. drop the dead and publish a [`Snapshot`].
//!
//! Presentation layers plug in through [`SnapshotSink`] and [`Viability`],
//! both implemented for closures.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod config;
pub mod environment;
pub mod metrics;
pub mod simulator;
pub mod sink;
pub mod snapshot;

pub use config::{ConfigError, GridConfig, SeedingConfig, SimConfig, WeatherConfig};
pub use environment::{Environment, WeatherLog, REGROWTH_REPORT};
pub use metrics::StepStats;
pub use simulator::{RunSummary, Simulator, StepError, LONG_RUN_STEPS};
pub use sink::{discard, species_diversity, SnapshotSink, Viability};
pub use snapshot::Snapshot;

//! Hooks for the presentation layer: where snapshots go and when to stop.
//!
//! Both traits are implemented for closures, so most callers never name
//! them:
//!
//! ```
//! use thicket_engine::{GridConfig, SimConfig, Simulator, Snapshot};
//!
//! let config = SimConfig {
//!     grid: GridConfig { depth: 10, width: 10 },
//!     ..SimConfig::default()
//! };
//! let mut sim = Simulator::new(config).unwrap();
//! let mut seen = Vec::new();
//! sim.run_for(5, |_: &Snapshot| true, |s: &Snapshot| seen.push(s.step))
//!     .unwrap();
//! assert_eq!(seen.len(), 5);
//! ```

use crate::snapshot::Snapshot;

/// Receives the snapshot produced by every step.
pub trait SnapshotSink {
    /// Called once per step, in step order.
    fn publish(&mut self, snapshot: &Snapshot);
}

impl<F: FnMut(&Snapshot)> SnapshotSink for F {
    fn publish(&mut self, snapshot: &Snapshot) {
        self(snapshot)
    }
}

/// Decides whether a run should continue.
pub trait Viability {
    /// `true` while the world is worth stepping.
    fn is_viable(&mut self, snapshot: &Snapshot) -> bool;
}

impl<F: FnMut(&Snapshot) -> bool> Viability for F {
    fn is_viable(&mut self, snapshot: &Snapshot) -> bool {
        self(snapshot)
    }
}

/// Viable while more than `min` species are alive.
///
/// `species_diversity(1)` keeps running until a single species is left.
pub fn species_diversity(min: usize) -> impl FnMut(&Snapshot) -> bool {
    move |snapshot| snapshot.species_present() > min
}

/// A sink that drops every snapshot.
pub fn discard() -> impl FnMut(&Snapshot) {
    |_| {}
}

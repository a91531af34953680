//! Test utilities for Thicket development.
//!
//! Provides a [`HabitatBuilder`] for hand-placed scenarios, deterministic
//! generators, and invariant checks shared by the integration tests of
//! the agent and engine crates.

#![forbid(unsafe_code)]
#![allow(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]

pub mod fixtures;

use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use std::collections::HashSet;
use thicket_agents::{AgentState, Habitat, LifecycleParams};
use thicket_core::{AgentId, Location, Species};

/// A seeded generator for reproducible tests.
pub fn fixed_rng(seed: u64) -> ChaCha8Rng {
    ChaCha8Rng::seed_from_u64(seed)
}

/// Default lifecycle parameters with every disease source switched off.
pub fn quiet_params() -> LifecycleParams {
    LifecycleParams {
        disease_probability: 0.0,
        initial_disease_probability: 0.0,
        ..LifecycleParams::default()
    }
}

/// Builder for habitats with hand-placed agents.
///
/// Agents are spawned in the order they are added, which is also the
/// order the scheduler will visit them in.
pub struct HabitatBuilder {
    depth: u32,
    width: u32,
    placements: Vec<(Species, Location, AgentState)>,
}

impl HabitatBuilder {
    pub fn new(depth: u32, width: u32) -> Self {
        Self {
            depth,
            width,
            placements: Vec::new(),
        }
    }

    /// Add a newborn female (or sexless plant).
    pub fn with(self, species: Species, row: i32, col: i32) -> Self {
        self.with_state(species, row, col, AgentState::newborn(species, false))
    }

    /// Add an agent with explicit state.
    pub fn with_state(mut self, species: Species, row: i32, col: i32, state: AgentState) -> Self {
        self.placements
            .push((species, Location::new(row, col), state));
        self
    }

    /// Build the habitat and return it with the ids in insertion order.
    ///
    /// # Panics
    ///
    /// Panics if a placement is out of bounds or collides.
    pub fn build(self) -> (Habitat, Vec<AgentId>) {
        let mut habitat = Habitat::new(self.depth, self.width).expect("valid test dimensions");
        let ids = self
            .placements
            .into_iter()
            .map(|(species, loc, state)| {
                habitat
                    .spawn(species, loc, state)
                    .expect("test placement must be free and in bounds")
            })
            .collect();
        (habitat, ids)
    }
}

/// Assert that the grid and the population describe the same world.
///
/// Every live agent holds exactly the cell the grid says it holds, no
/// dead agent is on the grid, and no cell is shared.
pub fn assert_occupancy_consistent(habitat: &Habitat) {
    let mut seen = HashSet::new();
    for agent in habitat.agents() {
        match (agent.is_alive(), agent.location()) {
            (true, Some(loc)) => {
                assert!(seen.insert(loc), "two live agents at {loc}");
                assert_eq!(
                    habitat.grid().get(loc).unwrap(),
                    Some(agent.id()),
                    "grid disagrees with agent {} at {loc}",
                    agent.id()
                );
            }
            (false, None) => {}
            (alive, loc) => panic!("agent {} alive={alive} location={loc:?}", agent.id()),
        }
    }
    assert_eq!(
        habitat.grid().occupied_count(),
        seen.len(),
        "grid holds agents that are not live"
    );
}

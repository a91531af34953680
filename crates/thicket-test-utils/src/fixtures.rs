//! Reusable scenarios.
//!
//! Small hand-built habitats with a known outcome after one step:
//!
//! - [`lone_mouse`]: a single juvenile mouse in the middle of a 3x3 grid.
//! - [`snake_beside_mouse`]: a snake and the mouse it will eat.
//! - [`plant_in_clearing`]: a plant with all eight neighbours free.
//! - [`female_prey_field`]: newborn female mice and crickets, no mates and no predators.

use crate::HabitatBuilder;
use thicket_agents::{AgentState, Habitat};
use thicket_core::{AgentId, Species};

pub fn lone_mouse() -> (Habitat, AgentId) {
    let (habitat, ids) = HabitatBuilder::new(3, 3)
        .with(Species::Mouse, 1, 1)
        .build();
    (habitat, ids[0])
}

/// Returns `(habitat, snake, mouse)`.
pub fn snake_beside_mouse() -> (Habitat, AgentId, AgentId) {
    let (habitat, ids) = HabitatBuilder::new(3, 3)
        .with_state(Species::Snake, 1, 1, AgentState::newborn(Species::Snake, true))
        .with(Species::Mouse, 1, 2)
        .build();
    (habitat, ids[0], ids[1])
}

pub fn plant_in_clearing() -> (Habitat, AgentId) {
    let (habitat, ids) = HabitatBuilder::new(5, 5)
        .with(Species::Plant, 2, 2)
        .build();
    (habitat, ids[0])
}

/// Alternating mice and crickets on every fourth cell of a `size` x `size`
/// grid, all newborn females, so no pair can ever mate.
pub fn female_prey_field(size: u32) -> Habitat {
    let mut builder = HabitatBuilder::new(size, size);
    let mut toggle = false;
    for r in (0..size as i32).step_by(2) {
        for c in (0..size as i32).step_by(2) {
            let species = if toggle { Species::Cricket } else { Species::Mouse };
            builder = builder.with(species, r, c);
            toggle = !toggle;
        }
    }
    builder.build().0
}

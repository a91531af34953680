//! Core types for the Thicket ecosystem simulation.
//!
//! This is the leaf crate with zero internal dependencies. It defines
//! the vocabulary shared by the rest of the workspace: grid locations,
//! identifiers, the species capability table, weather and day/night
//! labels, and causes of death.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod death;
pub mod id;
pub mod location;
pub mod species;
pub mod weather;

pub use death::DeathCause;
pub use id::{AgentId, StepId};
pub use location::Location;
pub use species::{Kind, Species, SpeciesTraits};
pub use weather::{Phase, Weather};

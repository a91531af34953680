//! Agents and their lifecycle rules for Thicket simulations.
//!
//! A [`Habitat`] owns the occupancy [`Grid`](thicket_space::Grid) and the
//! insertion-ordered population living on it. Every plant and animal is
//! an [`Agent`] tagged with a [`Species`](thicket_core::Species); the
//! species' static traits decide what it eats, when it breeds and how
//! long it lives.
//!
//! [`Habitat::act`] advances a single agent by one step. Scheduling
//! (which agents act, in what order, under which weather) belongs to the
//! engine.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod agent;
pub mod census;
pub mod habitat;
pub mod lifecycle;
pub mod params;

pub use agent::{Agent, AgentState};
pub use census::Census;
pub use habitat::Habitat;
pub use lifecycle::{ActReport, StepContext};
pub use params::LifecycleParams;

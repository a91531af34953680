//! Occupancy grid for Thicket simulations.
//!
//! This crate defines [`Grid`]: a fixed-size, row-major store mapping
//! each [`Location`](thicket_core::Location) to at most one agent, along
//! with the 8-connected adjacency queries that drive movement, feeding
//! and breeding.
//!
//! # Scan order
//!
//! Neighbours are always reported in row-major offset order
//! (NW, N, NE, W, E, SW, S, SE), skipping cells outside the grid.
//! Callers that take "the first match" rely on this order for
//! deterministic tie-breaking.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod error;
pub mod grid;

pub use error::GridError;
pub use grid::{Adjacent, Grid, OFFSETS_8};

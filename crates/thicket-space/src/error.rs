//! Error types for grid operations.

use std::fmt;
use thicket_core::{AgentId, Location};

/// Errors arising from grid construction or cell access.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum GridError {
    /// A location lies outside the grid.
    OutOfBounds {
        /// The offending location.
        location: Location,
        /// Grid depth (row count).
        depth: u32,
        /// Grid width (column count).
        width: u32,
    },
    /// A location is already held by a different agent.
    Occupied {
        /// The contested location.
        location: Location,
        /// The agent currently holding it.
        occupant: AgentId,
    },
    /// Attempted to construct a grid with zero rows or columns.
    EmptyGrid,
    /// A dimension does not fit the signed coordinate range.
    DimensionTooLarge {
        /// Which dimension (`"depth"` or `"width"`).
        name: &'static str,
        /// The value that was rejected.
        value: u32,
        /// The largest accepted value.
        max: u32,
    },
}

impl fmt::Display for GridError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::OutOfBounds {
                location,
                depth,
                width,
            } => {
                write!(f, "location {location} out of bounds: [0, {depth}) x [0, {width})")
            }
            Self::Occupied { location, occupant } => {
                write!(f, "location {location} already occupied by agent {occupant}")
            }
            Self::EmptyGrid => write!(f, "grid must have at least one row and one column"),
            Self::DimensionTooLarge { name, value, max } => {
                write!(f, "{name} {value} exceeds maximum of {max}")
            }
        }
    }
}

impl std::error::Error for GridError {}

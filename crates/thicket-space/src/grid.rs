//! 2D occupancy grid with 8-connected neighbourhood (cardinal + diagonal).

use crate::error::GridError;
use smallvec::SmallVec;
use thicket_core::{AgentId, Location};

/// All 8 offsets in row-major order: NW, N, NE, W, E, SW, S, SE.
pub const OFFSETS_8: [(i32, i32); 8] = [
    (-1, -1),
    (-1, 0),
    (-1, 1),
    (0, -1),
    (0, 1),
    (1, -1),
    (1, 0),
    (1, 1),
];

/// Neighbour list returned by adjacency queries.
///
/// Owned and freshly built on every call; mutating it never touches the
/// grid. Inline capacity of 8 covers every cell, so no heap allocation.
pub type Adjacent = SmallVec<[Location; 8]>;

/// A bounded two-dimensional grid holding at most one agent per cell.
///
/// Cells are stored row-major. The grid is purely an index: it records
/// *which* agent sits where, while agent state lives with the owner of
/// the population. Boundaries absorb: edge cells simply have fewer
/// neighbours (corners have 3, edges have 5).
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Grid {
    depth: u32,
    width: u32,
    cells: Vec<Option<AgentId>>,
}

impl Grid {
    /// Largest accepted dimension: coordinates use `i32`, so each axis must fit.
    pub const MAX_DIM: u32 = i32::MAX as u32;

    /// Create an empty grid with `depth` rows and `width` columns.
    ///
    /// Returns `Err(GridError::EmptyGrid)` if either dimension is 0, or
    /// `Err(GridError::DimensionTooLarge)` if either exceeds [`Self::MAX_DIM`].
    pub fn new(depth: u32, width: u32) -> Result<Self, GridError> {
        Self::check_dimensions(depth, width)?;
        let cells = vec![None; (depth as usize) * (width as usize)];
        Ok(Self {
            depth,
            width,
            cells,
        })
    }

    /// Validate dimensions without allocating a grid.
    pub fn check_dimensions(depth: u32, width: u32) -> Result<(), GridError> {
        if depth == 0 || width == 0 {
            return Err(GridError::EmptyGrid);
        }
        for (name, value) in [("depth", depth), ("width", width)] {
            if value > Self::MAX_DIM {
                return Err(GridError::DimensionTooLarge {
                    name,
                    value,
                    max: Self::MAX_DIM,
                });
            }
        }
        Ok(())
    }

    /// Number of rows.
    pub fn depth(&self) -> u32 {
        self.depth
    }

    /// Number of columns.
    pub fn width(&self) -> u32 {
        self.width
    }

    /// Total number of cells.
    pub fn cell_count(&self) -> usize {
        self.cells.len()
    }

    /// Whether `loc` lies inside the grid.
    pub fn contains(&self, loc: Location) -> bool {
        loc.row >= 0
            && loc.col >= 0
            && (loc.row as u32) < self.depth
            && (loc.col as u32) < self.width
    }

    fn index(&self, loc: Location) -> Result<usize, GridError> {
        if !self.contains(loc) {
            return Err(GridError::OutOfBounds {
                location: loc,
                depth: self.depth,
                width: self.width,
            });
        }
        Ok((loc.row as usize) * (self.width as usize) + (loc.col as usize))
    }

    /// Put `agent` at `loc`.
    ///
    /// Placing an agent on the cell it already holds is a no-op. Placing
    /// it on a cell held by someone else fails with [`GridError::Occupied`].
    pub fn place(&mut self, agent: AgentId, loc: Location) -> Result<(), GridError> {
        let i = self.index(loc)?;
        match self.cells[i] {
            Some(occupant) if occupant != agent => Err(GridError::Occupied {
                location: loc,
                occupant,
            }),
            _ => {
                self.cells[i] = Some(agent);
                Ok(())
            }
        }
    }

    /// Empty the cell at `loc`. Clearing an empty cell is a no-op.
    pub fn clear(&mut self, loc: Location) -> Result<(), GridError> {
        let i = self.index(loc)?;
        self.cells[i] = None;
        Ok(())
    }

    /// Empty every cell.
    pub fn clear_all(&mut self) {
        self.cells.fill(None);
    }

    /// The agent at `loc`, if any.
    pub fn get(&self, loc: Location) -> Result<Option<AgentId>, GridError> {
        let i = self.index(loc)?;
        Ok(self.cells[i])
    }

    /// Whether `loc` is empty.
    pub fn is_free(&self, loc: Location) -> Result<bool, GridError> {
        Ok(self.get(loc)?.is_none())
    }

    /// Valid neighbours of `loc` in scan order.
    pub fn adjacent_locations(&self, loc: Location) -> Result<Adjacent, GridError> {
        self.index(loc)?;
        Ok(OFFSETS_8
            .iter()
            .map(|&(dr, dc)| loc.offset(dr, dc))
            .filter(|&n| self.contains(n))
            .collect())
    }

    /// Empty neighbours of `loc` in scan order.
    pub fn free_adjacent_locations(&self, loc: Location) -> Result<Adjacent, GridError> {
        let mut adjacent = self.adjacent_locations(loc)?;
        adjacent.retain(|n| self.cells[self.flat(*n)].is_none());
        Ok(adjacent)
    }

    /// First empty neighbour of `loc` in scan order, or `None` if crowded.
    pub fn free_adjacent_location(&self, loc: Location) -> Result<Option<Location>, GridError> {
        Ok(self.free_adjacent_locations(loc)?.first().copied())
    }

    /// Number of occupied cells.
    pub fn occupied_count(&self) -> usize {
        self.cells.iter().filter(|c| c.is_some()).count()
    }

    /// Raw row-major cell contents.
    pub fn cells(&self) -> &[Option<AgentId>] {
        &self.cells
    }

    /// Every location in row-major canonical order.
    pub fn locations(&self) -> impl Iterator<Item = Location> + '_ {
        let width = self.width as i32;
        (0..self.depth as i32).flat_map(move |r| (0..width).map(move |c| Location::new(r, c)))
    }

    // Caller guarantees `loc` is in bounds.
    fn flat(&self, loc: Location) -> usize {
        (loc.row as usize) * (self.width as usize) + (loc.col as usize)
    }
}

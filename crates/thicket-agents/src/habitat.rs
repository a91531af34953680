//! The population and the grid it lives on.

use crate::agent::{Agent, AgentState};
use crate::census::Census;
use indexmap::IndexMap;
use thicket_core::{AgentId, DeathCause, Location, Species};
use thicket_space::{Grid, GridError};
use tracing::trace;

/// A grid together with the agents placed on it.
///
/// Agents are kept in insertion order, which is the order the scheduler
/// visits them in. Every live agent holds exactly one grid cell and the
/// grid refers only to live agents; all mutation goes through methods
/// here so the two views cannot drift apart.
#[derive(Clone, Debug)]
pub struct Habitat {
    pub(crate) grid: Grid,
    pub(crate) agents: IndexMap<AgentId, Agent>,
    next_id: u64,
}

impl Habitat {
    /// An empty habitat of `depth` rows by `width` columns.
    pub fn new(depth: u32, width: u32) -> Result<Self, GridError> {
        Ok(Self::with_grid(Grid::new(depth, width)?))
    }

    /// An empty habitat over an existing grid. The grid is cleared.
    pub fn with_grid(mut grid: Grid) -> Self {
        grid.clear_all();
        Self {
            grid,
            agents: IndexMap::new(),
            next_id: 0,
        }
    }

    /// The occupancy grid.
    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    /// Look up an agent, alive or not yet purged.
    pub fn agent(&self, id: AgentId) -> Option<&Agent> {
        self.agents.get(&id)
    }

    /// Mutable access to an agent's lifecycle counters.
    pub(crate) fn state_mut(&mut self, id: AgentId) -> Option<&mut AgentState> {
        self.agents.get_mut(&id).map(|a| &mut a.state)
    }

    /// All tracked agents in insertion order.
    pub fn agents(&self) -> impl Iterator<Item = &Agent> + '_ {
        self.agents.values()
    }

    /// Ids of live agents in insertion order.
    pub fn live_ids(&self) -> Vec<AgentId> {
        self.agents
            .values()
            .filter(|a| a.alive)
            .map(|a| a.id)
            .collect()
    }

    /// Number of live agents.
    pub fn live_count(&self) -> usize {
        self.agents.values().filter(|a| a.alive).count()
    }

    /// The agent occupying `loc`, if any.
    pub fn occupant(&self, loc: Location) -> Result<Option<&Agent>, GridError> {
        Ok(self.grid.get(loc)?.and_then(|id| self.agents.get(&id)))
    }

    /// Species at each cell, row-major.
    pub fn species_grid(&self) -> Vec<Option<Species>> {
        self.grid
            .cells()
            .iter()
            .map(|cell| cell.and_then(|id| self.agents.get(&id)).map(|a| a.species))
            .collect()
    }

    /// Create a live agent at `loc`.
    pub fn spawn(
        &mut self,
        species: Species,
        loc: Location,
        state: AgentState,
    ) -> Result<AgentId, GridError> {
        let id = AgentId(self.next_id);
        self.grid.place(id, loc)?;
        self.next_id += 1;
        self.agents.insert(
            id,
            Agent {
                id,
                species,
                alive: true,
                location: Some(loc),
                state,
            },
        );
        Ok(id)
    }

    /// Mark `id` dead and release its cell. Killing a dead agent is a no-op.
    pub fn kill(&mut self, id: AgentId, cause: DeathCause) -> Result<(), GridError> {
        let Some(agent) = self.agents.get_mut(&id) else {
            return Ok(());
        };
        if !agent.alive {
            return Ok(());
        }
        agent.alive = false;
        if let Some(loc) = agent.location.take() {
            self.grid.clear(loc)?;
        }
        trace!(agent = %id, species = %agent.species, %cause, age = agent.state.age, "agent died");
        Ok(())
    }

    /// Move a live agent to `to`. Relocating a dead agent is a no-op.
    pub fn relocate(&mut self, id: AgentId, to: Location) -> Result<(), GridError> {
        let Some(agent) = self.agents.get_mut(&id) else {
            return Ok(());
        };
        if !agent.alive {
            return Ok(());
        }
        if let Some(occupant) = self.grid.get(to)? {
            if occupant != id {
                return Err(GridError::Occupied {
                    location: to,
                    occupant,
                });
            }
        }
        if let Some(from) = agent.location {
            self.grid.clear(from)?;
        }
        self.grid.place(id, to)?;
        agent.location = Some(to);
        Ok(())
    }

    /// Drop dead agents from the population, keeping order.
    pub fn purge_dead(&mut self) -> usize {
        let before = self.agents.len();
        self.agents.retain(|_, a| a.alive);
        before - self.agents.len()
    }

    /// Remove every agent and empty the grid.
    pub fn clear(&mut self) {
        self.agents.clear();
        self.grid.clear_all();
        self.next_id = 0;
    }

    /// Live agents per species.
    pub fn census(&self) -> Census {
        self.agents
            .values()
            .filter(|a| a.alive)
            .map(|a| a.species)
            .collect()
    }
}

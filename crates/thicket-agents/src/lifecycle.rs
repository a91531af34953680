//! Per-step agent behaviour.
//!
//! [`Habitat::act`] runs one agent through a single step. Animals follow
//! a fixed sequence, stopping at the first death:
//!
//! 1. age, dying of old age past `max_age`;
//! 2. hunger, dying of starvation at zero food;
//! 3. disease progression, dying once the step count passes the lethal limit;
//! 4. fear (prey only), then breeding unless scared;
//! 5. contagion from diseased neighbours;
//! 6. eat the first edible neighbour and take its cell, else move to the
//!    first free neighbour, else die of overcrowding.
//!
//! Plants only age and spread. A plant spreads into its free neighbours
//! when every neighbour it has is free.
//!
//! Random draws happen in a fixed order so that a seeded generator
//! reproduces a run exactly: breeding draw, litter size, one sex draw per
//! newborn, then the contagion draw.

use crate::agent::AgentState;
use crate::habitat::Habitat;
use crate::params::LifecycleParams;
use rand::Rng;
use thicket_core::{AgentId, DeathCause, Location, Species, SpeciesTraits};
use thicket_space::{Adjacent, GridError};
use tracing::trace;

/// Everything an agent needs from the scheduler for one step.
pub struct StepContext<'a, R> {
    /// Shared lifecycle constants.
    pub params: &'a LifecycleParams,
    /// The simulation's random stream.
    pub rng: &'a mut R,
    /// Newborns created this step, in creation order.
    pub births: &'a mut Vec<AgentId>,
}

/// What happened to one agent during [`Habitat::act`].
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct ActReport {
    /// Set if the acting agent died.
    pub died: Option<DeathCause>,
    /// The agent it ate, if any.
    pub ate: Option<AgentId>,
    /// Offspring produced.
    pub births: u32,
}

impl Habitat {
    /// Run one step of behaviour for agent `id`.
    ///
    /// Dead or unknown agents are ignored. Newborns are placed on the
    /// grid immediately and pushed onto `ctx.births`.
    pub fn act<R: Rng>(
        &mut self,
        id: AgentId,
        ctx: &mut StepContext<'_, R>,
    ) -> Result<ActReport, GridError> {
        let Some(agent) = self.agents.get(&id) else {
            return Ok(ActReport::default());
        };
        let (species, loc) = match (agent.alive, agent.location) {
            (true, Some(loc)) => (agent.species, loc),
            _ => return Ok(ActReport::default()),
        };
        if species.is_plant() {
            self.act_plant(id, loc, ctx)
        } else {
            self.act_animal(id, species, loc, ctx)
        }
    }

    fn act_plant<R: Rng>(
        &mut self,
        id: AgentId,
        loc: Location,
        ctx: &mut StepContext<'_, R>,
    ) -> Result<ActReport, GridError> {
        let mut report = ActReport::default();
        let traits = Species::Plant.traits();
        let age = match self.state_mut(id) {
            Some(state) => {
                state.age += 1;
                state.age
            }
            None => return Ok(report),
        };
        if age > traits.max_age {
            self.kill(id, DeathCause::OldAge)?;
            report.died = Some(DeathCause::OldAge);
            return Ok(report);
        }
        if age >= traits.breeding_age {
            let neighbours = self.grid.adjacent_locations(loc)?.len();
            let free = self.grid.free_adjacent_locations(loc)?;
            if free.len() == neighbours {
                report.births =
                    self.spawn_litter(id, Species::Plant, free, traits.max_litter_size, ctx)?;
            }
        }
        Ok(report)
    }

    fn act_animal<R: Rng>(
        &mut self,
        id: AgentId,
        species: Species,
        loc: Location,
        ctx: &mut StepContext<'_, R>,
    ) -> Result<ActReport, GridError> {
        let mut report = ActReport::default();
        let traits = species.traits();

        if let Some(cause) = self.advance_counters(id, traits, ctx.params) {
            self.kill(id, cause)?;
            report.died = Some(cause);
            return Ok(report);
        }

        if species.is_prey() {
            let predators = self.count_neighbours(loc, |s, _| s.is_predator())?;
            if predators > ctx.params.crowd_threshold as usize {
                if let Some(state) = self.state_mut(id) {
                    state.fear += 1;
                }
            }
        }

        let scared = self.agent(id).is_some_and(|a| a.is_scared(ctx.params));
        if !scared {
            report.births = self.breed(id, species, loc, ctx)?;
        }

        let exposed = self.count_neighbours(loc, |s, st| !s.is_plant() && st.is_diseased)? > 0;
        if exposed && ctx.rng.random::<f64>() < ctx.params.disease_probability {
            if let Some(state) = self.state_mut(id) {
                state.is_diseased = true;
            }
        }

        let target = match self.find_food(loc, species)? {
            Some((prey, prey_loc)) => {
                let prey_species = self.agent(prey).map(|a| a.species);
                self.kill(prey, DeathCause::Eaten)?;
                if let (Some(prey_species), Some(state)) = (prey_species, self.state_mut(id)) {
                    state.food_level = Some(prey_species.traits().food_value as i32);
                }
                report.ate = Some(prey);
                Some(prey_loc)
            }
            None => self.grid.free_adjacent_location(loc)?,
        };

        match target {
            Some(to) => self.relocate(id, to)?,
            None => {
                self.kill(id, DeathCause::Overcrowding)?;
                report.died = Some(DeathCause::Overcrowding);
            }
        }
        Ok(report)
    }

    /// Age, hunger and disease bookkeeping. Returns the cause if the
    /// agent should die.
    fn advance_counters(
        &mut self,
        id: AgentId,
        traits: &SpeciesTraits,
        params: &LifecycleParams,
    ) -> Option<DeathCause> {
        let state = self.state_mut(id)?;
        state.age += 1;
        if state.age > traits.max_age {
            return Some(DeathCause::OldAge);
        }
        if let Some(food) = state.food_level.as_mut() {
            *food -= 1;
            if *food <= 0 {
                return Some(DeathCause::Starvation);
            }
        }
        if state.is_diseased {
            state.disease_steps += 1;
            if state.disease_steps > params.disease_lethal_steps {
                return Some(DeathCause::Disease);
            }
        }
        None
    }

    fn breed<R: Rng>(
        &mut self,
        id: AgentId,
        species: Species,
        loc: Location,
        ctx: &mut StepContext<'_, R>,
    ) -> Result<u32, GridError> {
        let traits = species.traits();
        let Some(parent) = self.agent(id).copied() else {
            return Ok(0);
        };
        if parent.state.age < traits.breeding_age {
            return Ok(0);
        }
        if ctx.rng.random::<f64>() > traits.breeding_probability {
            return Ok(0);
        }
        let litter = ctx.rng.random_range(1..=traits.max_litter_size);
        let is_male = parent.state.is_male;
        let mates = self.count_neighbours(loc, |s, st| s == species && st.is_male != is_male)?;
        if mates == 0 {
            return Ok(0);
        }
        let free = self.grid.free_adjacent_locations(loc)?;
        self.spawn_litter(id, species, free, litter, ctx)
    }

    fn spawn_litter<R: Rng>(
        &mut self,
        parent: AgentId,
        species: Species,
        mut free: Adjacent,
        litter: u32,
        ctx: &mut StepContext<'_, R>,
    ) -> Result<u32, GridError> {
        let mut born = 0;
        while born < litter && !free.is_empty() {
            let cell = free.remove(0);
            let is_male =
                !species.is_plant() && ctx.rng.random::<f64>() < ctx.params.male_probability;
            let child = self.spawn(species, cell, AgentState::newborn(species, is_male))?;
            trace!(%parent, %child, %species, location = %cell, "birth");
            ctx.births.push(child);
            born += 1;
        }
        Ok(born)
    }

    /// First live neighbour that `species` can eat, in scan order.
    fn find_food(
        &self,
        loc: Location,
        species: Species,
    ) -> Result<Option<(AgentId, Location)>, GridError> {
        for n in self.grid.adjacent_locations(loc)? {
            if let Some(other) = self.occupant(n)? {
                if other.alive && species.eats(other.species) {
                    return Ok(Some((other.id, n)));
                }
            }
        }
        Ok(None)
    }

    /// Number of live neighbours matching `pred`.
    fn count_neighbours(
        &self,
        loc: Location,
        pred: impl Fn(Species, &AgentState) -> bool,
    ) -> Result<usize, GridError> {
        let mut count = 0;
        for n in self.grid.adjacent_locations(loc)? {
            if let Some(other) = self.occupant(n)? {
                if other.alive && pred(other.species, &other.state) {
                    count += 1;
                }
            }
        }
        Ok(count)
    }
}

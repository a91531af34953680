//! Per-agent state.

use crate::params::LifecycleParams;
use rand::Rng;
use thicket_core::{AgentId, Location, Species};

/// Mutable lifecycle counters for a single agent.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct AgentState {
    /// Steps lived so far.
    pub age: u32,
    /// Remaining food. `None` for species that do not eat.
    pub food_level: Option<i32>,
    /// Sex, fixed at creation. Always `false` for plants.
    pub is_male: bool,
    /// Set once infected; cleared only by death.
    pub is_diseased: bool,
    /// Steps spent diseased.
    pub disease_steps: u32,
    /// Accumulated fear (prey only).
    pub fear: u32,
}

impl AgentState {
    /// State for an agent born this step: age 0, fully fed, healthy.
    pub fn newborn(species: Species, is_male: bool) -> Self {
        let traits = species.traits();
        Self {
            age: 0,
            food_level: traits.is_consumer().then_some(traits.food_value as i32),
            is_male: is_male && !species.is_plant(),
            is_diseased: false,
            disease_steps: 0,
            fear: 0,
        }
    }

    /// State for an agent placed by initial seeding.
    ///
    /// Age is drawn from `[0, max_age)`. Consumers get a food level in
    /// `[1, food_value]`. Animals then draw their sex and whether they
    /// start out diseased. Plants make only the age draw.
    pub fn seeded<R: Rng>(species: Species, params: &LifecycleParams, rng: &mut R) -> Self {
        let traits = species.traits();
        let age = rng.random_range(0..traits.max_age);
        if species.is_plant() {
            return Self {
                age,
                ..Self::newborn(species, false)
            };
        }
        let food_level = rng.random_range(1..=traits.food_value) as i32;
        let is_male = rng.random::<f64>() < params.male_probability;
        let is_diseased = rng.random::<f64>() < params.initial_disease_probability;
        Self {
            age,
            food_level: Some(food_level),
            is_male,
            is_diseased,
            disease_steps: 0,
            fear: 0,
        }
    }
}

/// A single plant or animal.
///
/// Behaviour is selected by [`Species`]; there is one agent type for
/// every variant.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Agent {
    pub(crate) id: AgentId,
    pub(crate) species: Species,
    pub(crate) alive: bool,
    pub(crate) location: Option<Location>,
    pub(crate) state: AgentState,
}

impl Agent {
    /// Unique identifier.
    pub fn id(&self) -> AgentId {
        self.id
    }

    /// Species tag.
    pub fn species(&self) -> Species {
        self.species
    }

    /// Whether the agent is still alive.
    pub fn is_alive(&self) -> bool {
        self.alive
    }

    /// Current cell, or `None` once dead.
    pub fn location(&self) -> Option<Location> {
        self.location
    }

    /// Lifecycle counters.
    pub fn state(&self) -> &AgentState {
        &self.state
    }

    /// Whether the agent is scared, given the fear threshold.
    ///
    /// Only prey can be scared.
    pub fn is_scared(&self, params: &LifecycleParams) -> bool {
        self.species.is_prey() && self.state.fear > params.fear_threshold
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    #[test]
    fn newborn_is_fed_and_healthy() {
        let s = AgentState::newborn(Species::Mouse, true);
        assert_eq!(s.age, 0);
        assert_eq!(s.food_level, Some(35));
        assert!(s.is_male);
        assert!(!s.is_diseased);
    }

    #[test]
    fn newborn_plant_has_no_food_or_sex() {
        let s = AgentState::newborn(Species::Plant, true);
        assert_eq!(s.food_level, None);
        assert!(!s.is_male);
    }

    #[test]
    fn seeded_state_stays_in_range() {
        let params = LifecycleParams::default();
        let mut rng = ChaCha8Rng::seed_from_u64(11);
        for _ in 0..500 {
            for species in Species::ALL {
                let t = species.traits();
                let s = AgentState::seeded(species, &params, &mut rng);
                assert!(s.age < t.max_age);
                match s.food_level {
                    Some(f) => assert!(f >= 1 && f <= t.food_value as i32),
                    None => assert!(species.is_plant()),
                }
                assert_eq!(s.fear, 0);
            }
        }
    }

    #[test]
    fn seeded_plants_are_never_diseased() {
        let params = LifecycleParams {
            initial_disease_probability: 1.0,
            ..LifecycleParams::default()
        };
        let mut rng = ChaCha8Rng::seed_from_u64(3);
        assert!(!AgentState::seeded(Species::Plant, &params, &mut rng).is_diseased);
        assert!(AgentState::seeded(Species::Snake, &params, &mut rng).is_diseased);
    }

    #[test]
    fn only_prey_can_be_scared() {
        let params = LifecycleParams::default();
        let mut state = AgentState::newborn(Species::Snake, false);
        state.fear = 10;
        let snake = Agent {
            id: AgentId(0),
            species: Species::Snake,
            alive: true,
            location: None,
            state,
        };
        assert!(!snake.is_scared(&params));
        let mouse = Agent {
            species: Species::Mouse,
            ..snake
        };
        assert!(mouse.is_scared(&params));
    }
}

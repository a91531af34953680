//! The species capability table.
//!
//! Every agent carries a [`Species`] tag. Behavioural differences between
//! species are expressed as data in a static [`SpeciesTraits`] row rather
//! than as separate types: what a species eats, when it is active, and
//! how it ages and breeds.
//!
//! | Species  | Kind     | Breeding age | Max age | Breeding p | Max litter | Food value | Nocturnal | Eats             |
//! |----------|----------|--------------|---------|------------|------------|------------|-----------|------------------|
//! | Plant    | Plant    | 1            | 70      | 1.00       | 8          | 10         | yes       | -                |
//! | Cricket  | Prey     | 1            | 10      | 0.10       | 20         | 3          | yes       | Plant            |
//! | Mouse    | Prey     | 4            | 85      | 0.17       | 4          | 35         | yes       | Plant            |
//! | Snake    | Predator | 2            | 50      | 0.10       | 5          | 10         | no        | Mouse            |
//! | Scorpion | Predator | 15           | 150     | 0.08       | 2          | 9          | yes       | Cricket          |
//! | Eagle    | Predator | 3            | 50      | 0.02       | 4          | 20         | no        | Snake, Scorpion  |

use std::fmt;

/// Broad trophic role of a species.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Kind {
    /// Stationary producer; spreads into empty neighbouring cells.
    Plant,
    /// Animal that is hunted by predators and can become scared.
    Prey,
    /// Animal that hunts; frozen in fog.
    Predator,
}

/// Static per-species parameters.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SpeciesTraits {
    /// Minimum age at which the species can breed.
    pub breeding_age: u32,
    /// Age past which the agent dies of old age.
    pub max_age: u32,
    /// Probability that an eligible agent breeds in a step.
    pub breeding_probability: f64,
    /// Upper bound on offspring per breeding event.
    pub max_litter_size: u32,
    /// Food level granted to whoever eats this species, and the food
    /// level a newborn of this species starts with.
    pub food_value: u32,
    /// Active at night rather than during the day.
    pub nocturnal: bool,
    /// Species this one eats, in no particular order.
    pub diet: &'static [Species],
}

impl SpeciesTraits {
    /// Whether the species hungers and feeds.
    pub fn is_consumer(&self) -> bool {
        !self.diet.is_empty()
    }
}

const PLANT: SpeciesTraits = SpeciesTraits {
    breeding_age: 1,
    max_age: 70,
    breeding_probability: 1.0,
    max_litter_size: 8,
    food_value: 10,
    nocturnal: true,
    diet: &[],
};

const CRICKET: SpeciesTraits = SpeciesTraits {
    breeding_age: 1,
    max_age: 10,
    breeding_probability: 0.1,
    max_litter_size: 20,
    food_value: 3,
    nocturnal: true,
    diet: &[Species::Plant],
};

const MOUSE: SpeciesTraits = SpeciesTraits {
    breeding_age: 4,
    max_age: 85,
    breeding_probability: 0.17,
    max_litter_size: 4,
    food_value: 35,
    nocturnal: true,
    diet: &[Species::Plant],
};

const SNAKE: SpeciesTraits = SpeciesTraits {
    breeding_age: 2,
    max_age: 50,
    breeding_probability: 0.1,
    max_litter_size: 5,
    food_value: 10,
    nocturnal: false,
    diet: &[Species::Mouse],
};

const SCORPION: SpeciesTraits = SpeciesTraits {
    breeding_age: 15,
    max_age: 150,
    breeding_probability: 0.08,
    max_litter_size: 2,
    food_value: 9,
    nocturnal: true,
    diet: &[Species::Cricket],
};

const EAGLE: SpeciesTraits = SpeciesTraits {
    breeding_age: 3,
    max_age: 50,
    breeding_probability: 0.02,
    max_litter_size: 4,
    food_value: 20,
    nocturnal: false,
    diet: &[Species::Snake, Species::Scorpion],
};

/// An agent's species.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Species {
    /// Ground cover eaten by crickets and mice.
    Plant,
    /// Short-lived, prolific prey.
    Cricket,
    /// Long-lived prey.
    Mouse,
    /// Diurnal predator of mice.
    Snake,
    /// Nocturnal predator of crickets.
    Scorpion,
    /// Apex predator of snakes and scorpions.
    Eagle,
}

impl Species {
    /// Number of species.
    pub const COUNT: usize = 6;

    /// Every species, in declaration order.
    pub const ALL: [Species; Self::COUNT] = [
        Species::Plant,
        Species::Cricket,
        Species::Mouse,
        Species::Snake,
        Species::Scorpion,
        Species::Eagle,
    ];

    /// Priority order used when seeding a cell: the first species whose
    /// creation draw succeeds claims the cell.
    pub const SEEDING_ORDER: [Species; Self::COUNT] = [
        Species::Eagle,
        Species::Scorpion,
        Species::Snake,
        Species::Mouse,
        Species::Cricket,
        Species::Plant,
    ];

    /// The capability row for this species.
    pub const fn traits(self) -> &'static SpeciesTraits {
        match self {
            Species::Plant => &PLANT,
            Species::Cricket => &CRICKET,
            Species::Mouse => &MOUSE,
            Species::Snake => &SNAKE,
            Species::Scorpion => &SCORPION,
            Species::Eagle => &EAGLE,
        }
    }

    /// Trophic role.
    pub const fn kind(self) -> Kind {
        match self {
            Species::Plant => Kind::Plant,
            Species::Cricket | Species::Mouse => Kind::Prey,
            Species::Snake | Species::Scorpion | Species::Eagle => Kind::Predator,
        }
    }

    /// `true` for [`Kind::Plant`].
    pub const fn is_plant(self) -> bool {
        matches!(self.kind(), Kind::Plant)
    }

    /// `true` for [`Kind::Prey`].
    pub const fn is_prey(self) -> bool {
        matches!(self.kind(), Kind::Prey)
    }

    /// `true` for [`Kind::Predator`].
    pub const fn is_predator(self) -> bool {
        matches!(self.kind(), Kind::Predator)
    }

    /// Whether an agent of this species eats agents of `other`.
    pub fn eats(self, other: Species) -> bool {
        self.traits().diet.contains(&other)
    }

    /// Dense index in `0..COUNT`, suitable for per-species tallies.
    pub const fn index(self) -> usize {
        match self {
            Species::Plant => 0,
            Species::Cricket => 1,
            Species::Mouse => 2,
            Species::Snake => 3,
            Species::Scorpion => 4,
            Species::Eagle => 5,
        }
    }

    /// Human-readable name.
    pub const fn name(self) -> &'static str {
        match self {
            Species::Plant => "Plant",
            Species::Cricket => "Cricket",
            Species::Mouse => "Mouse",
            Species::Snake => "Snake",
            Species::Scorpion => "Scorpion",
            Species::Eagle => "Eagle",
        }
    }
}

impl fmt::Display for Species {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

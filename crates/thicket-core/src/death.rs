//! Causes of agent death.

use std::fmt;

/// Why an agent left the simulation.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum DeathCause {
    /// Age exceeded the species' maximum age.
    OldAge,
    /// Food level dropped to zero.
    Starvation,
    /// Disease outlasted the lethal step count.
    Disease,
    /// No free neighbouring cell when the agent tried to move.
    Overcrowding,
    /// Killed and eaten by a neighbour.
    Eaten,
}

impl DeathCause {
    /// Number of distinct causes.
    pub const COUNT: usize = 5;

    /// Every cause, in declaration order.
    pub const ALL: [DeathCause; Self::COUNT] = [
        DeathCause::OldAge,
        DeathCause::Starvation,
        DeathCause::Disease,
        DeathCause::Overcrowding,
        DeathCause::Eaten,
    ];

    /// Dense index in `0..COUNT`, suitable for per-cause tallies.
    pub const fn index(self) -> usize {
        match self {
            DeathCause::OldAge => 0,
            DeathCause::Starvation => 1,
            DeathCause::Disease => 2,
            DeathCause::Overcrowding => 3,
            DeathCause::Eaten => 4,
        }
    }
}

impl fmt::Display for DeathCause {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::OldAge => write!(f, "old_age"),
            Self::Starvation => write!(f, "starvation"),
            Self::Disease => write!(f, "disease"),
            Self::Overcrowding => write!(f, "overcrowding"),
            Self::Eaten => write!(f, "eaten"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn index_matches_position_in_all() {
        for (i, cause) in DeathCause::ALL.iter().enumerate() {
            assert_eq!(cause.index(), i);
        }
    }
}

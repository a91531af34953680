//! Per-step population bookkeeping.
//!
//! [`StepStats`] records what happened during a single step so that
//! callers can track population dynamics without diffing grids.

use thicket_core::DeathCause;

/// Counts collected during a single step.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct StepStats {
    /// Offspring born through breeding or plant spread.
    pub births: u32,
    /// Plants grown by the rain-then-sun regrowth pass.
    pub regrown: u32,
    /// Deaths indexed by [`DeathCause::index`].
    pub deaths_by_cause: [u32; DeathCause::COUNT],
    /// Agents whose behaviour ran this step.
    pub acted: u32,
    /// Predators suspended by fog.
    pub frozen: u32,
}

impl StepStats {
    /// Count one death.
    pub fn record_death(&mut self, cause: DeathCause) {
        self.deaths_by_cause[cause.index()] += 1;
    }

    /// Deaths from one cause.
    pub fn deaths(&self, cause: DeathCause) -> u32 {
        self.deaths_by_cause[cause.index()]
    }

    /// Deaths from every cause.
    pub fn total_deaths(&self) -> u32 {
        self.deaths_by_cause.iter().sum()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_stats_are_zero() {
        let s = StepStats::default();
        assert_eq!(s.births, 0);
        assert_eq!(s.regrown, 0);
        assert_eq!(s.total_deaths(), 0);
        assert_eq!(s.acted, 0);
        assert_eq!(s.frozen, 0);
    }

    #[test]
    fn deaths_are_tallied_per_cause() {
        let mut s = StepStats::default();
        s.record_death(DeathCause::Eaten);
        s.record_death(DeathCause::Eaten);
        s.record_death(DeathCause::OldAge);
        assert_eq!(s.deaths(DeathCause::Eaten), 2);
        assert_eq!(s.deaths(DeathCause::Starvation), 0);
        assert_eq!(s.total_deaths(), 3);
    }
}

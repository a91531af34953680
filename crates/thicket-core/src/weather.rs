//! Weather labels and the day/night phase.

use crate::id::StepId;
use std::fmt;

/// Weather drawn once per step.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Weather {
    /// Clear skies.
    Sun,
    /// Rain; followed by sun it triggers plant regrowth.
    Rain,
    /// Fog; predators do not act.
    Fog,
}

impl Weather {
    /// Classify a uniform draw in `[0, 1)` against two thresholds.
    ///
    /// `draw < fog_threshold` is fog, `draw < rain_threshold` is rain,
    /// anything else is sun.
    pub fn classify(draw: f64, fog_threshold: f64, rain_threshold: f64) -> Self {
        if draw < fog_threshold {
            Weather::Fog
        } else if draw < rain_threshold {
            Weather::Rain
        } else {
            Weather::Sun
        }
    }

    /// Label used in weather reports.
    pub const fn label(self) -> &'static str {
        match self {
            Weather::Sun => "Sun",
            Weather::Rain => "Rain",
            Weather::Fog => "Fog",
        }
    }
}

impl fmt::Display for Weather {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Day or night.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Phase {
    /// Even steps. Diurnal agents act.
    Day,
    /// Odd steps. Nocturnal agents act.
    Night,
}

impl Phase {
    /// Phase for a step: even steps are day, odd steps are night.
    pub const fn for_step(step: StepId) -> Self {
        if step.0 % 2 == 0 {
            Phase::Day
        } else {
            Phase::Night
        }
    }

    /// `true` during the day.
    pub const fn is_day(self) -> bool {
        matches!(self, Phase::Day)
    }

    /// Whether an agent with the given nocturnal flag acts in this phase.
    pub const fn admits(self, nocturnal: bool) -> bool {
        match self {
            Phase::Day => !nocturnal,
            Phase::Night => nocturnal,
        }
    }
}

impl fmt::Display for Phase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Phase::Day => write!(f, "day"),
            Phase::Night => write!(f, "night"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn classify_uses_both_thresholds() {
        assert_eq!(Weather::classify(0.05, 0.1, 0.3), Weather::Fog);
        assert_eq!(Weather::classify(0.1, 0.1, 0.3), Weather::Rain);
        assert_eq!(Weather::classify(0.29, 0.1, 0.3), Weather::Rain);
        assert_eq!(Weather::classify(0.3, 0.1, 0.3), Weather::Sun);
        assert_eq!(Weather::classify(0.99, 0.1, 0.3), Weather::Sun);
    }

    #[test]
    fn zero_thresholds_always_give_sun() {
        assert_eq!(Weather::classify(0.0, 0.0, 0.0), Weather::Sun);
    }

    #[test]
    fn phase_alternates_with_step_parity() {
        assert_eq!(Phase::for_step(StepId(0)), Phase::Day);
        assert_eq!(Phase::for_step(StepId(1)), Phase::Night);
        assert_eq!(Phase::for_step(StepId(2)), Phase::Day);
    }

    #[test]
    fn exactly_one_population_acts_per_phase() {
        for phase in [Phase::Day, Phase::Night] {
            assert_ne!(phase.admits(true), phase.admits(false));
        }
        assert!(Phase::Night.admits(true));
        assert!(Phase::Day.admits(false));
    }
}

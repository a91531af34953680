//! Strongly-typed identifiers.

use std::fmt;

/// Identifies one agent for the lifetime of a simulation run.
///
/// Allocated sequentially by the habitat that owns the agent. IDs are
/// never reused within a run, so a stale ID simply fails to resolve
/// instead of aliasing a newer agent.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct AgentId(pub u64);

impl fmt::Display for AgentId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

impl From<u64> for AgentId {
    fn from(v: u64) -> Self {
        Self(v)
    }
}

/// Monotonically increasing step counter.
///
/// `StepId(0)` is the freshly seeded state; each simulation step
/// advances the counter by one before any agent acts.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct StepId(pub u64);

impl StepId {
    /// The step that follows this one.
    pub fn next(self) -> Self {
        Self(self.0 + 1)
    }
}

impl fmt::Display for StepId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<u64> for StepId {
    fn from(v: u64) -> Self {
        Self(v)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn step_id_next_increments() {
        assert_eq!(StepId(0).next(), StepId(1));
        assert_eq!(StepId(41).next(), StepId(42));
    }

    #[test]
    fn agent_id_display_is_prefixed() {
        assert_eq!(AgentId(7).to_string(), "#7");
    }
}

//! Tunable lifecycle constants shared by every species.

use serde::{Deserialize, Serialize};

/// Lifecycle parameters that apply across species.
///
/// Per-species numbers (ages, litter sizes, diets) live in the static
/// [`SpeciesTraits`](thicket_core::SpeciesTraits) table; these are the
/// knobs that are the same for every animal.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LifecycleParams {
    /// Probability that a newly created animal is male.
    pub male_probability: f64,
    /// Per-step probability of catching a disease from a diseased neighbour.
    pub disease_probability: f64,
    /// Probability that a seeded animal starts out diseased.
    pub initial_disease_probability: f64,
    /// A diseased animal dies once its disease step count exceeds this.
    pub disease_lethal_steps: u32,
    /// Prey with fear above this value is scared and will not breed.
    pub fear_threshold: u32,
    /// Fear rises when more than this many predators are adjacent.
    pub crowd_threshold: u32,
}

impl Default for LifecycleParams {
    fn default() -> Self {
        Self {
            male_probability: 0.5,
            disease_probability: 0.05,
            initial_disease_probability: 0.05,
            disease_lethal_steps: 3,
            fear_threshold: 3,
            crowd_threshold: 2,
        }
    }
}

impl LifecycleParams {
    /// Iterate the probability fields as `(name, value)` pairs.
    pub fn probabilities(&self) -> [(&'static str, f64); 3] {
        [
            ("male_probability", self.male_probability),
            ("disease_probability", self.disease_probability),
            (
                "initial_disease_probability",
                self.initial_disease_probability,
            ),
        ]
    }
}

//! Per-species population counts.

use std::fmt;
use thicket_core::Species;

/// Live agent count for each species.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct Census {
    counts: [u32; Species::COUNT],
}

impl Census {
    /// Record one more live agent of `species`.
    pub fn record(&mut self, species: Species) {
        self.counts[species.index()] += 1;
    }

    /// Count for one species.
    pub fn count(&self, species: Species) -> u32 {
        self.counts[species.index()]
    }

    /// Total live agents.
    pub fn total(&self) -> u32 {
        self.counts.iter().sum()
    }

    /// Number of species with at least one live member.
    pub fn species_present(&self) -> usize {
        self.counts.iter().filter(|&&c| c > 0).count()
    }

    /// `(species, count)` pairs in [`Species::ALL`] order.
    pub fn iter(&self) -> impl Iterator<Item = (Species, u32)> + '_ {
        Species::ALL.into_iter().map(|s| (s, self.count(s)))
    }
}

impl FromIterator<Species> for Census {
    fn from_iter<I: IntoIterator<Item = Species>>(iter: I) -> Self {
        let mut census = Census::default();
        for species in iter {
            census.record(species);
        }
        census
    }
}

impl fmt::Display for Census {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut first = true;
        for (species, count) in self.iter().filter(|(_, c)| *c > 0) {
            if !first {
                f.write_str(", ")?;
            }
            write!(f, "{species}: {count}")?;
            first = false;
        }
        if first {
            f.write_str("empty")?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn counts_and_presence() {
        let census: Census = [Species::Mouse, Species::Mouse, Species::Eagle]
            .into_iter()
            .collect();
        assert_eq!(census.count(Species::Mouse), 2);
        assert_eq!(census.count(Species::Plant), 0);
        assert_eq!(census.total(), 3);
        assert_eq!(census.species_present(), 2);
    }

    #[test]
    fn display_lists_present_species() {
        let census: Census = [Species::Plant, Species::Snake].into_iter().collect();
        assert_eq!(census.to_string(), "Plant: 1, Snake: 1");
        assert_eq!(Census::default().to_string(), "empty");
    }
}

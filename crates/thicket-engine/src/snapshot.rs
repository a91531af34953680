//! Read-only view of the world after a step.

use crate::metrics::StepStats;
use thicket_agents::{Census, Habitat};
use thicket_core::{Location, Phase, Species, StepId, Weather};

/// FNV-1a offset basis for 64-bit.
const FNV_OFFSET: u64 = 0xcbf29ce484222325;
/// FNV-1a prime for 64-bit.
const FNV_PRIME: u64 = 0x00000100000001B3;

#[inline]
fn fnv1a_byte(hash: u64, byte: u8) -> u64 {
    (hash ^ byte as u64).wrapping_mul(FNV_PRIME)
}

#[inline]
fn fnv1a_u64(mut hash: u64, v: u64) -> u64 {
    for &b in &v.to_le_bytes() {
        hash = fnv1a_byte(hash, b);
    }
    hash
}

/// Everything a presentation layer needs to draw one step.
///
/// Owns its data; later steps do not change it.
#[derive(Clone, Debug, PartialEq)]
pub struct Snapshot {
    /// Step number. 0 is the freshly seeded world.
    pub step: StepId,
    /// Day or night.
    pub phase: Phase,
    /// Weather for this step; `None` at step 0.
    pub weather: Option<Weather>,
    /// Two-day weather key.
    pub two_day_report: String,
    /// Grid rows.
    pub depth: u32,
    /// Grid columns.
    pub width: u32,
    /// Species at each cell, row-major.
    pub cells: Vec<Option<Species>>,
    /// Live agents per species.
    pub census: Census,
    /// What happened during the step.
    pub stats: StepStats,
}

impl Snapshot {
    pub(crate) fn capture(
        step: StepId,
        phase: Phase,
        weather: Option<Weather>,
        two_day_report: String,
        habitat: &Habitat,
        stats: StepStats,
    ) -> Self {
        let grid = habitat.grid();
        Self {
            step,
            phase,
            weather,
            two_day_report,
            depth: grid.depth(),
            width: grid.width(),
            cells: habitat.species_grid(),
            census: habitat.census(),
            stats,
        }
    }

    /// Whether the step ran in daylight.
    pub fn is_day(&self) -> bool {
        self.phase.is_day()
    }

    /// Species at `loc`, or `None` if empty or out of range.
    pub fn species_at(&self, loc: Location) -> Option<Species> {
        let row = u32::try_from(loc.row).ok()?;
        let col = u32::try_from(loc.col).ok()?;
        if row >= self.depth || col >= self.width {
            return None;
        }
        self.cells[row as usize * self.width as usize + col as usize]
    }

    /// Live agents of one species.
    pub fn population(&self, species: Species) -> u32 {
        self.census.count(species)
    }

    /// Number of species still alive.
    pub fn species_present(&self) -> usize {
        self.census.species_present()
    }

    /// Hash of step, phase, weather and occupancy.
    ///
    /// Equal fingerprints across two runs are a cheap stand-in for
    /// comparing whole snapshots. Not cryptographically secure.
    pub fn fingerprint(&self) -> u64 {
        let mut hash = fnv1a_u64(FNV_OFFSET, self.step.0);
        hash = fnv1a_byte(hash, self.phase.is_day() as u8);
        hash = fnv1a_byte(
            hash,
            match self.weather {
                None => 0,
                Some(Weather::Sun) => 1,
                Some(Weather::Rain) => 2,
                Some(Weather::Fog) => 3,
            },
        );
        hash = fnv1a_u64(hash, self.depth as u64);
        hash = fnv1a_u64(hash, self.width as u64);
        for cell in &self.cells {
            let tag = cell.map_or(0, |s| s.index() as u8 + 1);
            hash = fnv1a_byte(hash, tag);
        }
        hash
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use thicket_agents::AgentState;

    fn snapshot_of(habitat: &Habitat) -> Snapshot {
        Snapshot::capture(
            StepId(3),
            Phase::Night,
            Some(Weather::Rain),
            "Rain".to_string(),
            habitat,
            StepStats::default(),
        )
    }

    #[test]
    fn capture_reflects_habitat() {
        let mut h = Habitat::new(2, 3).unwrap();
        h.spawn(Species::Mouse, Location::new(1, 2), AgentState::newborn(Species::Mouse, false))
            .unwrap();
        let s = snapshot_of(&h);
        assert_eq!(s.cells.len(), 6);
        assert_eq!(s.species_at(Location::new(1, 2)), Some(Species::Mouse));
        assert_eq!(s.species_at(Location::new(0, 0)), None);
        assert_eq!(s.species_at(Location::new(5, 5)), None);
        assert_eq!(s.population(Species::Mouse), 1);
        assert_eq!(s.species_present(), 1);
        assert!(!s.is_day());
    }

    #[test]
    fn fingerprint_tracks_occupancy() {
        let mut h = Habitat::new(2, 2).unwrap();
        let empty = snapshot_of(&h).fingerprint();
        assert_eq!(empty, snapshot_of(&h).fingerprint());
        h.spawn(Species::Plant, Location::new(0, 0), AgentState::newborn(Species::Plant, false))
            .unwrap();
        let planted = snapshot_of(&h).fingerprint();
        assert_ne!(empty, planted);
    }

    #[test]
    fn fingerprint_distinguishes_species() {
        let mut a = Habitat::new(1, 1).unwrap();
        let mut b = Habitat::new(1, 1).unwrap();
        a.spawn(Species::Snake, Location::new(0, 0), AgentState::newborn(Species::Snake, false))
            .unwrap();
        b.spawn(Species::Eagle, Location::new(0, 0), AgentState::newborn(Species::Eagle, false))
            .unwrap();
        assert_ne!(snapshot_of(&a).fingerprint(), snapshot_of(&b).fingerprint());
    }
}

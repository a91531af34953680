//! The scheduler: one owner for the habitat, the environment and the
//! random stream.

use crate::config::{ConfigError, SimConfig};
use crate::environment::Environment;
use crate::metrics::StepStats;
use crate::sink::{SnapshotSink, Viability};
use crate::snapshot::Snapshot;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use std::fmt;
use thicket_agents::{AgentState, Census, Habitat, StepContext};
use thicket_core::{DeathCause, Location, Species, StepId};
use thicket_space::GridError;
use tracing::{debug, info};

/// Step count used by [`Simulator::run_long`].
pub const LONG_RUN_STEPS: u64 = 1500;

// ── Errors ─────────────────────────────────────────────────────

/// A step could not complete.
///
/// Only raised when an internal invariant is broken; randomness-driven
/// outcomes (no food, no mate, overcrowding) are not errors.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum StepError {
    /// The grid rejected an operation.
    Grid(GridError),
}

impl fmt::Display for StepError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Grid(e) => write!(f, "grid: {e}"),
        }
    }
}

impl std::error::Error for StepError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Grid(e) => Some(e),
        }
    }
}

impl From<GridError> for StepError {
    fn from(e: GridError) -> Self {
        Self::Grid(e)
    }
}

// ── RunSummary ─────────────────────────────────────────────────

/// Outcome of [`Simulator::run_for`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RunSummary {
    /// Steps actually taken.
    pub steps: u64,
    /// Whether the viability check ended the run before `n` steps.
    pub halted: bool,
    /// Step number reached.
    pub final_step: StepId,
    /// Population at the end of the run.
    pub census: Census,
}

// ── Simulator ──────────────────────────────────────────────────

/// Single-threaded ecosystem simulator.
///
/// Owns the [`Habitat`], the [`Environment`] and one seeded
/// [`ChaCha8Rng`]. All randomness flows from that generator in a fixed
/// order each step (weather, regrowth, then agents in insertion order),
/// so two simulators built from the same config produce identical runs.
///
/// # Example
///
/// ```
/// use thicket_engine::{species_diversity, GridConfig, SimConfig, Simulator, Snapshot};
///
/// let config = SimConfig {
///     seed: 3,
///     grid: GridConfig { depth: 20, width: 20 },
///     ..SimConfig::default()
/// };
/// let mut sim = Simulator::new(config).unwrap();
/// let first = sim.step().unwrap();
/// assert_eq!(first.step.0, 1);
/// let summary = sim
///     .run_for(10, species_diversity(1), |_: &Snapshot| {})
///     .unwrap();
/// assert!(summary.steps <= 10);
/// ```
pub struct Simulator {
    config: SimConfig,
    habitat: Habitat,
    environment: Environment,
    rng: ChaCha8Rng,
    latest: Snapshot,
}

impl Simulator {
    /// Validate `config`, build the grid and seed the initial population.
    pub fn new(config: SimConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        let habitat = Habitat::new(config.grid.depth, config.grid.width)?;
        let mut sim = Self::assemble(config, habitat);
        sim.reset()
            .map_err(|StepError::Grid(e)| ConfigError::Grid(e))?;
        Ok(sim)
    }

    /// Start from a hand-built habitat instead of random seeding.
    ///
    /// The grid section of `config` is replaced by the habitat's
    /// dimensions. A later [`reset`](Self::reset) discards the habitat
    /// and seeds randomly as usual.
    pub fn with_habitat(mut config: SimConfig, habitat: Habitat) -> Result<Self, ConfigError> {
        config.grid.depth = habitat.grid().depth();
        config.grid.width = habitat.grid().width();
        config.validate()?;
        Ok(Self::assemble(config, habitat))
    }

    fn assemble(config: SimConfig, habitat: Habitat) -> Self {
        let environment = Environment::new(&config.weather);
        let rng = ChaCha8Rng::seed_from_u64(config.seed);
        let latest = Snapshot::capture(
            environment.step(),
            environment.phase(),
            environment.weather(),
            environment.two_day_report(),
            &habitat,
            StepStats::default(),
        );
        Self {
            config,
            habitat,
            environment,
            rng,
            latest,
        }
    }

    /// Clear the grid and reseed it from the configured probabilities.
    ///
    /// The random stream restarts from the configured seed, so every
    /// reset yields the same world. Returns the step-0 snapshot.
    pub fn reset(&mut self) -> Result<Snapshot, StepError> {
        self.rng = ChaCha8Rng::seed_from_u64(self.config.seed);
        self.habitat.clear();
        self.environment.reset();
        self.populate()?;
        self.latest = self.capture(StepStats::default());
        info!(
            seed = self.config.seed,
            depth = self.config.grid.depth,
            width = self.config.grid.width,
            population = self.latest.census.total(),
            "simulation reset"
        );
        Ok(self.latest.clone())
    }

    /// For each cell, try each species in seeding order; the first
    /// successful draw claims the cell.
    fn populate(&mut self) -> Result<(), GridError> {
        let cells: Vec<Location> = self.habitat.grid().locations().collect();
        for loc in cells {
            for species in Species::SEEDING_ORDER {
                if self.rng.random::<f64>() < self.config.seeding.probability(species) {
                    let state = AgentState::seeded(species, &self.config.lifecycle, &mut self.rng);
                    self.habitat.spawn(species, loc, state)?;
                    break;
                }
            }
        }
        Ok(())
    }

    /// Advance one step.
    pub fn step(&mut self) -> Result<Snapshot, StepError> {
        let weather = self.environment.advance(&mut self.rng);
        let phase = self.environment.phase();
        let mut stats = StepStats::default();

        if self.environment.favours_regrowth() {
            stats.regrown = self.regrow()?;
        }

        let fog = self.environment.is_fog();
        let mut births = Vec::new();
        let mut reported = 0;
        for id in self.habitat.live_ids() {
            let Some(agent) = self.habitat.agent(id) else {
                continue;
            };
            if !agent.is_alive() {
                continue;
            }
            let species = agent.species();
            if fog && species.is_predator() {
                stats.frozen += 1;
                continue;
            }
            if !phase.admits(species.traits().nocturnal) {
                continue;
            }
            let mut ctx = StepContext {
                params: &self.config.lifecycle,
                rng: &mut self.rng,
                births: &mut births,
            };
            let report = self.habitat.act(id, &mut ctx)?;
            stats.acted += 1;
            reported += report.births;
            if let Some(cause) = report.died {
                stats.record_death(cause);
            }
            if report.ate.is_some() {
                stats.record_death(DeathCause::Eaten);
            }
        }
        debug_assert_eq!(births.len(), reported as usize);
        stats.births = births.len() as u32;
        self.habitat.purge_dead();

        self.latest = self.capture(stats);
        debug!(
            step = self.latest.step.0,
            %phase,
            %weather,
            births = self.latest.stats.births,
            regrown = self.latest.stats.regrown,
            deaths = self.latest.stats.total_deaths(),
            frozen = self.latest.stats.frozen,
            population = self.latest.census.total(),
            "step complete"
        );
        Ok(self.latest.clone())
    }

    /// Every empty cell grows a plant with the regrowth probability.
    fn regrow(&mut self) -> Result<u32, GridError> {
        let grid = self.habitat.grid();
        let empty: Vec<Location> = grid
            .locations()
            .zip(grid.cells())
            .filter(|(_, cell)| cell.is_none())
            .map(|(loc, _)| loc)
            .collect();
        let p = self.config.weather.regrowth_probability;
        let mut grown = 0;
        for loc in empty {
            if self.rng.random::<f64>() < p {
                self.habitat
                    .spawn(Species::Plant, loc, AgentState::newborn(Species::Plant, false))?;
                grown += 1;
            }
        }
        Ok(grown)
    }

    /// Step up to `n` times, publishing each snapshot to `sink`.
    ///
    /// Before every step the most recent snapshot is offered to
    /// `viability`; the run stops as soon as it answers `false`.
    pub fn run_for<V, S>(
        &mut self,
        n: u64,
        mut viability: V,
        mut sink: S,
    ) -> Result<RunSummary, StepError>
    where
        V: Viability,
        S: SnapshotSink,
    {
        let mut steps = 0;
        let mut halted = false;
        while steps < n {
            if !viability.is_viable(&self.latest) {
                halted = true;
                break;
            }
            let snapshot = self.step()?;
            sink.publish(&snapshot);
            steps += 1;
        }
        let summary = RunSummary {
            steps,
            halted,
            final_step: self.latest.step,
            census: self.latest.census,
        };
        info!(
            steps,
            halted,
            final_step = summary.final_step.0,
            population = summary.census.total(),
            species = summary.census.species_present(),
            "run finished"
        );
        Ok(summary)
    }

    /// [`run_for`](Self::run_for) with [`LONG_RUN_STEPS`] steps.
    pub fn run_long<V, S>(&mut self, viability: V, sink: S) -> Result<RunSummary, StepError>
    where
        V: Viability,
        S: SnapshotSink,
    {
        self.run_for(LONG_RUN_STEPS, viability, sink)
    }

    fn capture(&self, stats: StepStats) -> Snapshot {
        Snapshot::capture(
            self.environment.step(),
            self.environment.phase(),
            self.environment.weather(),
            self.environment.two_day_report(),
            &self.habitat,
            stats,
        )
    }

    /// The configuration in use.
    pub fn config(&self) -> &SimConfig {
        &self.config
    }

    /// The population and grid.
    pub fn habitat(&self) -> &Habitat {
        &self.habitat
    }

    /// Day/night and weather state.
    pub fn environment(&self) -> &Environment {
        &self.environment
    }

    /// Snapshot of the most recent step (or of the reset).
    pub fn latest(&self) -> &Snapshot {
        &self.latest
    }

    /// Current step number.
    pub fn current_step(&self) -> StepId {
        self.environment.step()
    }
}

impl fmt::Debug for Simulator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Simulator")
            .field("step", &self.environment.step())
            .field("weather", &self.environment.weather())
            .field("population", &self.latest.census.total())
            .finish_non_exhaustive()
    }
}

//! Simulation configuration, validation and error types.

use serde::{Deserialize, Serialize};
use std::fmt;
use thicket_agents::LifecycleParams;
use thicket_core::Species;
use thicket_space::{Grid, GridError};

// ── Error types ────────────────────────────────────────────────

/// Errors detected when validating or loading a [`SimConfig`].
#[derive(Clone, Debug, PartialEq)]
pub enum ConfigError {
    /// Grid dimensions are unusable.
    Grid(GridError),
    /// A probability is NaN or outside `[0, 1]`.
    InvalidProbability {
        /// Which setting.
        name: &'static str,
        /// The rejected value.
        value: f64,
    },
    /// The fog threshold lies above the rain threshold.
    InvalidThresholds {
        /// Configured fog threshold.
        fog: f64,
        /// Configured rain threshold.
        rain: f64,
    },
    /// TOML input could not be parsed.
    Parse {
        /// Parser message.
        reason: String,
    },
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Grid(e) => write!(f, "grid: {e}"),
            Self::InvalidProbability { name, value } => {
                write!(f, "{name} must be a probability in [0, 1], got {value}")
            }
            Self::InvalidThresholds { fog, rain } => {
                write!(f, "fog_threshold {fog} must not exceed rain_threshold {rain}")
            }
            Self::Parse { reason } => write!(f, "invalid config: {reason}"),
        }
    }
}

impl std::error::Error for ConfigError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Grid(e) => Some(e),
            _ => None,
        }
    }
}

impl From<GridError> for ConfigError {
    fn from(e: GridError) -> Self {
        Self::Grid(e)
    }
}

// ── Sections ───────────────────────────────────────────────────

/// Grid dimensions.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GridConfig {
    /// Number of rows.
    pub depth: u32,
    /// Number of columns.
    pub width: u32,
}

impl Default for GridConfig {
    fn default() -> Self {
        Self {
            depth: 80,
            width: 120,
        }
    }
}

/// Per-cell creation probabilities used by initial seeding.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SeedingConfig {
    /// Eagle creation probability.
    pub eagle: f64,
    /// Scorpion creation probability.
    pub scorpion: f64,
    /// Snake creation probability.
    pub snake: f64,
    /// Mouse creation probability.
    pub mouse: f64,
    /// Cricket creation probability.
    pub cricket: f64,
    /// Plant creation probability.
    pub plant: f64,
}

impl Default for SeedingConfig {
    fn default() -> Self {
        Self {
            eagle: 0.01,
            scorpion: 0.025,
            snake: 0.025,
            mouse: 0.04,
            cricket: 0.05,
            plant: 0.06,
        }
    }
}

impl SeedingConfig {
    /// A seeding config that creates nothing.
    pub fn empty() -> Self {
        Self {
            eagle: 0.0,
            scorpion: 0.0,
            snake: 0.0,
            mouse: 0.0,
            cricket: 0.0,
            plant: 0.0,
        }
    }

    /// Creation probability for `species`.
    pub fn probability(&self, species: Species) -> f64 {
        match species {
            Species::Eagle => self.eagle,
            Species::Scorpion => self.scorpion,
            Species::Snake => self.snake,
            Species::Mouse => self.mouse,
            Species::Cricket => self.cricket,
            Species::Plant => self.plant,
        }
    }
}

/// Weather thresholds and plant regrowth.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct WeatherConfig {
    /// Draws below this are Fog.
    pub fog_threshold: f64,
    /// Draws below this (and not Fog) are Rain; the rest are Sun.
    pub rain_threshold: f64,
    /// Chance that an empty cell grows a plant after rain then sun.
    pub regrowth_probability: f64,
}

impl Default for WeatherConfig {
    fn default() -> Self {
        Self {
            fog_threshold: 0.1,
            rain_threshold: 0.3,
            regrowth_probability: 0.06,
        }
    }
}

// ── SimConfig ──────────────────────────────────────────────────

/// Complete configuration for a [`Simulator`](crate::Simulator).
///
/// Every section has defaults, so a TOML document only needs the keys it
/// wants to change:
///
/// ```
/// use thicket_engine::SimConfig;
///
/// let cfg = SimConfig::from_toml_str("seed = 7\n[grid]\ndepth = 20\nwidth = 30\n").unwrap();
/// assert_eq!(cfg.seed, 7);
/// assert_eq!(cfg.grid.width, 30);
/// assert_eq!(cfg.weather.fog_threshold, 0.1);
/// ```
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SimConfig {
    /// Seed for the simulation's random stream.
    pub seed: u64,
    /// Grid dimensions.
    pub grid: GridConfig,
    /// Initial population.
    pub seeding: SeedingConfig,
    /// Weather process.
    pub weather: WeatherConfig,
    /// Lifecycle constants.
    pub lifecycle: LifecycleParams,
}

impl Default for SimConfig {
    fn default() -> Self {
        Self {
            seed: 0,
            grid: GridConfig::default(),
            seeding: SeedingConfig::default(),
            weather: WeatherConfig::default(),
            lifecycle: LifecycleParams::default(),
        }
    }
}

impl SimConfig {
    /// Parse and validate a TOML document.
    pub fn from_toml_str(input: &str) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(input).map_err(|e| ConfigError::Parse {
            reason: e.message().to_string(),
        })?;
        config.validate()?;
        Ok(config)
    }

    /// Check structural invariants. Called by
    /// [`Simulator::new`](crate::Simulator::new).
    pub fn validate(&self) -> Result<(), ConfigError> {
        // 1. Dimensions must describe a usable grid.
        Grid::check_dimensions(self.grid.depth, self.grid.width)?;

        // 2. Every probability must lie in [0, 1].
        let seeding = Species::SEEDING_ORDER
            .into_iter()
            .map(|s| (seeding_key(s), self.seeding.probability(s)));
        let weather = [
            ("fog_threshold", self.weather.fog_threshold),
            ("rain_threshold", self.weather.rain_threshold),
            ("regrowth_probability", self.weather.regrowth_probability),
        ];
        for (name, value) in seeding
            .chain(weather)
            .chain(self.lifecycle.probabilities())
        {
            if !(0.0..=1.0).contains(&value) {
                return Err(ConfigError::InvalidProbability { name, value });
            }
        }

        // 3. Weather bands must be ordered.
        if self.weather.fog_threshold > self.weather.rain_threshold {
            return Err(ConfigError::InvalidThresholds {
                fog: self.weather.fog_threshold,
                rain: self.weather.rain_threshold,
            });
        }
        Ok(())
    }
}

fn seeding_key(species: Species) -> &'static str {
    match species {
        Species::Eagle => "seeding.eagle",
        Species::Scorpion => "seeding.scorpion",
        Species::Snake => "seeding.snake",
        Species::Mouse => "seeding.mouse",
        Species::Cricket => "seeding.cricket",
        Species::Plant => "seeding.plant",
    }
}

//! Day/night cycle and weather.

use crate::config::WeatherConfig;
use rand::Rng;
use thicket_core::{Phase, StepId, Weather};

/// The two-day report that triggers plant regrowth.
pub const REGROWTH_REPORT: &str = "RainSun";

/// The last two weather labels, oldest first.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct WeatherLog {
    previous: Option<Weather>,
    current: Option<Weather>,
}

impl WeatherLog {
    /// Append a label, discarding the one before last.
    pub fn record(&mut self, weather: Weather) {
        self.previous = self.current;
        self.current = Some(weather);
    }

    /// Most recent label.
    pub fn current(&self) -> Option<Weather> {
        self.current
    }

    /// Label before the most recent one.
    pub fn previous(&self) -> Option<Weather> {
        self.previous
    }

    /// Key combining yesterday's and today's weather.
    ///
    /// When today is Sun and yesterday is known the key is
    /// `"{yesterday}{today}"`, otherwise just today's label. Empty before
    /// anything is recorded.
    pub fn two_day_report(&self) -> String {
        match (self.previous, self.current) {
            (Some(prev), Some(Weather::Sun)) => format!("{prev}{}", Weather::Sun),
            (_, Some(cur)) => cur.to_string(),
            (_, None) => String::new(),
        }
    }
}

/// Step counter, day/night phase and weather state.
#[derive(Clone, Debug)]
pub struct Environment {
    step: StepId,
    log: WeatherLog,
    fog_threshold: f64,
    rain_threshold: f64,
}

impl Environment {
    /// Start at step 0 with no weather recorded.
    pub fn new(config: &WeatherConfig) -> Self {
        Self {
            step: StepId::default(),
            log: WeatherLog::default(),
            fog_threshold: config.fog_threshold,
            rain_threshold: config.rain_threshold,
        }
    }

    /// Advance one step and draw the weather for it.
    pub fn advance<R: Rng>(&mut self, rng: &mut R) -> Weather {
        let draw = rng.random::<f64>();
        let weather = Weather::classify(draw, self.fog_threshold, self.rain_threshold);
        self.advance_with(weather);
        weather
    }

    /// Advance one step with a chosen weather label.
    pub fn advance_with(&mut self, weather: Weather) {
        self.step = self.step.next();
        self.log.record(weather);
    }

    /// Back to step 0 with an empty log.
    pub fn reset(&mut self) {
        self.step = StepId::default();
        self.log = WeatherLog::default();
    }

    /// Current step number.
    pub fn step(&self) -> StepId {
        self.step
    }

    /// Day or night, from step parity.
    pub fn phase(&self) -> Phase {
        Phase::for_step(self.step)
    }

    /// Whether the current step is daytime.
    pub fn is_day(&self) -> bool {
        self.phase().is_day()
    }

    /// Current weather, if any step has been taken.
    pub fn weather(&self) -> Option<Weather> {
        self.log.current()
    }

    /// Whether predators are frozen this step.
    pub fn is_fog(&self) -> bool {
        self.weather() == Some(Weather::Fog)
    }

    /// See [`WeatherLog::two_day_report`].
    pub fn two_day_report(&self) -> String {
        self.log.two_day_report()
    }

    /// Whether this step's report allows blanket plant regrowth.
    pub fn favours_regrowth(&self) -> bool {
        self.two_day_report() == REGROWTH_REPORT
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    fn env() -> Environment {
        Environment::new(&WeatherConfig::default())
    }

    #[test]
    fn report_pairs_only_when_today_is_sunny() {
        let mut log = WeatherLog::default();
        assert_eq!(log.two_day_report(), "");
        log.record(Weather::Sun);
        assert_eq!(log.two_day_report(), "Sun");
        log.record(Weather::Rain);
        assert_eq!(log.two_day_report(), "Rain");
        log.record(Weather::Sun);
        assert_eq!(log.two_day_report(), "RainSun");
        log.record(Weather::Sun);
        assert_eq!(log.two_day_report(), "SunSun");
        log.record(Weather::Fog);
        assert_eq!(log.two_day_report(), "Fog");
    }

    #[test]
    fn log_keeps_only_two_entries() {
        let mut log = WeatherLog::default();
        log.record(Weather::Fog);
        log.record(Weather::Rain);
        log.record(Weather::Sun);
        assert_eq!(log.previous(), Some(Weather::Rain));
        assert_eq!(log.current(), Some(Weather::Sun));
    }

    #[test]
    fn regrowth_needs_rain_then_sun() {
        let mut e = env();
        e.advance_with(Weather::Rain);
        assert!(!e.favours_regrowth());
        e.advance_with(Weather::Sun);
        assert!(e.favours_regrowth());
        e.advance_with(Weather::Sun);
        assert!(!e.favours_regrowth());
    }

    #[test]
    fn phase_alternates_as_steps_advance() {
        let mut e = env();
        assert!(e.is_day());
        e.advance_with(Weather::Sun);
        assert_eq!(e.step(), StepId(1));
        assert_eq!(e.phase(), Phase::Night);
        e.advance_with(Weather::Sun);
        assert!(e.is_day());
    }

    #[test]
    fn fog_band_is_detected() {
        let config = WeatherConfig {
            fog_threshold: 1.0,
            rain_threshold: 1.0,
            regrowth_probability: 0.0,
        };
        let mut e = Environment::new(&config);
        let mut rng = ChaCha8Rng::seed_from_u64(1);
        assert_eq!(e.advance(&mut rng), Weather::Fog);
        assert!(e.is_fog());
    }

    #[test]
    fn reset_clears_step_and_log() {
        let mut e = env();
        e.advance_with(Weather::Rain);
        e.reset();
        assert_eq!(e.step(), StepId(0));
        assert_eq!(e.weather(), None);
        assert_eq!(e.two_day_report(), "");
    }
}

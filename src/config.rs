//! Startup configuration for a lamp profile.
//!
//! Everything here is plain data, built once and handed to the engine. Several
//! profiles can coexist in one binary.

use crate::colors::Polarity;
use crate::error::ConfigError;
use crate::fixtures::FixtureChannelMap;
use crate::registry::ColorRegistry;
use crate::time::{ClockReading, MINUTES_PER_DAY};
use crate::types::{ModeColors, WakeOrigin};

/// Daily wake/sleep schedule.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct ScheduleConfig {
    /// Time at which `Night` turns into `Waking`.
    pub wake_hour: u8,
    pub wake_minute: u8,

    /// Length of the morning wake fade, in minutes.
    pub wake_duration_min: u16,

    /// Length of the nap wake fade, in minutes.
    pub nap_duration_min: u16,

    /// Whether `Off` switches to `Night` on its own at the auto-sleep time.
    pub auto_sleep: bool,
    pub auto_sleep_hour: u8,
    pub auto_sleep_minute: u8,
}

impl ScheduleConfig {
    /// Morning wake time.
    pub const fn wake_time(&self) -> ClockReading {
        ClockReading::new(self.wake_hour, self.wake_minute)
    }

    /// Auto-sleep trigger time.
    pub const fn auto_sleep_time(&self) -> ClockReading {
        ClockReading::new(self.auto_sleep_hour, self.auto_sleep_minute)
    }

    /// How long a wake fade lasts for the given origin, in minutes.
    pub const fn waking_duration_min(&self, origin: WakeOrigin) -> u16 {
        match origin {
            WakeOrigin::Night => self.wake_duration_min,
            WakeOrigin::Nap => self.nap_duration_min,
        }
    }

    /// How long a wake fade lasts for the given origin, in milliseconds.
    pub const fn waking_duration_ms(&self, origin: WakeOrigin) -> u64 {
        self.waking_duration_min(origin) as u64 * 60_000
    }

    fn validate(&self) -> Result<(), ConfigError> {
        for time in [self.wake_time(), self.auto_sleep_time()] {
            if !time.is_valid() {
                return Err(ConfigError::InvalidScheduleTime(time));
            }
        }
        for minutes in [self.wake_duration_min, self.nap_duration_min] {
            if minutes >= MINUTES_PER_DAY {
                return Err(ConfigError::WakeDurationTooLong { minutes });
            }
        }
        Ok(())
    }
}

impl Default for ScheduleConfig {
    fn default() -> Self {
        Self {
            wake_hour: 6,
            wake_minute: 0,
            wake_duration_min: 60,
            nap_duration_min: 15,
            auto_sleep: true,
            auto_sleep_hour: 20,
            auto_sleep_minute: 0,
        }
    }
}

/// Pacing of the different crossfades.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct FadeConfig {
    /// Duration of a manual `SetColor` fade.
    pub color_fade_ms: u32,
    pub color_fade_steps: u32,

    /// Fade into the night color on `Sleep`. Zero snaps.
    pub sleep_fade_ms: u32,
    pub sleep_fade_steps: u32,

    /// Length of one step of a wake or nap fade.
    pub wake_step_ms: u32,

    /// Steps per rainbow segment.
    pub rainbow_steps: u32,
    /// Duration of one rainbow segment.
    pub rainbow_duration_ms: u32,
}

impl FadeConfig {
    /// Steps and total duration for a wake fade of `minutes`.
    pub(crate) fn wake_fade(&self, minutes: u16) -> (u32, u32) {
        let duration_ms = u32::from(minutes) * 60_000;
        let steps = duration_ms / self.wake_step_ms.max(1);
        (duration_ms, steps)
    }
}

impl Default for FadeConfig {
    fn default() -> Self {
        Self {
            color_fade_ms: 1_000,
            color_fade_steps: 50,
            sleep_fade_ms: 0,
            sleep_fade_steps: 0,
            wake_step_ms: 1_000,
            rainbow_steps: 100,
            rainbow_duration_ms: 5_000,
        }
    }
}

/// Complete, validated configuration for one lamp.
#[derive(Debug, Clone)]
pub struct LampConfig {
    pub registry: ColorRegistry,
    pub fixtures: FixtureChannelMap,
    pub schedule: ScheduleConfig,
    pub colors: ModeColors,
    pub fades: FadeConfig,
    pub polarity: Polarity,
}

impl LampConfig {
    /// Creates a new configuration builder seeded with the stock profile.
    pub fn builder() -> LampConfigBuilder {
        LampConfigBuilder::new()
    }

    /// The stock night-light: 15 named colors, two common-anode fixtures,
    /// wake at 06:00 over an hour, auto-sleep at 20:00.
    pub fn default_profile() -> Self {
        Self {
            registry: ColorRegistry::stock(),
            fixtures: FixtureChannelMap::stock(),
            schedule: ScheduleConfig::default(),
            colors: ModeColors::default(),
            fades: FadeConfig::default(),
            polarity: Polarity::CommonAnode,
        }
    }
}

/// Builder for validated lamp configurations.
#[derive(Debug)]
pub struct LampConfigBuilder {
    config: LampConfig,
}

impl LampConfigBuilder {
    /// Creates a builder seeded with [`LampConfig::default_profile`].
    pub fn new() -> Self {
        Self {
            config: LampConfig::default_profile(),
        }
    }

    /// Sets the color table.
    pub fn registry(mut self, registry: ColorRegistry) -> Self {
        self.config.registry = registry;
        self
    }

    /// Sets the fixture pin map.
    pub fn fixtures(mut self, fixtures: FixtureChannelMap) -> Self {
        self.config.fixtures = fixtures;
        self
    }

    /// Sets the daily schedule.
    pub fn schedule(mut self, schedule: ScheduleConfig) -> Self {
        self.config.schedule = schedule;
        self
    }

    /// Sets the steady color of each mode.
    pub fn colors(mut self, colors: ModeColors) -> Self {
        self.config.colors = colors;
        self
    }

    /// Sets the fade pacing.
    pub fn fades(mut self, fades: FadeConfig) -> Self {
        self.config.fades = fades;
        self
    }

    /// Sets the LED wiring polarity.
    pub fn polarity(mut self, polarity: Polarity) -> Self {
        self.config.polarity = polarity;
        self
    }

    /// Validates and returns the configuration.
    ///
    /// Registry and fixture map are validated by their own constructors.
    ///
    /// # Errors
    /// * `InvalidScheduleTime` - Wake or auto-sleep time outside a day
    /// * `WakeDurationTooLong` - Wake or nap duration of a day or more
    /// * `ZeroWakeStep` - `wake_step_ms` is zero
    pub fn build(self) -> Result<LampConfig, ConfigError> {
        self.config.schedule.validate()?;

        if self.config.fades.wake_step_ms == 0 {
            return Err(ConfigError::ZeroWakeStep);
        }

        Ok(self.config)
    }
}

impl Default for LampConfigBuilder {
    fn default() -> Self {
        Self::new()
    }
}

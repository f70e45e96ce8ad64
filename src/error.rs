//! Error types for the lamp engine.

use crate::time::ClockReading;

/// Errors raised while the engine is running.
///
/// None of these are fatal: the engine keeps its previous steady state and
/// reports the error to the caller.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum LampError {
    /// A `SetColor` command named a color that is not in the registry.
    UnknownColorName,

    /// A fixture index outside the configured fixture map reached the output.
    InvalidFixtureIndex {
        /// The offending index.
        index: usize,
        /// Number of configured fixtures.
        count: usize,
    },

    /// The wall clock moved backward between two ticks.
    ClockRegression {
        /// Latest reading before the jump.
        from: ClockReading,
        /// First reading after the jump.
        to: ClockReading,
    },

    /// The pending command queue is full.
    QueueFull,
}

impl core::fmt::Display for LampError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            LampError::UnknownColorName => write!(f, "unknown color name"),
            LampError::InvalidFixtureIndex { index, count } => {
                write!(
                    f,
                    "fixture index {} out of range ({} fixtures configured)",
                    index, count
                )
            }
            LampError::ClockRegression { from, to } => {
                write!(f, "clock moved backward from {} to {}", from, to)
            }
            LampError::QueueFull => write!(f, "command queue is full"),
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for LampError {}

/// Configuration validation errors, raised once at startup.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ConfigError {
    /// The color table has no entries.
    EmptyRegistry,

    /// Two color table entries share a name.
    DuplicateColorName {
        /// Index of the second occurrence.
        index: usize,
    },

    /// The fixture map has no entries.
    NoFixtures,

    /// More fixtures than the map can hold.
    TooManyFixtures {
        /// Requested fixture count.
        count: usize,
        /// Maximum supported.
        capacity: usize,
    },

    /// A pin is assigned to more than one channel.
    DuplicatePin(u8),

    /// A schedule time is outside 00:00-23:59.
    InvalidScheduleTime(ClockReading),

    /// A wake or nap duration of a full day or more.
    WakeDurationTooLong {
        /// The configured duration.
        minutes: u16,
    },

    /// The wake fade step size is zero.
    ZeroWakeStep,
}

impl core::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            ConfigError::EmptyRegistry => write!(f, "color registry must have at least one entry"),
            ConfigError::DuplicateColorName { index } => {
                write!(f, "color name at index {} is already registered", index)
            }
            ConfigError::NoFixtures => write!(f, "at least one fixture must be configured"),
            ConfigError::TooManyFixtures { count, capacity } => {
                write!(
                    f,
                    "{} fixtures configured, at most {} supported",
                    count, capacity
                )
            }
            ConfigError::DuplicatePin(pin) => {
                write!(f, "pin {} is assigned to more than one channel", pin)
            }
            ConfigError::InvalidScheduleTime(time) => {
                write!(f, "schedule time {} is not a valid time of day", time)
            }
            ConfigError::WakeDurationTooLong { minutes } => {
                write!(f, "wake duration of {} minutes must be shorter than a day", minutes)
            }
            ConfigError::ZeroWakeStep => write!(f, "wake fade step must be non-zero"),
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for ConfigError {}

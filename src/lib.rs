#![cfg_attr(not(feature = "std"), no_std)]
#![doc = include_str!("../README.md")]

//! # Core Concepts
//!
//! - **`LampEngine`**: Owns the lamp mode and active crossfade, applies commands and drives the outputs once per tick
//! - **`LampCommand`**: Parsed intents (`Sleep`, `Nap`, `Wake`, `Off`, `SetColor`, `Rainbow`)
//! - **`LampMode`**: `Off`, `Night`, `Waking` (from night or a nap) and `Awake`
//! - **`ScheduleEvaluator`**: Fires auto-sleep, morning wake and end-of-wake transitions from the wall clock
//! - **`TransitionState`**: A stepped crossfade between two colors
//! - **`ColorRegistry`**: Exact-match lookup of named colors
//! - **`LampConfig`**: Validated startup configuration for one lamp profile
//! - **`LampDriver`**: Trait to implement for your fixture outputs
//! - **`TimeSource`** / **`WallClock`**: Traits to implement for your monotonic timer and RTC
//!
//! Colors are 8-bit `Srgb<u8>` values ([`Rgb8`]). Interpolation runs in
//! `Srgb<f32>` and is rounded back to 8 bits.

// Re-export Srgb from palette for user convenience
pub use palette::Srgb;

pub mod colors;
pub mod command;
pub mod config;
pub mod engine;
pub mod error;
pub mod fixtures;
pub mod pwm;
pub mod registry;
pub mod schedule;
pub mod time;
pub mod transition;
pub mod types;

pub use colors::{Polarity, Rgb8, apply_polarity, interpolate};
pub use command::{ColorName, CommandKind, CommandRejection, LampCommand};
pub use config::{FadeConfig, LampConfig, LampConfigBuilder, ScheduleConfig};
pub use engine::{LampDriver, LampEngine, MAX_PENDING_COMMANDS, ServiceTiming, TickReport};
pub use error::{ConfigError, LampError};
pub use fixtures::{FixtureChannelMap, FixtureChannels, FixtureId, MAX_FIXTURES};
pub use pwm::{PwmFixtureDriver, PwmSink};
pub use registry::{ColorCode, ColorRegistry, DEFAULT_COLORS, NUM_COLORS};
pub use schedule::ScheduleEvaluator;
pub use time::{ClockReading, MINUTES_PER_DAY, TimeDuration, TimeInstant, TimeSource, WallClock};
pub use transition::TransitionState;
pub use types::{
    AWAKE_LIGHT, LampMode, ModeColors, NIGHT_LIGHT, NO_LIGHT, ScheduledTransition, WAKING_LIGHT,
    WakeOrigin,
};

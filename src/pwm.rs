//! PWM output stage.
//!
//! [`PwmFixtureDriver`] is a [`LampDriver`] that routes each fixture's color to
//! its three PWM pins, scaling 8-bit channel values to the timer's duty range.

use crate::colors::Rgb8;
use crate::engine::LampDriver;
use crate::fixtures::{FixtureChannelMap, FixtureId};

/// Trait for abstracting a bank of PWM outputs addressed by pin number.
pub trait PwmSink {
    /// Highest duty value the timer accepts.
    fn max_duty(&self) -> u16;

    /// Sets the duty cycle of one pin.
    fn set_duty(&mut self, pin: u8, duty: u16);
}

/// Scales an 8-bit channel value to `0..=max_duty`, rounding to nearest.
#[inline]
pub fn scale_to_duty(value: u8, max_duty: u16) -> u16 {
    ((u32::from(value) * u32::from(max_duty) + 127) / 255) as u16
}

/// Drives fixtures through a [`PwmSink`] using a fixture channel map.
pub struct PwmFixtureDriver<P: PwmSink> {
    pwm: P,
    fixtures: FixtureChannelMap,
    rejected_writes: u32,
}

impl<P: PwmSink> PwmFixtureDriver<P> {
    /// Creates a driver writing to `pwm` through the given pin map.
    pub fn new(pwm: P, fixtures: FixtureChannelMap) -> Self {
        Self {
            pwm,
            fixtures,
            rejected_writes: 0,
        }
    }

    /// Number of writes dropped because the fixture index was out of range.
    pub fn rejected_writes(&self) -> u32 {
        self.rejected_writes
    }

    /// Returns a reference to the PWM sink.
    pub fn pwm(&self) -> &P {
        &self.pwm
    }

    /// Releases the PWM sink.
    pub fn into_inner(self) -> P {
        self.pwm
    }
}

impl<P: PwmSink> LampDriver for PwmFixtureDriver<P> {
    fn set_fixture_color(&mut self, fixture: FixtureId, color: Rgb8) {
        let channels = match self.fixtures.channels(fixture) {
            Ok(channels) => channels,
            Err(_error) => {
                #[cfg(feature = "defmt")]
                defmt::error!("dropping write: {}", _error);

                self.rejected_writes = self.rejected_writes.saturating_add(1);
                return;
            }
        };

        let max_duty = self.pwm.max_duty();
        self.pwm
            .set_duty(channels.red, scale_to_duty(color.red, max_duty));
        self.pwm
            .set_duty(channels.green, scale_to_duty(color.green, max_duty));
        self.pwm
            .set_duty(channels.blue, scale_to_duty(color.blue, max_duty));
    }
}

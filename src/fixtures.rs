//! Fixture identifiers and PWM pin assignments.

use crate::error::{ConfigError, LampError};
use heapless::Vec;

/// Maximum number of fixtures a lamp can drive.
pub const MAX_FIXTURES: usize = 8;

/// An identifier for a fixture within a [`FixtureChannelMap`].
///
/// Fixtures are numbered from zero in the order they were configured.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct FixtureId(pub usize);

impl From<usize> for FixtureId {
    fn from(id: usize) -> Self {
        FixtureId(id)
    }
}

impl From<FixtureId> for usize {
    fn from(id: FixtureId) -> Self {
        id.0
    }
}

/// The PWM pins driving one fixture's red, green and blue channels.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct FixtureChannels {
    pub red: u8,
    pub green: u8,
    pub blue: u8,
}

impl FixtureChannels {
    /// Creates a pin assignment.
    #[inline]
    pub const fn new(red: u8, green: u8, blue: u8) -> Self {
        Self { red, green, blue }
    }

    fn pins(&self) -> [u8; 3] {
        [self.red, self.green, self.blue]
    }
}

/// Stock wiring: two fixtures.
pub const DEFAULT_FIXTURES: [FixtureChannels; 2] = [
    FixtureChannels::new(13, 12, 14),
    FixtureChannels::new(2, 0, 4),
];

/// Validated pin assignments for every fixture, fixed for the process lifetime.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FixtureChannelMap {
    fixtures: Vec<FixtureChannels, MAX_FIXTURES>,
}

impl FixtureChannelMap {
    /// Validates a fixture table.
    ///
    /// # Errors
    /// * `NoFixtures` - The table is empty
    /// * `TooManyFixtures` - More than [`MAX_FIXTURES`] entries
    /// * `DuplicatePin` - A pin is used twice anywhere in the table
    pub fn new(fixtures: &[FixtureChannels]) -> Result<Self, ConfigError> {
        if fixtures.is_empty() {
            return Err(ConfigError::NoFixtures);
        }

        let mut map = Vec::new();
        for channels in fixtures {
            map.push(*channels).map_err(|_| ConfigError::TooManyFixtures {
                count: fixtures.len(),
                capacity: MAX_FIXTURES,
            })?;
        }

        let mut seen: Vec<u8, { MAX_FIXTURES * 3 }> = Vec::new();
        for pin in map.iter().flat_map(FixtureChannels::pins) {
            if seen.contains(&pin) {
                return Err(ConfigError::DuplicatePin(pin));
            }
            // Capacity matches three pins per fixture.
            let _ = seen.push(pin);
        }

        Ok(Self { fixtures: map })
    }

    /// Returns the stock two-fixture map.
    pub fn stock() -> Self {
        Self {
            fixtures: Vec::from_iter(DEFAULT_FIXTURES),
        }
    }

    /// Looks up a fixture's pins.
    pub fn channels(&self, id: FixtureId) -> Result<FixtureChannels, LampError> {
        self.fixtures
            .get(id.0)
            .copied()
            .ok_or(LampError::InvalidFixtureIndex {
                index: id.0,
                count: self.fixtures.len(),
            })
    }

    /// Number of configured fixtures.
    pub fn len(&self) -> usize {
        self.fixtures.len()
    }

    /// Always false for a validated map.
    pub fn is_empty(&self) -> bool {
        self.fixtures.is_empty()
    }

    /// Iterates over fixture ids in order.
    pub fn ids(&self) -> impl Iterator<Item = FixtureId> + use<> {
        (0..self.fixtures.len()).map(FixtureId)
    }
}

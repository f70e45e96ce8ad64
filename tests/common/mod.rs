//! Shared test infrastructure for lamp-engine integration tests

#![allow(dead_code)] // Items used across multiple test files; Rust analyzes per-file

use core::cell::Cell;
use lamp_engine::{
    ClockReading, FixtureId, LampConfig, LampDriver, LampEngine, MAX_FIXTURES, Polarity, PwmSink,
    Rgb8, TimeDuration, TimeInstant, TimeSource, WallClock,
};

pub const SECOND: u64 = 1_000;
pub const MINUTE: u64 = 60 * SECOND;
pub const HOUR: u64 = 60 * MINUTE;
const DAY: u64 = 24 * HOUR;

// ============================================================================
// Mock Time Types
// ============================================================================

/// Mock duration type for testing (wraps milliseconds)
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct TestDuration(pub u64);

impl TimeDuration for TestDuration {
    const ZERO: Self = TestDuration(0);

    fn as_millis(&self) -> u64 {
        self.0
    }
}

/// Mock instant type for testing
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct TestInstant(pub u64);

impl TimeInstant for TestInstant {
    type Duration = TestDuration;

    fn duration_since(&self, earlier: Self) -> Self::Duration {
        TestDuration(self.0 - earlier.0)
    }
}

// ============================================================================
// Mock Clocks
// ============================================================================

/// Monotonic timer and wall clock in one, advanced together.
///
/// The wall clock can also be set on its own to simulate an RTC adjustment.
pub struct MockTime {
    monotonic_ms: Cell<u64>,
    wall_ms: Cell<u64>,
}

impl MockTime {
    /// Starts at the given wall-clock time of day.
    pub fn at(hour: u64, minute: u64, second: u64) -> Self {
        Self {
            monotonic_ms: Cell::new(0),
            wall_ms: Cell::new(hour * HOUR + minute * MINUTE + second * SECOND),
        }
    }

    /// Advance both clocks by the given number of milliseconds
    pub fn advance(&self, ms: u64) {
        self.monotonic_ms.set(self.monotonic_ms.get() + ms);
        self.wall_ms.set((self.wall_ms.get() + ms) % DAY);
    }

    /// Move only the wall clock
    pub fn set_wall(&self, hour: u64, minute: u64, second: u64) {
        self.wall_ms
            .set(hour * HOUR + minute * MINUTE + second * SECOND);
    }

    pub fn wall(&self) -> ClockReading {
        let minute_of_day = self.wall_ms.get() / MINUTE;
        ClockReading::new((minute_of_day / 60) as u8, (minute_of_day % 60) as u8)
    }
}

impl TimeSource<TestInstant> for MockTime {
    fn now(&self) -> TestInstant {
        TestInstant(self.monotonic_ms.get())
    }
}

impl WallClock for MockTime {
    fn now(&self) -> ClockReading {
        self.wall()
    }
}

// ============================================================================
// Mock Drivers
// ============================================================================

/// Mock driver that records the last color written to each fixture
pub struct MockDriver {
    last: [Option<Rgb8>; MAX_FIXTURES],
    writes: usize,
}

impl MockDriver {
    pub fn new() -> Self {
        Self {
            last: [None; MAX_FIXTURES],
            writes: 0,
        }
    }

    pub fn color_of(&self, fixture: usize) -> Option<Rgb8> {
        self.last[fixture]
    }

    pub fn writes(&self) -> usize {
        self.writes
    }
}

impl LampDriver for MockDriver {
    fn set_fixture_color(&mut self, fixture: FixtureId, color: Rgb8) {
        self.last[fixture.0] = Some(color);
        self.writes += 1;
    }
}

/// Mock PWM bank with 32 pins
pub struct MockPwm {
    pub duties: [u16; 32],
}

impl MockPwm {
    pub fn new() -> Self {
        Self { duties: [0; 32] }
    }
}

impl PwmSink for MockPwm {
    fn max_duty(&self) -> u16 {
        1000
    }

    fn set_duty(&mut self, pin: u8, duty: u16) {
        self.duties[pin as usize] = duty;
    }
}

// ============================================================================
// Engine Helpers
// ============================================================================

pub type TestEngine<'t> = LampEngine<'t, TestInstant, MockDriver, MockTime, MockTime>;

/// Stock profile with common-cathode output, so fixture writes equal mode colors
pub fn cathode_config() -> LampConfig {
    LampConfig::builder()
        .polarity(Polarity::CommonCathode)
        .build()
        .unwrap()
}

pub fn engine(time: &MockTime) -> TestEngine<'_> {
    LampEngine::new(MockDriver::new(), time, time, cathode_config())
}

/// Advance by `step_ms` and tick, `count` times
pub fn run(engine: &mut TestEngine<'_>, time: &MockTime, step_ms: u64, count: u64) {
    for _ in 0..count {
        time.advance(step_ms);
        engine.tick();
    }
}

/// Assert every channel is within one of the expected value
pub fn assert_color_near(actual: Rgb8, expected: Rgb8) {
    let close = |a: u8, b: u8| a.abs_diff(b) <= 1;
    assert!(
        close(actual.red, expected.red)
            && close(actual.green, expected.green)
            && close(actual.blue, expected.blue),
        "expected about {:?}, got {:?}",
        expected,
        actual
    );
}

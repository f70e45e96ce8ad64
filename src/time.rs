//! Time abstraction traits for platform-agnostic timing.
//!
//! The engine needs two clocks: a monotonic millisecond source that paces
//! crossfades, and a wall clock that drives the daily schedule.

/// Trait for abstracting monotonic time sources.
pub trait TimeSource<I: TimeInstant> {
    /// Returns the current time instant.
    fn now(&self) -> I;
}

/// Trait abstraction for duration types.
pub trait TimeDuration: Copy + PartialEq {
    /// Zero duration constant.
    const ZERO: Self;

    /// Converts duration to milliseconds.
    fn as_millis(&self) -> u64;
}

/// Trait abstraction for instant types.
pub trait TimeInstant: Copy {
    /// Duration type for this instant.
    type Duration: TimeDuration;

    /// Calculates duration since an earlier instant.
    fn duration_since(&self, earlier: Self) -> Self::Duration;
}

/// Trait for abstracting the real-time clock.
pub trait WallClock {
    /// Returns the current wall-clock time at minute resolution.
    fn now(&self) -> ClockReading;
}

/// Minutes in one wall-clock day.
pub const MINUTES_PER_DAY: u16 = 24 * 60;
pub(crate) const HALF_DAY: u16 = MINUTES_PER_DAY / 2;

/// A wall-clock sample at minute resolution.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct ClockReading {
    /// Hour of day, 0-23.
    pub hour: u8,
    /// Minute of hour, 0-59.
    pub minute: u8,
}

impl ClockReading {
    /// Creates a reading. Out-of-range values wrap when compared.
    #[inline]
    pub const fn new(hour: u8, minute: u8) -> Self {
        Self { hour, minute }
    }

    /// Returns true if both fields are within a 24 hour day.
    pub const fn is_valid(&self) -> bool {
        self.hour < 24 && self.minute < 60
    }

    /// Minutes since midnight.
    pub const fn minute_of_day(&self) -> u16 {
        ((self.hour as u16 % 24) * 60 + (self.minute as u16 % 60)) % MINUTES_PER_DAY
    }

    /// Minutes from `self` forward to `later`, wrapping at midnight.
    pub const fn minutes_until(&self, later: ClockReading) -> u16 {
        (later.minute_of_day() + MINUTES_PER_DAY - self.minute_of_day()) % MINUTES_PER_DAY
    }

    /// Returns true if `self` lies after `other` by at most half a day.
    ///
    /// Anything further ahead is read as `other` having wrapped past midnight.
    pub const fn is_after(&self, other: ClockReading) -> bool {
        let ahead = other.minutes_until(*self);
        ahead > 0 && ahead <= HALF_DAY
    }
}

impl core::fmt::Display for ClockReading {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "{:02}:{:02}", self.hour, self.minute)
    }
}

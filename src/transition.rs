//! Stepped crossfades between two colors.

use crate::colors::{Rgb8, interpolate};

/// An in-progress crossfade.
///
/// The duration is split into `total_steps` equal intervals; the color only
/// moves when a whole interval has elapsed. Once finished, the state keeps
/// returning the end color.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TransitionState {
    start: Rgb8,
    end: Rgb8,
    elapsed_steps: u32,
    total_steps: u32,
    step_duration_ms: u32,
    accumulated_ms: u64,
}

impl TransitionState {
    /// Begins a crossfade from `start` to `end`.
    ///
    /// A zero duration or zero step count yields a snap: the first `advance`
    /// finishes at `end`. The step interval is rounded up to whole
    /// milliseconds, so a fade never finishes before `duration_ms`.
    pub fn begin(start: Rgb8, end: Rgb8, duration_ms: u32, steps: u32) -> Self {
        let (total_steps, step_duration_ms) = if duration_ms == 0 || steps == 0 {
            (0, 0)
        } else {
            (steps, duration_ms.div_ceil(steps))
        };

        Self {
            start,
            end,
            elapsed_steps: 0,
            total_steps,
            step_duration_ms,
            accumulated_ms: 0,
        }
    }

    /// Moves the fade forward by `elapsed_ms`.
    ///
    /// # Returns
    /// The color to display and whether the fade has reached `end`.
    pub fn advance(&mut self, elapsed_ms: u64) -> (Rgb8, bool) {
        if self.is_finished() {
            return (self.end, true);
        }

        self.accumulated_ms = self.accumulated_ms.saturating_add(elapsed_ms);

        let completed = self.accumulated_ms / u64::from(self.step_duration_ms);
        self.elapsed_steps = completed.min(u64::from(self.total_steps)) as u32;

        let finished = self.is_finished();
        (self.current(), finished)
    }

    /// The color at the current step.
    pub fn current(&self) -> Rgb8 {
        if self.is_finished() {
            return self.end;
        }
        if self.elapsed_steps == 0 {
            return self.start;
        }
        let t = self.elapsed_steps as f32 / self.total_steps as f32;
        interpolate(self.start, self.end, t)
    }

    /// Returns true once every step has elapsed.
    #[inline]
    pub fn is_finished(&self) -> bool {
        self.elapsed_steps >= self.total_steps
    }

    /// Color the fade started from.
    pub fn start(&self) -> Rgb8 {
        self.start
    }

    /// Color the fade ends at.
    pub fn end(&self) -> Rgb8 {
        self.end
    }

    /// Steps completed so far.
    pub fn elapsed_steps(&self) -> u32 {
        self.elapsed_steps
    }

    /// Steps in the whole fade; zero for a snap.
    pub fn total_steps(&self) -> u32 {
        self.total_steps
    }

    /// Length of one step in milliseconds; zero for a snap.
    pub fn step_duration_ms(&self) -> u32 {
        self.step_duration_ms
    }
}

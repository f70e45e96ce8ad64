//! Wall-clock driven sleep and wake transitions.
//!
//! [`ScheduleEvaluator`] is consulted once per tick. The auto-sleep and wake
//! rules match the current wall-clock minute and fire each matching minute at
//! most once, no matter how many ticks land inside it. The finish rule ends
//! `Waking` once enough monotonic time has passed.
//!
//! A clock that jumps backward (an RTC resync, a DST change) can show a minute
//! that already fired a second time. Every fired minute is kept together with
//! the amount of forward clock movement seen at that point. The minute stays
//! claimed until the clock has moved forward by half a day since, so a replay
//! after a regression is skipped while the same minute on the next day fires
//! again. Rules that never fired are not affected by a regression.

use crate::config::ScheduleConfig;
use crate::error::LampError;
use crate::time::{ClockReading, HALF_DAY};
use crate::types::{LampMode, ScheduledTransition};

/// A minute used by a rule or a command.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct Claim {
    minute: ClockReading,
    /// Forward clock movement, in minutes, when the claim was made.
    progress: u32,
}

/// Decides when autonomous sleep/wake transitions fire.
#[derive(Debug, Clone, Default)]
pub struct ScheduleEvaluator {
    auto_sleep: Option<Claim>,
    begin_waking: Option<Claim>,
    consumed: Option<Claim>,
    last_seen: Option<ClockReading>,
    progress: u32,
    regression: Option<LampError>,
}

impl ScheduleEvaluator {
    /// Creates an evaluator that has not seen the clock yet.
    pub fn new() -> Self {
        Self::default()
    }

    /// Records a clock sample without matching any rule.
    ///
    /// Forward moves of up to half a day add to the clock progress. A reading
    /// earlier than the previous one is recorded as a regression and adds
    /// nothing.
    pub fn observe(&mut self, now: ClockReading) {
        if let Some(previous) = self.last_seen {
            if previous.is_after(now) {
                self.regression = Some(LampError::ClockRegression {
                    from: previous,
                    to: now,
                });
            } else {
                self.progress = self
                    .progress
                    .wrapping_add(u32::from(previous.minutes_until(now)));
            }
        }
        self.last_seen = Some(now);
    }

    /// Marks the current minute as used so no rule fires again within it.
    ///
    /// Explicit mode commands call this so the schedule cannot immediately
    /// undo them.
    pub fn consume(&mut self, now: ClockReading) {
        self.observe(now);
        self.consumed = Some(self.claim(now));
    }

    /// Checks the schedule rules.
    ///
    /// `waking_elapsed_ms` is the monotonic time spent in the current
    /// `Waking` mode; it is ignored in every other mode.
    ///
    /// Rules, first match wins:
    /// 1. `Off`, auto-sleep enabled, at the auto-sleep time → [`ScheduledTransition::AutoSleep`]
    /// 2. `Night` at the wake time → [`ScheduledTransition::BeginWaking`]
    /// 3. `Waking` for at least its duration → [`ScheduledTransition::FinishWaking`]
    pub fn evaluate(
        &mut self,
        now: ClockReading,
        mode: LampMode,
        waking_elapsed_ms: u64,
        config: &ScheduleConfig,
    ) -> Option<ScheduledTransition> {
        self.observe(now);

        match mode {
            LampMode::Off
                if config.auto_sleep
                    && now == config.auto_sleep_time()
                    && !self.is_claimed(now) =>
            {
                self.auto_sleep = Some(self.claim(now));
                Some(ScheduledTransition::AutoSleep)
            }
            LampMode::Night if now == config.wake_time() && !self.is_claimed(now) => {
                self.begin_waking = Some(self.claim(now));
                Some(ScheduledTransition::BeginWaking)
            }
            LampMode::Waking { origin }
                if waking_elapsed_ms >= config.waking_duration_ms(origin) =>
            {
                Some(ScheduledTransition::FinishWaking)
            }
            _ => None,
        }
    }

    /// Returns true if a rule fired or a command claimed `now`, and the clock
    /// has not moved forward by half a day since.
    pub fn is_claimed(&self, now: ClockReading) -> bool {
        [self.auto_sleep, self.begin_waking, self.consumed]
            .into_iter()
            .flatten()
            .any(|claim| {
                claim.minute == now
                    && self.progress.wrapping_sub(claim.progress) < u32::from(HALF_DAY)
            })
    }

    /// Returns and clears the most recent clock regression, if any.
    pub fn take_regression(&mut self) -> Option<LampError> {
        self.regression.take()
    }

    fn claim(&self, minute: ClockReading) -> Claim {
        Claim {
            minute,
            progress: self.progress,
        }
    }
}

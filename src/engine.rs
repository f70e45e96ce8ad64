//! Lamp state machine with tick-driven timing.
//!
//! Provides [`LampEngine`], which owns the lamp mode, the active crossfade and
//! the pending command queue, and writes one color per fixture on every tick.
//! Also defines the [`LampDriver`] trait for output abstraction.

use crate::colors::Rgb8;
use crate::command::{CommandRejection, LampCommand};
use crate::config::LampConfig;
use crate::error::LampError;
use crate::fixtures::FixtureId;
use crate::schedule::ScheduleEvaluator;
use crate::time::{ClockReading, TimeDuration, TimeInstant, TimeSource, WallClock};
use crate::transition::TransitionState;
use crate::types::{LampMode, ScheduledTransition, WakeOrigin};
use heapless::{Deque, Vec};

/// Maximum number of commands that can wait for the next tick.
pub const MAX_PENDING_COMMANDS: usize = 8;

/// Trait for abstracting the fixture output stage.
///
/// Implement this for your PWM or GPIO hardware. Colors arrive already
/// polarity-corrected, one call per fixture per tick. Writes are
/// fire-and-forget: handle hardware errors internally.
pub trait LampDriver {
    /// Sets one fixture to the given duty-cycle triple.
    fn set_fixture_color(&mut self, fixture: FixtureId, color: Rgb8);
}

/// Timing hint returned by [`LampEngine::tick`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ServiceTiming {
    /// A crossfade is running. Tick at your desired frame rate.
    Continuous,

    /// The color is steady. Keep ticking at least once per wall-clock
    /// minute so every scheduled minute is seen; about once a second is
    /// typical.
    #[default]
    Steady,
}

/// What happened during one tick.
#[derive(Debug, Clone, Default)]
pub struct TickReport {
    /// Commands that were dropped, in arrival order.
    pub rejected: Vec<CommandRejection, MAX_PENDING_COMMANDS>,

    /// The scheduled transition applied this tick, if any.
    pub scheduled: Option<ScheduledTransition>,

    /// Set when the wall clock moved backward since the previous tick.
    pub clock_regression: Option<LampError>,

    /// When to tick next.
    pub timing: ServiceTiming,
}

#[derive(Debug, Clone, Copy)]
enum Activity {
    Steady,
    Fade(TransitionState),
    Rainbow {
        fade: TransitionState,
        /// Registry index the current segment fades toward.
        target: usize,
    },
}

/// Drives every fixture of one lamp from commands and the wall clock.
///
/// All fixtures share one mode and show the same color. At most one crossfade
/// is active; starting a new one discards the old one.
///
/// # Type Parameters
/// * `'t` - Lifetime of the clock references
/// * `I` - Monotonic instant type
/// * `D` - Output driver type
/// * `T` - Monotonic time source type
/// * `C` - Wall clock type
pub struct LampEngine<'t, I: TimeInstant, D: LampDriver, T: TimeSource<I>, C: WallClock> {
    driver: D,
    time_source: &'t T,
    clock: &'t C,
    config: LampConfig,
    mode: LampMode,
    current_color: Rgb8,
    activity: Activity,
    started_this_tick: bool,
    waking_ms: u64,
    schedule: ScheduleEvaluator,
    deferred: Option<ScheduledTransition>,
    pending: Deque<LampCommand, MAX_PENDING_COMMANDS>,
    last_instant: I,
}

impl<'t, I, D, T, C> LampEngine<'t, I, D, T, C>
where
    I: TimeInstant,
    D: LampDriver,
    T: TimeSource<I>,
    C: WallClock,
{
    /// Creates an engine in `Off` mode and writes the off color to every fixture.
    pub fn new(driver: D, time_source: &'t T, clock: &'t C, config: LampConfig) -> Self {
        let mut engine = Self {
            driver,
            time_source,
            clock,
            current_color: config.colors.off,
            config,
            mode: LampMode::Off,
            activity: Activity::Steady,
            started_this_tick: false,
            waking_ms: 0,
            schedule: ScheduleEvaluator::new(),
            deferred: None,
            pending: Deque::new(),
            last_instant: time_source.now(),
        };
        engine.write_outputs();
        engine
    }

    /// Queues a command for the next tick.
    ///
    /// # Errors
    /// * `QueueFull` - [`MAX_PENDING_COMMANDS`] commands are already waiting
    pub fn submit(&mut self, command: LampCommand) -> Result<(), LampError> {
        self.pending
            .push_back(command)
            .map_err(|_| LampError::QueueFull)
    }

    /// Runs one engine step.
    ///
    /// Samples both clocks once, applies queued commands in arrival order,
    /// consults the schedule, advances the active crossfade and writes the
    /// resulting color to every fixture.
    ///
    /// A scheduled transition never interrupts a fade started by a command in
    /// the same tick. It is held and applied on the next tick instead, as long
    /// as the lamp is still in the mode it leaves.
    pub fn tick(&mut self) -> TickReport {
        let instant = self.time_source.now();
        let elapsed_ms = instant.duration_since(self.last_instant).as_millis();
        self.last_instant = instant;
        let now = self.clock.now();

        if self.mode.is_waking() {
            self.waking_ms = self.waking_ms.saturating_add(elapsed_ms);
        }

        let mut report = TickReport::default();

        while let Some(command) = self.pending.pop_front() {
            if let Err(error) = self.apply_command(&command, now) {
                #[cfg(feature = "defmt")]
                defmt::warn!("rejected {} command: {}", command.kind(), error);

                // Same capacity as the queue, cannot overflow.
                let _ = report.rejected.push(CommandRejection { command, error });
            }
        }

        let command_fade = self.started_this_tick && matches!(self.activity, Activity::Fade(_));
        let matched =
            self.schedule
                .evaluate(now, self.mode, self.waking_ms, &self.config.schedule);
        let due = self
            .deferred
            .take()
            .filter(|transition| transition.applies_to(self.mode))
            .or(matched);

        if let Some(transition) = due {
            if command_fade {
                #[cfg(feature = "defmt")]
                defmt::debug!("holding {} behind command fade", transition);

                self.deferred = Some(transition);
            } else {
                #[cfg(feature = "defmt")]
                defmt::info!("schedule fired {} at {}", transition, now);

                self.apply_scheduled(transition);
                report.scheduled = Some(transition);
            }
        }

        report.clock_regression = self.schedule.take_regression();
        if let Some(_regression) = report.clock_regression {
            #[cfg(feature = "defmt")]
            defmt::warn!("{}", _regression);
        }

        self.advance(elapsed_ms);
        self.write_outputs();

        report.timing = match self.activity {
            Activity::Steady => ServiceTiming::Steady,
            _ => ServiceTiming::Continuous,
        };
        report
    }

    fn apply_command(&mut self, command: &LampCommand, now: ClockReading) -> Result<(), LampError> {
        #[cfg(feature = "defmt")]
        defmt::debug!("applying {} command at {}", command.kind(), now);

        match command {
            LampCommand::Sleep => {
                self.enter_night();
                self.schedule.consume(now);
            }
            LampCommand::Nap => {
                self.set_mode(LampMode::Waking {
                    origin: WakeOrigin::Nap,
                });
                let (duration_ms, steps) = self
                    .config
                    .fades
                    .wake_fade(self.config.schedule.nap_duration_min);
                self.start_fade(self.current_color, self.config.colors.waking, duration_ms, steps);
                self.schedule.consume(now);
            }
            LampCommand::Wake => {
                self.enter_awake();
                self.schedule.consume(now);
            }
            LampCommand::Off => {
                self.set_mode(LampMode::Off);
                self.start_fade(self.current_color, self.config.colors.off, 0, 0);
                self.schedule.consume(now);
            }
            LampCommand::SetColor(name) => {
                let color = self.config.registry.resolve(name)?;
                let fades = self.config.fades;
                self.start_fade(
                    self.current_color,
                    color,
                    fades.color_fade_ms,
                    fades.color_fade_steps,
                );
            }
            LampCommand::Rainbow => {
                if let Some(first) = self.config.registry.get(0) {
                    let fades = self.config.fades;
                    self.activity = Activity::Rainbow {
                        fade: TransitionState::begin(
                            self.current_color,
                            first.color,
                            fades.rainbow_duration_ms,
                            fades.rainbow_steps,
                        ),
                        target: 0,
                    };
                    self.started_this_tick = true;
                }
            }
        }
        Ok(())
    }

    fn apply_scheduled(&mut self, transition: ScheduledTransition) {
        match transition {
            ScheduledTransition::AutoSleep => self.enter_night(),
            ScheduledTransition::BeginWaking => {
                self.set_mode(LampMode::Waking {
                    origin: WakeOrigin::Night,
                });
                let (duration_ms, steps) = self
                    .config
                    .fades
                    .wake_fade(self.config.schedule.wake_duration_min);
                self.start_fade(
                    self.config.colors.night,
                    self.config.colors.waking,
                    duration_ms,
                    steps,
                );
            }
            ScheduledTransition::FinishWaking => self.enter_awake(),
        }
    }

    fn enter_night(&mut self) {
        self.set_mode(LampMode::Night);
        let fades = self.config.fades;
        self.start_fade(
            self.current_color,
            self.config.colors.night,
            fades.sleep_fade_ms,
            fades.sleep_fade_steps,
        );
    }

    fn enter_awake(&mut self) {
        self.set_mode(LampMode::Awake);
        self.start_fade(self.current_color, self.config.colors.awake, 0, 0);
    }

    fn set_mode(&mut self, mode: LampMode) {
        #[cfg(feature = "defmt")]
        defmt::info!("mode {} -> {}", self.mode, mode);

        if mode.is_waking() {
            self.waking_ms = 0;
        }
        self.mode = mode;
    }

    /// Replaces the active crossfade. Snaps settle immediately so a later
    /// command in the same tick starts from the snapped color.
    fn start_fade(&mut self, start: Rgb8, end: Rgb8, duration_ms: u32, steps: u32) {
        let fade = TransitionState::begin(start, end, duration_ms, steps);
        if fade.is_finished() {
            self.current_color = end;
            self.activity = Activity::Steady;
        } else {
            self.activity = Activity::Fade(fade);
            self.started_this_tick = true;
        }
    }

    /// Advances the active crossfade. Fades begun during this tick start at
    /// their first step regardless of elapsed time.
    fn advance(&mut self, elapsed_ms: u64) {
        let elapsed_ms = if self.started_this_tick { 0 } else { elapsed_ms };
        self.started_this_tick = false;

        match &mut self.activity {
            Activity::Steady => {}
            Activity::Fade(fade) => {
                let (color, finished) = fade.advance(elapsed_ms);
                self.current_color = color;
                if finished {
                    self.activity = Activity::Steady;
                }
            }
            Activity::Rainbow { fade, target } => {
                let (color, finished) = fade.advance(elapsed_ms);
                self.current_color = color;
                if finished {
                    let next = (*target + 1) % self.config.registry.len();
                    if let Some(code) = self.config.registry.get(next) {
                        let fades = self.config.fades;
                        *fade = TransitionState::begin(
                            color,
                            code.color,
                            fades.rainbow_duration_ms,
                            fades.rainbow_steps,
                        );
                        *target = next;
                    }
                }
            }
        }
    }

    fn write_outputs(&mut self) {
        let output = self.config.polarity.apply(self.current_color);
        for fixture in self.config.fixtures.ids() {
            self.driver.set_fixture_color(fixture, output);
        }
    }

    /// Returns the current lamp mode.
    pub fn mode(&self) -> LampMode {
        self.mode
    }

    /// Returns the color being shown, before polarity correction.
    pub fn current_color(&self) -> Rgb8 {
        self.current_color
    }

    /// Returns true while a crossfade (including rainbow) is running.
    pub fn is_transitioning(&self) -> bool {
        !matches!(self.activity, Activity::Steady)
    }

    /// Returns true while the rainbow cycle is active.
    pub fn is_rainbow(&self) -> bool {
        matches!(self.activity, Activity::Rainbow { .. })
    }

    /// Returns the active crossfade, if any.
    pub fn transition(&self) -> Option<&TransitionState> {
        match &self.activity {
            Activity::Steady => None,
            Activity::Fade(fade) | Activity::Rainbow { fade, .. } => Some(fade),
        }
    }

    /// Number of commands waiting for the next tick.
    pub fn pending_commands(&self) -> usize {
        self.pending.len()
    }

    /// Monotonic time spent in the current `Waking` mode, if waking.
    pub fn waking_elapsed_ms(&self) -> Option<u64> {
        self.mode.is_waking().then_some(self.waking_ms)
    }

    /// Returns the configuration the engine was built with.
    pub fn config(&self) -> &LampConfig {
        &self.config
    }

    /// Returns the schedule evaluator.
    pub fn schedule(&self) -> &ScheduleEvaluator {
        &self.schedule
    }

    /// Returns a reference to the output driver.
    pub fn driver(&self) -> &D {
        &self.driver
    }

    /// Returns a mutable reference to the output driver.
    pub fn driver_mut(&mut self) -> &mut D {
        &mut self.driver
    }
}

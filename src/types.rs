//! Lamp modes and schedule-driven transitions.

use crate::colors::Rgb8;

/// What started a wake-up fade.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum WakeOrigin {
    /// The morning wake time was reached while in `Night`.
    Night,

    /// A `Nap` command.
    Nap,
}

/// The mode shared by every fixture of the lamp.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum LampMode {
    /// Lamp is dark. Auto-sleep may fire.
    #[default]
    Off,

    /// Night light is on, waiting for the wake time.
    Night,

    /// Fading up toward the waking color.
    ///
    /// Time spent here is measured on the monotonic clock by the engine.
    Waking {
        /// What started the wake-up.
        origin: WakeOrigin,
    },

    /// Fully awake.
    Awake,
}

impl LampMode {
    /// Returns true for either flavor of `Waking`.
    pub fn is_waking(&self) -> bool {
        matches!(self, LampMode::Waking { .. })
    }
}

/// A transition triggered by the wall clock rather than a command.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ScheduledTransition {
    /// `Off` → `Night` at the auto-sleep time.
    AutoSleep,

    /// `Night` → `Waking` at the wake time.
    BeginWaking,

    /// `Waking` → `Awake` once the wake or nap duration has passed.
    FinishWaking,
}

impl ScheduledTransition {
    /// Returns true if this transition leaves `mode`.
    pub fn applies_to(self, mode: LampMode) -> bool {
        match self {
            ScheduledTransition::AutoSleep => mode == LampMode::Off,
            ScheduledTransition::BeginWaking => mode == LampMode::Night,
            ScheduledTransition::FinishWaking => mode.is_waking(),
        }
    }
}

/// The steady color of each mode.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ModeColors {
    pub night: Rgb8,
    pub waking: Rgb8,
    pub awake: Rgb8,
    pub off: Rgb8,
}

/// Night light color.
pub const NIGHT_LIGHT: Rgb8 = Rgb8::new(0, 0, 0);
/// Target of the wake-up fade.
pub const WAKING_LIGHT: Rgb8 = Rgb8::new(200, 200, 0);
/// Awake color.
pub const AWAKE_LIGHT: Rgb8 = Rgb8::new(0, 255, 0);
/// Lamp off.
pub const NO_LIGHT: Rgb8 = Rgb8::new(0, 0, 0);

impl Default for ModeColors {
    fn default() -> Self {
        Self {
            night: NIGHT_LIGHT,
            waking: WAKING_LIGHT,
            awake: AWAKE_LIGHT,
            off: NO_LIGHT,
        }
    }
}

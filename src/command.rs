//! Commands accepted by the lamp engine.

use crate::error::LampError;
use heapless::String;

/// Longest color name a command can carry.
pub const MAX_COLOR_NAME_LEN: usize = 24;

/// A color name carried by [`LampCommand::SetColor`].
pub type ColorName = String<MAX_COLOR_NAME_LEN>;

/// Parsed intents delivered by the command source.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LampCommand {
    /// Go to night mode and arm the morning wake.
    Sleep,
    /// Short wake-up fade, then awake.
    Nap,
    /// Snap to awake.
    Wake,
    /// Lamp off; auto-sleep stays armed.
    Off,
    /// Fade to a named color without changing mode.
    SetColor(ColorName),
    /// Cycle through every registered color until interrupted.
    Rainbow,
}

impl LampCommand {
    /// Builds a `SetColor` command.
    ///
    /// A name longer than [`MAX_COLOR_NAME_LEN`] cannot match any registry
    /// entry and is rejected as `UnknownColorName`.
    pub fn set_color(name: &str) -> Result<Self, LampError> {
        let mut color_name = ColorName::new();
        color_name
            .push_str(name)
            .map_err(|_| LampError::UnknownColorName)?;
        Ok(LampCommand::SetColor(color_name))
    }

    /// The command without its payload.
    pub fn kind(&self) -> CommandKind {
        match self {
            LampCommand::Sleep => CommandKind::Sleep,
            LampCommand::Nap => CommandKind::Nap,
            LampCommand::Wake => CommandKind::Wake,
            LampCommand::Off => CommandKind::Off,
            LampCommand::SetColor(_) => CommandKind::SetColor,
            LampCommand::Rainbow => CommandKind::Rainbow,
        }
    }
}

/// Payload-free command tag, used for logging and reporting.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum CommandKind {
    Sleep,
    Nap,
    Wake,
    Off,
    SetColor,
    Rainbow,
}

/// A command the engine dropped, with the reason.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommandRejection {
    pub command: LampCommand,
    pub error: LampError,
}

//! Color space helpers.
//!
//! Interpolation happens in `Srgb<f32>` (0.0-1.0) and is converted back to
//! 8-bit channels, which rounds to nearest and clamps to 0-255.

use palette::{Mix, Srgb};

/// An 8-bit RGB color, one duty-cycle value per channel.
pub type Rgb8 = Srgb<u8>;

/// Linearly interpolates between two colors.
///
/// `t` is clamped to `0.0..=1.0`. `t = 0.0` returns `a` and `t = 1.0`
/// returns `b` exactly.
pub fn interpolate(a: Rgb8, b: Rgb8, t: f32) -> Rgb8 {
    let t = if t.is_nan() { 0.0 } else { t.clamp(0.0, 1.0) };
    if t == 0.0 {
        return a;
    }
    if t == 1.0 {
        return b;
    }

    let from: Srgb<f32> = a.into_format();
    let to: Srgb<f32> = b.into_format();
    from.mix(to, t).into_format()
}

/// Inverts every channel when `inverted` is set (common-anode wiring).
#[inline]
pub fn apply_polarity(color: Rgb8, inverted: bool) -> Rgb8 {
    if inverted {
        Rgb8::new(
            u8::MAX - color.red,
            u8::MAX - color.green,
            u8::MAX - color.blue,
        )
    } else {
        color
    }
}

/// How the fixtures' LEDs are wired.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Polarity {
    /// Higher duty cycle means brighter.
    #[default]
    CommonCathode,

    /// Higher duty cycle means dimmer; channels are inverted on output.
    CommonAnode,
}

impl Polarity {
    /// Returns true if channel values must be inverted before output.
    #[inline]
    pub fn is_inverted(self) -> bool {
        self == Polarity::CommonAnode
    }

    /// Applies this polarity to a color.
    #[inline]
    pub fn apply(self, color: Rgb8) -> Rgb8 {
        apply_polarity(color, self.is_inverted())
    }
}

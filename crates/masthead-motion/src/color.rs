//! RGBA color values for background and tint animation.

use std::fmt;

use crate::interpolate::Interpolate;

/// An RGBA color token.
///
/// Red, green and blue channels are stored in `[0, 255]` and alpha in
/// `[0, 1]`, matching the CSS `rgba(...)` functional notation the
/// rendering layer ultimately emits. Channels are kept as `f32` so that
/// interpolation between tokens stays smooth; rounding happens only when
/// formatting.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Rgba {
    /// Red channel in `[0, 255]`.
    pub r: f32,
    /// Green channel in `[0, 255]`.
    pub g: f32,
    /// Blue channel in `[0, 255]`.
    pub b: f32,
    /// Alpha channel in `[0, 1]`.
    pub a: f32,
}

impl Rgba {
    /// Create a color from channel values.
    pub const fn new(r: f32, g: f32, b: f32, a: f32) -> Self {
        Self { r, g, b, a }
    }

    /// Fully transparent black, `rgba(0, 0, 0, 0)`.
    pub const TRANSPARENT: Self = Self::new(0.0, 0.0, 0.0, 0.0);

    /// Fully opaque black, `rgba(0, 0, 0, 1)`.
    pub const BLACK: Self = Self::new(0.0, 0.0, 0.0, 1.0);

    /// Fully opaque white, `rgba(255, 255, 255, 1)`.
    pub const WHITE: Self = Self::new(255.0, 255.0, 255.0, 1.0);

    /// Format as a CSS `rgba(r, g, b, a)` string.
    ///
    /// Color channels are rounded to integers; alpha keeps up to three
    /// decimal places with trailing zeros trimmed.
    pub fn css(&self) -> String {
        let mut alpha = format!("{:.3}", self.a.clamp(0.0, 1.0));
        while alpha.contains('.') && (alpha.ends_with('0') || alpha.ends_with('.')) {
            alpha.pop();
        }
        format!(
            "rgba({}, {}, {}, {})",
            self.r.round().clamp(0.0, 255.0) as u8,
            self.g.round().clamp(0.0, 255.0) as u8,
            self.b.round().clamp(0.0, 255.0) as u8,
            alpha
        )
    }
}

impl Interpolate for Rgba {
    #[inline]
    fn lerp(&self, to: &Self, t: f32) -> Self {
        Self {
            r: self.r.lerp(&to.r, t),
            g: self.g.lerp(&to.g, t),
            b: self.b.lerp(&to.b, t),
            a: self.a.lerp(&to.a, t),
        }
    }
}

impl fmt::Display for Rgba {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.css())
    }
}

// ============================================================================
// Tests
// ============================================================================

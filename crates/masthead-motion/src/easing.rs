//! Easing curves for animation timelines.
//!
//! Maps linear progress on the unit interval to eased progress.

use std::fmt;

/// Easing curve applied to a timeline's linear progress.
///
/// The choice of curve changes how motion feels without changing
/// its duration or endpoints:
///
/// - **Linear**: Constant velocity, mechanical feel.
/// - **EaseIn**: Starts slow, accelerates. Good for elements leaving.
/// - **EaseOut**: Starts fast, decelerates. Good for elements arriving.
/// - **EaseInOut**: Slow at both ends. Good for in-place transitions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum Easing {
    /// Identity curve: progress passes through unchanged.
    #[default]
    Linear,

    /// Quadratic ease-in: `t²`.
    EaseIn,

    /// Quadratic ease-out: `t * (2 - t)`.
    EaseOut,

    /// Smoothstep ease-in-out: `t² * (3 - 2t)`.
    EaseInOut,
}

impl Easing {
    /// Apply the curve to linear progress `t`.
    ///
    /// `t` is clamped to `[0, 1]` before evaluation, so callers may pass
    /// raw elapsed/duration ratios without pre-clamping.
    #[inline]
    pub fn apply(&self, t: f32) -> f32 {
        let t = t.clamp(0.0, 1.0);
        match self {
            Easing::Linear => t,
            Easing::EaseIn => t * t,
            Easing::EaseOut => t * (2.0 - t),
            Easing::EaseInOut => t * t * (3.0 - 2.0 * t),
        }
    }

    /// Get the name of this easing curve.
    pub fn name(&self) -> &'static str {
        match self {
            Easing::Linear => "linear",
            Easing::EaseIn => "ease_in",
            Easing::EaseOut => "ease_out",
            Easing::EaseInOut => "ease_in_out",
        }
    }
}

impl fmt::Display for Easing {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

impl std::str::FromStr for Easing {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "linear" => Ok(Easing::Linear),
            "ease_in" | "ease-in" | "easein" => Ok(Easing::EaseIn),
            "ease_out" | "ease-out" | "easeout" => Ok(Easing::EaseOut),
            "ease_in_out" | "ease-in-out" | "easeinout" => Ok(Easing::EaseInOut),
            _ => Err(format!("Unknown easing curve: {}", s)),
        }
    }
}

// ============================================================================
// Tests
// ============================================================================

//! Search overlay open/close controller.

use masthead_motion::{Easing, Tween};
use tracing::debug;

/// The sampled render state of the search affordance on one frame.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct OverlayPose {
    /// Whether the overlay is logically open.
    pub open: bool,
    /// Horizontal scale of the input field, `0.0` (hidden) to `1.0`
    /// (fully revealed), transform origin at the right edge.
    pub input_scale: f32,
    /// Horizontal translation of the trigger icon; `0.0` when closed,
    /// `-icon_travel` when the icon sits in front of the open field.
    pub icon_offset: f32,
}

/// Owner of the search affordance's open/closed state.
///
/// A toggle always flips the flag and retargets two concurrent tweens:
/// the input field's right-origin horizontal scale and the trigger
/// icon's leftward shift. Neither is sequenced after the other, and a
/// toggle arriving mid-flight reverses each tween from its currently
/// sampled value.
#[derive(Debug, Clone)]
pub struct SearchOverlay {
    open: bool,
    input: Tween<f32>,
    icon: Tween<f32>,
    icon_travel: f32,
    duration_ms: f64,
    easing: Easing,
}

impl SearchOverlay {
    /// Create a closed overlay, both animations settled.
    ///
    /// `icon_travel` is how far left the trigger icon shifts when the
    /// field opens; both animations share `duration_ms` and `easing`.
    pub fn new(icon_travel: f32, duration_ms: f64, easing: Easing) -> Self {
        Self {
            open: false,
            input: Tween::settled(0.0),
            icon: Tween::settled(0.0),
            icon_travel,
            duration_ms,
            easing,
        }
    }

    /// Whether the overlay is logically open.
    pub fn is_open(&self) -> bool {
        self.open
    }

    /// Flip the overlay state at `now_ms`; returns the pose the
    /// animations are now heading toward.
    pub fn toggle(&mut self, now_ms: f64) -> OverlayPose {
        self.open = !self.open;
        let (scale_target, icon_target) = if self.open {
            (1.0, -self.icon_travel)
        } else {
            (0.0, 0.0)
        };
        // Rebuilt with the configured duration each time; the settled
        // seed carries none. Starting values are the currently sampled
        // ones, so an interrupting toggle reverses without a jump.
        self.input = Tween::new(
            self.input.sample(now_ms),
            scale_target,
            now_ms,
            self.duration_ms,
            self.easing,
        );
        self.icon = Tween::new(
            self.icon.sample(now_ms),
            icon_target,
            now_ms,
            self.duration_ms,
            self.easing,
        );
        debug!(open = self.open, "search overlay toggled");
        OverlayPose {
            open: self.open,
            input_scale: scale_target,
            icon_offset: icon_target,
        }
    }

    /// Sample the current pose at `now_ms`.
    pub fn pose(&self, now_ms: f64) -> OverlayPose {
        OverlayPose {
            open: self.open,
            input_scale: self.input.sample(now_ms),
            icon_offset: self.icon.sample(now_ms),
        }
    }

    /// Whether both animations have settled at `now_ms`.
    pub fn is_settled(&self, now_ms: f64) -> bool {
        self.input.is_finished(now_ms) && self.icon.is_finished(now_ms)
    }

    /// Freeze both animations at their currently sampled values.
    ///
    /// Used on teardown: interrupted motion stops where it is instead
    /// of continuing toward its target. The open flag is untouched.
    pub fn freeze(&mut self, now_ms: f64) {
        self.input = Tween::settled(self.input.sample(now_ms));
        self.icon = Tween::settled(self.icon.sample(now_ms));
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn overlay() -> SearchOverlay {
        SearchOverlay::new(205.0, 300.0, Easing::Linear)
    }

    #[test]
    fn test_starts_closed_and_hidden() {
        let overlay = overlay();
        let pose = overlay.pose(0.0);
        assert!(!pose.open);
        assert!(pose.input_scale.abs() < 0.0001);
        assert!(pose.icon_offset.abs() < 0.0001);
    }

    #[test]
    fn test_toggle_opens_toward_full_targets() {
        let mut overlay = overlay();
        let targets = overlay.toggle(0.0);
        assert!(targets.open);
        assert!((targets.input_scale - 1.0).abs() < 0.0001);
        assert!((targets.icon_offset + 205.0).abs() < 0.0001);

        // Fully settled after the duration.
        let pose = overlay.pose(300.0);
        assert!((pose.input_scale - 1.0).abs() < 0.0001);
        assert!((pose.icon_offset + 205.0).abs() < 0.0001);
    }

    #[test]
    fn test_double_toggle_returns_closed() {
        let mut overlay = overlay();
        overlay.toggle(0.0);
        let targets = overlay.toggle(400.0);
        assert!(!targets.open);
        let pose = overlay.pose(700.0);
        assert!(pose.input_scale.abs() < 0.0001);
        assert!(pose.icon_offset.abs() < 0.0001);
    }

    #[test]
    fn test_mid_flight_toggle_reverses_from_sampled_values() {
        let mut overlay = overlay();
        overlay.toggle(0.0);
        // Interrupt halfway through the 300ms open.
        overlay.toggle(150.0);
        let at_reversal = overlay.pose(150.0);
        assert!((at_reversal.input_scale - 0.5).abs() < 0.0001, "no jump");
        assert!((at_reversal.icon_offset + 102.5).abs() < 0.0001, "no jump");

        // Reversal completes back at the closed pose.
        let done = overlay.pose(450.0);
        assert!(done.input_scale.abs() < 0.0001);
        assert!(done.icon_offset.abs() < 0.0001);
    }

    #[test]
    fn test_both_animations_run_concurrently() {
        let mut overlay = overlay();
        overlay.toggle(0.0);
        let pose = overlay.pose(100.0);
        // One third of the way through, both tweens have advanced.
        assert!((pose.input_scale - 1.0 / 3.0).abs() < 0.001);
        assert!((pose.icon_offset + 205.0 / 3.0).abs() < 0.1);
    }

    #[test]
    fn test_is_settled() {
        let mut overlay = overlay();
        assert!(overlay.is_settled(0.0), "nothing in flight before a toggle");
        overlay.toggle(0.0);
        assert!(!overlay.is_settled(100.0));
        assert!(overlay.is_settled(300.0));
    }

    #[test]
    fn test_freeze_stops_inflight_motion() {
        let mut overlay = overlay();
        overlay.toggle(0.0);
        overlay.freeze(150.0);
        let frozen = overlay.pose(150.0);
        assert!((frozen.input_scale - 0.5).abs() < 0.0001);
        assert_eq!(overlay.pose(10_000.0), frozen);
        assert!(overlay.is_settled(150.0));
        assert!(frozen.open, "freeze does not change the logical state");
    }
}

//! Header backdrop state machine and brand-mark hover pulse.

use std::fmt;

use masthead_motion::{Cycle, Easing, Rgba, Tween};
use tracing::debug;

use crate::scroll::ScrollZone;
use crate::theme::Theme;

/// Phase of the header backdrop state machine.
///
/// `Top` and `ReturningUp` share the transparent backdrop target; they
/// stay distinct so consumers can tell "never left the top" from "came
/// back up across the threshold" for direction-aware styling.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum NavPhase {
    /// Initial phase; the page has not crossed the scroll threshold.
    #[default]
    Top,

    /// The page is past the threshold; backdrop is heading opaque.
    Scrolled,

    /// The page crossed back above the threshold; backdrop is heading
    /// transparent again.
    ReturningUp,
}

impl NavPhase {
    /// Get the name of this phase.
    pub fn name(&self) -> &'static str {
        match self {
            NavPhase::Top => "top",
            NavPhase::Scrolled => "scrolled",
            NavPhase::ReturningUp => "returning_up",
        }
    }
}

impl fmt::Display for NavPhase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

/// The scroll-reactive backdrop controller.
///
/// Consumes edge-triggered [`ScrollZone`] events and drives one color
/// tween toward the theme token of the current phase. A zone event that
/// causes no phase change leaves the tween untouched; one that does
/// retargets it from the currently interpolated color, so a fast
/// scroll-down/scroll-up never makes the backdrop jump.
#[derive(Debug, Clone)]
pub struct NavBackdrop {
    phase: NavPhase,
    tween: Tween<Rgba>,
    theme: Theme,
    duration_ms: f64,
}

impl NavBackdrop {
    /// Create a backdrop in the `Top` phase, settled on the theme's
    /// transparent token.
    pub fn new(theme: &Theme, duration_ms: f64) -> Self {
        Self {
            phase: NavPhase::Top,
            tween: Tween::settled(theme.backdrop_target(NavPhase::Top)),
            theme: theme.clone(),
            duration_ms,
        }
    }

    /// Current phase of the state machine.
    pub fn phase(&self) -> NavPhase {
        self.phase
    }

    /// The color the backdrop is currently heading toward.
    pub fn target(&self) -> Rgba {
        self.tween.target()
    }

    /// Sample the backdrop color at `now_ms`.
    pub fn color(&self, now_ms: f64) -> Rgba {
        self.tween.sample(now_ms)
    }

    /// Whether the color tween has settled at `now_ms`.
    pub fn is_settled(&self, now_ms: f64) -> bool {
        self.tween.is_finished(now_ms)
    }

    /// Apply one zone event; returns the new phase when a transition
    /// fired, `None` for a redundant signal.
    pub fn on_zone(&mut self, zone: ScrollZone, now_ms: f64) -> Option<NavPhase> {
        let next = match (self.phase, zone) {
            (NavPhase::Top | NavPhase::ReturningUp, ScrollZone::Scrolled) => NavPhase::Scrolled,
            (NavPhase::Scrolled, ScrollZone::Top) => NavPhase::ReturningUp,
            _ => return None,
        };

        debug!(from = %self.phase, to = %next, "backdrop transition");
        self.phase = next;
        // Rebuild rather than retarget: the settled seed carries no
        // duration, so each transition restates the configured fade
        // length while starting from the currently sampled color.
        self.tween = Tween::new(
            self.tween.sample(now_ms),
            self.theme.backdrop_target(next),
            now_ms,
            self.duration_ms,
            Easing::Linear,
        );
        Some(next)
    }

    /// Freeze the backdrop at its currently sampled color.
    ///
    /// Used on teardown: an in-flight fade stops where it is instead of
    /// continuing toward its target.
    pub fn freeze(&mut self, now_ms: f64) {
        self.tween = Tween::settled(self.tween.sample(now_ms));
    }
}

/// The brand-mark hover pulse.
///
/// Pointer-enter starts an unbounded 1 → 0.7 → 1 opacity oscillation;
/// pointer-leave drops the cycle and snaps opacity back to 1 with no
/// fade-out.
#[derive(Debug, Clone, Default)]
pub struct LogoPulse {
    cycle: Option<Cycle<f32>>,
    period_ms: f64,
}

/// Opacity keyframes of one pulse period.
const PULSE_KEYFRAMES: [f32; 3] = [1.0, 0.7, 1.0];

impl LogoPulse {
    /// Create an idle pulse with the given oscillation period.
    pub fn new(period_ms: f64) -> Self {
        Self {
            cycle: None,
            period_ms,
        }
    }

    /// Pointer entered the brand mark; start the loop at `now_ms`.
    ///
    /// Re-entering while already pulsing keeps the running loop.
    pub fn enter(&mut self, now_ms: f64) {
        if self.cycle.is_none() {
            debug!("logo pulse started");
            self.cycle = Some(Cycle::new(PULSE_KEYFRAMES.to_vec(), self.period_ms, now_ms));
        }
    }

    /// Pointer left the brand mark; cancel the loop immediately.
    pub fn leave(&mut self) {
        if self.cycle.take().is_some() {
            debug!("logo pulse cancelled");
        }
    }

    /// Whether the loop is currently running.
    pub fn is_active(&self) -> bool {
        self.cycle.is_some()
    }

    /// Sample the brand-mark opacity at `now_ms`; 1.0 while idle.
    pub fn opacity(&self, now_ms: f64) -> f32 {
        match &self.cycle {
            Some(cycle) => cycle.sample(now_ms),
            None => 1.0,
        }
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn backdrop() -> NavBackdrop {
        NavBackdrop::new(&Theme::default(), 300.0)
    }

    #[test]
    fn test_initial_phase_is_top_and_transparent() {
        let nav = backdrop();
        assert_eq!(nav.phase(), NavPhase::Top);
        assert_eq!(nav.color(0.0), Rgba::TRANSPARENT);
    }

    #[test]
    fn test_scrolled_signal_moves_to_scrolled_with_opaque_target() {
        let mut nav = backdrop();
        assert_eq!(nav.on_zone(ScrollZone::Scrolled, 0.0), Some(NavPhase::Scrolled));
        assert_eq!(nav.target(), Rgba::BLACK);
    }

    #[test]
    fn test_top_signal_moves_to_returning_up_with_clear_target() {
        let mut nav = backdrop();
        nav.on_zone(ScrollZone::Scrolled, 0.0);
        assert_eq!(nav.on_zone(ScrollZone::Top, 500.0), Some(NavPhase::ReturningUp));
        assert_eq!(nav.target(), Rgba::TRANSPARENT);
    }

    #[test]
    fn test_repeated_signals_are_no_ops() {
        let mut nav = backdrop();
        assert_eq!(nav.on_zone(ScrollZone::Top, 0.0), None);
        nav.on_zone(ScrollZone::Scrolled, 0.0);
        assert_eq!(nav.on_zone(ScrollZone::Scrolled, 10.0), None);
        nav.on_zone(ScrollZone::Top, 20.0);
        assert_eq!(nav.on_zone(ScrollZone::Top, 30.0), None);
    }

    #[test]
    fn test_scrolled_from_returning_up() {
        let mut nav = backdrop();
        nav.on_zone(ScrollZone::Scrolled, 0.0);
        nav.on_zone(ScrollZone::Top, 400.0);
        assert_eq!(nav.on_zone(ScrollZone::Scrolled, 800.0), Some(NavPhase::Scrolled));
    }

    #[test]
    fn test_fade_runs_over_the_configured_duration() {
        let mut nav = backdrop();
        nav.on_zone(ScrollZone::Scrolled, 0.0);
        // One millisecond in, the fade has barely started.
        assert!(nav.color(1.0).a < 0.01);
        assert!((nav.color(150.0).a - 0.5).abs() < 0.0001);
        assert!((nav.color(300.0).a - 1.0).abs() < 0.0001);
        assert!(!nav.is_settled(150.0));
        assert!(nav.is_settled(300.0));
    }

    #[test]
    fn test_new_backdrop_is_settled() {
        let nav = backdrop();
        assert!(nav.is_settled(0.0));
    }

    #[test]
    fn test_targets_come_from_the_injected_theme() {
        let mut theme = Theme::default();
        theme.backdrop_opaque = Rgba::new(20.0, 20.0, 20.0, 0.9);
        let mut nav = NavBackdrop::new(&theme, 300.0);
        nav.on_zone(ScrollZone::Scrolled, 0.0);
        assert_eq!(nav.target(), theme.backdrop_opaque);
        nav.on_zone(ScrollZone::Top, 400.0);
        assert_eq!(nav.target(), theme.backdrop_clear);
    }

    #[test]
    fn test_freeze_stops_an_inflight_fade() {
        let mut nav = backdrop();
        nav.on_zone(ScrollZone::Scrolled, 0.0);
        nav.freeze(150.0);
        let frozen = nav.color(150.0);
        assert!((frozen.a - 0.5).abs() < 0.0001);
        assert_eq!(nav.color(10_000.0), frozen);
        assert!(nav.is_settled(150.0));
    }

    #[test]
    fn test_interrupted_fade_continues_from_sampled_color() {
        let mut nav = backdrop();
        nav.on_zone(ScrollZone::Scrolled, 0.0);
        // Reverse halfway through the 300ms fade.
        nav.on_zone(ScrollZone::Top, 150.0);
        let at_reversal = nav.color(150.0);
        assert!((at_reversal.a - 0.5).abs() < 0.0001, "no jump at reversal");
        assert!(nav.color(450.0).a.abs() < 0.0001);
    }

    #[test]
    fn test_pulse_lifecycle() {
        let mut pulse = LogoPulse::new(1000.0);
        assert!(!pulse.is_active());
        assert!((pulse.opacity(0.0) - 1.0).abs() < 0.0001);

        pulse.enter(0.0);
        assert!(pulse.is_active());
        assert!((pulse.opacity(500.0) - 0.7).abs() < 0.0001);
        // Loops indefinitely.
        assert!((pulse.opacity(2500.0) - 0.7).abs() < 0.0001);

        pulse.leave();
        assert!(!pulse.is_active());
        // Snaps back to 1 immediately, no fade-out.
        assert!((pulse.opacity(2501.0) - 1.0).abs() < 0.0001);
    }

    #[test]
    fn test_reenter_keeps_running_loop() {
        let mut pulse = LogoPulse::new(1000.0);
        pulse.enter(0.0);
        pulse.enter(250.0);
        // Phase is still measured from the first enter.
        assert!((pulse.opacity(500.0) - 0.7).abs() < 0.0001);
    }
}

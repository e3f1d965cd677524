//! Retargetable single-value interpolations.

use crate::easing::Easing;
use crate::interpolate::Interpolate;

/// One in-flight interpolation toward a target value.
///
/// A tween is a pure description: it holds its endpoints, its start time
/// on the caller's frame clock, a duration and an easing curve, and
/// [`sample`](Tween::sample) evaluates it for any timestamp. Nothing
/// advances on its own; the caller samples whenever it wants a frame.
///
/// Retargeting replaces the description with one that starts from the
/// currently sampled value, so an interrupted animation reverses (or
/// redirects) smoothly instead of jumping — last request wins, progress
/// is never discarded.
#[derive(Debug, Clone, Copy)]
pub struct Tween<V: Interpolate> {
    from: V,
    to: V,
    start_ms: f64,
    duration_ms: f64,
    easing: Easing,
}

impl<V: Interpolate> Tween<V> {
    /// Create a tween running from `from` to `to`, starting at `start_ms`
    /// and lasting `duration_ms` on the caller's frame clock.
    pub fn new(from: V, to: V, start_ms: f64, duration_ms: f64, easing: Easing) -> Self {
        Self {
            from,
            to,
            start_ms,
            duration_ms,
            easing,
        }
    }

    /// Create a tween that is already settled at `value`.
    ///
    /// Sampling returns `value` at every timestamp; the first retarget
    /// starts motion from it. This is the natural initial state for a
    /// controller that has not yet received a signal.
    pub fn settled(value: V) -> Self {
        Self::new(value, value, 0.0, 0.0, Easing::Linear)
    }

    /// The value this tween is heading toward.
    pub fn target(&self) -> V {
        self.to
    }

    /// Sample the tween at `now_ms`.
    ///
    /// Before the start time this returns the starting value; after the
    /// end it returns the target. Zero-duration tweens snap to the target.
    pub fn sample(&self, now_ms: f64) -> V {
        if self.duration_ms <= 0.0 {
            return self.to;
        }
        let t = ((now_ms - self.start_ms) / self.duration_ms) as f32;
        self.from.lerp(&self.to, self.easing.apply(t))
    }

    /// Whether the tween has reached its target at `now_ms`.
    pub fn is_finished(&self, now_ms: f64) -> bool {
        now_ms - self.start_ms >= self.duration_ms
    }

    /// Redirect the tween toward a new target, starting at `now_ms` from
    /// the currently sampled value.
    ///
    /// Duration and easing are kept; only the endpoints and start time
    /// change. This is the cancellation model: an in-flight animation is
    /// never queued behind, it is replaced.
    pub fn retarget(&mut self, to: V, now_ms: f64) {
        self.from = self.sample(now_ms);
        self.to = to;
        self.start_ms = now_ms;
    }
}

// ============================================================================
// Tests
// ============================================================================

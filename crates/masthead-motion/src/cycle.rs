//! Unbounded looping keyframe sequences.

use crate::interpolate::Interpolate;

/// A looping keyframe animation with no end.
///
/// The keyframes are spread evenly across one period and interpolated
/// piecewise-linearly; sampling wraps around, so the cycle repeats
/// indefinitely. There is no stop operation — dropping the cycle is
/// cancellation, and the owner decides what value to show afterwards.
#[derive(Debug, Clone)]
pub struct Cycle<V: Interpolate> {
    keyframes: Vec<V>,
    period_ms: f64,
    start_ms: f64,
}

impl<V: Interpolate> Cycle<V> {
    /// Create a cycle over `keyframes`, one full pass per `period_ms`,
    /// starting at `start_ms` on the caller's frame clock.
    ///
    /// At least two keyframes are required for motion; a single keyframe
    /// samples as a constant.
    ///
    /// # Panics
    ///
    /// Panics if `keyframes` is empty; a cycle has no value to sample
    /// without at least one.
    pub fn new(keyframes: Vec<V>, period_ms: f64, start_ms: f64) -> Self {
        assert!(!keyframes.is_empty(), "cycle needs at least one keyframe");
        Self {
            keyframes,
            period_ms,
            start_ms,
        }
    }

    /// Sample the cycle at `now_ms`, wrapping past the period.
    ///
    /// Timestamps before the start time sample as phase zero.
    pub fn sample(&self, now_ms: f64) -> V {
        let first = self.keyframes[0];
        if self.keyframes.len() < 2 || self.period_ms <= 0.0 {
            return first;
        }

        let elapsed = (now_ms - self.start_ms).max(0.0);
        let phase = ((elapsed % self.period_ms) / self.period_ms) as f32;

        // Position within the keyframe segments.
        let segments = (self.keyframes.len() - 1) as f32;
        let scaled = phase * segments;
        let index = (scaled.floor() as usize).min(self.keyframes.len() - 2);
        let local_t = scaled - index as f32;

        self.keyframes[index].lerp(&self.keyframes[index + 1], local_t)
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn pulse() -> Cycle<f32> {
        Cycle::new(vec![1.0, 0.7, 1.0], 1000.0, 0.0)
    }

    #[test]
    fn test_pulse_shape_over_one_period() {
        let cycle = pulse();
        assert!((cycle.sample(0.0) - 1.0).abs() < 0.0001);
        assert!((cycle.sample(250.0) - 0.85).abs() < 0.0001);
        assert!((cycle.sample(500.0) - 0.7).abs() < 0.0001);
        assert!((cycle.sample(750.0) - 0.85).abs() < 0.0001);
    }

    #[test]
    fn test_wraps_past_period() {
        let cycle = pulse();
        // Same phase, one and seven periods later.
        assert!((cycle.sample(1500.0) - 0.7).abs() < 0.0001);
        assert!((cycle.sample(7250.0) - 0.85).abs() < 0.0001);
    }

    #[test]
    fn test_before_start_is_phase_zero() {
        let cycle = Cycle::new(vec![1.0f32, 0.7, 1.0], 1000.0, 5000.0);
        assert!((cycle.sample(0.0) - 1.0).abs() < 0.0001);
    }

    #[test]
    #[should_panic(expected = "at least one keyframe")]
    fn test_empty_keyframes_are_rejected() {
        Cycle::<f32>::new(Vec::new(), 1000.0, 0.0);
    }

    #[test]
    fn test_single_keyframe_is_constant() {
        let cycle = Cycle::new(vec![0.4f32], 1000.0, 0.0);
        assert!((cycle.sample(123.0) - 0.4).abs() < 0.0001);
        assert!((cycle.sample(9999.0) - 0.4).abs() < 0.0001);
    }
}

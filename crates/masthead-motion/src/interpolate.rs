//! The value seam between timelines and the values they animate.

/// A value that can be linearly interpolated.
///
/// Timelines are generic over this trait; implementing it for a new
/// value type is all that is needed to tween it.
pub trait Interpolate: Copy {
    /// Interpolate from `self` toward `to` by eased progress `t` in `[0, 1]`.
    ///
    /// `t = 0` must return `self` and `t = 1` must return `to`.
    fn lerp(&self, to: &Self, t: f32) -> Self;
}

impl Interpolate for f32 {
    #[inline]
    fn lerp(&self, to: &Self, t: f32) -> Self {
        self + (to - self) * t
    }
}

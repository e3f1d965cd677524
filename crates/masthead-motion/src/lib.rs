//! # masthead-motion
//!
//! Frame-clock animation timelines for the masthead header core:
//! retargetable tweens, looping keyframe cycles, easing curves, and
//! RGBA color interpolation.
//!
//! ## Features
//!
//! - **Pure Rust**: No native dependencies, no runtime, compiles to wasm
//! - **Caller-driven clock**: Every operation takes an explicit `now_ms`
//!   timestamp; nothing ticks on its own, so tests use synthetic time
//! - **Interruption continuity**: Retargeting a tween restarts it from the
//!   currently sampled value, never discarding progress
//! - **Generic values**: Anything implementing [`Interpolate`] can be
//!   animated; `f32` and [`Rgba`] are provided
//!
//! ## Quick Start
//!
//! ```rust
//! use masthead_motion::{Easing, Rgba, Tween};
//!
//! // Fade a background from transparent to opaque over 300ms.
//! let mut backdrop = Tween::new(Rgba::TRANSPARENT, Rgba::BLACK, 0.0, 300.0, Easing::Linear);
//!
//! // Sample on any frame.
//! let halfway = backdrop.sample(150.0);
//! assert_eq!(halfway.css(), "rgba(0, 0, 0, 0.5)");
//!
//! // Reverse mid-flight: motion continues from the sampled value.
//! backdrop.retarget(Rgba::TRANSPARENT, 150.0);
//! assert_eq!(backdrop.sample(150.0).css(), "rgba(0, 0, 0, 0.5)");
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod color;
pub mod cycle;
pub mod easing;
pub mod interpolate;
pub mod tween;

// Re-exports for convenience
pub use color::Rgba;
pub use cycle::Cycle;
pub use easing::Easing;
pub use interpolate::Interpolate;
pub use tween::Tween;

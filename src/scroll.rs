//! Scroll-offset classification.
//!
//! Turns the viewport's continuous scroll offset into a discrete zone
//! and deduplicates repeated classifications into edge-triggered events.

use std::fmt;

use tracing::debug;

/// Discrete classification of a scroll offset.
///
/// The header only cares whether the page is at the top or has been
/// scrolled past the threshold; everything in between is noise.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum ScrollZone {
    /// Offset is below the threshold; the page is at (or near) the top.
    #[default]
    Top,

    /// Offset is at or past the threshold.
    Scrolled,
}

impl ScrollZone {
    /// Classify a raw scroll offset against a threshold.
    #[inline]
    pub fn classify(offset: f64, threshold: f64) -> Self {
        if offset < threshold {
            ScrollZone::Top
        } else {
            ScrollZone::Scrolled
        }
    }

    /// Get the name of this zone.
    pub fn name(&self) -> &'static str {
        match self {
            ScrollZone::Top => "top",
            ScrollZone::Scrolled => "scrolled",
        }
    }
}

impl fmt::Display for ScrollZone {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

/// Edge-triggered observer of the scroll-offset stream.
///
/// [`observe`](ScrollTracker::observe) classifies every offset but only
/// reports a zone when it differs from the last reported one, so the
/// consumer never restarts an animation for a same-zone scroll tick.
/// The first observation always reports.
#[derive(Debug, Clone)]
pub struct ScrollTracker {
    threshold: f64,
    last: Option<ScrollZone>,
}

impl ScrollTracker {
    /// Create a tracker with the given zone threshold.
    pub fn new(threshold: f64) -> Self {
        Self {
            threshold,
            last: None,
        }
    }

    /// Feed one scroll offset; returns the zone only when it changed.
    pub fn observe(&mut self, offset: f64) -> Option<ScrollZone> {
        let zone = ScrollZone::classify(offset, self.threshold);
        if self.last == Some(zone) {
            return None;
        }
        debug!(offset, zone = %zone, "scroll zone changed");
        self.last = Some(zone);
        Some(zone)
    }

    /// The last zone reported, if any offset has been observed yet.
    pub fn current(&self) -> Option<ScrollZone> {
        self.last
    }
}

// ============================================================================
// Tests
// ============================================================================

//! Theme tokens injected by the rendering layer.

use masthead_motion::Rgba;
use serde::{Deserialize, Serialize};

use crate::nav::NavPhase;

/// Color tokens the header animates between.
///
/// The core treats these as opaque values supplied by the host
/// application's theme provider; it never computes or hard-codes a
/// color itself. The default palette is the streaming-site look:
/// brand red, a lighter/darker white pair for nav text, and an opaque
/// versus fully transparent black backdrop.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Theme {
    /// Brand accent (logo fill, active-item indicator).
    #[serde(default = "default_brand")]
    pub brand: Rgba,

    /// Resting nav text color.
    #[serde(default = "default_text")]
    pub text: Rgba,

    /// Hovered nav text color.
    #[serde(default = "default_text_hover")]
    pub text_hover: Rgba,

    /// Backdrop when the page has been scrolled.
    #[serde(default = "default_backdrop_opaque")]
    pub backdrop_opaque: Rgba,

    /// Backdrop at the top of the page.
    #[serde(default = "default_backdrop_clear")]
    pub backdrop_clear: Rgba,
}

fn default_brand() -> Rgba {
    // #e51013
    Rgba::new(229.0, 16.0, 19.0, 1.0)
}

fn default_text() -> Rgba {
    // #e5e5e5
    Rgba::new(229.0, 229.0, 229.0, 1.0)
}

fn default_text_hover() -> Rgba {
    Rgba::WHITE
}

fn default_backdrop_opaque() -> Rgba {
    Rgba::BLACK
}

fn default_backdrop_clear() -> Rgba {
    Rgba::TRANSPARENT
}

impl Default for Theme {
    fn default() -> Self {
        Self {
            brand: default_brand(),
            text: default_text(),
            text_hover: default_text_hover(),
            backdrop_opaque: default_backdrop_opaque(),
            backdrop_clear: default_backdrop_clear(),
        }
    }
}

impl Theme {
    /// Resolve the backdrop color a nav phase animates toward.
    ///
    /// `Top` and `ReturningUp` share the transparent token; only
    /// `Scrolled` maps to the opaque one.
    pub fn backdrop_target(&self, phase: NavPhase) -> Rgba {
        match phase {
            NavPhase::Scrolled => self.backdrop_opaque,
            NavPhase::Top | NavPhase::ReturningUp => self.backdrop_clear,
        }
    }
}

// ============================================================================
// Tests
// ============================================================================

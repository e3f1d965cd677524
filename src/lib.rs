//! # masthead
//!
//! Headless interaction core for a scroll-reactive site navigation
//! header: the backdrop state machine, the search overlay toggle, the
//! route-to-highlight resolver, and the search query validator.
//!
//! The crate renders nothing and owns no event loop. A thin shell (any
//! UI layer — the repository ships a Leptos demo under `ui/`) feeds it
//! discrete signals (scroll offsets, pointer enter/leave, toggle
//! clicks, form submits) tagged with a frame-clock timestamp, and
//! samples the animation accessors on whatever frames it draws. All
//! animation targets are resolved against an injected [`Theme`]; the
//! core never hard-codes a color.
//!
//! ## Quick Start
//!
//! ```rust
//! use masthead::{HeaderConfig, HeaderController, NavItem, Theme};
//!
//! fn main() -> Result<(), masthead::Error> {
//!     let mut header = HeaderController::new(
//!         HeaderConfig::default(),
//!         Theme::default(),
//!         NavItem::defaults(),
//!     )?;
//!
//!     // The page scrolls past the threshold: the backdrop starts
//!     // fading toward the opaque token.
//!     header.on_scroll(150.0, 0.0);
//!     assert_eq!(header.backdrop_color(300.0).css(), "rgba(0, 0, 0, 1)");
//!
//!     // A submitted keyword is validated before anything navigates.
//!     let command = header.submit_search("batman")?;
//!     assert_eq!(command.path(), "/search?keyword=batman");
//!
//!     // Unmount: freeze animations, ignore later signals.
//!     header.detach(300.0);
//!     Ok(())
//! }
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod config;
pub mod error;
pub mod header;
pub mod nav;
pub mod overlay;
pub mod route;
pub mod scroll;
pub mod search;
pub mod theme;

// Re-exports for convenience
pub use config::HeaderConfig;
pub use error::{Error, Result};
pub use header::HeaderController;
pub use nav::{LogoPulse, NavBackdrop, NavPhase};
pub use overlay::{OverlayPose, SearchOverlay};
pub use route::{is_active, Indicator, NavItem, RouteTable};
pub use scroll::{ScrollTracker, ScrollZone};
pub use search::{validate, NavigateCommand, SearchQuery};
pub use theme::Theme;

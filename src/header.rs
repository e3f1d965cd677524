//! The header facade the shell talks to.

use masthead_motion::Rgba;
use tracing::{debug, info};

use crate::config::HeaderConfig;
use crate::error::Result;
use crate::nav::{LogoPulse, NavBackdrop, NavPhase};
use crate::overlay::{OverlayPose, SearchOverlay};
use crate::route::{self, NavItem, RouteTable};
use crate::scroll::ScrollTracker;
use crate::search::{self, NavigateCommand};
use crate::theme::Theme;

/// Aggregate controller for one mounted header.
///
/// Owns one instance of every interaction component plus the injected
/// theme and configuration. All mutating methods take the frame-clock
/// timestamp `now_ms` and return immediately; animation is a matter of
/// sampling the accessors on later frames. Signals are applied in the
/// order they arrive, and a later signal for the same component
/// replaces the visual effect of an earlier one still in flight.
///
/// # Teardown
///
/// The shell must call [`detach`](HeaderController::detach) when the
/// header unmounts (alongside removing its scroll listener): it cancels
/// the hover pulse, freezes in-flight animation at the given timestamp
/// and makes every subsequent signal a no-op. A
/// controller left attached past unmount is a dangling subscription —
/// a correctness bug, not a style issue.
#[derive(Debug, Clone)]
pub struct HeaderController {
    config: HeaderConfig,
    theme: Theme,
    tracker: ScrollTracker,
    backdrop: NavBackdrop,
    pulse: LogoPulse,
    overlay: SearchOverlay,
    routes: RouteTable,
    attached: bool,
}

impl HeaderController {
    /// Build a controller from configuration, theme tokens and the
    /// navigation item list.
    ///
    /// Fails if the configuration is invalid or two items share a path.
    pub fn new(config: HeaderConfig, theme: Theme, items: Vec<NavItem>) -> Result<Self> {
        config.validate()?;
        let routes = RouteTable::new(items)?;
        info!(
            scroll_threshold = config.scroll_threshold,
            items = routes.items().len(),
            "header controller created"
        );
        Ok(Self {
            tracker: ScrollTracker::new(config.scroll_threshold),
            backdrop: NavBackdrop::new(&theme, config.backdrop_ms),
            pulse: LogoPulse::new(config.pulse_period_ms),
            overlay: SearchOverlay::new(
                config.icon_travel,
                config.overlay_ms,
                config.overlay_easing,
            ),
            routes,
            config,
            theme,
            attached: true,
        })
    }

    /// Feed one scroll offset at `now_ms`.
    ///
    /// Classifies the offset, and when the zone actually changed, runs
    /// the backdrop state machine; returns the new phase when a
    /// transition fired.
    pub fn on_scroll(&mut self, offset: f64, now_ms: f64) -> Option<NavPhase> {
        if !self.attached {
            return None;
        }
        let zone = self.tracker.observe(offset)?;
        self.backdrop.on_zone(zone, now_ms)
    }

    /// Flip the search overlay at `now_ms`; returns the pose the
    /// overlay animations are heading toward.
    ///
    /// When detached, the state does not change and the current pose is
    /// returned instead.
    pub fn toggle_search(&mut self, now_ms: f64) -> OverlayPose {
        if !self.attached {
            return self.overlay.pose(now_ms);
        }
        self.overlay.toggle(now_ms)
    }

    /// Validate a submitted keyword and produce the navigate command.
    ///
    /// On rejection the submit simply has no effect; the error is the
    /// caller's signal not to dispatch.
    pub fn submit_search(&self, keyword: &str) -> Result<NavigateCommand> {
        let query = search::validate(keyword, self.config.min_keyword_len)?;
        debug!(keyword = query.keyword(), "search dispatched");
        Ok(query.navigate_command())
    }

    /// Whether the item at `item_path` is active for `current_path`.
    pub fn is_item_active(&self, item_path: &str, current_path: &str) -> bool {
        route::is_active(item_path, current_path)
    }

    /// The item active for `current_path`, if any.
    pub fn active_item(&self, current_path: &str) -> Option<&NavItem> {
        self.routes.active_item(current_path)
    }

    /// Pointer entered the brand mark at `now_ms`.
    pub fn logo_enter(&mut self, now_ms: f64) {
        if self.attached {
            self.pulse.enter(now_ms);
        }
    }

    /// Pointer left the brand mark.
    pub fn logo_leave(&mut self) {
        self.pulse.leave();
    }

    /// Sample the backdrop color at `now_ms`.
    pub fn backdrop_color(&self, now_ms: f64) -> Rgba {
        self.backdrop.color(now_ms)
    }

    /// Sample the brand-mark opacity at `now_ms`.
    pub fn logo_opacity(&self, now_ms: f64) -> f32 {
        self.pulse.opacity(now_ms)
    }

    /// Sample the search overlay pose at `now_ms`.
    pub fn overlay_pose(&self, now_ms: f64) -> OverlayPose {
        self.overlay.pose(now_ms)
    }

    /// Current phase of the backdrop state machine.
    pub fn phase(&self) -> NavPhase {
        self.backdrop.phase()
    }

    /// Whether the search overlay is logically open.
    pub fn is_search_open(&self) -> bool {
        self.overlay.is_open()
    }

    /// Whether any animation is still in flight at `now_ms`.
    ///
    /// The shell's frame loop keeps sampling while this is true (the
    /// hover pulse never settles on its own).
    pub fn is_animating(&self, now_ms: f64) -> bool {
        self.pulse.is_active()
            || !self.backdrop.is_settled(now_ms)
            || !self.overlay.is_settled(now_ms)
    }

    /// The navigation items and shared indicator slot.
    pub fn routes(&self) -> &RouteTable {
        &self.routes
    }

    /// The injected theme tokens.
    pub fn theme(&self) -> &Theme {
        &self.theme
    }

    /// The active configuration.
    pub fn config(&self) -> &HeaderConfig {
        &self.config
    }

    /// Whether the controller is still attached to its signal sources.
    pub fn is_attached(&self) -> bool {
        self.attached
    }

    /// Release the controller on unmount.
    ///
    /// Cancels the hover pulse, freezes any in-flight backdrop or
    /// overlay animation at its value as of `now_ms`, and turns every
    /// subsequent signal into a no-op. Sampling accessors keep
    /// returning the frozen values. Idempotent.
    pub fn detach(&mut self, now_ms: f64) {
        if !self.attached {
            return;
        }
        self.attached = false;
        self.pulse.leave();
        self.backdrop.freeze(now_ms);
        self.overlay.freeze(now_ms);
        info!("header controller detached");
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn controller() -> HeaderController {
        HeaderController::new(HeaderConfig::default(), Theme::default(), NavItem::defaults())
            .unwrap()
    }

    #[test]
    fn test_duplicate_items_fail_construction() {
        let items = vec![NavItem::new("Home", ""), NavItem::new("Start", "")];
        assert!(HeaderController::new(HeaderConfig::default(), Theme::default(), items).is_err());
    }

    #[test]
    fn test_invalid_config_fails_construction() {
        let config = HeaderConfig::default().with_backdrop_ms(0.0);
        assert!(HeaderController::new(config, Theme::default(), NavItem::defaults()).is_err());
    }

    #[test]
    fn test_scroll_ticks_in_same_zone_do_not_transition() {
        let mut header = controller();
        assert_eq!(header.on_scroll(0.0, 0.0), None);
        assert_eq!(header.on_scroll(150.0, 16.0), Some(NavPhase::Scrolled));
        assert_eq!(header.on_scroll(200.0, 32.0), None);
        assert_eq!(header.on_scroll(10.0, 48.0), Some(NavPhase::ReturningUp));
    }

    #[test]
    fn test_detach_makes_signals_no_ops() {
        let mut header = controller();
        header.logo_enter(0.0);
        header.detach(5.0);

        assert!(!header.is_attached());
        assert!(!header.pulse.is_active(), "detach cancels the pulse");
        assert_eq!(header.on_scroll(500.0, 10.0), None);
        assert_eq!(header.phase(), NavPhase::Top);

        let pose = header.toggle_search(20.0);
        assert!(!pose.open, "toggle ignored after detach");
        assert!(!header.is_search_open());

        header.logo_enter(30.0);
        assert!((header.logo_opacity(400.0) - 1.0).abs() < 0.0001);
    }

    #[test]
    fn test_detach_is_idempotent() {
        let mut header = controller();
        header.detach(0.0);
        header.detach(100.0);
        assert!(!header.is_attached());
    }

    #[test]
    fn test_detach_freezes_inflight_animations() {
        let mut header = controller();
        header.on_scroll(150.0, 0.0);
        header.toggle_search(0.0);
        // Unmount halfway through both 300ms animations.
        header.detach(150.0);

        let frozen_alpha = header.backdrop_color(150.0).a;
        assert!((frozen_alpha - 0.5).abs() < 0.0001);
        assert!(
            (header.backdrop_color(300.0).a - frozen_alpha).abs() < 0.0001,
            "backdrop keeps interpolating after detach"
        );

        let frozen_pose = header.overlay_pose(150.0);
        assert!((frozen_pose.input_scale - 0.5).abs() < 0.0001);
        assert_eq!(header.overlay_pose(10_000.0), frozen_pose);

        assert!(!header.is_animating(150.0));
    }

    #[test]
    fn test_is_animating_reflects_inflight_work() {
        let mut header = controller();
        assert!(!header.is_animating(0.0));
        header.toggle_search(0.0);
        assert!(header.is_animating(100.0));
        assert!(!header.is_animating(300.0));
        header.logo_enter(400.0);
        assert!(header.is_animating(10_000.0), "pulse never settles");
    }
}

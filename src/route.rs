//! Route-to-highlight resolution for the navigation items.

use tracing::debug;

use crate::error::{Error, Result};

/// One entry in the header's navigation list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NavItem {
    /// Label shown to the user.
    pub label: String,
    /// Route path the item links to, without a leading slash
    /// (the root route is the empty string).
    pub path: String,
}

impl NavItem {
    /// Create a navigation item.
    pub fn new(label: impl Into<String>, path: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            path: path.into(),
        }
    }

    /// The default item list: Home at the root and Tv Shows at `tv`.
    pub fn defaults() -> Vec<NavItem> {
        vec![NavItem::new("Home", ""), NavItem::new("Tv Shows", "tv")]
    }
}

/// Decide whether a navigation item is active for the current route.
///
/// Pure equality after stripping one leading slash from each side, so
/// `""` matches `"/"` and `"tv"` matches `"/tv"`. No prefix matching:
/// an unrelated path such as `search` activates nothing.
pub fn is_active(item_path: &str, current_path: &str) -> bool {
    normalize(item_path) == normalize(current_path)
}

fn normalize(path: &str) -> &str {
    path.strip_prefix('/').unwrap_or(path)
}

/// The shared active-item indicator.
///
/// A single logical entity with a stable identity key. The rendering
/// layer keys its indicator element on [`key`](Indicator::key) so that
/// when the active item changes, the element is repositioned (an
/// animated move) rather than destroyed and recreated under the new
/// item.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Indicator {
    key: String,
}

impl Default for Indicator {
    fn default() -> Self {
        Self {
            key: "indicator".to_string(),
        }
    }
}

impl Indicator {
    /// The stable identity key of the shared indicator element.
    pub fn key(&self) -> &str {
        &self.key
    }
}

/// The header's navigation items plus the shared indicator slot.
///
/// Construction rejects duplicate paths, which is what makes the
/// "at most one item is active" invariant hold by construction rather
/// than by runtime checking.
#[derive(Debug, Clone)]
pub struct RouteTable {
    items: Vec<NavItem>,
    indicator: Indicator,
}

impl RouteTable {
    /// Build a route table, rejecting duplicate item paths.
    pub fn new(items: Vec<NavItem>) -> Result<Self> {
        for (i, item) in items.iter().enumerate() {
            if items[..i]
                .iter()
                .any(|earlier| normalize(&earlier.path) == normalize(&item.path))
            {
                return Err(Error::DuplicateRoute(item.path.clone()));
            }
        }
        debug!(items = items.len(), "route table built");
        Ok(Self {
            items,
            indicator: Indicator::default(),
        })
    }

    /// The navigation items, in declaration order.
    pub fn items(&self) -> &[NavItem] {
        &self.items
    }

    /// The shared indicator slot.
    pub fn indicator(&self) -> &Indicator {
        &self.indicator
    }

    /// The item active for `current_path`, if any.
    ///
    /// At most one item can match because paths are unique.
    pub fn active_item(&self, current_path: &str) -> Option<&NavItem> {
        self.items
            .iter()
            .find(|item| is_active(&item.path, current_path))
    }
}

// ============================================================================
// Tests
// ============================================================================

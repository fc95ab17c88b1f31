//! Tab identifiers and the events the cache reports to the UI thread.

use std::fmt;

/// Unique identifier for a tab, supplied by the tab-management layer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct TabId(pub u64);

impl TabId {
    /// Create a new tab ID.
    pub fn new(id: u64) -> Self {
        Self(id)
    }
}

impl fmt::Display for TabId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Tab({})", self.0)
    }
}

/// Events sent from the view cache to whoever listens on the UI side.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CacheEvent {
    /// The factory built a new view
    ViewCreated { total: usize },
    /// A view was bound to a tab
    ViewBound { tab_id: TabId, source: BindSource },
    /// A tab's view became the active one
    ViewActivated { tab_id: TabId },
    /// The previously active view was hidden and suspended. `tab_id` is
    /// `None` when that tab had already been released.
    ViewSuspended { tab_id: Option<TabId> },
    /// A tab gave its view back to the free pool
    ViewReleased { tab_id: TabId, pooled: usize },
}

/// Where a bound view came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BindSource {
    /// Popped off the front of the free pool
    Pool,
    /// Built by the factory on a pool miss
    Factory,
}

impl fmt::Display for BindSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Pool => write!(f, "pool"),
            Self::Factory => write!(f, "factory"),
        }
    }
}

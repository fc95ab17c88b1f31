//! Pool statistics.

/// Counters describing how well the pool is recycling views.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct PoolStats {
    /// Views built by the factory, eager ones included
    pub created: usize,
    /// Tabs served from the free pool
    pub pool_hits: usize,
    /// Tabs that needed a new view
    pub pool_misses: usize,
    /// Lookups that found the tab already bound
    pub rebinds: usize,
    /// Active view switches
    pub activations: usize,
    /// Views returned to the pool
    pub releases: usize,
}

impl PoolStats {
    /// Fraction of new bindings served without building a view.
    pub fn hit_rate(&self) -> f64 {
        let total = self.pool_hits + self.pool_misses;
        if total == 0 {
            0.0
        } else {
            self.pool_hits as f64 / total as f64
        }
    }
}

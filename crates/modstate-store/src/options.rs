/// Behaviour switches for a [`Store`](crate::Store).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StoreOptions {
    /// Keep computed getter values until the state changes.
    ///
    /// When disabled every lookup runs the getter body again. Results are the
    /// same either way; only reference identity between reads is lost.
    pub cache_getters: bool,
}

impl Default for StoreOptions {
    fn default() -> Self {
        Self {
            cache_getters: true,
        }
    }
}

impl StoreOptions {
    /// Options with getter caching turned off.
    pub fn uncached() -> Self {
        Self {
            cache_getters: false,
        }
    }

    #[must_use]
    pub fn with_cache_getters(mut self, enable: bool) -> Self {
        self.cache_getters = enable;
        self
    }
}

//! The store: root state, registered getters and their cache.
//!
//! # Caching
//!
//! The root state carries a version counter that every write bumps. A cached
//! getter value is tagged with the version it was computed at and is only
//! served while that version is current. Writes also drop the whole cache, so
//! stale values are released as soon as the state changes.
//!
//! # Locking
//!
//! The root state sits behind a `parking_lot::RwLock`. Lookups take a
//! *recursive* read lock because a getter body reads other getters through
//! the same store while the outer lookup still holds its guard. The cache
//! mutex is never held while a getter body runs. Getter bodies must not write
//! to the store they are computed by.

use std::any::TypeId;
use std::collections::HashMap;
use std::sync::Arc;

use modstate_model::{
    AccessError, CachedValue, GetterKind, GetterSource, ModuleName, QualifiedKey, StateSource,
};
use parking_lot::{Mutex, RwLock};
use tracing::{debug, trace, warn};

use crate::options::StoreOptions;
use crate::registry::{Registry, StoreBuilder};

struct StateCell<R> {
    root: R,
    version: u64,
}

struct CacheEntry {
    version: u64,
    value: CachedValue,
}

/// A namespaced state store with cached getters.
pub struct Store<R> {
    state: RwLock<StateCell<R>>,
    registry: Registry<R>,
    cache: Mutex<HashMap<QualifiedKey, CacheEntry>>,
    options: StoreOptions,
}

impl<R: Send + Sync + 'static> Store<R> {
    pub fn builder(root: R) -> StoreBuilder<R> {
        StoreBuilder::new(root)
    }

    pub(crate) fn from_parts(root: R, registry: Registry<R>, options: StoreOptions) -> Self {
        Self {
            state: RwLock::new(StateCell { root, version: 0 }),
            registry,
            cache: Mutex::new(HashMap::new()),
            options,
        }
    }

    pub fn options(&self) -> &StoreOptions {
        &self.options
    }

    /// Number of writes applied since the store was built.
    pub fn version(&self) -> u64 {
        self.state.read_recursive().version
    }

    /// Runs `f` against the current root state.
    pub fn with_root<T>(&self, f: impl FnOnce(&R) -> T) -> T {
        let cell = self.state.read_recursive();
        f(&cell.root)
    }

    /// Swaps in a whole new root state.
    pub fn replace_state(&self, root: R) {
        self.mutate(|current| *current = root);
    }

    /// Applies `f` to the root state and invalidates every cached getter.
    ///
    /// The version is bumped and the cache dropped before `f` runs, so a
    /// panic inside `f` cannot leave a half-written state behind cached values.
    pub fn mutate<T>(&self, f: impl FnOnce(&mut R) -> T) -> T {
        let mut cell = self.state.write();
        cell.version += 1;
        let dropped = {
            let mut cache = self.cache.lock();
            let len = cache.len();
            cache.clear();
            len
        };
        debug!(version = cell.version, dropped, "state changed");
        f(&mut cell.root)
    }

    /// Every registered key with its getter kind, ordered by module then getter.
    pub fn registered_keys(&self) -> Vec<(QualifiedKey, GetterKind)> {
        self.registry.keys()
    }

    /// Registered module names, in order.
    pub fn module_names(&self) -> Vec<&ModuleName> {
        self.registry.module_names().collect()
    }

    /// True when some getter is registered under `key`, whatever its type.
    pub fn contains(&self, key: &QualifiedKey) -> bool {
        self.registry.contains_key(key)
    }

    /// Number of getter values currently cached.
    pub fn cached_len(&self) -> usize {
        self.cache.lock().len()
    }

    fn cached(&self, key: &QualifiedKey, version: u64) -> Option<CachedValue> {
        let cache = self.cache.lock();
        cache
            .get(key)
            .filter(|entry| entry.version == version)
            .map(|entry| Arc::clone(&entry.value))
    }

    fn unresolved(&self, key: &QualifiedKey) -> AccessError {
        if self.registry.contains_key(key) {
            warn!(key = %key, "getter registered under a different type");
        } else {
            warn!(key = %key, "getter not registered");
        }
        AccessError::unresolved(key.clone())
    }
}

impl<R: Send + Sync + 'static> GetterSource for Store<R> {
    fn resolve(&self, key: &QualifiedKey, getter: TypeId) -> Result<GetterKind, AccessError> {
        self.registry
            .entry(key, getter)
            .map(|entry| entry.kind)
            .ok_or_else(|| self.unresolved(key))
    }

    fn lookup(&self, key: &QualifiedKey, getter: TypeId) -> Result<CachedValue, AccessError> {
        let Some(entry) = self.registry.entry(key, getter) else {
            return Err(self.unresolved(key));
        };
        let cell = self.state.read_recursive();
        if self.options.cache_getters
            && let Some(value) = self.cached(key, cell.version)
        {
            trace!(key = %key, version = cell.version, "getter cache hit");
            return Ok(value);
        }
        trace!(key = %key, version = cell.version, "computing getter");
        let value = (entry.compute)(&cell.root, self)?;
        if self.options.cache_getters {
            self.cache.lock().insert(
                key.clone(),
                CacheEntry {
                    version: cell.version,
                    value: Arc::clone(&value),
                },
            );
        }
        Ok(value)
    }
}

impl<R: Send + Sync + 'static> StateSource<R> for Store<R> {
    fn with_root<T>(&self, f: impl FnOnce(&R) -> T) -> T {
        Store::with_root(self, f)
    }
}

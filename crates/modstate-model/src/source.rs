//! The read interface a store exposes to getters and accessors.

use std::any::{Any, TypeId};
use std::sync::Arc;

use crate::error::AccessError;
use crate::key::QualifiedKey;
use crate::module::{Getter, GetterValue};
use crate::shape::GetterKind;

/// A getter value as held in a store's cache.
pub type CachedValue = Arc<dyn Any + Send + Sync>;

/// Lookup of getter values by qualified key.
///
/// `getter` is the [`TypeId`] of the getter type the caller expects behind
/// `key`. A store must report [`AccessError::UnresolvedKey`] when the key is
/// unknown or is registered for a different getter type.
pub trait GetterSource {
    /// Checks that `key` is registered for `getter` without computing it.
    fn resolve(&self, key: &QualifiedKey, getter: TypeId) -> Result<GetterKind, AccessError>;

    /// Returns the current value of the getter, recomputing it if the state
    /// changed since it was last cached.
    fn lookup(&self, key: &QualifiedKey, getter: TypeId) -> Result<CachedValue, AccessError>;
}

/// Read access to the root state behind a [`GetterSource`].
pub trait StateSource<R>: GetterSource {
    fn with_root<T>(&self, f: impl FnOnce(&R) -> T) -> T;
}

/// Typed lookup of getter `G`.
///
/// The returned `Arc` is the store's cached value itself, so two reads with no
/// state change in between are pointer-equal.
pub fn fetch<G: Getter>(
    source: &(impl GetterSource + ?Sized),
) -> Result<Arc<GetterValue<G>>, AccessError> {
    let key = QualifiedKey::of::<G>();
    let value = source.lookup(&key, TypeId::of::<G>())?;
    value
        .downcast::<GetterValue<G>>()
        .map_err(|_| AccessError::unresolved(key))
}

//! Bound getter accessors.
//!
//! [`bind`] checks once that a store knows the getter, then hands back an
//! [`Accessor`] that reads the getter's current value on every call. The
//! accessor keeps nothing but the key and a reference to the store; it never
//! caches, copies or transforms the value the store returns.

use std::any::TypeId;
use std::fmt;
use std::marker::PhantomData;
use std::sync::Arc;

use modstate_model::{
    AccessError, Getter, GetterKind, GetterShape, GetterSource, GetterValue, Parametric,
    QualifiedKey,
};
use tracing::trace;

/// Binds getter `G` to `source`.
///
/// The key is derived from `G`'s module and getter names, never from a
/// caller-supplied path.
///
/// # Errors
///
/// Returns [`AccessError::UnresolvedKey`] when `source` has no getter of type
/// `G` registered under that key.
pub fn bind<G: Getter>(source: &dyn GetterSource) -> Result<Accessor<'_, G>, AccessError> {
    let key = QualifiedKey::of::<G>();
    let kind = source.resolve(&key, TypeId::of::<G>())?;
    debug_assert_eq!(kind, <G::Shape as GetterShape>::KIND);
    trace!(key = %key, kind = %kind, "bound getter accessor");
    Ok(Accessor {
        source,
        key,
        _getter: PhantomData,
    })
}

/// A live, typed read of one getter in one store.
///
/// [`get`](Self::get) returns `Arc<T>` for a [`Direct<T>`](modstate_model::Direct)
/// getter and `Arc<GetterFn<A, T>>` for a [`Parametric<A, T>`] getter. Each
/// call looks the key up again, so a state change between two calls is seen
/// by the second one.
pub struct Accessor<'s, G> {
    source: &'s dyn GetterSource,
    key: QualifiedKey,
    _getter: PhantomData<fn() -> G>,
}

impl<G: Getter> Accessor<'_, G> {
    pub fn key(&self) -> &QualifiedKey {
        &self.key
    }

    pub fn kind(&self) -> GetterKind {
        <G::Shape as GetterShape>::KIND
    }

    /// Reads the getter's current value from the store.
    ///
    /// # Errors
    ///
    /// Returns [`AccessError::UnresolvedKey`] if the store no longer resolves
    /// the key.
    pub fn get(&self) -> Result<Arc<GetterValue<G>>, AccessError> {
        trace!(key = %self.key, "reading getter");
        let value = self.source.lookup(&self.key, TypeId::of::<G>())?;
        value
            .downcast::<GetterValue<G>>()
            .map_err(|_| AccessError::unresolved(self.key.clone()))
    }
}

impl<G, A, T> Accessor<'_, G>
where
    G: Getter<Shape = Parametric<A, T>>,
    A: 'static,
    T: 'static,
{
    /// Reads the getter function and applies it to `arg`.
    ///
    /// Same as `self.get()?.call(arg)`. The argument goes straight to the
    /// getter's function.
    pub fn call(&self, arg: A) -> Result<T, AccessError> {
        let f = self.get()?;
        Ok(f.call(arg))
    }
}

impl<G> Clone for Accessor<'_, G> {
    fn clone(&self) -> Self {
        Self {
            source: self.source,
            key: self.key.clone(),
            _getter: PhantomData,
        }
    }
}

impl<G> fmt::Debug for Accessor<'_, G> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Accessor")
            .field("key", &self.key)
            .field("getter", &std::any::type_name::<G>())
            .finish()
    }
}

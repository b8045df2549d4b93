use std::fmt;
use std::marker::PhantomData;

use modstate_model::{Module, StateSource};

/// Read access to module `M`'s slice of the root state.
pub struct StateAccessor<M> {
    _module: PhantomData<fn() -> M>,
}

impl<M: Module> StateAccessor<M> {
    pub const fn new() -> Self {
        Self {
            _module: PhantomData,
        }
    }

    /// Runs `f` against the module's current state.
    ///
    /// The store's read lock is held while `f` runs, so `f` must not write to
    /// the same store.
    pub fn with<S, T>(&self, source: &S, f: impl FnOnce(&M::State) -> T) -> T
    where
        S: StateSource<M::Root>,
    {
        source.with_root(|root| f(M::state(root)))
    }

    /// Clones the module's current state out of the store.
    pub fn get<S>(&self, source: &S) -> M::State
    where
        S: StateSource<M::Root>,
        M::State: Clone,
    {
        self.with(source, Clone::clone)
    }
}

impl<M: Module> Default for StateAccessor<M> {
    fn default() -> Self {
        Self::new()
    }
}

impl<M> Clone for StateAccessor<M> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<M> Copy for StateAccessor<M> {}

impl<M> fmt::Debug for StateAccessor<M> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("StateAccessor")
            .field(&std::any::type_name::<M>())
            .finish()
    }
}

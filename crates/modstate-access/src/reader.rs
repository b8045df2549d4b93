//! Unbound readers and per-module accessor factories.

use std::fmt;
use std::marker::PhantomData;
use std::sync::Arc;

use modstate_model::{AccessError, Getter, GetterSource, GetterValue, Module, QualifiedKey};

use crate::accessor::{Accessor, bind};
use crate::state::StateAccessor;

/// A getter reference that is not tied to any store yet.
///
/// Readers are zero-sized and `Copy`, so they can be built once and kept in
/// a `const` or a struct field; the store is supplied on each read.
pub struct Reader<G> {
    _getter: PhantomData<fn() -> G>,
}

impl<G: Getter> Reader<G> {
    pub const fn new() -> Self {
        Self {
            _getter: PhantomData,
        }
    }

    pub fn key(&self) -> QualifiedKey {
        QualifiedKey::of::<G>()
    }

    /// Binds and reads in one step.
    pub fn read(&self, source: &dyn GetterSource) -> Result<Arc<GetterValue<G>>, AccessError> {
        bind::<G>(source)?.get()
    }

    pub fn bind<'s>(&self, source: &'s dyn GetterSource) -> Result<Accessor<'s, G>, AccessError> {
        bind::<G>(source)
    }
}

impl<G: Getter> Default for Reader<G> {
    fn default() -> Self {
        Self::new()
    }
}

impl<G> Clone for Reader<G> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<G> Copy for Reader<G> {}

impl<G> fmt::Debug for Reader<G> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("Reader")
            .field(&std::any::type_name::<G>())
            .finish()
    }
}

/// Accessor factory scoped to module `M`.
///
/// Only getters declared on `M` can be read through it, so a getter from
/// another module is a compile error rather than a runtime miss.
pub struct ModuleAccessors<M> {
    _module: PhantomData<fn() -> M>,
}

/// Returns the accessor factory for module `M`.
pub const fn accessors<M: Module>() -> ModuleAccessors<M> {
    ModuleAccessors {
        _module: PhantomData,
    }
}

impl<M: Module> ModuleAccessors<M> {
    pub fn name(&self) -> &'static str {
        M::NAME
    }

    pub fn read<G: Getter<Module = M>>(&self) -> Reader<G> {
        Reader::new()
    }

    pub fn bind<'s, G: Getter<Module = M>>(
        &self,
        source: &'s dyn GetterSource,
    ) -> Result<Accessor<'s, G>, AccessError> {
        bind::<G>(source)
    }

    pub fn state(&self) -> StateAccessor<M> {
        StateAccessor::new()
    }
}

impl<M> Clone for ModuleAccessors<M> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<M> Copy for ModuleAccessors<M> {}

impl<M> fmt::Debug for ModuleAccessors<M> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("ModuleAccessors")
            .field(&std::any::type_name::<M>())
            .finish()
    }
}

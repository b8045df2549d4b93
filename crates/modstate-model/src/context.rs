//! What a getter body can see while it computes.

use std::sync::Arc;

use crate::error::AccessError;
use crate::module::{Getter, GetterValue, Module};
use crate::source::{GetterSource, fetch};

/// Read-only view handed to [`Getter::compute`].
///
/// Mirrors the four inputs of a getter: local state, local getters, root
/// state and root getters. Getter reads go back through the store, so they
/// hit its cache like any other lookup.
pub struct GetterContext<'a, M: Module> {
    root: &'a M::Root,
    source: &'a dyn GetterSource,
}

impl<'a, M: Module> GetterContext<'a, M> {
    pub fn new(root: &'a M::Root, source: &'a dyn GetterSource) -> Self {
        Self { root, source }
    }

    /// The module's own state slice.
    pub fn state(&self) -> &'a M::State {
        M::state(self.root)
    }

    /// The whole root state, including other modules.
    pub fn root_state(&self) -> &'a M::Root {
        self.root
    }

    /// Reads another getter of the same module.
    pub fn getter<G>(&self) -> Result<Arc<GetterValue<G>>, AccessError>
    where
        G: Getter<Module = M>,
    {
        fetch::<G>(self.source)
    }

    /// Reads a getter of any module that shares this module's root state.
    pub fn root_getter<G>(&self) -> Result<Arc<GetterValue<G>>, AccessError>
    where
        G: Getter,
        G::Module: Module<Root = M::Root>,
    {
        fetch::<G>(self.source)
    }
}

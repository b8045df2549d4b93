//! Module and getter registration.
//!
//! Getters are registered by type. Each registration erases the getter into a
//! compute closure over the root state, remembering the getter's [`TypeId`]
//! so that lookups can refuse a key requested for a different getter type.

use std::any::{TypeId, type_name};
use std::collections::BTreeMap;
use std::marker::PhantomData;
use std::sync::Arc;

use modstate_model::{
    AccessError, CachedValue, Getter, GetterContext, GetterKind, GetterName, GetterShape,
    GetterSource, Module, ModuleName, QualifiedKey,
};
use tracing::debug;

use crate::error::StoreError;
use crate::options::StoreOptions;
use crate::store::Store;

type ComputeFn<R> =
    Box<dyn Fn(&R, &dyn GetterSource) -> Result<CachedValue, AccessError> + Send + Sync>;

pub(crate) struct GetterEntry<R> {
    pub(crate) getter_type: TypeId,
    pub(crate) type_name: &'static str,
    pub(crate) kind: GetterKind,
    pub(crate) compute: ComputeFn<R>,
}

impl<R: 'static> GetterEntry<R> {
    fn of<G>() -> Self
    where
        G: Getter,
        G::Module: Module<Root = R>,
    {
        Self {
            getter_type: TypeId::of::<G>(),
            type_name: type_name::<G>(),
            kind: <G::Shape as GetterShape>::KIND,
            compute: Box::new(|root: &R, source: &dyn GetterSource| {
                let cx = GetterContext::<G::Module>::new(root, source);
                let value = G::compute(&cx)?;
                Ok(Arc::new(value) as CachedValue)
            }),
        }
    }
}

pub(crate) struct ModuleEntry<R> {
    pub(crate) getters: BTreeMap<GetterName, GetterEntry<R>>,
}

pub(crate) struct Registry<R> {
    modules: BTreeMap<ModuleName, ModuleEntry<R>>,
}

impl<R: 'static> Registry<R> {
    fn new() -> Self {
        Self {
            modules: BTreeMap::new(),
        }
    }

    /// Finds the entry for `key`, provided it was registered for `getter_type`.
    pub(crate) fn entry(&self, key: &QualifiedKey, getter_type: TypeId) -> Option<&GetterEntry<R>> {
        self.modules
            .get(key.module())?
            .getters
            .get(key.getter())
            .filter(|entry| entry.getter_type == getter_type)
    }

    pub(crate) fn contains_key(&self, key: &QualifiedKey) -> bool {
        self.modules
            .get(key.module())
            .is_some_and(|module| module.getters.contains_key(key.getter()))
    }

    pub(crate) fn keys(&self) -> Vec<(QualifiedKey, GetterKind)> {
        self.modules
            .iter()
            .flat_map(|(module, entry)| {
                entry.getters.iter().map(move |(getter, getter_entry)| {
                    (
                        QualifiedKey::new(module.clone(), getter.clone()),
                        getter_entry.kind,
                    )
                })
            })
            .collect()
    }

    pub(crate) fn module_names(&self) -> impl Iterator<Item = &ModuleName> + '_ {
        self.modules.keys()
    }

    fn add_module<M: Module<Root = R>>(&mut self) -> Result<ModuleName, StoreError> {
        let name = ModuleName::new(M::NAME)?;
        if self.modules.contains_key(&name) {
            return Err(StoreError::DuplicateModule { name });
        }
        debug!(module = %name, module_type = type_name::<M>(), "registered module");
        self.modules.insert(
            name.clone(),
            ModuleEntry {
                getters: BTreeMap::new(),
            },
        );
        Ok(name)
    }

    fn add_getter<G>(&mut self) -> Result<(), StoreError>
    where
        G: Getter,
        G::Module: Module<Root = R>,
    {
        let module = ModuleName::new(<G::Module as Module>::NAME)?;
        let getter = GetterName::new(G::NAME)?;
        let Some(entry) = self.modules.get_mut(&module) else {
            return Err(StoreError::UnknownModule { module, getter });
        };
        if entry.getters.contains_key(&getter) {
            return Err(StoreError::DuplicateGetter {
                key: QualifiedKey::new(module, getter),
            });
        }
        let getter_entry = GetterEntry::of::<G>();
        debug!(
            module = %module,
            getter = %getter,
            kind = %getter_entry.kind,
            getter_type = getter_entry.type_name,
            "registered getter"
        );
        entry.getters.insert(getter, getter_entry);
        Ok(())
    }
}

/// Assembles a [`Store`] from an initial root state and its modules.
///
/// ```ignore
/// let mut builder = StoreBuilder::new(root);
/// builder
///     .module::<Basket>()?
///     .getter::<ProductNames>()?
///     .getter::<ItemsByStatus>()?;
/// let store = builder.build();
/// ```
pub struct StoreBuilder<R> {
    root: R,
    options: StoreOptions,
    registry: Registry<R>,
}

impl<R: Send + Sync + 'static> StoreBuilder<R> {
    pub fn new(root: R) -> Self {
        Self {
            root,
            options: StoreOptions::default(),
            registry: Registry::new(),
        }
    }

    #[must_use]
    pub fn with_options(mut self, options: StoreOptions) -> Self {
        self.options = options;
        self
    }

    /// Registers module `M` and returns a scope for adding its getters.
    ///
    /// # Errors
    ///
    /// Fails when the module name is invalid or already registered.
    pub fn module<M: Module<Root = R>>(&mut self) -> Result<ModuleScope<'_, R, M>, StoreError> {
        let name = self.registry.add_module::<M>()?;
        Ok(ModuleScope {
            registry: &mut self.registry,
            name,
            _module: PhantomData,
        })
    }

    /// Registers a getter of an already registered module.
    ///
    /// # Errors
    ///
    /// Fails when the getter's module is not registered, the getter name is
    /// invalid, or the module already has a getter of that name.
    pub fn getter<G>(&mut self) -> Result<&mut Self, StoreError>
    where
        G: Getter,
        G::Module: Module<Root = R>,
    {
        self.registry.add_getter::<G>()?;
        Ok(self)
    }

    pub fn build(self) -> Store<R> {
        Store::from_parts(self.root, self.registry, self.options)
    }
}

/// Getter registration scoped to one module.
///
/// Only getters declared on module `M` are accepted, which the compiler
/// checks through the `Getter<Module = M>` bound.
pub struct ModuleScope<'b, R, M> {
    registry: &'b mut Registry<R>,
    name: ModuleName,
    _module: PhantomData<fn() -> M>,
}

impl<R: 'static, M: Module<Root = R>> ModuleScope<'_, R, M> {
    /// Registers getter `G` on this module.
    ///
    /// # Errors
    ///
    /// Fails when the getter name is invalid or already taken in the module.
    pub fn getter<G: Getter<Module = M>>(&mut self) -> Result<&mut Self, StoreError> {
        self.registry.add_getter::<G>()?;
        Ok(self)
    }

    pub fn name(&self) -> &ModuleName {
        &self.name
    }
}

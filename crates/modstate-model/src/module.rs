use crate::context::GetterContext;
use crate::error::AccessError;
use crate::shape::GetterShape;

/// A named slice of a root state type.
///
/// Module names are unique among the modules of one store and must be valid
/// [`ModuleName`](crate::ModuleName)s.
pub trait Module: 'static {
    /// The root state the module lives in.
    type Root: Send + Sync + 'static;
    /// The module's own slice of the root state.
    type State: Send + Sync + 'static;

    const NAME: &'static str;

    /// Projects the module's slice out of the root state.
    fn state(root: &Self::Root) -> &Self::State;
}

/// A pure, cached computation owned by a module.
///
/// The getter type itself is the key: its module, name and shape are fixed
/// at compile time, and stores register and look getters up by type.
///
/// # Errors
///
/// `compute` only fails when reading another getter through the context
/// fails to resolve.
pub trait Getter: 'static {
    type Module: Module;
    type Shape: GetterShape;

    const NAME: &'static str;

    fn compute(cx: &GetterContext<'_, Self::Module>) -> Result<GetterValue<Self>, AccessError>;
}

/// The value a store caches for getter `G`.
pub type GetterValue<G> = <<G as Getter>::Shape as GetterShape>::Value;

/// The root state type getter `G` reads from.
pub type RootOf<G> = <<G as Getter>::Module as Module>::Root;

//! In-process namespaced state store with cached getters.
//!
//! The store owns a root state value of type `R`, a registry of modules and
//! getters declared with the [`modstate_model`] traits, and a cache of getter
//! values. It implements [`GetterSource`](modstate_model::GetterSource), which
//! is all the typed accessor layer needs.
//!
//! ```ignore
//! let mut builder = Store::builder(root);
//! builder.module::<System>()?;
//! builder
//!     .module::<Basket>()?
//!     .getter::<ProductNames>()?
//!     .getter::<LimitedItems>()?;
//! let store = builder.build();
//!
//! let names = modstate_model::fetch::<ProductNames>(&store)?;
//! store.mutate(|root| root.system.max_allowed_items = 2);
//! ```

#![deny(unsafe_code)]

mod error;
mod options;
mod registry;
mod store;

pub use error::StoreError;
pub use options::StoreOptions;
pub use registry::{ModuleScope, StoreBuilder};
pub use store::Store;

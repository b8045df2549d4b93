//! Type-level vocabulary shared by the modstate store and its accessors.
//!
//! A store is organised into modules. Each module owns a slice of the root
//! state and a set of getters: pure, cached computations over that state.
//! This crate describes those pieces as Rust types so that a getter's module,
//! name and result shape are all known at compile time:
//!
//! - [`Module`]: a named slice of a root state type.
//! - [`Getter`]: a computation owned by a module, with a declared [`GetterShape`]
//!   of either [`Direct`] (returns a value) or [`Parametric`] (returns a
//!   [`GetterFn`] that takes an argument).
//! - [`QualifiedKey`]: the `module/getter` pair a store resolves lookups by.
//! - [`GetterSource`]: the single read interface a store exposes.
//!
//! # Example
//!
//! ```
//! use modstate_model::{AccessError, Direct, Getter, GetterContext, Module, QualifiedKey};
//!
//! struct Root {
//!     counter: Counter,
//! }
//!
//! struct Counter {
//!     count: u32,
//! }
//!
//! struct CounterModule;
//!
//! impl Module for CounterModule {
//!     type Root = Root;
//!     type State = Counter;
//!     const NAME: &'static str = "counter";
//!
//!     fn state(root: &Root) -> &Counter {
//!         &root.counter
//!     }
//! }
//!
//! struct Doubled;
//!
//! impl Getter for Doubled {
//!     type Module = CounterModule;
//!     type Shape = Direct<u32>;
//!     const NAME: &'static str = "doubled";
//!
//!     fn compute(cx: &GetterContext<'_, CounterModule>) -> Result<u32, AccessError> {
//!         Ok(cx.state().count * 2)
//!     }
//! }
//!
//! assert_eq!(QualifiedKey::of::<Doubled>().path(), "counter/doubled");
//! ```

#![deny(unsafe_code)]

pub mod context;
pub mod error;
pub mod ids;
pub mod key;
pub mod module;
pub mod shape;
pub mod source;

pub use context::GetterContext;
pub use error::{AccessError, ModelError};
pub use ids::{GetterName, KEY_SEPARATOR, ModuleName};
pub use key::QualifiedKey;
pub use module::{Getter, GetterValue, Module, RootOf};
pub use shape::{Direct, GetterFn, GetterKind, GetterShape, Parametric};
pub use source::{CachedValue, GetterSource, StateSource, fetch};

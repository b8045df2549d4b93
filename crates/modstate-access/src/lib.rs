//! Typed getter accessors for a modstate store.
//!
//! Reading a getter by a `"module/getter"` string gives up the getter's
//! result type and lets typos through until runtime. The accessors here take
//! the getter as a type instead: the key is derived from the getter's module
//! and name constants, and the value comes back as the getter's declared
//! result type.
//!
//! ```ignore
//! use modstate_access::{accessors, bind};
//!
//! let names = bind::<ProductNames>(&store)?;
//! assert_eq!(*names.get()?, ["Apple", "Orange"]);
//!
//! let by_status = accessors::<Basket>().read::<ItemsByStatus>();
//! let selected = by_status.read(&store)?.call(true);
//! ```
//!
//! Accessors hold no values of their own. Every `get` asks the store again,
//! and the store decides whether to serve a cached value or recompute.

#![deny(unsafe_code)]

mod accessor;
mod reader;
mod state;

pub use accessor::{Accessor, bind};
pub use reader::{ModuleAccessors, Reader, accessors};
pub use state::StateAccessor;

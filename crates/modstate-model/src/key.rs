//! Qualified getter keys.
//!
//! A key is always built from its two structural parts, never parsed from a
//! joined path string. The joined form exists for display and logging only.

use std::fmt;

use crate::ids::{GetterName, KEY_SEPARATOR, ModuleName};
use crate::module::{Getter, Module};

/// The `(module, getter)` pair that identifies one getter in a store.
#[derive(
    Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, serde::Serialize, serde::Deserialize,
)]
pub struct QualifiedKey {
    module: ModuleName,
    getter: GetterName,
}

impl QualifiedKey {
    pub fn new(module: ModuleName, getter: GetterName) -> Self {
        Self { module, getter }
    }

    /// The key a getter type declares through its module and name constants.
    pub fn of<G: Getter>() -> Self {
        Self {
            module: ModuleName::from_static(<G::Module as Module>::NAME),
            getter: GetterName::from_static(G::NAME),
        }
    }

    pub fn module(&self) -> &ModuleName {
        &self.module
    }

    pub fn getter(&self) -> &GetterName {
        &self.getter
    }

    /// The `module/getter` path understood by store lookups.
    pub fn path(&self) -> String {
        let mut path =
            String::with_capacity(self.module.as_str().len() + self.getter.as_str().len() + 1);
        path.push_str(self.module.as_str());
        path.push(KEY_SEPARATOR);
        path.push_str(self.getter.as_str());
        path
    }
}

impl fmt::Display for QualifiedKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}{}", self.module, KEY_SEPARATOR, self.getter)
    }
}

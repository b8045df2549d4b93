use std::fmt;

use crate::ModelError;

/// Separator between the module and getter segments of a key path.
pub const KEY_SEPARATOR: char = '/';

#[derive(
    Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, serde::Serialize, serde::Deserialize,
)]
#[serde(try_from = "String", into = "String")]
pub struct ModuleName(String);

impl ModuleName {
    pub fn new(value: impl Into<String>) -> Result<Self, ModelError> {
        let value = value.into();
        match segment_problem(&value) {
            Some(reason) => Err(ModelError::InvalidModuleName {
                name: value,
                reason,
            }),
            None => Ok(Self(value)),
        }
    }

    /// Builds a name from a type-level constant without validation.
    ///
    /// Stores validate names when modules are registered, so an invalid
    /// constant can only ever produce a key that fails to resolve.
    pub(crate) fn from_static(value: &'static str) -> Self {
        Self(value.to_string())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl TryFrom<String> for ModuleName {
    type Error = ModelError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<ModuleName> for String {
    fn from(name: ModuleName) -> Self {
        name.0
    }
}

impl fmt::Display for ModuleName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

#[derive(
    Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, serde::Serialize, serde::Deserialize,
)]
#[serde(try_from = "String", into = "String")]
pub struct GetterName(String);

impl GetterName {
    pub fn new(value: impl Into<String>) -> Result<Self, ModelError> {
        let value = value.into();
        match segment_problem(&value) {
            Some(reason) => Err(ModelError::InvalidGetterName {
                name: value,
                reason,
            }),
            None => Ok(Self(value)),
        }
    }

    pub(crate) fn from_static(value: &'static str) -> Self {
        Self(value.to_string())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl TryFrom<String> for GetterName {
    type Error = ModelError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<GetterName> for String {
    fn from(name: GetterName) -> Self {
        name.0
    }
}

impl fmt::Display for GetterName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

fn segment_problem(value: &str) -> Option<&'static str> {
    if value.is_empty() {
        Some("name must not be empty")
    } else if value.contains(KEY_SEPARATOR) {
        Some("name must not contain '/'")
    } else if value.trim() != value {
        Some("name must not have surrounding whitespace")
    } else {
        None
    }
}

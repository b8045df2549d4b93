use thiserror::Error;

use crate::key::QualifiedKey;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ModelError {
    #[error("invalid module name {name:?}: {reason}")]
    InvalidModuleName { name: String, reason: &'static str },
    #[error("invalid getter name {name:?}: {reason}")]
    InvalidGetterName { name: String, reason: &'static str },
}

/// Failure to read a getter through a store.
///
/// A key that does not resolve is a broken contract between whoever built the
/// store and whoever reads it. Callers should treat it as fatal rather than
/// retry.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AccessError {
    /// The module or getter is not registered for the requested getter type.
    #[error("unresolved getter key: {key}")]
    UnresolvedKey { key: QualifiedKey },
}

impl AccessError {
    pub fn unresolved(key: QualifiedKey) -> Self {
        Self::UnresolvedKey { key }
    }

    /// The key that failed to resolve.
    pub fn key(&self) -> &QualifiedKey {
        match self {
            Self::UnresolvedKey { key } => key,
        }
    }
}

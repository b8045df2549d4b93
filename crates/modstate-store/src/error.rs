use modstate_model::{GetterName, ModelError, ModuleName, QualifiedKey};

/// Errors raised while assembling a store.
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error(transparent)]
    InvalidName(#[from] ModelError),

    #[error("duplicate module: {name}")]
    DuplicateModule { name: ModuleName },

    #[error("duplicate getter: {key}")]
    DuplicateGetter { key: QualifiedKey },

    #[error("getter {getter} belongs to unregistered module {module}")]
    UnknownModule {
        module: ModuleName,
        getter: GetterName,
    },
}

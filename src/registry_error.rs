use std::error::Error as StdError;

use thiserror::Error;

/// Boxed constructor failure carried by [`RegistryError::Construction`].
pub type BoxError = Box<dyn StdError + Send + Sync + 'static>;

#[derive(Debug, Error)]
pub enum RegistryError {
    #[error("Failed to acquire registry lock")]
    RegistryLock,

    #[error("Type mismatch in registry for type: {type_name}")]
    TypeMismatch { type_name: &'static str },

    #[error("Type not found in registry: {type_name}")]
    TypeNotFound { type_name: &'static str },

    /// The constructor of the first instance failed. Nothing was recorded,
    /// so the next request for the same type constructs again.
    #[error("Failed to construct singleton {type_name}: {source}")]
    Construction {
        type_name: &'static str,
        #[source]
        source: BoxError,
    },
}

impl RegistryError {
    pub fn is_construction(&self) -> bool {
        matches!(self, RegistryError::Construction { .. })
    }
}

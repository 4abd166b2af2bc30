//! Error types for resource handlers and providers.

use kite_schema::SchemaError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ProviderError {
    #[error("schema error: {0}")]
    Schema(#[from] SchemaError),

    #[error("cannot resolve the managed resource type of handler for {handler}; pass it explicitly")]
    UnresolvedGenericType { handler: String },

    #[error("schema '{name}' already registered for {existing}, rejected {incoming}")]
    DuplicateHandlerRegistration {
        name: String,
        existing: String,
        incoming: String,
    },

    #[error("property '{property}' of '{resource}' is cloud-managed and cannot be set")]
    ImmutableProperty { resource: String, property: String },

    #[error("resource not found: {0}")]
    NotFound(String),

    #[error("invalid provider config: {0}")]
    Config(#[from] toml::de::Error),

    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    #[error("invalid log filter: {0}")]
    Logging(String),

    #[error("a global log subscriber is already installed: {0}")]
    LoggingAlreadyInitialized(String),

    /// Failure raised by a concrete handler's own backend.
    #[error(transparent)]
    Handler(#[from] anyhow::Error),
}

/// Result type for provider operations.
pub type ProviderResult<T> = Result<T, ProviderError>;

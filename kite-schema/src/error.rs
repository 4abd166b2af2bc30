//! Error types for schema derivation.

use thiserror::Error;

/// Failures raised while turning a resource declaration into a [`Schema`](crate::Schema).
///
/// All of these are construction-time errors: extraction is all-or-nothing.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SchemaError {
    /// The resource type has no type-name marker.
    #[error("type name not declared on resource type: {resource}")]
    MissingTypeAnnotation { resource: String },

    /// A declared field has no property marker.
    #[error("field '{field}' of resource type '{resource}' is not declared as a property")]
    MissingPropertyAnnotation { resource: String, field: String },

    /// Neither the name override nor the field name yields a usable property name.
    #[error("resource type '{resource}' declares a property with an empty name")]
    EmptyPropertyName { resource: String },
}

/// Result type for schema operations.
pub type SchemaResult<T> = Result<T, SchemaError>;

//! Resource declarations and schema derivation for Kite providers.
//!
//! Defines the metadata every provider shares:
//! - [`TypeDeclaration`] / [`FieldDeclaration`] / [`PropertyOptions`]: the
//!   static declaration table of a resource type (type name, property and
//!   cloud-managed markers)
//! - [`Resource`]: implemented by every declared resource type, usually via [`kite_resource!`]
//! - [`Property`] and [`PropertyKind`]: one property's full metadata
//! - [`Schema`]: a resource type's derived metadata, rendered as schema DSL
//!   text through its `Display` impl
//!
//! Schemas are derived, never declared by hand: a declaration either yields a
//! complete schema or a [`SchemaError`] naming what is missing.

mod declaration;
mod error;
mod macros;
mod property;
mod render;
mod schema;

pub use declaration::{
    FieldDeclaration, ManagedType, PropertyOptions, Resource, ResourceType, TypeDeclaration,
};
pub use error::{SchemaError, SchemaResult};
pub use property::{Property, PropertyKind, type_token};
pub use render::{CLOUD_DECORATOR, IMPORTABLE_COMMENT, schema_text};
pub use schema::{Schema, schema_name};

// Used by `kite_resource!` expansions.
pub use serde_json;

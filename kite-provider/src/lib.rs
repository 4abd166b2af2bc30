//! Resource handler framework for Kite providers.
//!
//! - [`ResourceHandler`]: the CRUD contract the plugin host dispatches to
//! - [`HandlerBase`]: per-type schema, immutability index and type lookup,
//!   built once when a handler is constructed
//! - [`Provider`]: aggregates the handlers a provider ships and rejects
//!   duplicate schema names
//! - [`Plugin`]: lifecycle hooks
//!
//! Schema derivation lives in [`kite_schema`], re-exported here.

mod base;
mod config;
mod error;
mod handler;
pub mod logging;
mod plugin;
mod provider;
mod registry;

pub use base::HandlerBase;
pub use config::ProviderConfig;
pub use error::{ProviderError, ProviderResult};
pub use handler::{HandlerResult, ResourceHandler, SchemaAware};
pub use plugin::{Plugin, PluginContext, RuntimeMode};
pub use provider::Provider;
pub use registry::TypeRegistry;

pub use kite_schema;
pub use kite_schema::ManagedType;

//! Schema name to resource type lookup.

use crate::error::{ProviderError, ProviderResult};
use kite_schema::ResourceType;
use std::collections::HashMap;

/// Maps schema names to the resource types registered under them.
///
/// A convenience for import/export and documentation tooling; the schema
/// itself stays authoritative.
#[derive(Debug, Clone, Default)]
pub struct TypeRegistry {
    types: HashMap<String, ResourceType>,
    /// Names in registration order.
    names: Vec<String>,
}

impl TypeRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers `resource_type` under `name`. A name registers once; a
    /// second attempt fails and leaves the first entry in place.
    pub fn register(&mut self, name: &str, resource_type: ResourceType) -> ProviderResult<()> {
        if let Some(existing) = self.types.get(name) {
            return Err(ProviderError::DuplicateHandlerRegistration {
                name: name.to_string(),
                existing: existing.rust_name().to_string(),
                incoming: resource_type.rust_name().to_string(),
            });
        }
        self.types.insert(name.to_string(), resource_type);
        self.names.push(name.to_string());
        Ok(())
    }

    pub fn lookup(&self, name: &str) -> Option<ResourceType> {
        self.types.get(name).copied()
    }

    /// Reverse lookup: the name `resource_type` was registered under.
    pub fn name_of(&self, resource_type: ResourceType) -> Option<&str> {
        self.names
            .iter()
            .find(|name| self.types.get(name.as_str()) == Some(&resource_type))
            .map(String::as_str)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.types.contains_key(name)
    }

    /// Registered names, oldest first.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.names.iter().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.names.len()
    }

    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }
}

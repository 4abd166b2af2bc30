//! Per-type state shared by every resource handler.
//!
//! A [`HandlerBase`] is built once, before the handler is shared, and is
//! read-only afterwards: the schema, the immutable-property index and the
//! type registry are all assembled in the constructor.

use crate::error::{ProviderError, ProviderResult};
use crate::registry::TypeRegistry;
use kite_schema::{ManagedType, Resource, ResourceType, Schema, schema_name, schema_text};
use std::any;
use std::collections::HashSet;
use std::marker::PhantomData;
use tracing::debug;

/// Schema, immutability index and type lookup for handlers of `T`.
pub struct HandlerBase<T> {
    managed_type: ResourceType,
    /// `None` when schema derivation was skipped.
    schema: Option<Schema>,
    registry: TypeRegistry,
    /// Names of output properties. Reverse index over the schema so immutability
    /// checks never re-derive it.
    immutable_properties: HashSet<String>,
    _resource: PhantomData<fn() -> T>,
}

impl<T: ManagedType> HandlerBase<T> {
    /// Resolves the managed type from `T` itself.
    pub fn inferred() -> ProviderResult<Self> {
        let managed_type = T::resource_type().ok_or_else(|| ProviderError::UnresolvedGenericType {
            handler: any::type_name::<T>().to_string(),
        })?;
        Self::build(managed_type)
    }
}

impl<T> HandlerBase<T> {
    /// Uses `managed_type` as given, for handlers whose type cannot be inferred.
    pub fn explicit(managed_type: ResourceType) -> ProviderResult<Self> {
        Self::build(managed_type)
    }

    /// Uses `managed_type` as given and skips schema derivation, for handlers
    /// whose schema comes from an external source.
    pub fn external(managed_type: ResourceType) -> Self {
        debug!(resource_type = %managed_type, "Resource handler initialized without schema");
        Self {
            managed_type,
            schema: None,
            registry: TypeRegistry::new(),
            immutable_properties: HashSet::new(),
            _resource: PhantomData,
        }
    }

    fn build(managed_type: ResourceType) -> ProviderResult<Self> {
        let schema = Schema::from_type(managed_type)?;
        let immutable_properties = schema.outputs().map(|p| p.name().to_string()).collect();

        let mut registry = TypeRegistry::new();
        registry.register(schema.name(), managed_type)?;

        debug!(
            schema = %schema.name(),
            properties = schema.len(),
            "Resource handler initialized"
        );
        Ok(Self {
            managed_type,
            schema: Some(schema),
            registry,
            immutable_properties,
            _resource: PhantomData,
        })
    }

    pub fn managed_type(&self) -> ResourceType {
        self.managed_type
    }

    /// The derived schema, or `None` when derivation was skipped.
    pub fn schema(&self) -> Option<&Schema> {
        self.schema.as_ref()
    }

    /// Whether `name` is a cloud-managed property. Unknown names are mutable.
    pub fn is_immutable(&self, name: &str) -> bool {
        self.immutable_properties.contains(name)
    }

    /// Immutable property names, sorted.
    pub fn immutable_properties(&self) -> Vec<&str> {
        let mut names: Vec<&str> = self.immutable_properties.iter().map(String::as_str).collect();
        names.sort_unstable();
        names
    }

    pub fn lookup_type(&self, name: &str) -> Option<ResourceType> {
        self.registry.lookup(name)
    }

    pub fn registry(&self) -> &TypeRegistry {
        &self.registry
    }

    /// Schema DSL text. Derived from the managed type when no schema is cached.
    pub fn schema_text(&self) -> ProviderResult<String> {
        match &self.schema {
            Some(schema) => Ok(schema.to_string()),
            None => Ok(schema_text(self.managed_type)?),
        }
    }

    /// Never fails.
    pub fn schema_name(&self) -> String {
        match &self.schema {
            Some(schema) => schema.name().to_string(),
            None => schema_name(self.managed_type),
        }
    }

    /// Fails on the first name that refers to an immutable property.
    pub fn ensure_mutable<'a>(&self, names: impl IntoIterator<Item = &'a str>) -> ProviderResult<()> {
        match names.into_iter().find(|name| self.is_immutable(name)) {
            Some(property) => Err(ProviderError::ImmutableProperty {
                resource: self.schema_name(),
                property: property.to_string(),
            }),
            None => Ok(()),
        }
    }
}

impl<T: Resource> HandlerBase<T> {
    /// Rejects an update that sets a cloud-managed property to anything other
    /// than its prior value. Unset planned values are left alone.
    pub fn validate_update(&self, prior: &T, planned: &T) -> ProviderResult<()> {
        let prior = Schema::from_instance(prior)?;
        let planned = Schema::from_instance(planned)?;

        for property in planned.properties() {
            if !self.is_immutable(property.name()) {
                continue;
            }
            let Some(next) = property.current_value() else {
                continue;
            };
            let previous = prior.property(property.name()).and_then(|p| p.current_value());
            if previous != Some(next) {
                debug!(
                    schema = %planned.name(),
                    property = %property.name(),
                    "Rejected change to cloud-managed property"
                );
                return Err(ProviderError::ImmutableProperty {
                    resource: planned.name().to_string(),
                    property: property.name().to_string(),
                });
            }
        }
        Ok(())
    }
}

impl<T> std::fmt::Debug for HandlerBase<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("HandlerBase")
            .field("managed_type", &self.managed_type)
            .field("schema", &self.schema.as_ref().map(Schema::name))
            .field("immutable_properties", &self.immutable_properties)
            .finish()
    }
}

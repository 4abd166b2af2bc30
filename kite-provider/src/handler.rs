use crate::base::HandlerBase;
use crate::error::{ProviderError, ProviderResult};
use kite_schema::Schema;

pub type HandlerResult<T> = Result<T, ProviderError>;

/// CRUD contract implemented by every concrete resource handler.
///
/// This is the only surface the plugin host calls; discovery and
/// instantiation happen outside this crate.
pub trait ResourceHandler: Send + Sync {
    type Resource;

    fn create(&self, resource: Self::Resource) -> HandlerResult<Self::Resource>;

    fn read(&self, resource: Self::Resource) -> HandlerResult<Self::Resource>;

    /// Reads each resource in input order. The first failure aborts the batch.
    fn read_all(&self, resources: Vec<Self::Resource>) -> HandlerResult<Vec<Self::Resource>> {
        resources.into_iter().map(|resource| self.read(resource)).collect()
    }

    fn update(&self, resource: Self::Resource) -> HandlerResult<Self::Resource>;

    /// `Ok(false)` when there was nothing to delete.
    fn delete(&self, resource: Self::Resource) -> HandlerResult<bool>;
}

/// A handler that owns a [`HandlerBase`] for its resource type.
pub trait SchemaAware: ResourceHandler {
    fn base(&self) -> &HandlerBase<Self::Resource>;

    fn schema(&self) -> Option<&Schema> {
        self.base().schema()
    }

    fn is_immutable(&self, name: &str) -> bool {
        self.base().is_immutable(name)
    }

    fn schema_name(&self) -> String {
        self.base().schema_name()
    }

    fn schema_text(&self) -> ProviderResult<String> {
        self.base().schema_text()
    }
}

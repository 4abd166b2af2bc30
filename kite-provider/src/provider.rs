//! Aggregates the schemas and types of all handlers a provider ships.

use crate::base::HandlerBase;
use crate::config::ProviderConfig;
use crate::error::{ProviderError, ProviderResult};
use crate::handler::SchemaAware;
use crate::plugin::{Plugin, PluginContext};
use crate::registry::TypeRegistry;
use kite_schema::{ResourceType, Schema};
use tracing::{info, warn};

pub struct Provider {
    name: String,
    version: String,
    config: ProviderConfig,
    registry: TypeRegistry,
    /// Schemas in registration order.
    schemas: Vec<Schema>,
}

impl Provider {
    pub fn new(name: impl Into<String>, version: impl Into<String>) -> Self {
        Self::with_config(name, version, ProviderConfig::default())
    }

    pub fn with_config(
        name: impl Into<String>,
        version: impl Into<String>,
        config: ProviderConfig,
    ) -> Self {
        Self {
            name: name.into(),
            version: version.into(),
            config,
            registry: TypeRegistry::new(),
            schemas: Vec::new(),
        }
    }

    // ================================================================
    // Registration
    // ================================================================

    pub fn register<H: SchemaAware>(&mut self, handler: &H) -> ProviderResult<()> {
        self.register_base(handler.base())
    }

    /// Registers a handler's type under its schema name.
    ///
    /// A duplicate name fails in strict mode. Otherwise it is logged and the
    /// first registration is kept. Either way, earlier registrations are
    /// unaffected.
    pub fn register_base<T>(&mut self, base: &HandlerBase<T>) -> ProviderResult<()> {
        let name = base.schema_name();
        match self.registry.register(&name, base.managed_type()) {
            Ok(()) => {
                if let Some(schema) = base.schema() {
                    self.schemas.push(schema.clone());
                }
                info!(provider = %self.name, schema = %name, "Resource handler registered");
                Ok(())
            }
            Err(err @ ProviderError::DuplicateHandlerRegistration { .. })
                if !self.config.strict_registration =>
            {
                warn!(provider = %self.name, "{}; keeping first registration", err);
                Ok(())
            }
            Err(err) => {
                warn!(provider = %self.name, schema = %name, "Resource handler rejected: {}", err);
                Err(err)
            }
        }
    }

    // ================================================================
    // Queries
    // ================================================================

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn version(&self) -> &str {
        &self.version
    }

    pub fn config(&self) -> &ProviderConfig {
        &self.config
    }

    pub fn context(&self) -> PluginContext {
        PluginContext::new(self.config.runtime_mode)
    }

    pub fn lookup_type(&self, name: &str) -> Option<ResourceType> {
        self.registry.lookup(name)
    }

    pub fn schema(&self, name: &str) -> Option<&Schema> {
        self.schemas.iter().find(|s| s.name() == name)
    }

    pub fn schemas(&self) -> &[Schema] {
        &self.schemas
    }

    /// Registered type names, in registration order.
    pub fn type_names(&self) -> Vec<&str> {
        self.registry.names().collect()
    }

    /// DSL text of every registered schema, separated by blank lines.
    pub fn schemas_text(&self) -> String {
        self.schemas
            .iter()
            .map(Schema::to_string)
            .collect::<Vec<_>>()
            .join("\n")
    }
}

impl Plugin for Provider {
    fn name(&self) -> &str {
        &self.name
    }

    fn start(&mut self, context: &PluginContext) {
        info!(
            provider = %self.name,
            version = %self.version,
            mode = ?context.runtime_mode(),
            resources = self.registry.len(),
            "Provider started"
        );
    }
}

//! Plugin lifecycle hooks.

use serde::{Deserialize, Serialize};
use tracing::info;

/// Where the provider is running.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RuntimeMode {
    #[default]
    Development,
    Deployment,
}

/// Context handed to a plugin when it starts.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PluginContext {
    runtime_mode: RuntimeMode,
}

impl PluginContext {
    pub fn new(runtime_mode: RuntimeMode) -> Self {
        Self { runtime_mode }
    }

    pub fn runtime_mode(&self) -> RuntimeMode {
        self.runtime_mode
    }

    pub fn is_deployment(&self) -> bool {
        self.runtime_mode == RuntimeMode::Deployment
    }
}

/// Lifecycle hooks called by the plugin host. All have defaults.
pub trait Plugin: Send + Sync {
    fn name(&self) -> &str {
        std::any::type_name::<Self>()
    }

    fn start(&mut self, context: &PluginContext) {
        info!(plugin = %self.name(), mode = ?context.runtime_mode(), "Plugin started");
    }

    fn stop(&mut self) {
        info!(plugin = %self.name(), "Plugin stopped");
    }

    /// Cleanup before the plugin is removed. No-op by default.
    fn delete(&mut self) {}
}

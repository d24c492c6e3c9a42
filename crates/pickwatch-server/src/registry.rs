//! Name → handler tool registry, built once at process start.

use std::collections::HashMap;
use std::sync::Arc;

use async_trait::async_trait;
use serde::Serialize;
use serde_json::Value;
use thiserror::Error;

use pickwatch_core::AppConfig;
use pickwatch_feed::FeedError;

use crate::collect::CollectTool;

/// Failures a tool handler can surface to the transport layer.
///
/// Structured outcomes (validation rejections, fetch/parse failures) are NOT
/// errors — tools return those as their JSON result. This enum covers only
/// the cases the API layer maps to HTTP error responses.
#[derive(Debug, Error)]
pub enum ToolError {
    #[error("invalid tool arguments: {0}")]
    InvalidArguments(String),

    #[error(transparent)]
    Persist(#[from] pickwatch_store::StoreError),

    #[error("failed to encode tool result: {0}")]
    Encode(String),
}

/// A named operation callable over the tool endpoint.
#[async_trait]
pub trait Tool: Send + Sync {
    fn name(&self) -> &'static str;
    fn description(&self) -> &'static str;

    /// Execute the tool with a JSON arguments object, returning its
    /// structured JSON result.
    async fn call(&self, arguments: Value) -> Result<Value, ToolError>;
}

/// Declared tool metadata returned by the enumeration endpoint.
#[derive(Debug, Clone, Serialize)]
pub struct ToolInfo {
    pub name: String,
    pub description: String,
}

pub struct ToolRegistry {
    tools: HashMap<&'static str, Arc<dyn Tool>>,
}

impl ToolRegistry {
    fn new() -> Self {
        Self {
            tools: HashMap::new(),
        }
    }

    fn register(&mut self, tool: Arc<dyn Tool>) {
        self.tools.insert(tool.name(), tool);
    }

    #[must_use]
    pub fn get(&self, name: &str) -> Option<Arc<dyn Tool>> {
        self.tools.get(name).cloned()
    }

    /// Registered tools in name order.
    #[must_use]
    pub fn list(&self) -> Vec<ToolInfo> {
        let mut infos: Vec<ToolInfo> = self
            .tools
            .values()
            .map(|tool| ToolInfo {
                name: tool.name().to_string(),
                description: tool.description().to_string(),
            })
            .collect();
        infos.sort_by(|a, b| a.name.cmp(&b.name));
        infos
    }
}

/// Build the registry with every tool this server exposes.
///
/// # Errors
///
/// Returns [`FeedError`] if a tool's HTTP client cannot be constructed.
pub fn build_registry(config: &AppConfig) -> Result<ToolRegistry, FeedError> {
    let mut registry = ToolRegistry::new();
    registry.register(Arc::new(CollectTool::from_config(config)?));
    Ok(registry)
}

#[cfg(test)]
mod tests {
    use super::*;

    struct EchoTool;

    #[async_trait]
    impl Tool for EchoTool {
        fn name(&self) -> &'static str {
            "echo"
        }

        fn description(&self) -> &'static str {
            "Echo the arguments back."
        }

        async fn call(&self, arguments: Value) -> Result<Value, ToolError> {
            Ok(arguments)
        }
    }

    #[test]
    fn get_returns_registered_tool_and_none_for_unknown() {
        let mut registry = ToolRegistry::new();
        registry.register(Arc::new(EchoTool));

        assert!(registry.get("echo").is_some());
        assert!(registry.get("missing").is_none());
    }

    #[test]
    fn list_returns_declared_names_and_descriptions() {
        let mut registry = ToolRegistry::new();
        registry.register(Arc::new(EchoTool));

        let infos = registry.list();
        assert_eq!(infos.len(), 1);
        assert_eq!(infos[0].name, "echo");
        assert_eq!(infos[0].description, "Echo the arguments back.");
    }
}

//! HTTP tool-call server exposing the pickpocket report collector.
//!
//! Tools are registered by name into a [`registry::ToolRegistry`] at startup
//! and dispatched over a minimal JSON-over-HTTP surface under `/mcp`:
//! enumeration at `GET /mcp/tools`, invocation at `POST /mcp/tools/{name}`.

pub mod api;
pub mod collect;
pub mod middleware;
pub mod registry;

pub use api::{build_app, AppState};
pub use collect::CollectTool;
pub use registry::{build_registry, Tool, ToolRegistry};

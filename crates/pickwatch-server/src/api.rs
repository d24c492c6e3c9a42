//! HTTP surface for the tool-call server.

use std::sync::Arc;

use axum::{
    extract::{Path, State},
    http::{header, HeaderName, Method, StatusCode},
    response::IntoResponse,
    routing::{get, post},
    Extension, Json, Router,
};
use chrono::{DateTime, Utc};
use serde::Serialize;
use serde_json::Value;
use tower::ServiceBuilder;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

use crate::middleware::{request_id, RequestId};
use crate::registry::{ToolError, ToolInfo, ToolRegistry};

#[derive(Clone)]
pub struct AppState {
    pub registry: Arc<ToolRegistry>,
}

/// Transport-level error body. Tool-level failures (validation rejections,
/// fetch/parse errors) are structured tool results, not `ApiError`s.
#[derive(Debug, Serialize)]
pub struct ApiError {
    pub error: ErrorBody,
    pub meta: ResponseMeta,
}

#[derive(Debug, Serialize)]
pub struct ErrorBody {
    pub code: String,
    pub message: String,
}

#[derive(Debug, Serialize)]
pub struct ResponseMeta {
    pub request_id: String,
    pub timestamp: DateTime<Utc>,
}

impl ResponseMeta {
    fn new(request_id: String) -> Self {
        Self {
            request_id,
            timestamp: Utc::now(),
        }
    }
}

impl ApiError {
    pub fn new(
        request_id: impl Into<String>,
        code: impl Into<String>,
        message: impl Into<String>,
    ) -> Self {
        Self {
            error: ErrorBody {
                code: code.into(),
                message: message.into(),
            },
            meta: ResponseMeta::new(request_id.into()),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> axum::response::Response {
        let status = match self.error.code.as_str() {
            "not_found" => StatusCode::NOT_FOUND,
            "bad_request" => StatusCode::BAD_REQUEST,
            _ => StatusCode::INTERNAL_SERVER_ERROR,
        };
        (status, Json(self)).into_response()
    }
}

#[derive(Debug, Serialize)]
struct HealthData {
    status: &'static str,
}

#[derive(Debug, Serialize)]
struct ToolListData {
    tools: Vec<ToolInfo>,
}

fn build_cors() -> CorsLayer {
    CorsLayer::new()
        .allow_origin(tower_http::cors::Any)
        .allow_methods([Method::GET, Method::POST])
        .allow_headers([
            header::CONTENT_TYPE,
            HeaderName::from_static("x-request-id"),
        ])
}

pub fn build_app(state: AppState) -> Router {
    Router::new()
        .route("/mcp/health", get(health))
        .route("/mcp/tools", get(list_tools))
        .route("/mcp/tools/{name}", post(call_tool))
        .layer(
            ServiceBuilder::new()
                .layer(TraceLayer::new_for_http())
                .layer(build_cors())
                .layer(axum::middleware::from_fn(request_id)),
        )
        .with_state(state)
}

async fn health() -> impl IntoResponse {
    Json(HealthData { status: "ok" })
}

async fn list_tools(State(state): State<AppState>) -> Json<ToolListData> {
    Json(ToolListData {
        tools: state.registry.list(),
    })
}

async fn call_tool(
    State(state): State<AppState>,
    Extension(req_id): Extension<RequestId>,
    Path(name): Path<String>,
    Json(arguments): Json<Value>,
) -> Result<Json<Value>, ApiError> {
    let Some(tool) = state.registry.get(&name) else {
        return Err(ApiError::new(
            req_id.0,
            "not_found",
            format!("tool '{name}' is not registered"),
        ));
    };

    match tool.call(arguments).await {
        Ok(result) => Ok(Json(result)),
        Err(ToolError::InvalidArguments(reason)) => {
            Err(ApiError::new(req_id.0, "bad_request", reason))
        }
        Err(e) => {
            tracing::error!(tool = %name, error = %e, "tool invocation failed");
            Err(ApiError::new(
                req_id.0,
                "internal_error",
                "tool invocation failed",
            ))
        }
    }
}

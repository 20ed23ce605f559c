// handlers/system.rs - Public service endpoints (no authentication)

use axum::{extract::State, http::StatusCode, response::IntoResponse, Json};
use serde_json::{json, Value};

use crate::app::AppState;

/// GET / - Service description
pub async fn root(State(state): State<AppState>) -> Json<Value> {
    let version = env!("CARGO_PKG_VERSION");
    let base = state.config.api.mount_path();

    Json(json!({
        "success": true,
        "data": {
            "name": "Expense API",
            "version": version,
            "description": "Owner-scoped personal expense records",
            "endpoints": {
                "home": "/ (public)",
                "health": "/health (public)",
                "create": format!("POST {}/create (protected)", base),
                "list": format!("GET {} (protected)", base),
                "update": format!("PUT {}/:id (protected)", base),
                "delete": format!("DELETE {}/:id (protected)", base),
                "grouped": format!("GET {}/grouped/categories (protected)", base),
            }
        }
    }))
}

/// GET /health - Liveness plus store connectivity
pub async fn health(State(state): State<AppState>) -> impl IntoResponse {
    let now = chrono::Utc::now();

    match state.expenses.health_check().await {
        Ok(_) => (
            StatusCode::OK,
            Json(json!({
                "success": true,
                "data": {
                    "status": "ok",
                    "timestamp": now,
                    "database": "ok"
                }
            })),
        ),
        Err(e) => {
            tracing::warn!("health check failed: {}", e);
            (
                StatusCode::SERVICE_UNAVAILABLE,
                Json(json!({
                    "success": false,
                    "error": "database unavailable",
                    "data": {
                        "status": "degraded",
                        "timestamp": now,
                        "database": "unreachable"
                    }
                })),
            )
        }
    }
}

//! HTTP application wiring: shared state, the expense router and global layers.

use std::sync::Arc;

use axum::{
    extract::DefaultBodyLimit,
    http::HeaderValue,
    middleware::from_fn_with_state,
    routing::{get, post, put},
    Router,
};
use tower_http::{
    cors::{AllowOrigin, Any, CorsLayer},
    trace::TraceLayer,
};

use crate::config::AppConfig;
use crate::database::ExpenseStore;
use crate::error::ApiError;
use crate::handlers::{expenses, system};
use crate::middleware::jwt_auth_middleware;
use crate::services::ExpenseService;

/// Per-process state handed to every handler
#[derive(Clone)]
pub struct AppState {
    pub config: Arc<AppConfig>,
    pub expenses: ExpenseService,
}

impl AppState {
    pub fn new(config: AppConfig, store: Arc<dyn ExpenseStore>) -> Self {
        Self {
            config: Arc::new(config),
            expenses: ExpenseService::new(store),
        }
    }
}

/// Build the full HTTP router
pub fn build_app(state: AppState) -> Router {
    let base_path = state.config.api.mount_path();
    if base_path != state.config.api.base_path {
        tracing::warn!(
            "API base path {:?} normalized to {}",
            state.config.api.base_path,
            base_path
        );
    }

    let app: Router<AppState> = Router::new()
        // Public
        .route("/", get(system::root))
        .route("/health", get(system::health))
        // Protected expense collection
        .nest(&base_path, expense_routes(&state))
        .fallback(route_not_found);

    let app = if state.config.security.enable_cors {
        app.layer(cors_layer(&state.config.security.cors_origins))
    } else {
        app
    };

    let app = if state.config.api.enable_request_logging {
        app.layer(TraceLayer::new_for_http())
    } else {
        app
    };

    app.layer(DefaultBodyLimit::max(state.config.api.max_request_size_bytes))
        .with_state(state)
}

fn expense_routes(state: &AppState) -> Router<AppState> {
    Router::new()
        .route("/create", post(expenses::expense_create))
        .route("/", get(expenses::expense_list))
        .route("/grouped/categories", get(expenses::expense_grouped_categories))
        .route("/:id", put(expenses::expense_update).delete(expenses::expense_delete))
        .method_not_allowed_fallback(method_not_allowed)
        .route_layer(from_fn_with_state(state.clone(), jwt_auth_middleware))
}

async fn route_not_found() -> ApiError {
    ApiError::not_found("Route not found")
}

async fn method_not_allowed() -> ApiError {
    ApiError::method_not_allowed("Method not allowed")
}

fn cors_layer(origins: &[String]) -> CorsLayer {
    let origins: Vec<HeaderValue> = origins
        .iter()
        .filter_map(|origin| match HeaderValue::from_str(origin) {
            Ok(value) => Some(value),
            Err(_) => {
                tracing::warn!("ignoring invalid CORS origin: {}", origin);
                None
            }
        })
        .collect();

    CorsLayer::new()
        .allow_origin(AllowOrigin::list(origins))
        .allow_methods(Any)
        .allow_headers(Any)
}

//! # Menu HTTP API Module
//!
//! This module implements the HTTP REST API server using axum.
//!
//! ## Endpoints
//!
//! - `GET /health` - Health check
//! - `GET /menu` - List every dish with its position
//! - `POST /menu` - Add a dish
//! - `DELETE /menu/{index}` - Remove the dish at a position
//! - `GET /menu/filter?course=` - Guest filter (`All` or a course)
//! - `GET /menu/average?course=` - Average price of a course
//! - `GET /overview` - Item count and per-course averages
//!
//! ## Configuration (Environment Variables)
//!
//! - `MENU_CORS_ORIGINS`: Comma-separated list of allowed origins, or "*" for all (default: localhost only)
//! - `MENU_RATE_LIMIT`: Requests per second (default: 50, 0 to disable)

mod handlers;
mod middleware;
mod types;

pub use handlers::{
    add_handler, average_handler, filter_handler, health_handler, list_handler, overview_handler,
    remove_handler,
};
pub use middleware::{create_rate_limiter, parse_rate_limit, rate_limit_from_env};
pub use types::{
    AddItemRequest, AverageResponse, CourseQuery, ErrorResponse, HealthResponse, MenuItemJson,
    MenuResponse, OverviewResponse, RemoveResponse,
};

use crate::error::AppError;
use axum::{
    Router,
    http::{HeaderValue, Method, header},
    middleware as axum_middleware,
    routing::{delete, get},
};
use menu_core::MenuStore;
use std::sync::Arc;
use tokio::sync::RwLock;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

/// Maximum request body size (64 KB). Menu items are small.
const MAX_BODY_BYTES: usize = 64 * 1024;

// =============================================================================
// SERVER STATE
// =============================================================================

/// Shared server state containing the session's menu.
#[derive(Clone)]
pub struct AppState {
    /// The one store for this session. Handlers hold the lock for the whole
    /// core call, so mutations never overlap reads.
    pub store: Arc<RwLock<MenuStore>>,
}

impl AppState {
    /// Create new app state around a store.
    #[must_use]
    pub fn new(store: MenuStore) -> Self {
        Self {
            store: Arc::new(RwLock::new(store)),
        }
    }
}

// =============================================================================
// CORS CONFIGURATION
// =============================================================================

/// Build CORS layer from `MENU_CORS_ORIGINS`.
///
/// - "*": allows all origins
/// - unset: localhost only
/// - otherwise: comma-separated list of allowed origins
fn build_cors_layer() -> CorsLayer {
    let origins_env = std::env::var("MENU_CORS_ORIGINS").ok();

    match origins_env.as_deref() {
        Some("*") => {
            tracing::warn!("CORS: Allowing ALL origins (MENU_CORS_ORIGINS=*)");
            CorsLayer::permissive()
        }
        Some(origins) => {
            let allowed_origins: Vec<HeaderValue> = origins
                .split(',')
                .filter_map(|s| {
                    let trimmed = s.trim();
                    match trimmed.parse::<HeaderValue>() {
                        Ok(hv) => {
                            tracing::info!("CORS: Allowing origin: {}", trimmed);
                            Some(hv)
                        }
                        Err(e) => {
                            tracing::warn!("CORS: Invalid origin '{}': {}", trimmed, e);
                            None
                        }
                    }
                })
                .collect();

            if allowed_origins.is_empty() {
                tracing::warn!(
                    "CORS: No valid origins in MENU_CORS_ORIGINS, defaulting to localhost only"
                );
                build_localhost_cors()
            } else {
                with_menu_methods(CorsLayer::new().allow_origin(allowed_origins))
            }
        }
        None => build_localhost_cors(),
    }
}

/// Build a restrictive CORS layer that only allows localhost origins.
fn build_localhost_cors() -> CorsLayer {
    let origins: Vec<HeaderValue> = [
        "http://localhost:3000",
        "http://localhost:8080",
        "http://127.0.0.1:3000",
        "http://127.0.0.1:8080",
    ]
    .into_iter()
    .filter_map(|o| o.parse::<HeaderValue>().ok())
    .collect();

    with_menu_methods(CorsLayer::new().allow_origin(origins))
}

fn with_menu_methods(layer: CorsLayer) -> CorsLayer {
    layer
        .allow_methods([Method::GET, Method::POST, Method::DELETE, Method::OPTIONS])
        .allow_headers([header::CONTENT_TYPE])
}

// =============================================================================
// ROUTER CREATION
// =============================================================================

/// Create the axum router with all endpoints and middleware.
///
/// Middleware stack (outer to inner):
/// 1. Tracing - logs all requests
/// 2. CORS - handles preflight requests
/// 3. Body limit
/// 4. Rate Limiting (if enabled)
pub fn create_router(state: AppState) -> Router {
    let cors = build_cors_layer();

    let rate_limit = rate_limit_from_env();

    let mut router = Router::new()
        .route("/health", get(handlers::health_handler))
        .route(
            "/menu",
            get(handlers::list_handler).post(handlers::add_handler),
        )
        .route("/menu/filter", get(handlers::filter_handler))
        .route("/menu/average", get(handlers::average_handler))
        .route("/menu/{index}", delete(handlers::remove_handler))
        .route("/overview", get(handlers::overview_handler));

    if let Some(rps) = rate_limit {
        tracing::info!("Rate limiting enabled: {} requests/second", rps);
        router = router.layer(axum_middleware::from_fn_with_state(
            create_rate_limiter(rps),
            middleware::rate_limit_middleware,
        ));
    } else {
        tracing::info!("Rate limiting disabled");
    }

    router
        .layer(axum::extract::DefaultBodyLimit::max(MAX_BODY_BYTES))
        .layer(cors)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

// =============================================================================
// SERVER STARTUP
// =============================================================================

/// Start the HTTP server around a session store.
pub async fn run_server(addr: &str, store: MenuStore) -> Result<(), AppError> {
    let router = create_router(AppState::new(store));

    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .map_err(|e| AppError::Io(format!("Bind failed: {}", e)))?;

    tracing::info!("Menu HTTP server listening on {}", addr);

    axum::serve(listener, router)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .map_err(|e| AppError::Io(format!("Server error: {}", e)))
}

/// Resolve on Ctrl+C. The session ends with the process.
async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!("Failed to listen for shutdown signal: {}", e);
        std::future::pending::<()>().await;
    }
    tracing::info!("Shutdown signal received, discarding session menu");
}

//! # API Endpoint Handlers
//!
//! This module implements the actual HTTP endpoint handlers.

use super::{
    AppState,
    types::{
        AddItemRequest, AverageResponse, CourseQuery, ErrorResponse, HealthResponse,
        MenuItemJson, MenuResponse, OverviewResponse, RemoveResponse,
    },
};
use axum::{
    Json,
    extract::{Path, Query, State, rejection::JsonRejection},
    http::StatusCode,
    response::{IntoResponse, Response},
};
use menu_core::{Course, CourseFilter, MenuError, ValidationError, average_price, overview};

/// Map a core error onto its HTTP status and JSON body.
fn error_response(e: &MenuError) -> Response {
    let status = match e {
        MenuError::Validation(_) => StatusCode::BAD_REQUEST,
        MenuError::IndexOutOfRange { .. } => StatusCode::NOT_FOUND,
    };
    (status, Json(ErrorResponse::from_menu_error(e))).into_response()
}

// =============================================================================
// HEALTH HANDLER
// =============================================================================

/// Health check endpoint.
pub async fn health_handler() -> impl IntoResponse {
    Json(HealthResponse::default())
}

// =============================================================================
// MENU HANDLERS
// =============================================================================

/// List every dish in insertion order.
pub async fn list_handler(State(state): State<AppState>) -> impl IntoResponse {
    let store = state.store.read().await;
    (
        StatusCode::OK,
        Json(MenuResponse::from_snapshot(store.snapshot())),
    )
}

/// Validate and append a dish.
pub async fn add_handler(
    State(state): State<AppState>,
    body: Result<Json<AddItemRequest>, JsonRejection>,
) -> Response {
    let request = match body {
        Ok(Json(request)) => request,
        Err(rejection) => {
            tracing::warn!("Rejected menu item body: {}", rejection.body_text());
            return (
                StatusCode::BAD_REQUEST,
                Json(ErrorResponse::malformed_body(rejection.body_text())),
            )
                .into_response();
        }
    };
    let candidate = request.to_candidate();

    let mut store = state.store.write().await;
    match store.add(&candidate) {
        Ok(snapshot) => {
            tracing::info!(
                dish = %request.dish_name.trim(),
                course = %request.course.trim(),
                total = snapshot.len(),
                "Menu item added"
            );
            (
                StatusCode::CREATED,
                Json(MenuResponse::from_snapshot(snapshot)),
            )
                .into_response()
        }
        Err(e) => {
            tracing::warn!("Rejected menu item: {}", e);
            error_response(&e)
        }
    }
}

/// Remove the dish at a zero-based position.
pub async fn remove_handler(State(state): State<AppState>, Path(index): Path<i64>) -> Response {
    let mut store = state.store.write().await;
    match store.remove(index) {
        Ok(removed) => {
            tracing::info!(
                dish = %removed.dish_name(),
                index,
                total = store.len(),
                "Menu item removed"
            );
            let response = RemoveResponse {
                success: true,
                removed: MenuItemJson::new(index as usize, &removed),
                total: store.len(),
            };
            (StatusCode::OK, Json(response)).into_response()
        }
        Err(e) => {
            tracing::warn!("Remove failed: {}", e);
            error_response(&e)
        }
    }
}

// =============================================================================
// VIEW HANDLERS
// =============================================================================

/// Guest filter. A missing `course` parameter means "All".
pub async fn filter_handler(
    State(state): State<AppState>,
    Query(query): Query<CourseQuery>,
) -> Response {
    let selector = match query.course.as_deref() {
        None => CourseFilter::All,
        Some(raw) => match raw.parse::<CourseFilter>() {
            Ok(s) => s,
            Err(e) => return error_response(&MenuError::from(e)),
        },
    };

    let store = state.store.read().await;
    (
        StatusCode::OK,
        Json(MenuResponse::filtered(store.snapshot(), selector)),
    )
        .into_response()
}

/// Average price of one course.
pub async fn average_handler(
    State(state): State<AppState>,
    Query(query): Query<CourseQuery>,
) -> Response {
    let course = match query
        .course
        .as_deref()
        .ok_or(ValidationError::MissingCourse)
        .and_then(str::parse::<Course>)
    {
        Ok(c) => c,
        Err(e) => return error_response(&MenuError::from(e)),
    };

    let store = state.store.read().await;
    let snapshot = store.snapshot();
    let response = AverageResponse {
        success: true,
        course,
        item_count: snapshot.iter().filter(|i| i.course() == course).count(),
        average: average_price(snapshot, course),
    };
    (StatusCode::OK, Json(response)).into_response()
}

/// Home-screen overview: item count and per-course averages.
pub async fn overview_handler(State(state): State<AppState>) -> impl IntoResponse {
    let store = state.store.read().await;
    let response = OverviewResponse {
        success: true,
        overview: overview(store.snapshot()),
    };
    (StatusCode::OK, Json(response))
}

//! HTTP Handlers

use axum::{
    Json,
    extract::{Query, State},
    http::StatusCode,
};
use serde::{Deserialize, Serialize};

use chatmind_core::{
    ContactAck, ContactSubmission, LandingError, OrderBy, PricingPlan, SortDirection, Testimonial,
};

use crate::state::AppState;

// ============================================================================
// Request / Response Types
// ============================================================================

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct HealthResponse {
    pub status: &'static str,
    pub version: &'static str,
    pub testimonials: usize,
    pub pricing_plans: usize,
}

#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: String,
    pub code: String,
}

/// Optional `?direction=asc|desc` override for list endpoints
#[derive(Debug, Default, Deserialize)]
pub struct ListParams {
    pub direction: Option<SortDirection>,
}

pub type ApiError = (StatusCode, Json<ErrorResponse>);

fn store_error(err: &LandingError) -> ApiError {
    tracing::error!("Store error: {}", err);
    (
        StatusCode::INTERNAL_SERVER_ERROR,
        Json(ErrorResponse {
            error: err.user_message(),
            code: "STORE_ERROR".into(),
        }),
    )
}

// ============================================================================
// Handlers
// ============================================================================

/// Health check endpoint
pub async fn health_check(State(state): State<AppState>) -> Result<Json<HealthResponse>, ApiError> {
    let store = state.service.store();
    let testimonials = store.count_testimonials().await.map_err(|e| store_error(&e))?;
    let pricing_plans = store.count_pricing_plans().await.map_err(|e| store_error(&e))?;

    Ok(Json(HealthResponse {
        status: "healthy",
        version: env!("CARGO_PKG_VERSION"),
        testimonials,
        pricing_plans,
    }))
}

/// Testimonials, newest first unless `direction` is given
pub async fn list_testimonials(
    State(state): State<AppState>,
    Query(params): Query<ListParams>,
) -> Result<Json<Vec<Testimonial>>, ApiError> {
    let direction = params.direction.unwrap_or(SortDirection::Desc);
    let order = OrderBy {
        direction,
        ..OrderBy::default()
    };

    let testimonials = state
        .service
        .list_testimonials(Some(order))
        .await
        .map_err(|e| store_error(&e))?;

    Ok(Json(testimonials))
}

/// Pricing plans, cheapest first unless `direction` is given
pub async fn list_pricing_plans(
    State(state): State<AppState>,
    Query(params): Query<ListParams>,
) -> Result<Json<Vec<PricingPlan>>, ApiError> {
    let direction = params.direction.unwrap_or(SortDirection::Asc);
    let order = OrderBy {
        direction,
        ..OrderBy::default()
    };

    let plans = state
        .service
        .list_pricing_plans(Some(order))
        .await
        .map_err(|e| store_error(&e))?;

    Ok(Json(plans))
}

/// Contact form submission. Missing fields are rejected by the extractor.
pub async fn submit_contact(
    State(state): State<AppState>,
    Json(payload): Json<ContactSubmission>,
) -> Json<ContactAck> {
    Json(state.service.submit_contact_form(&payload))
}

// JSON feeds for the dashboard charts; bodies are the raw stats objects.
use std::sync::Arc;

use axum::{response::IntoResponse, routing::get, Extension, Json, Router};
use chrono::Utc;

use crate::{error::HttpError, middleware::JWTAuthMiddeware, AppState};

pub fn charts_handler() -> Router {
    Router::new()
        .route("/interactions", get(interactions_chart))
        .route("/bookings", get(bookings_chart))
        .route("/customer-types", get(customer_types_chart))
}

pub async fn interactions_chart(
    Extension(app_state): Extension<Arc<AppState>>,
    Extension(auth): Extension<JWTAuthMiddeware>,
) -> Result<impl IntoResponse, HttpError> {
    let stats = app_state.stats_service
        .get_interaction_stats(auth.business.id, Utc::now())
        .await?;

    Ok(Json(stats))
}

pub async fn bookings_chart(
    Extension(app_state): Extension<Arc<AppState>>,
    Extension(auth): Extension<JWTAuthMiddeware>,
) -> Result<impl IntoResponse, HttpError> {
    let stats = app_state.stats_service
        .get_booking_stats(auth.business.id, Utc::now())
        .await?;

    Ok(Json(stats))
}

pub async fn customer_types_chart(
    Extension(app_state): Extension<Arc<AppState>>,
    Extension(auth): Extension<JWTAuthMiddeware>,
) -> Result<impl IntoResponse, HttpError> {
    let stats = app_state.stats_service
        .get_customer_stats(auth.business.id)
        .await?;

    Ok(Json(stats))
}

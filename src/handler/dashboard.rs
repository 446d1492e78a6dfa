use std::sync::Arc;

use axum::{
    extract::Path,
    response::IntoResponse,
    routing::get,
    Extension, Json, Router,
};
use chrono::Utc;

use crate::{
    db::{bookingdb::BookingExt, interactiondb::InteractionExt},
    dtos::dashboarddtos::{
        BookingListResponseDto, DashboardData, DashboardResponseDto, InteractionDetailData,
        InteractionDetailResponseDto, InteractionDto, InteractionListResponseDto,
    },
    error::HttpError,
    middleware::JWTAuthMiddeware,
    service::error::ServiceError,
    AppState,
};

const RECENT_INTERACTIONS: i64 = 5;
const UPCOMING_BOOKINGS: i64 = 5;

pub fn dashboard_handler() -> Router {
    Router::new()
        .route("/", get(get_dashboard))
        .route("/interactions", get(get_interactions))
        .route("/interactions/:interaction_id", get(get_interaction_detail))
        .route("/bookings", get(get_bookings))
}

pub async fn get_dashboard(
    Extension(app_state): Extension<Arc<AppState>>,
    Extension(auth): Extension<JWTAuthMiddeware>,
) -> Result<impl IntoResponse, HttpError> {
    let business_id = auth.business.id;
    let now = Utc::now();

    let interaction_stats = app_state.stats_service
        .get_interaction_stats(business_id, now)
        .await?;
    let booking_stats = app_state.stats_service
        .get_booking_stats(business_id, now)
        .await?;
    let customer_stats = app_state.stats_service
        .get_customer_stats(business_id)
        .await?;

    let recent_interactions = app_state.db_client
        .get_interactions(business_id, Some(RECENT_INTERACTIONS))
        .await
        .map_err(ServiceError::from)?;

    let upcoming_bookings = app_state.db_client
        .get_upcoming_bookings(business_id, now, UPCOMING_BOOKINGS)
        .await
        .map_err(ServiceError::from)?;

    Ok(Json(DashboardResponseDto {
        status: "success".to_string(),
        data: DashboardData {
            interaction_stats,
            booking_stats,
            customer_stats,
            recent_interactions: InteractionDto::from_interactions(&recent_interactions),
            upcoming_bookings,
        },
    }))
}

pub async fn get_interactions(
    Extension(app_state): Extension<Arc<AppState>>,
    Extension(auth): Extension<JWTAuthMiddeware>,
) -> Result<impl IntoResponse, HttpError> {
    let interactions = app_state.db_client
        .get_interactions(auth.business.id, None)
        .await
        .map_err(ServiceError::from)?;

    Ok(Json(InteractionListResponseDto {
        status: "success".to_string(),
        results: interactions.len(),
        interactions: InteractionDto::from_interactions(&interactions),
    }))
}

pub async fn get_interaction_detail(
    Extension(app_state): Extension<Arc<AppState>>,
    Extension(auth): Extension<JWTAuthMiddeware>,
    Path(interaction_id): Path<i64>,
) -> Result<impl IntoResponse, HttpError> {
    let detail = app_state.interaction_service
        .get_interaction_detail(auth.business.id, interaction_id)
        .await?;

    Ok(Json(InteractionDetailResponseDto {
        status: "success".to_string(),
        data: InteractionDetailData {
            interaction: InteractionDto::from_interaction(&detail.interaction),
            customer: detail.customer,
            messages: detail.messages,
        },
    }))
}

pub async fn get_bookings(
    Extension(app_state): Extension<Arc<AppState>>,
    Extension(auth): Extension<JWTAuthMiddeware>,
) -> Result<impl IntoResponse, HttpError> {
    let bookings = app_state.db_client
        .get_bookings(auth.business.id)
        .await
        .map_err(ServiceError::from)?;

    Ok(Json(BookingListResponseDto {
        status: "success".to_string(),
        results: bookings.len(),
        bookings,
    }))
}

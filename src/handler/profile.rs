use std::sync::Arc;

use axum::{
    response::IntoResponse,
    routing::{get, put},
    Extension, Json, Router,
};
use validator::Validate;

use crate::{
    db::businessdb::BusinessExt,
    dtos::businessdtos::{
        normalize_optional, BusinessData, BusinessResponseDto, FilterBusinessDto,
        PasswordChangeDto, ProfileUpdateDto, Response,
    },
    error::{ErrorMessage, HttpError},
    middleware::JWTAuthMiddeware,
    service::error::ServiceError,
    utils::password,
    AppState,
};

pub fn profile_handler() -> Router {
    Router::new()
        .route("/profile", get(get_profile).put(update_profile))
        .route("/password", put(change_password))
}

pub async fn get_profile(
    Extension(auth): Extension<JWTAuthMiddeware>,
) -> Result<impl IntoResponse, HttpError> {
    Ok(Json(BusinessResponseDto {
        status: "success".to_string(),
        data: BusinessData {
            business: FilterBusinessDto::filter_business(&auth.business),
        },
    }))
}

pub async fn update_profile(
    Extension(app_state): Extension<Arc<AppState>>,
    Extension(auth): Extension<JWTAuthMiddeware>,
    Json(body): Json<ProfileUpdateDto>,
) -> Result<impl IntoResponse, HttpError> {
    body.validate()
        .map_err(|e| HttpError::bad_request(e.to_string()))?;

    let business = app_state.db_client
        .update_business_profile(
            auth.business.id,
            body.business_name,
            body.business_type,
            normalize_optional(body.phone),
            normalize_optional(body.address),
        )
        .await
        .map_err(ServiceError::from)?;

    tracing::info!("Business {} updated its profile", business.id);

    Ok(Json(BusinessResponseDto {
        status: "success".to_string(),
        data: BusinessData {
            business: FilterBusinessDto::filter_business(&business),
        },
    }))
}

pub async fn change_password(
    Extension(app_state): Extension<Arc<AppState>>,
    Extension(auth): Extension<JWTAuthMiddeware>,
    Json(body): Json<PasswordChangeDto>,
) -> Result<impl IntoResponse, HttpError> {
    body.validate()
        .map_err(|e| HttpError::bad_request(e.to_string()))?;

    let business = &auth.business;

    let password_match = password::compare(&body.current_password, &business.password_hash)
        .map_err(|_| HttpError::bad_request(ErrorMessage::CurrentPasswordIncorrect.to_string()))?;

    if !password_match {
        return Err(HttpError::bad_request(ErrorMessage::CurrentPasswordIncorrect.to_string()));
    }

    let hash_password = password::hash(&body.new_password)?;

    app_state.db_client
        .update_business_password(business.id, hash_password)
        .await
        .map_err(ServiceError::from)?;

    Ok(Json(Response {
        status: "success",
        message: "Your password has been updated!".to_string(),
    }))
}

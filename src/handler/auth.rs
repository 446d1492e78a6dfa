use std::sync::Arc;

use axum::{
    http::{header, HeaderMap, HeaderValue, StatusCode},
    middleware,
    response::IntoResponse,
    routing::post,
    Extension, Json, Router,
};
use axum_extra::extract::cookie::Cookie;
use validator::Validate;

use crate::{
    db::businessdb::BusinessExt,
    dtos::businessdtos::{
        normalize_optional, BusinessData, BusinessLoginResponseDto, BusinessResponseDto,
        FilterBusinessDto, LoginBusinessDto, RegisterBusinessDto, Response,
    },
    error::{ErrorMessage, HttpError},
    middleware::{auth, JWTAuthMiddeware},
    service::error::ServiceError,
    utils::{password, token},
    AppState,
};

pub fn auth_handler() -> Router {
    Router::new()
        .route("/register", post(register))
        .route("/login", post(login))
        .route("/logout", post(logout).layer(middleware::from_fn(auth)))
}

fn token_cookie_header(value: String, max_age: time::Duration) -> Result<HeaderValue, HttpError> {
    let cookie = Cookie::build(("token", value))
        .path("/")
        .max_age(max_age)
        .http_only(true)
        .build();

    cookie
        .to_string()
        .parse::<HeaderValue>()
        .map_err(|e| HttpError::server_error(e.to_string()))
}

pub async fn register(
    Extension(app_state): Extension<Arc<AppState>>,
    Json(body): Json<RegisterBusinessDto>,
) -> Result<impl IntoResponse, HttpError> {
    body.validate()
        .map_err(|e| HttpError::bad_request(e.to_string()))?;

    let existing_business = app_state.db_client
        .get_business(None, Some(&body.email))
        .await
        .map_err(ServiceError::from)?;

    if existing_business.is_some() {
        return Err(HttpError::bad_request(ErrorMessage::EmailExist.to_string()));
    }

    let hashed_password = password::hash(&body.password)?;

    let business = app_state.db_client
        .save_business(
            body.business_name,
            body.email,
            hashed_password,
            body.business_type,
            normalize_optional(body.phone),
            normalize_optional(body.address),
        )
        .await
        .map_err(|e| match e {
            sqlx::Error::Database(ref db_err) if db_err.is_unique_violation() => {
                HttpError::unique_constraint_violation(ErrorMessage::EmailExist.to_string())
            }
            _ => ServiceError::from(e).into(),
        })?;

    tracing::info!("Registered business {} ({})", business.id, business.business_name);

    Ok((
        StatusCode::CREATED,
        Json(BusinessResponseDto {
            status: "success".to_string(),
            data: BusinessData {
                business: FilterBusinessDto::filter_business(&business),
            },
        }),
    ))
}

pub async fn login(
    Extension(app_state): Extension<Arc<AppState>>,
    Json(body): Json<LoginBusinessDto>,
) -> Result<impl IntoResponse, HttpError> {
    body.validate()
        .map_err(|e| HttpError::bad_request(e.to_string()))?;

    let result = app_state.db_client
        .get_business(None, Some(&body.email))
        .await
        .map_err(ServiceError::from)?;

    let business = result.ok_or(HttpError::bad_request(ErrorMessage::WrongCredentials.to_string()))?;

    let password_matched = password::compare(&body.password, &business.password_hash)
        .map_err(|_| HttpError::bad_request(ErrorMessage::WrongCredentials.to_string()))?;

    if !password_matched {
        return Err(HttpError::bad_request(ErrorMessage::WrongCredentials.to_string()));
    }

    let token = token::create_token(
        &business.id.to_string(),
        app_state.env.jwt_secret.as_bytes(),
        app_state.env.jwt_maxage,
    )
    .map_err(|e| {
        tracing::error!("Failed to sign token for business {}: {}", business.id, e);
        HttpError::server_error(ErrorMessage::ServerError.to_string())
    })?;

    let cookie_duration = time::Duration::minutes(app_state.env.jwt_maxage);
    let mut headers = HeaderMap::new();
    headers.append(header::SET_COOKIE, token_cookie_header(token.clone(), cookie_duration)?);

    tracing::debug!("Business {} logged in", business.id);

    let mut response = Json(BusinessLoginResponseDto {
        status: "success".to_string(),
        token,
    })
    .into_response();
    response.headers_mut().extend(headers);

    Ok(response)
}

pub async fn logout(
    Extension(app_state): Extension<Arc<AppState>>,
    Extension(auth): Extension<JWTAuthMiddeware>,
) -> Result<impl IntoResponse, HttpError> {
    let ttl_seconds = (app_state.env.jwt_maxage.max(1) * 60) as usize;

    if let Err(e) = app_state.db_client.revoke_token(&auth.token, ttl_seconds).await {
        tracing::warn!("Could not revoke token for business {}: {}", auth.business.id, e);
    }

    let mut headers = HeaderMap::new();
    headers.append(
        header::SET_COOKIE,
        token_cookie_header(String::new(), time::Duration::ZERO)?,
    );

    let mut response = Json(Response {
        status: "success",
        message: "You have been logged out.".to_string(),
    })
    .into_response();
    response.headers_mut().extend(headers);

    Ok(response)
}

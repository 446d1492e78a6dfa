use std::sync::Arc;

use axum::{
    extract::Request,
    http::header,
    middleware::Next,
    response::IntoResponse,
    Extension,
};
use axum_extra::extract::cookie::CookieJar;
use serde::{Deserialize, Serialize};

use crate::{
    db::businessdb::BusinessExt,
    error::{ErrorMessage, HttpError},
    models::businessmodel::Business,
    utils::token,
    AppState,
};

#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct JWTAuthMiddeware {
    pub business: Business,
    /// The raw token, kept so logout can revoke it.
    pub token: String,
}

fn bearer_token(req: &Request) -> Option<String> {
    req.headers()
        .get(header::AUTHORIZATION)
        .and_then(|auth_header| auth_header.to_str().ok())
        .and_then(|auth_value| auth_value.strip_prefix("Bearer "))
        .map(|token| token.to_owned())
}

pub async fn auth(
    cookie_jar: CookieJar,
    Extension(app_state): Extension<Arc<AppState>>,
    mut req: Request,
    next: Next,
) -> Result<impl IntoResponse, HttpError> {
    let token = cookie_jar
        .get("token")
        .map(|cookie| cookie.value().to_string())
        .filter(|value| !value.is_empty())
        .or_else(|| bearer_token(&req))
        .ok_or_else(|| HttpError::unauthorized(ErrorMessage::TokenNotProvided.to_string()))?;

    let token_details = token::decode_token(token.clone(), app_state.env.jwt_secret.as_bytes())
        .map_err(|_| HttpError::unauthorized(ErrorMessage::InvalidToken.to_string()))?;

    if app_state.db_client.is_token_revoked(&token).await {
        return Err(HttpError::unauthorized(ErrorMessage::TokenRevoked.to_string()));
    }

    let business_id = token_details
        .parse::<i64>()
        .map_err(|_| HttpError::unauthorized(ErrorMessage::InvalidToken.to_string()))?;

    let business = app_state
        .db_client
        .get_business(Some(business_id), None)
        .await
        .map_err(|e| {
            tracing::error!("Failed to load business {}: {}", business_id, e);
            HttpError::server_error(ErrorMessage::ServerError.to_string())
        })?
        .ok_or_else(|| HttpError::unauthorized(ErrorMessage::BusinessNoLongerExist.to_string()))?;

    req.extensions_mut().insert(JWTAuthMiddeware { business, token });

    Ok(next.run(req).await)
}

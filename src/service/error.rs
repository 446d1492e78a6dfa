use thiserror::Error;

use crate::error::{ErrorMessage, HttpError};

#[derive(Error, Debug)]
pub enum ServiceError {
    #[error("Store unavailable: {0}")]
    StoreUnavailable(#[from] sqlx::Error),

    #[error("Interaction {0} not found")]
    InteractionNotFound(i64),

    #[error("Business {0} may not access interaction {1}")]
    AccessDenied(i64, i64),
}

impl From<ServiceError> for HttpError {
    fn from(error: ServiceError) -> Self {
        match error {
            ServiceError::InteractionNotFound(_) => HttpError::not_found(error.to_string()),

            ServiceError::AccessDenied(business_id, interaction_id) => {
                tracing::warn!(
                    "Business {} tried to open interaction {} it does not own",
                    business_id,
                    interaction_id
                );
                HttpError::forbidden(ErrorMessage::PermissionDenied.to_string())
            }

            ServiceError::StoreUnavailable(ref e) => {
                tracing::error!("Store query failed: {}", e);
                HttpError::server_error(ErrorMessage::ServerError.to_string())
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::StatusCode;

    #[test]
    fn maps_to_http_status() {
        let not_found: HttpError = ServiceError::InteractionNotFound(9).into();
        assert_eq!(not_found.status, StatusCode::NOT_FOUND);
        assert_eq!(not_found.message, "Interaction 9 not found");

        let denied: HttpError = ServiceError::AccessDenied(1, 9).into();
        assert_eq!(denied.status, StatusCode::FORBIDDEN);
        assert_eq!(denied.message, "Access denied.");

        let store: HttpError = ServiceError::StoreUnavailable(sqlx::Error::PoolTimedOut).into();
        assert_eq!(store.status, StatusCode::INTERNAL_SERVER_ERROR);
        // Driver details stay in the logs
        assert!(!store.message.contains("pool"));
    }
}

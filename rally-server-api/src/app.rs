use axum::response::IntoResponse;
use rally_server_app::domain::LedgerError;

pub struct ApiError(LedgerError);

impl IntoResponse for ApiError {
    fn into_response(self) -> axum::http::Response<axum::body::Body> {
        let status = match &self.0 {
            LedgerError::InvalidFields { .. } => axum::http::StatusCode::BAD_REQUEST,
            LedgerError::NotFound(_) => axum::http::StatusCode::NOT_FOUND,
            LedgerError::Conflict(_) => axum::http::StatusCode::CONFLICT,
            LedgerError::InsufficientFunds => axum::http::StatusCode::PAYMENT_REQUIRED,
            LedgerError::Storage(_) => axum::http::StatusCode::INTERNAL_SERVER_ERROR,
        };
        let body = match &self.0 {
            LedgerError::InvalidFields { fields } => serde_json::json!({
                "error": self.0.to_string(),
                "fields": fields,
            }),
            _ => serde_json::json!({ "error": self.0.to_string() }),
        };
        (status, axum::Json(body)).into_response()
    }
}

impl From<LedgerError> for ApiError {
    fn from(value: LedgerError) -> Self {
        ApiError(value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn status_of(err: LedgerError) -> axum::http::StatusCode {
        ApiError(err).into_response().status()
    }

    #[test]
    fn statuses_follow_the_error_kind() {
        assert_eq!(
            status_of(LedgerError::InvalidFields {
                fields: vec!["fname".to_string()]
            }),
            axum::http::StatusCode::BAD_REQUEST
        );
        assert_eq!(
            status_of(LedgerError::NotFound("player".to_string())),
            axum::http::StatusCode::NOT_FOUND
        );
        assert_eq!(
            status_of(LedgerError::Conflict("busy".to_string())),
            axum::http::StatusCode::CONFLICT
        );
        assert_eq!(
            status_of(LedgerError::InsufficientFunds),
            axum::http::StatusCode::PAYMENT_REQUIRED
        );
        assert_eq!(
            status_of(LedgerError::Storage("down".to_string())),
            axum::http::StatusCode::INTERNAL_SERVER_ERROR
        );
    }
}

use crate::errors::{error::ErrorResponse, generation::GenerationError, service::ServiceError};
use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use tracing::{error, warn};

#[derive(Debug)]
pub struct AppErrorHttp(pub ServiceError);

impl AppErrorHttp {
    pub fn log(&self) {
        match &self.0 {
            ServiceError::Generation(err) if err.is_client_error() => warn!("⚠️ {}", self.0),
            ServiceError::Validation(_) => warn!("📝 {}", self.0),
            _ => error!("🚨 {}", self.0),
        }
    }
}

impl From<ServiceError> for AppErrorHttp {
    fn from(err: ServiceError) -> Self {
        Self(err)
    }
}

impl From<GenerationError> for AppErrorHttp {
    fn from(err: GenerationError) -> Self {
        Self(ServiceError::Generation(err))
    }
}

impl IntoResponse for AppErrorHttp {
    fn into_response(self) -> Response {
        self.log();

        let (status, msg) = match self.0 {
            ServiceError::Generation(gen_err) => match gen_err {
                GenerationError::Encoding(err) => (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    format!("Failed to encode cards: {err}"),
                ),
                other => (StatusCode::BAD_REQUEST, other.to_string()),
            },

            ServiceError::Validation(errors) => {
                let error_msg = format!("Validation failed: {}", errors.join("; "));
                (StatusCode::BAD_REQUEST, error_msg)
            }

            ServiceError::InternalServerError(msg) => (StatusCode::INTERNAL_SERVER_ERROR, msg),
        };

        let body = Json(ErrorResponse {
            status: "error".to_string(),
            message: msg,
        });

        (status, body).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn client_errors_map_to_bad_request() {
        let cases = [
            GenerationError::InvalidPrefix("4x".into()),
            GenerationError::InvalidExpiry("3/".into()),
            GenerationError::NoPrefixResolved,
            GenerationError::UnsupportedFormat("xml".into()),
            GenerationError::InvalidCount {
                requested: 0,
                max: 10,
            },
        ];

        for err in cases {
            let response = AppErrorHttp::from(err).into_response();
            assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        }
    }

    #[test]
    fn internal_errors_map_to_server_error() {
        let response =
            AppErrorHttp(ServiceError::InternalServerError("lock poisoned".into())).into_response();
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }
}

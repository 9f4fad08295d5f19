use axum::{
    Json,
    extract::{FromRequest, Request},
};
use serde::de::DeserializeOwned;
use shared::errors::{AppErrorHttp, ServiceError, format_validation_errors};
use validator::Validate;

/// JSON body extractor that also runs `validator` rules before the handler sees the value.
#[derive(Debug, Clone, Copy, Default)]
pub struct SimpleValidatedJson<T>(pub T);

impl<T, S> FromRequest<S> for SimpleValidatedJson<T>
where
    T: DeserializeOwned + Validate,
    S: Send + Sync,
{
    type Rejection = AppErrorHttp;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let Json(value) = Json::<T>::from_request(req, state)
            .await
            .map_err(|rejection| {
                AppErrorHttp(ServiceError::Validation(vec![rejection.body_text()]))
            })?;

        value.validate().map_err(|errors| {
            AppErrorHttp(ServiceError::Validation(format_validation_errors(&errors)))
        })?;

        Ok(Self(value))
    }
}

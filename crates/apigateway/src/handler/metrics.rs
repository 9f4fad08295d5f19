use crate::state::AppState;
use axum::{Extension, http::header, response::IntoResponse, routing::get};
use prometheus_client::{encoding::text::encode, registry::Registry};
use shared::errors::{AppErrorHttp, ServiceError};
use std::sync::Arc;
use utoipa_axum::router::OpenApiRouter;

const OPENMETRICS_CONTENT_TYPE: &str = "application/openmetrics-text; version=1.0.0; charset=utf-8";

#[utoipa::path(
    get,
    path = "/metrics",
    tag = "Metrics",
    responses(
        (status = 200, description = "Prometheus metrics in OpenMetrics text format", body = String)
    )
)]
pub async fn metrics_handler(
    Extension(registry): Extension<Arc<Registry>>,
) -> Result<impl IntoResponse, AppErrorHttp> {
    let mut buffer = String::new();
    encode(&mut buffer, &registry).map_err(|e| {
        AppErrorHttp(ServiceError::InternalServerError(format!(
            "Failed to encode metrics: {e}"
        )))
    })?;

    Ok(([(header::CONTENT_TYPE, OPENMETRICS_CONTENT_TYPE)], buffer))
}

pub fn metrics_routes(app_state: Arc<AppState>) -> OpenApiRouter {
    OpenApiRouter::new()
        .route("/metrics", get(metrics_handler))
        .layer(Extension(app_state.registry.clone()))
}

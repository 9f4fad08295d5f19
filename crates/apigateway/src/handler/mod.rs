mod card;
mod metrics;

use crate::state::AppState;
use anyhow::Result;
use axum::{Router, extract::DefaultBodyLimit};
use shared::utils::shutdown_signal;
use std::sync::Arc;
use tokio::net::TcpListener;
use tower_http::limit::RequestBodyLimitLayer;
use tracing::info;
use utoipa::OpenApi;
use utoipa_axum::router::OpenApiRouter;
use utoipa_swagger_ui::SwaggerUi;

pub use self::card::card_routes;
pub use self::metrics::metrics_routes;

const REQUEST_BODY_LIMIT: usize = 64 * 1024;

#[derive(OpenApi)]
#[openapi(
    paths(
        card::get_card_types,
        card::generate_cards,
        card::export_cards,
        metrics::metrics_handler,
    ),
    tags(
        (name = "Card", description = "Synthetic card generation and export endpoints"),
        (name = "Metrics", description = "Prometheus metrics"),
    )
)]
struct ApiDoc;

pub struct AppRouter;

impl AppRouter {
    pub fn build(app_state: AppState) -> Router {
        let shared_state = Arc::new(app_state);

        let api_router = OpenApiRouter::with_openapi(ApiDoc::openapi())
            .merge(card_routes(shared_state.clone()))
            .merge(metrics_routes(shared_state.clone()));

        let router_with_layers = api_router
            .layer(DefaultBodyLimit::disable())
            .layer(RequestBodyLimitLayer::new(REQUEST_BODY_LIMIT));

        let (app_router, api) = router_with_layers.split_for_parts();

        app_router.merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", api))
    }

    pub async fn serve(port: u16, app_state: AppState) -> Result<()> {
        let app = Self::build(app_state);

        let addr = format!("0.0.0.0:{port}");
        let listener = TcpListener::bind(&addr).await?;

        info!("🚀 Server running on http://{}", listener.local_addr()?);
        info!("📖 Swagger UI: http://localhost:{port}/swagger-ui");

        axum::serve(listener, app)
            .with_graceful_shutdown(shutdown_signal())
            .await?;

        Ok(())
    }
}

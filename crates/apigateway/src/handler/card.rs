use crate::{middleware::SimpleValidatedJson, state::AppState};
use axum::{
    Extension, Json,
    http::header,
    response::IntoResponse,
    routing::{get, post},
};
use shared::{
    abstract_trait::card::service::{DynCardGeneratorService, DynCardSerializerService},
    domain::{
        requests::GenerationRequest,
        responses::{ApiResponse, CardTypeResponse, GeneratedCardsResponse},
    },
    errors::AppErrorHttp,
    model::{CardType, OutputFormat},
};
use std::sync::Arc;
use tracing::info;
use utoipa_axum::router::OpenApiRouter;

/// Generates the batch and encodes it. The format is checked before any card is generated.
fn generate_payload(
    generator: &DynCardGeneratorService,
    serializer: &DynCardSerializerService,
    req: &GenerationRequest,
) -> Result<(OutputFormat, usize, String), AppErrorHttp> {
    let format = req.output_format()?;
    let records = generator.generate_batch(req)?;
    let payload = serializer.serialize(&records, format)?;

    Ok((format, records.len(), payload))
}

#[utoipa::path(
    get,
    path = "/api/cards/types",
    tag = "Card",
    responses(
        (status = 200, description = "Card types and their default prefixes", body = ApiResponse<Vec<CardTypeResponse>>)
    )
)]
pub async fn get_card_types() -> impl IntoResponse {
    let data: Vec<CardTypeResponse> = CardType::ALL.into_iter().map(Into::into).collect();
    Json(ApiResponse::success("Card types retrieved successfully", data))
}

#[utoipa::path(
    post,
    path = "/api/cards/generate",
    tag = "Card",
    request_body = GenerationRequest,
    responses(
        (status = 200, description = "Generated and serialized cards", body = ApiResponse<GeneratedCardsResponse>),
        (status = 400, description = "Invalid generation request"),
        (status = 500, description = "Internal server error")
    )
)]
pub async fn generate_cards(
    Extension(generator): Extension<DynCardGeneratorService>,
    Extension(serializer): Extension<DynCardSerializerService>,
    SimpleValidatedJson(body): SimpleValidatedJson<GenerationRequest>,
) -> Result<impl IntoResponse, AppErrorHttp> {
    let (format, count, payload) = generate_payload(&generator, &serializer, &body)?;

    info!("✅ Generated {count} cards as {format}");

    Ok(Json(ApiResponse::success(
        "Cards generated successfully",
        GeneratedCardsResponse {
            format,
            count,
            payload,
        },
    )))
}

#[utoipa::path(
    post,
    path = "/api/cards/export",
    tag = "Card",
    request_body = GenerationRequest,
    responses(
        (status = 200, description = "Serialized cards as a downloadable file", body = String),
        (status = 400, description = "Invalid generation request"),
        (status = 500, description = "Internal server error")
    )
)]
pub async fn export_cards(
    Extension(generator): Extension<DynCardGeneratorService>,
    Extension(serializer): Extension<DynCardSerializerService>,
    SimpleValidatedJson(body): SimpleValidatedJson<GenerationRequest>,
) -> Result<impl IntoResponse, AppErrorHttp> {
    let (format, count, payload) = generate_payload(&generator, &serializer, &body)?;

    info!("📤 Exporting {count} cards as {format}");

    let disposition = format!(
        "attachment; filename=\"cards.{}\"",
        format.file_extension()
    );

    Ok((
        [
            (header::CONTENT_TYPE, format.content_type().to_string()),
            (header::CONTENT_DISPOSITION, disposition),
        ],
        payload,
    ))
}

pub fn card_routes(app_state: Arc<AppState>) -> OpenApiRouter {
    OpenApiRouter::new()
        .route("/api/cards/types", get(get_card_types))
        .route("/api/cards/generate", post(generate_cards))
        .route("/api/cards/export", post(export_cards))
        .layer(Extension(app_state.di_container.card_generator.clone()))
        .layer(Extension(app_state.di_container.card_serializer.clone()))
}

use crate::infra::AppState;
use axum::http::{header, StatusCode};
use axum::response::IntoResponse;
use axum::routing::{get, post};
use axum::{Extension, Json, Router};
use patent_rubric::drafts::{DraftFormat, DraftImporter};
use patent_rubric::error::AppError;
use patent_rubric::report::ScoreReport;
use patent_rubric::rubric::PatentDocumentView;
use serde::{Deserialize, Serialize};
use serde_json::json;
use tracing::info;

#[derive(Debug, Deserialize)]
pub(crate) struct ScoreRequest {
    #[serde(default)]
    pub(crate) document: Option<PatentDocumentView>,
    #[serde(default)]
    pub(crate) draft_text: Option<String>,
    #[serde(default = "include_breakdown_default")]
    pub(crate) include_breakdown: bool,
}

fn include_breakdown_default() -> bool {
    true
}

#[derive(Debug, Serialize)]
pub(crate) struct ScoreResponse {
    pub(crate) source: DocumentSource,
    pub(crate) report: ScoreReport,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub(crate) enum DocumentSource {
    Document,
    DraftText,
}

pub(crate) fn rubric_routes() -> Router {
    Router::new()
        .route("/health", get(healthcheck))
        .route("/ready", get(readiness_endpoint))
        .route("/metrics", get(metrics_endpoint))
        .route("/api/v1/rubric/score", post(score_endpoint))
}

pub(crate) async fn healthcheck() -> Json<serde_json::Value> {
    Json(json!({ "status": "ok" }))
}

pub(crate) async fn readiness_endpoint(Extension(state): Extension<AppState>) -> impl IntoResponse {
    if state.is_ready() {
        (StatusCode::OK, Json(json!({ "status": "ready" })))
    } else {
        (
            StatusCode::SERVICE_UNAVAILABLE,
            Json(json!({ "status": "initializing" })),
        )
    }
}

pub(crate) async fn metrics_endpoint(Extension(state): Extension<AppState>) -> impl IntoResponse {
    (
        StatusCode::OK,
        [(header::CONTENT_TYPE, "text/plain; version=0.0.4")],
        state.metrics.render(),
    )
}

pub(crate) async fn score_endpoint(
    Extension(state): Extension<AppState>,
    Json(payload): Json<ScoreRequest>,
) -> Result<Json<ScoreResponse>, AppError> {
    let ScoreRequest {
        document,
        draft_text,
        include_breakdown,
    } = payload;

    let (document, source) = match (document, draft_text) {
        (Some(document), _) => (document, DocumentSource::Document),
        (None, Some(text)) => (
            DraftImporter::from_str(&text, DraftFormat::Text)?,
            DocumentSource::DraftText,
        ),
        (None, None) => {
            return Err(AppError::InvalidRequest(
                "either `document` or `draft_text` is required".to_string(),
            ))
        }
    };

    let result = state.scorer.score(&document);
    let mut report = ScoreReport::from_result(&result, Some(&document.title));
    if !include_breakdown {
        report = report.without_breakdown();
    }

    let scored = state.record_scored();
    info!(
        score = report.score,
        grade = %report.grade,
        ?source,
        scored,
        "scored draft"
    );

    Ok(Json(ScoreResponse { source, report }))
}

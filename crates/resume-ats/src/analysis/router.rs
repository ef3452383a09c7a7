use std::sync::Arc;

use axum::{extract::State, routing::post, Json, Router};
use tracing::warn;

use super::document::{ExtractedDocument, ExtractionError};
use super::{AnalysisOutcome, ResumeAnalyzer};
use crate::error::AppError;

/// Router exposing the resume analysis endpoint.
pub fn analysis_router(analyzer: Arc<ResumeAnalyzer>) -> Router {
    Router::new()
        .route("/api/v1/resume/analyze", post(analyze_handler))
        .with_state(analyzer)
}

pub(crate) async fn analyze_handler(
    State(analyzer): State<Arc<ResumeAnalyzer>>,
    Json(document): Json<ExtractedDocument>,
) -> Result<Json<AnalysisOutcome>, AppError> {
    let outcome = analyzer.analyze(&document).map_err(|error| {
        if matches!(error, ExtractionError::UnsupportedFormat { .. }) {
            warn!(file_name = %document.file_name, "rejected upload with unsupported file type");
        }
        AppError::from(error)
    })?;

    Ok(Json(outcome))
}

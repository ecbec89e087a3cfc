use axum::{
    extract::{
        rejection::{JsonRejection, QueryRejection},
        Query, State,
    },
    http::header,
    response::{IntoResponse, Response},
    Json,
};
use dnsdiff_application::services::{to_csv, to_text, ExportFormat};
use dnsdiff_domain::{BatchReport, DomainError};
use tracing::{info, instrument};

use crate::{
    dto::{BatchRequestDto, ExportQuery},
    errors::ApiError,
    state::AppState,
};

const CSV_FILENAME: &str = "dns_results.csv";
const TEXT_FILENAME: &str = "dns_results.txt";

async fn execute(
    state: &AppState,
    payload: Result<Json<BatchRequestDto>, JsonRejection>,
) -> Result<BatchReport, ApiError> {
    let Json(dto) = payload.map_err(|e| DomainError::InvalidRequestBody(e.body_text()))?;
    let request = dto.into_request()?;
    Ok(state.batch.execute(request).await?)
}

#[instrument(skip(state, payload))]
pub async fn run_batch(
    State(state): State<AppState>,
    payload: Result<Json<BatchRequestDto>, JsonRejection>,
) -> Result<Json<BatchReport>, ApiError> {
    let report = execute(&state, payload).await?;
    Ok(Json(report))
}

#[instrument(skip(state, query, payload))]
pub async fn export_batch(
    State(state): State<AppState>,
    query: Result<Query<ExportQuery>, QueryRejection>,
    payload: Result<Json<BatchRequestDto>, JsonRejection>,
) -> Result<Response, ApiError> {
    let Query(params) = query.map_err(|_| DomainError::InvalidRequestUrl)?;
    let format: ExportFormat = params.format.as_deref().unwrap_or("csv").parse()?;

    let report = execute(&state, payload).await?;

    let (body, filename) = match format {
        ExportFormat::Csv => (to_csv(&report.results)?, CSV_FILENAME),
        ExportFormat::Text => (to_text(&report.results), TEXT_FILENAME),
    };

    info!(
        format = ?format,
        domains = report.results.len(),
        bytes = body.len(),
        "Batch exported"
    );

    Ok((
        [
            (header::CONTENT_TYPE, format.content_type().to_string()),
            (
                header::CONTENT_DISPOSITION,
                format!("attachment; filename=\"{}\"", filename),
            ),
        ],
        body,
    )
        .into_response())
}

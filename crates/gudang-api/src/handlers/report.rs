//! Server-side report rendering endpoint.

use std::sync::Arc;

use axum::{
    extract::{Path, State},
    http::header,
    response::{IntoResponse, Response},
};
use uuid::Uuid;

use gudang_core::AppError;
use gudang_report::REPORT_FILE_NAME;

use crate::error::{ErrorResponse, HttpAppError};
use crate::state::AppState;

#[utoipa::path(
    get,
    path = "/api/v0/loader-requests/{id}/report",
    tag = "loader-requests",
    params(("id" = Uuid, Path, description = "Record id")),
    responses(
        (status = 200, description = "Rendered report", content_type = "application/pdf"),
        (status = 404, description = "Record not found", body = ErrorResponse),
        (status = 500, description = "Report rendering failed", body = ErrorResponse)
    )
)]
pub async fn download_report(
    State(state): State<Arc<AppState>>,
    Path(id): Path<Uuid>,
) -> Result<Response, HttpAppError> {
    let record = state
        .repository
        .get_by_id(id)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("Loader request {} not found", id)))?;

    let pdf = state
        .report_generator
        .generate(&record)
        .await
        .map_err(AppError::from)?;

    let headers = [
        (header::CONTENT_TYPE, "application/pdf".to_string()),
        (
            header::CONTENT_DISPOSITION,
            format!("attachment; filename=\"{}\"", REPORT_FILE_NAME),
        ),
    ];
    Ok((headers, pdf).into_response())
}

//! Loader-request record endpoints.

use std::sync::Arc;

use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use serde::Serialize;
use utoipa::ToSchema;
use uuid::Uuid;

use gudang_core::models::{CreateLoaderRequest, LoaderRequestResponse};
use gudang_core::AppError;

use crate::error::{ErrorResponse, HttpAppError};
use crate::state::AppState;

#[derive(Debug, Serialize, ToSchema)]
pub struct CreateResponse {
    pub id: Uuid,
    pub success: bool,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct ListResponse {
    pub data: Vec<LoaderRequestResponse>,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct GetResponse {
    pub data: LoaderRequestResponse,
}

#[utoipa::path(
    post,
    path = "/api/v0/loader-requests",
    tag = "loader-requests",
    request_body = CreateLoaderRequest,
    responses(
        (status = 201, description = "Record created", body = CreateResponse),
        (status = 400, description = "Invalid input", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    )
)]
pub async fn create_loader_request(
    State(state): State<Arc<AppState>>,
    Json(payload): Json<CreateLoaderRequest>,
) -> Result<(StatusCode, Json<CreateResponse>), HttpAppError> {
    let record = state.repository.create(payload).await?;
    Ok((
        StatusCode::CREATED,
        Json(CreateResponse {
            id: record.id,
            success: true,
        }),
    ))
}

#[utoipa::path(
    get,
    path = "/api/v0/loader-requests",
    tag = "loader-requests",
    responses(
        (status = 200, description = "All records, newest first", body = ListResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    )
)]
pub async fn list_loader_requests(
    State(state): State<Arc<AppState>>,
) -> Result<Json<ListResponse>, HttpAppError> {
    let records = state.repository.list_all().await?;
    Ok(Json(ListResponse {
        data: records.into_iter().map(Into::into).collect(),
    }))
}

#[utoipa::path(
    get,
    path = "/api/v0/loader-requests/{id}",
    tag = "loader-requests",
    params(("id" = Uuid, Path, description = "Record id")),
    responses(
        (status = 200, description = "The record", body = GetResponse),
        (status = 404, description = "Record not found", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    )
)]
pub async fn get_loader_request(
    State(state): State<Arc<AppState>>,
    Path(id): Path<Uuid>,
) -> Result<Json<GetResponse>, HttpAppError> {
    let record = state
        .repository
        .get_by_id(id)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("Loader request {} not found", id)))?;
    Ok(Json(GetResponse {
        data: record.into(),
    }))
}

//! Company-logo upload endpoint.

use std::sync::Arc;

use axum::{
    extract::{Multipart, State},
    Json,
};
use serde::Serialize;
use utoipa::ToSchema;

use gudang_core::AppError;

use crate::error::{ErrorResponse, HttpAppError};
use crate::state::AppState;

#[derive(Debug, Serialize, ToSchema)]
pub struct LogoResponse {
    pub success: bool,
    pub message: String,
    pub path: String,
}

#[utoipa::path(
    post,
    path = "/api/v0/logo",
    tag = "logo",
    responses(
        (status = 200, description = "Logo stored", body = LogoResponse),
        (status = 400, description = "No logo file provided", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    )
)]
pub async fn upload_logo(
    State(state): State<Arc<AppState>>,
    mut multipart: Multipart,
) -> Result<Json<LogoResponse>, HttpAppError> {
    // Validate the multipart payload before the asset store is touched
    let mut data: Option<Vec<u8>> = None;
    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| AppError::BadRequest(format!("Invalid multipart payload: {}", e)))?
    {
        if field.name() == Some("logo") {
            let bytes = field
                .bytes()
                .await
                .map_err(|e| AppError::BadRequest(format!("Failed to read logo field: {}", e)))?;
            data = Some(bytes.to_vec());
            break;
        }
    }
    let data = data.ok_or_else(|| AppError::InvalidInput("No logo file provided".to_string()))?;
    if data.is_empty() {
        return Err(AppError::InvalidInput("Logo file is empty".to_string()).into());
    }

    let path = state.logo_store.save_logo(data).await?;
    Ok(Json(LogoResponse {
        success: true,
        message: "Logo updated".to_string(),
        path,
    }))
}

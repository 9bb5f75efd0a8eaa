//! Transaction signing handler

use axum::extract::{Query, State};
use axum::Json;
use base64::{engine::general_purpose::STANDARD, Engine};
use serde::{Deserialize, Serialize};
use std::sync::Arc;

use crate::api::error::ApiError;
use crate::api::ApiResponse;

use super::{parse_device_id, AppState, DeviceIdQuery};

/// Request body for signing
#[derive(Debug, Deserialize)]
pub struct SignRequest {
    pub data: Option<String>,
}

/// Response from a successful sign
#[derive(Debug, Serialize)]
pub struct SignResponse {
    /// Base64 of the raw signature bytes
    pub signature: String,
    /// The exact payload string that was signed
    pub signed_data: String,
}

/// Sign a transaction with the device's private key
///
/// POST /api/v0/device/sign?deviceId=<uuid> with body `{"data": "<string>"}`
pub async fn sign_transaction(
    State(state): State<Arc<AppState>>,
    Query(query): Query<DeviceIdQuery>,
    Json(request): Json<SignRequest>,
) -> Result<Json<ApiResponse<SignResponse>>, ApiError> {
    let id = parse_device_id(query.device_id)?;
    let data = request
        .data
        .ok_or_else(|| ApiError::BadRequest("Missing required parameter: data".into()))?;

    let cancel = state.shutdown.child_token();
    let artifact = state.service.sign_transaction(id, &data, cancel).await?;

    Ok(Json(ApiResponse {
        data: SignResponse {
            signature: STANDARD.encode(&artifact.signature),
            signed_data: artifact.signed_payload,
        },
    }))
}

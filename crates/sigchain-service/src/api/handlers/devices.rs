//! Device provisioning and retrieval handlers

use axum::extract::{Query, State};
use axum::http::StatusCode;
use axum::Json;
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use uuid::Uuid;

use sigchain_core::{Algorithm, Device};

use crate::api::error::ApiError;
use crate::api::ApiResponse;

use super::{parse_device_id, AppState, DeviceIdQuery};

/// Query parameters for device creation
#[derive(Debug, Deserialize)]
pub struct CreateDeviceParams {
    pub algorithm: Option<String>,
    pub label: Option<String>,
}

/// Response from device creation
///
/// Carries both keys so the caller can export them immediately; this is the
/// only time the service hands out the private key unprompted.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateDeviceResponse {
    pub id: Uuid,
    pub algorithm: String,
    pub label: String,
    pub public_key: String,
    pub private_key: String,
}

/// A device as returned by the retrieval endpoints
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DeviceResponse {
    pub id: Uuid,
    pub algorithm: String,
    pub label: String,
    pub public_key: String,
    pub private_key: String,
    pub signature_counter: u64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub last_signature: Option<String>,
}

impl DeviceResponse {
    fn from_device(device: &Device) -> Result<Self, ApiError> {
        Ok(Self {
            id: device.id,
            algorithm: device.algorithm().to_string(),
            label: device.label.clone(),
            public_key: device
                .keys
                .public_key_pem()
                .map_err(|e| ApiError::Internal(e.to_string()))?,
            private_key: device
                .keys
                .private_key_pem()
                .map_err(|e| ApiError::Internal(e.to_string()))?,
            signature_counter: device.signature_counter,
            last_signature: if device.last_signature.is_empty() {
                None
            } else {
                Some(device.last_signature.clone())
            },
        })
    }
}

/// Response from the list endpoint
#[derive(Debug, Serialize)]
pub struct ListDevicesResponse {
    pub devices: Vec<DeviceResponse>,
    pub total: usize,
}

/// Provision a new signature device
///
/// POST /api/v0/device/new-device?algorithm=<ECC|RSA>&label=<string>
pub async fn create_device(
    State(state): State<Arc<AppState>>,
    Query(params): Query<CreateDeviceParams>,
) -> Result<(StatusCode, Json<ApiResponse<CreateDeviceResponse>>), ApiError> {
    let algorithm = params
        .algorithm
        .ok_or_else(|| ApiError::BadRequest("Missing required parameter: algorithm".into()))?;
    let algorithm: Algorithm = algorithm
        .parse()
        .map_err(|_| ApiError::BadRequest("Invalid algorithm. Must be 'ECC' or 'RSA'".into()))?;
    let label = params.label.unwrap_or_default();

    let device = state.service.create_device(algorithm, label).await?;

    let response = CreateDeviceResponse {
        id: device.id,
        algorithm: device.algorithm().to_string(),
        label: device.label.clone(),
        public_key: device
            .keys
            .public_key_pem()
            .map_err(|e| ApiError::Internal(e.to_string()))?,
        private_key: device
            .keys
            .private_key_pem()
            .map_err(|e| ApiError::Internal(e.to_string()))?,
    };

    Ok((StatusCode::CREATED, Json(ApiResponse { data: response })))
}

/// Fetch a single device
///
/// GET /api/v0/device/?deviceId=<uuid>
pub async fn get_device(
    State(state): State<Arc<AppState>>,
    Query(query): Query<DeviceIdQuery>,
) -> Result<Json<ApiResponse<DeviceResponse>>, ApiError> {
    let id = parse_device_id(query.device_id)?;
    let device = state.service.get_device(id).await?;

    Ok(Json(ApiResponse {
        data: DeviceResponse::from_device(&device)?,
    }))
}

/// List all devices
///
/// GET /api/v0/device/all
pub async fn list_devices(
    State(state): State<Arc<AppState>>,
) -> Result<Json<ApiResponse<ListDevicesResponse>>, ApiError> {
    let devices = state.service.list_devices().await?;

    let devices = devices
        .iter()
        .map(DeviceResponse::from_device)
        .collect::<Result<Vec<_>, _>>()?;
    let total = devices.len();

    Ok(Json(ApiResponse {
        data: ListDevicesResponse { devices, total },
    }))
}

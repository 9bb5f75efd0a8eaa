//! API request handlers

pub mod devices;
pub mod sign;

use serde::Deserialize;
use tokio_util::sync::CancellationToken;
use uuid::Uuid;

use crate::api::error::ApiError;
use crate::service::DeviceService;

pub use devices::{
    create_device, get_device, list_devices, CreateDeviceResponse, DeviceResponse,
    ListDevicesResponse,
};
pub use sign::{sign_transaction, SignRequest, SignResponse};

/// Application state shared across handlers
pub struct AppState {
    /// The signing core
    pub service: DeviceService,
    /// Process-wide shutdown token; parents the per-request cancellation
    /// tokens handed to the core
    pub shutdown: CancellationToken,
}

/// Query parameters carrying a device id
#[derive(Debug, Deserialize)]
pub struct DeviceIdQuery {
    #[serde(rename = "deviceId")]
    pub device_id: Option<String>,
}

/// Validate the `deviceId` query parameter
pub(crate) fn parse_device_id(raw: Option<String>) -> Result<Uuid, ApiError> {
    let raw = raw
        .ok_or_else(|| ApiError::BadRequest("Missing required parameter: deviceId".into()))?;
    Uuid::parse_str(&raw)
        .map_err(|_| ApiError::BadRequest("Invalid deviceId. Must be a valid UUID".into()))
}

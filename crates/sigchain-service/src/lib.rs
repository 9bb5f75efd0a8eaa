//! Signature Device Service
//!
//! HTTP service that provisions signing devices holding asymmetric key
//! pairs and produces a tamper-evident chain of signatures per device:
//! - Every signature binds its input to a strictly increasing counter and
//!   to the previous signature
//! - Signs on the same device are serialized by a per-device lock, so the
//!   counter/link relationship holds under concurrent load
//! - Device state lives behind a repository trait; the default backend is
//!   in-memory
//!
//! ## API Endpoints
//!
//! - `POST /api/v0/device/new-device?algorithm=<ECC|RSA>&label=<string>` -
//!   Provision a device and return its exported keys
//! - `POST /api/v0/device/sign?deviceId=<uuid>` - Sign the `data` field of
//!   the JSON body and advance the device's chain
//! - `GET /api/v0/device/?deviceId=<uuid>` - Fetch one device
//! - `GET /api/v0/device/all` - List all devices
//! - `GET /api/v0/health` - Liveness check

pub mod api;
pub mod service;
pub mod storage;

pub use api::create_router;
pub use api::handlers::AppState;
pub use service::{DeviceService, ServiceError};
pub use storage::{DeviceRepository, MemoryRepository, StorageError};

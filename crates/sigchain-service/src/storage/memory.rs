//! In-memory device repository
//!
//! Default storage implementation over a read/write-locked hashmap.
//! Suitable for development and single-instance deployments; data is lost
//! on restart.

use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::RwLock;
use tracing::info;
use uuid::Uuid;

use sigchain_core::Device;

use super::{DeviceRepository, StorageError};

/// In-memory repository implementation
#[derive(Debug, Default)]
pub struct MemoryRepository {
    devices: RwLock<HashMap<Uuid, Device>>,
}

impl MemoryRepository {
    /// Create an empty in-memory repository
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl DeviceRepository for MemoryRepository {
    async fn create(&self, device: Device) -> Result<(), StorageError> {
        let mut devices = self.devices.write().unwrap();
        info!(device_id = %device.id, algorithm = %device.algorithm(), "storing device");
        devices.insert(device.id, device);
        Ok(())
    }

    async fn find(&self, id: Uuid) -> Result<Device, StorageError> {
        let devices = self.devices.read().unwrap();
        devices.get(&id).cloned().ok_or(StorageError::NotFound)
    }

    async fn list(&self) -> Result<Vec<Device>, StorageError> {
        let devices = self.devices.read().unwrap();
        Ok(devices.values().cloned().collect())
    }

    async fn post_sign_update(
        &self,
        id: Uuid,
        last_signature: String,
    ) -> Result<(), StorageError> {
        // Counter and last signature move together inside one write-lock
        // critical section.
        let mut devices = self.devices.write().unwrap();
        let device = devices.get_mut(&id).ok_or(StorageError::NotFound)?;
        device.signature_counter += 1;
        device.last_signature = last_signature;
        Ok(())
    }
}

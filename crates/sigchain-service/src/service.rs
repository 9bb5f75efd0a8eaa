//! The signing core: device provisioning and the chained-signature state
//! machine
//!
//! Each device signs strictly serially. `DeviceService` keeps one async
//! mutex per device id and holds it across the whole
//! read-assemble-sign-update sequence, so no two concurrent signs on the
//! same device can interleave their reads of `(counter, last_signature)`
//! with their writes. The lock map itself sits behind a plain mutex that is
//! only held for the lookup.

use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use base64::{engine::general_purpose::STANDARD, Engine};
use thiserror::Error;
use tokio_util::sync::CancellationToken;
use tracing::info;
use uuid::Uuid;

use sigchain_core::{Algorithm, Device, KeyPair, SigchainError, SignedArtifact};

use crate::storage::{DeviceRepository, StorageError};

/// Errors surfaced by the signing core
#[derive(Error, Debug)]
pub enum ServiceError {
    #[error("device not found")]
    DeviceNotFound,

    #[error(transparent)]
    Crypto(#[from] SigchainError),

    #[error("repository failure: {0}")]
    Repository(String),

    #[error("operation cancelled")]
    Cancelled,
}

impl From<StorageError> for ServiceError {
    fn from(err: StorageError) -> Self {
        match err {
            StorageError::NotFound => ServiceError::DeviceNotFound,
            StorageError::Backend(msg) => ServiceError::Repository(msg),
        }
    }
}

/// Orchestrates the repository and the key pairs behind the four device
/// operations
pub struct DeviceService {
    repo: Arc<dyn DeviceRepository>,
    device_locks: Mutex<HashMap<Uuid, Arc<tokio::sync::Mutex<()>>>>,
}

impl DeviceService {
    /// Create a service over the given repository
    pub fn new(repo: Arc<dyn DeviceRepository>) -> Self {
        Self {
            repo,
            device_locks: Mutex::new(HashMap::new()),
        }
    }

    /// Provision a new signature device
    ///
    /// Mints a fresh id, generates a key pair for the algorithm, stores the
    /// device in its initial chain state, and registers its lock.
    pub async fn create_device(
        &self,
        algorithm: Algorithm,
        label: String,
    ) -> Result<Device, ServiceError> {
        let id = Uuid::new_v4();
        let keys = KeyPair::generate(algorithm)?;
        let device = Device::new(id, label, keys);

        self.repo.create(device.clone()).await?;
        self.device_lock(id);

        info!(device_id = %id, algorithm = %algorithm, "created signature device");

        Ok(device)
    }

    /// Sign `data` with the device's key and advance its signature chain
    ///
    /// Cancellation is honored only until the device lock is acquired; once
    /// the sequence is underway it runs to completion so the chain state
    /// never detaches from the emitted signature. A failed post-sign update
    /// is reported as a repository failure and leaves the chain unadvanced;
    /// the caller may retry.
    pub async fn sign_transaction(
        &self,
        id: Uuid,
        data: &str,
        cancel: CancellationToken,
    ) -> Result<SignedArtifact, ServiceError> {
        let lock = self.device_lock(id);
        let _guard = tokio::select! {
            biased;
            _ = cancel.cancelled() => return Err(ServiceError::Cancelled),
            guard = lock.lock() => guard,
        };

        let device = self.repo.find(id).await?;
        let payload = device.signing_payload(data);
        let signature = device.keys.sign(&payload)?;

        self.repo
            .post_sign_update(id, STANDARD.encode(&signature))
            .await?;

        info!(
            device_id = %id,
            counter = device.signature_counter,
            "signed transaction"
        );

        Ok(SignedArtifact {
            signature,
            signed_payload: payload,
        })
    }

    /// Fetch a snapshot of a device
    pub async fn get_device(&self, id: Uuid) -> Result<Device, ServiceError> {
        Ok(self.repo.find(id).await?)
    }

    /// Snapshots of all devices
    pub async fn list_devices(&self) -> Result<Vec<Device>, ServiceError> {
        Ok(self.repo.list().await?)
    }

    /// Look up the device's lock, lazily inserting one
    ///
    /// Lazy insertion covers devices that exist in the repository without a
    /// registered lock; serialization only requires that all signers for an
    /// id agree on one mutex, not that it was created with the device.
    fn device_lock(&self, id: Uuid) -> Arc<tokio::sync::Mutex<()>> {
        let mut locks = self.device_locks.lock().unwrap();
        locks.entry(id).or_default().clone()
    }
}

//! Storage abstraction for signature devices
//!
//! The signing core consumes persistence through this trait; the default
//! backend is in-memory and device state does not survive a restart.
//! Implementations must be thread-safe and support concurrent access.

pub mod memory;

pub use memory::MemoryRepository;

use async_trait::async_trait;
use std::fmt::Debug;
use uuid::Uuid;

use sigchain_core::Device;

/// Error type for repository operations
#[derive(Debug, thiserror::Error)]
pub enum StorageError {
    #[error("device not found")]
    NotFound,

    #[error("storage backend error: {0}")]
    Backend(String),
}

/// Repository contract for device records
///
/// `find` and `list` return value snapshots, never references into the
/// store; callers cannot mutate stored records through them.
#[async_trait]
pub trait DeviceRepository: Send + Sync + Debug {
    /// Store a device under its id
    ///
    /// An existing record with the same id is replaced; ids are minted
    /// fresh by the caller.
    async fn create(&self, device: Device) -> Result<(), StorageError>;

    /// Fetch a snapshot of a device by id
    async fn find(&self, id: Uuid) -> Result<Device, StorageError>;

    /// Snapshots of all devices, in no particular order
    async fn list(&self) -> Result<Vec<Device>, StorageError>;

    /// Advance a device's chain state: increment the counter and store the
    /// latest signature as one atomic update
    ///
    /// Observers see either both fields updated or neither.
    async fn post_sign_update(
        &self,
        id: Uuid,
        last_signature: String,
    ) -> Result<(), StorageError>;
}

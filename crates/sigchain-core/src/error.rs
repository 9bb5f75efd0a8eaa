//! Error types for the signature device core

use thiserror::Error;

/// Result type alias using SigchainError
pub type Result<T> = std::result::Result<T, SigchainError>;

/// Errors produced by key generation, signing, and key export
#[derive(Error, Debug)]
pub enum SigchainError {
    /// Algorithm tag outside the supported set
    #[error("unsupported algorithm: {0}")]
    UnsupportedAlgorithm(String),

    /// Key pair generation failed
    #[error("key generation failed: {0}")]
    KeyGeneration(String),

    /// Signing failed, including a signature that did not verify against
    /// the device's own public key
    #[error("signing failed: {0}")]
    Signing(String),

    /// Key material could not be encoded to its portable text form
    #[error("key encoding failed: {0}")]
    KeyEncoding(String),
}

//! The signature device entity and its chain state

use base64::{engine::general_purpose::STANDARD, Engine};
use uuid::Uuid;

use crate::crypto::{Algorithm, KeyPair};

/// A signature device: one key pair plus its signature chain state
///
/// The chain state `(signature_counter, last_signature)` only ever advances
/// through the repository's post-sign update, as one atomic step.
/// `last_signature` is empty exactly while `signature_counter` is 0.
#[derive(Debug, Clone)]
pub struct Device {
    /// Globally unique identifier, assigned at creation
    pub id: Uuid,
    /// Free-form human-readable text
    pub label: String,
    /// Key material; the variant tag is the device's algorithm
    pub keys: KeyPair,
    /// Number of signatures successfully emitted by this device
    pub signature_counter: u64,
    /// Base64 of the most recent signature's raw bytes
    pub last_signature: String,
}

impl Device {
    /// Create a device in its initial chain state
    pub fn new(id: Uuid, label: impl Into<String>, keys: KeyPair) -> Self {
        Self {
            id,
            label: label.into(),
            keys,
            signature_counter: 0,
            last_signature: String::new(),
        }
    }

    /// The device's algorithm, read off the key pair tag
    pub fn algorithm(&self) -> Algorithm {
        self.keys.algorithm()
    }

    /// Assemble the payload string for the next signature
    ///
    /// Format: `"<counter>_<data>_<tail>"`, where the counter is the value
    /// before the increment and the tail links the chain: base64 of the
    /// device's 16 raw UUID bytes for the first signature, the previous
    /// signature's base64 afterwards.
    pub fn signing_payload(&self, data: &str) -> String {
        let tail = if self.signature_counter == 0 {
            STANDARD.encode(self.id.as_bytes())
        } else {
            self.last_signature.clone()
        };
        format!("{}_{}_{}", self.signature_counter, data, tail)
    }
}

/// The outcome of one signing operation; never persisted
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SignedArtifact {
    /// Raw signature bytes as produced by the algorithm
    pub signature: Vec<u8>,
    /// The exact string that was hashed and signed
    pub signed_payload: String,
}

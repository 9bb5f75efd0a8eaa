//! # Sigchain Core
//!
//! Core types and cryptographic primitives for the signature device service.
//!
//! ## Key Concepts
//!
//! - **Device**: a holder of one asymmetric key pair plus its signature
//!   chain state (counter + last signature)
//! - **Signature chain**: every signature a device emits binds the signed
//!   input to a strictly increasing counter and to the previous signature,
//!   so a verifier replaying the chain detects reordering, insertion, or
//!   omission of any link
//! - **Signed payload**: the exact string `"<counter>_<data>_<tail>"`
//!   submitted to the signing primitive; for counter 0 the tail is the
//!   base64 of the device's raw UUID bytes, afterwards the base64 of the
//!   previous signature
//!
//! ## Supported algorithms
//!
//! - ECDSA over NIST P-256 with SHA-256, signatures as ASN.1 DER
//! - RSASSA-PKCS1-v1_5 with SHA-256, 2048-bit keys

pub mod crypto;
pub mod device;
pub mod error;

pub use crypto::{Algorithm, KeyPair};
pub use device::{Device, SignedArtifact};
pub use error::{Result, SigchainError};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

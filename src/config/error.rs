//! Snapshot error types.

use crate::builder::BuildError;
use thiserror::Error;

/// Errors that can occur while encoding, decoding or rebuilding a snapshot
#[derive(Debug, Error)]
pub enum SnapshotError {
    /// Serialization to JSON or binary format failed
    #[error("Serialization failed: {0}")]
    SerializationFailed(String),

    /// Deserialization from JSON or binary format failed
    #[error("Deserialization failed: {0}")]
    DeserializationFailed(String),

    /// Snapshot version is not supported by this version
    #[error("Unsupported snapshot version {found}, supported: {supported}")]
    UnsupportedVersion { found: u32, supported: u32 },

    /// The decoded configuration does not describe a valid period
    #[error(transparent)]
    Invalid(#[from] BuildError),
}
